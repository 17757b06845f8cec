//! News text editor panel

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use newslens_core::validate::MAX_TEXT_CHARS;

use crate::model::App;
use crate::view::theme::{colors, Styles};

const PLACEHOLDER: &str = "Paste or type the news article you want to analyze...";

/// Render the text area with its character counter and inline errors
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();

    let border_style = if app.validation_errors.is_empty() {
        Style::default().fg(c.border_focused)
    } else {
        Style::default().fg(c.error)
    };

    let counter = format!("{}/{}", app.char_count(), MAX_TEXT_CHARS);
    let counter_style = if app.char_count() > MAX_TEXT_CHARS {
        Style::default().fg(c.error)
    } else {
        Style::default().fg(c.muted)
    };

    let block = Block::default()
        .title(" Enter News Article Text ")
        .title_style(Styles::title())
        .title_bottom(Line::from(Span::styled(format!(" {counter} "), counter_style)).right_aligned())
        .borders(Borders::ALL)
        .border_style(border_style);

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line> = Vec::new();

    if app.input.is_empty() {
        lines.push(Line::styled(PLACEHOLDER, Style::default().fg(c.muted)));
    } else {
        let dim = app.analysis.is_loading();
        for raw in app.input.split('\n') {
            let style = if dim {
                Style::default().fg(c.muted)
            } else {
                Style::default().fg(c.fg)
            };
            lines.push(Line::styled(raw.to_string(), style));
        }
    }

    // Inline validation messages under the text
    if !app.validation_errors.is_empty() {
        lines.push(Line::from(""));
        for error in &app.validation_errors {
            lines.push(Line::styled(
                format!("✗ {}", error.message),
                Style::default().fg(c.error),
            ));
        }
    }

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((scroll_offset(app, inner), 0));
    frame.render_widget(paragraph, inner);
}

/// Keep the tail of the text visible while typing
fn scroll_offset(app: &App, inner: Rect) -> u16 {
    if inner.height == 0 || inner.width == 0 {
        return 0;
    }

    let width = usize::from(inner.width);
    let mut rows = 0usize;
    for raw in app.input.split('\n') {
        // Rows this logical line occupies once wrapped
        rows += raw.width() / width + 1;
    }
    rows += app.validation_errors.len().saturating_mul(2);

    let visible = usize::from(inner.height);
    u16::try_from(rows.saturating_sub(visible)).unwrap_or(u16::MAX)
}
