//! Bottom status bar

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::model::App;
use crate::view::theme::Styles;

/// Render key hints and the current status message
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let hints = get_hints(app);

    let mut spans = Vec::new();
    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    if let Some(ref msg) = app.status_message {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(msg.clone(), Style::default().fg(Color::Yellow)));
    }

    let content = Line::from(spans);
    let paragraph = Paragraph::new(content).style(Styles::statusbar());

    frame.render_widget(paragraph, area);
}

/// Key hints for the current state
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let mut hints = Vec::new();

    if app.analysis.is_loading() {
        hints.push(("Esc", "Cancel"));
    } else {
        // Submit is disabled while input is empty; the hint dims via desc
        if app.can_submit() {
            hints.push(("Alt+a", "Analyze"));
        }
        hints.push(("Alt+c", "Clear"));
    }

    hints.push(("Alt+q", "Quit"));
    hints
}
