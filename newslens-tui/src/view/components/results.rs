//! Results panel: loading indicator, error banner, model cards, consensus

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use newslens_core::{consensus, derive_results, ModelResult, PredictionResponse, Tone};

use crate::model::{AnalysisState, App};
use crate::view::theme::{colors, ThemeColors};

/// Render the panel below the editor according to the submission state
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    match &app.analysis {
        AnalysisState::Idle => render_idle(frame, area),
        AnalysisState::Loading => render_loading(app, frame, area),
        AnalysisState::Failure(message) => render_error_banner(message, frame, area),
        AnalysisState::Success(response) => render_results(response, frame, area),
    }
}

fn render_idle(frame: &mut Frame, area: Rect) {
    let c = colors();
    let lines = vec![
        Line::from(""),
        Line::styled(
            "Three models weigh in on every article: Logistic Regression, Random Forest, XGBoost.",
            Style::default().fg(c.muted),
        ),
        Line::from(""),
        Line::styled(
            "Press Alt+a or Ctrl+Enter to analyze.",
            Style::default().fg(c.muted),
        ),
    ];
    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn render_loading(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let lines = vec![
        Line::from(""),
        Line::styled(
            format!("{} Analyzing...", app.spinner()),
            Style::default().fg(c.highlight).add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::styled(
            "Processing with AI models...",
            Style::default().fg(c.muted),
        ),
        Line::from(""),
        Line::styled("Esc to cancel", Style::default().fg(c.muted)),
    ];
    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn render_error_banner(message: &str, frame: &mut Frame, area: Rect) {
    let c = colors();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.error));
    let banner = Paragraph::new(Line::styled(
        format!("✗ {message}"),
        Style::default().fg(c.error),
    ))
    .block(block);
    frame.render_widget(banner, rows[0]);
}

fn render_results(response: &PredictionResponse, frame: &mut Frame, area: Rect) {
    let c = colors();
    let results = derive_results(response);
    let verdict = consensus(&results);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // heading
            Constraint::Length(6), // model cards
            Constraint::Length(5), // consensus block
            Constraint::Min(0),
        ])
        .split(area);

    let heading = Paragraph::new(Line::styled(
        "AI Analysis Results",
        Style::default().fg(c.fg).add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(heading, rows[0]);

    // One card per model, fixed order
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(rows[1]);

    for (result, column) in results.iter().zip(columns.iter()) {
        render_model_card(result, &c, frame, *column);
    }

    render_consensus_block(&verdict, &c, frame, rows[2]);
}

fn render_model_card(result: &ModelResult, c: &ThemeColors, frame: &mut Frame, area: Rect) {
    let tone_color = match result.tone {
        Tone::Positive => c.success,
        Tone::Negative => c.error,
    };
    let mark = match result.tone {
        Tone::Positive => "✔",
        Tone::Negative => "✗",
    };

    let block = Block::default()
        .title(format!(" {} ", result.model.display_name()))
        .title_style(Style::default().fg(c.fg))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(tone_color));

    let lines = vec![
        Line::from(""),
        Line::styled(
            format!("{mark} {}", result.label.as_str()),
            Style::default().fg(tone_color).add_modifier(Modifier::BOLD),
        ),
        Line::styled(result.sublabel(), Style::default().fg(c.muted)),
    ];

    let card = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(card, area);
}

fn render_consensus_block(
    verdict: &newslens_core::Consensus,
    c: &ThemeColors,
    frame: &mut Frame,
    area: Rect,
) {
    use newslens_core::Consensus;

    let color = match verdict {
        Consensus::LikelyLegitimate { .. } => c.success,
        Consensus::LikelyFake { .. } => c.error,
        Consensus::Uncertain => c.warning,
    };

    let block = Block::default()
        .title(" Overall Consensus ")
        .title_style(Style::default().fg(c.fg).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.border));

    let lines = vec![
        Line::styled(
            verdict.headline(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        Line::styled(verdict.subline(), Style::default().fg(c.muted)),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(paragraph, area);
}
