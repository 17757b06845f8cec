//! View layer: UI rendering
//!
//! Reads the model, never mutates it. Layout: title bar, editor panel,
//! results panel, status bar.

mod components;
pub mod theme;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::Paragraph,
    Frame,
};

use crate::model::App;
use theme::colors;

/// Render the main layout
pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),  // title bar
            Constraint::Length(10), // editor
            Constraint::Min(1),     // results / errors / loading
            Constraint::Length(1),  // status bar
        ])
        .split(size);

    render_title_bar(frame, main_layout[0]);
    components::editor::render(app, frame, main_layout[1]);
    components::results::render(app, frame, main_layout[2]);
    components::statusbar::render(app, frame, main_layout[3]);
}

/// Render the title bar
fn render_title_bar(frame: &mut Frame, area: Rect) {
    let c = colors();
    let title = Paragraph::new(" NewsLens — Fake News Detector")
        .style(Style::default().bg(c.highlight).fg(ratatui::style::Color::White));
    frame.render_widget(title, area);
}
