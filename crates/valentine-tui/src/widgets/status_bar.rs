use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use valentine_core::Phase;

use crate::app::App;

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;

        let phase_str = match app.phase() {
            Phase::Idle => "SPLASH",
            Phase::Running => "DRAWING",
            Phase::Paused => "PAUSED",
            Phase::Completed => "BREATHING",
        };

        let status_text = if let Some(msg) = &app.status_message {
            format!(" {} | {}", phase_str, msg)
        } else {
            format!(" {}", phase_str)
        };

        let help_hint = match app.phase() {
            Phase::Idle => " Space/Enter:start q:quit ",
            _ => " Space:pause r:restart \u{2191}\u{2193}:speed q:quit ",
        };

        let padding_len = area
            .width
            .saturating_sub(status_text.chars().count() as u16 + help_hint.chars().count() as u16)
            as usize;

        let line = Line::from(vec![
            Span::styled(status_text, Style::default().fg(theme.text).bg(theme.bg)),
            Span::styled(" ".repeat(padding_len), Style::default().bg(theme.bg)),
            Span::styled(help_hint, Style::default().fg(theme.dim).bg(theme.bg)),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}
