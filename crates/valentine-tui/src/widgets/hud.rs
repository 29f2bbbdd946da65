use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use valentine_core::Phase;

use crate::app::App;

const FORMULA: &str = "y = |x|^(2/3) + 0.9\u{b7}sin(kx)\u{b7}\u{221a}(3\u{2212}x\u{b2})";

/// Overlay beneath the curve: the formula, the live k readout and a
/// phase-dependent message line.
pub struct HudWidget;

impl HudWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;

        let readout = match app.frame.as_ref() {
            Some(sample) => format!(
                "k = {:>6.2}   progress {:>3.0}%   speed x{:.2}",
                sample.k,
                sample.progress * 100.0,
                app.controller.state().speed
            ),
            None => String::new(),
        };

        let message = match app.phase() {
            Phase::Paused => Span::styled("\u{2016} paused \u{2016}", Style::default().fg(theme.dim)),
            Phase::Completed => Span::styled(
                "Made with \u{2665} and Mathematics",
                Style::default().fg(theme.accent),
            ),
            _ => Span::raw(""),
        };

        let lines = vec![
            Line::from(Span::styled(FORMULA, Style::default().fg(theme.text))),
            Line::from(Span::styled(readout, Style::default().fg(theme.accent))),
            Line::from(message),
        ];

        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .style(Style::default().bg(theme.bg));
        frame.render_widget(paragraph, area);
    }
}
