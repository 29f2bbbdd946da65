use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;

const TITLE: &str = "Happy Valentine's!";
const SUBTITLE: &str = "A Mathematical Love Letter";
const BUTTON_LABEL: &str = "\u{2665}  Start  \u{2665}";
const HINT: &str = "press Space or Enter, or click anywhere";

pub struct StartScreenWidget;

impl StartScreenWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;

        frame.render_widget(
            Block::default().style(Style::default().bg(theme.bg)),
            area,
        );

        // Vertically centered stack: title, subtitle, button, hint
        let [_, title_area, subtitle_area, _, button_area, _, hint_area, _] =
            Layout::vertical([
                Constraint::Fill(2),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Fill(3),
            ])
            .areas(area);

        let title = Paragraph::new(Line::from(Span::styled(
            TITLE,
            Style::default().fg(theme.heart).add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(title, title_area);

        let subtitle = Paragraph::new(Line::from(Span::styled(
            SUBTITLE,
            Style::default().fg(theme.text),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(subtitle, subtitle_area);

        // The button border pulses with the splash phase
        let pulse = app.splash_pulse();
        let border_color = theme.faded(theme.glow, 0.3 + 0.7 * pulse);
        let button_width = (BUTTON_LABEL.chars().count() as u16 + 6).min(button_area.width);
        let button_rect = centered_horizontal(button_area, button_width);

        let button = Paragraph::new(Line::from(Span::styled(
            BUTTON_LABEL,
            Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color)),
        );
        frame.render_widget(button, button_rect);

        let hint = Paragraph::new(Line::from(Span::styled(
            HINT,
            Style::default().fg(theme.dim),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(hint, hint_area);
    }
}

fn centered_horizontal(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    let x = area.x + (area.width - width) / 2;
    Rect::new(x, area.y, width, area.height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_horizontal_fits_area() {
        let area = Rect::new(0, 5, 80, 3);
        let rect = centered_horizontal(area, 20);
        assert_eq!(rect.width, 20);
        assert_eq!(rect.x, 30);
        assert_eq!(rect.y, 5);

        // Wider than the area clamps to it
        let rect = centered_horizontal(area, 200);
        assert_eq!(rect.width, 80);
        assert_eq!(rect.x, 0);
    }
}
