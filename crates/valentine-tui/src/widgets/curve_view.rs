use ratatui::{
    layout::Rect,
    style::Style,
    symbols::Marker,
    widgets::{
        canvas::{Canvas, Line as CanvasLine},
        Block,
    },
    Frame,
};

use crate::app::App;

/// View window around the heart, with headroom for the upper lobes
const X_BOUNDS: [f64; 2] = [-2.1, 2.1];
const Y_BOUNDS: [f64; 2] = [-1.5, 2.8];

/// Vertical offsets of the outer and inner glow passes, in curve
/// coordinates
const OUTER_GLOW_OFFSET: f64 = 0.09;
const INNER_GLOW_OFFSET: f64 = 0.045;

/// Renders the current frame of the heart curve on a braille canvas.
///
/// The glow is approximated with outer and inner passes drawn slightly
/// offset in dimmed glow colors beneath the core line; the build
/// fade-in scales all colors towards the background.
pub struct CurveWidget;

impl CurveWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let Some(sample) = app.frame.as_ref() else {
            // Nothing emitted yet (e.g. right after a restart)
            frame.render_widget(Block::default().style(Style::default().bg(theme.bg)), area);
            return;
        };

        let outer_glow = theme.faded(theme.glow, 0.2 * sample.alpha);
        let inner_glow = theme.faded(theme.glow, 0.45 * sample.alpha);
        let core = theme.faded(theme.heart, sample.alpha);

        let canvas = Canvas::default()
            .block(Block::default().style(Style::default().bg(theme.bg)))
            .marker(Marker::Braille)
            .x_bounds(X_BOUNDS)
            .y_bounds(Y_BOUNDS)
            .paint(|ctx| {
                // Dimmest pass first so brighter layers draw over it
                for (offset, color) in [
                    (OUTER_GLOW_OFFSET, outer_glow),
                    (INNER_GLOW_OFFSET, inner_glow),
                ] {
                    for dy in [-offset, offset] {
                        for w in sample.points.windows(2) {
                            ctx.draw(&CanvasLine {
                                x1: w[0].0,
                                y1: w[0].1 + dy,
                                x2: w[1].0,
                                y2: w[1].1 + dy,
                                color,
                            });
                        }
                    }
                    ctx.layer();
                }
                for w in sample.points.windows(2) {
                    ctx.draw(&CanvasLine {
                        x1: w[0].0,
                        y1: w[0].1,
                        x2: w[1].0,
                        y2: w[1].1,
                        color: core,
                    });
                }
            });

        frame.render_widget(canvas, area);
    }
}
