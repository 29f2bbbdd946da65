use ratatui::style::Color;
use tracing::warn;
use valentine_core::config::ThemeConfig;

/// Runtime theme with configurable colors
#[derive(Debug, Clone)]
pub struct Theme {
    /// Background
    pub bg: Color,
    /// Core heart line
    pub heart: Color,
    /// Glow layers around the heart line
    pub glow: Color,
    /// Live k readout, completion message
    pub accent: Color,
    /// Formula and regular text
    pub text: Color,
    /// Dim hint text
    pub dim: Color,
}

impl Default for Theme {
    fn default() -> Self {
        // Dark romantic palette
        Self {
            bg: Color::Rgb(0x0a, 0x0a, 0x0a),
            heart: Color::Rgb(0xff, 0x17, 0x44),
            glow: Color::Rgb(0xff, 0x44, 0x44),
            accent: Color::Rgb(0xff, 0x6e, 0x7f),
            text: Color::Rgb(0xbb, 0xbb, 0xbb),
            dim: Color::Rgb(0x55, 0x55, 0x55),
        }
    }
}

impl Theme {
    /// Blend `color` towards the background by `alpha` in [0, 1].
    /// The terminal has no per-glyph alpha, so fade-in darkens the
    /// color instead.
    pub fn faded(&self, color: Color, alpha: f64) -> Color {
        let alpha = alpha.clamp(0.0, 1.0);
        let (Color::Rgb(r, g, b), Color::Rgb(br, bg_, bb)) = (color, self.bg) else {
            return color;
        };
        let mix = |c: u8, base: u8| -> u8 {
            (base as f64 + (c as f64 - base as f64) * alpha).round() as u8
        };
        Color::Rgb(mix(r, br), mix(g, bg_), mix(b, bb))
    }
}

/// Build the runtime theme, applying any hex color overrides from config.
pub fn load_theme(config: &ThemeConfig) -> Theme {
    let mut theme = Theme::default();
    apply_override(&mut theme.bg, &config.bg, "bg");
    apply_override(&mut theme.heart, &config.heart, "heart");
    apply_override(&mut theme.glow, &config.glow, "glow");
    apply_override(&mut theme.accent, &config.accent, "accent");
    apply_override(&mut theme.text, &config.text, "text");
    apply_override(&mut theme.dim, &config.dim, "dim");
    theme
}

fn apply_override(slot: &mut Color, value: &Option<String>, name: &str) {
    if let Some(hex) = value {
        match parse_hex(hex) {
            Some(color) => *slot = color,
            None => warn!("Invalid hex color '{}' for theme.{}, using default", hex, name),
        }
    }
}

/// Parse "#rrggbb" or "rrggbb" into an RGB color
fn parse_hex(s: &str) -> Option<Color> {
    let s = s.trim().trim_start_matches('#');
    if s.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&s[0..2], 16).ok()?;
    let g = u8::from_str_radix(&s[2..4], 16).ok()?;
    let b = u8::from_str_radix(&s[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex() {
        assert_eq!(parse_hex("#ff1744"), Some(Color::Rgb(0xff, 0x17, 0x44)));
        assert_eq!(parse_hex("ff1744"), Some(Color::Rgb(0xff, 0x17, 0x44)));
        assert_eq!(parse_hex("#fff"), None);
        assert_eq!(parse_hex("not-a-color"), None);
    }

    #[test]
    fn test_overrides_applied() {
        let config = ThemeConfig {
            heart: Some("#00ff00".to_string()),
            ..Default::default()
        };
        let theme = load_theme(&config);
        assert_eq!(theme.heart, Color::Rgb(0x00, 0xff, 0x00));
        // Untouched fields keep defaults
        assert_eq!(theme.bg, Color::Rgb(0x0a, 0x0a, 0x0a));
    }

    #[test]
    fn test_faded_endpoints() {
        let theme = Theme::default();
        assert_eq!(theme.faded(theme.heart, 1.0), theme.heart);
        assert_eq!(theme.faded(theme.heart, 0.0), theme.bg);
    }
}
