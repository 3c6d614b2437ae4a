//! Light dashboard theme.
//!
//! # Color Palette
//! - **Background**: pale lavender `#f4f4f9` (main area)
//! - **Sidebar**: light gray `#e0e0e0` (section list)
//! - **Header**: slate blue `#2e3a59` band with white text
//! - **Data highlight**: light green, marks the maximum of each data column
//! - **Stats highlight**: light blue, marks the maximum of each statistics column
//! - **Charts**: a cool → warm diverging ramp

use ratatui::style::{Color, Modifier, Style};

use crate::app::StatusLevel;

/// Cool end of the chart ramp.
const COOL: (f64, f64, f64) = (59.0, 76.0, 192.0);
/// Neutral midpoint of the chart ramp.
const MID: (f64, f64, f64) = (221.0, 221.0, 221.0);
/// Warm end of the chart ramp.
const WARM: (f64, f64, f64) = (180.0, 4.0, 38.0);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub background: Color,
    pub sidebar: Color,
    pub header_bg: Color,
    pub header_fg: Color,
    /// Primary text on light surfaces.
    pub text: Color,
    pub muted: Color,
    /// Borders, titles and the selected row.
    pub accent: Color,
    pub data_highlight: Color,
    pub stats_highlight: Color,
    pub warning: Color,
    pub error: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

impl Theme {
    pub fn light() -> Self {
        Self {
            background: Color::Rgb(0xf4, 0xf4, 0xf9),
            sidebar: Color::Rgb(0xe0, 0xe0, 0xe0),
            header_bg: Color::Rgb(0x2e, 0x3a, 0x59),
            header_fg: Color::White,
            text: Color::Rgb(30, 30, 40),
            muted: Color::Rgb(110, 110, 125),
            accent: Color::Rgb(0x2e, 0x3a, 0x59),
            data_highlight: Color::Rgb(144, 238, 144),
            stats_highlight: Color::Rgb(173, 216, 230),
            warning: Color::Rgb(200, 120, 0),
            error: Color::Rgb(190, 30, 45),
        }
    }

    /// Plain text on the page background.
    pub fn base(&self) -> Style {
        Style::default().fg(self.text).bg(self.background)
    }

    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn title_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn header_style(&self) -> Style {
        Style::default().fg(self.header_fg).bg(self.header_bg)
    }

    /// Style of the row under the cursor.
    pub fn selected_style(&self) -> Style {
        Style::default()
            .fg(self.header_fg)
            .bg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn status_color(&self, level: StatusLevel) -> Color {
        match level {
            StatusLevel::Info => self.accent,
            StatusLevel::Warning => self.warning,
            StatusLevel::Error => self.error,
        }
    }

    /// Colour for `t` in `[0, 1]` on the cool → warm ramp. Out-of-range and
    /// NaN inputs are clamped to the nearest end.
    pub fn coolwarm(&self, t: f64) -> Color {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let (from, to, local) = if t < 0.5 {
            (COOL, MID, t * 2.0)
        } else {
            (MID, WARM, (t - 0.5) * 2.0)
        };
        let lerp = |a: f64, b: f64| (a + (b - a) * local).round() as u8;
        Color::Rgb(lerp(from.0, to.0), lerp(from.1, to.1), lerp(from.2, to.2))
    }

    /// Ramp colour of `value` relative to `[min, max]`.
    pub fn scaled(&self, value: f64, min: f64, max: f64) -> Color {
        let span = max - min;
        if span.abs() < f64::EPSILON {
            return self.coolwarm(0.5);
        }
        self.coolwarm((value - min) / span)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_creation() {
        let theme = Theme::default();
        assert_eq!(theme.background, Color::Rgb(244, 244, 249));
        assert_eq!(theme.sidebar, Color::Rgb(224, 224, 224));
        assert_eq!(theme.header_bg, Color::Rgb(46, 58, 89));
        assert_eq!(theme.header_fg, Color::White);
    }

    #[test]
    fn test_coolwarm_endpoints() {
        let theme = Theme::default();
        assert_eq!(theme.coolwarm(0.0), Color::Rgb(59, 76, 192));
        assert_eq!(theme.coolwarm(0.5), Color::Rgb(221, 221, 221));
        assert_eq!(theme.coolwarm(1.0), Color::Rgb(180, 4, 38));
    }

    #[test]
    fn test_coolwarm_clamps() {
        let theme = Theme::default();
        assert_eq!(theme.coolwarm(-3.0), theme.coolwarm(0.0));
        assert_eq!(theme.coolwarm(7.0), theme.coolwarm(1.0));
        assert_eq!(theme.coolwarm(f64::NAN), theme.coolwarm(0.0));
    }

    #[test]
    fn test_scaled_degenerate_range() {
        let theme = Theme::default();
        assert_eq!(theme.scaled(4.0, 4.0, 4.0), theme.coolwarm(0.5));
        assert_eq!(theme.scaled(10.0, 0.0, 10.0), theme.coolwarm(1.0));
    }

    #[test]
    fn test_status_color() {
        let theme = Theme::default();
        assert_eq!(theme.status_color(StatusLevel::Info), theme.accent);
        assert_eq!(theme.status_color(StatusLevel::Warning), theme.warning);
        assert_eq!(theme.status_color(StatusLevel::Error), theme.error);
    }
}
