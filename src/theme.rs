//! Theme configuration for CLI output
//!
//! Centralizes all color definitions used when printing timing lists,
//! summaries and warnings. Colors are emitted as ANSI escape codes and are
//! switched off when `NO_COLOR` is set or stdout is not a terminal.

/// Terminal colors used by the theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Magenta,
    Gray,
    DarkGray,
}

/// Theme configuration.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Primary text color (used for most content)
    pub text_primary: Color,
    /// Secondary/dimmed text color
    pub text_secondary: Color,
    /// Accent color for headings and totals
    pub accent: Color,
    /// Error color (badges, run errors)
    pub error: Color,
    /// Advisory warnings
    pub warning: Color,
    pub success: Color,
    /// When false every helper returns the text unchanged
    pub enabled: bool,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            text_primary: Color::Gray,
            text_secondary: Color::DarkGray,
            accent: Color::Magenta,
            error: Color::Red,
            warning: Color::Yellow,
            success: Color::Green,
            enabled: true,
        }
    }
}

impl Theme {
    /// Default colors with escape codes disabled.
    pub fn plain() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    fn paint(&self, color: Color, text: &str) -> String {
        if !self.enabled {
            return text.to_string();
        }
        format!("{}{}{}", color_to_ansi(color), text, ANSI_RESET)
    }

    /// Format text with the accent color.
    pub fn accent_text(&self, text: &str) -> String {
        self.paint(self.accent, text)
    }

    /// Format text with the primary color.
    pub fn primary_text(&self, text: &str) -> String {
        self.paint(self.text_primary, text)
    }

    /// Format text with the secondary color.
    pub fn secondary_text(&self, text: &str) -> String {
        self.paint(self.text_secondary, text)
    }

    /// Format text with the error color.
    pub fn error_text(&self, text: &str) -> String {
        self.paint(self.error, text)
    }

    /// Format text with the warning color.
    pub fn warning_text(&self, text: &str) -> String {
        self.paint(self.warning, text)
    }

    /// Format text with the success color.
    pub fn success_text(&self, text: &str) -> String {
        self.paint(self.success, text)
    }
}

/// ANSI reset sequence
const ANSI_RESET: &str = "\x1b[0m";

/// Convert a Color to an ANSI escape code.
fn color_to_ansi(color: Color) -> &'static str {
    match color {
        Color::Red => "\x1b[31m",
        Color::Green => "\x1b[32m",
        Color::Yellow => "\x1b[33m",
        Color::Magenta => "\x1b[35m",
        Color::Gray => "\x1b[37m",
        Color::DarkGray => "\x1b[90m",
    }
}

/// Theme for stdout, with colors only on an interactive terminal.
pub fn current_theme() -> Theme {
    let enabled = std::env::var_os("NO_COLOR").is_none() && atty::is(atty::Stream::Stdout);
    Theme {
        enabled,
        ..Theme::default()
    }
}
