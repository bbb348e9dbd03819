//! Color themes for the UI.

use crate::app::{StatusKind, Theme};
use ratatui::style::Color;

/// Theme color palette.
#[derive(Debug, Clone)]
pub struct ThemeColors {
    /// Background color.
    pub bg: Color,
    /// Primary text color.
    pub text: Color,
    /// Dimmed text color.
    pub muted: Color,
    /// Heading text color.
    pub heading: Color,
    /// Label text color.
    pub label: Color,
    /// Value text color.
    pub value: Color,
    /// Border color.
    pub border: Color,
    /// Cursor foreground color.
    pub cursor_fg: Color,
    /// Cursor background color.
    pub cursor_bg: Color,
    /// Status bar foreground color.
    pub status_fg: Color,
    /// Status bar background color.
    pub status_bg: Color,
    /// Informational accent.
    pub info: Color,
    /// Success accent.
    pub success: Color,
    /// Warning accent.
    pub warning: Color,
    /// Error accent.
    pub error: Color,
}

impl ThemeColors {
    /// Create color palette from theme.
    pub fn from_theme(theme: &Theme) -> Self {
        match theme {
            Theme::GruvboxDark => Self {
                bg: Color::Rgb(40, 40, 40),
                text: Color::Rgb(235, 219, 178),
                muted: Color::Rgb(146, 131, 116),
                heading: Color::Rgb(251, 184, 108),
                label: Color::Rgb(184, 187, 38),
                value: Color::Rgb(142, 192, 124),
                border: Color::Rgb(102, 92, 84),
                cursor_fg: Color::Rgb(40, 40, 40),
                cursor_bg: Color::Rgb(251, 184, 108),
                status_fg: Color::Rgb(235, 219, 178),
                status_bg: Color::Rgb(60, 56, 54),
                info: Color::Rgb(131, 165, 152),
                success: Color::Rgb(184, 187, 38),
                warning: Color::Rgb(250, 189, 47),
                error: Color::Rgb(251, 73, 52),
            },
            Theme::GruvboxLight => Self {
                bg: Color::Rgb(251, 245, 234),
                text: Color::Rgb(60, 56, 54),
                muted: Color::Rgb(124, 111, 100),
                heading: Color::Rgb(175, 58, 3),
                label: Color::Rgb(121, 116, 14),
                value: Color::Rgb(102, 123, 3),
                border: Color::Rgb(213, 196, 161),
                cursor_fg: Color::Rgb(251, 245, 234),
                cursor_bg: Color::Rgb(175, 58, 3),
                status_fg: Color::Rgb(60, 56, 54),
                status_bg: Color::Rgb(235, 219, 178),
                info: Color::Rgb(7, 102, 120),
                success: Color::Rgb(121, 116, 14),
                warning: Color::Rgb(181, 118, 20),
                error: Color::Rgb(157, 0, 6),
            },
        }
    }

    /// Accent color for a status message.
    pub fn status_accent(&self, kind: StatusKind) -> Color {
        match kind {
            StatusKind::Info => self.info,
            StatusKind::Success => self.success,
            StatusKind::Warning => self.warning,
            StatusKind::Danger => self.error,
        }
    }
}
