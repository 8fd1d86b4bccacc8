//! Theme configuration

use iced::Color;

/// Light theme colors
pub struct LightTheme;

impl LightTheme {
    pub const BACKGROUND: Color = Color::from_rgb(0.98, 0.98, 0.98);
    pub const SURFACE: Color = Color::WHITE;
    /// #48BBEC
    pub const PRIMARY: Color = Color::from_rgb(0.282, 0.733, 0.925);
    /// #656565
    pub const DESCRIPTION: Color = Color::from_rgb(0.396, 0.396, 0.396);
    pub const TEXT: Color = Color::from_rgb(0.13, 0.13, 0.13);
    pub const TEXT_MUTED: Color = Color::from_rgb(0.55, 0.55, 0.6);
    pub const SEPARATOR: Color = Color::from_rgb(0.87, 0.87, 0.87);
}
