use pillbar_core::Rgba;
use ratatui::style::Color;

/// Colors of the demo chrome around the indicator
#[derive(Debug, Clone)]
pub struct Theme {
    /// Backdrop the pills are composited against
    pub backdrop: Rgba,
    pub bg0: Color,
    pub bg2: Color,
    pub fg0: Color,
    pub grey1: Color,
    pub accent: Color,
    pub warning: Color,
}

impl Default for Theme {
    fn default() -> Self {
        // Gruvbox Dark
        Self {
            backdrop: Rgba::rgb(0x1d, 0x20, 0x21),
            bg0: Color::Rgb(0x28, 0x28, 0x28),
            bg2: Color::Rgb(0x45, 0x40, 0x3d),
            fg0: Color::Rgb(0xd4, 0xbe, 0x98),
            grey1: Color::Rgb(0x92, 0x83, 0x74),
            accent: Color::Rgb(0x89, 0xb4, 0x82),
            warning: Color::Rgb(0xe7, 0x8a, 0x4e),
        }
    }
}

impl Theme {
    pub fn backdrop_color(&self) -> Color {
        crate::surface::to_color(self.backdrop)
    }
}
