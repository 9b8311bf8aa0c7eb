use crossterm::style::Color;

/// Color theme for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    /// Background color
    pub bg: Color,
    /// Default text color
    pub fg: Color,
    /// Grid border color
    pub border: Color,
    /// Blocked (unused) cell background
    pub block_bg: Color,
    /// White cell background (hidden or revealed)
    pub cell_bg: Color,
    /// Revealed letter color
    pub letter: Color,
    /// Clue-number badge color on hidden origin cells
    pub badge: Color,
    /// Clue panel text color
    pub clue: Color,
    /// Solved clue color (dimmed)
    pub solved: Color,
    /// Error message color
    pub error: Color,
    /// Success message color
    pub success: Color,
    /// Timer/info text color
    pub info: Color,
    /// Key binding text color
    pub key: Color,
    /// Focused input field background
    pub input_focus_bg: Color,
    /// Unfocused input field background
    pub input_bg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Dark theme (default)
    pub fn dark() -> Self {
        Self {
            bg: Color::Rgb { r: 11, g: 16, b: 32 },
            fg: Color::Rgb { r: 231, g: 238, b: 252 },
            border: Color::Rgb { r: 70, g: 80, b: 110 },
            block_bg: Color::Rgb { r: 10, g: 15, b: 29 },
            cell_bg: Color::Rgb { r: 32, g: 43, b: 74 },
            letter: Color::Rgb { r: 255, g: 255, b: 255 },
            badge: Color::Rgb { r: 130, g: 150, b: 200 },
            clue: Color::Rgb { r: 203, g: 214, b: 239 },
            solved: Color::Rgb { r: 110, g: 120, b: 145 },
            error: Color::Rgb { r: 255, g: 107, b: 107 },
            success: Color::Rgb { r: 46, g: 204, b: 113 },
            info: Color::Rgb { r: 169, g: 178, b: 199 },
            key: Color::Rgb { r: 255, g: 210, b: 100 },
            input_focus_bg: Color::Rgb { r: 36, g: 48, b: 85 },
            input_bg: Color::Rgb { r: 15, g: 22, b: 40 },
        }
    }

    /// Light theme
    pub fn light() -> Self {
        Self {
            bg: Color::Rgb { r: 248, g: 248, b: 252 },
            fg: Color::Rgb { r: 30, g: 30, b: 40 },
            border: Color::Rgb { r: 170, g: 175, b: 195 },
            block_bg: Color::Rgb { r: 50, g: 55, b: 70 },
            cell_bg: Color::Rgb { r: 255, g: 255, b: 255 },
            letter: Color::Rgb { r: 0, g: 0, b: 0 },
            badge: Color::Rgb { r: 120, g: 130, b: 170 },
            clue: Color::Rgb { r: 50, g: 55, b: 75 },
            solved: Color::Rgb { r: 160, g: 165, b: 180 },
            error: Color::Rgb { r: 220, g: 50, b: 50 },
            success: Color::Rgb { r: 40, g: 160, b: 60 },
            info: Color::Rgb { r: 90, g: 90, b: 110 },
            key: Color::Rgb { r: 200, g: 120, b: 20 },
            input_focus_bg: Color::Rgb { r: 220, g: 228, b: 250 },
            input_bg: Color::Rgb { r: 238, g: 240, b: 248 },
        }
    }
}
