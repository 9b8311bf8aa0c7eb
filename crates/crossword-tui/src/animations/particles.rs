use crossterm::style::Color;
use rand::Rng;

/// Characters used for the confetti effect
pub const CONFETTI_CHARS: &[char] = &['*', '+', 'o', '.', '■', '□', '▪', '▫'];

/// A single particle in the celebration
#[derive(Clone)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub char: char,
    pub color: Color,
    pub lifetime: f32,
}

impl Particle {
    /// Spawn a confetti particle near the top of the screen
    pub fn spawn(width: u16) -> Self {
        let mut rng = rand::thread_rng();
        Self {
            x: rng.gen_range(0.0..width.max(1) as f32),
            y: rng.gen_range(-3.0..0.0),
            vx: rng.gen_range(-0.4..0.4),
            vy: rng.gen_range(0.2..0.8),
            char: CONFETTI_CHARS[rng.gen_range(0..CONFETTI_CHARS.len())],
            color: random_bright_color(),
            lifetime: rng.gen_range(40.0..120.0),
        }
    }

    /// Advance one frame
    pub fn update(&mut self) {
        self.x += self.vx;
        self.y += self.vy;
        self.vy += 0.01; // gravity
        self.lifetime -= 1.0;
    }

    pub fn is_visible(&self, width: u16, height: u16) -> bool {
        self.x >= 0.0
            && self.x < width as f32
            && self.y >= 0.0
            && self.y < height as f32
            && self.lifetime > 0.0
    }
}

/// Generate a random bright color
pub fn random_bright_color() -> Color {
    let mut rng = rand::thread_rng();
    match rng.gen_range(0..7) {
        0 => Color::Red,
        1 => Color::Green,
        2 => Color::Yellow,
        3 => Color::Blue,
        4 => Color::Magenta,
        5 => Color::Cyan,
        _ => Color::White,
    }
}
