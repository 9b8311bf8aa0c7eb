pub mod particles;

use particles::Particle;

/// Win celebration: confetti raining over the finished grid
pub struct WinScreen {
    pub particles: Vec<Particle>,
    width: u16,
    height: u16,
}

impl WinScreen {
    const MAX_PARTICLES: usize = 120;

    pub fn new() -> Self {
        Self {
            particles: Vec::new(),
            width: 80,
            height: 24,
        }
    }

    /// Restart the animation for the given screen size
    pub fn reset(&mut self, width: u16, height: u16) {
        self.particles.clear();
        self.width = width;
        self.height = height;
    }

    /// Advance one frame: spawn, move, and cull particles
    pub fn update(&mut self) {
        while self.particles.len() < Self::MAX_PARTICLES {
            self.particles.push(Particle::spawn(self.width));
        }

        for p in &mut self.particles {
            p.update();
        }
        let (width, height) = (self.width, self.height);
        self.particles.retain(|p| p.lifetime > 0.0 && p.y < height as f32 + 2.0 && p.x >= -2.0 && p.x < width as f32 + 2.0);
    }
}

impl Default for WinScreen {
    fn default() -> Self {
        Self::new()
    }
}
