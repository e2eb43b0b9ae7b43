//! Falling confetti shown when a round is won.

use rand::Rng;
use rand::seq::IndexedRandom;
use ratatui::style::Color;
use std::f64::consts::TAU;
use std::time::{Duration, Instant};
use tracing::debug;

/// Blue, violet, pink, rose, amber.
pub const PALETTE: [Color; 5] = [
    Color::Rgb(0x3b, 0x82, 0xf6),
    Color::Rgb(0x8b, 0x5c, 0xf6),
    Color::Rgb(0xec, 0x48, 0x99),
    Color::Rgb(0xf4, 0x3f, 0x5e),
    Color::Rgb(0xf5, 0x9e, 0x0b),
];

/// One piece of confetti. Coordinates use y growing downward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Horizontal position.
    pub x: f64,
    /// Vertical position; starts above the top edge.
    pub y: f64,
    /// Edge length, 5 to 15.
    pub size: f64,
    /// Fill color.
    pub color: Color,
    /// Fall per tick, 2 to 5.
    pub speed: f64,
    /// Current rotation in radians.
    pub angle: f64,
    /// Rotation per tick.
    pub rotation_speed: f64,
}

/// A burst of particles over a `width` x `height` area.
#[derive(Debug, Clone)]
pub struct Confetti {
    particles: Vec<Particle>,
    width: f64,
    height: f64,
    started: Instant,
    duration: Duration,
}

impl Confetti {
    /// Spawns `count` particles spread across the width, above the top.
    pub fn burst<R: Rng + ?Sized>(
        width: f64,
        height: f64,
        count: usize,
        duration: Duration,
        started: Instant,
        rng: &mut R,
    ) -> Self {
        let particles = (0..count)
            .map(|_| Particle {
                x: rng.random_range(0.0..width.max(f64::EPSILON)),
                y: rng.random_range(0.0..height.max(f64::EPSILON)) - height,
                size: rng.random_range(5.0..15.0),
                color: *PALETTE.choose(rng).unwrap_or(&PALETTE[0]),
                speed: rng.random_range(2.0..5.0),
                angle: rng.random_range(0.0..TAU),
                rotation_speed: rng.random_range(-0.005..0.005),
            })
            .collect();

        debug!(count, width, height, "Confetti burst");
        Self {
            particles,
            width,
            height,
            started,
            duration,
        }
    }

    /// Advances every particle by one frame.
    pub fn tick(&mut self) {
        for p in &mut self.particles {
            p.y += p.speed;
            p.angle += p.rotation_speed;
        }
    }

    /// False once the duration has elapsed or every particle has left the
    /// bottom edge.
    pub fn is_active(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started) < self.duration
            && self.particles.iter().any(|p| p.y < self.height)
    }

    /// The particles.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Width of the area the burst covers.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Height of the area the burst covers.
    pub fn height(&self) -> f64 {
        self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn burst(now: Instant) -> Confetti {
        let mut rng = StdRng::seed_from_u64(42);
        Confetti::burst(160.0, 96.0, 150, Duration::from_secs(3), now, &mut rng)
    }

    #[test]
    fn test_particles_start_above_the_top() {
        let confetti = burst(Instant::now());
        assert_eq!(confetti.particles().len(), 150);
        for p in confetti.particles() {
            assert!(p.y < 0.0 && p.y >= -96.0);
            assert!((0.0..160.0).contains(&p.x));
            assert!((5.0..15.0).contains(&p.size));
            assert!((2.0..5.0).contains(&p.speed));
            assert!(PALETTE.contains(&p.color));
        }
    }

    #[test]
    fn test_tick_moves_down_and_rotates() {
        let mut confetti = burst(Instant::now());
        let before = confetti.particles()[0];
        confetti.tick();
        let after = confetti.particles()[0];
        assert_eq!(after.y, before.y + before.speed);
        assert_eq!(after.angle, before.angle + before.rotation_speed);
        assert_eq!(after.x, before.x);
    }

    #[test]
    fn test_expires_after_duration() {
        let start = Instant::now();
        let confetti = burst(start);
        assert!(confetti.is_active(start));
        assert!(!confetti.is_active(start + Duration::from_secs(3)));
    }

    #[test]
    fn test_expires_once_everything_has_fallen() {
        let start = Instant::now();
        let mut confetti = burst(start);
        // Slowest particle: 2 per tick across at most 2 * height.
        for _ in 0..100 {
            confetti.tick();
        }
        assert!(!confetti.is_active(start));
    }
}
