use rand::Rng;
use raylib::prelude::*;
use std::f32::consts::TAU;
use crate::canvas::{with_alpha, Canvas, Viewport};
use crate::constants::*;

#[derive(Debug, Clone, PartialEq)]
pub struct Star {
    pub position: Vector2,
    pub depth: f32, // 0.0 = far away, 1.0 = closest to the viewer
    pub size: f32,
    pub brightness: f32,
    pub twinkle_phase: f32,
    pub twinkle_speed: f32,
}

/// Number of stars for a surface: one per `STAR_DENSITY` pixels of area.
pub fn star_count(viewport: Viewport) -> usize {
    (viewport.area() / STAR_DENSITY) as usize
}

/// Builds a fresh star set for the whole surface.
pub fn generate(rng: &mut impl Rng, viewport: Viewport) -> Vec<Star> {
    (0..star_count(viewport)).map(|_| Star::random(rng, viewport)).collect()
}

impl Star {
    fn random(rng: &mut impl Rng, viewport: Viewport) -> Self {
        Self {
            position: Vector2::new(
                rng.random_range(0.0..viewport.width as f32),
                rng.random_range(0.0..viewport.height as f32),
            ),
            depth: rng.random(),
            size: rng.random_range(STAR_MIN_SIZE..STAR_MAX_SIZE),
            brightness: rng.random_range(STAR_MIN_BRIGHTNESS..STAR_MAX_BRIGHTNESS),
            twinkle_phase: rng.random_range(0.0..TAU),
            twinkle_speed: rng.random_range(TWINKLE_MIN_SPEED..TWINKLE_MAX_SPEED),
        }
    }

    /// Current opacity, oscillating between 30% and 100% of the base brightness.
    pub fn twinkle(&self, time_s: f32) -> f32 {
        let wave = (time_s * self.twinkle_speed + self.twinkle_phase).sin();
        self.brightness * (0.65 + 0.35 * wave)
    }

    pub fn tint(&self) -> Color {
        match self.depth {
            d if d < 0.33 => COOL_STAR,
            d if d < 0.66 => NEUTRAL_STAR,
            _ => WARM_STAR,
        }
    }

    pub fn has_halo(&self) -> bool {
        self.brightness > HALO_BRIGHTNESS && self.size > HALO_SIZE
    }

    /// On-screen position for a parallax shift measured at depth 1.0.
    pub fn screen_position(&self, parallax: Vector2) -> Vector2 {
        self.position + parallax * self.depth
    }

    pub fn draw(&self, canvas: &mut dyn Canvas, time_s: f32, parallax: Vector2) {
        let position = self.screen_position(parallax);
        let intensity = self.twinkle(time_s);
        let tint = self.tint();

        if self.has_halo() {
            canvas.circle(position, self.size * 3.0, with_alpha(tint, intensity * 0.1));
        }
        canvas.circle(position, self.size, with_alpha(tint, intensity));
    }
}
