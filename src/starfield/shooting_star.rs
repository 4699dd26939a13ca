use rand::Rng;
use raylib::prelude::*;
use std::f32::consts::FRAC_PI_4;
use crate::canvas::{with_alpha, Canvas, Viewport};
use crate::constants::*;

#[derive(Debug, Clone, PartialEq)]
pub struct ShootingStar {
    pub id: u64,
    pub position: Vector2,
    pub velocity: Vector2, // Pixels per frame
    pub life: u32,         // Frames lived so far
    pub max_life: u32,
}

impl ShootingStar {
    /// New streak entering from a random point on the top edge, heading
    /// down-right at roughly 45 degrees.
    pub fn spawn(id: u64, rng: &mut impl Rng, viewport: Viewport) -> Self {
        let angle = FRAC_PI_4 + rng.random_range(-SHOOTING_STAR_JITTER..SHOOTING_STAR_JITTER);
        let speed = rng.random_range(SHOOTING_STAR_MIN_SPEED..SHOOTING_STAR_MAX_SPEED);

        Self {
            id,
            position: Vector2::new(rng.random_range(0.0..viewport.width as f32), 0.0),
            velocity: Vector2::new(angle.cos() * speed, angle.sin() * speed),
            life: 0,
            max_life: rng.random_range(SHOOTING_STAR_MIN_LIFE..=SHOOTING_STAR_MAX_LIFE),
        }
    }

    pub fn advance(&mut self) {
        self.position += self.velocity;
        self.life += 1;
    }

    pub fn is_alive(&self, viewport: Viewport) -> bool {
        self.life <= self.max_life && viewport.contains(self.position)
    }

    /// Linear fade in over the first part of life, quadratic fade out after.
    pub fn opacity(&self) -> f32 {
        let progress = (self.life as f32 / self.max_life.max(1) as f32).min(1.0);
        if progress < SHOOTING_STAR_FADE_IN {
            progress / SHOOTING_STAR_FADE_IN
        } else {
            let remaining = 1.0 - (progress - SHOOTING_STAR_FADE_IN) / (1.0 - SHOOTING_STAR_FADE_IN);
            remaining * remaining
        }
    }

    pub fn draw(&self, canvas: &mut dyn Canvas) {
        let opacity = self.opacity();
        let tail = self.position - self.velocity * SHOOTING_STAR_TRAIL;

        canvas.gradient_line(
            tail,
            self.position,
            1.5,
            with_alpha(Color::WHITE, 0.0),
            with_alpha(Color::WHITE, opacity * 0.8),
        );
        canvas.circle(self.position, 1.5, with_alpha(Color::WHITE, opacity));
    }
}
