use raylib::prelude::*;
use crate::canvas::Viewport;
use crate::constants::POINTER_LERP;

/// Pointer offset from the surface centre, eased towards the latest raw
/// position a little every frame.
#[derive(Debug, Clone, Copy)]
pub struct SmoothedPointer {
    target: Vector2,
    current: Vector2,
}

impl SmoothedPointer {
    pub fn new() -> Self {
        Self { target: Vector2::zero(), current: Vector2::zero() }
    }

    /// Maps raw surface coordinates to [-1, 1] on both axes.
    pub fn set_target(&mut self, raw_x: f32, raw_y: f32, viewport: Viewport) {
        let center = viewport.center();
        let normalize = |raw: f32, half: f32| {
            if half > 0.0 { ((raw - half) / half).clamp(-1.0, 1.0) } else { 0.0 }
        };
        self.target = Vector2::new(normalize(raw_x, center.x), normalize(raw_y, center.y));
    }

    pub fn step(&mut self) -> Vector2 {
        self.current.x += (self.target.x - self.current.x) * POINTER_LERP;
        self.current.y += (self.target.y - self.current.y) * POINTER_LERP;
        self.current
    }

    pub fn target(&self) -> Vector2 {
        self.target
    }

    pub fn current(&self) -> Vector2 {
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_is_normalized_around_center() {
        let viewport = Viewport::new(800, 600);
        let mut pointer = SmoothedPointer::new();

        pointer.set_target(400.0, 300.0, viewport);
        assert_eq!(pointer.target(), Vector2::zero());

        pointer.set_target(0.0, 600.0, viewport);
        assert_eq!(pointer.target(), Vector2::new(-1.0, 1.0));

        pointer.set_target(1200.0, -50.0, viewport);
        assert_eq!(pointer.target(), Vector2::new(1.0, -1.0));
    }

    #[test]
    fn zero_sized_surface_keeps_pointer_centered() {
        let mut pointer = SmoothedPointer::new();
        pointer.set_target(10.0, 10.0, Viewport::new(0, 0));
        assert_eq!(pointer.target(), Vector2::zero());
    }

    #[test]
    fn first_step_moves_three_percent() {
        let mut pointer = SmoothedPointer::new();
        pointer.set_target(800.0, 0.0, Viewport::new(800, 600));
        let current = pointer.step();
        assert!((current.x - 0.03).abs() < 1e-6);
        assert!((current.y + 0.03).abs() < 1e-6);
    }

    #[test]
    fn approaches_target_without_overshoot() {
        let mut pointer = SmoothedPointer::new();
        pointer.set_target(700.0, 150.0, Viewport::new(800, 600));
        let target = pointer.target();

        let mut previous = pointer.current();
        for _ in 0..600 {
            let current = pointer.step();
            assert!(current.x >= previous.x && current.x <= target.x);
            assert!(current.y <= previous.y && current.y >= target.y);
            previous = current;
        }
        assert!((previous.x - target.x).abs() < 1e-3);
        assert!((previous.y - target.y).abs() < 1e-3);
    }
}
