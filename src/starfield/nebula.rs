use raylib::prelude::*;
use crate::canvas::{with_alpha, Canvas, Viewport};
use crate::constants::*;

/// One soft colour wash. Anchor and radius are relative to the surface.
#[derive(Debug, Clone, Copy)]
pub struct Nebula {
    pub anchor: (f32, f32),
    pub radius: f32,   // Fraction of the larger surface dimension
    pub color: Color,
    pub alpha: f32,
    pub parallax: f32, // Pixels of shift at full pointer deflection
    pub phase: f32,
}

pub const NEBULAE: [Nebula; 4] = [
    Nebula { anchor: (0.25, 0.30), radius: 0.45, color: GOLD, alpha: 0.16, parallax: 12.0, phase: 0.0 },
    Nebula { anchor: (0.75, 0.25), radius: 0.40, color: RED, alpha: 0.10, parallax: 18.0, phase: 1.6 },
    Nebula { anchor: (0.65, 0.75), radius: 0.50, color: ORANGE, alpha: 0.12, parallax: 8.0, phase: 3.1 },
    Nebula { anchor: (0.20, 0.80), radius: 0.35, color: VIOLET, alpha: 0.14, parallax: 22.0, phase: 4.7 },
];

impl Nebula {
    pub fn pulse(&self, time_s: f32) -> f32 {
        1.0 + NEBULA_PULSE_AMOUNT * (time_s * NEBULA_PULSE_SPEED + self.phase).sin()
    }

    pub fn center(&self, viewport: Viewport, pointer: Vector2) -> Vector2 {
        Vector2::new(
            self.anchor.0 * viewport.width as f32 + pointer.x * self.parallax,
            self.anchor.1 * viewport.height as f32 + pointer.y * self.parallax,
        )
    }

    pub fn draw(&self, canvas: &mut dyn Canvas, viewport: Viewport, pointer: Vector2, time_s: f32) {
        let pulse = self.pulse(time_s);
        let radius = self.radius * viewport.width.max(viewport.height) as f32 * pulse;

        canvas.radial_gradient(
            self.center(viewport, pointer),
            radius,
            with_alpha(self.color, self.alpha * pulse),
            with_alpha(self.color, 0.0),
        );
    }
}

/// Darkens towards the edges; the circle reaches the corners.
pub fn draw_vignette(canvas: &mut dyn Canvas, viewport: Viewport) {
    let radius = (viewport.width as f32).hypot(viewport.height as f32) * 0.5;
    canvas.radial_gradient(
        viewport.center(),
        radius,
        with_alpha(Color::BLACK, 0.0),
        with_alpha(Color::BLACK, 0.6),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::recording::{DrawOp, RecordingCanvas};

    #[test]
    fn pointer_shifts_each_layer_by_its_coefficient() {
        let viewport = Viewport::new(1000, 500);
        for nebula in NEBULAE.iter() {
            let rest = nebula.center(viewport, Vector2::zero());
            let moved = nebula.center(viewport, Vector2::new(1.0, -1.0));
            assert!((moved.x - rest.x - nebula.parallax).abs() < 1e-4);
            assert!((rest.y - moved.y - nebula.parallax).abs() < 1e-4);
        }
    }

    #[test]
    fn pulse_stays_bounded() {
        for nebula in NEBULAE.iter() {
            for step in 0..100 {
                let p = nebula.pulse(step as f32 * 0.7);
                assert!(p >= 1.0 - NEBULA_PULSE_AMOUNT - 1e-6);
                assert!(p <= 1.0 + NEBULA_PULSE_AMOUNT + 1e-6);
            }
        }
    }

    #[test]
    fn vignette_is_centered_and_covers_corners() {
        let mut canvas = RecordingCanvas::default();
        draw_vignette(&mut canvas, Viewport::new(300, 400));

        match &canvas.ops[..] {
            [DrawOp::RadialGradient { center, radius, inner, outer }] => {
                assert_eq!(*center, Vector2::new(150.0, 200.0));
                assert!((*radius - 250.0).abs() < 1e-3);
                assert_eq!(inner.a, 0);
                assert!(outer.a > 0);
            }
            other => panic!("unexpected ops {other:?}"),
        }
    }
}
