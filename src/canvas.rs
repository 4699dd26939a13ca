use raylib::prelude::*;
use crate::constants::TRAIL_SEGMENTS;

/// Size of a drawing surface in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    pub fn center(&self) -> Vector2 {
        Vector2::new(self.width as f32 * 0.5, self.height as f32 * 0.5)
    }

    pub fn contains(&self, point: Vector2) -> bool {
        point.x >= 0.0
            && point.y >= 0.0
            && point.x <= self.width as f32
            && point.y <= self.height as f32
    }
}

/// Immediate-mode 2D drawing surface the starfield paints onto.
pub trait Canvas {
    fn fill(&mut self, color: Color);
    fn radial_gradient(&mut self, center: Vector2, radius: f32, inner: Color, outer: Color);
    fn circle(&mut self, center: Vector2, radius: f32, color: Color);
    fn line(&mut self, from: Vector2, to: Vector2, width: f32, color: Color);

    /// Line whose colour blends from `from_color` at `from` to `to_color` at `to`.
    fn gradient_line(&mut self, from: Vector2, to: Vector2, width: f32, from_color: Color, to_color: Color) {
        for i in 0..TRAIL_SEGMENTS {
            let t0 = i as f32 / TRAIL_SEGMENTS as f32;
            let t1 = (i + 1) as f32 / TRAIL_SEGMENTS as f32;
            let color = mix(from_color, to_color, (t0 + t1) * 0.5);
            self.line(from.lerp(to, t0), from.lerp(to, t1), width, color);
        }
    }
}

/// `color` with its alpha replaced by `alpha` (0.0 - 1.0).
pub fn with_alpha(color: Color, alpha: f32) -> Color {
    Color::new(color.r, color.g, color.b, (alpha.clamp(0.0, 1.0) * 255.0).round() as u8)
}

pub fn mix(a: Color, b: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    let channel = |x: u8, y: u8| (x as f32 + (y as f32 - x as f32) * t).round() as u8;
    Color::new(channel(a.r, b.r), channel(a.g, b.g), channel(a.b, b.b), channel(a.a, b.a))
}

/// Canvas backed by any raylib draw handle (screen or render texture).
pub struct RaylibCanvas<'a, D: RaylibDraw> {
    d: &'a mut D,
}

impl<'a, D: RaylibDraw> RaylibCanvas<'a, D> {
    pub fn new(d: &'a mut D) -> Self {
        Self { d }
    }
}

impl<D: RaylibDraw> Canvas for RaylibCanvas<'_, D> {
    fn fill(&mut self, color: Color) {
        self.d.clear_background(color);
    }

    fn radial_gradient(&mut self, center: Vector2, radius: f32, inner: Color, outer: Color) {
        self.d.draw_circle_gradient(center.x.round() as i32, center.y.round() as i32, radius, inner, outer);
    }

    fn circle(&mut self, center: Vector2, radius: f32, color: Color) {
        self.d.draw_circle_v(center, radius, color);
    }

    fn line(&mut self, from: Vector2, to: Vector2, width: f32, color: Color) {
        self.d.draw_line_ex(from, to, width, color);
    }
}

#[cfg(test)]
pub mod recording {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    pub enum DrawOp {
        Fill(Color),
        RadialGradient { center: Vector2, radius: f32, inner: Color, outer: Color },
        Circle { center: Vector2, radius: f32, color: Color },
        Line { from: Vector2, to: Vector2, width: f32, color: Color },
    }

    /// Canvas that records every call instead of drawing.
    #[derive(Default)]
    pub struct RecordingCanvas {
        pub ops: Vec<DrawOp>,
    }

    impl RecordingCanvas {
        pub fn circles(&self) -> usize {
            self.ops.iter().filter(|op| matches!(op, DrawOp::Circle { .. })).count()
        }

        pub fn gradients(&self) -> usize {
            self.ops.iter().filter(|op| matches!(op, DrawOp::RadialGradient { .. })).count()
        }
    }

    impl Canvas for RecordingCanvas {
        fn fill(&mut self, color: Color) {
            self.ops.push(DrawOp::Fill(color));
        }

        fn radial_gradient(&mut self, center: Vector2, radius: f32, inner: Color, outer: Color) {
            self.ops.push(DrawOp::RadialGradient { center, radius, inner, outer });
        }

        fn circle(&mut self, center: Vector2, radius: f32, color: Color) {
            self.ops.push(DrawOp::Circle { center, radius, color });
        }

        fn line(&mut self, from: Vector2, to: Vector2, width: f32, color: Color) {
            self.ops.push(DrawOp::Line { from, to, width, color });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::recording::{DrawOp, RecordingCanvas};
    use super::*;

    #[test]
    fn zero_sized_viewport_has_no_area() {
        assert_eq!(Viewport::new(0, 1080).area(), 0);
        assert_eq!(Viewport::new(1920, 1080).area(), 2_073_600);
    }

    #[test]
    fn contains_includes_edges() {
        let viewport = Viewport::new(100, 50);
        assert!(viewport.contains(Vector2::new(0.0, 0.0)));
        assert!(viewport.contains(Vector2::new(100.0, 50.0)));
        assert!(!viewport.contains(Vector2::new(100.5, 10.0)));
        assert!(!viewport.contains(Vector2::new(10.0, -0.1)));
    }

    #[test]
    fn with_alpha_clamps() {
        assert_eq!(with_alpha(Color::WHITE, 2.0).a, 255);
        assert_eq!(with_alpha(Color::WHITE, -1.0).a, 0);
        assert_eq!(with_alpha(Color::WHITE, 0.5).a, 128);
    }

    #[test]
    fn gradient_line_blends_from_tail_to_head() {
        let mut canvas = RecordingCanvas::default();
        let tail = with_alpha(Color::WHITE, 0.0);
        canvas.gradient_line(Vector2::new(0.0, 0.0), Vector2::new(120.0, 0.0), 1.0, tail, Color::WHITE);

        assert_eq!(canvas.ops.len(), TRAIL_SEGMENTS);
        let alphas: Vec<u8> = canvas
            .ops
            .iter()
            .map(|op| match op {
                DrawOp::Line { color, .. } => color.a,
                other => panic!("unexpected op {other:?}"),
            })
            .collect();
        assert!(alphas.windows(2).all(|w| w[0] < w[1]));

        match (&canvas.ops[0], &canvas.ops[TRAIL_SEGMENTS - 1]) {
            (DrawOp::Line { from, .. }, DrawOp::Line { to, .. }) => {
                assert_eq!(from.x, 0.0);
                assert_eq!(to.x, 120.0);
            }
            _ => unreachable!(),
        }
    }
}
