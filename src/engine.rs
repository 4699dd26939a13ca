use crate::canvas::{Canvas, Viewport};
use crate::host::Host;
use crate::state::RendererState;

/// A frame-driven background animation hosted by the window loop.
pub trait Engine {
    /// `surface` is `None` when no drawing context could be created; the
    /// engine then stays inactive and returns `false`.
    fn mount(&mut self, surface: Option<Viewport>, host: &mut Host) -> bool;
    fn resize(&mut self, width: u32, height: u32);
    fn on_pointer_move(&mut self, x: f32, y: f32);
    fn render_frame(&mut self, timestamp_ms: f64, canvas: &mut dyn Canvas, host: &mut Host) -> bool;
    fn teardown(&mut self, host: &mut Host);
    fn state(&self) -> RendererState;
}
