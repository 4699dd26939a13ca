use raylib::prelude::*;
use crate::host::{Host, ListenerKind};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    PointerMoved { x: f32, y: f32 },
    Resized { width: u32, height: u32 },
}

impl InputEvent {
    pub fn kind(&self) -> ListenerKind {
        match self {
            InputEvent::PointerMoved { .. } => ListenerKind::PointerMove,
            InputEvent::Resized { .. } => ListenerKind::Resize,
        }
    }
}

/// Filters `event` down to what should reach the engine: only kinds with a
/// registered listener, and nothing at all while recording, where output
/// must depend only on the seed and frame index.
pub fn route(event: InputEvent, host: &Host, recording: bool) -> Option<InputEvent> {
    if recording || !host.is_listening(event.kind()) {
        return None;
    }
    Some(event)
}

/// Turns raylib's polled window state into discrete events.
#[derive(Default)]
pub struct InputPoller {
    last_pointer: Option<Vector2>,
}

impl InputPoller {
    pub fn new() -> Self {
        Self::default()
    }

    /// `scale` maps window pixels to surface pixels when the two differ
    /// (recording renders at a fixed size behind a smaller window).
    pub fn poll(&mut self, rl: &RaylibHandle, scale: Vector2) -> Vec<InputEvent> {
        let mut events = Vec::new();

        if rl.is_window_resized() {
            events.push(InputEvent::Resized {
                width: rl.get_screen_width().max(0) as u32,
                height: rl.get_screen_height().max(0) as u32,
            });
        }

        let mouse = rl.get_mouse_position();
        if let Some(event) = self.pointer_event(Vector2::new(mouse.x * scale.x, mouse.y * scale.y)) {
            events.push(event);
        }

        events
    }

    fn pointer_event(&mut self, position: Vector2) -> Option<InputEvent> {
        if self.last_pointer == Some(position) {
            return None;
        }
        self.last_pointer = Some(position);
        Some(InputEvent::PointerMoved { x: position.x, y: position.y })
    }
}
