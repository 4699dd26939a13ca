//! Platform side of the renderer: frame requests and event listener
//! registrations. The window loop only draws while a frame is pending, so
//! cancelling the request is what stops the animation.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameHandle(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListenerId(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListenerKind {
    PointerMove,
    Resize,
}

#[derive(Debug, Default)]
pub struct Host {
    next_id: u64,
    pending: Option<FrameHandle>,
    listeners: Vec<(ListenerId, ListenerKind)>,
}

impl Host {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    /// Asks for one callback on the next display refresh. Replaces any
    /// request still outstanding.
    pub fn request_frame(&mut self) -> FrameHandle {
        let handle = FrameHandle(self.next_id());
        self.pending = Some(handle);
        handle
    }

    pub fn cancel_frame(&mut self, handle: FrameHandle) {
        if self.pending == Some(handle) {
            self.pending = None;
        }
    }

    /// Consumes the pending request, if any. Called once per loop iteration.
    pub fn take_pending(&mut self) -> Option<FrameHandle> {
        self.pending.take()
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn add_listener(&mut self, kind: ListenerKind) -> ListenerId {
        let id = ListenerId(self.next_id());
        self.listeners.push((id, kind));
        id
    }

    pub fn remove_listener(&mut self, id: ListenerId) {
        self.listeners.retain(|(listener, _)| *listener != id);
    }

    pub fn is_listening(&self, kind: ListenerKind) -> bool {
        self.listeners.iter().any(|(_, k)| *k == kind)
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cancel_only_drops_matching_request() {
        let mut host = Host::new();
        let stale = host.request_frame();
        let current = host.request_frame();

        host.cancel_frame(stale);
        assert!(host.has_pending());

        host.cancel_frame(current);
        assert!(!host.has_pending());
    }

    #[test]
    fn take_pending_consumes_request() {
        let mut host = Host::new();
        let handle = host.request_frame();
        assert_eq!(host.take_pending(), Some(handle));
        assert_eq!(host.take_pending(), None);
    }

    #[test]
    fn listeners_are_removed_by_id() {
        let mut host = Host::new();
        let pointer = host.add_listener(ListenerKind::PointerMove);
        let resize = host.add_listener(ListenerKind::Resize);
        assert!(host.is_listening(ListenerKind::PointerMove));

        host.remove_listener(pointer);
        assert!(!host.is_listening(ListenerKind::PointerMove));
        assert!(host.is_listening(ListenerKind::Resize));

        host.remove_listener(resize);
        assert_eq!(host.listener_count(), 0);
    }
}
