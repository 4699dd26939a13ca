#[derive(thiserror::Error, Debug)]
pub enum RecorderError {
    #[error("failed to start ffmpeg: {0}")]
    Spawn(#[source] std::io::Error),

    #[error("ffmpeg stdin is closed")]
    Closed,

    #[error("frame is {actual} bytes, expected {expected}")]
    FrameSize { expected: usize, actual: usize },

    #[error("failed to write frame to ffmpeg: {0}")]
    Write(#[source] std::io::Error),
}

#[derive(thiserror::Error, Debug)]
pub enum ContactError {
    #[error("webhook request failed: {0}")]
    Transport(String),

    #[error("webhook responded with status {0}")]
    Status(u16),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages_are_stable() {
        assert_eq!(ContactError::Status(404).to_string(), "webhook responded with status 404");
        assert!(ContactError::Transport("timeout".into()).to_string().contains("timeout"));
        assert!(
            RecorderError::FrameSize { expected: 4, actual: 3 }
                .to_string()
                .contains("expected 4")
        );
    }

    #[test]
    fn spawn_preserves_source() {
        let err = RecorderError::Spawn(std::io::Error::other("no ffmpeg"));
        assert!(err.to_string().contains("no ffmpeg"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
