use std::io::Write;
use std::path::Path;
use std::process::{Child, ChildStdin, Command, Stdio};
use raylib::prelude::*;
use tracing::{info, warn};
use crate::error::RecorderError;

/// Pipes raw RGBA frames into an `ffmpeg` child process.
pub struct Recorder {
    process: Child,
    stdin: Option<ChildStdin>,
    width: u32,
    height: u32,
    frames: u64,
}

impl Recorder {
    pub fn spawn(width: u32, height: u32, fps: u32, output: &Path) -> Result<Recorder, RecorderError> {
        let mut process = Command::new("ffmpeg")
            .stdin(Stdio::piped())
            .args(["-loglevel", "error"])
            .arg("-y")
            .args(["-f", "rawvideo"])
            .args(["-pixel_format", "rgba"])
            .args(["-video_size", &format!("{}x{}", width, height)])
            .args(["-framerate", &format!("{}", fps)])
            .args(["-i", "-"])
            .args(["-c:v", "libx264"])
            .args(["-pix_fmt", "yuv420p"])
            .arg(output)
            .spawn()
            .map_err(RecorderError::Spawn)?;
        let stdin = process.stdin.take().ok_or(RecorderError::Closed)?;

        info!(output = %output.display(), width, height, fps, "recording started");
        Ok(Recorder { process, stdin: Some(stdin), width, height, frames: 0 })
    }

    /// Writes a frame read back from a render texture.
    pub fn write_frame(&mut self, image: &Image) -> Result<(), RecorderError> {
        let len = (image.width().max(0) * image.height().max(0) * 4) as usize; // 4 bytes per pixel (RGBA)
        // SAFETY: images read back from a render texture are R8G8B8A8, so the
        // buffer holds exactly width * height * 4 bytes.
        let pixels = unsafe { std::slice::from_raw_parts(image.data() as *const u8, len) };

        let stdin = self.stdin.as_mut().ok_or(RecorderError::Closed)?;
        write_flipped(stdin, pixels, self.width, self.height)?;
        self.frames += 1;
        Ok(())
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

/// Writes RGBA rows bottom-up: render textures are stored upside down
/// relative to what ffmpeg expects.
pub fn write_flipped(out: &mut impl Write, pixels: &[u8], width: u32, height: u32) -> Result<(), RecorderError> {
    let stride = width as usize * 4;
    let expected = stride * height as usize;
    if pixels.len() != expected {
        return Err(RecorderError::FrameSize { expected, actual: pixels.len() });
    }

    for row in pixels.chunks_exact(stride.max(1)).rev() {
        out.write_all(row).map_err(RecorderError::Write)?;
    }
    Ok(())
}

impl Drop for Recorder {
    fn drop(&mut self) {
        // Closing stdin lets ffmpeg finalize the file
        self.stdin = None;
        match self.process.wait() {
            Ok(status) if status.success() => info!(frames = self.frames, "recording finished"),
            Ok(status) => warn!(%status, "ffmpeg exited with an error"),
            Err(e) => warn!(error = %e, "failed to wait for ffmpeg"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_are_written_bottom_up() {
        let pixels: Vec<u8> = (0..24).collect(); // 2x3 RGBA
        let mut out = Vec::new();
        write_flipped(&mut out, &pixels, 2, 3).unwrap();

        assert_eq!(&out[0..8], &pixels[16..24]);
        assert_eq!(&out[8..16], &pixels[8..16]);
        assert_eq!(&out[16..24], &pixels[0..8]);
    }

    #[test]
    fn mismatched_frame_is_rejected() {
        let mut out = Vec::new();
        let err = write_flipped(&mut out, &[0u8; 12], 2, 2).unwrap_err();
        assert!(matches!(err, RecorderError::FrameSize { expected: 16, actual: 12 }));
        assert!(out.is_empty());
    }
}
