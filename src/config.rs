use std::path::PathBuf;
use clap::{Args, Parser, Subcommand};
use crate::canvas::Viewport;
use crate::constants::*;

const DEFAULT_RECORD_FRAMES: u64 = 600;

#[derive(Parser, Debug)]
#[command(name = "starfield", version, about = "Animated parallax starfield background")]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub run: RunArgs,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Open the starfield window (default).
    Run(RunArgs),
    /// Send a message through the contact webhook.
    Contact(ContactArgs),
}

#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    /// Surface width in pixels.
    #[arg(long, default_value_t = RENDER_WIDTH)]
    pub width: u32,

    /// Surface height in pixels.
    #[arg(long, default_value_t = RENDER_HEIGHT)]
    pub height: u32,

    /// Target frames per second.
    #[arg(long, default_value_t = FPS, value_parser = clap::value_parser!(u32).range(1..=240))]
    pub fps: u32,

    /// Seed for star placement and shooting stars.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Record to an MP4 file (requires `ffmpeg` on PATH).
    #[arg(long)]
    pub record: Option<PathBuf>,

    /// Number of frames to record.
    #[arg(long, requires = "record")]
    pub frames: Option<u64>,
}

#[derive(Args, Debug, Clone)]
pub struct ContactArgs {
    #[arg(long, default_value = "")]
    pub name: String,

    #[arg(long, default_value = "")]
    pub email: String,

    /// What the sender is trying to do.
    #[arg(long, default_value = "")]
    pub message: String,

    /// Optional additional context.
    #[arg(long, default_value = "")]
    pub context: String,

    /// Webhook receiving the message.
    #[arg(long, env = "CONTACT_WEBHOOK_URL")]
    pub webhook_url: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Recording {
    pub output: PathBuf,
    pub frames: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub viewport: Viewport,
    pub fps: u32,
    pub seed: Option<u64>,
    pub recording: Option<Recording>,
}

impl From<RunArgs> for RunConfig {
    fn from(args: RunArgs) -> Self {
        Self {
            viewport: Viewport::new(args.width, args.height),
            fps: args.fps,
            seed: args.seed,
            recording: args.record.map(|output| Recording {
                output,
                frames: args.frames.unwrap_or(DEFAULT_RECORD_FRAMES),
            }),
        }
    }
}

impl RunConfig {
    /// Timestamp of frame `index` when frames are produced offline.
    pub fn fixed_timestamp_ms(&self, index: u64) -> f64 {
        index as f64 * 1000.0 / self.fps as f64
    }
}
