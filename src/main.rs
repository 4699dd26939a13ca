use std::process;
use std::time::Duration;
use anyhow::{anyhow, Context, Result};
use clap::Parser;
use raylib::prelude::*;
use tracing::{info, warn};

use starfield::canvas::{RaylibCanvas, Viewport};
use starfield::config::{Cli, Command, ContactArgs, RunConfig};
use starfield::constants::*;
use starfield::contact;
use starfield::contact::banner::{Banner, BannerStatus, Clock, SystemClock};
use starfield::contact::form::ContactForm;
use starfield::contact::webhook::HttpWebhook;
use starfield::engine::Engine;
use starfield::ffmpeg::Recorder;
use starfield::host::Host;
use starfield::input::{route, InputEvent, InputPoller};
use starfield::StarfieldEngine;

fn init_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,starfield=debug"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(true))
        .init();
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Some(Command::Contact(args)) => send_contact(args),
        Some(Command::Run(args)) => run(args.into()),
        None => run(cli.run.into()),
    }
}

fn send_contact(args: ContactArgs) -> Result<()> {
    let webhook = HttpWebhook::new(args.webhook_url).context("failed to build webhook client")?;
    let mut form = ContactForm {
        name: args.name,
        email: args.email,
        message: args.message,
        context: args.context,
    };
    let mut banner = Banner::new();
    let clock = SystemClock::new();

    let status = contact::submit(&mut form, &webhook, &mut banner, &clock);
    println!("{}", status.message());

    // Hold the banner for its full duration, as the page does
    while let Some(expires_at) = banner.expires_at_ms() {
        std::thread::sleep(Duration::from_millis(expires_at.saturating_sub(clock.now_ms()).max(1)));
        banner.tick(clock.now_ms());
    }

    if status == BannerStatus::Failed {
        process::exit(1);
    }
    Ok(())
}

/// Off-screen surface the engine draws into. `None` puts the window in the
/// static fallback mode.
fn load_surface(rl: &mut RaylibHandle, thread: &RaylibThread, viewport: Viewport) -> Option<RenderTexture2D> {
    match rl.load_render_texture(thread, viewport.width, viewport.height) {
        Ok(texture) => Some(texture),
        Err(e) => {
            warn!(error = %e, width = viewport.width, height = viewport.height, "failed to create render surface");
            None
        }
    }
}

fn run(config: RunConfig) -> Result<()> {
    let window = match config.recording {
        // Recording renders at full size behind a half-size preview window
        Some(_) => Viewport::new((config.viewport.width / 2).max(1), (config.viewport.height / 2).max(1)),
        None => config.viewport,
    };

    let (mut rl, thread) = raylib::init()
        .size(window.width as i32, window.height as i32)
        .title("Starfield")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(config.fps);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    let mut recorder = match &config.recording {
        Some(recording) => Some(
            Recorder::spawn(config.viewport.width, config.viewport.height, config.fps, &recording.output)
                .context("failed to start recording")?,
        ),
        None => None,
    };

    let mut host = Host::new();
    let mut engine = StarfieldEngine::from_seed(config.seed);
    let mut framebuffer = if config.viewport.area() > 0 {
        load_surface(&mut rl, &thread, config.viewport)
    } else {
        None
    };
    let mounted = engine.mount(framebuffer.as_ref().map(|_| config.viewport), &mut host);

    let result = if !mounted && recorder.is_some() {
        Err(anyhow!("no render surface, nothing to record"))
    } else {
        frame_loop(&mut rl, &thread, &config, &mut engine, &mut host, &mut framebuffer, recorder.as_mut())
    };
    engine.teardown(&mut host);
    result
}

fn frame_loop(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    config: &RunConfig,
    engine: &mut StarfieldEngine,
    host: &mut Host,
    framebuffer: &mut Option<RenderTexture2D>,
    mut recorder: Option<&mut Recorder>,
) -> Result<()> {
    let mut poller = InputPoller::new();
    let mut viewport = config.viewport;
    let mut frame_index: u64 = 0;

    // --- Main Loop ---
    while !rl.window_should_close() {
        // 1. Deliver input to whoever is still listening
        let scale = Vector2::new(
            viewport.width as f32 / rl.get_screen_width().max(1) as f32,
            viewport.height as f32 / rl.get_screen_height().max(1) as f32,
        );
        let recording = recorder.is_some();
        for event in poller.poll(rl, scale) {
            let Some(event) = route(event, host, recording) else {
                continue;
            };
            match event {
                InputEvent::PointerMoved { x, y } => engine.on_pointer_move(x, y),
                InputEvent::Resized { width, height } => {
                    viewport = Viewport::new(width, height);
                    if viewport.area() == 0 {
                        engine.resize(width, height);
                        continue;
                    }
                    *framebuffer = load_surface(rl, thread, viewport);
                    if framebuffer.is_some() {
                        engine.resize(width, height);
                    } else {
                        engine.teardown(host);
                    }
                }
            }
        }

        // 2. Draw the pending frame into the off-screen surface
        let timestamp_ms = if recorder.is_some() {
            config.fixed_timestamp_ms(frame_index)
        } else {
            rl.get_time() * 1000.0
        };

        let mut drew = false;
        if let (Some(_), Some(fb)) = (host.take_pending(), framebuffer.as_mut()) {
            rl.draw_texture_mode(thread, fb, |mut tmd| {
                let mut canvas = RaylibCanvas::new(&mut tmd);
                drew = engine.render_frame(timestamp_ms, &mut canvas, host);
            });
        }

        // 3. Present it, flipped: render textures are stored bottom-up
        let mut d = rl.begin_drawing(thread);
        d.clear_background(BASE_COLOR);
        if let Some(fb) = framebuffer.as_ref() {
            let sw = d.get_screen_width() as f32;
            let sh = d.get_screen_height() as f32;
            d.draw_texture_pro(
                fb,
                Rectangle::new(0.0, 0.0, viewport.width as f32, -(viewport.height as f32)),
                Rectangle::new(0.0, 0.0, sw, sh),
                Vector2::zero(),
                0.0,
                Color::WHITE,
            );
        }
        drop(d);

        // 4. Hand the frame to ffmpeg
        if let (true, Some(recorder), Some(fb)) = (drew, recorder.as_deref_mut(), framebuffer.as_ref()) {
            let image = fb
                .load_image()
                .map_err(|e| anyhow!("failed to read back frame {}: {}", frame_index, e))?;
            recorder.write_frame(&image)?;
            frame_index += 1;

            if let Some(recording) = &config.recording {
                if frame_index >= recording.frames {
                    info!(frames = frame_index, "recording complete");
                    break;
                }
            }
        }
    }

    Ok(())
}
