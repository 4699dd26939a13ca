use raylib::prelude::Color;

pub const RENDER_WIDTH: u32 = 1920;           // Default width of the render surface
pub const RENDER_HEIGHT: u32 = 1080;          // Default height of the render surface
pub const FPS: u32 = 60;                      // Frames per second

pub const STAR_DENSITY: u64 = 1500;           // Pixels of viewport area per star
pub const STAR_MIN_SIZE: f32 = 0.3;           // Star radius range (pixels)
pub const STAR_MAX_SIZE: f32 = 1.5;
pub const STAR_MIN_BRIGHTNESS: f32 = 0.5;
pub const STAR_MAX_BRIGHTNESS: f32 = 1.0;
pub const TWINKLE_MIN_SPEED: f32 = 0.5;       // Radians per second
pub const TWINKLE_MAX_SPEED: f32 = 2.5;
pub const HALO_BRIGHTNESS: f32 = 0.8;         // Stars above both thresholds get a halo
pub const HALO_SIZE: f32 = 1.0;

pub const POINTER_LERP: f32 = 0.03;           // Smoothing factor applied once per frame
pub const STAR_PARALLAX: f32 = 30.0;          // Max star offset (pixels) at depth 1.0

pub const NEBULA_PULSE_SPEED: f32 = 0.4;      // Radians per second
pub const NEBULA_PULSE_AMOUNT: f32 = 0.15;

pub const SHOOTING_STAR_CHANCE: f64 = 0.003;  // Spawn probability per frame
pub const MAX_SHOOTING_STARS: usize = 2;
pub const SHOOTING_STAR_JITTER: f32 = 0.15;   // Radians around the 45 degree heading
pub const SHOOTING_STAR_MIN_SPEED: f32 = 6.0; // Pixels per frame
pub const SHOOTING_STAR_MAX_SPEED: f32 = 12.0;
pub const SHOOTING_STAR_MIN_LIFE: u32 = 60;   // Frames
pub const SHOOTING_STAR_MAX_LIFE: u32 = 120;
pub const SHOOTING_STAR_FADE_IN: f32 = 0.3;   // Share of life spent fading in
pub const SHOOTING_STAR_TRAIL: f32 = 10.0;    // Trail length in velocity steps
pub const TRAIL_SEGMENTS: usize = 12;

pub const BANNER_DURATION_MS: u64 = 3000;     // Contact banner auto-dismiss delay

pub const BASE_COLOR: Color = Color::new(10, 10, 10, 255);
pub const GOLD: Color = Color::new(158, 125, 46, 255);
pub const RED: Color = Color::new(240, 61, 46, 255);
pub const ORANGE: Color = Color::new(247, 148, 28, 255);
pub const VIOLET: Color = Color::new(86, 60, 160, 255);
pub const COOL_STAR: Color = Color::new(190, 210, 255, 255);
pub const NEUTRAL_STAR: Color = Color::new(255, 255, 255, 255);
pub const WARM_STAR: Color = Color::new(255, 226, 190, 255);
