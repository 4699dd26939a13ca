use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, warn};
use crate::canvas::{Canvas, Viewport};
use crate::constants::*;
use crate::engine::Engine;
use crate::host::{FrameHandle, Host, ListenerId, ListenerKind};
use crate::starfield::nebula::{draw_vignette, NEBULAE};
use crate::starfield::pointer::SmoothedPointer;
use crate::starfield::shooting_star::ShootingStar;
use crate::starfield::star::{self, Star};
use crate::state::RendererState;

pub struct StarfieldEngine {
    state: RendererState,
    viewport: Viewport,

    stars: Vec<Star>,
    shooting_stars: Vec<ShootingStar>,
    next_streak_id: u64,
    spawn_chance: f64,

    pointer: SmoothedPointer,

    frame: Option<FrameHandle>,
    listeners: Vec<ListenerId>,

    rng: StdRng,
}

impl StarfieldEngine {
    pub fn new(rng: StdRng) -> Self {
        Self {
            state: RendererState::Inactive,
            viewport: Viewport::default(),
            stars: Vec::new(),
            shooting_stars: Vec::new(),
            next_streak_id: 0,
            spawn_chance: SHOOTING_STAR_CHANCE,
            pointer: SmoothedPointer::new(),
            frame: None,
            listeners: Vec::new(),
            rng,
        }
    }

    /// Seeded engines replay the same sky for the same frame timestamps.
    pub fn from_seed(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::new(rng)
    }

    /// Per-frame spawn probability, clamped to [0, 1]; NaN disables spawning.
    pub fn with_spawn_chance(mut self, chance: f64) -> Self {
        self.spawn_chance = if chance.is_nan() { 0.0 } else { chance.clamp(0.0, 1.0) };
        self
    }

    /// Replaces the star set with one sized for `width` x `height`.
    pub fn initialize(&mut self, width: u32, height: u32) {
        self.viewport = Viewport::new(width, height);
        self.stars = star::generate(&mut self.rng, self.viewport);
        debug!(width, height, stars = self.stars.len(), "star field generated");
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn shooting_stars(&self) -> &[ShootingStar] {
        &self.shooting_stars
    }

    pub fn pointer(&self) -> &SmoothedPointer {
        &self.pointer
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn maybe_spawn_shooting_star(&mut self) {
        if self.shooting_stars.len() >= MAX_SHOOTING_STARS || self.viewport.area() == 0 {
            return;
        }
        if !self.rng.random_bool(self.spawn_chance) {
            return;
        }

        self.next_streak_id += 1;
        let streak = ShootingStar::spawn(self.next_streak_id, &mut self.rng, self.viewport);
        debug!(id = streak.id, x = streak.position.x, max_life = streak.max_life, "shooting star spawned");
        self.shooting_stars.push(streak);
    }

    fn update_shooting_stars(&mut self) {
        let viewport = self.viewport;
        for streak in self.shooting_stars.iter_mut() {
            streak.advance();
        }
        self.shooting_stars.retain(|streak| streak.is_alive(viewport));
    }
}

impl Engine for StarfieldEngine {
    fn mount(&mut self, surface: Option<Viewport>, host: &mut Host) -> bool {
        if self.state == RendererState::Running {
            return true;
        }

        let Some(viewport) = surface else {
            warn!("no drawing surface available, starfield disabled");
            return false;
        };

        self.listeners.push(host.add_listener(ListenerKind::PointerMove));
        self.listeners.push(host.add_listener(ListenerKind::Resize));
        self.initialize(viewport.width, viewport.height);
        self.frame = Some(host.request_frame());
        self.state = RendererState::Running;

        info!(width = viewport.width, height = viewport.height, "starfield mounted");
        true
    }

    fn resize(&mut self, width: u32, height: u32) {
        if self.state != RendererState::Running {
            return;
        }
        self.initialize(width, height);
        self.shooting_stars.retain(|streak| streak.is_alive(Viewport::new(width, height)));
    }

    fn on_pointer_move(&mut self, x: f32, y: f32) {
        if self.state != RendererState::Running {
            return;
        }
        self.pointer.set_target(x, y, self.viewport);
    }

    fn render_frame(&mut self, timestamp_ms: f64, canvas: &mut dyn Canvas, host: &mut Host) -> bool {
        if self.state != RendererState::Running {
            return false;
        }
        self.frame = None;

        let time_s = (timestamp_ms / 1000.0) as f32;
        let pointer = self.pointer.step();

        canvas.fill(BASE_COLOR);
        draw_vignette(canvas, self.viewport);
        for nebula in NEBULAE.iter() {
            nebula.draw(canvas, self.viewport, pointer, time_s);
        }

        let parallax = pointer * STAR_PARALLAX;
        for star in self.stars.iter() {
            star.draw(canvas, time_s, parallax);
        }

        self.maybe_spawn_shooting_star();
        self.update_shooting_stars();
        for streak in self.shooting_stars.iter() {
            streak.draw(canvas);
        }

        self.frame = Some(host.request_frame());
        true
    }

    fn teardown(&mut self, host: &mut Host) {
        if let Some(frame) = self.frame.take() {
            host.cancel_frame(frame);
        }
        for listener in self.listeners.drain(..) {
            host.remove_listener(listener);
        }
        if self.state == RendererState::Running {
            info!("starfield torn down");
        }
        self.state = RendererState::Inactive;
    }

    fn state(&self) -> RendererState {
        self.state
    }
}
