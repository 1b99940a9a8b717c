//! Game state and core simulation types
//!
//! Every entity store is owned by `GameState` and mutated only by the tick.
//! Entities never reference each other; interactions are resolved by distance.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::camera::{Camera, Viewport};
use super::terrain::Terrain;
use super::towers::setup_towers;
use crate::consts::*;
use crate::heading;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, simulation frozen
    Start,
    /// Active gameplay
    Playing,
    /// Plane lost, simulation frozen until reset
    GameOver,
}

/// The player's aircraft
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Plane {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Heading (radians, 0 = right, positive turns nose down)
    pub angle: f32,
    pub speed: f32,
    pub fuel: f32,
    pub lives: u8,
    pub kills: u32,
    pub alive: bool,
    pub start_time_ms: u64,
    pub end_time_ms: Option<u64>,
}

impl Plane {
    pub fn new(tuning: &Tuning, viewport: &Viewport, now_ms: u64) -> Self {
        Self {
            pos: Vec2::new(viewport.width / 2.0, viewport.height / 3.0),
            vel: Vec2::new(tuning.start_speed, 0.0),
            angle: 0.0,
            speed: tuning.start_speed,
            fuel: tuning.start_fuel,
            lives: tuning.start_lives,
            kills: 0,
            alive: true,
            start_time_ms: now_ms,
            end_time_ms: None,
        }
    }

    /// Point under the fuselage used for ground contact
    pub fn belly(&self) -> Vec2 {
        self.pos + heading(self.angle + std::f32::consts::FRAC_PI_2) * PLANE_FOOTPRINT
    }

    /// Time alive (frozen once the plane is lost)
    pub fn elapsed_ms(&self, now_ms: u64) -> u64 {
        self.end_time_ms
            .unwrap_or(now_ms)
            .saturating_sub(self.start_time_ms)
    }

    /// Lose one life; returns true if that was the last
    pub fn take_hit(&mut self) -> bool {
        self.lives = self.lives.saturating_sub(1);
        if self.lives == 0 {
            self.alive = false;
        }
        !self.alive
    }
}

/// A falling bomb
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bomb {
    pub pos: Vec2,
    pub vel: Vec2,
    pub exploded: bool,
}

/// A tower round
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bullet {
    pub pos: Vec2,
    pub vel: Vec2,
}

/// A ground tank
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tank {
    pub pos: Vec2,
    pub alive: bool,
}

/// Which way the tower sprite faces (cosmetic)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TowerSide {
    Left,
    Right,
}

/// An anti-air tower. `pos` is the sprite's top-left corner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tower {
    pub pos: Vec2,
    pub hp: u8,
    pub alive: bool,
    /// Frames since last shot
    pub cooldown: u32,
    pub side: TowerSide,
}

impl Tower {
    /// Where bullets leave the tower
    pub fn muzzle(&self) -> Vec2 {
        self.pos + Vec2::splat(TOWER_WIDTH / 2.0)
    }

    /// Sprite center (explosions are placed here)
    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::new(TOWER_WIDTH / 2.0, TOWER_HEIGHT / 2.0)
    }

    /// Middle of the footing on the ground line; bomb blasts are measured here
    pub fn base(&self) -> Vec2 {
        self.pos + Vec2::new(TOWER_WIDTH / 2.0, TOWER_HEIGHT)
    }
}

/// Power-up types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PickupKind {
    FuelCan,
    Heart,
}

/// A floating power-up
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pickup {
    pub pos: Vec2,
    pub vel: Vec2,
    pub alive: bool,
}

/// A growing blast (visual, no gameplay effect)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Explosion {
    pub pos: Vec2,
    pub radius: f32,
    /// Frames remaining
    pub life: u32,
}

impl Explosion {
    pub fn new(pos: Vec2, (radius, life): (f32, u32)) -> Self {
        Self { pos, radius, life }
    }

    /// Grow and count down one frame
    pub fn age(&mut self) {
        self.radius += EXPLOSION_GROWTH;
        self.life = self.life.saturating_sub(1);
    }
}

/// Notable things that happened during a tick (drained by the host)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    BombDetonated { pos: Vec2 },
    TankDestroyed { pos: Vec2 },
    TowerDamaged { pos: Vec2, hp: u8 },
    TowerDestroyed { pos: Vec2 },
    PlaneHit { lives: u8 },
    PickupCollected { kind: PickupKind },
    PlaneDestroyed { pos: Vec2 },
    /// Show the restart affordance
    GameOver { survived_ms: u64 },
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed of the RNG driving terrain and spawns
    pub seed: u64,
    pub tuning: Tuning,
    pub phase: GamePhase,
    pub viewport: Viewport,
    pub camera: Camera,
    pub terrain: Terrain,
    pub plane: Plane,
    pub bombs: Vec<Bomb>,
    pub bullets: Vec<Bullet>,
    pub tanks: Vec<Tank>,
    pub towers: Vec<Tower>,
    pub fuel_cans: Vec<Pickup>,
    pub hearts: Vec<Pickup>,
    pub explosions: Vec<Explosion>,
    /// Steer toward the pointer instead of turn keys
    pub aim_mode: bool,
    /// Frames simulated since the last reset
    pub frame: u64,
    pub(crate) rng: Pcg32,
    pub(crate) events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new game state on the title screen
    pub fn new(seed: u64, viewport: Viewport, tuning: Tuning) -> Self {
        let tuning = tuning.normalized();
        let mut rng = Pcg32::seed_from_u64(seed);
        let terrain = Terrain::generate(
            &mut rng,
            tuning.world_width,
            viewport.height,
            tuning.terrain_segments(),
        );
        let towers = setup_towers(&terrain, &tuning);
        let plane = Plane::new(&tuning, &viewport, 0);

        Self {
            seed,
            tuning,
            phase: GamePhase::Start,
            viewport,
            camera: Camera::default(),
            terrain,
            plane,
            bombs: Vec::new(),
            bullets: Vec::new(),
            tanks: Vec::new(),
            towers,
            fuel_cans: Vec::new(),
            hearts: Vec::new(),
            explosions: Vec::new(),
            aim_mode: false,
            frame: 0,
            rng,
            events: Vec::new(),
        }
    }

    /// Create a state seeded from OS entropy
    pub fn unseeded(viewport: Viewport, tuning: Tuning) -> Self {
        Self::new(rand::random(), viewport, tuning)
    }

    /// Start a fresh run: new plane, empty stores, new terrain and towers.
    /// A full reset enters `Playing` immediately; otherwise the caller
    /// decides when to start.
    pub fn reset(&mut self, full_reset: bool, now_ms: u64) {
        self.plane = Plane::new(&self.tuning, &self.viewport, now_ms);
        self.bombs.clear();
        self.bullets.clear();
        self.tanks.clear();
        self.fuel_cans.clear();
        self.hearts.clear();
        self.explosions.clear();
        self.events.clear();
        self.frame = 0;

        self.terrain = Terrain::generate(
            &mut self.rng,
            self.tuning.world_width,
            self.viewport.height,
            self.tuning.terrain_segments(),
        );
        self.camera = Camera::default();
        self.towers = setup_towers(&self.terrain, &self.tuning);

        log::info!(
            "Reset (full: {}): {} towers, {} terrain points",
            full_reset,
            self.towers.len(),
            self.terrain.points().len()
        );

        if full_reset {
            self.phase = GamePhase::Playing;
        }
    }

    /// Enter `Playing` (after a partial reset). A lost plane needs a reset
    /// first, so this does nothing while the plane is down.
    pub fn start_playing(&mut self) {
        if !self.plane.alive {
            log::warn!("Cannot resume with a lost plane; reset first");
            return;
        }
        self.phase = GamePhase::Playing;
    }

    /// Host resized the display
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Take all events recorded since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Events recorded since the last drain
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }
}
