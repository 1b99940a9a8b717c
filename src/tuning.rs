//! Game balance values
//!
//! Loaded from JSON by the host (missing fields take defaults).

use serde::{Deserialize, Serialize};

/// Gameplay balance. All per-frame quantities assume ~60 Hz.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === World ===
    /// Scrollable world width
    pub world_width: f32,
    /// Extra world-space buffer beyond viewport edges for spawning/firing
    pub visible_margin: f32,
    /// Horizontal distance between terrain control points
    pub terrain_segment_width: f32,

    // === Plane ===
    pub start_speed: f32,
    pub min_speed: f32,
    pub max_speed: f32,
    /// Speed change per frame of throttle input
    pub throttle_response: f32,
    /// Heading change per frame of turn input (radians)
    pub turn_rate: f32,
    /// Velocity scale applied every frame
    pub drag: f32,
    pub start_fuel: f32,
    /// Fuel burned per frame at minimum speed
    pub fuel_burn_min: f32,
    /// Fuel burned per frame at maximum speed
    pub fuel_burn_max: f32,
    /// Plane dies when the tank runs dry
    pub fuel_exhaustion_kills: bool,
    pub start_lives: u8,
    pub max_lives: u8,

    // === Tanks ===
    /// Soft population target inside the visible window
    pub tank_target: usize,
    /// Respawn attempts per frame
    pub tank_spawn_attempts: usize,
    pub tank_blast_radius: f32,

    // === Towers ===
    pub tower_count: usize,
    pub tower_hp: u8,
    pub tower_blast_radius: f32,
    /// Frames between shots while in view
    pub tower_fire_rate: u32,
    pub bullet_speed: f32,
    pub bullet_hit_radius: f32,

    // === Powerups ===
    pub pickup_radius: f32,
    pub fuel_can_amount: f32,
    pub fuel_can_chance: f64,
    pub heart_chance: f64,
    /// Upward drift (pixels/frame)
    pub powerup_float_speed: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            world_width: 8000.0,
            visible_margin: 200.0,
            terrain_segment_width: 32.0,

            start_speed: 4.0,
            min_speed: 3.0,
            max_speed: 7.0,
            throttle_response: 0.1,
            turn_rate: 0.045,
            drag: 0.995,
            start_fuel: 200.0,
            fuel_burn_min: 0.08,
            fuel_burn_max: 0.20,
            fuel_exhaustion_kills: true,
            start_lives: 3,
            max_lives: 5,

            tank_target: 4,
            tank_spawn_attempts: 4,
            tank_blast_radius: 38.0,

            tower_count: 8,
            tower_hp: 2,
            tower_blast_radius: 48.0,
            tower_fire_rate: 60,
            bullet_speed: 5.0,
            bullet_hit_radius: 18.0,

            pickup_radius: 32.0,
            fuel_can_amount: 120.0,
            fuel_can_chance: 0.5,
            heart_chance: 0.25,
            powerup_float_speed: 0.75,
        }
    }
}

impl Tuning {
    /// Parse from JSON and normalize
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let tuning: Tuning = serde_json::from_str(json)?;
        Ok(tuning.normalized())
    }

    /// Clamp values the simulation cannot work with into a usable range
    pub fn normalized(mut self) -> Self {
        self.world_width = self.world_width.max(1.0);
        self.visible_margin = self.visible_margin.max(0.0);
        self.terrain_segment_width = self.terrain_segment_width.clamp(1.0, self.world_width);

        self.min_speed = self.min_speed.max(0.0);
        self.max_speed = self.max_speed.max(self.min_speed);
        self.start_speed = self.start_speed.clamp(self.min_speed, self.max_speed);
        self.throttle_response = self.throttle_response.max(0.0);
        self.drag = self.drag.clamp(0.0, 1.0);
        self.start_fuel = self.start_fuel.max(0.0);
        self.fuel_burn_min = self.fuel_burn_min.max(0.0);
        self.fuel_burn_max = self.fuel_burn_max.max(self.fuel_burn_min);
        self.max_lives = self.max_lives.max(1);
        self.start_lives = self.start_lives.clamp(1, self.max_lives);

        self.tower_hp = self.tower_hp.max(1);
        self.tower_fire_rate = self.tower_fire_rate.max(1);

        self.fuel_can_chance = self.fuel_can_chance.clamp(0.0, 1.0);
        self.heart_chance = self.heart_chance.clamp(0.0, 1.0);
        self
    }

    /// Number of terrain segments spanning the world
    pub fn terrain_segments(&self) -> usize {
        ((self.world_width / self.terrain_segment_width).floor() as usize).max(1)
    }

    /// Fuel burned this frame at the given speed (linear in normalized speed)
    pub fn fuel_burn(&self, speed: f32) -> f32 {
        let range = self.max_speed - self.min_speed;
        let factor = if range > 0.0 {
            ((speed - self.min_speed) / range).clamp(0.0, 1.0)
        } else {
            0.0
        };
        self.fuel_burn_min + factor * (self.fuel_burn_max - self.fuel_burn_min)
    }

    /// Cooldown value an off-screen tower is held at (or below)
    pub fn tower_offscreen_cooldown(&self) -> u32 {
        self.tower_fire_rate - self.tower_fire_rate / 4
    }
}
