//! Sky Bomber - A side-scrolling bomber arcade game
//!
//! Core modules:
//! - `sim`: Simulation (plane physics, terrain, collisions, spawning, game state)
//! - `platform`: Host abstraction (clock, polled input snapshot)
//! - `tuning`: Data-driven game balance

pub mod platform;
pub mod sim;
pub mod tuning;

pub use platform::time::format_time;
pub use tuning::Tuning;

use glam::Vec2;

/// Fixed geometry and effect constants (not balance, see `Tuning`)
pub mod consts {
    /// Bomb gravity (pixels/frame²)
    pub const BOMB_GRAVITY: f32 = 0.6;
    /// Fraction of plane velocity inherited by a released bomb
    pub const BOMB_RELEASE_FACTOR: f32 = 0.7;
    /// Extra downward velocity on release
    pub const BOMB_RELEASE_KICK: f32 = 6.0;
    /// Bomb detonates this far above the ground line
    pub const BOMB_FUSE_HEIGHT: f32 = 4.0;

    /// Tower sprite footprint
    pub const TOWER_WIDTH: f32 = 48.0;
    pub const TOWER_HEIGHT: f32 = 96.0;

    /// Tank sits this far above the ground line
    pub const TANK_GROUND_OFFSET: f32 = 26.0;
    /// Powerups pop out this far above a destroyed tank
    pub const POWERUP_SPAWN_OFFSET: f32 = 10.0;
    /// Powerup sprite size (used for the off-screen test)
    pub const POWERUP_SIZE: f32 = 26.0;

    /// Plane flight band (distance from top / bottom of viewport)
    pub const FLIGHT_BAND_TOP: f32 = 15.0;
    pub const FLIGHT_BAND_BOTTOM: f32 = 42.0;
    /// Distance from plane center to its belly along the heading normal
    pub const PLANE_FOOTPRINT: f32 = 24.0;

    /// Terrain generation shape (relative to base height)
    pub const TERRAIN_START_DEPTH: f32 = 210.0;
    pub const TERRAIN_START_RATIO: f32 = 1.2;
    pub const TERRAIN_ROUGHNESS: f32 = 60.0;
    pub const TERRAIN_CEILING_DEPTH: f32 = 440.0;
    pub const TERRAIN_FLOOR_DEPTH: f32 = 60.0;
    /// Ground height reported outside the terrain domain
    pub const TERRAIN_FALLBACK_DEPTH: f32 = 50.0;

    /// Explosion growth per frame
    pub const EXPLOSION_GROWTH: f32 = 2.0;
    /// (radius, life) per explosion flavor
    pub const BOMB_BLAST: (f32, u32) = (6.0, 16);
    pub const TOWER_DAMAGED_BLAST: (f32, u32) = (8.0, 10);
    pub const TOWER_DESTROYED_BLAST: (f32, u32) = (12.0, 20);
    pub const BULLET_HIT_BLAST: (f32, u32) = (3.0, 8);
    pub const PLANE_DEATH_BLAST: (f32, u32) = (8.0, 16);
}

/// Normalized angle to [-π, π)
#[inline]
pub fn normalize_angle(mut angle: f32) -> f32 {
    use std::f32::consts::PI;
    while angle >= PI {
        angle -= 2.0 * PI;
    }
    while angle < -PI {
        angle += 2.0 * PI;
    }
    angle
}

/// Unit vector for a heading angle
#[inline]
pub fn heading(angle: f32) -> Vec2 {
    Vec2::new(angle.cos(), angle.sin())
}

/// Clamp without panicking when the range is inverted (lower bound wins)
#[inline]
pub fn clamp_lenient(value: f32, min: f32, max: f32) -> f32 {
    value.min(max).max(min)
}
