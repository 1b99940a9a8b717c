//! Read-only view of a frame for renderers and HUDs
//!
//! Building a snapshot never mutates the game state.

use glam::Vec2;
use serde::Serialize;

use super::state::{Bomb, Bullet, Explosion, GamePhase, GameState, Pickup, Plane, Tank, Tower};

/// Scalars shown on the heads-up display
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Hud {
    pub fuel: f32,
    /// Current speed as a fraction of max speed
    pub speed_pct: f32,
    pub lives: u8,
    pub kills: u32,
    /// Survival time (frozen once the game ends)
    pub elapsed_ms: u64,
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, Serialize)]
pub struct FrameSnapshot {
    pub frame: u64,
    pub phase: GamePhase,
    pub camera_x: f32,
    pub aim_mode: bool,
    pub terrain: Vec<Vec2>,
    pub plane: Plane,
    pub bombs: Vec<Bomb>,
    pub bullets: Vec<Bullet>,
    pub tanks: Vec<Tank>,
    /// Standing towers only
    pub towers: Vec<Tower>,
    pub fuel_cans: Vec<Pickup>,
    pub hearts: Vec<Pickup>,
    pub explosions: Vec<Explosion>,
    pub hud: Hud,
}

/// HUD values at `now_ms`
pub fn build_hud(state: &GameState, now_ms: u64) -> Hud {
    let plane = &state.plane;
    Hud {
        fuel: plane.fuel,
        speed_pct: plane.speed / state.tuning.max_speed,
        lives: plane.lives,
        kills: plane.kills,
        elapsed_ms: plane.elapsed_ms(now_ms),
    }
}

/// Copy out the current frame
pub fn build_snapshot(state: &GameState, now_ms: u64) -> FrameSnapshot {
    FrameSnapshot {
        frame: state.frame,
        phase: state.phase,
        camera_x: state.camera.x,
        aim_mode: state.aim_mode,
        terrain: state.terrain.points().to_vec(),
        plane: state.plane.clone(),
        bombs: state.bombs.clone(),
        bullets: state.bullets.clone(),
        tanks: state.tanks.clone(),
        towers: state.towers.iter().filter(|t| t.alive).cloned().collect(),
        fuel_cans: state.fuel_cans.clone(),
        hearts: state.hearts.clone(),
        explosions: state.explosions.clone(),
        hud: build_hud(state, now_ms),
    }
}
