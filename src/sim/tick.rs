//! Per-frame simulation step
//!
//! Advances the world by one frame in a fixed order: plane, ground contact,
//! bombs, explosions, tanks, power-ups, towers and bullets, pickups, then the
//! game-over check.

use glam::Vec2;

use super::collision::{check_plane_survival, collect_pickups, update_bombs, update_bullets};
use super::physics::{drop_bomb, update_plane};
use super::spawn::{respawn_tanks, update_pickups};
use super::state::{GameEvent, GamePhase, GameState};
use super::towers::update_towers;
use crate::platform::time::Clock;

/// Input commands for a single frame
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub throttle_up: bool,
    pub throttle_down: bool,
    pub turn_left: bool,
    pub turn_right: bool,
    /// One bomb per press (edge-triggered by the input layer)
    pub drop_bomb: bool,
    /// Flip aim mode on/off
    pub toggle_aim: bool,
    /// Pointer position in world coordinates (used in aim mode)
    pub aim_target: Option<Vec2>,
}

/// Advance the game by one frame. Does nothing outside `Playing`; a lost
/// plane only settles the game-over transition.
pub fn tick(state: &mut GameState, input: &TickInput, clock: &impl Clock) {
    if state.phase != GamePhase::Playing {
        return;
    }

    if state.plane.alive {
        advance_world(state, input);
    }

    if !state.plane.alive {
        let now = *state.plane.end_time_ms.get_or_insert(clock.now_ms());
        state.phase = GamePhase::GameOver;
        let survived_ms = state.plane.elapsed_ms(now);
        log::info!(
            "Game over after {} frames: {} kills, survived {}",
            state.frame,
            state.plane.kills,
            crate::format_time(survived_ms)
        );
        state.events.push(GameEvent::GameOver { survived_ms });
    }

    state.frame += 1;
}

/// One frame of play with a flying plane
fn advance_world(state: &mut GameState, input: &TickInput) {
    if input.toggle_aim {
        state.aim_mode = !state.aim_mode;
    }

    if input.drop_bomb {
        state.bombs.push(drop_bomb(&state.plane));
    }

    update_plane(
        &mut state.plane,
        input,
        state.aim_mode,
        &state.tuning,
        &state.viewport,
        &mut state.camera,
    );
    check_plane_survival(state);

    update_bombs(state);

    for explosion in state.explosions.iter_mut() {
        explosion.age();
    }
    state.explosions.retain(|e| e.life > 0);

    state.tanks.retain(|t| t.alive);
    respawn_tanks(
        &mut state.tanks,
        &mut state.rng,
        &state.terrain,
        &state.camera,
        &state.viewport,
        &state.tuning,
    );

    update_pickups(&mut state.fuel_cans);
    update_pickups(&mut state.hearts);

    if state.plane.alive {
        update_towers(
            &mut state.towers,
            &mut state.bullets,
            state.plane.pos,
            &state.camera,
            &state.viewport,
            &state.tuning,
        );
        update_bullets(state);
    }

    collect_pickups(state);
}
