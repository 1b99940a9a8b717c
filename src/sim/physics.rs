//! Plane flight model
//!
//! Arcade kinematics, one update per frame: throttle sets speed, turning sets
//! heading, velocity is rebuilt from both each frame (no inertia).

use glam::Vec2;

use super::camera::{Camera, Viewport};
use super::state::{Bomb, Plane};
use super::tick::TickInput;
use crate::consts::*;
use crate::tuning::Tuning;
use crate::{clamp_lenient, heading, normalize_angle};

/// Advance the plane one frame and re-center the camera on it
pub fn update_plane(
    plane: &mut Plane,
    input: &TickInput,
    aim_mode: bool,
    tuning: &Tuning,
    viewport: &Viewport,
    camera: &mut Camera,
) {
    if plane.fuel > 0.0 {
        if input.throttle_up {
            plane.speed = (plane.speed + tuning.throttle_response).min(tuning.max_speed);
        }
        if input.throttle_down {
            plane.speed = (plane.speed - tuning.throttle_response).max(tuning.min_speed);
        }
        plane.fuel = (plane.fuel - tuning.fuel_burn(plane.speed)).max(0.0);
    } else {
        // Dead engine: bleed toward stall speed regardless of input
        plane.speed = (plane.speed - tuning.throttle_response * 2.0).max(tuning.min_speed);
    }

    match input.aim_target.filter(|_| aim_mode) {
        Some(target) => steer_toward(plane, target, tuning.turn_rate),
        None => {
            if input.turn_right {
                plane.angle += tuning.turn_rate;
            }
            if input.turn_left {
                plane.angle -= tuning.turn_rate;
            }
        }
    }

    plane.vel = heading(plane.angle) * plane.speed * tuning.drag;
    plane.pos += plane.vel;

    plane.pos.x = clamp_lenient(plane.pos.x, 0.0, tuning.world_width);
    plane.pos.y = clamp_lenient(
        plane.pos.y,
        FLIGHT_BAND_TOP,
        viewport.height - FLIGHT_BAND_BOTTOM,
    );

    camera.follow(plane.pos.x, viewport, tuning.world_width);

    // Drag shrinks the vector; never let that drop below stall speed
    plane.speed = plane.vel.length().max(tuning.min_speed);
}

/// Turn toward a world-space point, limited to the turn rate
fn steer_toward(plane: &mut Plane, target: Vec2, turn_rate: f32) {
    let delta = target - plane.pos;
    if delta.length_squared() < 1e-6 {
        return;
    }
    let desired = delta.y.atan2(delta.x);
    let diff = normalize_angle(desired - plane.angle);
    plane.angle += diff.clamp(-turn_rate, turn_rate);
}

/// Release a bomb from the plane's center
pub fn drop_bomb(plane: &Plane) -> Bomb {
    Bomb {
        pos: plane.pos,
        vel: plane.vel * BOMB_RELEASE_FACTOR + Vec2::new(0.0, BOMB_RELEASE_KICK),
        exploded: false,
    }
}
