//! Collision detection and damage
//!
//! Everything is a point-vs-radius test except plane-vs-ground, which probes
//! the piecewise-linear terrain under the plane's belly. Checks run in a fixed
//! order each frame: ground contact, bombs, bullets, pickups. Dead entities
//! are purged only after every check that could see them has run.

use glam::Vec2;

use super::spawn::spawn_powerups;
use super::state::{Bomb, Explosion, GameEvent, GameState, PickupKind, Plane};
use super::terrain::Terrain;
use crate::consts::*;

/// Whether the plane's belly is below the ground line.
/// Off the terrain's domain there is nothing to hit.
pub fn plane_hits_terrain(plane: &Plane, terrain: &Terrain) -> bool {
    let belly = plane.belly();
    terrain
        .segment_height(belly.x)
        .is_some_and(|ground| belly.y > ground)
}

/// Kill the plane on ground contact or (if tuned so) an empty tank
pub fn check_plane_survival(state: &mut GameState) {
    let plane = &mut state.plane;
    if !plane.alive {
        return;
    }
    if state.tuning.fuel_exhaustion_kills && plane.fuel <= 0.0 {
        log::info!("Plane out of fuel at x={:.0}", plane.pos.x);
        plane.alive = false;
    } else if plane_hits_terrain(plane, &state.terrain) {
        log::info!("Plane hit terrain at x={:.0}", plane.pos.x);
        plane.alive = false;
    }
}

/// Move bombs under gravity and detonate those reaching the ground.
/// Each bomb detonates at most once; spent and fallen bombs are purged.
pub fn update_bombs(state: &mut GameState) {
    let mut detonations = Vec::new();
    for bomb in state.bombs.iter_mut() {
        if let Some(ground) = advance_bomb(bomb, &state.terrain) {
            let at = Vec2::new(bomb.pos.x, ground - 2.0);
            state.explosions.push(Explosion::new(at, BOMB_BLAST));
            detonations.push(bomb.pos);
        }
    }

    for center in detonations {
        state.events.push(GameEvent::BombDetonated { pos: center });
        apply_blast(state, center);
    }

    let floor = state.viewport.height;
    state.bombs.retain(|b| !b.exploded && b.pos.y < floor);
}

/// Integrate one frame; returns the ground height if the bomb detonated now
fn advance_bomb(bomb: &mut Bomb, terrain: &Terrain) -> Option<f32> {
    bomb.pos += bomb.vel;
    bomb.vel.y += BOMB_GRAVITY;

    let ground = terrain.height_at(bomb.pos.x);
    if bomb.exploded || bomb.pos.y <= ground - BOMB_FUSE_HEIGHT {
        return None;
    }
    bomb.exploded = true;
    Some(ground)
}

/// Resolve a detonation at `center` against every tank and tower in range.
/// One blast may destroy several targets.
pub fn apply_blast(state: &mut GameState, center: Vec2) {
    let tuning = &state.tuning;

    for tank in state.tanks.iter_mut() {
        if !tank.alive || tank.pos.distance(center) >= tuning.tank_blast_radius {
            continue;
        }
        tank.alive = false;
        state.plane.kills += 1;
        log::debug!("Tank destroyed at x={:.0}", tank.pos.x);
        state.events.push(GameEvent::TankDestroyed { pos: tank.pos });
        spawn_powerups(
            tank.pos,
            &mut state.rng,
            &mut state.fuel_cans,
            &mut state.hearts,
            tuning,
        );
    }

    for tower in state.towers.iter_mut() {
        if !tower.alive || tower.base().distance(center) >= tuning.tower_blast_radius {
            continue;
        }
        tower.hp = tower.hp.saturating_sub(1);
        if tower.hp == 0 {
            tower.alive = false;
            state.plane.kills += 2;
            state
                .explosions
                .push(Explosion::new(tower.center(), TOWER_DESTROYED_BLAST));
            log::debug!("Tower destroyed at x={:.0}", tower.pos.x);
            state.events.push(GameEvent::TowerDestroyed { pos: tower.pos });
        } else {
            state
                .explosions
                .push(Explosion::new(tower.center(), TOWER_DAMAGED_BLAST));
            log::debug!("Tower hit at x={:.0}, hp {}", tower.pos.x, tower.hp);
            state.events.push(GameEvent::TowerDamaged {
                pos: tower.pos,
                hp: tower.hp,
            });
        }
    }
}

/// Move bullets, apply hits on the plane, drop spent and out-of-bounds rounds
pub fn update_bullets(state: &mut GameState) {
    let plane = &mut state.plane;
    let explosions = &mut state.explosions;
    let events = &mut state.events;
    let hit_radius = state.tuning.bullet_hit_radius;
    let width = state.tuning.world_width;
    let height = state.viewport.height;

    state.bullets.retain_mut(|bullet| {
        bullet.pos += bullet.vel;

        if plane.alive && bullet.pos.distance(plane.pos) < hit_radius {
            explosions.push(Explosion::new(bullet.pos, BULLET_HIT_BLAST));
            let destroyed = plane.take_hit();
            log::debug!("Plane hit, {} lives left", plane.lives);
            events.push(GameEvent::PlaneHit { lives: plane.lives });
            if destroyed {
                explosions.push(Explosion::new(plane.pos, PLANE_DEATH_BLAST));
                log::info!("Plane shot down at x={:.0}", plane.pos.x);
                events.push(GameEvent::PlaneDestroyed { pos: plane.pos });
            }
            return false;
        }

        (0.0..=width).contains(&bullet.pos.x) && (0.0..=height).contains(&bullet.pos.y)
    });
}

/// Collect fuel cans and hearts touching the plane
pub fn collect_pickups(state: &mut GameState) {
    let plane = &mut state.plane;
    let tuning = &state.tuning;

    for can in state.fuel_cans.iter_mut() {
        if can.alive && can.pos.distance(plane.pos) < tuning.pickup_radius {
            can.alive = false;
            plane.fuel += tuning.fuel_can_amount;
            state.events.push(GameEvent::PickupCollected {
                kind: PickupKind::FuelCan,
            });
        }
    }

    for heart in state.hearts.iter_mut() {
        if heart.alive && heart.pos.distance(plane.pos) < tuning.pickup_radius {
            heart.alive = false;
            if plane.lives < tuning.max_lives {
                plane.lives += 1;
            }
            state.events.push(GameEvent::PickupCollected {
                kind: PickupKind::Heart,
            });
        }
    }

    state.fuel_cans.retain(|p| p.alive);
    state.hearts.retain(|p| p.alive);
}
