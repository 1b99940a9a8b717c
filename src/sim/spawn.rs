//! Tank population upkeep and power-up drops

use glam::Vec2;
use rand::Rng;

use super::camera::{Camera, Viewport};
use super::state::{Pickup, Tank};
use super::terrain::Terrain;
use crate::consts::*;
use crate::tuning::Tuning;

/// Top up tanks inside the visible window.
///
/// Makes `tank_spawn_attempts` attempts; each one recounts the living tanks
/// in view and spawns only while that count is below `tank_target`. Returns
/// how many tanks were added.
pub fn respawn_tanks<R: Rng + ?Sized>(
    tanks: &mut Vec<Tank>,
    rng: &mut R,
    terrain: &Terrain,
    camera: &Camera,
    viewport: &Viewport,
    tuning: &Tuning,
) -> usize {
    let margin = tuning.visible_margin;
    let (window_min, window_max) = camera.window(viewport, margin);
    let min_x = window_min.max(0.0);
    let max_x = window_max.min(tuning.world_width).max(min_x);

    let mut spawned = 0;
    for _ in 0..tuning.tank_spawn_attempts {
        let visible = tanks
            .iter()
            .filter(|t| t.alive && camera.in_view(t.pos.x, viewport, margin))
            .count();
        if visible >= tuning.tank_target {
            continue;
        }

        let x = min_x + rng.random::<f32>() * (max_x - min_x);
        tanks.push(Tank {
            pos: Vec2::new(x, terrain.height_at(x) - TANK_GROUND_OFFSET),
            alive: true,
        });
        spawned += 1;
    }
    spawned
}

/// Roll independent fuel-can and heart drops at a destroyed tank.
/// Returns `(fuel_can_spawned, heart_spawned)`.
pub fn spawn_powerups<R: Rng + ?Sized>(
    at: Vec2,
    rng: &mut R,
    fuel_cans: &mut Vec<Pickup>,
    hearts: &mut Vec<Pickup>,
    tuning: &Tuning,
) -> (bool, bool) {
    let pos = at - Vec2::new(0.0, POWERUP_SPAWN_OFFSET);
    let vel = Vec2::new(0.0, -tuning.powerup_float_speed);

    let fuel = rng.random::<f64>() < tuning.fuel_can_chance;
    if fuel {
        fuel_cans.push(Pickup {
            pos,
            vel,
            alive: true,
        });
    }
    let heart = rng.random::<f64>() < tuning.heart_chance;
    if heart {
        hearts.push(Pickup {
            pos,
            vel,
            alive: true,
        });
    }
    (fuel, heart)
}

/// Drift power-ups upward and drop collected or off-screen ones
pub fn update_pickups(pickups: &mut Vec<Pickup>) {
    pickups.retain_mut(|p| {
        if !p.alive {
            return false;
        }
        p.pos += p.vel;
        p.pos.y + POWERUP_SIZE > 0.0
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn flat() -> Terrain {
        Terrain::from_points(vec![Vec2::new(0.0, 500.0), Vec2::new(8000.0, 500.0)], 550.0)
    }

    #[test]
    fn test_fills_empty_window_to_target() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut tuning = Tuning::default();
        // Margin covers the whole world
        tuning.visible_margin = 10_000.0;
        let viewport = Viewport::new(1000.0, 600.0);
        let camera = Camera { x: 0.0 };
        let mut tanks = Vec::new();

        let spawned = respawn_tanks(&mut tanks, &mut rng, &flat(), &camera, &viewport, &tuning);
        assert_eq!(spawned, 4);
        assert_eq!(tanks.len(), 4);

        // Already at target: nothing more
        let spawned = respawn_tanks(&mut tanks, &mut rng, &flat(), &camera, &viewport, &tuning);
        assert_eq!(spawned, 0);
        assert_eq!(tanks.len(), 4);
        for tank in &tanks {
            assert!(tank.pos.x >= 0.0 && tank.pos.x <= 8000.0);
            assert_eq!(tank.pos.y, 500.0 - TANK_GROUND_OFFSET);
        }
    }

    #[test]
    fn test_tops_up_partial_population() {
        let mut rng = Pcg32::seed_from_u64(2);
        let tuning = Tuning::default();
        let viewport = Viewport::new(1000.0, 600.0);
        let camera = Camera { x: 2000.0 };
        let mut tanks = vec![
            Tank {
                pos: Vec2::new(2500.0, 474.0),
                alive: true,
            },
            Tank {
                pos: Vec2::new(2600.0, 474.0),
                alive: true,
            },
            // Out of view: doesn't count
            Tank {
                pos: Vec2::new(6000.0, 474.0),
                alive: true,
            },
        ];

        let spawned = respawn_tanks(&mut tanks, &mut rng, &flat(), &camera, &viewport, &tuning);
        assert_eq!(spawned, 2);
        for tank in &tanks[3..] {
            assert!(tank.pos.x >= 1800.0 && tank.pos.x <= 3200.0);
        }
    }

    #[test]
    fn test_spawn_window_clamped_to_world() {
        let mut rng = Pcg32::seed_from_u64(3);
        let tuning = Tuning::default();
        let viewport = Viewport::new(1000.0, 600.0);
        let camera = Camera { x: 0.0 };
        let mut tanks = Vec::new();
        respawn_tanks(&mut tanks, &mut rng, &flat(), &camera, &viewport, &tuning);
        assert!(tanks.iter().all(|t| t.pos.x >= 0.0 && t.pos.x <= 1200.0));
    }

    #[test]
    fn test_powerup_chances_extremes() {
        let mut rng = Pcg32::seed_from_u64(4);
        let mut tuning = Tuning::default();
        let (mut cans, mut hearts) = (Vec::new(), Vec::new());

        tuning.fuel_can_chance = 1.0;
        tuning.heart_chance = 0.0;
        let rolled = spawn_powerups(
            Vec2::new(100.0, 400.0),
            &mut rng,
            &mut cans,
            &mut hearts,
            &tuning,
        );
        assert_eq!(rolled, (true, false));
        assert_eq!(cans[0].pos, Vec2::new(100.0, 390.0));
        assert_eq!(cans[0].vel, Vec2::new(0.0, -0.75));

        tuning.fuel_can_chance = 0.0;
        tuning.heart_chance = 1.0;
        let rolled = spawn_powerups(
            Vec2::new(100.0, 400.0),
            &mut rng,
            &mut cans,
            &mut hearts,
            &tuning,
        );
        assert_eq!(rolled, (false, true));
        assert_eq!((cans.len(), hearts.len()), (1, 1));
    }

    #[test]
    fn test_powerup_drop_rates() {
        let mut rng = Pcg32::seed_from_u64(5);
        let tuning = Tuning::default();
        let (mut cans, mut hearts) = (Vec::new(), Vec::new());
        for _ in 0..10_000 {
            spawn_powerups(Vec2::ZERO, &mut rng, &mut cans, &mut hearts, &tuning);
        }
        let can_rate = cans.len() as f64 / 10_000.0;
        let heart_rate = hearts.len() as f64 / 10_000.0;
        assert!((can_rate - 0.5).abs() < 0.03);
        assert!((heart_rate - 0.25).abs() < 0.03);
    }

    #[test]
    fn test_pickups_drift_and_expire() {
        let mut pickups = vec![
            Pickup {
                pos: Vec2::new(0.0, 100.0),
                vel: Vec2::new(0.0, -0.75),
                alive: true,
            },
            Pickup {
                pos: Vec2::new(0.0, -25.5),
                vel: Vec2::new(0.0, -0.75),
                alive: true,
            },
            Pickup {
                pos: Vec2::new(0.0, 100.0),
                vel: Vec2::new(0.0, -0.75),
                alive: false,
            },
        ];
        update_pickups(&mut pickups);
        assert_eq!(pickups.len(), 1);
        assert_eq!(pickups[0].pos.y, 99.25);
    }
}
