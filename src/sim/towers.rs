//! Tower placement and aiming

use glam::Vec2;

use super::camera::{Camera, Viewport};
use super::state::{Bullet, Tower, TowerSide};
use super::terrain::Terrain;
use crate::consts::*;
use crate::tuning::Tuning;

/// Evenly space towers across the world, standing on the ground
pub fn setup_towers(terrain: &Terrain, tuning: &Tuning) -> Vec<Tower> {
    if tuning.tower_count == 0 {
        return Vec::new();
    }
    let spacing = tuning.world_width / tuning.tower_count as f32;
    (0..tuning.tower_count)
        .map(|i| {
            let x = spacing * i as f32 + spacing / 2.0;
            Tower {
                pos: Vec2::new(x, terrain.height_at(x) - TOWER_HEIGHT),
                hp: tuning.tower_hp,
                alive: true,
                cooldown: 0,
                side: if i % 2 == 0 {
                    TowerSide::Left
                } else {
                    TowerSide::Right
                },
            }
        })
        .collect()
}

/// Advance tower cooldowns and fire at `target` when ready.
///
/// In-view towers count up and fire at `tower_fire_rate`. Off-screen towers
/// have their cooldown held at or below `tower_offscreen_cooldown()` so they
/// don't volley the instant they scroll into view.
pub fn update_towers(
    towers: &mut [Tower],
    bullets: &mut Vec<Bullet>,
    target: Vec2,
    camera: &Camera,
    viewport: &Viewport,
    tuning: &Tuning,
) {
    let hold = tuning.tower_offscreen_cooldown();
    for tower in towers.iter_mut().filter(|t| t.alive) {
        if camera.in_view(tower.pos.x, viewport, tuning.visible_margin) {
            tower.cooldown += 1;
            if tower.cooldown >= tuning.tower_fire_rate {
                bullets.push(fire_at(tower, target, tuning.bullet_speed));
                tower.cooldown = 0;
            }
        } else {
            tower.cooldown = tower.cooldown.min(hold);
        }
    }
}

/// Bullet from the tower's muzzle aimed straight at `target`
pub fn fire_at(tower: &Tower, target: Vec2, speed: f32) -> Bullet {
    let muzzle = tower.muzzle();
    let delta = target - muzzle;
    let angle = delta.y.atan2(delta.x);
    Bullet {
        pos: muzzle,
        vel: Vec2::new(angle.cos(), angle.sin()) * speed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat() -> Terrain {
        Terrain::from_points(vec![Vec2::new(0.0, 500.0), Vec2::new(8000.0, 500.0)], 550.0)
    }

    fn tower_at(x: f32) -> Tower {
        Tower {
            pos: Vec2::new(x, 404.0),
            hp: 2,
            alive: true,
            cooldown: 0,
            side: TowerSide::Left,
        }
    }

    #[test]
    fn test_setup_towers_spacing() {
        let towers = setup_towers(&flat(), &Tuning::default());
        assert_eq!(towers.len(), 8);
        assert_eq!(towers[0].pos, Vec2::new(500.0, 404.0));
        assert_eq!(towers[7].pos.x, 7500.0);
        assert_eq!(towers[1].side, TowerSide::Right);
        assert!(towers.iter().all(|t| t.hp == 2 && t.alive));
    }

    #[test]
    fn test_fires_on_fire_rate() {
        let tuning = Tuning::default();
        let viewport = Viewport::new(1000.0, 600.0);
        let camera = Camera { x: 0.0 };
        let mut towers = vec![tower_at(500.0)];
        let mut bullets = Vec::new();

        for _ in 0..59 {
            update_towers(
                &mut towers,
                &mut bullets,
                Vec2::ZERO,
                &camera,
                &viewport,
                &tuning,
            );
        }
        assert!(bullets.is_empty());
        update_towers(
            &mut towers,
            &mut bullets,
            Vec2::ZERO,
            &camera,
            &viewport,
            &tuning,
        );
        assert_eq!(bullets.len(), 1);
        assert_eq!(towers[0].cooldown, 0);
    }

    #[test]
    fn test_offscreen_cooldown_is_clamped() {
        let tuning = Tuning::default();
        let viewport = Viewport::new(1000.0, 600.0);
        let camera = Camera { x: 0.0 };
        let mut towers = vec![tower_at(5000.0)];
        towers[0].cooldown = 59;
        let mut bullets = Vec::new();

        update_towers(
            &mut towers,
            &mut bullets,
            Vec2::ZERO,
            &camera,
            &viewport,
            &tuning,
        );
        assert_eq!(towers[0].cooldown, 45);
        assert!(bullets.is_empty());

        // Low values are left alone
        towers[0].cooldown = 10;
        update_towers(
            &mut towers,
            &mut bullets,
            Vec2::ZERO,
            &camera,
            &viewport,
            &tuning,
        );
        assert_eq!(towers[0].cooldown, 10);
    }

    #[test]
    fn test_dead_towers_never_fire() {
        let tuning = Tuning::default();
        let viewport = Viewport::new(1000.0, 600.0);
        let camera = Camera { x: 0.0 };
        let mut towers = vec![tower_at(500.0)];
        towers[0].alive = false;
        towers[0].cooldown = 100;
        let mut bullets = Vec::new();
        update_towers(
            &mut towers,
            &mut bullets,
            Vec2::ZERO,
            &camera,
            &viewport,
            &tuning,
        );
        assert!(bullets.is_empty());
    }

    #[test]
    fn test_fire_at_aims_at_target() {
        let tower = tower_at(100.0);
        let target = tower.muzzle() + Vec2::new(30.0, -40.0);
        let bullet = fire_at(&tower, target, 5.0);
        assert!((bullet.vel - Vec2::new(3.0, -4.0)).length() < 1e-4);
        assert_eq!(bullet.pos, tower.muzzle());
    }
}
