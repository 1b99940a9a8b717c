//! Deterministic simulation module
//!
//! All gameplay logic lives here. Given the same seed, inputs and clock, a run
//! is reproducible:
//! - One update per frame, no variable timestep
//! - Seeded RNG only
//! - Stable store order (insertion order, compacted in place)
//! - No rendering or platform dependencies beyond the `Clock` trait

pub mod camera;
pub mod collision;
pub mod physics;
pub mod snapshot;
pub mod spawn;
pub mod state;
pub mod terrain;
pub mod tick;
pub mod towers;

pub use camera::{Camera, Viewport};
pub use collision::{apply_blast, plane_hits_terrain};
pub use physics::{drop_bomb, update_plane};
pub use snapshot::{FrameSnapshot, Hud, build_hud, build_snapshot};
pub use spawn::{respawn_tanks, spawn_powerups};
pub use state::{
    Bomb, Bullet, Explosion, GameEvent, GamePhase, GameState, Pickup, PickupKind, Plane, Tank,
    Tower, TowerSide,
};
pub use terrain::Terrain;
pub use tick::{TickInput, tick};
pub use towers::{fire_at, setup_towers};
