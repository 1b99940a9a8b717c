//! Raw key/pointer state → per-frame `TickInput`
//!
//! The host feeds key down/up and pointer events as they arrive; once per
//! frame the simulation polls a snapshot. Bomb drops and aim toggles are
//! edge-triggered: one per discrete press, consumed by the snapshot.

use glam::Vec2;

use crate::sim::TickInput;

/// Logical game keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ThrottleUp,
    ThrottleDown,
    TurnLeft,
    TurnRight,
    DropBomb,
    ToggleAim,
}

impl Key {
    /// Map a browser-style key name (`KeyboardEvent.key`) to a game key
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "arrowup" | "w" => Some(Key::ThrottleUp),
            "arrowdown" | "s" => Some(Key::ThrottleDown),
            "arrowleft" | "a" => Some(Key::TurnLeft),
            "arrowright" | "d" => Some(Key::TurnRight),
            " " | "space" => Some(Key::DropBomb),
            "m" => Some(Key::ToggleAim),
            _ => None,
        }
    }
}

/// Accumulated input between frames
#[derive(Debug, Clone, Default)]
pub struct InputState {
    throttle_up: bool,
    throttle_down: bool,
    turn_left: bool,
    turn_right: bool,
    bomb_held: bool,
    aim_held: bool,
    bomb_pending: bool,
    aim_toggle_pending: bool,
    /// Last pointer position in viewport coordinates
    pointer: Option<Vec2>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&mut self, key: Key) {
        match key {
            Key::ThrottleUp => self.throttle_up = true,
            Key::ThrottleDown => self.throttle_down = true,
            Key::TurnLeft => self.turn_left = true,
            Key::TurnRight => self.turn_right = true,
            Key::DropBomb => {
                // Auto-repeat keydowns don't count as new presses
                if !self.bomb_held {
                    self.bomb_pending = true;
                }
                self.bomb_held = true;
            }
            Key::ToggleAim => {
                if !self.aim_held {
                    self.aim_toggle_pending = true;
                }
                self.aim_held = true;
            }
        }
    }

    pub fn key_up(&mut self, key: Key) {
        match key {
            Key::ThrottleUp => self.throttle_up = false,
            Key::ThrottleDown => self.throttle_down = false,
            Key::TurnLeft => self.turn_left = false,
            Key::TurnRight => self.turn_right = false,
            Key::DropBomb => self.bomb_held = false,
            Key::ToggleAim => self.aim_held = false,
        }
    }

    /// Pointer moved (viewport coordinates)
    pub fn pointer_move(&mut self, pos: Vec2) {
        self.pointer = Some(pos);
    }

    /// Click drops a bomb
    pub fn click(&mut self) {
        self.bomb_pending = true;
    }

    /// Release everything (e.g. on focus loss)
    pub fn clear(&mut self) {
        *self = Self {
            pointer: self.pointer,
            ..Self::default()
        };
    }

    /// Build this frame's snapshot and consume edge-triggered presses.
    /// `camera_x` converts the pointer into world coordinates.
    pub fn poll(&mut self, camera_x: f32) -> TickInput {
        let input = TickInput {
            throttle_up: self.throttle_up,
            throttle_down: self.throttle_down,
            turn_left: self.turn_left,
            turn_right: self.turn_right,
            drop_bomb: self.bomb_pending,
            toggle_aim: self.aim_toggle_pending,
            aim_target: self.pointer.map(|p| Vec2::new(p.x + camera_x, p.y)),
        };
        self.bomb_pending = false;
        self.aim_toggle_pending = false;
        input
    }
}
