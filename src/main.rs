//! Sky Bomber headless runner
//!
//! Flies an autopilot session against the simulation and reports the result.
//! Usage: `sky-bomber [seed] [frames] [tuning.json] [--json]`

fn main() {
    use sky_bomber::platform::{Clock, ManualClock};
    use sky_bomber::sim::{
        GameEvent, GamePhase, GameState, Viewport, build_hud, build_snapshot, tick,
    };
    use sky_bomber::{Tuning, format_time};

    env_logger::init();

    let mut json = false;
    let mut positional = Vec::new();
    for arg in std::env::args().skip(1) {
        if arg == "--json" {
            json = true;
        } else {
            positional.push(arg);
        }
    }

    let seed = positional
        .first()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(rand::random::<u64>);
    let frames: u64 = positional
        .get(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(3600);
    let tuning = positional
        .get(2)
        .map(|path| load_tuning(path))
        .unwrap_or_default();

    log::info!("Sky Bomber (headless) starting with seed {}", seed);

    let clock = ManualClock::new(0);
    let mut state = GameState::new(seed, Viewport::default(), tuning);
    state.reset(true, clock.now_ms());

    let mut pilot = autopilot::Autopilot::default();
    let mut kills_logged = 0;
    for _ in 0..frames {
        clock.advance(16);
        let input = pilot.next_input(&state);
        tick(&mut state, &input, &clock);

        for event in state.drain_events() {
            if let GameEvent::GameOver { survived_ms } = event {
                log::info!("Plane lost after {}", format_time(survived_ms));
            }
        }
        if state.plane.kills >= kills_logged + 10 {
            kills_logged = state.plane.kills;
            log::info!("Frame {}: {} kills", state.frame, kills_logged);
        }
        if state.phase == GamePhase::GameOver {
            break;
        }
    }

    let hud = build_hud(&state, clock.now_ms());
    println!(
        "seed {} | frames {} | {:?} | time {} | kills {} | lives {} | fuel {:.0} | speed {:.0}%",
        seed,
        state.frame,
        state.phase,
        format_time(hud.elapsed_ms),
        hud.kills,
        hud.lives,
        hud.fuel,
        hud.speed_pct * 100.0
    );

    if json {
        match serde_json::to_string_pretty(&build_snapshot(&state, clock.now_ms())) {
            Ok(text) => println!("{}", text),
            Err(e) => log::error!("Failed to serialize snapshot: {}", e),
        }
    }
}

/// Read balance values from a JSON file, falling back to defaults
fn load_tuning(path: &str) -> sky_bomber::Tuning {
    match std::fs::read_to_string(path) {
        Ok(text) => match sky_bomber::Tuning::from_json(&text) {
            Ok(tuning) => {
                log::info!("Loaded tuning from {}", path);
                tuning
            }
            Err(e) => {
                log::error!("Invalid tuning file {}: {}", path, e);
                sky_bomber::Tuning::default()
            }
        },
        Err(e) => {
            log::error!("Could not read {}: {}", path, e);
            sky_bomber::Tuning::default()
        }
    }
}

mod autopilot {
    use glam::Vec2;
    use sky_bomber::sim::{GameState, TickInput};

    /// Cruise altitude above the ground ahead
    const CRUISE_HEIGHT: f32 = 180.0;
    const LOOK_AHEAD: f32 = 300.0;
    const BOMB_INTERVAL: u64 = 30;

    /// Follows the terrain in aim mode and drops bombs at a steady cadence
    #[derive(Default)]
    pub struct Autopilot {
        aim_engaged: bool,
    }

    impl Autopilot {
        pub fn next_input(&mut self, state: &GameState) -> TickInput {
            let plane = &state.plane;
            let ahead_x = plane.pos.x + LOOK_AHEAD;
            let ground = state.terrain.height_at(ahead_x);

            let toggle_aim = !self.aim_engaged;
            self.aim_engaged = true;

            TickInput {
                throttle_up: plane.fuel > state.tuning.start_fuel / 2.0,
                throttle_down: plane.fuel <= state.tuning.start_fuel / 2.0,
                drop_bomb: state.frame % BOMB_INTERVAL == 0,
                toggle_aim,
                aim_target: Some(Vec2::new(ahead_x, ground - CRUISE_HEIGHT)),
                ..Default::default()
            }
        }
    }
}
