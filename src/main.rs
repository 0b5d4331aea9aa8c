//! Flag Catcher entry point
//!
//! Native headless runner. Plays the game with a simple autopilot, logging
//! the HUD as it goes. Pass a settings file path as the first argument to
//! load (and afterwards save) preferences.
//!
//! Run with `RUST_LOG=debug` to see per-event output.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use flag_catcher::audio::{AudioManager, LogToneOutput};
use flag_catcher::sim::{FrameView, Mode};
use flag_catcher::{Game, Key, KeyState, Renderer, Settings};

/// Give up after this many frames (about ten minutes at 60 Hz)
const MAX_FRAMES: u64 = 60 * 60 * 10;

/// Renderer that reports the HUD through the log
#[derive(Default)]
struct LogRenderer {
    last_mode: Option<Mode>,
    frames: u64,
}

impl Renderer for LogRenderer {
    fn render(&mut self, frame: &FrameView<'_>) {
        self.frames += 1;
        let hud = &frame.hud;
        if self.last_mode != Some(frame.mode) {
            log::info!(
                "[{}] level {} score {} lives {} flags {}/{}",
                frame.mode.as_str(),
                hud.level,
                hud.score,
                hud.lives,
                hud.markers_collected,
                hud.markers_needed
            );
            self.last_mode = Some(frame.mode);
        } else if self.frames % 300 == 0 && frame.mode == Mode::Playing {
            log::debug!(
                "player ({:.0}, {:.0}) camera {:.0} effects {}",
                frame.player.pos.x,
                frame.player.pos.y,
                frame.camera_x,
                frame.effects.len()
            );
        }
    }
}

/// Picks keys for the next frame from what is on screen
#[derive(Default)]
struct Autopilot {
    frame: u64,
}

impl Autopilot {
    fn keys(&mut self, game: &Game) -> KeyState {
        self.frame += 1;
        let state = game.state();
        // Release every other frame so edge-triggered keys fire
        let tap = self.frame % 2 == 0;

        match state.mode {
            Mode::Menu | Mode::LevelComplete if tap => KeyState::from_keys(&[Key::Confirm]),
            Mode::Settings | Mode::Instructions if tap => KeyState::from_keys(&[Key::Cancel]),
            Mode::Playing => self.steer(game),
            _ => KeyState::new(),
        }
    }

    fn steer(&self, game: &Game) -> KeyState {
        let state = game.state();
        let player = &state.player;
        let mut keys = KeyState::new();

        let Some(target) = state.markers.iter().min_by(|a, b| {
            let da = (a.pos - player.pos).length_squared();
            let db = (b.pos - player.pos).length_squared();
            da.total_cmp(&db)
        }) else {
            return keys;
        };

        let dx = target.pos.x - player.pos.x;
        if dx > 4.0 {
            keys.set(Key::Right, true);
        } else if dx < -4.0 {
            keys.set(Key::Left, true);
        }

        // Hop toward higher flags, and now and then to clear gaps and hazards
        let above = target.pos.y + target.size.y < player.pos.y;
        if above || self.frame % 90 == 0 {
            keys.set(Key::Jump, true);
        }
        keys
    }
}

fn seed_from_clock() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}

fn main() {
    env_logger::init();
    log::info!("Flag Catcher (headless) starting...");

    let settings_path = std::env::args().nth(1).map(PathBuf::from);
    let settings = settings_path
        .as_deref()
        .map(Settings::load_from)
        .unwrap_or_default();

    let audio = AudioManager::new(Some(Box::new(LogToneOutput)));
    let mut game = Game::new(settings, seed_from_clock(), audio);
    let mut renderer = LogRenderer::default();
    let mut pilot = Autopilot::default();

    while game.frames() < MAX_FRAMES {
        let keys = pilot.keys(&game);
        game.frame(keys, &mut renderer);
        if matches!(game.mode(), Mode::GameOver | Mode::Victory) {
            break;
        }
    }

    let hud = game.state().hud();
    log::info!(
        "Finished in {} frames: {} on level {}, score {}",
        game.frames(),
        game.mode().as_str(),
        hud.level,
        hud.score
    );

    if let Some(path) = settings_path {
        if let Err(e) = game.state().settings.save_to(&path) {
            log::error!("Failed to save settings: {}", e);
        }
    }
}
