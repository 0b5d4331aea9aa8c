//! Frame driver
//!
//! Owns the world, the input history and the audio sink, and runs the fixed
//! per-frame sequence: sample input, tick, forward cues, render.

use crate::audio::{AudioManager, AudioSink, SoundEffect};
use crate::input::{InputTracker, KeyState};
use crate::settings::Settings;
use crate::sim::{FrameView, Mode, WorldState, tick};

/// Anything that can draw a frame from a read-only view
pub trait Renderer {
    fn render(&mut self, frame: &FrameView<'_>);
}

/// Game instance holding all state
pub struct Game {
    state: WorldState,
    input: InputTracker,
    audio: AudioManager,
    frames: u64,
}

impl Game {
    pub fn new(settings: Settings, seed: u64, audio: AudioManager) -> Self {
        log::info!("Game initialized with seed: {}", seed);
        let mut game = Self {
            state: WorldState::new(settings, seed),
            input: InputTracker::new(),
            audio,
            frames: 0,
        };
        game.sync_audio_settings();
        game
    }

    pub fn state(&self) -> &WorldState {
        &self.state
    }

    /// Direct access for UI layers issuing intents
    pub fn state_mut(&mut self) -> &mut WorldState {
        &mut self.state
    }

    pub fn mode(&self) -> Mode {
        self.state.mode
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Run one frame with the current key snapshot
    pub fn frame(&mut self, keys: KeyState, renderer: &mut dyn Renderer) {
        let input = self.input.sample(keys);
        tick(&mut self.state, &input);
        self.frames += 1;

        // Settings may have changed on the settings screen
        self.sync_audio_settings();
        for event in &self.state.events {
            if let Some(effect) = SoundEffect::for_event(event) {
                self.audio.play(effect);
            }
        }

        renderer.render(&self.state.view());
    }

    /// Forget held keys, e.g. when the window loses focus. Pauses active play.
    pub fn focus_lost(&mut self) {
        self.input.reset();
        if self.state.mode == Mode::Playing {
            self.state.toggle_pause();
            log::info!("Auto-paused (focus lost)");
        }
    }

    fn sync_audio_settings(&mut self) {
        let settings = &self.state.settings;
        self.audio.set_muted(!settings.sound_enabled);
        self.audio.set_master_volume(settings.master_volume);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::{Tone, ToneOutput};
    use crate::input::Key;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    struct CountingRenderer {
        frames: usize,
        last_mode: Option<Mode>,
    }

    impl Renderer for CountingRenderer {
        fn render(&mut self, frame: &FrameView<'_>) {
            self.frames += 1;
            self.last_mode = Some(frame.mode);
        }
    }

    #[derive(Default, Clone)]
    struct Recorder(Rc<RefCell<usize>>);

    impl ToneOutput for Recorder {
        fn emit(&mut self, _tone: &Tone, _volume: f32) {
            *self.0.borrow_mut() += 1;
        }
    }

    fn press(game: &mut Game, renderer: &mut CountingRenderer, key: Key) {
        game.frame(KeyState::from_keys(&[key]), renderer);
        game.frame(KeyState::new(), renderer);
    }

    #[test]
    fn test_menu_to_playing() {
        let mut game = Game::new(Settings::default(), 1, AudioManager::silent());
        let mut renderer = CountingRenderer::default();

        press(&mut game, &mut renderer, Key::Confirm);
        assert_eq!(game.mode(), Mode::Loading);

        for _ in 0..crate::consts::LOADING_TICKS {
            game.frame(KeyState::new(), &mut renderer);
        }
        assert_eq!(game.mode(), Mode::Playing);
        assert_eq!(renderer.frames as u64, game.frames());
        assert_eq!(renderer.last_mode, Some(Mode::Playing));
    }

    #[test]
    fn test_held_pause_toggles_once() {
        let mut game = Game::new(Settings::default(), 1, AudioManager::silent());
        let mut renderer = CountingRenderer::default();
        game.state_mut().start_game();
        game.state_mut().loading_ticks = crate::consts::LOADING_TICKS;
        game.frame(KeyState::new(), &mut renderer);
        assert_eq!(game.mode(), Mode::Playing);

        let pause = KeyState::from_keys(&[Key::Pause]);
        for _ in 0..5 {
            game.frame(pause, &mut renderer);
        }
        assert_eq!(game.mode(), Mode::Paused);
    }

    #[test]
    fn test_jump_plays_cue_unless_sound_disabled() {
        for sound_enabled in [true, false] {
            let settings = Settings {
                sound_enabled,
                ..Settings::default()
            };
            let recorder = Recorder::default();
            let audio = AudioManager::new(Some(Box::new(recorder.clone())));
            let mut game = Game::new(settings, 1, audio);
            let mut renderer = CountingRenderer::default();

            game.state_mut().start_game();
            game.state_mut().loading_ticks = crate::consts::LOADING_TICKS;
            for _ in 0..60 {
                game.frame(KeyState::new(), &mut renderer);
            }
            game.frame(KeyState::from_keys(&[Key::Jump]), &mut renderer);

            let played = *recorder.0.borrow();
            assert_eq!(played > 0, sound_enabled);
        }
    }

    #[test]
    fn test_focus_lost_pauses() {
        let mut game = Game::new(Settings::default(), 1, AudioManager::silent());
        game.state_mut().start_game();
        game.state_mut().loading_ticks = crate::consts::LOADING_TICKS;
        game.frame(KeyState::new(), &mut CountingRenderer::default());
        game.focus_lost();
        assert_eq!(game.mode(), Mode::Paused);
    }
}
