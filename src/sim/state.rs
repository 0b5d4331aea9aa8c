//! World state and core simulation types
//!
//! One `WorldState` value owns everything the tick loop mutates. There is no
//! global game object; callers pass the state into `tick` explicitly.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::camera::Camera;
use super::entities::{Effect, EffectTint, Hazard, Marker, Pickup, Platform, Player, PowerUpKind};
use super::level;
use crate::consts::*;
use crate::menu::MenuState;
use crate::settings::Settings;

/// Top-level game mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    /// Title menu
    Menu,
    /// Preferences screen
    Settings,
    /// How-to-play screen
    Instructions,
    /// Fixed-length interstitial before a level starts
    Loading,
    /// Active gameplay
    Playing,
    /// Gameplay frozen
    Paused,
    /// All markers collected, more levels remain
    LevelComplete,
    /// Out of lives
    GameOver,
    /// Final level cleared
    Victory,
}

impl Mode {
    /// Screens shown after a level ends
    pub fn is_terminal(&self) -> bool {
        matches!(self, Mode::LevelComplete | Mode::GameOver | Mode::Victory)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Menu => "menu",
            Mode::Settings => "settings",
            Mode::Instructions => "instructions",
            Mode::Loading => "loading",
            Mode::Playing => "playing",
            Mode::Paused => "paused",
            Mode::LevelComplete => "level-complete",
            Mode::GameOver => "game-over",
            Mode::Victory => "victory",
        }
    }
}

/// Things that happened during a tick, drained by the frame driver
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Jumped,
    MarkerCollected { value: u32, points: u64 },
    PickupCollected { kind: PowerUpKind },
    HazardDefeated,
    PlayerHit { lives_left: u32 },
    ModeChanged { from: Mode, to: Mode },
}

/// Complete world state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldState {
    /// Seed for the effect RNG
    pub seed: u64,
    pub mode: Mode,
    /// Mode to restore when leaving pause
    pub resume_mode: Mode,
    pub settings: Settings,
    pub menu: MenuState,
    pub score: u64,
    pub lives: u32,
    /// Current level (1-based)
    pub level: u32,
    pub markers_collected: u32,
    pub markers_needed: u32,
    /// Ticks spent in the current loading screen
    pub loading_ticks: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub player: Player,
    pub platforms: Vec<Platform>,
    pub markers: Vec<Marker>,
    pub hazards: Vec<Hazard>,
    pub pickups: Vec<Pickup>,
    /// Visual effects (not gameplay-affecting)
    pub effects: Vec<Effect>,
    pub camera: Camera,
    /// Events raised by the most recent tick
    #[serde(skip)]
    pub events: Vec<GameEvent>,
    rng: Pcg32,
}

impl WorldState {
    /// Fresh state sitting on the title menu
    pub fn new(settings: Settings, seed: u64) -> Self {
        let lives = settings.difficulty.starting_lives();
        Self {
            seed,
            mode: Mode::Menu,
            resume_mode: Mode::Playing,
            settings,
            menu: MenuState::default(),
            score: 0,
            lives,
            level: 1,
            markers_collected: 0,
            markers_needed: MARKERS_PER_LEVEL,
            loading_ticks: 0,
            time_ticks: 0,
            player: Player::default(),
            platforms: Vec::new(),
            markers: Vec::new(),
            hazards: Vec::new(),
            pickups: Vec::new(),
            effects: Vec::new(),
            camera: Camera::default(),
            events: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Reset score, lives and progress for a new run
    pub(crate) fn reset_run(&mut self) {
        self.score = 0;
        self.lives = self.settings.difficulty.starting_lives();
        self.level = 1;
        self.markers_collected = 0;
        self.markers_needed = MARKERS_PER_LEVEL;
    }

    /// Populate the world for `self.level`
    pub(crate) fn load_level(&mut self) {
        let layout = level::build(self.level, self.settings.difficulty);
        log::info!(
            "Level {} ({}): {} platforms, {} hazards, {} markers",
            self.level,
            self.settings.difficulty.as_str(),
            layout.platforms.len(),
            layout.hazards.len(),
            layout.markers.len()
        );
        self.platforms = layout.platforms;
        self.markers = layout.markers;
        self.hazards = layout.hazards;
        self.pickups = layout.pickups;
        self.effects.clear();
        self.player = Player::default();
        self.camera.reset();
        self.loading_ticks = 0;
    }

    /// Drop every level entity (back on the title menu)
    pub(crate) fn clear_level(&mut self) {
        self.platforms.clear();
        self.markers.clear();
        self.hazards.clear();
        self.pickups.clear();
        self.effects.clear();
        self.player = Player::default();
        self.camera.reset();
    }

    pub(crate) fn set_mode(&mut self, to: Mode) {
        let from = self.mode;
        if from == to {
            return;
        }
        log::info!("Mode {} -> {}", from.as_str(), to.as_str());
        self.mode = to;
        self.emit(GameEvent::ModeChanged { from, to });
    }

    pub(crate) fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Events raised by the most recent tick
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Scatter a burst of particles
    pub(crate) fn spawn_particles(&mut self, pos: Vec2, tint: EffectTint, count: usize) {
        for _ in 0..count {
            if self.effects.len() >= MAX_EFFECTS {
                break;
            }
            let vx = (self.rng.random::<f32>() - 0.5) * 8.0;
            let vy = (self.rng.random::<f32>() - 0.5) * 8.0 - 2.0;
            self.effects.push(Effect::particle(pos, Vec2::new(vx, vy), tint));
        }
    }

    pub(crate) fn spawn_popup(&mut self, pos: Vec2, text: String) {
        if self.effects.len() < MAX_EFFECTS {
            self.effects.push(Effect::popup(pos, text));
        }
    }

    /// Advance every effect and drop the expired ones
    pub(crate) fn update_effects(&mut self) {
        for effect in &mut self.effects {
            effect.update();
        }
        self.effects.retain(|e| !e.is_expired());
    }

    /// Player loses a life and returns to the start
    pub(crate) fn player_hit(&mut self) {
        self.lives = self.lives.saturating_sub(1);
        self.player.respawn();
        let pos = self.player.pos;
        self.spawn_particles(pos, EffectTint::Red, 10);
        log::debug!("Player hit, {} lives left", self.lives);
        self.emit(GameEvent::PlayerHit {
            lives_left: self.lives,
        });

        if self.lives == 0 {
            self.set_mode(Mode::GameOver);
        }
    }

    /// HUD numbers for the current frame
    pub fn hud(&self) -> Hud {
        Hud {
            score: self.score,
            lives: self.lives,
            level: self.level,
            markers_collected: self.markers_collected,
            markers_needed: self.markers_needed,
            loading_progress: (self.loading_ticks as f32 / LOADING_TICKS as f32).min(1.0),
            power_up: self.player.power_up.map(|kind| (kind, self.player.power_up_ticks)),
            invulnerable: self.player.is_invulnerable(),
        }
    }

    /// Read-only snapshot for the renderer
    pub fn view(&self) -> FrameView<'_> {
        FrameView {
            mode: self.mode,
            camera_x: self.camera.x,
            player: &self.player,
            player_color: &self.settings.player_color,
            platforms: &self.platforms,
            markers: &self.markers,
            hazards: &self.hazards,
            pickups: &self.pickups,
            effects: &self.effects,
            menu: self.menu,
            settings: &self.settings,
            hud: self.hud(),
        }
    }
}

/// Heads-up display values
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Hud {
    pub score: u64,
    pub lives: u32,
    pub level: u32,
    pub markers_collected: u32,
    pub markers_needed: u32,
    /// 0..=1 through the loading screen
    pub loading_progress: f32,
    /// Active power-up and ticks left
    pub power_up: Option<(PowerUpKind, u32)>,
    pub invulnerable: bool,
}

/// Everything a renderer may look at for one frame
#[derive(Debug, Clone, Copy)]
pub struct FrameView<'a> {
    pub mode: Mode,
    pub camera_x: f32,
    pub player: &'a Player,
    pub player_color: &'a str,
    pub platforms: &'a [Platform],
    pub markers: &'a [Marker],
    pub hazards: &'a [Hazard],
    pub pickups: &'a [Pickup],
    pub effects: &'a [Effect],
    pub menu: MenuState,
    pub settings: &'a Settings,
    pub hud: Hud,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Difficulty;

    #[test]
    fn test_new_state_sits_on_menu() {
        let state = WorldState::new(Settings::default(), 1);
        assert_eq!(state.mode, Mode::Menu);
        assert_eq!(state.lives, 3);
        assert_eq!(state.level, 1);
        assert!(state.platforms.is_empty());
    }

    #[test]
    fn test_starting_lives_follow_difficulty() {
        let settings = Settings {
            difficulty: Difficulty::Easy,
            ..Settings::default()
        };
        assert_eq!(WorldState::new(settings, 1).lives, 5);
    }

    #[test]
    fn test_player_hit_clamps_and_ends_run() {
        let mut state = WorldState::new(Settings::default(), 7);
        state.load_level();
        state.mode = Mode::Playing;
        state.lives = 1;

        state.player_hit();
        assert_eq!(state.lives, 0);
        assert_eq!(state.mode, Mode::GameOver);

        state.player_hit();
        assert_eq!(state.lives, 0);
    }

    #[test]
    fn test_particles_are_seeded() {
        let mut a = WorldState::new(Settings::default(), 42);
        let mut b = WorldState::new(Settings::default(), 42);
        a.spawn_particles(Vec2::ZERO, EffectTint::Gold, 5);
        b.spawn_particles(Vec2::ZERO, EffectTint::Gold, 5);
        assert_eq!(a.effects, b.effects);
        assert!(a.effects.iter().all(|e| e.vel.x.abs() <= 4.0));
    }

    #[test]
    fn test_effect_cap() {
        let mut state = WorldState::new(Settings::default(), 3);
        state.spawn_particles(Vec2::ZERO, EffectTint::Red, MAX_EFFECTS + 50);
        assert_eq!(state.effects.len(), MAX_EFFECTS);
    }

    #[test]
    fn test_view_exposes_world() {
        let mut state = WorldState::new(Settings::default(), 3);
        state.load_level();
        let view = state.view();
        assert_eq!(view.platforms.len(), state.platforms.len());
        assert_eq!(view.markers.len(), 3);
        assert_eq!(view.hud.markers_needed, 3);
        assert_eq!(view.player_color, "#ff6b6b");
    }
}
