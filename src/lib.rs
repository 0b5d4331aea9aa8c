//! Flag Catcher - A side-scrolling flag collecting platformer
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, level layouts, game modes)
//! - `input`: Logical key snapshots with edge detection
//! - `audio`: Fire-and-forget sound cues
//! - `settings`: Player preferences and difficulty
//! - `menu`: Menu and settings screen cursors
//! - `game`: Frame driver tying input, simulation, audio and rendering together

pub mod audio;
pub mod game;
pub mod input;
pub mod menu;
pub mod settings;
pub mod sim;

pub use game::{Game, Renderer};
pub use input::{InputTracker, Key, KeyState, TickInput};
pub use settings::{Difficulty, Settings};

/// Game configuration constants
///
/// All distances are in world pixels, all durations in ticks (one tick per
/// rendered frame, nominally 60 Hz).
pub mod consts {
    use glam::Vec2;

    /// Visible area
    pub const VIEWPORT_WIDTH: f32 = 800.0;
    pub const VIEWPORT_HEIGHT: f32 = 400.0;
    /// Horizontal extent of every level
    pub const WORLD_WIDTH: f32 = 800.0;
    /// Falling this far below the viewport floor costs a life
    pub const FALL_MARGIN: f32 = 100.0;

    /// Downward acceleration applied to players and hazards each tick
    pub const GRAVITY: f32 = 0.5;

    /// Player defaults
    pub const PLAYER_SIZE: Vec2 = Vec2::new(30.0, 30.0);
    pub const PLAYER_SPEED: f32 = 5.0;
    pub const PLAYER_JUMP_POWER: f32 = 12.0;
    pub const SPAWN_POINT: Vec2 = Vec2::new(50.0, 300.0);
    pub const INVULNERABILITY_TICKS: u32 = 120;

    /// Power-ups
    pub const POWER_UP_TICKS: u32 = 300;
    pub const SPEED_BOOST: f32 = 1.5;
    pub const JUMP_BOOST: f32 = 1.3;

    /// Stomping a hazard
    pub const STOMP_EPSILON: f32 = 5.0;
    pub const STOMP_BOUNCE: f32 = -10.0;

    /// Scoring
    pub const MARKER_POINTS: u64 = 100;
    pub const STOMP_POINTS: u64 = 200;
    pub const PICKUP_POINTS: u64 = 50;

    /// Entity sizes
    pub const MARKER_SIZE: Vec2 = Vec2::new(20.0, 30.0);
    pub const HAZARD_SIZE: Vec2 = Vec2::new(25.0, 25.0);
    pub const PICKUP_SIZE: Vec2 = Vec2::new(20.0, 20.0);

    /// Hazard behavior
    pub const HAZARD_BASE_SPEED: f32 = 1.0;
    pub const HAZARD_LEVEL_SCALE: f32 = 0.3;
    pub const HAZARD_JUMP_INTERVAL: u32 = 120;
    pub const HAZARD_JUMP_IMPULSE: f32 = -8.0;

    /// Moving platforms
    pub const PLATFORM_SPEED: f32 = 1.0;

    /// Transient effects (particles and score popups)
    pub const EFFECT_LIFE: u32 = 60;
    pub const EFFECT_GRAVITY: f32 = 0.2;
    pub const POPUP_RISE_SPEED: f32 = -2.0;
    /// Hard cap so a burst-heavy tick cannot grow the effect list without bound
    pub const MAX_EFFECTS: usize = 256;

    /// Progression
    pub const MAX_LEVEL: u32 = 5;
    pub const MARKERS_PER_LEVEL: u32 = 3;
    pub const LOADING_TICKS: u32 = 120;

    /// Camera follow factor per tick
    pub const CAMERA_SMOOTHING: f32 = 0.1;
}
