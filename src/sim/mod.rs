//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure and deterministic:
//! - One tick per frame, fixed order of updates
//! - Seeded RNG only (and only for cosmetic particles)
//! - Stable iteration order (list order, no hashing)
//! - No rendering, audio or platform dependencies

pub mod camera;
pub mod collision;
pub mod entities;
mod flow;
pub mod level;
pub mod state;
pub mod tick;

pub use camera::Camera;
pub use collision::{Aabb, Bounded, overlaps};
pub use entities::{
    Direction, Effect, EffectKind, EffectTint, Hazard, HazardBehavior, Marker, Pickup, Platform,
    PlatformKind, Player, PowerUpKind,
};
pub use level::{LevelLayout, build as build_level, hazard_speed};
pub use state::{FrameView, GameEvent, Hud, Mode, WorldState};
pub use tick::tick;
