//! World entities and their per-kind update rules
//!
//! Each entity owns its position and velocity. Entity kinds that share a
//! struct but behave differently (static vs moving platforms, patrolling vs
//! jumping hazards, particles vs score popups) carry a tagged variant that
//! is dispatched with a single `match`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{Aabb, Bounded};
use crate::consts::*;
use crate::input::KeyState;

/// Horizontal travel direction. Never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Direction {
    Left,
    #[default]
    Right,
}

impl Direction {
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            Direction::Left => -1.0,
            Direction::Right => 1.0,
        }
    }

    #[inline]
    pub fn flipped(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// Oscillate `x` between two bounds. The flip test runs after the move, so
/// the body may overshoot a bound by one step before turning around.
fn oscillate(x: &mut f32, width: f32, min_x: f32, max_x: f32, speed: f32, direction: &mut Direction) {
    *x += speed * direction.sign();
    if *x <= min_x || *x + width >= max_x {
        *direction = direction.flipped();
    }
}

/// Power-up types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerUpKind {
    /// Faster horizontal movement
    Speed,
    /// Higher jumps
    Jump,
}

impl PowerUpKind {
    pub fn multiplier(self) -> f32 {
        match self {
            PowerUpKind::Speed => SPEED_BOOST,
            PowerUpKind::Jump => JUMP_BOOST,
        }
    }
}

/// The player character
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: Vec2,
    pub on_ground: bool,
    /// Ticks of hit immunity left
    pub invulnerable_ticks: u32,
    /// Currently active power-up
    pub power_up: Option<PowerUpKind>,
    /// Ticks left on the active power-up
    pub power_up_ticks: u32,
    pub speed_boost: f32,
    pub jump_boost: f32,
}

impl Default for Player {
    fn default() -> Self {
        Self::new(SPAWN_POINT)
    }
}

impl Player {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            size: PLAYER_SIZE,
            on_ground: false,
            invulnerable_ticks: 0,
            power_up: None,
            power_up_ticks: 0,
            speed_boost: 1.0,
            jump_boost: 1.0,
        }
    }

    #[inline]
    pub fn is_invulnerable(&self) -> bool {
        self.invulnerable_ticks > 0
    }

    /// Advance one tick. Returns true if the player started a jump.
    ///
    /// Horizontal velocity switches instantly with input (no acceleration).
    /// Platforms are resolved one at a time in list order; there is no
    /// global solver, so a box wedged between two platforms may be pushed
    /// by both.
    pub fn update(&mut self, keys: &KeyState, platforms: &[Platform]) -> bool {
        self.vel.x = 0.0;
        if keys.left() {
            self.vel.x = -PLAYER_SPEED * self.speed_boost;
        }
        if keys.right() {
            self.vel.x = PLAYER_SPEED * self.speed_boost;
        }

        let mut jumped = false;
        if keys.jump() && self.on_ground {
            self.vel.y = -PLAYER_JUMP_POWER * self.jump_boost;
            self.on_ground = false;
            jumped = true;
        }

        self.vel.y += GRAVITY;
        self.pos += self.vel;

        self.on_ground = false;
        for platform in platforms {
            self.resolve_platform(&platform.bounds());
        }

        self.tick_timers();
        jumped
    }

    /// Push the player out of a single overlapping platform
    fn resolve_platform(&mut self, platform: &Aabb) {
        if !self.bounds().overlaps(platform) {
            return;
        }

        if self.vel.y > 0.0 && self.pos.y < platform.top() {
            // Landing on top
            self.pos.y = platform.top() - self.size.y;
            self.vel.y = 0.0;
            self.on_ground = true;
        } else if self.vel.y < 0.0 && self.pos.y + self.size.y > platform.bottom() {
            // Head bump from below
            self.pos.y = platform.bottom();
            self.vel.y = 0.0;
        } else if self.vel.x > 0.0 {
            self.pos.x = platform.left() - self.size.x;
        } else if self.vel.x < 0.0 {
            self.pos.x = platform.right();
        }
    }

    fn tick_timers(&mut self) {
        if self.power_up_ticks > 0 {
            self.power_up_ticks -= 1;
            if self.power_up_ticks == 0 {
                self.clear_power_up();
            }
        }
        self.invulnerable_ticks = self.invulnerable_ticks.saturating_sub(1);
    }

    fn clear_power_up(&mut self) {
        self.power_up = None;
        self.speed_boost = 1.0;
        self.jump_boost = 1.0;
    }

    /// Activate a power-up for its full duration. Only the newest kind's
    /// boost is active; a previous boost of the other kind is dropped.
    pub fn apply_power_up(&mut self, kind: PowerUpKind) {
        self.clear_power_up();
        self.power_up = Some(kind);
        self.power_up_ticks = POWER_UP_TICKS;
        match kind {
            PowerUpKind::Speed => self.speed_boost = kind.multiplier(),
            PowerUpKind::Jump => self.jump_boost = kind.multiplier(),
        }
    }

    /// Back to the level start with temporary immunity
    pub fn respawn(&mut self) {
        self.pos = SPAWN_POINT;
        self.vel = Vec2::ZERO;
        self.invulnerable_ticks = INVULNERABILITY_TICKS;
    }

    /// True if this overlap counts as landing on top of `hazard`
    pub fn is_stomping(&self, hazard: &Aabb) -> bool {
        self.vel.y > 0.0 && self.pos.y < hazard.top() - STOMP_EPSILON
    }
}

impl Bounded for Player {
    fn bounds(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, self.size)
    }
}

/// Platform behavior
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PlatformKind {
    Static,
    /// Slides back and forth between two x bounds
    Moving {
        min_x: f32,
        max_x: f32,
        speed: f32,
        direction: Direction,
    },
}

/// A solid rectangle the player and hazards stand on
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub pos: Vec2,
    pub size: Vec2,
    pub kind: PlatformKind,
}

impl Platform {
    pub fn new_static(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
            kind: PlatformKind::Static,
        }
    }

    pub fn new_moving(x: f32, y: f32, w: f32, h: f32, min_x: f32, max_x: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
            kind: PlatformKind::Moving {
                min_x,
                max_x,
                speed: PLATFORM_SPEED,
                direction: Direction::Right,
            },
        }
    }

    /// Whether this platform changes between ticks
    #[inline]
    pub fn is_moving(&self) -> bool {
        matches!(self.kind, PlatformKind::Moving { .. })
    }

    pub fn update(&mut self) {
        match &mut self.kind {
            PlatformKind::Static => {}
            PlatformKind::Moving {
                min_x,
                max_x,
                speed,
                direction,
            } => oscillate(&mut self.pos.x, self.size.x, *min_x, *max_x, *speed, direction),
        }
    }
}

impl Bounded for Platform {
    fn bounds(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, self.size)
    }
}

/// A collectible flag
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub pos: Vec2,
    pub size: Vec2,
    /// 1..=3
    pub value: u32,
}

impl Marker {
    pub fn new(x: f32, y: f32, value: u32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: MARKER_SIZE,
            value,
        }
    }

    pub fn points(&self) -> u64 {
        self.value as u64 * MARKER_POINTS
    }
}

impl Bounded for Marker {
    fn bounds(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, self.size)
    }
}

/// Hazard movement pattern
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum HazardBehavior {
    /// Walks back and forth between two x bounds
    Patrol {
        min_x: f32,
        max_x: f32,
        direction: Direction,
    },
    /// Hops in place on a fixed timer
    Jump { timer: u32 },
}

/// An enemy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hazard {
    pub pos: Vec2,
    pub size: Vec2,
    pub vel_y: f32,
    /// Horizontal patrol speed (scaled by level and difficulty)
    pub speed: f32,
    pub on_ground: bool,
    pub behavior: HazardBehavior,
}

impl Hazard {
    pub fn patrol(x: f32, y: f32, min_x: f32, max_x: f32) -> Self {
        Self::with_behavior(
            x,
            y,
            HazardBehavior::Patrol {
                min_x,
                max_x,
                direction: Direction::Right,
            },
        )
    }

    pub fn jumper(x: f32, y: f32) -> Self {
        Self::with_behavior(x, y, HazardBehavior::Jump { timer: 0 })
    }

    fn with_behavior(x: f32, y: f32, behavior: HazardBehavior) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: HAZARD_SIZE,
            vel_y: 0.0,
            speed: HAZARD_BASE_SPEED,
            on_ground: false,
            behavior,
        }
    }

    /// Advance one tick.
    ///
    /// Hazards only ever land on platform tops; unlike the player they are
    /// never pushed out sideways or from below.
    pub fn update(&mut self, platforms: &[Platform]) {
        match &mut self.behavior {
            HazardBehavior::Patrol {
                min_x,
                max_x,
                direction,
            } => oscillate(&mut self.pos.x, self.size.x, *min_x, *max_x, self.speed, direction),
            HazardBehavior::Jump { timer } => {
                *timer += 1;
                if *timer > HAZARD_JUMP_INTERVAL && self.on_ground {
                    self.vel_y = HAZARD_JUMP_IMPULSE;
                    *timer = 0;
                    self.on_ground = false;
                }
            }
        }

        self.vel_y += GRAVITY;
        self.pos.y += self.vel_y;

        self.on_ground = false;
        for platform in platforms {
            let top = platform.pos.y;
            if self.vel_y > 0.0 && self.pos.y < top && self.collides_with(platform) {
                self.pos.y = top - self.size.y;
                self.vel_y = 0.0;
                self.on_ground = true;
            }
        }
    }
}

impl Bounded for Hazard {
    fn bounds(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, self.size)
    }
}

/// A power-up collectible
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pickup {
    pub pos: Vec2,
    pub size: Vec2,
    pub kind: PowerUpKind,
}

impl Pickup {
    pub fn new(x: f32, y: f32, kind: PowerUpKind) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: PICKUP_SIZE,
            kind,
        }
    }
}

impl Bounded for Pickup {
    fn bounds(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, self.size)
    }
}

/// Particle color families
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EffectTint {
    Gold,
    Green,
    Red,
}

/// What a transient effect shows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EffectKind {
    Particle { tint: EffectTint },
    ScorePopup { text: String },
}

/// A short-lived visual effect. Never affects gameplay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Effect {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Ticks left
    pub life: u32,
    pub kind: EffectKind,
}

impl Effect {
    pub fn particle(pos: Vec2, vel: Vec2, tint: EffectTint) -> Self {
        Self {
            pos,
            vel,
            life: EFFECT_LIFE,
            kind: EffectKind::Particle { tint },
        }
    }

    pub fn popup(pos: Vec2, text: impl Into<String>) -> Self {
        Self {
            pos,
            vel: Vec2::new(0.0, POPUP_RISE_SPEED),
            life: EFFECT_LIFE,
            kind: EffectKind::ScorePopup { text: text.into() },
        }
    }

    pub fn update(&mut self) {
        self.pos += self.vel;
        self.vel.y += EFFECT_GRAVITY;
        self.life = self.life.saturating_sub(1);
    }

    #[inline]
    pub fn is_expired(&self) -> bool {
        self.life == 0
    }

    /// Remaining life in 0..=1 (for fading)
    pub fn alpha(&self) -> f32 {
        self.life as f32 / EFFECT_LIFE as f32
    }
}
