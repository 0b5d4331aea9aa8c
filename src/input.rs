//! Player input types for the simulation.
//!
//! The platform layer delivers a point-in-time "is key down" snapshot once
//! per frame. The simulation needs both the held state (movement, jumping)
//! and the rising edge (pause toggles, menu navigation), so snapshots are
//! diffed against the previous frame before each tick.

use serde::{Deserialize, Serialize};

/// Logical keys the core understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Left,
    Right,
    Jump,
    Pause,
    Confirm,
    Cancel,
    Up,
    Down,
}

impl Key {
    pub const ALL: [Key; 8] = [
        Key::Left,
        Key::Right,
        Key::Jump,
        Key::Pause,
        Key::Confirm,
        Key::Cancel,
        Key::Up,
        Key::Down,
    ];

    #[inline]
    const fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

/// Held state of every logical key, packed into a single byte
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyState {
    pub bits: u8,
}

impl KeyState {
    pub const fn new() -> Self {
        Self { bits: 0 }
    }

    /// Snapshot with exactly the given keys held
    pub fn from_keys(keys: &[Key]) -> Self {
        let mut state = Self::new();
        for &key in keys {
            state.set(key, true);
        }
        state
    }

    #[inline]
    pub const fn is_down(&self, key: Key) -> bool {
        self.bits & key.bit() != 0
    }

    #[inline]
    pub fn set(&mut self, key: Key, down: bool) {
        if down {
            self.bits |= key.bit();
        } else {
            self.bits &= !key.bit();
        }
    }

    /// Keys down in `self` that were up in `previous`
    #[inline]
    pub const fn newly_pressed(&self, previous: &KeyState) -> KeyState {
        KeyState {
            bits: self.bits & !previous.bits,
        }
    }

    pub const fn is_empty(&self) -> bool {
        self.bits == 0
    }

    #[inline]
    pub const fn left(&self) -> bool {
        self.is_down(Key::Left)
    }

    #[inline]
    pub const fn right(&self) -> bool {
        self.is_down(Key::Right)
    }

    #[inline]
    pub const fn jump(&self) -> bool {
        self.is_down(Key::Jump)
    }
}

/// Input for a single tick: what is held and what went down this tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub held: KeyState,
    pub pressed: KeyState,
}

impl TickInput {
    pub fn new(previous: &KeyState, current: &KeyState) -> Self {
        Self {
            held: *current,
            pressed: current.newly_pressed(previous),
        }
    }

    /// Input where the given keys are held and were just pressed
    pub fn tap(keys: &[Key]) -> Self {
        let state = KeyState::from_keys(keys);
        Self {
            held: state,
            pressed: state,
        }
    }

    /// Input where the given keys are held without a fresh press
    pub fn hold(keys: &[Key]) -> Self {
        Self {
            held: KeyState::from_keys(keys),
            pressed: KeyState::new(),
        }
    }

    #[inline]
    pub fn was_pressed(&self, key: Key) -> bool {
        self.pressed.is_down(key)
    }
}

/// Remembers the previous snapshot so edges can be derived
#[derive(Debug, Clone, Default)]
pub struct InputTracker {
    previous: KeyState,
}

impl InputTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Turn a fresh snapshot into this tick's input
    pub fn sample(&mut self, current: KeyState) -> TickInput {
        let input = TickInput::new(&self.previous, &current);
        self.previous = current;
        input
    }

    /// Forget held keys (e.g. after focus loss)
    pub fn reset(&mut self) {
        self.previous = KeyState::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_query() {
        let mut keys = KeyState::new();
        assert!(keys.is_empty());
        keys.set(Key::Left, true);
        keys.set(Key::Jump, true);
        assert!(keys.left());
        assert!(keys.jump());
        assert!(!keys.right());
        keys.set(Key::Left, false);
        assert!(!keys.left());
    }

    #[test]
    fn test_all_keys_have_distinct_bits() {
        let all = KeyState::from_keys(&Key::ALL);
        assert_eq!(all.bits, 0xFF);
    }

    #[test]
    fn test_tracker_reports_edges_once() {
        let mut tracker = InputTracker::new();
        let pause = KeyState::from_keys(&[Key::Pause]);

        let first = tracker.sample(pause);
        assert!(first.was_pressed(Key::Pause));
        assert!(first.held.is_down(Key::Pause));

        // Still held next frame: no new edge
        let second = tracker.sample(pause);
        assert!(!second.was_pressed(Key::Pause));
        assert!(second.held.is_down(Key::Pause));

        // Released then pressed again
        tracker.sample(KeyState::new());
        assert!(tracker.sample(pause).was_pressed(Key::Pause));
    }

    #[test]
    fn test_hold_has_no_edges() {
        let input = TickInput::hold(&[Key::Right, Key::Jump]);
        assert!(input.held.right());
        assert!(input.pressed.is_empty());
    }
}
