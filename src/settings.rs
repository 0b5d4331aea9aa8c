//! Game settings and preferences
//!
//! Stored as JSON. Only preferences live here; run progress is never saved.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Difficulty levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Normal => "Normal",
            Difficulty::Hard => "Hard",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "normal" | "norm" => Some(Difficulty::Normal),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    /// Lives at the start of a run
    pub fn starting_lives(&self) -> u32 {
        match self {
            Difficulty::Easy => 5,
            Difficulty::Normal => 3,
            Difficulty::Hard => 2,
        }
    }

    /// Hazard speed multiplier
    pub fn hazard_multiplier(&self) -> f32 {
        match self {
            Difficulty::Easy => 0.8,
            Difficulty::Normal => 1.0,
            Difficulty::Hard => 1.3,
        }
    }

    /// Next difficulty, wrapping around
    pub fn next(self) -> Self {
        match self {
            Difficulty::Easy => Difficulty::Normal,
            Difficulty::Normal => Difficulty::Hard,
            Difficulty::Hard => Difficulty::Easy,
        }
    }

    /// Previous difficulty, wrapping around
    pub fn prev(self) -> Self {
        match self {
            Difficulty::Easy => Difficulty::Hard,
            Difficulty::Normal => Difficulty::Easy,
            Difficulty::Hard => Difficulty::Normal,
        }
    }
}

/// Selectable player colors (CSS hex, purely cosmetic)
pub const PLAYER_COLORS: [&str; 6] = [
    "#ff6b6b", "#4ecdc4", "#45b7d1", "#96ceb4", "#feca57", "#ff9ff3",
];

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Play sound cues
    pub sound_enabled: bool,
    /// Lives and hazard speed
    pub difficulty: Difficulty,
    /// Player body color
    pub player_color: String,
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sound_enabled: true,
            difficulty: Difficulty::Normal,
            player_color: PLAYER_COLORS[0].to_string(),
            master_volume: 0.8,
        }
    }
}

impl Settings {
    /// Toggle sound cues on/off
    pub fn toggle_sound(&mut self) {
        self.sound_enabled = !self.sound_enabled;
    }

    /// Step through difficulties
    pub fn cycle_difficulty(&mut self, forward: bool) {
        self.difficulty = if forward {
            self.difficulty.next()
        } else {
            self.difficulty.prev()
        };
    }

    /// Step through the color palette. Unknown colors restart at the first entry.
    pub fn cycle_player_color(&mut self, forward: bool) {
        let len = PLAYER_COLORS.len();
        let next = match PLAYER_COLORS.iter().position(|c| *c == self.player_color) {
            Some(i) if forward => (i + 1) % len,
            Some(i) => (i + len - 1) % len,
            None => 0,
        };
        self.player_color = PLAYER_COLORS[next].to_string();
    }

    /// Clamp out-of-range values loaded from disk
    fn sanitize(mut self) -> Self {
        self.master_volume = self.master_volume.clamp(0.0, 1.0);
        if !PLAYER_COLORS.contains(&self.player_color.as_str()) {
            log::warn!("Unknown player color {:?}, using default", self.player_color);
            self.player_color = PLAYER_COLORS[0].to_string();
        }
        self
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Settings>(json).map(Settings::sanitize)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load settings from a JSON file, falling back to defaults
    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Invalid settings file {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Could not read settings file {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save settings as JSON
    pub fn save_to(&self, path: &Path) -> std::io::Result<()> {
        let json = self.to_json().map_err(std::io::Error::other)?;
        std::fs::write(path, json)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}
