//! Menu and settings screen cursors
//!
//! Only selection state lives here. Drawing the screens is the renderer's job.

use serde::{Deserialize, Serialize};

use crate::settings::Settings;

/// Entries on the title menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MenuOption {
    StartGame,
    Settings,
    Instructions,
}

impl MenuOption {
    pub const ALL: [MenuOption; 3] = [
        MenuOption::StartGame,
        MenuOption::Settings,
        MenuOption::Instructions,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MenuOption::StartGame => "Start Game",
            MenuOption::Settings => "Settings",
            MenuOption::Instructions => "Instructions",
        }
    }
}

/// Rows on the settings screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SettingsRow {
    Sound,
    Difficulty,
    PlayerColor,
    Back,
}

impl SettingsRow {
    pub const ALL: [SettingsRow; 4] = [
        SettingsRow::Sound,
        SettingsRow::Difficulty,
        SettingsRow::PlayerColor,
        SettingsRow::Back,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SettingsRow::Sound => "Sound",
            SettingsRow::Difficulty => "Difficulty",
            SettingsRow::PlayerColor => "Player Color",
            SettingsRow::Back => "Back",
        }
    }

    /// Change this row's value. Returns false for rows without a value.
    pub fn adjust(&self, settings: &mut Settings, forward: bool) -> bool {
        match self {
            SettingsRow::Sound => settings.toggle_sound(),
            SettingsRow::Difficulty => settings.cycle_difficulty(forward),
            SettingsRow::PlayerColor => settings.cycle_player_color(forward),
            SettingsRow::Back => return false,
        }
        true
    }
}

/// Wrap-around cursor over a fixed list
fn step(index: usize, len: usize, forward: bool) -> usize {
    if forward {
        (index + 1) % len
    } else {
        (index + len - 1) % len
    }
}

/// Cursor positions for both screens
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuState {
    pub menu_index: usize,
    pub settings_index: usize,
}

impl MenuState {
    pub fn selected_option(&self) -> MenuOption {
        MenuOption::ALL[self.menu_index % MenuOption::ALL.len()]
    }

    pub fn selected_row(&self) -> SettingsRow {
        SettingsRow::ALL[self.settings_index % SettingsRow::ALL.len()]
    }

    /// Move the title menu cursor (down = forward)
    pub fn move_menu(&mut self, forward: bool) {
        self.menu_index = step(self.menu_index, MenuOption::ALL.len(), forward);
    }

    /// Move the settings cursor (down = forward)
    pub fn move_settings(&mut self, forward: bool) {
        self.settings_index = step(self.settings_index, SettingsRow::ALL.len(), forward);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Difficulty;

    #[test]
    fn test_menu_cursor_wraps() {
        let mut menu = MenuState::default();
        assert_eq!(menu.selected_option(), MenuOption::StartGame);
        menu.move_menu(false);
        assert_eq!(menu.selected_option(), MenuOption::Instructions);
        menu.move_menu(true);
        menu.move_menu(true);
        assert_eq!(menu.selected_option(), MenuOption::Settings);
    }

    #[test]
    fn test_settings_cursor_wraps() {
        let mut menu = MenuState::default();
        menu.move_settings(false);
        assert_eq!(menu.selected_row(), SettingsRow::Back);
        menu.move_settings(true);
        assert_eq!(menu.selected_row(), SettingsRow::Sound);
    }

    #[test]
    fn test_adjust_rows() {
        let mut settings = Settings::default();
        assert!(SettingsRow::Sound.adjust(&mut settings, true));
        assert!(!settings.sound_enabled);
        assert!(SettingsRow::Difficulty.adjust(&mut settings, false));
        assert_eq!(settings.difficulty, Difficulty::Easy);
        assert!(!SettingsRow::Back.adjust(&mut settings, true));
    }
}
