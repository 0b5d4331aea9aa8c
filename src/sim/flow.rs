//! Mode transitions driven by high-level intents
//!
//! Any UI layer may issue these at any time. An intent that does not apply
//! to the current mode is ignored (logged, returns `false`) so out-of-order
//! input can never wedge the tick loop.

use super::state::{Mode, WorldState};
use crate::menu::MenuOption;

impl WorldState {
    fn reject(&self, intent: &str) -> bool {
        log::warn!("Ignoring {} while in {}", intent, self.mode.as_str());
        false
    }

    /// Title menu -> loading, with a fresh run
    pub fn start_game(&mut self) -> bool {
        if self.mode != Mode::Menu {
            return self.reject("start_game");
        }
        self.begin_run();
        true
    }

    fn begin_run(&mut self) {
        self.reset_run();
        self.load_level();
        self.set_mode(Mode::Loading);
    }

    /// Playing <-> paused
    pub fn toggle_pause(&mut self) -> bool {
        match self.mode {
            Mode::Playing => {
                self.resume_mode = Mode::Playing;
                self.set_mode(Mode::Paused);
                true
            }
            Mode::Paused => {
                let resume = self.resume_mode;
                self.set_mode(resume);
                true
            }
            _ => self.reject("toggle_pause"),
        }
    }

    /// Level complete -> loading the next level
    pub fn advance_level(&mut self) -> bool {
        if self.mode != Mode::LevelComplete {
            return self.reject("advance_level");
        }
        self.level += 1;
        self.markers_collected = 0;
        self.load_level();
        self.set_mode(Mode::Loading);
        true
    }

    /// Game over / victory -> loading level 1 with a fresh run
    pub fn restart(&mut self) -> bool {
        if !matches!(self.mode, Mode::GameOver | Mode::Victory) {
            return self.reject("restart");
        }
        self.begin_run();
        true
    }

    /// Any end-of-level screen -> title menu
    pub fn return_to_menu(&mut self) -> bool {
        if !self.mode.is_terminal() {
            return self.reject("return_to_menu");
        }
        self.menu.menu_index = 0;
        self.clear_level();
        self.set_mode(Mode::Menu);
        true
    }

    /// Settings / instructions -> title menu (cursor kept)
    pub fn close_submenu(&mut self) -> bool {
        if !matches!(self.mode, Mode::Settings | Mode::Instructions) {
            return self.reject("close_submenu");
        }
        self.set_mode(Mode::Menu);
        true
    }

    /// Activate whatever the title menu cursor points at
    pub fn select_menu_option(&mut self) -> bool {
        if self.mode != Mode::Menu {
            return self.reject("select_menu_option");
        }
        match self.menu.selected_option() {
            MenuOption::StartGame => self.begin_run(),
            MenuOption::Settings => {
                self.menu.settings_index = 0;
                self.set_mode(Mode::Settings);
            }
            MenuOption::Instructions => self.set_mode(Mode::Instructions),
        }
        true
    }

    /// Change the highlighted settings row's value
    pub fn adjust_setting(&mut self, forward: bool) -> bool {
        if self.mode != Mode::Settings {
            return self.reject("adjust_setting");
        }
        let row = self.menu.selected_row();
        let changed = row.adjust(&mut self.settings, forward);
        if changed {
            log::info!("Setting {} changed", row.label());
        }
        changed
    }

    /// Confirm on the settings screen: leave on "Back", otherwise step the value
    pub fn confirm_setting(&mut self) -> bool {
        if self.mode != Mode::Settings {
            return self.reject("confirm_setting");
        }
        if self.adjust_setting(true) {
            true
        } else {
            self.close_submenu()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::menu::SettingsRow;
    use crate::settings::{Difficulty, Settings};

    fn state() -> WorldState {
        WorldState::new(Settings::default(), 11)
    }

    #[test]
    fn test_start_game_loads_level_one() {
        let mut state = state();
        assert!(state.start_game());
        assert_eq!(state.mode, Mode::Loading);
        assert_eq!(state.level, 1);
        assert_eq!(state.markers.len(), MARKERS_PER_LEVEL as usize);
        assert_eq!(state.player.pos, SPAWN_POINT);
    }

    #[test]
    fn test_invalid_intents_are_noops() {
        let mut state = state();
        assert!(!state.advance_level());
        assert!(!state.restart());
        assert!(!state.toggle_pause());
        assert!(!state.return_to_menu());
        assert!(!state.close_submenu());
        assert_eq!(state.mode, Mode::Menu);
        assert_eq!(state.level, 1);

        state.start_game();
        assert!(!state.start_game());
        assert!(!state.select_menu_option());
        assert_eq!(state.mode, Mode::Loading);
    }

    #[test]
    fn test_pause_restores_playing() {
        let mut state = state();
        state.start_game();
        state.mode = Mode::Playing;
        assert!(state.toggle_pause());
        assert_eq!(state.mode, Mode::Paused);
        assert!(state.toggle_pause());
        assert_eq!(state.mode, Mode::Playing);
    }

    #[test]
    fn test_advance_level_rebuilds() {
        let mut state = state();
        state.start_game();
        state.mode = Mode::LevelComplete;
        state.markers_collected = 3;
        state.score = 700;

        assert!(state.advance_level());
        assert_eq!(state.level, 2);
        assert_eq!(state.markers_collected, 0);
        assert_eq!(state.score, 700);
        assert_eq!(state.mode, Mode::Loading);
        assert_eq!(state.hazards.len(), 4);
    }

    #[test]
    fn test_restart_resets_run() {
        let mut state = state();
        state.settings.difficulty = Difficulty::Hard;
        state.start_game();
        state.level = 5;
        state.score = 4000;
        state.lives = 0;
        state.mode = Mode::Victory;

        assert!(state.restart());
        assert_eq!(state.level, 1);
        assert_eq!(state.score, 0);
        assert_eq!(state.lives, 2);
        assert_eq!(state.mode, Mode::Loading);
    }

    #[test]
    fn test_return_to_menu_from_terminal_screens() {
        for terminal in [Mode::LevelComplete, Mode::GameOver, Mode::Victory] {
            let mut state = state();
            state.start_game();
            state.menu.menu_index = 2;
            state.camera.x = 10.0;
            state.mode = terminal;

            assert!(state.return_to_menu());
            assert_eq!(state.mode, Mode::Menu);
            assert_eq!(state.menu.menu_index, 0);
            assert_eq!(state.camera.x, 0.0);
            assert!(state.platforms.is_empty());
        }
    }

    #[test]
    fn test_menu_selection_routes() {
        let mut state = state();
        state.menu.move_menu(true);
        assert!(state.select_menu_option());
        assert_eq!(state.mode, Mode::Settings);

        assert!(state.close_submenu());
        state.menu.move_menu(true);
        assert!(state.select_menu_option());
        assert_eq!(state.mode, Mode::Instructions);
    }

    #[test]
    fn test_settings_confirm_on_back_leaves() {
        let mut state = state();
        state.menu.menu_index = 1;
        state.select_menu_option();

        // Difficulty row
        state.menu.move_settings(true);
        assert_eq!(state.menu.selected_row(), SettingsRow::Difficulty);
        assert!(state.confirm_setting());
        assert_eq!(state.settings.difficulty, Difficulty::Hard);
        assert_eq!(state.mode, Mode::Settings);

        state.menu.settings_index = 3;
        assert!(state.confirm_setting());
        assert_eq!(state.mode, Mode::Menu);
    }
}
