//! Per-frame simulation tick
//!
//! Core game loop that advances the world one step. One tick runs per
//! rendered frame; there is no time accumulator, so game speed follows the
//! display rate.

use super::collision::Bounded;
use super::entities::EffectTint;
use super::state::{GameEvent, Mode, WorldState};
use crate::consts::*;
use crate::input::{Key, TickInput};

/// Advance the world by one tick
pub fn tick(state: &mut WorldState, input: &TickInput) {
    state.events.clear();
    state.time_ticks += 1;

    match state.mode {
        Mode::Menu => {
            if input.was_pressed(Key::Up) {
                state.menu.move_menu(false);
            }
            if input.was_pressed(Key::Down) {
                state.menu.move_menu(true);
            }
            if input.was_pressed(Key::Confirm) || input.was_pressed(Key::Jump) {
                state.select_menu_option();
            }
        }

        Mode::Settings => {
            if input.was_pressed(Key::Up) {
                state.menu.move_settings(false);
            }
            if input.was_pressed(Key::Down) {
                state.menu.move_settings(true);
            }
            if input.was_pressed(Key::Left) {
                state.adjust_setting(false);
            }
            if input.was_pressed(Key::Right) {
                state.adjust_setting(true);
            }
            if input.was_pressed(Key::Cancel) {
                state.close_submenu();
            } else if input.was_pressed(Key::Confirm) {
                state.confirm_setting();
            }
        }

        Mode::Instructions => {
            if input.was_pressed(Key::Confirm) || input.was_pressed(Key::Cancel) {
                state.close_submenu();
            }
        }

        Mode::Loading => {
            state.loading_ticks += 1;
            if state.loading_ticks >= LOADING_TICKS {
                state.set_mode(Mode::Playing);
            }
        }

        Mode::Playing => {
            if input.was_pressed(Key::Pause) {
                state.toggle_pause();
                return;
            }
            step(state, input);
        }

        Mode::Paused => {
            if input.was_pressed(Key::Pause) {
                state.toggle_pause();
            }
        }

        Mode::LevelComplete | Mode::GameOver | Mode::Victory => {
            // Let the last bursts finish on the result screens
            state.update_effects();

            if input.was_pressed(Key::Cancel) {
                state.return_to_menu();
            } else if input.was_pressed(Key::Confirm) {
                if state.mode == Mode::LevelComplete {
                    state.advance_level();
                } else {
                    state.restart();
                }
            }
        }
    }
}

/// One gameplay step (mode must be `Playing`)
fn step(state: &mut WorldState, input: &TickInput) {
    if state.player.update(&input.held, &state.platforms) {
        state.emit(GameEvent::Jumped);
    }

    for hazard in &mut state.hazards {
        hazard.update(&state.platforms);
    }

    for platform in state.platforms.iter_mut().filter(|p| p.is_moving()) {
        platform.update();
    }

    state.update_effects();

    collect_markers(state);
    collect_pickups(state);
    resolve_hazards(state);

    if state.player.pos.y > VIEWPORT_HEIGHT + FALL_MARGIN {
        state.player_hit();
    }

    state.camera.follow(state.player.pos.x);

    check_level_end(state);
}

fn collect_markers(state: &mut WorldState) {
    let player_box = state.player.bounds();
    let mut collected = Vec::new();
    state.markers.retain(|marker| {
        if marker.collides_with(&player_box) {
            collected.push(marker.clone());
            false
        } else {
            true
        }
    });

    for marker in collected {
        let points = marker.points();
        state.markers_collected += 1;
        state.score += points;
        state.spawn_particles(marker.pos, EffectTint::Gold, 8);
        state.spawn_popup(marker.pos, format!("+{}", points));
        log::debug!("Marker {} collected (+{})", marker.value, points);
        state.emit(GameEvent::MarkerCollected {
            value: marker.value,
            points,
        });
    }
}

fn collect_pickups(state: &mut WorldState) {
    let player_box = state.player.bounds();
    let mut collected = Vec::new();
    state.pickups.retain(|pickup| {
        if pickup.collides_with(&player_box) {
            collected.push(pickup.clone());
            false
        } else {
            true
        }
    });

    for pickup in collected {
        state.score += PICKUP_POINTS;
        state.player.apply_power_up(pickup.kind);
        state.spawn_particles(pickup.pos, EffectTint::Green, 6);
        log::debug!("Power-up {:?} collected", pickup.kind);
        state.emit(GameEvent::PickupCollected { kind: pickup.kind });
    }
}

/// Stomp or get hurt, once per hazard in list order
fn resolve_hazards(state: &mut WorldState) {
    let mut i = 0;
    while i < state.hazards.len() {
        let hazard_box = state.hazards[i].bounds();
        if !state.player.collides_with(&hazard_box) {
            i += 1;
            continue;
        }

        if state.player.is_stomping(&hazard_box) {
            let hazard = state.hazards.remove(i);
            state.player.vel.y = STOMP_BOUNCE;
            state.score += STOMP_POINTS;
            let center = hazard.bounds().center();
            state.spawn_popup(hazard.pos, format!("+{}", STOMP_POINTS));
            state.spawn_particles(center, EffectTint::Red, 12);
            state.spawn_particles(center, EffectTint::Gold, 8);
            log::debug!("Hazard defeated at {:?}", hazard.pos);
            state.emit(GameEvent::HazardDefeated);
            continue;
        }

        if !state.player.is_invulnerable() {
            state.player_hit();
        }
        i += 1;
    }
}

/// Level-end checks. Running out of lives wins over finishing the level.
fn check_level_end(state: &mut WorldState) {
    if state.mode != Mode::Playing {
        return;
    }
    if state.lives == 0 {
        state.set_mode(Mode::GameOver);
    } else if state.markers_collected >= state.markers_needed {
        if state.level >= MAX_LEVEL {
            state.set_mode(Mode::Victory);
        } else {
            state.set_mode(Mode::LevelComplete);
        }
    }
}
