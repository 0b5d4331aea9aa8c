//! Level layouts
//!
//! Layouts are hand-authored and cumulative: each level keeps every platform
//! and hazard of the levels before it and adds its own. Building is a pure
//! function of (level, difficulty).

use serde::{Deserialize, Serialize};

use super::entities::{Hazard, Marker, Pickup, Platform, PowerUpKind};
use crate::consts::*;
use crate::settings::Difficulty;

/// Everything placed in the world at level start
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelLayout {
    pub platforms: Vec<Platform>,
    pub markers: Vec<Marker>,
    pub hazards: Vec<Hazard>,
    pub pickups: Vec<Pickup>,
}

/// Levels outside 1..=MAX_LEVEL play the first level
pub fn normalize_level(level: u32) -> u32 {
    if (1..=MAX_LEVEL).contains(&level) {
        level
    } else {
        1
    }
}

/// Patrol speed for every hazard in a level
pub fn hazard_speed(level: u32, difficulty: Difficulty) -> f32 {
    let level = normalize_level(level);
    HAZARD_BASE_SPEED
        * (1.0 + (level - 1) as f32 * HAZARD_LEVEL_SCALE)
        * difficulty.hazard_multiplier()
}

/// Build the layout for a level
pub fn build(level: u32, difficulty: Difficulty) -> LevelLayout {
    let level = normalize_level(level);
    let speed = hazard_speed(level, difficulty);

    let mut hazards = build_hazards(level);
    for hazard in &mut hazards {
        hazard.speed = speed;
    }

    LevelLayout {
        platforms: build_platforms(level),
        markers: build_markers(level),
        hazards,
        pickups: build_pickups(),
    }
}

fn build_platforms(level: u32) -> Vec<Platform> {
    // Ground, always present
    let mut platforms = vec![
        Platform::new_static(0.0, 350.0, 200.0, 50.0),
        Platform::new_static(250.0, 350.0, 150.0, 50.0),
        Platform::new_static(450.0, 350.0, 200.0, 50.0),
        Platform::new_static(700.0, 350.0, 100.0, 50.0),
    ];

    // Basic floating platforms
    platforms.extend([
        Platform::new_static(150.0, 280.0, 100.0, 20.0),
        Platform::new_static(300.0, 220.0, 100.0, 20.0),
        Platform::new_static(500.0, 180.0, 100.0, 20.0),
    ]);

    if level >= 2 {
        platforms.extend([
            Platform::new_static(650.0, 250.0, 80.0, 20.0),
            Platform::new_moving(400.0, 120.0, 80.0, 20.0, 300.0, 500.0),
        ]);
    }

    if level >= 3 {
        // Smaller platforms, bigger gaps
        platforms.extend([
            Platform::new_static(100.0, 200.0, 60.0, 20.0),
            Platform::new_static(600.0, 150.0, 60.0, 20.0),
            Platform::new_moving(200.0, 100.0, 60.0, 20.0, 150.0, 350.0),
        ]);
    }

    if level >= 4 {
        platforms.extend([
            Platform::new_static(350.0, 100.0, 50.0, 20.0),
            Platform::new_static(750.0, 200.0, 50.0, 20.0),
            Platform::new_moving(500.0, 80.0, 50.0, 20.0, 450.0, 650.0),
        ]);
    }

    if level >= 5 {
        platforms.extend([
            Platform::new_static(50.0, 150.0, 40.0, 20.0),
            Platform::new_static(720.0, 100.0, 40.0, 20.0),
            Platform::new_moving(300.0, 50.0, 40.0, 20.0, 250.0, 450.0),
            Platform::new_moving(600.0, 300.0, 40.0, 20.0, 550.0, 750.0),
        ]);
    }

    platforms
}

fn build_markers(level: u32) -> Vec<Marker> {
    let spots: [(f32, f32); MARKERS_PER_LEVEL as usize] = match level {
        2 => [(130.0, 240.0), (430.0, 80.0), (680.0, 210.0)],
        3 => [(130.0, 160.0), (230.0, 60.0), (630.0, 110.0)],
        4 => [(380.0, 60.0), (530.0, 40.0), (780.0, 160.0)],
        5 => [(80.0, 110.0), (330.0, 10.0), (750.0, 60.0)],
        _ => [(180.0, 240.0), (530.0, 140.0), (680.0, 210.0)],
    };

    spots
        .iter()
        .zip(1..)
        .map(|(&(x, y), value)| Marker::new(x, y, value))
        .collect()
}

fn build_hazards(level: u32) -> Vec<Hazard> {
    let mut hazards = vec![
        Hazard::patrol(280.0, 320.0, 250.0, 380.0),
        Hazard::patrol(520.0, 320.0, 450.0, 620.0),
    ];

    if level >= 2 {
        hazards.extend([
            Hazard::jumper(330.0, 180.0),
            Hazard::patrol(650.0, 250.0, 600.0, 750.0),
        ]);
    }

    if level >= 3 {
        hazards.extend([
            Hazard::patrol(150.0, 250.0, 100.0, 200.0),
            Hazard::jumper(400.0, 100.0),
        ]);
    }

    if level >= 4 {
        hazards.extend([
            Hazard::jumper(500.0, 180.0),
            Hazard::patrol(700.0, 320.0, 650.0, 780.0),
            Hazard::patrol(200.0, 100.0, 150.0, 300.0),
        ]);
    }

    if level >= 5 {
        hazards.extend([
            Hazard::patrol(100.0, 320.0, 50.0, 150.0),
            Hazard::jumper(600.0, 100.0),
            Hazard::patrol(450.0, 250.0, 400.0, 550.0),
        ]);
    }

    hazards
}

/// Same two power-ups on every level
fn build_pickups() -> Vec<Pickup> {
    vec![
        Pickup::new(350.0, 180.0, PowerUpKind::Speed),
        Pickup::new(750.0, 310.0, PowerUpKind::Jump),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_is_pure() {
        assert_eq!(build(3, Difficulty::Hard), build(3, Difficulty::Hard));
    }

    #[test]
    fn test_every_level_has_three_markers_valued_one_to_three() {
        for level in 1..=MAX_LEVEL {
            let layout = build(level, Difficulty::Normal);
            let values: Vec<u32> = layout.markers.iter().map(|m| m.value).collect();
            assert_eq!(values, vec![1, 2, 3], "level {level}");
        }
    }

    #[test]
    fn test_layouts_grow_with_level() {
        let counts: Vec<(usize, usize)> = (1..=MAX_LEVEL)
            .map(|l| {
                let layout = build(l, Difficulty::Normal);
                (layout.platforms.len(), layout.hazards.len())
            })
            .collect();
        assert_eq!(counts, vec![(7, 2), (9, 4), (12, 6), (15, 9), (19, 12)]);
    }

    #[test]
    fn test_ground_always_present() {
        for level in 1..=MAX_LEVEL {
            let layout = build(level, Difficulty::Easy);
            let ground = layout.platforms.iter().filter(|p| p.pos.y == 350.0).count();
            assert_eq!(ground, 4);
        }
    }

    #[test]
    fn test_moving_platform_counts() {
        let moving = |l| {
            build(l, Difficulty::Normal)
                .platforms
                .iter()
                .filter(|p| p.is_moving())
                .count()
        };
        assert_eq!(moving(1), 0);
        assert_eq!(moving(2), 1);
        assert_eq!(moving(5), 5);
    }

    #[test]
    fn test_hazard_speed_scaling() {
        assert_eq!(hazard_speed(1, Difficulty::Normal), 1.0);
        assert!((hazard_speed(3, Difficulty::Normal) - 1.6).abs() < 1e-6);
        assert!((hazard_speed(5, Difficulty::Hard) - 2.2 * 1.3).abs() < 1e-6);
        assert!((hazard_speed(1, Difficulty::Easy) - 0.8).abs() < 1e-6);

        let layout = build(4, Difficulty::Hard);
        let expected = hazard_speed(4, Difficulty::Hard);
        assert!(layout.hazards.iter().all(|h| h.speed == expected));
    }

    #[test]
    fn test_out_of_range_falls_back_to_first_level() {
        let first = build(1, Difficulty::Normal);
        assert_eq!(build(0, Difficulty::Normal), first);
        assert_eq!(build(6, Difficulty::Normal), first);
        assert_eq!(build(u32::MAX, Difficulty::Normal), first);
    }

    #[test]
    fn test_pickups_independent_of_level() {
        let kinds: Vec<PowerUpKind> = build(5, Difficulty::Hard)
            .pickups
            .iter()
            .map(|p| p.kind)
            .collect();
        assert_eq!(kinds, vec![PowerUpKind::Speed, PowerUpKind::Jump]);
        assert_eq!(build(1, Difficulty::Easy).pickups, build(5, Difficulty::Hard).pickups);
    }
}
