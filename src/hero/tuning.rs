//! Hero domain: tuning and input resources.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Acceleration/deceleration/turn-back curve for one movement context.
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct MovementProfile {
    pub max_speed: f32,
    pub acceleration: f32,
    pub deceleration: f32,
    pub turn_back_friction: f32,
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct FallProfile {
    pub gravity: f32,
    pub max_fall_speed: f32,
}

/// Parameters for one jump charge. The rise is constant-velocity, gated by
/// a minimum and maximum duration.
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct JumpLevel {
    pub rising_speed: f32,
    pub min_duration: f32,
    pub max_duration: f32,
}

impl JumpLevel {
    /// Level lookup with the charge index clamped to the last configured
    /// level rather than faulting. `None` only for an empty table.
    pub fn clamped(levels: &[JumpLevel], index: usize) -> Option<&JumpLevel> {
        levels.get(index).or_else(|| levels.last())
    }
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct DashSettings {
    pub speed: f32,
    pub duration: f32,
}

#[derive(Resource, Debug, Clone, Deserialize, Serialize)]
pub struct HeroTuning {
    pub ground: MovementProfile,
    pub air: MovementProfile,
    pub jump_air: MovementProfile,
    pub fall: FallProfile,
    pub jump_fall: FallProfile,
    /// One entry per jump charge; index 0 is the ground jump.
    pub jump_levels: Vec<JumpLevel>,
    pub coyote_duration: f32,
    pub jump_buffer_duration: f32,
    pub dash: DashSettings,
    pub probe_length: f32,
}

impl Default for HeroTuning {
    fn default() -> Self {
        Self {
            ground: MovementProfile {
                max_speed: 320.0,
                acceleration: 3000.0,
                deceleration: 2600.0,
                turn_back_friction: 4200.0,
            },
            air: MovementProfile {
                max_speed: 320.0,
                acceleration: 2200.0,
                deceleration: 1600.0,
                turn_back_friction: 2800.0,
            },
            jump_air: MovementProfile {
                max_speed: 300.0,
                acceleration: 2600.0,
                deceleration: 1400.0,
                turn_back_friction: 3200.0,
            },
            fall: FallProfile {
                gravity: 1800.0,
                max_fall_speed: 900.0,
            },
            jump_fall: FallProfile {
                gravity: 2200.0,
                max_fall_speed: 900.0,
            },
            jump_levels: vec![
                JumpLevel {
                    rising_speed: 420.0,
                    min_duration: 0.08,
                    max_duration: 0.30,
                },
                JumpLevel {
                    rising_speed: 380.0,
                    min_duration: 0.08,
                    max_duration: 0.22,
                },
            ],
            coyote_duration: 0.12,
            jump_buffer_duration: 0.2,
            dash: DashSettings {
                speed: 900.0,
                duration: 0.16,
            },
            probe_length: 4.0,
        }
    }
}

/// Directional input and intents, sampled each render frame. Press flags
/// latch until the fixed pipeline consumes them so a press between fixed
/// ticks is never dropped.
#[derive(Resource, Debug, Default)]
pub struct HeroInput {
    pub move_axis: f32,
    pub jump_just_pressed: bool,
    pub jump_held: bool,
    pub dash_just_pressed: bool,
}
