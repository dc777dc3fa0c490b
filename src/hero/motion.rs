//! Hero domain: pure motion models composed by the fixed-tick pipeline.

use crate::hero::components::{Facing, JumpMachine, JumpPhase};
use crate::hero::tuning::{FallProfile, HeroTuning, JumpLevel, MovementProfile};

/// Resolves horizontal speed and facing for one tick.
///
/// Moving against the current facing applies turn-back friction down to
/// zero, then flips. Otherwise a non-neutral axis accelerates toward
/// `max_speed` (snapping facing to the axis) and a neutral axis decelerates
/// toward zero.
pub fn step_horizontal(
    speed: f32,
    facing: Facing,
    move_axis: f32,
    profile: &MovementProfile,
    dt: f32,
) -> (f32, Facing) {
    if move_axis * facing.sign() < 0.0 && speed > 0.0 {
        let slowed = speed - profile.turn_back_friction * dt;
        if slowed <= 0.0 {
            (0.0, Facing::from_axis(move_axis).unwrap_or(facing))
        } else {
            (slowed, facing)
        }
    } else if move_axis != 0.0 {
        let accelerated = (speed + profile.acceleration * dt).min(profile.max_speed);
        (accelerated, Facing::from_axis(move_axis).unwrap_or(facing))
    } else {
        ((speed - profile.deceleration * dt).max(0.0), facing)
    }
}

/// Integrates gravity with a terminal fall speed.
pub fn step_fall(vertical: f32, profile: &FallProfile, dt: f32) -> f32 {
    (vertical - profile.gravity * dt).max(-profile.max_fall_speed)
}

/// Movement-curve selection: ground profile while grounded, the dedicated
/// jump-air profile while falling out of a jump, the plain air profile
/// otherwise (impulsion ticks and ordinary ledge falls).
pub fn select_movement_profile<'a>(
    tuning: &'a HeroTuning,
    on_ground: bool,
    phase: &JumpPhase,
) -> &'a MovementProfile {
    if on_ground {
        &tuning.ground
    } else if *phase == JumpPhase::Falling {
        &tuning.jump_air
    } else {
        &tuning.air
    }
}

/// Advances the jump state machine and returns the new vertical speed.
///
/// Impulsion holds the level's rising speed until its max duration, then
/// hands over to the jump fall profile. Outside a jump, ground contact
/// zeroes vertical speed and free fall uses the ordinary fall profile.
pub fn step_vertical(
    machine: &mut JumpMachine,
    vertical: f32,
    on_ground: bool,
    tuning: &HeroTuning,
    dt: f32,
) -> f32 {
    match machine.phase {
        JumpPhase::Grounded => {
            if on_ground {
                0.0
            } else {
                step_fall(vertical, &tuning.fall, dt)
            }
        }
        JumpPhase::Impulsion { elapsed, level } => {
            let elapsed = elapsed + dt;
            match JumpLevel::clamped(&tuning.jump_levels, level) {
                Some(settings) if elapsed < settings.max_duration => {
                    machine.phase = JumpPhase::Impulsion { elapsed, level };
                    settings.rising_speed
                }
                _ => {
                    machine.phase = JumpPhase::Falling;
                    vertical
                }
            }
        }
        JumpPhase::Falling => {
            if on_ground {
                machine.phase = JumpPhase::Grounded;
                0.0
            } else {
                step_fall(vertical, &tuning.jump_fall, dt)
            }
        }
    }
}
