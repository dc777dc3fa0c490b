//! Hero domain: unit tests for the motion models, jump machine and dash.

use bevy::prelude::Vec2;

use super::motion::{select_movement_profile, step_fall, step_horizontal, step_vertical};
use super::systems::contacts::{ground_probe_offsets, wall_probe_offsets};
use super::{DashState, Facing, HeroTuning, JumpLevel, JumpMachine, JumpPhase};

fn tuning() -> HeroTuning {
    HeroTuning::default()
}

// -----------------------------------------------------------------------------
// Horizontal motion model
// -----------------------------------------------------------------------------

#[test]
fn test_accelerate_clamps_to_max_speed() {
    let t = tuning();
    let (speed, facing) = step_horizontal(315.0, Facing::Right, 1.0, &t.ground, 0.1);
    assert_eq!(speed, t.ground.max_speed);
    assert_eq!(facing, Facing::Right);
}

#[test]
fn test_accelerate_snaps_facing_to_intent() {
    let t = tuning();
    let (speed, facing) = step_horizontal(0.0, Facing::Right, -1.0, &t.ground, 0.01);
    assert!(speed > 0.0);
    assert_eq!(facing, Facing::Left);
}

#[test]
fn test_decelerate_floors_at_zero() {
    let t = tuning();
    let (speed, facing) = step_horizontal(10.0, Facing::Left, 0.0, &t.ground, 0.1);
    assert_eq!(speed, 0.0);
    assert_eq!(facing, Facing::Left);
}

#[test]
fn test_turn_back_decelerates_before_flipping() {
    let t = tuning();
    // Moving right at full speed while pushing left: slows, keeps facing.
    let (speed, facing) = step_horizontal(320.0, Facing::Right, -1.0, &t.ground, 0.01);
    assert!(speed < 320.0 && speed > 0.0);
    assert_eq!(facing, Facing::Right);
}

#[test]
fn test_turn_back_flips_once_stopped() {
    let t = tuning();
    // Friction over this dt exceeds the remaining speed.
    let (speed, facing) = step_horizontal(30.0, Facing::Right, -1.0, &t.ground, 0.1);
    assert_eq!(speed, 0.0);
    assert_eq!(facing, Facing::Left);
}

#[test]
fn test_movement_profile_selection() {
    let t = tuning();
    let grounded = select_movement_profile(&t, true, &JumpPhase::Falling);
    assert!(std::ptr::eq(grounded, &t.ground));

    let jump_fall = select_movement_profile(&t, false, &JumpPhase::Falling);
    assert!(std::ptr::eq(jump_fall, &t.jump_air));

    let ledge_fall = select_movement_profile(&t, false, &JumpPhase::Grounded);
    assert!(std::ptr::eq(ledge_fall, &t.air));

    let impulsion = select_movement_profile(
        &t,
        false,
        &JumpPhase::Impulsion {
            elapsed: 0.0,
            level: 0,
        },
    );
    assert!(std::ptr::eq(impulsion, &t.air));
}

// -----------------------------------------------------------------------------
// Vertical model
// -----------------------------------------------------------------------------

#[test]
fn test_fall_reaches_terminal_speed() {
    let t = tuning();
    let mut vertical = 0.0;
    for _ in 0..200 {
        vertical = step_fall(vertical, &t.fall, 0.02);
    }
    assert_eq!(vertical, -t.fall.max_fall_speed);
}

#[test]
fn test_impulsion_holds_rising_speed_then_falls_exactly_once() {
    let t = tuning();
    let mut machine = JumpMachine::default();
    machine.start();

    let mut vertical = 0.0;
    let mut transitions = 0;
    let mut was_impulsing = true;
    // dt sequence summing well past max_duration.
    for _ in 0..100 {
        vertical = step_vertical(&mut machine, vertical, false, &t, 0.01);
        if machine.is_impulsing() {
            assert_eq!(vertical, t.jump_levels[0].rising_speed);
        } else if was_impulsing {
            transitions += 1;
            was_impulsing = false;
        }
    }
    assert_eq!(transitions, 1);
    assert_eq!(machine.phase, JumpPhase::Falling);
    assert!(vertical < 0.0);
}

#[test]
fn test_release_before_min_duration_keeps_impulsing() {
    let t = tuning();
    let mut machine = JumpMachine::default();
    machine.start();
    step_vertical(&mut machine, 0.0, false, &t, 0.04);

    machine.stop_impulsion(&t.jump_levels);
    assert!(machine.is_impulsing());
}

#[test]
fn test_release_after_min_duration_forces_falling() {
    let t = tuning();
    let mut machine = JumpMachine::default();
    machine.start();
    step_vertical(&mut machine, 0.0, false, &t, 0.05);
    step_vertical(&mut machine, 0.0, false, &t, 0.05);

    machine.stop_impulsion(&t.jump_levels);
    assert_eq!(machine.phase, JumpPhase::Falling);
}

#[test]
fn test_landing_zeroes_vertical_and_grounds_the_machine() {
    let t = tuning();
    let mut machine = JumpMachine {
        phase: JumpPhase::Falling,
        ..JumpMachine::default()
    };
    let vertical = step_vertical(&mut machine, -300.0, true, &t, 0.02);
    assert_eq!(vertical, 0.0);
    assert_eq!(machine.phase, JumpPhase::Grounded);
}

#[test]
fn test_ledge_fall_uses_ordinary_fall_profile() {
    let t = tuning();
    let mut machine = JumpMachine::default();
    let vertical = step_vertical(&mut machine, 0.0, false, &t, 0.02);
    assert_eq!(vertical, -t.fall.gravity * 0.02);
    assert_eq!(machine.phase, JumpPhase::Grounded);
}

// -----------------------------------------------------------------------------
// Jump charges, coyote time, jump buffer
// -----------------------------------------------------------------------------

#[test]
fn test_multi_jump_consumes_charges_in_order() {
    let t = tuning();
    let mut machine = JumpMachine::default();

    assert!(machine.can_start(true, t.jump_levels.len()));
    machine.start();
    assert_eq!(machine.phase, JumpPhase::Impulsion { elapsed: 0.0, level: 0 });

    // Airborne, coyote expired: the second charge still allows a jump.
    machine.phase = JumpPhase::Falling;
    assert!(machine.can_start(false, t.jump_levels.len()));
    machine.start();
    assert_eq!(machine.phase, JumpPhase::Impulsion { elapsed: 0.0, level: 1 });

    // All charges spent.
    machine.phase = JumpPhase::Falling;
    assert!(!machine.can_start(false, t.jump_levels.len()));
}

#[test]
fn test_cannot_start_while_impulsing() {
    let t = tuning();
    let mut machine = JumpMachine::default();
    machine.start();
    assert!(!machine.can_start(true, t.jump_levels.len()));
}

#[test]
fn test_coyote_window_substitutes_for_ground() {
    let t = tuning();
    let mut machine = JumpMachine::default();
    // Walked off a ledge: no jump spent, coyote seeded.
    machine.coyote_timer = t.coyote_duration;

    machine.tick_timers(false, 0.05);
    assert!(machine.can_start(false, t.jump_levels.len()));

    machine.tick_timers(false, t.coyote_duration);
    // Window expired; the untouched charges still allow an air jump.
    assert!(machine.can_start(false, t.jump_levels.len()));
    // With every charge spent it fails outright.
    machine.charge_index = t.jump_levels.len();
    assert!(!machine.can_start(false, t.jump_levels.len()));
}

#[test]
fn test_coyote_jump_requires_a_remaining_charge() {
    let t = tuning();
    let mut machine = JumpMachine::default();
    // Single-level table: the ground jump spends the only charge, and
    // leaving the ground mid-jump seeds the coyote window.
    machine.start();
    machine.coyote_timer = t.coyote_duration;
    machine.phase = JumpPhase::Falling;

    assert!(machine.coyote_active());
    assert!(!machine.can_start(false, 1));

    // The ineligible press arms the buffer; coyote alone must not let
    // the buffered jump fire either.
    assert!(!machine.press(false, 1));
    machine.tick_timers(false, 0.02);
    assert!(!machine.try_buffered(false, 1, t.jump_buffer_duration));
}

#[test]
fn test_buffered_press_fires_in_the_coyote_window() {
    let t = tuning();
    let mut machine = JumpMachine::default();
    machine.start();
    machine.coyote_timer = t.coyote_duration;

    // Press mid-impulsion: ineligible, arms the buffer.
    assert!(!machine.press(false, t.jump_levels.len()));
    machine.phase = JumpPhase::Falling;
    machine.tick_timers(false, 0.02);

    // A charge remains, so the coyote window lets the buffer fire.
    assert!(machine.try_buffered(false, t.jump_levels.len(), t.jump_buffer_duration));
    assert_eq!(machine.phase, JumpPhase::Impulsion { elapsed: 0.0, level: 1 });
}

#[test]
fn test_jump_buffer_fires_exactly_once_on_landing() {
    let t = tuning();
    let mut machine = JumpMachine {
        charge_index: t.jump_levels.len(),
        ..JumpMachine::default()
    };

    // Press while airborne and ineligible: arms the buffer.
    assert!(!machine.press(false, t.jump_levels.len()));
    machine.tick_timers(false, 0.05);
    assert!(!machine.try_buffered(false, t.jump_levels.len(), t.jump_buffer_duration));

    // Landing within the window fires one jump, then the buffer is spent.
    machine.charge_index = 0;
    assert!(machine.try_buffered(true, t.jump_levels.len(), t.jump_buffer_duration));
    machine.phase = JumpPhase::Falling;
    assert!(!machine.try_buffered(true, t.jump_levels.len(), t.jump_buffer_duration));
}

#[test]
fn test_jump_buffer_expires_after_window() {
    let t = tuning();
    let mut machine = JumpMachine {
        charge_index: t.jump_levels.len(),
        ..JumpMachine::default()
    };

    assert!(!machine.press(false, t.jump_levels.len()));
    machine.tick_timers(false, t.jump_buffer_duration + 0.01);

    machine.charge_index = 0;
    assert!(!machine.try_buffered(true, t.jump_levels.len(), t.jump_buffer_duration));
}

#[test]
fn test_eligible_press_starts_without_buffering() {
    let t = tuning();
    let mut machine = JumpMachine::default();
    assert!(machine.press(true, t.jump_levels.len()));
    assert!(machine.is_impulsing());
    assert!(!machine.buffer_armed(t.jump_buffer_duration));
}

#[test]
fn test_charge_lookup_clamps_to_last_level() {
    let t = tuning();
    let last = t.jump_levels.len() - 1;
    let level = JumpLevel::clamped(&t.jump_levels, last + 5).unwrap();
    assert_eq!(level.rising_speed, t.jump_levels[last].rising_speed);
}

#[test]
fn test_charge_lookup_survives_an_empty_table() {
    assert!(JumpLevel::clamped(&[], 3).is_none());

    // The early cutoff falls back to a zero minimum instead of faulting.
    let mut machine = JumpMachine::default();
    machine.start();
    machine.stop_impulsion(&[]);
    assert_eq!(machine.phase, JumpPhase::Falling);
}

// -----------------------------------------------------------------------------
// Dash
// -----------------------------------------------------------------------------

#[test]
fn test_dash_restores_pre_dash_speed_after_duration() {
    let t = tuning();
    let mut dash = DashState::default();
    assert!(dash.start(140.0));

    let mut restored = None;
    let mut ticks = 0;
    while restored.is_none() {
        restored = dash.tick(0.04, t.dash.duration);
        ticks += 1;
    }
    assert_eq!(restored, Some(140.0));
    assert_eq!(ticks, 4); // 0.16s at 0.04s per tick
    assert!(!dash.active);
    assert_eq!(dash.elapsed, 0.0);
}

#[test]
fn test_dash_restore_floors_at_zero() {
    let t = tuning();
    let mut dash = DashState::default();
    dash.start(-10.0);
    let restored = dash.tick(t.dash.duration, t.dash.duration);
    assert_eq!(restored, Some(0.0));
}

#[test]
fn test_dash_retrigger_while_active_is_ignored() {
    let mut dash = DashState::default();
    assert!(dash.start(100.0));
    assert!(!dash.start(900.0));
    assert_eq!(dash.saved_speed, 100.0);
}

#[test]
fn test_dash_tick_is_noop_while_inactive() {
    let t = tuning();
    let mut dash = DashState::default();
    assert_eq!(dash.tick(0.1, t.dash.duration), None);
    assert_eq!(dash.elapsed, 0.0);
}

// -----------------------------------------------------------------------------
// Contact probes
// -----------------------------------------------------------------------------

#[test]
fn test_ground_probes_span_the_bottom_edge() {
    let half = Vec2::new(12.0, 24.0);
    let offsets = ground_probe_offsets(half);
    assert_eq!(offsets.len(), 3);
    for offset in offsets {
        assert_eq!(offset.y, -half.y);
    }
    assert_eq!(offsets[0].x, -half.x);
    assert_eq!(offsets[2].x, half.x);
}

#[test]
fn test_wall_probes_sit_on_the_side_edges() {
    let half = Vec2::new(12.0, 24.0);
    let left = wall_probe_offsets(half, -1.0);
    let right = wall_probe_offsets(half, 1.0);
    assert!(left.iter().all(|o| o.x == -half.x));
    assert!(right.iter().all(|o| o.x == half.x));
}
