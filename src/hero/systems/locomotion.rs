//! Hero domain: fixed-tick locomotion stages.
//!
//! The stages run as one chained pipeline per fixed tick:
//! contacts -> timers -> jump -> dash -> horizontal -> vertical ->
//! velocity write -> follow anchor -> intent clear. The pipeline is the
//! only writer of the hero's `LinearVelocity`.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::camera::FollowAnchor;
use crate::hero::motion::{select_movement_profile, step_horizontal, step_vertical};
use crate::hero::{Contacts, DashState, Hero, HeroInput, HeroTuning, JumpMachine, Motion};

pub(crate) fn tick_timers(
    time: Res<Time>,
    mut query: Query<(&Contacts, &mut JumpMachine), With<Hero>>,
) {
    let dt = time.delta_secs();
    for (contacts, mut machine) in &mut query {
        machine.tick_timers(contacts.on_ground, dt);
    }
}

/// Resolves jump intents: direct presses, buffered presses and the
/// held-button early cutoff.
pub(crate) fn resolve_jump(
    input: Res<HeroInput>,
    tuning: Res<HeroTuning>,
    mut query: Query<(&Contacts, &mut JumpMachine), With<Hero>>,
) {
    for (contacts, mut machine) in &mut query {
        if input.jump_just_pressed {
            if machine.press(contacts.on_ground, tuning.jump_levels.len()) {
                debug!(
                    "Jump start: charge={}, grounded={}, coyote={}",
                    machine.charge_index - 1,
                    contacts.on_ground,
                    machine.coyote_active()
                );
            } else {
                debug!("Jump buffered: window {}s", tuning.jump_buffer_duration);
            }
        }

        if machine.try_buffered(
            contacts.on_ground,
            tuning.jump_levels.len(),
            tuning.jump_buffer_duration,
        ) {
            debug!("Buffered jump fired on landing");
        }

        if !input.jump_held {
            machine.stop_impulsion(&tuning.jump_levels);
        }
    }
}

/// Starts and advances the dash. While active the dash owns the horizontal
/// speed magnitude; on expiry the pre-dash speed is restored (floored at
/// zero). Works identically grounded or airborne.
pub(crate) fn resolve_dash(
    time: Res<Time>,
    input: Res<HeroInput>,
    tuning: Res<HeroTuning>,
    mut query: Query<(&mut DashState, &mut Motion), With<Hero>>,
) {
    let dt = time.delta_secs();
    for (mut dash, mut motion) in &mut query {
        if input.dash_just_pressed && dash.start(motion.speed) {
            motion.speed = tuning.dash.speed;
            debug!("Dash start: saved speed {}", dash.saved_speed);
        }

        if let Some(restored) = dash.tick(dt, tuning.dash.duration) {
            motion.speed = restored;
            debug!("Dash end: speed restored to {}", restored);
        }
    }
}

pub(crate) fn resolve_horizontal(
    time: Res<Time>,
    input: Res<HeroInput>,
    tuning: Res<HeroTuning>,
    mut query: Query<(&Contacts, &JumpMachine, &DashState, &mut Motion), With<Hero>>,
) {
    let dt = time.delta_secs();
    for (contacts, machine, dash, mut motion) in &mut query {
        if dash.active {
            continue;
        }
        let profile = select_movement_profile(&tuning, contacts.on_ground, &machine.phase);
        let (speed, facing) =
            step_horizontal(motion.speed, motion.facing, input.move_axis, profile, dt);
        motion.speed = speed;
        motion.facing = facing;
    }
}

pub(crate) fn resolve_vertical(
    time: Res<Time>,
    tuning: Res<HeroTuning>,
    mut query: Query<(&Contacts, &mut JumpMachine, &mut Motion), With<Hero>>,
) {
    let dt = time.delta_secs();
    for (contacts, mut machine, mut motion) in &mut query {
        motion.vertical =
            step_vertical(&mut machine, motion.vertical, contacts.on_ground, &tuning, dt);
    }
}

pub(crate) fn write_velocity(mut query: Query<(&Motion, &mut LinearVelocity), With<Hero>>) {
    for (motion, mut velocity) in &mut query {
        velocity.x = motion.speed * motion.facing.sign();
        velocity.y = motion.vertical;
    }
}

/// The camera tracks this anchor rather than the raw transform: x follows
/// every tick, y only while grounded, so jumps do not jitter the camera.
pub(crate) fn update_follow_anchor(
    mut query: Query<(&Transform, &Contacts, &mut FollowAnchor), With<Hero>>,
) {
    for (transform, contacts, mut anchor) in &mut query {
        anchor.position.x = transform.translation.x;
        if contacts.on_ground {
            anchor.position.y = transform.translation.y;
        }
    }
}

/// Render-tick sprite flip from facing.
pub(crate) fn update_orient_visual(mut query: Query<(&Motion, &mut Sprite), With<Hero>>) {
    for (motion, mut sprite) in &mut query {
        sprite.flip_x = motion.facing == crate::hero::Facing::Left;
    }
}
