//! Hero domain: input sampling for the locomotion pipeline.

use bevy::prelude::*;

use crate::hero::HeroInput;

/// Samples keyboard state each render frame. Press intents are OR-ed in so
/// they survive until a fixed tick consumes them.
pub(crate) fn sample_input(keyboard: Res<ButtonInput<KeyCode>>, mut input: ResMut<HeroInput>) {
    let mut axis = 0.0;
    if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
        axis -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
        axis += 1.0;
    }

    input.move_axis = axis;
    input.jump_just_pressed |=
        keyboard.just_pressed(KeyCode::Space) || keyboard.just_pressed(KeyCode::KeyK);
    input.jump_held = keyboard.pressed(KeyCode::Space) || keyboard.pressed(KeyCode::KeyK);
    input.dash_just_pressed |=
        keyboard.just_pressed(KeyCode::ShiftLeft) || keyboard.just_pressed(KeyCode::KeyJ);
}

/// Final pipeline stage: press intents are one-shot per fixed tick.
pub(crate) fn clear_pressed(mut input: ResMut<HeroInput>) {
    input.jump_just_pressed = false;
    input.dash_just_pressed = false;
}
