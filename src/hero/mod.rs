//! Hero domain: locomotion core plugin wiring and public exports.

mod components;
mod motion;
mod spawn;
mod systems;
mod tuning;

#[cfg(test)]
mod tests;

pub use components::{Contacts, DashState, Facing, GameLayer, Hero, JumpMachine, JumpPhase, Motion};
pub use tuning::{
    DashSettings, FallProfile, HeroInput, HeroTuning, JumpLevel, MovementProfile,
};

use bevy::prelude::*;

pub(crate) use spawn::spawn_hero;

pub struct HeroPlugin;

impl Plugin for HeroPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<HeroTuning>()
            .init_resource::<HeroInput>()
            .add_systems(Startup, spawn_hero)
            .add_systems(
                Update,
                (systems::sample_input, systems::update_orient_visual),
            )
            .add_systems(
                FixedUpdate,
                (
                    systems::detect_contacts,
                    systems::tick_timers,
                    systems::resolve_jump,
                    systems::resolve_dash,
                    systems::resolve_horizontal,
                    systems::resolve_vertical,
                    systems::write_velocity,
                    systems::update_follow_anchor,
                    systems::clear_pressed,
                )
                    .chain(),
            );
    }
}
