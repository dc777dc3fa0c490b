//! Camera domain: profile/transition engine plugin wiring and exports.

mod profile;
mod rig;
mod systems;


pub use profile::{
    CameraProfile, CameraProfileKind, CameraProfileRegistry, CameraTransition, Damping,
    FollowAnchor,
};
pub use rig::CameraRig;

use bevy::prelude::*;

pub struct CameraRigPlugin;

impl Plugin for CameraRigPlugin {
    fn build(&self, app: &mut App) {
        // Rig setup resolves the follow target, so it runs after the hero
        // spawn from the hero plugin.
        app.add_systems(
            Startup,
            systems::setup_camera_rig.after(crate::hero::spawn_hero),
        )
        .add_systems(Update, systems::update_camera);
    }
}
