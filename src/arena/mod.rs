//! Arena domain: test level geometry and scripted camera zones.

mod spawn;
mod zones;

pub use zones::CameraZone;

use bevy::prelude::*;

pub struct ArenaPlugin;

impl Plugin for ArenaPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn::spawn_arena)
            .add_systems(Update, zones::track_camera_zones);
    }
}
