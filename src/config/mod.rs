//! Config domain: authored configuration plugin wiring and exports.

mod data;
mod loader;

#[cfg(test)]
mod tests;

pub use data::{CameraConfig, CameraProfileDef};

use bevy::prelude::*;

pub struct ConfigPlugin;

impl Plugin for ConfigPlugin {
    fn build(&self, app: &mut App) {
        // PreStartup so every Startup consumer sees the authored values.
        app.init_resource::<CameraConfig>()
            .add_systems(PreStartup, loader::load_config);
    }
}
