//! Config domain: RON loading for tuning and camera authoring.

use bevy::prelude::*;
use ron::Options;
use std::fs;
use std::path::Path;

use crate::config::data::CameraConfig;
use crate::hero::HeroTuning;

/// Error type for config loading failures.
#[derive(Debug)]
pub struct ConfigLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ConfigLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

/// RON options with extensions enabled for more flexible authoring.
pub(crate) fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Load a single RON struct from `path`.
fn load_file<T>(path: &Path) -> Result<T, ConfigLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| ConfigLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    ron_options()
        .from_str(&contents)
        .map_err(|e| ConfigLoadError {
            file: file_name,
            message: format!("Parse error: {}", e),
        })
}

/// Startup loader: reads `assets/config/*.ron` over the compiled-in
/// defaults. Load failures are logged and absorbed; the simulation always
/// starts with a usable configuration.
pub(crate) fn load_config(
    mut tuning: ResMut<HeroTuning>,
    mut camera_config: ResMut<CameraConfig>,
) {
    match load_file::<HeroTuning>(Path::new("assets/config/hero.ron")) {
        Ok(loaded) => {
            *tuning = sanitize_tuning(loaded);
            info!(
                "Hero tuning loaded: {} jump level(s)",
                tuning.jump_levels.len()
            );
        }
        Err(e) => warn!("{}; keeping default hero tuning", e),
    }

    match load_file::<CameraConfig>(Path::new("assets/config/camera.ron")) {
        Ok(loaded) => {
            info!("Camera config loaded: {} profile(s)", loaded.profiles.len());
            *camera_config = loaded;
        }
        Err(e) => warn!("{}; keeping default camera config", e),
    }
}

/// The jump machine indexes into the level table, so it must never be
/// empty; other values are authored freely.
pub(crate) fn sanitize_tuning(mut tuning: HeroTuning) -> HeroTuning {
    if tuning.jump_levels.is_empty() {
        warn!("Hero tuning has no jump levels, restoring defaults");
        tuning.jump_levels = HeroTuning::default().jump_levels;
    }
    tuning
}
