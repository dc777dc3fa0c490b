//! Config domain: serde definitions for authored camera profiles.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::camera::{CameraProfile, CameraProfileKind, CameraTransition, Damping};

/// Authored form of a camera profile. `follow_hero` is resolved to the
/// hero entity when the rig is built.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CameraProfileDef {
    pub id: String,
    pub kind: CameraProfileKind,
    #[serde(default)]
    pub position: [f32; 2],
    pub size: f32,
    #[serde(default)]
    pub follow_hero: bool,
    #[serde(default)]
    pub horizontal_damping: Damping,
    #[serde(default)]
    pub vertical_damping: Damping,
    /// Advisory bounds as (min_x, min_y, max_x, max_y).
    #[serde(default)]
    pub bounds: Option<[f32; 4]>,
}

impl CameraProfileDef {
    pub fn build(&self, hero: Option<Entity>) -> CameraProfile {
        CameraProfile {
            id: self.id.clone(),
            kind: self.kind,
            position: Vec2::from_array(self.position),
            size: self.size,
            follow_target: if self.follow_hero { hero } else { None },
            horizontal_damping: self.horizontal_damping,
            vertical_damping: self.vertical_damping,
            bounds: self.bounds.map(|[min_x, min_y, max_x, max_y]| {
                Rect::new(min_x, min_y, max_x, max_y)
            }),
        }
    }
}

/// Camera authoring: the default profile plus every profile zones can
/// switch to at runtime.
#[derive(Resource, Debug, Clone, Deserialize, Serialize)]
pub struct CameraConfig {
    pub default_profile: String,
    pub zone_transition: CameraTransition,
    pub profiles: Vec<CameraProfileDef>,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            default_profile: "follow_hero".to_string(),
            zone_transition: CameraTransition { duration: 1.0 },
            profiles: vec![
                CameraProfileDef {
                    id: "follow_hero".to_string(),
                    kind: CameraProfileKind::FollowTarget,
                    position: [0.0, 0.0],
                    size: 360.0,
                    follow_hero: true,
                    horizontal_damping: Damping {
                        enabled: true,
                        factor: 5.0,
                    },
                    vertical_damping: Damping {
                        enabled: true,
                        factor: 4.0,
                    },
                    bounds: None,
                },
                CameraProfileDef {
                    id: "overlook".to_string(),
                    kind: CameraProfileKind::Static,
                    position: [900.0, 200.0],
                    size: 480.0,
                    follow_hero: false,
                    horizontal_damping: Damping::default(),
                    vertical_damping: Damping::default(),
                    bounds: Some([400.0, -100.0, 1400.0, 500.0]),
                },
            ],
        }
    }
}
