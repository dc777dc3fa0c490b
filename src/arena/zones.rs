//! Arena domain: regions that switch the camera profile while the hero is
//! inside them.

use bevy::prelude::*;

use crate::camera::{CameraProfileRegistry, CameraRig};
use crate::config::CameraConfig;
use crate::hero::Hero;

/// Axis-aligned region bound to a camera profile. Entering it plays a
/// transition into the profile; leaving it reverts to the default profile.
#[derive(Component, Debug)]
pub struct CameraZone {
    pub rect: Rect,
    pub profile_id: String,
    pub hero_inside: bool,
}

impl CameraZone {
    pub fn new(rect: Rect, profile_id: impl Into<String>) -> Self {
        Self {
            rect,
            profile_id: profile_id.into(),
            hero_inside: false,
        }
    }
}

pub(crate) fn track_camera_zones(
    mut rig: ResMut<CameraRig>,
    registry: Res<CameraProfileRegistry>,
    config: Res<CameraConfig>,
    hero: Query<&Transform, With<Hero>>,
    mut zones: Query<&mut CameraZone>,
) {
    let Ok(hero) = hero.single() else {
        return;
    };
    let hero_position = hero.translation.truncate();

    for mut zone in &mut zones {
        let inside = zone.rect.contains(hero_position);
        if inside == zone.hero_inside {
            continue;
        }
        zone.hero_inside = inside;

        if inside {
            match registry.get(&zone.profile_id) {
                Some(profile) => {
                    rig.enter_profile(profile.clone(), Some(config.zone_transition));
                }
                None => warn!("Camera zone references unknown profile '{}'", zone.profile_id),
            }
        } else {
            rig.exit_profile(&zone.profile_id, Some(config.zone_transition));
        }
    }
}
