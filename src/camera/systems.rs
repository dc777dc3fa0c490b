//! Camera domain: rig construction and the render-tick update.

use bevy::camera::ScalingMode;
use bevy::prelude::*;

use crate::camera::profile::{CameraProfile, CameraProfileRegistry, FollowAnchor};
use crate::camera::rig::CameraRig;
use crate::config::CameraConfig;
use crate::hero::Hero;

/// Builds the profile registry and the rig from authored config, then
/// spawns the camera. Runs after the hero spawn so follow profiles can
/// resolve their target entity.
pub(crate) fn setup_camera_rig(
    mut commands: Commands,
    config: Res<CameraConfig>,
    hero: Query<Entity, With<Hero>>,
) {
    let hero = hero.single().ok();
    if hero.is_none() {
        warn!("No hero entity; follow profiles fall back to static positions");
    }

    let mut registry = CameraProfileRegistry::default();
    for def in &config.profiles {
        registry.insert(def.build(hero));
    }

    let default_profile = match registry.get(&config.default_profile) {
        Some(profile) => profile.clone(),
        None => {
            warn!(
                "Default camera profile '{}' not found, using a static fallback",
                config.default_profile
            );
            CameraProfile::fixed("fallback", Vec2::ZERO, 360.0)
        }
    };

    commands.insert_resource(CameraRig::new(default_profile));
    commands.insert_resource(registry);
    commands.spawn(Camera2d);
}

/// Render-tick camera update: resolves the follow anchor, advances the rig
/// and applies the resulting framing to the camera entity.
pub(crate) fn update_camera(
    time: Res<Time>,
    mut rig: ResMut<CameraRig>,
    anchors: Query<&FollowAnchor>,
    mut cameras: Query<(&mut Transform, &mut Projection), With<Camera2d>>,
) {
    let follow_anchor = rig
        .active_profile()
        .follow_target
        .and_then(|target| anchors.get(target).ok())
        .map(|anchor| anchor.position);

    let (position, size) = rig.advance(follow_anchor, time.delta_secs());

    for (mut transform, mut projection) in &mut cameras {
        transform.translation.x = position.x;
        transform.translation.y = position.y;
        if let Projection::Orthographic(ortho) = projection.as_mut() {
            ortho.scaling_mode = ScalingMode::FixedVertical {
                viewport_height: size * 2.0,
            };
        }
    }
}
