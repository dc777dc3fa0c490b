//! Hero domain: ground and wall detection via short-range ray probes.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::hero::{Contacts, GameLayer, Hero, HeroTuning, JumpMachine};

/// True iff any ray cast from `origin + offset` along `direction` over
/// `length` hits the filtered geometry. An empty probe set detects nothing.
pub(crate) fn any_probe_hit(
    spatial_query: &SpatialQuery,
    origin: Vec2,
    offsets: &[Vec2],
    direction: Dir2,
    length: f32,
    filter: &SpatialQueryFilter,
) -> bool {
    offsets
        .iter()
        .any(|offset| {
            spatial_query
                .cast_ray(origin + *offset, direction, length, true, filter)
                .is_some()
        })
}

/// Probe points along the bottom edge of a collider of the given half
/// extents: both corners plus the center.
pub(crate) fn ground_probe_offsets(half_extents: Vec2) -> [Vec2; 3] {
    [
        Vec2::new(-half_extents.x, -half_extents.y),
        Vec2::new(0.0, -half_extents.y),
        Vec2::new(half_extents.x, -half_extents.y),
    ]
}

/// Probe points on one side edge (`side_sign` -1 = left, +1 = right), at
/// half height above and below center.
pub(crate) fn wall_probe_offsets(half_extents: Vec2, side_sign: f32) -> [Vec2; 2] {
    [
        Vec2::new(side_sign * half_extents.x, half_extents.y * 0.5),
        Vec2::new(side_sign * half_extents.x, -half_extents.y * 0.5),
    ]
}

/// First pipeline stage: refreshes contact flags, refills jump charges on
/// landing and seeds the coyote window on ground loss.
pub(crate) fn detect_contacts(
    spatial_query: SpatialQuery,
    tuning: Res<HeroTuning>,
    mut query: Query<(&Transform, &Collider, &mut Contacts, &mut JumpMachine), With<Hero>>,
) {
    let ground_filter = SpatialQueryFilter::from_mask(GameLayer::Ground);
    let wall_filter = SpatialQueryFilter::from_mask(GameLayer::Wall);

    for (transform, collider, mut contacts, mut machine) in &mut query {
        let half_extents = match collider.shape_scaled().as_cuboid() {
            Some(cuboid) => Vec2::new(cuboid.half_extents.x, cuboid.half_extents.y),
            None => Vec2::new(12.0, 24.0),
        };
        let origin = transform.translation.truncate();

        let was_on_ground = contacts.on_ground;
        contacts.on_ground = any_probe_hit(
            &spatial_query,
            origin,
            &ground_probe_offsets(half_extents),
            Dir2::NEG_Y,
            tuning.probe_length,
            &ground_filter,
        );
        contacts.wall_left = any_probe_hit(
            &spatial_query,
            origin,
            &wall_probe_offsets(half_extents, -1.0),
            Dir2::NEG_X,
            tuning.probe_length,
            &wall_filter,
        );
        contacts.wall_right = any_probe_hit(
            &spatial_query,
            origin,
            &wall_probe_offsets(half_extents, 1.0),
            Dir2::X,
            tuning.probe_length,
            &wall_filter,
        );

        // Charge refill is tied to contact itself, not the jump phase.
        if contacts.on_ground && !was_on_ground {
            machine.charge_index = 0;
            debug!("Landed: charges refilled ({})", tuning.jump_levels.len());
        } else if !contacts.on_ground && was_on_ground {
            machine.coyote_timer = tuning.coyote_duration;
            debug!("Left ground: coyote window {}s", tuning.coyote_duration);
        }
    }
}
