//! Arena domain: static geometry spawn.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::arena::zones::CameraZone;
use crate::hero::GameLayer;

const GROUND_COLOR: Color = Color::srgb(0.35, 0.3, 0.28);
const WALL_COLOR: Color = Color::srgb(0.3, 0.32, 0.38);

fn ground_slab(position: Vec2, size: Vec2) -> impl Bundle {
    (
        Sprite {
            color: GROUND_COLOR,
            custom_size: Some(size),
            ..default()
        },
        Transform::from_xyz(position.x, position.y, 0.0),
        RigidBody::Static,
        Collider::rectangle(size.x, size.y),
        CollisionLayers::new(GameLayer::Ground, [GameLayer::Hero]),
    )
}

fn wall(position: Vec2, size: Vec2) -> impl Bundle {
    (
        Sprite {
            color: WALL_COLOR,
            custom_size: Some(size),
            ..default()
        },
        Transform::from_xyz(position.x, position.y, 0.0),
        RigidBody::Static,
        Collider::rectangle(size.x, size.y),
        CollisionLayers::new(GameLayer::Wall, [GameLayer::Hero]),
    )
}

pub(crate) fn spawn_arena(mut commands: Commands) {
    // Main floor plus a raised ledge to the right.
    commands.spawn(ground_slab(Vec2::new(0.0, -16.0), Vec2::new(1600.0, 32.0)));
    commands.spawn(ground_slab(Vec2::new(1100.0, 64.0), Vec2::new(600.0, 32.0)));
    commands.spawn(ground_slab(Vec2::new(380.0, 120.0), Vec2::new(180.0, 24.0)));

    // Boundary walls.
    commands.spawn(wall(Vec2::new(-816.0, 200.0), Vec2::new(32.0, 480.0)));
    commands.spawn(wall(Vec2::new(1416.0, 280.0), Vec2::new(32.0, 480.0)));

    // The right-hand ledge is framed by a wider static shot.
    commands.spawn(CameraZone::new(
        Rect::new(760.0, -50.0, 1400.0, 500.0),
        "overlook",
    ));

    info!("Arena spawned");
}
