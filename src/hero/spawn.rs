//! Hero domain: hero entity spawn.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::camera::FollowAnchor;
use crate::hero::{Contacts, DashState, GameLayer, Hero, JumpMachine, Motion};

pub(crate) const HERO_SPAWN: Vec2 = Vec2::new(0.0, 60.0);
const HERO_SIZE: Vec2 = Vec2::new(24.0, 48.0);

pub(crate) fn spawn_hero(mut commands: Commands) {
    commands.spawn((
        // Identity & locomotion state
        (
            Hero,
            Motion::default(),
            Contacts::default(),
            JumpMachine::default(),
            DashState::default(),
            FollowAnchor {
                position: HERO_SPAWN,
            },
        ),
        // Rendering
        Sprite {
            color: Color::srgb(0.9, 0.9, 0.9),
            custom_size: Some(HERO_SIZE),
            ..default()
        },
        Transform::from_xyz(HERO_SPAWN.x, HERO_SPAWN.y, 0.0),
        // Physics: the pipeline owns velocity, so engine gravity is off.
        (
            RigidBody::Dynamic,
            Collider::rectangle(HERO_SIZE.x, HERO_SIZE.y),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            GravityScale(0.0),
            Friction::new(0.0),
            CollisionLayers::new(GameLayer::Hero, [GameLayer::Ground, GameLayer::Wall]),
        ),
    ));
    info!("Hero spawned at {:?}", HERO_SPAWN);
}
