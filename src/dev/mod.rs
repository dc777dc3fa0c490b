//! Dev domain: on-screen hero state overlay (dev-tools builds only).

use bevy::prelude::*;

use crate::hero::{Contacts, DashState, Hero, HeroInput, JumpMachine, Motion};

/// Marker for the overlay text node
#[derive(Component, Debug)]
pub struct DevOverlay;

pub struct DevPlugin;

impl Plugin for DevPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_overlay)
            .add_systems(Update, update_overlay);
    }
}

fn spawn_overlay(mut commands: Commands) {
    commands.spawn((
        DevOverlay,
        Text::new(""),
        TextFont {
            font_size: 14.0,
            ..default()
        },
        TextColor(Color::srgb(0.9, 0.9, 0.9)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(12.0),
            top: Val::Px(12.0),
            ..default()
        },
        ZIndex(500),
    ));
}

fn update_overlay(
    input: Res<HeroInput>,
    hero: Query<(&Motion, &Contacts, &JumpMachine, &DashState), With<Hero>>,
    mut overlay: Query<&mut Text, With<DevOverlay>>,
) {
    let Ok((motion, contacts, machine, dash)) = hero.single() else {
        return;
    };
    let Ok(mut text) = overlay.single_mut() else {
        return;
    };

    let ground_label = if contacts.on_ground { "OnGround" } else { "InAir" };
    **text = format!(
        "Hero\n\
         MoveAxis = {:.2}\n\
         Facing = {:?}\n\
         {} (wallL={} wallR={})\n\
         Jumping = {}\n\
         JumpPhase = {:?} (charge {})\n\
         Horizontal Speed = {:.1}\n\
         Vertical Speed = {:.1}\n\
         Dashing = {}",
        input.move_axis,
        motion.facing,
        ground_label,
        contacts.wall_left,
        contacts.wall_right,
        machine.is_jumping(),
        machine.phase,
        machine.charge_index,
        motion.speed,
        motion.vertical,
        dash.active,
    );
}
