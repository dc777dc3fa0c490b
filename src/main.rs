mod arena;
mod camera;
mod config;
#[cfg(feature = "dev-tools")]
mod dev;
mod hero;

use avian2d::prelude::*;
use bevy::prelude::*;

fn main() {
    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Square Land".to_string(),
            resolution: (1280, 720).into(),
            resizable: true,
            ..default()
        }),
        ..default()
    }))
    .add_plugins(PhysicsPlugins::default())
    .add_plugins((
        config::ConfigPlugin,
        hero::HeroPlugin,
        camera::CameraRigPlugin,
        arena::ArenaPlugin,
    ));

    #[cfg(feature = "dev-tools")]
    app.add_plugins(dev::DevPlugin);

    app.run();
}
