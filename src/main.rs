use bevy::prelude::*;
use bevy::window::WindowResolution;
use bevy_rapier2d::prelude::*;

use slingshot::click::bird_click_system;
use slingshot::config::{self, GameConfig};
use slingshot::level::spawn_level;
use slingshot::visual::sync_sprites_system;

fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

/// Configure Rapier gravity from the loaded config: straight down.
fn setup_gravity(config: Res<GameConfig>, mut rapier_config: Query<&mut RapierConfiguration>) {
    for mut cfg in rapier_config.iter_mut() {
        cfg.gravity = Vec2::new(0.0, -config.gravity);
    }
}

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Slingshot".into(),
                resolution: WindowResolution::new(1200, 680),
                ..Default::default()
            }),
            ..Default::default()
        }))
        .insert_resource(ClearColor(Color::srgb(0.53, 0.80, 0.92)))
        // Insert GameConfig with compiled defaults; load_game_config overwrites
        // it from assets/game.toml (if present) in the Startup schedule.
        .insert_resource(GameConfig::default())
        // pixels_per_meter(1.0) keeps world units equal to pixels, so catalog
        // masses and impulses mean exactly what the constants say.
        .add_plugins(RapierPhysicsPlugin::<NoUserData>::pixels_per_meter(1.0))
        .add_systems(
            Startup,
            (
                // Load config first so every other startup system sees the
                // final values.
                config::load_game_config,
                setup_camera.after(config::load_game_config),
                setup_gravity.after(config::load_game_config),
                spawn_level
                    .after(config::load_game_config)
                    .after(setup_camera),
            ),
        )
        .add_systems(Update, bird_click_system)
        // Visual sync runs after Rapier has written body transforms back.
        .add_systems(PostUpdate, sync_sprites_system.after(PhysicsSet::Writeback))
        .run();
}
