//! Click abilities: the per-bird two-state machine (unclicked → clicked) and
//! the species dispatch behind it.
//!
//! Each bird's ability fires at most once. The transition is irreversible and
//! idempotent — a second click on the same bird is a no-op regardless of
//! species.

use crate::bird::{split_impulses, spawn_bird, Bird, Species};
use crate::config::GameConfig;
use crate::constants::PICK_RADIUS_SLOP;
use crate::obstacle::spawn_egg;
use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

/// Fire `bird`'s species ability, guarded by the `clicked` flag.
///
/// `position`, `heading`, and `speed` are the bird body's current physics
/// state, sampled by the caller:
/// - Blues: spawns two pre-clicked children at `position`, launch angles
///   offset from the parent's and magnitude reduced by the flat split cost.
/// - Matilda: spawns one passive egg at `position`.
/// - Chuck: adds an impulse of `speed_factor × speed` along `heading`.
/// - Red, Terence: mark the click and do nothing else.
pub fn trigger_ability(
    commands: &mut Commands,
    assets: &AssetServer,
    config: &GameConfig,
    position: Vec2,
    heading: Vec2,
    speed: f32,
    bird: &mut Bird,
    impulse: &mut ExternalImpulse,
) {
    if bird.clicked {
        return;
    }
    bird.clicked = true;

    match bird.species {
        Species::Blues => {
            let (upper, lower) = split_impulses(&bird.impulse, &config.split);
            for vector in [upper, lower] {
                let child = spawn_bird(
                    commands,
                    assets,
                    config,
                    Species::Blues,
                    vector,
                    position,
                    true,
                );
                bird.children.push(child);
            }
            info!("blues split at ({:.0}, {:.0})", position.x, position.y);
        }
        Species::Matilda => {
            let egg = spawn_egg(commands, assets, config, position);
            bird.children.push(egg);
            info!("matilda dropped an egg at ({:.0}, {:.0})", position.x, position.y);
        }
        Species::Chuck => {
            impulse.impulse += heading * (config.boost.speed_factor * speed);
            info!("chuck boost: speed {speed:.0} doubled along heading");
        }
        Species::Red | Species::Terence => {}
    }
}

/// Handle left clicks: convert the cursor to world space, find the bird
/// under it, and fire that bird's ability.
pub fn bird_click_system(
    mut commands: Commands,
    assets: Res<AssetServer>,
    config: Res<GameConfig>,
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window>,
    cameras: Query<(&Camera, &GlobalTransform)>,
    mut birds: Query<(Entity, &Transform, &Velocity, &mut Bird, &mut ExternalImpulse)>,
) {
    if !buttons.just_pressed(MouseButton::Left) {
        return;
    }
    let Ok(window) = windows.single() else {
        return;
    };
    let Some(cursor) = window.cursor_position() else {
        return;
    };
    let Ok((camera, camera_transform)) = cameras.single() else {
        return;
    };
    let Ok(cursor_world) = camera.viewport_to_world_2d(camera_transform, cursor) else {
        return;
    };

    // Nearest bird whose collider (plus a little slop) covers the cursor.
    let mut picked: Option<(Entity, f32)> = None;
    for (entity, transform, _, bird, _) in birds.iter() {
        let distance = transform.translation.truncate().distance(cursor_world);
        let pick_radius = config.stats(bird.species).radius + PICK_RADIUS_SLOP;
        if distance <= pick_radius && picked.is_none_or(|(_, best)| distance < best) {
            picked = Some((entity, distance));
        }
    }
    let Some((entity, _)) = picked else {
        return;
    };

    let Ok((_, transform, velocity, mut bird, mut impulse)) = birds.get_mut(entity) else {
        return;
    };
    let position = transform.translation.truncate();
    let heading = (transform.rotation * Vec3::X).truncate();
    trigger_ability(
        &mut commands,
        &assets,
        &config,
        position,
        heading,
        velocity.linvel.length(),
        &mut bird,
        &mut impulse,
    );
}
