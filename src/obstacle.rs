//! Pigs, passive structures, and static scenery.
//!
//! Everything here is non-launched: pigs and passive objects get dynamic
//! bodies and are knocked around by birds; static objects get fixed bodies
//! and never move.

use crate::body::{self, Layer};
use crate::config::{BoxStats, GameConfig};
use crate::constants::{GROUND_Z, OBSTACLE_Z};
use crate::visual;
use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

pub const PIG_SPRITE: &str = "sprites/pig.png";
pub const COLUMN_SPRITE: &str = "sprites/column.png";
pub const EGG_SPRITE: &str = "sprites/egg.png";
pub const GROUND_SPRITE: &str = "sprites/ground.png";

/// Marker for a pig entity.
#[derive(Component, Debug, Clone, Copy)]
pub struct Pig;

/// Marker for a dynamic box obstacle (columns, eggs, crates).
#[derive(Component, Debug, Clone, Copy)]
pub struct PassiveObject;

/// Marker for fixed scenery (ground, ledges).
#[derive(Component, Debug, Clone, Copy)]
pub struct StaticObject;

/// Spawn a pig at `position`. Ball-bodied like a bird, but never launched
/// and with lower friction so impacts send it sliding.
pub fn spawn_pig(
    commands: &mut Commands,
    assets: &AssetServer,
    config: &GameConfig,
    position: Vec2,
) -> Entity {
    let stats = &config.pig;
    let (collider_mass, additional_mass) =
        body::explicit_mass(stats.mass, body::moment_for_circle(stats.mass, stats.radius));

    let body = commands
        .spawn((
            (
                Pig,
                Transform::from_translation(position.extend(0.0)),
                GlobalTransform::default(),
                RigidBody::Dynamic,
            ),
            (
                Collider::ball(stats.radius),
                collider_mass,
                additional_mass,
                Restitution::coefficient(stats.elasticity),
                Friction::coefficient(stats.friction),
                body::collision_groups(Layer::Pig),
                Velocity::zero(),
            ),
        ))
        .id();

    visual::spawn_sprite(
        commands,
        assets,
        PIG_SPRITE,
        stats.sprite_scale,
        position,
        crate::constants::ACTOR_Z,
        body,
    );

    body
}

/// Spawn a dynamic box obstacle at `position` with the given stats and
/// sprite. Box inertia uses the standard plate formula on the full extents.
pub fn spawn_passive(
    commands: &mut Commands,
    assets: &AssetServer,
    stats: &BoxStats,
    image_path: &str,
    position: Vec2,
) -> Entity {
    let (collider_mass, additional_mass) = body::explicit_mass(
        stats.mass,
        body::moment_for_box(stats.mass, stats.half_width * 2.0, stats.half_height * 2.0),
    );

    let body = commands
        .spawn((
            (
                PassiveObject,
                Transform::from_translation(position.extend(0.0)),
                GlobalTransform::default(),
                RigidBody::Dynamic,
            ),
            (
                Collider::cuboid(stats.half_width, stats.half_height),
                collider_mass,
                additional_mass,
                Restitution::coefficient(stats.elasticity),
                Friction::coefficient(stats.friction),
                body::collision_groups(Layer::Obstacle),
                Velocity::zero(),
            ),
        ))
        .id();

    visual::spawn_sprite(
        commands,
        assets,
        image_path,
        stats.sprite_scale,
        position,
        OBSTACLE_Z,
        body,
    );

    body
}

/// Spawn a column: a passive box with the column geometry and sprite.
pub fn spawn_column(
    commands: &mut Commands,
    assets: &AssetServer,
    config: &GameConfig,
    position: Vec2,
) -> Entity {
    spawn_passive(commands, assets, &config.column, COLUMN_SPRITE, position)
}

/// Spawn Matilda's egg: a small passive box dropped at her current position.
pub fn spawn_egg(
    commands: &mut Commands,
    assets: &AssetServer,
    config: &GameConfig,
    position: Vec2,
) -> Entity {
    spawn_passive(commands, assets, &config.egg, EGG_SPRITE, position)
}

/// Spawn fixed scenery: a box that participates in collisions but never
/// moves, so it needs no mass properties and no velocity.
pub fn spawn_static(
    commands: &mut Commands,
    assets: &AssetServer,
    image_path: &str,
    half_extents: Vec2,
    position: Vec2,
) -> Entity {
    let body = commands
        .spawn((
            StaticObject,
            Transform::from_translation(position.extend(0.0)),
            GlobalTransform::default(),
            RigidBody::Fixed,
            Collider::cuboid(half_extents.x, half_extents.y),
            Restitution::coefficient(crate::constants::PASSIVE_ELASTICITY),
            Friction::coefficient(crate::constants::PASSIVE_FRICTION),
            body::collision_groups(Layer::Obstacle),
        ))
        .id();

    visual::spawn_sprite(commands, assets, image_path, 1.0, position, GROUND_Z, body);

    body
}
