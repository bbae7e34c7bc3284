//! Sprite visuals and the per-frame body → sprite transform sync.
//!
//! Physics bodies and their sprites are separate entities. The body entity's
//! `Transform` is written by Rapier every step and is authoritative; the
//! sprite entity mirrors its x/y position and rotation each frame while
//! keeping its own z-layer and scale. The sync is a pure read of physics
//! state — running it twice without an intervening physics step changes
//! nothing.

use bevy::prelude::*;

/// Marks a sprite entity as the visual for the given physics body entity.
#[derive(Component, Debug, Clone, Copy)]
pub struct MirrorsBody(pub Entity);

/// Spawn a sprite entity mirroring `body`, at the given z-layer and scale.
///
/// Asset paths are literal strings handed to the asset server; the sprite
/// shows up whenever the image finishes loading.
pub fn spawn_sprite(
    commands: &mut Commands,
    assets: &AssetServer,
    image_path: &str,
    scale: f32,
    position: Vec2,
    z: f32,
    body: Entity,
) -> Entity {
    commands
        .spawn((
            Sprite::from_image(assets.load(image_path.to_string())),
            Transform {
                translation: position.extend(z),
                scale: Vec3::splat(scale),
                ..Default::default()
            },
            MirrorsBody(body),
        ))
        .id()
}

/// Copy a body transform into a sprite transform, preserving the sprite's
/// z-layer and scale.
pub fn mirror_transform(body: &Transform, sprite: &mut Transform) {
    sprite.translation.x = body.translation.x;
    sprite.translation.y = body.translation.y;
    sprite.rotation = body.rotation;
}

/// Per-frame sync: sprite position ← body position, sprite rotation ← body
/// angle. Runs after Rapier's transform writeback. Sprites whose body has
/// been despawned simply stop moving.
pub fn sync_sprites_system(
    bodies: Query<&Transform, Without<MirrorsBody>>,
    mut sprites: Query<(&MirrorsBody, &mut Transform)>,
) {
    for (mirrors, mut sprite_transform) in sprites.iter_mut() {
        if let Ok(body_transform) = bodies.get(mirrors.0) {
            mirror_transform(body_transform, &mut sprite_transform);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mirror_copies_position_and_rotation() {
        let body = Transform {
            translation: Vec3::new(120.0, -35.0, 0.0),
            rotation: Quat::from_rotation_z(0.7),
            ..Default::default()
        };
        let mut sprite = Transform::from_xyz(0.0, 0.0, 2.0);

        mirror_transform(&body, &mut sprite);

        assert_eq!(sprite.translation.x, 120.0);
        assert_eq!(sprite.translation.y, -35.0);
        assert_eq!(sprite.rotation, body.rotation);
    }

    #[test]
    fn mirror_preserves_sprite_z_and_scale() {
        let body = Transform::from_xyz(50.0, 60.0, 0.0);
        let mut sprite = Transform {
            translation: Vec3::new(0.0, 0.0, 2.0),
            scale: Vec3::splat(0.1),
            ..Default::default()
        };

        mirror_transform(&body, &mut sprite);

        assert_eq!(sprite.translation.z, 2.0, "z-layer must survive the sync");
        assert_eq!(sprite.scale, Vec3::splat(0.1), "scale must survive the sync");
    }

    #[test]
    fn mirror_is_idempotent_without_a_physics_step() {
        let body = Transform {
            translation: Vec3::new(-12.0, 44.0, 0.0),
            rotation: Quat::from_rotation_z(-1.2),
            ..Default::default()
        };
        let mut sprite = Transform::from_xyz(0.0, 0.0, 1.0);

        mirror_transform(&body, &mut sprite);
        let after_first = sprite;
        mirror_transform(&body, &mut sprite);

        assert_eq!(sprite, after_first, "second sync must be a no-op");
    }
}
