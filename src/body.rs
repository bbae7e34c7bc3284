//! Rigid-body construction helpers shared by birds and obstacles.
//!
//! Every entity in this layer owns exactly one body and one collider for its
//! lifetime. Mass and rotational inertia are set explicitly from the entity
//! catalog (standard circle/box moment-of-inertia formulas) rather than
//! derived from collider density, so the catalog values are authoritative.

use bevy::prelude::*;
use bevy_rapier2d::dynamics::MassProperties;
use bevy_rapier2d::prelude::*;

/// Collision-layer tag for an entity's collider.
///
/// Everything collides with everything; the groups exist so the physics
/// engine can report *what kind* of thing took part in a contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    Bird,
    Pig,
    Obstacle,
}

/// Moment of inertia of a solid disc of the given mass and radius: `m·r²/2`.
pub fn moment_for_circle(mass: f32, radius: f32) -> f32 {
    0.5 * mass * radius * radius
}

/// Moment of inertia of a solid box of the given mass and full extents:
/// `m·(w² + h²)/12`.
pub fn moment_for_box(mass: f32, width: f32, height: f32) -> f32 {
    mass * (width * width + height * height) / 12.0
}

/// Component pair that pins a body's mass properties to explicit values.
///
/// The collider contributes zero density so the `AdditionalMassProperties`
/// are the body's *entire* mass and inertia, keeping catalog mass values
/// exact regardless of collider geometry.
pub fn explicit_mass(
    mass: f32,
    principal_inertia: f32,
) -> (ColliderMassProperties, AdditionalMassProperties) {
    (
        ColliderMassProperties::Density(0.0),
        AdditionalMassProperties::MassProperties(MassProperties {
            local_center_of_mass: Vec2::ZERO,
            mass,
            principal_inertia,
        }),
    )
}

/// Collision groups for the given layer. Membership identifies the entity
/// kind; the filter admits every group.
pub fn collision_groups(layer: Layer) -> CollisionGroups {
    let membership = match layer {
        Layer::Bird => Group::GROUP_1,
        Layer::Pig => Group::GROUP_2,
        Layer::Obstacle => Group::GROUP_3,
    };
    CollisionGroups::new(membership, Group::ALL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn circle_moment_matches_disc_formula() {
        // m = 5, r = 12 → 0.5 · 5 · 144 = 360
        assert_eq!(moment_for_circle(5.0, 12.0), 360.0);
    }

    #[test]
    fn circle_moment_scales_with_radius_squared() {
        let base = moment_for_circle(3.0, 8.0);
        let doubled = moment_for_circle(3.0, 16.0);
        assert!((doubled / base - 4.0).abs() < 1e-5);
    }

    #[test]
    fn box_moment_matches_plate_formula() {
        // m = 2, w = 20, h = 80 → 2 · (400 + 6400) / 12
        let expected = 2.0 * (400.0 + 6400.0) / 12.0;
        assert!((moment_for_box(2.0, 20.0, 80.0) - expected).abs() < 1e-3);
    }

    #[test]
    fn explicit_mass_zeroes_collider_density() {
        let (collider_mass, additional) = explicit_mass(5.0, 360.0);
        assert!(matches!(
            collider_mass,
            ColliderMassProperties::Density(d) if d == 0.0
        ));
        match additional {
            AdditionalMassProperties::MassProperties(props) => {
                assert_eq!(props.mass, 5.0);
                assert_eq!(props.principal_inertia, 360.0);
                assert_eq!(props.local_center_of_mass, Vec2::ZERO);
            }
            other => panic!("expected explicit mass properties, got {other:?}"),
        }
    }

    #[test]
    fn every_layer_collides_with_every_group() {
        for layer in [Layer::Bird, Layer::Pig, Layer::Obstacle] {
            let groups = collision_groups(layer);
            assert_eq!(groups.filters, Group::ALL);
        }
    }
}
