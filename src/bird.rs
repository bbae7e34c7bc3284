//! Bird species catalog, the `Bird` component, and bird construction.
//!
//! Species differ only in the constants carried by their
//! [`SpeciesStats`](crate::config::SpeciesStats) record and in which click
//! ability fires — they share one component, one spawn path, and one body
//! layout (ball collider, explicit mass and disc inertia, one-shot launch
//! impulse applied at creation).

use crate::body::{self, Layer};
use crate::config::GameConfig;
use crate::constants::ACTOR_Z;
use crate::launch::{launch_impulse, ImpulseVector};
use crate::visual;
use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

/// Bird species tag. Dispatches the click ability and selects the stats
/// record; everything else about a bird is shared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Species {
    Red,
    Blues,
    Chuck,
    Matilda,
    Terence,
}

impl Species {
    pub const ALL: [Species; 5] = [
        Species::Red,
        Species::Blues,
        Species::Chuck,
        Species::Matilda,
        Species::Terence,
    ];

    /// Sprite asset for this species. Literal paths, resolved by the asset
    /// server at spawn time.
    pub fn sprite_path(self) -> &'static str {
        match self {
            Species::Red => "sprites/red.png",
            Species::Blues => "sprites/blue.png",
            Species::Chuck => "sprites/chuck.png",
            Species::Matilda => "sprites/matilda.png",
            Species::Terence => "sprites/terence.png",
        }
    }
}

/// A launched bird. The body/collider pair lives on the same entity; the
/// sprite is a separate mirror entity (see [`crate::visual`]).
#[derive(Component, Debug)]
pub struct Bird {
    pub species: Species,
    /// The polar impulse this bird was launched with. Split children derive
    /// their own launch from it.
    pub impulse: ImpulseVector,
    /// Click-ability guard: transitions false → true at most once; the
    /// ability is a no-op once set.
    pub clicked: bool,
    /// Entities spawned by this bird's ability (split children, Matilda's
    /// egg). Tracked for cleanup, not consulted by gameplay.
    pub children: Vec<Entity>,
}

/// Launch vectors for the two children of a splitting Blues parent.
///
/// The upper child launches at `parent + angle_spread - angle_skew`, the
/// lower at `parent - angle_spread`; both pay the flat `impulse_cost`. The
/// cost is deliberately not clamped at zero — repeated splits can drive a
/// child's magnitude negative (see DESIGN.md).
pub fn split_impulses(
    parent: &ImpulseVector,
    tuning: &crate::config::SplitTuning,
) -> (ImpulseVector, ImpulseVector) {
    let magnitude = parent.impulse - tuning.impulse_cost;
    (
        ImpulseVector::new(
            parent.angle + tuning.angle_spread - tuning.angle_skew,
            magnitude,
        ),
        ImpulseVector::new(parent.angle - tuning.angle_spread, magnitude),
    )
}

/// Spawn a bird of the given species at `position`, launched with
/// `impulse_vector`. Returns the body entity.
///
/// The launch impulse is applied exactly once, at the body's local origin, on
/// the first physics step after spawn. `pre_clicked` marks the bird's ability
/// as already spent — used for split children so they cannot re-trigger.
pub fn spawn_bird(
    commands: &mut Commands,
    assets: &AssetServer,
    config: &GameConfig,
    species: Species,
    impulse_vector: ImpulseVector,
    position: Vec2,
    pre_clicked: bool,
) -> Entity {
    let stats = config.stats(species);
    let impulse = launch_impulse(&impulse_vector, stats.max_impulse, stats.power_multiplier);
    let (collider_mass, additional_mass) =
        body::explicit_mass(stats.mass, body::moment_for_circle(stats.mass, stats.radius));

    let body = commands
        .spawn((
            (
                Bird {
                    species,
                    impulse: impulse_vector,
                    clicked: pre_clicked,
                    children: Vec::new(),
                },
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
                body::collision_groups(Layer::Bird),
                Velocity::zero(),
                ExternalImpulse {
                    impulse,
                    torque_impulse: 0.0,
                },
            ),
        ))
        .id();

    visual::spawn_sprite(
        commands,
        assets,
        species.sprite_path(),
        stats.sprite_scale,
        position,
        ACTOR_Z,
        body,
    );

    body
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::launch::launch_magnitude;

    #[test]
    fn launch_magnitude_never_exceeds_cap_for_any_species() {
        let config = GameConfig::default();
        for species in Species::ALL {
            let stats = config.stats(species);
            let oversized = ImpulseVector::new(0.3, 1e9);
            let magnitude = launch_magnitude(&oversized, stats.max_impulse, stats.power_multiplier);
            assert!(
                magnitude <= stats.max_impulse * stats.power_multiplier,
                "{species:?}: {magnitude} exceeds the cap"
            );
        }
    }

    #[test]
    fn split_angles_straddle_the_parent() {
        let config = GameConfig::default();
        let parent = ImpulseVector::new(1.0, 70.0);
        let (upper, lower) = split_impulses(&parent, &config.split);
        assert!((upper.angle - (1.0 + 0.4 - 0.1)).abs() < 1e-6);
        assert!((lower.angle - (1.0 - 0.4)).abs() < 1e-6);
    }

    #[test]
    fn split_children_pay_the_flat_impulse_cost() {
        let config = GameConfig::default();
        let parent = ImpulseVector::new(0.0, 70.0);
        let (upper, lower) = split_impulses(&parent, &config.split);
        assert_eq!(upper.impulse, 50.0);
        assert_eq!(lower.impulse, 50.0);
    }

    #[test]
    fn split_magnitude_is_not_clamped_at_zero() {
        // A parent weaker than the cost produces negative children —
        // preserved behaviour, not a bug to silently fix here.
        let config = GameConfig::default();
        let parent = ImpulseVector::new(0.0, 5.0);
        let (upper, lower) = split_impulses(&parent, &config.split);
        assert_eq!(upper.impulse, -15.0);
        assert_eq!(lower.impulse, -15.0);
    }

    #[test]
    fn every_species_has_a_sprite_path() {
        for species in Species::ALL {
            assert!(species.sprite_path().ends_with(".png"));
        }
    }
}
