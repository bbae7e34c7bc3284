//! Launch impulse math.
//!
//! The aiming layer (out of scope here) hands each bird an [`ImpulseVector`]
//! in polar form. This module turns it into the one-shot impulse applied to
//! the body at creation time.

use bevy::prelude::*;

/// Polar launch impulse supplied by the aiming logic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImpulseVector {
    /// Launch direction (rad, counter-clockwise from +X).
    pub angle: f32,
    /// Raw impulse magnitude before capping and scaling.
    pub impulse: f32,
}

impl ImpulseVector {
    pub fn new(angle: f32, impulse: f32) -> Self {
        Self { angle, impulse }
    }
}

/// Launch impulse magnitude for a species: the raw magnitude capped at the
/// species' `max_impulse`, then scaled by its `power_multiplier`.
///
/// The cap is one-sided — a negative raw magnitude passes through unchanged
/// (it is already below any cap), which is what makes un-clamped Blues split
/// chains launch children backwards. See `constants::SPLIT_IMPULSE_COST`.
pub fn launch_magnitude(vector: &ImpulseVector, max_impulse: f32, power_multiplier: f32) -> f32 {
    vector.impulse.min(max_impulse) * power_multiplier
}

/// Full launch impulse: magnitude from [`launch_magnitude`], direction from
/// the vector's angle.
pub fn launch_impulse(vector: &ImpulseVector, max_impulse: f32, power_multiplier: f32) -> Vec2 {
    Vec2::from_angle(vector.angle) * launch_magnitude(vector, max_impulse, power_multiplier)
}
