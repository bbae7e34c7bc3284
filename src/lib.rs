//! Entity layer for a slingshot physics game.
//!
//! Birds launched by impulse, pigs and obstacles to knock over, all driven by
//! the Rapier rigid-body engine. This crate is a thin adapter: each game
//! entity pairs a sprite visual with a physics body/collider, synchronized
//! every frame, plus a small per-species click ability.

pub mod bird;
pub mod body;
pub mod click;
pub mod config;
pub mod constants;
pub mod error;
pub mod launch;
pub mod level;
pub mod obstacle;
pub mod visual;
