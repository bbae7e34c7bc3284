//! Centralised physics and gameplay constants.
//!
//! All tuneable values live here so they can be found, reasoned-about, and
//! modified in one place without source-diving across multiple modules.
//! Every constant is mirrored by a [`crate::config::GameConfig`] field and can
//! be overridden at runtime through `assets/game.toml`.

// ── World ─────────────────────────────────────────────────────────────────────

/// Downward gravity magnitude (px/s²) applied by the physics simulation.
///
/// 900 gives launched birds an arc that crosses a 1200-px-wide level in
/// roughly two seconds at a full-power 45° launch. Lower values float,
/// higher values make shots feel heavy and short.
pub const GRAVITY: f32 = 900.0;

// ── Bird material ─────────────────────────────────────────────────────────────

/// Restitution coefficient shared by all bird species.
/// 0.0 = perfectly inelastic; 1.0 = perfectly elastic.
pub const BIRD_ELASTICITY: f32 = 0.8;

/// Friction coefficient shared by all bird species.
pub const BIRD_FRICTION: f32 = 1.0;

/// Launch impulse multiplier shared by all bird species.
///
/// The aiming layer produces impulse magnitudes in the 0–120 range; the
/// multiplier converts them into momentum units the bodies actually feel.
pub const POWER_MULTIPLIER: f32 = 50.0;

// ── Bird species ──────────────────────────────────────────────────────────────

/// Red: the baseline bird. No click ability.
pub const RED_MASS: f32 = 5.0;
pub const RED_RADIUS: f32 = 12.0;
pub const RED_MAX_IMPULSE: f32 = 100.0;
pub const RED_SCALE: f32 = 1.0;

/// Blues: light and small; splits into two children on click.
pub const BLUES_MASS: f32 = 3.0;
pub const BLUES_RADIUS: f32 = 8.0;
pub const BLUES_MAX_IMPULSE: f32 = 80.0;
pub const BLUES_SCALE: f32 = 0.1;

/// Chuck: fast bird; click applies a speed boost along the current heading.
pub const CHUCK_MASS: f32 = 4.0;
pub const CHUCK_RADIUS: f32 = 10.0;
pub const CHUCK_MAX_IMPULSE: f32 = 90.0;
pub const CHUCK_SCALE: f32 = 1.0;

/// Matilda: drops one passive egg at her current position on click.
pub const MATILDA_MASS: f32 = 6.0;
pub const MATILDA_RADIUS: f32 = 13.0;
pub const MATILDA_MAX_IMPULSE: f32 = 100.0;
pub const MATILDA_SCALE: f32 = 1.0;

/// Terence: the heavy one. No click ability; mass does the work.
pub const TERENCE_MASS: f32 = 12.0;
pub const TERENCE_RADIUS: f32 = 20.0;
pub const TERENCE_MAX_IMPULSE: f32 = 120.0;
pub const TERENCE_SCALE: f32 = 1.4;

// ── Click abilities ───────────────────────────────────────────────────────────

/// Angular offset (rad) between a splitting Blues parent and each child.
/// One child launches at `parent + SPLIT_ANGLE_SPREAD - SPLIT_ANGLE_SKEW`,
/// the other at `parent - SPLIT_ANGLE_SPREAD`.
pub const SPLIT_ANGLE_SPREAD: f32 = 0.4;

/// Extra downward skew (rad) applied to the upper split child only.
pub const SPLIT_ANGLE_SKEW: f32 = 0.1;

/// Flat impulse-magnitude cost paid by each split child relative to the
/// parent's launch impulse. Deliberately NOT clamped at zero — a chain of
/// splits can drive the magnitude negative, reversing the child's launch
/// direction. Preserved behaviour; see DESIGN.md before "fixing".
pub const SPLIT_IMPULSE_COST: f32 = 20.0;

/// Chuck's boost impulse magnitude as a multiple of his current linear speed.
pub const BOOST_SPEED_FACTOR: f32 = 2.0;

// ── Pigs ──────────────────────────────────────────────────────────────────────

pub const PIG_MASS: f32 = 2.0;
pub const PIG_RADIUS: f32 = 14.0;
pub const PIG_ELASTICITY: f32 = 0.8;

/// Pigs slide more readily than structures do.
pub const PIG_FRICTION: f32 = 0.4;
pub const PIG_SCALE: f32 = 0.1;

// ── Passive structures ────────────────────────────────────────────────────────

/// Default mass for dynamic box obstacles (columns, eggs, crates).
pub const PASSIVE_MASS: f32 = 2.0;
pub const PASSIVE_ELASTICITY: f32 = 0.8;
pub const PASSIVE_FRICTION: f32 = 1.0;

/// Column collider half-extents (px). Tall and thin so towers topple.
pub const COLUMN_HALF_WIDTH: f32 = 10.0;
pub const COLUMN_HALF_HEIGHT: f32 = 40.0;

/// Egg collider half-extents (px).
pub const EGG_HALF_WIDTH: f32 = 6.0;
pub const EGG_HALF_HEIGHT: f32 = 8.0;

// ── Picking ───────────────────────────────────────────────────────────────────

/// Extra pick radius (px) added to a bird's collider radius for click hit
/// tests, so small fast birds are still clickable mid-flight.
pub const PICK_RADIUS_SLOP: f32 = 4.0;

// ── Sprite layers ─────────────────────────────────────────────────────────────

/// Z layer for ground / static scenery sprites.
pub const GROUND_Z: f32 = 0.5;

/// Z layer for obstacle sprites (columns, eggs).
pub const OBSTACLE_Z: f32 = 1.0;

/// Z layer for bird and pig sprites, drawn above the scenery.
pub const ACTOR_Z: f32 = 2.0;
