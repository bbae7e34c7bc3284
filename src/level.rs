//! Demo level layout.
//!
//! Aiming input is out of scope for this layer, so the demo launches a small
//! flight of birds with fixed impulse vectors at startup: click a bird in
//! flight to fire its ability. Pig and column placement gets a little random
//! jitter so towers don't start perfectly balanced.

use crate::bird::{spawn_bird, Species};
use crate::config::GameConfig;
use crate::launch::ImpulseVector;
use crate::obstacle::{spawn_column, spawn_pig, spawn_static, GROUND_SPRITE};
use bevy::prelude::*;
use rand::Rng;

/// Ground top surface y-coordinate (world units).
const GROUND_Y: f32 = -300.0;

/// Ground slab half-extents.
const GROUND_HALF: Vec2 = Vec2::new(2000.0, 20.0);

/// Where birds launch from.
const SLING_ORIGIN: Vec2 = Vec2::new(-420.0, -260.0);

/// Horizontal placement jitter (px) applied to pigs and columns.
const PLACEMENT_JITTER: f32 = 6.0;

/// Startup system: lay out the ground, a column-and-pig fort on the right,
/// and launch one bird of each clickable species from the sling.
pub fn spawn_level(mut commands: Commands, assets: Res<AssetServer>, config: Res<GameConfig>) {
    let mut rng = rand::thread_rng();

    spawn_static(
        &mut commands,
        &assets,
        GROUND_SPRITE,
        GROUND_HALF,
        Vec2::new(0.0, GROUND_Y - GROUND_HALF.y),
    );

    // Fort: three columns with a pig between each pair and one on top.
    let column_base_y = GROUND_Y + config.column.half_height;
    let pig_base_y = GROUND_Y + config.pig.radius;
    for i in 0..3 {
        let x = 380.0 + 90.0 * i as f32 + rng.gen_range(-PLACEMENT_JITTER..PLACEMENT_JITTER);
        spawn_column(&mut commands, &assets, &config, Vec2::new(x, column_base_y));
    }
    for i in 0..2 {
        let x = 425.0 + 90.0 * i as f32 + rng.gen_range(-PLACEMENT_JITTER..PLACEMENT_JITTER);
        spawn_pig(&mut commands, &assets, &config, Vec2::new(x, pig_base_y));
    }
    spawn_pig(
        &mut commands,
        &assets,
        &config,
        Vec2::new(
            470.0,
            column_base_y + config.column.half_height + config.pig.radius,
        ),
    );

    // Demo flight: one of each clickable species, staggered so their arcs
    // don't overlap. Fixed vectors stand in for the aiming layer.
    spawn_bird(
        &mut commands,
        &assets,
        &config,
        Species::Blues,
        ImpulseVector::new(0.9, 70.0),
        SLING_ORIGIN,
        false,
    );
    spawn_bird(
        &mut commands,
        &assets,
        &config,
        Species::Chuck,
        ImpulseVector::new(0.7, 60.0),
        SLING_ORIGIN + Vec2::new(-40.0, 0.0),
        false,
    );
    spawn_bird(
        &mut commands,
        &assets,
        &config,
        Species::Matilda,
        ImpulseVector::new(1.1, 65.0),
        SLING_ORIGIN + Vec2::new(-80.0, 0.0),
        false,
    );

    info!("level spawned: 3 columns, 3 pigs, 3 birds in flight");
}
