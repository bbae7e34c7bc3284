//! Runtime game configuration loaded from `assets/game.toml`.
//!
//! [`GameConfig`] is a Bevy [`Resource`] that mirrors every constant in
//! [`crate::constants`]. At startup, [`load_game_config`] reads
//! `assets/game.toml` and overwrites the defaults with any sections present
//! in the file. A missing file keeps the compiled defaults, so shipping
//! without a TOML is fine.
//!
//! Override granularity is per-section: to re-tune a species, give its whole
//! `[red]` / `[blues]` / … table. Loaded values are vetted by
//! [`GameConfig::validate`]; a file that parses but carries an unsafe value
//! (zero mass, negative radius, NaN anywhere) is rejected wholesale and the
//! defaults stay in force.

use crate::bird::Species;
use crate::constants::*;
use crate::error::{validate_non_negative, validate_positive, GameResult};
use bevy::prelude::*;
use serde::Deserialize;

/// Physical constants for one bird species. Species differ only in these
/// values — the configuration table IS the species.
#[derive(Debug, Clone, Deserialize)]
pub struct SpeciesStats {
    pub mass: f32,
    pub radius: f32,
    pub max_impulse: f32,
    pub power_multiplier: f32,
    pub elasticity: f32,
    pub friction: f32,
    pub sprite_scale: f32,
}

impl SpeciesStats {
    fn new(mass: f32, radius: f32, max_impulse: f32, sprite_scale: f32) -> Self {
        Self {
            mass,
            radius,
            max_impulse,
            power_multiplier: POWER_MULTIPLIER,
            elasticity: BIRD_ELASTICITY,
            friction: BIRD_FRICTION,
            sprite_scale,
        }
    }

    fn validate(&self, species: &str) -> GameResult<()> {
        validate_positive(&format!("{species}.mass"), self.mass)?;
        validate_positive(&format!("{species}.radius"), self.radius)?;
        validate_non_negative(&format!("{species}.max_impulse"), self.max_impulse)?;
        validate_positive(&format!("{species}.power_multiplier"), self.power_multiplier)?;
        validate_non_negative(&format!("{species}.elasticity"), self.elasticity)?;
        validate_non_negative(&format!("{species}.friction"), self.friction)?;
        validate_positive(&format!("{species}.sprite_scale"), self.sprite_scale)?;
        Ok(())
    }
}

/// Physical constants for pigs (ball-bodied, like birds, but never launched).
#[derive(Debug, Clone, Deserialize)]
pub struct PigStats {
    pub mass: f32,
    pub radius: f32,
    pub elasticity: f32,
    pub friction: f32,
    pub sprite_scale: f32,
}

/// Physical constants for a box-bodied passive obstacle.
#[derive(Debug, Clone, Deserialize)]
pub struct BoxStats {
    pub mass: f32,
    pub half_width: f32,
    pub half_height: f32,
    pub elasticity: f32,
    pub friction: f32,
    pub sprite_scale: f32,
}

impl BoxStats {
    fn validate(&self, name: &str) -> GameResult<()> {
        validate_positive(&format!("{name}.mass"), self.mass)?;
        validate_positive(&format!("{name}.half_width"), self.half_width)?;
        validate_positive(&format!("{name}.half_height"), self.half_height)?;
        validate_non_negative(&format!("{name}.elasticity"), self.elasticity)?;
        validate_non_negative(&format!("{name}.friction"), self.friction)?;
        validate_positive(&format!("{name}.sprite_scale"), self.sprite_scale)?;
        Ok(())
    }
}

/// Tuning for the Blues split ability.
#[derive(Debug, Clone, Deserialize)]
pub struct SplitTuning {
    /// Angular offset (rad) of each child from the parent's launch angle.
    pub angle_spread: f32,
    /// Extra skew (rad) subtracted from the upper child's angle only.
    pub angle_skew: f32,
    /// Flat impulse magnitude each child loses relative to the parent.
    /// Intentionally not clamped at zero downstream.
    pub impulse_cost: f32,
}

/// Tuning for the Chuck boost ability.
#[derive(Debug, Clone, Deserialize)]
pub struct BoostTuning {
    /// Boost impulse magnitude as a multiple of current linear speed.
    pub speed_factor: f32,
}

/// Runtime-tunable game configuration.
///
/// All fields default to the corresponding compile-time constants from
/// `src/constants.rs`. Override any subset of sections by providing them in
/// `assets/game.toml`.
#[derive(Resource, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Downward gravity magnitude (px/s²).
    pub gravity: f32,

    // ── Bird species catalog ──────────────────────────────────────────────────
    pub red: SpeciesStats,
    pub blues: SpeciesStats,
    pub chuck: SpeciesStats,
    pub matilda: SpeciesStats,
    pub terence: SpeciesStats,

    // ── Other entities ────────────────────────────────────────────────────────
    pub pig: PigStats,
    pub column: BoxStats,
    pub egg: BoxStats,

    // ── Click abilities ───────────────────────────────────────────────────────
    pub split: SplitTuning,
    pub boost: BoostTuning,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            red: SpeciesStats::new(RED_MASS, RED_RADIUS, RED_MAX_IMPULSE, RED_SCALE),
            blues: SpeciesStats::new(BLUES_MASS, BLUES_RADIUS, BLUES_MAX_IMPULSE, BLUES_SCALE),
            chuck: SpeciesStats::new(CHUCK_MASS, CHUCK_RADIUS, CHUCK_MAX_IMPULSE, CHUCK_SCALE),
            matilda: SpeciesStats::new(
                MATILDA_MASS,
                MATILDA_RADIUS,
                MATILDA_MAX_IMPULSE,
                MATILDA_SCALE,
            ),
            terence: SpeciesStats::new(
                TERENCE_MASS,
                TERENCE_RADIUS,
                TERENCE_MAX_IMPULSE,
                TERENCE_SCALE,
            ),
            pig: PigStats {
                mass: PIG_MASS,
                radius: PIG_RADIUS,
                elasticity: PIG_ELASTICITY,
                friction: PIG_FRICTION,
                sprite_scale: PIG_SCALE,
            },
            column: BoxStats {
                mass: PASSIVE_MASS,
                half_width: COLUMN_HALF_WIDTH,
                half_height: COLUMN_HALF_HEIGHT,
                elasticity: PASSIVE_ELASTICITY,
                friction: PASSIVE_FRICTION,
                sprite_scale: 1.0,
            },
            egg: BoxStats {
                mass: PASSIVE_MASS,
                half_width: EGG_HALF_WIDTH,
                half_height: EGG_HALF_HEIGHT,
                elasticity: PASSIVE_ELASTICITY,
                friction: PASSIVE_FRICTION,
                sprite_scale: 1.0,
            },
            split: SplitTuning {
                angle_spread: SPLIT_ANGLE_SPREAD,
                angle_skew: SPLIT_ANGLE_SKEW,
                impulse_cost: SPLIT_IMPULSE_COST,
            },
            boost: BoostTuning {
                speed_factor: BOOST_SPEED_FACTOR,
            },
        }
    }
}

impl GameConfig {
    /// Stats record for the given bird species.
    pub fn stats(&self, species: Species) -> &SpeciesStats {
        match species {
            Species::Red => &self.red,
            Species::Blues => &self.blues,
            Species::Chuck => &self.chuck,
            Species::Matilda => &self.matilda,
            Species::Terence => &self.terence,
        }
    }

    /// Vets every value that feeds rigid-body construction.
    pub fn validate(&self) -> GameResult<()> {
        validate_positive("gravity", self.gravity)?;
        for (name, stats) in [
            ("red", &self.red),
            ("blues", &self.blues),
            ("chuck", &self.chuck),
            ("matilda", &self.matilda),
            ("terence", &self.terence),
        ] {
            stats.validate(name)?;
        }
        validate_positive("pig.mass", self.pig.mass)?;
        validate_positive("pig.radius", self.pig.radius)?;
        validate_non_negative("pig.elasticity", self.pig.elasticity)?;
        validate_non_negative("pig.friction", self.pig.friction)?;
        validate_positive("pig.sprite_scale", self.pig.sprite_scale)?;
        self.column.validate("column")?;
        self.egg.validate("egg")?;
        validate_positive("split.angle_spread", self.split.angle_spread)?;
        validate_non_negative("split.angle_skew", self.split.angle_skew)?;
        validate_non_negative("split.impulse_cost", self.split.impulse_cost)?;
        validate_positive("boost.speed_factor", self.boost.speed_factor)?;
        Ok(())
    }
}

/// Startup system: attempt to load `assets/game.toml` and overwrite the
/// `GameConfig` resource with any sections present in the file.
///
/// Missing file → compiled defaults stay in place (already inserted via
/// `insert_resource`). Parse errors and validation failures are logged and
/// leave the defaults untouched rather than aborting the game.
pub fn load_game_config(mut config: ResMut<GameConfig>) {
    let path = "assets/game.toml";
    match std::fs::read_to_string(path) {
        Ok(contents) => match toml::from_str::<GameConfig>(&contents) {
            Ok(loaded) => match loaded.validate() {
                Ok(()) => {
                    *config = loaded;
                    info!("loaded game config from {path}");
                }
                Err(e) => {
                    warn!("rejected {path}: {e}; using compiled defaults");
                }
            },
            Err(e) => {
                warn!("failed to parse {path}: {e}; using compiled defaults");
            }
        },
        Err(_) => {
            // File not present — defaults are already in place; not an error.
            info!("no {path} found; using compiled defaults");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_pass_validation() {
        assert!(GameConfig::default().validate().is_ok());
    }

    #[test]
    fn empty_toml_yields_defaults() {
        let config: GameConfig = toml::from_str("").expect("empty TOML must parse");
        assert_eq!(config.gravity, GRAVITY);
        assert_eq!(config.red.mass, RED_MASS);
        assert_eq!(config.blues.max_impulse, BLUES_MAX_IMPULSE);
    }

    #[test]
    fn section_override_replaces_only_that_section() {
        let toml = r#"
            gravity = 600.0

            [split]
            angle_spread = 0.5
            angle_skew = 0.0
            impulse_cost = 10.0
        "#;
        let config: GameConfig = toml::from_str(toml).expect("override must parse");
        assert_eq!(config.gravity, 600.0);
        assert_eq!(config.split.angle_spread, 0.5);
        assert_eq!(config.split.impulse_cost, 10.0);
        // Untouched sections keep compiled defaults.
        assert_eq!(config.terence.mass, TERENCE_MASS);
        assert_eq!(config.boost.speed_factor, BOOST_SPEED_FACTOR);
    }

    #[test]
    fn partial_species_table_is_a_parse_error() {
        // Species overrides are all-or-nothing; a bare mass must not parse.
        let toml = r#"
            [red]
            mass = 9.0
        "#;
        assert!(toml::from_str::<GameConfig>(toml).is_err());
    }

    #[test]
    fn zero_mass_fails_validation() {
        let mut config = GameConfig::default();
        config.blues.mass = 0.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn negative_radius_fails_validation() {
        let mut config = GameConfig::default();
        config.pig.radius = -3.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn stats_lookup_covers_every_species() {
        let config = GameConfig::default();
        for species in Species::ALL {
            let stats = config.stats(species);
            assert!(stats.mass > 0.0);
        }
    }
}
