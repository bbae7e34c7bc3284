//! Game-specific error types.
//!
//! Entity construction itself is infallible by design — every spawn call uses
//! values that already passed validation. The checks live here and run once,
//! when `assets/game.toml` is loaded over the compiled defaults, so a bad
//! override is rejected before it can produce a zero-mass body or a negative
//! collider radius.

use std::fmt;

/// Top-level error enum for the slingshot game layer.
#[derive(Debug)]
pub enum GameError {
    /// A physics or gameplay parameter is outside its safe operating range.
    /// Returned by the validation helpers below when vetting a loaded config.
    UnsafeParameter {
        /// Dotted path of the offending field (for logging), e.g. `red.mass`.
        name: String,
        /// The value that was rejected.
        value: f32,
        /// Human-readable description of the safe range.
        safe_range: &'static str,
    },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::UnsafeParameter {
                name,
                value,
                safe_range,
            } => write!(
                f,
                "parameter '{}' = {} is outside safe range {}",
                name, value, safe_range
            ),
        }
    }
}

impl std::error::Error for GameError {}

/// Convenience alias: a `Result` using `GameError` as the error type.
pub type GameResult<T> = Result<T, GameError>;

// ── Validation helpers ────────────────────────────────────────────────────────

/// Returns an error unless `value` is strictly positive.
///
/// Used for masses, radii, half-extents, and multipliers — a zero or negative
/// value in any of these produces degenerate rigid bodies.
pub fn validate_positive(name: &str, value: f32) -> GameResult<()> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(GameError::UnsafeParameter {
            name: name.to_string(),
            value,
            safe_range: "(0.0, ∞)",
        })
    }
}

/// Returns an error unless `value` is finite and non-negative.
///
/// Used for restitution, friction, and impulse caps, where zero is meaningful.
pub fn validate_non_negative(name: &str, value: f32) -> GameResult<()> {
    if value >= 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(GameError::UnsafeParameter {
            name: name.to_string(),
            value,
            safe_range: "[0.0, ∞)",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_accepts_positive() {
        assert!(validate_positive("mass", 5.0).is_ok());
    }

    #[test]
    fn positive_rejects_zero_and_negative() {
        assert!(validate_positive("mass", 0.0).is_err());
        assert!(validate_positive("mass", -1.0).is_err());
    }

    #[test]
    fn positive_rejects_nan() {
        assert!(validate_positive("mass", f32::NAN).is_err());
    }

    #[test]
    fn non_negative_accepts_zero() {
        assert!(validate_non_negative("elasticity", 0.0).is_ok());
    }

    #[test]
    fn error_display_names_the_field() {
        let err = validate_positive("blues.radius", -8.0).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("blues.radius"), "message was: {msg}");
        assert!(msg.contains("-8"), "message was: {msg}");
    }
}
