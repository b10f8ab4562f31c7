use anyhow::Result;
use tracing_subscriber::fmt::time::OffsetTime;

pub mod linalg;

pub mod vec_float {
    use crate::core::config::{
        ABS_TOLERANCE, HASH_ABS_GRID, HASH_SIGNIFICANT_DIGITS, REL_TOLERANCE,
    };
    use num_traits::Zero;

    /// Approximate equality, used for floats and for types built from them.
    pub trait AlmostEq: Copy {
        fn almost_eq(&self, rhs: Self) -> bool;
    }

    impl AlmostEq for f64 {
        fn almost_eq(&self, rhs: Self) -> bool {
            is_close(*self, rhs)
        }
    }

    /// Returns true if `a` and `b` are within [`REL_TOLERANCE`] of each other relative to the
    /// larger magnitude, or within [`ABS_TOLERANCE`] absolutely.
    ///
    /// Infinities only compare equal to themselves; `NaN` is never close to anything.
    pub fn is_close(a: f64, b: f64) -> bool {
        if a == b {
            return true;
        }
        if !a.is_finite() || !b.is_finite() {
            return false;
        }
        let diff = (a - b).abs();
        diff <= REL_TOLERANCE * a.abs().max(b.abs()) || diff <= ABS_TOLERANCE
    }

    /// Rounds `x` to `digits` significant decimal digits. Zero and non-finite values are returned
    /// unchanged, as are values whose scale factor does not fit in an `f64`.
    pub fn round_to_significant_digits(x: f64, digits: i32) -> f64 {
        if x == 0.0 || !x.is_finite() {
            return x;
        }
        #[allow(clippy::cast_possible_truncation)]
        let exponent = x.abs().log10().floor() as i32;
        let power = digits - 1 - exponent;
        // Scale by an integral power of ten in both directions; 10^-n is not exact.
        let scale = 10_f64.powi(power.abs());
        if !scale.is_finite() {
            return x;
        }
        if power >= 0 {
            let scaled = x * scale;
            if scaled.is_finite() { scaled.round() / scale } else { x }
        } else {
            (x / scale).round() * scale
        }
    }

    /// Collapses `x` onto the coarse grid used for hashing, so that values [`is_close`] to each
    /// other map to the same key unless they straddle a grid line.
    ///
    /// Mirrors the two regimes of [`is_close`]: below `ABS_TOLERANCE / REL_TOLERANCE` the absolute
    /// tolerance dominates and `x` snaps to multiples of [`HASH_ABS_GRID`]; above it `x` keeps
    /// [`HASH_SIGNIFICANT_DIGITS`] significant digits.
    pub fn hash_key(x: f64) -> f64 {
        if !x.is_finite() {
            return x;
        }
        let rounded = if x.abs() < ABS_TOLERANCE / REL_TOLERANCE {
            (x / HASH_ABS_GRID).round() * HASH_ABS_GRID
        } else {
            round_to_significant_digits(x, HASH_SIGNIFICANT_DIGITS)
        };
        force_positive_zero(rounded)
    }

    pub fn force_positive_zero(x: f64) -> f64 {
        if x.is_zero() { 0.0 } else { x }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn is_close_relative_and_absolute() {
            assert!(is_close(1.0, 1.0 + 1e-12));
            assert!(is_close(1e20, 1e20 * (1.0 + 1e-10)));
            assert!(!is_close(1.0, 1.001));
            assert!(is_close(0.0, 1e-13));
            assert!(!is_close(0.0, 1e-6));
        }

        #[test]
        fn is_close_non_finite() {
            assert!(is_close(f64::INFINITY, f64::INFINITY));
            assert!(!is_close(f64::INFINITY, f64::NEG_INFINITY));
            assert!(!is_close(f64::NAN, f64::NAN));
            assert!(!is_close(f64::NAN, 0.0));
        }

        #[test]
        fn round_to_significant_digits_basic() {
            assert_eq!(round_to_significant_digits(123_456.789, 4), 123_500.0);
            assert_eq!(round_to_significant_digits(-0.001_234_56, 3), -0.001_23);
            assert_eq!(round_to_significant_digits(0.0, 8), 0.0);
            assert!(round_to_significant_digits(f64::NAN, 8).is_nan());
            assert_eq!(round_to_significant_digits(f64::INFINITY, 8), f64::INFINITY);
            assert!(round_to_significant_digits(f64::MAX, 8).is_finite());
        }

        #[test]
        fn hash_key_agrees_for_close_values_at_any_scale() {
            for x in [1000.0, 123_456.789, -98_765.4321, 0.3, 4.2e15, 7.5e-2] {
                let nearby = x * (1.0 + 3e-10);
                assert!(is_close(x, nearby));
                assert_eq!(hash_key(x), hash_key(nearby), "{x} vs {nearby}");
            }
            assert_eq!(hash_key(0.1 + 0.2), hash_key(0.3));
        }

        #[test]
        fn hash_key_near_zero_uses_absolute_grid() {
            assert_eq!(hash_key(1e-13), 0.0);
            assert!(hash_key(-1e-13).is_sign_positive());
            assert_eq!(hash_key(2e-4), hash_key(2e-4 + 5e-13));
            assert_ne!(hash_key(2e-4), hash_key(3e-4));
        }

        #[test]
        fn force_positive_zero_folds_sign() {
            assert!(force_positive_zero(-0.0).is_sign_positive());
            assert_eq!(force_positive_zero(-1.5), -1.5);
        }
    }
}

/// Installs the global `tracing` subscriber, writing to stderr.
pub fn setup_log() -> Result<()> {
    let timer = OffsetTime::new(
        time::UtcOffset::UTC,
        time::macros::format_description!("[hour]:[minute]:[second].[subsecond digits:6]"),
    );
    tracing_subscriber::fmt()
        .event_format(
            tracing_subscriber::fmt::format()
                .with_target(false)
                .with_source_location(true)
                .with_timer(timer),
        )
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install log subscriber: {e}"))?;
    Ok(())
}
