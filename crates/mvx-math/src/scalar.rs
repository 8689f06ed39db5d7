//! Scalar helpers: angle conversion and interpolation.
//!
//! # Usage
//!
//! ```rust
//! use mvx_math::{mix, radians};
//!
//! let half_turn = radians(180.0);
//! assert!((half_turn - std::f32::consts::PI).abs() < 1e-6);
//!
//! let mid = mix(0.0, 10.0, 0.5);
//! assert_eq!(mid, 5.0);
//! ```

/// Converts degrees to radians.
///
/// All angle-taking transform generators accept degrees and convert
/// through this.
#[inline]
pub fn radians(degrees: f32) -> f32 {
    degrees * std::f32::consts::PI / 180.0
}

/// Converts radians to degrees.
#[inline]
pub fn degrees(radians: f32) -> f32 {
    radians * 180.0 / std::f32::consts::PI
}

/// Linear interpolation between two scalars.
///
/// # Formula
///
/// `(1 - s) * u + s * v`
///
/// # Example
///
/// ```rust
/// use mvx_math::mix;
///
/// assert_eq!(mix(0.0, 10.0, 0.0), 0.0);
/// assert_eq!(mix(0.0, 10.0, 1.0), 10.0);
/// ```
#[inline]
pub fn mix(u: f32, v: f32, s: f32) -> f32 {
    (1.0 - s) * u + s * v
}

/// Rounds to three decimal places, for matrix display output.
#[inline]
pub fn round3(a: f32) -> f32 {
    (a * 1000.0).round() / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_radians_degrees_roundtrip() {
        assert!((radians(90.0) - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
        assert!((degrees(radians(37.5)) - 37.5).abs() < 1e-4);
    }

    #[test]
    fn test_mix() {
        assert_eq!(mix(0.0, 10.0, 0.5), 5.0);
        assert_eq!(mix(2.0, 4.0, 0.25), 2.5);
    }

    #[test]
    fn test_round3() {
        assert_eq!(round3(1.23456), 1.235);
        assert_eq!(round3(-0.0004), -0.0);
    }
}
