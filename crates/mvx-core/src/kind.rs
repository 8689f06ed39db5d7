//! Container kind discriminators.
//!
//! Every math container in mvx-rs carries a fixed shape chosen at
//! construction. [`Kind`] names those shapes so that dynamically
//! dispatched operations and error messages can talk about them.

use std::fmt;

/// The shape of a math container.
///
/// Vectors and matrices come in the three fixed sizes used by the
/// rendering pipeline (2, 3, 4). [`Patch`](Kind::Patch) and
/// [`Curve`](Kind::Curve) are untyped control-point grids that only
/// support a small subset of operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// 2-component vector.
    Vec2,
    /// 3-component vector.
    Vec3,
    /// 4-component vector.
    Vec4,
    /// 2x2 matrix.
    Mat2,
    /// 3x3 matrix.
    Mat3,
    /// 4x4 matrix.
    Mat4,
    /// 4x4 control-point grid.
    Patch,
    /// Length-4 control strip.
    Curve,
}

impl Kind {
    /// Returns `true` for the three vector kinds.
    #[inline]
    pub fn is_vector(self) -> bool {
        matches!(self, Self::Vec2 | Self::Vec3 | Self::Vec4)
    }

    /// Returns `true` for the three matrix kinds.
    ///
    /// A [`Patch`](Kind::Patch) is not a matrix even though it is
    /// stored as a 4x4 grid.
    #[inline]
    pub fn is_matrix(self) -> bool {
        matches!(self, Self::Mat2 | Self::Mat3 | Self::Mat4)
    }

    /// Dimension of a vector or matrix kind, `None` for patch/curve.
    #[inline]
    pub fn dim(self) -> Option<usize> {
        match self {
            Self::Vec2 | Self::Mat2 => Some(2),
            Self::Vec3 | Self::Mat3 => Some(3),
            Self::Vec4 | Self::Mat4 => Some(4),
            Self::Patch | Self::Curve => None,
        }
    }

    /// Number of scalars this kind flattens to.
    #[inline]
    pub fn flat_len(self) -> usize {
        match self {
            Self::Vec2 => 2,
            Self::Vec3 => 3,
            Self::Vec4 | Self::Mat2 | Self::Curve => 4,
            Self::Mat3 => 9,
            Self::Mat4 | Self::Patch => 16,
        }
    }

    /// Lowercase tag used in error messages.
    #[inline]
    pub fn name(self) -> &'static str {
        match self {
            Self::Vec2 => "vec2",
            Self::Vec3 => "vec3",
            Self::Vec4 => "vec4",
            Self::Mat2 => "mat2",
            Self::Mat3 => "mat3",
            Self::Mat4 => "mat4",
            Self::Patch => "patch",
            Self::Curve => "curve",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_categories() {
        assert!(Kind::Vec3.is_vector());
        assert!(!Kind::Vec3.is_matrix());
        assert!(Kind::Mat4.is_matrix());
        assert!(!Kind::Patch.is_matrix());
        assert!(!Kind::Curve.is_vector());
    }

    #[test]
    fn test_kind_dim() {
        assert_eq!(Kind::Vec2.dim(), Some(2));
        assert_eq!(Kind::Mat4.dim(), Some(4));
        assert_eq!(Kind::Patch.dim(), None);
    }

    #[test]
    fn test_kind_flat_len() {
        assert_eq!(Kind::Vec4.flat_len(), 4);
        assert_eq!(Kind::Mat3.flat_len(), 9);
        assert_eq!(Kind::Patch.flat_len(), 16);
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(Kind::Mat2.to_string(), "mat2");
        assert_eq!(Kind::Curve.to_string(), "curve");
    }
}
