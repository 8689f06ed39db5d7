//! Error types for mvx-rs operations.
//!
//! Every failure in this workspace is a synchronous contract violation
//! by the caller: wrong shape, mismatched kinds, or geometrically
//! degenerate input. There are no operational failures to retry and no
//! partial results; an operation either returns a fully valid value or
//! an [`Error`].
//!
//! # Usage
//!
//! ```rust
//! use mvx_core::{Error, Kind, Result};
//!
//! fn needs_matching(lhs: Kind, rhs: Kind) -> Result<()> {
//!     if lhs != rhs {
//!         return Err(Error::type_mismatch("add", lhs, rhs));
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation

use crate::Kind;
use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in mvx-rs math operations.
///
/// # Categories
///
/// - **Argument errors**: [`WrongArguments`](Error::WrongArguments)
/// - **Kind errors**: [`TypeMismatch`](Error::TypeMismatch),
///   [`IncompatibleTypes`](Error::IncompatibleTypes),
///   [`NotAVector`](Error::NotAVector), [`NotAMatrix`](Error::NotAMatrix),
///   [`NotAVectorOrMatrix`](Error::NotAVectorOrMatrix),
///   [`Unsupported`](Error::Unsupported)
/// - **Geometry errors**: [`Degenerate`](Error::Degenerate)
#[derive(Debug, Error)]
pub enum Error {
    /// Wrong arity or malformed shape passed to a constructor.
    ///
    /// Returned e.g. when building a vector from a slice whose length
    /// is not 2, 3 or 4, or when replacing a component at an index
    /// outside the vector.
    #[error("{func}: wrong arguments ({detail})")]
    WrongArguments {
        /// Function that rejected the input
        func: &'static str,
        /// What was malformed
        detail: String,
    },

    /// Operands of differing kinds passed to a same-kind operation.
    ///
    /// Returned by `add`, `sub`, `dot`, `mix` and `equal` when the two
    /// operands do not share a kind tag.
    #[error("{op}: kinds differ ({lhs} vs {rhs})")]
    TypeMismatch {
        /// Operation that was attempted
        op: &'static str,
        /// Kind of the left operand
        lhs: Kind,
        /// Kind of the right operand
        rhs: Kind,
    },

    /// No dispatch arm accepts this combination of kinds.
    ///
    /// Returned by `mult` and `cross` when the operand pair matches
    /// none of the defined products.
    #[error("{op}: incompatible kinds ({lhs} x {rhs})")]
    IncompatibleTypes {
        /// Operation that was attempted
        op: &'static str,
        /// Kind of the left operand
        lhs: Kind,
        /// Kind of the right operand
        rhs: Kind,
    },

    /// A vector-only operation received a non-vector.
    #[error("{op}: not a vector ({kind})")]
    NotAVector {
        /// Operation that was attempted
        op: &'static str,
        /// Kind that was actually passed
        kind: Kind,
    },

    /// A matrix-only operation received a non-matrix.
    #[error("{op}: not a matrix ({kind})")]
    NotAMatrix {
        /// Operation that was attempted
        op: &'static str,
        /// Kind that was actually passed
        kind: Kind,
    },

    /// An operation defined on vectors and matrices received neither.
    ///
    /// Patches and curves hit this arm for arithmetic.
    #[error("{op}: not a vector or matrix ({kind})")]
    NotAVectorOrMatrix {
        /// Operation that was attempted
        op: &'static str,
        /// Kind that was actually passed
        kind: Kind,
    },

    /// The kind is in the right category but this operation does not
    /// support it.
    ///
    /// `normalize` on a vec2 and `normal_matrix` on a mat2/mat3 land
    /// here.
    #[error("{op}: unsupported for {kind}")]
    Unsupported {
        /// Operation that was attempted
        op: &'static str,
        /// Kind that was actually passed
        kind: Kind,
    },

    /// Geometrically degenerate input the algorithm cannot resolve.
    ///
    /// Zero-length rotation axis, equal bound pairs in `ortho`, equal
    /// near/far planes in `perspective`.
    #[error("{func}: degenerate input ({detail})")]
    Degenerate {
        /// Function that rejected the input
        func: &'static str,
        /// Which configuration was degenerate
        detail: String,
    },
}

impl Error {
    /// Creates an [`Error::WrongArguments`] error.
    #[inline]
    pub fn wrong_arguments(func: &'static str, detail: impl Into<String>) -> Self {
        Self::WrongArguments {
            func,
            detail: detail.into(),
        }
    }

    /// Creates an [`Error::TypeMismatch`] error.
    #[inline]
    pub fn type_mismatch(op: &'static str, lhs: Kind, rhs: Kind) -> Self {
        Self::TypeMismatch { op, lhs, rhs }
    }

    /// Creates an [`Error::IncompatibleTypes`] error.
    #[inline]
    pub fn incompatible(op: &'static str, lhs: Kind, rhs: Kind) -> Self {
        Self::IncompatibleTypes { op, lhs, rhs }
    }

    /// Creates an [`Error::NotAVector`] error.
    #[inline]
    pub fn not_a_vector(op: &'static str, kind: Kind) -> Self {
        Self::NotAVector { op, kind }
    }

    /// Creates an [`Error::NotAMatrix`] error.
    #[inline]
    pub fn not_a_matrix(op: &'static str, kind: Kind) -> Self {
        Self::NotAMatrix { op, kind }
    }

    /// Creates an [`Error::NotAVectorOrMatrix`] error.
    #[inline]
    pub fn not_a_vector_or_matrix(op: &'static str, kind: Kind) -> Self {
        Self::NotAVectorOrMatrix { op, kind }
    }

    /// Creates an [`Error::Unsupported`] error.
    #[inline]
    pub fn unsupported(op: &'static str, kind: Kind) -> Self {
        Self::Unsupported { op, kind }
    }

    /// Creates an [`Error::Degenerate`] error.
    #[inline]
    pub fn degenerate(func: &'static str, detail: impl Into<String>) -> Self {
        Self::Degenerate {
            func,
            detail: detail.into(),
        }
    }

    /// Returns `true` if this is a kind/category error.
    #[inline]
    pub fn is_kind_error(&self) -> bool {
        matches!(
            self,
            Self::TypeMismatch { .. }
                | Self::IncompatibleTypes { .. }
                | Self::NotAVector { .. }
                | Self::NotAMatrix { .. }
                | Self::NotAVectorOrMatrix { .. }
                | Self::Unsupported { .. }
        )
    }

    /// Returns `true` if this is an argument-shape error.
    #[inline]
    pub fn is_argument_error(&self) -> bool {
        matches!(self, Self::WrongArguments { .. })
    }

    /// Returns `true` if this is a degenerate-geometry error.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        matches!(self, Self::Degenerate { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_mismatch_message() {
        let err = Error::type_mismatch("add", Kind::Vec3, Kind::Vec4);
        let msg = err.to_string();
        assert!(msg.contains("add"));
        assert!(msg.contains("vec3"));
        assert!(msg.contains("vec4"));
        assert!(err.is_kind_error());
    }

    #[test]
    fn test_wrong_arguments() {
        let err = Error::wrong_arguments("vector", "slice length 5");
        assert!(err.to_string().contains("slice length 5"));
        assert!(err.is_argument_error());
        assert!(!err.is_kind_error());
    }

    #[test]
    fn test_degenerate() {
        let err = Error::degenerate("perspective", "near == far");
        assert!(err.to_string().contains("near == far"));
        assert!(err.is_degenerate());
    }

    #[test]
    fn test_not_a_matrix() {
        let err = Error::not_a_matrix("det", Kind::Vec2);
        assert!(err.to_string().contains("vec2"));
        assert!(err.is_kind_error());
    }
}
