//! Flattening containers into upload-ready scalar buffers.
//!
//! The rendering collaborator consumes plain `f32` buffers
//! (`Float32Array` territory on the WebGL side). [`Flatten`]
//! linearizes any container: vectors in component order, matrices and
//! patches row-major. [`FlatBuffer`] accumulates many flattened values
//! into one attribute buffer, preallocated once.
//!
//! # Usage
//!
//! ```rust
//! use mvx_math::{Flatten, Mat4, flatten_slice, Vec4};
//!
//! let buf = Mat4::IDENTITY.flatten();
//! assert_eq!(buf.len(), 16);
//! assert_eq!(buf[5], 1.0);
//!
//! let corners = [Vec4::ZERO, Vec4::ONE];
//! assert_eq!(flatten_slice(&corners).len(), 8);
//! ```

use crate::{Curve, Mat2, Mat3, Mat4, Patch, Vec2, Vec3, Vec4};

/// Linearizes a container into a contiguous `f32` buffer.
///
/// No validation happens here; a well-formed value always flattens.
pub trait Flatten {
    /// Number of scalars the flattened form holds.
    fn flat_len(&self) -> usize;

    /// Produces the flattened buffer, row-major for 2D containers.
    fn flatten(&self) -> Vec<f32>;
}

impl Flatten for Vec2 {
    fn flat_len(&self) -> usize {
        2
    }

    fn flatten(&self) -> Vec<f32> {
        self.to_array().to_vec()
    }
}

impl Flatten for Vec3 {
    fn flat_len(&self) -> usize {
        3
    }

    fn flatten(&self) -> Vec<f32> {
        self.to_array().to_vec()
    }
}

impl Flatten for Vec4 {
    fn flat_len(&self) -> usize {
        4
    }

    fn flatten(&self) -> Vec<f32> {
        self.to_array().to_vec()
    }
}

impl Flatten for Mat2 {
    fn flat_len(&self) -> usize {
        4
    }

    fn flatten(&self) -> Vec<f32> {
        self.m.iter().flatten().copied().collect()
    }
}

impl Flatten for Mat3 {
    fn flat_len(&self) -> usize {
        9
    }

    fn flatten(&self) -> Vec<f32> {
        self.m.iter().flatten().copied().collect()
    }
}

impl Flatten for Mat4 {
    fn flat_len(&self) -> usize {
        16
    }

    fn flatten(&self) -> Vec<f32> {
        self.m.iter().flatten().copied().collect()
    }
}

impl Flatten for Patch {
    fn flat_len(&self) -> usize {
        16
    }

    fn flatten(&self) -> Vec<f32> {
        self.m.iter().flatten().copied().collect()
    }
}

impl Flatten for Curve {
    fn flat_len(&self) -> usize {
        4
    }

    fn flatten(&self) -> Vec<f32> {
        self.p.to_vec()
    }
}

/// Flattens a whole slice of containers into one buffer.
///
/// This is how vertex position/normal arrays become attribute buffers.
pub fn flatten_slice<T: Flatten>(items: &[T]) -> Vec<f32> {
    let total: usize = items.iter().map(Flatten::flat_len).sum();
    let mut out = Vec::with_capacity(total);
    for item in items {
        out.extend_from_slice(&item.flatten());
    }
    out
}

/// A preallocated push buffer of flattened values.
///
/// # Example
///
/// ```rust
/// use mvx_math::{FlatBuffer, Vec4};
///
/// let mut buf = FlatBuffer::with_capacity(8);
/// buf.push(&Vec4::ZERO);
/// buf.push(&Vec4::ONE);
/// assert_eq!(buf.len(), 8);
/// assert_eq!(buf.as_slice()[4], 1.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct FlatBuffer {
    buf: Vec<f32>,
}

impl FlatBuffer {
    /// Creates an empty buffer with room for `capacity` scalars.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
        }
    }

    /// Appends the flattened form of `value`.
    pub fn push<T: Flatten>(&mut self, value: &T) {
        self.buf.extend_from_slice(&value.flatten());
    }

    /// Number of scalars pushed so far.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns true if nothing has been pushed.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// The accumulated scalar buffer.
    pub fn as_slice(&self) -> &[f32] {
        &self.buf
    }

    /// Clears the buffer, keeping its allocation.
    pub fn clear(&mut self) {
        self.buf.clear();
    }
}
