//! Control-point containers for curves and surfaces.
//!
//! [`Patch`] is stored like a mat4 but is semantically untyped
//! control-point data: no arithmetic is defined on it, only transpose
//! and flattening. [`Curve`] is the 1D counterpart.

use crate::scalar::round3;
use std::fmt;
use std::ops::Index;

/// A 4x4 grid of control scalars.
///
/// Cells start at zero and are filled by the caller through
/// [`set`](Patch::set).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[repr(C)]
pub struct Patch {
    /// Grid cells in row-major order.
    pub m: [[f32; 4]; 4],
}

impl Patch {
    /// Creates a zero-filled patch.
    #[inline]
    pub const fn new() -> Self {
        Self { m: [[0.0; 4]; 4] }
    }

    /// Creates a patch from row arrays.
    #[inline]
    pub const fn from_rows(rows: [[f32; 4]; 4]) -> Self {
        Self { m: rows }
    }

    /// Reads cell (i, j).
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f32 {
        self.m[i][j]
    }

    /// Returns a copy with cell (i, j) set to `value`.
    #[inline]
    pub fn set(&self, i: usize, j: usize, value: f32) -> Self {
        let mut out = *self;
        out.m[i][j] = value;
        out
    }

    /// Returns the transposed grid.
    #[inline]
    pub fn transpose(&self) -> Self {
        let mut out = Self::new();
        for i in 0..4 {
            for j in 0..4 {
                out.m[i][j] = self.m[j][i];
            }
        }
        out
    }
}

impl Index<usize> for Patch {
    type Output = [f32; 4];

    #[inline]
    fn index(&self, i: usize) -> &[f32; 4] {
        &self.m[i]
    }
}

// One row per line, elements rounded to three decimals for debugging
impl fmt::Display for Patch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.m.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, v) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", round3(*v))?;
            }
        }
        Ok(())
    }
}

/// A strip of 4 control scalars.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[repr(C)]
pub struct Curve {
    /// Control values.
    pub p: [f32; 4],
}

impl Curve {
    /// Creates a zero-filled curve.
    #[inline]
    pub const fn new() -> Self {
        Self { p: [0.0; 4] }
    }

    /// Creates a curve from an array.
    #[inline]
    pub const fn from_array(p: [f32; 4]) -> Self {
        Self { p }
    }

    /// Reads control value `i`.
    #[inline]
    pub fn get(&self, i: usize) -> f32 {
        self.p[i]
    }

    /// Returns a copy with control value `i` set to `value`.
    #[inline]
    pub fn set(&self, i: usize, value: f32) -> Self {
        let mut out = *self;
        out.p[i] = value;
        out
    }
}

impl Index<usize> for Curve {
    type Output = f32;

    #[inline]
    fn index(&self, i: usize) -> &f32 {
        &self.p[i]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patch_set_get() {
        let p = Patch::new().set(1, 2, 5.0).set(3, 0, -1.0);
        assert_eq!(p.get(1, 2), 5.0);
        assert_eq!(p.get(3, 0), -1.0);
        assert_eq!(p.get(0, 0), 0.0);
    }

    #[test]
    fn test_patch_transpose_involution() {
        let p = Patch::from_rows([
            [1.0, 2.0, 3.0, 4.0],
            [5.0, 6.0, 7.0, 8.0],
            [9.0, 10.0, 11.0, 12.0],
            [13.0, 14.0, 15.0, 16.0],
        ]);
        let t = p.transpose();
        assert_eq!(t.get(0, 1), 5.0);
        assert_eq!(t.get(1, 0), 2.0);
        assert_eq!(t.transpose(), p);
    }

    #[test]
    fn test_curve_set_get() {
        let c = Curve::new().set(2, 4.5);
        assert_eq!(c[2], 4.5);
        assert_eq!(c[0], 0.0);
    }
}
