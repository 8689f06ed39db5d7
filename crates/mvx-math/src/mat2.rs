//! 2x2 matrix type.

use crate::{Vec2, scalar::round3};
use std::fmt;
use std::ops::{Add, Index, Mul, Sub};

/// A 2x2 matrix, stored row-major.
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(C)]
pub struct Mat2 {
    /// Matrix elements in row-major order: [row0, row1]
    pub m: [[f32; 2]; 2],
}

impl Mat2 {
    /// Zero matrix.
    pub const ZERO: Self = Self { m: [[0.0; 2]; 2] };

    /// Identity matrix.
    pub const IDENTITY: Self = Self {
        m: [[1.0, 0.0], [0.0, 1.0]],
    };

    /// Creates a matrix from row arrays.
    #[inline]
    pub const fn from_rows(rows: [[f32; 2]; 2]) -> Self {
        Self { m: rows }
    }

    /// Creates a matrix from 4 scalars in row-major order.
    #[inline]
    pub const fn from_flat(v: [f32; 4]) -> Self {
        Self::from_rows([[v[0], v[1]], [v[2], v[3]]])
    }

    /// Creates a diagonal matrix.
    #[inline]
    pub const fn diagonal(d0: f32, d1: f32) -> Self {
        Self::from_rows([[d0, 0.0], [0.0, d1]])
    }

    /// Returns a row as Vec2.
    #[inline]
    pub fn row(&self, i: usize) -> Vec2 {
        Vec2::from_array(self.m[i])
    }

    /// Returns a column as Vec2.
    #[inline]
    pub fn col(&self, i: usize) -> Vec2 {
        Vec2::new(self.m[0][i], self.m[1][i])
    }

    /// Returns the transpose of this matrix.
    #[inline]
    pub fn transpose(&self) -> Self {
        Self::from_rows([
            [self.m[0][0], self.m[1][0]],
            [self.m[0][1], self.m[1][1]],
        ])
    }

    /// Computes the determinant.
    #[inline]
    pub fn determinant(&self) -> f32 {
        let m = &self.m;
        m[0][0] * m[1][1] - m[0][1] * m[1][0]
    }

    /// Computes the inverse as the adjugate over the determinant.
    ///
    /// Singular input yields non-finite components rather than an
    /// error; callers that care check [`is_finite`](Self::is_finite).
    pub fn inverse(&self) -> Self {
        let m = &self.m;
        let d = self.determinant();
        Self::from_rows([
            [m[1][1] / d, -m[0][1] / d],
            [-m[1][0] / d, m[0][0] / d],
        ])
    }

    /// Transforms a Vec2 by this matrix (row dot vector).
    #[inline]
    pub fn transform(&self, v: Vec2) -> Vec2 {
        Vec2::new(
            self.m[0][0] * v.x + self.m[0][1] * v.y,
            self.m[1][0] * v.x + self.m[1][1] * v.y,
        )
    }

    /// Multiplies two matrices.
    #[inline]
    pub fn mul_mat(&self, other: &Self) -> Self {
        let mut result = Self::ZERO;
        for i in 0..2 {
            for j in 0..2 {
                for k in 0..2 {
                    result.m[i][j] += self.m[i][k] * other.m[k][j];
                }
            }
        }
        result
    }

    /// Returns true if all elements are finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.m.iter().flatten().all(|x| x.is_finite())
    }
}

impl Default for Mat2 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul<Vec2> for Mat2 {
    type Output = Vec2;

    #[inline]
    fn mul(self, rhs: Vec2) -> Vec2 {
        self.transform(rhs)
    }
}

impl Mul for Mat2 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.mul_mat(&rhs)
    }
}

impl Mul<f32> for Mat2 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f32) -> Self {
        Self::from_rows([
            [self.m[0][0] * rhs, self.m[0][1] * rhs],
            [self.m[1][0] * rhs, self.m[1][1] * rhs],
        ])
    }
}

impl Add for Mat2 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::from_rows([
            [self.m[0][0] + rhs.m[0][0], self.m[0][1] + rhs.m[0][1]],
            [self.m[1][0] + rhs.m[1][0], self.m[1][1] + rhs.m[1][1]],
        ])
    }
}

impl Sub for Mat2 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::from_rows([
            [self.m[0][0] - rhs.m[0][0], self.m[0][1] - rhs.m[0][1]],
            [self.m[1][0] - rhs.m[1][0], self.m[1][1] - rhs.m[1][1]],
        ])
    }
}

impl Index<usize> for Mat2 {
    type Output = [f32; 2];

    #[inline]
    fn index(&self, i: usize) -> &[f32; 2] {
        &self.m[i]
    }
}

// One row per line, elements rounded to three decimals for debugging
impl fmt::Display for Mat2 {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mat2_identity() {
        let v = Vec2::new(1.0, 2.0);
        assert_eq!(Mat2::IDENTITY * v, v);
        assert_eq!(Mat2::IDENTITY * Mat2::IDENTITY, Mat2::IDENTITY);
        assert_eq!(Mat2::default(), Mat2::IDENTITY);
    }

    #[test]
    fn test_mat2_determinant() {
        assert_eq!(Mat2::IDENTITY.determinant(), 1.0);
        let m = Mat2::from_flat([1.0, 2.0, 3.0, 4.0]);
        assert_eq!(m.determinant(), -2.0);
    }

    #[test]
    fn test_mat2_inverse_roundtrip() {
        let m = Mat2::from_flat([1.0, 2.0, 3.0, 4.0]);
        let r = m * m.inverse();
        for i in 0..2 {
            for j in 0..2 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert!((r.m[i][j] - expected).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn test_mat2_singular_inverse_unguarded() {
        let m = Mat2::from_flat([1.0, 2.0, 2.0, 4.0]);
        assert!(!m.inverse().is_finite());
    }

    #[test]
    fn test_mat2_transpose_involution() {
        let m = Mat2::from_flat([1.0, 2.0, 3.0, 4.0]);
        assert_eq!(m.transpose().transpose(), m);
        assert_eq!(m.transpose().m[0][1], 3.0);
    }

    #[test]
    fn test_mat2_add_sub() {
        let m = Mat2::from_flat([1.0, 2.0, 3.0, 4.0]);
        assert_eq!(m + Mat2::ZERO, m);
        assert_eq!(m - m, Mat2::ZERO);
        assert_eq!(m + m, m * 2.0);
    }
}
