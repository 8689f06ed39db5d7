//! 4x4 matrix type.
//!
//! [`Mat4`] is the workhorse of the rendering pipeline: model-view and
//! projection matrices are built here, multiplied per frame, and
//! flattened for uniform upload.
//!
//! # Convention
//!
//! Row-major storage, column vectors: `result = matrix * vector`.
//!
//! # Usage
//!
//! ```rust
//! use mvx_math::{Mat4, Vec4};
//!
//! let mv = Mat4::IDENTITY;
//! let p = Vec4::new(0.5, -0.5, 0.5, 1.0);
//! assert_eq!(mv * p, p);
//! ```

use crate::{Mat3, Vec4, scalar::round3};
use std::fmt;
use std::ops::{Add, Index, Mul, Sub};

/// Direct cofactor expansion of a 3x3 scalar grid.
///
/// Shared by [`Mat4::determinant`] and [`Mat4::inverse`], which expand
/// over 3x3 minors.
#[inline]
fn det3(m: &[[f32; 3]; 3]) -> f32 {
    m[0][0] * m[1][1] * m[2][2] + m[0][1] * m[1][2] * m[2][0] + m[0][2] * m[2][1] * m[1][0]
        - m[2][0] * m[1][1] * m[0][2]
        - m[1][0] * m[0][1] * m[2][2]
        - m[0][0] * m[1][2] * m[2][1]
}

/// A 4x4 matrix, stored row-major.
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(C)]
pub struct Mat4 {
    /// Matrix elements in row-major order: [row0, row1, row2, row3]
    pub m: [[f32; 4]; 4],
}

impl Mat4 {
    /// Zero matrix.
    pub const ZERO: Self = Self { m: [[0.0; 4]; 4] };

    /// Identity matrix.
    pub const IDENTITY: Self = Self {
        m: [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ],
    };

    /// Creates a matrix from row arrays.
    #[inline]
    pub const fn from_rows(rows: [[f32; 4]; 4]) -> Self {
        Self { m: rows }
    }

    /// Creates a matrix from 16 scalars in row-major order.
    #[inline]
    pub const fn from_flat(v: [f32; 16]) -> Self {
        Self::from_rows([
            [v[0], v[1], v[2], v[3]],
            [v[4], v[5], v[6], v[7]],
            [v[8], v[9], v[10], v[11]],
            [v[12], v[13], v[14], v[15]],
        ])
    }

    /// Creates a matrix from Vec4 rows.
    ///
    /// ```rust
    /// use mvx_math::{Mat4, Vec4};
    ///
    /// let m = Mat4::from_row_vecs(
    ///     Vec4::new(1.0, 0.0, 0.0, 0.0),
    ///     Vec4::new(0.0, 1.0, 0.0, 0.0),
    ///     Vec4::new(0.0, 0.0, 1.0, 0.0),
    ///     Vec4::new(0.0, 0.0, 0.0, 1.0),
    /// );
    /// assert_eq!(m, Mat4::IDENTITY);
    /// ```
    #[inline]
    pub fn from_row_vecs(r0: Vec4, r1: Vec4, r2: Vec4, r3: Vec4) -> Self {
        Self::from_rows([r0.to_array(), r1.to_array(), r2.to_array(), r3.to_array()])
    }

    /// Creates a diagonal matrix.
    #[inline]
    pub const fn diagonal(d0: f32, d1: f32, d2: f32, d3: f32) -> Self {
        Self::from_rows([
            [d0, 0.0, 0.0, 0.0],
            [0.0, d1, 0.0, 0.0],
            [0.0, 0.0, d2, 0.0],
            [0.0, 0.0, 0.0, d3],
        ])
    }

    /// Returns a row as Vec4.
    #[inline]
    pub fn row(&self, i: usize) -> Vec4 {
        Vec4::from_array(self.m[i])
    }

    /// Returns a column as Vec4.
    #[inline]
    pub fn col(&self, i: usize) -> Vec4 {
        Vec4::new(self.m[0][i], self.m[1][i], self.m[2][i], self.m[3][i])
    }

    /// Returns the upper-left 3x3 submatrix.
    #[inline]
    pub fn upper3(&self) -> Mat3 {
        Mat3::from_rows([
            [self.m[0][0], self.m[0][1], self.m[0][2]],
            [self.m[1][0], self.m[1][1], self.m[1][2]],
            [self.m[2][0], self.m[2][1], self.m[2][2]],
        ])
    }

    /// Returns the transpose of this matrix.
    #[inline]
    pub fn transpose(&self) -> Self {
        let mut result = Self::ZERO;
        for i in 0..4 {
            for j in 0..4 {
                result.m[i][j] = self.m[j][i];
            }
        }
        result
    }

    /// The 3x3 minor obtained by deleting row `row` and column `col`.
    fn minor(&self, row: usize, col: usize) -> [[f32; 3]; 3] {
        let mut out = [[0.0; 3]; 3];
        let mut oi = 0;
        for i in 0..4 {
            if i == row {
                continue;
            }
            let mut oj = 0;
            for j in 0..4 {
                if j == col {
                    continue;
                }
                out[oi][oj] = self.m[i][j];
                oj += 1;
            }
            oi += 1;
        }
        out
    }

    /// Computes the determinant by cofactor expansion along row 0.
    pub fn determinant(&self) -> f32 {
        let m = &self.m;
        m[0][0] * det3(&self.minor(0, 0)) - m[0][1] * det3(&self.minor(0, 1))
            + m[0][2] * det3(&self.minor(0, 2))
            - m[0][3] * det3(&self.minor(0, 3))
    }

    /// Computes the inverse as the adjugate over the determinant.
    ///
    /// All sixteen cofactors are 3x3 minors; the transposed cofactor
    /// matrix is divided by [`determinant`](Self::determinant).
    /// Singular input is not trapped: the result has non-finite
    /// components. Callers that need the guard check
    /// [`is_finite`](Self::is_finite).
    pub fn inverse(&self) -> Self {
        let d = self.determinant();
        let mut out = Self::ZERO;
        for i in 0..4 {
            for j in 0..4 {
                let cofactor = if (i + j) % 2 == 0 {
                    det3(&self.minor(i, j))
                } else {
                    -det3(&self.minor(i, j))
                };
                // Adjugate is the transposed cofactor matrix
                out.m[j][i] = cofactor / d;
            }
        }
        out
    }

    /// The normal matrix: upper-left 3x3 of the inverse transpose.
    ///
    /// Transforms surface normals correctly under non-uniform model
    /// scaling.
    #[inline]
    pub fn normal_matrix(&self) -> Mat3 {
        self.normal_matrix4().upper3()
    }

    /// The full 4x4 inverse transpose.
    ///
    /// For callers that skip normal re-normalization and want the
    /// unreduced matrix.
    #[inline]
    pub fn normal_matrix4(&self) -> Self {
        self.transpose().inverse()
    }

    /// Transforms a Vec4 by this matrix (row dot vector).
    #[inline]
    pub fn transform(&self, v: Vec4) -> Vec4 {
        Vec4::new(
            self.row(0).dot(v),
            self.row(1).dot(v),
            self.row(2).dot(v),
            self.row(3).dot(v),
        )
    }

    /// Multiplies two matrices.
    #[inline]
    pub fn mul_mat(&self, other: &Self) -> Self {
        let mut result = Self::ZERO;
        for i in 0..4 {
            for j in 0..4 {
                for k in 0..4 {
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

    /// Converts to glam Mat4 (column-major).
    #[inline]
    pub fn to_glam(&self) -> glam::Mat4 {
        // glam uses column-major, so we transpose
        glam::Mat4::from_cols_array_2d(&[
            [self.m[0][0], self.m[1][0], self.m[2][0], self.m[3][0]],
            [self.m[0][1], self.m[1][1], self.m[2][1], self.m[3][1]],
            [self.m[0][2], self.m[1][2], self.m[2][2], self.m[3][2]],
            [self.m[0][3], self.m[1][3], self.m[2][3], self.m[3][3]],
        ])
    }

    /// Creates from glam Mat4.
    #[inline]
    pub fn from_glam(m: glam::Mat4) -> Self {
        let cols = m.to_cols_array_2d();
        let mut out = Self::ZERO;
        for i in 0..4 {
            for j in 0..4 {
                out.m[i][j] = cols[j][i];
            }
        }
        out
    }
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

// Mat4 * Vec4
impl Mul<Vec4> for Mat4 {
    type Output = Vec4;

    #[inline]
    fn mul(self, rhs: Vec4) -> Vec4 {
        self.transform(rhs)
    }
}

// Mat4 * Mat4
impl Mul for Mat4 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.mul_mat(&rhs)
    }
}

// Mat4 * f32
impl Mul<f32> for Mat4 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f32) -> Self {
        let mut result = Self::ZERO;
        for i in 0..4 {
            for j in 0..4 {
                result.m[i][j] = self.m[i][j] * rhs;
            }
        }
        result
    }
}

impl Add for Mat4 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        let mut result = Self::ZERO;
        for i in 0..4 {
            for j in 0..4 {
                result.m[i][j] = self.m[i][j] + rhs.m[i][j];
            }
        }
        result
    }
}

impl Sub for Mat4 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        let mut result = Self::ZERO;
        for i in 0..4 {
            for j in 0..4 {
                result.m[i][j] = self.m[i][j] - rhs.m[i][j];
            }
        }
        result
    }
}

impl Index<usize> for Mat4 {
    type Output = [f32; 4];

    #[inline]
    fn index(&self, i: usize) -> &[f32; 4] {
        &self.m[i]
    }
}

// One row per line, elements rounded to three decimals for debugging
impl fmt::Display for Mat4 {
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

    fn well_conditioned() -> Mat4 {
        Mat4::from_rows([
            [2.0, 0.0, 1.0, 1.0],
            [0.0, 3.0, 0.0, 2.0],
            [1.0, 0.0, 2.0, 0.0],
            [0.0, 1.0, 0.0, 4.0],
        ])
    }

    #[test]
    fn test_mat4_identity() {
        let v = Vec4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(Mat4::IDENTITY * v, v);
        assert_eq!(Mat4::IDENTITY * Mat4::IDENTITY, Mat4::IDENTITY);
        assert_eq!(Mat4::IDENTITY.determinant(), 1.0);
    }

    #[test]
    fn test_mat4_transpose_involution() {
        let m = well_conditioned();
        assert_eq!(m.transpose().transpose(), m);
        assert_eq!(m.transpose().m[0][2], 1.0);
        assert_eq!(m.transpose().m[3][1], 2.0);
    }

    #[test]
    fn test_mat4_determinant_general() {
        // Expansion along row 0, minors checked by hand
        let m = well_conditioned();
        let d = m.determinant();
        assert!((d - 30.0).abs() < 1e-4, "det = {}", d);
    }

    #[test]
    fn test_mat4_determinant_diagonal() {
        let m = Mat4::diagonal(2.0, 3.0, 4.0, 5.0);
        assert!((m.determinant() - 120.0).abs() < 1e-4);
    }

    #[test]
    fn test_mat4_inverse_roundtrip() {
        let m = well_conditioned();
        let r = m * m.inverse();
        for i in 0..4 {
            for j in 0..4 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert!((r.m[i][j] - expected).abs() < 1e-5);
            }
        }
    }

    #[test]
    fn test_mat4_singular_inverse_unguarded() {
        let mut m = well_conditioned();
        m.m[1] = m.m[0]; // duplicate row -> singular
        assert!(!m.inverse().is_finite());
    }

    #[test]
    fn test_mat4_normal_matrix_of_rotation_is_upper3() {
        // For a pure rotation, inverse-transpose equals the matrix
        let c = 30.0_f32.to_radians().cos();
        let s = 30.0_f32.to_radians().sin();
        let rot = Mat4::from_rows([
            [c, -s, 0.0, 0.0],
            [s, c, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ]);
        let n = rot.normal_matrix();
        let u = rot.upper3();
        for i in 0..3 {
            for j in 0..3 {
                assert!((n.m[i][j] - u.m[i][j]).abs() < 1e-5);
            }
        }
    }

    #[test]
    fn test_mat4_normal_matrix4_shape() {
        let m = Mat4::diagonal(2.0, 1.0, 1.0, 1.0);
        let n4 = m.normal_matrix4();
        assert!((n4.m[0][0] - 0.5).abs() < 1e-6);
        assert_eq!(n4.m[3][3], 1.0);
    }

    #[test]
    fn test_mat4_glam_roundtrip() {
        let m = well_conditioned();
        assert_eq!(Mat4::from_glam(m.to_glam()), m);
    }
}
