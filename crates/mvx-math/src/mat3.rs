//! 3x3 matrix type.
//!
//! [`Mat3`] carries 2D homogeneous transforms and the normal matrix
//! used for lighting.
//!
//! # Convention
//!
//! Matrices are stored in **row-major** order and use **column vectors**:
//!
//! ```text
//! | m00 m01 m02 |   | x |   | m00*x + m01*y + m02*z |
//! | m10 m11 m12 | * | y | = | m10*x + m11*y + m12*z |
//! | m20 m21 m22 |   | z |   | m20*x + m21*y + m22*z |
//! ```
//!
//! # Usage
//!
//! ```rust
//! use mvx_math::{Mat3, Vec3};
//!
//! let m = Mat3::from_rows([
//!     [1.0, 0.0, 2.0],
//!     [0.0, 1.0, 3.0],
//!     [0.0, 0.0, 1.0],
//! ]);
//!
//! let p = Vec3::new(1.0, 1.0, 1.0);
//! assert_eq!(m * p, Vec3::new(3.0, 4.0, 1.0));
//! ```

use crate::{Vec3, scalar::round3};
use std::fmt;
use std::ops::{Add, Index, Mul, Sub};

/// A 3x3 matrix, stored row-major.
///
/// Use [`Mat3::from_rows`] or [`Mat3::from_flat`] to construct from
/// component arrays.
///
/// # Example
///
/// ```rust
/// use mvx_math::{Mat3, Vec3};
///
/// let identity = Mat3::IDENTITY;
/// let v = Vec3::new(1.0, 2.0, 3.0);
/// assert_eq!(identity * v, v);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(C)]
pub struct Mat3 {
    /// Matrix elements in row-major order: [row0, row1, row2]
    pub m: [[f32; 3]; 3],
}

impl Mat3 {
    /// Zero matrix.
    pub const ZERO: Self = Self { m: [[0.0; 3]; 3] };

    /// Identity matrix.
    pub const IDENTITY: Self = Self {
        m: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
    };

    /// Creates a matrix from row arrays.
    #[inline]
    pub const fn from_rows(rows: [[f32; 3]; 3]) -> Self {
        Self { m: rows }
    }

    /// Creates a matrix from column arrays.
    ///
    /// Transposes the input (columns become rows internally).
    #[inline]
    pub const fn from_cols(cols: [[f32; 3]; 3]) -> Self {
        Self {
            m: [
                [cols[0][0], cols[1][0], cols[2][0]],
                [cols[0][1], cols[1][1], cols[2][1]],
                [cols[0][2], cols[1][2], cols[2][2]],
            ],
        }
    }

    /// Creates a matrix from 9 scalars in row-major order.
    ///
    /// ```rust
    /// use mvx_math::Mat3;
    ///
    /// let m = Mat3::from_flat([1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0]);
    /// assert_eq!(m, Mat3::IDENTITY);
    /// ```
    #[inline]
    pub const fn from_flat(v: [f32; 9]) -> Self {
        Self::from_rows([[v[0], v[1], v[2]], [v[3], v[4], v[5]], [v[6], v[7], v[8]]])
    }

    /// Creates a matrix from Vec3 rows.
    #[inline]
    pub fn from_row_vecs(r0: Vec3, r1: Vec3, r2: Vec3) -> Self {
        Self::from_rows([r0.to_array(), r1.to_array(), r2.to_array()])
    }

    /// Creates a diagonal matrix.
    #[inline]
    pub const fn diagonal(d0: f32, d1: f32, d2: f32) -> Self {
        Self::from_rows([[d0, 0.0, 0.0], [0.0, d1, 0.0], [0.0, 0.0, d2]])
    }

    /// Returns a row as Vec3.
    #[inline]
    pub fn row(&self, i: usize) -> Vec3 {
        Vec3::from_array(self.m[i])
    }

    /// Returns a column as Vec3.
    #[inline]
    pub fn col(&self, i: usize) -> Vec3 {
        Vec3::new(self.m[0][i], self.m[1][i], self.m[2][i])
    }

    /// Returns the transpose of this matrix.
    #[inline]
    pub fn transpose(&self) -> Self {
        Self::from_rows([
            [self.m[0][0], self.m[1][0], self.m[2][0]],
            [self.m[0][1], self.m[1][1], self.m[2][1]],
            [self.m[0][2], self.m[1][2], self.m[2][2]],
        ])
    }

    /// Computes the determinant by direct cofactor expansion.
    #[inline]
    pub fn determinant(&self) -> f32 {
        let m = &self.m;
        m[0][0] * m[1][1] * m[2][2] + m[0][1] * m[1][2] * m[2][0] + m[0][2] * m[2][1] * m[1][0]
            - m[2][0] * m[1][1] * m[0][2]
            - m[1][0] * m[0][1] * m[2][2]
            - m[0][0] * m[1][2] * m[2][1]
    }

    /// Computes the inverse as the adjugate over the determinant.
    ///
    /// Singular input is not trapped: a zero determinant yields
    /// non-finite components. Callers that need the guard check
    /// [`is_finite`](Self::is_finite) on the result.
    ///
    /// # Example
    ///
    /// ```rust
    /// use mvx_math::Mat3;
    ///
    /// let m = Mat3::diagonal(2.0, 4.0, 8.0);
    /// let r = m * m.inverse();
    /// assert!((r.m[0][0] - 1.0).abs() < 1e-6);
    /// ```
    pub fn inverse(&self) -> Self {
        let m = &self.m;
        let d = self.determinant();

        // Cofactor 2x2 determinants, transposed into the adjugate
        Self::from_rows([
            [
                (m[1][1] * m[2][2] - m[1][2] * m[2][1]) / d,
                -(m[0][1] * m[2][2] - m[0][2] * m[2][1]) / d,
                (m[0][1] * m[1][2] - m[0][2] * m[1][1]) / d,
            ],
            [
                -(m[1][0] * m[2][2] - m[1][2] * m[2][0]) / d,
                (m[0][0] * m[2][2] - m[0][2] * m[2][0]) / d,
                -(m[0][0] * m[1][2] - m[0][2] * m[1][0]) / d,
            ],
            [
                (m[1][0] * m[2][1] - m[1][1] * m[2][0]) / d,
                -(m[0][0] * m[2][1] - m[0][1] * m[2][0]) / d,
                (m[0][0] * m[1][1] - m[0][1] * m[1][0]) / d,
            ],
        ])
    }

    /// Transforms a Vec3 by this matrix.
    ///
    /// Equivalent to `matrix * vector`.
    #[inline]
    pub fn transform(&self, v: Vec3) -> Vec3 {
        Vec3::new(
            self.m[0][0] * v.x + self.m[0][1] * v.y + self.m[0][2] * v.z,
            self.m[1][0] * v.x + self.m[1][1] * v.y + self.m[1][2] * v.z,
            self.m[2][0] * v.x + self.m[2][1] * v.y + self.m[2][2] * v.z,
        )
    }

    /// Multiplies two matrices.
    #[inline]
    pub fn mul_mat(&self, other: &Self) -> Self {
        let mut result = Self::ZERO;
        for i in 0..3 {
            for j in 0..3 {
                for k in 0..3 {
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

    /// Converts to glam Mat3 (column-major).
    #[inline]
    pub fn to_glam(&self) -> glam::Mat3 {
        // glam uses column-major, so we transpose
        glam::Mat3::from_cols_array_2d(&[
            [self.m[0][0], self.m[1][0], self.m[2][0]],
            [self.m[0][1], self.m[1][1], self.m[2][1]],
            [self.m[0][2], self.m[1][2], self.m[2][2]],
        ])
    }

    /// Creates from glam Mat3.
    #[inline]
    pub fn from_glam(m: glam::Mat3) -> Self {
        let cols = m.to_cols_array_2d();
        Self::from_cols([cols[0], cols[1], cols[2]])
    }
}

impl Default for Mat3 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

// Mat3 * Vec3
impl Mul<Vec3> for Mat3 {
    type Output = Vec3;

    #[inline]
    fn mul(self, rhs: Vec3) -> Vec3 {
        self.transform(rhs)
    }
}

// Mat3 * Mat3
impl Mul for Mat3 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.mul_mat(&rhs)
    }
}

// Mat3 * f32
impl Mul<f32> for Mat3 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f32) -> Self {
        Self::from_rows([
            [self.m[0][0] * rhs, self.m[0][1] * rhs, self.m[0][2] * rhs],
            [self.m[1][0] * rhs, self.m[1][1] * rhs, self.m[1][2] * rhs],
            [self.m[2][0] * rhs, self.m[2][1] * rhs, self.m[2][2] * rhs],
        ])
    }
}

impl Add for Mat3 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        let mut result = Self::ZERO;
        for i in 0..3 {
            for j in 0..3 {
                result.m[i][j] = self.m[i][j] + rhs.m[i][j];
            }
        }
        result
    }
}

impl Sub for Mat3 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        let mut result = Self::ZERO;
        for i in 0..3 {
            for j in 0..3 {
                result.m[i][j] = self.m[i][j] - rhs.m[i][j];
            }
        }
        result
    }
}

impl Index<usize> for Mat3 {
    type Output = [f32; 3];

    #[inline]
    fn index(&self, i: usize) -> &[f32; 3] {
        &self.m[i]
    }
}

// One row per line, elements rounded to three decimals for debugging
impl fmt::Display for Mat3 {
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
