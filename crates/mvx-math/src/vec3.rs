//! 3D vector type.
//!
//! [`Vec3`] represents positions, directions and rotation axes.
//!
//! # Usage
//!
//! ```rust
//! use mvx_math::Vec3;
//!
//! let axis = Vec3::new(1.0, 1.0, 0.0).normalize();
//! let n = Vec3::X.cross(Vec3::Y);
//! assert_eq!(n, Vec3::Z);
//! ```

use mvx_core::{Error, Result};
use std::ops::{Add, Div, Index, Mul, Neg, Sub};

/// A 3-component vector.
///
/// # Components
///
/// Access via `.x`, `.y`, `.z` or index `[0]`, `[1]`, `[2]`.
///
/// # Example
///
/// ```rust
/// use mvx_math::Vec3;
///
/// let v = Vec3::new(1.0, 2.0, 3.0);
/// assert_eq!(v.x, 1.0);
/// assert_eq!(v[2], 3.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[repr(C)]
pub struct Vec3 {
    /// X component
    pub x: f32,
    /// Y component
    pub y: f32,
    /// Z component
    pub z: f32,
}

impl Vec3 {
    /// Zero vector (0, 0, 0).
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// One vector (1, 1, 1).
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);

    /// Unit X vector (1, 0, 0).
    pub const X: Self = Self::new(1.0, 0.0, 0.0);

    /// Unit Y vector (0, 1, 0).
    pub const Y: Self = Self::new(0.0, 1.0, 0.0);

    /// Unit Z vector (0, 0, 1).
    pub const Z: Self = Self::new(0.0, 0.0, 1.0);

    /// Creates a new vector.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Creates a vector with all components set to the same value.
    #[inline]
    pub const fn splat(v: f32) -> Self {
        Self::new(v, v, v)
    }

    /// Creates from an array.
    #[inline]
    pub const fn from_array(a: [f32; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }

    /// Converts to an array.
    #[inline]
    pub const fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }

    /// Creates from a [`Vec4`](crate::Vec4), dropping w.
    #[inline]
    pub const fn from_vec4(v: crate::Vec4) -> Self {
        Self::new(v.x, v.y, v.z)
    }

    /// Dot product with another vector.
    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Cross product.
    ///
    /// ```rust
    /// use mvx_math::Vec3;
    ///
    /// assert_eq!(Vec3::X.cross(Vec3::Y), Vec3::Z);
    /// ```
    #[inline]
    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Length (magnitude) of the vector.
    #[inline]
    pub fn length(self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Squared length (avoids sqrt).
    #[inline]
    pub fn length_squared(self) -> f32 {
        self.dot(self)
    }

    /// Normalizes the vector to unit length.
    ///
    /// A zero-length input yields non-finite components; this is not
    /// trapped here. Callers that need the guard check
    /// [`length`](Self::length) or [`is_finite`](Self::is_finite)
    /// themselves, as `rotate` does for its axis.
    #[inline]
    pub fn normalize(self) -> Self {
        self / self.length()
    }

    /// Normalizes `x` and `y` by their 2-norm, passing `z` through.
    ///
    /// Used to normalize a direction while preserving a passthrough
    /// third component.
    #[inline]
    pub fn normalize_keep_last(self) -> Self {
        let len = (self.x * self.x + self.y * self.y).sqrt();
        Self::new(self.x / len, self.y / len, self.z)
    }

    /// Linear interpolation `(1 - s) * self + s * other`.
    #[inline]
    pub fn mix(self, other: Self, s: f32) -> Self {
        Self::new(
            (1.0 - s) * self.x + s * other.x,
            (1.0 - s) * self.y + s * other.y,
            (1.0 - s) * self.z + s * other.z,
        )
    }

    /// Returns a copy with component `i` replaced by `value`.
    #[inline]
    pub fn with_component(self, i: usize, value: f32) -> Result<Self> {
        match i {
            0 => Ok(Self::new(value, self.y, self.z)),
            1 => Ok(Self::new(self.x, value, self.z)),
            2 => Ok(Self::new(self.x, self.y, value)),
            _ => Err(Error::wrong_arguments(
                "vec3::with_component",
                format!("index {i} out of range"),
            )),
        }
    }

    /// Returns true if all components are finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Converts to glam Vec3.
    #[inline]
    pub fn to_glam(self) -> glam::Vec3 {
        glam::Vec3::new(self.x, self.y, self.z)
    }

    /// Creates from glam Vec3.
    #[inline]
    pub fn from_glam(v: glam::Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl Index<usize> for Vec3 {
    type Output = f32;

    #[inline]
    fn index(&self, i: usize) -> &f32 {
        match i {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Vec3 index out of bounds: {}", i),
        }
    }
}

impl Add for Vec3 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Neg for Vec3 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

// Component-wise product
impl Mul for Vec3 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::new(self.x * rhs.x, self.y * rhs.y, self.z * rhs.z)
    }
}

impl Mul<f32> for Vec3 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Mul<Vec3> for f32 {
    type Output = Vec3;

    #[inline]
    fn mul(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self * rhs.x, self * rhs.y, self * rhs.z)
    }
}

impl Div<f32> for Vec3 {
    type Output = Self;

    #[inline]
    fn div(self, rhs: f32) -> Self {
        Self::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

impl From<[f32; 3]> for Vec3 {
    #[inline]
    fn from(a: [f32; 3]) -> Self {
        Self::from_array(a)
    }
}

impl From<Vec3> for [f32; 3] {
    #[inline]
    fn from(v: Vec3) -> [f32; 3] {
        v.to_array()
    }
}

impl From<glam::Vec3> for Vec3 {
    #[inline]
    fn from(v: glam::Vec3) -> Self {
        Self::from_glam(v)
    }
}

impl From<Vec3> for glam::Vec3 {
    #[inline]
    fn from(v: Vec3) -> glam::Vec3 {
        v.to_glam()
    }
}
