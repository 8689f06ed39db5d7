//! 4D homogeneous vector type.
//!
//! [`Vec4`] carries homogeneous positions (w = 1), directions (w = 0)
//! and RGBA-style light/material products. The rendering glue builds
//! its uniform buffers from these.
//!
//! # Usage
//!
//! ```rust
//! use mvx_math::{Vec3, Vec4};
//!
//! let corner = Vec4::from_point(Vec3::new(-0.5, -0.5, 0.5));
//! assert_eq!(corner.w, 1.0);
//! ```

use crate::Vec3;
use mvx_core::{Error, Result};
use std::ops::{Add, Div, Index, Mul, Neg, Sub};

/// A 4-component homogeneous vector.
///
/// # Components
///
/// Access via `.x`, `.y`, `.z`, `.w` or index `[0]`..`[3]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[repr(C)]
pub struct Vec4 {
    /// X component
    pub x: f32,
    /// Y component
    pub y: f32,
    /// Z component
    pub z: f32,
    /// W (homogeneous) component
    pub w: f32,
}

impl Vec4 {
    /// Zero vector (0, 0, 0, 0).
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// One vector (1, 1, 1, 1).
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0, 1.0);

    /// Creates a new vector.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Creates a vector with all components set to the same value.
    #[inline]
    pub const fn splat(v: f32) -> Self {
        Self::new(v, v, v, v)
    }

    /// Creates from an array.
    #[inline]
    pub const fn from_array(a: [f32; 4]) -> Self {
        Self::new(a[0], a[1], a[2], a[3])
    }

    /// Converts to an array.
    #[inline]
    pub const fn to_array(self) -> [f32; 4] {
        [self.x, self.y, self.z, self.w]
    }

    /// Creates a homogeneous point from a [`Vec3`], padding w = 1.0.
    ///
    /// ```rust
    /// use mvx_math::{Vec3, Vec4};
    ///
    /// let p = Vec4::from_point(Vec3::new(1.0, 2.0, 3.0));
    /// assert_eq!(p, Vec4::new(1.0, 2.0, 3.0, 1.0));
    /// ```
    #[inline]
    pub const fn from_point(v: Vec3) -> Self {
        Self::new(v.x, v.y, v.z, 1.0)
    }

    /// Creates a homogeneous direction from a [`Vec3`], padding w = 0.0.
    #[inline]
    pub const fn from_direction(v: Vec3) -> Self {
        Self::new(v.x, v.y, v.z, 0.0)
    }

    /// Builds (x, yzw.x, yzw.y, yzw.z): the scalar lands in the first
    /// component and the vec3 fills the rest.
    #[inline]
    pub const fn from_x_yzw(x: f32, yzw: Vec3) -> Self {
        Self::new(x, yzw.x, yzw.y, yzw.z)
    }

    /// Drops the w component.
    #[inline]
    pub const fn truncate(self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    /// Dot product with another vector (all four components).
    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    /// 3D cross product on the xyz components; w is ignored and the
    /// result carries w = 0.
    #[inline]
    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
            0.0,
        )
    }

    /// Length (magnitude) over all four components.
    #[inline]
    pub fn length(self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Squared length (avoids sqrt).
    #[inline]
    pub fn length_squared(self) -> f32 {
        self.dot(self)
    }

    /// Normalizes over all four components.
    ///
    /// Zero-length input yields non-finite components; not trapped.
    #[inline]
    pub fn normalize(self) -> Self {
        self / self.length()
    }

    /// Normalizes xyz by their 3-norm, passing w through unscaled.
    ///
    /// Used to normalize a direction while preserving the homogeneous
    /// w component.
    #[inline]
    pub fn normalize_keep_last(self) -> Self {
        let len = (self.x * self.x + self.y * self.y + self.z * self.z).sqrt();
        Self::new(self.x / len, self.y / len, self.z / len, self.w)
    }

    /// Linear interpolation `(1 - s) * self + s * other`.
    #[inline]
    pub fn mix(self, other: Self, s: f32) -> Self {
        Self::new(
            (1.0 - s) * self.x + s * other.x,
            (1.0 - s) * self.y + s * other.y,
            (1.0 - s) * self.z + s * other.z,
            (1.0 - s) * self.w + s * other.w,
        )
    }

    /// Returns a copy with component `i` replaced by `value`.
    ///
    /// The slider glue rebuilds its light-position vector through this
    /// rather than mutating in place.
    #[inline]
    pub fn with_component(self, i: usize, value: f32) -> Result<Self> {
        match i {
            0 => Ok(Self::new(value, self.y, self.z, self.w)),
            1 => Ok(Self::new(self.x, value, self.z, self.w)),
            2 => Ok(Self::new(self.x, self.y, value, self.w)),
            3 => Ok(Self::new(self.x, self.y, self.z, value)),
            _ => Err(Error::wrong_arguments(
                "vec4::with_component",
                format!("index {i} out of range"),
            )),
        }
    }

    /// Returns true if all components are finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite() && self.w.is_finite()
    }

    /// Converts to glam Vec4.
    #[inline]
    pub fn to_glam(self) -> glam::Vec4 {
        glam::Vec4::new(self.x, self.y, self.z, self.w)
    }

    /// Creates from glam Vec4.
    #[inline]
    pub fn from_glam(v: glam::Vec4) -> Self {
        Self::new(v.x, v.y, v.z, v.w)
    }
}

impl Index<usize> for Vec4 {
    type Output = f32;

    #[inline]
    fn index(&self, i: usize) -> &f32 {
        match i {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            3 => &self.w,
            _ => panic!("Vec4 index out of bounds: {}", i),
        }
    }
}

impl Add for Vec4 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(
            self.x + rhs.x,
            self.y + rhs.y,
            self.z + rhs.z,
            self.w + rhs.w,
        )
    }
}

impl Sub for Vec4 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(
            self.x - rhs.x,
            self.y - rhs.y,
            self.z - rhs.z,
            self.w - rhs.w,
        )
    }
}

impl Neg for Vec4 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, -self.w)
    }
}

// Component-wise product, used for light/material products
impl Mul for Vec4 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::new(
            self.x * rhs.x,
            self.y * rhs.y,
            self.z * rhs.z,
            self.w * rhs.w,
        )
    }
}

impl Mul<f32> for Vec4 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs, self.w * rhs)
    }
}

impl Mul<Vec4> for f32 {
    type Output = Vec4;

    #[inline]
    fn mul(self, rhs: Vec4) -> Vec4 {
        rhs * self
    }
}

impl Div<f32> for Vec4 {
    type Output = Self;

    #[inline]
    fn div(self, rhs: f32) -> Self {
        Self::new(self.x / rhs, self.y / rhs, self.z / rhs, self.w / rhs)
    }
}

impl From<[f32; 4]> for Vec4 {
    #[inline]
    fn from(a: [f32; 4]) -> Self {
        Self::from_array(a)
    }
}

impl From<Vec4> for [f32; 4] {
    #[inline]
    fn from(v: Vec4) -> [f32; 4] {
        v.to_array()
    }
}

impl From<glam::Vec4> for Vec4 {
    #[inline]
    fn from(v: glam::Vec4) -> Self {
        Self::from_glam(v)
    }
}

impl From<Vec4> for glam::Vec4 {
    #[inline]
    fn from(v: Vec4) -> glam::Vec4 {
        v.to_glam()
    }
}
