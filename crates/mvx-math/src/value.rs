//! Dynamically tagged containers.
//!
//! [`Value`] is the runtime-dispatched surface over the fixed-size
//! vector and matrix types: one sum type, one [`Kind`] per variant,
//! and fallible operations that check kinds before dispatching to the
//! concrete math. Callers with statically known shapes use the
//! concrete types directly; this layer exists for code paths whose
//! container kinds are only known at run time (and for preserving the
//! original library's polymorphic contract, errors included).
//!
//! # Usage
//!
//! ```rust
//! use mvx_math::{Value, Vec3, Vec4};
//!
//! let u = Value::from(Vec3::new(1.0, 0.0, 0.0));
//! let v = Value::from(Vec3::new(0.0, 1.0, 0.0));
//! let n = u.cross(&v).unwrap();
//! assert_eq!(n, Value::from(Vec3::new(0.0, 0.0, 1.0)));
//!
//! // Kind mismatches are errors, not coercions
//! let w = Value::from(Vec4::ZERO);
//! assert!(u.add(&w).is_err());
//! ```

use crate::{Curve, Flatten, Mat2, Mat3, Mat4, Patch, Vec2, Vec3, Vec4};
use mvx_core::{Error, Kind, Result};

/// A math container whose shape is known only at run time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    /// 2-component vector.
    Vec2(Vec2),
    /// 3-component vector.
    Vec3(Vec3),
    /// 4-component vector.
    Vec4(Vec4),
    /// 2x2 matrix.
    Mat2(Mat2),
    /// 3x3 matrix.
    Mat3(Mat3),
    /// 4x4 matrix.
    Mat4(Mat4),
    /// 4x4 control-point grid.
    Patch(Patch),
    /// Length-4 control strip.
    Curve(Curve),
}

impl Value {
    /// The kind tag of this container.
    pub fn kind(&self) -> Kind {
        match self {
            Self::Vec2(_) => Kind::Vec2,
            Self::Vec3(_) => Kind::Vec3,
            Self::Vec4(_) => Kind::Vec4,
            Self::Mat2(_) => Kind::Mat2,
            Self::Mat3(_) => Kind::Mat3,
            Self::Mat4(_) => Kind::Mat4,
            Self::Patch(_) => Kind::Patch,
            Self::Curve(_) => Kind::Curve,
        }
    }

    /// Returns true for the vector variants.
    pub fn is_vector(&self) -> bool {
        matches!(self, Self::Vec2(_) | Self::Vec3(_) | Self::Vec4(_))
    }

    /// Returns true for the matrix variants (not patch).
    pub fn is_matrix(&self) -> bool {
        matches!(self, Self::Mat2(_) | Self::Mat3(_) | Self::Mat4(_))
    }

    /// Builds a vector from a runtime-sized slice.
    ///
    /// The slice length picks the kind: 2, 3 or 4 components. Any
    /// other length is a
    /// [`WrongArguments`](mvx_core::Error::WrongArguments) error.
    pub fn vector(components: &[f32]) -> Result<Self> {
        match *components {
            [x, y] => Ok(Self::Vec2(Vec2::new(x, y))),
            [x, y, z] => Ok(Self::Vec3(Vec3::new(x, y, z))),
            [x, y, z, w] => Ok(Self::Vec4(Vec4::new(x, y, z, w))),
            _ => Err(Error::wrong_arguments(
                "vector",
                format!("slice length {}, expected 2, 3 or 4", components.len()),
            )),
        }
    }

    /// Builds a matrix from a runtime-sized row-major slice.
    ///
    /// The slice length picks the kind: 4, 9 or 16 elements.
    pub fn matrix(elements: &[f32]) -> Result<Self> {
        match elements.len() {
            4 => {
                let mut v = [0.0; 4];
                v.copy_from_slice(elements);
                Ok(Self::Mat2(Mat2::from_flat(v)))
            }
            9 => {
                let mut v = [0.0; 9];
                v.copy_from_slice(elements);
                Ok(Self::Mat3(Mat3::from_flat(v)))
            }
            16 => {
                let mut v = [0.0; 16];
                v.copy_from_slice(elements);
                Ok(Self::Mat4(Mat4::from_flat(v)))
            }
            n => Err(Error::wrong_arguments(
                "matrix",
                format!("slice length {n}, expected 4, 9 or 16"),
            )),
        }
    }

    /// Error for a binary op requiring matching vector/matrix kinds.
    fn mismatch(op: &'static str, u: &Self, v: &Self) -> Error {
        if !(u.is_vector() || u.is_matrix()) {
            Error::not_a_vector_or_matrix(op, u.kind())
        } else if !(v.is_vector() || v.is_matrix()) {
            Error::not_a_vector_or_matrix(op, v.kind())
        } else {
            Error::type_mismatch(op, u.kind(), v.kind())
        }
    }

    /// Tests structural equality: same kind, every component equal.
    ///
    /// Comparison is exact, with no epsilon; callers needing
    /// approximate comparison wrap this themselves.
    pub fn equal(&self, other: &Self) -> Result<bool> {
        match (self, other) {
            (Self::Vec2(u), Self::Vec2(v)) => Ok(u == v),
            (Self::Vec3(u), Self::Vec3(v)) => Ok(u == v),
            (Self::Vec4(u), Self::Vec4(v)) => Ok(u == v),
            (Self::Mat2(u), Self::Mat2(v)) => Ok(u == v),
            (Self::Mat3(u), Self::Mat3(v)) => Ok(u == v),
            (Self::Mat4(u), Self::Mat4(v)) => Ok(u == v),
            (u, v) => Err(Self::mismatch("equal", u, v)),
        }
    }

    /// Componentwise/elementwise sum of two same-kind containers.
    pub fn add(&self, other: &Self) -> Result<Self> {
        match (self, other) {
            (Self::Vec2(u), Self::Vec2(v)) => Ok(Self::Vec2(*u + *v)),
            (Self::Vec3(u), Self::Vec3(v)) => Ok(Self::Vec3(*u + *v)),
            (Self::Vec4(u), Self::Vec4(v)) => Ok(Self::Vec4(*u + *v)),
            (Self::Mat2(u), Self::Mat2(v)) => Ok(Self::Mat2(*u + *v)),
            (Self::Mat3(u), Self::Mat3(v)) => Ok(Self::Mat3(*u + *v)),
            (Self::Mat4(u), Self::Mat4(v)) => Ok(Self::Mat4(*u + *v)),
            (u, v) => Err(Self::mismatch("add", u, v)),
        }
    }

    /// Componentwise/elementwise difference of two same-kind containers.
    pub fn sub(&self, other: &Self) -> Result<Self> {
        match (self, other) {
            (Self::Vec2(u), Self::Vec2(v)) => Ok(Self::Vec2(*u - *v)),
            (Self::Vec3(u), Self::Vec3(v)) => Ok(Self::Vec3(*u - *v)),
            (Self::Vec4(u), Self::Vec4(v)) => Ok(Self::Vec4(*u - *v)),
            (Self::Mat2(u), Self::Mat2(v)) => Ok(Self::Mat2(*u - *v)),
            (Self::Mat3(u), Self::Mat3(v)) => Ok(Self::Mat3(*u - *v)),
            (Self::Mat4(u), Self::Mat4(v)) => Ok(Self::Mat4(*u - *v)),
            (u, v) => Err(Self::mismatch("sub", u, v)),
        }
    }

    /// Polymorphic product.
    ///
    /// Dispatches to matrix x vector (matching dimension), matrix x
    /// matrix (matching kind), or componentwise vector x vector
    /// (vec3/vec4 only, the light/material product form). Every other
    /// pairing is an
    /// [`IncompatibleTypes`](mvx_core::Error::IncompatibleTypes)
    /// error; in particular vec2 x vec2 is not a defined product.
    pub fn mult(&self, other: &Self) -> Result<Self> {
        match (self, other) {
            (Self::Mat2(m), Self::Vec2(v)) => Ok(Self::Vec2(*m * *v)),
            (Self::Mat3(m), Self::Vec3(v)) => Ok(Self::Vec3(*m * *v)),
            (Self::Mat4(m), Self::Vec4(v)) => Ok(Self::Vec4(*m * *v)),
            (Self::Mat2(u), Self::Mat2(v)) => Ok(Self::Mat2(*u * *v)),
            (Self::Mat3(u), Self::Mat3(v)) => Ok(Self::Mat3(*u * *v)),
            (Self::Mat4(u), Self::Mat4(v)) => Ok(Self::Mat4(*u * *v)),
            (Self::Vec3(u), Self::Vec3(v)) => Ok(Self::Vec3(*u * *v)),
            (Self::Vec4(u), Self::Vec4(v)) => Ok(Self::Vec4(*u * *v)),
            (u, v) => Err(Error::incompatible("mult", u.kind(), v.kind())),
        }
    }

    /// Scales a vector or matrix of any kind by a scalar.
    pub fn mult_scalar(&self, s: f32) -> Result<Self> {
        match self {
            Self::Vec2(v) => Ok(Self::Vec2(*v * s)),
            Self::Vec3(v) => Ok(Self::Vec3(*v * s)),
            Self::Vec4(v) => Ok(Self::Vec4(*v * s)),
            Self::Mat2(m) => Ok(Self::Mat2(*m * s)),
            Self::Mat3(m) => Ok(Self::Mat3(*m * s)),
            Self::Mat4(m) => Ok(Self::Mat4(*m * s)),
            v => Err(Error::not_a_vector_or_matrix("mult_scalar", v.kind())),
        }
    }

    /// Dot product of two same-kind vectors.
    pub fn dot(&self, other: &Self) -> Result<f32> {
        match (self, other) {
            (Self::Vec2(u), Self::Vec2(v)) => Ok(u.dot(*v)),
            (Self::Vec3(u), Self::Vec3(v)) => Ok(u.dot(*v)),
            (Self::Vec4(u), Self::Vec4(v)) => Ok(u.dot(*v)),
            (u, v) => {
                if !u.is_vector() {
                    Err(Error::not_a_vector("dot", u.kind()))
                } else if !v.is_vector() {
                    Err(Error::not_a_vector("dot", v.kind()))
                } else {
                    Err(Error::type_mismatch("dot", u.kind(), v.kind()))
                }
            }
        }
    }

    /// 3D cross product of two vec3s or two vec4s.
    ///
    /// The vec4 form ignores w and pads the result with w = 0.
    pub fn cross(&self, other: &Self) -> Result<Self> {
        match (self, other) {
            (Self::Vec3(u), Self::Vec3(v)) => Ok(Self::Vec3(u.cross(*v))),
            (Self::Vec4(u), Self::Vec4(v)) => Ok(Self::Vec4(u.cross(*v))),
            (u, v) => Err(Error::incompatible("cross", u.kind(), v.kind())),
        }
    }

    /// Componentwise negation of a vector.
    pub fn negate(&self) -> Result<Self> {
        match self {
            Self::Vec2(v) => Ok(Self::Vec2(-*v)),
            Self::Vec3(v) => Ok(Self::Vec3(-*v)),
            Self::Vec4(v) => Ok(Self::Vec4(-*v)),
            v => Err(Error::not_a_vector("negate", v.kind())),
        }
    }

    /// Euclidean length, `sqrt(dot(u, u))`.
    pub fn length(&self) -> Result<f32> {
        match self {
            Self::Vec2(v) => Ok(v.length()),
            Self::Vec3(v) => Ok(v.length()),
            Self::Vec4(v) => Ok(v.length()),
            v => Err(Error::not_a_vector("length", v.kind())),
        }
    }

    /// Normalizes a vec3 or vec4.
    ///
    /// With `exclude_last` the final component passes through unscaled
    /// and the norm covers the rest (preserving a homogeneous w or a
    /// passthrough z). vec2 is explicitly unsupported, per the
    /// original contract.
    pub fn normalize(&self, exclude_last: bool) -> Result<Self> {
        match self {
            Self::Vec3(v) => Ok(Self::Vec3(if exclude_last {
                v.normalize_keep_last()
            } else {
                v.normalize()
            })),
            Self::Vec4(v) => Ok(Self::Vec4(if exclude_last {
                v.normalize_keep_last()
            } else {
                v.normalize()
            })),
            Self::Vec2(_) => Err(Error::unsupported("normalize", Kind::Vec2)),
            v => Err(Error::not_a_vector("normalize", v.kind())),
        }
    }

    /// Linear interpolation `(1 - s) * self + s * other` between two
    /// same-kind vectors.
    ///
    /// The scalar form lives in [`mix`](crate::mix).
    pub fn mix(&self, other: &Self, s: f32) -> Result<Self> {
        match (self, other) {
            (Self::Vec2(u), Self::Vec2(v)) => Ok(Self::Vec2(u.mix(*v, s))),
            (Self::Vec3(u), Self::Vec3(v)) => Ok(Self::Vec3(u.mix(*v, s))),
            (Self::Vec4(u), Self::Vec4(v)) => Ok(Self::Vec4(u.mix(*v, s))),
            (u, v) => {
                if !u.is_vector() {
                    Err(Error::not_a_vector("mix", u.kind()))
                } else if !v.is_vector() {
                    Err(Error::not_a_vector("mix", v.kind()))
                } else {
                    Err(Error::type_mismatch("mix", u.kind(), v.kind()))
                }
            }
        }
    }

    /// Transposes a matrix or a patch.
    pub fn transpose(&self) -> Result<Self> {
        match self {
            Self::Mat2(m) => Ok(Self::Mat2(m.transpose())),
            Self::Mat3(m) => Ok(Self::Mat3(m.transpose())),
            Self::Mat4(m) => Ok(Self::Mat4(m.transpose())),
            Self::Patch(p) => Ok(Self::Patch(p.transpose())),
            v => Err(Error::not_a_matrix("transpose", v.kind())),
        }
    }

    /// Determinant of a matrix.
    pub fn det(&self) -> Result<f32> {
        match self {
            Self::Mat2(m) => Ok(m.determinant()),
            Self::Mat3(m) => Ok(m.determinant()),
            Self::Mat4(m) => Ok(m.determinant()),
            v => Err(Error::not_a_matrix("det", v.kind())),
        }
    }

    /// Inverse of a matrix.
    ///
    /// Singular matrices are not trapped; the result carries
    /// non-finite components, as documented on the concrete types.
    pub fn inverse(&self) -> Result<Self> {
        match self {
            Self::Mat2(m) => Ok(Self::Mat2(m.inverse())),
            Self::Mat3(m) => Ok(Self::Mat3(m.inverse())),
            Self::Mat4(m) => Ok(Self::Mat4(m.inverse())),
            v => Err(Error::not_a_matrix("inverse", v.kind())),
        }
    }

    /// Normal matrix of a mat4.
    ///
    /// With `reduce` the conventional 3x3 normal matrix is returned;
    /// otherwise the full 4x4 inverse transpose. Only mat4 input is
    /// supported.
    pub fn normal_matrix(&self, reduce: bool) -> Result<Self> {
        match self {
            Self::Mat4(m) => Ok(if reduce {
                Self::Mat3(m.normal_matrix())
            } else {
                Self::Mat4(m.normal_matrix4())
            }),
            Self::Mat2(_) | Self::Mat3(_) => {
                Err(Error::unsupported("normal_matrix", self.kind()))
            }
            v => Err(Error::not_a_matrix("normal_matrix", v.kind())),
        }
    }
}

impl Flatten for Value {
    fn flat_len(&self) -> usize {
        self.kind().flat_len()
    }

    fn flatten(&self) -> Vec<f32> {
        match self {
            Self::Vec2(v) => v.flatten(),
            Self::Vec3(v) => v.flatten(),
            Self::Vec4(v) => v.flatten(),
            Self::Mat2(m) => m.flatten(),
            Self::Mat3(m) => m.flatten(),
            Self::Mat4(m) => m.flatten(),
            Self::Patch(p) => p.flatten(),
            Self::Curve(c) => c.flatten(),
        }
    }
}

impl From<Vec2> for Value {
    fn from(v: Vec2) -> Self {
        Self::Vec2(v)
    }
}

impl From<Vec3> for Value {
    fn from(v: Vec3) -> Self {
        Self::Vec3(v)
    }
}

impl From<Vec4> for Value {
    fn from(v: Vec4) -> Self {
        Self::Vec4(v)
    }
}

impl From<Mat2> for Value {
    fn from(m: Mat2) -> Self {
        Self::Mat2(m)
    }
}

impl From<Mat3> for Value {
    fn from(m: Mat3) -> Self {
        Self::Mat3(m)
    }
}

impl From<Mat4> for Value {
    fn from(m: Mat4) -> Self {
        Self::Mat4(m)
    }
}

impl From<Patch> for Value {
    fn from(p: Patch) -> Self {
        Self::Patch(p)
    }
}

impl From<Curve> for Value {
    fn from(c: Curve) -> Self {
        Self::Curve(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_kind_predicates() {
        assert!(Value::from(Vec3::ZERO).is_vector());
        assert!(Value::from(Mat4::IDENTITY).is_matrix());
        assert!(!Value::from(Patch::new()).is_matrix());
        assert_eq!(Value::from(Vec4::ZERO).kind(), Kind::Vec4);
    }

    #[test]
    fn test_value_vector_from_slice() {
        assert_eq!(
            Value::vector(&[1.0, 2.0]).unwrap(),
            Value::from(Vec2::new(1.0, 2.0))
        );
        assert_eq!(
            Value::vector(&[1.0, 2.0, 3.0, 4.0]).unwrap(),
            Value::from(Vec4::new(1.0, 2.0, 3.0, 4.0))
        );
        assert!(Value::vector(&[1.0]).unwrap_err().is_argument_error());
        assert!(
            Value::vector(&[1.0, 2.0, 3.0, 4.0, 5.0])
                .unwrap_err()
                .is_argument_error()
        );
    }

    #[test]
    fn test_value_matrix_from_slice() {
        let m = Value::matrix(&[1.0, 0.0, 0.0, 1.0]).unwrap();
        assert_eq!(m, Value::from(Mat2::IDENTITY));
        assert!(Value::matrix(&[0.0; 5]).unwrap_err().is_argument_error());
    }

    #[test]
    fn test_value_add_mismatch() {
        let u = Value::from(Vec3::ZERO);
        let v = Value::from(Vec4::ZERO);
        let err = u.add(&v).unwrap_err();
        assert!(err.is_kind_error());
        assert!(err.to_string().contains("vec3"));

        let ok = u.add(&Value::from(Vec3::ONE)).unwrap();
        assert_eq!(ok, Value::from(Vec3::ONE));
    }

    #[test]
    fn test_value_add_patch_rejected() {
        let p = Value::from(Patch::new());
        assert!(matches!(
            p.add(&p).unwrap_err(),
            Error::NotAVectorOrMatrix { .. }
        ));
    }

    #[test]
    fn test_value_equal() {
        let u = Value::from(Vec3::new(1.0, 2.0, 3.0));
        assert!(u.equal(&u).unwrap());
        assert!(!u.equal(&Value::from(Vec3::ZERO)).unwrap());
        assert!(u.equal(&Value::from(Mat3::IDENTITY)).is_err());
    }

    #[test]
    fn test_value_mult_dispatch() {
        let m = Value::from(Mat4::IDENTITY);
        let v = Value::from(Vec4::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(m.mult(&v).unwrap(), v);
        assert_eq!(m.mult(&m).unwrap(), m);

        // Componentwise vector product
        let a = Value::from(Vec3::new(1.0, 2.0, 3.0));
        let b = Value::from(Vec3::new(2.0, 2.0, 2.0));
        assert_eq!(a.mult(&b).unwrap(), Value::from(Vec3::new(2.0, 4.0, 6.0)));

        // vec2 x vec2 has no defined product
        let c = Value::from(Vec2::ONE);
        assert!(matches!(
            c.mult(&c).unwrap_err(),
            Error::IncompatibleTypes { .. }
        ));

        // Dimension mismatch
        assert!(m.mult(&a).is_err());
    }

    #[test]
    fn test_value_mult_scalar_matrix_fixed() {
        // Scalar x matrix must actually scale (regression for the
        // upstream fall-through)
        let m = Value::from(Mat3::IDENTITY);
        let scaled = m.mult_scalar(2.0).unwrap();
        assert_eq!(scaled, m.add(&m).unwrap());

        let v = Value::from(Vec2::new(1.0, 2.0)).mult_scalar(3.0).unwrap();
        assert_eq!(v, Value::from(Vec2::new(3.0, 6.0)));

        assert!(Value::from(Curve::new()).mult_scalar(2.0).is_err());
    }

    #[test]
    fn test_value_cross() {
        let u = Value::from(Vec4::new(1.0, 0.0, 0.0, 9.0));
        let v = Value::from(Vec4::new(0.0, 1.0, 0.0, 9.0));
        assert_eq!(
            u.cross(&v).unwrap(),
            Value::from(Vec4::new(0.0, 0.0, 1.0, 0.0))
        );
        assert!(u.cross(&Value::from(Vec3::X)).is_err());
        assert!(
            Value::from(Vec2::ONE)
                .cross(&Value::from(Vec2::ONE))
                .is_err()
        );
    }

    #[test]
    fn test_value_normalize_vec2_unsupported() {
        let v = Value::from(Vec2::new(3.0, 4.0));
        assert!(matches!(
            v.normalize(false).unwrap_err(),
            Error::Unsupported { .. }
        ));

        let u = Value::from(Vec4::new(0.0, 3.0, 4.0, 2.0));
        let n = u.normalize(true).unwrap();
        let Value::Vec4(n) = n else { panic!() };
        assert_eq!(n.w, 2.0);
        assert!((n.truncate().length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_value_mix() {
        let u = Value::from(Vec3::ZERO);
        let v = Value::from(Vec3::ONE);
        assert_eq!(u.mix(&v, 0.5).unwrap(), Value::from(Vec3::splat(0.5)));
        assert!(u.mix(&Value::from(Vec2::ZERO), 0.5).is_err());
        assert!(
            Value::from(Mat2::IDENTITY)
                .mix(&Value::from(Mat2::IDENTITY), 0.5)
                .is_err()
        );
    }

    #[test]
    fn test_value_matrix_algebra_dispatch() {
        let m = Value::from(Mat2::from_flat([1.0, 2.0, 3.0, 4.0]));
        assert_eq!(m.det().unwrap(), -2.0);
        let inv = m.inverse().unwrap();
        let prod = m.mult(&inv).unwrap();
        let Value::Mat2(prod) = prod else { panic!() };
        assert!((prod.m[0][0] - 1.0).abs() < 1e-6);
        assert!((prod.m[0][1]).abs() < 1e-6);

        assert!(Value::from(Vec3::ZERO).det().is_err());
        assert!(Value::from(Patch::new()).inverse().is_err());
        // ...but patch transposes
        assert!(Value::from(Patch::new()).transpose().is_ok());
    }

    #[test]
    fn test_value_normal_matrix_dispatch() {
        let m = Value::from(Mat4::diagonal(2.0, 1.0, 1.0, 1.0));
        let n = m.normal_matrix(true).unwrap();
        assert_eq!(n.kind(), Kind::Mat3);
        let n4 = m.normal_matrix(false).unwrap();
        assert_eq!(n4.kind(), Kind::Mat4);

        assert!(matches!(
            Value::from(Mat3::IDENTITY).normal_matrix(true).unwrap_err(),
            Error::Unsupported { .. }
        ));
        assert!(matches!(
            Value::from(Vec4::ZERO).normal_matrix(true).unwrap_err(),
            Error::NotAMatrix { .. }
        ));
    }

    #[test]
    fn test_value_flatten() {
        let v = Value::from(Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(v.flatten(), vec![1.0, 2.0, 3.0]);
        assert_eq!(Value::from(Mat4::IDENTITY).flat_len(), 16);
        assert_eq!(Value::from(Curve::new()).flatten(), vec![0.0; 4]);
    }
}
