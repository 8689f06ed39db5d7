//! Transform matrix generators.
//!
//! Translation, rotation, scaling, the view matrix and the two
//! projection matrices. Each generator returns a fresh matrix; angle
//! arguments are in degrees.
//!
//! # Usage
//!
//! ```rust
//! use mvx_math::{Mat4, Vec3, transform};
//!
//! let model_view = transform::rotate(30.0, Vec3::X).unwrap()
//!     * transform::rotate(45.0, Vec3::Y).unwrap()
//!     * transform::translate(0.0, 0.0, -2.0);
//! assert!(model_view.is_finite());
//! ```

use crate::scalar::radians;
use crate::{Mat3, Mat4, Vec3};
use mvx_core::{Error, Result};

/// 2D translation embedded in a mat3, offsets in the last column.
#[inline]
pub fn translate2(x: f32, y: f32) -> Mat3 {
    let mut result = Mat3::IDENTITY;
    result.m[0][2] = x;
    result.m[1][2] = y;
    result
}

/// 3D translation embedded in a mat4, offsets in the last column.
///
/// ```rust
/// use mvx_math::transform::translate;
///
/// let t = translate(1.0, 2.0, 3.0);
/// assert_eq!(t.m[0][3], 1.0);
/// assert_eq!(t.m[1][3], 2.0);
/// assert_eq!(t.m[2][3], 3.0);
/// ```
#[inline]
pub fn translate(x: f32, y: f32, z: f32) -> Mat4 {
    let mut result = Mat4::IDENTITY;
    result.m[0][3] = x;
    result.m[1][3] = y;
    result.m[2][3] = z;
    result
}

/// Rotation of `angle_deg` degrees about an arbitrary axis.
///
/// The axis is normalized internally; a zero-length axis is a
/// [`Degenerate`](mvx_core::Error::Degenerate) error. The matrix is
/// the Rodrigues form.
pub fn rotate(angle_deg: f32, axis: Vec3) -> Result<Mat4> {
    if axis.length() == 0.0 {
        return Err(Error::degenerate("rotate", "zero-length axis"));
    }
    let v = axis.normalize();

    let c = radians(angle_deg).cos();
    let s = radians(angle_deg).sin();
    let omc = 1.0 - c;

    Ok(Mat4::from_rows([
        [
            c + v.x * v.x * omc,
            v.x * v.y * omc - v.z * s,
            v.x * v.z * omc + v.y * s,
            0.0,
        ],
        [
            v.x * v.y * omc + v.z * s,
            c + v.y * v.y * omc,
            v.y * v.z * omc - v.x * s,
            0.0,
        ],
        [
            v.x * v.z * omc - v.y * s,
            v.y * v.z * omc + v.x * s,
            c + v.z * v.z * omc,
            0.0,
        ],
        [0.0, 0.0, 0.0, 1.0],
    ]))
}

/// [`rotate`] with the axis given as a plain slice.
///
/// Accepts exactly three elements; anything else is a
/// [`WrongArguments`](mvx_core::Error::WrongArguments) error.
pub fn rotate_axis(angle_deg: f32, axis: &[f32]) -> Result<Mat4> {
    let [x, y, z] = axis else {
        return Err(Error::wrong_arguments(
            "rotate_axis",
            format!("axis slice length {}, expected 3", axis.len()),
        ));
    };
    rotate(angle_deg, Vec3::new(*x, *y, *z))
}

/// Rotation about the X axis.
pub fn rotate_x(angle_deg: f32) -> Mat4 {
    let c = radians(angle_deg).cos();
    let s = radians(angle_deg).sin();
    Mat4::from_rows([
        [1.0, 0.0, 0.0, 0.0],
        [0.0, c, -s, 0.0],
        [0.0, s, c, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// Rotation about the Y axis.
pub fn rotate_y(angle_deg: f32) -> Mat4 {
    let c = radians(angle_deg).cos();
    let s = radians(angle_deg).sin();
    Mat4::from_rows([
        [c, 0.0, s, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [-s, 0.0, c, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// Rotation about the Z axis.
pub fn rotate_z(angle_deg: f32) -> Mat4 {
    let c = radians(angle_deg).cos();
    let s = radians(angle_deg).sin();
    Mat4::from_rows([
        [c, -s, 0.0, 0.0],
        [s, c, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// Axis scaling on the mat4 diagonal.
///
/// Scaling a vector by a scalar is plain `s * v` (or
/// [`Value::mult_scalar`](crate::Value::mult_scalar) on the dynamic
/// layer); this generator covers the matrix form only.
#[inline]
pub fn scale(x: f32, y: f32, z: f32) -> Mat4 {
    let mut result = Mat4::IDENTITY;
    result.m[0][0] = x;
    result.m[1][1] = y;
    result.m[2][2] = z;
    result
}

/// View matrix from eye position, look-at target and up direction.
///
/// When `eye == at` the view direction is undefined; the identity
/// matrix is returned instead of dividing by zero. That policy is
/// deliberate: the caller keeps rendering from a default orientation.
///
/// The basis rows are the side vector `n = v x up`, the recomputed up
/// `u = n x v` and the negated view direction; the last row carries
/// `-eye`.
pub fn look_at(eye: Vec3, at: Vec3, up: Vec3) -> Mat4 {
    if eye == at {
        return Mat4::IDENTITY;
    }

    let v = (at - eye).normalize();
    let n = v.cross(up);
    let u = n.cross(v);
    let v = -v;

    Mat4::from_rows([
        [n.x, n.y, n.z, 0.0],
        [u.x, u.y, u.z, 0.0],
        [v.x, v.y, v.z, 0.0],
        [-eye.x, -eye.y, -eye.z, 1.0],
    ])
}

/// Orthographic projection from frustum bounds.
///
/// Any equal bound pair is a degenerate volume and fails.
pub fn ortho(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Result<Mat4> {
    if left == right {
        return Err(Error::degenerate("ortho", "left == right"));
    }
    if bottom == top {
        return Err(Error::degenerate("ortho", "bottom == top"));
    }
    if near == far {
        return Err(Error::degenerate("ortho", "near == far"));
    }

    // Reciprocals of the half-extents
    let rl = 1.0 / ((right - left) / 2.0);
    let tb = 1.0 / ((top - bottom) / 2.0);
    let fn_ = 1.0 / ((far - near) / 2.0);

    Ok(Mat4::from_rows([
        [rl, 0.0, 0.0, 0.0],
        [0.0, tb, 0.0, 0.0],
        [0.0, 0.0, -fn_, 0.0],
        [
            -(left + right) * rl,
            -(top + bottom) * tb,
            -(near + far) * fn_,
            1.0,
        ],
    ]))
}

/// Symmetric perspective projection.
///
/// `fovy_deg` is the vertical field of view in degrees. Fails when
/// `fovy == 0`, `aspect == 0` or `near == far`.
pub fn perspective(fovy_deg: f32, aspect: f32, near: f32, far: f32) -> Result<Mat4> {
    if fovy_deg == 0.0 {
        return Err(Error::degenerate("perspective", "fovy == 0"));
    }
    if aspect == 0.0 {
        return Err(Error::degenerate("perspective", "aspect == 0"));
    }
    if near == far {
        return Err(Error::degenerate("perspective", "near == far"));
    }

    let f = 1.0 / (radians(fovy_deg) / 2.0).tan(); // focal length
    let d = 1.0 / (far - near);
    let nf = 1.0 / (near - far);

    Ok(Mat4::from_rows([
        [f / aspect, 0.0, 0.0, 0.0],
        [0.0, f, 0.0, 0.0],
        [0.0, 0.0, (near + far) * d, -1.0],
        [0.0, 0.0, 2.0 * near * far * nf, 0.0],
    ]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Vec4;

    fn assert_mat4_close(a: &Mat4, b: &Mat4, eps: f32) {
        for i in 0..4 {
            for j in 0..4 {
                assert!(
                    (a.m[i][j] - b.m[i][j]).abs() < eps,
                    "[{i}][{j}]: {} vs {}",
                    a.m[i][j],
                    b.m[i][j]
                );
            }
        }
    }

    #[test]
    fn test_translate_layout() {
        let t = translate(1.0, 2.0, 3.0);
        let mut expected = Mat4::IDENTITY;
        expected.m[0][3] = 1.0;
        expected.m[1][3] = 2.0;
        expected.m[2][3] = 3.0;
        assert_eq!(t, expected);

        let t2 = translate2(5.0, 6.0);
        assert_eq!(t2.m[0][2], 5.0);
        assert_eq!(t2.m[1][2], 6.0);
        assert_eq!(t2.m[2][2], 1.0);
    }

    #[test]
    fn test_rotate_zero_angle_is_identity() {
        assert_mat4_close(&rotate_x(0.0), &Mat4::IDENTITY, 1e-7);
        assert_mat4_close(&rotate_y(0.0), &Mat4::IDENTITY, 1e-7);
        assert_mat4_close(&rotate_z(0.0), &Mat4::IDENTITY, 1e-7);
        assert_mat4_close(&rotate(0.0, Vec3::ONE).unwrap(), &Mat4::IDENTITY, 1e-7);
    }

    #[test]
    fn test_rotate_matches_single_axis_forms() {
        assert_mat4_close(&rotate(33.0, Vec3::X).unwrap(), &rotate_x(33.0), 1e-6);
        assert_mat4_close(&rotate(33.0, Vec3::Y).unwrap(), &rotate_y(33.0), 1e-6);
        assert_mat4_close(&rotate(33.0, Vec3::Z).unwrap(), &rotate_z(33.0), 1e-6);
    }

    #[test]
    fn test_rotate_degenerate_axis() {
        let err = rotate(45.0, Vec3::ZERO).unwrap_err();
        assert!(err.is_degenerate());
    }

    #[test]
    fn test_rotate_axis_slice() {
        let m = rotate_axis(20.0, &[0.0, 1.0, 0.0]).unwrap();
        assert_mat4_close(&m, &rotate_y(20.0), 1e-6);
        assert!(rotate_axis(20.0, &[1.0, 0.0]).unwrap_err().is_argument_error());
    }

    #[test]
    fn test_scale_diagonal() {
        let s = scale(2.0, 3.0, 4.0);
        assert_eq!(s, Mat4::diagonal(2.0, 3.0, 4.0, 1.0));
    }

    #[test]
    fn test_look_at_degenerate_returns_identity() {
        let eye = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(look_at(eye, eye, Vec3::Y), Mat4::IDENTITY);
    }

    #[test]
    fn test_look_at_encodes_eye() {
        let eye = Vec3::new(0.0, 0.0, 2.0);
        let m = look_at(eye, Vec3::ZERO, Vec3::Y);
        assert_eq!(m.m[3][0], 0.0);
        assert_eq!(m.m[3][1], 0.0);
        assert_eq!(m.m[3][2], -2.0);
        assert_eq!(m.m[3][3], 1.0);
        // View direction row is the negated normalized at - eye
        assert!((m.m[2][2] - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_ortho_symmetric_maps_origin_to_origin() {
        let p = ortho(-1.0, 1.0, -1.0, 1.0, -1.0, 1.0).unwrap();
        let origin = Vec4::new(0.0, 0.0, 0.0, 1.0);
        assert_eq!(p * origin, origin);
    }

    #[test]
    fn test_ortho_degenerate_bounds() {
        assert!(ortho(1.0, 1.0, -1.0, 1.0, -1.0, 1.0).unwrap_err().is_degenerate());
        assert!(ortho(-1.0, 1.0, 2.0, 2.0, -1.0, 1.0).unwrap_err().is_degenerate());
        assert!(ortho(-1.0, 1.0, -1.0, 1.0, 5.0, 5.0).unwrap_err().is_degenerate());
    }

    #[test]
    fn test_perspective_layout() {
        let p = perspective(45.0, 1.0, 0.1, 100.0).unwrap();
        let f = 1.0 / (radians(45.0) / 2.0).tan();
        assert!((p.m[0][0] - f).abs() < 1e-6);
        assert!((p.m[1][1] - f).abs() < 1e-6);
        assert_eq!(p.m[2][3], -1.0);
        assert_eq!(p.m[3][3], 0.0);
    }

    #[test]
    fn test_perspective_degenerate() {
        assert!(perspective(45.0, 1.0, 5.0, 5.0).unwrap_err().is_degenerate());
        assert!(perspective(0.0, 1.0, 0.1, 100.0).unwrap_err().is_degenerate());
        assert!(perspective(45.0, 0.0, 0.1, 100.0).unwrap_err().is_degenerate());
    }
}
