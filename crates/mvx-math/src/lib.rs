//! # mvx-math
//!
//! ModelView math for WebGL-style rendering pipelines.
//!
//! This crate provides the linear algebra a lit, rotating-scene
//! renderer needs:
//!
//! - [`Vec2`], [`Vec3`], [`Vec4`] - Fixed-size vectors (homogeneous
//!   points, directions, light/material products)
//! - [`Mat2`], [`Mat3`], [`Mat4`] - Row-major square matrices with
//!   transpose, determinant, inverse and the normal matrix
//! - [`transform`] - translate/rotate/scale, [`transform::look_at`]
//!   and the ortho/perspective projections
//! - [`Value`] - A dynamically tagged sum over all container kinds
//!   with fallible, kind-checked operations
//! - [`Flatten`], [`FlatBuffer`] - Linearization into the `f32`
//!   buffers the rendering side uploads
//!
//! # Design
//!
//! All matrix operations assume **row-major** storage and **column
//! vectors**:
//!
//! ```text
//! result = matrix * vector
//! ```
//!
//! Values are immutable: every operation returns a new container, and
//! the only component "update" is `with_component`, which copies.
//! Singular-matrix inversion is deliberately unguarded (non-finite
//! output, `is_finite()` as the caller-side check); kind mismatches on
//! the [`Value`] layer are [`mvx_core::Error`]s.
//!
//! # Usage
//!
//! ```rust
//! use mvx_math::{Flatten, Mat4, Vec3, transform};
//!
//! let model_view = transform::rotate(30.0, Vec3::new(1.0, 0.0, 0.0)).unwrap()
//!     * transform::rotate(60.0, Vec3::new(0.0, 1.0, 0.0)).unwrap();
//! let projection = transform::perspective(45.0, 1.0, 0.1, 100.0).unwrap();
//!
//! // Uniform upload takes the flattened row-major buffer
//! let uniform: Vec<f32> = (projection * model_view).flatten();
//! assert_eq!(uniform.len(), 16);
//! ```
//!
//! # Dependencies
//!
//! - [`mvx-core`](mvx_core) - Kinds and errors
//! - [`glam`] - Interop conversions for SIMD-accelerated consumers

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod flatten;
mod mat2;
mod mat3;
mod mat4;
mod patch;
mod scalar;
pub mod transform;
mod value;
mod vec2;
mod vec3;
mod vec4;

pub use flatten::{FlatBuffer, Flatten, flatten_slice};
pub use mat2::*;
pub use mat3::*;
pub use mat4::*;
pub use patch::*;
pub use scalar::*;
pub use value::*;
pub use vec2::*;
pub use vec3::*;
pub use vec4::*;

pub use mvx_core::{Error, Kind, Result};
