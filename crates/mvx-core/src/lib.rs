//! # mvx-core
//!
//! Core types for the mvx-rs math workspace.
//!
//! This crate provides the shared vocabulary used by every other
//! mvx-rs crate:
//!
//! - [`Kind`] - Discriminator naming the fixed container shapes
//!   (vec2..vec4, mat2..mat4, patch, curve)
//! - [`Error`], [`Result`] - Unified error handling for all fallible
//!   math operations
//!
//! ## Crate Structure
//!
//! `mvx-core` is the foundation and has no internal dependencies:
//!
//! ```text
//! mvx-core (this crate)
//!    ^
//!    |
//!    +-- mvx-math (vectors, matrices, transforms)
//!    +-- mvx-tests, mvx-bench
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
mod kind;

pub use error::{Error, Result};
pub use kind::Kind;
