//! Integration tests for mvx-rs crates.
//!
//! End-to-end checks that mirror how the rendering glue drives the
//! math: building model-view/projection chains, light products, and
//! upload buffers, and verifying the algebraic properties the pipeline
//! relies on.
