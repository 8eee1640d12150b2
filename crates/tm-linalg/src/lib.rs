//! `tm-linalg` - Dense matrix and vector types for tiled-matvec.
//!
//! This crate provides:
//! - A square `Matrix` type with contiguous, row-major f64 storage
//! - A `Vector` type wrapping an ordered f64 sequence
//! - Dense matrix-vector multiplication with dimension checking

pub mod error;
pub mod matrix;
pub mod vector;

// Re-export primary types at the crate root for convenience.
pub use error::{LinalgError, Result};
pub use matrix::Matrix;
pub use vector::Vector;
