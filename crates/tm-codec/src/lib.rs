//! `tm-codec` - Binary matrix and vector file codecs for tiled-matvec.
//!
//! This crate provides:
//! - `MatrixFile`, a parsed, memory-mapped tiled matrix file
//! - `read_matrix` / `read_vector` one-shot decoders
//! - `write_matrix` / `write_vector`, the inverse encodings
//! - `TileLayout`, the 5x5 block geometry shared by both sides
//!
//! Both file formats are little-endian throughout: a 4-byte signed header
//! (matrix dimension or vector length) followed by IEEE-754 f64 payloads.

pub mod error;
pub mod layout;
pub mod matrix;
pub mod vector;
pub mod writer;

pub use error::{CodecError, Result};
pub use layout::{TileLayout, BLOCK_DIM, ELEMENT_SIZE, HEADER_SIZE, MATRIX_DIM};
pub use matrix::{read_matrix, MatrixFile};
pub use vector::read_vector;
pub use writer::{write_matrix, write_vector};
