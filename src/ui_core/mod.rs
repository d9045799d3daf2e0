//! Renderer-agnostic UI helpers.

pub mod grid;

pub use grid::{chunk_rows, GridCursor};
