// src/indexing/mod.rs

//! Conversion between points on the sphere and cell indexes.

pub mod from_cell;
pub mod to_cell;

pub use from_cell::{cell_boundary, index_to_geo};
pub use to_cell::geo_to_index;
