// src/topology/mod.rs

//! Movement across the grid: neighbors, distances and directed edges.
#![allow(clippy::module_name_repetitions)]

pub mod distance;
pub mod edges;
pub(crate) mod local_ijk;
pub mod neighbors;

pub use distance::{grid_distance, max_kring_size};
pub use edges::{destination_of, directed_edge, edge_boundary, edge_cells, edge_is_valid, edges_from_cell, origin_of};
pub use neighbors::{are_neighbors, neighbor};
