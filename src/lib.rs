#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)] // every fallible operation returns `GridError`
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::unreadable_literal)] // table constants
#![allow(clippy::similar_names)]

//! `hexgrid` is a discrete global grid of hexagonal cells.
//!
//! The sphere is projected onto an icosahedron whose faces are tiled with
//! hexagons (and twelve pentagons, one per icosahedron vertex) at sixteen
//! resolutions, each aperture 7 finer than the last. Every cell and every
//! directed edge between adjacent cells is named by a 64-bit index whose
//! layout is compatible with H3.
//!
//! ```
//! use hexgrid::{geo_to_index, index_to_geo, GeoCoord};
//!
//! let york = GeoCoord::from_degrees(53.959130, -1.079230)?;
//! let cell = geo_to_index(&york, 8)?;
//! assert_eq!(cell.to_string(), "8819429a9dfffff");
//!
//! let (lat, lng) = index_to_geo(cell)?.to_degrees();
//! assert!((lat - 53.9586).abs() < 1e-3 && (lng + 1.0812).abs() < 1e-3);
//! # Ok::<(), hexgrid::GridError>(())
//! ```
//!
//! Coordinates are radians internally; [`GeoCoord::from_degrees`] and
//! [`GeoCoord::to_degrees`] convert at the boundary.

mod base_cells;
pub mod constants;
mod coords;
pub mod error;
pub mod geometry;
pub mod hierarchy;
pub mod index;
pub mod indexing;
mod math;
pub mod metrics;
pub mod topology;
pub mod types;

pub use constants::{MAX_INDEX_STRING_LEN, MAX_RES, NUM_BASE_CELLS, NUM_PENTAGONS};
pub use error::{DomainKind, GridError, Result};
pub use geometry::{
  degrees_to_radians, great_circle_distance_km, great_circle_distance_m, great_circle_distance_rads,
  radians_to_degrees,
};
pub use hierarchy::{center_child, children, max_children_count, num_cells_at_resolution, pentagons, res0_cells, to_parent};
pub use index::{
  base_cell_of, index_to_string, is_class_iii, is_pentagon, is_valid_index, pack, resolution_of, string_to_index,
  unpack, write_index_string, IndexParts,
};
pub use indexing::{cell_boundary, geo_to_index, index_to_geo};
pub use metrics::{edge_length_km, edge_length_m, hex_area_km2, hex_area_m2, icosahedron_faces, max_face_count};
pub use topology::{
  are_neighbors, destination_of, directed_edge, edge_boundary, edge_cells, edge_is_valid, edges_from_cell,
  grid_distance, max_kring_size, neighbor, origin_of,
};
pub use types::{CellBoundary, DirectedEdgeIndex, Direction, GeoCoord, GridIndex, Mode};
