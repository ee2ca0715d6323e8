// src/hierarchy/mod.rs

//! Parent and child relationships between resolutions, and whole-grid
//! inventories.
#![allow(clippy::module_name_repetitions)]

pub mod catalog;
pub mod parent_child;

pub use catalog::{num_cells_at_resolution, pentagons, res0_cells};
pub use parent_child::{center_child, children, max_children_count, to_parent};
