// src/topology/edges.rs

//! Directed edges between adjacent cells.
//!
//! An edge index is its origin cell's index with the mode set to
//! [`Mode::DirectedEdge`] and the reserved field holding the direction of the
//! destination.

use crate::error::{DomainKind, GridError, Result};
use crate::indexing::cell_boundary;
use crate::types::{CellBoundary, DirectedEdgeIndex, Direction, GeoCoord, GridIndex, Mode};

use super::neighbors::{direction_for_neighbor, neighbor_rotations};

/// Two boundary vertices closer than this, in radians, are the same vertex.
const VERTEX_MATCH_THRESHOLD: f64 = 0.000_001;

impl DirectedEdgeIndex {
  /// Direction from the origin to the destination, as stored.
  #[inline]
  #[must_use]
  pub fn direction(self) -> Direction {
    Direction::from_bits(u64::from(GridIndex(self.0).reserved_bits()))
  }

  #[inline]
  #[must_use]
  pub fn is_valid(self) -> bool {
    edge_is_valid(self)
  }
}

/// The edge from `origin` to the adjacent `destination`.
///
/// # Arguments
/// * `origin` - The cell the edge leaves.
/// * `destination` - The cell the edge enters.
///
/// # Returns
/// The directed edge index. Fails for invalid cells, with
/// [`DomainKind::ResolutionMismatch`] for cells at different resolutions, and
/// with [`DomainKind::NotNeighbors`] when they do not share an edge.
pub fn directed_edge(origin: GridIndex, destination: GridIndex) -> Result<DirectedEdgeIndex> {
  if !origin.is_valid() || !destination.is_valid() {
    return Err(GridError::from(DomainKind::CellInvalid));
  }
  if origin.resolution() != destination.resolution() {
    return Err(GridError::from(DomainKind::ResolutionMismatch));
  }

  let dir = direction_for_neighbor(origin, destination);
  if dir == Direction::Invalid {
    return Err(GridError::from(DomainKind::NotNeighbors));
  }
  Ok(edge_in_direction(origin, dir))
}

fn edge_in_direction(origin: GridIndex, dir: Direction) -> DirectedEdgeIndex {
  let mut h = origin;
  h.set_mode(Mode::DirectedEdge);
  h.set_reserved_bits(dir as u8);
  DirectedEdgeIndex(h.0)
}

/// Whether `edge` is a well formed directed edge: edge mode, a neighbor
/// direction that exists for its origin, and a valid origin cell.
#[must_use]
pub fn edge_is_valid(edge: DirectedEdgeIndex) -> bool {
  let h = GridIndex(edge.0);
  if h.mode() != Mode::DirectedEdge as u8 {
    return false;
  }
  let dir = edge.direction();
  if !dir.is_neighbor_direction() {
    return false;
  }
  let origin = origin_of(edge);
  if dir == Direction::K && origin.is_pentagon() {
    return false;
  }
  origin.is_valid()
}

/// The origin cell of `edge`. No validation is done.
#[must_use]
pub fn origin_of(edge: DirectedEdgeIndex) -> GridIndex {
  let mut h = GridIndex(edge.0);
  h.set_mode(Mode::Cell);
  h.set_reserved_bits(0);
  h
}

/// The destination cell of `edge`, one step from its origin.
pub fn destination_of(edge: DirectedEdgeIndex) -> Result<GridIndex> {
  if !edge_is_valid(edge) {
    return Err(GridError::from(DomainKind::EdgeInvalid));
  }
  let mut rotations = 0;
  neighbor_rotations(origin_of(edge), edge.direction(), &mut rotations)
}

/// Origin and destination of `edge`.
pub fn edge_cells(edge: DirectedEdgeIndex) -> Result<(GridIndex, GridIndex)> {
  let destination = destination_of(edge)?;
  Ok((origin_of(edge), destination))
}

/// Every edge leaving `cell`: six for a hexagon, five for a pentagon.
pub fn edges_from_cell(cell: GridIndex) -> Result<Vec<DirectedEdgeIndex>> {
  if !cell.is_valid() {
    return Err(GridError::from(DomainKind::CellInvalid));
  }
  let pentagon = cell.is_pentagon();
  Ok(
    Direction::NEIGHBORS
      .into_iter()
      .filter(|&dir| !(pentagon && dir == Direction::K))
      .map(|dir| edge_in_direction(cell, dir))
      .collect(),
  )
}

/// Vertices of the boundary shared by the origin and destination of
/// `edge`, in the origin's winding order.
///
/// Usually two vertices; three when the edge crosses an icosahedron edge.
pub fn edge_boundary(edge: DirectedEdgeIndex) -> Result<CellBoundary> {
  let (origin, destination) = edge_cells(edge)?;
  let from = cell_boundary(origin)?;
  let to = cell_boundary(destination)?;
  let shared = |v: &GeoCoord| to.iter().any(|w| v.almost_equal_threshold(w, VERTEX_MATCH_THRESHOLD));

  let verts = from.as_slice();
  let mut boundary = CellBoundary::default();
  // a shared run may wrap past the last vertex; start it after the gap
  let start = verts
    .iter()
    .enumerate()
    .find(|&(i, v)| !shared(v) && verts.get(i + 1).map_or(shared(&verts[0]), shared))
    .map_or(0, |(i, _)| (i + 1) % verts.len());

  for offset in 0..verts.len() {
    let v = &verts[(start + offset) % verts.len()];
    if shared(v) {
      boundary.push(*v);
    }
  }
  Ok(boundary)
}
