// src/indexing/from_cell.rs

use crate::error::{DomainKind, GridError, Result};
use crate::types::{CellBoundary, GeoCoord, GridIndex};

/// Center of a cell.
///
/// # Arguments
/// * `cell` - A valid cell index.
///
/// # Returns
/// The cell center in radians, or [`DomainKind::CellInvalid`] for anything
/// that is not a valid cell.
pub fn index_to_geo(cell: GridIndex) -> Result<GeoCoord> {
  if !cell.is_valid() {
    return Err(GridError::from(DomainKind::CellInvalid));
  }
  let fijk = cell.to_face_ijk()?;
  Ok(fijk.to_geo(cell.resolution()))
}

/// Vertices of a cell in counter-clockwise order.
///
/// Hexagons have six vertices and pentagons five; Class III cells gain an
/// extra vertex wherever an edge crosses an icosahedron face edge.
pub fn cell_boundary(cell: GridIndex) -> Result<CellBoundary> {
  if !cell.is_valid() {
    return Err(GridError::from(DomainKind::CellInvalid));
  }
  let fijk = cell.to_face_ijk()?;
  let res = cell.resolution();
  Ok(if cell.is_pentagon() {
    fijk.pent_boundary(res)
  } else {
    fijk.hex_boundary(res)
  })
}
