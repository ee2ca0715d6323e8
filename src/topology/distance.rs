// src/topology/distance.rs

//! Grid distance and k-ring sizing.

use std::collections::HashSet;

use crate::base_cells;
use crate::constants::{MAX_RES, MAX_SEARCH_RADIUS, M_SQRT3_2, NUM_CELLS_MAX_RES};
use crate::error::{DomainKind, GridError, Result};
use crate::geometry::great_circle_distance_km;
use crate::indexing::index_to_geo;
use crate::metrics::edge_length_km;
use crate::types::{Direction, GridIndex};

use super::local_ijk::cell_to_local_ijk;
use super::neighbors::neighbor_rotations;

/// Ring radius at which a disk covers every cell at the finest resolution.
const K_ALL_CELLS_AT_MAX_RES: i32 = 13_780_510;

/// Fraction of the average center spacing assumed as the closest spacing
/// anywhere at a resolution.
const MIN_SPACING_RATIO: f64 = 0.5;

/// Maximum number of cells within `k` steps of any cell: `1 + 3k(k + 1)`.
///
/// Fails with [`DomainKind::Negative`] for negative `k`. Radii large enough to
/// cover the globe report the number of cells at the finest resolution.
pub fn max_kring_size(k: i32) -> Result<u64> {
  if k < 0 {
    return Err(GridError::from(DomainKind::Negative));
  }
  if k >= K_ALL_CELLS_AT_MAX_RES {
    return Ok(NUM_CELLS_MAX_RES);
  }
  let k = u64::from(k.unsigned_abs());
  Ok(3 * k * (k + 1) + 1)
}

/// Number of steps between two cells at the same resolution.
///
/// Computed in a local IJK frame anchored on `origin`. That frame is only
/// trusted away from pentagons: when either cell sits on a pentagon base cell,
/// or the frame cannot be unfolded at all, the distance is found by a bounded
/// breadth-first search over neighbors instead. A pentagon base cell pair
/// further apart than the search bound keeps the local answer.
///
/// # Arguments
/// * `origin` - The cell the distance is measured from.
/// * `destination` - A cell at the same resolution as `origin`.
///
/// # Returns
/// The number of neighbor steps on a shortest path. Fails for invalid cells,
/// with [`DomainKind::ResolutionMismatch`] for differing resolutions, and
/// with [`DomainKind::Pentagon`] when no path is found within the search
/// bound.
pub fn grid_distance(origin: GridIndex, destination: GridIndex) -> Result<u64> {
  if !origin.is_valid() || !destination.is_valid() {
    return Err(GridError::from(DomainKind::CellInvalid));
  }
  if origin.resolution() != destination.resolution() {
    return Err(GridError::from(DomainKind::ResolutionMismatch));
  }
  if origin == destination {
    return Ok(0);
  }

  let on_pentagon = base_cells::is_pentagon(origin.base_cell()) || base_cells::is_pentagon(destination.base_cell());
  match local_distance(origin, destination) {
    Ok(distance) if !on_pentagon => Ok(distance),
    Ok(distance) => {
      tracing::debug!(%origin, %destination, distance, "pentagon base cell, checking local distance by search");
      match search_distance(origin, destination) {
        Err(GridError::Domain(DomainKind::Pentagon)) => Ok(distance),
        found => found,
      }
    }
    Err(err) => {
      tracing::debug!(%origin, %destination, %err, "local coordinates unavailable, searching neighbors");
      search_distance(origin, destination)
    }
  }
}

fn local_distance(origin: GridIndex, destination: GridIndex) -> Result<u64> {
  let from = cell_to_local_ijk(origin, origin)?;
  let to = cell_to_local_ijk(origin, destination)?;
  Ok(from.distance(to))
}

/// Upper bound on the ring radius separating two cells, from the distance
/// between their centers.
fn search_radius(origin: GridIndex, destination: GridIndex) -> Result<u64> {
  let res = origin.resolution().min(MAX_RES);
  let spacing = edge_length_km(res)? * 2.0 * M_SQRT3_2 * MIN_SPACING_RATIO;
  let km = great_circle_distance_km(&index_to_geo(origin)?, &index_to_geo(destination)?);

  #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
  let estimate = (km / spacing).ceil() as u64;
  Ok((estimate + 2).min(MAX_SEARCH_RADIUS))
}

fn search_distance(origin: GridIndex, destination: GridIndex) -> Result<u64> {
  let limit = search_radius(origin, destination)?;

  let mut seen = HashSet::from([origin]);
  let mut frontier = vec![origin];
  for ring in 1..=limit {
    let mut next = Vec::with_capacity(frontier.len() * 6);
    for &cell in &frontier {
      for dir in Direction::NEIGHBORS {
        let mut rotations = 0;
        let Ok(nb) = neighbor_rotations(cell, dir, &mut rotations) else {
          continue;
        };
        if nb == destination {
          tracing::trace!(%origin, %destination, ring, "found by search");
          return Ok(ring);
        }
        if seen.insert(nb) {
          next.push(nb);
        }
      }
    }
    frontier = next;
  }

  tracing::debug!(%origin, %destination, limit, "no path within search radius");
  Err(GridError::from(DomainKind::Pentagon))
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::hierarchy::{center_child, pentagons};
  use crate::indexing::geo_to_index;
  use crate::topology::neighbors::neighbor;
  use crate::types::GeoCoord;

  #[test]
  fn test_max_kring_size() {
    assert_eq!(max_kring_size(0), Ok(1));
    assert_eq!(max_kring_size(1), Ok(7));
    assert_eq!(max_kring_size(2), Ok(19));
    assert_eq!(max_kring_size(10), Ok(331));
    assert_eq!(max_kring_size(-1), Err(GridError::from(DomainKind::Negative)));
    assert_eq!(max_kring_size(i32::MAX), Ok(NUM_CELLS_MAX_RES));
  }

  #[test]
  fn test_known_distances() {
    assert_eq!(grid_distance(GridIndex(0x89283082993ffff), GridIndex(0x89283082827ffff)), Ok(5));
    assert_eq!(grid_distance(GridIndex(0x85283473fffffff), GridIndex(0x8528342bfffffff)), Ok(2));
  }

  #[test]
  fn test_distance_to_self_and_neighbors() {
    let sf = GeoCoord::from_degrees(37.779, -122.419).unwrap();
    let origin = geo_to_index(&sf, 5).unwrap();
    assert_eq!(grid_distance(origin, origin), Ok(0));
    for dir in Direction::NEIGHBORS {
      let nb = neighbor(origin, dir).unwrap();
      assert_eq!(grid_distance(origin, nb), Ok(1));
      assert_eq!(grid_distance(nb, origin), Ok(1));
    }
  }

  #[test]
  fn test_distance_walks_in_a_line() {
    let mut cell = GridIndex(0x8928308280fffff);
    let origin = cell;
    let mut rotations = 0;
    for step in 1..=6 {
      cell = neighbor_rotations(cell, Direction::I, &mut rotations).unwrap();
      assert_eq!(grid_distance(origin, cell), Ok(step));
    }
  }

  #[test]
  fn test_distance_around_pentagon() {
    let pent = pentagons(4).unwrap()[3];
    for dir in Direction::NEIGHBORS.into_iter().skip(1) {
      let nb = neighbor(pent, dir).unwrap();
      assert_eq!(grid_distance(pent, nb), Ok(1), "{dir:?}");
      assert_eq!(grid_distance(nb, pent), Ok(1), "{dir:?}");
    }

    // two steps out through different arms of the pentagon
    let a = neighbor(neighbor(pent, Direction::J).unwrap(), Direction::J).unwrap();
    let b = neighbor(neighbor(pent, Direction::I).unwrap(), Direction::I).unwrap();
    let d = grid_distance(a, b).unwrap();
    assert!((2..=4).contains(&d), "{d}");
  }

  #[test]
  fn test_cells_on_pentagon_base_cells() {
    // adjacent cells inside the distorted frame of a pentagon base cell
    for (a, b) in [(0x8108fffffffffff_u64, 0x81097ffffffffff_u64), (0x83314bfffffffff, 0x8330edfffffffff)] {
      let (a, b) = (GridIndex(a), GridIndex(b));
      assert_eq!(crate::topology::neighbors::are_neighbors(a, b), Ok(true), "{a} {b}");
      assert_eq!(grid_distance(a, b), Ok(1), "{a} {b}");
      assert_eq!(grid_distance(b, a), Ok(1), "{b} {a}");
    }

    let from = GridIndex(0x86eb4a6c7ffffff);
    let via = GridIndex(0x86eb4a6d7ffffff);
    let to = GridIndex(0x86eaed96fffffff);
    assert_eq!(grid_distance(from, via), Ok(1));
    assert_eq!(grid_distance(via, to), Ok(1));
    assert_eq!(grid_distance(from, to), Ok(2));
  }

  #[test]
  fn test_search_radius_covers_neighbors() {
    let pent = center_child(GridIndex::new_cell(0, 14, Direction::Center), 6).unwrap();
    let nb = neighbor(pent, Direction::IJ).unwrap();
    let radius = search_radius(pent, nb).unwrap();
    assert!(radius >= 3);
    assert!(great_circle_distance_km(&index_to_geo(pent).unwrap(), &index_to_geo(nb).unwrap()) > 0.0);
    assert_eq!(search_distance(pent, nb), Ok(1));
  }

  #[test]
  fn test_distance_errors() {
    let a = GridIndex(0x85283473fffffff);
    assert_eq!(
      grid_distance(a, GridIndex(0x8928308280fffff)),
      Err(GridError::from(DomainKind::ResolutionMismatch))
    );
    assert_eq!(grid_distance(GridIndex::NULL, a), Err(GridError::from(DomainKind::CellInvalid)));
  }

  #[test]
  fn test_far_cells_exceed_search() {
    let a = GridIndex::new_cell(3, 0, Direction::Center);
    let b = GridIndex::new_cell(3, 121, Direction::Center);
    assert_eq!(grid_distance(a, b), Err(GridError::from(DomainKind::Pentagon)));
  }
}
