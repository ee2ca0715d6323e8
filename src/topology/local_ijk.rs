// src/topology/local_ijk.rs

//! IJK coordinates of a cell in a frame anchored on a nearby origin cell.
//!
//! The frame is the origin's base cell coordinate system, unfolded across
//! at most one base cell boundary. Pentagons distort the unfolding; the
//! combinations that cannot be unfolded reliably are refused.

use crate::base_cells;
use crate::error::{DomainKind, GridError, Result};
use crate::index::is_class_iii_res;
use crate::types::{CoordIJK, Direction, FaceIJK, GridIndex};

/// Clockwise rotations applied when unfolding a pentagon, indexed by
/// `[leading digit][direction]`. Negative entries cannot occur for valid
/// pentagon cells.
#[rustfmt::skip]
const PENTAGON_ROTATIONS: [[i8; 7]; 7] = [
  [ 0, -1,  0,  0,  0,  0,  0],
  [-1, -1, -1, -1, -1, -1, -1],
  [ 0, -1,  0,  0,  0,  1,  0],
  [ 0, -1,  0,  0,  1,  1,  0],
  [ 0, -1,  0,  5,  0,  0,  0],
  [ 0, -1,  5,  5,  0,  0,  0],
  [ 0, -1,  0,  0,  0,  0,  0],
];

/// Leading digit and direction pairs that cross the deleted subsequence of a
/// pentagon, where the unfolding is not well defined.
#[rustfmt::skip]
const FAILED_DIRECTIONS: [[bool; 7]; 7] = [
  [false, false, false, false, false, false, false],
  [false, false, false, false, false, false, false],
  [false, false, false, false, true,  true,  false],
  [false, false, false, false, true,  false, true ],
  [false, false, true,  true,  false, false, false],
  [false, false, true,  false, false, false, true ],
  [false, false, false, true,  false, true,  false],
];

fn pentagon_rotations(leading: Direction, dir: Direction) -> Result<u8> {
  let (l, d) = (leading as usize, dir as usize);
  if l > 6 || d > 6 || FAILED_DIRECTIONS[l][d] {
    return Err(GridError::from(DomainKind::Pentagon));
  }
  u8::try_from(PENTAGON_ROTATIONS[l][d]).map_err(|_| GridError::from(DomainKind::Pentagon))
}

/// Coordinates of `h` in the local frame of `origin`.
///
/// Fails with [`DomainKind::ResolutionMismatch`] for cells at different
/// resolutions, and with [`DomainKind::Pentagon`] when the base cells are not
/// adjacent or pentagon distortion prevents unfolding.
pub(crate) fn cell_to_local_ijk(origin: GridIndex, h: GridIndex) -> Result<CoordIJK> {
  let res = origin.resolution();
  if res != h.resolution() {
    return Err(GridError::from(DomainKind::ResolutionMismatch));
  }
  let origin_base_cell = origin.base_cell();
  let base_cell = h.base_cell();

  let mut dir = Direction::Center;
  let mut rev_dir = Direction::Center;
  if origin_base_cell != base_cell {
    dir = base_cells::direction_to(origin_base_cell, base_cell);
    if dir == Direction::Invalid {
      return Err(GridError::from(DomainKind::Pentagon));
    }
    rev_dir = base_cells::direction_to(base_cell, origin_base_cell);
    if rev_dir == Direction::Invalid {
      return Err(GridError::from(DomainKind::Pentagon));
    }
  }

  let origin_on_pent = base_cells::is_pentagon(origin_base_cell);
  let index_on_pent = base_cells::is_pentagon(base_cell);

  // undo the rotation into the neighboring base cell's frame
  let mut h = h;
  if dir != Direction::Center {
    let rotations = base_cells::neighbor_rotations(origin_base_cell, dir);
    for _ in 0..rotations {
      if index_on_pent {
        h = h.rotate_pent60_cw();
        rev_dir = rev_dir.rotate60_cw();
        if rev_dir == Direction::K {
          rev_dir = rev_dir.rotate60_cw();
        }
      } else {
        h = h.rotate60_cw();
        rev_dir = rev_dir.rotate60_cw();
      }
    }
  }

  // coordinates relative to the base cell center; the face is irrelevant
  let mut fijk = FaceIJK::default();
  h.apply_digits(&mut fijk);
  let mut coord = fijk.coord;

  if dir != Direction::Center {
    let mut pent_rotations = 0;
    let mut dir_rotations = 0;
    if origin_on_pent {
      dir_rotations = pentagon_rotations(origin.leading_non_zero_digit(), dir)?;
      pent_rotations = dir_rotations;
    } else if index_on_pent {
      let leading = h.leading_non_zero_digit();
      if FAILED_DIRECTIONS[leading as usize][rev_dir as usize] {
        return Err(GridError::from(DomainKind::Pentagon));
      }
      pent_rotations = pentagon_rotations(rev_dir, leading)?;
    }

    for _ in 0..pent_rotations {
      coord = coord.rotate60_cw();
    }

    // offset of the neighboring base cell center, scaled down to `res`
    let mut offset = CoordIJK::default().neighbor(dir);
    for r in 1..=res {
      offset = if is_class_iii_res(r) {
        offset.down_ap7()
      } else {
        offset.down_ap7r()
      };
    }
    for _ in 0..dir_rotations {
      offset = offset.rotate60_cw();
    }

    coord = (coord + offset).normalize();
  } else if origin_on_pent && index_on_pent {
    let rotations = pentagon_rotations(origin.leading_non_zero_digit(), h.leading_non_zero_digit())?;
    for _ in 0..rotations {
      coord = coord.rotate60_cw();
    }
  }

  Ok(coord)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::topology::neighbors::neighbor;

  #[test]
  fn test_origin_is_its_own_anchor() {
    let origin = GridIndex(0x8928308280fffff);
    let a = cell_to_local_ijk(origin, origin).unwrap();
    let b = cell_to_local_ijk(origin, origin).unwrap();
    assert_eq!(a, b);
  }

  #[test]
  fn test_neighbors_are_one_step_away() {
    let origin = GridIndex(0x8928308280fffff);
    let home = cell_to_local_ijk(origin, origin).unwrap();
    for dir in Direction::NEIGHBORS {
      let nb = neighbor(origin, dir).unwrap();
      let ijk = cell_to_local_ijk(origin, nb).unwrap();
      assert_eq!(home.distance(ijk), 1, "{dir:?}");
    }
  }

  #[test]
  fn test_res0_neighbors_unfold() {
    let origin = GridIndex::new_cell(0, 16, Direction::Center);
    for dir in Direction::NEIGHBORS {
      let nb = neighbor(origin, dir).unwrap();
      let ijk = cell_to_local_ijk(origin, nb).unwrap();
      assert_eq!(ijk.distance(CoordIJK::default()), 1);
    }
  }

  #[test]
  fn test_resolution_mismatch() {
    assert_eq!(
      cell_to_local_ijk(GridIndex(0x8928308280fffff), GridIndex(0x85283473fffffff)),
      Err(GridError::from(DomainKind::ResolutionMismatch))
    );
  }

  #[test]
  fn test_distant_base_cells_refused() {
    let a = GridIndex::new_cell(2, 0, Direction::Center);
    let b = GridIndex::new_cell(2, 121, Direction::Center);
    assert_eq!(cell_to_local_ijk(a, b), Err(GridError::from(DomainKind::Pentagon)));
  }

  #[test]
  fn test_failed_direction_table_is_symmetric() {
    for a in 0..7 {
      for b in 0..7 {
        assert_eq!(FAILED_DIRECTIONS[a][b], FAILED_DIRECTIONS[b][a]);
      }
    }
  }
}
