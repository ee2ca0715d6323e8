// src/topology/neighbors.rs

//! Single-step traversal between adjacent cells.
//!
//! Moving one cell in a direction is digit addition with carry: the digit at
//! the finest resolution absorbs the step, and any carry moves up one
//! resolution until it is absorbed or reaches the base cell.

use crate::base_cells::{self, BASE_CELLS, INVALID_BASE_CELL};
use crate::error::{DomainKind, GridError, Result};
use crate::index::is_class_iii_res;
use crate::types::{Direction, GridIndex};

/// Digit left behind when stepping from child digit `[old]` in direction
/// `[dir]`, for a Class III child resolution.
#[rustfmt::skip]
const SUM_DIGIT_CLASS_III: [[u8; 7]; 7] = [
  [0, 1, 2, 3, 4, 5, 6],
  [1, 4, 3, 6, 5, 2, 0],
  [2, 3, 1, 4, 6, 0, 5],
  [3, 6, 4, 5, 0, 1, 2],
  [4, 5, 6, 0, 2, 3, 1],
  [5, 2, 0, 1, 3, 6, 4],
  [6, 0, 5, 2, 1, 4, 3],
];

/// Direction carried to the parent resolution, Class III child resolution.
#[rustfmt::skip]
const SUM_CARRY_CLASS_III: [[u8; 7]; 7] = [
  [0, 0, 0, 0, 0, 0, 0],
  [0, 1, 0, 1, 0, 5, 0],
  [0, 0, 2, 3, 0, 0, 2],
  [0, 1, 3, 3, 0, 0, 0],
  [0, 0, 0, 0, 4, 4, 6],
  [0, 5, 0, 0, 4, 5, 0],
  [0, 0, 2, 0, 6, 0, 6],
];

/// Digit left behind, Class II child resolution.
#[rustfmt::skip]
const SUM_DIGIT_CLASS_II: [[u8; 7]; 7] = [
  [0, 1, 2, 3, 4, 5, 6],
  [1, 2, 3, 4, 5, 6, 0],
  [2, 3, 4, 5, 6, 0, 1],
  [3, 4, 5, 6, 0, 1, 2],
  [4, 5, 6, 0, 1, 2, 3],
  [5, 6, 0, 1, 2, 3, 4],
  [6, 0, 1, 2, 3, 4, 5],
];

/// Direction carried to the parent resolution, Class II child resolution.
#[rustfmt::skip]
const SUM_CARRY_CLASS_II: [[u8; 7]; 7] = [
  [0, 0, 0, 0, 0, 0, 0],
  [0, 1, 0, 3, 0, 1, 0],
  [0, 0, 2, 2, 0, 0, 6],
  [0, 3, 2, 3, 0, 0, 0],
  [0, 0, 0, 0, 4, 5, 4],
  [0, 1, 0, 0, 5, 5, 0],
  [0, 0, 6, 0, 4, 0, 6],
];

/// Base cells bordering a polar pentagon whose crossing needs no extra
/// rotation.
const POLAR_ENTRY_BASE_CELLS: [u8; 2] = [8, 118];

/// Steps one cell from `origin` in direction `dir`.
///
/// `rotations` is the number of counter-clockwise rotations already applied
/// to the coordinate frame; `dir` is interpreted in that frame. On return it
/// holds the rotations of the neighbor's frame, so a caller walking a path
/// keeps passing the same counter along.
///
/// Fails with [`DomainKind::Pentagon`] when the step would enter the deleted
/// k-axes subsequence of a pentagon, and with [`DomainKind::CellInvalid`] on a
/// malformed index.
pub(crate) fn neighbor_rotations(origin: GridIndex, dir: Direction, rotations: &mut u8) -> Result<GridIndex> {
  if dir == Direction::Invalid {
    return Err(GridError::from(DomainKind::CellInvalid));
  }
  let old_base_cell = origin.base_cell();
  if usize::from(old_base_cell) >= BASE_CELLS.len() {
    return Err(GridError::from(DomainKind::CellInvalid));
  }

  *rotations %= 6;
  let mut dir = dir;
  for _ in 0..*rotations {
    dir = dir.rotate60_ccw();
  }

  let old_leading_digit = origin.leading_non_zero_digit();
  let mut current = origin;
  let mut new_rotations = 0;

  // carry the step up through the digits, possibly into the base cell
  let mut r = current.resolution();
  loop {
    if r == 0 {
      let mut base_cell = base_cells::neighbor(old_base_cell, dir).unwrap_or(INVALID_BASE_CELL);
      new_rotations = base_cells::neighbor_rotations(old_base_cell, dir);
      if base_cell == INVALID_BASE_CELL {
        // the deleted k direction of a pentagon borders the ik neighbor
        base_cell = base_cells::neighbor(old_base_cell, Direction::IK).unwrap_or(INVALID_BASE_CELL);
        new_rotations = base_cells::neighbor_rotations(old_base_cell, Direction::IK);
        current = current.rotate60_ccw();
        *rotations += 1;
      }
      current.set_base_cell(base_cell);
      break;
    }

    let old_digit = current.digit(r);
    if old_digit == Direction::Invalid {
      return Err(GridError::from(DomainKind::CellInvalid));
    }
    let (digits, carries) = if is_class_iii_res(r) {
      (&SUM_DIGIT_CLASS_III, &SUM_CARRY_CLASS_III)
    } else {
      (&SUM_DIGIT_CLASS_II, &SUM_CARRY_CLASS_II)
    };
    let (o, d) = (old_digit as usize, dir as usize);
    current.set_digit(r, Direction::from_bits(u64::from(digits[o][d])));
    let carry = Direction::from_bits(u64::from(carries[o][d]));
    if carry == Direction::Center {
      break;
    }
    dir = carry;
    r -= 1;
  }

  let new_base_cell = current.base_cell();
  if base_cells::is_pentagon(new_base_cell) {
    let mut adjusted_k_subsequence = false;

    if current.leading_non_zero_digit() == Direction::K {
      if old_base_cell == new_base_cell {
        // walked into the deleted subsequence from inside the pentagon
        match old_leading_digit {
          Direction::Center => return Err(GridError::from(DomainKind::Pentagon)),
          Direction::JK => {
            current = current.rotate60_ccw();
            *rotations += 1;
          }
          Direction::IK => {
            current = current.rotate60_cw();
            *rotations += 5;
          }
          _ => return Err(GridError::from(DomainKind::Pentagon)),
        }
      } else {
        let old_face = base_cells::home(old_base_cell).face;
        current = if base_cells::is_cw_offset(new_base_cell, old_face) {
          current.rotate60_cw()
        } else {
          current.rotate60_ccw()
        };
        adjusted_k_subsequence = true;
      }
    }

    for _ in 0..new_rotations {
      current = current.rotate_pent60_ccw();
    }

    if old_base_cell != new_base_cell {
      if base_cells::is_polar_pentagon(new_base_cell) {
        if !POLAR_ENTRY_BASE_CELLS.contains(&old_base_cell) && current.leading_non_zero_digit() != Direction::JK {
          *rotations += 1;
        }
      } else if current.leading_non_zero_digit() == Direction::IK && !adjusted_k_subsequence {
        *rotations += 1;
      }
    }
  } else {
    for _ in 0..new_rotations {
      current = current.rotate60_ccw();
    }
  }

  *rotations = (*rotations + new_rotations) % 6;
  Ok(current)
}

/// The adjacent cell of `cell` in direction `dir`.
///
/// `Direction::Center` yields the cell itself. Stepping along the deleted
/// k-axes of a pentagon fails with [`DomainKind::Pentagon`].
pub fn neighbor(cell: GridIndex, dir: Direction) -> Result<GridIndex> {
  if !cell.is_valid() {
    return Err(GridError::from(DomainKind::CellInvalid));
  }
  if cell.is_pentagon() && dir == Direction::K {
    return Err(GridError::from(DomainKind::Pentagon));
  }
  let mut rotations = 0;
  neighbor_rotations(cell, dir, &mut rotations)
}

/// Direction from `origin` to an adjacent `destination`, or
/// `Direction::Invalid` when they do not touch.
pub(crate) fn direction_for_neighbor(origin: GridIndex, destination: GridIndex) -> Direction {
  let pentagon = origin.is_pentagon();
  Direction::NEIGHBORS
    .into_iter()
    .filter(|&dir| !(pentagon && dir == Direction::K))
    .find(|&dir| {
      let mut rotations = 0;
      neighbor_rotations(origin, dir, &mut rotations).is_ok_and(|nb| nb == destination)
    })
    .unwrap_or(Direction::Invalid)
}

/// Whether two cells share an edge.
///
/// # Arguments
/// * `origin` - A valid cell index.
/// * `destination` - A valid cell index at the resolution of `origin`.
///
/// # Returns
/// `Ok(true)` when the cells are adjacent. A cell is not its own neighbor.
/// Fails with [`DomainKind::CellInvalid`] or
/// [`DomainKind::ResolutionMismatch`].
pub fn are_neighbors(origin: GridIndex, destination: GridIndex) -> Result<bool> {
  if !origin.is_valid() || !destination.is_valid() {
    return Err(GridError::from(DomainKind::CellInvalid));
  }
  if origin.resolution() != destination.resolution() {
    return Err(GridError::from(DomainKind::ResolutionMismatch));
  }
  if origin == destination {
    return Ok(false);
  }

  // siblings under one parent touch when their digits are adjacent around
  // the center
  let res = origin.resolution();
  if res > 0 && same_parent(origin, destination) {
    let a = origin.digit(res);
    let b = destination.digit(res);
    if a == Direction::Center || b == Direction::Center || a.rotate60_cw() == b || a.rotate60_ccw() == b {
      return Ok(true);
    }
  }

  Ok(direction_for_neighbor(origin, destination) != Direction::Invalid)
}

fn same_parent(a: GridIndex, b: GridIndex) -> bool {
  let res = a.resolution();
  (1..res).all(|r| a.digit(r) == b.digit(r)) && a.base_cell() == b.base_cell()
}
