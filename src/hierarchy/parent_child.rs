// src/hierarchy/parent_child.rs

use crate::constants::MAX_RES;
use crate::error::{DomainKind, GridError, Result};
use crate::types::{Direction, GridIndex};

fn check_cell(h: GridIndex) -> Result<()> {
  if h.is_valid() {
    Ok(())
  } else {
    Err(GridError::from(DomainKind::CellInvalid))
  }
}

/// Finer resolutions reachable from `h`, including its own.
fn check_child_res(h: GridIndex, child_res: u8) -> Result<()> {
  if child_res < h.resolution() || child_res > MAX_RES {
    return Err(GridError::from(DomainKind::Resolution));
  }
  Ok(())
}

/// The ancestor of `h` at `parent_res`.
///
/// # Arguments
/// * `h` - A valid cell index.
/// * `parent_res` - The resolution of the ancestor, no finer than `h`.
///
/// # Returns
/// The parent cell. Fails for an invalid cell, or with
/// [`DomainKind::Resolution`] when `parent_res` is finer than the cell.
pub fn to_parent(h: GridIndex, parent_res: u8) -> Result<GridIndex> {
  check_cell(h)?;
  let res = h.resolution();
  if parent_res > res {
    return Err(GridError::from(DomainKind::Resolution));
  }

  let mut parent = h;
  parent.set_resolution(parent_res);
  for r in (parent_res + 1)..=res {
    parent.set_digit(r, Direction::Invalid);
  }
  Ok(parent)
}

/// Upper bound on the number of descendants of `h` at `child_res`: `7^n`
/// for `n` resolutions down, `0` when `child_res` is coarser than the cell.
/// Pentagons have fewer; [`children`] returns the exact set.
pub fn max_children_count(h: GridIndex, child_res: u8) -> Result<u64> {
  check_cell(h)?;
  if child_res > MAX_RES {
    return Err(GridError::from(DomainKind::Resolution));
  }
  let res = h.resolution();
  if child_res < res {
    return Ok(0);
  }
  Ok(7_u64.pow(u32::from(child_res - res)))
}

/// The descendant of `h` at `child_res` sharing its center.
pub fn center_child(h: GridIndex, child_res: u8) -> Result<GridIndex> {
  check_cell(h)?;
  check_child_res(h, child_res)?;

  let mut child = h;
  child.set_resolution(child_res);
  for r in (h.resolution() + 1)..=child_res {
    child.set_digit(r, Direction::Center);
  }
  Ok(child)
}

/// Every descendant of `h` at `child_res`. Pentagons have no child in the
/// k direction, so a pentagon's list is shorter than [`max_children_count`].
pub fn children(h: GridIndex, child_res: u8) -> Result<Vec<GridIndex>> {
  check_cell(h)?;
  check_child_res(h, child_res)?;

  let mut cells = vec![h];
  for r in (h.resolution() + 1)..=child_res {
    let mut next = Vec::with_capacity(cells.len() * 7);
    for cell in cells {
      let pentagon = cell.is_pentagon();
      let mut child = cell;
      child.set_resolution(r);
      for digit in (0..7).map(Direction::from_bits) {
        if pentagon && digit == Direction::K {
          continue;
        }
        child.set_digit(r, digit);
        next.push(child);
      }
    }
    cells = next;
  }
  Ok(cells)
}
