// src/hierarchy/catalog.rs

use crate::base_cells;
use crate::constants::{NUM_BASE_CELLS, NUM_PENTAGONS};
use crate::error::Result;
use crate::types::{check_resolution, Direction, GridIndex};

/// Number of cells at `res`: `2 + 120 * 7^res`.
pub fn num_cells_at_resolution(res: u8) -> Result<u64> {
  check_resolution(res)?;
  Ok(2 + 120 * 7_u64.pow(u32::from(res)))
}

/// The 122 resolution 0 cells, in base cell order.
#[must_use]
pub fn res0_cells() -> Vec<GridIndex> {
  (0..NUM_BASE_CELLS)
    .map(|bc| GridIndex::new_cell(0, bc, Direction::Center))
    .collect()
}

/// The twelve pentagons at `res`, in base cell order.
pub fn pentagons(res: u8) -> Result<Vec<GridIndex>> {
  check_resolution(res)?;
  let mut out = Vec::with_capacity(NUM_PENTAGONS);
  out.extend(
    (0..NUM_BASE_CELLS)
      .filter(|&bc| base_cells::is_pentagon(bc))
      .map(|bc| GridIndex::new_cell(res, bc, Direction::Center)),
  );
  Ok(out)
}
