// src/index/validation.rs

//! Structural checks on cell indexes.

use crate::base_cells;
use crate::constants::{MAX_RES, NUM_BASE_CELLS, PER_DIGIT_OFFSET};
use crate::types::{Direction, GridIndex, Mode};

use super::is_class_iii_res;

/// Whether every digit below resolution `res` holds the pad value 7.
#[inline]
fn unused_digits_are_padding(h: GridIndex, res: u8) -> bool {
  if res >= MAX_RES {
    return true;
  }
  // the unused digits are the low bits of the digit field
  let bits = u32::from(MAX_RES - res) * PER_DIGIT_OFFSET;
  let mask = (1_u64 << bits) - 1;
  h.0 & mask == mask
}

/// Whether `h` is a well formed cell index.
///
/// Checks the high bit, mode, reserved bits, resolution and base cell, that
/// the used digits are `0..=6` and the rest are padding, and that a pentagon
/// cell does not start with the deleted k-axes digit.
#[must_use]
pub fn is_valid_index(h: GridIndex) -> bool {
  if h.high_bit() != 0 || h.mode() != Mode::Cell as u8 || h.reserved_bits() != 0 {
    return false;
  }

  let base_cell = h.base_cell();
  if base_cell >= NUM_BASE_CELLS {
    return false;
  }

  let res = h.resolution();
  if res > MAX_RES {
    return false;
  }

  let pentagon = base_cells::is_pentagon(base_cell);
  let mut found_first = false;
  for r in 1..=res {
    let digit = h.digit(r);
    if digit == Direction::Invalid {
      return false;
    }
    if !found_first && digit != Direction::Center {
      found_first = true;
      if pentagon && digit == Direction::K {
        return false;
      }
    }
  }

  unused_digits_are_padding(h, res)
}

/// Whether the cell is a pentagon: a pentagon base cell with all-zero digits.
#[must_use]
pub fn is_pentagon(h: GridIndex) -> bool {
  base_cells::is_pentagon(h.base_cell()) && h.leading_non_zero_digit() == Direction::Center
}

/// Whether the index's resolution is a Class III (odd) resolution.
#[must_use]
pub fn is_class_iii(h: GridIndex) -> bool {
  is_class_iii_res(h.resolution())
}

/// Resolution field of the index.
#[must_use]
pub fn resolution_of(h: GridIndex) -> u8 {
  h.resolution()
}

/// Base cell field of the index.
#[must_use]
pub fn base_cell_of(h: GridIndex) -> u8 {
  h.base_cell()
}

impl GridIndex {
  /// See [`is_valid_index`].
  #[inline]
  #[must_use]
  pub fn is_valid(self) -> bool {
    is_valid_index(self)
  }

  /// See [`is_pentagon`].
  #[inline]
  #[must_use]
  pub fn is_pentagon(self) -> bool {
    is_pentagon(self)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::constants::RESERVED_OFFSET;

  #[test]
  fn test_known_indexes_are_valid() {
    for raw in [0x8928308280fffff_u64, 0x85283473fffffff, 0x8819429a9dfffff, 0x821c07fffffffff] {
      assert!(is_valid_index(GridIndex(raw)), "{raw:x}");
    }
  }

  #[test]
  fn test_every_base_cell_and_resolution() {
    for bc in 0..NUM_BASE_CELLS {
      for res in 0..=MAX_RES {
        assert!(GridIndex::new_cell(res, bc, Direction::Center).is_valid(), "bc {bc} res {res}");
      }
    }
  }

  #[test]
  fn test_rejects_bad_header_fields() {
    let good = GridIndex(0x8928308280fffff);
    assert!(!is_valid_index(GridIndex(good.0 | (1 << 63))));
    assert!(!is_valid_index(GridIndex(good.0 | (1 << RESERVED_OFFSET))));

    let mut edge = good;
    edge.set_mode(Mode::DirectedEdge);
    assert!(!is_valid_index(edge));

    let mut bad_bc = good;
    bad_bc.set_base_cell(NUM_BASE_CELLS);
    assert!(!is_valid_index(bad_bc));
    assert!(!is_valid_index(GridIndex::NULL));
  }

  #[test]
  fn test_rejects_bad_digits() {
    let mut h = GridIndex::new_cell(3, 0, Direction::Center);
    h.set_digit(2, Direction::Invalid);
    assert!(!is_valid_index(h));

    let mut h = GridIndex::new_cell(3, 0, Direction::Center);
    h.set_digit(5, Direction::J);
    assert!(!is_valid_index(h), "digit past the resolution must be padding");
  }

  #[test]
  fn test_rejects_deleted_k_subsequence() {
    let mut h = GridIndex::new_cell(2, 4, Direction::Center);
    h.set_digit(2, Direction::K);
    assert!(!is_valid_index(h));

    // a later k digit is fine
    h.set_digit(1, Direction::J);
    assert!(is_valid_index(h));

    // and any leading k on a hexagon base cell
    let mut hex = GridIndex::new_cell(2, 0, Direction::Center);
    hex.set_digit(1, Direction::K);
    assert!(is_valid_index(hex));
  }

  #[test]
  fn test_is_pentagon() {
    assert!(is_pentagon(GridIndex::new_cell(0, 4, Direction::Center)));
    assert!(GridIndex::new_cell(9, 117, Direction::Center).is_pentagon());
    assert!(!is_pentagon(GridIndex::new_cell(0, 0, Direction::Center)));
    assert!(!is_pentagon(GridIndex(0x8928308280fffff)));

    let mut off_center = GridIndex::new_cell(2, 4, Direction::Center);
    off_center.set_digit(2, Direction::J);
    assert!(!is_pentagon(off_center));
  }

  #[test]
  fn test_simple_decodes() {
    let h = GridIndex(0x8819429a9dfffff);
    assert_eq!(resolution_of(h), 8);
    assert_eq!(base_cell_of(h), 12);
    assert!(!is_class_iii(h));
    assert!(is_class_iii(GridIndex(0x8928308280fffff)));
  }
}
