// src/index/mod.rs

//! The 64-bit index layout: field access, packing, digit rotation, and the
//! conversion between indexes and face-local IJK coordinates.

#![allow(clippy::cast_possible_truncation)] // masked bit fields always fit

pub mod string_conv;
pub mod validation;

use crate::base_cells::{self, MAX_FACE_COORD};
use crate::constants::{
  BASE_CELL_MASK, BASE_CELL_OFFSET, DIGIT_MASK, HIGH_BIT_MASK, INDEX_INIT, MAX_RES, MODE_MASK, MODE_OFFSET,
  NUM_BASE_CELLS, PER_DIGIT_OFFSET, RESERVED_MASK, RESERVED_OFFSET, RES_MASK, RES_OFFSET,
};
use crate::coords::face_ijk::Overage;
use crate::error::{DomainKind, GridError, Result};
use crate::types::{CoordIJK, Direction, FaceIJK, GridIndex, Mode};

pub use string_conv::{index_to_string, string_to_index, write_index_string};
pub use validation::{base_cell_of, is_class_iii, is_pentagon, is_valid_index, resolution_of};

/// True for the odd resolutions, whose grids are rotated relative to their
/// parents.
#[inline]
#[must_use]
pub const fn is_class_iii_res(res: u8) -> bool {
  res % 2 == 1
}

#[inline]
const fn digit_offset(res: u8) -> u32 {
  (MAX_RES - res) as u32 * PER_DIGIT_OFFSET
}

impl GridIndex {
  /// The zero index; never a valid cell.
  pub const NULL: GridIndex = GridIndex(0);

  #[inline]
  #[must_use]
  pub const fn mode(self) -> u8 {
    ((self.0 & MODE_MASK) >> MODE_OFFSET) as u8
  }

  #[inline]
  #[must_use]
  pub const fn resolution(self) -> u8 {
    ((self.0 & RES_MASK) >> RES_OFFSET) as u8
  }

  #[inline]
  #[must_use]
  pub const fn base_cell(self) -> u8 {
    ((self.0 & BASE_CELL_MASK) >> BASE_CELL_OFFSET) as u8
  }

  /// Reserved field; holds the direction for directed edges.
  #[inline]
  #[must_use]
  pub const fn reserved_bits(self) -> u8 {
    ((self.0 & RESERVED_MASK) >> RESERVED_OFFSET) as u8
  }

  #[inline]
  #[must_use]
  pub const fn high_bit(self) -> u8 {
    ((self.0 & HIGH_BIT_MASK) >> 63) as u8
  }

  /// Digit at resolution `res`, `1..=15`.
  #[inline]
  #[must_use]
  pub const fn digit(self, res: u8) -> Direction {
    Direction::from_bits(self.0 >> digit_offset(res))
  }

  #[inline]
  pub(crate) fn set_mode(&mut self, mode: Mode) {
    self.0 = (self.0 & !MODE_MASK) | ((mode as u64) << MODE_OFFSET);
  }

  #[inline]
  pub(crate) fn set_resolution(&mut self, res: u8) {
    self.0 = (self.0 & !RES_MASK) | (u64::from(res) << RES_OFFSET);
  }

  #[inline]
  pub(crate) fn set_base_cell(&mut self, base_cell: u8) {
    self.0 = (self.0 & !BASE_CELL_MASK) | (u64::from(base_cell) << BASE_CELL_OFFSET);
  }

  #[inline]
  pub(crate) fn set_reserved_bits(&mut self, bits: u8) {
    self.0 = (self.0 & !RESERVED_MASK) | ((u64::from(bits) & 0b111) << RESERVED_OFFSET);
  }

  #[inline]
  pub(crate) fn set_digit(&mut self, res: u8, digit: Direction) {
    let offset = digit_offset(res);
    self.0 = (self.0 & !(DIGIT_MASK << offset)) | ((digit as u64) << offset);
  }

  /// A cell at `res` on `base_cell` with every digit set to `digit`.
  pub(crate) fn new_cell(res: u8, base_cell: u8, digit: Direction) -> GridIndex {
    let mut h = GridIndex(INDEX_INIT);
    h.set_mode(Mode::Cell);
    h.set_resolution(res);
    h.set_base_cell(base_cell);
    for r in 1..=res {
      h.set_digit(r, digit);
    }
    h
  }

  /// First non-center digit, or `Center` when every digit is zero.
  pub(crate) fn leading_non_zero_digit(self) -> Direction {
    (1..=self.resolution())
      .map(|r| self.digit(r))
      .find(|d| *d != Direction::Center)
      .unwrap_or(Direction::Center)
  }

  /// Rotates every digit 60 degrees counter-clockwise.
  pub(crate) fn rotate60_ccw(mut self) -> GridIndex {
    for r in 1..=self.resolution() {
      self.set_digit(r, self.digit(r).rotate60_ccw());
    }
    self
  }

  /// Rotates every digit 60 degrees clockwise.
  pub(crate) fn rotate60_cw(mut self) -> GridIndex {
    for r in 1..=self.resolution() {
      self.set_digit(r, self.digit(r).rotate60_cw());
    }
    self
  }

  /// Counter-clockwise rotation about a pentagon center, stepping over the
  /// deleted k-axes subsequence.
  pub(crate) fn rotate_pent60_ccw(mut self) -> GridIndex {
    let mut found_first = false;
    for r in 1..=self.resolution() {
      self.set_digit(r, self.digit(r).rotate60_ccw());
      if !found_first && self.digit(r) != Direction::Center {
        found_first = true;
        if self.leading_non_zero_digit() == Direction::K {
          self = self.rotate60_ccw();
        }
      }
    }
    self
  }

  /// Clockwise rotation about a pentagon center, stepping over the deleted
  /// k-axes subsequence.
  pub(crate) fn rotate_pent60_cw(mut self) -> GridIndex {
    let mut found_first = false;
    for r in 1..=self.resolution() {
      self.set_digit(r, self.digit(r).rotate60_cw());
      if !found_first && self.digit(r) != Direction::Center {
        found_first = true;
        if self.leading_non_zero_digit() == Direction::K {
          self = self.rotate60_cw();
        }
      }
    }
    self
  }

  /// Encodes face-local coordinates at `res` as a cell index. `None` when the
  /// coordinates do not resolve to a base cell.
  pub(crate) fn from_face_ijk(fijk: &FaceIJK, res: u8) -> Option<GridIndex> {
    let mut h = GridIndex(INDEX_INIT);
    h.set_mode(Mode::Cell);
    h.set_resolution(res);

    if res == 0 {
      let (base_cell, _) = base_cells::from_face_ijk(fijk)?;
      h.set_base_cell(base_cell);
      return Some(h);
    }

    // walk up to resolution 0, recording the digit at each step
    let mut base = *fijk;
    for r in (1..=res).rev() {
      let last = base.coord;
      let center = if is_class_iii_res(r) {
        base.coord = last.up_ap7();
        base.coord.down_ap7()
      } else {
        base.coord = last.up_ap7r();
        base.coord.down_ap7r()
      };
      let digit = (last - center).to_digit();
      if digit == Direction::Invalid {
        return None;
      }
      h.set_digit(r, digit);
    }

    let CoordIJK { i, j, k } = base.coord;
    if i > MAX_FACE_COORD || j > MAX_FACE_COORD || k > MAX_FACE_COORD {
      return None;
    }
    let (base_cell, rotations) = base_cells::from_face_ijk(&base)?;
    h.set_base_cell(base_cell);

    if base_cells::is_pentagon(base_cell) {
      // a leading k digit falls in the deleted subsequence; rotate out of it
      if h.leading_non_zero_digit() == Direction::K {
        h = if base_cells::is_cw_offset(base_cell, base.face) {
          h.rotate60_cw()
        } else {
          h.rotate60_ccw()
        };
      }
      for _ in 0..rotations {
        h = h.rotate_pent60_ccw();
      }
    } else {
      for _ in 0..rotations {
        h = h.rotate60_ccw();
      }
    }
    Some(h)
  }

  /// Face-local coordinates of the cell center, resolved onto the face that
  /// actually contains it.
  pub(crate) fn to_face_ijk(self) -> Result<FaceIJK> {
    let base_cell = self.base_cell();
    if base_cell >= NUM_BASE_CELLS {
      return Err(GridError::from(DomainKind::CellInvalid));
    }
    let pentagon = base_cells::is_pentagon(base_cell);

    let mut h = self;
    if pentagon && h.leading_non_zero_digit() == Direction::IK {
      h = h.rotate60_cw();
    }

    let mut fijk = base_cells::home(base_cell);
    if !h.apply_digits(&mut fijk) {
      return Ok(fijk);
    }

    // the cell may lie on an adjacent face
    let orig = fijk.coord;
    let res = h.resolution();
    let mut adj_res = res;
    if is_class_iii_res(res) {
      fijk.coord = fijk.coord.down_ap7r();
      adj_res += 1;
    }

    let pent_leading_4 = pentagon && h.leading_non_zero_digit() == Direction::I;
    if fijk.adjust_overage_class_ii(adj_res, pent_leading_4, false) == Overage::None {
      if adj_res != res {
        fijk.coord = orig;
      }
      return Ok(fijk);
    }

    if pentagon {
      while fijk.adjust_overage_class_ii(adj_res, false, false) != Overage::None {}
    }
    if adj_res != res {
      fijk.coord = fijk.coord.up_ap7r();
    }
    Ok(fijk)
  }

  /// Applies this index's digits to base cell coordinates already placed in
  /// `fijk`. Returns whether the result may spill onto another face.
  pub(crate) fn apply_digits(self, fijk: &mut FaceIJK) -> bool {
    let res = self.resolution();
    let possible_overage = base_cells::is_pentagon(self.base_cell()) || (res != 0 && fijk.coord != CoordIJK::default());

    for r in 1..=res {
      fijk.coord = if is_class_iii_res(r) {
        fijk.coord.down_ap7()
      } else {
        fijk.coord.down_ap7r()
      };
      fijk.coord = fijk.coord.neighbor(self.digit(r));
    }
    possible_overage
  }
}

/// The fields of an index, as stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexParts {
  pub high_bit: u8,
  pub mode: u8,
  pub reserved: u8,
  pub resolution: u8,
  pub base_cell: u8,
  /// Digits for resolutions 1 through 15.
  pub digits: [Direction; MAX_RES as usize],
}

/// Splits an index into its raw fields. Never fails; no validation is done.
#[must_use]
pub fn unpack(index: GridIndex) -> IndexParts {
  let mut digits = [Direction::Invalid; MAX_RES as usize];
  for (r, digit) in (1..=MAX_RES).zip(digits.iter_mut()) {
    *digit = index.digit(r);
  }
  IndexParts {
    high_bit: index.high_bit(),
    mode: index.mode(),
    reserved: index.reserved_bits(),
    resolution: index.resolution(),
    base_cell: index.base_cell(),
    digits,
  }
}

/// Assembles an index from its fields.
///
/// # Arguments
/// * `mode` - `1` for a cell, `2` for a directed edge.
/// * `resolution` - `0..=15`.
/// * `base_cell` - `0..=121`.
/// * `digits` - One digit per resolution, resolution 1 first. Digits past
///   `resolution` are stored as given.
///
/// # Returns
/// The packed index, or a [`GridError::Encoding`] naming the first field
/// that is out of range.
pub fn pack(mode: u8, resolution: u8, base_cell: u8, digits: &[u8; MAX_RES as usize]) -> Result<GridIndex> {
  let mode = Mode::try_from(mode)?;
  if resolution > MAX_RES {
    return Err(GridError::Encoding {
      field: "resolution",
      value: u64::from(resolution),
    });
  }
  if base_cell >= NUM_BASE_CELLS {
    return Err(GridError::Encoding {
      field: "base cell",
      value: u64::from(base_cell),
    });
  }

  let mut h = GridIndex(0);
  h.set_mode(mode);
  h.set_resolution(resolution);
  h.set_base_cell(base_cell);
  for (r, &digit) in (1..=MAX_RES).zip(digits.iter()) {
    h.set_digit(r, Direction::try_from(digit)?);
  }
  Ok(h)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_field_accessors() {
    let h = GridIndex(0x8928308280fffff);
    assert_eq!(h.mode(), 1);
    assert_eq!(h.resolution(), 9);
    assert_eq!(h.base_cell(), 20);
    assert_eq!(h.reserved_bits(), 0);
    assert_eq!(h.high_bit(), 0);
    assert_eq!(h.digit(10), Direction::Invalid);
  }

  #[test]
  fn test_setters_touch_only_their_field() {
    let mut h = GridIndex::new_cell(5, 12, Direction::Center);
    h.set_digit(3, Direction::IJ);
    h.set_reserved_bits(4);
    assert_eq!(h.resolution(), 5);
    assert_eq!(h.base_cell(), 12);
    assert_eq!(h.digit(3), Direction::IJ);
    assert_eq!(h.digit(2), Direction::Center);
    assert_eq!(h.digit(6), Direction::Invalid);
    assert_eq!(h.reserved_bits(), 4);
    h.set_mode(Mode::DirectedEdge);
    assert_eq!(h.mode(), 2);
  }

  #[test]
  fn test_class_iii_resolutions() {
    assert!(!is_class_iii_res(0));
    assert!(is_class_iii_res(1));
    assert!(is_class_iii_res(15));
    assert!(!is_class_iii_res(8));
  }

  #[test]
  fn test_leading_non_zero_digit() {
    let mut h = GridIndex::new_cell(4, 2, Direction::Center);
    assert_eq!(h.leading_non_zero_digit(), Direction::Center);
    h.set_digit(3, Direction::J);
    h.set_digit(4, Direction::K);
    assert_eq!(h.leading_non_zero_digit(), Direction::J);
  }

  #[test]
  fn test_rotations() {
    let h = GridIndex::new_cell(3, 0, Direction::K);
    let ccw = h.rotate60_ccw();
    assert!((1..=3).all(|r| ccw.digit(r) == Direction::IK));
    assert_eq!(ccw.rotate60_cw(), h);

    let mut six = h;
    for _ in 0..6 {
      six = six.rotate60_cw();
    }
    assert_eq!(six, h);
  }

  #[test]
  fn test_pentagon_rotation_skips_k() {
    // ccw from JK lands on K, which is skipped
    let mut h = GridIndex::new_cell(2, 4, Direction::Center);
    h.set_digit(2, Direction::JK);
    let rotated = h.rotate_pent60_ccw();
    assert_eq!(rotated.leading_non_zero_digit(), Direction::IK);

    let mut h = GridIndex::new_cell(2, 4, Direction::Center);
    h.set_digit(1, Direction::IK);
    assert_eq!(h.rotate_pent60_cw().leading_non_zero_digit(), Direction::JK);
  }

  #[test]
  fn test_face_ijk_round_trip_base_cells() {
    for bc in 0..NUM_BASE_CELLS {
      let h = GridIndex::new_cell(0, bc, Direction::Center);
      let fijk = h.to_face_ijk().unwrap();
      assert_eq!(fijk, base_cells::home(bc));
      assert_eq!(GridIndex::from_face_ijk(&fijk, 0), Some(h));
    }
  }

  #[test]
  fn test_face_ijk_round_trip_fine_cells() {
    for raw in [0x8928308280fffff_u64, 0x85283473fffffff, 0x8819429a9dfffff, 0x821c07fffffffff] {
      let h = GridIndex(raw);
      let fijk = h.to_face_ijk().unwrap();
      assert_eq!(GridIndex::from_face_ijk(&fijk, h.resolution()), Some(h), "{raw:x}");
    }
  }

  #[test]
  fn test_from_face_ijk_out_of_range() {
    let far = FaceIJK::new(0, CoordIJK::new(5, 0, 0));
    assert_eq!(GridIndex::from_face_ijk(&far, 0), None);
  }

  #[test]
  fn test_to_face_ijk_rejects_bad_base_cell() {
    let mut h = GridIndex::new_cell(1, 0, Direction::Center);
    h.set_base_cell(122);
    assert_eq!(h.to_face_ijk(), Err(DomainKind::CellInvalid.into()));
  }

  #[test]
  fn test_pack_unpack() {
    let mut digits = [7_u8; 15];
    digits[..9].copy_from_slice(&[0, 5, 0, 3, 0, 2, 0, 0, 0]);
    let h = pack(1, 9, 20, &digits).unwrap();
    let parts = unpack(h);
    assert_eq!(parts.mode, 1);
    assert_eq!(parts.resolution, 9);
    assert_eq!(parts.base_cell, 20);
    assert_eq!(parts.digits[1], Direction::IK);
    assert_eq!(parts.digits[9], Direction::Invalid);
    assert_eq!(pack(parts.mode, parts.resolution, parts.base_cell, &digits), Ok(h));
  }

  #[test]
  fn test_pack_rejects_out_of_range_fields() {
    let digits = [7_u8; 15];
    assert_eq!(pack(3, 0, 0, &digits), Err(GridError::Encoding { field: "mode", value: 3 }));
    assert_eq!(
      pack(1, 16, 0, &digits),
      Err(GridError::Encoding { field: "resolution", value: 16 })
    );
    assert_eq!(
      pack(1, 0, 122, &digits),
      Err(GridError::Encoding { field: "base cell", value: 122 })
    );
    let mut bad = digits;
    bad[4] = 8;
    assert_eq!(pack(1, 5, 0, &bad), Err(GridError::Encoding { field: "digit", value: 8 }));
  }

  #[test]
  fn test_unpack_is_total() {
    let parts = unpack(GridIndex(u64::MAX));
    assert_eq!(parts.high_bit, 1);
    assert_eq!(parts.mode, 15);
    assert_eq!(parts.base_cell, 127);
    assert!(parts.digits.iter().all(|d| *d == Direction::Invalid));
  }
}
