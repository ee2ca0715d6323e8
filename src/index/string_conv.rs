// src/index/string_conv.rs

//! Textual form of indexes: lowercase hexadecimal without prefix or padding.

use std::fmt;
use std::str::FromStr;

use crate::constants::MAX_INDEX_STRING_LEN;
use crate::error::{GridError, Result};
use crate::types::{DirectedEdgeIndex, GridIndex};

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Parses the hexadecimal form of an index.
///
/// Accepts 1 to 16 hex digits of either case. Leading `0x`, signs and
/// whitespace are rejected. No structural validation is done.
pub fn string_to_index(s: &str) -> Result<GridIndex> {
  let fail = |reason| GridError::Parse {
    input: s.to_owned(),
    reason,
  };

  if s.is_empty() {
    return Err(fail("empty input"));
  }
  if !s.bytes().all(|b| b.is_ascii_hexdigit()) {
    return Err(fail("not a hexadecimal number"));
  }
  if s.len() >= MAX_INDEX_STRING_LEN {
    return Err(fail("more than 64 bits"));
  }
  u64::from_str_radix(s, 16)
    .map(GridIndex)
    .map_err(|_| fail("more than 64 bits"))
}

/// Hexadecimal form of an index.
#[must_use]
pub fn index_to_string(h: GridIndex) -> String {
  format!("{:x}", h.0)
}

/// Writes the hexadecimal form into a fixed buffer, followed by a zero
/// terminator, and returns the written text.
pub fn write_index_string(h: GridIndex, buf: &mut [u8; MAX_INDEX_STRING_LEN]) -> &str {
  let mut value = h.0;
  let mut digits = [0_u8; MAX_INDEX_STRING_LEN - 1];
  let mut len = 0;
  loop {
    digits[len] = HEX_DIGITS[(value & 0xf) as usize];
    len += 1;
    value >>= 4;
    if value == 0 {
      break;
    }
  }

  for (slot, digit) in buf.iter_mut().zip(digits[..len].iter().rev()) {
    *slot = *digit;
  }
  buf[len] = 0;
  std::str::from_utf8(&buf[..len]).unwrap_or_default()
}

impl fmt::Display for GridIndex {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{:x}", self.0)
  }
}

impl fmt::LowerHex for GridIndex {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    fmt::LowerHex::fmt(&self.0, f)
  }
}

impl FromStr for GridIndex {
  type Err = GridError;

  fn from_str(s: &str) -> Result<Self> {
    string_to_index(s)
  }
}

impl fmt::Display for DirectedEdgeIndex {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{:x}", self.0)
  }
}

impl fmt::LowerHex for DirectedEdgeIndex {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    fmt::LowerHex::fmt(&self.0, f)
  }
}

impl FromStr for DirectedEdgeIndex {
  type Err = GridError;

  fn from_str(s: &str) -> Result<Self> {
    string_to_index(s).map(|h| DirectedEdgeIndex(h.0))
  }
}
