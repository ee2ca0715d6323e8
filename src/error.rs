// src/error.rs

//! Error types shared by every grid operation.

use std::fmt;

#[cfg(feature = "serde")]
use serde_repr::{Deserialize_repr, Serialize_repr};

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GridError>;

/// The specific reason an argument fell outside its valid domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
#[cfg_attr(feature = "serde", derive(Serialize_repr, Deserialize_repr))]
pub enum DomainKind {
  /// Resolution outside `0..=15`, or an impossible parent resolution.
  Resolution = 1,
  /// Latitude or longitude not finite or out of range.
  LatLng = 2,
  /// Argument is not a valid cell index.
  CellInvalid = 3,
  /// Argument is not a valid directed edge index.
  EdgeInvalid = 4,
  /// Two cells were given at different resolutions.
  ResolutionMismatch = 5,
  /// Two cells that were required to be adjacent are not.
  NotNeighbors = 6,
  /// Pentagon distortion prevented the computation.
  Pentagon = 7,
  /// A count argument was negative.
  Negative = 8,
}

impl fmt::Display for DomainKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let text = match self {
      DomainKind::Resolution => "resolution out of range",
      DomainKind::LatLng => "latitude/longitude out of range",
      DomainKind::CellInvalid => "cell index is not valid",
      DomainKind::EdgeInvalid => "directed edge index is not valid",
      DomainKind::ResolutionMismatch => "cells have different resolutions",
      DomainKind::NotNeighbors => "cells are not neighbors",
      DomainKind::Pentagon => "pentagon distortion could not be resolved",
      DomainKind::Negative => "value must not be negative",
    };
    f.write_str(text)
  }
}

/// Errors produced by grid operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
  /// An argument was outside its valid numeric or structural range.
  #[error("domain error: {0}")]
  Domain(DomainKind),

  /// A field did not fit its slot while packing an index.
  #[error("cannot encode {field} = {value}")]
  Encoding { field: &'static str, value: u64 },

  /// Text could not be read as an index.
  #[error("cannot parse {input:?} as an index: {reason}")]
  Parse { input: String, reason: &'static str },
}

impl GridError {
  /// Returns the domain detail when this is a `Domain` error.
  pub fn domain_kind(&self) -> Option<DomainKind> {
    match self {
      GridError::Domain(kind) => Some(*kind),
      _ => None,
    }
  }
}

impl From<DomainKind> for GridError {
  fn from(kind: DomainKind) -> Self {
    GridError::Domain(kind)
  }
}
