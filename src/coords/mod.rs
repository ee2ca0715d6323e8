// src/coords/mod.rs

//! Hexagon coordinate systems: IJK+ on a plane, and IJK+ on an icosahedron
//! face.

pub mod face_ijk;
pub mod ijk;
