// src/math/mod.rs

//! Small vector helpers used by the projection code.

pub mod vec2d;
pub mod vec3d;
