//! Mesh construction for generated point sets.

/// Point-list mesh and additive material for a galaxy point set.
pub mod point_mesh;
