//! Procedural point-cloud generation for spiral galaxies and particle columns.
//!
//! [`generator::generate`] is the core: a pure function from a
//! [`GenerationConfig`] to a fresh [`PointSet`]. The remaining modules are
//! the state a caller needs around it ([`slot::PointSetSlot`],
//! [`editor::ConfigEditor`]) and persistence of generated sets.

pub mod bounds;
pub mod colour;
pub mod config;
pub mod dds_writer;
pub mod editor;
pub mod error;
pub mod export;
pub mod generator;
pub mod manifest;
pub mod point_set;
pub mod scatter;
pub mod slot;

pub use colour::Colour;
pub use config::GenerationConfig;
pub use error::{GalaxyError, Result};
pub use generator::{generate, generate_with_rng};
pub use point_set::PointSet;
