//! Shared defaults and limits for galaxy generation, export and viewing.

/// Default galaxy parameters and the ranges the editors accept.
pub mod galaxy;

/// Viewer presentation settings.
pub mod render_settings;

/// Background particle column defaults.
pub mod scatter;

/// Export texture limits.
pub mod texture;
