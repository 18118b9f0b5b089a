//! Startup loading of the galaxy preset.

/// JSON preset asset and the system that turns it into a galaxy editor.
pub mod preset_loader;
