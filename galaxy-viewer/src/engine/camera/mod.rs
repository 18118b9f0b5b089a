//! Camera control for inspecting the galaxy.

/// Orbit camera circling the galaxy centre with mouse drag and wheel zoom.
pub mod orbit_camera;
