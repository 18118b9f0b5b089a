//! Runtime systems for user input and diagnostics.

/// FPS tracking and notification systems for performance monitoring.
///
/// Sends frame rate updates to frontend via RPC and updates native UI overlays.
pub mod fps_tracking;

/// Native keyboard shortcuts for editing galaxy parameters.
#[cfg(not(target_arch = "wasm32"))]
pub mod keyboard_editing;
