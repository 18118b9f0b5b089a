//! Galaxy lifecycle: parameter editing, regeneration on settle, and spin.
//!
//! Edits flow through [`editor::GalaxyEditor`]. Each settled change becomes
//! a [`editor::GalaxySettledEvent`], which [`regenerate::regenerate_galaxy`]
//! turns into a fresh point mesh, replacing the previous galaxy.

use crate::engine::core::app_state::AppState;
use bevy::prelude::*;

/// Settle-based parameter editing shared by keyboard and RPC input.
pub mod editor;

/// Point set generation and swapping of the displayed galaxy.
pub mod regenerate;

/// Constant rotation of the displayed galaxy.
pub mod spin;

use editor::{GalaxySettledEvent, forward_settled_changes};
use regenerate::{CurrentGalaxy, regenerate_galaxy};
use spin::spin_galaxy;

pub struct GalaxyPlugin;

impl Plugin for GalaxyPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<GalaxySettledEvent>()
            .init_resource::<CurrentGalaxy>()
            .add_systems(
                Update,
                (forward_settled_changes, regenerate_galaxy).chain(),
            )
            .add_systems(Update, spin_galaxy.run_if(in_state(AppState::Running)));
    }
}
