use crate::engine::galaxy::editor::GalaxyEditor;
use bevy::prelude::*;

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub enum AppState {
    #[default]
    Loading,
    Running,
}

#[derive(Component)]
pub struct FpsText;

/// Leave `Loading` once the preset has produced an editor.
pub fn transition_to_running(
    editor: Option<Res<GalaxyEditor>>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if editor.is_some() {
        println!("→ Galaxy parameters ready, transitioning to Running state");
        next_state.set(AppState::Running);
    }
}
