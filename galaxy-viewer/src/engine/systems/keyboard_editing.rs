use crate::engine::galaxy::editor::{GalaxyEditor, rejection_payload};
use crate::rpc::web_rpc::WebRpcInterface;
use bevy::prelude::*;
use constants::galaxy::{COUNT_STEP, SPIN_STEP};
use galaxy_generator::GenerationConfig;

/// One keypress moves a hundred editor steps.
const KEY_COUNT_STEP: i64 = COUNT_STEP * 100;
const KEY_SPIN_STEP: f32 = SPIN_STEP * 100.0;

const EDIT_KEYS: [KeyCode; 6] = [
    KeyCode::BracketLeft,
    KeyCode::BracketRight,
    KeyCode::Minus,
    KeyCode::Equal,
    KeyCode::Comma,
    KeyCode::Period,
];

/// A single keypress worth of parameter change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum KeyEdit {
    Branches(i64),
    Spin(f32),
    Count(i64),
}

impl KeyEdit {
    pub fn for_key(key: KeyCode) -> Option<Self> {
        match key {
            KeyCode::BracketLeft => Some(Self::Branches(-1)),
            KeyCode::BracketRight => Some(Self::Branches(1)),
            KeyCode::Minus => Some(Self::Spin(-KEY_SPIN_STEP)),
            KeyCode::Equal => Some(Self::Spin(KEY_SPIN_STEP)),
            KeyCode::Comma => Some(Self::Count(-KEY_COUNT_STEP)),
            KeyCode::Period => Some(Self::Count(KEY_COUNT_STEP)),
            _ => None,
        }
    }

    pub fn apply(self, config: &mut GenerationConfig) {
        match self {
            Self::Branches(step) => config.branches += step,
            Self::Spin(step) => config.spin += step,
            Self::Count(step) => config.count += step,
        }
    }
}

/// Stage edits while keys are held and settle when one is released,
/// so holding a key produces a single regeneration.
pub fn keyboard_editing_system(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut editor: ResMut<GalaxyEditor>,
    mut rpc_interface: ResMut<WebRpcInterface>,
) {
    for key in keyboard.get_just_pressed() {
        if let Some(edit) = KeyEdit::for_key(*key) {
            editor.stage(|config| edit.apply(config));
        }
    }

    if keyboard.any_just_released(EDIT_KEYS) && editor.is_dirty() {
        match editor.settle() {
            Ok(true) => {
                let settled = editor.settled();
                println!(
                    "Galaxy parameters: {} points, {} branches, spin {:.2}",
                    settled.count, settled.branches, settled.spin
                );
            }
            Ok(false) => {}
            Err(err) => {
                let payload = rejection_payload(&err, editor.settled());
                rpc_interface.send_notification("parameters_rejected", payload);
            }
        }
    }

    if keyboard.just_pressed(KeyCode::KeyR) {
        println!("Regenerating galaxy");
        editor.regenerate();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::system::RunSystemOnce;

    fn editing_world() -> World {
        let mut world = World::new();
        world.init_resource::<ButtonInput<KeyCode>>();
        world.init_resource::<WebRpcInterface>();
        world.insert_resource(GalaxyEditor::new(GenerationConfig::default()).unwrap());
        world
    }

    fn press(world: &mut World, key: KeyCode) {
        let mut input = world.resource_mut::<ButtonInput<KeyCode>>();
        input.clear();
        input.press(key);
        world.run_system_once(keyboard_editing_system).unwrap();
    }

    fn release(world: &mut World, key: KeyCode) {
        let mut input = world.resource_mut::<ButtonInput<KeyCode>>();
        input.clear();
        input.release(key);
        world.run_system_once(keyboard_editing_system).unwrap();
    }

    #[test]
    fn keys_map_to_edits() {
        assert_eq!(
            KeyEdit::for_key(KeyCode::BracketRight),
            Some(KeyEdit::Branches(1))
        );
        assert_eq!(
            KeyEdit::for_key(KeyCode::Comma),
            Some(KeyEdit::Count(-KEY_COUNT_STEP))
        );
        assert_eq!(KeyEdit::for_key(KeyCode::KeyQ), None);
    }

    #[test]
    fn edit_settles_on_release() {
        let mut world = editing_world();
        press(&mut world, KeyCode::BracketRight);
        {
            let editor = world.resource::<GalaxyEditor>();
            assert_eq!(editor.pending().branches, 4);
            assert_eq!(editor.settled().branches, 3);
        }

        release(&mut world, KeyCode::BracketRight);
        let editor = world.resource::<GalaxyEditor>();
        assert_eq!(editor.settled().branches, 4);
        assert_eq!(editor.take_settled().len(), 1);
    }

    #[test]
    fn out_of_range_release_is_rejected() {
        let mut world = editing_world();
        world
            .resource_mut::<GalaxyEditor>()
            .apply(|config| config.branches = 1)
            .unwrap();
        world.resource::<GalaxyEditor>().take_settled();

        press(&mut world, KeyCode::BracketLeft);
        release(&mut world, KeyCode::BracketLeft);

        let editor = world.resource::<GalaxyEditor>();
        assert_eq!(editor.settled().branches, 1);
        assert!(!editor.is_dirty());
        assert!(editor.take_settled().is_empty());
    }

    #[test]
    fn r_forces_regeneration() {
        let mut world = editing_world();
        press(&mut world, KeyCode::KeyR);
        assert_eq!(world.resource::<GalaxyEditor>().take_settled().len(), 1);
    }
}
