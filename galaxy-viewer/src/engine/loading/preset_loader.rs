use crate::engine::galaxy::editor::{GalaxyEditor, GalaxySettledEvent};
use bevy::asset::LoadState;
use bevy::prelude::*;
use constants::galaxy::{COUNT_RANGE, GALAXY_PRESET_PATH};
use galaxy_generator::GenerationConfig;
use galaxy_generator::error::GalaxyError;
use serde::Deserialize;

/// Starting parameters shipped next to the viewer.
#[derive(Asset, TypePath, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct GalaxyPreset {
    pub galaxy: GenerationConfig,
}

#[derive(Resource, Default)]
pub struct PresetLoader {
    handle: Option<Handle<GalaxyPreset>>,
}

// Start the loading process
pub fn start_loading(mut preset_loader: ResMut<PresetLoader>, asset_server: Res<AssetServer>) {
    println!("Loading galaxy preset from: {}", GALAXY_PRESET_PATH);
    preset_loader.handle = Some(asset_server.load(GALAXY_PRESET_PATH));
}

/// Install the galaxy editor once the preset resolves, falling back to the
/// default parameters when it is missing or invalid.
pub fn load_preset_system(
    mut commands: Commands,
    preset_loader: Res<PresetLoader>,
    presets: Res<Assets<GalaxyPreset>>,
    asset_server: Res<AssetServer>,
    editor: Option<Res<GalaxyEditor>>,
    mut settled_events: EventWriter<GalaxySettledEvent>,
) {
    if editor.is_some() {
        return;
    }
    let Some(ref handle) = preset_loader.handle else {
        return;
    };

    let config = if let Some(preset) = presets.get(handle) {
        println!("✓ Galaxy preset loaded");
        preset.galaxy.clone()
    } else if let LoadState::Failed(err) = asset_server.load_state(handle.id()) {
        warn!("Galaxy preset failed to load, using defaults: {}", err);
        GenerationConfig::default()
    } else {
        return;
    };

    match create_editor(config) {
        Ok(editor) => {
            settled_events.write(GalaxySettledEvent {
                config: editor.settled().clone(),
            });
            commands.insert_resource(editor);
        }
        Err(err) => error!("Default galaxy parameters rejected: {}", err),
    }
}

fn create_editor(config: GenerationConfig) -> Result<GalaxyEditor, GalaxyError> {
    check_preset_count(&config)
        .and_then(|()| GalaxyEditor::new(config))
        .or_else(|err| {
            warn!("Galaxy preset is invalid, using defaults: {}", err);
            GalaxyEditor::new(GenerationConfig::default())
        })
}

/// The generator accepts any non-negative count, so the largest count the
/// editors allow also caps what a preset may ask for.
fn check_preset_count(config: &GenerationConfig) -> Result<(), GalaxyError> {
    if config.count > *COUNT_RANGE.end() {
        return Err(GalaxyError::InvalidConfig {
            field: "count",
            reason: format!("{} exceeds {}", config.count, COUNT_RANGE.end()),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preset_fields_default_individually() {
        let preset: GalaxyPreset =
            serde_json::from_str(r#"{"galaxy": {"branches": 5, "spin": -1.0}}"#).unwrap();
        assert_eq!(preset.galaxy.branches, 5);
        assert_eq!(preset.galaxy.spin, -1.0);
        assert_eq!(preset.galaxy.count, GenerationConfig::default().count);

        let empty: GalaxyPreset = serde_json::from_str("{}").unwrap();
        assert_eq!(empty.galaxy, GenerationConfig::default());
    }

    #[test]
    fn invalid_preset_falls_back_to_defaults() {
        let editor = create_editor(GenerationConfig {
            branches: 0,
            ..Default::default()
        })
        .unwrap();
        assert_eq!(editor.settled(), &GenerationConfig::default());
    }

    #[test]
    fn oversized_preset_count_falls_back_to_defaults() {
        let preset: GalaxyPreset =
            serde_json::from_str(r#"{"galaxy": {"count": 1000000000000, "branches": 7}}"#)
                .unwrap();
        let editor = create_editor(preset.galaxy).unwrap();
        assert_eq!(editor.settled(), &GenerationConfig::default());

        let largest = create_editor(GenerationConfig {
            count: *COUNT_RANGE.end(),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(largest.settled().count, *COUNT_RANGE.end());
    }

    #[test]
    fn shipped_preset_parses() {
        let preset: GalaxyPreset =
            serde_json::from_str(include_str!("../../../assets/galaxy.json")).unwrap();
        assert!(preset.galaxy.validate().is_ok());
    }
}
