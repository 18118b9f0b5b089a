use bevy::asset::AssetMetaCheck;
use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::prelude::*;
use bevy_common_assets::json::JsonAssetPlugin;
use constants::render_settings::BACKGROUND_COLOUR;

use crate::engine::camera::orbit_camera::{OrbitCamera, camera_controller};
use crate::engine::core::app_state::{AppState, transition_to_running};
use crate::engine::core::window_config::create_window_config;
use crate::engine::galaxy::GalaxyPlugin;
use crate::engine::loading::preset_loader::{
    GalaxyPreset, PresetLoader, load_preset_system, start_loading,
};
use crate::engine::systems::fps_tracking::fps_notification_system;
use crate::rpc::web_rpc::WebRpcPlugin;

#[cfg(not(target_arch = "wasm32"))]
use crate::engine::core::app_state::FpsText;
#[cfg(not(target_arch = "wasm32"))]
use crate::engine::systems::{
    fps_tracking::fps_text_update_system, keyboard_editing::keyboard_editing_system,
};

pub fn create_app() -> App {
    let mut app = App::new();

    let [r, g, b] = BACKGROUND_COLOUR;
    app.add_plugins(create_default_plugins())
        .init_state::<AppState>()
        .add_plugins(FrameTimeDiagnosticsPlugin::default())
        // Registers GalaxyPreset as a loadable asset type from JSON files.
        .add_plugins(JsonAssetPlugin::<GalaxyPreset>::new(&["json"]))
        .add_plugins(WebRpcPlugin)
        .add_plugins(GalaxyPlugin)
        .insert_resource(ClearColor(Color::linear_rgb(r, g, b)))
        .init_resource::<PresetLoader>()
        .init_resource::<OrbitCamera>();

    app.add_systems(Startup, (setup, start_loading).chain())
        .add_systems(
            Update,
            (load_preset_system, transition_to_running)
                .chain()
                .run_if(in_state(AppState::Loading)),
        );

    let runtime_systems = (camera_controller, fps_notification_system);
    app.add_systems(Update, runtime_systems.run_if(in_state(AppState::Running)));

    // Keyboard editing and the FPS overlay are native only; the web build
    // drives parameters over RPC.
    #[cfg(not(target_arch = "wasm32"))]
    {
        app.add_systems(Update, fps_text_update_system);
        app.add_systems(
            Update,
            keyboard_editing_system.run_if(in_state(AppState::Running)),
        );
    }

    app
}

fn spawn_camera(commands: &mut Commands, orbit: &OrbitCamera) {
    commands.spawn((Camera3d::default(), orbit.transform()));
}

// Startup system that only handles basic initialisation
fn setup(mut commands: Commands, orbit: Res<OrbitCamera>) {
    println!("=== GALAXY VIEWER ===");
    spawn_camera(&mut commands, &orbit);

    #[cfg(not(target_arch = "wasm32"))]
    {
        create_native_overlays(&mut commands);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn create_native_overlays(commands: &mut Commands) {
    commands
        .spawn(Node {
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            ..default()
        })
        .with_children(|parent| {
            parent.spawn((
                Text::new("FPS: "),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(Color::srgb(1., 0., 0.)),
                Node {
                    position_type: PositionType::Absolute,
                    bottom: Val::Px(12.0),
                    right: Val::Px(12.0),
                    ..default()
                },
                FpsText,
            ));
        });
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    DefaultPlugins.set(window_config).set(asset_config)
}
