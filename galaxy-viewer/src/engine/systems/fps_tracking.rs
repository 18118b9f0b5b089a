use crate::rpc::web_rpc::WebRpcInterface;
use bevy::diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin};
use bevy::prelude::*;
use constants::render_settings::FPS_NOTIFICATION_INTERVAL;

#[cfg(not(target_arch = "wasm32"))]
use crate::engine::core::app_state::FpsText;
#[cfg(not(target_arch = "wasm32"))]
use crate::engine::galaxy::regenerate::CurrentGalaxy;

/// Smoothed frame rate, if the diagnostic has samples yet.
pub fn smoothed_fps(diagnostics: &DiagnosticsStore) -> Option<f64> {
    diagnostics
        .get(&FrameTimeDiagnosticsPlugin::FPS)
        .and_then(|fps| fps.smoothed())
}

pub fn fps_notification_system(
    mut rpc_interface: ResMut<WebRpcInterface>,
    diagnostics: Res<DiagnosticsStore>,
    mut last_send_time: Local<f32>,
    time: Res<Time>,
) {
    let current_time = time.elapsed_secs();

    if current_time - *last_send_time >= FPS_NOTIFICATION_INTERVAL {
        if let Some(value) = smoothed_fps(&diagnostics) {
            rpc_interface.send_notification(
                "fps_update",
                serde_json::json!({
                    "fps": value as f32
                }),
            );
            *last_send_time = current_time;
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn fps_text_update_system(
    diagnostics: Res<DiagnosticsStore>,
    current: Res<CurrentGalaxy>,
    mut query: Query<&mut Text, With<FpsText>>,
) {
    let Some(value) = smoothed_fps(&diagnostics) else {
        return;
    };
    for mut text in &mut query {
        text.0 = format!("FPS: {value:.1} | {} points", current.point_count());
    }
}
