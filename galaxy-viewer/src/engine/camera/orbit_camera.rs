use bevy::input::mouse::MouseScrollUnit;
use bevy::math::EulerRot;
use bevy::{
    input::mouse::{MouseMotion, MouseWheel},
    prelude::*,
};
use constants::render_settings::{
    CAMERA_DISTANCE, CAMERA_MAX_DISTANCE, CAMERA_MIN_DISTANCE, CAMERA_PITCH,
    ORBIT_PITCH_SENSITIVITY, ORBIT_YAW_SENSITIVITY,
};

/// Keeps the camera just short of looking straight down or up.
const MAX_PITCH: f32 = 1.54;

/// Fraction of the distance covered per wheel line.
const ZOOM_PER_LINE: f32 = 0.1;

/// Pixel-unit wheels report far larger deltas than line-unit ones.
const PIXELS_PER_LINE: f32 = 100.0;

#[derive(Resource, Debug, Clone)]
pub struct OrbitCamera {
    pub focus: Vec3,
    pub distance: f32,
    pub yaw: f32,
    pub pitch: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            focus: Vec3::ZERO,
            distance: CAMERA_DISTANCE,
            yaw: 0.0,
            pitch: CAMERA_PITCH,
        }
    }
}

impl OrbitCamera {
    /// Apply a mouse drag in pixels.
    pub fn rotate(&mut self, delta: Vec2) {
        self.yaw -= delta.x * ORBIT_YAW_SENSITIVITY;
        self.pitch = (self.pitch - delta.y * ORBIT_PITCH_SENSITIVITY).clamp(-MAX_PITCH, MAX_PITCH);
    }

    /// Zoom by wheel lines; positive moves closer.
    pub fn zoom(&mut self, lines: f32) {
        let factor = (1.0 - lines * ZOOM_PER_LINE).max(0.1);
        self.distance = (self.distance * factor).clamp(CAMERA_MIN_DISTANCE, CAMERA_MAX_DISTANCE);
    }

    pub fn transform(&self) -> Transform {
        let rotation = Quat::from_euler(EulerRot::YXZ, self.yaw, self.pitch, 0.0);
        let translation = self.focus + rotation * Vec3::new(0.0, 0.0, self.distance);
        Transform::from_translation(translation).looking_at(self.focus, Vec3::Y)
    }
}

/// Right-drag orbits, wheel zooms.
pub fn camera_controller(
    mut orbit: ResMut<OrbitCamera>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: EventReader<MouseMotion>,
    mut mouse_wheel: EventReader<MouseWheel>,
    mut camera_query: Query<&mut Transform, With<Camera3d>>,
) {
    let mut changed = false;

    if mouse_button.pressed(MouseButton::Right) {
        let drag: Vec2 = mouse_motion.read().map(|motion| motion.delta).sum();
        if drag != Vec2::ZERO {
            orbit.rotate(drag);
            changed = true;
        }
    } else {
        mouse_motion.clear();
    }

    for wheel in mouse_wheel.read() {
        let lines = match wheel.unit {
            MouseScrollUnit::Line => wheel.y,
            MouseScrollUnit::Pixel => wheel.y / PIXELS_PER_LINE,
        };
        orbit.zoom(lines);
        changed = true;
    }

    if changed {
        if let Ok(mut transform) = camera_query.single_mut() {
            *transform = orbit.transform();
        }
    }
}
