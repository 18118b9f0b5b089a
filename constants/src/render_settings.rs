/// Clear colour behind the galaxy (linear RGB)
pub const BACKGROUND_COLOUR: [f32; 3] = [0.0, 0.0, 0.0];

/// Radians per second the galaxy turns around its vertical axis
pub const GALAXY_ANGULAR_SPEED: f32 = 0.05;

/// Initial orbit camera placement
pub const CAMERA_DISTANCE: f32 = 7.0;
pub const CAMERA_PITCH: f32 = -0.45;
pub const CAMERA_MIN_DISTANCE: f32 = 0.5;
pub const CAMERA_MAX_DISTANCE: f32 = 60.0;

pub const ORBIT_YAW_SENSITIVITY: f32 = 0.0035;
pub const ORBIT_PITCH_SENSITIVITY: f32 = 0.0030;

/// Seconds between FPS notifications sent to the frontend
pub const FPS_NOTIFICATION_INTERVAL: f32 = 0.5;
