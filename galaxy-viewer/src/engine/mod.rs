pub mod camera;
pub mod core;
pub mod galaxy;
pub mod loading;
pub mod mesh;
pub mod systems;
