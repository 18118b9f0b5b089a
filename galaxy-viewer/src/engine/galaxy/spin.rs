use crate::engine::galaxy::regenerate::GalaxyPoints;
use bevy::prelude::*;
use constants::render_settings::GALAXY_ANGULAR_SPEED;

pub fn spin_galaxy(time: Res<Time>, mut galaxies: Query<&mut Transform, With<GalaxyPoints>>) {
    let angle = GALAXY_ANGULAR_SPEED * time.delta_secs();
    for mut transform in &mut galaxies {
        transform.rotate_y(angle);
    }
}
