use bevy::color::ColorToComponents;
use bevy::prelude::*;
use bevy::{render::mesh::PrimitiveTopology, render::render_asset::RenderAssetUsages};
use galaxy_generator::PointSet;

/// Build a point-list mesh with one vertex per generated point.
/// Gradient colours are sRGB; vertex colours are uploaded as linear RGBA.
pub fn create_point_mesh(point_set: &PointSet) -> Mesh {
    let mut mesh = Mesh::new(PrimitiveTopology::PointList, RenderAssetUsages::RENDER_WORLD);

    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, point_set.positions().to_vec());

    if let Some(colours) = point_set.colours() {
        let vertex_colours: Vec<[f32; 4]> = colours
            .iter()
            .map(|[r, g, b]| Color::srgb(*r, *g, *b).to_linear().to_f32_array())
            .collect();
        mesh.insert_attribute(Mesh::ATTRIBUTE_COLOR, vertex_colours);
    }

    mesh
}

/// Unlit, additively blended material so overlapping points brighten.
pub fn create_point_material() -> StandardMaterial {
    StandardMaterial {
        base_color: Color::WHITE,
        unlit: true,
        alpha_mode: AlphaMode::Add,
        ..default()
    }
}
