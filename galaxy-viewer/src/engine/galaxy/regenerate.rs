use crate::engine::galaxy::editor::GalaxySettledEvent;
use crate::engine::mesh::point_mesh::{create_point_material, create_point_mesh};
use crate::rpc::web_rpc::WebRpcInterface;
use bevy::prelude::*;
use galaxy_generator::generate;
use galaxy_generator::slot::PointSetSlot;
use serde_json::json;

#[derive(Component)]
pub struct GalaxyPoints;

/// Everything spawned for one displayed galaxy.
#[derive(Debug, Clone)]
pub struct GalaxyHandle {
    pub entity: Entity,
    pub mesh: Handle<Mesh>,
    pub material: Handle<StandardMaterial>,
}

/// The galaxy currently on screen.
#[derive(Resource, Default)]
pub struct CurrentGalaxy {
    slot: PointSetSlot<GalaxyHandle>,
    point_count: usize,
}

impl CurrentGalaxy {
    pub fn point_count(&self) -> usize {
        self.point_count
    }

    /// Number of galaxies displayed so far.
    pub fn generation(&self) -> u64 {
        self.slot.generation()
    }

    pub fn entity(&self) -> Option<Entity> {
        self.slot.current().map(|handle| handle.entity)
    }
}

/// Generate a point set for the latest settled config and swap it in.
///
/// Intermediate settles within a frame are skipped. A failed generation
/// leaves the current galaxy on screen.
pub fn regenerate_galaxy(
    mut commands: Commands,
    mut settled_events: EventReader<GalaxySettledEvent>,
    mut current: ResMut<CurrentGalaxy>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut rpc_interface: ResMut<WebRpcInterface>,
    galaxies: Query<&Transform, With<GalaxyPoints>>,
) {
    let Some(event) = settled_events.read().last() else {
        return;
    };
    let config = &event.config;

    let point_set = match generate(config) {
        Ok(point_set) => point_set,
        Err(err) => {
            warn!("Galaxy generation failed, keeping current galaxy: {}", err);
            rpc_interface.send_notification(
                "generation_failed",
                json!({
                    "error": err.to_string()
                }),
            );
            return;
        }
    };

    // Carry the spin over so regeneration does not snap the rotation back.
    let transform = current
        .slot
        .current()
        .and_then(|previous| galaxies.get(previous.entity).ok())
        .copied()
        .unwrap_or_default();

    let mesh = meshes.add(create_point_mesh(&point_set));
    let material = materials.add(create_point_material());
    let entity = commands
        .spawn((
            Mesh3d(mesh.clone()),
            MeshMaterial3d(material.clone()),
            transform,
            GalaxyPoints,
        ))
        .id();

    let installed = GalaxyHandle {
        entity,
        mesh,
        material,
    };
    if let Some(previous) = current.slot.install(installed) {
        dispose_galaxy(&mut commands, &mut meshes, &mut materials, previous);
    }
    current.point_count = point_set.len();

    let bounds = Some(point_set.bounds()).filter(|bounds| !bounds.is_empty());
    info!(
        "Galaxy generated: {} points, {} branches",
        point_set.len(),
        config.branches
    );
    rpc_interface.send_notification(
        "galaxy_generated",
        json!({
            "point_count": point_set.len(),
            "generation": current.generation(),
            "parameters": config,
            "bounds": bounds,
        }),
    );
}

/// Release the entity and GPU assets of a replaced galaxy.
fn dispose_galaxy(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    galaxy: GalaxyHandle,
) {
    commands.entity(galaxy.entity).despawn();
    meshes.remove(galaxy.mesh.id());
    materials.remove(galaxy.material.id());
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::system::RunSystemOnce;
    use galaxy_generator::GenerationConfig;

    fn galaxy_world() -> World {
        let mut world = World::new();
        world.init_resource::<Events<GalaxySettledEvent>>();
        world.init_resource::<CurrentGalaxy>();
        world.init_resource::<Assets<Mesh>>();
        world.init_resource::<Assets<StandardMaterial>>();
        world.init_resource::<WebRpcInterface>();
        world
    }

    fn settle(world: &mut World, count: i64) {
        world.send_event(GalaxySettledEvent {
            config: GenerationConfig {
                count,
                ..Default::default()
            },
        });
        world.run_system_once(regenerate_galaxy).unwrap();
    }

    fn galaxy_entities(world: &mut World) -> usize {
        world
            .query_filtered::<Entity, With<GalaxyPoints>>()
            .iter(world)
            .count()
    }

    #[test]
    fn settled_config_spawns_galaxy() {
        let mut world = galaxy_world();
        settle(&mut world, 500);

        let current = world.resource::<CurrentGalaxy>();
        assert_eq!(current.point_count(), 500);
        assert_eq!(current.generation(), 1);
        assert!(current.entity().is_some());
        assert_eq!(galaxy_entities(&mut world), 1);
    }

    #[test]
    fn regeneration_replaces_previous_galaxy() {
        let mut world = galaxy_world();
        settle(&mut world, 500);
        let first = world.resource::<CurrentGalaxy>().entity();
        settle(&mut world, 800);

        let current = world.resource::<CurrentGalaxy>();
        assert_eq!(current.point_count(), 800);
        assert_eq!(current.generation(), 2);
        assert_ne!(current.entity(), first);

        assert_eq!(galaxy_entities(&mut world), 1);
        assert_eq!(world.resource::<Assets<Mesh>>().len(), 1);
        assert_eq!(world.resource::<Assets<StandardMaterial>>().len(), 1);
    }

    #[test]
    fn failed_generation_keeps_current_galaxy() {
        let mut world = galaxy_world();
        settle(&mut world, 300);
        let before = world.resource::<CurrentGalaxy>().entity();

        settle(&mut world, -1);

        let current = world.resource::<CurrentGalaxy>();
        assert_eq!(current.entity(), before);
        assert_eq!(current.point_count(), 300);
        assert_eq!(galaxy_entities(&mut world), 1);
    }

    #[test]
    fn no_event_means_no_work() {
        let mut world = galaxy_world();
        world.run_system_once(regenerate_galaxy).unwrap();
        assert_eq!(world.resource::<CurrentGalaxy>().generation(), 0);
        assert_eq!(galaxy_entities(&mut world), 0);
    }
}
