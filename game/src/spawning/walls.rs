use bevy::prelude::*;
use maze::{SceneSink, WALL_HALF_HEIGHT, WALL_THICKNESS, WallPlacement};

use crate::{markers::WallMarker, physics::CollisionWorld, resources::PendingLayout};

#[derive(Bundle)]
struct WallBundle {
    mesh: Mesh3d,
    material: MeshMaterial3d<StandardMaterial>,
    transform: Transform,
    visibility: Visibility,
    marker: WallMarker,
}

// Scene sink over the bevy world: every placement becomes one wall entity,
// all sharing a single mesh and material.
struct WallSpawner<'a, 'w, 's> {
    commands: &'a mut Commands<'w, 's>,
    mesh: Handle<Mesh>,
    material: Handle<StandardMaterial>,
}

impl SceneSink for WallSpawner<'_, '_, '_> {
    fn attach_wall(&mut self, placement: WallPlacement) {
        self.commands.spawn(WallBundle {
            mesh: Mesh3d(self.mesh.clone()),
            material: MeshMaterial3d(self.material.clone()),
            transform: Transform::from_translation(placement.position)
                .with_rotation(Quat::from_rotation_y(placement.rotation.yaw_radians())),
            visibility: Visibility::default(),
            marker: WallMarker,
        });
    }
}

// Drain the pending layout into the scene and physics sinks. Runs once; the
// layout slot is empty on every later invocation.
pub fn install_maze_system(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut pending: ResMut<PendingLayout>,
    mut collision: ResMut<CollisionWorld>,
) {
    let Some(layout) = pending.take() else {
        return;
    };

    info!(
        "installing maze: {} wall placements, {} collider segments",
        layout.placements().len(),
        layout.collider().segments.len()
    );

    let length = 2.0 * layout.cell_half_size();
    let mesh = meshes.add(Cuboid::new(length, 2.0 * WALL_HALF_HEIGHT, WALL_THICKNESS));
    let material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.6, 0.55, 0.5),
        perceptual_roughness: 0.8,
        ..default()
    });

    let mut scene = WallSpawner {
        commands: &mut commands,
        mesh,
        material,
    };
    layout.install(&mut scene, collision.as_mut());
}
