use bevy::prelude::*;

use crate::{
    constants::{
        FLASHLIGHT_INNER_ANGLE_DEGREES, FLASHLIGHT_INTENSITY, FLASHLIGHT_OUTER_ANGLE_DEGREES,
        FLASHLIGHT_RANGE, FLOOR_THICKNESS, FLOOR_TILE_SIZE, FPV_CAMERA_FOV_DEGREES,
        LIGHT_AMBIENT_BRIGHTNESS, PLAYER_EYE_HEIGHT,
    },
    markers::{FlashlightMarker, FloorMarker, MainCameraMarker},
    resources::MazeSettings,
};

// ============================================================================
// World Setup
// ============================================================================

// Floor, lights, camera and flashlight. The maze walls arrive separately,
// through the scene sink, when the layout is installed.
pub fn setup_world_system(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    settings: Res<MazeSettings>,
) {
    spawn_floor(&mut commands, &mut meshes, &mut materials, &settings);

    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: LIGHT_AMBIENT_BRIGHTNESS,
        affects_lightmapped_meshes: false,
    });

    let eye = settings.spawn_point() + Vec3::Y * PLAYER_EYE_HEIGHT;

    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: FPV_CAMERA_FOV_DEGREES.to_radians(),
            ..default()
        }),
        Transform::from_translation(eye),
        MainCameraMarker,
    ));

    // The flashlight starts at the camera and is re-aimed every frame by the
    // follow system.
    commands.spawn((
        SpotLight {
            color: Color::WHITE,
            intensity: FLASHLIGHT_INTENSITY,
            range: FLASHLIGHT_RANGE,
            inner_angle: FLASHLIGHT_INNER_ANGLE_DEGREES.to_radians(),
            outer_angle: FLASHLIGHT_OUTER_ANGLE_DEGREES.to_radians(),
            shadows_enabled: true,
            ..default()
        },
        Transform::from_translation(eye),
        FlashlightMarker,
    ));
}

// Tile floor slabs under the maze footprint, top face at y = 0.
fn spawn_floor(
    commands: &mut Commands,
    meshes: &mut ResMut<Assets<Mesh>>,
    materials: &mut ResMut<Assets<StandardMaterial>>,
    settings: &MazeSettings,
) {
    let extent = settings.extent();
    let tiles_x = (extent.x / FLOOR_TILE_SIZE).ceil() as i32 + 1;
    let tiles_z = (extent.y / FLOOR_TILE_SIZE).ceil() as i32 + 1;

    let mesh = meshes.add(Cuboid::new(FLOOR_TILE_SIZE, FLOOR_THICKNESS, FLOOR_TILE_SIZE));
    let material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.25, 0.25, 0.28),
        perceptual_roughness: 0.9,
        ..default()
    });

    for i in 0..tiles_z {
        for j in 0..tiles_x {
            commands.spawn((
                Mesh3d(mesh.clone()),
                MeshMaterial3d(material.clone()),
                Transform::from_xyz(
                    FLOOR_TILE_SIZE * j as f32,
                    -FLOOR_THICKNESS / 2.0,
                    FLOOR_TILE_SIZE * i as f32,
                ),
                Visibility::default(),
                FloorMarker,
            ));
        }
    }
}
