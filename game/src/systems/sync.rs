use bevy::prelude::*;

use crate::{
    constants::PLAYER_EYE_HEIGHT,
    markers::{FlashlightMarker, MainCameraMarker, PlayerMarker},
};

// ============================================================================
// Per-frame Follow Systems
// ============================================================================

// Keep the camera at the player's eye position.
pub fn camera_follow_system(
    player_query: Query<&Transform, (With<PlayerMarker>, Without<MainCameraMarker>)>,
    mut camera_query: Query<&mut Transform, (With<Camera3d>, With<MainCameraMarker>)>,
) {
    let Some(player_transform) = player_query.iter().next() else {
        return;
    };

    for mut camera_transform in &mut camera_query {
        camera_transform.translation = player_transform.translation + Vec3::Y * PLAYER_EYE_HEIGHT;
    }
}

// The flashlight tracks the camera every frame: same position, same aim.
pub fn flashlight_follow_system(
    camera_query: Query<&Transform, (With<MainCameraMarker>, Without<FlashlightMarker>)>,
    mut flashlight_query: Query<&mut Transform, With<FlashlightMarker>>,
) {
    let Ok(camera_transform) = camera_query.single() else {
        return;
    };

    for mut light_transform in &mut flashlight_query {
        light_transform.translation = camera_transform.translation;
        light_transform.rotation = camera_transform.rotation;
    }
}
