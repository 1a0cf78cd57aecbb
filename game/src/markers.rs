use bevy::prelude::*;

// ============================================================================
// Player Markers
// ============================================================================

// Marker component for the player body
#[derive(Component)]
pub struct PlayerMarker;

// ============================================================================
// Camera Markers
// ============================================================================

// Marker component for the main camera
#[derive(Component)]
pub struct MainCameraMarker;

// Marker component for the flashlight spot light
#[derive(Component)]
pub struct FlashlightMarker;

// ============================================================================
// World Markers
// ============================================================================

// Marker component for maze walls
#[derive(Component)]
pub struct WallMarker;

// Marker component for floor tiles
#[derive(Component)]
pub struct FloorMarker;
