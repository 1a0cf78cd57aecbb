// ============================================================================
// Camera
// ============================================================================

pub const FPV_CAMERA_FOV_DEGREES: f32 = 90.0; // Field of view in degrees

// Mouse sensitivity as radians per pixel
pub const MOUSE_SENSITIVITY: f32 = 0.002;

// ============================================================================
// Player
// ============================================================================

pub const PLAYER_EYE_HEIGHT: f32 = 3.0; // Camera height above the floor
pub const PLAYER_HALF_EXTENT: f32 = 1.0; // Collision footprint half width

// Speeds (world units per second)
pub const SPEED_WALK: f32 = 12.0;
pub const SPEED_RUN: f32 = 20.0;

// ============================================================================
// Lighting
// ============================================================================

// Dim ambient so the flashlight carries the scene
pub const LIGHT_AMBIENT_BRIGHTNESS: f32 = 40.0;

// Flashlight: long throw with a tight hot spot
pub const FLASHLIGHT_INTENSITY: f32 = 5_000_000.0;
pub const FLASHLIGHT_RANGE: f32 = 75.0;
pub const FLASHLIGHT_INNER_ANGLE_DEGREES: f32 = 5.0;
pub const FLASHLIGHT_OUTER_ANGLE_DEGREES: f32 = 15.0;

// ============================================================================
// Floor
// ============================================================================

pub const FLOOR_TILE_SIZE: f32 = 40.0;
pub const FLOOR_THICKNESS: f32 = 2.0;
