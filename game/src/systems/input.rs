use bevy::{
    input::mouse::MouseMotion,
    prelude::*,
    window::{CursorGrabMode, CursorOptions},
};

use crate::{
    components::Velocity,
    constants::{MOUSE_SENSITIVITY, SPEED_RUN, SPEED_WALK},
    markers::{MainCameraMarker, PlayerMarker},
};

const MAX_PITCH: f32 = std::f32::consts::FRAC_PI_2 - 0.05;

// Toggle cursor lock with Escape; clicking the window locks it again.
pub fn cursor_toggle_system(
    keyboard: Res<ButtonInput<KeyCode>>,
    mouse: Res<ButtonInput<MouseButton>>,
    mut cursor_options: Single<&mut CursorOptions>,
) {
    if keyboard.just_pressed(KeyCode::Escape) {
        cursor_options.visible = !cursor_options.visible;
        cursor_options.grab_mode = if cursor_options.visible {
            CursorGrabMode::None
        } else {
            CursorGrabMode::Locked
        };
    }

    if mouse.just_pressed(MouseButton::Left) && cursor_options.visible {
        cursor_options.visible = false;
        cursor_options.grab_mode = CursorGrabMode::Locked;
    }
}

// Read mouse and WASD once per frame: mouse look steers the camera, and the
// resulting yaw frames the player's velocity for the movement system.
pub fn input_movement_system(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut mouse_motion: MessageReader<MouseMotion>,
    cursor_options: Single<&CursorOptions>,
    mut player_query: Query<&mut Velocity, With<PlayerMarker>>,
    mut camera_query: Query<&mut Transform, (With<Camera3d>, With<MainCameraMarker>)>,
) {
    // Require a locked cursor before processing movement input.
    let cursor_locked = cursor_options.grab_mode != CursorGrabMode::None;
    if !cursor_locked {
        // Drain pending mouse events and make sure the player stops.
        for _ in mouse_motion.read() {}
        for mut velocity in &mut player_query {
            velocity.0 = Vec3::ZERO;
        }
        return;
    }

    let Ok(mut camera_transform) = camera_query.single_mut() else {
        return;
    };

    // Apply mouse deltas to yaw/pitch, pitch clamped short of straight up.
    let (mut yaw, mut pitch, _roll) = camera_transform.rotation.to_euler(EulerRot::YXZ);
    for motion in mouse_motion.read() {
        yaw = motion.delta.x.mul_add(-MOUSE_SENSITIVITY, yaw);
        pitch = motion.delta.y.mul_add(-MOUSE_SENSITIVITY, pitch);
    }
    pitch = pitch.clamp(-MAX_PITCH, MAX_PITCH);
    camera_transform.rotation = Quat::from_euler(EulerRot::YXZ, yaw, pitch, 0.0);

    // WASD relative to the camera yaw; Shift runs.
    let mut wish = Vec3::ZERO;
    if keyboard.pressed(KeyCode::KeyW) {
        wish.z -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyS) {
        wish.z += 1.0;
    }
    if keyboard.pressed(KeyCode::KeyA) {
        wish.x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) {
        wish.x += 1.0;
    }

    let speed = if keyboard.any_pressed([KeyCode::ShiftLeft, KeyCode::ShiftRight]) {
        SPEED_RUN
    } else {
        SPEED_WALK
    };

    let direction = Quat::from_rotation_y(yaw) * wish.normalize_or_zero();
    for mut velocity in &mut player_query {
        velocity.0 = direction * speed;
    }
}
