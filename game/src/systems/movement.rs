use bevy::prelude::*;

use crate::{
    components::Velocity, constants::PLAYER_HALF_EXTENT, markers::PlayerMarker,
    physics::CollisionWorld,
};

// Integrate the player velocity through the collision world. Wall response is
// sliding, handled entirely by the physics side.
pub fn player_movement_system(
    time: Res<Time>,
    collision: Res<CollisionWorld>,
    mut query: Query<(&mut Transform, &Velocity), With<PlayerMarker>>,
) {
    let delta = time.delta_secs();

    for (mut transform, velocity) in &mut query {
        if velocity.0 == Vec3::ZERO {
            continue;
        }
        transform.translation =
            collision.resolve_movement(transform.translation, velocity.0, delta, PLAYER_HALF_EXTENT);
    }
}
