use bevy::prelude::*;

// Linear velocity of the player body in world units per second. The input
// system writes it; the movement system integrates it through the collision
// world.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct Velocity(pub Vec3);
