use bevy::prelude::*;

use crate::{components::Velocity, markers::PlayerMarker, resources::MazeSettings};

// The player body: no mesh of its own (the demo is first-person only), just a
// transform the camera follows and a velocity the input system drives.
pub fn spawn_player_system(mut commands: Commands, settings: Res<MazeSettings>) {
    commands.spawn((
        PlayerMarker,
        Velocity::default(),
        Transform::from_translation(settings.spawn_point()),
    ));
}
