use bevy::prelude::*;
use maze::MazeLayout;

// Maze configuration resolved from the CLI, fixed for the process lifetime.
#[derive(Resource, Debug, Clone, Copy)]
pub struct MazeSettings {
    pub rows: usize,
    pub cols: usize,
    pub cell_half_size: f32,
}

impl MazeSettings {
    // Center of the grid's middle cell; the player spawns here facing along
    // -Z, into the maze.
    #[must_use]
    pub fn spawn_point(&self) -> Vec3 {
        let step = 2.0 * self.cell_half_size;
        Vec3::new(
            step * (self.cols / 2) as f32,
            0.0,
            step * (self.rows / 2) as f32,
        )
    }

    // Footprint of the maze on the ground plane, used to size the floor.
    #[must_use]
    pub fn extent(&self) -> Vec2 {
        let step = 2.0 * self.cell_half_size;
        Vec2::new(step * self.cols as f32, step * self.rows as f32)
    }
}

// Layout waiting to be installed into the scene and physics sinks during the
// startup schedule. Taken exactly once; the slot stays empty afterwards.
#[derive(Resource)]
pub struct PendingLayout(Option<MazeLayout>);

impl PendingLayout {
    #[must_use]
    pub const fn new(layout: MazeLayout) -> Self {
        Self(Some(layout))
    }

    pub fn take(&mut self) -> Option<MazeLayout> {
        self.0.take()
    }
}
