//! Engine-free maze core: randomized depth-first generation, wall layout and
//! the merged static collision volume, handed to the host engine through the
//! narrow sink traits.

mod cell;
mod error;
mod generator;
mod grid;
mod layout;
mod sinks;

pub use cell::Cell;
pub use error::MazeError;
pub use generator::generate;
pub use grid::MazeGrid;
pub use layout::{
    MazeCollider, MazeLayout, WALL_HALF_HEIGHT, WALL_THICKNESS, WallPlacement, WallRotation,
    WallSegment,
};
pub use sinks::{PhysicsSink, SceneSink};
