use crate::layout::{MazeCollider, WallPlacement};

// ============================================================================
// Host Engine Boundary
// ============================================================================

// The core's only outward edges. The host scene graph receives one attach
// call per wall placement and the physics space receives the merged static
// volume exactly once; the core never holds references back into engine
// objects.

pub trait SceneSink {
    fn attach_wall(&mut self, placement: WallPlacement);
}

pub trait PhysicsSink {
    fn register_static_volume(&mut self, volume: MazeCollider);
}
