use bevy::prelude::*;
use maze::{MazeCollider, PhysicsSink, WallSegment};

// ============================================================================
// Static Collision Space
// ============================================================================

// The demo's physics collaborator: one immovable merged wall volume,
// registered once at startup and read-only per frame afterwards.
#[derive(Resource, Debug, Default)]
pub struct CollisionWorld {
    volume: Option<MazeCollider>,
}

impl PhysicsSink for CollisionWorld {
    fn register_static_volume(&mut self, volume: MazeCollider) {
        self.volume = Some(volume);
    }
}

impl CollisionWorld {
    // Move a body from `current` by `velocity * delta`, sliding along walls:
    // the full move is kept when free, otherwise the blocked axis is dropped
    // and the free axis kept. Both axes blocked leaves the body in place.
    #[must_use]
    pub fn resolve_movement(&self, current: Vec3, velocity: Vec3, delta: f32, half_extent: f32) -> Vec3 {
        let target = Vec3::new(
            velocity.x.mul_add(delta, current.x),
            current.y,
            velocity.z.mul_add(delta, current.z),
        );

        if !self.overlaps(target.x, target.z, half_extent) {
            return target;
        }

        let x_blocked = self.overlaps(target.x, current.z, half_extent);
        let z_blocked = self.overlaps(current.x, target.z, half_extent);
        match (x_blocked, z_blocked) {
            (false, true) => Vec3::new(target.x, current.y, current.z),
            (true, false) => Vec3::new(current.x, current.y, target.z),
            (false, false) => {
                // Each axis alone is free but the diagonal clips a corner;
                // keep the dominant component.
                if velocity.x.abs() > velocity.z.abs() {
                    Vec3::new(target.x, current.y, current.z)
                } else {
                    Vec3::new(current.x, current.y, target.z)
                }
            }
            (true, true) => current,
        }
    }

    #[must_use]
    pub const fn is_registered(&self) -> bool {
        self.volume.is_some()
    }

    // Axis-aligned overlap of the body footprint against any wall segment.
    fn overlaps(&self, x: f32, z: f32, half_extent: f32) -> bool {
        let Some(volume) = &self.volume else {
            return false;
        };

        let half_thickness = volume.thickness / 2.0;
        volume.segments.iter().any(|segment| {
            let (min_x, max_x, min_z, max_z) = segment_bounds(segment, half_thickness);
            ranges_overlap(x - half_extent, x + half_extent, min_x, max_x)
                && ranges_overlap(z - half_extent, z + half_extent, min_z, max_z)
        })
    }
}

// Expand a segment into its wall bounding box: only perpendicular to the run
// direction, not along its length. Segments come in normalized (x1 <= x2,
// z1 <= z2).
fn segment_bounds(segment: &WallSegment, half_thickness: f32) -> (f32, f32, f32, f32) {
    let dx = (segment.x2 - segment.x1).abs();
    let dz = (segment.z2 - segment.z1).abs();
    if dx > dz {
        (
            segment.x1,
            segment.x2,
            segment.z1 - half_thickness,
            segment.z2 + half_thickness,
        )
    } else {
        (
            segment.x1 - half_thickness,
            segment.x2 + half_thickness,
            segment.z1,
            segment.z2,
        )
    }
}

// Check if two 1D ranges overlap.
fn ranges_overlap(a_min: f32, a_max: f32, b_min: f32, b_max: f32) -> bool {
    a_max >= b_min && a_min <= b_max
}

#[cfg(test)]
mod tests {
    use super::*;
    use maze::{MazeLayout, generate};

    fn world_with(segments: Vec<WallSegment>) -> CollisionWorld {
        let mut world = CollisionWorld::default();
        world.register_static_volume(MazeCollider {
            segments,
            half_height: 6.0,
            thickness: 1.0,
        });
        world
    }

    const fn seg(x1: f32, z1: f32, x2: f32, z2: f32) -> WallSegment {
        WallSegment { x1, z1, x2, z2 }
    }

    #[test]
    fn free_movement_integrates_fully() {
        let world = world_with(vec![seg(50.0, -10.0, 50.0, 10.0)]);
        let out = world.resolve_movement(Vec3::ZERO, Vec3::new(2.0, 0.0, 0.0), 0.5, 1.0);
        assert_eq!(out, Vec3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn head_on_wall_blocks_the_axis() {
        // Wall running along Z at x = 2.
        let world = world_with(vec![seg(2.0, -10.0, 2.0, 10.0)]);
        let out = world.resolve_movement(Vec3::ZERO, Vec3::new(10.0, 0.0, 0.0), 0.1, 1.0);
        assert_eq!(out, Vec3::ZERO);
    }

    #[test]
    fn diagonal_into_wall_slides_along_it() {
        let world = world_with(vec![seg(2.0, -10.0, 2.0, 10.0)]);
        let out = world.resolve_movement(Vec3::ZERO, Vec3::new(10.0, 0.0, 3.0), 0.1, 1.0);
        assert_eq!(out, Vec3::new(0.0, 0.0, 0.3));
    }

    #[test]
    fn corner_clip_keeps_dominant_axis() {
        // Wall running along X whose corner sits on the diagonal path.
        let world = world_with(vec![seg(1.5, 2.0, 4.0, 2.0)]);
        let out = world.resolve_movement(Vec3::ZERO, Vec3::new(1.8, 0.0, 1.8), 1.0, 1.0);
        assert_eq!(out, Vec3::new(0.0, 0.0, 1.8));
    }

    #[test]
    fn unregistered_world_blocks_nothing() {
        let world = CollisionWorld::default();
        assert!(!world.is_registered());
        let out = world.resolve_movement(Vec3::ZERO, Vec3::new(5.0, 0.0, 5.0), 1.0, 1.0);
        assert_eq!(out, Vec3::new(5.0, 0.0, 5.0));
    }

    #[test]
    fn generated_maze_boundary_is_solid() {
        let grid = generate(3, 3, Some(4)).unwrap();
        let layout = MazeLayout::build(&grid, 6.0).unwrap();
        let mut world = CollisionWorld::default();
        world.register_static_volume(layout.collider().clone());
        assert!(world.is_registered());

        // Cell (0, 0) always keeps its left boundary wall at x = -6; walking
        // straight at it stops the body.
        let out = world.resolve_movement(Vec3::ZERO, Vec3::new(-100.0, 0.0, 0.0), 0.05, 1.0);
        assert_eq!(out, Vec3::ZERO);
    }
}
