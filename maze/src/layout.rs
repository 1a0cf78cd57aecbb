use bevy_math::Vec3;
use tracing::debug;

use crate::{
    error::MazeError,
    grid::MazeGrid,
    sinks::{PhysicsSink, SceneSink},
};

// ============================================================================
// Wall Dimensions
// ============================================================================

// Walls form a flat-topped corridor of fixed height; only their footprint
// scales with the cell size. Placements put the wall center at half height.
pub const WALL_HALF_HEIGHT: f32 = 6.0;
pub const WALL_THICKNESS: f32 = 1.0;

// Touching collinear segments merge within this tolerance.
const MERGE_EPS: f32 = 0.01;

// ============================================================================
// Placements
// ============================================================================

// Rotation of a wall around the vertical axis. The layout only ever emits the
// two axis-aligned cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WallRotation {
    // Default rotation, the wall runs along the X axis.
    AlongX,
    // Rotated 90 degrees around Y, the wall runs along the Z axis.
    AlongZ,
}

impl WallRotation {
    #[must_use]
    pub const fn yaw_radians(self) -> f32 {
        match self {
            Self::AlongX => 0.0,
            Self::AlongZ => std::f32::consts::FRAC_PI_2,
        }
    }
}

// One wall to instantiate: world position of its center plus its rotation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WallPlacement {
    pub position: Vec3,
    pub rotation: WallRotation,
}

impl WallPlacement {
    // Footprint on the ground plane, half_len to each side of the center
    // along the run axis.
    #[must_use]
    pub fn footprint(&self, half_len: f32) -> WallSegment {
        match self.rotation {
            WallRotation::AlongX => WallSegment {
                x1: self.position.x - half_len,
                z1: self.position.z,
                x2: self.position.x + half_len,
                z2: self.position.z,
            },
            WallRotation::AlongZ => WallSegment {
                x1: self.position.x,
                z1: self.position.z - half_len,
                x2: self.position.x,
                z2: self.position.z + half_len,
            },
        }
    }
}

// ============================================================================
// Collision Volume
// ============================================================================

// Axis-aligned ground footprint of one or more collinear wall placements,
// normalized so x1 <= x2 and z1 <= z2.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WallSegment {
    pub x1: f32,
    pub z1: f32,
    pub x2: f32,
    pub z2: f32,
}

// The whole maze as one immovable collision volume: every placement's
// footprint merged into maximal collinear runs, sharing one half height and
// thickness. Zero mass by construction; built once and never moved.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MazeCollider {
    pub segments: Vec<WallSegment>,
    pub half_height: f32,
    pub thickness: f32,
}

// ============================================================================
// Layout Builder
// ============================================================================

// Maps the abstract grid onto concrete wall placements plus the merged
// collision volume. Cell (row, col) is centered at (2h*col, 0, 2h*row):
// columns grow along +X, rows along +Z.
#[derive(Debug, Clone, PartialEq)]
pub struct MazeLayout {
    placements: Vec<WallPlacement>,
    collider: MazeCollider,
    cell_half_size: f32,
}

impl MazeLayout {
    // Build the full placement sequence for a generated grid. The same grid
    // and half-size produce the same sequence, order and values, every time.
    pub fn build(grid: &MazeGrid, cell_half_size: f32) -> Result<Self, MazeError> {
        if cell_half_size <= 0.0 || !cell_half_size.is_finite() {
            return Err(MazeError::InvalidCellSize(cell_half_size));
        }

        let half = cell_half_size;
        let step = 2.0 * half;
        let y = WALL_HALF_HEIGHT;
        let (rows, cols) = (grid.rows(), grid.cols());

        let mut placements =
            Vec::with_capacity(grid.left_wall_count() + grid.top_wall_count() + rows + cols);

        for row in 0..rows {
            let center_z = step * row as f32;
            for col in 0..cols {
                let center_x = step * col as f32;
                let cell = grid.cell(row, col);

                if cell.has_left_wall {
                    placements.push(WallPlacement {
                        position: Vec3::new(center_x - half, y, center_z),
                        rotation: WallRotation::AlongZ,
                    });
                }
                if cell.has_top_wall {
                    placements.push(WallPlacement {
                        position: Vec3::new(center_x, y, center_z - half),
                        rotation: WallRotation::AlongX,
                    });
                }
                // The right maze boundary is not stored per cell; close it on
                // the last column, one wall per row.
                if col + 1 == cols {
                    placements.push(WallPlacement {
                        position: Vec3::new(center_x + half, y, center_z),
                        rotation: WallRotation::AlongZ,
                    });
                }
            }
        }

        // Close the far edge with one bottom-boundary wall per column.
        let bottom_z = step.mul_add((rows - 1) as f32, half);
        for col in 0..cols {
            placements.push(WallPlacement {
                position: Vec3::new(step * col as f32, y, bottom_z),
                rotation: WallRotation::AlongX,
            });
        }

        let segments = merge_segments(placements.iter().map(|p| p.footprint(half)).collect());
        debug!(
            placements = placements.len(),
            segments = segments.len(),
            "maze layout built"
        );

        Ok(Self {
            placements,
            collider: MazeCollider {
                segments,
                half_height: WALL_HALF_HEIGHT,
                thickness: WALL_THICKNESS,
            },
            cell_half_size,
        })
    }

    #[must_use]
    pub fn placements(&self) -> &[WallPlacement] {
        &self.placements
    }

    #[must_use]
    pub const fn collider(&self) -> &MazeCollider {
        &self.collider
    }

    #[must_use]
    pub const fn cell_half_size(&self) -> f32 {
        self.cell_half_size
    }

    // Hand everything to the host collaborators: one attach call per
    // placement in sequence order, then the merged volume exactly once.
    // Consumes the layout; the collaborators own the geometry afterwards.
    pub fn install(self, scene: &mut impl SceneSink, physics: &mut impl PhysicsSink) {
        for placement in self.placements {
            scene.attach_wall(placement);
        }
        physics.register_static_volume(self.collider);
    }
}

// Merge adjacent collinear segments into maximal runs, keeping perpendicular
// and gapped segments apart.
fn merge_segments(segments: Vec<WallSegment>) -> Vec<WallSegment> {
    let mut along_x = Vec::new();
    let mut along_z = Vec::new();

    for segment in segments {
        if (segment.z1 - segment.z2).abs() < MERGE_EPS {
            along_x.push(segment);
        } else {
            along_z.push(segment);
        }
    }

    along_x.sort_by(|a, b| {
        a.z1.partial_cmp(&b.z1)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.x1.partial_cmp(&b.x1).unwrap_or(std::cmp::Ordering::Equal))
    });
    along_z.sort_by(|a, b| {
        a.x1.partial_cmp(&b.x1)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.z1.partial_cmp(&b.z1).unwrap_or(std::cmp::Ordering::Equal))
    });

    let mut merged = Vec::new();
    merge_line(along_x, true, &mut merged);
    merge_line(along_z, false, &mut merged);
    merged
}

fn merge_line(list: Vec<WallSegment>, is_along_x: bool, out: &mut Vec<WallSegment>) {
    let mut iter = list.into_iter();
    let Some(mut current) = iter.next() else {
        return;
    };

    for segment in iter {
        if is_along_x {
            if (current.z1 - segment.z1).abs() < MERGE_EPS && segment.x1 <= current.x2 + MERGE_EPS {
                current.x2 = current.x2.max(segment.x2);
                continue;
            }
        } else if (current.x1 - segment.x1).abs() < MERGE_EPS && segment.z1 <= current.z2 + MERGE_EPS {
            current.z2 = current.z2.max(segment.z2);
            continue;
        }
        out.push(current);
        current = segment;
    }
    out.push(current);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::generate;

    const fn seg(x1: f32, z1: f32, x2: f32, z2: f32) -> WallSegment {
        WallSegment { x1, z1, x2, z2 }
    }

    #[test]
    fn emits_every_owned_wall_plus_boundaries() {
        let grid = generate(10, 10, Some(3)).unwrap();
        let layout = MazeLayout::build(&grid, 6.0).unwrap();
        let expected = grid.left_wall_count() + grid.top_wall_count() + 10 + 10;
        assert_eq!(layout.placements().len(), expected);
    }

    #[test]
    fn boundary_walls_are_complete() {
        let (rows, cols) = (4, 7);
        let grid = generate(rows, cols, Some(11)).unwrap();
        let layout = MazeLayout::build(&grid, 2.5).unwrap();

        // Right boundary: one AlongZ wall per row at x = 2h*(cols-1) + h.
        let right_x = 5.0f32.mul_add((cols - 1) as f32, 2.5);
        let right = layout
            .placements()
            .iter()
            .filter(|p| p.rotation == WallRotation::AlongZ && (p.position.x - right_x).abs() < 1e-6)
            .count();
        assert_eq!(right, rows);

        // Bottom boundary: one AlongX wall per column at z = 2h*(rows-1) + h.
        let bottom_z = 5.0f32.mul_add((rows - 1) as f32, 2.5);
        let bottom = layout
            .placements()
            .iter()
            .filter(|p| p.rotation == WallRotation::AlongX && (p.position.z - bottom_z).abs() < 1e-6)
            .count();
        assert_eq!(bottom, cols);
    }

    #[test]
    fn layout_is_idempotent() {
        let grid = generate(6, 6, Some(9)).unwrap();
        let first = MazeLayout::build(&grid, 6.0).unwrap();
        let second = MazeLayout::build(&grid, 6.0).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn single_cell_gets_four_boundary_walls() {
        let grid = generate(1, 1, None).unwrap();
        let layout = MazeLayout::build(&grid, 6.0).unwrap();

        // Owned left + top, synthesized right + bottom, no interior walls.
        assert_eq!(layout.placements().len(), 4);
        // Four distinct sides, so nothing merges.
        assert_eq!(layout.collider().segments.len(), 4);
    }

    #[test]
    fn collinear_touching_segments_merge() {
        let merged = merge_segments(vec![
            seg(0.0, 0.0, 4.0, 0.0),
            seg(4.0, 0.0, 8.0, 0.0),
            seg(0.0, 4.0, 4.0, 4.0),
            seg(2.0, -3.0, 2.0, 3.0),
        ]);
        assert_eq!(merged.len(), 3);
        assert!(merged.contains(&seg(0.0, 0.0, 8.0, 0.0)));
        assert!(merged.contains(&seg(0.0, 4.0, 4.0, 4.0)));
        assert!(merged.contains(&seg(2.0, -3.0, 2.0, 3.0)));
    }

    #[test]
    fn gapped_segments_stay_apart() {
        let merged = merge_segments(vec![seg(0.0, 0.0, 4.0, 0.0), seg(6.0, 0.0, 8.0, 0.0)]);
        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn install_hands_over_in_sequence_order() {
        struct RecordingScene(Vec<WallPlacement>);
        impl SceneSink for RecordingScene {
            fn attach_wall(&mut self, placement: WallPlacement) {
                self.0.push(placement);
            }
        }

        struct RecordingPhysics(Option<MazeCollider>);
        impl PhysicsSink for RecordingPhysics {
            fn register_static_volume(&mut self, volume: MazeCollider) {
                self.0 = Some(volume);
            }
        }

        let grid = generate(3, 3, Some(5)).unwrap();
        let layout = MazeLayout::build(&grid, 6.0).unwrap();
        let expected_placements = layout.placements().to_vec();
        let expected_collider = layout.collider().clone();

        let mut scene = RecordingScene(Vec::new());
        let mut physics = RecordingPhysics(None);
        layout.install(&mut scene, &mut physics);

        assert_eq!(scene.0, expected_placements);
        assert_eq!(physics.0, Some(expected_collider));
    }

    #[test]
    fn rejects_non_positive_cell_size() {
        let grid = generate(2, 2, Some(1)).unwrap();
        assert!(matches!(
            MazeLayout::build(&grid, 0.0),
            Err(MazeError::InvalidCellSize(_))
        ));
        assert!(matches!(
            MazeLayout::build(&grid, -1.0),
            Err(MazeError::InvalidCellSize(_))
        ));
    }
}
