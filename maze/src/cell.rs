// ============================================================================
// Maze Cells
// ============================================================================

// A single grid cell. Each cell owns the wall on its left (west) edge and the
// wall on its top (north) edge; the right and bottom maze boundaries are not
// stored per cell and get synthesized by the layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub has_left_wall: bool,
    pub has_top_wall: bool,
    // Carve-walk bookkeeping, meaningless after generation.
    pub(crate) visited: bool,
}

impl Default for Cell {
    // Fresh cells start fully walled and unvisited.
    fn default() -> Self {
        Self {
            has_left_wall: true,
            has_top_wall: true,
            visited: false,
        }
    }
}
