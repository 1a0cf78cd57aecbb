use thiserror::Error;

// Failure modes of the maze core. Generation and layout are pure, so none of
// these are retryable; callers abort startup instead of rendering a partial
// maze.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MazeError {
    // Rejected before any generation work starts.
    #[error("maze dimensions must be positive, got {rows}x{cols}")]
    InvalidDimension { rows: usize, cols: usize },

    // Layout needs a positive cell size to place anything.
    #[error("cell half-size must be positive and finite, got {0}")]
    InvalidCellSize(f32),

    // The carve walk ended with unvisited cells left over. The grid graph is
    // always connected, so this signals a bug in the walk, not a user error.
    #[error("carve walk visited {visited} of {expected} cells")]
    IncompleteCarve { visited: usize, expected: usize },
}
