use thiserror::Error;

/// Errors raised while building boards or racing them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PuzzleError {
    /// The grid has no rows.
    #[error("grid is empty")]
    EmptyGrid,
    #[error("row {row} has {len} tiles, expected {dimension}")]
    NotSquare {
        row: usize,
        len: usize,
        dimension: usize,
    },
    #[error("tile {tile} is out of range 0..={max}")]
    TileOutOfRange { tile: u32, max: usize },
    /// `dimension²` labels do not fit in a `u32`.
    #[error("dimension {dimension} is too large")]
    TooLarge { dimension: usize },
    /// A label appears twice; a repeated 0 means two blanks.
    #[error("tile {tile} appears more than once")]
    DuplicateTile { tile: u32 },
    /// No row holds two adjacent non-blank tiles (only possible for 1×1).
    #[error("board has no twin")]
    NoTwin,
    /// Both frontiers ran dry before either reached its goal.
    #[error("both frontiers exhausted without reaching a goal")]
    FrontierExhausted,
}
