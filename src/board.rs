use rand::{seq::SliceRandom, Rng};
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::PuzzleError;

/// Label of the empty cell.
pub const BLANK: u32 = 0;

/// Direction in which the blank travels during a slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Neighbor generation order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn as_offset(&self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            Direction::Up => "Up",
            Direction::Down => "Down",
            Direction::Left => "Left",
            Direction::Right => "Right",
        };
        write!(f, "{}", s)
    }
}

/// An immutable n×n arrangement of tiles.
///
/// Both heuristics and the blank position are computed once when the board is
/// built; no method mutates a board after that. Equality and hashing look at
/// the grid only.
#[derive(Debug, Clone)]
pub struct Board {
    size: usize,
    /// Row-major tile labels, `BLANK` for the empty cell.
    tiles: Box<[u32]>,
    blank_row: usize,
    blank_col: usize,
    hamming: usize,
    manhattan: usize,
}

impl Board {
    /// Builds a board from its rows.
    ///
    /// The grid must be non-empty and square, and hold each label of
    /// `0..n²` exactly once.
    pub fn new<R: AsRef<[u32]>>(rows: &[R]) -> Result<Self, PuzzleError> {
        let size = rows.len();
        if size == 0 {
            return Err(PuzzleError::EmptyGrid);
        }

        if let Some((row, values)) = rows
            .iter()
            .enumerate()
            .find(|(_, values)| values.as_ref().len() != size)
        {
            return Err(PuzzleError::NotSquare {
                row,
                len: values.as_ref().len(),
                dimension: size,
            });
        }

        let cells = cell_count(size)?;
        let mut seen = vec![false; cells];
        let mut tiles = Vec::with_capacity(cells);

        for values in rows {
            for &tile in values.as_ref() {
                let slot = tile as usize;
                if slot >= cells {
                    return Err(PuzzleError::TileOutOfRange {
                        tile,
                        max: cells - 1,
                    });
                }
                if seen[slot] {
                    return Err(PuzzleError::DuplicateTile { tile });
                }
                seen[slot] = true;
                tiles.push(tile);
            }
        }

        Ok(Self::from_tiles(size, tiles.into_boxed_slice()))
    }

    /// The solved board: `1..n²-1` in row-major order with the blank last.
    pub fn goal(size: usize) -> Result<Self, PuzzleError> {
        if size == 0 {
            return Err(PuzzleError::EmptyGrid);
        }
        let cells = cell_count(size)? as u32;
        let tiles: Box<[u32]> = (1..cells).chain(std::iter::once(BLANK)).collect();
        Ok(Self::from_tiles(size, tiles))
    }

    /// A uniformly shuffled board. Roughly half of these are unsolvable.
    pub fn random<G: Rng + ?Sized>(size: usize, rng: &mut G) -> Result<Self, PuzzleError> {
        let goal = Self::goal(size)?;
        let mut tiles = goal.tiles;
        tiles.shuffle(rng);
        Ok(Self::from_tiles(size, tiles))
    }

    /// Caller guarantees `tiles` is a permutation of `0..size²`.
    fn from_tiles(size: usize, tiles: Box<[u32]>) -> Self {
        let mut blank_row = 0;
        let mut blank_col = 0;
        let mut hamming = 0;
        let mut manhattan = 0;

        for (index, &tile) in tiles.iter().enumerate() {
            let (row, col) = (index / size, index % size);
            if tile == BLANK {
                blank_row = row;
                blank_col = col;
                continue;
            }
            let goal = tile as usize - 1;
            if goal != index {
                hamming += 1;
                manhattan += (goal / size).abs_diff(row) + (goal % size).abs_diff(col);
            }
        }

        Self {
            size,
            tiles,
            blank_row,
            blank_col,
            hamming,
            manhattan,
        }
    }

    pub fn dimension(&self) -> usize {
        self.size
    }

    /// Number of tiles out of place.
    pub fn hamming(&self) -> usize {
        self.hamming
    }

    /// Sum of the L1 distances of every tile from its goal cell.
    pub fn manhattan(&self) -> usize {
        self.manhattan
    }

    /// `(row, col)` of the blank.
    pub fn blank(&self) -> (usize, usize) {
        (self.blank_row, self.blank_col)
    }

    pub fn tile(&self, row: usize, col: usize) -> Option<u32> {
        if row >= self.size || col >= self.size {
            return None;
        }
        Some(self.tiles[self.index(row, col)])
    }

    pub fn is_goal(&self) -> bool {
        self.manhattan == 0
    }

    /// Moves the blank one cell in `direction`, or `None` at the border.
    pub fn slide(&self, direction: Direction) -> Option<Board> {
        let (dr, dc) = direction.as_offset();
        let row = self.blank_row.checked_add_signed(dr)?;
        let col = self.blank_col.checked_add_signed(dc)?;
        if row >= self.size || col >= self.size {
            return None;
        }

        let mut tiles = self.tiles.clone();
        tiles.swap(self.index(self.blank_row, self.blank_col), self.index(row, col));
        Some(Self::from_tiles(self.size, tiles))
    }

    /// Boards one slide away, in `Direction::ALL` order.
    pub fn neighbors(&self) -> impl Iterator<Item = Board> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(move |direction| self.slide(direction))
    }

    /// Swaps the first horizontally adjacent pair of non-blank tiles,
    /// scanning rows top to bottom.
    ///
    /// Exactly one of a board and its twin can reach the goal.
    pub fn twin(&self) -> Result<Board, PuzzleError> {
        for row in 0..self.size {
            for col in 0..self.size - 1 {
                let left = self.index(row, col);
                let right = left + 1;
                if self.tiles[left] != BLANK && self.tiles[right] != BLANK {
                    let mut tiles = self.tiles.clone();
                    tiles.swap(left, right);
                    return Ok(Self::from_tiles(self.size, tiles));
                }
            }
        }
        Err(PuzzleError::NoTwin)
    }

    fn index(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }
}

/// `size²`, provided every label fits in a `u32`.
fn cell_count(size: usize) -> Result<usize, PuzzleError> {
    size.checked_mul(size)
        .filter(|&cells| u32::try_from(cells).is_ok())
        .ok_or(PuzzleError::TooLarge { dimension: size })
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.tiles == other.tiles
    }
}

impl Eq for Board {}

impl Hash for Board {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.size.hash(state);
        self.tiles.hash(state);
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.size)?;
        for row in self.tiles.chunks(self.size) {
            for &val in row {
                write!(f, "{:2} ", val)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
