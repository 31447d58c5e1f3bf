//! # Sliding puzzle solver
//!
//! Finds a minimum-move solution to an n×n sliding-tile puzzle, or proves
//! that none exists.
//!
//! Solvability is not checked up front. Instead the solver runs two A*
//! searches in lockstep, one from the given board and one from its twin
//! (the same board with two adjacent tiles swapped). Exactly one of the two
//! can be solved, so whichever side reaches its goal first settles the
//! question.
//!
//! ## Modules
//! - `board`: the immutable `Board` with its cached Hamming and Manhattan
//!   distances, neighbor and twin generation.
//! - `frontier`: a min-priority queue used as the A* open list.
//! - `solver`: search nodes and the twin race.
//! - `error`: `PuzzleError`.
//!
//! ```
//! use slider_puzzle::Solver;
//!
//! let solver = Solver::from_tiles(&[[1, 2, 3], [4, 0, 6], [7, 5, 8]]).unwrap();
//! assert_eq!(solver.moves(), Some(2));
//!
//! let solver = Solver::from_tiles(&[[8, 1, 3], [4, 0, 2], [7, 6, 5]]).unwrap();
//! assert!(!solver.is_solvable());
//! ```

pub mod board;
pub mod error;
pub mod frontier;
pub mod solver;

pub use board::{Board, Direction, BLANK};
pub use error::PuzzleError;
pub use solver::Solver;
