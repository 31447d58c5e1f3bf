use std::cmp::Ordering;
use std::rc::Rc;

use tracing::{debug, trace};

use crate::board::Board;
use crate::error::PuzzleError;
use crate::frontier::Frontier;

/// One entry of the search tree.
///
/// `previous` is shared: every child pushed while expanding a node holds a
/// strong reference to it, so an ancestor lives exactly as long as some
/// descendant is still reachable from a frontier.
#[derive(Debug)]
struct SearchNode {
    board: Board,
    /// Slides from the root.
    moves: usize,
    /// `moves + manhattan`, never overestimates the total path length.
    priority: usize,
    previous: Option<Rc<SearchNode>>,
}

impl SearchNode {
    fn root(board: Board) -> Rc<Self> {
        Rc::new(Self {
            priority: board.manhattan(),
            board,
            moves: 0,
            previous: None,
        })
    }

    fn child(parent: &Rc<SearchNode>, board: Board) -> Rc<Self> {
        let moves = parent.moves + 1;
        Rc::new(Self {
            priority: moves + board.manhattan(),
            board,
            moves,
            previous: Some(Rc::clone(parent)),
        })
    }

    /// Boards from the root down to this node.
    fn path(self: &Rc<Self>) -> Vec<Board> {
        let mut path = Vec::with_capacity(self.moves + 1);
        let mut node = Some(self);
        while let Some(current) = node {
            path.push(current.board.clone());
            node = current.previous.as_ref();
        }
        path.reverse();
        path
    }
}

// Frontier order: lowest priority first, then closest to the goal.
impl Ord for SearchNode {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .cmp(&other.priority)
            .then_with(|| self.board.manhattan().cmp(&other.board.manhattan()))
    }
}

impl PartialOrd for SearchNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for SearchNode {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SearchNode {}

type NodeFrontier = Frontier<Rc<SearchNode>>;

/// Pops the best node of `frontier` and returns it if it is a goal,
/// otherwise pushes its children.
///
/// A child equal to the popped node's own predecessor is skipped.
fn step(frontier: &mut NodeFrontier, expanded: &mut usize) -> Option<Rc<SearchNode>> {
    let current = frontier.pop()?;
    *expanded += 1;
    if current.board.is_goal() {
        return Some(current);
    }

    for neighbor in current.board.neighbors() {
        let backtracks = current
            .previous
            .as_ref()
            .is_some_and(|previous| previous.board == neighbor);
        if !backtracks {
            frontier.push(SearchNode::child(&current, neighbor));
        }
    }
    None
}

/// A* solver that decides solvability by racing the board against its twin.
///
/// Both searches advance one expansion per round. Whichever reaches its goal
/// first settles the outcome: the original side yields a move-optimal path,
/// the twin side proves the original unsolvable.
#[derive(Debug, Clone)]
pub struct Solver {
    solution: Option<Vec<Board>>,
    expanded: usize,
}

impl Solver {
    pub fn new(initial: Board) -> Result<Self, PuzzleError> {
        debug!(
            dimension = initial.dimension(),
            manhattan = initial.manhattan(),
            hamming = initial.hamming(),
            "starting twin race"
        );

        if initial.is_goal() {
            debug!("initial board is already solved");
            return Ok(Self {
                solution: Some(vec![initial]),
                expanded: 0,
            });
        }

        let twin = initial.twin()?;
        let mut original = NodeFrontier::new();
        let mut mirror = NodeFrontier::new();
        original.push(SearchNode::root(initial));
        mirror.push(SearchNode::root(twin));

        let mut expanded = 0;
        let mut rounds: u64 = 0;
        loop {
            if original.is_empty() && mirror.is_empty() {
                return Err(PuzzleError::FrontierExhausted);
            }
            rounds += 1;

            if let Some(goal) = step(&mut original, &mut expanded) {
                debug!(moves = goal.moves, rounds, expanded, "original board solved");
                return Ok(Self {
                    solution: Some(goal.path()),
                    expanded,
                });
            }
            if let Some(goal) = step(&mut mirror, &mut expanded) {
                debug!(
                    twin_moves = goal.moves,
                    rounds, expanded, "twin solved first, board is unsolvable"
                );
                return Ok(Self {
                    solution: None,
                    expanded,
                });
            }

            trace!(
                rounds,
                original = original.len(),
                twin = mirror.len(),
                "round complete"
            );
        }
    }

    /// Validates `rows` as a board and races it.
    pub fn from_tiles<R: AsRef<[u32]>>(rows: &[R]) -> Result<Self, PuzzleError> {
        Self::new(Board::new(rows)?)
    }

    pub fn is_solvable(&self) -> bool {
        self.solution.is_some()
    }

    /// Minimum number of slides, `None` when unsolvable.
    pub fn moves(&self) -> Option<usize> {
        self.solution.as_ref().map(|path| path.len() - 1)
    }

    /// Boards from the initial one to the goal, both included.
    pub fn solution(&self) -> Option<&[Board]> {
        self.solution.as_deref()
    }

    pub fn into_solution(self) -> Option<Vec<Board>> {
        self.solution
    }

    /// Nodes popped across both frontiers.
    pub fn expanded(&self) -> usize {
        self.expanded
    }
}
