#![allow(dead_code)]

use slider_puzzle::{Board, BLANK};
use std::collections::{HashMap, VecDeque};
use std::sync::OnceLock;

/// Parses the fixture format: the dimension on the first line, then one
/// whitespace-separated row per line.
pub fn parse_fixture(text: &str) -> Result<Vec<Vec<u32>>, String> {
    let mut lines = text.lines().map(str::trim).filter(|line| !line.is_empty());

    let size: usize = lines
        .next()
        .ok_or("missing dimension line")?
        .parse()
        .map_err(|e| format!("invalid dimension: {}", e))?;

    let rows: Vec<Vec<u32>> = lines
        .map(|line| {
            line.split_whitespace()
                .map(|tile| tile.parse().map_err(|e| format!("invalid tile {:?}: {}", tile, e)))
                .collect::<Result<Vec<u32>, String>>()
        })
        .collect::<Result<_, String>>()?;

    if rows.len() != size {
        return Err(format!("expected {} rows, found {}", size, rows.len()));
    }
    Ok(rows)
}

pub fn fixture_board(text: &str) -> Board {
    Board::new(&parse_fixture(text).unwrap()).unwrap()
}

/// Breadth-first distance to the goal of every solvable board of `size`.
fn bfs_from_goal(size: usize) -> HashMap<Board, usize> {
    let goal = Board::goal(size).unwrap();
    let mut distances = HashMap::from([(goal.clone(), 0)]);
    let mut queue = VecDeque::from([goal]);

    while let Some(board) = queue.pop_front() {
        let next = distances[&board] + 1;
        for neighbor in board.neighbors() {
            if !distances.contains_key(&neighbor) {
                distances.insert(neighbor.clone(), next);
                queue.push_back(neighbor);
            }
        }
    }
    distances
}

/// Exact minimum move count, `None` for unsolvable boards. Only n <= 3.
pub fn bfs_distance(board: &Board) -> Option<usize> {
    static SMALL: OnceLock<HashMap<Board, usize>> = OnceLock::new();
    static MEDIUM: OnceLock<HashMap<Board, usize>> = OnceLock::new();

    let table = match board.dimension() {
        1 => return Some(0),
        2 => SMALL.get_or_init(|| bfs_from_goal(2)),
        3 => MEDIUM.get_or_init(|| bfs_from_goal(3)),
        n => panic!("no breadth-first table for {}x{}", n, n),
    };
    table.get(board).copied()
}

/// Inversion-count solvability test.
pub fn parity_solvable(board: &Board) -> bool {
    let size = board.dimension();
    let flattened: Vec<u32> = (0..size)
        .flat_map(|row| (0..size).map(move |col| (row, col)))
        .map(|(row, col)| board.tile(row, col).unwrap())
        .collect();

    let inversions: usize = flattened
        .iter()
        .enumerate()
        .filter(|&(_, &val)| val != BLANK)
        .map(|(i, &val)| {
            flattened[i + 1..]
                .iter()
                .filter(|&&next| next != BLANK && next < val)
                .count()
        })
        .sum();

    if size % 2 == 1 {
        inversions % 2 == 0
    } else {
        (inversions + board.blank().0) % 2 == 1
    }
}

/// Rows of a board, for round-tripping through `Board::new`.
pub fn rows_of(tiles: &[u32], size: usize) -> Vec<Vec<u32>> {
    tiles.chunks(size).map(<[u32]>::to_vec).collect()
}

/// Every permutation of `0..n`.
pub fn permutations(n: u32) -> Vec<Vec<u32>> {
    fn extend(prefix: &mut Vec<u32>, rest: &mut Vec<u32>, out: &mut Vec<Vec<u32>>) {
        if rest.is_empty() {
            out.push(prefix.clone());
            return;
        }
        for i in 0..rest.len() {
            let tile = rest.remove(i);
            prefix.push(tile);
            extend(prefix, rest, out);
            prefix.pop();
            rest.insert(i, tile);
        }
    }

    let mut out = Vec::new();
    extend(&mut Vec::new(), &mut (0..n).collect(), &mut out);
    out
}
