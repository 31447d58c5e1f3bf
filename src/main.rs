use slider_puzzle::{Board, Direction, PuzzleError, Solver};
use tracing_subscriber::EnvFilter;

const SIZE: usize = 3;

fn main() -> Result<(), PuzzleError> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let puzzle = Board::random(SIZE, &mut rand::thread_rng())?;
    println!("Shuffled Puzzle:\n{}", puzzle);

    let solver = Solver::new(puzzle)?;
    tracing::info!(expanded = solver.expanded(), "search finished");

    match solver.solution() {
        Some(path) => {
            println!("Found optimal solution with: {} moves", path.len() - 1);
            println!("{}", path[0]);
            for pair in path.windows(2) {
                let direction = Direction::ALL
                    .into_iter()
                    .find(|&direction| pair[0].slide(direction).as_ref() == Some(&pair[1]));
                if let Some(direction) = direction {
                    println!("{}\n{}", direction, pair[1]);
                }
            }
        }
        None => println!("Puzzle is not solvable"),
    }
    Ok(())
}
