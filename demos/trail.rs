//! Headless maze + search demo.
//!
//! Run: cargo run --bin trail -- [bfs|dijkstra|astar|all] [width] [height] [seed]
//!
//! Generates a maze, picks random start and goal cells, runs the chosen
//! search(es) tick by tick and prints the final board.

use rand::SeedableRng;
use rand::rngs::StdRng;
use trailgrid_core::TerrainGrid;
use trailgrid_demos::{DEFAULT_HEIGHT, DEFAULT_WIDTH, Overlay, StepDriver, play_search, render};
use trailgrid_maze::MazeGen;
use trailgrid_paths::{Algorithm, path_cost};

const EVENTS_PER_TICK: usize = 16;
/// Maze ticks to animate before skipping to the finished maze.
const MAZE_TICKS: usize = 8;

fn parse_arg<T: std::str::FromStr>(arg: Option<&String>, default: T) -> Result<T, String>
where
    T::Err: std::fmt::Display,
{
    match arg {
        Some(s) => s.parse().map_err(|e| format!("invalid argument {s:?}: {e}")),
        None => Ok(default),
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let algorithms: Vec<Algorithm> = match args.first().map(String::as_str) {
        None | Some("all") => Algorithm::ALL.to_vec(),
        Some(name) => vec![name.parse()?],
    };
    let width = parse_arg(args.get(1), DEFAULT_WIDTH)?;
    let height = parse_arg(args.get(2), DEFAULT_HEIGHT)?;
    let seed = parse_arg(args.get(3), 2024u64)?;

    let grid = TerrainGrid::new(width, height)?;
    let mut rng = StdRng::seed_from_u64(seed);

    let mut maze = StepDriver::new(
        MazeGen::with_rng(&grid, StdRng::from_rng(&mut rng)),
        EVENTS_PER_TICK,
    );
    for _ in 0..MAZE_TICKS {
        maze.tick();
    }
    maze.fast_forward();
    println!("maze: {} events", maze.pulled());

    let Some((start, goal)) = grid.choose_random_bounds(&mut rng) else {
        return Err("no open cell to place start and goal".into());
    };
    println!("start {start}, goal {goal}");

    let mut overlay = Overlay::new();
    for alg in algorithms {
        let search = alg.search(&grid, start, goal, StdRng::seed_from_u64(seed))?;
        let run = play_search(search, EVENTS_PER_TICK, &mut overlay);

        println!();
        println!("== {alg}: {} visits, {} events", run.visited, run.events);
        if run.path.is_empty() {
            println!("no path");
        } else {
            println!("path: {} cells, cost {}", run.path.len(), path_cost(&grid, &run.path)?);
        }
        print!("{}", render(&grid, &overlay));
    }
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
