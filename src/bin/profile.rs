use std::time::{Duration, Instant};

use mazerun::{
    generate_circular_maze, generate_maze,
    solvers::{Solver, solve_maze},
};

fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let mut args = std::env::args();
    args.next(); // Skip executable name
    let num_iters = args
        .next()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(100);

    let mut generate_time = Duration::ZERO;
    let mut solve_time = Duration::ZERO;
    let mut circular_time = Duration::ZERO;
    for seed in 0..num_iters {
        let started = Instant::now();
        let maze = generate_maze(u8::MAX, u8::MAX, seed);
        generate_time += started.elapsed();

        let started = Instant::now();
        let dfs = solve_maze(&maze, Solver::Dfs);
        let bfs = solve_maze(&maze, Solver::Bfs);
        solve_time += started.elapsed();
        if dfs.len() != bfs.len() {
            tracing::warn!("[profile] Seed {} solvers disagree: {} vs {}", seed, dfs.len(), bfs.len());
        }

        let started = Instant::now();
        generate_circular_maze(64, 200, seed);
        circular_time += started.elapsed();
    }

    let per_iter = |total: Duration| total / num_iters.max(1) as u32;
    tracing::info!(
        "[profile] {} iterations: grid generation {:?}/iter, solving {:?}/iter, circular generation {:?}/iter",
        num_iters,
        per_iter(generate_time),
        per_iter(solve_time),
        per_iter(circular_time)
    );
    Ok(())
}
