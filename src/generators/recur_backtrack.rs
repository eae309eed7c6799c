use crate::{
    generators::pick_index,
    maze::{Coord, Maze},
};

/// Carve a perfect maze with randomized depth-first search and an explicit backtracking stack.
///
/// The maze is expected to be freshly created with every wall present. The start cell takes
/// its row from `seed` and its column from `seed + 1`; each later choice uses
/// `seed + visited` where `visited` counts the cells carved into so far.
pub fn recursive_backtrack(maze: &mut Maze, seed: u64) {
    if maze.is_empty() {
        return;
    }

    let total_cells = maze.cell_count();
    let mut visited = vec![false; total_cells];

    // Initialize the starting point
    let start: Coord = (
        pick_index(seed, maze.height() as usize) as u8,
        pick_index(seed.wrapping_add(1), maze.width() as usize) as u8,
    );
    visited[maze.ravel_index(start)] = true;
    let mut visited_count = 1;
    tracing::debug!(
        "[generator] Carving {}x{} maze from {:?} with seed {}",
        maze.width(),
        maze.height(),
        start,
        seed
    );

    // The top of the stack is always the current cell
    let mut stack = vec![start];

    while let Some(&current) = stack.last() {
        if visited_count == total_cells {
            break;
        }

        let neighbors = maze
            .neighbors(current)
            .filter(|&(c, _)| !visited[maze.ravel_index(c)])
            .collect::<Vec<_>>();

        if neighbors.is_empty() {
            // Dead end, backtrack to the previous cell
            stack.pop();
            continue;
        }

        let pick = pick_index(seed.wrapping_add(visited_count as u64), neighbors.len());
        let (next, direction) = neighbors[pick];
        maze.carve(current, direction);
        visited[maze.ravel_index(next)] = true;
        visited_count += 1;
        stack.push(next);
    }

    tracing::trace!("[generator] Carved {} passages", maze.passage_count());
}
