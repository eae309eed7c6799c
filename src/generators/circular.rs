use crate::{
    generators::pick_index,
    maze::{Coord, RingDirection, RingMaze},
};

/// Seed offset used to choose the sector that opens into the center band.
const CENTER_ENTRANCE_SEED_OFFSET: u64 = 1000;

/// Carve a perfect maze over the rings outside the center band, then open exactly one
/// passage from the first carved ring into the center.
///
/// Carving starts on the outermost ring at a sector picked from `seed`. Neighbors are
/// considered in inner, outer, clockwise, counter-clockwise order, and each choice uses
/// `seed + visited` like the rectangular generator.
pub fn carve_circular(maze: &mut RingMaze, seed: u64) {
    let center_space = maze.center_space();
    if maze.is_empty() || maze.rings() <= center_space {
        return;
    }

    let total_cells = maze.carved_cell_count();
    // Center band cells are marked visited up front so they are never carved or pushed
    let mut visited = vec![false; maze.rings() as usize * maze.sectors() as usize];
    for coord in maze.coords().filter(|&c| maze.is_center(c)) {
        visited[maze.ravel_index(coord)] = true;
    }

    let start: Coord = (
        maze.rings() - 1,
        pick_index(seed, maze.sectors() as usize) as u8,
    );
    visited[maze.ravel_index(start)] = true;
    let mut visited_count = 1;
    tracing::debug!(
        "[generator] Carving circular maze with {} rings x {} sectors from {:?} with seed {}",
        maze.rings(),
        maze.sectors(),
        start,
        seed
    );

    let mut stack = vec![start];

    while let Some(&current) = stack.last() {
        if visited_count == total_cells {
            break;
        }

        let neighbors = RingDirection::ALL
            .into_iter()
            .filter_map(|d| maze.neighbor(current, d).map(|n| (n, d)))
            .filter(|&(c, _)| !visited[maze.ravel_index(c)])
            .collect::<Vec<_>>();

        if neighbors.is_empty() {
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

    if center_space > 0 {
        let entrance = pick_index(
            seed.wrapping_add(CENTER_ENTRANCE_SEED_OFFSET),
            maze.sectors() as usize,
        ) as u8;
        maze.carve((center_space, entrance), RingDirection::Inner);
        tracing::trace!("[generator] Center entrance at sector {}", entrance);
    }
}
