use std::collections::{HashMap, VecDeque, hash_map::Entry};

use super::Path;
use crate::maze::{Coord, Maze, get_neighbors};

/// How a cell was first reached.
#[derive(Debug, Clone, Copy)]
enum Parent {
    /// The search started here.
    Origin,
    Cell(Coord),
}

/// Breadth-first search from `start` to `goal`, moving only through open walls.
///
/// Each cell gets a parent the first time it is discovered, so the
/// reconstructed path has the fewest possible steps.
pub fn solve_bfs(maze: &Maze, start: Coord, goal: Coord) -> Option<Path> {
    if !maze.is_in_bounds(start) || !maze.is_in_bounds(goal) {
        return None;
    }

    let mut parents = HashMap::from([(start, Parent::Origin)]);
    let mut queue = VecDeque::from([start]);

    while let Some(current) = queue.pop_front() {
        if current == goal {
            let path = reconstruct_path(&parents, goal);
            tracing::debug!(explored = parents.len(), "Reached goal");
            return Some(path);
        }

        for (neighbor, direction) in get_neighbors(current, maze) {
            // Passability is read from the current cell's side of the boundary
            if maze[current].walls[direction] {
                continue;
            }
            if let Entry::Vacant(entry) = parents.entry(neighbor) {
                entry.insert(Parent::Cell(current));
                queue.push_back(neighbor);
            }
        }
    }

    tracing::debug!(explored = parents.len(), "Queue exhausted before the goal");
    None
}

/// Follows parent pointers back from `goal` to the origin.
fn reconstruct_path(parents: &HashMap<Coord, Parent>, goal: Coord) -> Path {
    let mut cells = vec![goal];
    let mut current = goal;
    while let Some(&Parent::Cell(previous)) = parents.get(&current) {
        cells.push(previous);
        current = previous;
    }
    cells.reverse();
    Path::new(cells)
}
