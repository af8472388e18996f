mod bfs;

pub use bfs::solve_bfs;

use crate::maze::{Coord, Maze};

/// An ordered walk through adjacent cells, from start to end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    cells: Vec<Coord>,
}

impl Path {
    pub fn new(cells: Vec<Coord>) -> Self {
        Path { cells }
    }

    pub fn cells(&self) -> &[Coord] {
        &self.cells
    }

    /// Number of steps taken, which is one less than the number of cells.
    pub fn len(&self) -> usize {
        self.cells.len().saturating_sub(1)
    }

    /// True when start and end coincide.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Consecutive pairs of cells, one per step.
    pub fn segments(&self) -> impl Iterator<Item = (Coord, Coord)> {
        self.cells.windows(2).map(|w| (w[0], w[1]))
    }
}

/// Finds a shortest path from the top-left to the bottom-right cell.
/// Returns `None` if the maze is empty or the goal cannot be reached.
pub fn solve_maze(maze: &Maze) -> Option<Path> {
    if maze.is_empty() {
        return None;
    }

    let path = solve_bfs(maze, maze.start(), maze.goal());
    match &path {
        Some(path) => tracing::info!(length = path.len(), "Path found"),
        None => tracing::warn!("No path found to the goal"),
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::{generate_maze, get_rng};
    use crate::maze::Direction;

    /// 3x3 maze carved along the top row, then down the right column.
    fn l_shaped_maze() -> Maze {
        let mut maze = Maze::new(3, 3);
        maze.remove_wall((0, 0), Direction::Right);
        maze.remove_wall((0, 1), Direction::Right);
        maze.remove_wall((0, 2), Direction::Down);
        maze.remove_wall((1, 2), Direction::Down);
        maze
    }

    #[test]
    fn test_l_shaped_corridor() {
        let path = solve_maze(&l_shaped_maze()).unwrap();
        assert_eq!(path.cells(), &[(0, 0), (0, 1), (0, 2), (1, 2), (2, 2)]);
        assert_eq!(path.len(), 4);
        assert_eq!(path.segments().count(), 4);
    }

    #[test]
    fn test_single_cell_path_is_empty() {
        let maze = generate_maze(1, 1, &mut get_rng(Some(0)));
        let path = solve_maze(&maze).unwrap();
        assert_eq!(path.cells(), &[(0, 0)]);
        assert!(path.is_empty());
        assert_eq!(path.segments().count(), 0);
    }

    #[test]
    fn test_unreachable_goal() {
        // Fully walled, nothing carved
        assert_eq!(solve_maze(&Maze::new(2, 2)), None);

        let mut maze = l_shaped_maze();
        maze[(1, 2)].walls[Direction::Down] = true;
        maze[(2, 2)].walls[Direction::Up] = true;
        assert_eq!(solve_maze(&maze), None);
    }

    #[test]
    fn test_empty_maze_has_no_path() {
        assert_eq!(solve_maze(&Maze::new(0, 0)), None);
    }

    #[test]
    fn test_solve_is_idempotent() {
        let maze = generate_maze(20, 20, &mut get_rng(Some(7)));
        let first = solve_maze(&maze).unwrap();
        let second = solve_maze(&maze).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.cells().first(), Some(&(0, 0)));
        assert_eq!(first.cells().last(), Some(&(19, 19)));
    }

    #[test]
    fn test_path_steps_through_open_walls() {
        let maze = generate_maze(15, 10, &mut get_rng(Some(11)));
        let path = solve_maze(&maze).unwrap();
        for (from, to) in path.segments() {
            let direction = Direction::ALL
                .into_iter()
                .find(|&d| maze.step(from, d) == Some(to))
                .expect("path cells must be adjacent");
            assert!(maze.is_open(from, direction));
            assert!(maze.is_open(to, direction.opposite()));
        }
    }
}
