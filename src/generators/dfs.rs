use crate::{
    generators::RandomSource,
    maze::{Maze, get_neighbors},
};

/// Carves a perfect maze with an iterative randomized depth-first search,
/// starting from the top-left cell.
pub fn randomized_dfs<R: RandomSource + ?Sized>(maze: &mut Maze, rng: &mut R) {
    if maze.is_empty() {
        return;
    }

    // Initialize the maze with walls
    maze.reset();

    let start = maze.start();
    maze[start].visited = true;

    // The stack holds the current carving branch, with the cell being extended on top
    let mut stack = vec![start];

    while let Some(&cell) = stack.last() {
        let neighbors = get_neighbors(cell, maze)
            .filter(|&(c, _)| !maze[c].visited)
            .collect::<Vec<_>>();

        if neighbors.is_empty() {
            // Dead end, backtrack
            stack.pop();
            continue;
        }

        let (neighbor, direction) = neighbors[rng.pick(neighbors.len())];
        maze.remove_wall(cell, direction);
        maze[neighbor].visited = true;
        // The current cell stays beneath the neighbor so we can look at its other neighbors later
        stack.push(neighbor);
    }

    debug_assert!(maze.is_consistent(), "Carved walls must be symmetric");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::get_rng;
    use crate::maze::Direction;

    /// Always takes the first candidate.
    struct FirstChoice;

    impl RandomSource for FirstChoice {
        fn pick(&mut self, _len: usize) -> usize {
            0
        }
    }

    /// Always takes the last candidate.
    struct LastChoice;

    impl RandomSource for LastChoice {
        fn pick(&mut self, len: usize) -> usize {
            len - 1
        }
    }

    #[test]
    fn test_first_choice_layout() {
        let mut maze = Maze::new(2, 2);
        randomized_dfs(&mut maze, &mut FirstChoice);

        // (0,0) -> (0,1) -> (1,1) -> (1,0)
        assert!(maze.is_open((0, 0), Direction::Right));
        assert!(maze.is_open((0, 1), Direction::Down));
        assert!(maze.is_open((1, 1), Direction::Left));
        assert!(!maze.is_open((0, 0), Direction::Down));
        assert_eq!(maze.passages().count(), 3);
    }

    #[test]
    fn test_last_choice_layout() {
        let mut maze = Maze::new(2, 2);
        randomized_dfs(&mut maze, &mut LastChoice);

        // (0,0) -> (1,0) -> (1,1) -> (0,1)
        assert!(maze.is_open((0, 0), Direction::Down));
        assert!(maze.is_open((1, 0), Direction::Right));
        assert!(maze.is_open((1, 1), Direction::Up));
        assert!(!maze.is_open((0, 0), Direction::Right));
    }

    #[test]
    fn test_every_cell_visited() {
        let mut maze = Maze::new(7, 9);
        randomized_dfs(&mut maze, &mut get_rng(Some(3)));
        assert!(maze.coords().all(|c| maze[c].visited));
    }

    #[test]
    fn test_regenerating_discards_previous_walls() {
        let mut maze = Maze::new(4, 4);
        randomized_dfs(&mut maze, &mut get_rng(Some(1)));
        randomized_dfs(&mut maze, &mut get_rng(Some(2)));
        assert_eq!(maze.passages().count(), 15);
        assert!(maze.is_consistent());
    }

    #[test]
    fn test_empty_maze_is_untouched() {
        let mut maze = Maze::new(0, 0);
        randomized_dfs(&mut maze, &mut FirstChoice);
        assert!(maze.is_empty());
    }
}
