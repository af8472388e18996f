use std::ops::{Index, IndexMut};

use crate::maze::Direction;

/// Wall flags of a single cell, keyed by direction. `true` means closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Walls([bool; 4]);

impl Default for Walls {
    fn default() -> Self {
        Walls([true; 4])
    }
}

impl Walls {
    /// Walls with every side open.
    pub const OPEN: Walls = Walls([false; 4]);

    /// Number of closed sides.
    pub fn count_closed(&self) -> usize {
        self.0.iter().filter(|&&closed| closed).count()
    }
}

impl Index<Direction> for Walls {
    type Output = bool;

    fn index(&self, direction: Direction) -> &Self::Output {
        &self.0[direction.index()]
    }
}

impl IndexMut<Direction> for Walls {
    fn index_mut(&mut self, direction: Direction) -> &mut Self::Output {
        &mut self.0[direction.index()]
    }
}

/// A single maze cell.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// Set by the generator once the cell has been carved into.
    pub visited: bool,
    pub walls: Walls,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_cell_is_closed() {
        let cell = Cell::default();
        assert!(!cell.visited);
        assert_eq!(cell.walls.count_closed(), 4);
        assert!(Direction::ALL.iter().all(|&d| cell.walls[d]));
    }

    #[test]
    fn test_walls_indexing() {
        let mut walls = Walls::default();
        walls[Direction::Down] = false;
        assert!(!walls[Direction::Down]);
        assert!(walls[Direction::Up]);
        assert_eq!(walls.count_closed(), 3);
        assert_eq!(Walls::OPEN.count_closed(), 0);
    }
}
