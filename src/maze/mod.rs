pub mod cell;

pub use cell::{Cell, Walls};

/// A cell position as `(row, col)`.
pub type Coord = (u8, u8);

/// One of the four unit steps between 4-connected cells.
/// The discriminants double as indices into a cell's wall array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Right = 0,
    Down = 1,
    Left = 2,
    Up = 3,
}

impl Direction {
    /// All directions, in wall-array order.
    pub const ALL: [Direction; 4] = [
        Direction::Right,
        Direction::Down,
        Direction::Left,
        Direction::Up,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// The direction pointing back across the same boundary.
    pub fn opposite(self) -> Self {
        match self {
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Up => Direction::Down,
        }
    }

    /// Row and column delta of one step in this direction.
    pub fn offset(self) -> (i8, i8) {
        match self {
            Direction::Right => (0, 1),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Up => (-1, 0),
        }
    }
}

/// A rectangular maze of walled cells, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    cells: Box<[Cell]>,
    rows: u8,
    cols: u8,
}

impl Maze {
    /// Creates a maze with every cell unvisited and every wall closed.
    pub fn new(rows: u8, cols: u8) -> Self {
        let cells = vec![Cell::default(); rows as usize * cols as usize].into_boxed_slice();
        Maze { cells, rows, cols }
    }

    /// Returns the height of the maze in cells.
    pub fn rows(&self) -> u8 {
        self.rows
    }

    /// Returns the width of the maze in cells.
    pub fn cols(&self) -> u8 {
        self.cols
    }

    /// Checks if the maze has no cells at all.
    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    /// The top-left cell.
    pub fn start(&self) -> Coord {
        (0, 0)
    }

    /// The bottom-right cell.
    pub fn goal(&self) -> Coord {
        (self.rows.saturating_sub(1), self.cols.saturating_sub(1))
    }

    /// Closes every wall and clears every visited flag.
    pub fn reset(&mut self) {
        self.cells.fill(Cell::default());
    }

    fn ravel_index(&self, coord: Coord) -> usize {
        coord.0 as usize * self.cols as usize + coord.1 as usize
    }

    /// Checks if the given coordinate is within the bounds of the maze.
    pub fn is_in_bounds(&self, coord: Coord) -> bool {
        coord.0 < self.rows && coord.1 < self.cols
    }

    /// The cell one step away in `direction`, if it is inside the maze.
    pub fn step(&self, coord: Coord, direction: Direction) -> Option<Coord> {
        let (dr, dc) = direction.offset();
        let next = (
            coord.0.checked_add_signed(dr)?,
            coord.1.checked_add_signed(dc)?,
        );
        self.is_in_bounds(next).then_some(next)
    }

    /// All coordinates in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + use<> {
        let (rows, cols) = (self.rows, self.cols);
        (0..rows).flat_map(move |row| (0..cols).map(move |col| (row, col)))
    }

    /// Removes the wall on the `direction` side of `from`, together with the
    /// matching wall of the neighbor on the other side.
    ///
    /// Returns `true` if the wall was closed before the call.
    ///
    /// # Panics
    /// * If `from` is out of bounds
    /// * If the wall lies on the outer boundary of the maze
    pub fn remove_wall(&mut self, from: Coord, direction: Direction) -> bool {
        if !self.is_in_bounds(from) {
            panic!("The given coordinate {:?} is out of bounds", from);
        }
        let to = match self.step(from, direction) {
            Some(to) => to,
            None => panic!(
                "Cannot remove the {:?} wall of {:?} on the maze boundary",
                direction, from
            ),
        };
        let was_closed = self[from].walls[direction];
        self[from].walls[direction] = false;
        self[to].walls[direction.opposite()] = false;
        was_closed
    }

    /// Checks if one can step from `from` in `direction`: the wall on that side
    /// is open and the neighbor exists.
    pub fn is_open(&self, from: Coord, direction: Direction) -> bool {
        self.is_in_bounds(from)
            && !self[from].walls[direction]
            && self.step(from, direction).is_some()
    }

    /// Every passable boundary, reported once as the cell on its left or top
    /// side together with `Right` or `Down`.
    pub fn passages(&self) -> impl Iterator<Item = (Coord, Direction)> {
        self.coords().flat_map(move |coord| {
            [Direction::Right, Direction::Down]
                .into_iter()
                .filter(move |&d| self.is_open(coord, d))
                .map(move |d| (coord, d))
        })
    }

    /// Checks that both sides of every internal boundary agree and that the
    /// outer boundary is fully closed.
    pub fn is_consistent(&self) -> bool {
        self.coords().all(|coord| {
            Direction::ALL
                .into_iter()
                .all(|direction| match self.step(coord, direction) {
                    Some(neighbor) => {
                        self[coord].walls[direction] == self[neighbor].walls[direction.opposite()]
                    }
                    None => self[coord].walls[direction],
                })
        })
    }
}

impl std::ops::Index<Coord> for Maze {
    type Output = Cell;

    fn index(&self, coord: Coord) -> &Self::Output {
        &self.cells[self.ravel_index(coord)]
    }
}

impl std::ops::IndexMut<Coord> for Maze {
    fn index_mut(&mut self, coord: Coord) -> &mut Self::Output {
        let idx = self.ravel_index(coord);
        &mut self.cells[idx]
    }
}

/// Get neighbors of a cell, in direction order.
/// A neighbor is any in-bounds cell one step away, regardless of walls.
pub fn get_neighbors(coord: Coord, maze: &Maze) -> impl Iterator<Item = (Coord, Direction)> {
    Direction::ALL
        .into_iter()
        .filter_map(move |direction| maze.step(coord, direction).map(|c| (c, direction)))
}
