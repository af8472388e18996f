use crossterm::style::{Color, Stylize};

use std::fmt;

use crate::{
    maze::{Coord, Direction, Maze},
    solvers::Path,
};

/// One character block of the terminal view of a maze.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Wall,
    #[default]
    Open,
    Start,
    Goal,
    /// Part of the solution path.
    Route,
}

impl Tile {
    /// The width of each tile when rendered, in character widths.
    pub const CELL_WIDTH: u16 = 2;
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let styled_symbol = match self {
            Tile::Wall => "⬜".with(Color::White),
            Tile::Open => "  ".with(Color::Reset),
            Tile::Start => "🟩".with(Color::Green),
            Tile::Goal => "🟦".with(Color::Blue),
            Tile::Route => "🟥".with(Color::Red),
        };

        #[cfg(debug_assertions)]
        {
            use unicode_width::UnicodeWidthStr;
            assert_eq!(
                styled_symbol.content().width(),
                Tile::CELL_WIDTH as usize,
                "Each tile must occupy exactly two character widths."
            );
        }

        write!(f, "{}", styled_symbol)
    }
}

/// Terminal view of a maze: cells sit at odd positions and the slots between
/// them show whether the shared wall is closed.
pub struct TileGrid {
    data: Box<[Tile]>,
    width: u16,
    height: u16,
}

impl TileGrid {
    fn new(width: u16, height: u16, tile: Tile) -> Self {
        let data = vec![tile; width as usize * height as usize].into_boxed_slice();
        TileGrid {
            data,
            width,
            height,
        }
    }

    /// Lays out the maze, overlaying the path if one is given.
    pub fn from_maze(maze: &Maze, path: Option<&Path>) -> Self {
        // n cells in each dimension -> n + 1 walls -> 2n + 1 total
        let mut grid = TileGrid::new(
            maze.cols() as u16 * 2 + 1,
            maze.rows() as u16 * 2 + 1,
            Tile::Wall,
        );

        for coord in maze.coords() {
            let (x, y) = TileGrid::center(coord);
            grid.set((x, y), Tile::Open);
            if maze.is_open(coord, Direction::Right) {
                grid.set((x + 1, y), Tile::Open);
            }
            if maze.is_open(coord, Direction::Down) {
                grid.set((x, y + 1), Tile::Open);
            }
        }

        if let Some(path) = path {
            for &coord in path.cells() {
                grid.set(TileGrid::center(coord), Tile::Route);
            }
            for (from, to) in path.segments() {
                let (ax, ay) = TileGrid::center(from);
                let (bx, by) = TileGrid::center(to);
                grid.set(((ax + bx) / 2, (ay + by) / 2), Tile::Route);
            }
        }

        if !maze.is_empty() {
            grid.set(TileGrid::center(maze.start()), Tile::Start);
            grid.set(TileGrid::center(maze.goal()), Tile::Goal);
        }
        grid
    }

    /// Tile position `(x, y)` of a maze cell.
    fn center(coord: Coord) -> (u16, u16) {
        (coord.1 as u16 * 2 + 1, coord.0 as u16 * 2 + 1)
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    fn ravel_index(&self, x: u16, y: u16) -> usize {
        y as usize * self.width as usize + x as usize
    }

    fn set(&mut self, coord: (u16, u16), tile: Tile) {
        let idx = self.ravel_index(coord.0, coord.1);
        self.data[idx] = tile;
    }

    /// Tiles row by row, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> {
        self.data.chunks(self.width as usize)
    }
}

impl std::ops::Index<(u16, u16)> for TileGrid {
    type Output = Tile;

    fn index(&self, index: (u16, u16)) -> &Self::Output {
        &self.data[self.ravel_index(index.0, index.1)]
    }
}
