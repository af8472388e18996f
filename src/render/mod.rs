pub mod raster;
pub mod tile;

pub use raster::Raster;
pub use tile::{Tile, TileGrid};

use crate::{
    maze::{Coord, Direction, Maze},
    solvers::Path,
};

/// An RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    pub const WHITE: Rgb = Rgb(255, 255, 255);
    pub const GREEN: Rgb = Rgb(0, 128, 0);
    pub const BLUE: Rgb = Rgb(0, 0, 255);
    pub const RED: Rgb = Rgb(255, 0, 0);
}

/// A 2D pixel surface the maze can be drawn on.
/// Coordinates are in pixels with the origin at the top-left corner and may
/// fall outside the surface; implementations clip.
pub trait Surface {
    /// Paints the whole surface with its background color.
    fn clear(&mut self);

    fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32, color: Rgb);

    /// Strokes the outline of a rectangle with a line of `line_width` pixels
    /// centered on the outline.
    fn stroke_rect(&mut self, x: i32, y: i32, width: u32, height: u32, line_width: u32, color: Rgb);

    fn line(&mut self, from: (i32, i32), to: (i32, i32), line_width: u32, color: Rgb);
}

/// Sizes and colors used when drawing.
#[derive(Debug, Clone, PartialEq)]
pub struct Style {
    /// Side length of a cell, in pixels.
    pub cell_size: u32,
    pub wall_width: u32,
    pub path_width: u32,
    pub background: Rgb,
    pub wall_color: Rgb,
    pub start_color: Rgb,
    pub goal_color: Rgb,
    pub path_color: Rgb,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            cell_size: 20,
            wall_width: 2,
            path_width: 3,
            background: Rgb::WHITE,
            wall_color: Rgb::BLACK,
            start_color: Rgb::GREEN,
            goal_color: Rgb::BLUE,
            path_color: Rgb::RED,
        }
    }
}

impl Style {
    /// Pixel position of the top-left corner of a cell.
    fn origin(&self, coord: Coord) -> (i32, i32) {
        let size = self.cell_size as i32;
        (coord.1 as i32 * size, coord.0 as i32 * size)
    }

    /// Pixel position of the center of a cell.
    fn center(&self, coord: Coord) -> (i32, i32) {
        let (x, y) = self.origin(coord);
        let half = self.cell_size as i32 / 2;
        (x + half, y + half)
    }
}

/// Largest width or height, in pixels, of an exported image.
pub const MAX_CANVAS_SIDE: u32 = 8192;

/// Checks if a `cols` x `rows` maze drawn with `cell_size` pixel cells stays
/// within `MAX_CANVAS_SIDE` on both axes.
pub fn canvas_fits(cols: u8, rows: u8, cell_size: u32) -> bool {
    [cols, rows]
        .into_iter()
        .all(|cells| cells as u64 * cell_size as u64 <= MAX_CANVAS_SIDE as u64)
}

/// Width and height, in pixels, of a surface that fits the whole maze.
pub fn canvas_size(maze: &Maze, style: &Style) -> (u32, u32) {
    (
        maze.cols() as u32 * style.cell_size,
        maze.rows() as u32 * style.cell_size,
    )
}

/// Clears the surface and draws every closed wall, then the start and goal markers.
pub fn draw_maze<S: Surface + ?Sized>(maze: &Maze, surface: &mut S, style: &Style) {
    surface.clear();

    let size = style.cell_size;
    let width = style.wall_width;
    for coord in maze.coords() {
        let (cx, cy) = style.origin(coord);
        let walls = maze[coord].walls;
        for direction in Direction::ALL.into_iter().filter(|&d| walls[d]) {
            // Walls sit just inside the right/bottom edge and just outside the left/top edge
            let (x, y, w, h) = match direction {
                Direction::Right => (cx + size as i32 - width as i32, cy, width, size),
                Direction::Down => (cx, cy + size as i32 - width as i32, size, width),
                Direction::Left => (cx - width as i32, cy, width, size),
                Direction::Up => (cx, cy - width as i32, size, width),
            };
            surface.stroke_rect(x, y, w, h, width, style.wall_color);
        }
    }

    draw_start_and_end(maze, surface, style);
}

/// Fills the start and goal cells, inset by one pixel.
pub fn draw_start_and_end<S: Surface + ?Sized>(maze: &Maze, surface: &mut S, style: &Style) {
    if maze.is_empty() {
        return;
    }
    let inner = style.cell_size.saturating_sub(2);
    for (coord, color) in [
        (maze.start(), style.start_color),
        (maze.goal(), style.goal_color),
    ] {
        let (x, y) = style.origin(coord);
        surface.fill_rect(x + 1, y + 1, inner, inner, color);
    }
}

/// Draws the path as line segments through the centers of its cells.
pub fn draw_path<S: Surface + ?Sized>(path: &Path, surface: &mut S, style: &Style) {
    for (from, to) in path.segments() {
        surface.line(
            style.center(from),
            style.center(to),
            style.path_width,
            style.path_color,
        );
    }
}

/// Renders the maze, and the path if there is one, onto a fresh raster.
pub fn rasterize(maze: &Maze, path: Option<&Path>, style: &Style) -> Raster {
    let (width, height) = canvas_size(maze, style);
    let mut raster = Raster::new(width, height, style.background);
    draw_maze(maze, &mut raster, style);
    if let Some(path) = path {
        draw_path(path, &mut raster, style);
    }
    raster
}
