use rand::{Rng, SeedableRng, rngs::StdRng};

mod dfs;

pub use dfs::randomized_dfs;

use crate::maze::Maze;

/// Source of the random choices made while carving.
pub trait RandomSource {
    /// Returns a uniformly distributed index in `0..len`. `len` is never zero.
    fn pick(&mut self, len: usize) -> usize;
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn pick(&mut self, len: usize) -> usize {
        self.random_range(0..len)
    }
}

/// Get a random number generator, optionally seeded for reproducibility.
pub fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

/// Builds a fresh `width` x `height` maze and carves it.
pub fn generate_maze<R: RandomSource + ?Sized>(width: u8, height: u8, rng: &mut R) -> Maze {
    let mut maze = Maze::new(height, width);
    randomized_dfs(&mut maze, rng);
    tracing::info!(
        width,
        height,
        passages = maze.passages().count(),
        "Generated maze"
    );
    maze
}
