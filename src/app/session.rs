use crate::{
    generators::{RandomSource, generate_maze},
    maze::Maze,
    solvers::{Path, solve_maze},
};

/// Where a session is in its lifecycle.
#[derive(Debug, Default)]
pub enum Stage {
    #[default]
    Ungenerated,
    Generated { maze: Maze },
    /// `path` is `None` if the goal could not be reached.
    Solved { maze: Maze, path: Option<Path> },
}

/// The current maze and its solution, driven by "generate" and "solve" requests.
pub struct Session<R> {
    width: u8,
    height: u8,
    rng: R,
    stage: Stage,
}

impl<R: RandomSource> Session<R> {
    pub fn new(width: u8, height: u8, rng: R) -> Self {
        Self {
            width,
            height,
            rng,
            stage: Stage::Ungenerated,
        }
    }

    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    /// Width and height of the mazes this session generates.
    pub fn dimensions(&self) -> (u8, u8) {
        (self.width, self.height)
    }

    /// Discards any previous maze and carves a new one.
    pub fn generate(&mut self) {
        let maze = generate_maze(self.width, self.height, &mut self.rng);
        self.stage = Stage::Generated { maze };
        tracing::debug!("Session moved to generated");
    }

    /// Solves the current maze. Does nothing before the first generation.
    pub fn solve(&mut self) -> Option<&Path> {
        self.stage = match std::mem::take(&mut self.stage) {
            Stage::Ungenerated => {
                tracing::warn!("Solve requested before any maze was generated");
                Stage::Ungenerated
            }
            Stage::Generated { maze } | Stage::Solved { maze, .. } => {
                let path = solve_maze(&maze);
                tracing::debug!("Session moved to solved");
                Stage::Solved { maze, path }
            }
        };
        self.path()
    }

    pub fn maze(&self) -> Option<&Maze> {
        match &self.stage {
            Stage::Ungenerated => None,
            Stage::Generated { maze } | Stage::Solved { maze, .. } => Some(maze),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        match &self.stage {
            Stage::Solved { path, .. } => path.as_ref(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::get_rng;

    #[test]
    fn test_lifecycle() {
        let mut session = Session::new(6, 4, get_rng(Some(5)));
        assert!(matches!(session.stage(), Stage::Ungenerated));
        assert!(session.maze().is_none());

        // Solving before generating is a no-op
        assert!(session.solve().is_none());
        assert!(matches!(session.stage(), Stage::Ungenerated));

        session.generate();
        let maze = session.maze().unwrap();
        assert_eq!((maze.cols(), maze.rows()), session.dimensions());
        assert_eq!(session.dimensions(), (6, 4));
        assert!(matches!(session.stage(), Stage::Generated { .. }));
        assert!(session.path().is_none());

        let path = session.solve().cloned().unwrap();
        assert!(matches!(session.stage(), Stage::Solved { .. }));
        assert_eq!(path.cells().last(), Some(&(3, 5)));

        // Solving again yields the same path
        assert_eq!(session.solve(), Some(&path));

        // Generating resets to generated regardless of the previous stage
        session.generate();
        assert!(matches!(session.stage(), Stage::Generated { .. }));
        assert!(session.path().is_none());
    }

    #[test]
    fn test_generate_replaces_maze() {
        let mut session = Session::new(10, 10, get_rng(Some(8)));
        session.generate();
        let first = session.maze().cloned().unwrap();
        session.generate();
        let second = session.maze().cloned().unwrap();
        // Consecutive draws from the same generator give different layouts
        assert_ne!(first, second);
    }
}
