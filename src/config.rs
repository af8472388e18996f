use std::path::{Path, PathBuf};

use anyhow::{Context, anyhow};
use clap::{CommandFactory, Parser, error::ErrorKind};
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;

use crate::render::{MAX_CANVAS_SIDE, Style, canvas_fits};

/// Generate a maze with randomized depth-first search and solve it with breadth-first search
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Maze width in cells
    #[arg(long, default_value_t = 20, value_parser = clap::value_parser!(u8).range(1..))]
    pub width: u8,

    /// Maze height in cells
    #[arg(long, default_value_t = 20, value_parser = clap::value_parser!(u8).range(1..))]
    pub height: u8,

    /// Side length of a cell in the exported image, in pixels
    #[arg(long, default_value_t = 20, value_parser = clap::value_parser!(u32).range(4..=256))]
    pub cell_size: u32,

    /// Random seed, for reproducible mazes
    #[arg(long)]
    pub seed: Option<u64>,

    /// Image file written on export; the format follows the extension
    #[arg(short, long, default_value = "maze.png")]
    pub output: PathBuf,

    /// Generate, solve and export once, without the interactive terminal
    #[arg(long)]
    pub headless: bool,

    /// Leave the maze unsolved in headless mode
    #[arg(long, requires = "headless")]
    pub unsolved: bool,

    /// Write logs to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Maximum log level
    #[arg(long, default_value_t = Level::INFO)]
    pub log_level: Level,
}

impl Config {
    /// Parses the command line, exiting with a usage error if the exported
    /// image would be larger than the canvas limit.
    pub fn parse_checked() -> Self {
        let config = Config::parse();
        if let Err(e) = config.validate() {
            e.exit();
        }
        config
    }

    /// Checks constraints spanning several arguments.
    pub fn validate(&self) -> Result<(), clap::Error> {
        if !canvas_fits(self.width, self.height, self.cell_size) {
            return Err(Config::command().error(
                ErrorKind::ValueValidation,
                format!(
                    "a {}x{} maze with {} pixel cells exceeds the {} pixel image limit; lower --cell-size",
                    self.width, self.height, self.cell_size, MAX_CANVAS_SIDE
                ),
            ));
        }
        Ok(())
    }

    /// Drawing style for exported images.
    pub fn style(&self) -> Style {
        Style {
            cell_size: self.cell_size,
            ..Style::default()
        }
    }

    /// Installs the global tracing subscriber.
    ///
    /// Logs go to `--log-file` when given. Otherwise headless runs log to
    /// stderr and interactive runs do not log, as the terminal belongs to the UI.
    /// The returned guard must be held until exit so buffered lines are flushed.
    pub fn init_logging(&self) -> anyhow::Result<Option<WorkerGuard>> {
        let subscriber = tracing_subscriber::fmt().with_max_level(self.log_level);

        match &self.log_file {
            Some(path) => {
                let directory = path
                    .parent()
                    .filter(|p| !p.as_os_str().is_empty())
                    .unwrap_or_else(|| Path::new("."));
                let file_name = path
                    .file_name()
                    .with_context(|| format!("log file {} has no file name", path.display()))?;
                let appender = tracing_appender::rolling::never(directory, file_name);
                let (writer, guard) = tracing_appender::non_blocking(appender);
                subscriber
                    .with_writer(writer)
                    .with_ansi(false)
                    .try_init()
                    .map_err(|e| anyhow!(e))?;
                Ok(Some(guard))
            }
            None if self.headless => {
                subscriber
                    .with_writer(std::io::stderr)
                    .try_init()
                    .map_err(|e| anyhow!(e))?;
                Ok(None)
            }
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_is_well_formed() {
        Config::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let config = Config::try_parse_from(["mazeway"]).unwrap();
        assert_eq!((config.width, config.height), (20, 20));
        assert_eq!(config.seed, None);
        assert_eq!(config.output, PathBuf::from("maze.png"));
        assert!(!config.headless);
        assert_eq!(config.log_level, Level::INFO);
        assert_eq!(config.style(), Style::default());
    }

    #[test]
    fn test_headless_arguments() {
        let config = Config::try_parse_from([
            "mazeway",
            "--width",
            "12",
            "--height",
            "5",
            "--seed",
            "99",
            "--headless",
            "--unsolved",
            "-o",
            "out/small.png",
            "--cell-size",
            "8",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert_eq!((config.width, config.height), (12, 5));
        assert_eq!(config.seed, Some(99));
        assert!(config.headless && config.unsolved);
        assert_eq!(config.output, PathBuf::from("out/small.png"));
        assert_eq!(config.style().cell_size, 8);
        assert_eq!(config.log_level, Level::DEBUG);
    }

    #[test]
    fn test_invalid_arguments_rejected() {
        assert!(Config::try_parse_from(["mazeway", "--width", "0"]).is_err());
        assert!(Config::try_parse_from(["mazeway", "--height", "256"]).is_err());
        assert!(Config::try_parse_from(["mazeway", "--cell-size", "2"]).is_err());
        assert!(Config::try_parse_from(["mazeway", "--unsolved"]).is_err());
    }

    #[test]
    fn test_oversized_canvas_rejected() {
        let config = Config::try_parse_from([
            "mazeway",
            "--width",
            "255",
            "--height",
            "255",
            "--cell-size",
            "256",
        ])
        .unwrap();
        let err = config.validate().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);

        let config = Config::try_parse_from([
            "mazeway",
            "--width",
            "255",
            "--height",
            "255",
            "--cell-size",
            "32",
        ])
        .unwrap();
        assert!(config.validate().is_ok());
        let (width, height) = (config.width as u32 * 32, config.height as u32 * 32);
        assert!(width <= MAX_CANVAS_SIDE && height <= MAX_CANVAS_SIDE);

        assert!(Config::try_parse_from(["mazeway"]).unwrap().validate().is_ok());
    }
}
