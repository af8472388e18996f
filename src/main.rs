use anyhow::Context;

use mazeway::{
    app::App,
    config::Config,
    generators::{generate_maze, get_rng},
    render::{TileGrid, rasterize},
    solvers::solve_maze,
};

fn main() -> anyhow::Result<()> {
    let config = Config::parse_checked();
    // Held until exit so buffered log lines are flushed
    let _log_guard = config.init_logging()?;

    if config.headless {
        return run_headless(&config);
    }

    let mut stdout = std::io::stdout();
    App::setup_terminal(&mut stdout)?;
    let result = App::new(&config).run(&mut stdout);
    App::restore_terminal(&mut stdout)?;
    result?;
    Ok(())
}

/// Generate, optionally solve, print and export a single maze
fn run_headless(config: &Config) -> anyhow::Result<()> {
    let mut rng = get_rng(config.seed);
    let maze = generate_maze(config.width, config.height, &mut rng);
    let path = if config.unsolved {
        None
    } else {
        solve_maze(&maze)
    };

    let grid = TileGrid::from_maze(&maze, path.as_ref());
    for row in grid.rows() {
        for tile in row {
            print!("{}", tile);
        }
        println!();
    }

    let raster = rasterize(&maze, path.as_ref(), &config.style());
    raster
        .save(&config.output)
        .with_context(|| format!("failed to write image to {}", config.output.display()))?;

    match &path {
        Some(path) => println!(
            "Path found! {} steps. Image written to {}",
            path.len(),
            config.output.display()
        ),
        None if config.unsolved => println!("Image written to {}", config.output.display()),
        None => println!(
            "No path found. Image written to {}",
            config.output.display()
        ),
    }
    Ok(())
}
