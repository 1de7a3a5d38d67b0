//! Terminal route-finding demo.
//!
//! Run: cargo run --bin ridge-route -- --size 32 --seed 7 --weight 1

use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use log::info;
use ridge_core::{Coord, load_emap};
use ridge_demos::{parse_coord, render, terraced_terrain};
use ridge_paths::{Pathfinder, PathfinderConfig, Walker};

#[derive(Parser, Debug)]
#[command(author, version, about = "Find a low-cost route across an elevation map")]
struct Cli {
    /// Load terrain from an `.emap` file instead of generating it.
    #[arg(long)]
    emap: Option<PathBuf>,

    /// Size of the generated terrain.
    #[arg(long, default_value_t = 32)]
    size: i32,

    /// Number of plateaus in the generated terrain.
    #[arg(long, default_value_t = 24)]
    plateaus: usize,

    /// Seed for the generated terrain.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Start cell as ROW,COL (defaults to the top-left corner).
    #[arg(long, value_parser = parse_coord)]
    start: Option<Coord>,

    /// End cell as ROW,COL (defaults to the bottom-right corner).
    #[arg(long, value_parser = parse_coord)]
    end: Option<Coord>,

    /// Heuristic weight; 0 gives uniform-cost search.
    #[arg(long, default_value_t = 0.0)]
    weight: f64,

    /// Skip the ASCII map.
    #[arg(long)]
    no_map: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    if let Err(e) = run(Cli::parse()) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let grid = match &cli.emap {
        Some(path) => {
            info!("loading terrain from {}", path.display());
            load_emap(path)?
        }
        None => terraced_terrain(cli.size, cli.plateaus, cli.seed)?,
    };
    let n = grid.size();
    info!("terrain is {n}x{n}");

    let config = PathfinderConfig {
        heuristic_weight: cli.weight,
    };
    let mut pf = Pathfinder::with_config(grid, config)?;
    pf.set_start(cli.start.unwrap_or(Coord::ZERO))?;
    pf.set_end(cli.end.unwrap_or(Coord::new(n - 1, n - 1)))?;

    let state = pf.compute_path()?;
    println!("state:          {state}");
    println!("path cost:      {:.3}", pf.path_cost());
    println!("nodes expanded: {}", pf.nodes_expanded());
    println!("path length:    {}", pf.path_solution().len());

    if pf.found_path() {
        let walker = Walker::new(pf.terrain(), pf.path_solution().iter().copied())?;
        println!("walk time:      {:.3}", walker.total_cost());
    }
    if !cli.no_map {
        println!();
        print!("{}", render(&pf));
    }
    Ok(())
}
