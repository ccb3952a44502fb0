//! Solver Binary
//!
//! Computes the optimal-score mirror placement for a puzzle, either a
//! built-in catalog template or a puzzle JSON file.
//!
//! Options: --list, --beam-width, --no-prune, --json

use anyhow::Context;
use clap::Parser;
use mirrormaze::grid::GridConfig;
use mirrormaze::puzzle::catalog;
use mirrormaze::puzzle::Answer;
use mirrormaze::puzzle::PuzzleConfig;
use mirrormaze::search::Optimizer;

#[derive(Parser)]
#[command(version, about = "Solve laser puzzles for optimal mirror placements.")]
struct Args {
    /// catalog template name or path to a puzzle JSON file
    puzzle: Option<String>,

    /// list the built-in catalog templates
    #[arg(long, short)]
    list: bool,

    /// candidates retained between beam search depths
    #[arg(long, default_value_t = mirrormaze::BEAM_WIDTH)]
    beam_width: usize,

    /// consider every empty cell instead of path cells only (slower)
    #[arg(long)]
    no_prune: bool,

    /// emit the solution as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    mirrormaze::log();
    let args = Args::parse();
    if args.list {
        for (name, grid) in catalog::all() {
            println!(
                "{:<20} {:>2}x{:<2} budget {}",
                name,
                grid.width(),
                grid.height(),
                grid.budget()
            );
        }
        return Ok(());
    }
    let which = args
        .puzzle
        .as_deref()
        .context("expected a catalog name or puzzle file; try --list")?;
    let grid = load(which)?;
    let solution = Optimizer::new(args.beam_width, !args.no_prune).solve(&grid);
    anyhow::ensure!(
        solution.verify(&grid),
        "verification failed for claimed length {}",
        solution.length()
    );
    match args.json {
        true => println!("{}", serde_json::to_string_pretty(&Answer::from(&solution))?),
        false => println!("{}", solution),
    }
    Ok(())
}

fn load(which: &str) -> anyhow::Result<GridConfig> {
    match catalog::lookup(which) {
        Some(grid) => Ok(grid),
        None => {
            let raw = std::fs::read_to_string(which)
                .with_context(|| format!("no catalog template or file named {}", which))?;
            let parsed = serde_json::from_str::<PuzzleConfig>(&raw)
                .with_context(|| format!("malformed puzzle file {}", which))?;
            Ok(GridConfig::try_from(parsed)?)
        }
    }
}
