use std::{io, path::PathBuf};

use anyhow::Result;
use clap::Parser;
use log::LevelFilter;

use tsp_nn::tsp::{DistanceMode, NodeId, Planner, PlannerOptions, Problem};

mod logging;

#[derive(Parser, Debug)]
#[clap(about, version, author)]
struct Args {
    /// TSPLIB-style file with a NODE_COORD_SECTION
    #[clap(short, long)]
    tsp: PathBuf,

    /// Node to start the tour from; defaults to the first node in the file
    #[clap(short, long)]
    start: Option<NodeId>,

    /// Edge weights: `exact` or `truncated`
    #[clap(short, long, default_value = "exact")]
    weights: DistanceMode,

    #[clap(long, default_value = "warn")]
    log_level: LevelFilter,
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init_logger(args.log_level)?;

    let problem = Problem::open(&args.tsp)?;
    let options = PlannerOptions {
        start: args.start,
        mode: args.weights,
    };

    Planner::on(problem, options).run(&mut io::stdout().lock())?;
    Ok(())
}
