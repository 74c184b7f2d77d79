use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use env_logger::Env;
use log::{LevelFilter, info};
use relp_num::RationalBig;

use logiflow::algorithm::max_flow::FlowAnalysis;
use logiflow::data::network::{Network, logistics};
use logiflow::io::import;
use logiflow::io::report::report;

/// Maximum flow through a distribution network.
#[derive(Parser)]
#[command(name = "logiflow", version, about)]
struct Opts {
    /// Network description (`.net`); the built-in logistics network when omitted
    network_file: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only print the maximum flow
    #[arg(long)]
    no_report: bool,
}

fn main() -> ExitCode {
    let opts = Opts::parse();

    let mut logger = env_logger::Builder::from_env(Env::default().default_filter_or("warn"));
    match opts.verbose {
        0 => {},
        1 => { logger.filter_level(LevelFilter::Info); },
        2 => { logger.filter_level(LevelFilter::Debug); },
        _ => { logger.filter_level(LevelFilter::Trace); },
    }
    logger.init();

    match run(&opts) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        },
    }
}

fn run(opts: &Opts) -> Result<(), Box<dyn Error>> {
    let network: Network<RationalBig> = match &opts.network_file {
        Some(path) => {
            info!("Reading network file: \"{}\"", path.to_string_lossy());
            import(path)?
        },
        None => {
            info!("Using the built-in logistics network");
            logistics::network()?
        },
    };

    let analysis = FlowAnalysis::new(&network)?;
    if opts.no_report {
        println!("{}", analysis.max_flow().total());
    } else {
        print!("{}", report(&analysis));
    }

    Ok(())
}
