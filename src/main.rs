// Enable warnings for all clippy lints.
#![warn(
    clippy::correctness,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::pedantic,
    clippy::cargo,
    clippy::restriction
)]
// Selectively disable warnings for some lints.
#![allow(
    clippy::indexing_slicing, // Allow `vec[i]` indexing.
    clippy::module_name_repetitions,  // Allow name repetitions in module and type names.
    clippy::use_debug, // Debug formatting is useful.
    clippy::float_arithmetic, // Needed.
    clippy::integer_arithmetic, // Needed.
    clippy::integer_division, // Needed.
    clippy::multiple_crate_versions, // Beyond our control.
    clippy::missing_docs_in_private_items, // Disabled.
    clippy::missing_inline_in_public_items, // Not considered for now.
    clippy::implicit_return, // Allow.
    clippy::too_many_arguments, // Allow.
    clippy::use_self, // Too pedantic.
    clippy::shadow_same,
    clippy::result_expect_used,
    clippy::unknown_clippy_lints,
    clippy::exit
)]
// Mark some lints as errors.
#![deny(clippy::print_stdout)]

use clap::{arg_enum, value_t, App, AppSettings, Arg, ArgMatches, SubCommand};
use connectivity::computations::cc::ConnectedComponents;
use connectivity::error::ConnError;
use connectivity::graph::loader::{load_edge_list, EdgeListOptions};
use connectivity::percolation::stats::PercolationStats;
use connectivity::util::logger::init_logger;
use connectivity::util::timer::ConnTimer;
use itertools::Itertools;
use log::{debug, info, Level};
use rand::rngs::StdRng;
use rand::SeedableRng;

arg_enum! {
    #[derive(PartialEq, Debug)]
    pub enum LogLevel {
        Error,
        Warn,
        Info,
        Debug,
        Trace,
    }
}

fn main() -> Result<(), ConnError> {
    // Parse command line arguments.
    let matches = App::new("connectivity")
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .arg(
            Arg::from_usage("-l, --loglevel=[LEVEL] 'Set the log level'")
                .possible_values(&LogLevel::variants())
                .case_insensitive(true),
        )
        .subcommand(
            SubCommand::with_name("percolation")
                .about("Estimates the percolation threshold of an N-by-N grid")
                .args_from_usage(
                    "<grid_size> 'Number of rows and columns of the grid'
                    <trials> 'Number of independent experiments'
                    --seed=[SEED] 'Seed for the random number generator'",
                ),
        )
        .subcommand(
            SubCommand::with_name("components")
                .about("Finds the connected components of an undirected graph")
                .args_from_usage(
                    "<edge_file> 'Delimited file with one src,dst vertex pair per line'
                    --vertices=[COUNT] 'Number of vertices (default: largest vertex id + 1)'
                    --headers 'The first line of the file is a header'
                    --separator=[CHAR] 'Field separator (default: ,)'
                    --comment=[CHAR] 'Lines starting with this character are ignored'",
                ),
        )
        .get_matches();

    setup_logger(&matches)?;

    let timer = ConnTimer::now();
    match matches.subcommand() {
        ("percolation", Some(sub_matches)) => run_percolation(sub_matches)?,
        ("components", Some(sub_matches)) => run_components(sub_matches)?,
        _ => unreachable!("A subcommand is required"),
    }
    info!("[Success][{}]", timer.elapsed());
    Ok(())
}

fn run_percolation(matches: &ArgMatches) -> Result<(), ConnError> {
    let grid_size = value_t!(matches, "grid_size", usize).unwrap_or_else(|e| e.exit());
    let trials = value_t!(matches, "trials", usize).unwrap_or_else(|e| e.exit());
    let mut rng = if matches.is_present("seed") {
        StdRng::seed_from_u64(value_t!(matches, "seed", u64).unwrap_or_else(|e| e.exit()))
    } else {
        StdRng::from_entropy()
    };

    let stats = PercolationStats::run(grid_size, trials, &mut rng)?;
    info!("mean                    = {:.6}", stats.mean());
    info!("stddev                  = {:.6}", stats.stddev());
    info!(
        "95% confidence interval = [{:.6}, {:.6}]",
        stats.confidence_lo(),
        stats.confidence_hi()
    );
    Ok(())
}

fn run_components(matches: &ArgMatches) -> Result<(), ConnError> {
    let edge_file = matches.value_of("edge_file").unwrap_or_default();
    let vertex_count = if matches.is_present("vertices") {
        Some(value_t!(matches, "vertices", usize).unwrap_or_else(|e| e.exit()))
    } else {
        None
    };
    let options = EdgeListOptions::new(
        matches.is_present("headers"),
        matches.value_of("separator").map(parse_char_option).transpose()?,
        matches.value_of("comment").map(parse_char_option).transpose()?,
        vertex_count,
    );

    let graph = load_edge_list(edge_file, &options)?;
    let cc = ConnectedComponents::new(&graph);
    info!("{} components", cc.count());
    for (id, component) in cc.components().iter().enumerate() {
        info!("Component {}: {} vertices", id, component.len());
        debug!("Component {}: [{}]", id, component.iter().join(" "));
    }
    Ok(())
}

fn parse_char_option(value: &str) -> Result<u8, ConnError> {
    match value {
        "\\t" | "tab" => Ok(b'\t'),
        _ if value.len() == 1 && value.is_ascii() => Ok(value.as_bytes()[0]),
        _ => Err(ConnError::Generic(format!("Expected a single ASCII character, got '{}'", value))),
    }
}

fn setup_logger(matches: &ArgMatches) -> Result<(), ConnError> {
    // Set log level.
    let log_level = match value_t!(matches, "loglevel", LogLevel).unwrap_or(LogLevel::Info) {
        LogLevel::Error => Level::Error,
        LogLevel::Warn => Level::Warn,
        LogLevel::Info => Level::Info,
        LogLevel::Debug => Level::Debug,
        LogLevel::Trace => Level::Trace,
    };
    init_logger(log_level)
}
