mod parsers;
mod random_graph;
mod result;

use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use colouring_solver::asserts::COLOURING_ASSERT_LEVEL_DEFINITION;
use colouring_solver::asserts::COLOURING_ASSERT_MODERATE;
use colouring_solver::options::SolverOptions;
use colouring_solver::results::SweepResult;
use colouring_solver::statistics::configure_statistic_logging;
use colouring_solver::ColouringSolver;
use colouring_solver::Graph;
use log::error;
use log::info;
use log::warn;
use log::LevelFilter;
use rand::rngs::SmallRng;
use rand::Rng;
use rand::SeedableRng;
use result::ColouringError;
use result::ColouringResult;

use crate::parsers::dimacs::parse_col;
use crate::random_graph::generate_random_graph;
use crate::random_graph::DEFAULT_NUM_VERTICES;

#[derive(Debug, Parser)]
#[command(
    help_template = "\
{before-help}{name} {version}
Authors: {author}
About: {about}

{usage-heading}\n{tab}{usage}

{all-args}{after-help}
",
    author,
    version,
    about
)]
struct Args {
    /// The instance to colour, given in the DIMACS graph colouring format ('*.col').
    ///
    /// If no instance is provided, a random map is generated; see the options
    /// '--num-vertices', '--edge-probability' and '--random-seed'.
    #[clap(verbatim_doc_comment)]
    instance_path: Option<PathBuf>,

    /// The number of regions of the generated map.
    ///
    /// If it is not provided, a number between 6 and 12 is chosen using the random seed. Ignored
    /// when an instance is provided.
    ///
    /// Possible values: usize
    #[arg(short = 'n', long = "num-vertices", verbatim_doc_comment)]
    num_vertices: Option<usize>,

    /// The probability (in percent) that two regions of the generated map are neighbours.
    ///
    /// Ignored when an instance is provided.
    ///
    /// Possible values: u32, between 0 and 100
    #[arg(
        short = 'p',
        long = "edge-probability",
        default_value_t = 40,
        value_parser = clap::value_parser!(u32).range(0..=100),
        verbatim_doc_comment
    )]
    edge_probability: u32,

    /// The seed used for generating the map.
    ///
    /// Possible values: u64
    #[arg(short = 'r', long = "random-seed", default_value_t = 42, verbatim_doc_comment)]
    random_seed: u64,

    /// The largest number of colours which is tried.
    ///
    /// If it is not provided, the number of regions is used, with which every map can be
    /// coloured.
    ///
    /// Possible values: u32
    #[arg(long = "max-colours", verbatim_doc_comment)]
    max_colours: Option<u32>,

    /// Disables the arc-consistency preprocessing, which means that every attempt is decided by
    /// backtracking search.
    ///
    /// Possible values: bool
    #[arg(long = "no-arc-consistency", verbatim_doc_comment)]
    no_arc_consistency: bool,

    /// Enables logging of the stages of every attempt and of the attempts themselves.
    ///
    /// Possible values: bool
    #[arg(short = 'v', long = "verbose", verbatim_doc_comment)]
    verbose: bool,

    /// Enables logging of statistics from the solver.
    ///
    /// Possible values: bool
    #[arg(short = 's', long = "log-statistics", verbatim_doc_comment)]
    log_statistics: bool,

    /// Prints the adjacency list of the map before solving.
    ///
    /// Possible values: bool
    #[arg(long = "print-adjacency", verbatim_doc_comment)]
    print_adjacency: bool,
}

fn configure_logging(verbose: bool, log_statistics: bool) -> std::io::Result<()> {
    if log_statistics {
        configure_statistic_logging("c STAT", None, None, None);
    }

    let level_filter = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    env_logger::Builder::new()
        .format(move |buf, record| {
            write!(buf, "c ")?;

            writeln!(buf, "{}", record.args())
        })
        .filter_level(level_filter)
        .target(env_logger::Target::Stdout)
        .init();
    info!("Logging successfully configured");
    Ok(())
}

fn main() {
    match run() {
        Ok(()) => {}
        Err(e) => {
            error!("Execution failed, error: {e}");
            std::process::exit(1);
        }
    }
}

fn run() -> ColouringResult<()> {
    let args = Args::parse();

    configure_logging(args.verbose, args.log_statistics)?;

    if COLOURING_ASSERT_LEVEL_DEFINITION >= COLOURING_ASSERT_MODERATE {
        warn!(
            "Potential performance degradation: the colouring assert level is set to {}, meaning many debug asserts are active which may result in performance degradation.",
            COLOURING_ASSERT_LEVEL_DEFINITION
        );
    };

    let graph = read_graph(&args)?;
    info!(
        "Colouring a map with {} regions and {} borders",
        graph.num_vertices(),
        graph.num_edges()
    );

    if args.print_adjacency {
        println!("===== ADJACENCY LIST =====");
        print!("{}", graph.display_adjacency());
        println!();
    }

    let options = SolverOptions {
        use_arc_consistency: !args.no_arc_consistency,
        verbose: args.verbose,
    };
    let mut solver = ColouringSolver::with_options(options);

    match solver.find_minimum_colouring(&graph, args.max_colours) {
        SweepResult::Coloured {
            num_colours,
            colouring,
        } => {
            println!("Solution found with {num_colours} colours:");
            print!("{colouring}");
        }
        SweepResult::NoColouringFound { max_colours } => {
            println!("No valid colouring found with at most {max_colours} colours.");
        }
    }

    if args.log_statistics {
        solver.log_statistics();
    }

    Ok(())
}

fn read_graph(args: &Args) -> ColouringResult<Graph> {
    let Some(instance_path) = args.instance_path.as_ref() else {
        let mut rng = SmallRng::seed_from_u64(args.random_seed);
        let num_vertices = args
            .num_vertices
            .unwrap_or_else(|| rng.gen_range(DEFAULT_NUM_VERTICES));
        info!(
            "Generating a random map with {num_vertices} regions (seed {}, edge probability {}%)",
            args.random_seed, args.edge_probability
        );

        return Ok(generate_random_graph(
            &mut rng,
            num_vertices,
            args.edge_probability,
        )?);
    };

    match instance_path.extension().and_then(|ext| ext.to_str()) {
        Some("col") => {
            let instance = File::open(instance_path)?;
            Ok(parse_col(instance)?)
        }
        _ => Err(ColouringError::invalid_instance(instance_path.display())),
    }
}
