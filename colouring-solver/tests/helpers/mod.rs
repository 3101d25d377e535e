//! Crate to run integration tests for the solver.
#![allow(
    dead_code,
    reason = "is used in integration tests but unable to find a way to silence these warnings"
)]

use std::fs::File;
use std::path::Path;
use std::path::PathBuf;
use std::process::Command;
use std::process::ExitStatus;
use std::process::Stdio;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;
use std::time::Duration;

use regex::Regex;
use wait_timeout::ChildExt;

#[derive(Debug)]
pub(crate) struct Files {
    pub(crate) log_file: PathBuf,
    pub(crate) err_file: PathBuf,
}

impl Files {
    pub(crate) fn cleanup(self) -> std::io::Result<()> {
        std::fs::remove_file(self.log_file)?;
        std::fs::remove_file(self.err_file)?;

        Ok(())
    }
}

/// The outcome of running the solver binary.
#[derive(Debug)]
pub(crate) struct SolverRun {
    pub(crate) status: ExitStatus,
    pub(crate) output: String,
}

/// A colouring as printed by the solver.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct PrintedSolution {
    pub(crate) num_colours: u32,
    pub(crate) colours: Vec<u32>,
}

pub(crate) fn instance_path(instance_name: &str) -> String {
    format!(
        "{}/tests/instances/{instance_name}",
        env!("CARGO_MANIFEST_DIR")
    )
}

/// Runs the solver on the instance with the given name in `tests/instances`.
pub(crate) fn run_instance(instance_name: &str, args: &[&str]) -> SolverRun {
    static NUM_RUNS: AtomicUsize = AtomicUsize::new(0);

    let mut all_args = args.iter().map(|&arg| arg.to_owned()).collect::<Vec<_>>();
    all_args.push(instance_path(instance_name));

    let run_name = format!(
        "{instance_name}-{}",
        NUM_RUNS.fetch_add(1, Ordering::Relaxed)
    );
    run_solver_with_options(all_args, &run_name)
}

/// Runs the solver with the given command-line arguments; `run_name` distinguishes the output
/// files of concurrently running tests.
pub(crate) fn run_solver_with_options(
    args: impl IntoIterator<Item = String>,
    run_name: &str,
) -> SolverRun {
    const TEST_TIMEOUT: Duration = Duration::from_secs(60);

    let solver = PathBuf::from(env!("CARGO_BIN_EXE_colouring-solver"));
    let output_directory = Path::new(env!("CARGO_TARGET_TMPDIR"));

    let files = Files {
        log_file: output_directory.join(format!("{run_name}.log")),
        err_file: output_directory.join(format!("{run_name}.err")),
    };

    let mut command = Command::new(solver);

    for arg in args {
        let _ = command.arg(arg);
    }

    let mut child = command
        .stdout(File::create(&files.log_file).expect("Failed to create log file."))
        .stderr(File::create(&files.err_file).expect("Failed to create error file."))
        .stdin(Stdio::null())
        .spawn()
        .expect("Failed to run solver.");

    let status = match child.wait_timeout(TEST_TIMEOUT) {
        Ok(None) => panic!("solver took more than {} seconds", TEST_TIMEOUT.as_secs()),
        Ok(Some(status)) => status,
        Err(e) => panic!("error starting solver: {e}"),
    };

    let output = std::fs::read_to_string(&files.log_file).expect("Failed to read solver output");
    files.cleanup().expect("Failed to remove output files");

    SolverRun { status, output }
}

/// Reads the colouring from the output of the solver, if one was printed.
pub(crate) fn parse_solution(output: &str) -> Option<PrintedSolution> {
    let header = Regex::new(r"(?m)^Solution found with (\d+) colours:$").unwrap();
    let region = Regex::new(r"(?m)^Region (\d+) -> Colour (\d+)$").unwrap();

    let num_colours = header.captures(output)?[1].parse().unwrap();

    let mut colours = Vec::new();
    for (index, captures) in region.captures_iter(output).enumerate() {
        let vertex: usize = captures[1].parse().unwrap();
        assert_eq!(vertex, index, "regions should be printed in order");
        colours.push(captures[2].parse().unwrap());
    }

    Some(PrintedSolution {
        num_colours,
        colours,
    })
}

/// Reads the adjacency list which is printed with `--print-adjacency`.
pub(crate) fn parse_adjacency(output: &str) -> Vec<Vec<usize>> {
    let region = Regex::new(r"(?m)^Region (\d+):((?: \d+)*)$").unwrap();

    region
        .captures_iter(output)
        .enumerate()
        .map(|(index, captures)| {
            let vertex: usize = captures[1].parse().unwrap();
            assert_eq!(vertex, index, "regions should be printed in order");

            captures[2]
                .split_whitespace()
                .map(|neighbour| neighbour.parse().unwrap())
                .collect()
        })
        .collect()
}

/// Panics if two neighbouring regions have the same colour, or if more colours are used than
/// reported.
pub(crate) fn check_proper(adjacency: &[Vec<usize>], solution: &PrintedSolution) {
    assert_eq!(adjacency.len(), solution.colours.len());

    for (vertex, neighbours) in adjacency.iter().enumerate() {
        assert!(solution.colours[vertex] < solution.num_colours);

        for &neighbour in neighbours {
            assert_ne!(
                solution.colours[vertex], solution.colours[neighbour],
                "regions {vertex} and {neighbour} are neighbours with the same colour"
            );
        }
    }
}
