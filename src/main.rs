//! Command line interface for comparing the classic sorting algorithms.

use std::io::{self, BufRead, Write};

use clap::{Parser, Subcommand};
use thiserror::Error;

use sort_lab::harness::{self, Algorithm};

// ANSI color helpers
fn green(s: &str) -> String {
    format!("\x1b[32m{}\x1b[0m", s)
}
fn red(s: &str) -> String {
    format!("\x1b[31m{}\x1b[0m", s)
}
fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

#[derive(Parser)]
#[command(name = "sortlab", version, about = "Compare classic sorting algorithms")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Read numbers from stdin, pick an algorithm and print the sorted result
    Sort,
    /// Run every algorithm against the fixed correctness cases
    Check,
    /// Time every algorithm across a range of input lengths
    Perf {
        /// Input lengths to measure, comma separated
        #[arg(long, value_delimiter = ',')]
        sizes: Option<Vec<usize>>,
    },
}

#[derive(Debug, Error)]
enum CliError {
    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),
    #[error("input stream closed before a valid line was entered")]
    InputClosed,
    #[error("{failed} correctness check(s) failed")]
    ChecksFailed { failed: usize },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command.unwrap_or(Command::Sort) {
        Command::Sort => run_sort(),
        Command::Check => run_check(),
        Command::Perf { sizes } => {
            run_perf(sizes.as_deref().unwrap_or(harness::DEFAULT_SIZES));
            Ok(())
        }
    };

    if let Err(err) = result {
        eprintln!("{}", red(&format!("error: {err}")));
        std::process::exit(1);
    }
}

fn prompt_line(prompt: &str) -> Result<String, CliError> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut line = String::new();
    // read_line returns 0 bytes on EOF.
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Err(CliError::InputClosed);
    }

    Ok(line)
}

/// Parses one line of whitespace-separated integers. An empty line is a
/// valid empty sequence.
fn parse_numbers(line: &str) -> Result<Vec<i32>, std::num::ParseIntError> {
    line.split_whitespace().map(str::parse).collect()
}

/// Re-prompts until a line parses. There is no retry limit, only EOF ends
/// the loop.
fn read_numbers() -> Result<Vec<i32>, CliError> {
    loop {
        let line = prompt_line("Numbers to sort, separated by spaces: ")?;

        match parse_numbers(&line) {
            Ok(values) => return Ok(values),
            Err(_) => println!("{}", red("That wasn't a list of integers, try again.")),
        }
    }
}

/// Re-prompts until a valid menu index is entered, same retry rules as
/// [`read_numbers`].
fn read_algorithm(algorithms: &[Algorithm]) -> Result<usize, CliError> {
    println!("\nAvailable algorithms:");
    for (i, algo) in algorithms.iter().enumerate() {
        println!("  {}. {}", i + 1, algo.name);
    }

    loop {
        let line = prompt_line(&format!("Pick one (1-{}): ", algorithms.len()))?;

        match line.trim().parse::<usize>() {
            Ok(choice) if (1..=algorithms.len()).contains(&choice) => return Ok(choice - 1),
            _ => println!("{}", red("Invalid selection, try again.")),
        }
    }
}

fn run_sort() -> Result<(), CliError> {
    let algorithms = harness::algorithms();

    let values = read_numbers()?;
    println!("\nInput: {:?}", values);

    let choice = read_algorithm(&algorithms)?;
    let algo = &algorithms[choice];

    // Sort a copy, the input stays visible above the result.
    let mut result = values.clone();
    (algo.sort)(&mut result);

    println!("\n{}: {:?}", algo.name, result);

    Ok(())
}

fn run_check() -> Result<(), CliError> {
    let mut failed = 0;

    for report in harness::check_correctness(harness::FIXED_CASES) {
        println!("{} {:?}", bold("case"), report.input);

        for outcome in &report.outcomes {
            let marker = if outcome.pass {
                green("ok")
            } else {
                failed += 1;
                red("FAILED")
            };
            println!("  {:<20} {:?} {}", outcome.algorithm, outcome.output, marker);
        }
        println!();
    }

    if failed > 0 {
        return Err(CliError::ChecksFailed { failed });
    }

    Ok(())
}

fn run_perf(sizes: &[usize]) {
    let rows = harness::measure_perf(sizes);

    print!("{:>8}", "len");
    for algo in harness::algorithms() {
        print!(" {:>20}", algo.name);
    }
    println!();

    for row in &rows {
        print!("{:>8}", row.len);
        for timing in &row.timings {
            match timing.elapsed {
                Some(elapsed) => print!(" {:>20}", format!("{:.3?}", elapsed)),
                None => print!(" {:>20}", "n/a"),
            }
        }
        println!();
    }
}
