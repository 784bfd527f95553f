use std::process::ExitCode;

use clap::{Parser, Subcommand};
use colored::Colorize;
use itertools::Itertools;

use sudoku_engine_lib::prelude::*;
use variant_constraints::prelude::*;

#[derive(Debug, Parser)]
#[clap(name = "Sudoku Engine")]
#[clap(about = "Variant Sudoku propagation engine utility.")]
#[clap(version, long_about = None)]
struct Args {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Brute-force solve a puzzle.
    Solve {
        #[clap(flatten)]
        puzzle: PuzzleArgs,
        /// Count solutions up to this limit instead of printing one.
        #[clap(long)]
        count: Option<usize>,
    },
    /// Solve step-by-step, printing each deduction.
    Logical {
        #[clap(flatten)]
        puzzle: PuzzleArgs,
    },
    /// List the registered constraints.
    List,
}

#[derive(Debug, clap::Args)]
struct PuzzleArgs {
    /// Path of a puzzle description JSON file.
    #[clap(short, long)]
    file: Option<String>,

    /// Givens as a row-major digit string (0 for empty).
    #[clap(short, long)]
    givens: Option<String>,

    /// Board size.
    #[clap(short, long, default_value_t = 9)]
    size: usize,

    /// A constraint as name or name=options; may repeat.
    #[clap(short, long = "constraint")]
    constraints: Vec<String>,
}

impl PuzzleArgs {
    fn to_puzzle(&self) -> Result<PuzzleFile, String> {
        let mut puzzle = match &self.file {
            Some(path) => {
                let json = std::fs::read_to_string(path)
                    .map_err(|error| format!("Cannot read {}: {}", path, error))?;
                PuzzleFile::from_json(&json)?
            }
            None => PuzzleFile {
                size: self.size,
                regions: Vec::new(),
                givens: String::new(),
                constraints: Vec::new(),
            },
        };

        if let Some(givens) = &self.givens {
            puzzle.givens = givens.clone();
        }
        for entry in &self.constraints {
            let (name, options) = match entry.split_once('=') {
                Some((name, options)) => (name, options),
                None => (entry.as_str(), ""),
            };
            puzzle.constraints.push(PuzzleConstraint {
                name: name.to_owned(),
                options: options.to_owned(),
            });
        }

        Ok(puzzle)
    }

    fn to_solver(&self) -> Result<Solver, String> {
        self.to_puzzle()?.to_solver(&ConstraintRegistry::standard())
    }
}

fn print_grid(board: &Board) {
    let size = board.size();
    let cu = board.cell_utility();
    for row in 0..size {
        let line = (0..size)
            .map(|column| {
                let mask = board.cell(cu.cell(row, column));
                if mask.is_single() {
                    mask.value().to_string()
                } else {
                    ".".to_owned()
                }
            })
            .join(" ");
        println!("{}", line);
    }
}

fn solve(puzzle: &PuzzleArgs, count: Option<usize>) -> Result<(), String> {
    let solver = puzzle.to_solver()?;

    if let Some(maximum) = count {
        let result = solver.find_solution_count(maximum, None);
        match result {
            SolutionCountResult::ExactCount(count) => {
                println!("{} solution(s).", count.to_string().green())
            }
            SolutionCountResult::AtLeastCount(count) => {
                println!("At least {} solution(s).", count.to_string().yellow())
            }
            SolutionCountResult::Cancelled(count) => {
                println!("Cancelled after {} solution(s).", count)
            }
        }
        return Ok(());
    }

    match solver.find_first_solution(None) {
        SingleSolutionResult::Solved(board) => {
            println!("{}", "Solved:".green());
            print_grid(&board);
            Ok(())
        }
        SingleSolutionResult::None => Err("No solution exists.".to_owned()),
        SingleSolutionResult::Cancelled => Err("Cancelled.".to_owned()),
    }
}

fn logical(puzzle: &PuzzleArgs) -> Result<(), String> {
    let mut solver = puzzle.to_solver()?;
    let result = solver.run_logical_solve();

    if let Some(steps) = result.description() {
        for step in steps.iter() {
            println!("{}", step);
        }
    }

    match result {
        LogicalSolveResult::Solved(_) => println!("{}", "Solved logically.".green()),
        LogicalSolveResult::Invalid(_) => println!("{}", "Contradiction found.".red()),
        LogicalSolveResult::Changed(_) => {
            println!("{}", "Stuck before a solution; board so far:".yellow())
        }
        LogicalSolveResult::None => println!("{}", "No logical steps apply.".yellow()),
    }
    print_grid(solver.board());
    Ok(())
}

fn list() {
    let registry = ConstraintRegistry::standard();
    for registration in registry.registrations() {
        println!(
            "{:<12} {}",
            registration.console_name().cyan(),
            registration.display_name()
        );
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    let result = match &args.command {
        Command::Solve { puzzle, count } => solve(puzzle, *count),
        Command::Logical { puzzle } => logical(puzzle),
        Command::List => {
            list();
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("{}", message.red());
            ExitCode::FAILURE
        }
    }
}
