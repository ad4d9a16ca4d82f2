mod model_file;

use clap::{Parser, Subcommand};
use log::LevelFilter;
use serde::Serialize;
use slacklp_solver::{LinearProgram, Relation, SolutionStatus};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "slacklp")]
#[command(about = "Solve linear programs with the two-phase simplex method", long_about = None)]
struct Cli {
    /// Log solver progress (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a model and print the optimal solution
    Solve {
        /// The JSON model file
        file: PathBuf,
        /// Output format (json, pretty)
        #[arg(short, long, default_value = "pretty")]
        format: String,
    },
    /// Print the canonical form of a model and its column map
    StandardForm {
        /// The JSON model file
        file: PathBuf,
    },
    /// Check a model file for errors
    Check {
        /// The JSON model file
        file: PathBuf,
    },
}

#[derive(Serialize)]
struct Report<'a> {
    status: SolutionStatus,
    /// `null` when infeasible or unbounded
    objective: Option<f64>,
    pivots: usize,
    values: Vec<VariableValue<'a>>,
}

#[derive(Serialize)]
struct VariableValue<'a> {
    name: &'a str,
    value: f64,
}

fn load_or_exit(file: &Path) -> LinearProgram {
    match model_file::load(file) {
        Ok(program) => program,
        Err(e) => {
            eprintln!("✗ {}: {}", file.display(), e);
            std::process::exit(1);
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    match cli.command {
        Commands::Solve { file, format } => {
            let mut program = load_or_exit(&file);

            let (status, pivots, feasible) = match program.solve() {
                Ok(solution) => (solution.status, solution.pivots, solution.is_feasible()),
                Err(e) => {
                    eprintln!("Model error: {}", e);
                    std::process::exit(1);
                }
            };
            // The solution is cached, so these only read it back
            let objective = program.objective_value().ok().flatten();
            let values = program.values().ok().flatten().unwrap_or_default();

            if format == "json" {
                let report = Report {
                    status,
                    objective: objective.filter(|v| v.is_finite()),
                    pivots,
                    values: program
                        .variables()
                        .iter()
                        .zip(&values)
                        .map(|(v, &value)| VariableValue {
                            name: v.name(),
                            value,
                        })
                        .collect(),
                };
                match serde_json::to_string_pretty(&report) {
                    Ok(json) => println!("{}", json),
                    Err(e) => {
                        eprintln!("Error writing report: {}", e);
                        std::process::exit(1);
                    }
                }
            } else {
                match status {
                    SolutionStatus::Feasible => {
                        println!("Status: OPTIMAL");
                        if let Some(objective) = objective {
                            println!("Objective: {}", objective);
                        }
                        println!("Pivots: {}", pivots);
                        println!();
                        println!("Variables:");
                        for (variable, value) in program.variables().iter().zip(&values) {
                            println!("  {:20} {:12.6}", variable.name(), value);
                        }
                    }
                    SolutionStatus::Infeasible => {
                        println!("Status: INFEASIBLE");
                        println!("No solution exists that satisfies all constraints.");
                    }
                    SolutionStatus::Unbounded => {
                        println!("Status: UNBOUNDED");
                        println!("The problem has no finite optimal solution.");
                    }
                }
            }

            if !feasible {
                std::process::exit(1);
            }
        }
        Commands::StandardForm { file } => {
            let program = load_or_exit(&file);

            let (form, columns) = match program.build_standard_form() {
                Ok(built) => built,
                Err(e) => {
                    eprintln!("Model error: {}", e);
                    std::process::exit(1);
                }
            };

            print!("{}", form);
            println!();
            println!("Columns:");
            for (variable, substitution) in program.variables().iter().zip(columns.substitutions()) {
                println!("  {} = {}", variable.name(), substitution);
            }
        }
        Commands::Check { file } => {
            let program = load_or_exit(&file);

            let mut counts = [0usize; 3];
            for constraint in program.constraints() {
                let slot = match constraint.relation() {
                    Relation::Le => 0,
                    Relation::Ge => 1,
                    Relation::Eq => 2,
                };
                counts[slot] += 1;
            }
            let free = program
                .variables()
                .iter()
                .filter(|v| v.lower() == f64::NEG_INFINITY && v.upper() == f64::INFINITY)
                .count();

            println!("✓ {} is valid", file.display());
            println!("  {} variables ({} free)", program.variables().len(), free);
            println!(
                "  {} constraints ({} <=, {} >=, {} =)",
                program.constraints().len(),
                counts[0],
                counts[1],
                counts[2]
            );
            if let Some(objective) = program.objective() {
                println!(
                    "  objective: {:?} over {} terms",
                    objective.goal(),
                    objective.variables().len()
                );
            }
        }
    }
}
