// File: src/main.rs
//
// Main entry point for flowdemo.
// Handles command-line argument parsing and dispatches to the sample
// programs, the catalogue listing, or the snapshot checker.

use clap::{Parser as ClapParser, Subcommand};
use colored::Colorize;
use flowdemo::console::Console;
use flowdemo::errors::FlowError;
use flowdemo::programs::{Program, ProgramInfo};
use flowdemo::snapshot;
use std::path::PathBuf;
use std::process;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(ClapParser)]
#[command(
    name = "flowdemo",
    about = "Sample control-flow programs for the AST flowchart visualizer",
    version = env!("CARGO_PKG_VERSION"),
    long_about = None
)]
struct Cli {
    /// Log at info level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored diagnostics
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[command(arg_required_else_help = true)]
enum Commands {
    /// Multi-way selection over a fixed integer
    Switch,

    /// Nested conditionals, a while loop and a for loop
    Loops,

    /// Switch with a case that falls through
    Fallthrough,

    /// Two do-while loops
    DoWhile,

    /// Run a sample program by name
    Run {
        /// Program name as shown by `flowdemo list`
        name: String,
    },

    /// List the sample programs
    List {
        /// Print the catalogue as JSON
        #[arg(long)]
        json: bool,
    },

    /// Compare every program's output with its .out snapshot
    Test {
        /// Directory holding the .out files
        #[arg(long, default_value = "tests/snapshots")]
        dir: PathBuf,

        /// Regenerate all .out files based on actual output
        #[arg(long)]
        update: bool,
    },
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn list(json: bool, console: &mut Console) -> Result<i32, FlowError> {
    let infos: Vec<ProgramInfo> = Program::all().iter().map(|p| p.info()).collect();

    if json {
        let text = serde_json::to_string_pretty(&infos)
            .map_err(|e| FlowError::output_error(format!("cannot encode catalogue: {}", e)))?;
        console.write_line(&text)?;
        return Ok(0);
    }

    for info in &infos {
        console.write_line(&format!(
            "{:<12} {} {}",
            info.name.bright_green().bold(),
            info.description,
            format!("({} lines)", info.lines).dimmed()
        ))?;
    }
    Ok(0)
}

fn execute(command: Commands) -> Result<i32, FlowError> {
    let mut console = Console::new();

    match command {
        Commands::Switch => Program::Switch.run(&mut console).map(|_| 0),
        Commands::Loops => Program::Loops.run(&mut console).map(|_| 0),
        Commands::Fallthrough => Program::Fallthrough.run(&mut console).map(|_| 0),
        Commands::DoWhile => Program::DoWhile.run(&mut console).map(|_| 0),
        Commands::Run { name } => {
            let program = Program::from_name(&name)?;
            program.run(&mut console).map(|_| 0)
        }
        Commands::List { json } => list(json, &mut console),
        Commands::Test { dir, update } => {
            let report = snapshot::run_snapshots(&dir, update)?;
            report.print(&mut console)?;
            Ok(report.exit_code())
        }
    }
}

fn main() {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }
    init_logging(cli.verbose);

    match execute(cli.command) {
        Ok(code) => process::exit(code),
        Err(err) => {
            eprint!("{}", err);
            process::exit(1);
        }
    }
}
