//! Register simulator CLI.
//!
//! This binary is the front end for the simulation engine. It performs:
//! 1. **Run:** Execute a program file to completion and print the final registers.
//! 2. **Step:** Execute a program one instruction at a time, printing each step.
//! 3. **Check / Fmt:** Validate a program file, or re-emit it in canonical form.
//! 4. **Edit:** An interactive line editor that builds, steps, saves, and loads programs.

mod repl;

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use regsim_core::common::{ConfigError, LoaderError};
use regsim_core::core::arch::snapshot::RegisterSnapshot;
use regsim_core::sim::loader;
use regsim_core::stats::SimStats;
use regsim_core::{Config, Simulation};

#[derive(Parser, Debug)]
#[command(
    name = "regsim",
    author,
    version,
    about = "Simple microprocessor simulator (MOV/ADD/SUB over AX..DX)",
    long_about = "Run, step, or edit programs written in a three-instruction dialect.\n\nEach line is `OP DEST, SRC` with OP one of MOV, ADD, SUB, DEST an 8-bit register\n(AH, AL, BH, BL, CH, CL, DH, DL) and SRC an 8-bit register or a literal 0-255.\n\nExamples:\n  regsim run -f demo.txt\n  regsim step -f demo.txt -n 2 --json\n  regsim edit"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a program to completion and print the final registers.
    Run {
        #[command(flatten)]
        opts: SessionOpts,
    },

    /// Single-step a program, printing the registers after every instruction.
    Step {
        #[command(flatten)]
        opts: SessionOpts,

        /// Number of steps (defaults to the program length). Stepping past the end restarts.
        #[arg(short = 'n', long)]
        steps: Option<usize>,
    },

    /// Parse a program file and report the first error.
    Check {
        /// Program file.
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Re-emit a program file in canonical form.
    Fmt {
        /// Program file.
        #[arg(short, long)]
        file: PathBuf,

        /// Write here instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Interactive editor: add and delete lines, step, run, save, and load.
    Edit {
        /// Program file to start from.
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// JSON configuration file.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Log every executed instruction.
        #[arg(long)]
        trace: bool,
    },
}

/// Options shared by the commands that execute a program file.
#[derive(Args, Debug)]
struct SessionOpts {
    /// Program file, one `OP DEST, SRC` per line.
    #[arg(short, long)]
    file: PathBuf,

    /// JSON configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print machine-readable JSON instead of tables.
    #[arg(long)]
    json: bool,

    /// Log every executed instruction.
    #[arg(long)]
    trace: bool,

    /// Print execution statistics at the end.
    #[arg(long)]
    stats: bool,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Loader(#[from] LoaderError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("could not encode JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
}

#[derive(Serialize)]
struct RunReport<'a> {
    executed: usize,
    registers: &'a RegisterSnapshot,
    stats: &'a SimStats,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let stdout = io::stdout();
    match dispatch(cli.command, &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[!] {e}");
            ExitCode::FAILURE
        }
    }
}

fn dispatch(command: Commands, out: &mut impl Write) -> Result<(), CliError> {
    match command {
        Commands::Run { opts } => cmd_run(&opts, out),
        Commands::Step { opts, steps } => cmd_step(&opts, steps, out),
        Commands::Check { file } => {
            init_logging(false);
            let program = loader::load_program(&file)?;
            writeln!(out, "{}: ok ({} instructions)", file.display(), program.len())?;
            Ok(())
        }
        Commands::Fmt { file, output } => {
            init_logging(false);
            let program = loader::load_program(&file)?;
            match output {
                Some(path) => loader::save_program(path, &program)?,
                None => writeln!(out, "{program}")?,
            }
            Ok(())
        }
        Commands::Edit {
            file,
            config,
            trace,
        } => {
            let config = load_config(config.as_ref(), trace, false)?;
            init_logging(config.general.trace_instructions);
            let mut sim = Simulation::new(&config);
            if let Some(path) = file {
                sim.load_program(loader::load_program(path)?);
            }
            let stdin = io::stdin();
            repl::run(&mut sim, stdin.lock(), &mut *out)?;
            Ok(())
        }
    }
}

/// Loads the configuration file, if any, and applies command-line overrides.
fn load_config(path: Option<&PathBuf>, trace: bool, stats: bool) -> Result<Config, CliError> {
    let mut config = match path {
        Some(p) => Config::from_file(p)?,
        None => Config::default(),
    };
    config.general.trace_instructions |= trace;
    config.general.print_stats |= stats;
    Ok(config)
}

/// Installs the stderr log subscriber. `RUST_LOG` takes precedence over the default level.
fn init_logging(trace: bool) {
    let default = if trace { "info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}

fn open_session(opts: &SessionOpts) -> Result<(Config, Simulation), CliError> {
    let config = load_config(opts.config.as_ref(), opts.trace, opts.stats)?;
    init_logging(config.general.trace_instructions);
    let program = loader::load_program(&opts.file)?;
    let sim = Simulation::with_program(&config, program);
    Ok((config, sim))
}

fn cmd_run(opts: &SessionOpts, out: &mut impl Write) -> Result<(), CliError> {
    let (config, mut sim) = open_session(opts)?;
    let executed = sim.run_to_completion().len();
    let registers = sim.snapshot();

    if opts.json {
        let report = RunReport {
            executed,
            registers: &registers,
            stats: sim.stats(),
        };
        writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
    } else {
        writeln!(out, "[*] Executed {executed} instructions from {}", opts.file.display())?;
        writeln!(out)?;
        write!(out, "{registers}")?;
    }

    if config.general.print_stats {
        sim.stats().print();
    }
    Ok(())
}

/// Steps `steps` times (default: the program length). Table output is streamed; only
/// `--json` keeps the step results, since it prints them as one array at the end.
fn cmd_step(
    opts: &SessionOpts,
    steps: Option<usize>,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let (config, mut sim) = open_session(opts)?;
    let steps = steps.unwrap_or_else(|| sim.program().len());

    let mut executed = 0usize;
    let mut results = Vec::new();
    for _ in 0..steps {
        let Some(result) = sim.step() else {
            break;
        };
        executed += 1;
        if opts.json {
            results.push(result);
        } else {
            writeln!(
                out,
                "[{:>3}] {}{}",
                result.executed_index + 1,
                result.instruction,
                if result.saturated { "  ; clamped" } else { "" }
            )?;
            write!(out, "{}", repl::format_changed(&result))?;
        }
    }

    if opts.json {
        writeln!(out, "{}", serde_json::to_string_pretty(&results)?)?;
    } else if executed == 0 {
        writeln!(out, "[*] Program is empty; nothing to step")?;
    }

    if config.general.print_stats {
        sim.stats().print();
    }
    Ok(())
}
