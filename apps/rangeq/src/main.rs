use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rangeq_config::{LOG_ENV, RangeqConfig, load_config, save_config};
use rangeq_engine::{Backend, Engine, write_answers};
use rangeq_logging::{LogFormat, LogLevel, Logger};
use std::io::{BufWriter, IsTerminal, Read};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "rangeq", version)]
#[command(about = "Batch range-update / point-query processing over integer sequences.", long_about = None)]
struct Cli {
    /// Config file (.yaml, .yml or .json).
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Diagnostics level on stderr. If omitted, RANGEQ_LOG is used.
    #[arg(long, global = true)]
    log_level: Option<LogLevel>,
    /// Diagnostics format: plain, json or compact.
    #[arg(long, global = true)]
    log_format: Option<LogFormat>,
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Apply range-adds and answer point queries (`n q`, values, `1 a b u` / `2 k` records).
    Run {
        /// Input file; stdin when omitted.
        #[arg(long)]
        input: Option<PathBuf>,
        /// "fenwick" (default) or "naive".
        #[arg(long)]
        backend: Option<Backend>,
    },

    /// Rebuild arrays from range-minimum constraints; prints the sum or -1 per case.
    MinRecon {
        /// Input file; stdin when omitted.
        #[arg(long)]
        input: Option<PathBuf>,
    },

    /// Write the effective configuration to a file.
    Config {
        #[arg(long)]
        write: PathBuf,
    },
}

fn resolve_config(cli: &Cli) -> Result<RangeqConfig> {
    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => RangeqConfig::default(),
    };

    match cli.log_level {
        Some(level) => config.logging.level = level,
        None => config.apply_log_env(std::env::var(LOG_ENV).ok().as_deref())?,
    }
    if let Some(format) = cli.log_format {
        config.logging.format = format;
    }
    config.logging.colors &= std::io::stderr().is_terminal();

    Ok(config)
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(p) => std::fs::read_to_string(p).with_context(|| format!("read input {p:?}")),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("read input from stdin")?;
            Ok(buf)
        }
    }
}

fn print_answers(answers: &[i64]) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    write_answers(&mut out, answers).context("write answers to stdout")
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = resolve_config(&cli)?;
    let logger = Logger::stderr(config.logging.clone());

    match cli.cmd {
        Command::Run { input, backend } => {
            let backend = backend.unwrap_or(config.backend);
            let text = read_input(input.as_deref())?;
            let report = Engine::new(backend, &logger).run_input(&text)?;
            print_answers(&report.answers)?;
        }

        Command::MinRecon { input } => {
            let text = read_input(input.as_deref())?;
            let answers =
                rangeq_minrecon::solve(&text).context("reconstruct from range-minimum constraints")?;
            logger.info("minrecon", format!("solved {} cases", answers.len()));
            print_answers(&answers)?;
        }

        Command::Config { write } => {
            save_config(&config, &write)?;
            logger.info("cli", format!("wrote config {}", write.display()));
        }
    }

    Ok(())
}
