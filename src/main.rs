//! Puzzle Fighter runner (default binary).
//!
//! Reads an instruction list from a file or stdin, runs it on a fresh field
//! and prints the final text dump, the power gem report, or every snapshot
//! as line-delimited JSON.

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use puzzle_fighter::adapter::{parse_instructions_json, write_history};
use puzzle_fighter::core::{FieldConfig, Instruction};
use puzzle_fighter::engine::{self, parse_script};
use puzzle_fighter::types::{DEFAULT_COLS, DEFAULT_ROWS, DEFAULT_SPAWN_OFFSET};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum InputFormat {
    /// One instruction per line: `BR ABBABAAB` or `['BR'], ['ABBABAAB']`
    Text,
    /// `[["BR","ABBABAAB"], ...]`
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Output {
    /// Final field, one row per line
    Dump,
    /// `pos WxH` for every power gem
    Report,
    /// Every snapshot of every instruction as JSON lines, then a summary
    History,
}

/// Run Puzzle Fighter instructions and print the resulting field.
#[derive(Debug, Parser)]
#[command(name = "puzzle-fighter", version)]
struct Args {
    /// Instruction file; stdin when omitted or `-`
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Field width in cells.
    #[arg(long, env = "PUZZLE_FIGHTER_COLS", default_value_t = DEFAULT_COLS)]
    cols: usize,

    /// Field height in cells.
    #[arg(long, env = "PUZZLE_FIGHTER_ROWS", default_value_t = DEFAULT_ROWS)]
    rows: usize,

    /// Column where new pairs enter.
    #[arg(long, env = "PUZZLE_FIGHTER_SPAWN_OFFSET", default_value_t = DEFAULT_SPAWN_OFFSET)]
    spawn_offset: usize,

    #[arg(short, long, value_enum, default_value_t = InputFormat::Text)]
    format: InputFormat,

    #[arg(short, long, value_enum, default_value_t = Output::Dump)]
    output: Output,

    /// Do not report diagnostics on stderr.
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    run(&args)
}

fn run(args: &Args) -> Result<()> {
    let config = FieldConfig::new(args.cols, args.rows, args.spawn_offset)
        .context("invalid field configuration")?;

    let text = read_input(args.input.as_deref())?;
    let instructions = parse_instructions(&text, args.format)?;
    let outcome = engine::run(config, &instructions)?;

    if !args.quiet {
        for diagnostic in &outcome.diagnostics {
            eprintln!("[engine] {diagnostic}");
        }
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match args.output {
        Output::Dump => writeln!(out, "{}", outcome.state)?,
        Output::Report => {
            for report in &outcome.power_gems {
                writeln!(out, "{report}")?;
            }
        }
        Output::History => write_history(&mut out, &outcome)?,
    }
    out.flush()?;
    Ok(())
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => {
            fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
        }
        _ => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("failed to read instructions from stdin")?;
            Ok(text)
        }
    }
}

fn parse_instructions(text: &str, format: InputFormat) -> Result<Vec<Instruction>> {
    match format {
        InputFormat::Text => parse_script(text).context("invalid instruction script"),
        InputFormat::Json => parse_instructions_json(text),
    }
}
