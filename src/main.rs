use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;
use fingering::{
    process_json, updated_file_name, DocumentReport, FingeringConfig, FingeringError, HandSize,
};

/// Assign piano fingerings to both hands of a Piano Vision JSON file.
#[derive(Parser, Debug)]
#[command(name = "fingering", version, about)]
struct Args {
    /// Piano Vision JSON file to read
    input: PathBuf,

    /// Where to write the result (default: <input>_updated.json)
    output: Option<PathBuf>,

    /// Hand size: XXS, XS, S, M, L, XL or XXL
    #[arg(long)]
    hand_size: Option<HandSize>,

    /// Lookahead depth, clamped to 3..=9
    #[arg(long)]
    depth: Option<usize>,

    /// YAML settings file (hand-size, depth); flags take precedence
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the result instead of writing a file
    #[arg(long)]
    stdout: bool,

    /// Also write a JSON summary of the run (per hand: size, depth, notes, assigned)
    #[arg(long)]
    report: Option<PathBuf>,
}

fn load_config(args: &Args) -> Result<FingeringConfig, FingeringError> {
    let config = match &args.config {
        Some(path) => FingeringConfig::from_yaml(&fs::read_to_string(path)?)?,
        None => FingeringConfig::default(),
    };
    Ok(config.with_overrides(args.hand_size, args.depth))
}

fn write_report(path: &Path, report: &DocumentReport) -> Result<(), FingeringError> {
    fs::write(path, report.to_json()?)?;
    Ok(())
}

fn default_output(input: &Path) -> PathBuf {
    let name = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "fingering.json".to_string());
    input.with_file_name(updated_file_name(&name))
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let config = match load_config(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            process::exit(1);
        }
    };
    log::info!(
        "Fingering {} (hand size {}, depth {})",
        args.input.display(),
        config.hand_size,
        config.depth
    );

    // Read input file
    let source = match fs::read_to_string(&args.input) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Error reading file '{}': {}", args.input.display(), e);
            process::exit(1);
        }
    };

    let (json, report) = match process_json(&source, &config) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("Fingering error: {}", e);
            process::exit(1);
        }
    };

    for hand in &report.hands {
        eprintln!(
            "{} hand: {} of {} notes fingered",
            hand.side, hand.assigned, hand.notes
        );
    }

    if let Some(path) = &args.report {
        if let Err(e) = write_report(path, &report) {
            eprintln!("Error writing report to '{}': {}", path.display(), e);
            process::exit(1);
        }
    }

    if args.stdout {
        println!("{}", json);
        return;
    }

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| default_output(&args.input));
    if let Err(e) = fs::write(&output, &json) {
        eprintln!("Error writing to '{}': {}", output.display(), e);
        process::exit(1);
    }
    eprintln!("Wrote fingered document to {}", output.display());
}
