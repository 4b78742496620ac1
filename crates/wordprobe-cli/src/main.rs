use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use thiserror::Error;
use tracing::info;
use uuid::Uuid;

use wordprobe_core::{Profile, ValidationError, validate_profile};
use wordprobe_generate::{GenerateOptions, Generator};

#[derive(Debug, Error)]
enum CliError {
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "wordprobe", version, about = "Awareness-training candidate generator")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate candidates from a profile document.
    Generate(GenerateArgs),
    /// Print the JSON Schema for profile documents.
    Schema,
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Path to the profile JSON document, or `-` for stdin.
    #[arg(long, value_name = "PATH")]
    profile: PathBuf,
    /// Number of candidates to emit.
    #[arg(long)]
    count: Option<usize>,
    /// Minimum candidate length before the watermark.
    #[arg(long)]
    min_len: Option<usize>,
    /// Maximum candidate length before the watermark.
    #[arg(long)]
    max_len: Option<usize>,
    /// Disable the special-character stages.
    #[arg(long, default_value_t = false)]
    no_specials: bool,
    /// Disable the uppercase-variant stage.
    #[arg(long, default_value_t = false)]
    no_uppercase: bool,
    /// Seed for the call-scoped RNG.
    #[arg(long)]
    seed: Option<u64>,
    /// Output path (stdout when omitted).
    #[arg(long)]
    out: Option<PathBuf>,
    /// Emit the full output record as JSON instead of raw lines.
    #[arg(long, default_value_t = false)]
    json: bool,
}

/// Output record consumed by downstream tooling.
#[derive(Debug, Serialize)]
struct OutputRecord {
    lines: Vec<String>,
    count: usize,
}

fn main() -> Result<(), CliError> {
    init_logging();

    let cli = Cli::parse();
    match cli.command {
        Command::Generate(args) => run_generate(args),
        Command::Schema => run_schema(),
    }
}

fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::from_default_env();
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn run_generate(args: GenerateArgs) -> Result<(), CliError> {
    let run_id = Uuid::new_v4();

    let raw = if args.profile.as_os_str() == "-" {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        fs::read_to_string(&args.profile)?
    };
    let profile: Profile = serde_json::from_str(&raw)?;
    let profile = validate_profile(&profile)?;

    // Explicit flags win over knobs carried in the profile document.
    let defaults = GenerateOptions::default();
    let options = GenerateOptions {
        count: args
            .count
            .or(profile.count.map(|value| value as usize))
            .unwrap_or(defaults.count),
        min_len: args
            .min_len
            .or(profile.min_len.map(|value| value as usize))
            .unwrap_or(defaults.min_len),
        max_len: args
            .max_len
            .or(profile.max_len.map(|value| value as usize))
            .unwrap_or(defaults.max_len),
        include_specials: if args.no_specials {
            false
        } else {
            profile.include_specials.unwrap_or(defaults.include_specials)
        },
        include_uppercase: if args.no_uppercase {
            false
        } else {
            profile
                .include_uppercase
                .unwrap_or(defaults.include_uppercase)
        },
        seed: args.seed.unwrap_or(defaults.seed),
    }
    .clamped();

    info!(
        run_id = %run_id,
        count = options.count,
        min_len = options.min_len,
        max_len = options.max_len,
        "generation requested"
    );

    let lines = Generator::new(options).run(&profile);
    let count = lines.len();
    let record = OutputRecord { lines, count };

    let rendered = if args.json {
        serde_json::to_string_pretty(&record)?
    } else {
        record.lines.join("\n")
    };

    match &args.out {
        Some(path) => {
            fs::write(path, format!("{rendered}\n"))?;
            info!(run_id = %run_id, emitted = record.count, out = %path.display(), "output written");
        }
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{rendered}")?;
        }
    }

    Ok(())
}

fn run_schema() -> Result<(), CliError> {
    let schema = schemars::schema_for!(Profile);
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", serde_json::to_string_pretty(&schema)?)?;
    Ok(())
}
