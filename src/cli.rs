use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::{Config, OutputFormat};
use crate::generate::{generate, SequenceSource};
use crate::sequence::Sequence;

#[derive(Debug, Parser)]
#[clap(version)]
pub struct Opt {
    #[clap(short, long, env)]
    pub config: Option<PathBuf>,

    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Rotate a sequence to the right in place
    Rotate(RotateArgs),
    /// Reverse an inclusive index range of a sequence
    Reverse(ReverseArgs),
    /// Print a random sequence
    Generate(GenerateArgs),
}

#[derive(Debug, Clone, Args)]
pub struct RotateArgs {
    #[clap(short, long, allow_hyphen_values = true)]
    pub offset: i64,

    /// `[1, 2, 3]`, `1,2,3` or `"1 2 3"`
    #[clap(allow_hyphen_values = true)]
    pub sequence: Sequence,
}

#[derive(Debug, Clone, Args)]
pub struct ReverseArgs {
    #[clap(short, long)]
    pub start: usize,

    #[clap(short, long)]
    pub end: usize,

    #[clap(allow_hyphen_values = true)]
    pub sequence: Sequence,
}

#[derive(Debug, Clone, Args)]
pub struct GenerateArgs {
    #[clap(short, long)]
    pub len: usize,

    #[clap(long, default_value_t = -100, allow_hyphen_values = true)]
    pub min: i64,

    #[clap(long, default_value_t = 100, allow_hyphen_values = true)]
    pub max: i64,

    /// `thread` or `seed:<n>`
    #[clap(long, default_value = "thread")]
    pub source: SequenceSource,
}

/// Executes `command` and returns the resulting sequence.
///
/// A rejected offset or range surfaces as an error, which the binary turns
/// into a non-zero exit.
pub fn run(command: Command, config: &Config) -> eyre::Result<Sequence> {
    let sequence = match command {
        Command::Rotate(args) => {
            let mut sequence = args.sequence;

            tracing::info!(
                len = sequence.len(),
                offset = args.offset,
                policy = ?config.rotation.negative_offsets,
                "Rotating sequence"
            );

            sequence.rotate_with(args.offset, config.rotation.negative_offsets)?;

            sequence
        }
        Command::Reverse(args) => {
            let mut sequence = args.sequence;

            tracing::info!(
                len = sequence.len(),
                start = args.start,
                end = args.end,
                "Reversing range"
            );

            sequence.reverse_range(args.start, args.end)?;

            sequence
        }
        Command::Generate(args) => {
            tracing::info!(len = args.len, source = %args.source, "Generating sequence");

            generate(args.len, args.min..=args.max, args.source)?
        }
    };

    Ok(sequence)
}

pub fn render(sequence: &Sequence, format: OutputFormat) -> eyre::Result<String> {
    Ok(match format {
        OutputFormat::Json => serde_json::to_string(sequence)?,
        OutputFormat::Plain => format!("{sequence:#}"),
    })
}
