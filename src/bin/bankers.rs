use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;

use bankers::{binom, from, next_str, succ, to, BitPattern, Codec, Ordinal};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print `n choose k`.
    Choose {
        #[arg(allow_negative_numbers = true)]
        n: i64,
        #[arg(allow_negative_numbers = true)]
        k: i64,
    },
    /// Print the number of `n`-bit patterns with at most `k` ones.
    Sum {
        #[arg(allow_negative_numbers = true)]
        n: i64,
        #[arg(allow_negative_numbers = true)]
        k: i64,
    },
    /// Print the pattern at a rank, e.g. `to 5 --length 4`, `to 0b0101` or `to 0101`.
    To {
        /// A decimal rank, or a binary string that is prefixed with `0b` or
        /// starts with `0`.
        value: String,
        /// Pattern length; defaults to the length of a binary value.
        #[arg(long, short)]
        length: Option<u32>,
    },
    /// Print the rank of a pattern.
    From { pattern: String },
    /// Print the next pattern with the same number of ones.
    Next { pattern: String },
    /// Print the pattern ranked right after the given one.
    Succ { pattern: String },
    /// Print every pattern of a length in rank order.
    Seq {
        length: u32,
        /// Draw zero bits as `.`.
        #[arg(long)]
        dots: bool,
    },
}

/// Reads a `to` argument. `0b101` and `0101` are binary strings; anything
/// else is a decimal rank.
fn ordinal(value: &str) -> Result<Ordinal<'_>> {
    if let Some(binary) = value.strip_prefix("0b") {
        return Ok(Ordinal::Binary(binary));
    }
    let binary = value.len() > 1
        && value.starts_with('0')
        && value.bytes().all(|b| b == b'0' || b == b'1');
    if binary {
        return Ok(Ordinal::Binary(value));
    }
    let rank = value
        .parse()
        .with_context(|| format!("invalid rank {:?}", value))?;
    Ok(Ordinal::Index(rank))
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    info!("bankers {}", bankers::VERSION);

    match cli.command {
        Commands::Choose { n, k } => {
            let (n, k) = binom::checked_args(n, k)?;
            println!("{}", binom::choose(n, k)?);
        }
        Commands::Sum { n, k } => {
            let (n, k) = binom::checked_args(n, k)?;
            println!("{}", binom::sum(n, k)?);
        }
        Commands::To { value, length } => {
            println!("{}", to(ordinal(&value)?, length)?);
        }
        Commands::From { pattern } => {
            let rank = from(&pattern).with_context(|| format!("cannot rank {:?}", pattern))?;
            println!("{}", rank);
        }
        Commands::Next { pattern } => {
            println!("{}", next_str(&pattern)?);
        }
        Commands::Succ { pattern } => {
            let pattern: BitPattern = pattern.parse()?;
            println!("{}", succ(&pattern)?);
        }
        Commands::Seq { length, dots } => {
            let codec = Codec::new(length).context("invalid sequence length")?;
            info!("generating the sequence for length {}", length);
            let width = codec.class_range(codec.len()).end().to_string().len();
            for (rank, pattern) in codec.sequence().enumerate() {
                let mut text = pattern.to_string();
                if dots {
                    text = text.replace('0', ".");
                }
                println!("{:>w$} : {}", rank, text, w = width);
            }
        }
    }
    Ok(())
}
