use clap::{Parser, Subcommand};

/// Default capacity, matching the classic 16-byte demonstration buffer.
pub const DEFAULT_CAPACITY: usize = 16;

#[derive(Parser, Debug)]
#[command(name = "boundstr-demo")]
#[command(version, about = "Show how bounded copy and append behave at buffer boundaries", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Print steps as JSON instead of byte dumps
    #[arg(long, global = true)]
    pub json: bool,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace). `RUST_LOG` wins.
    #[arg(long, short, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Replay the exact-fit, off-by-one, heavy truncation, append and
    /// formatted-write scenarios
    Scenarios {
        /// Destination capacity in bytes, terminator included
        #[arg(long, default_value_t = DEFAULT_CAPACITY)]
        capacity: usize,
    },

    /// Copy SOURCE into a fresh buffer
    Copy {
        /// Destination capacity in bytes, terminator included
        #[arg(long, default_value_t = DEFAULT_CAPACITY)]
        capacity: usize,

        /// Byte the buffer is filled with beforehand, so untouched bytes show
        #[arg(long, default_value = "#", value_parser = parse_fill)]
        fill: u8,

        source: String,
    },

    /// Append each SOURCE in turn, reporting after every step
    Append {
        /// Destination capacity in bytes, terminator included
        #[arg(long, default_value_t = DEFAULT_CAPACITY)]
        capacity: usize,

        /// Content copied in before the first append
        #[arg(long, default_value = "")]
        initial: String,

        #[arg(required = true)]
        sources: Vec<String>,
    },
}

fn parse_fill(s: &str) -> Result<u8, String> {
    match s.as_bytes() {
        [b] if b.is_ascii() && *b != 0 => Ok(*b),
        _ => Err(format!("fill must be a single non-NUL ASCII character, got {s:?}")),
    }
}
