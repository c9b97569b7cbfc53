//! Command-line walkthrough of bounded copy and append.
//!
//! ```bash
//! cargo run -p boundstr-demo -- scenarios
//! cargo run -p boundstr-demo -- copy --capacity 8 "does this fit?"
//! cargo run -p boundstr-demo -- --json append --capacity 12 --initial abc def ghi jkl
//! ```

mod cli;
mod scenarios;
mod step;

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use crate::{
    cli::{Cli, Commands},
    step::Step,
};

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn emit(steps: &[Step], json: bool) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for step in steps {
        if step.outcome.is_truncated() {
            warn!(
                label = %step.label,
                needed = step.outcome.needed,
                capacity = step.outcome.capacity,
                "content truncated"
            );
        } else {
            debug!(label = %step.label, needed = step.outcome.needed, "content fit");
        }
    }

    if json {
        serde_json::to_writer_pretty(&mut out, steps).context("failed to serialize steps")?;
        writeln!(out)?;
    } else {
        for step in steps {
            writeln!(out, "{step}\n")?;
        }
    }
    out.flush().context("failed to flush stdout")
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let steps = match cli.command {
        Commands::Scenarios { capacity } => {
            info!(capacity, "replaying boundary scenarios");
            scenarios::run_all(capacity)
        }
        Commands::Copy {
            capacity,
            fill,
            source,
        } => {
            info!(capacity, source_len = source.len(), "bounded copy");
            vec![scenarios::copy_once(capacity, fill, &source)]
        }
        Commands::Append {
            capacity,
            initial,
            sources,
        } => {
            info!(capacity, pieces = sources.len(), "bounded append");
            scenarios::append_each(capacity, &initial, &sources)
        }
    };

    emit(&steps, cli.json)?;

    if !cli.json {
        println!("Completed without overflow.");
    }
    Ok(())
}
