//! The file pipeline: read everything, format in parallel, deliver in
//! argument order.

use std::fs;
use std::io::{self, Read};
use std::time::Instant;

use burnish_fmt::FormatError;
use rayon::prelude::*;

use crate::cli::RunConfig;

/// What happened to one input.
enum Outcome {
    Pretty(String),
    ReadFailed(io::Error),
    FormatFailed(FormatError),
}

/// Format every input named by `config`.
///
/// Reads happen sequentially so stdin is consumed exactly once, the
/// formatting fans out over the rayon pool, and results are written
/// back in argument order so output is stable no matter how the work
/// was scheduled. A failed input is reported on stderr and the rest
/// still go through. Returns `true` only when every input succeeded.
pub fn run(config: &RunConfig) -> bool {
    tracing::debug!(options = ?config.options, files = ?config.files, "configuration");

    let names: Vec<String> = if config.files.is_empty() {
        vec!["-".to_string()]
    } else {
        config.files.clone()
    };

    let inputs: Vec<(String, io::Result<String>)> = names
        .into_iter()
        .map(|name| {
            let source = read_input(&name);
            (name, source)
        })
        .collect();

    let outcomes: Vec<(String, Outcome)> = inputs
        .into_par_iter()
        .map(|(name, source)| {
            let outcome = process(&name, source, config);
            (name, outcome)
        })
        .collect();

    let mut all_ok = true;
    for (name, outcome) in outcomes {
        if !deliver(&name, outcome, config) {
            all_ok = false;
        }
    }

    all_ok
}

fn read_input(name: &str) -> io::Result<String> {
    if name == "-" {
        let mut source = String::new();
        io::stdin().read_to_string(&mut source)?;
        Ok(source)
    } else {
        fs::read_to_string(name)
    }
}

fn process(name: &str, source: io::Result<String>, config: &RunConfig) -> Outcome {
    let source = match source {
        Ok(source) => source,
        Err(error) => return Outcome::ReadFailed(error),
    };

    tracing::debug!(file = name, bytes = source.len(), "formatting");
    let started = Instant::now();

    match burnish_fmt::format(&source, &config.options) {
        Ok(pretty) => {
            tracing::debug!(file = name, bytes_out = pretty.len(), "formatted");
            tracing::trace!(
                file = name,
                elapsed_ms = started.elapsed().as_secs_f64() * 1000.0,
                "timing"
            );
            Outcome::Pretty(pretty)
        }
        Err(error) => Outcome::FormatFailed(error),
    }
}

fn deliver(name: &str, outcome: Outcome, config: &RunConfig) -> bool {
    let pretty = match outcome {
        Outcome::Pretty(pretty) => pretty,
        Outcome::ReadFailed(error) => {
            if error.kind() == io::ErrorKind::NotFound {
                eprintln!("File does not exist: {name}");
            } else {
                eprintln!("Unhandled error: {error}");
            }
            return false;
        }
        Outcome::FormatFailed(error) => {
            eprintln!("{name}: {error}");
            return false;
        }
    };

    if config.verbose {
        eprintln!("{name}");
    }

    if config.in_place && name != "-" {
        if let Err(error) = fs::write(name, &pretty) {
            eprintln!("{name}: {error}");
            return false;
        }
    } else {
        println!("{pretty}");
    }

    true
}
