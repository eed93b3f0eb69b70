use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::{App, Arg};
use mergelib::config;
use mergelib::script::{self, Session};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    // command line
    let matches = App::new("pq")
        .about("Runs a script of mergeable priority queue operations")
        .arg(
            Arg::with_name("script")
                .required(true)
                .help("file with one command per line"),
        )
        .arg(
            Arg::with_name("min")
                .long("min")
                .help("pop the smallest value first"),
        )
        .arg(
            Arg::with_name("q")
                .short("q")
                .help("only print the final statistics"),
        )
        .get_matches();

    let filename = matches
        .value_of("script")
        .context("missing script path")?;
    let min = matches.is_present("min");
    let quiet = matches.is_present("q");

    config::init();

    let text =
        std::fs::read_to_string(filename).with_context(|| format!("reading {filename}"))?;
    let lines = script::parse(&text).with_context(|| format!("parsing {filename}"))?;
    info!(commands = lines.len(), min, "running script");

    let mut session = Session::new(script::order(min)).quiet(quiet);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for line in &lines {
        session.execute(line, &mut out)?;
    }
    out.flush()?;

    // stdout carries script output only
    for entry in config::dump() {
        eprintln!("{entry}");
    }
    Ok(())
}
