//! `genesis-patch` — apply a batch of dotted-path patches to a genesis file.
//!
//! Usage:
//!   genesis-patch <genesis.json> '<patches-json>'
//!
//! The patches are a JSON array of `{"path": ..., "value": ...}` objects. The
//! file is rewritten only if every patch applies.

use genesis_patch::cli::run;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if let Err(e) = run(&args) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
