//! Tracing subscriber for the CLI.
//!
//! Logs go to stderr so they never mix with command output. `RUST_LOG`, when
//! set, replaces the `-v` derived filter entirely.

use tracing_subscriber::EnvFilter;

fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Filter directive for a `-v` count: our crate at the chosen level, everything
/// else at warn.
pub(super) fn directive_for(verbosity: u8) -> String {
    format!("warn,roster={}", level_for(verbosity))
}

pub(super) fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(directive_for(verbosity)));

    // A second init (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
