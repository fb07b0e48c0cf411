// src/logging.rs
// =============================================================================
// Sets up tracing output on stderr.
//
// stdout is kept for the user-facing progress lines printed by main.rs, so
// diagnostics go to stderr. Verbosity follows RUST_LOG, e.g.
//   RUST_LOG=gh_subtree=debug gh-subtree https://github.com/owner/repo
// =============================================================================

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn,gh_subtree=info";

pub fn init_logging() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}
