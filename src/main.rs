// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Turn the GitHub URL into a Target (owner, repo, ref, path)
// 3. Walk the remote tree and download every file into memory
// 4. Write the tree to the output directory
// 5. Exit with proper code (0 = success, 1 = any failure)
//
// Nothing is written to disk unless the whole download succeeded.
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli; // src/cli.rs - command-line parsing
mod config; // src/config.rs - environment-based settings
mod github; // src/github/ - GitHub API and raw downloads
mod logging; // src/logging.rs - tracing setup
mod save; // src/save/ - writing trees to disk
mod target; // src/target/ - URL parsing
mod tree; // src/tree/ - in-memory tree and the recursive download

use anyhow::{Context, Result};
use clap::Parser;

use cli::Cli;
use config::Config;
use github::{GitHubApi, RawDownloader};
use tree::TreeBuilder;

// The #[tokio::main] attribute transforms our async main into a real main function
#[tokio::main]
async fn main() {
    logging::init_logging();

    let exit_code = match run().await {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            1
        }
    };

    std::process::exit(exit_code);
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env()?;

    let target = target::resolve(&cli.url)?;
    println!("🔍 Fetching {}", target);

    // One client (one connection pool) shared by both fetchers
    let client = github::build_client(&config).context("failed to create HTTP client")?;
    let builder = TreeBuilder::new(
        GitHubApi::new(client.clone(), config.api_base.clone()),
        RawDownloader::new(client),
    )
    .with_concurrency(config.concurrency);

    let tree = builder.build(&target).await?;

    let files = tree.file_count();
    let bytes = tree.total_bytes();
    let destination = cli.output.join(tree.name());
    let kind = if tree.is_directory() { "directory" } else { "file" };
    println!("📄 Downloaded {} file(s), {} byte(s)", files, bytes);

    // Disk writes are blocking, keep them off the async workers
    let output = cli.output;
    tokio::task::spawn_blocking(move || save::materialize(Some(&tree), &output))
        .await
        .context("save task panicked")??;

    println!("✅ Saved {} to {}", kind, destination.display());
    Ok(())
}
