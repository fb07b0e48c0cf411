// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// There is a single command with two positional arguments:
//   gh-subtree <URL> [OUTPUT]
//
// Rust concepts:
// - Structs: Custom data types that group related data
// - Derive macros: Automatically generate code for our types
// =============================================================================

use std::path::PathBuf;

use clap::Parser;

// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure how the CLI behaves
#[derive(Parser, Debug)]
#[command(
    name = "gh-subtree",
    version,
    about = "Download a file or directory from a GitHub repository without cloning it",
    long_about = "gh-subtree fetches a single file, a directory, or a whole repository from GitHub \
                  and writes it to disk with its directory structure intact.\n\n\
                  Example: gh-subtree https://github.com/rust-lang/rust/tree/master/src/tools ./out"
)]
pub struct Cli {
    /// GitHub URL, e.g. https://github.com/owner/repo/tree/main/path/to/dir
    ///
    /// A sub-path needs an explicit "tree/<ref>" segment; without one the
    /// whole repository on its default branch is downloaded.
    pub url: String,

    /// Directory to write into (defaults to the current directory)
    #[arg(default_value = ".")]
    pub output: PathBuf,
}
