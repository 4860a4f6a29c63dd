//! # mdshelf CLI Architecture
//!
//! mdshelf ships with a command-line client, but the binary is intentionally thin:
//! the CLI lives in `src/cli/`, while this file only invokes `cli::run()` and
//! handles process termination.
//!
//! ## Workspace Structure
//!
//! mdshelf is organized as a Cargo workspace with two crates:
//! - `crates/mdshelfapp/` — Core library with UI-agnostic document logic
//! - `crates/mdshelf/` — This CLI tool, depends on the `mdshelfapp` library
//!
//! ## Layering
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/mdshelf/src/cli/)                        │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - Logging, context wiring and dispatch (commands.rs)       │
//! │  - Terminal rendering with console styles (render.rs)       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (crates/mdshelfapp/src/api.rs)                   │
//! │  - Resolves positions and id prefixes to ids                │
//! │  - Returns structured `CmdResult` values                    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything from `api.rs` inward is UI agnostic. The CLI layer owns argument
//! parsing, context initialization, dispatch, error reporting and rendering.
//!
//! ## Testing Approach
//!
//! - **Library**: unit tests next to the code plus integration tests in
//!   `crates/mdshelfapp/tests/`.
//! - **CLI parsing and rendering**: unit tests in `setup.rs` and `render.rs`.
//! - **End to end**: `tests/cli.rs` runs the binary against a temporary data
//!   directory through `MDSHELF_DATA`.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
