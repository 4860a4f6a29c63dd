//! # CLI Layer
//!
//! This module is **one possible UI client** for mdshelf, not the application itself.
//!
//! - [`setup`]: clap definitions
//! - `commands`: logging setup, context initialization and dispatch
//! - `render`: turns `CmdResult` values into terminal text
//! - `styles`: the shared console styles

mod commands;
mod render;
pub mod setup;
mod styles;

pub use commands::run;
