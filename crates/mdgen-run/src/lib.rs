//! Command-line interface for the mdgen static site generator.
//!
//! This crate wires the [`mdgen-markdown`](mdgen_markdown) conversion
//! pipeline to the filesystem: it copies static assets into the output
//! directory, walks the content tree, and renders every markdown document
//! into an HTML page through a shared template.
//!
//! The CLI is typically used through the `mdgen` binary, but can be embedded
//! in other applications:
//!
//! ```rust,no_run
//! use clap::Parser;
//! use mdgen_run::Cli;
//!
//! let cli = Cli::parse();
//! cli.run().expect("site generation failed");
//! ```
mod cli;
pub mod site;

pub use cli::Cli;
