use std::fs;
use std::path::PathBuf;

use clap::Parser;
use miette::IntoDiagnostic;
use miette::miette;

use crate::site;

#[derive(Parser, Debug)]
#[command(name = "mdgen")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(
    about = "mdgen renders a tree of markdown documents into a static HTML site.",
    long_about = None
)]
pub struct Cli {
    /// Directory containing the markdown content tree
    #[arg(short, long, default_value = "content")]
    content: PathBuf,

    /// Directory of static assets copied verbatim into the output
    #[arg(short = 's', long = "static", default_value = "static")]
    static_dir: PathBuf,

    /// HTML template with {{ Title }} and {{ Content }} placeholders
    #[arg(short, long, default_value = "template.html")]
    template: PathBuf,

    /// Directory the generated site is written to
    #[arg(short, long, default_value = "public")]
    output: PathBuf,

    /// Number of pages to collect before switching to parallel generation
    #[arg(short = 'P', long, default_value_t = 10)]
    parallel_threshold: usize,
}

impl Cli {
    pub fn run(&self) -> miette::Result<()> {
        if !self.content.is_dir() {
            return Err(miette!(
                "Content directory not found: {}",
                self.content.display()
            ));
        }
        if !self.template.is_file() {
            return Err(miette!(
                "Template file not found: {}",
                self.template.display()
            ));
        }

        let template = fs::read_to_string(&self.template).into_diagnostic()?;

        site::clean_output(&self.output)?;
        if self.static_dir.is_dir() {
            site::copy_static(&self.static_dir, &self.output)?;
        } else {
            tracing::warn!(
                "static directory not found, skipping asset copy: {}",
                self.static_dir.display()
            );
        }

        site::generate_pages(
            &self.content,
            &template,
            &self.output,
            self.parallel_threshold,
        )
    }
}
