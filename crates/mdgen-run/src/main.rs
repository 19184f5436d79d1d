use clap::Parser;

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt::init();
    mdgen_run::Cli::parse().run()
}
