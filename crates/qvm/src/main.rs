//! Launch QEMU virtual machines from the command line.
//!
//! A thin front end over the `qemu-cmdline` builders: assemble an invocation
//! from flags, print it, or run it.

use clap::{Parser, Subcommand};
use color_eyre::{Report, Result};

mod vm;

#[derive(Debug, Parser)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Launch a VM and wait for it to exit
    Run(vm::RunOpts),
    /// Print the QEMU command line that `run` would execute
    Args(vm::RunOpts),
}

fn install_tracing() {
    use tracing_error::ErrorLayer;
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let fmt_layer = fmt::layer().with_target(false);
    let filter_layer = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap();

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .with(ErrorLayer::default())
        .init();
}

fn main() -> Result<(), Report> {
    install_tracing();
    color_eyre::install()?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Run(opts) => vm::run(&opts)?,
        Commands::Args(opts) => {
            println!("{}", vm::build_invocation(&opts)?.cmdline());
        }
    }
    Ok(())
}
