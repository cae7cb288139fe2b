use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod cli;
mod commands;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let args = cli::Cli::parse();
    init_tracing();

    let engine = commands::load_engine(args.config.as_deref())?;

    match args.command {
        cli::Commands::Compare { form, json } => commands::compare::execute(&engine, &form, json)?,
        cli::Commands::Rooms => commands::rooms::execute(&engine),
        cli::Commands::Export { form, out_dir } => commands::export::execute(&engine, &form, &out_dir)?,
        cli::Commands::Verify { file } => commands::verify::execute(&engine, &file)?,
    }

    Ok(())
}
