/// Wrapper generator entry point
use anyhow::Result;
use clap::{Arg, ArgAction, Command};
use tracing_subscriber::EnvFilter;

use wrapgen_ethereum::codegen::cli::{
    build_generate_command, build_inspect_command, handle_generate_command,
    handle_inspect_command,
};

fn build_cli() -> Command {
    Command::new("wrapgen")
        .about("Generate JavaScript and TypeScript contract wrappers from Ethereum ABIs")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Enable debug logging")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .subcommand(build_generate_command())
        .subcommand(build_inspect_command())
}

#[tokio::main]
async fn main() -> Result<()> {
    let matches = build_cli().get_matches();

    // RUST_LOG wins over the verbosity flag
    let default_level = if matches.get_flag("verbose") { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(command = ?matches.subcommand_name(), "starting wrapgen");

    match matches.subcommand() {
        Some(("generate", sub)) => handle_generate_command(sub).await?,
        Some(("inspect", sub)) => handle_inspect_command(sub).await?,
        _ => unreachable!("subcommand is required"),
    }

    Ok(())
}
