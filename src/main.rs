mod cli;
mod command_handlers;
mod config;
mod known_tools;
mod logger;
mod platform;
mod shellwords;

use anyhow::Result;
use clap::Parser;

use crate::cli::Cli;

fn main() -> Result<()> {
    // Split the pass-through tail off before clap sees the argv, so flags
    // after `--` reach the launched tool instead of our own parser.
    let argv: Vec<String> = std::env::args().skip(1).collect();
    let tail = cli::passthrough_args(&argv);
    let head = cli::head_args(&argv);

    let cli = Cli::parse_from(std::iter::once("ai-switch".to_string()).chain(head.iter().cloned()));
    let code = command_handlers::dispatch::dispatch(cli, &tail)?;
    std::process::exit(code);
}
