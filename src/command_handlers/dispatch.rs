use crate::cli::Cli;
use crate::command_handlers::{launch, list};
use anyhow::Result;

/// Route the parsed CLI to a handler. Returns the exit code to forward.
pub fn dispatch(cli: Cli, passthrough: &[String]) -> Result<i32> {
    if cli.list {
        list::run_list()?;
        return Ok(0);
    }
    launch::run_launch(launch::LaunchArgs {
        tool: cli.tool.as_deref(),
        fast: cli.fast,
        reinstall: cli.reinstall,
        passthrough,
    })
}
