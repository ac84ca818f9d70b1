use crate::command_handlers::install;
use crate::config::{load_config, ProjectConfig, CONFIG_FILE};
use crate::known_tools::{definition, normalize_tool_key, supported_tools, ToolKey};
use crate::logger::ConsoleLogger;
use crate::platform::platform;
use crate::shellwords::format_shell_command;
use anyhow::{Context, Result};
use dialoguer::theme::ColorfulTheme;
use dialoguer::Select;
use std::io::IsTerminal;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("unknown tool '{name}' (supported: {supported})")]
    UnknownTool { name: String, supported: String },
    #[error("installation cancelled")]
    Cancelled,
    #[error("'{executable}' still not found on PATH after install")]
    StillMissing { executable: String },
}

pub struct LaunchArgs<'a> {
    pub tool: Option<&'a str>,
    pub fast: bool,
    pub reinstall: bool,
    pub passthrough: &'a [String],
}

/// Resolve the tool, make sure it is installed, assemble its argument list
/// (config defaults, then fast-mode flag, then pass-through tail), echo the
/// command, run it, and hand back the child's exit code.
pub fn run_launch(args: LaunchArgs) -> Result<i32> {
    let cwd = std::env::current_dir().context("reading current directory")?;
    let config = load_config(&cwd, &ConsoleLogger);

    let key = resolve_tool_key(args.tool, &config)?;
    let def = definition(key);

    let resolved = install::ensure_installed(def, args.reinstall)?;

    let mut tool_args: Vec<String> = config.default_flags.clone().unwrap_or_default();
    if args.fast {
        match def.fast_mode_flag() {
            Some(flag) => tool_args.push(flag.to_string()),
            None => eprintln!(
                "{} has no fast mode flag; launching normally",
                def.display_name
            ),
        }
    }
    tool_args.extend(args.passthrough.iter().cloned());

    println!("$ {}", format_shell_command(def.executable, &tool_args));
    let status = platform()
        .tool_command(&resolved, &tool_args)
        .status()
        .with_context(|| format!("launching {}", def.executable))?;
    // Killed by signal: no code to forward.
    Ok(status.code().unwrap_or(1))
}

/// Resolution order: CLI argument, config defaultTool, interactive picker.
/// A CLI argument that fails normalization is a hard error; the forgiving
/// path is reserved for config input.
fn resolve_tool_key(raw: Option<&str>, config: &ProjectConfig) -> Result<ToolKey> {
    if let Some(raw) = raw {
        return normalize_tool_key(Some(raw)).ok_or_else(|| {
            LaunchError::UnknownTool {
                name: raw.to_string(),
                supported: supported_tools(),
            }
            .into()
        });
    }
    if let Some(key) = config.default_tool {
        return Ok(key);
    }
    pick_tool()
}

fn pick_tool() -> Result<ToolKey> {
    if !std::io::stdin().is_terminal() {
        anyhow::bail!(
            "no tool specified; pass one of: {} or set defaultTool in {}",
            supported_tools(),
            CONFIG_FILE
        );
    }
    let items: Vec<String> = ToolKey::all()
        .iter()
        .map(|k| format!("{} ({})", definition(*k).display_name, k.as_str()))
        .collect();
    let picked = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Which tool do you want to launch?")
        .items(&items)
        .default(0)
        .interact()
        .context("reading tool selection")?;
    Ok(ToolKey::all()[picked])
}
