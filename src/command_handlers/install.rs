use crate::command_handlers::launch::LaunchError;
use crate::known_tools::{installer_choices, InstallerChoice, ToolDef};
use crate::platform::platform;
use anyhow::{Context, Result};
use dialoguer::theme::ColorfulTheme;
use dialoguer::Select;
use std::io::IsTerminal;
use std::path::PathBuf;

/// Probe PATH for the tool and return its resolved location, prompting for
/// an installer on a miss (or always, with `reinstall`). The chosen recipe
/// runs through the platform shell with inherited stdio, then PATH is probed
/// again to confirm the install actually produced the executable.
pub fn ensure_installed(def: &ToolDef, reinstall: bool) -> Result<PathBuf> {
    if !reinstall {
        if let Ok(path) = which::which(def.executable) {
            return Ok(path);
        }
        println!("{} ({}) is not installed.", def.display_name, def.executable);
    }

    let choice = prompt_install_choice(def)?;
    println!("$ {}", choice.command);
    let status = platform()
        .shell_command(&choice.command)
        .status()
        .with_context(|| format!("running installer for {}", def.display_name))?;
    if !status.success() {
        anyhow::bail!("install command failed ({status})");
    }

    which::which(def.executable).map_err(|_| {
        LaunchError::StillMissing {
            executable: def.executable.to_string(),
        }
        .into()
    })
}

fn prompt_install_choice(def: &ToolDef) -> Result<InstallerChoice> {
    let choices = installer_choices(def, platform().name());
    if !std::io::stdin().is_terminal() {
        let commands: Vec<&str> = choices
            .iter()
            .filter(|c| !c.is_cancel())
            .map(|c| c.command.as_str())
            .collect();
        anyhow::bail!(
            "cannot prompt for an installer (stdin is not a terminal); run one of:\n  {}",
            commands.join("\n  ")
        );
    }

    let labels: Vec<&str> = choices.iter().map(|c| c.label.as_str()).collect();
    let picked = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(format!("How should {} be installed?", def.display_name))
        .items(&labels)
        .default(0)
        .interact()
        .context("reading installer selection")?;
    let choice = choices[picked].clone();
    if choice.is_cancel() {
        return Err(LaunchError::Cancelled.into());
    }
    Ok(choice)
}
