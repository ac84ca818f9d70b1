use crate::config::load_config;
use crate::known_tools::{definition, ToolKey};
use crate::logger::NullLogger;
use anyhow::{Context, Result};

/// Print each catalog tool with its install status. The configured
/// defaultTool is marked with `*`.
pub fn run_list() -> Result<()> {
    let cwd = std::env::current_dir().context("reading current directory")?;
    let config = load_config(&cwd, &NullLogger);

    for key in ToolKey::all() {
        let def = definition(*key);
        let marker = if config.default_tool == Some(*key) {
            "*"
        } else {
            " "
        };
        match which::which(def.executable) {
            Ok(path) => println!(
                "{marker} {:<8} {:<12} installed ({})",
                key.as_str(),
                def.display_name,
                path.display()
            ),
            Err(_) => println!(
                "{marker} {:<8} {:<12} not installed",
                key.as_str(),
                def.display_name
            ),
        }
    }
    Ok(())
}
