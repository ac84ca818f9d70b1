use crate::platform::PlatformOps;
use std::path::Path;
use std::process::Command;

pub static UNIX_PLATFORM: Unix = Unix;

pub struct Unix;

impl PlatformOps for Unix {
    fn name(&self) -> &'static str {
        if is_wsl() {
            return "wsl";
        }
        match std::env::consts::OS {
            "macos" => "darwin",
            other => other,
        }
    }
    fn shell_command(&self, line: &str) -> Command {
        let mut cmd = Command::new("sh");
        cmd.arg("-c").arg(line);
        cmd
    }
    fn tool_command(&self, resolved: &Path, args: &[String]) -> Command {
        let mut cmd = Command::new(resolved);
        cmd.args(args);
        cmd
    }
}

// A Linux kernel built by Microsoft is a WSL environment.
#[cfg(target_os = "linux")]
fn is_wsl() -> bool {
    std::fs::read_to_string("/proc/version")
        .map(|v| v.to_lowercase().contains("microsoft"))
        .unwrap_or(false)
}

#[cfg(not(target_os = "linux"))]
fn is_wsl() -> bool {
    false
}
