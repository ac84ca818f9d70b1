use crate::platform::PlatformOps;
use std::ffi::OsStr;
use std::path::Path;
use std::process::Command;

pub static WINDOWS_PLATFORM: Windows = Windows;

pub struct Windows;

impl PlatformOps for Windows {
    fn name(&self) -> &'static str {
        "windows"
    }
    fn shell_command(&self, line: &str) -> Command {
        let mut cmd = Command::new("cmd");
        cmd.arg("/C").arg(line);
        cmd
    }
    fn tool_command(&self, resolved: &Path, args: &[String]) -> Command {
        // npm global installs expose .cmd shims; those only run via cmd.
        let is_shim = resolved
            .extension()
            .and_then(OsStr::to_str)
            .map(|ext| ext.eq_ignore_ascii_case("cmd") || ext.eq_ignore_ascii_case("bat"))
            .unwrap_or(false);
        if is_shim {
            let mut cmd = Command::new("cmd");
            cmd.arg("/C").arg(resolved);
            cmd.args(args);
            cmd
        } else {
            let mut cmd = Command::new(resolved);
            cmd.args(args);
            cmd
        }
    }
}
