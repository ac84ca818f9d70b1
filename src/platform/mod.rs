pub fn platform() -> &'static dyn PlatformOps {
    &ConcretePlatform
}

use std::path::Path;
use std::process::Command;

pub trait PlatformOps: Sync + Send {
    /// Resolved platform id used for installer filtering:
    /// "darwin" | "linux" | "wsl" | "windows" (other kernels pass through).
    fn name(&self) -> &'static str;
    /// A command that runs `line` through the platform shell, for the
    /// catalog's install one-liners.
    fn shell_command(&self, line: &str) -> Command;
    /// A command that launches the resolved tool binary with `args` as an
    /// argument vector. Windows routes npm's .cmd/.bat shims through cmd.
    fn tool_command(&self, resolved: &Path, args: &[String]) -> Command;
}

#[cfg(unix)]
mod unix;
#[cfg(unix)]
pub use unix::UNIX_PLATFORM as ConcretePlatform;

#[cfg(windows)]
mod windows;
#[cfg(windows)]
pub use windows::WINDOWS_PLATFORM as ConcretePlatform;
