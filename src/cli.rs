use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    version,
    name = "ai-switch",
    about = "Launch a configured AI coding CLI, installing it on first use",
    after_help = "Everything after the first `--` is forwarded verbatim to the launched tool:\n  ai-switch codex -- --model o3 review.md"
)]
pub struct Cli {
    /// Tool to launch (codex | claude | gemini). Falls back to defaultTool in .ai-switch.json,
    /// then to an interactive picker.
    #[arg(value_name = "TOOL")]
    pub tool: Option<String>,

    /// Add the tool's own skip-confirmations flag (e.g. --dangerously-skip-permissions)
    #[arg(short, long)]
    pub fast: bool,

    /// Run the installer prompt even if the tool is already on PATH
    #[arg(long)]
    pub reinstall: bool,

    /// List supported tools and their install status, then exit
    #[arg(long)]
    pub list: bool,
}

/// Everything strictly after the first literal `--`, verbatim. Later `--`
/// tokens are ordinary arguments. Empty when no delimiter is present.
pub fn passthrough_args(argv: &[String]) -> Vec<String> {
    match argv.iter().position(|a| a == "--") {
        Some(i) => argv[i + 1..].to_vec(),
        None => Vec::new(),
    }
}

/// The complement of `passthrough_args`: the tokens clap should see,
/// delimiter excluded.
pub fn head_args(argv: &[String]) -> &[String] {
    match argv.iter().position(|a| a == "--") {
        Some(i) => &argv[..i],
        None => argv,
    }
}
