use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Canonical identifier for a supported tool. Input is case-insensitive;
/// the lowercase form returned by `as_str` is canonical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolKey {
    Codex,
    Claude,
    Gemini,
}

impl ToolKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToolKey::Codex => "codex",
            ToolKey::Claude => "claude",
            ToolKey::Gemini => "gemini",
        }
    }

    /// Catalog order, used everywhere a tool listing is shown.
    pub fn all() -> &'static [ToolKey] {
        &[ToolKey::Codex, ToolKey::Claude, ToolKey::Gemini]
    }
}

#[derive(Debug)]
pub struct InstallRecipe {
    pub label: &'static str,
    /// Shell one-liner run verbatim through the platform shell.
    pub command: &'static str,
    /// None or an empty slice both mean "applies everywhere".
    pub platforms: Option<&'static [&'static str]>,
}

#[derive(Debug)]
pub struct ToolDef {
    pub executable: &'static str,
    pub display_name: &'static str,
    pub installers: &'static [InstallRecipe],
    /// Ordered most-preferred first; may be empty.
    pub fast_flags: &'static [&'static str],
}

impl ToolDef {
    /// First listed fast-mode flag wins; None when the tool has no such mode.
    pub fn fast_mode_flag(&self) -> Option<&'static str> {
        self.fast_flags.first().copied()
    }
}

static CATALOG: Lazy<HashMap<ToolKey, ToolDef>> = Lazy::new(|| {
    HashMap::from([
        (
            ToolKey::Codex,
            ToolDef {
                executable: "codex",
                display_name: "Codex CLI",
                installers: &[
                    InstallRecipe {
                        label: "npm",
                        command: "npm install -g @openai/codex",
                        platforms: None,
                    },
                    InstallRecipe {
                        label: "Homebrew",
                        command: "brew install codex",
                        platforms: Some(&["darwin"]),
                    },
                ],
                fast_flags: &["--yolo", "--dangerously-bypass-approvals-and-sandbox"],
            },
        ),
        (
            ToolKey::Claude,
            ToolDef {
                executable: "claude",
                display_name: "Claude Code",
                installers: &[
                    InstallRecipe {
                        label: "npm",
                        command: "npm install -g @anthropic-ai/claude-code",
                        platforms: None,
                    },
                    InstallRecipe {
                        label: "native installer",
                        command: "curl -fsSL https://claude.ai/install.sh | bash",
                        platforms: Some(&["darwin", "linux", "wsl"]),
                    },
                ],
                fast_flags: &["--dangerously-skip-permissions"],
            },
        ),
        (
            ToolKey::Gemini,
            ToolDef {
                executable: "gemini",
                display_name: "Gemini CLI",
                installers: &[
                    InstallRecipe {
                        label: "npm",
                        command: "npm install -g @google/gemini-cli",
                        platforms: None,
                    },
                    InstallRecipe {
                        label: "Homebrew",
                        command: "brew install gemini-cli",
                        platforms: Some(&["darwin"]),
                    },
                ],
                fast_flags: &["--yolo"],
            },
        ),
    ])
});

/// Lowercase `raw` and look it up in the catalog. Empty, absent, and
/// unrecognized input all yield None; this never errors.
pub fn normalize_tool_key(raw: Option<&str>) -> Option<ToolKey> {
    let lowered = raw?.to_lowercase();
    ToolKey::all()
        .iter()
        .copied()
        .find(|k| k.as_str() == lowered)
}

pub fn has_tool(raw: &str) -> bool {
    normalize_tool_key(Some(raw)).is_some()
}

pub fn definition(key: ToolKey) -> &'static ToolDef {
    &CATALOG[&key]
}

/// One selectable entry in the installer prompt. An empty command marks the
/// Cancel sentinel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallerChoice {
    pub label: String,
    pub command: String,
}

impl InstallerChoice {
    pub fn is_cancel(&self) -> bool {
        self.command.is_empty()
    }
}

fn recipe_applies(recipe: &InstallRecipe, platform: &str) -> bool {
    match recipe.platforms {
        None => true,
        Some([]) => true,
        Some(platforms) => {
            platforms.contains(&platform)
                // WSL is a refinement of linux for installer matching.
                || (platform == "wsl" && platforms.contains(&"linux"))
        }
    }
}

/// Filter the tool's recipes to those applicable on `platform`, keeping
/// catalog order, and append the terminal Cancel entry. The Cancel entry is
/// present even when nothing else survives the filter.
pub fn installer_choices(def: &ToolDef, platform: &str) -> Vec<InstallerChoice> {
    let mut choices: Vec<InstallerChoice> = def
        .installers
        .iter()
        .filter(|r| recipe_applies(r, platform))
        .map(|r| InstallerChoice {
            label: format!("{}: {}", r.label, r.command),
            command: r.command.to_string(),
        })
        .collect();
    choices.push(InstallerChoice {
        label: "Cancel".to_string(),
        command: String::new(),
    });
    choices
}

/// Comma-separated canonical keys, for error messages and help text.
pub fn supported_tools() -> String {
    ToolKey::all()
        .iter()
        .map(|k| k.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
