use crate::known_tools::{normalize_tool_key, ToolKey};
use crate::logger::Logger;
use fs_err as fs;
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;

pub const CONFIG_FILE: &str = ".ai-switch.json";

/// Validated per-project defaults. A present field has already passed
/// validation; absence means "not configured".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectConfig {
    pub default_tool: Option<ToolKey>,
    pub default_flags: Option<Vec<String>>,
}

/// Raw document shape before validation. Fields stay loose `Value`s so one
/// bad field never discards the rest; unknown keys are ignored.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawConfig {
    #[serde(rename = "defaultTool")]
    default_tool: Option<Value>,
    #[serde(rename = "defaultFlags")]
    default_flags: Option<Value>,
}

/// Best-effort load of `<project_dir>/.ai-switch.json`. A missing file is an
/// empty config; read and parse failures warn and yield an empty config.
/// Invalid fields warn and are dropped individually.
pub fn load_config(project_dir: &Path, logger: &dyn Logger) -> ProjectConfig {
    let path = project_dir.join(CONFIG_FILE);
    if !path.exists() {
        return ProjectConfig::default();
    }

    let raw: RawConfig = match fs::read_to_string(&path)
        .map_err(anyhow::Error::from)
        .and_then(|data| serde_json::from_str(&data).map_err(anyhow::Error::from))
    {
        Ok(raw) => raw,
        Err(e) => {
            logger.warn(&format!("Failed to load {CONFIG_FILE}: {e}"));
            return ProjectConfig::default();
        }
    };

    let mut config = ProjectConfig::default();

    if let Some(Value::String(tool)) = &raw.default_tool {
        match normalize_tool_key(Some(tool)) {
            Some(key) => config.default_tool = Some(key),
            None => logger.warn(&format!("Ignoring unknown defaultTool: {tool}")),
        }
    }

    if let Some(flags) = &raw.default_flags {
        match as_string_array(flags) {
            Some(flags) => config.default_flags = Some(flags),
            None => logger.warn("Ignoring defaultFlags because it is not an array of strings."),
        }
    }

    config
}

fn as_string_array(value: &Value) -> Option<Vec<String>> {
    let items = value.as_array()?;
    items
        .iter()
        .map(|v| v.as_str().map(str::to_string))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logger::NullLogger;
    use std::sync::Mutex;
    use tempfile::tempdir;

    #[derive(Default)]
    struct CapturingLogger {
        warnings: Mutex<Vec<String>>,
    }

    impl Logger for CapturingLogger {
        fn warn(&self, message: &str) {
            self.warnings.lock().unwrap().push(message.to_string());
        }
    }

    impl CapturingLogger {
        fn warnings(&self) -> Vec<String> {
            self.warnings.lock().unwrap().clone()
        }
    }

    fn write_config(dir: &Path, contents: &str) {
        std::fs::write(dir.join(CONFIG_FILE), contents).unwrap();
    }

    #[test]
    fn missing_file_is_an_empty_config() {
        let dir = tempdir().unwrap();
        let logger = CapturingLogger::default();
        let config = load_config(dir.path(), &logger);
        assert_eq!(config, ProjectConfig::default());
        assert!(logger.warnings().is_empty());
    }

    #[test]
    fn valid_fields_are_normalized_and_copied() {
        let dir = tempdir().unwrap();
        write_config(
            dir.path(),
            r#"{"defaultTool": "CLAUDE", "defaultFlags": ["--model", "claude-3"]}"#,
        );
        let config = load_config(dir.path(), &NullLogger);
        assert_eq!(config.default_tool, Some(ToolKey::Claude));
        assert_eq!(
            config.default_flags,
            Some(vec!["--model".to_string(), "claude-3".to_string()])
        );
    }

    #[test]
    fn unknown_default_tool_warns_and_is_dropped() {
        let dir = tempdir().unwrap();
        write_config(dir.path(), r#"{"defaultTool": "cursor"}"#);
        let logger = CapturingLogger::default();
        let config = load_config(dir.path(), &logger);
        assert_eq!(config, ProjectConfig::default());
        let warnings = logger.warnings();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("Ignoring unknown defaultTool: cursor"));
    }

    #[test]
    fn wrong_shaped_default_flags_warns_and_is_dropped() {
        let dir = tempdir().unwrap();
        write_config(dir.path(), r#"{"defaultFlags": ["--model", 123]}"#);
        let logger = CapturingLogger::default();
        let config = load_config(dir.path(), &logger);
        assert_eq!(config, ProjectConfig::default());
        assert_eq!(
            logger.warnings(),
            vec!["Ignoring defaultFlags because it is not an array of strings.".to_string()]
        );
    }

    #[test]
    fn one_bad_field_keeps_the_good_one() {
        let dir = tempdir().unwrap();
        write_config(
            dir.path(),
            r#"{"defaultTool": "gemini", "defaultFlags": "nope"}"#,
        );
        let logger = CapturingLogger::default();
        let config = load_config(dir.path(), &logger);
        assert_eq!(config.default_tool, Some(ToolKey::Gemini));
        assert_eq!(config.default_flags, None);
        assert_eq!(logger.warnings().len(), 1);
    }

    #[test]
    fn invalid_json_warns_and_yields_empty_config() {
        let dir = tempdir().unwrap();
        write_config(dir.path(), "{not json");
        let logger = CapturingLogger::default();
        let config = load_config(dir.path(), &logger);
        assert_eq!(config, ProjectConfig::default());
        let warnings = logger.warnings();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("Failed to load .ai-switch.json"));
    }

    #[test]
    fn unknown_keys_are_ignored_silently() {
        let dir = tempdir().unwrap();
        write_config(dir.path(), r#"{"theme": "dark", "defaultTool": "codex"}"#);
        let logger = CapturingLogger::default();
        let config = load_config(dir.path(), &logger);
        assert_eq!(config.default_tool, Some(ToolKey::Codex));
        assert!(logger.warnings().is_empty());
    }

    #[test]
    fn non_string_default_tool_is_ignored_without_warning() {
        let dir = tempdir().unwrap();
        write_config(dir.path(), r#"{"defaultTool": 42}"#);
        let logger = CapturingLogger::default();
        let config = load_config(dir.path(), &logger);
        assert_eq!(config, ProjectConfig::default());
        assert!(logger.warnings().is_empty());
    }
}
