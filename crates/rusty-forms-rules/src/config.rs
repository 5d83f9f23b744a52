// File: src/config.rs
// Purpose: Renderer configuration parsing from rules.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Renderer configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RulesConfig {
    #[serde(default)]
    pub render: RenderConfig,

    #[serde(default)]
    pub messages: MessagesConfig,
}

/// What to do when neither message key is defined
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MissingMessage {
    /// Fail the render
    #[default]
    Error,
    /// Emit the generic key (`error.minlength`) as the message text
    Key,
    /// Leave the entry out of the messages block
    Omit,
}

/// Output settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Client-side helper wrapping each message template
    #[serde(default = "default_format_helper")]
    pub format_helper: String,

    #[serde(default = "default_indent")]
    pub indent: usize,

    /// Wrap the whole form in `$(function() { ... });`
    #[serde(default = "default_false")]
    pub document_ready: bool,

    /// Skip fields that have no constraints when rendering a form
    #[serde(default = "default_true")]
    pub skip_unconstrained: bool,

    #[serde(default)]
    pub missing_message: MissingMessage,
}

/// Where message tables live
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessagesConfig {
    #[serde(default = "default_messages_dir")]
    pub dir: String,

    #[serde(default)]
    pub lang: Option<String>,
}

// Default values
fn default_format_helper() -> String {
    "$.format".to_string()
}

fn default_indent() -> usize {
    4
}

fn default_messages_dir() -> String {
    "conf".to_string()
}

fn default_true() -> bool {
    true
}

fn default_false() -> bool {
    false
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            format_helper: default_format_helper(),
            indent: default_indent(),
            document_ready: false,
            skip_unconstrained: true,
            missing_message: MissingMessage::default(),
        }
    }
}

impl Default for MessagesConfig {
    fn default() -> Self {
        Self {
            dir: default_messages_dir(),
            lang: None,
        }
    }
}

impl RulesConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // Missing file means defaults
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: RulesConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config)
    }

    /// Load configuration from default path (./rules.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("rules.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RulesConfig::default();
        assert_eq!(config.render.format_helper, "$.format");
        assert_eq!(config.render.indent, 4);
        assert!(!config.render.document_ready);
        assert!(config.render.skip_unconstrained);
        assert_eq!(config.render.missing_message, MissingMessage::Error);
        assert_eq!(config.messages.dir, "conf");
        assert!(config.messages.lang.is_none());
    }

    #[test]
    fn test_load_empty_file_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rules.toml");
        fs::write(&path, "  \n\n").unwrap();

        let config = RulesConfig::load(&path).unwrap();
        assert_eq!(config.render.indent, 4);
        assert_eq!(config.render.format_helper, "$.format");
        assert_eq!(config.messages.dir, "conf");
    }

    #[test]
    fn test_custom_render() {
        let toml = r#"
            [render]
            format_helper = "jQuery.validator.format"
            indent = 2
            missing_message = "omit"

            [messages]
            lang = "fr"
        "#;
        let config: RulesConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.render.format_helper, "jQuery.validator.format");
        assert_eq!(config.render.indent, 2);
        assert_eq!(config.render.missing_message, MissingMessage::Omit);
        assert!(config.render.skip_unconstrained);
        assert_eq!(config.messages.dir, "conf");
        assert_eq!(config.messages.lang.as_deref(), Some("fr"));
    }

    #[test]
    fn test_load_missing_file_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = RulesConfig::load(dir.path().join("rules.toml")).unwrap();
        assert_eq!(config.render.missing_message, MissingMessage::Error);
    }

    #[test]
    fn test_load_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rules.toml");
        fs::write(&path, "[render]\nindent = \"wide\"").unwrap();
        assert!(RulesConfig::load(&path).is_err());
    }
}
