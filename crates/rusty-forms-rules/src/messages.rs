// File: src/messages.rs
// Purpose: Message tables and Play-style `messages` file loading

use crate::error::{Result, RulesError};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// File name of the default messages table
pub const DEFAULT_MESSAGES_FILE: &str = "messages";

/// Read-only key to template lookup
///
/// Templates may contain `{0}`-style placeholders; they are filled in
/// client-side by the format helper, never here.
pub trait MessageSource {
    /// Template for `key`, if defined
    fn apply(&self, key: &str) -> Option<&str>;

    /// Whether `key` is defined
    fn is_defined_at(&self, key: &str) -> bool {
        self.apply(key).is_some()
    }
}

impl MessageSource for HashMap<String, String> {
    fn apply(&self, key: &str) -> Option<&str> {
        self.get(key).map(String::as_str)
    }
}

/// A single message table
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Messages {
    entries: HashMap<String, String>,
}

impl Messages {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace an entry
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Builder form of [`Messages::insert`]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Parse `key=value` lines
    ///
    /// `#` and `!` start comments. A trailing backslash continues the
    /// value on the next line. Later keys replace earlier ones.
    pub fn parse(content: &str) -> Result<Self> {
        let mut messages = Self::new();
        let mut pending: Option<(String, String)> = None;

        for (idx, raw) in content.lines().enumerate() {
            if let Some((key, mut value)) = pending.take() {
                let line = raw.trim_start();
                match line.strip_suffix('\\') {
                    Some(head) => {
                        value.push_str(head);
                        pending = Some((key, value));
                    }
                    None => {
                        value.push_str(line.trim_end());
                        messages.insert(key, value);
                    }
                }
                continue;
            }

            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
                continue;
            }

            let (key, value) = line.split_once('=').ok_or_else(|| RulesError::MessagesParse {
                line: idx + 1,
                content: line.to_string(),
            })?;

            let key = key.trim();
            if key.is_empty() {
                return Err(RulesError::MessagesParse {
                    line: idx + 1,
                    content: line.to_string(),
                });
            }

            let value = value.trim_start();
            match value.strip_suffix('\\') {
                Some(head) => pending = Some((key.to_string(), head.to_string())),
                None => messages.insert(key, value),
            }
        }

        if let Some((key, value)) = pending {
            messages.insert(key, value);
        }

        Ok(messages)
    }

    /// Load a messages file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| RulesError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let messages = Self::parse(&content)?;
        debug!("Loaded {} messages from {:?}", messages.len(), path);
        Ok(messages)
    }
}

impl MessageSource for Messages {
    fn apply(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Messages {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Ordered chain of message tables
///
/// A key resolves from the first table that defines it, so a
/// language-specific table goes in front of the default one.
#[derive(Debug, Clone, Default)]
pub struct MessageBundle {
    tables: Vec<Messages>,
}

impl MessageBundle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a table with lower precedence than the existing ones
    pub fn fallback(mut self, messages: Messages) -> Self {
        self.tables.push(messages);
        self
    }

    pub fn tables(&self) -> &[Messages] {
        &self.tables
    }

    /// Load `<dir>/messages`, preceded by `<dir>/messages.<lang>` when given
    ///
    /// A missing language file is skipped; a missing default file is an error.
    pub fn load(dir: impl AsRef<Path>, lang: Option<&str>) -> Result<Self> {
        let dir = dir.as_ref();
        let mut bundle = Self::new();

        if let Some(lang) = lang {
            let path = lang_path(dir, lang);
            if path.exists() {
                bundle = bundle.fallback(Messages::load(&path)?);
            } else {
                warn!("No messages for language '{}' at {:?}, using defaults", lang, path);
            }
        }

        Ok(bundle.fallback(Messages::load(dir.join(DEFAULT_MESSAGES_FILE))?))
    }
}

impl From<Messages> for MessageBundle {
    fn from(messages: Messages) -> Self {
        Self::new().fallback(messages)
    }
}

impl MessageSource for MessageBundle {
    fn apply(&self, key: &str) -> Option<&str> {
        self.tables.iter().find_map(|t| t.apply(key))
    }
}

fn lang_path(dir: &Path, lang: &str) -> PathBuf {
    dir.join(format!("{}.{}", DEFAULT_MESSAGES_FILE, lang))
}
