use std::collections::HashMap;

use serde::Serialize;
use serde_json::Value;

/// Storage key the serialized answer sheet is persisted under.
pub const ANSWERS_STORE_KEY: &str = "workbook_answers";

/// A single saved response: free text for prompts, a flag for toggles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Text(String),
    Flag(bool),
}

/// All free-text and toggle responses, keyed by the stable per-field key.
///
/// Entries are created lazily on first edit and are never removed. Reads
/// of absent keys yield the field's empty default rather than an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct AnswerSheet {
    entries: HashMap<String, AnswerValue>,
}

impl AnswerSheet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Text saved under `key`, or the empty string when unset.
    #[must_use]
    pub fn text(&self, key: &str) -> &str {
        match self.entries.get(key) {
            Some(AnswerValue::Text(text)) => text,
            _ => "",
        }
    }

    /// Flag saved under `key`; unset (or non-flag) reads as `false`.
    #[must_use]
    pub fn flag(&self, key: &str) -> bool {
        matches!(self.entries.get(key), Some(AnswerValue::Flag(true)))
    }

    pub fn set_text(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries
            .insert(key.into(), AnswerValue::Text(value.into()));
    }

    pub fn set_flag(&mut self, key: impl Into<String>, on: bool) {
        self.entries.insert(key.into(), AnswerValue::Flag(on));
    }

    /// Flip the flag under `key` and return the new value.
    pub fn toggle_flag(&mut self, key: &str) -> bool {
        let next = !self.flag(key);
        self.entries
            .insert(key.to_string(), AnswerValue::Flag(next));
        next
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serialized shape written to storage: a flat key → string/bool map.
    #[must_use]
    pub fn to_json(&self) -> Value {
        let mut map = serde_json::Map::with_capacity(self.entries.len());
        for (key, value) in &self.entries {
            let json = match value {
                AnswerValue::Text(text) => Value::String(text.clone()),
                AnswerValue::Flag(flag) => Value::Bool(*flag),
            };
            map.insert(key.clone(), json);
        }
        Value::Object(map)
    }

    /// Rebuild a sheet from persisted JSON, dropping anything malformed.
    ///
    /// Unparseable input yields an empty sheet; entries that are neither
    /// strings nor booleans are skipped while well-formed siblings are kept.
    #[must_use]
    pub fn from_json_lossy(raw: &str) -> Self {
        let Ok(Value::Object(map)) = serde_json::from_str::<Value>(raw) else {
            return Self::default();
        };

        let mut entries = HashMap::with_capacity(map.len());
        for (key, value) in map {
            match value {
                Value::String(text) => {
                    entries.insert(key, AnswerValue::Text(text));
                }
                Value::Bool(flag) => {
                    entries.insert(key, AnswerValue::Flag(flag));
                }
                _ => {}
            }
        }
        Self { entries }
    }
}
