//! Feature-line parsing.
//!
//! Catalog records store item attributes as free-text `"Key: Value"` lines
//! rather than structured fields. This module normalizes those lines into a
//! stat mapping with typed values. Malformed lines (no colon, or an empty
//! key/value after trimming) are dropped silently; they are data noise, not
//! errors.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Raw feature lines as stored in the catalog: a single string or a list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Features {
    One(String),
    Many(Vec<String>),
}

impl Default for Features {
    fn default() -> Self {
        Self::Many(Vec::new())
    }
}

impl Features {
    /// View the feature lines as a slice regardless of the stored shape.
    pub fn lines(&self) -> &[String] {
        match self {
            Self::One(line) => std::slice::from_ref(line),
            Self::Many(lines) => lines,
        }
    }
}

/// A parsed stat value: an integer when the raw value is a pure base-10
/// integer, otherwise the trimmed text as-is (e.g., `"1-3"` for a range).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StatValue {
    Int(i64),
    Text(String),
}

/// Parse feature lines into a normalized stat mapping.
///
/// Each line splits on its first colon into key and value, both trimmed.
/// Keys are normalized via [`normalize_stat_key`]; values are coerced via
/// the [`StatValue`] rules. When two lines normalize to the same key, the
/// later line wins.
pub fn parse_features(features: &Features) -> HashMap<String, StatValue> {
    let mut stats = HashMap::new();

    for line in features.lines() {
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let key = key.trim();
        let value = value.trim();
        if key.is_empty() || value.is_empty() {
            continue;
        }
        stats.insert(normalize_stat_key(key), coerce_value(value));
    }

    stats
}

/// Normalize a stat key: lowercase, with every whitespace run and every
/// literal hyphen replaced by a single underscore.
pub fn normalize_stat_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut chars = key.chars().peekable();
    while let Some(c) = chars.next() {
        if c.is_whitespace() {
            out.push('_');
            while chars.peek().is_some_and(|c| c.is_whitespace()) {
                chars.next();
            }
        } else if c == '-' {
            out.push('_');
        } else {
            out.extend(c.to_lowercase());
        }
    }
    out
}

fn coerce_value(value: &str) -> StatValue {
    match value.parse::<i64>() {
        Ok(n) => StatValue::Int(n),
        Err(_) => StatValue::Text(value.to_string()),
    }
}
