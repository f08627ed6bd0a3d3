//! Learned patterns - keyword keys mapped to responses given before.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;

/// Derive a pattern key from raw input.
///
/// Lower-cases the input, splits on whitespace, keeps tokens longer than
/// `min_len` bytes and joins the first `max_keywords` of them with a single
/// space. Returns `None` when no token survives.
///
/// Length is counted in bytes, not characters, so short accented words pass
/// the filter: `"Tôi muốn chơi cờ"` gives `"tôi muốn chơi"` where a character
/// count would give `"muốn chơi"`. Keys derived from accented input therefore
/// carry more tokens and match more narrowly.
pub fn pattern_key(input: &str, min_len: usize, max_keywords: usize) -> Option<String> {
    let lowered = input.to_lowercase();
    let keywords: Vec<&str> = lowered
        .split_whitespace()
        .filter(|word| word.len() > min_len)
        .take(max_keywords)
        .collect();

    if keywords.is_empty() {
        None
    } else {
        Some(keywords.join(" "))
    }
}

/// Check whether every token of `key` occurs somewhere in `input`.
///
/// Order-independent substring containment, not word matching.
pub fn key_matches(key: &str, input: &str) -> bool {
    key.split_whitespace().all(|token| input.contains(token))
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct PatternEntry {
    key: String,
    responses: Vec<String>,
}

/// Pattern key -> responses, kept in insertion order.
///
/// Iteration order decides which pattern wins when several match, so it is
/// preserved through serialization.
///
/// The store counts as a knowledge category once anything has been learned
/// into it (or a non-empty store was loaded); clearing it keeps the category.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LearnedPatterns {
    entries: Vec<PatternEntry>,
    index: HashMap<String, usize>,
    established: bool,
}

impl LearnedPatterns {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `response` under `key`, creating the key if needed.
    ///
    /// Duplicates are kept.
    pub fn learn(&mut self, key: impl Into<String>, response: impl Into<String>) {
        let key = key.into();
        self.established = true;
        match self.index.get(&key) {
            Some(&i) => self.entries[i].responses.push(response.into()),
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push(PatternEntry {
                    key,
                    responses: vec![response.into()],
                });
            }
        }
    }

    /// Responses stored under `key`.
    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.index
            .get(key)
            .map(|&i| self.entries[i].responses.as_slice())
    }

    /// First pattern, in insertion order, whose key matches `normalized_input`.
    pub fn find_match(&self, normalized_input: &str) -> Option<(&str, &[String])> {
        self.entries
            .iter()
            .find(|e| key_matches(&e.key, normalized_input))
            .map(|e| (e.key.as_str(), e.responses.as_slice()))
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether the store exists as a category, even if currently empty.
    pub fn is_established(&self) -> bool {
        self.established
    }

    /// Iterate keys with their responses, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|e| (e.key.as_str(), e.responses.as_slice()))
    }

    /// Remove every pattern. The store stays established.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.index.clear();
    }

    /// Drop patterns that could never answer: blank keys or no responses.
    ///
    /// Returns how many were removed.
    pub fn prune_unusable(&mut self) -> usize {
        let before = self.entries.len();
        self.entries
            .retain(|e| !e.key.trim().is_empty() && !e.responses.is_empty());
        self.rebuild_index();
        before - self.entries.len()
    }

    fn rebuild_index(&mut self) {
        self.index = self
            .entries
            .iter()
            .enumerate()
            .map(|(i, e)| (e.key.clone(), i))
            .collect();
    }
}

impl Serialize for LearnedPatterns {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(&entry.key, &entry.responses)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for LearnedPatterns {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct PatternsVisitor;

        impl<'de> Visitor<'de> for PatternsVisitor {
            type Value = LearnedPatterns;

            fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                f.write_str("a map of pattern keys to response lists")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut patterns = LearnedPatterns::new();
                while let Some((key, responses)) = access.next_entry::<String, Vec<String>>()? {
                    match patterns.index.get(&key) {
                        Some(&i) => patterns.entries[i].responses.extend(responses),
                        None => {
                            patterns.index.insert(key.clone(), patterns.entries.len());
                            patterns.entries.push(PatternEntry { key, responses });
                        }
                    }
                }
                patterns.established = !patterns.entries.is_empty();
                Ok(patterns)
            }
        }

        deserializer.deserialize_map(PatternsVisitor)
    }
}
