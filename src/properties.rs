use std::collections::HashMap;
use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

use crate::error::Error;
use crate::escape::{escape_key, escape_value};
use crate::parser::Parser;
use crate::types::Property;

/// Parsed properties with insertion-ordered keys.
///
/// Entries keep the position of their first insertion; inserting an existing
/// key replaces the value in place. There is no internal locking: share it
/// across threads behind your own lock if it is mutated.
#[derive(Debug, Clone, Default)]
pub struct Properties {
    entries: Vec<Property>,
    index: HashMap<String, usize>,
}

impl Properties {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or update a property, returning the previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let key = key.into();
        let value = value.into();

        if let Some(&pos) = self.index.get(&key) {
            return Some(std::mem::replace(&mut self.entries[pos].value, value));
        }

        self.index.insert(key.clone(), self.entries.len());
        self.entries.push(Property { key, value });
        None
    }

    /// Get the full Property (returns None if not found)
    pub fn get(&self, key: &str) -> Option<&Property> {
        self.index.get(key).map(|&pos| &self.entries[pos])
    }

    pub fn get_value(&self, key: &str) -> Option<&str> {
        self.get(key).map(Property::value)
    }

    /// Get value or default
    pub fn get_or<'b>(&'b self, key: &str, default: &'b str) -> &'b str {
        self.get_value(key).unwrap_or(default)
    }

    /// Keys in first-insertion order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(Property::key)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Property> {
        self.entries.iter()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Export to HashMap<String, String> (owned copies)
    pub fn to_map(&self) -> HashMap<String, String> {
        self.entries
            .iter()
            .map(|p| (p.key.clone(), p.value.clone()))
            .collect()
    }

    /// Serialize in `.properties` syntax, one `key=value` line per entry.
    pub fn write_to<W: Write>(&self, mut writer: W) -> io::Result<()> {
        write!(writer, "{}", self)?;
        writer.flush()
    }
}

impl PartialEq for Properties {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl Eq for Properties {}

impl fmt::Display for Properties {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for property in &self.entries {
            writeln!(
                f,
                "{}={}",
                escape_key(&property.key),
                escape_value(&property.value)
            )?;
        }
        Ok(())
    }
}

impl FromStr for Properties {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Parser::new(s).parse()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Properties {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut properties = Properties::new();
        for (key, value) in iter {
            properties.insert(key, value);
        }
        properties
    }
}

impl<'a> IntoIterator for &'a Properties {
    type Item = &'a Property;
    type IntoIter = std::slice::Iter<'a, Property>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
