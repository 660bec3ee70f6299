use std::fmt;

use indexmap::IndexMap;
use thiserror::Error;

use crate::Section;
use crate::grammar;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DocumentError {
    #[error("section \"{name}\" is invalid")]
    InvalidSection { name: String },

    #[error("key value pair \"{key}, {value}\" in section \"{section}\" is invalid")]
    InvalidKeyValue {
        section: String,
        key: String,
        value: String,
    },
}

/// Sections of key/value pairs, in insertion order.
///
/// The empty section name holds pairs that appear before any `[section]`
/// header. Sections are only ever added or reopened, never cleared:
/// - `add_section` on an existing name is a no-op
/// - `add_key_value` overwrites an existing key (last write wins)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    sections: IndexMap<String, Section>,
}

impl Document {
    pub fn new() -> Self {
        Self {
            sections: IndexMap::new(),
        }
    }

    /// Create `name` if it does not exist yet.
    ///
    /// Names containing `[`, `]` or a line break, or with surrounding spaces,
    /// are rejected since they would not read back as the same section.
    pub fn add_section(&mut self, name: &str) -> Result<(), DocumentError> {
        if !grammar::is_section_line(&format!("[{name}]"))
            || !grammar::is_valid_section_name(name)
        {
            return Err(DocumentError::InvalidSection {
                name: name.to_string(),
            });
        }
        self.open_section(name);
        Ok(())
    }

    /// Set `section[key] = value`, creating the section first.
    ///
    /// The section is created even when the pair is then rejected.
    pub fn add_key_value(
        &mut self,
        section: &str,
        key: &str,
        value: &str,
    ) -> Result<(), DocumentError> {
        self.add_section(section)?;

        let line = format!("{key} = {value}");
        let valid = !grammar::is_section_line(&line)
            && grammar::split_key_value(&line) == Some((key, value));
        if !valid {
            return Err(DocumentError::InvalidKeyValue {
                section: section.to_string(),
                key: key.to_string(),
                value: value.to_string(),
            });
        }

        self.open_section(section).insert(key, value);
        Ok(())
    }

    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.sections.get(section)?.get(key)
    }

    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.get(name)
    }

    pub fn contains_section(&self, name: &str) -> bool {
        self.sections.contains_key(name)
    }

    pub fn sections(&self) -> impl Iterator<Item = (&str, &Section)> {
        self.sections.iter().map(|(name, s)| (name.as_str(), s))
    }

    /// Number of sections, including the empty one if present.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    // Callers have already validated `name`.
    pub(crate) fn open_section(&mut self, name: &str) -> &mut Section {
        self.sections.entry(name.to_string()).or_default()
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::write_text(self, &crate::WriteOptions::default()))
    }
}
