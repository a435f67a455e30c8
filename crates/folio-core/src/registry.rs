//! Section registry
//!
//! The ordered, immutable list of navigable page sections. Built once at
//! startup; every other component reads it through an `Arc`.

use std::borrow::Borrow;
use std::fmt;
use indexmap::IndexMap;
use serde::{Serialize, Deserialize};

use crate::error::{NavError, Result};

/// Stable identifier of a page section
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionId(String);

impl SectionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for SectionId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SectionId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for SectionId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// One navigable content region of the page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub id: SectionId,
    pub label: String,
    /// Position in document order, starting at 0
    pub order: usize,
}

/// Ordered registry of sections with O(1) lookup by id
#[derive(Debug, Clone)]
pub struct SectionRegistry {
    sections: IndexMap<SectionId, Section>,
}

impl SectionRegistry {
    /// Build a registry from `(id, label)` pairs in document order
    pub fn new<I, Id, Label>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (Id, Label)>,
        Id: Into<SectionId>,
        Label: Into<String>,
    {
        let mut sections = IndexMap::new();

        for (order, (id, label)) in entries.into_iter().enumerate() {
            let id = id.into();
            if sections.contains_key(&id) {
                return Err(NavError::DuplicateSection(id.to_string()));
            }
            let section = Section {
                id: id.clone(),
                label: label.into(),
                order,
            };
            sections.insert(id, section);
        }

        if sections.is_empty() {
            return Err(NavError::EmptyRegistry);
        }

        Ok(Self { sections })
    }

    /// The portfolio page sections
    pub fn portfolio() -> Self {
        let entries = [
            ("home", "Home"),
            ("skills", "Skills"),
            ("projects", "Projects"),
            ("experience", "Experience"),
            ("contact", "Contact"),
        ];

        let sections = entries
            .into_iter()
            .enumerate()
            .map(|(order, (id, label))| {
                let id = SectionId::new(id);
                (id.clone(), Section { id, label: label.to_string(), order })
            })
            .collect();

        Self { sections }
    }

    /// Sections in document order
    pub fn sections(&self) -> impl Iterator<Item = &Section> + '_ {
        self.sections.values()
    }

    pub fn get(&self, id: &str) -> Option<&Section> {
        self.sections.get(id)
    }

    /// Document-order index of a section
    pub fn order_of(&self, id: &str) -> Option<usize> {
        self.sections.get_index_of(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.sections.contains_key(id)
    }

    pub fn first(&self) -> &Section {
        // Construction guarantees at least one section
        &self.sections[0]
    }

    pub fn last(&self) -> &Section {
        &self.sections[self.sections.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}
