//! Archetype domain model.

use serde::{Deserialize, Serialize};

use super::value::Value;

/// A personality archetype defined by two primary values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Archetype {
    pub id: String,
    pub name: String,
    pub tagline: String,
    pub description: String,
    pub primary_values: [Value; 2],
    pub strengths: Vec<String>,
    pub blind_spots: Vec<String>,
    /// Display color as a hex string
    pub color: String,
    /// Id of the archetype this one clashes with
    pub clash_with: String,
    /// Id of the archetype this one gets along with
    pub vibe_with: String,
}

impl Archetype {
    pub fn is_primary(&self, value: Value) -> bool {
        self.primary_values.contains(&value)
    }
}

/// Ordered archetype list.
///
/// Order is part of the matching contract: on equal affinity the earlier
/// archetype wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchetypeCatalog {
    archetypes: Vec<Archetype>,
}

impl ArchetypeCatalog {
    pub fn new(archetypes: Vec<Archetype>) -> Self {
        Self { archetypes }
    }

    pub fn get(&self, id: &str) -> Option<&Archetype> {
        self.archetypes.iter().find(|a| a.id == id)
    }

    /// Archetype `archetype` clashes with.
    pub fn clash_of(&self, archetype: &Archetype) -> Option<&Archetype> {
        self.get(&archetype.clash_with)
    }

    /// Archetype `archetype` vibes with.
    pub fn vibe_of(&self, archetype: &Archetype) -> Option<&Archetype> {
        self.get(&archetype.vibe_with)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Archetype> {
        self.archetypes.iter()
    }

    pub fn len(&self) -> usize {
        self.archetypes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.archetypes.is_empty()
    }
}

impl<'a> IntoIterator for &'a ArchetypeCatalog {
    type Item = &'a Archetype;
    type IntoIter = std::slice::Iter<'a, Archetype>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
