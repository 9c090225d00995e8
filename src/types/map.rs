//! Ordered shade-key to colour mapping.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use super::{Colour, ShadeKey};

/// An ordered mapping from shade key to colour.
///
/// Iteration order is insertion order, which the generators keep equal to
/// the ascending key sequence of the swatch kind being built.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ShadeMap {
    entries: Vec<(ShadeKey, Colour)>,
}

impl ShadeMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty map with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Append an entry.
    pub fn insert(&mut self, key: ShadeKey, colour: Colour) {
        self.entries.push((key, colour));
    }

    /// Look up a colour by shade key.
    pub fn get(&self, key: ShadeKey) -> Option<Colour> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, c)| *c)
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (ShadeKey, Colour)> + '_ {
        self.entries.iter().copied()
    }

    /// Iterate keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = ShadeKey> + '_ {
        self.entries.iter().map(|(k, _)| *k)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the map is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for ShadeMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, colour) in &self.entries {
            map.serialize_entry(&key.to_string(), colour)?;
        }
        map.end()
    }
}
