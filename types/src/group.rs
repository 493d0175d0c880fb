//! Ordered mapping from group name to holders.
//!
//! Used both for classified groups and for winner sets. Key order is the
//! order groups were declared in (tier table order for tiers), and the JSON
//! form keeps that order in both directions.

use crate::holder::Holder;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Named groups of holders, in declaration order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Groups {
    entries: Vec<(String, Vec<Holder>)>,
}

/// Winner sets share the group shape: name → selected holders.
pub type Winners = Groups;

impl Groups {
    pub fn new() -> Self {
        Self::default()
    }

    /// One empty group per name, in the given order.
    pub fn with_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut groups = Self::new();
        for name in names {
            groups.insert(name, Vec::new());
        }
        groups
    }

    /// Set a group's holders, keeping its position if it already exists.
    pub fn insert(&mut self, name: impl Into<String>, holders: Vec<Holder>) {
        let name = name.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = holders,
            None => self.entries.push((name, holders)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&[Holder]> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, h)| h.as_slice())
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Vec<Holder>> {
        self.entries
            .iter_mut()
            .find(|(n, _)| n == name)
            .map(|(_, h)| h)
    }

    /// Group entries by position.
    pub fn entry_at_mut(&mut self, index: usize) -> Option<&mut Vec<Holder>> {
        self.entries.get_mut(index).map(|(_, h)| h)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Holder])> {
        self.entries
            .iter()
            .map(|(n, h)| (n.as_str(), h.as_slice()))
    }

    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|(n, _)| n.as_str()).collect()
    }

    /// Number of groups.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Holders across all groups.
    pub fn total_holders(&self) -> usize {
        self.entries.iter().map(|(_, h)| h.len()).sum()
    }

    /// Every holder, group by group, in order.
    pub fn all_holders(&self) -> Vec<Holder> {
        self.entries
            .iter()
            .flat_map(|(_, h)| h.iter().cloned())
            .collect()
    }
}

impl Serialize for Groups {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, holders) in &self.entries {
            map.serialize_entry(name, holders)?;
        }
        map.end()
    }
}

struct GroupsVisitor;

impl<'de> Visitor<'de> for GroupsVisitor {
    type Value = Groups;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of group name to holder list")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Groups, A::Error> {
        let mut groups = Groups::new();
        while let Some((name, holders)) = access.next_entry::<String, Vec<Holder>>()? {
            groups.insert(name, holders);
        }
        Ok(groups)
    }
}

impl<'de> Deserialize<'de> for Groups {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(GroupsVisitor)
    }
}
