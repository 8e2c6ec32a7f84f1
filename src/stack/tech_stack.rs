use super::Technology;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Set of technologies detected for one bundle.
///
/// Ordered so that iteration and serialization are deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TechStack(BTreeSet<Technology>);

impl TechStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(technology: Technology) -> Self {
        let mut stack = Self::new();
        stack.insert(technology);
        stack
    }

    /// Returns true if the technology was not already present
    pub fn insert(&mut self, technology: Technology) -> bool {
        self.0.insert(technology)
    }

    pub fn remove(&mut self, technology: Technology) -> bool {
        self.0.remove(&technology)
    }

    pub fn contains(&self, technology: Technology) -> bool {
        self.0.contains(&technology)
    }

    pub fn union(&self, other: &TechStack) -> TechStack {
        TechStack(self.0.union(&other.0).copied().collect())
    }

    pub fn extend(&mut self, other: &TechStack) {
        self.0.extend(other.0.iter().copied());
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Technology> + '_ {
        self.0.iter().copied()
    }

    pub fn canonical_names(&self) -> Vec<&'static str> {
        self.iter().map(|t| t.canonical()).collect()
    }
}

impl FromIterator<Technology> for TechStack {
    fn from_iter<I: IntoIterator<Item = Technology>>(iter: I) -> Self {
        TechStack(iter.into_iter().collect())
    }
}

impl fmt::Display for TechStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.iter().map(|t| t.name()).collect();
        write!(f, "{}", names.join(", "))
    }
}
