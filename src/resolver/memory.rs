//! A resolver over classes staged in memory.

use dashmap::DashMap;

use crate::{
    metadata::ClassRc,
    resolver::{ClassResolver, ResolutionOutcome},
    Result,
};

/// Resolves from an in-memory map of staged outcomes.
///
/// The building block for callers that parse their classes upfront, and for
/// tests. Besides parsed classes it can stage the failure shapes, so broken
/// inputs (an unparseable dependency, an unreadable archive entry) are
/// representable without touching a filesystem.
///
/// Staging is thread-safe; classes may be added while lookups run, though a
/// verification run expects the set to be stable for determinism.
pub struct InMemoryResolver {
    entries: DashMap<String, ResolutionOutcome>,
}

impl InMemoryResolver {
    /// An empty resolver.
    #[must_use]
    pub fn new() -> Self {
        InMemoryResolver {
            entries: DashMap::new(),
        }
    }

    /// Stage a parsed class under its own name.
    pub fn add(&self, class: ClassRc) {
        self.entries
            .insert(class.name.clone(), ResolutionOutcome::Found(class));
    }

    /// Stage a name that resolves to an invalid-class-file outcome.
    pub fn add_invalid(&self, binary_name: &str, reason: &str) {
        self.entries.insert(
            binary_name.to_string(),
            ResolutionOutcome::InvalidClassFile(reason.to_string()),
        );
    }

    /// Stage a name that resolves to a failed-to-read outcome.
    pub fn add_unreadable(&self, binary_name: &str, reason: &str) {
        self.entries.insert(
            binary_name.to_string(),
            ResolutionOutcome::FailedToRead(reason.to_string()),
        );
    }

    /// Stage a name as intentionally outside the verified scope.
    pub fn add_external(&self, binary_name: &str) {
        self.entries
            .insert(binary_name.to_string(), ResolutionOutcome::External);
    }

    /// Number of staged entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if nothing is staged.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for InMemoryResolver {
    fn default() -> Self {
        InMemoryResolver::new()
    }
}

impl ClassResolver for InMemoryResolver {
    fn resolve(&self, binary_name: &str) -> Result<ResolutionOutcome> {
        Ok(self
            .entries
            .get(binary_name)
            .map(|entry| entry.value().clone())
            .unwrap_or(ResolutionOutcome::NotFound))
    }
}
