//! Marking name ranges as outside the verified scope.

use crate::{
    resolver::{ClassResolver, ResolutionOutcome},
    Result,
};

/// Declares binary-name prefixes as intentionally external.
///
/// Anything matching a prefix resolves to [`ResolutionOutcome::External`] and is
/// silently skipped by the engine; everything else is passed on as not found, so
/// this resolver composes in front of real sources inside a
/// [`crate::resolver::CompositeResolver`]. Prefixes are plain string prefixes of
/// the slash-separated binary name; pass them slash-terminated
/// (`"org/vendor/"`) unless a whole name is meant.
pub struct KnownExternalResolver {
    prefixes: Vec<String>,
}

impl KnownExternalResolver {
    /// Build from the given prefixes.
    #[must_use]
    pub fn new<I, S>(prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        KnownExternalResolver {
            prefixes: prefixes.into_iter().map(Into::into).collect(),
        }
    }
}

impl ClassResolver for KnownExternalResolver {
    fn resolve(&self, binary_name: &str) -> Result<ResolutionOutcome> {
        if self
            .prefixes
            .iter()
            .any(|prefix| binary_name.starts_with(prefix.as_str()))
        {
            Ok(ResolutionOutcome::External)
        } else {
            Ok(ResolutionOutcome::NotFound)
        }
    }
}
