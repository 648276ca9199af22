//! Pluggable class resolution.
//!
//! The engine never opens a class file itself; everything it learns about a class
//! comes through the [`ClassResolver`] trait. Production setups compose several
//! sources behind one logical resolver: the classes under verification, their
//! dependencies, the platform image, and a marker for names that are intentionally
//! outside the verified scope. This module defines the contract and ships the
//! combinators that composition needs.
//!
//! # Key Components
//!
//! - [`ClassResolver`] - the resolution contract
//! - [`ResolutionOutcome`] - what a lookup produced, including the non-fatal
//!   failure shapes that become problem records
//! - [`InMemoryResolver`] - a map of staged classes, the building block for tests
//!   and for callers that parse classes upfront
//! - [`CompositeResolver`] - first-match chaining over delegate resolvers
//! - [`CachingResolver`] - memoizes outcomes, safe under concurrent lookups
//! - [`KnownExternalResolver`] - declares package prefixes as outside the scope
//!
//! # Thread Safety
//!
//! Resolvers are shared across the class-parallel verification driver, so the
//! trait requires `Send + Sync`. Implementations must tolerate concurrent
//! `resolve` calls; the shipped combinators do.
//!
//! # Examples
//!
//! ```rust
//! use linkscope::resolver::{
//!     CachingResolver, ClassResolver, CompositeResolver, InMemoryResolver,
//!     KnownExternalResolver, ResolutionOutcome,
//! };
//! use linkscope::metadata::ClassMetadataBuilder;
//! use std::sync::Arc;
//!
//! let subject = InMemoryResolver::new();
//! subject.add(ClassMetadataBuilder::new("com/example/Main").build());
//!
//! let resolver = CachingResolver::new(Arc::new(CompositeResolver::new(vec![
//!     Arc::new(subject),
//!     Arc::new(KnownExternalResolver::new(["org/vendor/"])),
//! ])));
//!
//! assert!(matches!(
//!     resolver.resolve("com/example/Main")?,
//!     ResolutionOutcome::Found(_)
//! ));
//! assert!(matches!(
//!     resolver.resolve("org/vendor/Widget")?,
//!     ResolutionOutcome::External
//! ));
//! assert!(matches!(
//!     resolver.resolve("com/example/Gone")?,
//!     ResolutionOutcome::NotFound
//! ));
//! # Ok::<(), linkscope::Error>(())
//! ```

mod caching;
mod composite;
mod external;
mod memory;

pub use caching::CachingResolver;
pub use composite::CompositeResolver;
pub use external::KnownExternalResolver;
pub use memory::InMemoryResolver;

use crate::{metadata::ClassRc, Result};

/// What resolving a binary name produced.
///
/// Only [`ResolutionOutcome::Found`] carries metadata. The three failure shapes
/// are expected analysis outcomes - they become problem records at the point of
/// use, never errors. [`ResolutionOutcome::External`] is a silent no-op: the
/// name is real but intentionally outside the verified scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionOutcome {
    /// The class was resolved
    Found(ClassRc),
    /// The name is known and deliberately outside the verified scope
    External,
    /// No source knows the name
    NotFound,
    /// A source found the bytes but they do not form a valid class file
    InvalidClassFile(String),
    /// A source knows the name but could not read it
    FailedToRead(String),
}

impl ResolutionOutcome {
    /// The resolved class, if this outcome carries one.
    #[must_use]
    pub fn found(&self) -> Option<&ClassRc> {
        match self {
            ResolutionOutcome::Found(class) => Some(class),
            _ => None,
        }
    }

    /// The failure this outcome represents, if it is one of the three
    /// problem-triggering shapes.
    #[must_use]
    pub fn failure(&self) -> Option<ResolutionFailure> {
        match self {
            ResolutionOutcome::NotFound => Some(ResolutionFailure::NotFound),
            ResolutionOutcome::InvalidClassFile(reason) => {
                Some(ResolutionFailure::InvalidClassFile(reason.clone()))
            }
            ResolutionOutcome::FailedToRead(reason) => {
                Some(ResolutionFailure::FailedToRead(reason.clone()))
            }
            ResolutionOutcome::Found(_) | ResolutionOutcome::External => None,
        }
    }
}

/// A problem-triggering resolution failure, detached from the outcome so walkers
/// can collect and hand them to whoever reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionFailure {
    /// No source knows the name
    NotFound,
    /// The bytes do not form a valid class file
    InvalidClassFile(String),
    /// The bytes could not be read
    FailedToRead(String),
}

/// A source of class metadata.
///
/// Implementations must be deterministic within a run: resolving the same name
/// twice yields the same outcome with structurally identical metadata. An `Err`
/// is reserved for genuine faults that should abort the run; a class that is
/// merely missing or broken is an [`ResolutionOutcome`] value.
pub trait ClassResolver: Send + Sync {
    /// Resolve a binary class name (`com/example/Foo`).
    ///
    /// # Errors
    /// Returns an error only for faults that invalidate the run itself, such as
    /// an I/O layer giving up entirely. Missing or unparseable classes are
    /// outcomes, not errors.
    fn resolve(&self, binary_name: &str) -> Result<ResolutionOutcome>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_failure_mapping() {
        assert_eq!(
            ResolutionOutcome::NotFound.failure(),
            Some(ResolutionFailure::NotFound)
        );
        assert_eq!(
            ResolutionOutcome::InvalidClassFile("bad magic".to_string()).failure(),
            Some(ResolutionFailure::InvalidClassFile("bad magic".to_string()))
        );
        assert_eq!(ResolutionOutcome::External.failure(), None);
    }
}
