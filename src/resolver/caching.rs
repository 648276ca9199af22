//! Outcome memoization in front of a slower resolver.

use std::sync::Arc;

use dashmap::DashMap;
use log::trace;

use crate::{
    resolver::{ClassResolver, ResolutionOutcome},
    Result,
};

/// Memoizes every outcome of an inner resolver, including the failure shapes.
///
/// Hierarchy walking resolves the same supertypes over and over; production
/// setups wrap their composite in one of these. Lookups racing on the same
/// name may both reach the inner resolver - the contract requires determinism,
/// so both compute the same value and the second insert is a no-op in effect.
/// Genuine faults (`Err`) are not cached; a retry is allowed to succeed.
pub struct CachingResolver {
    inner: Arc<dyn ClassResolver>,
    cache: DashMap<String, ResolutionOutcome>,
}

impl CachingResolver {
    /// Wrap an inner resolver with a fresh cache.
    #[must_use]
    pub fn new(inner: Arc<dyn ClassResolver>) -> Self {
        CachingResolver {
            inner,
            cache: DashMap::new(),
        }
    }

    /// Number of memoized names.
    #[must_use]
    pub fn cached(&self) -> usize {
        self.cache.len()
    }
}

impl ClassResolver for CachingResolver {
    fn resolve(&self, binary_name: &str) -> Result<ResolutionOutcome> {
        if let Some(hit) = self.cache.get(binary_name) {
            return Ok(hit.value().clone());
        }

        trace!("resolving {} through inner resolver", binary_name);
        let outcome = self.inner.resolve(binary_name)?;
        self.cache
            .insert(binary_name.to_string(), outcome.clone());
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::metadata::ClassMetadataBuilder;

    struct CountingResolver {
        calls: AtomicUsize,
    }

    impl ClassResolver for CountingResolver {
        fn resolve(&self, binary_name: &str) -> Result<ResolutionOutcome> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if binary_name == "com/example/Foo" {
                Ok(ResolutionOutcome::Found(
                    ClassMetadataBuilder::new("com/example/Foo").build(),
                ))
            } else {
                Ok(ResolutionOutcome::NotFound)
            }
        }
    }

    #[test]
    fn test_second_lookup_hits_cache() {
        let counting = Arc::new(CountingResolver {
            calls: AtomicUsize::new(0),
        });
        let caching = CachingResolver::new(counting.clone());

        let first = caching.resolve("com/example/Foo").unwrap();
        let second = caching.resolve("com/example/Foo").unwrap();

        assert_eq!(first, second);
        assert_eq!(counting.calls.load(Ordering::SeqCst), 1);
        assert_eq!(caching.cached(), 1);
    }

    #[test]
    fn test_not_found_is_cached_too() {
        let counting = Arc::new(CountingResolver {
            calls: AtomicUsize::new(0),
        });
        let caching = CachingResolver::new(counting.clone());

        assert_eq!(
            caching.resolve("com/example/Gone").unwrap(),
            ResolutionOutcome::NotFound
        );
        assert_eq!(
            caching.resolve("com/example/Gone").unwrap(),
            ResolutionOutcome::NotFound
        );
        assert_eq!(counting.calls.load(Ordering::SeqCst), 1);
    }
}
