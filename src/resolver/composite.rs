//! First-match chaining over delegate resolvers.

use std::sync::Arc;

use crate::{
    resolver::{ClassResolver, ResolutionOutcome},
    Result,
};

/// Chains delegate resolvers, returning the first decisive outcome.
///
/// Delegates are consulted in order. [`ResolutionOutcome::NotFound`] passes the
/// question on to the next delegate; every other outcome is decisive, including
/// [`ResolutionOutcome::External`] - a source that declares a name out of scope
/// wins over a later source that might also know it. Only when every delegate
/// comes up empty is the name not found.
pub struct CompositeResolver {
    delegates: Vec<Arc<dyn ClassResolver>>,
}

impl CompositeResolver {
    /// Build a composite over the given delegates, consulted in order.
    #[must_use]
    pub fn new(delegates: Vec<Arc<dyn ClassResolver>>) -> Self {
        CompositeResolver { delegates }
    }
}

impl ClassResolver for CompositeResolver {
    fn resolve(&self, binary_name: &str) -> Result<ResolutionOutcome> {
        for delegate in &self.delegates {
            match delegate.resolve(binary_name)? {
                ResolutionOutcome::NotFound => {}
                decisive => return Ok(decisive),
            }
        }
        Ok(ResolutionOutcome::NotFound)
    }
}
