//! Per-run state shared by the driver and every verifier.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::hierarchy::UnresolvedAncestor;
use crate::metadata::{ApiMarkers, ClassRc, Location};
use crate::problems::{ApiUsage, CompatibilityProblem, ProblemReporter};
use crate::resolver::{ClassResolver, ResolutionFailure};
use crate::verification::VerificationConfig;
use crate::Result;

/// Cooperative cancellation signal for a verification run.
///
/// Clones share one flag, so a handle can be moved to another thread and
/// flipped while the run is in flight. The driver observes the flag between
/// classes and between methods and aborts with
/// [`Error::Interrupted`](crate::Error::Interrupted); everything registered
/// before the abort stays on the reporter.
#[derive(Debug, Clone, Default)]
pub struct CancellationFlag {
    cancelled: Arc<AtomicBool>,
}

impl CancellationFlag {
    /// A fresh, unset flag.
    #[must_use]
    pub fn new() -> Self {
        CancellationFlag::default()
    }

    /// Request cancellation. Idempotent.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    /// True once [`CancellationFlag::cancel`] has been called on any clone.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}

/// Everything one verification run shares: the resolver, the configuration,
/// the problem reporter, and the cancellation flag.
///
/// A context is created per independent run and holds no state beyond it.
/// All of its methods take `&self` and are safe to call from parallel
/// workers. The `resolve_*` helpers are the single path through which
/// verifiers look up classes, so resolution failures turn into problem
/// records in exactly one place.
pub struct VerificationContext {
    resolver: Arc<dyn ClassResolver>,
    config: VerificationConfig,
    reporter: ProblemReporter,
    cancellation: CancellationFlag,
}

impl VerificationContext {
    /// A context with the default configuration.
    #[must_use]
    pub fn new(resolver: Arc<dyn ClassResolver>) -> Self {
        Self::with_config(resolver, VerificationConfig::default())
    }

    /// A context with an explicit configuration.
    #[must_use]
    pub fn with_config(resolver: Arc<dyn ClassResolver>, config: VerificationConfig) -> Self {
        VerificationContext {
            resolver,
            config,
            reporter: ProblemReporter::new(),
            cancellation: CancellationFlag::new(),
        }
    }

    /// The resolver this run reads classes through.
    #[must_use]
    pub fn resolver(&self) -> &dyn ClassResolver {
        self.resolver.as_ref()
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &VerificationConfig {
        &self.config
    }

    /// The sink problems and usages are registered into.
    #[must_use]
    pub fn reporter(&self) -> &ProblemReporter {
        &self.reporter
    }

    /// The run's cancellation flag. Clone it to cancel from elsewhere.
    #[must_use]
    pub fn cancellation(&self) -> &CancellationFlag {
        &self.cancellation
    }

    /// True once cancellation has been requested.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancellation.is_cancelled()
    }

    /// Register a problem on the reporter.
    pub fn report(&self, problem: CompatibilityProblem) {
        self.reporter.report(problem);
    }

    /// Resolve `name`, turning a resolution failure into the matching problem
    /// record at `usage`.
    ///
    /// Returns the class only on a successful resolution. External names and
    /// failed ones both come back as `None`; the failure has already been
    /// reported by then, so callers just stop.
    ///
    /// # Errors
    /// Propagates resolver faults that invalidate the run.
    pub fn resolve_or_report(&self, name: &str, usage: &Location) -> Result<Option<ClassRc>> {
        let outcome = self.resolver.resolve(name)?;
        if let Some(failure) = outcome.failure() {
            self.report(failure_problem(name, &failure, usage));
        }
        Ok(outcome.found().cloned())
    }

    /// [`resolve_or_report`](Self::resolve_or_report), additionally recording
    /// deprecation and experimental markers of the resolved class as usages
    /// at `usage`.
    ///
    /// This is the path for classes another class depends on - reference
    /// owners, supertypes, constant-pool types. The class being verified
    /// itself goes through the plain variant, since using oneself is not a
    /// usage.
    ///
    /// # Errors
    /// Propagates resolver faults that invalidate the run.
    pub fn resolve_dependency(&self, name: &str, usage: &Location) -> Result<Option<ClassRc>> {
        let resolved = self.resolve_or_report(name, usage)?;
        if let Some(class) = &resolved {
            self.record_markers(&class.markers, Location::Class(class.location()), usage);
        }
        Ok(resolved)
    }

    /// Record the API markers of a used target, honoring the configuration
    /// switches. A target without markers records nothing.
    pub fn record_markers(&self, markers: &ApiMarkers, target: Location, usage: &Location) {
        if let Some(deprecation) = markers.deprecation {
            if self.config.collect_deprecated_usages {
                self.reporter.report_usage(ApiUsage::deprecated(
                    target.clone(),
                    usage.clone(),
                    deprecation.for_removal,
                ));
            }
        }
        if markers.experimental && self.config.collect_experimental_usages {
            self.reporter
                .report_usage(ApiUsage::experimental(target, usage.clone()));
        }
    }

    /// Report every broken link a hierarchy walk or member resolution
    /// collected, attributed to `usage`.
    pub fn report_unresolved(&self, unresolved: &[UnresolvedAncestor], usage: &Location) {
        for ancestor in unresolved {
            self.report(failure_problem(&ancestor.name, &ancestor.failure, usage));
        }
    }
}

/// The problem record for a class that failed to resolve at `usage`.
fn failure_problem(
    name: &str,
    failure: &ResolutionFailure,
    usage: &Location,
) -> CompatibilityProblem {
    match failure {
        ResolutionFailure::NotFound => CompatibilityProblem::ClassNotFound {
            class_name: name.to_string(),
            usage: usage.clone(),
        },
        ResolutionFailure::InvalidClassFile(reason) => CompatibilityProblem::InvalidClassFile {
            class_name: name.to_string(),
            reason: reason.clone(),
            usage: usage.clone(),
        },
        ResolutionFailure::FailedToRead(reason) => CompatibilityProblem::FailedToReadClass {
            class_name: name.to_string(),
            reason: reason.clone(),
            usage: usage.clone(),
        },
    }
}
