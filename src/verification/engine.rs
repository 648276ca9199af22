//! The class-parallel verification driver.

use std::sync::atomic::{AtomicUsize, Ordering};

use rayon::prelude::*;

use crate::{
    hierarchy::{find_overridden_method, walk_ancestors},
    metadata::{ClassLocation, ClassRc, Location, MethodMetadata},
    problems::CompatibilityProblem,
    verification::{instructions::verify_instruction, VerificationContext},
    Error, Result,
};

/// Totals from one [`VerificationEngine::verify`] call.
///
/// Counts of problems and usages reflect the context's reporter at the end of
/// the call; repeated runs on one context accumulate there, deduplicated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerificationSummary {
    /// Number of class names the caller asked to verify.
    pub classes_requested: usize,
    /// How many of them resolved and were actually verified.
    pub classes_verified: usize,
    /// Distinct problems on the reporter after the run.
    pub problem_count: usize,
    /// Distinct API usages on the reporter after the run.
    pub usage_count: usize,
}

/// Drives verification over a set of classes.
///
/// Classes are independent of each other once their ancestors resolve, so the
/// run is class-parallel: each worker verifies whole classes, all of them
/// reporting into the context's shared, deduplicating reporter. The engine
/// itself performs no I/O; everything it reads arrives through the context's
/// resolver.
pub struct VerificationEngine {
    context: VerificationContext,
}

impl VerificationEngine {
    /// An engine over the given run context.
    #[must_use]
    pub fn new(context: VerificationContext) -> Self {
        VerificationEngine { context }
    }

    /// The run context, including the reporter holding all results.
    #[must_use]
    pub fn context(&self) -> &VerificationContext {
        &self.context
    }

    /// Consume the engine, handing back its context.
    ///
    /// Useful when the results should outlive the engine, or feed a second
    /// engine over the same reporter.
    #[must_use]
    pub fn into_context(self) -> VerificationContext {
        self.context
    }

    /// Verify every named class, invoking `progress` with the fraction of
    /// requested classes completed after each one.
    ///
    /// Classes run in parallel; the fraction is computed from a shared
    /// completion counter, so each value `1/n ..= n/n` is delivered exactly
    /// once but calls may interleave out of order. A requested name that
    /// resolves as external is skipped silently, and one that fails to resolve
    /// is reported as a problem against itself; neither counts as verified.
    ///
    /// # Errors
    /// Returns [`Error::Interrupted`] when the context's cancellation flag was
    /// raised mid-run. Problems and usages registered before the abort remain
    /// on the reporter. Resolver faults propagate unchanged.
    pub fn verify<I, S, P>(&self, classes: I, progress: P) -> Result<VerificationSummary>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        P: Fn(f64) + Sync,
    {
        let names: Vec<String> = classes.into_iter().map(Into::into).collect();
        let total = names.len();
        let completed = AtomicUsize::new(0);
        let verified = AtomicUsize::new(0);

        names.par_iter().try_for_each(|name| -> Result<()> {
            if self.context.is_cancelled() {
                return Err(Error::Interrupted);
            }
            if self.verify_class(name)? {
                verified.fetch_add(1, Ordering::Relaxed);
            }
            let done = completed.fetch_add(1, Ordering::SeqCst) + 1;
            progress(done as f64 / total as f64);
            Ok(())
        })?;

        let summary = VerificationSummary {
            classes_requested: total,
            classes_verified: verified.into_inner(),
            problem_count: self.context.reporter().problem_count(),
            usage_count: self.context.reporter().usage_count(),
        };
        log::info!(
            "verified {}/{} classes: {} problems, {} usages",
            summary.classes_verified,
            summary.classes_requested,
            summary.problem_count,
            summary.usage_count
        );
        Ok(summary)
    }

    /// Verify one requested class. Returns whether it was actually verified.
    fn verify_class(&self, name: &str) -> Result<bool> {
        let usage = Location::Class(ClassLocation::new(name));
        let Some(class) = self.context.resolve_or_report(name, &usage)? else {
            return Ok(false);
        };
        self.verify_resolved(&class)?;
        Ok(true)
    }

    fn verify_resolved(&self, class: &ClassRc) -> Result<()> {
        log::debug!("verifying {}", class.name);
        let class_usage = Location::Class(class.location());

        if let Some(super_name) = &class.super_name {
            if let Some(super_class) = self.context.resolve_dependency(super_name, &class_usage)? {
                if super_class.is_interface() {
                    self.context.report(CompatibilityProblem::SuperClassBecameInterface {
                        super_name: super_class.name.clone(),
                        usage: class.location(),
                    });
                }
            }
        }

        for interface_name in &class.interfaces {
            if let Some(interface) = self.context.resolve_dependency(interface_name, &class_usage)?
            {
                if !interface.is_interface() {
                    self.context.report(CompatibilityProblem::InterfaceBecameClass {
                        class_name: interface.name.clone(),
                        usage: class_usage.clone(),
                    });
                }
            }
        }

        // Broken links deeper in the ancestry would otherwise only surface
        // when a member resolution happens to walk past them.
        let walk = walk_ancestors(class, self.context.resolver(), true, |_| true)?;
        self.context.report_unresolved(&walk.unresolved, &class_usage);

        for method in &class.methods {
            if self.context.is_cancelled() {
                return Err(Error::Interrupted);
            }
            self.verify_method(class, method)?;
        }

        Ok(())
    }

    fn verify_method(&self, class: &ClassRc, method: &MethodMetadata) -> Result<()> {
        // Overriding a marked method is a usage of it, even without a call.
        if let Some(overridden) = find_overridden_method(class, method, self.context.resolver())? {
            self.context.record_markers(
                &overridden.method.markers,
                Location::Method(overridden.method.location()),
                &Location::Method(method.location()),
            );
        }

        for instruction in &method.instructions {
            verify_instruction(class, method, instruction, &self.context)?;
        }

        Ok(())
    }
}
