//! Problem taxonomy and the concurrent registrar.
//!
//! Everything the engine finds is data, never an error: a
//! [`CompatibilityProblem`] is an immutable value describing one predicted
//! linkage failure, and the [`ProblemReporter`] is the deduplicating sink the
//! verifiers register them into. Deprecated and experimental API usages travel
//! beside the problems as [`ApiUsage`] records - informational, not failures.
//!
//! The taxonomy is closed on purpose. Reporting collaborators match on
//! [`ProblemKind`] (or on the variants themselves) and are guaranteed to have
//! seen every case; a new problem kind is an API change, not a silent addition.
//!
//! # Example
//!
//! ```rust,no_run
//! use linkscope::metadata::{Location, MethodLocation};
//! use linkscope::problems::{CompatibilityProblem, ProblemKind, ProblemReporter};
//!
//! let reporter = ProblemReporter::new();
//! reporter.report(CompatibilityProblem::ClassNotFound {
//!     class_name: "com/example/Gone".to_string(),
//!     usage: Location::Method(MethodLocation::new("com/example/Main", "run", "()V")),
//! });
//!
//! for problem in reporter.problems() {
//!     assert_eq!(problem.kind(), ProblemKind::ClassNotFound);
//!     println!("{problem}");
//! }
//! ```

mod reporter;
mod taxonomy;

pub use reporter::ProblemReporter;
pub use taxonomy::{ApiUsage, ApiUsageKind, CompatibilityProblem, ProblemKind};
