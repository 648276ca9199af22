//! The verification driver and its instruction checkers.
//!
//! A run is three layers. The [`VerificationContext`] owns everything shared:
//! resolver, configuration, reporter, cancellation flag. The instruction
//! verifiers are stateless checkers dispatched per instruction family. The
//! [`VerificationEngine`] drives both over a set of classes, in parallel, and
//! hands back a [`VerificationSummary`].
//!
//! # Example
//!
//! ```rust,no_run
//! use linkscope::metadata::ClassMetadataBuilder;
//! use linkscope::resolver::InMemoryResolver;
//! use linkscope::verification::{VerificationContext, VerificationEngine};
//! use std::sync::Arc;
//!
//! # fn main() -> linkscope::Result<()> {
//! let classes = InMemoryResolver::new();
//! classes.add(ClassMetadataBuilder::new("com/example/Main").build());
//!
//! let context = VerificationContext::new(Arc::new(classes));
//! let engine = VerificationEngine::new(context);
//!
//! let summary = engine.verify(["com/example/Main"], |fraction| {
//!     println!("{:5.1}%", fraction * 100.0);
//! })?;
//!
//! for problem in engine.context().reporter().problems() {
//!     println!("{problem}");
//! }
//! assert_eq!(summary.classes_requested, 1);
//! # Ok(())
//! # }
//! ```
//!
//! # Cancellation
//!
//! Clone the context's [`CancellationFlag`] before starting and flip it from
//! any thread. The run aborts between classes (and between methods of large
//! classes) with [`Error::Interrupted`](crate::Error::Interrupted); everything
//! registered up to that point stays on the reporter.

mod config;
mod context;
mod engine;
mod instructions;

pub use config::VerificationConfig;
pub use context::{CancellationFlag, VerificationContext};
pub use engine::{VerificationEngine, VerificationSummary};
