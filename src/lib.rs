// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![deny(unsafe_code)]
#![allow(dead_code)]

//! # linkscope
//!
//! [![Crates.io](https://img.shields.io/crates/v/linkscope.svg)](https://crates.io/crates/linkscope)
//! [![Documentation](https://docs.rs/linkscope/badge.svg)](https://docs.rs/linkscope)
//! [![License](https://img.shields.io/badge/license-Apache--2.0-blue.svg)](https://github.com/BinFlip/linkscope/blob/main/LICENSE-APACHE)
//!
//! A high-performance, cross-platform framework for predicting JVM binary compatibility and
//! linkage errors between sets of compiled classes. Built in pure Rust, `linkscope` answers the
//! question "will these classes link at runtime?" ahead of time — without loading a JVM — by
//! replaying the resolution and access rules the virtual machine applies when it links a class.
//!
//! ## Features
//!
//! - **🔌 Pluggable resolution** - Bring your own class lookup; in-memory, caching, composite
//!   and known-external resolvers included
//! - **🔍 Complete linkage analysis** - Field, class-method and interface-method resolution with
//!   full superinterface and access-control semantics
//! - **⚡ Parallel verification** - Classes are verified across all cores, with cooperative
//!   cancellation and progress reporting
//! - **🔧 Cross-platform** - Works on Windows, Linux, macOS, and any Rust-supported platform
//! - **🛡️ Memory safe** - Built in Rust with comprehensive error handling
//! - **📊 Closed problem taxonomy** - Every finding is a plain comparable value, deduplicated
//!   and delivered in a stable order
//! - **🧩 Extensible architecture** - Modular design for custom analysis and tooling
//!
//! ## Quick Start
//!
//! Add `linkscope` to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! linkscope = "0.2"
//! ```
//!
//! ### Using the Prelude
//!
//! For convenient access to the most commonly used types, import the prelude:
//!
//! ```rust
//! use linkscope::prelude::*;
//! use std::sync::Arc;
//!
//! // Describe the classes visible to the run.
//! let resolver = InMemoryResolver::new();
//! resolver.add(ClassMetadataBuilder::new("java/lang/Object").no_superclass().build());
//! resolver.add(
//!     ClassMetadataBuilder::new("com/example/Main")
//!         .method(MethodMetadata::new("run", "()V", MethodAccessFlags::PUBLIC))
//!         .build(),
//! );
//!
//! // Verify them against everything the resolver can see.
//! let engine = VerificationEngine::new(VerificationContext::new(Arc::new(resolver)));
//! let summary = engine.verify(["com/example/Main"], |_| {})?;
//!
//! println!("Found {} problems", summary.problem_count);
//! # Ok::<(), linkscope::Error>(())
//! ```
//!
//! ### Basic Usage
//!
//! ```rust
//! use linkscope::linkage::resolve_class_method;
//! use linkscope::metadata::{ClassMetadataBuilder, MethodAccessFlags, MethodMetadata};
//! use linkscope::resolver::{ClassResolver, InMemoryResolver};
//!
//! let resolver = InMemoryResolver::new();
//! resolver.add(ClassMetadataBuilder::new("java/lang/Object").no_superclass().build());
//! resolver.add(
//!     ClassMetadataBuilder::new("app/Service")
//!         .method(MethodMetadata::new("start", "()V", MethodAccessFlags::PUBLIC))
//!         .build(),
//! );
//!
//! // Resolve a method reference exactly the way the JVM would at link time.
//! if let Some(service) = resolver.resolve("app/Service")?.found() {
//!     let resolution = resolve_class_method(service, "start", "()V", &resolver)?;
//!     assert!(resolution.method.is_some());
//! }
//! # Ok::<(), linkscope::Error>(())
//! ```
//!
//! ### Instruction Verification
//!
//! The verification module drives the full pipeline: every reference-bearing instruction of
//! every method is checked against the resolved view of its target. See the [`verification`]
//! module documentation for detailed usage examples.
//!
//! ## Architecture
//!
//! `linkscope` is organized into several key modules:
//!
//! - [`prelude`] - Convenient re-exports of commonly used types and traits
//! - [`metadata`] - The class, member, reference and instruction model the engine consumes
//! - [`resolver`] - The pluggable class lookup abstraction and ready-made implementations
//! - [`hierarchy`] - Cycle-safe ancestor traversal and override detection
//! - [`linkage`] - Member resolution and access control per the JVM specification
//! - [`problems`] - The closed taxonomy of findings and the deduplicating reporter
//! - [`verification`] - The parallel driver tying everything together
//! - [`Error`] and [`Result`] - Comprehensive error handling
//!
//! ### Metadata Model
//!
//! [`metadata::ClassMetadata`] is the engine's view of one compiled class. It is deliberately
//! decoupled from any particular class-file parser:
//!
//! - **Identity**: binary name, superclass name, direct superinterface names
//! - **Members**: fields and methods with flags, descriptors and API markers
//! - **Code**: per-method lists of reference-bearing instructions
//! - **Markers**: deprecation and experimental-status annotations for usage tracking
//!
//! ### Verification Pipeline
//!
//! The [`verification`] module provides:
//!
//! - **Class checks**: superclass/interface kind agreement, unresolvable ancestors
//! - **Member checks**: every field access and invocation resolved and access-checked
//! - **Type checks**: instantiations of interfaces and abstract classes, class constants
//! - **Override tracking**: methods overriding deprecated or experimental supertype methods
//!
//! ## Standards Compliance
//!
//! `linkscope` follows the resolution rules of the **Java Virtual Machine Specification**
//! (§5.4.3 field/method resolution, §5.4.4 access control), including maximally-specific
//! superinterface method selection and the protected-access subtype rule.
//!
//! ### References
//!
//! - [JVMS Chapter 5](https://docs.oracle.com/javase/specs/jvms/se8/html/jvms-5.html) - Loading, Linking, and Initializing
//!
//! ## Performance
//!
//! `linkscope` is designed for verifying large class sets:
//!
//! - **Parallel verification** of independent classes via work stealing
//! - **Lock-free collections** for problem reporting and resolution caching
//! - **Shared immutable metadata** through reference counting, no cloning of class data
//! - **Short-circuiting traversals** that stop as soon as an answer is known
//!
//! ## Error Handling
//!
//! Expected analysis findings — missing classes, broken references, illegal access — are
//! never errors; they are recorded as [`problems::CompatibilityProblem`] values. An `Err`
//! means the run itself could not proceed:
//!
//! ```rust
//! use linkscope::{Error, VerificationContext, VerificationEngine};
//! use linkscope::resolver::InMemoryResolver;
//! use std::sync::Arc;
//!
//! let engine = VerificationEngine::new(VerificationContext::new(Arc::new(InMemoryResolver::new())));
//! match engine.verify(["com/example/Main"], |_| {}) {
//!     Ok(summary) => println!("verified {} classes", summary.classes_verified),
//!     Err(Error::Interrupted) => println!("cancelled; partial results remain valid"),
//!     Err(Error::Malformed { message, .. }) => println!("malformed input: {}", message),
//!     Err(e) => println!("other error: {}", e),
//! }
//! ```
//!
//! ## Development and Testing
//!
//! The test suite covers the resolution rules with hand-built class hierarchies and edge
//! cases (cycles, broken ancestors, shadowed members):
//!
//! ```bash
//! cargo test
//! cargo bench  # Criterion benchmarks for resolution throughput
//! ```
#[macro_use]
pub(crate) mod error;

/// Shared functionality which is used in unit- and integration-tests
#[cfg(test)]
pub(crate) mod test;

/// Convenient re-exports of the most commonly used types and traits.
///
/// This module provides a curated selection of the most frequently used types
/// from across the linkscope library, allowing for convenient glob imports.
///
/// # Example
///
/// ```rust
/// use linkscope::prelude::*;
/// use std::sync::Arc;
///
/// let resolver = InMemoryResolver::new();
/// resolver.add(ClassMetadataBuilder::new("java/lang/Object").no_superclass().build());
///
/// let engine = VerificationEngine::new(VerificationContext::new(Arc::new(resolver)));
/// let summary = engine.verify(["java/lang/Object"], |_| {})?;
/// assert_eq!(summary.classes_verified, 1);
/// # Ok::<(), linkscope::Error>(())
/// ```
pub mod prelude;

/// Ancestor traversal and override detection over class hierarchies
///
/// This module walks superclass and superinterface chains without assuming the
/// hierarchy is well-formed: cycles terminate, missing ancestors are collected
/// instead of aborting the walk, and visitors can stop a traversal early.
///
/// # Key Types
///
/// - [`hierarchy::HierarchyWalk`] - The classes a walk visited and the ancestors it could not resolve
/// - [`hierarchy::UnresolvedAncestor`] - A named ancestor together with why it failed to resolve
///
/// # Main Functions
///
/// - [`hierarchy::walk_ancestors`] - Visit every reachable ancestor exactly once
/// - [`hierarchy::is_subclass_of`] / [`hierarchy::is_subinterface_of`] - Subtype queries
/// - [`hierarchy::find_overridden_method`] - Nearest supertype method a given method overrides
pub mod hierarchy;

/// Member resolution and access control per the JVM specification
///
/// Given a symbolic reference and the class it is resolved against, this module
/// answers what the JVM linker would answer: which declaration the reference
/// binds to, or that none exists. Lookup order follows JVMS §5.4.3 — including
/// maximally-specific superinterface method selection — and [`linkage::check_member_access`]
/// applies the §5.4.4 rules with the protected-access subtype refinement.
///
/// # Key Types
///
/// - [`linkage::MethodResolution`] / [`linkage::FieldResolution`] - Outcome plus the search trail
/// - [`linkage::ResolvedMethod`] / [`linkage::ResolvedField`] - A member paired with its declaring class
///
/// # Main Functions
///
/// - [`linkage::resolve_class_method`] - Resolution against a class reference
/// - [`linkage::resolve_interface_method`] - Resolution against an interface reference
/// - [`linkage::resolve_field`] - Field resolution through interfaces and superclasses
/// - [`linkage::check_member_access`] - Whether one class may access a member of another
pub mod linkage;

/// The class, member, reference and instruction model consumed by the engine
///
/// Everything the verifier knows about a compiled class lives here, decoupled
/// from any particular class-file parser. Producers populate [`metadata::ClassMetadata`]
/// via [`metadata::ClassMetadataBuilder`]; the engine never re-reads class files.
///
/// # Key Components
///
/// ## Classes and Members
/// - [`metadata::ClassMetadata`] - One class: identity, flags, members, instructions
/// - [`metadata::FieldMetadata`] / [`metadata::MethodMetadata`] - Declared members with flags and markers
/// - [`metadata::ApiMarkers`] - Deprecation and experimental status attached to classes and members
///
/// ## References and Instructions
/// - [`metadata::MethodReference`] / [`metadata::FieldReference`] / [`metadata::TypeReference`] -
///   Symbolic references as they appear in constant pools
/// - [`metadata::Instruction`] - The reference-bearing instructions the verifier inspects
/// - [`metadata::Location`] - Where a finding points back to: a class, field or method
///
/// ## Descriptors
/// - [`metadata::descriptor`] - Parsing and rendering of JVM field and method descriptors
///
/// # Examples
///
/// ```rust
/// use linkscope::metadata::{ClassMetadataBuilder, FieldAccessFlags, FieldMetadata};
///
/// let class = ClassMetadataBuilder::new("com/example/Config")
///     .implements("java/io/Serializable")
///     .field(FieldMetadata::new("VERSION", "I",
///         FieldAccessFlags::PUBLIC | FieldAccessFlags::STATIC | FieldAccessFlags::FINAL))
///     .build();
///
/// assert_eq!(class.name, "com/example/Config");
/// assert_eq!(class.super_name.as_deref(), Some("java/lang/Object"));
/// assert!(class.declared_field("VERSION", "I").is_some());
/// ```
pub mod metadata;

/// The closed taxonomy of compatibility problems and the deduplicating reporter
///
/// Findings are plain values, not errors: every problem the engine can detect is
/// one variant of [`problems::CompatibilityProblem`], carrying everything a renderer
/// needs. The [`problems::ProblemReporter`] collects problems concurrently, collapses
/// duplicates by value, and hands back stable sorted snapshots. Uses of deprecated
/// or experimental API travel on a separate channel as [`problems::ApiUsage`].
pub mod problems;

/// Pluggable class lookup
///
/// The engine never touches class files itself; every class it needs is requested
/// from a [`resolver::ClassResolver`]. A resolution has five possible outcomes —
/// found, known-external, not found, invalid class file, unreadable — so resolvers
/// can distinguish "missing" from "outside the analysis universe".
///
/// # Key Types
///
/// - [`resolver::ClassResolver`] - The lookup trait implementations provide
/// - [`resolver::ResolutionOutcome`] / [`resolver::ResolutionFailure`] - The outcome model
/// - [`resolver::InMemoryResolver`] - Map-backed resolver, the workhorse of tests
/// - [`resolver::CachingResolver`] - Memoizes any inner resolver
/// - [`resolver::CompositeResolver`] - First-match chain over several resolvers
/// - [`resolver::KnownExternalResolver`] - Declares name prefixes as outside the universe
///
/// # Examples
///
/// ```rust
/// use linkscope::metadata::ClassMetadataBuilder;
/// use linkscope::resolver::{ClassResolver, InMemoryResolver, ResolutionOutcome};
///
/// let resolver = InMemoryResolver::new();
/// resolver.add(ClassMetadataBuilder::new("com/example/A").build());
///
/// assert!(matches!(resolver.resolve("com/example/A")?, ResolutionOutcome::Found(_)));
/// assert!(matches!(resolver.resolve("com/example/B")?, ResolutionOutcome::NotFound));
/// # Ok::<(), linkscope::Error>(())
/// ```
pub mod resolver;

/// The parallel verification driver
///
/// Ties the model together: every requested class is resolved, its hierarchy
/// checked, and every reference-bearing instruction of every method verified
/// against the resolved view of its target. Classes are independent, so the
/// driver fans them out across threads; a shared [`CancellationFlag`] stops a
/// run between classes, and completed work stays on the reporter.
///
/// # Key Types
///
/// - [`VerificationEngine`] - Entry point; drives a whole run
/// - [`VerificationContext`] - Resolver, configuration, reporter and cancellation in one place
/// - [`VerificationSummary`] - Counts describing a finished run
/// - [`VerificationConfig`] - Which API-usage side channels to collect
pub mod verification;

/// `linkscope` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is always [`Error`].
/// This is used consistently throughout the crate for all fallible operations.
///
/// # Examples
///
/// ```rust
/// use linkscope::{Result, VerificationSummary, VerificationContext, VerificationEngine};
/// use linkscope::resolver::InMemoryResolver;
/// use std::sync::Arc;
///
/// fn verify_all(names: Vec<String>) -> Result<VerificationSummary> {
///     let context = VerificationContext::new(Arc::new(InMemoryResolver::new()));
///     VerificationEngine::new(context).verify(names, |_| {})
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// `linkscope` Error type
///
/// The main error type for all operations in this crate. Faults only: analysis
/// findings are reported as [`problems::CompatibilityProblem`] values instead.
///
/// # Examples
///
/// ```rust
/// use linkscope::{Error, VerificationContext, VerificationEngine};
/// use linkscope::resolver::InMemoryResolver;
/// use std::sync::Arc;
///
/// let engine = VerificationEngine::new(VerificationContext::new(Arc::new(InMemoryResolver::new())));
/// match engine.verify(Vec::<String>::new(), |_| {}) {
///     Ok(summary) => println!("verified {} classes", summary.classes_verified),
///     Err(Error::Interrupted) => println!("cancelled"),
///     Err(e) => println!("error: {}", e),
/// }
/// ```
pub use error::Error;

/// Main entry points for running a verification.
///
/// See [`verification::VerificationEngine`] for the driver and
/// [`verification::VerificationContext`] for the state it runs against.
///
/// # Example
///
/// ```rust
/// use linkscope::{VerificationContext, VerificationEngine};
/// use linkscope::resolver::InMemoryResolver;
/// use std::sync::Arc;
///
/// let engine = VerificationEngine::new(VerificationContext::new(Arc::new(InMemoryResolver::new())));
/// let summary = engine.verify(Vec::<String>::new(), |_| {})?;
/// assert_eq!(summary.classes_requested, 0);
/// # Ok::<(), linkscope::Error>(())
/// ```
pub use verification::{
    CancellationFlag, VerificationConfig, VerificationContext, VerificationEngine,
    VerificationSummary,
};

/// The resolver abstraction every run is parameterized over.
///
/// Implement [`resolver::ClassResolver`] to plug in your own class lookup — a
/// directory scan, an archive reader, a build-tool classpath. The bundled
/// implementations cover composition, caching and known-external filtering.
pub use resolver::ClassResolver;

/// The findings of a run: the problem taxonomy and the reporter that collects it.
///
/// # Example
///
/// ```rust
/// use linkscope::{CompatibilityProblem, ProblemReporter};
/// use linkscope::metadata::{ClassLocation, Location};
///
/// let reporter = ProblemReporter::new();
/// reporter.report(CompatibilityProblem::ClassNotFound {
///     class_name: "com/example/Gone".to_string(),
///     usage: Location::Class(ClassLocation::new("com/example/Main")),
/// });
/// assert_eq!(reporter.problem_count(), 1);
/// ```
pub use problems::{CompatibilityProblem, ProblemReporter};
