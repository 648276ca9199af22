//! # linkscope Prelude
//!
//! This module provides a convenient prelude for the most commonly used types and traits
//! from the linkscope library. Import this module to get quick access to the essential
//! types for JVM binary compatibility verification.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all linkscope operations
pub use crate::Error;

/// The result type used throughout linkscope
pub use crate::Result;

/// Configuration for which API-usage side channels a verification collects
pub use crate::VerificationConfig;

// ================================================================================================
// Main Entry Points
// ================================================================================================

/// Main entry point for verifying sets of classes in parallel
pub use crate::VerificationEngine;

/// Shared state for a verification run: resolver, configuration, reporter, cancellation
pub use crate::{CancellationFlag, VerificationContext, VerificationSummary};

// ================================================================================================
// Class Metadata - Core Types
// ================================================================================================

/// Class-level metadata and its builder
pub use crate::metadata::{ClassMetadata, ClassMetadataBuilder, ClassRc};

/// Field and method members of a class
pub use crate::metadata::{FieldMetadata, FieldRc, MethodMetadata, MethodRc};

/// API status markers attached to classes and members
pub use crate::metadata::{ApiMarkers, ClassOrigin, Deprecation};

// ================================================================================================
// Access Flags
// ================================================================================================

/// Access flag sets and the four-level member access model
pub use crate::metadata::{
    package_of, ClassAccessFlags, FieldAccessFlags, MemberAccess, MethodAccessFlags,
};

// ================================================================================================
// References, Locations and Instructions
// ================================================================================================

/// Symbolic references as they appear in constant pools
pub use crate::metadata::{FieldReference, MethodReference, TypeReference};

/// Locations identifying where a problem was detected
pub use crate::metadata::{ClassLocation, FieldLocation, Location, MethodLocation};

/// The reference-bearing instruction model
pub use crate::metadata::{FieldOpcode, Instruction, InstructionFamily, InvokeOpcode, TypeOpcode};

// ================================================================================================
// Descriptors
// ================================================================================================

/// Parsed JVM field and method descriptors
pub use crate::metadata::descriptor::{BaseType, ElementType, FieldType, MethodDescriptor};

/// Descriptor parsing and rendering functions
pub use crate::metadata::descriptor::{
    display_name, parse_field_descriptor, parse_method_descriptor,
};

// ================================================================================================
// Class Resolution
// ================================================================================================

/// The resolver abstraction and its outcome model
pub use crate::resolver::{ClassResolver, ResolutionFailure, ResolutionOutcome};

/// Ready-made resolvers and combinators
pub use crate::resolver::{
    CachingResolver, CompositeResolver, InMemoryResolver, KnownExternalResolver,
};

// ================================================================================================
// Hierarchy Traversal
// ================================================================================================

/// Cycle-safe ancestor walking and subtype queries
pub use crate::hierarchy::{is_subclass_of, is_subinterface_of, walk_ancestors};

/// Walk results and the ancestors that failed to resolve along the way
pub use crate::hierarchy::{HierarchyWalk, UnresolvedAncestor};

/// Override detection between methods of related classes
pub use crate::hierarchy::{find_overridden_method, is_overriding};

// ================================================================================================
// Member Linkage
// ================================================================================================

/// JVM specification member resolution and access control
pub use crate::linkage::{
    check_member_access, resolve_class_method, resolve_field, resolve_interface_method,
};

/// Resolution results carrying the member, the search trail and unresolved ancestors
pub use crate::linkage::{FieldResolution, MethodResolution, ResolvedField, ResolvedMethod};

// ================================================================================================
// Problems and Usage Reporting
// ================================================================================================

/// The closed taxonomy of binary compatibility problems
pub use crate::problems::{CompatibilityProblem, ProblemKind};

/// Deduplicating collector for problems and API usages
pub use crate::problems::{ApiUsage, ApiUsageKind, ProblemReporter};
