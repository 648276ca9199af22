//! JVM member resolution and access control, offline.
//!
//! This module re-implements the resolution rules of JVMS §5.4.3 against the
//! metadata model: class method resolution (§5.4.3.3), interface method
//! resolution (§5.4.3.4), field resolution (§5.4.3.2), and the access-control
//! predicate of §5.4.4. Resolution answers *what would the JVM have linked this
//! reference to* - it deliberately finds members regardless of their flags where
//! the JVM does, leaving static/instance mismatches and access violations to the
//! instruction verifiers, which is where the JVM raises them too.
//!
//! Both method and field lookup share a shape: the owner's own declarations win,
//! ancestors are searched otherwise, and a miss returns the hierarchy actually
//! searched so "maybe it lives in a supertype you cannot see" diagnostics stay
//! honest. Ancestors that fail to resolve mid-search are collected for the
//! caller to report, never swallowed and never fatal.
//!
//! # Key Components
//!
//! - [`resolve_class_method`] / [`resolve_interface_method`] - method resolution,
//!   selected by the constant pool kind of the reference
//! - [`resolve_field`] - field resolution, interfaces before superclasses
//! - [`check_member_access`] - the §5.4.4 accessibility predicate
//! - [`MethodResolution`] / [`FieldResolution`] - outcome bundles
//!
//! # Examples
//!
//! ```rust
//! use linkscope::linkage::resolve_class_method;
//! use linkscope::metadata::{ClassMetadataBuilder, MethodAccessFlags, MethodMetadata};
//! use linkscope::resolver::InMemoryResolver;
//!
//! let resolver = InMemoryResolver::new();
//! resolver.add(ClassMetadataBuilder::new("java/lang/Object").no_superclass().build());
//! resolver.add(
//!     ClassMetadataBuilder::new("com/example/Base")
//!         .method(MethodMetadata::new("run", "()V", MethodAccessFlags::PUBLIC))
//!         .build(),
//! );
//! let child = ClassMetadataBuilder::new("com/example/Child")
//!     .extends("com/example/Base")
//!     .build();
//! resolver.add(child.clone());
//!
//! let resolution = resolve_class_method(&child, "run", "()V", &resolver)?;
//! assert_eq!(resolution.method.unwrap().class.name, "com/example/Base");
//! # Ok::<(), linkscope::Error>(())
//! ```

mod access;
mod fields;
mod methods;

pub use access::check_member_access;
pub use fields::resolve_field;
pub use methods::{resolve_class_method, resolve_interface_method};

use crate::{
    hierarchy::UnresolvedAncestor,
    metadata::{ClassRc, FieldRc, MethodRc},
};

/// A method together with the class that declares it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedMethod {
    /// The declaring class or interface
    pub class: ClassRc,
    /// The declared method
    pub method: MethodRc,
}

/// A field together with the class that declares it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedField {
    /// The declaring class or interface
    pub class: ClassRc,
    /// The declared field
    pub field: FieldRc,
}

/// The outcome of method resolution.
#[derive(Debug, Default)]
pub struct MethodResolution {
    /// The resolved method, `None` when nothing matched anywhere
    pub method: Option<ResolvedMethod>,
    /// Binary names searched, owner first, in search order
    pub searched: Vec<String>,
    /// Ancestors that failed to resolve during the search
    pub unresolved: Vec<UnresolvedAncestor>,
}

/// The outcome of field resolution.
#[derive(Debug, Default)]
pub struct FieldResolution {
    /// The resolved field, `None` when nothing matched anywhere
    pub field: Option<ResolvedField>,
    /// Binary names searched, owner first, in search order
    pub searched: Vec<String>,
    /// Ancestors that failed to resolve during the search
    pub unresolved: Vec<UnresolvedAncestor>,
}
