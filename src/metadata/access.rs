//! Access flags and visibility levels for JVM classes, methods, and fields.
//!
//! This module defines the bitflags and supporting types used to represent the
//! `access_flags` items of the class file format, split per declaration site the
//! way the JVM specification tables define them (Tables 4.1-B, 4.5-A, 4.6-A).
//!
//! # Key Types
//! - [`ClassAccessFlags`], [`MethodAccessFlags`], [`FieldAccessFlags`]: raw flag sets
//! - [`MemberAccess`]: the four-level visibility lattice used by access control

use bitflags::bitflags;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    /// Class-level access and property flags
    pub struct ClassAccessFlags: u16 {
        /// Declared public; may be accessed from outside its package
        const PUBLIC = 0x0001;
        /// Declared final; no subclasses allowed
        const FINAL = 0x0010;
        /// Treat superclass methods specially when invoked by invokespecial
        const SUPER = 0x0020;
        /// Is an interface, not a class
        const INTERFACE = 0x0200;
        /// Declared abstract; must not be instantiated
        const ABSTRACT = 0x0400;
        /// Declared synthetic; not present in the source code
        const SYNTHETIC = 0x1000;
        /// Declared as an annotation interface
        const ANNOTATION = 0x2000;
        /// Declared as an enum class
        const ENUM = 0x4000;
        /// Is a module, not a class or interface
        const MODULE = 0x8000;
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    /// Method-level access and property flags
    pub struct MethodAccessFlags: u16 {
        /// Declared public; may be accessed from outside its package
        const PUBLIC = 0x0001;
        /// Declared private; accessible only within the defining class
        const PRIVATE = 0x0002;
        /// Declared protected; may be accessed within subclasses
        const PROTECTED = 0x0004;
        /// Declared static
        const STATIC = 0x0008;
        /// Declared final; must not be overridden
        const FINAL = 0x0010;
        /// Declared synchronized; invocation is wrapped by a monitor use
        const SYNCHRONIZED = 0x0020;
        /// A bridge method, generated by the compiler
        const BRIDGE = 0x0040;
        /// Declared with variable number of arguments
        const VARARGS = 0x0080;
        /// Declared native; implemented in a language other than Java
        const NATIVE = 0x0100;
        /// Declared abstract; no implementation is provided
        const ABSTRACT = 0x0400;
        /// Declared strictfp; floating-point mode is FP-strict
        const STRICT = 0x0800;
        /// Declared synthetic; not present in the source code
        const SYNTHETIC = 0x1000;
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    /// Field-level access and property flags
    pub struct FieldAccessFlags: u16 {
        /// Declared public; may be accessed from outside its package
        const PUBLIC = 0x0001;
        /// Declared private; accessible only within the defining class
        const PRIVATE = 0x0002;
        /// Declared protected; may be accessed within subclasses
        const PROTECTED = 0x0004;
        /// Declared static
        const STATIC = 0x0008;
        /// Declared final; never directly assigned after construction
        const FINAL = 0x0010;
        /// Declared volatile; cannot be cached
        const VOLATILE = 0x0040;
        /// Declared transient; not written by persistent object managers
        const TRANSIENT = 0x0080;
        /// Declared synthetic; not present in the source code
        const SYNTHETIC = 0x1000;
        /// Declared as an element of an enum class
        const ENUM = 0x4000;
    }
}

/// The visibility level of a class member.
///
/// The JVM access-control rules (JVMS §5.4.4) key on exactly these four levels.
/// Extracted from raw member flags via [`MemberAccess::from_method_flags`] and
/// [`MemberAccess::from_field_flags`]; a member with none of the three modifier
/// bits set is package-private.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, strum::Display)]
pub enum MemberAccess {
    /// Accessible from anywhere the declaring class is accessible
    #[strum(to_string = "public")]
    Public,
    /// Accessible within the declaring class, its package, and its subclasses
    #[strum(to_string = "protected")]
    Protected,
    /// Accessible only within the declaring class's package
    #[strum(to_string = "package-private")]
    PackagePrivate,
    /// Accessible only within the declaring class
    #[strum(to_string = "private")]
    Private,
}

impl MemberAccess {
    /// Extract the visibility level from method access flags
    #[must_use]
    pub fn from_method_flags(flags: MethodAccessFlags) -> Self {
        if flags.contains(MethodAccessFlags::PUBLIC) {
            MemberAccess::Public
        } else if flags.contains(MethodAccessFlags::PROTECTED) {
            MemberAccess::Protected
        } else if flags.contains(MethodAccessFlags::PRIVATE) {
            MemberAccess::Private
        } else {
            MemberAccess::PackagePrivate
        }
    }

    /// Extract the visibility level from field access flags
    #[must_use]
    pub fn from_field_flags(flags: FieldAccessFlags) -> Self {
        if flags.contains(FieldAccessFlags::PUBLIC) {
            MemberAccess::Public
        } else if flags.contains(FieldAccessFlags::PROTECTED) {
            MemberAccess::Protected
        } else if flags.contains(FieldAccessFlags::PRIVATE) {
            MemberAccess::Private
        } else {
            MemberAccess::PackagePrivate
        }
    }
}

/// Returns the package portion of a binary class name, empty for the default package.
///
/// Binary names use `/` as the separator (`java/lang/String` lives in `java/lang`).
/// Package-private access compares these values for equality; runtime packages with
/// distinct class loaders are outside this library's model.
#[must_use]
pub fn package_of(binary_name: &str) -> &str {
    match binary_name.rfind('/') {
        Some(idx) => &binary_name[..idx],
        None => "",
    }
}
