//! Method metadata.

use std::sync::Arc;

use crate::metadata::{
    access::{MemberAccess, MethodAccessFlags},
    instruction::Instruction,
    location::MethodLocation,
    markers::ApiMarkers,
};

/// A reference-counted [`MethodMetadata`].
pub type MethodRc = Arc<MethodMetadata>;

/// A declared method of a class or interface.
///
/// Carries the decoded reference-bearing instructions of its body; an abstract
/// or native method simply has none. The owning class is referenced by name, a
/// lookup key through the resolver rather than an owning pointer, so hierarchies
/// with arbitrary shapes stay acyclic in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodMetadata {
    /// Method name (`<init>` and `<clinit>` included)
    pub name: String,
    /// Method descriptor
    pub descriptor: String,
    /// Access and property flags
    pub access: MethodAccessFlags,
    /// Generic signature, if the method declares one
    pub signature: Option<String>,
    /// Binary name of the declaring class; set when the method is attached
    pub class_name: String,
    /// API status markers
    pub markers: ApiMarkers,
    /// The reference-bearing instructions of the body, in order
    pub instructions: Vec<Instruction>,
}

impl MethodMetadata {
    /// Build a method with the given name, descriptor and flags. The owning
    /// class name is filled in by [`crate::metadata::ClassMetadataBuilder`]
    /// when the method is attached.
    #[must_use]
    pub fn new(name: &str, descriptor: &str, access: MethodAccessFlags) -> Self {
        MethodMetadata {
            name: name.to_string(),
            descriptor: descriptor.to_string(),
            access,
            signature: None,
            class_name: String::new(),
            markers: ApiMarkers::none(),
            instructions: Vec::new(),
        }
    }

    /// Attach a generic signature.
    #[must_use]
    pub fn with_signature(mut self, signature: &str) -> Self {
        self.signature = Some(signature.to_string());
        self
    }

    /// Attach API status markers.
    #[must_use]
    pub fn with_markers(mut self, markers: ApiMarkers) -> Self {
        self.markers = markers;
        self
    }

    /// Append one instruction to the body.
    #[must_use]
    pub fn with_instruction(mut self, instruction: Instruction) -> Self {
        self.instructions.push(instruction);
        self
    }

    /// Replace the body's instructions.
    #[must_use]
    pub fn with_instructions(mut self, instructions: Vec<Instruction>) -> Self {
        self.instructions = instructions;
        self
    }

    /// True if the method is static.
    #[must_use]
    pub fn is_static(&self) -> bool {
        self.access.contains(MethodAccessFlags::STATIC)
    }

    /// True if the method is private.
    #[must_use]
    pub fn is_private(&self) -> bool {
        self.access.contains(MethodAccessFlags::PRIVATE)
    }

    /// True if the method is public.
    #[must_use]
    pub fn is_public(&self) -> bool {
        self.access.contains(MethodAccessFlags::PUBLIC)
    }

    /// True if the method is abstract.
    #[must_use]
    pub fn is_abstract(&self) -> bool {
        self.access.contains(MethodAccessFlags::ABSTRACT)
    }

    /// True if the method is final.
    #[must_use]
    pub fn is_final(&self) -> bool {
        self.access.contains(MethodAccessFlags::FINAL)
    }

    /// True if the method is a compiler-generated bridge.
    #[must_use]
    pub fn is_bridge(&self) -> bool {
        self.access.contains(MethodAccessFlags::BRIDGE)
    }

    /// True if the method is synthetic.
    #[must_use]
    pub fn is_synthetic(&self) -> bool {
        self.access.contains(MethodAccessFlags::SYNTHETIC)
    }

    /// True for `<init>`.
    #[must_use]
    pub fn is_constructor(&self) -> bool {
        self.name == "<init>"
    }

    /// True for `<clinit>`.
    #[must_use]
    pub fn is_class_initializer(&self) -> bool {
        self.name == "<clinit>"
    }

    /// The method's visibility level.
    #[must_use]
    pub fn member_access(&self) -> MemberAccess {
        MemberAccess::from_method_flags(self.access)
    }

    /// The method's printable declaration site.
    #[must_use]
    pub fn location(&self) -> MethodLocation {
        MethodLocation::new(&self.class_name, &self.name, &self.descriptor)
    }
}
