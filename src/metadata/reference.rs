//! Symbolic references as instructions carry them.
//!
//! These are the unresolved name/descriptor pairs taken straight from the constant
//! pool: what the compiled code *asked for*, before any resolution happened. They
//! are deliberately distinct from [`crate::metadata::Location`] values, which
//! describe where something *was found*; a problem record usually carries one of
//! each.

use std::fmt;

use crate::metadata::descriptor;

/// A symbolic reference to a method, as written by `CONSTANT_Methodref` or
/// `CONSTANT_InterfaceMethodref`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MethodReference {
    /// Binary name of the class or interface the reference names as owner
    pub class_name: String,
    /// Method name
    pub name: String,
    /// Method descriptor
    pub descriptor: String,
    /// True when the constant pool entry was `CONSTANT_InterfaceMethodref`
    pub interface_ref: bool,
}

impl MethodReference {
    /// A `CONSTANT_Methodref`-style reference.
    #[must_use]
    pub fn to_class(class_name: &str, name: &str, descriptor: &str) -> Self {
        MethodReference {
            class_name: class_name.to_string(),
            name: name.to_string(),
            descriptor: descriptor.to_string(),
            interface_ref: false,
        }
    }

    /// A `CONSTANT_InterfaceMethodref`-style reference.
    #[must_use]
    pub fn to_interface(class_name: &str, name: &str, descriptor: &str) -> Self {
        MethodReference {
            class_name: class_name.to_string(),
            name: name.to_string(),
            descriptor: descriptor.to_string(),
            interface_ref: true,
        }
    }
}

impl fmt::Display for MethodReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            descriptor::render_method_reference(&self.class_name, &self.name, &self.descriptor)
        )
    }
}

/// A symbolic reference to a field, as written by `CONSTANT_Fieldref`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FieldReference {
    /// Binary name of the class or interface the reference names as owner
    pub class_name: String,
    /// Field name
    pub name: String,
    /// Field descriptor
    pub descriptor: String,
}

impl FieldReference {
    /// Build a field reference.
    #[must_use]
    pub fn new(class_name: &str, name: &str, descriptor: &str) -> Self {
        FieldReference {
            class_name: class_name.to_string(),
            name: name.to_string(),
            descriptor: descriptor.to_string(),
        }
    }
}

impl fmt::Display for FieldReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            descriptor::render_field_reference(&self.class_name, &self.name, &self.descriptor)
        )
    }
}

/// A symbolic reference to a class or array type, as written by `CONSTANT_Class`.
///
/// The entry is either a plain binary name (`com/example/Foo`) or an array
/// descriptor (`[[Lcom/example/Foo;`, `[I`). [`TypeReference::object_type`]
/// extracts the class actually subject to resolution.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TypeReference {
    /// The constant pool entry, verbatim
    pub entry: String,
}

impl TypeReference {
    /// Build a type reference from a constant pool entry.
    #[must_use]
    pub fn new(entry: &str) -> Self {
        TypeReference {
            entry: entry.to_string(),
        }
    }

    /// The binary name of the object class this entry refers to, `None` when the
    /// entry is an array of primitives and references no class at all.
    #[must_use]
    pub fn object_type(&self) -> Option<&str> {
        descriptor::referenced_object_type(&self.entry)
    }
}

impl fmt::Display for TypeReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.object_type() {
            Some(name) => write!(f, "{}", descriptor::display_name(name)),
            None => write!(f, "{}", self.entry),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_reference_display() {
        let reference = MethodReference::to_class("com/example/Foo", "run", "(I)V");
        assert_eq!(reference.to_string(), "com.example.Foo.run(int) : void");
        assert!(!reference.interface_ref);
    }

    #[test]
    fn test_interface_method_reference() {
        let reference = MethodReference::to_interface("com/example/Api", "get", "()I");
        assert!(reference.interface_ref);
    }

    #[test]
    fn test_type_reference_object_type() {
        assert_eq!(
            TypeReference::new("com/example/Foo").object_type(),
            Some("com/example/Foo")
        );
        assert_eq!(
            TypeReference::new("[Lcom/example/Foo;").object_type(),
            Some("com/example/Foo")
        );
        assert_eq!(TypeReference::new("[[I").object_type(), None);
    }

    #[test]
    fn test_field_reference_display() {
        let reference = FieldReference::new("com/example/Foo", "LIMIT", "J");
        assert_eq!(reference.to_string(), "com.example.Foo.LIMIT : long");
    }
}
