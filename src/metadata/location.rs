//! Printable locations of classes and members.
//!
//! A [`Location`] pins a problem to the declaration it concerns: the class being
//! verified, the method whose body contains a broken instruction, or the member a
//! reference resolved to. Locations are plain value objects built from metadata;
//! they render in Java-style form for problem messages.

use std::fmt;

use crate::metadata::descriptor;

/// Location of a class or interface.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClassLocation {
    /// Binary name of the class
    pub class_name: String,
}

impl ClassLocation {
    /// Build a class location.
    #[must_use]
    pub fn new(class_name: &str) -> Self {
        ClassLocation {
            class_name: class_name.to_string(),
        }
    }
}

impl fmt::Display for ClassLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", descriptor::display_name(&self.class_name))
    }
}

/// Location of a method declaration.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MethodLocation {
    /// Binary name of the declaring class
    pub class_name: String,
    /// Method name
    pub method_name: String,
    /// Method descriptor
    pub descriptor: String,
}

impl MethodLocation {
    /// Build a method location.
    #[must_use]
    pub fn new(class_name: &str, method_name: &str, descriptor: &str) -> Self {
        MethodLocation {
            class_name: class_name.to_string(),
            method_name: method_name.to_string(),
            descriptor: descriptor.to_string(),
        }
    }
}

impl fmt::Display for MethodLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            descriptor::render_method_reference(
                &self.class_name,
                &self.method_name,
                &self.descriptor
            )
        )
    }
}

/// Location of a field declaration.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FieldLocation {
    /// Binary name of the declaring class
    pub class_name: String,
    /// Field name
    pub field_name: String,
    /// Field descriptor
    pub descriptor: String,
}

impl FieldLocation {
    /// Build a field location.
    #[must_use]
    pub fn new(class_name: &str, field_name: &str, descriptor: &str) -> Self {
        FieldLocation {
            class_name: class_name.to_string(),
            field_name: field_name.to_string(),
            descriptor: descriptor.to_string(),
        }
    }
}

impl fmt::Display for FieldLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            descriptor::render_field_reference(
                &self.class_name,
                &self.field_name,
                &self.descriptor
            )
        )
    }
}

/// Any location a problem or usage record can point at.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Location {
    /// A class or interface declaration
    Class(ClassLocation),
    /// A method declaration
    Method(MethodLocation),
    /// A field declaration
    Field(FieldLocation),
}

impl Location {
    /// Binary name of the class this location lives in.
    #[must_use]
    pub fn class_name(&self) -> &str {
        match self {
            Location::Class(location) => &location.class_name,
            Location::Method(location) => &location.class_name,
            Location::Field(location) => &location.class_name,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Class(location) => location.fmt(f),
            Location::Method(location) => location.fmt(f),
            Location::Field(location) => location.fmt(f),
        }
    }
}

impl From<ClassLocation> for Location {
    fn from(location: ClassLocation) -> Self {
        Location::Class(location)
    }
}

impl From<MethodLocation> for Location {
    fn from(location: MethodLocation) -> Self {
        Location::Method(location)
    }
}

impl From<FieldLocation> for Location {
    fn from(location: FieldLocation) -> Self {
        Location::Field(location)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_location_display() {
        let location = MethodLocation::new("com/example/Foo", "run", "(JZ)I");
        assert_eq!(
            location.to_string(),
            "com.example.Foo.run(long, boolean) : int"
        );
    }

    #[test]
    fn test_field_location_display() {
        let location = FieldLocation::new("com/example/Foo", "flag", "Z");
        assert_eq!(location.to_string(), "com.example.Foo.flag : boolean");
    }

    #[test]
    fn test_location_class_name() {
        let location: Location = ClassLocation::new("com/example/Foo").into();
        assert_eq!(location.class_name(), "com/example/Foo");
        assert_eq!(location.to_string(), "com.example.Foo");
    }
}
