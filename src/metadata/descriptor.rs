//! Parsing and rendering of JVM field and method descriptors.
//!
//! Descriptors are the compact type encoding of the class file format (JVMS §4.3):
//! `I` for `int`, `Ljava/lang/String;` for a class reference, `[[J` for `long[][]`,
//! `(ILjava/lang/String;)V` for a method taking `int` and `String` returning `void`.
//! The verification engine never needs full type semantics, but it does need to
//! extract the object classes a descriptor mentions and to render members in the
//! Java-style form problem messages use.
//!
//! # Key Types
//! - [`FieldType`], [`BaseType`]: decoded single-type descriptors
//! - [`MethodDescriptor`]: decoded parameter and return types
//!
//! # Main Functions
//! - [`parse_field_descriptor`], [`parse_method_descriptor`]: grammar-checked decoding
//! - [`referenced_object_type`]: the class a `CONSTANT_Class`-style entry refers to
//! - [`render_method_reference`], [`render_field_reference`]: human-readable members

use std::fmt;

use crate::Result;

/// A primitive type as encoded in a descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum BaseType {
    /// `B` - signed byte
    Byte,
    /// `C` - UTF-16 code unit
    Char,
    /// `D` - double-precision float
    Double,
    /// `F` - single-precision float
    Float,
    /// `I` - 32-bit integer
    Int,
    /// `J` - 64-bit integer
    Long,
    /// `S` - signed short
    Short,
    /// `Z` - boolean
    Boolean,
}

impl BaseType {
    /// Decode a descriptor character into its primitive type, if it is one.
    #[must_use]
    pub fn from_descriptor_char(c: u8) -> Option<Self> {
        match c {
            b'B' => Some(BaseType::Byte),
            b'C' => Some(BaseType::Char),
            b'D' => Some(BaseType::Double),
            b'F' => Some(BaseType::Float),
            b'I' => Some(BaseType::Int),
            b'J' => Some(BaseType::Long),
            b'S' => Some(BaseType::Short),
            b'Z' => Some(BaseType::Boolean),
            _ => None,
        }
    }
}

/// The element of a field type: primitive or class reference.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ElementType {
    /// A primitive element
    Base(BaseType),
    /// A class or interface element, by binary name (slash-separated)
    Object(String),
}

/// A decoded field descriptor: an element type plus array dimensions.
///
/// Dimensions are flattened rather than nested; the class file format caps
/// them at 255, so `u8` is exact.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FieldType {
    /// Number of array dimensions, 0 for a plain type
    pub dimensions: u8,
    /// The element type below all array dimensions
    pub element: ElementType,
}

impl FieldType {
    /// The binary name of the object class this type mentions, if any.
    #[must_use]
    pub fn object_name(&self) -> Option<&str> {
        match &self.element {
            ElementType::Object(name) => Some(name),
            ElementType::Base(_) => None,
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.element {
            ElementType::Base(base) => write!(f, "{}", base)?,
            ElementType::Object(name) => write!(f, "{}", display_name(name))?,
        }
        for _ in 0..self.dimensions {
            write!(f, "[]")?;
        }
        Ok(())
    }
}

/// A decoded method descriptor.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MethodDescriptor {
    /// Parameter types, in declaration order
    pub parameters: Vec<FieldType>,
    /// Return type, `None` for `void`
    pub return_type: Option<FieldType>,
}

impl MethodDescriptor {
    /// Binary names of all object classes this descriptor mentions.
    #[must_use]
    pub fn referenced_classes(&self) -> Vec<&str> {
        self.parameters
            .iter()
            .chain(self.return_type.iter())
            .filter_map(FieldType::object_name)
            .collect()
    }
}

/// Converts a binary class name to its Java source form (`java/lang/String` to
/// `java.lang.String`). Nested-class `$` separators are kept as-is; problem
/// messages stay faithful to what the class file names.
#[must_use]
pub fn display_name(binary_name: &str) -> String {
    binary_name.replace('/', ".")
}

/// Parse a single field descriptor such as `I`, `Ljava/lang/String;` or `[[D`.
///
/// # Errors
/// Returns [`crate::Error::Malformed`] if the descriptor does not follow the
/// class-file grammar or has trailing characters.
pub fn parse_field_descriptor(descriptor: &str) -> Result<FieldType> {
    let (field, consumed) = scan_field_type(descriptor, 0)?;
    if consumed != descriptor.len() {
        return Err(malformed_error!(
            "Trailing characters in field descriptor '{}'",
            descriptor
        ));
    }
    Ok(field)
}

/// Parse a method descriptor such as `(ILjava/lang/String;)[B`.
///
/// # Errors
/// Returns [`crate::Error::Malformed`] if the descriptor does not follow the
/// class-file grammar.
pub fn parse_method_descriptor(descriptor: &str) -> Result<MethodDescriptor> {
    let bytes = descriptor.as_bytes();
    if bytes.first() != Some(&b'(') {
        return Err(malformed_error!(
            "Method descriptor '{}' does not start with '('",
            descriptor
        ));
    }

    let mut parameters = Vec::new();
    let mut pos = 1;
    loop {
        match bytes.get(pos) {
            Some(b')') => {
                pos += 1;
                break;
            }
            Some(_) => {
                let (field, next) = scan_field_type(descriptor, pos)?;
                parameters.push(field);
                pos = next;
            }
            None => {
                return Err(malformed_error!(
                    "Unterminated parameter list in method descriptor '{}'",
                    descriptor
                ))
            }
        }
    }

    let return_type = if bytes.get(pos) == Some(&b'V') {
        pos += 1;
        None
    } else {
        let (field, next) = scan_field_type(descriptor, pos)?;
        pos = next;
        Some(field)
    };

    if pos != descriptor.len() {
        return Err(malformed_error!(
            "Trailing characters in method descriptor '{}'",
            descriptor
        ));
    }

    Ok(MethodDescriptor {
        parameters,
        return_type,
    })
}

/// The binary name of the object class a type-instruction operand refers to.
///
/// `new`, `anewarray`, `checkcast`, `instanceof`, `ldc` of a Class constant and
/// `multianewarray` all carry a `CONSTANT_Class` entry which is either a plain
/// binary name (`com/example/Foo`) or an array descriptor (`[[Lcom/example/Foo;`,
/// `[I`). Returns `None` for arrays of primitives, which reference no class.
#[must_use]
pub fn referenced_object_type(entry: &str) -> Option<&str> {
    let bytes = entry.as_bytes();
    if bytes.first() != Some(&b'[') {
        return Some(entry);
    }

    let element = entry.trim_start_matches('[');
    let bytes = element.as_bytes();
    if bytes.first() == Some(&b'L') && bytes.last() == Some(&b';') {
        Some(&element[1..element.len() - 1])
    } else {
        None
    }
}

/// Render a method in Java-like form: `com.example.Foo.run(int, java.lang.String) : void`.
///
/// Falls back to the raw descriptor when it cannot be parsed; rendering is for
/// diagnostics and must not fail.
#[must_use]
pub fn render_method_reference(class_name: &str, name: &str, descriptor: &str) -> String {
    match parse_method_descriptor(descriptor) {
        Ok(parsed) => {
            let parameters = parsed
                .parameters
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            let return_type = match &parsed.return_type {
                Some(field) => field.to_string(),
                None => "void".to_string(),
            };
            format!(
                "{}.{}({}) : {}",
                display_name(class_name),
                name,
                parameters,
                return_type
            )
        }
        Err(_) => format!("{}.{}{}", display_name(class_name), name, descriptor),
    }
}

/// Render a field in Java-like form: `com.example.Foo.THRESHOLD : int`.
#[must_use]
pub fn render_field_reference(class_name: &str, name: &str, descriptor: &str) -> String {
    let field_type = match parse_field_descriptor(descriptor) {
        Ok(parsed) => parsed.to_string(),
        Err(_) => descriptor.to_string(),
    };
    format!("{}.{} : {}", display_name(class_name), name, field_type)
}

fn scan_field_type(descriptor: &str, start: usize) -> Result<(FieldType, usize)> {
    let bytes = descriptor.as_bytes();
    let mut pos = start;

    let mut dimensions: u16 = 0;
    while bytes.get(pos) == Some(&b'[') {
        dimensions += 1;
        pos += 1;
    }
    if dimensions > 255 {
        return Err(malformed_error!(
            "More than 255 array dimensions in descriptor '{}'",
            descriptor
        ));
    }
    #[allow(clippy::cast_possible_truncation)]
    let dimensions = dimensions as u8;

    match bytes.get(pos) {
        Some(&b'L') => {
            let Some(end) = descriptor[pos..].find(';').map(|i| pos + i) else {
                return Err(malformed_error!(
                    "Unterminated class reference in descriptor '{}'",
                    descriptor
                ));
            };
            if end == pos + 1 {
                return Err(malformed_error!(
                    "Empty class reference in descriptor '{}'",
                    descriptor
                ));
            }
            Ok((
                FieldType {
                    dimensions,
                    element: ElementType::Object(descriptor[pos + 1..end].to_string()),
                },
                end + 1,
            ))
        }
        Some(&c) => match BaseType::from_descriptor_char(c) {
            Some(base) => Ok((
                FieldType {
                    dimensions,
                    element: ElementType::Base(base),
                },
                pos + 1,
            )),
            None => Err(malformed_error!(
                "Invalid type character '{}' in descriptor '{}'",
                c as char,
                descriptor
            )),
        },
        None => Err(malformed_error!(
            "Truncated type in descriptor '{}'",
            descriptor
        )),
    }
}
