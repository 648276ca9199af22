//! Field metadata.

use std::sync::Arc;

use crate::metadata::{
    access::{FieldAccessFlags, MemberAccess},
    location::FieldLocation,
    markers::ApiMarkers,
};

/// A reference-counted [`FieldMetadata`].
pub type FieldRc = Arc<FieldMetadata>;

/// A declared field of a class or interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMetadata {
    /// Field name
    pub name: String,
    /// Field descriptor
    pub descriptor: String,
    /// Access and property flags
    pub access: FieldAccessFlags,
    /// Generic signature, if the field declares one
    pub signature: Option<String>,
    /// Binary name of the declaring class; set when the field is attached
    pub class_name: String,
    /// API status markers
    pub markers: ApiMarkers,
}

impl FieldMetadata {
    /// Build a field with the given name, descriptor and flags. The owning
    /// class name is filled in by [`crate::metadata::ClassMetadataBuilder`]
    /// when the field is attached.
    #[must_use]
    pub fn new(name: &str, descriptor: &str, access: FieldAccessFlags) -> Self {
        FieldMetadata {
            name: name.to_string(),
            descriptor: descriptor.to_string(),
            access,
            signature: None,
            class_name: String::new(),
            markers: ApiMarkers::none(),
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

    /// True if the field is static.
    #[must_use]
    pub fn is_static(&self) -> bool {
        self.access.contains(FieldAccessFlags::STATIC)
    }

    /// True if the field is final.
    #[must_use]
    pub fn is_final(&self) -> bool {
        self.access.contains(FieldAccessFlags::FINAL)
    }

    /// The field's visibility level.
    #[must_use]
    pub fn member_access(&self) -> MemberAccess {
        MemberAccess::from_field_flags(self.access)
    }

    /// The field's printable declaration site.
    #[must_use]
    pub fn location(&self) -> FieldLocation {
        FieldLocation::new(&self.class_name, &self.name, &self.descriptor)
    }
}
