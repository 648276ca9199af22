//! Class metadata and its builder.
//!
//! [`ClassMetadata`] is the unit everything else operates on: resolvers produce
//! it, the hierarchy walker traverses it, member resolution searches it, and the
//! verification driver iterates its methods. Instances are immutable once built
//! and shared behind [`ClassRc`]; supertypes are referenced by binary name and
//! looked up through a [`crate::resolver::ClassResolver`], never by pointer.
//!
//! # Thread Safety
//!
//! All metadata is immutable after construction, so `ClassRc` values can be
//! shared freely across the class-parallel verification driver.
//!
//! # Examples
//!
//! ```rust
//! use linkscope::metadata::{ClassMetadataBuilder, MethodMetadata, MethodAccessFlags};
//!
//! let class = ClassMetadataBuilder::new("com/example/Handler")
//!     .implements("com/example/Listener")
//!     .method(MethodMetadata::new("onEvent", "()V", MethodAccessFlags::PUBLIC))
//!     .build();
//!
//! assert_eq!(class.super_name.as_deref(), Some("java/lang/Object"));
//! assert!(class.declared_method("onEvent", "()V").is_some());
//! ```

use std::sync::Arc;

use crate::metadata::{
    access::{package_of, ClassAccessFlags},
    field::{FieldMetadata, FieldRc},
    location::ClassLocation,
    markers::{ApiMarkers, ClassOrigin},
    method::{MethodMetadata, MethodRc},
};

/// A reference-counted [`ClassMetadata`].
pub type ClassRc = Arc<ClassMetadata>;

/// A parsed class or interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassMetadata {
    /// Binary name, slash-separated (`com/example/Foo`)
    pub name: String,
    /// Binary name of the direct superclass; `None` only for `java/lang/Object`
    pub super_name: Option<String>,
    /// Binary names of the direct superinterfaces, in declaration order
    pub interfaces: Vec<String>,
    /// Access and property flags
    pub access: ClassAccessFlags,
    /// Generic signature, if the class declares one
    pub signature: Option<String>,
    /// Declared methods, in declaration order
    pub methods: Vec<MethodRc>,
    /// Declared fields, in declaration order
    pub fields: Vec<FieldRc>,
    /// Which logical source resolved this class
    pub origin: ClassOrigin,
    /// API status markers
    pub markers: ApiMarkers,
}

impl ClassMetadata {
    /// True if this is an interface.
    #[must_use]
    pub fn is_interface(&self) -> bool {
        self.access.contains(ClassAccessFlags::INTERFACE)
    }

    /// True if this class is abstract.
    #[must_use]
    pub fn is_abstract(&self) -> bool {
        self.access.contains(ClassAccessFlags::ABSTRACT)
    }

    /// True if this class is final.
    #[must_use]
    pub fn is_final(&self) -> bool {
        self.access.contains(ClassAccessFlags::FINAL)
    }

    /// True if this class is public; otherwise it is package-private.
    #[must_use]
    pub fn is_public(&self) -> bool {
        self.access.contains(ClassAccessFlags::PUBLIC)
    }

    /// The declared method with exactly this name and descriptor, if any.
    #[must_use]
    pub fn declared_method(&self, name: &str, descriptor: &str) -> Option<&MethodRc> {
        self.methods
            .iter()
            .find(|method| method.name == name && method.descriptor == descriptor)
    }

    /// The declared field with exactly this name and descriptor, if any.
    #[must_use]
    pub fn declared_field(&self, name: &str, descriptor: &str) -> Option<&FieldRc> {
        self.fields
            .iter()
            .find(|field| field.name == name && field.descriptor == descriptor)
    }

    /// The package portion of the binary name, empty for the default package.
    #[must_use]
    pub fn package(&self) -> &str {
        package_of(&self.name)
    }

    /// The class's printable location.
    #[must_use]
    pub fn location(&self) -> ClassLocation {
        ClassLocation::new(&self.name)
    }
}

/// Fluent construction of [`ClassMetadata`].
///
/// Resolvers use this to assemble classes from whatever they parse; tests use it
/// to stage hierarchies. Defaults mirror what `javac` emits for a plain public
/// class: superclass `java/lang/Object`, flags `PUBLIC | SUPER`.
pub struct ClassMetadataBuilder {
    name: String,
    super_name: Option<String>,
    interfaces: Vec<String>,
    access: ClassAccessFlags,
    signature: Option<String>,
    methods: Vec<MethodMetadata>,
    fields: Vec<FieldMetadata>,
    origin: ClassOrigin,
    markers: ApiMarkers,
}

impl ClassMetadataBuilder {
    /// Start building a class with the given binary name.
    #[must_use]
    pub fn new(name: &str) -> Self {
        ClassMetadataBuilder {
            name: name.to_string(),
            super_name: Some("java/lang/Object".to_string()),
            interfaces: Vec::new(),
            access: ClassAccessFlags::PUBLIC | ClassAccessFlags::SUPER,
            signature: None,
            methods: Vec::new(),
            fields: Vec::new(),
            origin: ClassOrigin::Unknown,
            markers: ApiMarkers::none(),
        }
    }

    /// Set the direct superclass.
    #[must_use]
    pub fn extends(mut self, super_name: &str) -> Self {
        self.super_name = Some(super_name.to_string());
        self
    }

    /// Remove the superclass; only `java/lang/Object` itself has none.
    #[must_use]
    pub fn no_superclass(mut self) -> Self {
        self.super_name = None;
        self
    }

    /// Add a direct superinterface.
    #[must_use]
    pub fn implements(mut self, interface_name: &str) -> Self {
        self.interfaces.push(interface_name.to_string());
        self
    }

    /// Make this an interface (`INTERFACE | ABSTRACT`, no `SUPER`).
    #[must_use]
    pub fn interface(mut self) -> Self {
        self.access.remove(ClassAccessFlags::SUPER);
        self.access |= ClassAccessFlags::INTERFACE | ClassAccessFlags::ABSTRACT;
        self
    }

    /// Mark the class abstract.
    #[must_use]
    pub fn abstract_class(mut self) -> Self {
        self.access |= ClassAccessFlags::ABSTRACT;
        self
    }

    /// Mark the class final.
    #[must_use]
    pub fn final_class(mut self) -> Self {
        self.access |= ClassAccessFlags::FINAL;
        self
    }

    /// Drop the `PUBLIC` flag, making the class package-private.
    #[must_use]
    pub fn package_private(mut self) -> Self {
        self.access.remove(ClassAccessFlags::PUBLIC);
        self
    }

    /// Replace the access flags wholesale.
    #[must_use]
    pub fn access(mut self, access: ClassAccessFlags) -> Self {
        self.access = access;
        self
    }

    /// Attach a generic signature.
    #[must_use]
    pub fn signature(mut self, signature: &str) -> Self {
        self.signature = Some(signature.to_string());
        self
    }

    /// Set the origin tag.
    #[must_use]
    pub fn origin(mut self, origin: ClassOrigin) -> Self {
        self.origin = origin;
        self
    }

    /// Attach API status markers.
    #[must_use]
    pub fn markers(mut self, markers: ApiMarkers) -> Self {
        self.markers = markers;
        self
    }

    /// Add a declared method; its owning class name is filled in here.
    #[must_use]
    pub fn method(mut self, method: MethodMetadata) -> Self {
        self.methods.push(method);
        self
    }

    /// Add a declared field; its owning class name is filled in here.
    #[must_use]
    pub fn field(mut self, field: FieldMetadata) -> Self {
        self.fields.push(field);
        self
    }

    /// Finish, producing a shared immutable class.
    #[must_use]
    pub fn build(self) -> ClassRc {
        let methods = self
            .methods
            .into_iter()
            .map(|mut method| {
                method.class_name.clone_from(&self.name);
                Arc::new(method)
            })
            .collect();
        let fields = self
            .fields
            .into_iter()
            .map(|mut field| {
                field.class_name.clone_from(&self.name);
                Arc::new(field)
            })
            .collect();

        Arc::new(ClassMetadata {
            name: self.name,
            super_name: self.super_name,
            interfaces: self.interfaces,
            access: self.access,
            signature: self.signature,
            methods,
            fields,
            origin: self.origin,
            markers: self.markers,
        })
    }
}
