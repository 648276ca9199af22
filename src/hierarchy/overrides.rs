//! Override detection.
//!
//! Shared between the verification driver (deprecated/experimental usages of
//! overridden methods) and the API-diff tooling built on top of this crate,
//! which needs exactly this primitive and none of the instruction checks.

use crate::{
    hierarchy::walk_ancestors,
    linkage::ResolvedMethod,
    metadata::{ClassMetadata, MemberAccess, MethodMetadata},
    resolver::ClassResolver,
    Result,
};

/// The nearest ancestor method that `method`, declared in `class`, overrides.
///
/// A method can only override if it is an instance method with a name of its
/// own: constructors, static initializers, static, private, and package-private
/// methods never override anything here. The superclass chain is searched
/// nearest-first, interfaces excluded; an ancestor declaration only counts when
/// it is itself overridable (non-static, non-private, not package-private).
/// Unresolvable ancestors are skipped - absence of proof is treated as no
/// override.
///
/// # Errors
/// Propagates genuine resolver faults.
pub fn find_overridden_method(
    class: &ClassMetadata,
    method: &MethodMetadata,
    resolver: &dyn ClassResolver,
) -> Result<Option<ResolvedMethod>> {
    if !can_override(method) {
        return Ok(None);
    }

    let mut found: Option<ResolvedMethod> = None;
    walk_ancestors(class, resolver, false, |ancestor| {
        if let Some(candidate) = ancestor.declared_method(&method.name, &method.descriptor) {
            if is_overridable(candidate) {
                found = Some(ResolvedMethod {
                    class: ancestor.clone(),
                    method: candidate.clone(),
                });
            }
        }
        found.is_none()
    })?;

    Ok(found)
}

/// True if `method`, declared in `class`, overrides a method of some ancestor.
///
/// # Errors
/// Propagates genuine resolver faults.
pub fn is_overriding(
    class: &ClassMetadata,
    method: &MethodMetadata,
    resolver: &dyn ClassResolver,
) -> Result<bool> {
    Ok(find_overridden_method(class, method, resolver)?.is_some())
}

fn can_override(method: &MethodMetadata) -> bool {
    !(method.is_constructor()
        || method.is_class_initializer()
        || method.is_static()
        || method.is_private()
        || method.member_access() == MemberAccess::PackagePrivate)
}

fn is_overridable(candidate: &MethodMetadata) -> bool {
    !(candidate.is_static()
        || candidate.is_private()
        || candidate.member_access() == MemberAccess::PackagePrivate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::{ClassMetadataBuilder, MethodAccessFlags, MethodMetadata};
    use crate::resolver::InMemoryResolver;
    use crate::test::{create_object_class, lookup_class};

    fn fixture() -> InMemoryResolver {
        let resolver = InMemoryResolver::new();
        resolver.add(create_object_class());
        resolver.add(
            ClassMetadataBuilder::new("o/Base")
                .method(MethodMetadata::new("render", "()V", MethodAccessFlags::PUBLIC))
                .method(MethodMetadata::new(
                    "helper",
                    "()V",
                    MethodAccessFlags::PRIVATE,
                ))
                .method(MethodMetadata::new(
                    "create",
                    "()V",
                    MethodAccessFlags::PUBLIC | MethodAccessFlags::STATIC,
                ))
                .build(),
        );
        resolver.add(
            ClassMetadataBuilder::new("o/Child")
                .extends("o/Base")
                .method(MethodMetadata::new("render", "()V", MethodAccessFlags::PUBLIC))
                .method(MethodMetadata::new("helper", "()V", MethodAccessFlags::PUBLIC))
                .method(MethodMetadata::new(
                    "toString",
                    "()Ljava/lang/String;",
                    MethodAccessFlags::PUBLIC,
                ))
                .build(),
        );
        resolver
    }

    #[test]
    fn test_direct_override() {
        let resolver = fixture();
        let child = lookup_class(&resolver, "o/Child");
        let render = child.declared_method("render", "()V").unwrap();

        let overridden = find_overridden_method(&child, render, &resolver)
            .unwrap()
            .unwrap();
        assert_eq!(overridden.class.name, "o/Base");
        assert_eq!(overridden.method.name, "render");
    }

    #[test]
    fn test_override_across_levels() {
        let resolver = fixture();
        let child = lookup_class(&resolver, "o/Child");
        let to_string = child
            .declared_method("toString", "()Ljava/lang/String;")
            .unwrap();

        let overridden = find_overridden_method(&child, to_string, &resolver)
            .unwrap()
            .unwrap();
        assert_eq!(overridden.class.name, "java/lang/Object");
    }

    #[test]
    fn test_private_ancestor_is_not_overridable() {
        let resolver = fixture();
        let child = lookup_class(&resolver, "o/Child");
        let helper = child.declared_method("helper", "()V").unwrap();

        // o/Base declares helper() as private; the public redeclaration in
        // o/Child is a new method, not an override.
        assert!(!is_overriding(&child, helper, &resolver).unwrap());
    }

    #[test]
    fn test_non_overridable_declarations() {
        let resolver = fixture();
        let constructor = MethodMetadata::new("<init>", "()V", MethodAccessFlags::PUBLIC);
        let stat = MethodMetadata::new(
            "create",
            "()V",
            MethodAccessFlags::PUBLIC | MethodAccessFlags::STATIC,
        );
        let package_private = MethodMetadata::new("render", "()V", MethodAccessFlags::empty());

        let child = lookup_class(&resolver, "o/Child");
        assert!(!is_overriding(&child, &constructor, &resolver).unwrap());
        assert!(!is_overriding(&child, &stat, &resolver).unwrap());
        assert!(!is_overriding(&child, &package_private, &resolver).unwrap());
    }

    #[test]
    fn test_unresolvable_ancestor_means_no_override() {
        let resolver = InMemoryResolver::new();
        resolver.add(
            ClassMetadataBuilder::new("o/Orphan")
                .extends("o/Missing")
                .method(MethodMetadata::new("render", "()V", MethodAccessFlags::PUBLIC))
                .build(),
        );

        let orphan = lookup_class(&resolver, "o/Orphan");
        let render = orphan.declared_method("render", "()V").unwrap();
        assert!(!is_overriding(&orphan, render, &resolver).unwrap());
    }
}
