//! Member access control (JVMS §5.4.4).

use crate::{
    hierarchy::is_subclass_of,
    metadata::{ClassMetadata, MemberAccess},
    resolver::ClassResolver,
    Result,
};

/// Check whether `accessor` may use a member of `declaring` at level `access`.
///
/// Returns `None` when access is permitted and `Some(access)` when it is not,
/// so verifiers can attach the violated level to the problem they report.
///
/// `reference` is the class named by the symbolic reference, which for
/// inherited members differs from `declaring`. It only matters for the
/// protected case: a protected instance member used from outside the
/// declarer's package is reachable solely through the accessor's own
/// inheritance, so `reference` must be the accessor, a subclass of it, or one
/// of its superclasses.
///
/// # Errors
/// Propagates genuine resolver faults. An ancestor that fails to resolve
/// simply does not widen access.
pub fn check_member_access(
    accessor: &ClassMetadata,
    declaring: &ClassMetadata,
    reference: &ClassMetadata,
    access: MemberAccess,
    member_is_static: bool,
    resolver: &dyn ClassResolver,
) -> Result<Option<MemberAccess>> {
    let allowed = match access {
        MemberAccess::Public => true,
        MemberAccess::Protected => {
            if accessor.package() == declaring.package() {
                true
            } else if accessor.name == declaring.name
                || is_subclass_of(accessor, &declaring.name, resolver)?
            {
                member_is_static
                    || reference.name == accessor.name
                    || is_subclass_of(reference, &accessor.name, resolver)?
                    || is_subclass_of(accessor, &reference.name, resolver)?
            } else {
                false
            }
        }
        MemberAccess::PackagePrivate => accessor.package() == declaring.package(),
        MemberAccess::Private => accessor.name == declaring.name,
    };

    Ok(if allowed { None } else { Some(access) })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::{ClassMetadataBuilder, ClassRc};
    use crate::resolver::InMemoryResolver;

    fn hierarchy() -> (InMemoryResolver, ClassRc, ClassRc, ClassRc) {
        let resolver = InMemoryResolver::new();
        resolver.add(ClassMetadataBuilder::new("java/lang/Object").no_superclass().build());
        let base = ClassMetadataBuilder::new("lib/Base").build();
        let child = ClassMetadataBuilder::new("app/Child").extends("lib/Base").build();
        let sibling = ClassMetadataBuilder::new("other/Sibling").extends("lib/Base").build();
        resolver.add(base.clone());
        resolver.add(child.clone());
        resolver.add(sibling.clone());
        (resolver, base, child, sibling)
    }

    #[test]
    fn test_public_always_allowed() {
        let (resolver, base, child, _) = hierarchy();
        let verdict =
            check_member_access(&child, &base, &base, MemberAccess::Public, false, &resolver)
                .unwrap();
        assert!(verdict.is_none());
    }

    #[test]
    fn test_protected_requires_subclass_outside_package() {
        let (resolver, base, child, _) = hierarchy();
        resolver.add(ClassMetadataBuilder::new("app/Stranger").build());
        let stranger = resolver.resolve("app/Stranger").unwrap().found().unwrap().clone();

        // A subclass referencing through itself is fine.
        let verdict =
            check_member_access(&child, &base, &child, MemberAccess::Protected, false, &resolver)
                .unwrap();
        assert!(verdict.is_none());

        // An unrelated class from another package is not.
        let verdict = check_member_access(
            &stranger,
            &base,
            &base,
            MemberAccess::Protected,
            false,
            &resolver,
        )
        .unwrap();
        assert_eq!(verdict, Some(MemberAccess::Protected));
    }

    #[test]
    fn test_protected_instance_member_needs_related_reference() {
        let (resolver, base, child, sibling) = hierarchy();

        // app/Child touching the member through other/Sibling: both extend the
        // declarer, but Sibling is neither a subclass nor a superclass of Child.
        let verdict = check_member_access(
            &child,
            &base,
            &sibling,
            MemberAccess::Protected,
            false,
            &resolver,
        )
        .unwrap();
        assert_eq!(verdict, Some(MemberAccess::Protected));

        // The same reference to a static member is allowed.
        let verdict = check_member_access(
            &child,
            &base,
            &sibling,
            MemberAccess::Protected,
            true,
            &resolver,
        )
        .unwrap();
        assert!(verdict.is_none());

        // Referencing through the superclass is allowed too.
        let verdict =
            check_member_access(&child, &base, &base, MemberAccess::Protected, false, &resolver)
                .unwrap();
        assert!(verdict.is_none());
    }

    #[test]
    fn test_protected_same_package_skips_subclass_rules() {
        let (resolver, base, _, _) = hierarchy();
        resolver.add(ClassMetadataBuilder::new("lib/Neighbor").build());
        let neighbor = resolver.resolve("lib/Neighbor").unwrap().found().unwrap().clone();

        let verdict = check_member_access(
            &neighbor,
            &base,
            &base,
            MemberAccess::Protected,
            false,
            &resolver,
        )
        .unwrap();
        assert!(verdict.is_none());
    }

    #[test]
    fn test_package_private_bound_to_package() {
        let (resolver, base, child, _) = hierarchy();
        resolver.add(ClassMetadataBuilder::new("lib/Neighbor").build());
        let neighbor = resolver.resolve("lib/Neighbor").unwrap().found().unwrap().clone();

        let verdict = check_member_access(
            &neighbor,
            &base,
            &base,
            MemberAccess::PackagePrivate,
            false,
            &resolver,
        )
        .unwrap();
        assert!(verdict.is_none());

        // Subclassing does not help across packages.
        let verdict = check_member_access(
            &child,
            &base,
            &base,
            MemberAccess::PackagePrivate,
            false,
            &resolver,
        )
        .unwrap();
        assert_eq!(verdict, Some(MemberAccess::PackagePrivate));
    }

    #[test]
    fn test_private_bound_to_declaring_class() {
        let (resolver, base, child, _) = hierarchy();

        let verdict =
            check_member_access(&base, &base, &base, MemberAccess::Private, false, &resolver)
                .unwrap();
        assert!(verdict.is_none());

        let verdict =
            check_member_access(&child, &base, &base, MemberAccess::Private, false, &resolver)
                .unwrap();
        assert_eq!(verdict, Some(MemberAccess::Private));
    }
}
