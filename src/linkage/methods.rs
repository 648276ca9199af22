//! Method resolution.
//!
//! Two entry points, selected by the constant pool kind of the reference:
//! [`resolve_class_method`] for `CONSTANT_Methodref` and
//! [`resolve_interface_method`] for `CONSTANT_InterfaceMethodref`. Callers check
//! the owner's actual kind against the reference kind first; these functions
//! assume it matched.
//!
//! Resolution finds what the JVM would find, including members an instruction
//! could never legally use - a private method in a superclass still resolves,
//! and the illegality is the instruction verifier's finding. The superinterface
//! steps are the exception: the JVM itself ignores private and static candidates
//! there, so this module does too.

use crate::{
    hierarchy::{is_subinterface_of, walk_ancestors, UnresolvedAncestor},
    linkage::{MethodResolution, ResolvedMethod},
    metadata::ClassRc,
    resolver::{ClassResolver, ResolutionOutcome},
    Result,
};

const OBJECT: &str = "java/lang/Object";

/// Resolve a method against a class owner (JVMS §5.4.3.3).
///
/// Search order: the owner's own declarations regardless of flags, the
/// superclass chain nearest-first, then the maximally-specific superinterface
/// method. When several maximally-specific candidates exist and exactly one is
/// non-abstract it wins; otherwise the first candidate in traversal order is
/// chosen, mirroring the JVM's "arbitrarily chosen" clause deterministically.
///
/// # Errors
/// Propagates genuine resolver faults. Ordinary resolution failures of
/// ancestors are collected in [`MethodResolution::unresolved`].
pub fn resolve_class_method(
    owner: &ClassRc,
    name: &str,
    descriptor: &str,
    resolver: &dyn ClassResolver,
) -> Result<MethodResolution> {
    let mut resolution = MethodResolution {
        searched: vec![owner.name.clone()],
        ..MethodResolution::default()
    };

    if let Some(method) = owner.declared_method(name, descriptor) {
        resolution.method = Some(ResolvedMethod {
            class: owner.clone(),
            method: method.clone(),
        });
        return Ok(resolution);
    }

    let mut found: Option<ResolvedMethod> = None;
    let walk = walk_ancestors(owner, resolver, false, |ancestor| {
        if let Some(method) = ancestor.declared_method(name, descriptor) {
            found = Some(ResolvedMethod {
                class: ancestor.clone(),
                method: method.clone(),
            });
        }
        found.is_none()
    })?;
    extend_searched(&mut resolution.searched, walk.visited);
    resolution.unresolved.extend(walk.unresolved);

    if found.is_some() {
        resolution.method = found;
        return Ok(resolution);
    }

    let interfaces = collect_superinterfaces(owner, resolver, &mut resolution)?;
    resolution.method = select_interface_candidate(&interfaces, name, descriptor, resolver)?;
    Ok(resolution)
}

/// Resolve a method against an interface owner (JVMS §5.4.3.4).
///
/// Search order: the interface's own declarations, the public instance methods
/// of `java/lang/Object`, then the maximally-specific superinterface method
/// with the same tie-breaking as class resolution.
///
/// # Errors
/// Propagates genuine resolver faults. Ordinary resolution failures of
/// ancestors are collected in [`MethodResolution::unresolved`].
pub fn resolve_interface_method(
    owner: &ClassRc,
    name: &str,
    descriptor: &str,
    resolver: &dyn ClassResolver,
) -> Result<MethodResolution> {
    let mut resolution = MethodResolution {
        searched: vec![owner.name.clone()],
        ..MethodResolution::default()
    };

    if let Some(method) = owner.declared_method(name, descriptor) {
        resolution.method = Some(ResolvedMethod {
            class: owner.clone(),
            method: method.clone(),
        });
        return Ok(resolution);
    }

    match resolver.resolve(OBJECT)? {
        ResolutionOutcome::Found(object) => {
            extend_searched(&mut resolution.searched, vec![object.name.clone()]);
            if let Some(method) = object.declared_method(name, descriptor) {
                if method.is_public() && !method.is_static() {
                    resolution.method = Some(ResolvedMethod {
                        class: object.clone(),
                        method: method.clone(),
                    });
                    return Ok(resolution);
                }
            }
        }
        ResolutionOutcome::External => {}
        outcome => {
            if let Some(failure) = outcome.failure() {
                resolution.unresolved.push(UnresolvedAncestor {
                    name: OBJECT.to_string(),
                    failure,
                });
            }
        }
    }

    let interfaces = collect_superinterfaces(owner, resolver, &mut resolution)?;
    resolution.method = select_interface_candidate(&interfaces, name, descriptor, resolver)?;
    Ok(resolution)
}

/// All superinterfaces of `owner` in traversal order, through superclasses too.
fn collect_superinterfaces(
    owner: &ClassRc,
    resolver: &dyn ClassResolver,
    resolution: &mut MethodResolution,
) -> Result<Vec<ClassRc>> {
    let mut interfaces = Vec::new();
    let walk = walk_ancestors(owner, resolver, true, |ancestor| {
        if ancestor.is_interface() {
            interfaces.push(ancestor.clone());
        }
        true
    })?;
    extend_searched(&mut resolution.searched, walk.visited);
    // The superclass chain may have been walked already; report each broken
    // link once.
    for unresolved in walk.unresolved {
        if !resolution.unresolved.contains(&unresolved) {
            resolution.unresolved.push(unresolved);
        }
    }
    Ok(interfaces)
}

/// The maximally-specific superinterface method, if any candidate exists.
fn select_interface_candidate(
    interfaces: &[ClassRc],
    name: &str,
    descriptor: &str,
    resolver: &dyn ClassResolver,
) -> Result<Option<ResolvedMethod>> {
    let mut candidates: Vec<ResolvedMethod> = Vec::new();
    for interface in interfaces {
        if let Some(method) = interface.declared_method(name, descriptor) {
            // Private and static superinterface methods are invisible to this
            // step of resolution.
            if !method.is_private() && !method.is_static() {
                candidates.push(ResolvedMethod {
                    class: interface.clone(),
                    method: method.clone(),
                });
            }
        }
    }
    if candidates.is_empty() {
        return Ok(None);
    }

    // A candidate is maximally specific when no other candidate's interface
    // extends its interface.
    let mut maximal: Vec<&ResolvedMethod> = Vec::new();
    'outer: for candidate in &candidates {
        for other in &candidates {
            if other.class.name != candidate.class.name
                && is_subinterface_of(&other.class, &candidate.class.name, resolver)?
            {
                continue 'outer;
            }
        }
        maximal.push(candidate);
    }

    let non_abstract: Vec<&&ResolvedMethod> = maximal
        .iter()
        .filter(|candidate| !candidate.method.is_abstract())
        .collect();
    if non_abstract.len() == 1 {
        return Ok(Some((*non_abstract[0]).clone()));
    }

    // Several (or zero) non-abstract maximal candidates: any is a valid pick,
    // traversal order keeps it deterministic. A cyclic interface graph can
    // leave `maximal` empty; fall back to the first candidate.
    Ok(maximal
        .first()
        .copied()
        .cloned()
        .or_else(|| candidates.first().cloned()))
}

fn extend_searched(searched: &mut Vec<String>, names: Vec<String>) {
    for name in names {
        if !searched.contains(&name) {
            searched.push(name);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::{ClassMetadataBuilder, MethodAccessFlags, MethodMetadata};
    use crate::resolver::InMemoryResolver;
    use crate::test::{create_object_class, lookup_class};

    #[test]
    fn test_own_declaration_wins_regardless_of_flags() {
        let resolver = InMemoryResolver::new();
        resolver.add(create_object_class());
        resolver.add(
            ClassMetadataBuilder::new("m/Own")
                .method(MethodMetadata::new(
                    "run",
                    "()V",
                    MethodAccessFlags::PRIVATE | MethodAccessFlags::STATIC,
                ))
                .build(),
        );

        let own = lookup_class(&resolver, "m/Own");
        let resolution = resolve_class_method(&own, "run", "()V", &resolver).unwrap();
        let resolved = resolution.method.unwrap();
        assert_eq!(resolved.class.name, "m/Own");
        assert!(resolved.method.is_private());
        assert_eq!(resolution.searched, vec!["m/Own"]);
    }

    #[test]
    fn test_superclass_beats_interface_default() {
        let resolver = InMemoryResolver::new();
        resolver.add(create_object_class());
        resolver.add(
            ClassMetadataBuilder::new("m/Api")
                .interface()
                .method(MethodMetadata::new("run", "()V", MethodAccessFlags::PUBLIC))
                .build(),
        );
        resolver.add(
            ClassMetadataBuilder::new("m/Base")
                .method(MethodMetadata::new("run", "()V", MethodAccessFlags::PUBLIC))
                .build(),
        );
        resolver.add(
            ClassMetadataBuilder::new("m/Child")
                .extends("m/Base")
                .implements("m/Api")
                .build(),
        );

        let child = lookup_class(&resolver, "m/Child");
        let resolution = resolve_class_method(&child, "run", "()V", &resolver).unwrap();
        assert_eq!(resolution.method.unwrap().class.name, "m/Base");
    }

    #[test]
    fn test_most_specific_default_method_wins() {
        let resolver = InMemoryResolver::new();
        resolver.add(create_object_class());
        resolver.add(
            ClassMetadataBuilder::new("m/Upper")
                .interface()
                .method(MethodMetadata::new("get", "()I", MethodAccessFlags::PUBLIC))
                .build(),
        );
        resolver.add(
            ClassMetadataBuilder::new("m/Lower")
                .interface()
                .implements("m/Upper")
                .method(MethodMetadata::new("get", "()I", MethodAccessFlags::PUBLIC))
                .build(),
        );
        resolver.add(
            ClassMetadataBuilder::new("m/Impl")
                .implements("m/Upper")
                .implements("m/Lower")
                .build(),
        );

        let impl_class = lookup_class(&resolver, "m/Impl");
        let resolution = resolve_class_method(&impl_class, "get", "()I", &resolver).unwrap();
        assert_eq!(resolution.method.unwrap().class.name, "m/Lower");
    }

    #[test]
    fn test_unrelated_abstract_candidates_pick_deterministically() {
        let resolver = InMemoryResolver::new();
        resolver.add(create_object_class());
        resolver.add(
            ClassMetadataBuilder::new("m/First")
                .interface()
                .method(MethodMetadata::new(
                    "get",
                    "()I",
                    MethodAccessFlags::PUBLIC | MethodAccessFlags::ABSTRACT,
                ))
                .build(),
        );
        resolver.add(
            ClassMetadataBuilder::new("m/Second")
                .interface()
                .method(MethodMetadata::new(
                    "get",
                    "()I",
                    MethodAccessFlags::PUBLIC | MethodAccessFlags::ABSTRACT,
                ))
                .build(),
        );
        resolver.add(
            ClassMetadataBuilder::new("m/Impl")
                .implements("m/First")
                .implements("m/Second")
                .build(),
        );

        let impl_class = lookup_class(&resolver, "m/Impl");
        let resolution = resolve_class_method(&impl_class, "get", "()I", &resolver).unwrap();
        assert_eq!(resolution.method.unwrap().class.name, "m/First");
    }

    #[test]
    fn test_private_and_static_interface_methods_are_ignored() {
        let resolver = InMemoryResolver::new();
        resolver.add(create_object_class());
        resolver.add(
            ClassMetadataBuilder::new("m/Api")
                .interface()
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
        resolver.add(ClassMetadataBuilder::new("m/Impl").implements("m/Api").build());

        let impl_class = lookup_class(&resolver, "m/Impl");
        assert!(resolve_class_method(&impl_class, "helper", "()V", &resolver)
            .unwrap()
            .method
            .is_none());
        assert!(resolve_class_method(&impl_class, "create", "()V", &resolver)
            .unwrap()
            .method
            .is_none());
    }

    #[test]
    fn test_not_found_carries_searched_hierarchy() {
        let resolver = InMemoryResolver::new();
        resolver.add(create_object_class());
        resolver.add(ClassMetadataBuilder::new("m/Base").build());
        resolver.add(
            ClassMetadataBuilder::new("m/Child")
                .extends("m/Base")
                .implements("m/Api")
                .build(),
        );

        let child = lookup_class(&resolver, "m/Child");
        let resolution = resolve_class_method(&child, "gone", "()V", &resolver).unwrap();
        assert!(resolution.method.is_none());
        assert_eq!(
            resolution.searched,
            vec!["m/Child", "m/Base", "java/lang/Object"]
        );
        assert_eq!(resolution.unresolved.len(), 1);
        assert_eq!(resolution.unresolved[0].name, "m/Api");
    }

    #[test]
    fn test_interface_resolution_reaches_object_methods() {
        let resolver = InMemoryResolver::new();
        resolver.add(create_object_class());
        resolver.add(ClassMetadataBuilder::new("m/Api").interface().build());

        let api = lookup_class(&resolver, "m/Api");
        let resolution =
            resolve_interface_method(&api, "toString", "()Ljava/lang/String;", &resolver)
                .unwrap();
        assert_eq!(resolution.method.unwrap().class.name, OBJECT);

        // Non-public Object methods are not inherited into interfaces.
        let resolution =
            resolve_interface_method(&api, "registerNatives", "()V", &resolver).unwrap();
        assert!(resolution.method.is_none());
    }

    #[test]
    fn test_interface_resolution_prefers_own_declaration() {
        let resolver = InMemoryResolver::new();
        resolver.add(create_object_class());
        resolver.add(
            ClassMetadataBuilder::new("m/Parent")
                .interface()
                .method(MethodMetadata::new("get", "()I", MethodAccessFlags::PUBLIC))
                .build(),
        );
        resolver.add(
            ClassMetadataBuilder::new("m/Api")
                .interface()
                .implements("m/Parent")
                .method(MethodMetadata::new(
                    "get",
                    "()I",
                    MethodAccessFlags::PUBLIC | MethodAccessFlags::ABSTRACT,
                ))
                .build(),
        );

        let api = lookup_class(&resolver, "m/Api");
        let resolution = resolve_interface_method(&api, "get", "()I", &resolver).unwrap();
        assert_eq!(resolution.method.unwrap().class.name, "m/Api");
    }
}
