//! Field resolution (JVMS §5.4.3.2).
//!
//! Lookup is recursive: the owner's own declarations, then its direct
//! superinterfaces recursively, then its superclass recursively. Interfaces
//! come before the superclass - a constant inherited from an interface shadows
//! a superclass field of the same name and descriptor.

use std::collections::HashSet;

use crate::{
    hierarchy::UnresolvedAncestor,
    linkage::{FieldResolution, ResolvedField},
    metadata::ClassRc,
    resolver::{ClassResolver, ResolutionOutcome},
    Result,
};

/// Resolve a field reference against its owner.
///
/// Both name and descriptor must match; a field of the right name but a
/// different type does not resolve, and lookup continues past it. Flags are
/// not consulted - a private superclass field resolves here, and the access
/// verdict is the instruction verifier's.
///
/// # Errors
/// Propagates genuine resolver faults. Ordinary resolution failures of
/// ancestors are collected in [`FieldResolution::unresolved`].
pub fn resolve_field(
    owner: &ClassRc,
    name: &str,
    descriptor: &str,
    resolver: &dyn ClassResolver,
) -> Result<FieldResolution> {
    let mut resolution = FieldResolution::default();
    let mut seen = HashSet::new();
    lookup(owner, name, descriptor, resolver, &mut seen, &mut resolution)?;
    Ok(resolution)
}

fn lookup(
    class: &ClassRc,
    name: &str,
    descriptor: &str,
    resolver: &dyn ClassResolver,
    seen: &mut HashSet<String>,
    resolution: &mut FieldResolution,
) -> Result<bool> {
    // Malformed hierarchies can cycle; a class contributes once.
    if !seen.insert(class.name.clone()) {
        return Ok(false);
    }
    resolution.searched.push(class.name.clone());

    if let Some(field) = class.declared_field(name, descriptor) {
        resolution.field = Some(ResolvedField {
            class: class.clone(),
            field: field.clone(),
        });
        return Ok(true);
    }

    for interface in &class.interfaces {
        if let Some(parent) = resolve_parent(interface, resolver, resolution)? {
            if lookup(&parent, name, descriptor, resolver, seen, resolution)? {
                return Ok(true);
            }
        }
    }

    if let Some(super_name) = &class.super_name {
        if let Some(parent) = resolve_parent(super_name, resolver, resolution)? {
            if lookup(&parent, name, descriptor, resolver, seen, resolution)? {
                return Ok(true);
            }
        }
    }

    Ok(false)
}

fn resolve_parent(
    name: &str,
    resolver: &dyn ClassResolver,
    resolution: &mut FieldResolution,
) -> Result<Option<ClassRc>> {
    match resolver.resolve(name)? {
        ResolutionOutcome::Found(class) => Ok(Some(class)),
        ResolutionOutcome::External => Ok(None),
        outcome => {
            if let Some(failure) = outcome.failure() {
                let entry = UnresolvedAncestor {
                    name: name.to_string(),
                    failure,
                };
                // Diamonds reach the same broken parent twice.
                if !resolution.unresolved.contains(&entry) {
                    resolution.unresolved.push(entry);
                }
            }
            Ok(None)
        }
    }
}
