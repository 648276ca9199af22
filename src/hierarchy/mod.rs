//! Cycle-safe traversal of class hierarchies.
//!
//! Everything that needs to look upward - member resolution, access control,
//! override detection, the class-level checks of the driver - goes through
//! [`walk_ancestors`]. The walker is breadth-per-branch: each visited node
//! contributes its direct superclass and (optionally) its direct interfaces
//! before deeper levels are touched. A visited-name set makes it terminate on
//! cyclic and diamond-shaped graphs, visiting every ancestor at most once; the
//! class under traversal itself is never visited.
//!
//! Ancestors that fail to resolve are skipped, not swallowed: they come back in
//! [`HierarchyWalk::unresolved`] so the initiator of the walk can report them.
//!
//! # Key Components
//!
//! - [`walk_ancestors`] - the traversal primitive
//! - [`HierarchyWalk`] - visit order and unresolved ancestors of one walk
//! - [`is_subclass_of`] / [`is_subinterface_of`] - assignability helpers
//! - [`find_overridden_method`] / [`is_overriding`] - override detection
//!
//! # Examples
//!
//! ```rust
//! use linkscope::hierarchy::walk_ancestors;
//! use linkscope::metadata::ClassMetadataBuilder;
//! use linkscope::resolver::{ClassResolver, InMemoryResolver};
//!
//! let resolver = InMemoryResolver::new();
//! resolver.add(ClassMetadataBuilder::new("com/example/Base").build());
//! resolver.add(
//!     ClassMetadataBuilder::new("com/example/Child")
//!         .extends("com/example/Base")
//!         .build(),
//! );
//! resolver.add(ClassMetadataBuilder::new("java/lang/Object").no_superclass().build());
//!
//! let child = resolver.resolve("com/example/Child")?.found().unwrap().clone();
//! let walk = walk_ancestors(&child, &resolver, true, |_| true)?;
//! assert_eq!(walk.visited, vec!["com/example/Base", "java/lang/Object"]);
//! # Ok::<(), linkscope::Error>(())
//! ```

mod overrides;

pub use overrides::{find_overridden_method, is_overriding};

use std::collections::{HashSet, VecDeque};

use crate::{
    metadata::ClassMetadata,
    resolver::{ClassResolver, ResolutionFailure, ResolutionOutcome},
    Result,
};

/// An ancestor that could not be resolved during a walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnresolvedAncestor {
    /// The binary name the hierarchy referenced
    pub name: String,
    /// Why resolution failed
    pub failure: ResolutionFailure,
}

/// What one hierarchy walk saw.
#[derive(Debug, Default)]
pub struct HierarchyWalk {
    /// Names of the ancestors actually visited, in visit order. This is the
    /// "searched hierarchy" hint not-found problems carry.
    pub visited: Vec<String>,
    /// Ancestors the hierarchy referenced but the resolver could not produce.
    /// External ancestors appear in neither list; they end the branch silently.
    pub unresolved: Vec<UnresolvedAncestor>,
}

/// Walk the ancestors of `class`, visiting each resolved one at most once.
///
/// `visit` is called per resolved ancestor and returns whether to descend past
/// that node; returning `false` prunes the branch but lets already-queued
/// branches finish, so a caller that found what it wanted keeps returning
/// `false` and the walk drains immediately. With `include_interfaces` unset only
/// the superclass chain is walked.
///
/// # Errors
/// Propagates genuine resolver faults. Ordinary resolution failures are
/// collected in [`HierarchyWalk::unresolved`] instead.
pub fn walk_ancestors<F>(
    class: &ClassMetadata,
    resolver: &dyn ClassResolver,
    include_interfaces: bool,
    mut visit: F,
) -> Result<HierarchyWalk>
where
    F: FnMut(&crate::metadata::ClassRc) -> bool,
{
    let mut walk = HierarchyWalk::default();
    let mut seen: HashSet<String> = HashSet::new();
    seen.insert(class.name.clone());

    let mut queue: VecDeque<String> = VecDeque::new();
    enqueue_parents(class, include_interfaces, &mut seen, &mut queue);

    while let Some(name) = queue.pop_front() {
        match resolver.resolve(&name)? {
            ResolutionOutcome::Found(ancestor) => {
                walk.visited.push(name);
                if visit(&ancestor) {
                    enqueue_parents(&ancestor, include_interfaces, &mut seen, &mut queue);
                }
            }
            ResolutionOutcome::External => {}
            outcome => {
                if let Some(failure) = outcome.failure() {
                    walk.unresolved.push(UnresolvedAncestor { name, failure });
                }
            }
        }
    }

    Ok(walk)
}

/// True if `super_name` appears in the proper superclass chain of `class`.
///
/// Interfaces are not consulted; the class itself does not count.
///
/// # Errors
/// Propagates genuine resolver faults.
pub fn is_subclass_of(
    class: &ClassMetadata,
    super_name: &str,
    resolver: &dyn ClassResolver,
) -> Result<bool> {
    let mut found = false;
    walk_ancestors(class, resolver, false, |ancestor| {
        if ancestor.name == super_name {
            found = true;
        }
        !found
    })?;
    Ok(found)
}

/// True if `interface` transitively extends the interface named `other`.
///
/// The interface itself does not count. Used for the maximally-specific
/// comparison during interface method resolution.
///
/// # Errors
/// Propagates genuine resolver faults.
pub fn is_subinterface_of(
    interface: &ClassMetadata,
    other: &str,
    resolver: &dyn ClassResolver,
) -> Result<bool> {
    let mut found = false;
    walk_ancestors(interface, resolver, true, |ancestor| {
        if ancestor.is_interface() && ancestor.name == other {
            found = true;
        }
        !found
    })?;
    Ok(found)
}

fn enqueue_parents(
    class: &ClassMetadata,
    include_interfaces: bool,
    seen: &mut HashSet<String>,
    queue: &mut VecDeque<String>,
) {
    if let Some(super_name) = &class.super_name {
        if seen.insert(super_name.clone()) {
            queue.push_back(super_name.clone());
        }
    }
    if include_interfaces {
        for interface in &class.interfaces {
            if seen.insert(interface.clone()) {
                queue.push_back(interface.clone());
            }
        }
    }
}
