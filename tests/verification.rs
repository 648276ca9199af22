//! End-to-end verification runs over staged class sets.
//!
//! Each test plays out a release scenario - a library changed underneath an
//! application that was compiled against the old version - and checks the
//! engine's findings through the public API only: stage both sides in a
//! resolver, verify the application, read the reporter.

use linkscope::{prelude::*, Result};
use std::sync::Arc;

fn object() -> ClassRc {
    ClassMetadataBuilder::new("java/lang/Object")
        .no_superclass()
        .method(MethodMetadata::new(
            "toString",
            "()Ljava/lang/String;",
            MethodAccessFlags::PUBLIC,
        ))
        .build()
}

fn run(resolver: InMemoryResolver, classes: &[&str]) -> Result<VerificationContext> {
    let engine = VerificationEngine::new(VerificationContext::new(Arc::new(resolver)));
    engine.verify(classes.iter().copied(), |_| {})?;
    Ok(engine.into_context())
}

/// The classic upgrade break. The application was compiled against:
///
/// ```java
/// public class Service { public void process(String s) {} }
/// public class Config  { public int limit; }
/// public class Handler {}
/// ```
///
/// and now runs against a release where `process` lost its parameter,
/// `limit` became static, and `Handler` became abstract. Every latent
/// runtime error shows up, and nothing else does.
#[test]
fn test_library_upgrade_surfaces_every_latent_error() -> Result<()> {
    let resolver = InMemoryResolver::new();
    resolver.add(object());
    resolver.add(
        ClassMetadataBuilder::new("lib/Service")
            .method(MethodMetadata::new("process", "()V", MethodAccessFlags::PUBLIC))
            .build(),
    );
    resolver.add(
        ClassMetadataBuilder::new("lib/Config")
            .field(FieldMetadata::new(
                "limit",
                "I",
                FieldAccessFlags::PUBLIC | FieldAccessFlags::STATIC,
            ))
            .build(),
    );
    resolver.add(
        ClassMetadataBuilder::new("lib/Handler")
            .abstract_class()
            .build(),
    );
    resolver.add(
        ClassMetadataBuilder::new("app/Main")
            .method(
                MethodMetadata::new("run", "()V", MethodAccessFlags::PUBLIC)
                    .with_instruction(Instruction::Invoke {
                        opcode: InvokeOpcode::Virtual,
                        reference: MethodReference::to_class(
                            "lib/Service",
                            "process",
                            "(Ljava/lang/String;)V",
                        ),
                    })
                    .with_instruction(Instruction::Field {
                        opcode: FieldOpcode::GetField,
                        reference: FieldReference::new("lib/Config", "limit", "I"),
                    })
                    .with_instruction(Instruction::Type {
                        opcode: TypeOpcode::New,
                        reference: TypeReference::new("lib/Handler"),
                    }),
            )
            .build(),
    );

    let context = run(resolver, &["app/Main"])?;
    let problems = context.reporter().problems();

    let mut kinds: Vec<ProblemKind> = problems.iter().map(CompatibilityProblem::kind).collect();
    kinds.sort();
    let mut expected = vec![
        ProblemKind::MethodNotFound,
        ProblemKind::InstanceAccessOfStaticField,
        ProblemKind::AbstractClassInstantiation,
    ];
    expected.sort();
    assert_eq!(kinds, expected);
    Ok(())
}

/// A method that was an instance method when the caller was compiled is now
/// `private static`. Resolution still finds it, so the only finding is the
/// opcode mismatch - never a method-not-found.
#[test]
fn test_invokevirtual_on_private_static_is_exactly_one_problem() -> Result<()> {
    let resolver = InMemoryResolver::new();
    resolver.add(object());
    resolver.add(
        ClassMetadataBuilder::new("app/Main")
            .method(
                MethodMetadata::new("run", "()V", MethodAccessFlags::PUBLIC).with_instruction(
                    Instruction::Invoke {
                        opcode: InvokeOpcode::Virtual,
                        reference: MethodReference::to_class("app/Main", "helper", "()V"),
                    },
                ),
            )
            .method(MethodMetadata::new(
                "helper",
                "()V",
                MethodAccessFlags::PRIVATE | MethodAccessFlags::STATIC,
            ))
            .build(),
    );

    let context = run(resolver, &["app/Main"])?;
    let problems = context.reporter().problems();

    assert_eq!(problems.len(), 1);
    match &problems[0] {
        CompatibilityProblem::InvokeInstanceInstructionOnStaticMethod { method, opcode, .. } => {
            assert_eq!(method.class_name, "app/Main");
            assert_eq!(method.method_name, "helper");
            assert_eq!(*opcode, InvokeOpcode::Virtual);
        }
        other => panic!("expected the opcode mismatch, got {other:?}"),
    }
    Ok(())
}

/// `new` against types that can no longer be instantiated: one finding per
/// target, nothing spurious.
#[test]
fn test_instantiation_of_interface_and_abstract_class() -> Result<()> {
    let resolver = InMemoryResolver::new();
    resolver.add(object());
    resolver.add(ClassMetadataBuilder::new("lib/Codec").interface().build());
    resolver.add(
        ClassMetadataBuilder::new("lib/Renderer")
            .abstract_class()
            .build(),
    );
    resolver.add(
        ClassMetadataBuilder::new("app/Main")
            .method(
                MethodMetadata::new("run", "()V", MethodAccessFlags::PUBLIC)
                    .with_instruction(Instruction::Type {
                        opcode: TypeOpcode::New,
                        reference: TypeReference::new("lib/Codec"),
                    })
                    .with_instruction(Instruction::Type {
                        opcode: TypeOpcode::New,
                        reference: TypeReference::new("lib/Renderer"),
                    }),
            )
            .build(),
    );

    let context = run(resolver, &["app/Main"])?;
    let problems = context.reporter().problems();

    assert_eq!(problems.len(), 2);
    assert!(problems.iter().any(|problem| matches!(
        problem,
        CompatibilityProblem::InterfaceInstantiation { interface, .. } if interface == "lib/Codec"
    )));
    assert!(problems.iter().any(|problem| matches!(
        problem,
        CompatibilityProblem::AbstractClassInstantiation { class_name, .. }
            if class_name == "lib/Renderer"
    )));
    Ok(())
}

/// `getfield` through a subclass reference reaching a field the superclass
/// made static: the mismatch names the superclass declaration, and no
/// field-not-found is raised along the way.
#[test]
fn test_getfield_of_static_superclass_field() -> Result<()> {
    let resolver = InMemoryResolver::new();
    resolver.add(object());
    resolver.add(
        ClassMetadataBuilder::new("lib/Base")
            .field(FieldMetadata::new(
                "count",
                "I",
                FieldAccessFlags::PUBLIC | FieldAccessFlags::STATIC,
            ))
            .build(),
    );
    resolver.add(ClassMetadataBuilder::new("lib/Derived").extends("lib/Base").build());
    resolver.add(
        ClassMetadataBuilder::new("app/Main")
            .method(
                MethodMetadata::new("run", "()V", MethodAccessFlags::PUBLIC).with_instruction(
                    Instruction::Field {
                        opcode: FieldOpcode::GetField,
                        reference: FieldReference::new("lib/Derived", "count", "I"),
                    },
                ),
            )
            .build(),
    );

    let context = run(resolver, &["app/Main"])?;
    let problems = context.reporter().problems();

    assert_eq!(problems.len(), 1);
    match &problems[0] {
        CompatibilityProblem::InstanceAccessOfStaticField { field, .. } => {
            assert_eq!(field.class_name, "lib/Base");
            assert_eq!(field.field_name, "count");
        }
        other => panic!("expected the staticness mismatch, got {other:?}"),
    }
    Ok(())
}

/// Two runs over the same resolver produce value-equal findings in the same
/// order. This is what makes the engine usable as a CI gate: a diff of two
/// reports means the code changed, not the run.
#[test]
fn test_repeated_runs_are_value_equal() -> Result<()> {
    fn stage() -> InMemoryResolver {
        let resolver = InMemoryResolver::new();
        resolver.add(object());
        resolver.add(ClassMetadataBuilder::new("lib/Gone").abstract_class().build());
        resolver.add(
            ClassMetadataBuilder::new("app/Main")
                .method(
                    MethodMetadata::new("run", "()V", MethodAccessFlags::PUBLIC)
                        .with_instruction(Instruction::Type {
                            opcode: TypeOpcode::New,
                            reference: TypeReference::new("lib/Gone"),
                        })
                        .with_instruction(Instruction::Invoke {
                            opcode: InvokeOpcode::Virtual,
                            reference: MethodReference::to_class("lib/Missing", "call", "()V"),
                        }),
                )
                .method(
                    MethodMetadata::new("tick", "()V", MethodAccessFlags::PUBLIC)
                        .with_instruction(Instruction::Field {
                            opcode: FieldOpcode::GetStatic,
                            reference: FieldReference::new("lib/Missing", "FLAG", "Z"),
                        }),
                )
                .build(),
        );
        resolver
    }

    let first = run(stage(), &["app/Main"])?;
    let second = run(stage(), &["app/Main"])?;

    assert_eq!(first.reporter().problems(), second.reporter().problems());
    assert_eq!(first.reporter().usages(), second.reporter().usages());
    assert!(!first.reporter().is_empty());
    Ok(())
}

/// Identical findings collapse; distinct call sites stay distinct. One method
/// hitting the same broken reference twice yields one record, a second method
/// hitting it yields a second.
#[test]
fn test_finding_identity_is_per_call_site() -> Result<()> {
    let broken = || Instruction::Invoke {
        opcode: InvokeOpcode::Virtual,
        reference: MethodReference::to_class("lib/Missing", "call", "()V"),
    };
    let resolver = InMemoryResolver::new();
    resolver.add(object());
    resolver.add(
        ClassMetadataBuilder::new("app/Main")
            .method(
                MethodMetadata::new("run", "()V", MethodAccessFlags::PUBLIC)
                    .with_instruction(broken())
                    .with_instruction(broken()),
            )
            .method(
                MethodMetadata::new("tick", "()V", MethodAccessFlags::PUBLIC)
                    .with_instruction(broken()),
            )
            .build(),
    );

    let context = run(resolver, &["app/Main"])?;
    let problems = context.reporter().problems();

    assert_eq!(problems.len(), 2);
    assert!(problems
        .iter()
        .all(|problem| problem.kind() == ProblemKind::ClassNotFound));
    let mut sites: Vec<&str> = problems
        .iter()
        .map(|problem| match problem {
            CompatibilityProblem::ClassNotFound { usage, .. } => usage.class_name(),
            other => panic!("expected ClassNotFound, got {other:?}"),
        })
        .collect();
    sites.dedup();
    assert_eq!(sites, vec!["app/Main"]);
    Ok(())
}

/// A resolved member's location restates the reference that found it: same
/// name, same descriptor, declaring class filled in.
#[test]
fn test_resolved_location_agrees_with_reference() -> Result<()> {
    let resolver = InMemoryResolver::new();
    resolver.add(object());
    resolver.add(
        ClassMetadataBuilder::new("lib/Codec")
            .method(MethodMetadata::new(
                "encode",
                "([B)Ljava/lang/String;",
                MethodAccessFlags::PUBLIC,
            ))
            .field(FieldMetadata::new(
                "CHARSET",
                "Ljava/lang/String;",
                FieldAccessFlags::PUBLIC | FieldAccessFlags::STATIC | FieldAccessFlags::FINAL,
            ))
            .build(),
    );
    let codec = resolver
        .resolve("lib/Codec")?
        .found()
        .expect("class staged")
        .clone();

    let reference = MethodReference::to_class("lib/Codec", "encode", "([B)Ljava/lang/String;");
    let resolution =
        resolve_class_method(&codec, &reference.name, &reference.descriptor, &resolver)?;
    let location = resolution.method.expect("resolves").method.location();
    assert_eq!(location.class_name, reference.class_name);
    assert_eq!(location.method_name, reference.name);
    assert_eq!(location.descriptor, reference.descriptor);

    let reference = FieldReference::new("lib/Codec", "CHARSET", "Ljava/lang/String;");
    let resolution = resolve_field(&codec, &reference.name, &reference.descriptor, &resolver)?;
    let location = resolution.field.expect("resolves").field.location();
    assert_eq!(location.class_name, reference.class_name);
    assert_eq!(location.field_name, reference.name);
    assert_eq!(location.descriptor, reference.descriptor);
    Ok(())
}

/// The usage side-channel obeys the configuration; the problem channel does
/// not. A run with `problems_only` still reports every linkage break but
/// stays silent about deprecated API.
#[test]
fn test_usage_collection_follows_configuration() -> Result<()> {
    fn stage() -> InMemoryResolver {
        let resolver = InMemoryResolver::new();
        resolver.add(object());
        resolver.add(
            ClassMetadataBuilder::new("lib/Util")
                .method(
                    MethodMetadata::new("legacy", "()V", MethodAccessFlags::PUBLIC)
                        .with_markers(ApiMarkers::deprecated(true)),
                )
                .method(
                    MethodMetadata::new("preview", "()V", MethodAccessFlags::PUBLIC)
                        .with_markers(ApiMarkers::experimental()),
                )
                .build(),
        );
        resolver.add(
            ClassMetadataBuilder::new("app/Main")
                .method(
                    MethodMetadata::new("run", "()V", MethodAccessFlags::PUBLIC)
                        .with_instruction(Instruction::Invoke {
                            opcode: InvokeOpcode::Virtual,
                            reference: MethodReference::to_class("lib/Util", "legacy", "()V"),
                        })
                        .with_instruction(Instruction::Invoke {
                            opcode: InvokeOpcode::Virtual,
                            reference: MethodReference::to_class("lib/Util", "preview", "()V"),
                        })
                        .with_instruction(Instruction::Invoke {
                            opcode: InvokeOpcode::Virtual,
                            reference: MethodReference::to_class("lib/Util", "gone", "()V"),
                        }),
                )
                .build(),
        );
        resolver
    }

    let engine = VerificationEngine::new(VerificationContext::with_config(
        Arc::new(stage()),
        VerificationConfig::full(),
    ));
    engine.verify(["app/Main"], |_| {})?;
    let full = engine.into_context();
    assert_eq!(full.reporter().problem_count(), 1);
    let kinds: Vec<ApiUsageKind> = full
        .reporter()
        .usages()
        .iter()
        .map(|usage| usage.kind)
        .collect();
    assert_eq!(
        kinds,
        vec![ApiUsageKind::ScheduledForRemoval, ApiUsageKind::Experimental]
    );

    let engine = VerificationEngine::new(VerificationContext::with_config(
        Arc::new(stage()),
        VerificationConfig::problems_only(),
    ));
    engine.verify(["app/Main"], |_| {})?;
    let lean = engine.into_context();
    assert_eq!(lean.reporter().problem_count(), 1);
    assert_eq!(lean.reporter().usage_count(), 0);
    Ok(())
}

/// Only the requested set is verified: a broken class that is merely on the
/// classpath contributes no findings until something reachable touches it.
#[test]
fn test_only_requested_classes_are_verified() -> Result<()> {
    let resolver = InMemoryResolver::new();
    resolver.add(object());
    resolver.add(
        ClassMetadataBuilder::new("app/Main")
            .method(MethodMetadata::new("run", "()V", MethodAccessFlags::PUBLIC))
            .build(),
    );
    // Broken, but nobody asked about it and nobody references it.
    resolver.add(
        ClassMetadataBuilder::new("app/Unrelated")
            .method(
                MethodMetadata::new("run", "()V", MethodAccessFlags::PUBLIC).with_instruction(
                    Instruction::Invoke {
                        opcode: InvokeOpcode::Virtual,
                        reference: MethodReference::to_class("lib/Missing", "call", "()V"),
                    },
                ),
            )
            .build(),
    );

    let context = run(resolver, &["app/Main"])?;
    assert!(context.reporter().is_empty());
    Ok(())
}

/// Kind changes are caught at the `extends`/`implements` declarations of the
/// verified class itself, before any instruction is looked at.
#[test]
fn test_hierarchy_kind_changes_reported_at_class_level() -> Result<()> {
    let resolver = InMemoryResolver::new();
    resolver.add(object());
    resolver.add(ClassMetadataBuilder::new("lib/Base").interface().build());
    resolver.add(ClassMetadataBuilder::new("lib/Api").build());
    resolver.add(
        ClassMetadataBuilder::new("app/Plugin")
            .extends("lib/Base")
            .implements("lib/Api")
            .build(),
    );

    let context = run(resolver, &["app/Plugin"])?;
    let problems = context.reporter().problems();

    let mut kinds: Vec<ProblemKind> = problems.iter().map(CompatibilityProblem::kind).collect();
    kinds.sort();
    let mut expected = vec![
        ProblemKind::SuperClassBecameInterface,
        ProblemKind::InterfaceBecameClass,
    ];
    expected.sort();
    assert_eq!(kinds, expected);
    Ok(())
}
