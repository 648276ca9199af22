//! Method invocation verifier (`invokevirtual`, `invokespecial`,
//! `invokeinterface`, `invokestatic`).

use crate::{
    hierarchy::is_subclass_of,
    linkage::{check_member_access, resolve_class_method, resolve_interface_method, ResolvedMethod},
    metadata::{
        ClassAccessFlags, ClassRc, Instruction, InstructionFamily, InvokeOpcode, Location,
        MemberAccess, MethodMetadata, MethodReference,
    },
    problems::CompatibilityProblem,
    verification::{instructions::InstructionVerifier, VerificationContext},
    Result,
};

/// Verifier for the invocation family.
pub(crate) struct InvocationVerifier;

impl InstructionVerifier for InvocationVerifier {
    fn family(&self) -> InstructionFamily {
        InstructionFamily::Invoke
    }

    fn verify(
        &self,
        class: &ClassRc,
        method: &MethodMetadata,
        instruction: &Instruction,
        context: &VerificationContext,
    ) -> Result<()> {
        let Instruction::Invoke { opcode, reference } = instruction else {
            return Ok(());
        };
        let usage = method.location();
        let usage_location = Location::Method(usage.clone());

        let Some(owner) = context.resolve_dependency(&reference.class_name, &usage_location)?
        else {
            return Ok(());
        };

        // A reference whose owner changed kind cannot be resolved with either
        // lookup variant; report the kind change and stop.
        if reference.interface_ref != owner.is_interface() {
            context.report(if owner.is_interface() {
                CompatibilityProblem::ClassBecameInterface {
                    class_name: owner.name.clone(),
                    usage: usage_location,
                }
            } else {
                CompatibilityProblem::InterfaceBecameClass {
                    class_name: owner.name.clone(),
                    usage: usage_location,
                }
            });
            return Ok(());
        }

        let resolution = if owner.is_interface() {
            resolve_interface_method(&owner, &reference.name, &reference.descriptor, context.resolver())?
        } else {
            resolve_class_method(&owner, &reference.name, &reference.descriptor, context.resolver())?
        };
        context.report_unresolved(&resolution.unresolved, &usage_location);

        let Some(resolved) = resolution.method else {
            context.report(CompatibilityProblem::MethodNotFound {
                reference: reference.clone(),
                usage,
                searched: resolution.searched,
            });
            return Ok(());
        };

        let method_location = resolved.method.location();
        context.record_markers(
            &resolved.method.markers,
            Location::Method(method_location.clone()),
            &usage_location,
        );

        if *opcode == InvokeOpcode::Static {
            if !resolved.method.is_static() {
                context.report(CompatibilityProblem::InvokeStaticInstructionOnInstanceMethod {
                    method: method_location.clone(),
                    usage: usage.clone(),
                });
            }
        } else if resolved.method.is_static() {
            context.report(CompatibilityProblem::InvokeInstanceInstructionOnStaticMethod {
                method: method_location.clone(),
                opcode: *opcode,
                usage: usage.clone(),
            });
        }

        let interface_on_private =
            *opcode == InvokeOpcode::Interface && resolved.method.is_private();
        if interface_on_private {
            context.report(CompatibilityProblem::InvokeInterfaceOnPrivateMethod {
                method: method_location.clone(),
                usage: usage.clone(),
            });
        }

        // The dedicated problem above already names the visibility; skip the
        // generic access check when it fired.
        let access = resolved.method.member_access();
        if access != MemberAccess::Public && !interface_on_private {
            if let Some(violated) = check_member_access(
                class,
                &resolved.class,
                &owner,
                access,
                resolved.method.is_static(),
                context.resolver(),
            )? {
                context.report(CompatibilityProblem::IllegalMethodAccess {
                    method: method_location.clone(),
                    access: violated,
                    usage: usage.clone(),
                });
            }
        }

        if *opcode == InvokeOpcode::Special {
            let selected = select_special_target(class, &owner, reference, &resolved, context)?;
            if selected.method.is_abstract() && !(method.is_synthetic() && method.is_bridge()) {
                context.report(CompatibilityProblem::AbstractMethodInvocation {
                    method: selected.method.location(),
                    usage,
                });
            }
        }

        Ok(())
    }
}

/// The method `invokespecial` would actually select (JVMS §6.5).
///
/// When the reference names a proper superclass of the caller, the call is not
/// an `<init>`, and the caller carries `ACC_SUPER`, selection restarts from the
/// caller's direct superclass instead of the named owner. When that lookup
/// yields nothing the resolved method stands.
fn select_special_target(
    caller: &ClassRc,
    owner: &ClassRc,
    reference: &MethodReference,
    resolved: &ResolvedMethod,
    context: &VerificationContext,
) -> Result<ResolvedMethod> {
    let superclass_dispatch = reference.name != "<init>"
        && !owner.is_interface()
        && caller.access.contains(ClassAccessFlags::SUPER)
        && is_subclass_of(caller, &owner.name, context.resolver())?;
    if !superclass_dispatch {
        return Ok(resolved.clone());
    }

    let Some(super_name) = &caller.super_name else {
        return Ok(resolved.clone());
    };
    let Some(super_class) = context.resolver().resolve(super_name)?.found().cloned() else {
        // The caller's broken superclass is reported by the class-level pass.
        return Ok(resolved.clone());
    };

    let resolution =
        resolve_class_method(&super_class, &reference.name, &reference.descriptor, context.resolver())?;
    Ok(resolution.method.unwrap_or_else(|| resolved.clone()))
}
