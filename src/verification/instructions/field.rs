//! Field access verifier (`getstatic`, `putstatic`, `getfield`, `putfield`).

use crate::{
    linkage::{check_member_access, resolve_field},
    metadata::{ClassRc, Instruction, InstructionFamily, Location, MemberAccess, MethodMetadata},
    problems::CompatibilityProblem,
    verification::{instructions::InstructionVerifier, VerificationContext},
    Result,
};

/// Verifier for the field access family.
pub(crate) struct FieldAccessVerifier;

impl InstructionVerifier for FieldAccessVerifier {
    fn family(&self) -> InstructionFamily {
        InstructionFamily::Field
    }

    fn verify(
        &self,
        class: &ClassRc,
        method: &MethodMetadata,
        instruction: &Instruction,
        context: &VerificationContext,
    ) -> Result<()> {
        let Instruction::Field { opcode, reference } = instruction else {
            return Ok(());
        };
        let usage = method.location();
        let usage_location = Location::Method(usage.clone());

        let Some(owner) = context.resolve_dependency(&reference.class_name, &usage_location)?
        else {
            return Ok(());
        };

        let resolution =
            resolve_field(&owner, &reference.name, &reference.descriptor, context.resolver())?;
        context.report_unresolved(&resolution.unresolved, &usage_location);

        let Some(resolved) = resolution.field else {
            context.report(CompatibilityProblem::FieldNotFound {
                reference: reference.clone(),
                usage,
                searched: resolution.searched,
            });
            return Ok(());
        };

        let field_location = resolved.field.location();
        context.record_markers(
            &resolved.field.markers,
            Location::Field(field_location.clone()),
            &usage_location,
        );

        if opcode.expects_static() && !resolved.field.is_static() {
            context.report(CompatibilityProblem::StaticAccessOfInstanceField {
                field: field_location.clone(),
                opcode: *opcode,
                usage: usage.clone(),
            });
        } else if !opcode.expects_static() && resolved.field.is_static() {
            context.report(CompatibilityProblem::InstanceAccessOfStaticField {
                field: field_location.clone(),
                opcode: *opcode,
                usage: usage.clone(),
            });
        }

        if opcode.is_write() && resolved.field.is_final() && resolved.field.class_name != class.name
        {
            context.report(CompatibilityProblem::FinalFieldMutation {
                field: field_location.clone(),
                usage: usage.clone(),
            });
        }

        let access = resolved.field.member_access();
        if access != MemberAccess::Public {
            if let Some(violated) = check_member_access(
                class,
                &resolved.class,
                &owner,
                access,
                resolved.field.is_static(),
                context.resolver(),
            )? {
                context.report(CompatibilityProblem::IllegalFieldAccess {
                    field: field_location,
                    access: violated,
                    usage,
                });
            }
        }

        Ok(())
    }
}
