//! Type instruction verifier (`new`, `anewarray`, `checkcast`, `instanceof`).

use crate::{
    metadata::{ClassRc, Instruction, InstructionFamily, Location, MethodMetadata, TypeOpcode},
    problems::CompatibilityProblem,
    verification::{instructions::InstructionVerifier, VerificationContext},
    Result,
};

/// Verifier for the type instruction family.
///
/// All four opcodes resolve the referenced type to surface resolution
/// failures; `new` additionally rejects targets no constructor call could
/// ever complete on.
pub(crate) struct TypeInstructionVerifier;

impl InstructionVerifier for TypeInstructionVerifier {
    fn family(&self) -> InstructionFamily {
        InstructionFamily::Type
    }

    fn verify(
        &self,
        _class: &ClassRc,
        method: &MethodMetadata,
        instruction: &Instruction,
        context: &VerificationContext,
    ) -> Result<()> {
        let Instruction::Type { opcode, reference } = instruction else {
            return Ok(());
        };
        // Arrays of primitives reference no class at all.
        let Some(object) = reference.object_type() else {
            return Ok(());
        };
        let usage = method.location();
        let usage_location = Location::Method(usage.clone());

        let Some(resolved) = context.resolve_dependency(object, &usage_location)? else {
            return Ok(());
        };

        if *opcode == TypeOpcode::New {
            if resolved.is_interface() {
                context.report(CompatibilityProblem::InterfaceInstantiation {
                    interface: resolved.name.clone(),
                    usage,
                });
            } else if resolved.is_abstract() {
                context.report(CompatibilityProblem::AbstractClassInstantiation {
                    class_name: resolved.name.clone(),
                    usage,
                });
            }
        }

        Ok(())
    }
}
