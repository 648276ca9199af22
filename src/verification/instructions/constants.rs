//! Constant load and `multianewarray` verifiers.
//!
//! Both families carry a bare `CONSTANT_Class` reference and verify nothing
//! beyond its resolution: the class a `ldc` would materialize, or the element
//! type a `multianewarray` would allocate, must still exist.

use crate::{
    metadata::{ClassRc, Instruction, InstructionFamily, Location, MethodMetadata, TypeReference},
    verification::{instructions::InstructionVerifier, VerificationContext},
    Result,
};

/// Verifier for `ldc`/`ldc_w` of class constants.
pub(crate) struct ClassConstantVerifier;

impl InstructionVerifier for ClassConstantVerifier {
    fn family(&self) -> InstructionFamily {
        InstructionFamily::ClassConstant
    }

    fn verify(
        &self,
        _class: &ClassRc,
        method: &MethodMetadata,
        instruction: &Instruction,
        context: &VerificationContext,
    ) -> Result<()> {
        let Instruction::ClassConstant { reference } = instruction else {
            return Ok(());
        };
        resolve_entry(reference, method, context)
    }
}

/// Verifier for `multianewarray`.
pub(crate) struct MultiArrayVerifier;

impl InstructionVerifier for MultiArrayVerifier {
    fn family(&self) -> InstructionFamily {
        InstructionFamily::MultiArray
    }

    fn verify(
        &self,
        _class: &ClassRc,
        method: &MethodMetadata,
        instruction: &Instruction,
        context: &VerificationContext,
    ) -> Result<()> {
        let Instruction::MultiArray { reference, .. } = instruction else {
            return Ok(());
        };
        resolve_entry(reference, method, context)
    }
}

fn resolve_entry(
    reference: &TypeReference,
    method: &MethodMetadata,
    context: &VerificationContext,
) -> Result<()> {
    if let Some(object) = reference.object_type() {
        let usage = Location::Method(method.location());
        context.resolve_dependency(object, &usage)?;
    }
    Ok(())
}
