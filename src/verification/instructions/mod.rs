//! Instruction verifiers.
//!
//! One stateless checker per instruction family, dispatched through a fixed
//! table keyed on [`InstructionFamily`]. Each checker is a pure function of
//! `(class, method, instruction, context)`: it resolves what the instruction
//! references, registers problems and API usages on the context, and keeps no
//! state of its own, so every checker is unit-testable without driving a full
//! run.

mod constants;
mod field;
mod invoke;
mod types;

use crate::{
    metadata::{ClassRc, Instruction, InstructionFamily, MethodMetadata},
    verification::VerificationContext,
    Result,
};

static VERIFIERS: [&'static dyn InstructionVerifier; 5] = [
    &field::FieldAccessVerifier,
    &invoke::InvocationVerifier,
    &types::TypeInstructionVerifier,
    &constants::ClassConstantVerifier,
    &constants::MultiArrayVerifier,
];

/// Trait for instruction family verifiers.
///
/// Implement this trait for each checker that handles one instruction family.
/// Checkers never fail on analysis findings; those are registered on the
/// context as problems.
trait InstructionVerifier: Send + Sync {
    /// The instruction family this verifier handles.
    fn family(&self) -> InstructionFamily;

    /// Check one instruction of the handled family.
    ///
    /// # Arguments
    /// * `class` - The class under verification
    /// * `method` - The method whose body contains the instruction
    /// * `instruction` - The instruction to check
    /// * `context` - The run's shared state and problem sink
    ///
    /// # Errors
    /// Returns an error only for faults that invalidate the run.
    fn verify(
        &self,
        class: &ClassRc,
        method: &MethodMetadata,
        instruction: &Instruction,
        context: &VerificationContext,
    ) -> Result<()>;
}

/// Dispatch one instruction to the verifier of its family.
///
/// # Errors
/// Propagates resolver faults raised by the selected verifier.
pub(crate) fn verify_instruction(
    class: &ClassRc,
    method: &MethodMetadata,
    instruction: &Instruction,
    context: &VerificationContext,
) -> Result<()> {
    let family = instruction.family();
    for verifier in VERIFIERS {
        if verifier.family() == family {
            return verifier.verify(class, method, instruction, context);
        }
    }
    Ok(())
}
