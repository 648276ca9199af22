//! The reference-bearing instructions the engine walks.
//!
//! Linkage errors can only be triggered by instructions that carry a symbolic
//! reference, so a method body is modelled as exactly those: field accesses,
//! invocations, type instructions, Class-constant loads and `multianewarray`.
//! Arithmetic, branches and the rest of the instruction set reference nothing
//! and are not represented. Instructions carry no bytecode offsets: the same
//! broken reference used twice in one method is one problem, not two.
//!
//! # Key Types
//! - [`Instruction`]: tagged union over the checked instruction families
//! - [`FieldOpcode`], [`InvokeOpcode`], [`TypeOpcode`]: the concrete mnemonics
//! - [`InstructionFamily`]: dispatch key for the verifier table

use strum::{Display, EnumIter};

use crate::metadata::{FieldReference, MethodReference, TypeReference};

/// Field access mnemonics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumIter)]
pub enum FieldOpcode {
    /// Read a static field
    #[strum(to_string = "getstatic")]
    GetStatic,
    /// Write a static field
    #[strum(to_string = "putstatic")]
    PutStatic,
    /// Read an instance field
    #[strum(to_string = "getfield")]
    GetField,
    /// Write an instance field
    #[strum(to_string = "putfield")]
    PutField,
}

impl FieldOpcode {
    /// True for the two write mnemonics.
    #[must_use]
    pub fn is_write(self) -> bool {
        matches!(self, FieldOpcode::PutStatic | FieldOpcode::PutField)
    }

    /// True for the two mnemonics that expect a static field.
    #[must_use]
    pub fn expects_static(self) -> bool {
        matches!(self, FieldOpcode::GetStatic | FieldOpcode::PutStatic)
    }
}

/// Method invocation mnemonics.
///
/// `invokedynamic` carries a call-site specifier instead of a method reference
/// and cannot break linkage against another class's members, so it has no
/// representation here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumIter)]
pub enum InvokeOpcode {
    /// Dispatch on the runtime type of the receiver
    #[strum(to_string = "invokevirtual")]
    Virtual,
    /// Direct invocation: constructors, `super.` calls, private methods
    #[strum(to_string = "invokespecial")]
    Special,
    /// Dispatch through an interface reference
    #[strum(to_string = "invokeinterface")]
    Interface,
    /// Invoke a static method
    #[strum(to_string = "invokestatic")]
    Static,
}

impl InvokeOpcode {
    /// True for the three mnemonics that expect an instance method.
    #[must_use]
    pub fn expects_instance(self) -> bool {
        !matches!(self, InvokeOpcode::Static)
    }
}

/// Type instruction mnemonics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumIter)]
pub enum TypeOpcode {
    /// Instantiate a class
    #[strum(to_string = "new")]
    New,
    /// Create a one-dimensional array of a reference type
    #[strum(to_string = "anewarray")]
    ANewArray,
    /// Check and narrow a reference type
    #[strum(to_string = "checkcast")]
    CheckCast,
    /// Test a reference type
    #[strum(to_string = "instanceof")]
    InstanceOf,
}

/// The instruction families the verifier table dispatches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum InstructionFamily {
    /// `getstatic` / `putstatic` / `getfield` / `putfield`
    #[strum(to_string = "field access")]
    Field,
    /// `invokevirtual` / `invokespecial` / `invokeinterface` / `invokestatic`
    #[strum(to_string = "method invocation")]
    Invoke,
    /// `new` / `anewarray` / `checkcast` / `instanceof`
    #[strum(to_string = "type instruction")]
    Type,
    /// `ldc` family loading a Class constant
    #[strum(to_string = "class constant")]
    ClassConstant,
    /// `multianewarray`
    #[strum(to_string = "multianewarray")]
    MultiArray,
}

/// A single reference-bearing instruction of a method body.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Instruction {
    /// A field access
    Field {
        /// The concrete mnemonic
        opcode: FieldOpcode,
        /// The field the constant pool names
        reference: FieldReference,
    },
    /// A method invocation
    Invoke {
        /// The concrete mnemonic
        opcode: InvokeOpcode,
        /// The method the constant pool names
        reference: MethodReference,
    },
    /// A type instruction
    Type {
        /// The concrete mnemonic
        opcode: TypeOpcode,
        /// The type the constant pool names
        reference: TypeReference,
    },
    /// `ldc` / `ldc_w` of a Class constant
    ClassConstant {
        /// The type the constant pool names
        reference: TypeReference,
    },
    /// `multianewarray`
    MultiArray {
        /// The array type the constant pool names, always an array descriptor
        reference: TypeReference,
        /// Number of dimensions the instruction populates, 1..=255
        dimensions: u8,
    },
}

impl Instruction {
    /// The family this instruction belongs to, for verifier dispatch.
    #[must_use]
    pub fn family(&self) -> InstructionFamily {
        match self {
            Instruction::Field { .. } => InstructionFamily::Field,
            Instruction::Invoke { .. } => InstructionFamily::Invoke,
            Instruction::Type { .. } => InstructionFamily::Type,
            Instruction::ClassConstant { .. } => InstructionFamily::ClassConstant,
            Instruction::MultiArray { .. } => InstructionFamily::MultiArray,
        }
    }
}
