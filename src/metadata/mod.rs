//! The class metadata model the verification engine operates on.
//!
//! Everything the engine knows about a class lives here: access flags, declared
//! members, supertype names, API status markers, and the reference-bearing
//! instructions of each method body. Resolvers produce this model from whatever
//! input they parse; the engine never touches class files directly.
//!
//! # Key Components
//!
//! - [`ClassMetadata`] / [`MethodMetadata`] / [`FieldMetadata`] - the immutable model,
//!   shared behind [`ClassRc`] / [`MethodRc`] / [`FieldRc`]
//! - [`ClassMetadataBuilder`] - fluent construction for resolvers and tests
//! - [`Instruction`] plus the opcode enums - the checked instruction families
//! - [`MethodReference`] / [`FieldReference`] / [`TypeReference`] - symbolic references
//!   as the constant pool spells them
//! - [`Location`] and friends - printable declaration sites for problem records
//! - [`descriptor`] - field/method descriptor parsing and Java-style rendering
//!
//! # Examples
//!
//! ```rust
//! use linkscope::metadata::{
//!     ClassMetadataBuilder, Instruction, InvokeOpcode, MethodAccessFlags, MethodMetadata,
//!     MethodReference,
//! };
//!
//! let class = ClassMetadataBuilder::new("com/example/Main")
//!     .method(
//!         MethodMetadata::new("run", "()V", MethodAccessFlags::PUBLIC).with_instruction(
//!             Instruction::Invoke {
//!                 opcode: InvokeOpcode::Virtual,
//!                 reference: MethodReference::to_class("com/example/Helper", "help", "()V"),
//!             },
//!         ),
//!     )
//!     .build();
//!
//! assert_eq!(class.methods[0].instructions.len(), 1);
//! ```

mod access;
mod class;
mod field;
mod instruction;
mod location;
mod markers;
mod method;
mod reference;

/// Parsing and rendering of JVM field and method descriptors
pub mod descriptor;

pub use access::{
    package_of, ClassAccessFlags, FieldAccessFlags, MemberAccess, MethodAccessFlags,
};
pub use class::{ClassMetadata, ClassMetadataBuilder, ClassRc};
pub use field::{FieldMetadata, FieldRc};
pub use instruction::{FieldOpcode, Instruction, InstructionFamily, InvokeOpcode, TypeOpcode};
pub use location::{ClassLocation, FieldLocation, Location, MethodLocation};
pub use markers::{ApiMarkers, ClassOrigin, Deprecation};
pub use method::{MethodMetadata, MethodRc};
pub use reference::{FieldReference, MethodReference, TypeReference};
