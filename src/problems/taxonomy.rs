//! The closed set of compatibility problems.

use std::fmt;

use strum::EnumDiscriminants;

use crate::metadata::descriptor::display_name;
use crate::metadata::{
    ClassLocation, FieldLocation, FieldOpcode, FieldReference, InvokeOpcode, Location,
    MemberAccess, MethodLocation, MethodReference,
};

/// A predicted linkage error, as structured data.
///
/// Problems are pure values: identity is structural equality over every field,
/// which is what the registrar deduplicates on. Each variant carries exactly
/// the references its message needs - renderers wanting more (say, the full
/// searched hierarchy behind a [`CompatibilityProblem::MethodNotFound`]) read
/// the fields directly instead of parsing the [`Display`](fmt::Display) output.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, EnumDiscriminants)]
#[strum_discriminants(name(ProblemKind))]
#[strum_discriminants(doc = "The discriminant of a [`CompatibilityProblem`], for grouping and filtering.")]
#[strum_discriminants(derive(PartialOrd, Ord, Hash, strum::Display, strum::EnumIter))]
#[strum_discriminants(strum(serialize_all = "kebab-case"))]
pub enum CompatibilityProblem {
    /// A referenced class resolves to nothing.
    ClassNotFound {
        /// Binary name of the class that was not found.
        class_name: String,
        /// Where the reference occurred.
        usage: Location,
    },
    /// A referenced class exists but its class file does not parse.
    InvalidClassFile {
        /// Binary name of the broken class.
        class_name: String,
        /// Parser diagnostic from the resolver.
        reason: String,
        /// Where the reference occurred.
        usage: Location,
    },
    /// A referenced class exists but its bytes could not be read.
    FailedToReadClass {
        /// Binary name of the unreadable class.
        class_name: String,
        /// I/O diagnostic from the resolver.
        reason: String,
        /// Where the reference occurred.
        usage: Location,
    },
    /// Method resolution exhausted the hierarchy without a match.
    MethodNotFound {
        /// The unresolved reference.
        reference: MethodReference,
        /// The method containing the invocation.
        usage: MethodLocation,
        /// Every class and interface resolution actually looked at, in search
        /// order. A renderer can turn this into a "might have been declared in
        /// a supertype" hint.
        searched: Vec<String>,
    },
    /// Field resolution exhausted the hierarchy without a match.
    FieldNotFound {
        /// The unresolved reference.
        reference: FieldReference,
        /// The method containing the access.
        usage: MethodLocation,
        /// Every class and interface resolution actually looked at, in search
        /// order.
        searched: Vec<String>,
    },
    /// Direct dispatch selected an abstract method.
    AbstractMethodInvocation {
        /// The abstract method that would be selected.
        method: MethodLocation,
        /// The invoking method.
        usage: MethodLocation,
    },
    /// A `new` instruction targets an interface.
    InterfaceInstantiation {
        /// Binary name of the interface.
        interface: String,
        /// The instantiating method.
        usage: MethodLocation,
    },
    /// A `new` instruction targets an abstract class.
    AbstractClassInstantiation {
        /// Binary name of the abstract class.
        class_name: String,
        /// The instantiating method.
        usage: MethodLocation,
    },
    /// `getfield`/`putfield` reached a field that is actually static.
    InstanceAccessOfStaticField {
        /// The static field that resolved.
        field: FieldLocation,
        /// The instance opcode that was used.
        opcode: FieldOpcode,
        /// The accessing method.
        usage: MethodLocation,
    },
    /// `getstatic`/`putstatic` reached a field that is actually an instance field.
    StaticAccessOfInstanceField {
        /// The instance field that resolved.
        field: FieldLocation,
        /// The static opcode that was used.
        opcode: FieldOpcode,
        /// The accessing method.
        usage: MethodLocation,
    },
    /// An instance invocation opcode reached a method that is actually static.
    InvokeInstanceInstructionOnStaticMethod {
        /// The static method that resolved.
        method: MethodLocation,
        /// The instance opcode that was used.
        opcode: InvokeOpcode,
        /// The invoking method.
        usage: MethodLocation,
    },
    /// `invokestatic` reached a method that is actually an instance method.
    InvokeStaticInstructionOnInstanceMethod {
        /// The instance method that resolved.
        method: MethodLocation,
        /// The invoking method.
        usage: MethodLocation,
    },
    /// The resolved method is not visible from the invoking class.
    IllegalMethodAccess {
        /// The inaccessible method.
        method: MethodLocation,
        /// The access level that was violated.
        access: MemberAccess,
        /// The invoking method.
        usage: MethodLocation,
    },
    /// The resolved field is not visible from the accessing class.
    IllegalFieldAccess {
        /// The inaccessible field.
        field: FieldLocation,
        /// The access level that was violated.
        access: MemberAccess,
        /// The accessing method.
        usage: MethodLocation,
    },
    /// `invokeinterface` reached a private method.
    InvokeInterfaceOnPrivateMethod {
        /// The private method that resolved.
        method: MethodLocation,
        /// The invoking method.
        usage: MethodLocation,
    },
    /// A `final` field is assigned outside its declaring class.
    FinalFieldMutation {
        /// The final field.
        field: FieldLocation,
        /// The assigning method.
        usage: MethodLocation,
    },
    /// A reference names a class, but the name now resolves to an interface.
    ClassBecameInterface {
        /// Binary name of the type that changed kind.
        class_name: String,
        /// Where the class-kind reference occurred.
        usage: Location,
    },
    /// A reference names an interface, but the name now resolves to a class.
    InterfaceBecameClass {
        /// Binary name of the type that changed kind.
        class_name: String,
        /// Where the interface-kind reference occurred.
        usage: Location,
    },
    /// A superclass now resolves to an interface.
    SuperClassBecameInterface {
        /// Binary name of the former class.
        super_name: String,
        /// The subclass whose `extends` broke.
        usage: ClassLocation,
    },
}

impl CompatibilityProblem {
    /// The discriminant of this problem, for grouping and filtering.
    #[must_use]
    pub fn kind(&self) -> ProblemKind {
        ProblemKind::from(self)
    }
}

impl fmt::Display for CompatibilityProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompatibilityProblem::ClassNotFound { class_name, usage } => {
                write!(f, "Class {} is not found, used by {}", display_name(class_name), usage)
            }
            CompatibilityProblem::InvalidClassFile { class_name, reason, usage } => {
                write!(
                    f,
                    "Class {} has an invalid class file ({}), used by {}",
                    display_name(class_name),
                    reason,
                    usage
                )
            }
            CompatibilityProblem::FailedToReadClass { class_name, reason, usage } => {
                write!(
                    f,
                    "Class {} could not be read ({}), used by {}",
                    display_name(class_name),
                    reason,
                    usage
                )
            }
            CompatibilityProblem::MethodNotFound { reference, usage, .. } => {
                write!(f, "Method {reference} is not found, invoked by {usage}")
            }
            CompatibilityProblem::FieldNotFound { reference, usage, .. } => {
                write!(f, "Field {reference} is not found, accessed by {usage}")
            }
            CompatibilityProblem::AbstractMethodInvocation { method, usage } => {
                write!(f, "Abstract method {method} is invoked directly by {usage}")
            }
            CompatibilityProblem::InterfaceInstantiation { interface, usage } => {
                write!(f, "Interface {} is instantiated by {}", display_name(interface), usage)
            }
            CompatibilityProblem::AbstractClassInstantiation { class_name, usage } => {
                write!(
                    f,
                    "Abstract class {} is instantiated by {}",
                    display_name(class_name),
                    usage
                )
            }
            CompatibilityProblem::InstanceAccessOfStaticField { field, opcode, usage } => {
                write!(f, "Static field {field} is accessed by instance instruction {opcode} in {usage}")
            }
            CompatibilityProblem::StaticAccessOfInstanceField { field, opcode, usage } => {
                write!(f, "Instance field {field} is accessed by static instruction {opcode} in {usage}")
            }
            CompatibilityProblem::InvokeInstanceInstructionOnStaticMethod { method, opcode, usage } => {
                write!(f, "Static method {method} is invoked by instance instruction {opcode} in {usage}")
            }
            CompatibilityProblem::InvokeStaticInstructionOnInstanceMethod { method, usage } => {
                write!(f, "Instance method {method} is invoked by invokestatic in {usage}")
            }
            CompatibilityProblem::IllegalMethodAccess { method, access, usage } => {
                write!(f, "Method {method} is {access} and not accessible from {usage}")
            }
            CompatibilityProblem::IllegalFieldAccess { field, access, usage } => {
                write!(f, "Field {field} is {access} and not accessible from {usage}")
            }
            CompatibilityProblem::InvokeInterfaceOnPrivateMethod { method, usage } => {
                write!(f, "Private method {method} is invoked by invokeinterface in {usage}")
            }
            CompatibilityProblem::FinalFieldMutation { field, usage } => {
                write!(f, "Final field {field} is assigned outside its declaring class by {usage}")
            }
            CompatibilityProblem::ClassBecameInterface { class_name, usage } => {
                write!(
                    f,
                    "Class {} has become an interface, referenced as a class by {}",
                    display_name(class_name),
                    usage
                )
            }
            CompatibilityProblem::InterfaceBecameClass { class_name, usage } => {
                write!(
                    f,
                    "Interface {} has become a class, referenced as an interface by {}",
                    display_name(class_name),
                    usage
                )
            }
            CompatibilityProblem::SuperClassBecameInterface { super_name, usage } => {
                write!(
                    f,
                    "Superclass {} of {} has become an interface",
                    display_name(super_name),
                    usage
                )
            }
        }
    }
}

/// What an [`ApiUsage`] flags about its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, strum::Display)]
pub enum ApiUsageKind {
    /// The target carries a deprecation marker.
    #[strum(to_string = "deprecated")]
    Deprecated,
    /// The target is deprecated and scheduled for removal.
    #[strum(to_string = "deprecated and scheduled for removal")]
    ScheduledForRemoval,
    /// The target is marked as experimental, unstable API.
    #[strum(to_string = "experimental")]
    Experimental,
}

/// A non-fatal note that verified code touches marked API.
///
/// Usages share the problems' value-identity model and deduplicate the same
/// way, but they live in their own channel: a run with nothing but deprecated
/// calls is still linkage-clean.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ApiUsage {
    /// What the marker on the target says.
    pub kind: ApiUsageKind,
    /// The marked class, method, or field.
    pub target: Location,
    /// Where it is used from.
    pub usage: Location,
}

impl ApiUsage {
    /// A usage of a deprecated target.
    #[must_use]
    pub fn deprecated(target: Location, usage: Location, for_removal: bool) -> Self {
        ApiUsage {
            kind: if for_removal {
                ApiUsageKind::ScheduledForRemoval
            } else {
                ApiUsageKind::Deprecated
            },
            target,
            usage,
        }
    }

    /// A usage of an experimental target.
    #[must_use]
    pub fn experimental(target: Location, usage: Location) -> Self {
        ApiUsage {
            kind: ApiUsageKind::Experimental,
            target,
            usage,
        }
    }
}

impl fmt::Display for ApiUsage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} is {}, used by {}", self.target, self.kind, self.usage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn usage_site() -> MethodLocation {
        MethodLocation::new("com/example/Main", "main", "([Ljava/lang/String;)V")
    }

    #[test]
    fn test_problem_identity_is_structural() {
        let first = CompatibilityProblem::ClassNotFound {
            class_name: "com/example/Gone".to_string(),
            usage: Location::Method(usage_site()),
        };
        let second = CompatibilityProblem::ClassNotFound {
            class_name: "com/example/Gone".to_string(),
            usage: Location::Method(usage_site()),
        };
        assert_eq!(first, second);
        assert_eq!(first.kind(), ProblemKind::ClassNotFound);
        assert_ne!(
            first,
            CompatibilityProblem::ClassNotFound {
                class_name: "com/example/Other".to_string(),
                usage: Location::Method(usage_site()),
            }
        );
    }

    #[test]
    fn test_problem_messages() {
        let not_found = CompatibilityProblem::MethodNotFound {
            reference: MethodReference::to_class("com/example/Api", "run", "()V"),
            usage: usage_site(),
            searched: vec!["com/example/Api".to_string(), "java/lang/Object".to_string()],
        };
        assert_eq!(
            not_found.to_string(),
            "Method com.example.Api.run() : void is not found, \
             invoked by com.example.Main.main(java.lang.String[]) : void"
        );

        let mismatch = CompatibilityProblem::InstanceAccessOfStaticField {
            field: FieldLocation::new("com/example/Config", "LIMIT", "I"),
            opcode: FieldOpcode::GetField,
            usage: usage_site(),
        };
        assert_eq!(
            mismatch.to_string(),
            "Static field com.example.Config.LIMIT : int is accessed by instance \
             instruction getfield in com.example.Main.main(java.lang.String[]) : void"
        );

        let access = CompatibilityProblem::IllegalMethodAccess {
            method: MethodLocation::new("com/example/Api", "run", "()V"),
            access: MemberAccess::PackagePrivate,
            usage: usage_site(),
        };
        assert_eq!(
            access.to_string(),
            "Method com.example.Api.run() : void is package-private and not \
             accessible from com.example.Main.main(java.lang.String[]) : void"
        );
    }

    #[test]
    fn test_kind_names_are_stable() {
        assert_eq!(ProblemKind::ClassNotFound.to_string(), "class-not-found");
        assert_eq!(
            ProblemKind::InvokeInstanceInstructionOnStaticMethod.to_string(),
            "invoke-instance-instruction-on-static-method"
        );
        assert_eq!(
            ProblemKind::SuperClassBecameInterface.to_string(),
            "super-class-became-interface"
        );
    }

    #[test]
    fn test_api_usage_constructors_and_message() {
        let target = Location::Method(MethodLocation::new("lib/Util", "old", "()V"));
        let site = Location::Method(usage_site());

        let usage = ApiUsage::deprecated(target.clone(), site.clone(), true);
        assert_eq!(usage.kind, ApiUsageKind::ScheduledForRemoval);
        assert_eq!(
            usage.to_string(),
            "lib.Util.old() : void is deprecated and scheduled for removal, \
             used by com.example.Main.main(java.lang.String[]) : void"
        );

        let usage = ApiUsage::experimental(target, site);
        assert_eq!(usage.kind, ApiUsageKind::Experimental);
    }
}
