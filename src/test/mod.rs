use crate::metadata::{ClassMetadataBuilder, ClassRc, MethodAccessFlags, MethodMetadata};
use crate::resolver::{ClassResolver, InMemoryResolver};

// Helper function to create a java/lang/Object stand-in with the members
// the resolution rules care about: a public instance method and a private
// static one that must stay invisible to subclasses and subinterfaces.
pub fn create_object_class() -> ClassRc {
    ClassMetadataBuilder::new("java/lang/Object")
        .no_superclass()
        .method(MethodMetadata::new(
            "toString",
            "()Ljava/lang/String;",
            MethodAccessFlags::PUBLIC,
        ))
        .method(MethodMetadata::new(
            "registerNatives",
            "()V",
            MethodAccessFlags::PRIVATE | MethodAccessFlags::STATIC,
        ))
        .build()
}

// Helper function to pull a class that is known to exist back out of a resolver
pub fn lookup_class(resolver: &InMemoryResolver, name: &str) -> ClassRc {
    resolver.resolve(name).unwrap().found().unwrap().clone()
}
