//! Reflect module - Metadata-driven type introspection
//!
//! Provides:
//! - meta: generated type metadata and the declaration macros
//! - registry: name lookup over registered types
//! - printer: the tagged field/method/superclass/interface report

pub mod meta;
pub mod printer;
pub mod registry;

pub(crate) use meta::{reflect_impl, reflect_struct};
pub use meta::{DeclaredMethods, FieldInfo, MethodInfo, Reflect, TypeInfo};
pub use registry::TypeRegistry;
