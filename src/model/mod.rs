//! Schema model abstraction.
//!
//! The query context only needs three capabilities from a schema: look up a
//! declared type by name, map a native type onto a declared type, and expose
//! the root container (if any). Those are captured by [`EdmModel`], so any
//! schema representation can back a query.
//!
//! # Overview
//!
//! 1. **Core Types** (`definition.rs`):
//!    - `SchemaType` / `TypeKind` - declared types and their kind
//!    - `NativeType` - descriptor of the in-memory element type
//!    - `EntitySet`, `Singleton`, `NavigationSource` - query targets
//!    - `EntityContainer` - root grouping of navigation sources
//!
//! 2. **In-memory model** (`memory.rs`):
//!    - `ModelBuilder` - validated construction of an `InMemoryModel`
//!
//! 3. **Documents** (`document.rs`):
//!    - `ModelDocument` - JSON form of a model, loaded through the builder

mod definition;
mod document;
mod memory;

pub use definition::{
    EntityContainer, EntitySet, NativeType, NavigationSource, SchemaType, Singleton, TypeKind,
};
pub use document::{ContainerDocument, KindDocument, ModelDocument, SourceDocument, TypeDocument};
pub use memory::{InMemoryModel, ModelBuilder};

use thiserror::Error;

/// Read-only schema capability consumed by the query context.
///
/// Implementations must be shareable across threads; many contexts may read
/// the same model concurrently.
pub trait EdmModel: Send + Sync {
    /// Find a declared type by its qualified name (`Namespace.Name`).
    fn find_declared_type(&self, qualified_name: &str) -> Option<&SchemaType>;

    /// Find the declared type explicitly mapped to a native type.
    fn find_native_mapping(&self, native: &NativeType) -> Option<&SchemaType>;

    /// The root container, if the schema declares one.
    fn entity_container(&self) -> Option<&EntityContainer>;

    /// Map a native type onto its declared schema type.
    ///
    /// Explicit mappings win; otherwise a declared type whose qualified name
    /// equals the dotted native name is used.
    fn resolve_native_type(&self, native: &NativeType) -> Option<&SchemaType> {
        self.find_native_mapping(native)
            .or_else(|| self.find_declared_type(&native.dotted_name()))
    }
}

/// Errors raised while assembling a model.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("Type '{name}' is declared more than once")]
    DuplicateType { name: String },

    #[error("Unknown type '{name}' referenced by '{referenced_by}'")]
    UnknownType { name: String, referenced_by: String },

    #[error("Navigation source '{source_name}' requires an entity type, but '{name}' is not one")]
    NotAnEntityType { name: String, source_name: String },

    #[error("Navigation source '{name}' is declared more than once")]
    DuplicateNavigationSource { name: String },

    #[error("Native type '{native}' is mapped to more than one declared type")]
    DuplicateNativeMapping { native: String },

    #[error("Navigation sources were declared but the model has no container")]
    MissingContainer,

    #[error("Invalid name '{name}': {reason}")]
    InvalidName { name: String, reason: String },
}
