//! In-memory schema model and its builder.

use std::collections::HashMap;

use super::definition::{EntityContainer, EntitySet, NativeType, SchemaType, Singleton, TypeKind};
use super::{EdmModel, ModelError};

/// A validated, immutable schema held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryModel {
    namespace: String,
    types: Vec<SchemaType>,
    by_name: HashMap<String, usize>,
    native: HashMap<String, usize>,
    container: Option<EntityContainer>,
}

impl InMemoryModel {
    pub fn builder(namespace: impl Into<String>) -> ModelBuilder {
        ModelBuilder::new(namespace)
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Declared types, in declaration order.
    pub fn types(&self) -> &[SchemaType] {
        &self.types
    }
}

impl EdmModel for InMemoryModel {
    fn find_declared_type(&self, qualified_name: &str) -> Option<&SchemaType> {
        self.by_name.get(qualified_name).map(|&idx| &self.types[idx])
    }

    fn find_native_mapping(&self, native: &NativeType) -> Option<&SchemaType> {
        self.native.get(native.name()).map(|&idx| &self.types[idx])
    }

    fn entity_container(&self) -> Option<&EntityContainer> {
        self.container.as_ref()
    }
}

#[derive(Debug, Clone)]
enum PendingSource {
    EntitySet { name: String, type_ref: String },
    Singleton { name: String, type_ref: String },
}

/// Collects declarations and validates them into an [`InMemoryModel`].
///
/// Type references accept either a qualified name (`Shop.Order`) or a name
/// relative to the builder's namespace (`Order`).
///
/// ```
/// use query_context::model::{EdmModel, ModelBuilder};
///
/// let model = ModelBuilder::new("Shop")
///     .entity_type("Order")
///     .container("Default")
///     .entity_set("Orders", "Order")
///     .build()
///     .unwrap();
///
/// assert_eq!(model.entity_container().unwrap().entity_sets().len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct ModelBuilder {
    namespace: String,
    types: Vec<(String, TypeKind)>,
    native: Vec<(String, String)>,
    container: Option<String>,
    sources: Vec<PendingSource>,
}

impl ModelBuilder {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            types: Vec::new(),
            native: Vec::new(),
            container: None,
            sources: Vec::new(),
        }
    }

    pub fn entity_type(self, name: impl Into<String>) -> Self {
        self.declare_type(name, TypeKind::Entity)
    }

    pub fn complex_type(self, name: impl Into<String>) -> Self {
        self.declare_type(name, TypeKind::Complex)
    }

    pub fn declare_type(mut self, name: impl Into<String>, kind: TypeKind) -> Self {
        self.types.push((name.into(), kind));
        self
    }

    /// Map a native type name (e.g. `shop::Order`) onto a declared type.
    pub fn map_native(mut self, native: impl Into<String>, type_ref: impl Into<String>) -> Self {
        self.native.push((native.into(), type_ref.into()));
        self
    }

    /// Map the Rust type `T` onto a declared type.
    pub fn map_native_type<T: ?Sized>(self, type_ref: impl Into<String>) -> Self {
        self.map_native(std::any::type_name::<T>(), type_ref)
    }

    pub fn container(mut self, name: impl Into<String>) -> Self {
        self.container = Some(name.into());
        self
    }

    pub fn entity_set(mut self, name: impl Into<String>, type_ref: impl Into<String>) -> Self {
        self.sources.push(PendingSource::EntitySet {
            name: name.into(),
            type_ref: type_ref.into(),
        });
        self
    }

    pub fn singleton(mut self, name: impl Into<String>, type_ref: impl Into<String>) -> Self {
        self.sources.push(PendingSource::Singleton {
            name: name.into(),
            type_ref: type_ref.into(),
        });
        self
    }

    /// Validate the declarations and produce the model.
    ///
    /// # Errors
    ///
    /// Returns a [`ModelError`] for empty or dotted type names, duplicate
    /// types or sources, unresolved type references, sources whose type is
    /// not an entity type, and sources declared without a container.
    pub fn build(self) -> Result<InMemoryModel, ModelError> {
        validate_identifier(&self.namespace, true)?;

        let mut types = Vec::with_capacity(self.types.len());
        let mut by_name = HashMap::new();
        for (name, kind) in self.types {
            validate_identifier(&name, false)?;
            let ty = SchemaType::new(self.namespace.clone(), name, kind);
            let qualified = ty.qualified_name();
            if by_name.insert(qualified.clone(), types.len()).is_some() {
                return Err(ModelError::DuplicateType { name: qualified });
            }
            types.push(ty);
        }

        let lookup = |type_ref: &str, referenced_by: &str| -> Result<usize, ModelError> {
            let qualified = qualify(&self.namespace, type_ref);
            by_name
                .get(&qualified)
                .copied()
                .ok_or_else(|| ModelError::UnknownType {
                    name: type_ref.to_string(),
                    referenced_by: referenced_by.to_string(),
                })
        };

        let mut native = HashMap::new();
        for (native_name, type_ref) in &self.native {
            let idx = lookup(type_ref, native_name)?;
            if native.insert(native_name.clone(), idx).is_some_and(|prev| prev != idx) {
                return Err(ModelError::DuplicateNativeMapping {
                    native: native_name.clone(),
                });
            }
        }

        let container = match self.container {
            Some(container_name) => {
                validate_identifier(&container_name, false)?;
                let mut container = EntityContainer::new(container_name);
                for source in &self.sources {
                    let (name, type_ref) = match source {
                        PendingSource::EntitySet { name, type_ref }
                        | PendingSource::Singleton { name, type_ref } => (name, type_ref),
                    };
                    validate_identifier(name, false)?;
                    if container.find_navigation_source(name).is_some() {
                        return Err(ModelError::DuplicateNavigationSource { name: name.clone() });
                    }
                    let element_type = types[lookup(type_ref, name)?].clone();
                    if element_type.kind() != TypeKind::Entity {
                        return Err(ModelError::NotAnEntityType {
                            name: element_type.qualified_name(),
                            source_name: name.clone(),
                        });
                    }
                    match source {
                        PendingSource::EntitySet { .. } => {
                            container.push_entity_set(EntitySet::new(name.clone(), element_type))
                        }
                        PendingSource::Singleton { .. } => {
                            container.push_singleton(Singleton::new(name.clone(), element_type))
                        }
                    }
                }
                Some(container)
            }
            None if !self.sources.is_empty() => return Err(ModelError::MissingContainer),
            None => None,
        };

        Ok(InMemoryModel {
            namespace: self.namespace,
            types,
            by_name,
            native,
            container,
        })
    }
}

/// Qualify a namespace-relative type reference.
fn qualify(namespace: &str, type_ref: &str) -> String {
    if type_ref.contains('.') {
        type_ref.to_string()
    } else {
        format!("{}.{}", namespace, type_ref)
    }
}

fn validate_identifier(name: &str, allow_dots: bool) -> Result<(), ModelError> {
    let invalid = |reason: &str| ModelError::InvalidName {
        name: name.to_string(),
        reason: reason.to_string(),
    };
    if name.trim().is_empty() {
        return Err(invalid("name must not be empty"));
    }
    if !allow_dots && name.contains('.') {
        return Err(invalid("name must not contain '.'"));
    }
    if name.split('.').any(str::is_empty) {
        return Err(invalid("name must not have empty '.'-separated parts"));
    }
    if name.chars().any(|c| c.is_whitespace() || c == '/') {
        return Err(invalid("name must not contain whitespace or '/'"));
    }
    Ok(())
}
