//! Core schema definition types.
//!
//! Provides the schema-level vocabulary shared by the model, the request path
//! and the query context: declared types, native type descriptors, entity sets,
//! singletons and the container that groups them.

use std::fmt;

/// Kind of a declared schema type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    /// Keyed type that can back an entity set or singleton
    Entity,
    /// Structured value without identity
    Complex,
}

impl TypeKind {
    /// Returns the lowercase label used in documents and CLI output.
    pub fn label(&self) -> &'static str {
        match self {
            TypeKind::Entity => "entity",
            TypeKind::Complex => "complex",
        }
    }
}

/// A type as declared in the schema's type system.
///
/// Equality is structural: two descriptors with the same namespace, name and
/// kind denote the same declared type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SchemaType {
    namespace: String,
    name: String,
    kind: TypeKind,
}

impl SchemaType {
    pub fn new(namespace: impl Into<String>, name: impl Into<String>, kind: TypeKind) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
            kind,
        }
    }

    /// Shorthand for an entity type.
    pub fn entity(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(namespace, name, TypeKind::Entity)
    }

    /// Shorthand for a complex type.
    pub fn complex(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(namespace, name, TypeKind::Complex)
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> TypeKind {
        self.kind
    }

    /// Returns `Namespace.Name`.
    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.namespace, self.name)
    }
}

impl fmt::Display for SchemaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.namespace, self.name)
    }
}

/// Descriptor of the in-memory (native) type of queried elements.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NativeType {
    name: String,
}

impl NativeType {
    /// Descriptor for an explicitly named native type, e.g. `shop::Order`.
    pub fn named(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Descriptor for the Rust type `T`, named by `std::any::type_name`.
    pub fn of<T: ?Sized>() -> Self {
        Self::named(std::any::type_name::<T>())
    }

    /// Fully-qualified native name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Native name with path separators rewritten to schema dots
    /// (`shop::Order` -> `shop.Order`).
    pub fn dotted_name(&self) -> String {
        self.name.replace("::", ".")
    }
}

impl fmt::Display for NativeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// A named, schema-declared collection of entities of one type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntitySet {
    name: String,
    element_type: SchemaType,
}

impl EntitySet {
    pub fn new(name: impl Into<String>, element_type: SchemaType) -> Self {
        Self {
            name: name.into(),
            element_type,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn element_type(&self) -> &SchemaType {
        &self.element_type
    }
}

/// A named, schema-declared single entity.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Singleton {
    name: String,
    element_type: SchemaType,
}

impl Singleton {
    pub fn new(name: impl Into<String>, element_type: SchemaType) -> Self {
        Self {
            name: name.into(),
            element_type,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn element_type(&self) -> &SchemaType {
        &self.element_type
    }
}

/// The target a query runs against.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NavigationSource {
    EntitySet(EntitySet),
    Singleton(Singleton),
}

impl NavigationSource {
    pub fn name(&self) -> &str {
        match self {
            NavigationSource::EntitySet(set) => set.name(),
            NavigationSource::Singleton(singleton) => singleton.name(),
        }
    }

    pub fn element_type(&self) -> &SchemaType {
        match self {
            NavigationSource::EntitySet(set) => set.element_type(),
            NavigationSource::Singleton(singleton) => singleton.element_type(),
        }
    }

    /// Returns `"entity_set"` or `"singleton"`.
    pub fn kind_label(&self) -> &'static str {
        match self {
            NavigationSource::EntitySet(_) => "entity_set",
            NavigationSource::Singleton(_) => "singleton",
        }
    }
}

impl From<EntitySet> for NavigationSource {
    fn from(set: EntitySet) -> Self {
        NavigationSource::EntitySet(set)
    }
}

impl From<Singleton> for NavigationSource {
    fn from(singleton: Singleton) -> Self {
        NavigationSource::Singleton(singleton)
    }
}

/// Root grouping of a schema's top-level navigation sources.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EntityContainer {
    name: String,
    entity_sets: Vec<EntitySet>,
    singletons: Vec<Singleton>,
}

impl EntityContainer {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub(crate) fn push_entity_set(&mut self, set: EntitySet) {
        self.entity_sets.push(set);
    }

    pub(crate) fn push_singleton(&mut self, singleton: Singleton) {
        self.singletons.push(singleton);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared entity sets, in declaration order.
    pub fn entity_sets(&self) -> &[EntitySet] {
        &self.entity_sets
    }

    /// Declared singletons, in declaration order.
    pub fn singletons(&self) -> &[Singleton] {
        &self.singletons
    }

    /// Looks up an entity set or singleton by name.
    pub fn find_navigation_source(&self, name: &str) -> Option<NavigationSource> {
        self.entity_sets
            .iter()
            .find(|set| set.name() == name)
            .cloned()
            .map(NavigationSource::from)
            .or_else(|| {
                self.singletons
                    .iter()
                    .find(|singleton| singleton.name() == name)
                    .cloned()
                    .map(NavigationSource::from)
            })
    }

    /// All navigation sources: entity sets first, then singletons.
    pub fn navigation_sources(&self) -> impl Iterator<Item = NavigationSource> + '_ {
        self.entity_sets
            .iter()
            .cloned()
            .map(NavigationSource::from)
            .chain(self.singletons.iter().cloned().map(NavigationSource::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    struct Order;

    #[test]
    fn test_schema_type_qualified_name() {
        let ty = SchemaType::entity("Shop", "Order");
        assert_eq!(ty.qualified_name(), "Shop.Order");
        assert_eq!(ty.to_string(), "Shop.Order");
        assert_eq!(ty.kind(), TypeKind::Entity);
    }

    #[test]
    fn test_schema_type_equality_is_structural() {
        assert_eq!(SchemaType::entity("Shop", "Order"), SchemaType::entity("Shop", "Order"));
        assert_ne!(SchemaType::entity("Shop", "Order"), SchemaType::complex("Shop", "Order"));
        assert_ne!(SchemaType::entity("Shop", "Order"), SchemaType::entity("Billing", "Order"));
    }

    #[rstest]
    #[case("shop::Order", "shop.Order")]
    #[case("Order", "Order")]
    #[case("a::b::c::Item", "a.b.c.Item")]
    fn test_native_type_dotted_name(#[case] native: &str, #[case] expected: &str) {
        assert_eq!(NativeType::named(native).dotted_name(), expected);
    }

    #[test]
    fn test_native_type_of_uses_type_name() {
        let native = NativeType::of::<Order>();
        assert!(native.name().ends_with("::Order"));
        assert_eq!(native.name(), std::any::type_name::<Order>());
    }

    #[test]
    fn test_navigation_source_accessors() {
        let order = SchemaType::entity("Shop", "Order");
        let set: NavigationSource = EntitySet::new("Orders", order.clone()).into();
        assert_eq!(set.name(), "Orders");
        assert_eq!(set.element_type(), &order);
        assert_eq!(set.kind_label(), "entity_set");

        let me: NavigationSource = Singleton::new("Latest", order).into();
        assert_eq!(me.kind_label(), "singleton");
    }

    #[test]
    fn test_container_find_navigation_source() {
        let order = SchemaType::entity("Shop", "Order");
        let mut container = EntityContainer::new("Default");
        container.push_entity_set(EntitySet::new("Orders", order.clone()));
        container.push_singleton(Singleton::new("Latest", order.clone()));

        assert_eq!(
            container.find_navigation_source("Orders"),
            Some(NavigationSource::EntitySet(EntitySet::new("Orders", order.clone())))
        );
        assert_eq!(
            container.find_navigation_source("Latest"),
            Some(NavigationSource::Singleton(Singleton::new("Latest", order)))
        );
        assert_eq!(container.find_navigation_source("Missing"), None);
    }

    #[test]
    fn test_container_navigation_sources_order() {
        let order = SchemaType::entity("Shop", "Order");
        let mut container = EntityContainer::new("Default");
        container.push_singleton(Singleton::new("Latest", order.clone()));
        container.push_entity_set(EntitySet::new("Orders", order));

        let names: Vec<_> = container
            .navigation_sources()
            .map(|source| source.name().to_string())
            .collect();
        assert_eq!(names, vec!["Orders", "Latest"]);
    }
}
