//! Shared model documents for tests.

/// Shop model: one entity set per entity type, plus a singleton over
/// `Customer` and an `Invoice` type with no set.
pub const SHOP_MODEL: &str = include_str!("shop_model.json");

/// Two entity sets share the `Order` element type.
pub const AMBIGUOUS_MODEL: &str = include_str!("ambiguous_model.json");

/// Types only, no container.
pub const NO_CONTAINER_MODEL: &str = include_str!("no_container_model.json");
