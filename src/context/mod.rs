//! Per-request query context.
//!
//! A [`QueryContext`] is built once per incoming query. It pins down the
//! schema-level element type, keeps the request path and service provider for
//! downstream stages, and resolves the navigation source the query runs
//! against at construction time. Contexts are immutable after construction.

mod resolve;

pub use resolve::{matching_entity_sets, resolve_navigation_source};

use std::fmt;
use std::sync::Arc;

use thiserror::Error;
use tracing::debug;

use crate::model::{EdmModel, NativeType, NavigationSource, SchemaType};
use crate::path::ODataPath;
use crate::services::ServiceProvider;

/// Shared, read-only schema model.
pub type SharedModel = Arc<dyn EdmModel>;

/// Shared service provider.
pub type SharedServices = Arc<dyn ServiceProvider>;

/// Construction failures. Both are configuration errors, never transient.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryContextError {
    #[error("Value cannot be null (parameter '{param}')")]
    NullArgument { param: &'static str },

    #[error("The native type '{type_name}' has no matching declared type in the model (parameter '{param}')")]
    InvalidArgument {
        param: &'static str,
        type_name: String,
    },
}

/// Everything a query pipeline needs to know about what it is querying.
#[derive(Clone)]
pub struct QueryContext {
    model: SharedModel,
    element_type: SchemaType,
    element_native_type: Option<NativeType>,
    path: Option<ODataPath>,
    navigation_source: Option<NavigationSource>,
    services: SharedServices,
}

impl QueryContext {
    /// Build a context for elements of a native type.
    ///
    /// Missing arguments are rejected in the order `model`,
    /// `element_native_type`, `services`.
    ///
    /// # Errors
    ///
    /// - [`QueryContextError::NullArgument`] naming the first missing argument
    /// - [`QueryContextError::InvalidArgument`] when the model declares no type
    ///   for `element_native_type`
    pub fn new(
        model: Option<SharedModel>,
        element_native_type: Option<NativeType>,
        path: Option<ODataPath>,
        services: Option<SharedServices>,
    ) -> Result<Self, QueryContextError> {
        let model = model.ok_or(QueryContextError::NullArgument { param: "model" })?;
        let native = element_native_type.ok_or(QueryContextError::NullArgument {
            param: "element_native_type",
        })?;
        let services = services.ok_or(QueryContextError::NullArgument { param: "services" })?;

        let element_type = model
            .resolve_native_type(&native)
            .cloned()
            .ok_or_else(|| QueryContextError::InvalidArgument {
                param: "element_native_type",
                type_name: native.name().to_string(),
            })?;
        debug!(native = %native, element_type = %element_type, "mapped native element type");

        Ok(Self::assemble(model, element_type, Some(native), path, services))
    }

    /// Build a context for elements of a schema-level type.
    ///
    /// Missing arguments are rejected in the order `model`, `element_type`,
    /// `services`. The native element type is left unset.
    pub fn with_element_type(
        model: Option<SharedModel>,
        element_type: Option<SchemaType>,
        path: Option<ODataPath>,
        services: Option<SharedServices>,
    ) -> Result<Self, QueryContextError> {
        let model = model.ok_or(QueryContextError::NullArgument { param: "model" })?;
        let element_type =
            element_type.ok_or(QueryContextError::NullArgument { param: "element_type" })?;
        let services = services.ok_or(QueryContextError::NullArgument { param: "services" })?;

        Ok(Self::assemble(model, element_type, None, path, services))
    }

    fn assemble(
        model: SharedModel,
        element_type: SchemaType,
        element_native_type: Option<NativeType>,
        path: Option<ODataPath>,
        services: SharedServices,
    ) -> Self {
        let navigation_source =
            resolve_navigation_source(model.as_ref(), &element_type, path.as_ref());
        Self {
            model,
            element_type,
            element_native_type,
            path,
            navigation_source,
            services,
        }
    }

    pub fn model(&self) -> &dyn EdmModel {
        self.model.as_ref()
    }

    /// Schema-level type of the queried elements.
    pub fn element_type(&self) -> &SchemaType {
        &self.element_type
    }

    /// Native type of the queried elements, when the context was built from one.
    pub fn element_native_type(&self) -> Option<&NativeType> {
        self.element_native_type.as_ref()
    }

    pub fn path(&self) -> Option<&ODataPath> {
        self.path.as_ref()
    }

    /// The source the query runs against; `None` when it could not be
    /// determined unambiguously.
    pub fn navigation_source(&self) -> Option<&NavigationSource> {
        self.navigation_source.as_ref()
    }

    pub fn services(&self) -> &dyn ServiceProvider {
        self.services.as_ref()
    }
}

impl fmt::Debug for QueryContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueryContext")
            .field("element_type", &self.element_type)
            .field("element_native_type", &self.element_native_type)
            .field("path", &self.path)
            .field("navigation_source", &self.navigation_source)
            .finish_non_exhaustive()
    }
}
