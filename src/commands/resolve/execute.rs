use std::error::Error;
use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;

use super::ResolveCmd;
use crate::commands::Execute;
use crate::context::{matching_entity_sets, QueryContext, SharedModel, SharedServices};
use crate::model::{EdmModel, NativeType};
use crate::path::ODataPath;
use crate::services::ServiceRegistry;

#[derive(Error, Debug)]
enum ResolveError {
    #[error("Type '{name}' is not declared in the model")]
    UnknownType { name: String },

    #[error("Navigation source '{name}' is not declared in the model's container")]
    UnknownSource { name: String },

    #[error("Either --type or --native is required")]
    MissingElementType,
}

/// The navigation source a context resolved to
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedSource {
    pub name: String,
    pub kind: String,
    pub element_type: String,
    pub from_path: bool,
}

/// Result of the resolve command execution
#[derive(Debug, Default, Serialize)]
pub struct ResolveResult {
    pub element_type: String,
    pub element_native_type: Option<String>,
    pub path: Option<String>,
    pub navigation_source: Option<ResolvedSource>,
    /// Entity sets whose element type matches, whether or not one was chosen
    pub candidates: Vec<String>,
}

impl ResolveResult {
    pub fn from_context(ctx: &QueryContext) -> Self {
        let from_path = ctx
            .path()
            .and_then(ODataPath::navigation_source)
            .is_some();
        Self {
            element_type: ctx.element_type().qualified_name(),
            element_native_type: ctx.element_native_type().map(|t| t.name().to_string()),
            path: ctx.path().map(|p| p.to_string()),
            navigation_source: ctx.navigation_source().map(|source| ResolvedSource {
                name: source.name().to_string(),
                kind: source.kind_label().to_string(),
                element_type: source.element_type().qualified_name(),
                from_path,
            }),
            candidates: matching_entity_sets(ctx.model(), ctx.element_type())
                .into_iter()
                .map(|set| set.name().to_string())
                .collect(),
        }
    }
}

impl Execute for ResolveCmd {
    type Output = ResolveResult;

    fn execute(self, model: SharedModel) -> Result<Self::Output, Box<dyn Error>> {
        let path = match &self.path_source {
            Some(name) => Some(path_to_source(model.as_ref(), name)?),
            None => None,
        };
        let services: SharedServices = Arc::new(ServiceRegistry::new());

        let ctx = match (self.native, self.type_name) {
            (Some(native), _) => QueryContext::new(
                Some(model),
                Some(NativeType::named(native)),
                path,
                Some(services),
            )?,
            (None, Some(name)) => {
                let element_type = model
                    .find_declared_type(&name)
                    .cloned()
                    .ok_or(ResolveError::UnknownType { name })?;
                QueryContext::with_element_type(Some(model), Some(element_type), path, Some(services))?
            }
            (None, None) => return Err(ResolveError::MissingElementType.into()),
        };

        Ok(ResolveResult::from_context(&ctx))
    }
}

/// One-segment path to a declared entity set or singleton.
fn path_to_source(model: &dyn EdmModel, name: &str) -> Result<ODataPath, ResolveError> {
    model
        .entity_container()
        .and_then(|container| container.find_navigation_source(name))
        .map(ODataPath::from)
        .ok_or_else(|| ResolveError::UnknownSource {
            name: name.to_string(),
        })
}
