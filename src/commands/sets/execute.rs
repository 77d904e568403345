use std::error::Error;

use serde::Serialize;
use thiserror::Error;

use super::SetsCmd;
use crate::commands::Execute;
use crate::context::SharedModel;

#[derive(Error, Debug)]
enum SetsError {
    #[error("Type '{name}' is not declared in the model")]
    UnknownType { name: String },
}

/// A navigation source declared in the container
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SourceEntry {
    pub name: String,
    pub kind: String,
    pub element_type: String,
}

/// Result of the sets command execution
#[derive(Debug, Default, Serialize)]
pub struct SetsResult {
    /// Container name; `None` when the model declares no container
    pub container: Option<String>,
    pub type_filter: Option<String>,
    pub sources: Vec<SourceEntry>,
}

impl Execute for SetsCmd {
    type Output = SetsResult;

    fn execute(self, model: SharedModel) -> Result<Self::Output, Box<dyn Error>> {
        let filter = match &self.type_name {
            Some(name) => Some(
                model
                    .find_declared_type(name)
                    .cloned()
                    .ok_or_else(|| SetsError::UnknownType { name: name.clone() })?,
            ),
            None => None,
        };

        let mut result = SetsResult {
            type_filter: self.type_name,
            ..Default::default()
        };

        let Some(container) = model.entity_container() else {
            return Ok(result);
        };

        result.container = Some(container.name().to_string());
        result.sources = container
            .navigation_sources()
            .filter(|source| filter.as_ref().is_none_or(|ty| source.element_type() == ty))
            .map(|source| SourceEntry {
                name: source.name().to_string(),
                kind: source.kind_label().to_string(),
                element_type: source.element_type().qualified_name(),
            })
            .collect();

        Ok(result)
    }
}
