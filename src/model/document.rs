//! JSON representation of a schema model.
//!
//! Documents are converted through [`ModelBuilder`], so a loaded document is
//! validated exactly like a model assembled in code.
//!
//! ```json
//! {
//!   "namespace": "Shop",
//!   "types": [
//!     { "name": "Order", "kind": "entity", "native": "shop::Order" }
//!   ],
//!   "container": {
//!     "name": "Default",
//!     "entity_sets": [{ "name": "Orders", "type": "Order" }],
//!     "singletons": []
//!   }
//! }
//! ```

use std::error::Error;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::definition::TypeKind;
use super::memory::{InMemoryModel, ModelBuilder};
use super::ModelError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelDocument {
    pub namespace: String,
    #[serde(default)]
    pub types: Vec<TypeDocument>,
    #[serde(default)]
    pub container: Option<ContainerDocument>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeDocument {
    pub name: String,
    #[serde(default = "default_kind")]
    pub kind: KindDocument,
    /// Native type name mapped onto this type
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub native: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KindDocument {
    Entity,
    Complex,
}

fn default_kind() -> KindDocument {
    KindDocument::Entity
}

impl From<KindDocument> for TypeKind {
    fn from(kind: KindDocument) -> Self {
        match kind {
            KindDocument::Entity => TypeKind::Entity,
            KindDocument::Complex => TypeKind::Complex,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContainerDocument {
    pub name: String,
    #[serde(default)]
    pub entity_sets: Vec<SourceDocument>,
    #[serde(default)]
    pub singletons: Vec<SourceDocument>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceDocument {
    pub name: String,
    #[serde(rename = "type")]
    pub type_ref: String,
}

impl ModelDocument {
    /// Parse a document from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Read and parse a document from a file.
    pub fn load(path: &Path) -> Result<Self, Box<dyn Error>> {
        let content = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read model file '{}': {}", path.display(), e))?;
        let document = Self::from_json(&content)
            .map_err(|e| format!("Invalid JSON in model file '{}': {}", path.display(), e))?;
        Ok(document)
    }

    /// Validate the document into a model.
    pub fn into_model(self) -> Result<InMemoryModel, ModelError> {
        let mut builder = ModelBuilder::new(self.namespace);

        for ty in self.types {
            if let Some(native) = &ty.native {
                builder = builder.map_native(native.clone(), ty.name.clone());
            }
            builder = builder.declare_type(ty.name, ty.kind.into());
        }

        if let Some(container) = self.container {
            builder = builder.container(container.name);
            for set in container.entity_sets {
                builder = builder.entity_set(set.name, set.type_ref);
            }
            for singleton in container.singletons {
                builder = builder.singleton(singleton.name, singleton.type_ref);
            }
        }

        builder.build()
    }
}
