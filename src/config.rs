//! Configuration file handling for model sources.
//!
//! This module provides loading and parsing of `.query_context.json` configuration files.
//! The model can live in a separate document or be inlined in the config.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::model::{InMemoryModel, ModelDocument};

/// Default configuration file name, looked up in the current directory.
pub const CONFIG_FILE: &str = ".query_context.json";

/// Top-level configuration file structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Where the schema model comes from
    pub model: ModelSource,
}

/// Model source variants.
///
/// JSON format uses a "type" field with lowercase variant names.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ModelSource {
    /// Model document stored in its own file
    File { path: PathBuf },
    /// Model document embedded in the config
    Inline { document: ModelDocument },
}

impl ConfigFile {
    /// Load configuration from `.query_context.json` in the current directory.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file doesn't exist
    /// - The file cannot be read
    /// - The JSON is invalid
    /// - Required fields are missing
    pub fn load() -> Result<Self, Box<dyn Error>> {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    /// Load configuration from an explicit path.
    pub fn load_from(config_path: &Path) -> Result<Self, Box<dyn Error>> {
        if !config_path.exists() {
            return Err(format!(
                "Configuration file not found: {}\n\n\
                 Pass --model <FILE> or create a {} file in the current directory.\n\n\
                 Examples:\n\
                 \n\
                 Model document on disk:\n\
                 {{\n  \
                   \"model\": {{\n    \
                     \"type\": \"file\",\n    \
                     \"path\": \"./model.json\"\n  \
                   }}\n\
                 }}\n\
                 \n\
                 Inline model:\n\
                 {{\n  \
                   \"model\": {{\n    \
                     \"type\": \"inline\",\n    \
                     \"document\": {{\n      \
                       \"namespace\": \"Shop\",\n      \
                       \"types\": [{{ \"name\": \"Order\" }}],\n      \
                       \"container\": {{\n        \
                         \"name\": \"Default\",\n        \
                         \"entity_sets\": [{{ \"name\": \"Orders\", \"type\": \"Order\" }}]\n      \
                       }}\n    \
                     }}\n  \
                   }}\n\
                 }}\n",
                config_path.display(),
                CONFIG_FILE
            )
            .into());
        }

        let content = fs::read_to_string(config_path)
            .map_err(|e| format!("Failed to read {}: {}", config_path.display(), e))?;

        let mut config: ConfigFile = serde_json::from_str(&content)
            .map_err(|e| format!("Invalid JSON in {}: {}", config_path.display(), e))?;

        // model paths are relative to the config file
        if let ModelSource::File { path } = &mut config.model {
            if path.is_relative() {
                if let Some(dir) = config_path.parent() {
                    *path = dir.join(&*path);
                }
            }
        }

        Ok(config)
    }
}

impl ModelSource {
    /// Load and validate the model this source points at.
    pub fn load_model(&self) -> Result<InMemoryModel, Box<dyn Error>> {
        let model = match self {
            Self::File { path } => load_model_file(path)?,
            Self::Inline { document } => document.clone().into_model()?,
        };
        Ok(model)
    }
}

/// Load and validate a model document from disk.
pub fn load_model_file(path: &Path) -> Result<InMemoryModel, Box<dyn Error>> {
    let model = ModelDocument::load(path)?
        .into_model()
        .map_err(|e| format!("Invalid model in '{}': {}", path.display(), e))?;
    info!(path = %path.display(), types = model.types().len(), "loaded model");
    Ok(model)
}
