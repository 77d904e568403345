//! Shared test utilities for model and command tests.

use std::io::Write;
use std::sync::Arc;

use tempfile::NamedTempFile;

use crate::context::SharedModel;
use crate::model::ModelDocument;

/// Create a temporary file containing the given content.
pub fn create_temp_json_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write temp file");
    file
}

/// Parse and validate a model document into a shared model.
pub fn load_model(json: &str) -> SharedModel {
    let model = ModelDocument::from_json(json)
        .expect("Fixture should be valid JSON")
        .into_model()
        .expect("Fixture should be a valid model");
    Arc::new(model)
}
