//! Navigation source resolution.

use tracing::{debug, trace};

use crate::model::{EdmModel, EntitySet, NavigationSource, SchemaType};
use crate::path::ODataPath;

/// Determine which navigation source a query over `element_type` targets.
///
/// A navigation source carried by `path` is returned as-is, without checking
/// it against `element_type`. Otherwise the model's container is scanned and
/// the entity set is returned only when exactly one set has `element_type` as
/// its element type. No container, no match, or several matches all yield
/// `None`.
pub fn resolve_navigation_source(
    model: &dyn EdmModel,
    element_type: &SchemaType,
    path: Option<&ODataPath>,
) -> Option<NavigationSource> {
    if let Some(source) = path.and_then(ODataPath::navigation_source) {
        debug!(source = source.name(), "navigation source taken from path");
        return Some(source.clone());
    }

    if model.entity_container().is_none() {
        debug!(element_type = %element_type, "model has no entity container");
        return None;
    }

    let mut matches = matching_entity_sets(model, element_type).into_iter();
    match (matches.next(), matches.next()) {
        (Some(set), None) => {
            debug!(element_type = %element_type, set = set.name(), "resolved unique entity set");
            Some(NavigationSource::EntitySet(set.clone()))
        }
        (None, _) => {
            debug!(element_type = %element_type, "no entity set matches element type");
            None
        }
        (Some(_), Some(_)) => {
            debug!(
                element_type = %element_type,
                candidates = 2 + matches.len(),
                "several entity sets match element type, leaving navigation source unresolved"
            );
            None
        }
    }
}

/// Entity sets in the model's container whose element type is `element_type`,
/// in declaration order.
pub fn matching_entity_sets<'m>(
    model: &'m dyn EdmModel,
    element_type: &SchemaType,
) -> Vec<&'m EntitySet> {
    let Some(container) = model.entity_container() else {
        return Vec::new();
    };
    container
        .entity_sets()
        .iter()
        .filter(|set| {
            let matched = set.element_type() == element_type;
            trace!(set = set.name(), matched, "scanned entity set");
            matched
        })
        .collect()
}
