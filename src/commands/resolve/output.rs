//! Output formatting for resolve command results.

use crate::output::Outputable;
use super::execute::ResolveResult;

impl Outputable for ResolveResult {
    fn to_table(&self) -> String {
        let mut lines = Vec::new();

        lines.push(format!("Element type: {}", self.element_type));
        if let Some(native) = &self.element_native_type {
            lines.push(format!("Native type: {}", native));
        }
        if let Some(path) = &self.path {
            lines.push(format!("Path: {}", path));
        }

        match &self.navigation_source {
            Some(source) => {
                let origin = if source.from_path { ", from path" } else { "" };
                lines.push(format!(
                    "Navigation source: {} ({}{})",
                    source.name, source.kind, origin
                ));
            }
            None => lines.push("Navigation source: none".to_string()),
        }
        lines.push(String::new());

        match self.candidates.len() {
            0 => lines.push("No entity set has this element type.".to_string()),
            1 => lines.push(format!("Matching entity set: {}", self.candidates[0])),
            n => {
                lines.push(format!("Ambiguous: {} entity sets share this element type:", n));
                for name in &self.candidates {
                    lines.push(format!("  {}", name));
                }
            }
        }

        lines.join("\n")
    }
}
