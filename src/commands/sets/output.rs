//! Output formatting for sets command results.

use crate::output::Outputable;
use super::execute::SetsResult;

impl Outputable for SetsResult {
    fn to_table(&self) -> String {
        let Some(container) = &self.container else {
            return "Model declares no entity container.".to_string();
        };

        let mut lines = Vec::new();
        match &self.type_filter {
            Some(ty) => lines.push(format!("Container: {} (type: {})", container, ty)),
            None => lines.push(format!("Container: {}", container)),
        }
        lines.push(String::new());

        if self.sources.is_empty() {
            lines.push("No navigation sources found.".to_string());
            return lines.join("\n");
        }

        lines.push(format!("Found {} navigation source(s):", self.sources.len()));
        let width = self.sources.iter().map(|s| s.name.len()).max().unwrap_or(0);
        for source in &self.sources {
            lines.push(format!(
                "  {:<width$}  {:<10}  {}",
                source.name,
                source.kind,
                source.element_type,
                width = width
            ));
        }

        lines.join("\n")
    }
}
