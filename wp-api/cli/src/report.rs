//! Rendering of discovered classes for the terminal.

use serde::Serialize;
use wp_api_lib::{ClassSpec, Registries};

/// Everything `wp-api discover` prints.
#[derive(Debug, Serialize)]
pub struct Report {
    pub prefix: String,
    pub models: Vec<ClassRow>,
    pub collections: Vec<ClassRow>,
}

/// One generated class.
#[derive(Debug, Serialize)]
pub struct ClassRow {
    pub name: String,
    pub path: String,
    pub url: String,
    pub methods: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

impl ClassRow {
    fn from_spec(spec: &ClassSpec, model: Option<String>) -> Self {
        Self {
            name: spec.class_name().to_string(),
            path: spec.route().path().to_string(),
            url: spec.url().pattern(),
            methods: spec
                .route()
                .descriptor()
                .supported_methods()
                .iter()
                .map(ToString::to_string)
                .collect(),
            model,
        }
    }
}

impl Report {
    pub fn new(prefix: String, registries: &Registries) -> Self {
        let models = registries
            .models()
            .values()
            .map(|class| ClassRow::from_spec(class.spec(), None))
            .collect();
        let collections = registries
            .collections()
            .values()
            .map(|class| {
                ClassRow::from_spec(class.spec(), class.linked_model_name().map(str::to_string))
            })
            .collect();

        Self {
            prefix,
            models,
            collections,
        }
    }

    /// Renders the report as aligned plain text.
    pub fn to_text(&self) -> String {
        let width = self
            .models
            .iter()
            .chain(&self.collections)
            .map(|row| row.name.len())
            .max()
            .unwrap_or(0);

        let mut out = format!("API prefix: {}\n", self.prefix);

        out.push_str(&format!("\nModels ({})\n", self.models.len()));
        for row in &self.models {
            out.push_str(&format!("  {:<width$}  {}\n", row.name, row.url));
        }

        out.push_str(&format!("\nCollections ({})\n", self.collections.len()));
        for row in &self.collections {
            let link = match &row.model {
                Some(model) => format!("[model: {model}]"),
                None => "[no model]".to_string(),
            };
            out.push_str(&format!("  {:<width$}  {}  {}\n", row.name, row.url, link));
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wp_api_lib::{ClassifiedRoute, RouteDescriptor, RouteKind};

    const PREFIX: &str = "https://example.com/wp-json/wp/v2/";

    fn registries() -> Registries {
        let mut registries = Registries::default();
        registries.register_models(
            vec![ClassifiedRoute::new(
                "/wp/v2/tags/(?P<id>[\\d]+)",
                RouteDescriptor::with_methods(["GET", "DELETE"]),
                RouteKind::Model,
            )],
            PREFIX,
        );
        registries.register_collections(
            vec![
                ClassifiedRoute::new(
                    "/wp/v2/tags",
                    RouteDescriptor::with_methods(["GET", "POST"]),
                    RouteKind::Collection,
                ),
                ClassifiedRoute::new(
                    "/wp/v2/search",
                    RouteDescriptor::with_methods(["GET"]),
                    RouteKind::Collection,
                ),
            ],
            PREFIX,
        );
        registries
    }

    #[test]
    fn test_rows() {
        let report = Report::new(PREFIX.to_string(), &registries());

        assert_eq!(report.models.len(), 1);
        assert_eq!(report.models[0].url, format!("{PREFIX}tags/{{id}}"));
        assert_eq!(report.models[0].methods, vec!["GET", "DELETE"]);

        assert_eq!(report.collections[0].model.as_deref(), Some("Tags"));
        assert_eq!(report.collections[1].model, None);
    }

    #[test]
    fn test_text_lists_links() {
        let text = Report::new(PREFIX.to_string(), &registries()).to_text();
        assert!(text.contains("Models (1)"));
        assert!(text.contains("Collections (2)"));
        assert!(text.contains("[model: Tags]"));
        assert!(text.contains("[no model]"));
    }

    #[test]
    fn test_json_omits_model_for_models() {
        let report = Report::new(PREFIX.to_string(), &registries());
        let value = serde_json::to_value(&report).unwrap();
        assert!(value["models"][0].get("model").is_none());
        assert_eq!(value["collections"][0]["model"], "Tags");
    }
}
