//! Named templates and the registry that renders them

use std::collections::BTreeMap;
use tracing::debug;

use crate::view::View;
use crate::{markdown, rst, RenderError};

/// A named template turning a view into text
pub trait Template: Send + Sync {
    /// Template identifier, e.g. `rst/sink.rst`
    fn name(&self) -> &str;

    /// Render the view
    fn render(&self, view: &View<'_>) -> Result<String, RenderError>;
}

type RenderFn = fn(&View<'_>) -> Result<String, RenderError>;

/// Template backed by a plain function
pub struct FnTemplate {
    name: &'static str,
    render: RenderFn,
}

impl FnTemplate {
    pub const fn new(name: &'static str, render: RenderFn) -> Self {
        Self { name, render }
    }
}

impl Template for FnTemplate {
    fn name(&self) -> &str {
        self.name
    }

    fn render(&self, view: &View<'_>) -> Result<String, RenderError> {
        (self.render)(view)
    }
}

/// Templates keyed by name
pub struct TemplateRegistry {
    templates: BTreeMap<String, Box<dyn Template>>,
}

impl TemplateRegistry {
    /// Empty registry
    pub fn new() -> Self {
        Self {
            templates: BTreeMap::new(),
        }
    }

    /// Registry holding every built-in RST and Markdown template
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for template in rst::templates() {
            registry.register(Box::new(template));
        }
        for template in markdown::templates() {
            registry.register(Box::new(template));
        }
        registry
    }

    /// Add or replace a template
    pub fn register(&mut self, template: Box<dyn Template>) {
        self.templates.insert(template.name().to_string(), template);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.templates.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.templates.keys().map(String::as_str)
    }

    /// Check the view, then render it with the named template
    pub fn render(&self, name: &str, view: &View<'_>) -> Result<String, RenderError> {
        let template = self
            .templates
            .get(name)
            .ok_or_else(|| RenderError::UnknownTemplate(name.to_string()))?;

        view.check()?;
        debug!("Rendering {} view with template {}", view.variant(), name);
        template.render(view)
    }
}

impl Default for TemplateRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::{SchemaView, TransformationExampleView, ExampleDocs};
    use connect_docs_plugin::{Schema, SchemaType};

    #[test]
    fn test_builtin_templates_are_registered() {
        let registry = TemplateRegistry::builtin();
        for name in [
            "rst/source.rst",
            "rst/sink.rst",
            "rst/transformation.rst",
            "rst/converter.rst",
            "rst/configProvider.rst",
            "rst/sourceConnectorExample.rst",
            "rst/sinkConnectorExample.rst",
            "rst/transformationExample.rst",
            "rst/converterExample.rst",
            "rst/configProviderExample.rst",
            "rst/schema.rst",
            "rst/schemas.rst",
            "rst/index.rst",
            "md/README.md",
        ] {
            assert!(registry.contains(name), "missing {name}");
        }
    }

    #[test]
    fn test_unknown_template() {
        let registry = TemplateRegistry::new();
        let schema = SchemaView::build(&Schema::new(SchemaType::String));
        let err = registry.render("rst/nope.rst", &View::Schema(&schema)).unwrap_err();
        assert!(matches!(err, RenderError::UnknownTemplate(name) if name == "rst/nope.rst"));
    }

    #[test]
    fn test_inconsistent_view_is_rejected_before_rendering() {
        let registry = TemplateRegistry::builtin();
        let view = TransformationExampleView {
            class_name: "a.T".to_string(),
            simple_name: "T".to_string(),
            transformation_class: "a.T".to_string(),
            example_name: "bad".to_string(),
            docs: ExampleDocs::default(),
            config_json: None,
            input_json: None,
            output_json: None,
            output_emphasize_lines: [1].into_iter().collect(),
        };
        let err = registry
            .render("rst/transformationExample.rst", &View::TransformationExample(&view))
            .unwrap_err();
        assert!(matches!(err, RenderError::Inconsistent(_)));
    }

    #[test]
    fn test_wrong_view_for_template() {
        let registry = TemplateRegistry::builtin();
        let schema = SchemaView::build(&Schema::new(SchemaType::String));
        let err = registry.render("rst/index.rst", &View::Schema(&schema)).unwrap_err();
        assert!(matches!(err, RenderError::ViewMismatch { .. }));
    }
}
