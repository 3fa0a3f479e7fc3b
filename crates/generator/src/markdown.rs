//! Markdown README template

use connect_docs_plugin::PluginKind;

use crate::template::FnTemplate;
use crate::view::{ClassView, ConfigKeyView, PluginView, View};
use crate::RenderError;

pub fn templates() -> Vec<FnTemplate> {
    vec![FnTemplate::new("md/README.md", readme)]
}

fn config_key(key: &ConfigKeyView) -> String {
    let mut content = format!("##### `{}`\n\n", key.name);
    if !key.documentation.is_empty() {
        content.push_str(&format!("{}\n\n", key.documentation));
    }
    content.push_str(&format!("*Importance:* {}\n\n", key.importance));
    content.push_str(&format!("*Type:* {}\n\n", key.config_type));
    if !key.required {
        content.push_str(&format!("*Default Value:* {}\n\n", key.default_value));
    }
    if !key.valid_values.is_empty() {
        content.push_str(&format!("*Validator:* {}\n\n", key.valid_values));
    }
    content
}

fn class_section(class: &ClassView) -> String {
    let mut content = format!("### {}\n\n", class.title());
    content.push_str(&format!("```\n{}\n```\n\n", class.qualified_name));

    if let Some(description) = &class.documentation.description {
        content.push_str(&format!("{}\n\n", description.trim_end()));
    }
    for (label, text) in [
        ("Note", &class.documentation.note),
        ("Important", &class.documentation.important),
        ("Tip", &class.documentation.tip),
        ("Warning", &class.documentation.warning),
        ("Danger", &class.documentation.danger),
    ] {
        if let Some(text) = text {
            content.push_str(&format!("> **{label}:** {}\n\n", text.trim_end()));
        }
    }

    if let Some(config) = class.config.as_ref().filter(|c| !c.is_empty()) {
        content.push_str("#### Configuration\n\n");
        for key in config {
            content.push_str(&config_key(key));
        }
    }
    content
}

fn readme(view: &View<'_>) -> Result<String, RenderError> {
    let plugin: &PluginView = match view {
        View::Plugin(plugin) => plugin,
        other => {
            return Err(RenderError::ViewMismatch {
                expected: "plugin",
                actual: other.variant(),
            })
        }
    };

    let mut content = format!("# {}\n\n", plugin.title);
    if let Some(description) = &plugin.description {
        content.push_str(&format!("{}\n\n", description.trim_end()));
    }
    if let Some(introduction) = &plugin.introduction {
        content.push_str(&format!("{}\n\n", introduction.trim_end()));
    }

    for kind in PluginKind::ALL {
        let classes = plugin.classes(kind);
        if classes.is_empty() {
            continue;
        }
        content.push_str(&format!("## {}\n\n", kind.title()));
        for class in classes {
            content.push_str(&class_section(class));
        }
    }

    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use connect_docs_plugin::Documentation;

    #[test]
    fn test_readme_sections() {
        let plugin = PluginView {
            title: "Acme Plugins".to_string(),
            description: None,
            introduction: Some("Install into plugin.path.".to_string()),
            scan_root: "acme".to_string(),
            source_connectors: Vec::new(),
            sink_connectors: Vec::new(),
            transformations: vec![ClassView {
                kind: PluginKind::Transformation,
                qualified_name: "acme.ToUpperCase".to_string(),
                simple_name: "ToUpperCase".to_string(),
                version: "1.0".to_string(),
                documentation: Documentation::default().tip("Use with strings."),
                config: Some(Vec::new()),
                examples: Vec::new(),
            }],
            converters: Vec::new(),
            config_providers: Vec::new(),
            schemas: Vec::new(),
        };

        let readme = readme(&View::Plugin(&plugin)).unwrap();
        assert!(readme.starts_with("# Acme Plugins\n\nInstall into plugin.path.\n\n"));
        assert!(readme.contains("## Transformations\n\n### ToUpperCase\n\n```\nacme.ToUpperCase\n```"));
        assert!(readme.contains("> **Tip:** Use with strings."));
        assert!(!readme.contains("#### Configuration"));
    }
}
