//! Documentation driver
//!
//! Walks every loaded plugin, renders each example and class page, then the
//! index, the schema pages and the README.

pub mod examples;
pub mod schemas;

#[cfg(test)]
mod tests;

pub use examples::{ExampleRenderer, RenderedExample};
pub use schemas::SchemaCollector;

use anyhow::Result;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};

use connect_docs_generator::{
    rst, ClassView, ConfigKeyView, DocumentFormat, ExampleFailure, GenerationResult,
    OutputSink, PluginView, TemplateRegistry, View,
};
use connect_docs_plugin::PluginKind;

use crate::config::Config;
use crate::example::ExampleResolver;
use crate::plugin::{Plugin, PluginClassDescriptor, Registry};

/// Renders and writes the documentation of loaded plugins
pub struct DocsPipeline<'a> {
    config: &'a Config,
    registry: &'a Registry,
    templates: &'a TemplateRegistry,
}

impl<'a> DocsPipeline<'a> {
    pub fn new(config: &'a Config, registry: &'a Registry, templates: &'a TemplateRegistry) -> Self {
        Self {
            config,
            registry,
            templates,
        }
    }

    /// Render everything for `plugins` into `sink`.
    ///
    /// A failing example is recorded and skipped unless `fail_fast` is set.
    pub async fn run(&self, plugins: &[Arc<Plugin>], sink: &dyn OutputSink) -> Result<GenerationResult> {
        let output = self.config.output()?;
        let resolver = ExampleResolver::new(self.config.examples_dir()?);
        let renderer = ExampleRenderer::new(self.registry, &resolver, self.templates);
        let write_rst = output.wants(DocumentFormat::Rst);

        let mut result = GenerationResult::default();
        let mut schemas = SchemaCollector::new();
        for path in self.config.schema_paths()? {
            schemas.load_file(&path)?;
        }

        let mut plugin_view = self.plugin_view(plugins);
        for plugin in plugins {
            for kind in PluginKind::ALL {
                for descriptor in plugin.classes(kind) {
                    let mut class = class_view(descriptor);

                    for file in resolver.resolve(descriptor) {
                        match renderer.render(descriptor, &file) {
                            Ok(rendered) => {
                                rendered.schemas.iter().for_each(|s| schemas.add(s));
                                if write_rst {
                                    let path = output.base_path.join(&rendered.path);
                                    self.write(sink, &path, &rendered.content, &mut result)
                                        .await?;
                                }
                                class.examples.push(rendered.link);
                                result.statistics.examples_rendered += 1;
                            }
                            Err(e) if self.config.generation.fail_fast => return Err(e.into()),
                            Err(e) => {
                                warn!("Example {} of {} failed: {}", file.path, descriptor.qualified_name, e);
                                result.failures.push(ExampleFailure {
                                    kind,
                                    class_name: descriptor.qualified_name.clone(),
                                    example: file.path.clone(),
                                    message: e.to_string(),
                                });
                            }
                        }
                    }

                    if write_rst {
                        let content = self
                            .templates
                            .render(rst::class_template(kind), &View::Class(&class))?;
                        let path = output
                            .base_path
                            .join(kind.directory())
                            .join(format!("{}.rst", descriptor.simple_name));
                        self.write(sink, &path, &content, &mut result).await?;
                    }

                    result.statistics.classes_documented += 1;
                    push_class(&mut plugin_view, kind, class);
                }
            }
        }

        result.statistics.schemas_documented = schemas.len();
        plugin_view.schemas = schemas.into_views();

        if write_rst {
            let index = self.templates.render("rst/index.rst", &View::Plugin(&plugin_view))?;
            self.write(sink, &output.base_path.join("index.rst"), &index, &mut result)
                .await?;

            if !plugin_view.schemas.is_empty() {
                let overview = self
                    .templates
                    .render("rst/schemas.rst", &View::Plugin(&plugin_view))?;
                self.write(sink, &output.base_path.join("schemas.rst"), &overview, &mut result)
                    .await?;

                for schema in &plugin_view.schemas {
                    let content = self.templates.render("rst/schema.rst", &View::Schema(schema))?;
                    let path = output
                        .base_path
                        .join("schemas")
                        .join(format!("{}.rst", schema.file_stem()));
                    self.write(sink, &path, &content, &mut result).await?;
                }
            }
        }

        if output.wants(DocumentFormat::Markdown) {
            let readme = self.templates.render("md/README.md", &View::Plugin(&plugin_view))?;
            self.write(sink, &output.readme_path(), &readme, &mut result).await?;
        }

        result.statistics.error_count = result.failures.len();
        info!(
            "Documented {} classes, {} examples, {} failures",
            result.statistics.classes_documented,
            result.statistics.examples_rendered,
            result.statistics.error_count
        );
        Ok(result)
    }

    fn plugin_view(&self, plugins: &[Arc<Plugin>]) -> PluginView {
        let scan_root = plugins
            .iter()
            .map(|p| p.scan_root.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        let metadata = &self.config.plugin;

        PluginView {
            title: metadata.title.clone().unwrap_or_else(|| scan_root.clone()),
            description: metadata.description.clone(),
            introduction: metadata.introduction.clone(),
            scan_root,
            source_connectors: Vec::new(),
            sink_connectors: Vec::new(),
            transformations: Vec::new(),
            converters: Vec::new(),
            config_providers: Vec::new(),
            schemas: Vec::new(),
        }
    }

    async fn write(
        &self,
        sink: &dyn OutputSink,
        path: &Path,
        content: &str,
        result: &mut GenerationResult,
    ) -> Result<()> {
        info!("Writing {}", path.display());
        sink.write(path, content).await?;
        result.files_written.push(PathBuf::from(path));
        result.statistics.files_generated += 1;
        Ok(())
    }
}

/// Class page view without example links
pub fn class_view(descriptor: &PluginClassDescriptor) -> ClassView {
    ClassView {
        kind: descriptor.kind,
        qualified_name: descriptor.qualified_name.clone(),
        simple_name: descriptor.simple_name.clone(),
        version: descriptor.version.clone(),
        documentation: descriptor.documentation.clone(),
        config: descriptor
            .configuration
            .as_ref()
            .map(ConfigKeyView::from_config_def),
        examples: Vec::new(),
    }
}

fn push_class(view: &mut PluginView, kind: PluginKind, class: ClassView) {
    match kind {
        PluginKind::SourceConnector => view.source_connectors.push(class),
        PluginKind::SinkConnector => view.sink_connectors.push(class),
        PluginKind::Transformation => view.transformations.push(class),
        PluginKind::Converter => view.converters.push(class),
        PluginKind::ConfigProvider => view.config_providers.push(class),
    }
}
