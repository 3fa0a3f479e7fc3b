//! Result types for documentation runs

use connect_docs_plugin::PluginKind;
use std::path::PathBuf;

/// One example that could not be documented
#[derive(Debug, Clone)]
pub struct ExampleFailure {
    pub kind: PluginKind,
    pub class_name: String,
    pub example: String,
    pub message: String,
}

impl std::fmt::Display for ExampleFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} example '{}': {}",
            self.kind, self.class_name, self.example, self.message
        )
    }
}

/// Overall documentation run result
#[derive(Debug, Default)]
pub struct GenerationResult {
    pub files_written: Vec<PathBuf>,
    pub failures: Vec<ExampleFailure>,
    pub statistics: GenerationStatistics,
}

impl GenerationResult {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Generation statistics
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenerationStatistics {
    /// Total processing time in milliseconds
    pub total_processing_time_ms: u64,

    /// Number of plugin classes documented
    pub classes_documented: usize,

    /// Number of examples rendered
    pub examples_rendered: usize,

    /// Number of schema pages written
    pub schemas_documented: usize,

    /// Number of files generated
    pub files_generated: usize,

    /// Number of example failures
    pub error_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_display() {
        let failure = ExampleFailure {
            kind: PluginKind::Transformation,
            class_name: "a.ToUpperCase".to_string(),
            example: "bad".to_string(),
            message: "boom".to_string(),
        };
        assert_eq!(failure.to_string(), "transformation a.ToUpperCase example 'bad': boom");

        let result = GenerationResult {
            failures: vec![failure],
            ..Default::default()
        };
        assert!(!result.is_success());
    }
}
