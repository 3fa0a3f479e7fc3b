//! Utility functions for Connect Docs

use anyhow::{anyhow, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Ensure a directory exists, creating it if necessary
pub fn ensure_directory(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    } else if !path.is_dir() {
        return Err(anyhow!("Path exists but is not a directory: {:?}", path));
    }
    Ok(())
}

/// Get the XDG config directory for Connect Docs
pub fn get_config_dir() -> Result<PathBuf> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| anyhow!("Could not determine config directory"))?
        .join("connect-docs");

    Ok(config_dir)
}

/// Expand `~` and environment variables in a path
pub fn expand_path(path: &Path) -> Result<PathBuf> {
    let path_str = path.to_string_lossy();
    let expanded = shellexpand::full(&path_str)
        .map_err(|e| anyhow!("Failed to expand path {}: {}", path_str, e))?;
    Ok(PathBuf::from(expanded.as_ref()))
}

/// Simple name of a qualified class name: `a.b.Outer$Inner` -> `Inner`
pub fn simple_name(qualified_name: &str) -> &str {
    qualified_name
        .rsplit(['.', '$'])
        .next()
        .unwrap_or(qualified_name)
}

/// `ToUpperCase` -> `toUpperCase`
pub fn lower_camel(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Prefix every line with four spaces
pub fn indent(text: &str) -> String {
    text.lines()
        .map(|line| format!("    {line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format duration as human readable string
pub fn format_duration(duration: std::time::Duration) -> String {
    let secs = duration.as_secs();
    let millis = duration.subsec_millis();

    if secs > 0 {
        format!("{secs}.{millis:03}s")
    } else {
        format!("{millis}ms")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tempfile::TempDir;

    #[test]
    fn test_simple_name() {
        assert_eq!(simple_name("a.b.ToUpperCase"), "ToUpperCase");
        assert_eq!(simple_name("a.b.ToUpperCase$Key"), "Key");
        assert_eq!(simple_name("Plain"), "Plain");
    }

    #[test]
    fn test_lower_camel() {
        assert_eq!(lower_camel("ToUpperCase"), "toUpperCase");
        assert_eq!(lower_camel("x"), "x");
        assert_eq!(lower_camel(""), "");
    }

    #[test]
    fn test_indent() {
        assert_eq!(indent("{\n  \"a\" : 1\n}"), "    {\n      \"a\" : 1\n    }");
        assert_eq!(indent(""), "");
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::from_millis(250)), "250ms");
        assert_eq!(format_duration(Duration::from_millis(1250)), "1.250s");
    }

    #[test]
    fn test_ensure_directory() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("a/b");

        ensure_directory(&nested).unwrap();
        assert!(nested.is_dir());

        let file = temp_dir.path().join("file");
        fs::write(&file, "x").unwrap();
        assert!(ensure_directory(&file).is_err());
    }

    #[test]
    fn test_expand_path_without_variables() {
        let path = expand_path(Path::new("./docs/out")).unwrap();
        assert_eq!(path, PathBuf::from("./docs/out"));
    }
}
