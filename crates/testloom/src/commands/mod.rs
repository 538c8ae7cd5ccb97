//! CLI subcommands.

pub mod analyze;
pub mod generate;

use std::path::{Path, PathBuf};

/// Resolve source files from glob patterns, or walk the working directory
/// (honoring ignore files) when no patterns are given.
pub(crate) fn collect_files(patterns: &[String]) -> Vec<PathBuf> {
    if patterns.is_empty() {
        return ignore::Walk::new(".")
            .flatten()
            .map(|entry| entry.into_path())
            .filter(|path| path.is_file() && is_source_file(path))
            .collect();
    }

    let mut files: Vec<PathBuf> = Vec::new();
    for pattern in patterns {
        match glob::glob(pattern) {
            Ok(paths) => {
                files.extend(paths.flatten().filter(|p| p.is_file()));
            }
            Err(e) => {
                eprintln!("\x1b[33mWarning:\x1b[0m invalid pattern '{}': {}", pattern, e);
            }
        }
    }
    files
}

/// Analyzable source files: JS/TS, not declarations, not already tests.
pub(crate) fn is_source_file(path: &Path) -> bool {
    let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
        return false;
    };
    if !matches!(ext, "js" | "jsx" | "ts" | "tsx") {
        return false;
    }

    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    if name.contains(".test.") || name.contains(".spec.") || name.ends_with(".d.ts") {
        return false;
    }

    !path
        .components()
        .any(|c| c.as_os_str() == "node_modules" || c.as_os_str() == "dist")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_file_filter() {
        assert!(is_source_file(Path::new("src/Button.tsx")));
        assert!(is_source_file(Path::new("lib/util.js")));
        assert!(!is_source_file(Path::new("src/Button.test.tsx")));
        assert!(!is_source_file(Path::new("src/Button.spec.jsx")));
        assert!(!is_source_file(Path::new("src/types.d.ts")));
        assert!(!is_source_file(Path::new("node_modules/react/index.js")));
        assert!(!is_source_file(Path::new("styles.css")));
    }
}
