//! Writing scaffolds to disk.

use std::path::{Path, PathBuf};

use testloom_analysis::{FileAnalysisResult, FileType};
use thiserror::Error;

use crate::emit::{render_test_file, scaffold_file_name};
use crate::ScaffoldOptions;

/// Errors that can occur when materializing a scaffold.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// The analysis found nothing testable in the source file.
    #[error("no components or functions found in {0}")]
    NothingToScaffold(String),

    /// The target test file already exists and overwriting was not forced.
    #[error("{0} already exists (use --force to overwrite)")]
    AlreadyExists(PathBuf),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Render and write the test file for one analysis result.
///
/// The file lands next to the analyzed source unless `out_dir` overrides the
/// directory. Returns the path written.
pub fn write_scaffold(
    result: &FileAnalysisResult,
    options: &ScaffoldOptions,
    out_dir: Option<&Path>,
    force: bool,
) -> Result<PathBuf, ScaffoldError> {
    if result.file_type == FileType::Unknown {
        return Err(ScaffoldError::NothingToScaffold(
            result.file_path.to_string(),
        ));
    }

    let source_path = Path::new(result.file_path.as_str());
    let file_name = scaffold_file_name(result.file_path.as_str(), options.suffix);

    let target_dir = match out_dir {
        Some(dir) => dir.to_path_buf(),
        None => source_path.parent().unwrap_or(Path::new(".")).to_path_buf(),
    };
    let target = target_dir.join(file_name);

    if target.exists() && !force {
        return Err(ScaffoldError::AlreadyExists(target));
    }

    std::fs::create_dir_all(&target_dir)?;
    std::fs::write(&target, render_test_file(result, options))?;
    Ok(target)
}
