//! Wireframe processing pipeline
//!
//! This module ties the stages together for files on disk:
//! 1. **Discovery**: Find `.txt` wireframes under a path
//! 2. **Analysis**: Parse and validate the text
//! 3. **Export**: Render each wireframe to an SVG file

use crate::render_config::RenderConfig;
use crate::source_model::{self, WireframeDocument};
use crate::svg_exporter;
use crate::validation::{self, Diagnostic};
use serde::Serialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Extension of wireframe source files
pub const WIREFRAME_EXTENSION: &str = "txt";

/// A parsed document together with its validation findings
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Analysis {
    pub document: WireframeDocument,
    pub diagnostics: Vec<Diagnostic>,
}

impl Analysis {
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Parse and validate wireframe text
///
/// The two passes are independent: validation reads the raw lines and
/// never looks at the parsed document.
pub fn analyze(text: &str) -> Analysis {
    Analysis {
        document: source_model::parse(text),
        diagnostics: validation::validate(text),
    }
}

/// Read a wireframe file
pub fn read_wireframe(path: &Path) -> Result<String, PipelineError> {
    fs::read_to_string(path).map_err(|e| PipelineError::ReadError(path.to_path_buf(), e))
}

/// Find wireframe files
///
/// # Parameters
/// * `root` - A wireframe file, or a directory to search recursively
///
/// # Returns
/// * `Ok(Vec<PathBuf>)` - The file itself, or every `.txt` file under the
///   directory sorted by file name
/// * `Err(PipelineError)` - The path does not exist or cannot be walked
pub fn discover_wireframes(root: &Path) -> Result<Vec<PathBuf>, PipelineError> {
    if root.is_file() {
        return Ok(vec![root.to_path_buf()]);
    }
    if !root.is_dir() {
        return Err(PipelineError::NotFound(root.to_path_buf()));
    }

    let mut paths = Vec::new();
    for entry in WalkDir::new(root).follow_links(false).sort_by_file_name() {
        let entry = entry.map_err(|e| PipelineError::WalkError(root.to_path_buf(), e))?;
        let path = entry.path();
        if path.is_file() && path.extension().and_then(|s| s.to_str()) == Some(WIREFRAME_EXTENSION) {
            paths.push(path.to_path_buf());
        }
    }

    log::debug!("Discovered {} wireframes under {}", paths.len(), root.display());
    Ok(paths)
}

/// Where the SVG for an input goes
///
/// # Parameters
/// * `input` - Wireframe file, as found by [`discover_wireframes`]
/// * `root` - The path discovery started from
/// * `out_dir` - Optional output directory
///
/// # Returns
/// * `PathBuf` - Next to the input with an `.svg` extension, or under
///   `out_dir` at the input's path relative to `root`
pub fn output_path_for(input: &Path, root: &Path, out_dir: Option<&Path>) -> PathBuf {
    let Some(dir) = out_dir else {
        return input.with_extension("svg");
    };

    let relative = input
        .strip_prefix(root)
        .ok()
        .filter(|relative| !relative.as_os_str().is_empty())
        .or_else(|| input.file_name().map(Path::new))
        .unwrap_or(input);
    dir.join(relative).with_extension("svg")
}

/// One rendered wireframe
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedFile {
    pub input: PathBuf,
    pub output: PathBuf,
    pub bytes: usize,
}

/// Render one wireframe file to SVG
///
/// # Parameters
/// * `input` - Wireframe text file
/// * `output` - SVG destination; parent directories are created
/// * `config` - Render settings
///
/// # Returns
/// * `Ok(usize)` - Bytes written
/// * `Err(PipelineError)` - Error reading the input or writing the output
pub fn render_file(input: &Path, output: &Path, config: &RenderConfig) -> Result<usize, PipelineError> {
    let text = read_wireframe(input)?;
    let svg = svg_exporter::render_svg(&text, Some(config));

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| PipelineError::WriteError(parent.to_path_buf(), e))?;
    }
    fs::write(output, &svg).map_err(|e| PipelineError::WriteError(output.to_path_buf(), e))?;

    log::info!("Rendered {} -> {}", input.display(), output.display());
    Ok(svg.len())
}

/// Render many wireframes
///
/// Files are rendered in parallel when the `parallel` feature is enabled.
/// Output paths are resolved up front and must be distinct; nothing is
/// written when two inputs map to the same output. Otherwise the first
/// failure aborts the batch.
pub fn render_all(
    inputs: &[PathBuf],
    root: &Path,
    out_dir: Option<&Path>,
    config: &RenderConfig,
) -> Result<Vec<RenderedFile>, PipelineError> {
    let jobs: Vec<(&PathBuf, PathBuf)> = inputs
        .iter()
        .map(|input| (input, output_path_for(input, root, out_dir)))
        .collect();

    let mut seen = HashSet::new();
    for (input, output) in &jobs {
        if !seen.insert(output) {
            return Err(PipelineError::DuplicateOutput(output.clone(), input.to_path_buf()));
        }
    }

    let render_one = |(input, output): &(&PathBuf, PathBuf)| -> Result<RenderedFile, PipelineError> {
        let bytes = render_file(input, output, config)?;
        Ok(RenderedFile {
            input: input.to_path_buf(),
            output: output.clone(),
            bytes,
        })
    };

    #[cfg(feature = "parallel")]
    let rendered: Result<Vec<_>, PipelineError> = jobs.par_iter().map(render_one).collect();

    #[cfg(not(feature = "parallel"))]
    let rendered: Result<Vec<_>, PipelineError> = jobs.iter().map(render_one).collect();

    let rendered = rendered?;
    log::debug!("Rendered {} wireframes", rendered.len());
    Ok(rendered)
}

/// Pipeline errors
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("No such file or directory: {path}", path = .0.display())]
    NotFound(PathBuf),

    #[error("IO error reading {path}: {source}", path = .0.display(), source = .1)]
    ReadError(PathBuf, #[source] std::io::Error),

    #[error("IO error writing {path}: {source}", path = .0.display(), source = .1)]
    WriteError(PathBuf, #[source] std::io::Error),

    #[error("Error walking {path}: {source}", path = .0.display(), source = .1)]
    WalkError(PathBuf, #[source] walkdir::Error),

    #[error("Output {path} would be written twice (again for {input})", path = .0.display(), input = .1.display())]
    DuplicateOutput(PathBuf, PathBuf),
}
