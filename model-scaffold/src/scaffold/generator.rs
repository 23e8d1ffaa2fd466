//! Scaffold generator
//!
//! Materializes a project skeleton for one model type:
//! 1. Base directories (`src`, `model`)
//! 2. Common templates (`container_util.sh`, `deployment.yml`)
//! 3. Model-type templates (Dockerfile, service sources, metadata, ...)
//! 4. Extra empty directories for model types that need them
//! 5. Owner-execute bit on executable outputs
//! 6. Reference documents (`README.md`, `DEPLOYMENT.md`)
//!
//! Generation stops at the first failure. Files already written stay on disk.

use handlebars::Handlebars;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::{Result, ScaffoldError};
use crate::model_type::ModelType;
use crate::request::GenerationRequest;
use crate::templates::{TemplateEntry, TemplateSource, TemplateSpec, DOCUMENTS};

/// Directories every scaffold starts with
pub const BASE_DIRECTORIES: [&str; 2] = ["src", "model"];

/// A directory or file produced by a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPath {
    /// Path relative to the output directory
    pub path: PathBuf,
    /// Human-readable description
    pub description: String,
}

/// Everything a successful run produced, in creation order
#[derive(Debug, Clone)]
pub struct GenerationReport {
    /// Output directory
    pub output_dir: PathBuf,
    /// Effective model type
    pub model_type: ModelType,
    /// Created directories and written files
    pub paths: Vec<GeneratedPath>,
}

impl GenerationReport {
    fn record(&mut self, path: impl Into<PathBuf>, description: impl Into<String>) {
        self.paths.push(GeneratedPath {
            path: path.into(),
            description: description.into(),
        });
    }
}

/// Model scaffold generator
pub struct ScaffoldGenerator {
    source: TemplateSource,
    handlebars: Handlebars<'static>,
}

impl ScaffoldGenerator {
    /// Create a generator reading templates from `source`
    #[must_use]
    pub fn new(source: TemplateSource) -> Self {
        let mut handlebars = Handlebars::new();

        // Disable HTML escaping since we're generating code
        handlebars.register_escape_fn(handlebars::no_escape);
        // Unknown placeholders are errors, not empty strings
        handlebars.set_strict_mode(true);

        Self { source, handlebars }
    }

    /// Generate the scaffold described by `request`
    ///
    /// Existing directories are reused and existing files overwritten.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A directory cannot be created
    /// - A template cannot be loaded or rendered
    /// - A file cannot be written or its permissions changed
    /// - A reference document cannot be copied
    pub fn generate(&self, request: &GenerationRequest) -> Result<GenerationReport> {
        let root = request.output_dir();
        let model_type = request.model_type();

        info!(
            dir = %root.display(),
            model_type = %model_type,
            "Generating model scaffold"
        );

        let mut report = GenerationReport {
            output_dir: root.to_path_buf(),
            model_type,
            paths: Vec::new(),
        };

        Self::create_directories(root, &BASE_DIRECTORIES, &mut report)?;
        self.apply_templates(root, &TemplateSpec::common(request), &mut report)?;
        self.apply_templates(root, &TemplateSpec::for_model(request), &mut report)?;
        Self::create_directories(root, model_type.extra_directories(), &mut report)?;
        self.copy_documents(root, &mut report)?;

        info!(
            dir = %root.display(),
            paths = report.paths.len(),
            "Model scaffold generated"
        );

        Ok(report)
    }

    /// Create directories under `root`, tolerating ones that already exist
    fn create_directories(
        root: &Path,
        directories: &[&str],
        report: &mut GenerationReport,
    ) -> Result<()> {
        for dir in directories {
            let path = root.join(dir);
            fs::create_dir_all(&path).map_err(|e| ScaffoldError::io(&path, e))?;
            debug!(path = %path.display(), "Created directory");
            report.record(format!("{dir}/"), "directory");
        }

        Ok(())
    }

    fn apply_templates(
        &self,
        root: &Path,
        spec: &TemplateSpec,
        report: &mut GenerationReport,
    ) -> Result<()> {
        for entry in &spec.entries {
            self.apply_template(root, spec, entry)?;
            report.record(entry.output, entry.description);
        }

        Ok(())
    }

    /// Render a single template and write it to its output path
    fn apply_template(&self, root: &Path, spec: &TemplateSpec, entry: &TemplateEntry) -> Result<()> {
        let template = self.source.load(spec.kind, entry.source)?;

        let rendered = self
            .handlebars
            .render_template(&template, &entry.values)
            .map_err(|e| ScaffoldError::Render {
                template: spec.kind.relative_path(entry.source).display().to_string(),
                source: Box::new(e),
            })?;

        let path = root.join(entry.output);
        fs::write(&path, rendered).map_err(|e| ScaffoldError::io(&path, e))?;
        debug!(path = %path.display(), "Rendered template");

        if entry.executable {
            mark_executable(&path)?;
            debug!(path = %path.display(), "Marked executable");
        }

        Ok(())
    }

    fn copy_documents(&self, root: &Path, report: &mut GenerationReport) -> Result<()> {
        for name in DOCUMENTS {
            let dest = root.join(name);
            self.source.copy_document(name, &dest)?;
            debug!(path = %dest.display(), "Copied document");
            report.record(name, "reference document");
        }

        Ok(())
    }
}

impl Default for ScaffoldGenerator {
    fn default() -> Self {
        Self::new(TemplateSource::Embedded)
    }
}

/// Add the owner-execute bit, keeping every other permission bit
#[cfg(unix)]
fn mark_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let mut perms = fs::metadata(path)
        .map_err(|e| ScaffoldError::io(path, e))?
        .permissions();
    perms.set_mode(perms.mode() | 0o100);
    fs::set_permissions(path, perms).map_err(|e| ScaffoldError::io(path, e))
}

#[cfg(not(unix))]
#[allow(clippy::unnecessary_wraps)]
fn mark_executable(_path: &Path) -> Result<()> {
    Ok(())
}
