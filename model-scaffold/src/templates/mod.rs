//! Template sets and where their text comes from

use serde_json::{json, Value};
use std::path::PathBuf;

use crate::model_type::ModelType;
use crate::request::GenerationRequest;

pub mod files;
pub mod h2o_mojo;
pub mod python_sklearn;
pub mod source;

pub use files::*;
pub use source::{TemplateSource, DOCUMENTS};

/// Which template set an identifier belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateSetKind {
    /// Files every scaffold gets
    Common,
    /// Files specific to one model type
    Model(ModelType),
}

impl TemplateSetKind {
    /// Path of a template relative to a template root directory
    #[must_use]
    pub fn relative_path(self, name: &str) -> PathBuf {
        match self {
            Self::Common => PathBuf::from(name),
            Self::Model(model_type) => PathBuf::from(model_type.template_dir()).join(name),
        }
    }

    /// Built-in text for a template of this set
    #[must_use]
    pub fn embedded(self, name: &str) -> Option<&'static str> {
        match self {
            Self::Common => files::common(name),
            Self::Model(ModelType::PythonSklearn) => python_sklearn::get(name),
            Self::Model(ModelType::H2oMojo) => h2o_mojo::get(name),
        }
    }
}

/// Rendering instructions for one output file
#[derive(Debug, Clone)]
pub struct TemplateEntry {
    /// Output path, relative to the scaffold root
    pub output: &'static str,
    /// Template identifier within its set
    pub source: &'static str,
    /// Add the owner-execute bit after writing
    pub executable: bool,
    /// Substitution values
    pub values: Value,
    /// Human-readable description
    pub description: &'static str,
}

impl TemplateEntry {
    /// Entry whose output path matches its template identifier
    fn new(path: &'static str, description: &'static str) -> Self {
        Self {
            output: path,
            source: path,
            executable: false,
            values: json!({}),
            description,
        }
    }

    const fn executable(mut self) -> Self {
        self.executable = true;
        self
    }

    fn with_values(mut self, values: Value) -> Self {
        self.values = values;
        self
    }
}

/// Ordered set of templates rendered together
#[derive(Debug, Clone)]
pub struct TemplateSpec {
    /// Where the templates are looked up
    pub kind: TemplateSetKind,
    /// Entries in rendering order
    pub entries: Vec<TemplateEntry>,
}

impl TemplateSpec {
    /// Templates every scaffold gets
    #[must_use]
    pub fn common(request: &GenerationRequest) -> Self {
        Self {
            kind: TemplateSetKind::Common,
            entries: vec![
                TemplateEntry::new("container_util.sh", "container build/push script")
                    .executable()
                    .with_values(json!({
                        "target_docker_image": request.target_docker_image(),
                    })),
                TemplateEntry::new("deployment.yml", "Kubernetes deployment").with_values(json!({
                    "resource_name": request.k8s_resource_name(),
                    "namespace": request.k8s_namespace(),
                })),
            ],
        }
    }

    /// Templates for the request's model type
    ///
    /// Every model type renders the same file names; only the set they are
    /// read from differs.
    #[must_use]
    pub fn for_model(request: &GenerationRequest) -> Self {
        Self {
            kind: TemplateSetKind::Model(request.model_type()),
            entries: vec![
                TemplateEntry::new("environment.yml", "conda environment"),
                TemplateEntry::new("Dockerfile", "image definition").with_values(json!({
                    "base_docker_image": request.base_docker_image(),
                })),
                TemplateEntry::new("src/prediction_service.py", "prediction service"),
                TemplateEntry::new("src/utils.py", "model loading helpers"),
                TemplateEntry::new("requirements.txt", "Python dependencies"),
                TemplateEntry::new("model/metadata.yml", "model metadata"),
            ],
        }
    }
}
