//! Validated generation inputs

use std::path::{Path, PathBuf};

use crate::config::DefaultSettings;
use crate::error::{Result, ScaffoldError};
use crate::model_type::ModelType;

/// Inputs for a single scaffold run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    output_dir: PathBuf,
    model_type: ModelType,
    base_docker_image: String,
    target_docker_image: String,
    k8s_resource_name: String,
    k8s_namespace: String,
}

impl GenerationRequest {
    /// Create a request from already validated values
    pub fn new(
        output_dir: impl Into<PathBuf>,
        model_type: ModelType,
        base_docker_image: impl Into<String>,
        target_docker_image: impl Into<String>,
        k8s_resource_name: impl Into<String>,
        k8s_namespace: impl Into<String>,
    ) -> Self {
        Self {
            output_dir: output_dir.into(),
            model_type,
            base_docker_image: base_docker_image.into(),
            target_docker_image: target_docker_image.into(),
            k8s_resource_name: k8s_resource_name.into(),
            k8s_namespace: k8s_namespace.into(),
        }
    }

    /// Directory the scaffold is written into
    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Effective model type (`python` already folded into `python_sklearn`)
    #[must_use]
    pub const fn model_type(&self) -> ModelType {
        self.model_type
    }

    /// Image the generated Dockerfile builds `FROM`
    #[must_use]
    pub fn base_docker_image(&self) -> &str {
        &self.base_docker_image
    }

    /// Image `container_util.sh` builds and pushes
    #[must_use]
    pub fn target_docker_image(&self) -> &str {
        &self.target_docker_image
    }

    /// Kubernetes resource name
    #[must_use]
    pub fn k8s_resource_name(&self) -> &str {
        &self.k8s_resource_name
    }

    /// Kubernetes namespace
    #[must_use]
    pub fn k8s_namespace(&self) -> &str {
        &self.k8s_namespace
    }
}

/// Raw, unvalidated options as they arrive from the command line
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// `--dir`
    pub dir: PathBuf,
    /// `--model-type`
    pub model_type: String,
    /// `--base-docker-image`
    pub base_docker_image: Option<String>,
    /// `--target-docker-image`
    pub target_docker_image: Option<String>,
    /// `--k8s-resource-name`
    pub k8s_resource_name: Option<String>,
    /// `--k8s-namespace`
    pub k8s_namespace: Option<String>,
}

impl RequestOptions {
    /// Validate the options, filling gaps from configured defaults
    ///
    /// The model type is checked first so a bad `--model-type` is always the
    /// reported problem.
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::InvalidModelType`] for an unknown model type
    /// and [`ScaffoldError::MissingOption`] when a value is neither given
    /// nor configured.
    pub fn resolve(self, defaults: &DefaultSettings) -> Result<GenerationRequest> {
        let model_type: ModelType = self.model_type.parse()?;

        let base_docker_image = pick(
            self.base_docker_image,
            defaults.base_docker_image.as_ref(),
            "--base-docker-image",
        )?;
        let target_docker_image = pick(
            self.target_docker_image,
            defaults.target_docker_image.as_ref(),
            "--target-docker-image",
        )?;
        let k8s_resource_name = pick(
            self.k8s_resource_name,
            defaults.k8s_resource_name.as_ref(),
            "--k8s-resource-name",
        )?;
        let k8s_namespace = pick(
            self.k8s_namespace,
            defaults.k8s_namespace.as_ref(),
            "--k8s-namespace",
        )?;

        Ok(GenerationRequest {
            output_dir: self.dir,
            model_type,
            base_docker_image,
            target_docker_image,
            k8s_resource_name,
            k8s_namespace,
        })
    }
}

fn pick(flag: Option<String>, fallback: Option<&String>, name: &'static str) -> Result<String> {
    flag.or_else(|| fallback.cloned())
        .ok_or(ScaffoldError::MissingOption { flag: name })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(model_type: &str) -> RequestOptions {
        RequestOptions {
            dir: PathBuf::from("/tmp/out"),
            model_type: model_type.to_string(),
            base_docker_image: Some("py:3.9".to_string()),
            target_docker_image: Some("myrepo/img:1".to_string()),
            k8s_resource_name: Some("svc".to_string()),
            k8s_namespace: Some("default".to_string()),
        }
    }

    #[test]
    fn test_resolve_from_flags() {
        let request = options("python").resolve(&DefaultSettings::default()).unwrap();
        assert_eq!(request.output_dir(), Path::new("/tmp/out"));
        assert_eq!(request.model_type(), ModelType::PythonSklearn);
        assert_eq!(request.base_docker_image(), "py:3.9");
        assert_eq!(request.target_docker_image(), "myrepo/img:1");
        assert_eq!(request.k8s_resource_name(), "svc");
        assert_eq!(request.k8s_namespace(), "default");
    }

    #[test]
    fn test_python_alias_resolves_identically() {
        let defaults = DefaultSettings::default();
        assert_eq!(
            options("python").resolve(&defaults).unwrap(),
            options("python_sklearn").resolve(&defaults).unwrap()
        );
    }

    #[test]
    fn test_flags_override_defaults() {
        let defaults = DefaultSettings {
            base_docker_image: Some("python:3.8".to_string()),
            k8s_namespace: Some("models".to_string()),
            ..DefaultSettings::default()
        };
        let request = options("h2o_mojo").resolve(&defaults).unwrap();
        assert_eq!(request.base_docker_image(), "py:3.9");
        assert_eq!(request.k8s_namespace(), "default");
    }

    #[test]
    fn test_defaults_fill_missing_flags() {
        let defaults = DefaultSettings {
            base_docker_image: Some("python:3.8".to_string()),
            k8s_namespace: Some("models".to_string()),
            ..DefaultSettings::default()
        };
        let mut opts = options("h2o_mojo");
        opts.base_docker_image = None;
        opts.k8s_namespace = None;

        let request = opts.resolve(&defaults).unwrap();
        assert_eq!(request.base_docker_image(), "python:3.8");
        assert_eq!(request.k8s_namespace(), "models");
    }

    #[test]
    fn test_missing_option() {
        let mut opts = options("python");
        opts.k8s_resource_name = None;

        let err = opts.resolve(&DefaultSettings::default()).unwrap_err();
        assert!(matches!(
            err,
            ScaffoldError::MissingOption {
                flag: "--k8s-resource-name"
            }
        ));
    }

    #[test]
    fn test_invalid_model_type_reported_before_missing_options() {
        let opts = RequestOptions {
            dir: PathBuf::from("/tmp/out"),
            model_type: "bogus".to_string(),
            ..RequestOptions::default()
        };

        let err = opts.resolve(&DefaultSettings::default()).unwrap_err();
        assert!(matches!(err, ScaffoldError::InvalidModelType { .. }));
    }
}
