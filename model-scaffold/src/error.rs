//! Error types for scaffold generation

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::model_type::VALID_MODEL_TYPES;

/// Scaffold generation error
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// `--model-type` was not one of the accepted spellings
    #[error("'--model-type' must be one of [{}], got '{}'", VALID_MODEL_TYPES.join(", "), .value)]
    InvalidModelType {
        /// The rejected value
        value: String,
    },

    /// A required value was given neither as a flag nor in configuration
    #[error("'{flag}' is required (pass it on the command line or set it in the configuration file)")]
    MissingOption {
        /// Flag name, e.g. `--k8s-namespace`
        flag: &'static str,
    },

    /// Filesystem operation failed
    #[error("I/O error at {}: {}", .path.display(), .source)]
    Io {
        /// Path the operation was acting on
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Template engine failed to render a template
    #[error("Failed to render template '{template}': {source}")]
    Render {
        /// Template identifier
        template: String,
        /// Underlying error
        #[source]
        source: Box<handlebars::RenderError>,
    },

    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(Box<figment::Error>),
}

impl ScaffoldError {
    /// Wrap an I/O error with the path it occurred on
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Whether this error comes from bad user input rather than the environment
    ///
    /// Validation failures happen before the filesystem is touched.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidModelType { .. } | Self::MissingOption { .. })
    }
}

impl From<figment::Error> for ScaffoldError {
    fn from(err: figment::Error) -> Self {
        Self::Config(Box::new(err))
    }
}

/// Result alias for scaffold operations
pub type Result<T, E = ScaffoldError> = std::result::Result<T, E>;
