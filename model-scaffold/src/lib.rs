//! model-scaffold library
//!
//! Generates a project skeleton that packages a trained model behind a
//! prediction HTTP endpoint: container build script, Kubernetes manifest,
//! Dockerfile, service sources and reference documentation.
//!
//! ```rust,no_run
//! use model_scaffold::{GenerationRequest, ModelType, ScaffoldGenerator, TemplateSource};
//!
//! # fn main() -> Result<(), model_scaffold::ScaffoldError> {
//! let request = GenerationRequest::new(
//!     "/tmp/out",
//!     ModelType::PythonSklearn,
//!     "python:3.9-slim",
//!     "registry.local/model:1",
//!     "model",
//!     "default",
//! );
//! ScaffoldGenerator::new(TemplateSource::Embedded).generate(&request)?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod error;
pub mod model_type;
pub mod observability;
pub mod request;
pub mod scaffold;
pub mod templates;

pub use config::ScaffoldConfig;
pub use error::ScaffoldError;
pub use model_type::{ModelType, VALID_MODEL_TYPES};
pub use request::{GenerationRequest, RequestOptions};
pub use scaffold::{GenerationReport, ScaffoldGenerator};
pub use templates::TemplateSource;
