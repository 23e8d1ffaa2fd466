//! Model scaffold generation
//!
//! Turns a [`GenerationRequest`](crate::request::GenerationRequest) into a
//! project directory ready to be built into a prediction service image.

pub mod generator;

pub use generator::{GeneratedPath, GenerationReport, ScaffoldGenerator, BASE_DIRECTORIES};
