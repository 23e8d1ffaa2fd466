//! model-scaffold CLI tool

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

mod commands;

use anyhow::{Context, Result};
use clap::Parser;
use commands::GenerateCommand;
use console::style;
use std::path::PathBuf;
use std::process::ExitCode;

use model_scaffold::{
    observability, ModelType, RequestOptions, ScaffoldConfig, ScaffoldError, TemplateSource,
};

#[derive(Parser)]
#[command(name = "model-scaffold")]
#[command(version)]
#[command(about = "Generate a containerized prediction service scaffold for a trained model", long_about = None)]
struct Cli {
    /// Directory name to be created for the containerized model
    #[arg(long)]
    dir: PathBuf,

    /// Type of model to generate the code for: python, python_sklearn or h2o_mojo
    #[arg(long, value_name = "TYPE")]
    model_type: String,

    /// Base docker image for the containerized model
    #[arg(long, value_name = "IMAGE")]
    base_docker_image: Option<String>,

    /// Target docker image to be built
    #[arg(long, value_name = "IMAGE")]
    target_docker_image: Option<String>,

    /// Name used for the Kubernetes resources (deployment, service)
    #[arg(long, value_name = "NAME")]
    k8s_resource_name: Option<String>,

    /// Namespace used for the Kubernetes resources
    #[arg(long, value_name = "NAMESPACE")]
    k8s_namespace: Option<String>,

    /// Read templates from this directory instead of the built-in set
    #[arg(long, value_name = "DIR")]
    template_dir: Option<PathBuf>,

    /// Configuration file (replaces the standard search path)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Only report errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // A bad model type is reported before configuration can fail
    if let Err(err) = cli.model_type.parse::<ModelType>() {
        return Ok(validation_failure(&err));
    }

    let config = match &cli.config {
        Some(path) => ScaffoldConfig::load_from(path),
        None => ScaffoldConfig::load(),
    }
    .context("Failed to load configuration")?;

    observability::init(&config.logging)?;

    let source = cli
        .template_dir
        .map_or_else(|| config.templates.source(), TemplateSource::Directory);

    let options = RequestOptions {
        dir: cli.dir,
        model_type: cli.model_type,
        base_docker_image: cli.base_docker_image,
        target_docker_image: cli.target_docker_image,
        k8s_resource_name: cli.k8s_resource_name,
        k8s_namespace: cli.k8s_namespace,
    };

    let cmd = match GenerateCommand::new(options, &config.defaults, source, cli.quiet) {
        Ok(cmd) => cmd,
        Err(err) if err.is_validation() => return Ok(validation_failure(&err)),
        Err(err) => return Err(err.into()),
    };

    cmd.execute()?;

    Ok(ExitCode::SUCCESS)
}

fn validation_failure(err: &ScaffoldError) -> ExitCode {
    println!("{} {err}", style("error:").red().bold());
    ExitCode::FAILURE
}
