//! Scaffold generation command

use anyhow::{Context, Result};
use console::{style, Emoji};
use indicatif::{ProgressBar, ProgressStyle};

use model_scaffold::config::DefaultSettings;
use model_scaffold::{
    GenerationReport, GenerationRequest, ModelType, RequestOptions, ScaffoldError,
    ScaffoldGenerator, TemplateSource,
};

static SUCCESS: Emoji = Emoji("✓ ", "");

/// Generate a model scaffold into a directory
pub struct GenerateCommand {
    request: GenerationRequest,
    generator: ScaffoldGenerator,
    quiet: bool,
}

impl GenerateCommand {
    /// Create a new command instance
    ///
    /// Validates the options before anything touches the filesystem.
    ///
    /// # Errors
    ///
    /// Returns a validation error for an unknown model type or a required
    /// value missing from both the flags and `defaults`.
    pub fn new(
        options: RequestOptions,
        defaults: &DefaultSettings,
        source: TemplateSource,
        quiet: bool,
    ) -> Result<Self, ScaffoldError> {
        let request = options.resolve(defaults)?;

        Ok(Self {
            request,
            generator: ScaffoldGenerator::new(source),
            quiet,
        })
    }

    /// Execute the command
    pub fn execute(&self) -> Result<()> {
        if self.quiet {
            self.generate()?;
            return Ok(());
        }

        println!(
            "{} {} {}",
            style("Generating").green().bold(),
            style(format!("{} scaffold in", self.request.model_type())).bold(),
            style(self.request.output_dir().display()).cyan().bold()
        );
        println!();

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .context("Failed to set progress style")?,
        );
        spinner.enable_steady_tick(std::time::Duration::from_millis(100));
        spinner.set_message("Rendering templates...");

        let result = self.generate();
        spinner.finish_and_clear();
        let report = result?;

        self.print_success(&report);

        Ok(())
    }

    fn generate(&self) -> Result<GenerationReport> {
        self.generator.generate(&self.request).with_context(|| {
            format!(
                "Failed to generate scaffold in {}",
                self.request.output_dir().display()
            )
        })
    }

    /// Print generated paths and next steps
    fn print_success(&self, report: &GenerationReport) {
        println!("{} {} paths:", style("Generated").green().bold(), report.paths.len());
        for generated in &report.paths {
            println!(
                "  {}{} ({})",
                style(SUCCESS).green(),
                style(generated.path.display()).dim(),
                style(&generated.description).dim()
            );
        }
        println!();

        println!("{}", style("Next steps:").cyan().bold());
        let mut step = 1;
        println!(
            "  {step}. Copy the trained model into {}",
            style(self.request.output_dir().join("model").display()).yellow()
        );
        if self.request.model_type() == ModelType::H2oMojo {
            step += 1;
            println!(
                "  {step}. Add the runtime wheel to {} and the license to {}",
                style("ext_packages/").yellow(),
                style("license/").yellow()
            );
        }
        step += 1;
        println!(
            "  {step}. Build and push the image: {}",
            style("./container_util.sh build && ./container_util.sh push").yellow()
        );
        step += 1;
        println!(
            "  {step}. Deploy {}: {}",
            style(self.request.target_docker_image()).green(),
            style("kubectl apply -f deployment.yml").yellow()
        );
    }
}
