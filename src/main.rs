//! Resume analyzer: submit a resume to an ATS scoring service and render the report

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info};
use resume_analyzer::cli::{Cli, Commands, ConfigAction, JobSource};
use resume_analyzer::client::HttpBackend;
use resume_analyzer::config::{Config, OutputFormat};
use resume_analyzer::error::{Result, SubmissionError};
use resume_analyzer::input::ResumeFile;
use resume_analyzer::output::formatter::{save_report_to_file, suggest_filename, ReportGenerator};
use resume_analyzer::output::render::ReportRenderer;
use resume_analyzer::submission::{ConsoleNotifier, SubmissionController, SubmissionPhase};
use std::path::{Path, PathBuf};
use std::process;
use std::time::Duration;

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(log_level)
    ).init();

    // Load configuration
    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if !config.output.color_output {
        colored::control::set_override(false);
    }

    match run_command(cli.command, config, cli.config).await {
        Ok(true) => {}
        // The notifier has already reported the failure.
        Ok(false) => process::exit(1),
        Err(e) => {
            error!("Command failed: {}", e);
            process::exit(1);
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

/// Returns `Ok(false)` when a submission ended in the failed phase.
async fn run_command(command: Commands, mut config: Config, config_path: Option<PathBuf>) -> Result<bool> {
    match command {
        Commands::Analyze {
            resume,
            job,
            api_url,
            output,
            save,
            expand_feedback,
        } => {
            config.apply_api_url_override(api_url);
            let format = output.unwrap_or(config.output.format);
            let expand = expand_feedback || config.output.expand_feedback;
            analyze(&config, &resume, job, format, save, expand).await
        }

        Commands::Config { action } => {
            let path = config_path.unwrap_or_else(Config::config_path);
            match action {
                Some(ConfigAction::Show) | None => {
                    println!("⚙️  Current Configuration\n");
                    println!("File: {}", path.display());
                    println!("API Base URL: {}", config.api.base_url);
                    println!("Analyze Endpoint: {}", config.analyze_url());
                    match config.api.timeout_secs {
                        Some(secs) => println!("Request Timeout: {}s", secs),
                        None => println!("Request Timeout: none"),
                    }
                    println!("\nOutput:");
                    println!("  Format: {:?}", config.output.format);
                    println!("  Colors: {}", config.output.color_output);
                    println!("  Expand Feedback: {}", config.output.expand_feedback);
                }

                Some(ConfigAction::Reset) => {
                    println!("🔄 Resetting configuration to defaults...");
                    Config::default().save_to(&path)?;
                    println!("✅ Configuration reset successfully: {}", path.display());
                }

                Some(ConfigAction::Path) => {
                    println!("{}", path.display());
                }
            }
            Ok(true)
        }
    }
}

async fn analyze(
    config: &Config,
    resume: &Path,
    job: JobSource,
    format: OutputFormat,
    save: Option<PathBuf>,
    expand_feedback: bool,
) -> Result<bool> {
    info!("Starting resume analysis");

    let resume_file = ResumeFile::from_path(resume).await?;
    let job_description = match (job.job, job.job_text) {
        (Some(path), _) => tokio::fs::read_to_string(&path).await?,
        (None, Some(text)) => text,
        (None, None) => String::new(),
    };

    let backend = HttpBackend::new(config)?;
    info!("Analysis endpoint: {}", backend.analyze_url());
    let notifier = ConsoleNotifier::new(config.output.color_output);
    let mut controller = SubmissionController::new(backend, notifier);

    controller.on_file_selected(Some(resume_file));
    controller.on_job_description_changed(job_description);

    if !controller.can_submit() {
        return Err(SubmissionError::Validation.into());
    }

    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner:.green} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message("Analyzing resume...");
    spinner.enable_steady_tick(Duration::from_millis(100));

    let phase = controller.submit().await.clone();
    spinner.finish_and_clear();

    let report = match (phase, controller.report()) {
        (SubmissionPhase::Succeeded, Some(report)) => report,
        _ => return Ok(false),
    };

    let view = ReportRenderer::new(expand_feedback).render(report);
    let use_colors = config.output.color_output && save.is_none();
    let generator = ReportGenerator::with_options(use_colors, true, true, true);
    let content = generator.generate_report(&view, format)?;

    match save {
        Some(path) => {
            let path = if path.is_dir() {
                path.join(suggest_filename(format, &report_source_name(resume), true))
            } else {
                path
            };
            save_report_to_file(&content, &path)?;
            println!("✅ Report saved to {}", path.display());
        }
        None => println!("{}", content),
    }

    Ok(true)
}

fn report_source_name(resume: &Path) -> String {
    resume
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| "resume".to_string())
}
