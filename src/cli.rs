//! CLI interface for the resume analyzer

use crate::config::OutputFormat;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "resume-analyzer")]
#[command(about = "Score a resume against a job description with an ATS analysis service")]
#[command(long_about = "Upload a resume and job description to an ATS scoring service and render the match report")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Submit a resume and job description for analysis
    Analyze {
        /// Path to resume file (PDF preferred)
        #[arg(short, long)]
        resume: PathBuf,

        #[command(flatten)]
        job: JobSource,

        /// Analysis service base URL
        #[arg(long)]
        api_url: Option<String>,

        /// Output format: console, json, markdown, html
        #[arg(short, long, value_parser = parse_output_format)]
        output: Option<OutputFormat>,

        /// Save output to file
        #[arg(short, long)]
        save: Option<PathBuf>,

        /// Show the detailed feedback section expanded
        #[arg(long)]
        expand_feedback: bool,
    },

    /// Show or reset configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

/// Where the job description comes from; exactly one is required.
#[derive(Args)]
#[group(required = true, multiple = false)]
pub struct JobSource {
    /// Path to job description file
    #[arg(short, long)]
    pub job: Option<PathBuf>,

    /// Job description text
    #[arg(long)]
    pub job_text: Option<String>,
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,

    /// Print the configuration file location
    Path,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(OutputFormat::Console),
        "json" => Ok(OutputFormat::Json),
        "markdown" | "md" => Ok(OutputFormat::Markdown),
        "html" => Ok(OutputFormat::Html),
        _ => Err(format!("Invalid output format: {}. Supported: console, json, markdown, html", format)),
    }
}
