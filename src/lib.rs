//! Resume analyzer library

pub mod analysis;
pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod submission;

pub use config::Config;
pub use error::{Result, ResumeAnalyzerError};
