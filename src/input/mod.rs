//! Input handling
//! Resume file loading, content-type detection and submission eligibility

pub mod file_detector;
pub mod resume_file;
pub mod validator;

pub use resume_file::ResumeFile;
pub use validator::{is_eligible, SubmissionInput};
