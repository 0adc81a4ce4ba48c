//! Submission input and the eligibility guard

use crate::input::resume_file::ResumeFile;

/// What the user has entered so far.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionInput {
    pub resume_file: Option<ResumeFile>,
    pub job_description: String,
}

impl SubmissionInput {
    pub fn new(resume_file: Option<ResumeFile>, job_description: impl Into<String>) -> Self {
        Self {
            resume_file,
            job_description: job_description.into(),
        }
    }

    pub fn is_eligible(&self) -> bool {
        is_eligible(self)
    }
}

/// A submission may go out only with a file and a non-blank job description.
pub fn is_eligible(input: &SubmissionInput) -> bool {
    input.resume_file.is_some() && !input.job_description.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resume() -> ResumeFile {
        ResumeFile::new("resume.pdf", "application/pdf", vec![1, 2, 3])
    }

    #[test]
    fn test_file_and_text_is_eligible() {
        let input = SubmissionInput::new(Some(resume()), "Senior Rust engineer");
        assert!(is_eligible(&input));
    }

    #[test]
    fn test_missing_file_is_not_eligible() {
        let input = SubmissionInput::new(None, "Senior Rust engineer");
        assert!(!is_eligible(&input));
    }

    #[test]
    fn test_blank_description_is_not_eligible() {
        for text in ["", " ", "\n\t  \n"] {
            let input = SubmissionInput::new(Some(resume()), text);
            assert!(!input.is_eligible(), "{:?} should not be eligible", text);
        }
    }
}
