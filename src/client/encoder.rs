//! Multipart payload for `POST /api/analyze`

use crate::error::SubmissionError;
use crate::input::SubmissionInput;
use log::warn;
use reqwest::multipart::{Form, Part};

pub const RESUME_PART: &str = "resume";
pub const JOB_DESCRIPTION_PART: &str = "job_description";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultipartPayload {
    parts: Vec<PayloadPart>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayloadPart {
    pub name: &'static str,
    pub body: PartBody,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PartBody {
    File {
        file_name: String,
        content_type: String,
        bytes: Vec<u8>,
    },
    Text(String),
}

/// Package the resume and job description as two named parts.
///
/// Eligibility is the validator's job; a missing file simply yields no
/// `resume` part.
pub fn encode(input: &SubmissionInput) -> MultipartPayload {
    let mut parts = Vec::with_capacity(2);

    if let Some(file) = &input.resume_file {
        parts.push(PayloadPart {
            name: RESUME_PART,
            body: PartBody::File {
                file_name: file.file_name.clone(),
                content_type: file.content_type.clone(),
                bytes: file.bytes.clone(),
            },
        });
    }

    parts.push(PayloadPart {
        name: JOB_DESCRIPTION_PART,
        body: PartBody::Text(input.job_description.clone()),
    });

    MultipartPayload { parts }
}

impl MultipartPayload {
    pub fn parts(&self) -> &[PayloadPart] {
        &self.parts
    }

    pub fn part(&self, name: &str) -> Option<&PayloadPart> {
        self.parts.iter().find(|part| part.name == name)
    }

    /// Total body bytes, excluding multipart framing.
    pub fn content_length(&self) -> usize {
        self.parts
            .iter()
            .map(|part| match &part.body {
                PartBody::File { bytes, .. } => bytes.len(),
                PartBody::Text(text) => text.len(),
            })
            .sum()
    }

    pub fn into_form(self) -> Result<Form, SubmissionError> {
        let mut form = Form::new();

        for part in self.parts {
            form = match part.body {
                PartBody::File { file_name, content_type, bytes } => {
                    let file_part = Part::bytes(bytes)
                        .file_name(file_name)
                        .mime_str(&content_type)
                        .map_err(|e| {
                            warn!("Resume has an unusable content type '{}': {}", content_type, e);
                            SubmissionError::Validation
                        })?;
                    form.part(part.name, file_part)
                }
                PartBody::Text(text) => form.text(part.name, text),
            };
        }

        Ok(form)
    }
}
