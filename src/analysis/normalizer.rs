//! Validation boundary between the untyped service response and `AnalysisReport`
//!
//! Nothing outside this module reads the response JSON. Extra fields are
//! ignored; a missing or mistyped field, mismatched keyword/score arrays, or
//! an out-of-range number rejects the whole payload.

use crate::analysis::report::AnalysisReport;
use crate::error::{ShapeError, SubmissionError};
use log::{debug, warn};
use serde::Deserialize;
use serde_json::Value;

const MAX_PERCENT: f64 = 100.0;

/// Turn a raw `analysis` object into a validated report.
pub fn normalize(raw: &Value) -> Result<AnalysisReport, ShapeError> {
    let object = raw
        .as_object()
        .ok_or_else(|| ShapeError::Malformed("analysis is not an object".to_string()))?;

    let score = object
        .get("match_score")
        .ok_or(ShapeError::MissingField("match_score"))?;
    let match_score = integral_percent("match_score", score)?;

    let mut candidate = raw.clone();
    candidate["match_score"] = Value::from(match_score);

    let report = AnalysisReport::deserialize(candidate)
        .map_err(|e| ShapeError::Malformed(e.to_string()))?;

    validate(&report)?;
    Ok(report)
}

/// Apply the envelope rules to a completed HTTP exchange.
pub fn interpret_response(status: u16, body: &str) -> Result<AnalysisReport, SubmissionError> {
    if !(200..300).contains(&status) {
        warn!("Analysis service returned HTTP {}", status);
        return Err(SubmissionError::Transport {
            status: Some(status),
            body: body.to_string(),
        });
    }

    let envelope: Value = serde_json::from_str(body)
        .map_err(|e| ShapeError::InvalidJson(e.to_string()))?;

    if envelope.get("success") != Some(&Value::Bool(true)) {
        let message = envelope
            .get("error")
            .and_then(Value::as_str)
            .map(str::to_string);
        warn!("Analysis service reported failure: {:?}", message);
        return Err(SubmissionError::Api(message));
    }

    let analysis = envelope
        .get("analysis")
        .ok_or(ShapeError::MissingField("analysis"))?;

    let report = normalize(analysis)?;
    debug!(
        "Normalized analysis: score {}, {} missing skills, {} formatting issues",
        report.match_score,
        report.missing_skills.len(),
        report.nlp.formatting_issues.len()
    );
    Ok(report)
}

fn validate(report: &AnalysisReport) -> Result<(), ShapeError> {
    let keyword_match = &report.nlp.keyword_match;
    if keyword_match.keywords.len() != keyword_match.scores.len() {
        return Err(ShapeError::KeywordScoreMismatch {
            keywords: keyword_match.keywords.len(),
            scores: keyword_match.scores.len(),
        });
    }

    let percentage = report.nlp.skill_gap.match_percentage;
    if !percentage.is_finite() || !(0.0..=MAX_PERCENT).contains(&percentage) {
        return Err(ShapeError::OutOfRange {
            field: "match_percentage",
            value: percentage,
        });
    }

    Ok(())
}

/// Accept 85 or 85.0; reject fractions, negatives and anything above 100.
fn integral_percent(field: &'static str, value: &Value) -> Result<u8, ShapeError> {
    let number = value
        .as_f64()
        .ok_or_else(|| ShapeError::Malformed(format!("`{}` is not a number", field)))?;

    if number.fract() != 0.0 || !(0.0..=MAX_PERCENT).contains(&number) {
        return Err(ShapeError::OutOfRange { field, value: number });
    }

    Ok(number as u8)
}
