//! Display-ready analysis report
//!
//! Field names serialize to the service's wire shape so a report can be
//! written out and normalized again without change.

use serde::{Deserialize, Serialize};

/// Normalized result of one successful analysis round trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Overall fit score (0-100)
    pub match_score: u8,

    /// Job keywords the resume lacks
    pub missing_skills: Vec<String>,

    /// Job keywords the resume covers
    #[serde(rename = "key_skills_matched")]
    pub matched_skills: Vec<String>,

    pub strengths: Vec<String>,

    pub improvement_areas: Vec<String>,

    pub suggestions: Vec<String>,

    /// Free-text feedback; may be empty
    pub summary: String,

    #[serde(rename = "nlp_analysis")]
    pub nlp: NlpSubReport,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NlpSubReport {
    pub keywords: ExtractedKeywords,

    #[serde(alias = "keyword_match")]
    pub keyword_match: KeywordMatch,

    #[serde(rename = "skillAnalysis", alias = "skill_analysis")]
    pub skill_gap: SkillGap,

    #[serde(alias = "formatting_issues")]
    pub formatting_issues: Vec<String>,

    pub recommendations: Vec<String>,
}

/// Top keywords extracted from each document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedKeywords {
    pub resume: Vec<String>,

    #[serde(alias = "job_description")]
    pub job_description: Vec<String>,
}

/// Parallel keyword/score arrays; both always have the same length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordMatch {
    pub keywords: Vec<String>,
    pub scores: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillGap {
    #[serde(alias = "missing_skills")]
    pub missing_skills: Vec<String>,

    #[serde(alias = "matched_skills")]
    pub matched_skills: Vec<String>,

    /// Share of job skills found in the resume (0-100)
    #[serde(alias = "match_percentage")]
    pub match_percentage: f64,
}

impl NlpSubReport {
    pub fn resume_keywords(&self) -> &[String] {
        &self.keywords.resume
    }

    pub fn job_keywords(&self) -> &[String] {
        &self.keywords.job_description
    }

    pub fn skill_match_percentage(&self) -> f64 {
        self.skill_gap.match_percentage
    }
}

impl KeywordMatch {
    /// Keyword/score pairs in wire order.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.keywords
            .iter()
            .map(String::as_str)
            .zip(self.scores.iter().copied())
    }
}

/// Qualitative label for the overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreBand {
    Strong,
    Moderate,
    NeedsWork,
}

impl ScoreBand {
    /// Lower bounds are inclusive: 80 is Strong, 60 is Moderate.
    pub fn from_score(score: u8) -> Self {
        match score {
            80.. => ScoreBand::Strong,
            60..=79 => ScoreBand::Moderate,
            _ => ScoreBand::NeedsWork,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScoreBand::Strong => "Strong",
            ScoreBand::Moderate => "Moderate",
            ScoreBand::NeedsWork => "Needs Work",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            ScoreBand::Strong => "Excellent! Your resume is well-optimized for ATS.",
            ScoreBand::Moderate => "Good, but could use some improvements.",
            ScoreBand::NeedsWork => "Needs significant improvements to pass ATS screening.",
        }
    }
}

impl AnalysisReport {
    pub fn score_band(&self) -> ScoreBand {
        ScoreBand::from_score(self.match_score)
    }
}
