//! Typed analysis report and the normalization boundary for service responses

pub mod normalizer;
pub mod report;

pub use normalizer::{interpret_response, normalize};
pub use report::{AnalysisReport, KeywordMatch, NlpSubReport, ScoreBand, SkillGap};
