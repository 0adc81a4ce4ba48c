//! Presentation tree for an analysis report
//!
//! `ReportRenderer::render` decides which sections exist and what each one
//! shows, including empty states. Formatters only turn the tree into text.

use crate::analysis::{AnalysisReport, ScoreBand};

pub const NO_MISSING_KEYWORDS: &str = "No missing keywords found!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    ScoreGauge,
    MissingKeywords,
    MatchedSkills,
    Strengths,
    ImprovementAreas,
    Feedback,
    Suggestions,
    ResumeKeywords,
    JobKeywords,
    KeywordMatch,
    SkillGap,
    FormattingIssues,
    Recommendations,
}

impl SectionKind {
    /// Sections fed by the NLP sub-report.
    pub fn is_nlp(&self) -> bool {
        matches!(
            self,
            SectionKind::ResumeKeywords
                | SectionKind::JobKeywords
                | SectionKind::KeywordMatch
                | SectionKind::SkillGap
                | SectionKind::FormattingIssues
                | SectionKind::Recommendations
        )
    }
}

/// How list items should read: good news, bad news, or neither.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Positive,
    Negative,
    Caution,
    Info,
    Neutral,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SectionBody<'a> {
    ScoreGauge { score: u8, band: ScoreBand },
    List { items: &'a [String], tone: Tone },
    Affirmation(&'static str),
    Collapsible { expanded: bool, text: &'a str },
    KeywordScores(Vec<(&'a str, f64)>),
    SkillGap {
        percentage: f64,
        matched: &'a [String],
        missing: &'a [String],
    },
}

impl SectionBody<'_> {
    /// Number of list entries this body renders.
    pub fn item_count(&self) -> usize {
        match self {
            SectionBody::List { items, .. } => items.len(),
            SectionBody::KeywordScores(pairs) => pairs.len(),
            SectionBody::SkillGap { matched, missing, .. } => matched.len() + missing.len(),
            SectionBody::ScoreGauge { .. }
            | SectionBody::Affirmation(_)
            | SectionBody::Collapsible { .. } => 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Section<'a> {
    pub kind: SectionKind,
    pub title: &'static str,
    pub body: SectionBody<'a>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReportView<'a> {
    pub report: &'a AnalysisReport,
    pub sections: Vec<Section<'a>>,
}

impl<'a> ReportView<'a> {
    pub fn section(&self, kind: SectionKind) -> Option<&Section<'a>> {
        self.sections.iter().find(|section| section.kind == kind)
    }

    pub fn has_section(&self, kind: SectionKind) -> bool {
        self.section(kind).is_some()
    }
}

/// Renders reports; the only state is whether detailed feedback is expanded.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportRenderer {
    feedback_expanded: bool,
}

impl ReportRenderer {
    pub fn new(feedback_expanded: bool) -> Self {
        Self { feedback_expanded }
    }

    pub fn toggle_feedback(&mut self) {
        self.feedback_expanded = !self.feedback_expanded;
    }

    pub fn is_feedback_expanded(&self) -> bool {
        self.feedback_expanded
    }

    pub fn render<'a>(&self, report: &'a AnalysisReport) -> ReportView<'a> {
        let nlp = &report.nlp;
        let mut sections = vec![
            Section {
                kind: SectionKind::ScoreGauge,
                title: "ATS Score",
                body: SectionBody::ScoreGauge {
                    score: report.match_score,
                    band: report.score_band(),
                },
            },
            Section {
                kind: SectionKind::MissingKeywords,
                title: "Missing Keywords",
                body: if report.missing_skills.is_empty() {
                    SectionBody::Affirmation(NO_MISSING_KEYWORDS)
                } else {
                    list(&report.missing_skills, Tone::Negative)
                },
            },
            Section {
                kind: SectionKind::MatchedSkills,
                title: "Matched Skills",
                body: list(&report.matched_skills, Tone::Positive),
            },
            Section {
                kind: SectionKind::Strengths,
                title: "Strengths",
                body: list(&report.strengths, Tone::Positive),
            },
            Section {
                kind: SectionKind::ImprovementAreas,
                title: "Areas for Improvement",
                body: list(&report.improvement_areas, Tone::Caution),
            },
            Section {
                kind: SectionKind::Feedback,
                title: "Detailed Feedback & Suggestions",
                body: SectionBody::Collapsible {
                    expanded: self.feedback_expanded,
                    text: &report.summary,
                },
            },
            Section {
                kind: SectionKind::Suggestions,
                title: "Suggestions",
                body: list(&report.suggestions, Tone::Info),
            },
            Section {
                kind: SectionKind::ResumeKeywords,
                title: "Resume Keywords",
                body: list(nlp.resume_keywords(), Tone::Neutral),
            },
            Section {
                kind: SectionKind::JobKeywords,
                title: "Job Description Keywords",
                body: list(nlp.job_keywords(), Tone::Neutral),
            },
            Section {
                kind: SectionKind::KeywordMatch,
                title: "Keyword Match Scores",
                body: SectionBody::KeywordScores(nlp.keyword_match.pairs().collect()),
            },
            Section {
                kind: SectionKind::SkillGap,
                title: "Skill Gap Analysis",
                body: SectionBody::SkillGap {
                    percentage: nlp.skill_match_percentage(),
                    matched: &nlp.skill_gap.matched_skills,
                    missing: &nlp.skill_gap.missing_skills,
                },
            },
        ];

        if !nlp.formatting_issues.is_empty() {
            sections.push(Section {
                kind: SectionKind::FormattingIssues,
                title: "ATS Formatting Issues",
                body: list(&nlp.formatting_issues, Tone::Negative),
            });
        }

        sections.push(Section {
            kind: SectionKind::Recommendations,
            title: "Improvement Recommendations",
            body: list(&nlp.recommendations, Tone::Info),
        });

        ReportView { report, sections }
    }
}

fn list(items: &[String], tone: Tone) -> SectionBody<'_> {
    SectionBody::List { items, tone }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::analysis::report::{ExtractedKeywords, KeywordMatch, NlpSubReport, SkillGap};

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    pub(crate) fn sample_report() -> AnalysisReport {
        AnalysisReport {
            match_score: 78,
            missing_skills: strings(&["kubernetes", "terraform"]),
            matched_skills: strings(&["python", "aws"]),
            strengths: strings(&["Five years of backend work"]),
            improvement_areas: strings(&["Little infrastructure experience"]),
            suggestions: strings(&["Quantify the latency improvements"]),
            summary: "Solid candidate with some gaps in infrastructure tooling.".to_string(),
            nlp: NlpSubReport {
                keywords: ExtractedKeywords {
                    resume: strings(&["python", "aws", "api"]),
                    job_description: strings(&["kubernetes", "python"]),
                },
                keyword_match: KeywordMatch {
                    keywords: strings(&["kubernetes", "api"]),
                    scores: vec![0.37, -0.12],
                },
                skill_gap: SkillGap {
                    missing_skills: strings(&["kubernetes"]),
                    matched_skills: strings(&["python"]),
                    match_percentage: 50.0,
                },
                formatting_issues: strings(&["Avoid using tabs - use spaces instead"]),
                recommendations: strings(&["Fix formatting: Avoid using tabs - use spaces instead"]),
            },
        }
    }

    #[test]
    fn test_full_report_has_every_section_in_order() {
        let report = sample_report();
        let view = ReportRenderer::default().render(&report);
        let kinds: Vec<_> = view.sections.iter().map(|s| s.kind).collect();
        assert_eq!(
            kinds,
            vec![
                SectionKind::ScoreGauge,
                SectionKind::MissingKeywords,
                SectionKind::MatchedSkills,
                SectionKind::Strengths,
                SectionKind::ImprovementAreas,
                SectionKind::Feedback,
                SectionKind::Suggestions,
                SectionKind::ResumeKeywords,
                SectionKind::JobKeywords,
                SectionKind::KeywordMatch,
                SectionKind::SkillGap,
                SectionKind::FormattingIssues,
                SectionKind::Recommendations,
            ]
        );
    }

    #[test]
    fn test_score_gauge_carries_band() {
        let report = sample_report();
        let view = ReportRenderer::default().render(&report);
        assert_eq!(
            view.section(SectionKind::ScoreGauge).map(|s| &s.body),
            Some(&SectionBody::ScoreGauge { score: 78, band: ScoreBand::Moderate })
        );
    }

    #[test]
    fn test_no_missing_skills_renders_affirmation() {
        let mut report = sample_report();
        report.missing_skills.clear();
        let view = ReportRenderer::default().render(&report);

        let section = view.section(SectionKind::MissingKeywords).unwrap();
        assert_eq!(section.body, SectionBody::Affirmation(NO_MISSING_KEYWORDS));
        assert_eq!(section.body.item_count(), 0);
    }

    #[test]
    fn test_no_formatting_issues_omits_section() {
        let mut report = sample_report();
        report.nlp.formatting_issues.clear();
        let view = ReportRenderer::default().render(&report);

        assert!(!view.has_section(SectionKind::FormattingIssues));
        assert!(view.has_section(SectionKind::Recommendations));
    }

    #[test]
    fn test_other_empty_lists_render_empty_containers() {
        let mut report = sample_report();
        report.strengths.clear();
        report.nlp.recommendations.clear();
        report.nlp.keyword_match = KeywordMatch { keywords: vec![], scores: vec![] };
        let view = ReportRenderer::default().render(&report);

        for kind in [SectionKind::Strengths, SectionKind::Recommendations, SectionKind::KeywordMatch] {
            let section = view.section(kind).expect("section should still exist");
            assert_eq!(section.body.item_count(), 0);
        }
    }

    #[test]
    fn test_feedback_toggle() {
        let report = sample_report();
        let mut renderer = ReportRenderer::default();
        assert!(matches!(
            renderer.render(&report).section(SectionKind::Feedback).unwrap().body,
            SectionBody::Collapsible { expanded: false, .. }
        ));

        renderer.toggle_feedback();
        assert!(renderer.is_feedback_expanded());
        assert!(matches!(
            renderer.render(&report).section(SectionKind::Feedback).unwrap().body,
            SectionBody::Collapsible { expanded: true, .. }
        ));
    }
}
