//! Output formatters: console, JSON, Markdown and HTML renditions of a report view

use crate::analysis::ScoreBand;
use crate::config::OutputFormat;
use crate::error::{Result, ResumeAnalyzerError};
use crate::output::render::{ReportView, Section, SectionBody, SectionKind, Tone};
use askama::Template;
use colored::{Color, Colorize};
use std::path::Path;

const GAUGE_WIDTH: usize = 20;
const FEEDBACK_SUMMARY: &str = "Show feedback";

/// Trait for formatting rendered reports
pub trait OutputFormatter {
    fn format_report(&self, view: &ReportView<'_>) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with colors
pub struct ConsoleFormatter {
    use_colors: bool,
}

/// JSON formatter; emits the normalized report in the service's wire shape
pub struct JsonFormatter {
    pretty: bool,
}

pub struct MarkdownFormatter {
    include_metadata: bool,
}

pub struct HtmlFormatter {
    include_styles: bool,
}

/// Report generator that coordinates different formatters
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
    html_formatter: HtmlFormatter,
}

#[derive(Template)]
#[template(source = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Resume Analysis Report</title>
    {% if include_styles %}
    <style>
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            line-height: 1.6;
            color: #333;
            max-width: 900px;
            margin: 0 auto;
            padding: 20px;
            background: #f8f9fa;
        }
        .container { background: white; padding: 30px; border-radius: 8px; box-shadow: 0 2px 10px rgba(0,0,0,0.1); }
        .header { text-align: center; margin-bottom: 30px; border-bottom: 3px solid #f97316; padding-bottom: 20px; }
        .section { margin: 25px 0; }
        .section h2 { color: #c2410c; border-bottom: 2px solid #e9ecef; padding-bottom: 10px; }
        .badge { display: inline-block; padding: 4px 12px; border-radius: 20px; font-weight: bold; color: white; }
        .band-strong { background: #28a745; }
        .band-moderate { background: #ffc107; color: #000; }
        .band-needs-work { background: #dc3545; }
        .bar { width: 100%; background: #e9ecef; border-radius: 8px; height: 10px; }
        .bar-fill { background: #f97316; border-radius: 8px; height: 10px; }
        .affirmation { color: #28a745; }
        .tone-positive { color: #28a745; }
        .tone-negative { color: #dc3545; }
        .tone-caution { color: #b8860b; }
        .tone-info { color: #2563eb; }
        .nlp { background: #f8f9fa; padding: 15px; border-radius: 6px; }
        .metadata { background: #e9ecef; padding: 15px; border-radius: 6px; margin-top: 30px; font-size: 0.9em; color: #6c757d; }
    </style>
    {% endif %}
</head>
<body>
    <div class="container">
        <div class="header">
            <h1>Resume Analysis Results</h1>
            <p>Generated: {{ generated_at }}</p>
        </div>
        {% for section in sections %}
        <div class="{{ section.class }}" id="{{ section.anchor }}">
            <h2>{{ section.title }}</h2>
            {% if let Some(gauge) = section.gauge %}
            <h3>{{ gauge.score }}% <span class="badge {{ gauge.band_class }}">{{ gauge.label }}</span></h3>
            <div class="bar"><div class="bar-fill" style="width: {{ gauge.score }}%"></div></div>
            <p>{{ gauge.message }}</p>
            {% endif %}
            {% if let Some(text) = section.affirmation %}
            <p class="affirmation">✓ {{ text }}</p>
            {% endif %}
            {% if let Some(list) = section.list %}
            <ul>
                {% for item in list.items %}
                <li class="{{ list.class }}">{{ item }}</li>
                {% endfor %}
            </ul>
            {% endif %}
            {% if let Some(feedback) = section.feedback %}
            {% if feedback.expanded %}<details open>{% else %}<details>{% endif %}
                <summary>{{ feedback_summary }}</summary>
                <p>{{ feedback.text }}</p>
            </details>
            {% endif %}
            {% if let Some(scores) = section.keyword_scores %}
            <table>
                <tr><th>Keyword</th><th>Score</th></tr>
                {% for row in scores %}
                <tr><td>{{ row.keyword }}</td><td>{{ row.score }}</td></tr>
                {% endfor %}
            </table>
            {% endif %}
            {% if let Some(gap) = section.skill_gap %}
            <p><strong>Skill Match Percentage:</strong> {{ gap.percentage }}%</p>
            <div class="bar"><div class="bar-fill" style="width: {{ gap.percentage }}%"></div></div>
            <h4>Matched Skills</h4>
            <ul>
                {% for skill in gap.matched %}
                <li class="tone-positive">{{ skill }}</li>
                {% endfor %}
            </ul>
            <h4>Missing Skills</h4>
            <ul>
                {% for skill in gap.missing %}
                <li class="tone-negative">{{ skill }}</li>
                {% endfor %}
            </ul>
            {% endif %}
        </div>
        {% endfor %}
        <div class="metadata">
            <p>Generated by Resume Analyzer v{{ version }}</p>
        </div>
    </div>
</body>
</html>"#, ext = "html")]
struct HtmlTemplate<'a> {
    include_styles: bool,
    feedback_summary: &'static str,
    generated_at: String,
    sections: Vec<HtmlSection<'a>>,
    version: String,
}

/// One report section, flattened so the template can escape every field.
struct HtmlSection<'a> {
    class: &'static str,
    anchor: &'static str,
    title: &'static str,
    gauge: Option<HtmlGauge>,
    affirmation: Option<&'static str>,
    list: Option<HtmlList<'a>>,
    feedback: Option<HtmlFeedback<'a>>,
    keyword_scores: Option<Vec<HtmlScoreRow<'a>>>,
    skill_gap: Option<HtmlSkillGap<'a>>,
}

struct HtmlGauge {
    score: u8,
    band_class: &'static str,
    label: &'static str,
    message: &'static str,
}

struct HtmlList<'a> {
    class: &'static str,
    items: &'a [String],
}

struct HtmlFeedback<'a> {
    expanded: bool,
    text: &'a str,
}

struct HtmlScoreRow<'a> {
    keyword: &'a str,
    score: String,
}

struct HtmlSkillGap<'a> {
    percentage: String,
    matched: &'a [String],
    missing: &'a [String],
}

fn generated_at() -> String {
    chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

fn gauge(percentage: f64) -> String {
    let filled = ((percentage.clamp(0.0, 100.0) / 100.0) * GAUGE_WIDTH as f64).round() as usize;
    format!("[{}{}]", "█".repeat(filled), "░".repeat(GAUGE_WIDTH - filled))
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let prefix = match level {
            1 => "█",
            2 => "▓",
            _ => "▒",
        };

        let color = match level {
            1 => Color::Blue,
            2 => Color::Green,
            _ => Color::Yellow,
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn format_score_badge(&self, band: ScoreBand) -> String {
        let color = match band {
            ScoreBand::Strong => Color::Green,
            ScoreBand::Moderate => Color::Yellow,
            ScoreBand::NeedsWork => Color::Red,
        };

        if self.use_colors {
            format!("[{}]", band.label().color(color).bold())
        } else {
            format!("[{}]", band.label())
        }
    }

    fn tone_color(tone: Tone) -> Color {
        match tone {
            Tone::Positive => Color::Green,
            Tone::Negative => Color::Red,
            Tone::Caution => Color::Yellow,
            Tone::Info => Color::Cyan,
            Tone::Neutral => Color::White,
        }
    }

    fn format_section(&self, section: &Section<'_>) -> String {
        let mut output = self.format_header(section.title, 3);

        match &section.body {
            SectionBody::ScoreGauge { score, band } => {
                output.push_str(&format!(
                    "{} {}% {}\n",
                    gauge(*score as f64),
                    score,
                    self.format_score_badge(*band)
                ));
                output.push_str(&format!("{}\n", band.message()));
            }
            SectionBody::List { items, tone } => {
                for item in items.iter() {
                    output.push_str(&format!("  • {}\n", self.colorize(item, Self::tone_color(*tone))));
                }
            }
            SectionBody::Affirmation(text) => {
                output.push_str(&format!("  {}\n", self.colorize(&format!("✓ {}", text), Color::Green)));
            }
            SectionBody::Collapsible { expanded: true, text } => {
                if !text.is_empty() {
                    output.push_str(&format!("{}\n", text));
                }
            }
            SectionBody::Collapsible { expanded: false, .. } => {
                output.push_str(&self.colorize("  ▸ collapsed (use --expand-feedback to show)\n", Color::BrightBlack));
            }
            SectionBody::KeywordScores(pairs) => {
                for (keyword, score) in pairs {
                    let color = if *score >= 0.0 { Color::Yellow } else { Color::Green };
                    output.push_str(&format!("  • {:<24} {}\n", keyword, self.colorize(&format!("{:+.3}", score), color)));
                }
            }
            SectionBody::SkillGap { percentage, matched, missing } => {
                output.push_str(&format!("Skill Match: {} {:.1}%\n", gauge(*percentage), percentage));
                output.push_str("Matched Skills:\n");
                for skill in matched.iter() {
                    output.push_str(&format!("  • {}\n", self.colorize(skill, Color::Green)));
                }
                output.push_str("Missing Skills:\n");
                for skill in missing.iter() {
                    output.push_str(&format!("  • {}\n", self.colorize(skill, Color::Red)));
                }
            }
        }

        output
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, view: &ReportView<'_>) -> Result<String> {
        let mut output = String::new();

        output.push_str(&self.format_header("📊 RESUME ANALYSIS RESULTS", 1));
        output.push_str(&format!("Generated: {}\n", generated_at()));

        let mut in_nlp = false;
        for section in &view.sections {
            if section.kind.is_nlp() && !in_nlp {
                output.push_str(&self.format_header("🔍 NLP Analysis", 2));
                in_nlp = true;
            }
            output.push_str(&self.format_section(section));
        }

        output.push_str(&format!(
            "\n{} Generated by Resume Analyzer v{}\n",
            self.colorize("ℹ️", Color::Blue),
            env!("CARGO_PKG_VERSION")
        ));

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, view: &ReportView<'_>) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(view.report)?)
        } else {
            Ok(serde_json::to_string(view.report)?)
        }
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }

    fn markdown_score_badge(band: ScoreBand) -> &'static str {
        match band {
            ScoreBand::Strong => "🟢 Strong",
            ScoreBand::Moderate => "🟡 Moderate",
            ScoreBand::NeedsWork => "🔴 Needs Work",
        }
    }

    fn format_markdown_section(section: &Section<'_>) -> String {
        let mut output = format!("### {}\n\n", section.title);

        match &section.body {
            SectionBody::ScoreGauge { score, band } => {
                output.push_str(&format!("**{}%** {}\n\n", score, Self::markdown_score_badge(*band)));
                output.push_str(&format!("{}\n\n", band.message()));
            }
            SectionBody::List { items, .. } => {
                for item in items.iter() {
                    output.push_str(&format!("- {}\n", item));
                }
                output.push('\n');
            }
            SectionBody::Affirmation(text) => {
                output.push_str(&format!("✅ {}\n\n", text));
            }
            SectionBody::Collapsible { expanded, text } => {
                let open = if *expanded { " open" } else { "" };
                output.push_str(&format!(
                    "<details{}>\n<summary>{}</summary>\n\n{}\n\n</details>\n\n",
                    open, FEEDBACK_SUMMARY, text
                ));
            }
            SectionBody::KeywordScores(pairs) => {
                output.push_str("| Keyword | Score |\n");
                output.push_str("|---------|-------|\n");
                for (keyword, score) in pairs {
                    output.push_str(&format!("| {} | {:+.3} |\n", keyword, score));
                }
                output.push('\n');
            }
            SectionBody::SkillGap { percentage, matched, missing } => {
                output.push_str(&format!("**Skill Match Percentage:** {:.1}%\n\n", percentage));
                output.push_str("**Matched Skills:**\n\n");
                for skill in matched.iter() {
                    output.push_str(&format!("- {}\n", skill));
                }
                output.push_str("\n**Missing Skills:**\n\n");
                for skill in missing.iter() {
                    output.push_str(&format!("- {}\n", skill));
                }
                output.push('\n');
            }
        }

        output
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, view: &ReportView<'_>) -> Result<String> {
        let mut output = String::from("# 📊 Resume Analysis Results\n\n");

        if self.include_metadata {
            output.push_str(&format!("**Generated:** {}\n\n", generated_at()));
        }

        output.push_str("## Analysis Results\n\n");
        let mut in_nlp = false;
        for section in &view.sections {
            if section.kind.is_nlp() && !in_nlp {
                output.push_str("## NLP Analysis\n\n");
                in_nlp = true;
            }
            output.push_str(&Self::format_markdown_section(section));
        }

        if self.include_metadata {
            output.push_str("---\n\n");
            output.push_str(&format!("*Generated by Resume Analyzer v{}*\n", env!("CARGO_PKG_VERSION")));
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl HtmlFormatter {
    pub fn new(include_styles: bool) -> Self {
        Self { include_styles }
    }

    fn tone_class(tone: Tone) -> &'static str {
        match tone {
            Tone::Positive => "tone-positive",
            Tone::Negative => "tone-negative",
            Tone::Caution => "tone-caution",
            Tone::Info => "tone-info",
            Tone::Neutral => "tone-neutral",
        }
    }

    fn html_section<'a>(section: &Section<'a>) -> HtmlSection<'a> {
        let mut html = HtmlSection {
            class: if section.kind.is_nlp() { "section nlp" } else { "section" },
            anchor: Self::anchor(section.kind),
            title: section.title,
            gauge: None,
            affirmation: None,
            list: None,
            feedback: None,
            keyword_scores: None,
            skill_gap: None,
        };

        match &section.body {
            SectionBody::ScoreGauge { score, band } => {
                html.gauge = Some(HtmlGauge {
                    score: *score,
                    band_class: match band {
                        ScoreBand::Strong => "band-strong",
                        ScoreBand::Moderate => "band-moderate",
                        ScoreBand::NeedsWork => "band-needs-work",
                    },
                    label: band.label(),
                    message: band.message(),
                });
            }
            SectionBody::List { items, tone } => {
                html.list = Some(HtmlList { class: Self::tone_class(*tone), items: *items });
            }
            SectionBody::Affirmation(text) => html.affirmation = Some(*text),
            SectionBody::Collapsible { expanded, text } => {
                html.feedback = Some(HtmlFeedback { expanded: *expanded, text: *text });
            }
            SectionBody::KeywordScores(pairs) => {
                html.keyword_scores = Some(
                    pairs
                        .iter()
                        .map(|&(keyword, score)| HtmlScoreRow { keyword, score: format!("{:+.3}", score) })
                        .collect(),
                );
            }
            SectionBody::SkillGap { percentage, matched, missing } => {
                html.skill_gap = Some(HtmlSkillGap {
                    percentage: format!("{:.1}", percentage),
                    matched: *matched,
                    missing: *missing,
                });
            }
        }

        html
    }

    fn anchor(kind: SectionKind) -> &'static str {
        match kind {
            SectionKind::ScoreGauge => "ats-score",
            SectionKind::MissingKeywords => "missing-keywords",
            SectionKind::MatchedSkills => "matched-skills",
            SectionKind::Strengths => "strengths",
            SectionKind::ImprovementAreas => "improvement-areas",
            SectionKind::Feedback => "feedback",
            SectionKind::Suggestions => "suggestions",
            SectionKind::ResumeKeywords => "resume-keywords",
            SectionKind::JobKeywords => "job-keywords",
            SectionKind::KeywordMatch => "keyword-match",
            SectionKind::SkillGap => "skill-gap",
            SectionKind::FormattingIssues => "formatting-issues",
            SectionKind::Recommendations => "recommendations",
        }
    }
}

impl OutputFormatter for HtmlFormatter {
    fn format_report(&self, view: &ReportView<'_>) -> Result<String> {
        let template = HtmlTemplate {
            include_styles: self.include_styles,
            feedback_summary: FEEDBACK_SUMMARY,
            generated_at: generated_at(),
            sections: view.sections.iter().map(Self::html_section).collect(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        };

        template
            .render()
            .map_err(|e| ResumeAnalyzerError::OutputFormatting(e.to_string()))
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Html
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self::with_options(true, true, true, true)
    }

    pub fn with_options(use_colors: bool, pretty_json: bool, include_metadata: bool, include_html_styles: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors),
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter::new(include_metadata),
            html_formatter: HtmlFormatter::new(include_html_styles),
        }
    }

    pub fn generate_report(&self, view: &ReportView<'_>, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_report(view),
            OutputFormat::Json => self.json_formatter.format_report(view),
            OutputFormat::Markdown => self.markdown_formatter.format_report(view),
            OutputFormat::Html => self.html_formatter.format_report(view),
        }
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    use std::fs;
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(file_path, content)?;
    Ok(())
}

pub fn suggest_filename(format: OutputFormat, resume_name: &str, timestamp: bool) -> String {
    let base_name = Path::new(resume_name)
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy();

    let timestamp_suffix = if timestamp {
        format!("_{}", chrono::Utc::now().format("%Y%m%d_%H%M%S"))
    } else {
        String::new()
    };

    let extension = match format {
        OutputFormat::Console => "txt",
        OutputFormat::Json => "json",
        OutputFormat::Markdown => "md",
        OutputFormat::Html => "html",
    };

    format!("{}_analysis{}.{}", base_name, timestamp_suffix, extension)
}
