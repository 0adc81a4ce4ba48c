//! Integration tests for the resume analyzer

use mockito::{Matcher, Server};
use resume_analyzer::client::HttpBackend;
use resume_analyzer::config::{Config, OutputFormat};
use resume_analyzer::input::ResumeFile;
use resume_analyzer::output::formatter::ReportGenerator;
use resume_analyzer::output::render::{ReportRenderer, SectionBody, SectionKind, NO_MISSING_KEYWORDS};
use resume_analyzer::submission::{Notifier, SubmissionController, SubmissionPhase};
use serde_json::json;
use std::cell::RefCell;
use std::rc::Rc;
use tempfile::TempDir;

#[derive(Clone, Default)]
struct RecordingNotifier {
    messages: Rc<RefCell<Vec<String>>>,
}

impl Notifier for RecordingNotifier {
    fn notify_failure(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}

fn config_for(server: &Server) -> Config {
    let mut config = Config::default();
    config.apply_api_url_override(Some(server.url()));
    config
}

fn sample_resume() -> ResumeFile {
    ResumeFile::new("jane_doe.pdf", "application/pdf", b"%PDF-1.7 test body".to_vec())
}

fn analysis_body(missing_skills: serde_json::Value, formatting_issues: serde_json::Value) -> String {
    json!({
        "success": true,
        "analysis": {
            "match_score": 84,
            "missing_skills": missing_skills,
            "key_skills_matched": ["rust", "postgres"],
            "strengths": ["Owned a payments service end to end"],
            "improvement_areas": ["Cloud certifications"],
            "suggestions": ["Lead with the Rust migration"],
            "summary": "Strong backend profile.",
            "nlp_analysis": {
                "keywords": {"resume": ["rust", "postgres"], "jobDescription": ["rust", "kafka"]},
                "keywordMatch": {"keywords": ["kafka"], "scores": [0.31]},
                "skillAnalysis": {
                    "missingSkills": ["kafka"],
                    "matchedSkills": ["rust"],
                    "matchPercentage": 50.0
                },
                "formattingIssues": formatting_issues,
                "recommendations": ["Add sections highlighting experience with: kafka"]
            }
        }
    })
    .to_string()
}

fn controller_for(server: &Server) -> (SubmissionController<HttpBackend, RecordingNotifier>, RecordingNotifier) {
    let notifier = RecordingNotifier::default();
    let backend = HttpBackend::new(&config_for(server)).unwrap();
    (SubmissionController::new(backend, notifier.clone()), notifier)
}

#[tokio::test]
async fn test_successful_submission_round_trip() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/analyze")
        .match_header("content-type", Matcher::Regex("multipart/form-data; boundary=".to_string()))
        .match_body(Matcher::AllOf(vec![
            Matcher::Regex(r#"name="resume"; filename="jane_doe\.pdf""#.to_string()),
            Matcher::Regex("%PDF-1\\.7 test body".to_string()),
            Matcher::Regex(r#"name="job_description""#.to_string()),
            Matcher::Regex("Senior Rust engineer".to_string()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(analysis_body(json!(["kafka"]), json!([])))
        .create_async()
        .await;

    let (mut controller, notifier) = controller_for(&server);
    controller.on_file_selected(Some(sample_resume()));
    controller.on_job_description_changed("Senior Rust engineer");

    let phase = controller.submit().await.clone();

    mock.assert_async().await;
    assert_eq!(phase, SubmissionPhase::Succeeded);
    assert!(notifier.messages.borrow().is_empty());

    let report = controller.report().unwrap();
    assert_eq!(report.match_score, 84);
    assert_eq!(report.matched_skills, vec!["rust", "postgres"]);
    assert_eq!(report.nlp.keyword_match.pairs().collect::<Vec<_>>(), vec![("kafka", 0.31)]);
}

#[tokio::test]
async fn test_api_failure_message_is_surfaced_verbatim() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/analyze")
        .with_status(200)
        .with_body(r#"{"success": false, "error": "too large"}"#)
        .create_async()
        .await;

    let (mut controller, notifier) = controller_for(&server);
    controller.on_file_selected(Some(sample_resume()));
    controller.on_job_description_changed("Rust engineer");

    let phase = controller.submit().await.clone();

    mock.assert_async().await;
    assert_eq!(phase, SubmissionPhase::Failed { message: "too large".to_string() });
    assert_eq!(*notifier.messages.borrow(), vec!["too large".to_string()]);
    assert!(controller.report().is_none());
}

#[tokio::test]
async fn test_server_error_status_fails_submission() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/analyze")
        .with_status(500)
        .with_body("internal failure")
        .create_async()
        .await;

    let (mut controller, notifier) = controller_for(&server);
    controller.on_file_selected(Some(sample_resume()));
    controller.on_job_description_changed("Rust engineer");

    let phase = controller.submit().await.clone();

    mock.assert_async().await;
    let expected = "HTTP error! status: 500, body: internal failure".to_string();
    assert_eq!(phase.failure_message(), Some(expected.as_str()));
    assert_eq!(*notifier.messages.borrow(), vec![expected]);
}

#[tokio::test]
async fn test_failure_keeps_previous_report() {
    let mut server = Server::new_async().await;
    let ok = server
        .mock("POST", "/api/analyze")
        .with_status(200)
        .with_body(analysis_body(json!([]), json!([])))
        .expect(1)
        .create_async()
        .await;

    let (mut controller, _notifier) = controller_for(&server);
    controller.on_file_selected(Some(sample_resume()));
    controller.on_job_description_changed("Rust engineer");
    controller.submit().await;
    ok.assert_async().await;
    ok.remove_async().await;

    let broken = server
        .mock("POST", "/api/analyze")
        .with_status(200)
        .with_body("not json")
        .create_async()
        .await;

    controller.acknowledge();
    let phase = controller.submit().await.clone();

    broken.assert_async().await;
    assert_eq!(phase.failure_message(), Some("Failed to analyze resume"));
    assert_eq!(controller.report().map(|r| r.match_score), Some(84));
}

#[tokio::test]
async fn test_ineligible_input_makes_no_request() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/analyze")
        .expect(0)
        .create_async()
        .await;

    let (mut controller, notifier) = controller_for(&server);
    assert_eq!(controller.submit().await, &SubmissionPhase::Idle);

    controller.on_file_selected(Some(sample_resume()));
    controller.on_job_description_changed("   \n\t");
    assert!(!controller.can_submit());
    assert_eq!(controller.submit().await, &SubmissionPhase::Idle);

    mock.assert_async().await;
    assert!(notifier.messages.borrow().is_empty());
}

#[tokio::test]
async fn test_resume_loaded_from_disk_is_uploaded() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("cv.pdf");
    std::fs::write(&path, b"%PDF-1.4 from disk").unwrap();

    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/analyze")
        .match_body(Matcher::AllOf(vec![
            Matcher::Regex(r#"filename="cv\.pdf""#.to_string()),
            Matcher::Regex("application/pdf".to_string()),
            Matcher::Regex("from disk".to_string()),
        ]))
        .with_status(200)
        .with_body(analysis_body(json!([]), json!([])))
        .create_async()
        .await;

    let resume = ResumeFile::from_path(&path).await.unwrap();
    let (mut controller, _notifier) = controller_for(&server);
    controller.on_file_selected(Some(resume));
    controller.on_job_description_changed("Rust engineer");

    assert_eq!(controller.submit().await, &SubmissionPhase::Succeeded);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_empty_states_render_end_to_end() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/api/analyze")
        .with_status(200)
        .with_body(analysis_body(json!([]), json!([])))
        .create_async()
        .await;

    let (mut controller, _notifier) = controller_for(&server);
    controller.on_file_selected(Some(sample_resume()));
    controller.on_job_description_changed("Rust engineer");
    controller.submit().await;

    let report = controller.report().unwrap();
    let view = ReportRenderer::default().render(report);

    let missing = view.section(SectionKind::MissingKeywords).unwrap();
    assert_eq!(missing.body, SectionBody::Affirmation(NO_MISSING_KEYWORDS));
    assert_eq!(missing.body.item_count(), 0);
    assert!(!view.has_section(SectionKind::FormattingIssues));

    let generator = ReportGenerator::with_options(false, true, false, true);
    let console = generator.generate_report(&view, OutputFormat::Console).unwrap();
    assert!(console.contains(NO_MISSING_KEYWORDS));
    assert!(console.contains("84% [Strong]"));
    assert!(!console.contains("ATS Formatting Issues"));

    let html = generator.generate_report(&view, OutputFormat::Html).unwrap();
    assert!(html.contains(NO_MISSING_KEYWORDS));
    assert!(!html.contains("formatting-issues"));
}

#[test]
fn test_missing_config_file_yields_defaults_without_writing() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("absent").join("config.toml");

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.output.format, OutputFormat::Console);
    assert!(!path.exists());
}
