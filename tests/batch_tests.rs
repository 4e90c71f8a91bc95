//! Integration tests for batch orchestration
//!
//! These tests exercise checkpoint resumability, interrupt handling, and the
//! success/failure accounting of a full batch run, with wiremock standing in
//! for the websites and the generation endpoint.

use sitescope::batch::{BatchOrchestrator, BatchOutcome};
use sitescope::config::Config;
use sitescope::generator::LocalGenerator;
use sitescope::output::result_file_name;
use sitescope::Checkpoint;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tempfile::TempDir;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Builds a config with output under the temp dir and the local generator
/// pointed at the given mock server
fn batch_config(output_dir: &TempDir, generator_uri: &str) -> Config {
    let mut config = Config::default();
    config.output.directory = output_dir.path().to_string_lossy().to_string();
    config.generator.base_url = generator_uri.to_string();
    config.generator.model = "test-model".to_string();
    config
}

fn checkpoint_path(config: &Config) -> PathBuf {
    PathBuf::from(&config.output.directory).join(&config.output.checkpoint_file)
}

fn html_page(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .set_body_string(format!("<html><body>{}</body></html>", body))
        .insert_header("content-type", "text/html")
}

/// Mounts a site page; `expected_fetches` covers the main-page fetch plus
/// the technology-fingerprint fetch of the same URL (2 per analyzed site)
async fn mount_site_page(server: &MockServer, page_path: &str, expected_fetches: u64) {
    Mock::given(method("GET"))
        .and(path(page_path))
        .respond_with(html_page("company content"))
        .expect(expected_fetches)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_checkpoint_resumability_processes_only_remaining() {
    let site = MockServer::start().await;
    let llm = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "response": "profile text" })),
        )
        .mount(&llm)
        .await;

    // Sites one and two were completed before the simulated interrupt and
    // must never be fetched again; only site three is processed
    mount_site_page(&site, "/site-one", 0).await;
    mount_site_page(&site, "/site-two", 0).await;
    mount_site_page(&site, "/site-three", 2).await;

    let output_dir = TempDir::new().unwrap();
    let config = batch_config(&output_dir, &llm.uri());

    let worklist = vec![
        format!("{}/site-one", site.uri()),
        format!("{}/site-two", site.uri()),
        format!("{}/site-three", site.uri()),
    ];

    // Checkpoint state as an interrupted run would have left it
    let mut checkpoint = Checkpoint::default();
    checkpoint.mark_completed(&worklist[0]);
    checkpoint.mark_completed(&worklist[1]);
    checkpoint.flush(&checkpoint_path(&config)).unwrap();

    let generator = LocalGenerator::new(&config.generator).unwrap();
    let cancel = Arc::new(AtomicBool::new(false));
    let orchestrator = BatchOrchestrator::new(&config, &generator, cancel).unwrap();

    let outcome = orchestrator.run(&worklist).await.unwrap();

    match outcome {
        BatchOutcome::Completed(summary) => {
            assert_eq!(summary.attempted, 1);
            assert_eq!(summary.completed, 1);
            assert_eq!(summary.failed, 0);
            assert_eq!(summary.results[0].url, format!("{}/site-three", site.uri()));
        }
        other => panic!("expected Completed, got {:?}", other),
    }

    // Nothing remains pending, so the checkpoint is gone
    assert!(!checkpoint_path(&config).exists());
}

#[tokio::test]
async fn test_interrupt_flushes_checkpoint_and_stops() {
    let site = MockServer::start().await;
    let llm = MockServer::start().await;

    // Cancellation is checked before any item starts, so no fetch happens
    mount_site_page(&site, "/site-one", 0).await;

    let output_dir = TempDir::new().unwrap();
    let config = batch_config(&output_dir, &llm.uri());

    let worklist = vec![format!("{}/site-one", site.uri())];

    let generator = LocalGenerator::new(&config.generator).unwrap();
    let cancel = Arc::new(AtomicBool::new(false));
    cancel.store(true, Ordering::SeqCst);
    let orchestrator = BatchOrchestrator::new(&config, &generator, cancel).unwrap();

    let outcome = orchestrator.run(&worklist).await.unwrap();

    match outcome {
        BatchOutcome::Interrupted {
            completed,
            remaining,
        } => {
            assert_eq!(completed, 0);
            assert_eq!(remaining, 1);
        }
        other => panic!("expected Interrupted, got {:?}", other),
    }

    // The interrupt path flushed the checkpoint before stopping
    assert!(checkpoint_path(&config).exists());
    let checkpoint = Checkpoint::load(&checkpoint_path(&config));
    assert!(checkpoint.completed.is_empty());
}

#[tokio::test]
async fn test_batch_success_and_failure_accounting() {
    let alpha = MockServer::start().await;
    let beta = MockServer::start().await;
    let llm = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html_page("alpha corp"))
        .mount(&alpha)
        .await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html_page("beta corp"))
        .mount(&beta)
        .await;

    // The generator succeeds for alpha's prompt and fails for beta's;
    // prompts embed the site URL, so the port distinguishes them
    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .and(body_string_contains(&alpha.uri()))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "response": "alpha profile" })),
        )
        .mount(&llm)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .and(body_string_contains(&beta.uri()))
        .respond_with(ResponseTemplate::new(500))
        .mount(&llm)
        .await;

    let output_dir = TempDir::new().unwrap();
    let config = batch_config(&output_dir, &llm.uri());

    let alpha_url = format!("{}/", alpha.uri());
    let beta_url = format!("{}/", beta.uri());
    let worklist = vec![alpha_url.clone(), beta_url.clone()];

    let generator = LocalGenerator::new(&config.generator).unwrap();
    let cancel = Arc::new(AtomicBool::new(false));
    let orchestrator = BatchOrchestrator::new(&config, &generator, cancel).unwrap();

    let outcome = orchestrator.run(&worklist).await.unwrap();

    let summary = match outcome {
        BatchOutcome::Completed(summary) => summary,
        other => panic!("expected Completed, got {:?}", other),
    };

    assert_eq!(summary.attempted, 2);
    assert_eq!(summary.completed, 1);
    assert_eq!(summary.failed, 1);
    assert_eq!(summary.failed_urls, vec![beta_url.clone()]);
    assert_eq!(summary.results.len(), 1);
    assert_eq!(summary.results[0].analysis, "alpha profile");

    // No items remain pending, so the checkpoint is removed even though one
    // site failed; the failed site stays eligible for a future run
    assert!(!checkpoint_path(&config).exists());

    // The successful site's record and the batch summary were persisted
    let alpha_file = output_dir.path().join(result_file_name(&alpha_url));
    assert!(alpha_file.exists());
    assert!(output_dir.path().join("batch_summary.json").exists());

    let summary_json =
        std::fs::read_to_string(output_dir.path().join("batch_summary.json")).unwrap();
    assert!(summary_json.contains(&beta_url));
}

#[tokio::test]
async fn test_duplicate_worklist_entries_processed_once() {
    let site = MockServer::start().await;
    let llm = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "response": "profile" })),
        )
        .mount(&llm)
        .await;

    // Two fetches: main page + fingerprint, for the single processing pass
    mount_site_page(&site, "/only", 2).await;

    let output_dir = TempDir::new().unwrap();
    let config = batch_config(&output_dir, &llm.uri());

    let url = format!("{}/only", site.uri());
    let worklist = vec![url.clone(), url.clone(), url.clone()];

    let generator = LocalGenerator::new(&config.generator).unwrap();
    let cancel = Arc::new(AtomicBool::new(false));
    let orchestrator = BatchOrchestrator::new(&config, &generator, cancel).unwrap();

    let outcome = orchestrator.run(&worklist).await.unwrap();

    match outcome {
        BatchOutcome::Completed(summary) => {
            assert_eq!(summary.attempted, 1);
            assert_eq!(summary.completed, 1);
        }
        other => panic!("expected Completed, got {:?}", other),
    }
}
