mod common;

use std::sync::{Arc, Mutex};
use std::time::Duration;

use serde_json::json;
use truss_ai::prelude::*;

fn client_for(base_url: &str) -> PredictionClient {
    let config = ClientConfig::new(base_url).unwrap().with_timeout(Duration::from_secs(5));
    PredictionClient::new(&config)
}

fn default_request() -> PredictionRequest {
    PredictionRequest::new(-1000.0, 0.0001)
}

#[tokio::test]
async fn predict_decodes_backend_result() {
    let captured = common::Captured::default();
    let base_url = common::spawn_backend(common::healthy_backend(captured.clone())).await;

    let outcome = client_for(&base_url).predict(&default_request()).await;

    let result = outcome.result().expect("backend answered with a result");
    assert_eq!(result.displacements, vec![0.0, -0.002]);
    assert_eq!(result.element_forces, vec![150.0]);
    assert_eq!(result.element_stresses, vec![2000000.0]);
    assert_eq!(result.max_displacement, Some(-0.002));
    assert_eq!(result.max_stress, Some(2000000.0));
    assert_eq!(result.source.as_deref(), Some("fea"));

    let bodies = captured.lock().unwrap();
    assert_eq!(bodies.len(), 1);
    assert_eq!(bodies[0], json!({ "load": -1000.0, "A": 0.0001, "use_model": true }));
}

#[tokio::test]
async fn health_check_reports_model_state() {
    let captured = Arc::new(Mutex::new(Vec::new()));
    let base_url = common::spawn_backend(common::healthy_backend(captured)).await;

    let health = client_for(&base_url).health().await.unwrap();
    assert!(health.ok);
    assert!(!health.model_exists);
}

#[tokio::test]
async fn refused_connection_is_transport_failure() {
    let base_url = common::dead_backend().await;

    let outcome = client_for(&base_url).predict(&default_request()).await;

    assert!(!outcome.is_success());
    let err = outcome.error().unwrap();
    assert!(matches!(err, PredictionError::Transport(_)), "got {err:?}");
    assert!(!err.to_string().is_empty());
}

#[tokio::test]
async fn server_error_carries_status_and_detail() {
    let base_url = common::spawn_backend(common::failing_backend()).await;

    let outcome = client_for(&base_url).predict(&default_request()).await;

    assert_eq!(
        outcome,
        PredictionOutcome::Failure(PredictionError::Status {
            status: 500,
            message: "singular stiffness matrix".to_string(),
        })
    );
}

#[tokio::test]
async fn html_body_is_parse_failure() {
    let base_url = common::spawn_backend(common::html_backend()).await;

    let outcome = client_for(&base_url).predict(&default_request()).await;

    assert!(matches!(outcome, PredictionOutcome::Failure(PredictionError::Parse(_))));
}

#[tokio::test]
async fn scalar_only_answer_is_contract_failure() {
    let base_url = common::spawn_backend(common::scalar_model_backend()).await;

    let outcome = client_for(&base_url).predict(&default_request()).await;

    match outcome {
        PredictionOutcome::Failure(PredictionError::Contract(msg)) => {
            assert!(msg.starts_with("missing result"), "{msg}");
        }
        other => panic!("expected contract failure, got {other:?}"),
    }
}

#[tokio::test]
async fn slow_backend_times_out() {
    let base_url = common::spawn_backend(common::slow_backend(Duration::from_secs(3))).await;
    let config = ClientConfig::new(&base_url)
        .unwrap()
        .with_timeout(Duration::from_millis(200));

    let outcome = PredictionClient::new(&config).predict(&default_request()).await;

    assert_eq!(
        outcome,
        PredictionOutcome::Failure(PredictionError::Timeout(Duration::from_millis(200)))
    );
}

#[tokio::test]
async fn shell_commits_only_the_latest_run() {
    let captured = common::Captured::default();
    let base_url = common::spawn_backend(common::healthy_backend(captured.clone())).await;
    let client = client_for(&base_url);

    let mut shell = ShellState::new();
    let first = shell.begin_run().unwrap();
    assert!(!shell.trigger_enabled());
    assert!(shell.begin_run().is_err());

    let outcome = client.predict(&first.request).await;
    assert!(shell.commit(first.seq, outcome.clone()));
    assert!(shell.trigger_enabled());
    assert_eq!(shell.result().unwrap().displacements, vec![0.0, -0.002]);

    // a late duplicate of the first run must not overwrite a newer one
    shell.set_load_text("-2000");
    let second = shell.begin_run().unwrap();
    assert!(!shell.commit(first.seq, outcome));
    assert!(shell.is_loading());

    let outcome = client.predict(&second.request).await;
    assert!(shell.commit(second.seq, outcome));
    assert_eq!(captured.lock().unwrap().len(), 2);
    assert_eq!(captured.lock().unwrap()[1]["load"], json!(-2000.0));
}
