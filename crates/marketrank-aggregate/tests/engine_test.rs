use std::sync::Arc;
use std::time::Duration;

use marketrank_aggregate::{compute_aggregates, AggregateEngine, AggregateWorker};
use marketrank_core::config::AggregateConfig;
use marketrank_core::errors::AggregateError;
use marketrank_core::{AggregateMetrics, AggregateRequest};

const WAIT: Duration = Duration::from_secs(10);

fn saas_request(focus: Option<&str>) -> AggregateRequest {
    AggregateRequest {
        catalog: test_fixtures::saas_catalog(),
        signals: ["Automation", "Health", "Reporting", "Analytics", "Compliance"]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        focus: focus.map(str::to_string),
    }
}

fn exploding(_: &AggregateRequest, _: &AggregateConfig) -> AggregateMetrics {
    panic!("aggregate computation exploded")
}

fn exploding_on_empty(request: &AggregateRequest, config: &AggregateConfig) -> AggregateMetrics {
    if request.catalog.is_empty() {
        panic!("empty catalog");
    }
    compute_aggregates(request, config)
}

#[test]
fn empty_catalog_through_background_path() {
    let mut engine = AggregateEngine::new(AggregateConfig::default());
    let immediate = engine.submit(AggregateRequest::default());
    let metrics = immediate.or_else(|| engine.wait_latest(WAIT)).unwrap();
    assert_eq!(metrics, AggregateMetrics::default());
}

#[test]
fn spawn_failure_answers_synchronously_in_the_same_call() {
    let config = AggregateConfig::default();
    let failed = Err(AggregateError::WorkerSpawnFailed {
        reason: "thread limit reached".to_string(),
    }
    .into());
    let mut engine = AggregateEngine::with_worker(config.clone(), failed);

    assert!(!engine.is_background());
    assert!(engine.degradations().is_degraded("aggregate-worker"));

    let request = saas_request(None);
    let expected = compute_aggregates(&request, &config);
    let metrics = engine.submit(request).expect("synchronous result");
    assert_eq!(metrics, expected);
    assert_eq!(engine.latest(), &expected);
    assert!(!engine.is_pending());
}

#[test]
fn background_matches_synchronous() {
    let config = AggregateConfig::default();
    let mut background = AggregateEngine::new(config.clone());
    let mut synchronous = AggregateEngine::synchronous(config);

    let sync_metrics = synchronous.submit(saas_request(Some("Automation"))).unwrap();
    assert!(background.submit(saas_request(Some("Automation"))).is_none());
    assert!(background.is_pending());

    let bg_metrics = background.wait_latest(WAIT).unwrap();
    assert_eq!(bg_metrics, sync_metrics);
    assert!(!background.is_pending());
    assert!(!background.degradations().is_degraded("aggregate-worker"));
}

#[test]
fn newest_request_wins() {
    let config = AggregateConfig::default();
    let mut engine = AggregateEngine::new(config.clone());

    let older = saas_request(None);
    let newer = AggregateRequest {
        catalog: test_fixtures::health_finance_catalog(),
        ..AggregateRequest::default()
    };
    let expected = compute_aggregates(&newer, &config);

    engine.submit(older);
    engine.submit(newer);
    assert_eq!(engine.wait_latest(WAIT).unwrap(), expected);
    assert_eq!(engine.latest(), &expected);
}

#[test]
fn panicking_worker_falls_back_to_synchronous() {
    let config = AggregateConfig::default();
    let worker = AggregateWorker::spawn_with(config.clone(), exploding);
    let mut engine = AggregateEngine::with_worker(config.clone(), worker);
    assert!(engine.is_background());

    let request = saas_request(None);
    let expected = compute_aggregates(&request, &config);
    assert!(engine.submit(request).is_none());

    assert_eq!(engine.wait_latest(WAIT).unwrap(), expected);
    assert!(engine.degradations().is_degraded("aggregate-worker"));
}

#[test]
fn successful_background_answer_recovers_from_a_failed_computation() {
    let config = AggregateConfig::default();
    let worker = AggregateWorker::spawn_with(config.clone(), exploding_on_empty);
    let mut engine = AggregateEngine::with_worker(config.clone(), worker);

    assert!(engine.submit(AggregateRequest::default()).is_none());
    engine.wait_latest(WAIT).unwrap();
    assert!(engine.degradations().is_degraded("aggregate-worker"));
    assert!(engine.is_background());

    let request = saas_request(None);
    let expected = compute_aggregates(&request, &config);
    assert!(engine.submit(request).is_none());
    assert_eq!(engine.wait_latest(WAIT).unwrap(), expected);

    assert!(!engine.degradations().is_degraded("aggregate-worker"));
    let events = engine.degradations().events();
    assert_eq!(events.len(), 1);
    assert!(events[0].recovered_at.is_some());
}

#[test]
fn dead_worker_answers_every_submit_synchronously() {
    let config = AggregateConfig::default();
    let mut worker = AggregateWorker::spawn(config.clone()).unwrap();
    worker.shutdown();
    let mut engine = AggregateEngine::with_worker(config.clone(), Ok(worker));

    let request = saas_request(None);
    let expected = compute_aggregates(&request, &config);
    assert_eq!(engine.submit(request.clone()).unwrap(), expected);
    assert!(!engine.is_pending());
    assert_eq!(engine.submit(request).unwrap(), expected);
    assert!(!engine.is_pending());
    assert_eq!(engine.degradations().events().len(), 1);
}

#[test]
fn shutdown_switches_to_synchronous() {
    let mut engine = AggregateEngine::new(AggregateConfig::default());
    engine.submit(saas_request(None));
    engine.shutdown();

    assert!(!engine.is_background());
    assert!(!engine.is_pending());
    assert!(engine.submit(saas_request(None)).is_some());
}

#[test]
fn disabled_background_never_spawns() {
    let config = AggregateConfig {
        background_enabled: false,
        ..AggregateConfig::default()
    };
    let mut engine = AggregateEngine::new(config);
    assert!(!engine.is_background());
    assert!(engine.submit(saas_request(None)).is_some());
    assert!(!engine.poll());
}

#[test]
fn worker_answers_with_request_sequence() {
    let config = AggregateConfig::default();
    let mut worker = AggregateWorker::spawn(config.clone()).unwrap();
    let request = Arc::new(saas_request(None));

    worker.dispatch(7, Arc::clone(&request)).unwrap();
    let response = worker.recv_timeout(WAIT).unwrap().unwrap();
    assert_eq!(response.sequence, 7);
    assert_eq!(response.outcome.unwrap(), compute_aggregates(&request, &config));

    worker.shutdown();
    assert!(!worker.is_running());
    assert!(worker.dispatch(8, request).is_err());
}
