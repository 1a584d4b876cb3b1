use observability_defaults::domain::{Next, RequestContext, ResponseContext, TimerHandle};
use observability_defaults::{
    create_null_observability, create_observability, ObservabilityConfig,
};
use serde_json::json;
use serial_test::serial;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

#[test]
fn end_to_end_null_registry() {
    // ---
    let obs = create_null_observability().unwrap();

    // Scoped logging works at any depth with no backend configured
    obs.logger()
        .child(json!({"req": "id"}))
        .info("hello", Some(&json!({"a": 1})));
    obs.logger()
        .child(json!({"a": 1}))
        .child(json!({"b": 2}))
        .child(json!({"c": 3}))
        .warn("nested", None);

    // Timer idiom holds without branching on activity
    let handle = obs.metrics().time("op", &[]);
    assert_eq!(handle, TimerHandle(1));
    obs.metrics().end_time(handle);

    assert!(!obs.error_reporter().is_active());
    assert!(!obs.metrics().is_active());
}

#[test]
fn plugin_registration_drives_continuation() {
    // ---
    let obs = create_null_observability().unwrap();
    let reporter = obs.error_reporter();

    let calls = AtomicU32::new(0);
    let mut request = RequestContext {
        path: "/api".to_string(),
        method: "GET".to_string(),
    };
    let mut response = ResponseContext::default();

    let next: Next = Box::new(|| {
        calls.fetch_add(1, Ordering::SeqCst);
    });
    reporter
        .hapi()
        .plugin
        .register(&mut request, &mut response, Some(next));
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    // Omitted continuation must not fail
    reporter
        .hapi()
        .plugin
        .register(&mut request, &mut response, None);
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    // Both metadata attachment points agree
    let plugin = &reporter.hapi().plugin;
    assert_eq!(plugin.pkg(), plugin.attributes().pkg);
}

#[test]
fn concurrent_mixed_usage_is_consistent() {
    // ---
    // All four stand-ins share no mutable state; hammer them from
    // several threads and verify every observed value stays constant.
    let obs = Arc::new(create_null_observability().unwrap());

    std::thread::scope(|scope| {
        for worker in 0..8 {
            let obs = Arc::clone(&obs);
            scope.spawn(move || {
                for i in 0..1_000 {
                    let logger = obs.logger().child(json!({"worker": worker}));
                    logger.debug("tick", Some(&json!({"i": i})));

                    let handle = obs.metrics().time("tick", &[]);
                    assert_eq!(handle, TimerHandle(1));
                    obs.metrics().increment_one("ticks", &[]);
                    obs.metrics().end_time(handle);

                    obs.error_reporter().capture_message("tick", None);
                    assert!(!obs.error_reporter().is_active());
                    assert!(!obs.metrics().is_active());

                    obs.profiler().create_debounced_snapshot("tick");
                }
            });
        }
    });
}

#[test]
#[serial]
fn registry_from_env_defaults_to_null() {
    // ---
    std::env::remove_var("OBS_LOGGER_BACKEND");
    std::env::remove_var("OBS_ERROR_REPORTER_BACKEND");
    std::env::remove_var("OBS_METRICS_BACKEND");
    std::env::remove_var("OBS_PROFILER_BACKEND");

    let config = ObservabilityConfig::from_env().unwrap();
    let obs = create_observability(&config).unwrap();

    assert!(!obs.error_reporter().is_active());
    assert_eq!(obs.metrics().time("op", &[]), TimerHandle(1));
}

#[test]
#[serial]
fn registry_rejects_unknown_backend() {
    // ---
    std::env::set_var("OBS_METRICS_BACKEND", "prometheus-push");

    let err = ObservabilityConfig::from_env().expect_err("expected configuration error");
    assert!(err.to_string().contains("Unknown observability backend"));

    std::env::remove_var("OBS_METRICS_BACKEND");
}
