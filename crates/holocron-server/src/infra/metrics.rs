use axum::body::Body;
use axum::extract::MatchedPath;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;
use prometheus::{
    register_histogram_vec, register_int_counter_vec, register_int_gauge, Encoder, HistogramOpts,
    HistogramVec, IntCounterVec, IntGauge, Opts, TextEncoder,
};
use std::sync::LazyLock;
use std::time::Instant;
use tracing::warn;

fn counter_vec_or_fallback(name: &str, help: &str, labels: &[&str]) -> IntCounterVec {
    match register_int_counter_vec!(name, help, labels) {
        Ok(metric) => metric,
        Err(err) => {
            warn!(event = "metrics_register_failed", metric = name, error = %err);
            IntCounterVec::new(Opts::new(name, help), labels).unwrap_or_else(|err| {
                warn!(event = "metrics_fallback_failed", metric = name, error = %err);
                IntCounterVec::new(
                    Opts::new("holocron_metrics_fallback", "metrics fallback"),
                    &["name"],
                )
                .expect("fallback metric")
            })
        }
    }
}

fn gauge_or_fallback(name: &str, help: &str) -> IntGauge {
    match register_int_gauge!(name, help) {
        Ok(metric) => metric,
        Err(err) => {
            warn!(event = "metrics_register_failed", metric = name, error = %err);
            IntGauge::new(name, help).unwrap_or_else(|err| {
                warn!(event = "metrics_fallback_failed", metric = name, error = %err);
                IntGauge::new("holocron_metrics_fallback_gauge", "metrics fallback")
                    .expect("fallback metric")
            })
        }
    }
}

fn histogram_vec_or_fallback(
    name: &str,
    help: &str,
    labels: &[&str],
    buckets: Vec<f64>,
) -> HistogramVec {
    match register_histogram_vec!(name, help, labels, buckets.clone()) {
        Ok(metric) => metric,
        Err(err) => {
            warn!(event = "metrics_register_failed", metric = name, error = %err);
            let opts = HistogramOpts::new(name, help).buckets(buckets);
            HistogramVec::new(opts, labels).unwrap_or_else(|err| {
                warn!(event = "metrics_fallback_failed", metric = name, error = %err);
                HistogramVec::new(
                    HistogramOpts::new("holocron_metrics_fallback_histogram", "metrics fallback"),
                    &["name"],
                )
                .expect("fallback metric")
            })
        }
    }
}

fn http_buckets() -> Vec<f64> {
    vec![
        0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0,
    ]
}

static HTTP_IN_FLIGHT: LazyLock<IntGauge> =
    LazyLock::new(|| gauge_or_fallback("holocron_http_in_flight", "HTTP requests in flight"));

static HTTP_REQUESTS: LazyLock<IntCounterVec> = LazyLock::new(|| {
    counter_vec_or_fallback(
        "holocron_http_requests_total",
        "HTTP requests",
        &["method", "route", "status_class"],
    )
});

static HTTP_LATENCY: LazyLock<HistogramVec> = LazyLock::new(|| {
    histogram_vec_or_fallback(
        "holocron_http_request_duration_seconds",
        "HTTP request latency",
        &["route"],
        http_buckets(),
    )
});

static DB_ERRORS: LazyLock<IntCounterVec> = LazyLock::new(|| {
    counter_vec_or_fallback(
        "holocron_db_errors_total",
        "Database errors by operation",
        &["operation"],
    )
});

pub async fn http_metrics(req: Request<Body>, next: Next) -> Response {
    let method = req.method().as_str().to_string();
    let route = req
        .extensions()
        .get::<MatchedPath>()
        .map(MatchedPath::as_str)
        .unwrap_or("unmatched")
        .to_string();
    HTTP_IN_FLIGHT.inc();
    let start = Instant::now();
    let response = next.run(req).await;
    let elapsed = start.elapsed().as_secs_f64();
    HTTP_IN_FLIGHT.dec();
    record_http_request(&method, &route, response.status().as_u16(), elapsed);
    response
}

pub fn record_http_request(method: &str, route: &str, status: u16, duration_seconds: f64) {
    HTTP_REQUESTS
        .with_label_values(&[method, route, status_class(status)])
        .inc();
    HTTP_LATENCY
        .with_label_values(&[route])
        .observe(duration_seconds);
}

pub fn db_error(operation: &str) {
    DB_ERRORS.with_label_values(&[operation]).inc();
}

fn status_class(status: u16) -> &'static str {
    match status / 100 {
        1 => "1xx",
        2 => "2xx",
        3 => "3xx",
        4 => "4xx",
        5 => "5xx",
        _ => "unknown",
    }
}

/// Prometheus text exposition of the default registry.
pub fn render() -> (String, String) {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    if let Err(err) = encoder.encode(&metric_families, &mut buffer) {
        warn!(event = "metrics_encode_failed", error = %err);
    }
    (
        encoder.format_type().to_string(),
        String::from_utf8_lossy(&buffer).into_owned(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_classes() {
        assert_eq!(status_class(200), "2xx");
        assert_eq!(status_class(404), "4xx");
        assert_eq!(status_class(503), "5xx");
        assert_eq!(status_class(42), "unknown");
    }

    #[test]
    fn recorded_requests_show_up_in_render() {
        record_http_request("GET", "/people/:id", 404, 0.01);
        db_error("people_get");
        let (content_type, body) = render();
        assert!(content_type.starts_with("text/plain"));
        assert!(body.contains("holocron_http_requests_total"));
        assert!(body.contains("route=\"/people/:id\""));
        assert!(body.contains("holocron_db_errors_total"));
    }
}
