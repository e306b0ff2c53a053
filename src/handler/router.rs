//! Request routing dispatch module
//!
//! Entry point for HTTP request processing. Dispatch is an exact string match
//! of the raw request target (path plus query string) against a fixed route
//! table; anything else is the not-found outcome. Exactly one handler runs
//! per request.

use crate::bench;
use crate::config::AppState;
use crate::handler::pages;
use crate::http;
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Request, Response};
use std::convert::Infallible;
use std::sync::atomic::Ordering;
use std::sync::Arc;

/// Routes known to the dispatcher
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Benchmark,
    HostInfo,
    RuntimeInfo,
}

/// Route table: literal request target to route
///
/// Introspectable replacement for a chain of equality checks. Order is
/// irrelevant since the targets are disjoint; lookup failure is the default
/// case.
pub const ROUTE_TABLE: &[(&str, Route)] = &[
    ("/", Route::Home),
    ("/benchmark", Route::Benchmark),
    ("/hostinfo", Route::HostInfo),
    ("/phpinfo", Route::RuntimeInfo),
];

/// Exact-match lookup over the route table
///
/// No trailing-slash normalization, no case folding, no query stripping:
/// `/benchmark?x=1` does not match `/benchmark`.
pub fn lookup(target: &str) -> Option<Route> {
    ROUTE_TABLE
        .iter()
        .find(|(path, _)| *path == target)
        .map(|(_, route)| *route)
}

/// Main entry point for HTTP request handling
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let uri = req.uri();
    let target = uri.path_and_query().map_or(uri.path(), |pq| pq.as_str());

    let access_log = state.cached_access_log.load(Ordering::Relaxed);
    if access_log {
        logger::log_request(req.method(), target, req.version());
    }

    let response = dispatch(target, &state).await;

    if access_log {
        use hyper::body::Body as _;
        logger::log_response(response.body().size_hint().exact().unwrap_or(0));
    }

    Ok(response)
}

/// Select and execute exactly one outcome for the given request target
pub async fn dispatch(target: &str, state: &Arc<AppState>) -> Response<Full<Bytes>> {
    match lookup(target) {
        Some(Route::Home) => http::build_text_response(pages::home()),
        Some(Route::Benchmark) => run_benchmark().await,
        Some(Route::HostInfo) => http::build_text_response(pages::host_info()),
        Some(Route::RuntimeInfo) => http::build_text_response(pages::runtime_info(&state.config)),
        None => http::build_404_response(),
    }
}

/// Run the benchmark off the reactor and render its report line
///
/// A workload failure surfaces as a generic 500; the run is all-or-nothing.
async fn run_benchmark() -> Response<Full<Bytes>> {
    match tokio::task::spawn_blocking(bench::run).await {
        Ok(Ok(report)) => http::build_text_response(report.to_output()),
        Ok(Err(err)) => {
            logger::log_error(&format!("Benchmark workload failed: {err}"));
            http::build_500_response()
        }
        Err(err) => {
            logger::log_error(&format!("Benchmark task failed: {err}"));
            http::build_500_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, LoggingConfig, ServerConfig};
    use http_body_util::BodyExt;

    fn test_state() -> Arc<AppState> {
        let config = Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8080,
                workers: None,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                access_log: false,
                access_log_file: None,
                error_log_file: None,
            },
        };
        Arc::new(AppState::new(&config))
    }

    async fn body_string(resp: Response<Full<Bytes>>) -> String {
        let collected = resp.into_body().collect().await.unwrap();
        String::from_utf8(collected.to_bytes().to_vec()).unwrap()
    }

    #[test]
    fn test_every_named_target_maps_to_one_route() {
        assert_eq!(lookup("/"), Some(Route::Home));
        assert_eq!(lookup("/benchmark"), Some(Route::Benchmark));
        assert_eq!(lookup("/hostinfo"), Some(Route::HostInfo));
        assert_eq!(lookup("/phpinfo"), Some(Route::RuntimeInfo));
    }

    #[test]
    fn test_route_table_entries_are_disjoint() {
        for (i, (path, route)) in ROUTE_TABLE.iter().enumerate() {
            for (other_path, other_route) in &ROUTE_TABLE[i + 1..] {
                assert_ne!(path, other_path);
                assert_ne!(route, other_route);
            }
        }
    }

    #[test]
    fn test_unknown_targets_fall_through() {
        assert_eq!(lookup("/missing"), None);
        assert_eq!(lookup(""), None);
        // Trailing slash, query string, and case variants are all misses
        assert_eq!(lookup("/benchmark/"), None);
        assert_eq!(lookup("/benchmark?x=1"), None);
        assert_eq!(lookup("/Benchmark"), None);
        assert_eq!(lookup("/hostinfo?"), None);
    }

    #[tokio::test]
    async fn test_dispatch_home() {
        let resp = dispatch("/", &test_state()).await;
        assert_eq!(resp.status(), 200);
        assert!(body_string(resp).await.starts_with("Welcome"));
    }

    #[tokio::test]
    async fn test_dispatch_not_found_body() {
        let resp = dispatch("/benchmark?x=1", &test_state()).await;
        assert_eq!(resp.status(), 404);
        assert_eq!(body_string(resp).await, "Error 404");
    }

    #[tokio::test]
    async fn test_dispatch_runtime_info() {
        let resp = dispatch("/phpinfo", &test_state()).await;
        assert_eq!(resp.status(), 200);
        assert!(body_string(resp).await.contains(env!("CARGO_PKG_NAME")));
    }
}
