//! Stub page handlers
//!
//! The non-benchmark routes are trivial text producers: a welcome line, a
//! host metadata echo, and a runtime configuration echo.

use crate::config::Config;

/// Body for the `/` route
pub fn home() -> String {
    "Welcome\n".to_string()
}

/// Body for the `/hostinfo` route: host metadata echo
pub fn host_info() -> String {
    let hostname = std::env::var("HOSTNAME").unwrap_or_else(|_| "unknown".to_string());
    let cpus = std::thread::available_parallelism()
        .map(std::num::NonZeroUsize::get)
        .unwrap_or(1);

    format!(
        "Hostname: {hostname}\nOS: {}\nArchitecture: {}\nCPUs: {cpus}\n",
        std::env::consts::OS,
        std::env::consts::ARCH,
    )
}

/// Body for the `/phpinfo` route: runtime configuration echo
///
/// Despite the route name, the body describes this server's runtime.
pub fn runtime_info(config: &Config) -> String {
    let logging = serde_json::to_string_pretty(&config.logging)
        .unwrap_or_else(|_| "unavailable".to_string());
    let server = serde_json::to_string_pretty(&config.server)
        .unwrap_or_else(|_| "unavailable".to_string());

    format!(
        "{} {}\nServer config:\n{server}\nLogging config:\n{logging}\n",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
    )
}
