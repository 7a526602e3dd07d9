use std::env;
use std::time::Duration;

use tracing::warn;

pub const DEFAULT_ENDPOINT: &str = "https://monitoring.googleapis.com";
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 30_000;

/// How list-mode results are rendered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Per-invocation settings, built once from the command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub project: String,
    /// Metric type to delete; `None` selects list mode.
    pub metric_name: Option<String>,
    pub short: bool,
    pub output: OutputFormat,
}

impl Config {
    pub fn mode(&self) -> Mode<'_> {
        match self.metric_name.as_deref() {
            Some(name) if !name.is_empty() => Mode::Delete(name),
            _ => Mode::List,
        }
    }

    /// `projects/{project}`
    pub fn project_path(&self) -> String {
        format!("projects/{}", self.project)
    }

    /// `projects/{project}/metricDescriptors/{metric}`
    pub fn descriptor_path(&self, metric: &str) -> String {
        format!("projects/{}/metricDescriptors/{}", self.project, metric)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode<'a> {
    List,
    Delete(&'a str),
}

/// Connection settings for the monitoring gRPC client
#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub endpoint: String,
    pub request_timeout_ms: u64,
    pub domain: Option<String>,
    pub ca_path: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: env::var("GCM_ENDPOINT").unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string()),
            request_timeout_ms: parse_timeout_ms(env::var("GCM_REQUEST_TIMEOUT_MS").ok().as_deref()),
            domain: env::var("GCM_TLS_DOMAIN").ok(),
            ca_path: env::var("GCM_CA").ok(),
        }
    }
}

fn parse_timeout_ms(raw: Option<&str>) -> u64 {
    match raw.map(|v| v.trim().parse::<u64>()) {
        None => DEFAULT_REQUEST_TIMEOUT_MS,
        Some(Ok(ms)) => ms,
        Some(Err(err)) => {
            warn!(
                value = raw.unwrap_or_default(),
                error = %err,
                default_ms = DEFAULT_REQUEST_TIMEOUT_MS,
                "ignoring invalid GCM_REQUEST_TIMEOUT_MS"
            );
            DEFAULT_REQUEST_TIMEOUT_MS
        }
    }
}

impl ClientConfig {
    /// Endpoint as a full URL; a bare `host:port` defaults to https.
    pub fn endpoint_url(&self) -> String {
        if self.endpoint.starts_with("http://") || self.endpoint.starts_with("https://") {
            self.endpoint.clone()
        } else {
            format!("https://{}", self.endpoint)
        }
    }

    /// Plaintext endpoints (emulators, local proxies) are used without TLS or credentials.
    pub fn is_plaintext(&self) -> bool {
        self.endpoint.starts_with("http://")
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}
