//! Application configuration loaded from environment variables.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

use serde::Deserialize;
use url::Url;

use crate::render::Theme;

/// NYC DOHMH restaurant inspection results (Socrata dataset `43nn-pn8j`).
pub const DEFAULT_UPSTREAM_URL: &str = "https://data.cityofnewyork.us/resource/43nn-pn8j.json";

/// Rows requested per upstream call.
///
/// The upstream service applies its own cap on top of this, so the number of rows
/// actually returned may be smaller.
pub const DEFAULT_PAGE_LIMIT: u64 = 1000;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    // === Upstream ===
    /// Inspection dataset endpoint.
    #[serde(default = "default_upstream_url")]
    pub upstream_url: String,

    /// Value sent as the `$limit` query parameter.
    #[serde(default = "default_page_limit")]
    pub page_limit: u64,

    /// Upstream request timeout. Unset means the request may wait forever.
    #[serde(default)]
    pub http_timeout_ms: Option<u64>,

    // === Server Configuration ===
    /// Listener address.
    #[serde(default = "default_bind_host")]
    pub bind_host: IpAddr,

    /// Listener port.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Presentation theme for the rendered page.
    #[serde(default)]
    pub page_theme: Theme,

    // === Observability ===
    /// Install the Prometheus exporter.
    #[serde(default)]
    pub metrics_enabled: bool,

    /// Prometheus exporter port.
    #[serde(default = "default_metrics_port")]
    pub metrics_port: u16,
}

fn default_upstream_url() -> String {
    DEFAULT_UPSTREAM_URL.to_string()
}

fn default_page_limit() -> u64 {
    DEFAULT_PAGE_LIMIT
}

fn default_bind_host() -> IpAddr {
    IpAddr::V4(Ipv4Addr::LOCALHOST)
}

fn default_port() -> u16 {
    5000
}

fn default_metrics_port() -> u16 {
    9090
}

impl Default for Config {
    fn default() -> Self {
        Self {
            upstream_url: default_upstream_url(),
            page_limit: default_page_limit(),
            http_timeout_ms: None,
            bind_host: default_bind_host(),
            port: default_port(),
            page_theme: Theme::default(),
            metrics_enabled: false,
            metrics_port: default_metrics_port(),
        }
    }
}

impl Config {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        envy::from_env()
    }

    /// Check if the configuration is valid.
    pub fn validate(&self) -> Result<(), String> {
        let url = Url::parse(&self.upstream_url)
            .map_err(|e| format!("UPSTREAM_URL is not a valid URL: {}", e))?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(format!(
                "UPSTREAM_URL must use http or https, got {}",
                url.scheme()
            ));
        }

        if self.page_limit == 0 {
            return Err("PAGE_LIMIT must be at least 1".to_string());
        }

        if self.http_timeout_ms == Some(0) {
            return Err("HTTP_TIMEOUT_MS must be greater than 0 when set".to_string());
        }

        if self.metrics_enabled && self.metrics_port == self.port {
            return Err("METRICS_PORT must differ from PORT".to_string());
        }

        Ok(())
    }

    /// Socket address the web service listens on.
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_host, self.port)
    }

    /// Socket address of the Prometheus exporter.
    pub fn metrics_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_host, self.metrics_port)
    }

    /// Upstream timeout, if one is configured.
    pub fn http_timeout(&self) -> Option<Duration> {
        self.http_timeout_ms.map(Duration::from_millis)
    }
}
