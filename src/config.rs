use std::{
    env,
    net::{IpAddr, Ipv4Addr},
};

pub const LOCAL_BASE_URL: &str = "http://localhost:5000";
pub const REMOTE_BASE_URL: &str = "https://sharrrkkk.pythonanywhere.com";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 16 * 1024 * 1024;
pub const DEFAULT_ALLOWED_ORIGINS: &[&str] = &["https://sharrrkkk.github.io", "http://localhost:8080"];

/// Picks the analysis service host for a page served from `hostname`.
pub fn resolve_base_url(hostname: &str) -> &'static str {
    if hostname == "localhost" {
        LOCAL_BASE_URL
    } else {
        REMOTE_BASE_URL
    }
}

pub fn resolve_client_base_url() -> String {
    if let Ok(url) = env::var("WC_BASE_URL") {
        if !url.trim().is_empty() {
            return url.trim().to_string();
        }
    }

    let hostname = env::var("WC_HOSTNAME").unwrap_or_else(|_| "localhost".to_string());
    resolve_base_url(hostname.trim()).to_string()
}

pub fn resolve_port() -> u16 {
    env::var("PORT")
        .ok()
        .and_then(|value| value.parse::<u16>().ok())
        .unwrap_or(DEFAULT_PORT)
}

pub fn resolve_host() -> IpAddr {
    env::var("HOST")
        .ok()
        .and_then(|value| value.parse::<IpAddr>().ok())
        .unwrap_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED))
}

#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub allowed_origins: Vec<String>,
    pub max_upload_bytes: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            allowed_origins: DEFAULT_ALLOWED_ORIGINS.iter().map(|o| o.to_string()).collect(),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

impl ServiceConfig {
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(raw) = env::var("WC_ALLOWED_ORIGINS") {
            config.allowed_origins = parse_origins(&raw);
        }
        if let Some(limit) = env::var("WC_MAX_UPLOAD_BYTES")
            .ok()
            .and_then(|value| value.parse::<usize>().ok())
        {
            config.max_upload_bytes = limit;
        }
        config
    }
}

pub fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|origin| origin.trim().trim_end_matches('/'))
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}
