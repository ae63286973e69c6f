use anyhow::{anyhow, Context, Result};
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

use crate::messages::{Locale, Messages};

pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Process-wide settings, read once at startup and passed down explicitly.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_base: Url,
    pub timeout: Option<Duration>,
    pub locale: Locale,
    pub report_path: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let raw_base = std::env::var("LOTTERY_API_URL")
            .or_else(|_| std::env::var("NEXT_PUBLIC_API_URL"))
            .unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let timeout_secs: u64 = std::env::var("API_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);
        let locale = std::env::var("DASH_LOCALE")
            .ok()
            .and_then(|v| Locale::parse(&v))
            .unwrap_or(Locale::En);
        let report_path = std::env::var("REPORT_PATH")
            .unwrap_or_else(|_| "out/report/index.html".to_string());

        let mut cfg = Self::new(&raw_base)?;
        cfg.timeout = if timeout_secs == 0 {
            None
        } else {
            Some(Duration::from_secs(timeout_secs))
        };
        cfg.locale = locale;
        cfg.report_path = PathBuf::from(report_path);
        Ok(cfg)
    }

    /// Config pointing at `base` with every other field at its default.
    pub fn new(base: &str) -> Result<Self> {
        Ok(Self {
            api_base: parse_base(base)?,
            timeout: Some(Duration::from_secs(30)),
            locale: Locale::En,
            report_path: PathBuf::from("out/report/index.html"),
        })
    }

    pub fn messages(&self) -> &'static Messages {
        self.locale.messages()
    }

    /// Absolute URL for an `/api/...` path. Any path prefix on the base is kept.
    pub fn endpoint_url(&self, path: &str) -> String {
        format!("{}{}", self.api_base.as_str().trim_end_matches('/'), path)
    }
}

fn parse_base(raw: &str) -> Result<Url> {
    let url = Url::parse(raw.trim()).with_context(|| format!("invalid API base URL {:?}", raw))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(anyhow!("unsupported API scheme {:?} in {}", other, raw)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_url_default() {
        let cfg = Config::new(DEFAULT_API_URL).unwrap();
        assert_eq!(cfg.endpoint_url("/api/health"), "http://localhost:8000/api/health");
    }

    #[test]
    fn test_endpoint_url_keeps_prefix() {
        let cfg = Config::new("https://example.org/lottery/").unwrap();
        assert_eq!(
            cfg.endpoint_url("/api/lotteries"),
            "https://example.org/lottery/api/lotteries"
        );
    }

    #[test]
    fn test_rejects_non_http_scheme() {
        assert!(Config::new("ftp://example.org").is_err());
        assert!(Config::new("not a url").is_err());
    }
}
