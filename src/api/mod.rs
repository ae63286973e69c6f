use async_trait::async_trait;
use std::fmt;

pub mod http;
pub mod types;

pub use http::HttpApi;
pub use types::{
    BacktestResult, GameResult, GenerationJobRequest, GenerationJobResponse, GenerationStats,
    HealthResponse, LotteriesResponse, LotteryConfig, PerGameStat,
};

/// The three backend routes the dashboard talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Health,
    Lotteries,
    GenerationJobs,
}

impl Endpoint {
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Health => "/api/health",
            Endpoint::Lotteries => "/api/lotteries",
            Endpoint::GenerationJobs => "/api/generation-jobs",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Endpoint::Health => "health",
            Endpoint::Lotteries => "lotteries",
            Endpoint::GenerationJobs => "generation_jobs",
        }
    }
}

#[derive(Debug)]
pub enum RequestError {
    /// Connection refused, timeout, TLS, anything before a status line.
    Transport { endpoint: Endpoint, source: reqwest::Error },
    /// Backend answered with a non-success status.
    Status {
        endpoint: Endpoint,
        status: u16,
        body: Option<String>,
    },
    /// Success status but the body did not match the expected shape.
    Decode { endpoint: Endpoint, detail: String },
}

impl RequestError {
    pub fn endpoint(&self) -> Endpoint {
        match self {
            RequestError::Transport { endpoint, .. }
            | RequestError::Status { endpoint, .. }
            | RequestError::Decode { endpoint, .. } => *endpoint,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            RequestError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestError::Status {
                endpoint: Endpoint::Health,
                status,
                ..
            } => write!(f, "Health check failed: {}", status),
            RequestError::Status {
                endpoint: Endpoint::Lotteries,
                status,
                ..
            } => write!(f, "Failed to fetch lotteries: {}", status),
            RequestError::Status {
                endpoint: Endpoint::GenerationJobs,
                status,
                body,
            } => write!(
                f,
                "Generation failed ({}): {}",
                status,
                body.as_deref().unwrap_or("")
            ),
            RequestError::Transport { endpoint, source } => {
                write!(f, "{} request failed: {}", endpoint.path(), source)
            }
            RequestError::Decode { endpoint, detail } => {
                write!(f, "{} returned an unexpected body: {}", endpoint.path(), detail)
            }
        }
    }
}

impl std::error::Error for RequestError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RequestError::Transport { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Backend seam. `HttpApi` is the real implementation; tests substitute their own.
#[async_trait]
pub trait LotteryApi {
    async fn fetch_health(&self) -> Result<HealthResponse, RequestError>;
    async fn fetch_lotteries(&self) -> Result<LotteriesResponse, RequestError>;
    async fn create_generation_job(
        &self,
        req: &GenerationJobRequest,
    ) -> Result<GenerationJobResponse, RequestError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_status_message_embeds_body() {
        let err = RequestError::Status {
            endpoint: Endpoint::GenerationJobs,
            status: 503,
            body: Some("{\"detail\":\"Database not available\"}".to_string()),
        };
        let msg = err.to_string();
        assert!(msg.contains("503"));
        assert!(msg.contains("Database not available"));
        assert_eq!(err.status(), Some(503));
    }

    #[test]
    fn test_catalog_status_message() {
        let err = RequestError::Status {
            endpoint: Endpoint::Lotteries,
            status: 404,
            body: None,
        };
        assert_eq!(err.to_string(), "Failed to fetch lotteries: 404");
        assert_eq!(err.endpoint(), Endpoint::Lotteries);
    }
}
