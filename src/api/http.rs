use anyhow::Result;
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

use crate::api::{
    Endpoint, GenerationJobRequest, GenerationJobResponse, HealthResponse, LotteriesResponse,
    LotteryApi, RequestError,
};
use crate::config::Config;
use crate::logging::{log_api_call, v_str, ProfileScope};

/// reqwest-backed client for the lottery backend.
pub struct HttpApi {
    client: Client,
    cfg: Config,
}

impl HttpApi {
    pub fn new(cfg: &Config) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = cfg.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            cfg: cfg.clone(),
        })
    }

    async fn get<T: DeserializeOwned>(&self, endpoint: Endpoint) -> Result<T, RequestError> {
        let scope =
            ProfileScope::with_context("api.get", &[("endpoint", v_str(endpoint.as_str()))]);
        let url = self.cfg.endpoint_url(endpoint.path());
        let resp = self.client.get(&url).send().await.map_err(|source| {
            log_api_call(endpoint.path(), "GET", None, scope.elapsed_ms());
            RequestError::Transport { endpoint, source }
        })?;
        log_api_call(endpoint.path(), "GET", Some(resp.status().as_u16()), scope.elapsed_ms());
        if !resp.status().is_success() {
            return Err(RequestError::Status {
                endpoint,
                status: resp.status().as_u16(),
                body: None,
            });
        }
        decode(endpoint, resp).await
    }
}

async fn decode<T: DeserializeOwned>(
    endpoint: Endpoint,
    resp: Response,
) -> Result<T, RequestError> {
    let bytes = resp
        .bytes()
        .await
        .map_err(|source| RequestError::Transport { endpoint, source })?;
    serde_json::from_slice(&bytes).map_err(|err| RequestError::Decode {
        endpoint,
        detail: err.to_string(),
    })
}

#[async_trait]
impl LotteryApi for HttpApi {
    async fn fetch_health(&self) -> Result<HealthResponse, RequestError> {
        self.get(Endpoint::Health).await
    }

    async fn fetch_lotteries(&self) -> Result<LotteriesResponse, RequestError> {
        self.get(Endpoint::Lotteries).await
    }

    async fn create_generation_job(
        &self,
        req: &GenerationJobRequest,
    ) -> Result<GenerationJobResponse, RequestError> {
        let endpoint = Endpoint::GenerationJobs;
        let scope = ProfileScope::with_context(
            "api.post",
            &[("endpoint", v_str(endpoint.as_str())), ("loteria", v_str(&req.loteria))],
        );
        let url = self.cfg.endpoint_url(endpoint.path());
        let resp = self.client.post(&url).json(req).send().await.map_err(|source| {
            log_api_call(endpoint.path(), "POST", None, scope.elapsed_ms());
            RequestError::Transport { endpoint, source }
        })?;
        let status = resp.status();
        log_api_call(endpoint.path(), "POST", Some(status.as_u16()), scope.elapsed_ms());
        if !status.is_success() {
            // Body is shown to the user verbatim; a failed read still reports the status.
            let body = resp.text().await.unwrap_or_default();
            return Err(RequestError::Status {
                endpoint,
                status: status.as_u16(),
                body: Some(body),
            });
        }
        decode(endpoint, resp).await
    }
}
