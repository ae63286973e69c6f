//! Dashboard orchestration: owns the catalog, the generation request
//! lifecycle and the health badge.
//!
//! State sits behind a mutex that is never held across an await. Each async
//! operation writes only its own slot, and every write after an await checks
//! the liveness flag so results arriving after `unmount` are dropped.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use crate::api::{GenerationJobResponse, LotteryApi, LotteryConfig};
use crate::form::{validate, FieldErrors, GenerationFormInput};
use crate::health::{HealthIndicator, HealthStatus};
use crate::logging::{log_transition, log_validation_failed};
use crate::messages::Messages;

#[derive(Debug, Clone, PartialEq)]
pub enum Catalog {
    Loading,
    Loaded(Vec<LotteryConfig>),
    Failed,
}

impl Catalog {
    /// Entries to offer in the selector; empty unless loaded.
    pub fn entries(&self) -> &[LotteryConfig] {
        match self {
            Catalog::Loaded(list) => list,
            _ => &[],
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RequestState {
    Idle,
    Loading,
    Failed(String),
    Succeeded(GenerationJobResponse),
}

impl RequestState {
    pub fn name(&self) -> &'static str {
        match self {
            RequestState::Idle => "idle",
            RequestState::Loading => "loading",
            RequestState::Failed(_) => "failed",
            RequestState::Succeeded(_) => "succeeded",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Validation blocked the submission; nothing was sent.
    Invalid(FieldErrors),
    /// Another generation request is still in flight.
    Busy,
    Succeeded,
    Failed(String),
    /// The response arrived after `unmount` and was discarded.
    Detached,
}

#[derive(Debug, Clone)]
pub struct DashboardState {
    pub catalog: Catalog,
    pub request: RequestState,
    pub health: HealthIndicator,
    /// Page-level error from the catalog fetch.
    pub page_error: Option<String>,
}

impl DashboardState {
    fn new() -> Self {
        Self {
            catalog: Catalog::Loading,
            request: RequestState::Idle,
            health: HealthIndicator::new(),
            page_error: None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.request, RequestState::Loading)
    }

    /// The single error banner: a failed generation wins over a catalog error.
    pub fn visible_error(&self) -> Option<&str> {
        match &self.request {
            RequestState::Failed(msg) => Some(msg.as_str()),
            _ => self.page_error.as_deref(),
        }
    }

    pub fn result(&self) -> Option<&GenerationJobResponse> {
        match &self.request {
            RequestState::Succeeded(resp) => Some(resp),
            _ => None,
        }
    }
}

pub struct Dashboard<A> {
    api: Arc<A>,
    msgs: &'static Messages,
    state: Arc<Mutex<DashboardState>>,
    alive: Arc<AtomicBool>,
}

impl<A> Clone for Dashboard<A> {
    fn clone(&self) -> Self {
        Self {
            api: Arc::clone(&self.api),
            msgs: self.msgs,
            state: Arc::clone(&self.state),
            alive: Arc::clone(&self.alive),
        }
    }
}

impl<A: LotteryApi + Send + Sync> Dashboard<A> {
    pub fn new(api: A, msgs: &'static Messages) -> Self {
        Self {
            api: Arc::new(api),
            msgs,
            state: Arc::new(Mutex::new(DashboardState::new())),
            alive: Arc::new(AtomicBool::new(true)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, DashboardState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn is_alive(&self) -> bool {
        self.alive.load(Ordering::SeqCst)
    }

    pub fn messages(&self) -> &'static Messages {
        self.msgs
    }

    pub fn snapshot(&self) -> DashboardState {
        self.lock().clone()
    }

    pub fn health_status(&self) -> HealthStatus {
        self.lock().health.status()
    }

    pub fn catalog(&self) -> Vec<LotteryConfig> {
        self.lock().catalog.entries().to_vec()
    }

    /// Catalog load and health check, concurrently.
    pub async fn mount(&self) {
        tokio::join!(self.load_catalog(), self.check_health());
    }

    pub fn unmount(&self) {
        self.alive.store(false, Ordering::SeqCst);
    }

    pub async fn load_catalog(&self) {
        let outcome = self.api.fetch_lotteries().await;
        if !self.is_alive() {
            return;
        }
        let mut state = self.lock();
        match outcome {
            Ok(resp) => state.catalog = Catalog::Loaded(resp.lotteries),
            Err(err) => {
                state.catalog = Catalog::Failed;
                state.page_error = Some(self.describe(err.to_string()));
            }
        }
    }

    pub async fn check_health(&self) {
        let outcome = self.api.fetch_health().await;
        if !self.is_alive() {
            return;
        }
        self.lock().health.resolve(&outcome);
    }

    pub async fn submit(&self, input: &GenerationFormInput) -> SubmitOutcome {
        // Only a loaded catalog constrains the name; while it is loading or
        // failed the backend has the final word.
        let loaded = match &self.lock().catalog {
            Catalog::Loaded(entries) => Some(entries.clone()),
            _ => None,
        };
        let values = match validate(input, loaded.as_deref(), self.msgs) {
            Ok(values) => values,
            Err(errors) => {
                let fields: Vec<&str> = errors.entries().iter().map(|(f, _)| *f).collect();
                log_validation_failed(&fields);
                return SubmitOutcome::Invalid(errors);
            }
        };

        {
            let mut state = self.lock();
            if state.is_loading() {
                return SubmitOutcome::Busy;
            }
            log_transition(state.request.name(), "loading", Some(&values.loteria));
            state.page_error = None;
            state.request = RequestState::Loading;
        }

        let outcome = self.api.create_generation_job(&values.to_request()).await;
        if !self.is_alive() {
            return SubmitOutcome::Detached;
        }

        let mut state = self.lock();
        match outcome {
            Ok(resp) => {
                log_transition("loading", "succeeded", Some(&values.loteria));
                state.request = RequestState::Succeeded(resp);
                SubmitOutcome::Succeeded
            }
            Err(err) => {
                let msg = self.describe(err.to_string());
                log_transition("loading", "failed", Some(&values.loteria));
                state.request = RequestState::Failed(msg.clone());
                SubmitOutcome::Failed(msg)
            }
        }
    }

    /// Clear the error banner. The last result, if any, stays.
    pub fn dismiss_error(&self) {
        let mut state = self.lock();
        if matches!(state.request, RequestState::Failed(_)) {
            state.request = RequestState::Idle;
        }
        state.page_error = None;
    }

    fn describe(&self, msg: String) -> String {
        if msg.trim().is_empty() {
            self.msgs.unknown_error.to_string()
        } else {
            msg
        }
    }
}
