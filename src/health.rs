use crate::logging::log_health;
use crate::messages::Messages;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthStatus {
    Checking,
    Connected,
    Error,
}

impl HealthStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            HealthStatus::Checking => "checking",
            HealthStatus::Connected => "connected",
            HealthStatus::Error => "error",
        }
    }

    pub fn label(&self, msgs: &Messages) -> &'static str {
        match self {
            HealthStatus::Checking => msgs.health_checking,
            HealthStatus::Connected => msgs.health_connected,
            HealthStatus::Error => msgs.health_error,
        }
    }

    /// Badge color as a CSS hex value.
    pub fn color(&self) -> &'static str {
        match self {
            HealthStatus::Checking => "#facc15",
            HealthStatus::Connected => "#22c55e",
            HealthStatus::Error => "#ef4444",
        }
    }
}

/// Badge fed by a single health check. Leaves `Checking` at most once.
#[derive(Debug, Clone)]
pub struct HealthIndicator {
    status: HealthStatus,
}

impl Default for HealthIndicator {
    fn default() -> Self {
        Self::new()
    }
}

impl HealthIndicator {
    pub fn new() -> Self {
        Self { status: HealthStatus::Checking }
    }

    pub fn status(&self) -> HealthStatus {
        self.status
    }

    /// Apply the outcome of the check. Returns false if already resolved.
    pub fn resolve<T, E>(&mut self, outcome: &Result<T, E>) -> bool {
        if self.status != HealthStatus::Checking {
            return false;
        }
        self.status = match outcome {
            Ok(_) => HealthStatus::Connected,
            Err(_) => HealthStatus::Error,
        };
        log_health(self.status.as_str());
        true
    }
}
