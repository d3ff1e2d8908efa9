//! Settlement of a committed flow
//!
//! There is no backend: [`DelaySettler`] waits a fixed time and always
//! succeeds. Tests and alternative front ends swap in their own [`Settler`].

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::debug;

use super::FieldMap;

/// What a committed flow hands to the settler
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettlementRequest {
    pub flow: &'static str,
    pub fields: FieldMap,
}

/// Proof of a completed settlement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub flow: &'static str,
    /// The input as it was at commit time
    pub fields: FieldMap,
    pub settled_at: DateTime<Utc>,
}

impl Receipt {
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }
}

#[async_trait]
pub trait Settler: Send + Sync {
    async fn settle(&self, request: SettlementRequest) -> Receipt;
}

/// Waits `delay`, then settles unconditionally
#[derive(Debug, Clone, Copy)]
pub struct DelaySettler {
    delay: Duration,
}

impl DelaySettler {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

#[async_trait]
impl Settler for DelaySettler {
    async fn settle(&self, request: SettlementRequest) -> Receipt {
        debug!(flow = request.flow, delay_ms = self.delay.as_millis() as u64, "Settling");
        tokio::time::sleep(self.delay).await;
        Receipt {
            flow: request.flow,
            fields: request.fields,
            settled_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_delay_settler_waits_then_succeeds() {
        let settler = DelaySettler::new(Duration::from_millis(1500));
        let mut fields = FieldMap::new();
        fields.insert("amount".into(), "10".into());

        let started = tokio::time::Instant::now();
        let receipt = settler
            .settle(SettlementRequest {
                flow: "test",
                fields,
            })
            .await;

        assert!(started.elapsed() >= Duration::from_millis(1500));
        assert_eq!(receipt.flow, "test");
        assert_eq!(receipt.field("amount"), Some("10"));
        assert_eq!(receipt.field("note"), None);
    }
}
