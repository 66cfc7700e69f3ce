//! Mock delivery channels for auth flow tests

use async_trait::async_trait;
use std::sync::Mutex;

use crate::domain::entities::security_code::DeliveryMethod;
use crate::services::auth::CodeDelivery;

/// Delivery channel that records every code it was asked to send
#[derive(Default)]
pub struct RecordingDelivery {
    sent: Mutex<Vec<(String, String)>>,
}

impl RecordingDelivery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Plaintext of the most recently delivered code
    pub fn last_code(&self) -> Option<String> {
        self.sent
            .lock()
            .unwrap()
            .last()
            .map(|(_, code)| code.clone())
    }

    pub fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

#[async_trait]
impl CodeDelivery for RecordingDelivery {
    async fn deliver(
        &self,
        contact: &str,
        _method: DeliveryMethod,
        code: &str,
    ) -> Result<(), String> {
        self.sent
            .lock()
            .unwrap()
            .push((contact.to_string(), code.to_string()));
        Ok(())
    }
}

/// Delivery channel that always fails, simulating a provider outage
pub struct FailingDelivery;

#[async_trait]
impl CodeDelivery for FailingDelivery {
    async fn deliver(&self, _: &str, _: DeliveryMethod, _: &str) -> Result<(), String> {
        Err("smtp connection refused".to_string())
    }
}
