//! Logging delivery channel for non-production environments

use async_trait::async_trait;
use tracing::info;

use brew_core::domain::entities::security_code::DeliveryMethod;
use brew_core::services::auth::CodeDelivery;

/// Delivery channel that records the send in the log instead of
/// contacting a provider. The contact is masked and the code itself is
/// never written out.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogCodeDelivery;

impl LogCodeDelivery {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CodeDelivery for LogCodeDelivery {
    async fn deliver(
        &self,
        contact: &str,
        method: DeliveryMethod,
        _code: &str,
    ) -> Result<(), String> {
        info!(
            event = "security_code_delivered",
            contact = %mask(contact),
            method = ?method,
            "Security code dispatched"
        );
        Ok(())
    }
}

fn mask(contact: &str) -> String {
    if let Some((local, domain)) = contact.split_once('@') {
        let first = local.chars().next().unwrap_or('*');
        return format!("{}***@{}", first, domain);
    }
    if contact.len() <= 4 {
        "****".to_string()
    } else {
        format!("***{}", &contact[contact.len() - 4..])
    }
}
