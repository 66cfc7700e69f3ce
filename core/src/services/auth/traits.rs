//! Delivery seam for outbound security codes

use async_trait::async_trait;

use crate::domain::entities::security_code::DeliveryMethod;

/// Outbound channel that carries a plaintext code to a contact.
///
/// Implementations live in the infrastructure layer; errors come back as
/// plain strings and are mapped to domain errors by the caller.
#[async_trait]
pub trait CodeDelivery: Send + Sync {
    async fn deliver(
        &self,
        contact: &str,
        method: DeliveryMethod,
        code: &str,
    ) -> Result<(), String>;
}
