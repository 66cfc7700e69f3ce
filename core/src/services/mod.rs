//! Business services containing domain logic and use cases.

pub mod auth;
pub mod clock;
pub mod limiter;
pub mod security_code;

// Re-export commonly used types
pub use auth::{AuthService, AuthServiceConfig, CodeDelivery, SignupResult, VerifyOutcome};
pub use clock::{Clock, MockClock, SystemClock};
pub use limiter::{AttemptStore, Limiter, LimiterConfig, LimiterDecision, VerificationLimiter};
pub use security_code::{IssuedCode, SecurityCodeConfig, SecurityCodeService};

/// Mask a contact for logging; emails keep the first character and the
/// domain, anything else keeps only the last four characters.
pub(crate) fn mask_contact(contact: &str) -> String {
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

#[cfg(test)]
mod tests {
    use super::mask_contact;

    #[test]
    fn test_mask_email() {
        assert_eq!(mask_contact("alice@example.com"), "a***@example.com");
    }

    #[test]
    fn test_mask_phone_like() {
        assert_eq!(mask_contact("1234567890"), "***7890");
        assert_eq!(mask_contact("123"), "****");
    }
}
