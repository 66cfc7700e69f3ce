//! Security-code service result types

use crate::domain::entities::security_code::SecurityCode;

/// A freshly issued code: the persisted record plus the plaintext.
///
/// The plaintext exists only in this value on its way to the delivery
/// channel; it is never logged or stored.
#[derive(Debug, Clone)]
pub struct IssuedCode {
    /// Persisted record holding the code digest
    pub record: SecurityCode,

    /// Plaintext code to hand to the delivery channel
    pub code: String,
}
