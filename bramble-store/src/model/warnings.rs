use serde::{Deserialize, Serialize};

/// One warning filed against a (guild, user) pair. Immutable once created.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct Warning {
    pub moderator: String,
    pub reason: String,
    /// Epoch milliseconds at the time the warning was issued.
    pub timestamp: u64,
}
