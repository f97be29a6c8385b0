use serde::{Deserialize, Serialize};

/// A deferred one-shot action persisted until its fire time.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct ScheduledTask {
    pub id: u64,
    pub guild_id: u64,
    /// Epoch milliseconds at which the task becomes due.
    pub fire_at: u64,
    pub action: TaskAction,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TaskAction {
    Unban { user_id: u64 },
    Remind { user_id: u64, message: String },
}
