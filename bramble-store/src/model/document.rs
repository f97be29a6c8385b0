use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::tasks::ScheduledTask;
use crate::model::warnings::Warning;

/// Per-guild setting map, keyed by setting name.
pub type GuildSettings = BTreeMap<String, String>;

/// The whole persisted document.
///
/// Snowflake ids are stored as strings because they are JSON object keys.
/// `tasks` and `next_task_id` default so documents written before the
/// scheduled-task queue existed still load.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct StoreDocument {
    #[serde(default)]
    pub warnings: BTreeMap<String, BTreeMap<String, Vec<Warning>>>,
    #[serde(default)]
    pub settings: BTreeMap<String, GuildSettings>,
    #[serde(default)]
    pub tasks: Vec<ScheduledTask>,
    #[serde(default = "first_task_id")]
    pub next_task_id: u64,
}

impl Default for StoreDocument {
    fn default() -> Self {
        Self {
            warnings: BTreeMap::new(),
            settings: BTreeMap::new(),
            tasks: Vec::new(),
            next_task_id: first_task_id(),
        }
    }
}

fn first_task_id() -> u64 {
    1
}
