//! Event configuration structures

use serde::{Deserialize, Serialize};

use crate::model::Stage;

/// Event flavour, used for presentation only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    Opportunity,
    Challenge,
    Crisis,
    Milestone,
}

/// Informational event that shows up when a month is reached
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameEvent {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub event_type: EventType,
    pub impact: String,
    /// Month the event fires in
    pub month: u32,
    /// Only fire while the startup is in this stage
    pub stage: Option<Stage>,
    #[serde(default)]
    pub auto_trigger: bool,
}

impl GameEvent {
    /// Whether this event fires on entering `month` while in `stage`
    #[inline]
    pub fn triggers_at(&self, month: u32, stage: Stage) -> bool {
        self.month == month && self.stage.map_or(true, |s| s == stage)
    }
}
