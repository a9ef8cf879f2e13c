//! Milestone configuration structures

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::model::{Metric, Stage, Startup};

/// One-time reward granted when a milestone is first reached
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MilestoneReward {
    pub cash: Option<i64>,
    pub brand_awareness: Option<i64>,
    /// Stage the milestone conceptually opens up. Informational; stage changes
    /// still go through decision selection.
    pub unlock_stage: Option<Stage>,
}

/// Milestone with its achievement flag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Milestone {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Minimum value per metric; every entry must hold
    #[serde(default)]
    pub requirements: BTreeMap<Metric, i64>,
    #[serde(default)]
    pub reward: MilestoneReward,
    #[serde(default)]
    pub achieved: bool,
}

impl Milestone {
    /// Check every requirement against the startup (vacuously true when empty)
    pub fn requirements_met(&self, startup: &Startup) -> bool {
        self.requirements
            .iter()
            .all(|(metric, min)| startup.metric(*metric) >= *min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;

    #[test]
    fn test_requirements_all_must_hold() {
        let json = r#"{
            "id": "first-customer",
            "title": "First paying customer",
            "description": "Someone pays you",
            "requirements": { "customers": 1, "monthlyRevenue": 50 },
            "reward": { "brandAwareness": 10 }
        }"#;
        let milestone: Milestone = serde_json::from_str(json).unwrap();
        assert!(!milestone.achieved);

        let mut startup = Startup::new("M", "saas", &GameConfig::default());
        startup.customers = 3;
        assert!(!milestone.requirements_met(&startup));

        startup.monthly_revenue = 50;
        assert!(milestone.requirements_met(&startup));
    }

    #[test]
    fn test_empty_requirements_pass() {
        let milestone = Milestone {
            id: "free".to_string(),
            title: "Free".to_string(),
            description: "Always".to_string(),
            requirements: BTreeMap::new(),
            reward: MilestoneReward::default(),
            achieved: false,
        };
        let startup = Startup::new("M", "saas", &GameConfig::default());
        assert!(milestone.requirements_met(&startup));
    }

    #[test]
    fn test_unknown_requirement_key_rejected() {
        let json = r#"{
            "id": "x",
            "title": "x",
            "description": "x",
            "requirements": { "happiness": 1 }
        }"#;
        assert!(serde_json::from_str::<Milestone>(json).is_err());
    }
}
