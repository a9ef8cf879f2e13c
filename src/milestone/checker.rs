//! Milestone checking logic

use serde::Serialize;
use tracing::info;

use crate::config::Milestone;
use crate::model::{clamp_percent, Stage, Startup};

/// A milestone reached during a check, with the reward that was paid out
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MilestoneInfo {
    pub id: String,
    pub title: String,
    pub description: String,
    pub cash_reward: i64,
    pub brand_awareness_reward: i64,
    pub unlock_stage: Option<Stage>,
}

/// Check every unachieved milestone in order and pay out first-time rewards
///
/// Rewards land on the startup immediately, so a milestone later in the list
/// sees the effect of one earlier in the same pass.
pub fn evaluate_milestones(milestones: &mut [Milestone], startup: &mut Startup) -> Vec<MilestoneInfo> {
    let mut reached = Vec::new();

    for milestone in milestones.iter_mut() {
        if milestone.achieved || !milestone.requirements_met(startup) {
            continue;
        }

        let cash = milestone.reward.cash.unwrap_or(0);
        let brand = milestone.reward.brand_awareness.unwrap_or(0);
        startup.cash = startup.cash.saturating_add(cash);
        startup.brand_awareness = clamp_percent(startup.brand_awareness.saturating_add(brand));
        milestone.achieved = true;

        info!(
            milestone = %milestone.id,
            cash_reward = cash,
            brand_reward = brand,
            month = startup.month,
            "milestone achieved"
        );

        reached.push(MilestoneInfo {
            id: milestone.id.clone(),
            title: milestone.title.clone(),
            description: milestone.description.clone(),
            cash_reward: cash,
            brand_awareness_reward: brand,
            unlock_stage: milestone.reward.unlock_stage,
        });
    }

    reached
}
