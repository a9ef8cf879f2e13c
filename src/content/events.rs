//! Built-in events and milestones

use std::collections::BTreeMap;

use crate::config::{EventType, GameEvent, Milestone, MilestoneReward};
use crate::model::{Metric, Stage};

fn event(
    id: &str,
    title: &str,
    description: &str,
    event_type: EventType,
    impact: &str,
    month: u32,
    stage: Option<Stage>,
) -> GameEvent {
    GameEvent {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        event_type,
        impact: impact.to_string(),
        month,
        stage,
        auto_trigger: false,
    }
}

fn milestone(
    id: &str,
    title: &str,
    description: &str,
    requirements: &[(Metric, i64)],
    reward: MilestoneReward,
) -> Milestone {
    Milestone {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        requirements: requirements.iter().copied().collect::<BTreeMap<_, _>>(),
        reward,
        achieved: false,
    }
}

pub(super) fn startup_events() -> Vec<GameEvent> {
    vec![
        GameEvent {
            auto_trigger: true,
            ..event(
                "covid-impact",
                "Pandemic",
                "A pandemic reshapes the business landscape. Digital solutions are in higher demand than ever.",
                EventType::Opportunity,
                "Higher demand for digital products",
                6,
                None,
            )
        },
        event(
            "gdpr-compliance",
            "GDPR compliance",
            "Your product has to comply with the GDPR. That costs time and money.",
            EventType::Challenge,
            "Extra development cost and legal requirements",
            4,
            Some(Stage::Mvp),
        ),
        event(
            "competitor-launch",
            "Competitor launches",
            "A well-funded startup with a similar idea goes live.",
            EventType::Challenge,
            "More competitive pressure",
            8,
            None,
        ),
        event(
            "media-attention",
            "Media attention",
            "A local tech blog writes about your startup.",
            EventType::Opportunity,
            "More visibility and credibility",
            10,
            Some(Stage::Launch),
        ),
        event(
            "key-customer",
            "Key customer interested",
            "A mid-sized company is interested in an enterprise version.",
            EventType::Opportunity,
            "Potential for a significant revenue increase",
            12,
            Some(Stage::Growth),
        ),
    ]
}

pub(super) fn startup_milestones() -> Vec<Milestone> {
    vec![
        milestone(
            "first-customer",
            "First paying customer",
            "You won your first customer!",
            &[(Metric::Customers, 1), (Metric::MonthlyRevenue, 50)],
            MilestoneReward {
                brand_awareness: Some(10),
                ..MilestoneReward::default()
            },
        ),
        milestone(
            "break-even",
            "Break-even reached",
            "Your revenue covers your expenses!",
            &[(Metric::MonthlyRevenue, 5_000)],
            MilestoneReward {
                cash: Some(5_000),
                ..MilestoneReward::default()
            },
        ),
        milestone(
            "first-employee",
            "First employee",
            "You grew your team!",
            &[(Metric::Employees, 1)],
            MilestoneReward {
                brand_awareness: Some(15),
                ..MilestoneReward::default()
            },
        ),
        milestone(
            "product-market-fit",
            "Product-market fit",
            "Your product fits the market perfectly!",
            &[
                (Metric::Customers, 100),
                (Metric::ProductDevelopment, 80),
                (Metric::MarketValidation, 70),
            ],
            MilestoneReward {
                cash: Some(10_000),
                unlock_stage: Some(Stage::Scale),
                ..MilestoneReward::default()
            },
        ),
    ]
}
