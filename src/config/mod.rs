//! Configuration module for game content and rules
//!
//! Content (decisions, events, milestones) and rules ([`GameConfig`]) are
//! plain serde structures. Catalogs can be loaded from JSON and are validated
//! before a session ever sees them.

mod decision;
mod effects;
mod event;
mod game;
mod milestone;

pub use decision::*;
pub use effects::*;
pub use event::*;
pub use game::*;
pub use milestone::*;

use crate::error::{Result, StartupSimError};
use crate::model::Stage;
use ahash::AHashSet;
use serde::{Deserialize, Serialize};

/// Every decision, event and milestone a game can draw from
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentCatalog {
    #[serde(default)]
    pub decisions: Vec<Decision>,
    #[serde(default)]
    pub events: Vec<GameEvent>,
    #[serde(default)]
    pub milestones: Vec<Milestone>,
}

impl ContentCatalog {
    pub fn new(decisions: Vec<Decision>, events: Vec<GameEvent>, milestones: Vec<Milestone>) -> Self {
        Self {
            decisions,
            events,
            milestones,
        }
    }

    /// Parse and validate a catalog from JSON
    /// Expected format: {"decisions": [...], "events": [...], "milestones": [...]}
    pub fn from_json(json: &str) -> Result<Self> {
        let catalog: ContentCatalog = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn decision(&self, id: &str) -> Option<&Decision> {
        self.decisions.iter().find(|d| d.id == id)
    }

    /// First decision authored for `stage`, in catalog order
    pub fn first_decision_in(&self, stage: Stage) -> Option<&Decision> {
        self.decisions.iter().find(|d| d.stage == stage)
    }

    /// Events that fire on entering `month` while in `stage`
    pub fn events_at(&self, month: u32, stage: Stage) -> impl Iterator<Item = &GameEvent> + '_ {
        self.events
            .iter()
            .filter(move |e| e.triggers_at(month, stage))
    }

    /// Check ids and option shapes
    pub fn validate(&self) -> Result<()> {
        let mut decision_ids = AHashSet::with_capacity(self.decisions.len());
        for decision in &self.decisions {
            check_id("decision", &decision.id, &mut decision_ids)?;
            if decision.options.is_empty() {
                return Err(StartupSimError::InvalidContent(format!(
                    "decision '{}' has no options",
                    decision.id
                )));
            }

            let mut option_ids = AHashSet::with_capacity(decision.options.len());
            for option in &decision.options {
                check_id("option", &option.id, &mut option_ids)?;
                if option.time_required == 0 {
                    return Err(StartupSimError::InvalidContent(format!(
                        "option '{}' of decision '{}' takes no time",
                        option.id, decision.id
                    )));
                }
            }
        }

        let mut event_ids = AHashSet::with_capacity(self.events.len());
        for event in &self.events {
            check_id("event", &event.id, &mut event_ids)?;
        }

        let mut milestone_ids = AHashSet::with_capacity(self.milestones.len());
        for milestone in &self.milestones {
            check_id("milestone", &milestone.id, &mut milestone_ids)?;
        }

        Ok(())
    }
}

fn check_id<'a>(kind: &str, id: &'a str, seen: &mut AHashSet<&'a str>) -> Result<()> {
    if id.trim().is_empty() {
        return Err(StartupSimError::InvalidContent(format!("{} with empty id", kind)));
    }
    if !seen.insert(id) {
        return Err(StartupSimError::InvalidContent(format!(
            "duplicate {} id '{}'",
            kind, id
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG: &str = r#"{
        "decisions": [
            {
                "id": "pitch",
                "title": "Pitch",
                "description": "Pitch the idea",
                "category": "funding",
                "stage": "idea",
                "options": [
                    { "id": "yes", "text": "Do it", "cost": 0, "timeRequired": 1 },
                    { "id": "no", "text": "Skip", "cost": 0, "timeRequired": 2,
                      "effects": { "stress": -5 } }
                ]
            }
        ],
        "events": [
            { "id": "fair", "title": "Fair", "description": "Trade fair",
              "type": "opportunity", "impact": "Visibility", "month": 3 }
        ],
        "milestones": [
            { "id": "ten", "title": "Ten", "description": "Ten customers",
              "requirements": { "customers": 10 }, "reward": { "cash": 100 } }
        ]
    }"#;

    #[test]
    fn test_from_json() {
        let catalog = ContentCatalog::from_json(CATALOG).unwrap();
        assert_eq!(catalog.decisions.len(), 1);
        assert_eq!(catalog.first_decision_in(Stage::Idea).unwrap().id, "pitch");
        assert!(catalog.first_decision_in(Stage::Mvp).is_none());
        assert_eq!(catalog.events_at(3, Stage::Growth).count(), 1);
        assert_eq!(catalog.events_at(4, Stage::Growth).count(), 0);
        assert_eq!(catalog.milestones[0].reward.cash, Some(100));
    }

    #[test]
    fn test_missing_sections_default_empty() {
        let catalog = ContentCatalog::from_json("{}").unwrap();
        assert!(catalog.decisions.is_empty());
        assert!(catalog.events.is_empty());
        assert!(catalog.milestones.is_empty());
    }

    #[test]
    fn test_duplicate_decision_id() {
        let mut catalog = ContentCatalog::from_json(CATALOG).unwrap();
        let copy = catalog.decisions[0].clone();
        catalog.decisions.push(copy);
        assert!(matches!(
            catalog.validate(),
            Err(StartupSimError::InvalidContent(_))
        ));
    }

    #[test]
    fn test_duplicate_option_id() {
        let mut catalog = ContentCatalog::from_json(CATALOG).unwrap();
        catalog.decisions[0].options[1].id = "yes".to_string();
        assert!(catalog.validate().is_err());
    }

    #[test]
    fn test_zero_time_option_rejected() {
        let mut catalog = ContentCatalog::from_json(CATALOG).unwrap();
        catalog.decisions[0].options[0].time_required = 0;
        assert!(catalog.validate().is_err());
    }

    #[test]
    fn test_decision_without_options_rejected() {
        let mut catalog = ContentCatalog::from_json(CATALOG).unwrap();
        catalog.decisions[0].options.clear();
        assert!(catalog.validate().is_err());
    }
}
