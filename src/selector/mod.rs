//! Decision availability selection
//!
//! A catalog decision can be surfaced when it is not already pending and its
//! stage is either the startup's current stage or the stage right after it,
//! provided the configured gate for that next stage holds.


use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, warn};

use crate::condition::check_condition;
use crate::config::{Decision, GameConfig};
use crate::model::{Stage, Startup};

/// Whether decisions of `stage` may be surfaced for `startup`
pub fn stage_unlocked(startup: &Startup, stage: Stage, config: &GameConfig) -> bool {
    if stage == startup.stage {
        return true;
    }
    if !startup.stage.is_followed_by(stage) {
        return false;
    }

    let condition = match config.gate_for(stage).and_then(|g| g.condition.as_deref()) {
        Some(condition) => condition,
        None => return true,
    };

    // A gate that cannot be parsed keeps the stage closed
    check_condition(condition, startup).unwrap_or_else(|err| {
        warn!(stage = %stage, %err, "stage gate failed to parse");
        false
    })
}

/// Every catalog decision that could be surfaced right now, in catalog order
pub fn eligible_decisions<'a>(
    startup: &Startup,
    decisions: &'a [Decision],
    presented_ids: &[&str],
    config: &GameConfig,
) -> Vec<&'a Decision> {
    decisions
        .iter()
        .filter(|d| !presented_ids.contains(&d.id.as_str()))
        .filter(|d| stage_unlocked(startup, d.stage, config))
        .collect()
}

/// Pick one eligible decision uniformly at random
#[inline]
pub fn select_next_decision<'a, R: Rng + ?Sized>(
    startup: &Startup,
    decisions: &'a [Decision],
    presented_ids: &[&str],
    config: &GameConfig,
    rng: &mut R,
) -> Option<&'a Decision> {
    let available = eligible_decisions(startup, decisions, presented_ids, config);
    let picked = available.choose(rng).copied();

    match picked {
        Some(decision) => debug!(
            decision = %decision.id,
            stage = %decision.stage,
            candidates = available.len(),
            "selected decision"
        ),
        None => debug!(stage = %startup.stage, "no eligible decision"),
    }

    picked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StageGate;
    use crate::content::default_catalog;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn startup() -> Startup {
        Startup::new("Sel", "saas", &GameConfig::default())
    }

    fn ids(decisions: &[&Decision]) -> Vec<String> {
        decisions.iter().map(|d| d.id.clone()).collect()
    }

    #[test]
    fn test_fresh_startup_sees_only_idea() {
        let catalog = default_catalog();
        let config = GameConfig::default();
        let eligible = eligible_decisions(&startup(), &catalog.decisions, &[], &config);
        assert_eq!(ids(&eligible), vec!["business-idea"]);
    }

    #[test]
    fn test_gate_rejection() {
        let catalog = default_catalog();
        let config = GameConfig::default();
        let mut s = startup();
        s.product_development = 20;

        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..50 {
            let picked = select_next_decision(&s, &catalog.decisions, &[], &config, &mut rng);
            assert_eq!(picked.map(|d| d.id.as_str()), Some("business-idea"));
        }
    }

    #[test]
    fn test_gate_opens_next_stage() {
        let catalog = default_catalog();
        let config = GameConfig::default();
        let mut s = startup();
        s.market_validation = 20;

        let eligible = eligible_decisions(&s, &catalog.decisions, &[], &config);
        assert_eq!(ids(&eligible), vec!["business-idea", "legal-form"]);
    }

    #[test]
    fn test_default_gate_thresholds() {
        let config = GameConfig::default();
        let cases: [(Stage, Stage, fn(&mut Startup, i64), i64); 4] = [
            (Stage::Idea, Stage::Validation, |s, v| s.market_validation = v, 20),
            (Stage::Validation, Stage::Mvp, |s, v| s.product_development = v, 30),
            (Stage::Mvp, Stage::Launch, |s, v| s.product_development = v, 60),
            (Stage::Launch, Stage::Growth, |s, v| s.customers = v, 10),
        ];

        for (current, next, set, threshold) in cases {
            let mut s = startup();
            s.stage = current;

            set(&mut s, threshold - 1);
            assert!(!stage_unlocked(&s, next, &config), "{} opened below {}", next, threshold);

            set(&mut s, threshold);
            assert!(stage_unlocked(&s, next, &config), "{} closed at {}", next, threshold);
        }
    }

    #[test]
    fn test_never_skips_a_stage() {
        let catalog = default_catalog();
        let config = GameConfig::default();
        let mut s = startup();
        s.market_validation = 100;
        s.product_development = 100;
        s.customers = 500;

        let eligible = eligible_decisions(&s, &catalog.decisions, &[], &config);
        assert!(eligible
            .iter()
            .all(|d| d.stage == Stage::Idea || d.stage == Stage::Validation));
    }

    #[test]
    fn test_presented_decisions_excluded() {
        let catalog = default_catalog();
        let config = GameConfig::default();
        let mut rng = StdRng::seed_from_u64(3);
        let picked = select_next_decision(
            &startup(),
            &catalog.decisions,
            &["business-idea"],
            &config,
            &mut rng,
        );
        assert!(picked.is_none());
    }

    #[test]
    fn test_both_growth_decisions_reachable() {
        let catalog = default_catalog();
        let config = GameConfig::default();
        let mut s = startup();
        s.stage = Stage::Growth;

        let eligible = eligible_decisions(&s, &catalog.decisions, &[], &config);
        assert_eq!(ids(&eligible), vec!["first-hire", "funding-round"]);

        // Scale has no gate, but also no decisions in the stock catalog
        assert!(stage_unlocked(&s, Stage::Scale, &config));
    }

    #[test]
    fn test_ungated_and_unparsable_gates() {
        let mut s = startup();
        let mut config = GameConfig::default();

        config.stage_gates.clear();
        assert!(stage_unlocked(&s, Stage::Validation, &config));
        assert!(!stage_unlocked(&s, Stage::Mvp, &config));

        config.stage_gates = vec![StageGate::new(Stage::Validation, "happiness>3")];
        s.market_validation = 100;
        assert!(!stage_unlocked(&s, Stage::Validation, &config));
    }

    #[test]
    fn test_earlier_stage_not_eligible() {
        let catalog = default_catalog();
        let config = GameConfig::default();
        let mut s = startup();
        s.stage = Stage::Launch;

        let eligible = eligible_decisions(&s, &catalog.decisions, &[], &config);
        assert_eq!(ids(&eligible), vec!["marketing-strategy"]);
    }
}
