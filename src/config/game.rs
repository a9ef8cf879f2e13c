//! Tunable game rules

use serde::{Deserialize, Serialize};

use crate::condition::parser;
use crate::error::{Result, StartupSimError};
use crate::model::Stage;

/// Extra condition a startup must satisfy before decisions of `stage` can be
/// surfaced from the previous stage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageGate {
    pub stage: Stage,
    /// Condition over startup metrics, e.g. `"productDevelopment>=30"`.
    /// `None` means the stage is open as soon as it is next in line.
    #[serde(default)]
    pub condition: Option<String>,
}

impl StageGate {
    pub fn new(stage: Stage, condition: &str) -> Self {
        Self {
            stage,
            condition: Some(condition.to_string()),
        }
    }

    pub fn open(stage: Stage) -> Self {
        Self {
            stage,
            condition: None,
        }
    }
}

/// Default gates between consecutive stages
pub fn default_stage_gates() -> Vec<StageGate> {
    vec![
        StageGate::new(Stage::Validation, "marketValidation>=20"),
        StageGate::new(Stage::Mvp, "productDevelopment>=30"),
        StageGate::new(Stage::Launch, "productDevelopment>=60"),
        StageGate::new(Stage::Growth, "customers>=10"),
        StageGate::open(Stage::Scale),
    ]
}

/// Game rules and starting values
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GameConfig {
    pub initial_cash: i64,
    pub initial_monthly_burn: i64,
    pub location: String,
    /// Energy regained by the founder every month
    pub energy_recovery: i64,
    /// Stress shed by the founder every month
    pub stress_relief: i64,
    pub min_skill: u32,
    pub max_skill: u32,
    pub max_skill_points: u32,
    /// Runway below this many months counts as low on cash
    pub low_runway_months: i64,
    /// Pause before the next decision shows up after a resolution. Only the
    /// async binding honours it; the engine itself never waits.
    pub pacing_delay_ms: u64,
    /// Fixed seed for decision selection; entropy when absent
    pub rng_seed: Option<u64>,
    pub stage_gates: Vec<StageGate>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            initial_cash: 10_000,
            initial_monthly_burn: 500,
            location: "Berlin".to_string(),
            energy_recovery: 5,
            stress_relief: 2,
            min_skill: 10,
            max_skill: 100,
            max_skill_points: 250,
            low_runway_months: 3,
            pacing_delay_ms: 1_000,
            rng_seed: None,
            stage_gates: default_stage_gates(),
        }
    }
}

impl GameConfig {
    /// Parse a config from JSON; missing keys keep their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Builder for a deterministic selection seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    /// Gate guarding entry into `stage`, if one is configured
    pub fn gate_for(&self, stage: Stage) -> Option<&StageGate> {
        self.stage_gates.iter().find(|g| g.stage == stage)
    }

    pub fn validate(&self) -> Result<()> {
        if self.min_skill > self.max_skill {
            return Err(StartupSimError::InvalidContent(format!(
                "minSkill {} is above maxSkill {}",
                self.min_skill, self.max_skill
            )));
        }
        if self.energy_recovery < 0 || self.stress_relief < 0 {
            return Err(StartupSimError::InvalidContent(
                "monthly energy recovery and stress relief must not be negative".to_string(),
            ));
        }
        for gate in &self.stage_gates {
            if let Some(ref condition) = gate.condition {
                parser::parse(condition)?;
            }
        }
        Ok(())
    }
}
