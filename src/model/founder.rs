//! Founder state and skill allocation

use serde::{Deserialize, Serialize};

use super::PERCENT_MAX;
use crate::config::GameConfig;
use crate::error::{Result, StartupSimError};

/// Id given to the single founder of a session
pub const FOUNDER_ID: &str = "founder-1";

/// Skill points a founder distributes at creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skills {
    pub business: u32,
    pub technical: u32,
    pub marketing: u32,
    pub leadership: u32,
}

impl Default for Skills {
    fn default() -> Self {
        Self {
            business: 50,
            technical: 50,
            marketing: 50,
            leadership: 50,
        }
    }
}

impl Skills {
    pub fn new(business: u32, technical: u32, marketing: u32, leadership: u32) -> Self {
        Self {
            business,
            technical,
            marketing,
            leadership,
        }
    }

    /// Skill names paired with their levels
    pub fn entries(&self) -> [(&'static str, u32); 4] {
        [
            ("business", self.business),
            ("technical", self.technical),
            ("marketing", self.marketing),
            ("leadership", self.leadership),
        ]
    }

    #[inline]
    pub fn total(&self) -> u32 {
        self.business + self.technical + self.marketing + self.leadership
    }

    /// Check every level is in range and the total stays within budget
    pub fn validate(&self, config: &GameConfig) -> Result<()> {
        for (name, level) in self.entries() {
            if level < config.min_skill || level > config.max_skill {
                return Err(StartupSimError::InvalidFounder(format!(
                    "{} skill {} outside [{}, {}]",
                    name, level, config.min_skill, config.max_skill
                )));
            }
        }
        if self.total() > config.max_skill_points {
            return Err(StartupSimError::InvalidFounder(format!(
                "skill total {} exceeds {} points",
                self.total(),
                config.max_skill_points
            )));
        }
        Ok(())
    }
}

/// The player character
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Founder {
    pub id: String,
    pub name: String,
    pub skills: Skills,
    pub energy: i64,
    pub stress: i64,
}

impl Founder {
    /// Create a rested founder, validating the skill allocation
    pub fn new(name: impl Into<String>, skills: Skills, config: &GameConfig) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(StartupSimError::InvalidFounder(
                "founder name must not be empty".to_string(),
            ));
        }
        skills.validate(config)?;

        Ok(Self {
            id: FOUNDER_ID.to_string(),
            name,
            skills,
            energy: PERCENT_MAX,
            stress: 0,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_founder_is_rested() {
        let founder = Founder::new("Max", Skills::default(), &GameConfig::default()).unwrap();
        assert_eq!(founder.id, FOUNDER_ID);
        assert_eq!(founder.energy, 100);
        assert_eq!(founder.stress, 0);
    }

    #[test]
    fn test_skill_budget() {
        let config = GameConfig::default();
        let skills = Skills::new(100, 100, 40, 10);
        assert_eq!(skills.total(), 250);
        assert_eq!(skills.total(), config.max_skill_points);
        assert!(skills.validate(&config).is_ok());

        let over = Skills::new(100, 100, 41, 10);
        assert!(matches!(
            over.validate(&config),
            Err(StartupSimError::InvalidFounder(_))
        ));
    }

    #[test]
    fn test_skill_range() {
        let config = GameConfig::default();
        assert!(Skills::new(9, 50, 50, 50).validate(&config).is_err());
        assert!(Skills::new(50, 101, 50, 10).validate(&config).is_err());
        assert!(Skills::new(10, 10, 10, 10).validate(&config).is_ok());
    }

    #[test]
    fn test_empty_name_rejected() {
        let result = Founder::new("  ", Skills::default(), &GameConfig::default());
        assert!(matches!(result, Err(StartupSimError::InvalidFounder(_))));
    }
}
