//! Startup lifecycle stages and legal forms

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle stage of a startup, in progression order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Idea,
    Validation,
    Mvp,
    Launch,
    Growth,
    Scale,
}

impl Stage {
    /// All stages in progression order
    pub const ORDER: [Stage; 6] = [
        Stage::Idea,
        Stage::Validation,
        Stage::Mvp,
        Stage::Launch,
        Stage::Growth,
        Stage::Scale,
    ];

    /// Position in [`Stage::ORDER`]
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// The stage directly after this one, if any
    #[inline]
    pub fn next(self) -> Option<Stage> {
        Self::ORDER.get(self.index() + 1).copied()
    }

    /// Whether `other` is exactly one step ahead of `self`
    #[inline]
    pub fn is_followed_by(self, other: Stage) -> bool {
        self.next() == Some(other)
    }

    /// Wire name, as used in content files
    pub fn as_str(self) -> &'static str {
        match self {
            Stage::Idea => "idea",
            Stage::Validation => "validation",
            Stage::Mvp => "mvp",
            Stage::Launch => "launch",
            Stage::Growth => "growth",
            Stage::Scale => "scale",
        }
    }

    /// Human readable name for dashboards
    pub fn label(self) -> &'static str {
        match self {
            Stage::Idea => "Idea",
            Stage::Validation => "Validation",
            Stage::Mvp => "MVP Development",
            Stage::Launch => "Market Launch",
            Stage::Growth => "Growth",
            Stage::Scale => "Scale",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// German legal forms a startup can be registered as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LegalForm {
    Einzelunternehmen,
    #[serde(rename = "GbR")]
    Gbr,
    #[serde(rename = "UG")]
    Ug,
    #[serde(rename = "GmbH")]
    Gmbh,
    #[serde(rename = "AG")]
    Ag,
}

impl LegalForm {
    pub fn label(self) -> &'static str {
        match self {
            LegalForm::Einzelunternehmen => "Einzelunternehmen",
            LegalForm::Gbr => "GbR",
            LegalForm::Ug => "UG",
            LegalForm::Gmbh => "GmbH",
            LegalForm::Ag => "AG",
        }
    }
}

impl fmt::Display for LegalForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
