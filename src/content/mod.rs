//! Built-in game content
//!
//! The stock catalog of decisions, events and milestones, plus the list of
//! industries a player can found a startup in. Sessions share the catalog
//! through an `Arc`; nothing here is ever mutated.

mod decisions;
mod events;

use std::sync::Arc;

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::config::ContentCatalog;

/// A selectable industry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IndustryInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

pub const INDUSTRIES: [IndustryInfo; 6] = [
    IndustryInfo {
        id: "fintech",
        name: "FinTech",
        description: "Digital financial services",
    },
    IndustryInfo {
        id: "ecommerce",
        name: "E-Commerce",
        description: "Online retail and marketplaces",
    },
    IndustryInfo {
        id: "saas",
        name: "SaaS",
        description: "Software as a service",
    },
    IndustryInfo {
        id: "healthtech",
        name: "HealthTech",
        description: "Digital health solutions",
    },
    IndustryInfo {
        id: "edtech",
        name: "EdTech",
        description: "Digital education",
    },
    IndustryInfo {
        id: "proptech",
        name: "PropTech",
        description: "Real estate technology",
    },
];

pub fn industry(id: &str) -> Option<&'static IndustryInfo> {
    INDUSTRIES.iter().find(|i| i.id == id)
}

/// Build a fresh copy of the stock catalog
pub fn default_catalog() -> ContentCatalog {
    ContentCatalog::new(
        decisions::startup_decisions(),
        events::startup_events(),
        events::startup_milestones(),
    )
}

/// Shared stock catalog
pub static DEFAULT_CATALOG: Lazy<Arc<ContentCatalog>> = Lazy::new(|| Arc::new(default_catalog()));
