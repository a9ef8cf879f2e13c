//! GameSession - owner of one running game
//!
//! The session holds the rules, the shared content catalog, the random
//! source and, once a game has started, the full [`GameState`]. Every
//! operation before `start_game` is a silent no-op.

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

use super::snapshot::GameSnapshot;
use super::turn::{self, GameState, MonthReport, Resolution};
use crate::config::{ContentCatalog, Decision, GameConfig, GameEvent, Milestone};
use crate::content::DEFAULT_CATALOG;
use crate::model::{Founder, Stage, Startup};

pub struct GameSession {
    config: GameConfig,
    catalog: Arc<ContentCatalog>,
    state: Option<GameState>,
    rng: StdRng,
}

impl GameSession {
    /// Create a session; decision picks are reproducible when the config
    /// carries a seed
    pub fn new(catalog: Arc<ContentCatalog>, config: GameConfig) -> Self {
        let rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            config,
            catalog,
            state: None,
            rng,
        }
    }

    /// Session over the stock catalog with default rules
    pub fn with_defaults() -> Self {
        Self::new(Arc::clone(&DEFAULT_CATALOG), GameConfig::default())
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn catalog(&self) -> &ContentCatalog {
        &self.catalog
    }

    pub fn is_started(&self) -> bool {
        self.state.is_some()
    }

    pub fn state(&self) -> Option<&GameState> {
        self.state.as_ref()
    }

    // ------------------------------------------------------------------------
    // Operations
    // ------------------------------------------------------------------------

    /// Start (or restart) a game with a freshly founded startup
    ///
    /// The working set starts with the first idea-stage decision of the
    /// catalog, the event queue is empty and every milestone is unachieved.
    pub fn start_game(&mut self, founder: Founder, startup_name: &str, industry: &str) {
        let startup = Startup::new(startup_name, industry, &self.config);
        let mut state = GameState::new(founder, startup, &self.catalog.milestones);

        if let Some(first) = self.catalog.first_decision_in(Stage::Idea) {
            state.current_decisions.push(first.clone());
        }

        info!(
            startup = startup_name,
            industry,
            founder = %state.founder.name,
            "game started"
        );
        self.state = Some(state);
    }

    /// Resolve a pending decision, then surface the next one right away
    pub fn make_decision(&mut self, decision_id: &str, option_id: &str) -> Option<Resolution> {
        let resolution = self.resolve_decision(decision_id, option_id)?;
        self.load_next_decision();
        Some(resolution)
    }

    /// Resolve a pending decision without surfacing a new one
    pub fn resolve_decision(&mut self, decision_id: &str, option_id: &str) -> Option<Resolution> {
        let state = self.state.as_mut()?;
        turn::resolve_decision(state, decision_id, option_id)
    }

    /// Add one eligible decision to the working set, if there is any
    pub fn load_next_decision(&mut self) -> Option<String> {
        let state = self.state.as_mut()?;
        turn::load_next_decision(state, &self.catalog, &self.config, &mut self.rng)
    }

    /// Advance the clock by one month
    ///
    /// Pending decisions don't block the clock.
    pub fn next_month(&mut self) -> Option<MonthReport> {
        let state = self.state.as_mut()?;
        Some(turn::advance_month(state, &self.catalog, &self.config, &mut self.rng))
    }

    pub fn dismiss_event(&mut self, event_id: &str) {
        if let Some(state) = self.state.as_mut() {
            let before = state.events.len();
            state.events.retain(|e| e.id != event_id);
            if state.events.len() != before {
                debug!(event = event_id, "event dismissed");
            }
        }
    }

    /// Whether any option's listed cost fits into the startup's cash
    pub fn can_afford_decision(&self, decision: &Decision) -> bool {
        self.startup()
            .map_or(false, |startup| decision.is_affordable_with(startup.cash))
    }

    // ------------------------------------------------------------------------
    // Read access
    // ------------------------------------------------------------------------

    pub fn founder(&self) -> Option<&Founder> {
        self.state.as_ref().map(|s| &s.founder)
    }

    pub fn startup(&self) -> Option<&Startup> {
        self.state.as_ref().map(|s| &s.startup)
    }

    pub fn current_decisions(&self) -> &[Decision] {
        self.state
            .as_ref()
            .map(|s| s.current_decisions.as_slice())
            .unwrap_or(&[])
    }

    pub fn events(&self) -> &[GameEvent] {
        self.state.as_ref().map(|s| s.events.as_slice()).unwrap_or(&[])
    }

    pub fn milestones(&self) -> &[Milestone] {
        self.state
            .as_ref()
            .map(|s| s.milestones.as_slice())
            .unwrap_or(&[])
    }

    pub fn achieved_milestones(&self) -> Vec<&Milestone> {
        self.milestones().iter().filter(|m| m.achieved).collect()
    }

    /// Immutable view of the whole game for presentation
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::capture(self.state.as_ref(), &self.config)
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::with_defaults()
    }
}
