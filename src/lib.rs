//! Startup Sim Core - turn engine for a founder/startup business simulation
//!
//! A founder allocates skill points, founds a startup and steers it from the
//! idea stage to scale by answering decisions. Every answer and every month
//! changes the startup's metrics; events fire on fixed months and milestones
//! pay out once. [`engine::GameSession`] is the entry point.
//!
//! Python bindings are available behind the `python` feature.

pub mod condition;
pub mod config;
pub mod content;
pub mod engine;
pub mod error;
pub mod milestone;
pub mod model;
pub mod selector;

#[cfg(feature = "python")]
mod python;

pub use config::{ContentCatalog, GameConfig};
pub use engine::{GameSession, GameSnapshot, MonthReport};
pub use error::{Result, StartupSimError};
pub use model::{Founder, Skills, Stage, Startup};
