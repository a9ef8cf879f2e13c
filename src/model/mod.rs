//! Founder and startup state
//!
//! Both structures are plain data owned by a single game session. All
//! mutation goes through the engine module; this module only knows how to
//! read metrics and keep values inside their ranges.

mod founder;
mod metric;
mod stage;
mod startup;


pub use founder::*;
pub use metric::*;
pub use stage::*;
pub use startup::*;

/// Upper bound shared by every percentage-style value (progress metrics,
/// founder energy and stress)
pub const PERCENT_MAX: i64 = 100;

/// Clamp a percentage-style value into `[0, PERCENT_MAX]`
#[inline]
pub fn clamp_percent(value: i64) -> i64 {
    value.clamp(0, PERCENT_MAX)
}
