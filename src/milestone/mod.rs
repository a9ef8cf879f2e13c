//! One-shot milestone rewards

mod checker;

pub use checker::*;
