//! Condition parsing and evaluation module
//!
//! This module handles parsing condition strings like
//! "productDevelopment>=60 & customers>0" and evaluating them against a
//! [`Startup`](crate::model::Startup). Stage gates are written in this
//! language.

mod ast;
pub mod cache;
mod evaluator;
pub mod parser;


pub use ast::*;
pub use cache::*;
pub use evaluator::*;
pub use parser::*;
