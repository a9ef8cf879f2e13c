//! Parsed condition cache

use crate::condition::ast::AstNode;
use crate::condition::{evaluator, parser};
use crate::error::Result;
use crate::model::Startup;
use ahash::AHashMap;
use once_cell::sync::Lazy;
use parking_lot::RwLock;

/// Conditions come from a handful of stage gates, so the map stays small
static CONDITION_CACHE: Lazy<RwLock<AHashMap<String, AstNode>>> =
    Lazy::new(|| RwLock::new(AHashMap::with_capacity(64)));

/// Get or parse a condition string, using the cache for repeated conditions
#[inline]
pub fn get_or_parse(condition: &str) -> Result<AstNode> {
    if let Some(ast) = CONDITION_CACHE.read().get(condition) {
        return Ok(ast.clone());
    }

    let ast = parser::parse(condition)?;
    CONDITION_CACHE
        .write()
        .insert(condition.to_string(), ast.clone());

    Ok(ast)
}

/// Check a condition against a startup; an empty condition always holds
#[inline]
pub fn check_condition(condition: &str, startup: &Startup) -> Result<bool> {
    if condition.trim().is_empty() {
        return Ok(true);
    }

    let ast = get_or_parse(condition)?;
    Ok(evaluator::check(&ast, startup))
}

pub fn clear_cache() {
    CONDITION_CACHE.write().clear();
}

pub fn cache_size() -> usize {
    CONDITION_CACHE.read().len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;

    #[test]
    fn test_cache_hit() {
        let startup = Startup::new("Cache", "edtech", &GameConfig::default());
        let condition = "cash>=9999 & monthlyBurn<=500";

        assert!(check_condition(condition, &startup).unwrap());
        assert!(CONDITION_CACHE.read().contains_key(condition));

        // Second call is served from the cache
        assert!(check_condition(condition, &startup).unwrap());
        assert!(cache_size() >= 1);
    }

    #[test]
    fn test_empty_condition() {
        let startup = Startup::new("Cache", "edtech", &GameConfig::default());
        assert!(check_condition("", &startup).unwrap());
        assert!(check_condition("   ", &startup).unwrap());
    }

    #[test]
    fn test_invalid_condition_not_cached() {
        let startup = Startup::new("Cache", "edtech", &GameConfig::default());
        assert!(check_condition("runway>3", &startup).is_err());
        assert!(!CONDITION_CACHE.read().contains_key("runway>3"));
    }
}
