//! Condition evaluator

use crate::condition::ast::{AstNode, ConditionValue, Operator, SingleCondition};
use crate::model::Startup;

/// Evaluate an AST against a startup's metrics
pub fn check(ast: &AstNode, startup: &Startup) -> bool {
    match ast {
        AstNode::Single(cond) => check_single(cond, startup),
        AstNode::And(left, right) => check(left, startup) && check(right, startup),
        AstNode::Or(left, right) => check(left, startup) || check(right, startup),
    }
}

fn check_single(cond: &SingleCondition, startup: &Startup) -> bool {
    let actual = startup.metric(cond.metric);

    match cond.value {
        ConditionValue::Integer(expected) => compare(cond.operator, actual, expected),
        ConditionValue::Float(expected) => compare(cond.operator, actual as f64, expected),
    }
}

#[inline]
fn compare<T: PartialOrd>(operator: Operator, actual: T, expected: T) -> bool {
    match operator {
        Operator::Greater => actual > expected,
        Operator::Less => actual < expected,
        Operator::GreaterEqual => actual >= expected,
        Operator::LessEqual => actual <= expected,
        Operator::Equal => actual == expected,
        Operator::NotEqual => actual != expected,
    }
}
