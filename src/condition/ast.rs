//! Abstract Syntax Tree for condition expressions

use crate::model::Metric;

/// AST node for condition expressions
#[derive(Debug, Clone, PartialEq)]
pub enum AstNode {
    /// Single comparison like "customers>=10"
    Single(SingleCondition),
    /// AND operation
    And(Box<AstNode>, Box<AstNode>),
    /// OR operation
    Or(Box<AstNode>, Box<AstNode>),
}

/// Single comparison of a startup metric against a constant
#[derive(Debug, Clone, PartialEq)]
pub struct SingleCondition {
    pub metric: Metric,
    pub operator: Operator,
    pub value: ConditionValue,
}

/// Comparison operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// Greater than (>)
    Greater,
    /// Less than (<)
    Less,
    /// Greater than or equal (>=)
    GreaterEqual,
    /// Less than or equal (<=)
    LessEqual,
    /// Equal (=)
    Equal,
    /// Not equal (!=)
    NotEqual,
}

/// Condition value types
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConditionValue {
    Integer(i64),
    Float(f64),
}
