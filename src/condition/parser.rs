//! Condition string parser

use crate::condition::ast::{AstNode, ConditionValue, Operator, SingleCondition};
use crate::error::{Result, StartupSimError};
use crate::model::Metric;

/// Parse a condition string into an AST
pub fn parse(condition: &str) -> Result<AstNode> {
    let condition = condition.trim();
    if condition.is_empty() {
        return Err(StartupSimError::InvalidCondition(
            "Empty condition".to_string(),
        ));
    }

    let tokens = tokenize(condition)?;
    parse_tokens(&tokens)
}

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Comparison(String),
    And,
    Or,
    OpenParen,
    CloseParen,
}

fn tokenize(condition: &str) -> Result<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut depth: i32 = 0;

    fn flush(current: &mut String, tokens: &mut Vec<Token>) {
        if !current.is_empty() {
            tokens.push(Token::Comparison(std::mem::take(current)));
        }
    }

    for c in condition.chars() {
        let token = match c {
            c if c.is_whitespace() => continue,
            '(' => {
                depth += 1;
                Token::OpenParen
            }
            ')' => {
                depth -= 1;
                if depth < 0 {
                    return Err(StartupSimError::InvalidCondition(format!(
                        "Unbalanced parentheses in: {}",
                        condition
                    )));
                }
                Token::CloseParen
            }
            '&' => Token::And,
            '|' => Token::Or,
            other => {
                current.push(other);
                continue;
            }
        };

        flush(&mut current, &mut tokens);
        tokens.push(token);
    }
    flush(&mut current, &mut tokens);

    if depth != 0 {
        return Err(StartupSimError::InvalidCondition(format!(
            "Unbalanced parentheses in: {}",
            condition
        )));
    }

    Ok(tokens)
}

fn parse_tokens(tokens: &[Token]) -> Result<AstNode> {
    if tokens.is_empty() {
        return Err(StartupSimError::InvalidCondition(
            "Empty expression".to_string(),
        ));
    }

    // Split on the last top-level OR, else the first top-level AND.
    // OR binds weaker than AND.
    let mut depth = 0;
    let mut or_pos = None;
    let mut and_pos = None;
    for (i, token) in tokens.iter().enumerate() {
        match token {
            Token::OpenParen => depth += 1,
            Token::CloseParen => depth -= 1,
            Token::Or if depth == 0 => or_pos = Some(i),
            Token::And if depth == 0 && and_pos.is_none() => and_pos = Some(i),
            _ => {}
        }
    }

    if let Some(pos) = or_pos {
        return Ok(AstNode::Or(
            Box::new(parse_tokens(&tokens[..pos])?),
            Box::new(parse_tokens(&tokens[pos + 1..])?),
        ));
    }
    if let Some(pos) = and_pos {
        return Ok(AstNode::And(
            Box::new(parse_tokens(&tokens[..pos])?),
            Box::new(parse_tokens(&tokens[pos + 1..])?),
        ));
    }

    match tokens {
        [Token::OpenParen, inner @ .., Token::CloseParen] => parse_tokens(inner),
        [Token::Comparison(text)] => parse_comparison(text),
        _ => Err(StartupSimError::InvalidCondition(format!(
            "Cannot parse tokens: {:?}",
            tokens
        ))),
    }
}

fn parse_comparison(text: &str) -> Result<AstNode> {
    // Two-character operators first so ">=" is not read as ">"
    const OPERATORS: [(&str, Operator); 6] = [
        (">=", Operator::GreaterEqual),
        ("<=", Operator::LessEqual),
        ("!=", Operator::NotEqual),
        (">", Operator::Greater),
        ("<", Operator::Less),
        ("=", Operator::Equal),
    ];

    for (symbol, operator) in OPERATORS {
        if let Some(pos) = text.find(symbol) {
            let key = text[..pos].trim();
            let metric = Metric::from_key(key).ok_or_else(|| {
                StartupSimError::InvalidCondition(format!("Unknown metric: {}", key))
            })?;
            let value = parse_value(&text[pos + symbol.len()..])?;

            return Ok(AstNode::Single(SingleCondition {
                metric,
                operator,
                value,
            }));
        }
    }

    Err(StartupSimError::InvalidCondition(format!(
        "No operator found in: {}",
        text
    )))
}

fn parse_value(value_str: &str) -> Result<ConditionValue> {
    let value_str = value_str.trim();

    if let Ok(i) = value_str.parse::<i64>() {
        return Ok(ConditionValue::Integer(i));
    }
    if let Ok(f) = value_str.parse::<f64>() {
        if f.is_finite() {
            return Ok(ConditionValue::Float(f));
        }
    }

    Err(StartupSimError::InvalidCondition(format!(
        "Invalid number: {}",
        value_str
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_condition() {
        let ast = parse("customers>=10").unwrap();
        match ast {
            AstNode::Single(cond) => {
                assert_eq!(cond.metric, Metric::Customers);
                assert_eq!(cond.operator, Operator::GreaterEqual);
                assert_eq!(cond.value, ConditionValue::Integer(10));
            }
            _ => panic!("Expected single condition"),
        }
    }

    #[test]
    fn test_parse_and_condition() {
        let ast = parse("productDevelopment>60 & customers<10").unwrap();
        assert!(matches!(ast, AstNode::And(_, _)));
    }

    #[test]
    fn test_parse_or_condition() {
        let ast = parse("cash>0 | monthlyRevenue>0").unwrap();
        assert!(matches!(ast, AstNode::Or(_, _)));
    }

    #[test]
    fn test_parse_all_operators() {
        let operators = [
            ("cash>5", Operator::Greater),
            ("cash<5", Operator::Less),
            ("cash>=5", Operator::GreaterEqual),
            ("cash<=5", Operator::LessEqual),
            ("cash=5", Operator::Equal),
            ("cash!=5", Operator::NotEqual),
        ];

        for (cond_str, expected_op) in operators {
            match parse(cond_str).unwrap() {
                AstNode::Single(cond) => {
                    assert_eq!(cond.operator, expected_op, "Failed for: {}", cond_str);
                }
                _ => panic!("Expected single condition for: {}", cond_str),
            }
        }
    }

    #[test]
    fn test_parse_spaces_around_operator() {
        match parse("  marketValidation >= 20 ").unwrap() {
            AstNode::Single(cond) => {
                assert_eq!(cond.metric, Metric::MarketValidation);
                assert_eq!(cond.value, ConditionValue::Integer(20));
            }
            _ => panic!("Expected single condition"),
        }
    }

    #[test]
    fn test_parse_nested_parentheses() {
        // (A & B) | C
        let ast = parse("(cash>5 & customers>5) | employees>5").unwrap();
        match ast {
            AstNode::Or(left, _) => assert!(matches!(*left, AstNode::And(_, _))),
            _ => panic!("Expected OR condition"),
        }
    }

    #[test]
    fn test_parse_operator_precedence() {
        // A | B & C parses as A | (B & C)
        let ast = parse("cash>5 | customers>5 & employees>5").unwrap();
        match ast {
            AstNode::Or(_, right) => assert!(matches!(*right, AstNode::And(_, _))),
            _ => panic!("Expected OR condition"),
        }
    }

    #[test]
    fn test_parse_float_value() {
        match parse("brandAwareness>5.5").unwrap() {
            AstNode::Single(cond) => assert_eq!(cond.value, ConditionValue::Float(5.5)),
            _ => panic!("Expected single condition"),
        }
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse("").is_err());
        assert!(parse("   ").is_err());
        assert!(parse("cash").is_err());
        assert!(parse("happiness>3").is_err());
        assert!(parse("cash>lots").is_err());
        assert!(parse("(cash>3").is_err());
        assert!(parse("cash>3)").is_err());
        assert!(parse("cash>3 &").is_err());
    }
}
