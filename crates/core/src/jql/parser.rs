// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Recursive-descent parser for query tokens.
//!
//! Parses token runs produced by [`tokenize`] into [`Element`] lists and
//! ordering entries.

use crate::error::{Error, Result};

use super::ast::{is_identifier, Direction, Element, OperatorKind, OrderBy, Predicate, Query};
use super::token::{tokenize, OrderKeyword, Punct, Token};

/// Parse a query string into its conditions and ordering clause.
///
/// # Examples
///
/// ```ignore
/// let query = parse(r#"status = "open" ORDER BY priority DESC"#)?;
/// let query = parse(r#"(status = "open" OR status = "closed") AND assignee = "bob""#)?;
/// ```
pub fn parse(input: &str) -> Result<Query> {
    let tokens = tokenize(input);
    let (conditions, order_by) = split_order_by(&tokens);

    Ok(Query {
        conditions: parse_conditions(conditions)?,
        order_by: parse_order_by(order_by)?,
    })
}

/// Split tokens at the first `ORDER BY`, dropping the keyword itself.
fn split_order_by(tokens: &[Token]) -> (&[Token], &[Token]) {
    match tokens
        .iter()
        .position(|t| *t == Token::Order(OrderKeyword::OrderBy))
    {
        Some(idx) => (&tokens[..idx], &tokens[idx + 1..]),
        None => (tokens, &[]),
    }
}

/// Parse one nesting level of conditions.
///
/// Groups are parsed recursively from the tokens between a `(` and its
/// matching `)`. Parsing stops at `ORDER BY`.
pub fn parse_conditions(tokens: &[Token]) -> Result<Vec<Element>> {
    let mut elements = Vec::new();
    let mut i = 0;

    while i < tokens.len() {
        match &tokens[i] {
            Token::Punct(Punct::Open) => {
                let close = matching_close(tokens, i)?;
                elements.push(Element::Group(parse_conditions(&tokens[i + 1..close])?));
                i = close + 1;
            }
            Token::Logical(op) => {
                elements.push(Element::Logical(*op));
                i += 1;
            }
            Token::Order(OrderKeyword::OrderBy) => break,
            token => {
                let field = field_name(token, "condition")?;
                let (predicate, next) = parse_predicate(tokens, i + 1, field)?;
                elements.push(Element::Predicate(predicate));
                i = next;
            }
        }
    }

    Ok(elements)
}

/// Parse the operator and value(s) following a field name at `start`.
///
/// Returns the predicate and the index of the first unconsumed token.
fn parse_predicate(tokens: &[Token], start: usize, field: String) -> Result<(Predicate, usize)> {
    let operator = match tokens.get(start) {
        Some(Token::Operator(op)) => *op,
        other => {
            return Err(Error::UnknownOperator {
                field,
                found: other.map_or_else(|| "end of query".to_string(), Token::describe),
            })
        }
    };

    let mut i = start + 1;
    let values = if operator == OperatorKind::In {
        let (values, next) = parse_value_list(tokens, i, &field)?;
        i = next;
        values
    } else {
        match tokens.get(i) {
            None | Some(Token::Order(_)) => {
                return Err(Error::MissingValue {
                    operator: operator.to_string(),
                })
            }
            Some(token) => {
                i += 1;
                vec![token.text()]
            }
        }
    };

    Ok((
        Predicate {
            field,
            operator,
            values,
        },
        i,
    ))
}

/// Parse `( value {, value} )` starting at `start`.
fn parse_value_list(tokens: &[Token], start: usize, field: &str) -> Result<(Vec<String>, usize)> {
    let malformed = || Error::MalformedIn {
        field: field.to_string(),
    };

    if tokens.get(start) != Some(&Token::Punct(Punct::Open)) {
        return Err(malformed());
    }

    let mut values = Vec::new();
    let mut i = start + 1;
    loop {
        match tokens.get(i) {
            None | Some(Token::Punct(Punct::Open)) => return Err(malformed()),
            Some(Token::Punct(Punct::Close)) => break,
            Some(Token::Punct(Punct::Comma)) => {}
            Some(token) => values.push(token.text()),
        }
        i += 1;
    }

    if values.is_empty() {
        return Err(malformed());
    }

    Ok((values, i + 1))
}

/// Find the `)` matching the `(` at `open`, respecting nesting.
fn matching_close(tokens: &[Token], open: usize) -> Result<usize> {
    let mut depth = 0usize;
    for (idx, token) in tokens.iter().enumerate().skip(open) {
        match token {
            Token::Punct(Punct::Open) => depth += 1,
            Token::Punct(Punct::Close) => {
                depth -= 1;
                if depth == 0 {
                    return Ok(idx);
                }
            }
            _ => {}
        }
    }
    Err(Error::InvalidQuery("unclosed '(' in query".to_string()))
}

/// Accept a token as a field name.
fn field_name(token: &Token, context: &str) -> Result<String> {
    match token {
        Token::Word(name) => Ok(name.clone()),
        Token::Quoted(name) if is_identifier(name) => Ok(name.clone()),
        other => Err(Error::InvalidQuery(format!(
            "expected field name in {context}, found '{}'",
            other.describe()
        ))),
    }
}

/// Parse the tokens following `ORDER BY`.
///
/// A missing comma between entries is tolerated.
pub fn parse_order_by(tokens: &[Token]) -> Result<Vec<OrderBy>> {
    let mut order_by = Vec::new();
    let mut i = 0;

    while i < tokens.len() {
        let field = field_name(&tokens[i], "ORDER BY")?;
        i += 1;

        let direction = match tokens.get(i) {
            Some(Token::Order(keyword)) => match keyword.direction() {
                Some(direction) => {
                    i += 1;
                    direction
                }
                None => Direction::Asc,
            },
            _ => Direction::Asc,
        };
        order_by.push(OrderBy { field, direction });

        if tokens.get(i) == Some(&Token::Punct(Punct::Comma)) {
            i += 1;
        }
    }

    Ok(order_by)
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
