// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Parsed query types.
//!
//! A query is a flat list of [`Element`]s per nesting level plus an optional
//! ordering clause. Logical keywords are kept as markers in that list rather
//! than as binary nodes: a marker sets the operator used to join every
//! following sibling at its level until the next marker.

use serde::Serialize;
use std::fmt;

/// Comparison operators accepted between a field and its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OperatorKind {
    /// `=`
    Eq,
    /// `!=`
    Ne,
    /// `>`
    Gt,
    /// `<`
    Lt,
    /// `>=`
    Ge,
    /// `<=`
    Le,
    /// `IN`, followed by a parenthesized value list.
    In,
    /// `IS`
    Is,
    /// `IS NOT`
    IsNot,
    /// `CONTAINS`, compiled to `LIKE`.
    Contains,
}

impl OperatorKind {
    /// Returns the spelling used in query text.
    pub fn as_str(&self) -> &'static str {
        match self {
            OperatorKind::Eq => "=",
            OperatorKind::Ne => "!=",
            OperatorKind::Gt => ">",
            OperatorKind::Lt => "<",
            OperatorKind::Ge => ">=",
            OperatorKind::Le => "<=",
            OperatorKind::In => "IN",
            OperatorKind::Is => "IS",
            OperatorKind::IsNot => "IS NOT",
            OperatorKind::Contains => "CONTAINS",
        }
    }

    /// Looks up an operator by its query spelling.
    pub fn from_symbol(s: &str) -> Option<Self> {
        match s {
            "=" => Some(OperatorKind::Eq),
            "!=" => Some(OperatorKind::Ne),
            ">" => Some(OperatorKind::Gt),
            "<" => Some(OperatorKind::Lt),
            ">=" => Some(OperatorKind::Ge),
            "<=" => Some(OperatorKind::Le),
            "IN" => Some(OperatorKind::In),
            "IS" => Some(OperatorKind::Is),
            "IS NOT" => Some(OperatorKind::IsNot),
            "CONTAINS" => Some(OperatorKind::Contains),
            _ => None,
        }
    }
}

impl fmt::Display for OperatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Logical keywords. Each one sets the ambient operator for the siblings
/// that follow it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LogicalOp {
    And,
    Or,
    /// Following siblings are joined with `AND` and negated individually.
    Not,
}

impl LogicalOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogicalOp::And => "AND",
            LogicalOp::Or => "OR",
            LogicalOp::Not => "NOT",
        }
    }
}

impl fmt::Display for LogicalOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single `field operator value(s)` comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Predicate {
    pub field: String,
    pub operator: OperatorKind,
    /// One value for scalar operators, one or more for `IN`.
    pub values: Vec<String>,
}

/// One entry of a condition list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Element {
    Logical(LogicalOp),
    Group(Vec<Element>),
    Predicate(Predicate),
}

/// Sort direction of an ordering entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Asc => "ASC",
            Direction::Desc => "DESC",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One `field [ASC|DESC]` entry of an `ORDER BY` clause.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderBy {
    pub field: String,
    pub direction: Direction,
}

/// A fully parsed query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Query {
    pub conditions: Vec<Element>,
    pub order_by: Vec<OrderBy>,
}

/// Returns true if `name` can be used as a column name.
pub(crate) fn is_identifier(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_alphanumeric() || c == '_')
}
