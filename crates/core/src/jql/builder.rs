// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Filter accumulation.
//!
//! The compiler writes through the [`QueryBuilder`] trait; [`SqlFilter`] is
//! the accumulator the issue store knows how to execute.

use serde::Serialize;

/// A value bound to a named placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ParamValue {
    Scalar(String),
    /// Bound to an `IN (:...name)` placeholder.
    List(Vec<String>),
}

/// A filter fragment with the parameters it references.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Condition {
    pub sql: String,
    pub params: Vec<(String, ParamValue)>,
}

impl Condition {
    /// A fragment that binds no parameters.
    pub fn literal(sql: String) -> Self {
        Condition {
            sql,
            params: Vec::new(),
        }
    }

    /// A fragment that binds a single parameter.
    pub fn bound(sql: String, name: String, value: ParamValue) -> Self {
        Condition {
            sql,
            params: vec![(name, value)],
        }
    }

    /// Wrap the fragment as `NOT (...)`.
    pub fn negated(self) -> Self {
        Condition {
            sql: format!("NOT ({})", self.sql),
            params: self.params,
        }
    }
}

/// Capability the compiler needs from a query builder.
pub trait QueryBuilder {
    /// Append a condition joined with `AND`.
    fn and_where(&mut self, condition: Condition);
    /// Append a condition joined with `OR`.
    fn or_where(&mut self, condition: Condition);
    /// Append an ordering fragment such as `issue.priority DESC`.
    fn add_order_by(&mut self, fragment: String);
}

/// Compiled WHERE expression, parameter bindings and ordering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SqlFilter {
    where_clause: Option<String>,
    params: Vec<(String, ParamValue)>,
    order_by: Vec<String>,
}

impl SqlFilter {
    /// The WHERE expression, or `None` when no condition was added.
    pub fn where_clause(&self) -> Option<&str> {
        self.where_clause.as_deref()
    }

    /// Parameter bindings in the order they were added.
    pub fn params(&self) -> &[(String, ParamValue)] {
        &self.params
    }

    /// Look up a binding by placeholder name (without the leading `:`).
    pub fn param(&self, name: &str) -> Option<&ParamValue> {
        self.params
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, value)| value)
    }

    /// Ordering fragments in input order.
    pub fn order_by(&self) -> &[String] {
        &self.order_by
    }

    /// Convert the accumulated expression into a bracketed condition for an
    /// enclosing filter. Returns `None` if nothing was accumulated.
    pub fn into_bracketed(self) -> Option<Condition> {
        self.where_clause.map(|sql| Condition {
            sql: format!("({sql})"),
            params: self.params,
        })
    }

    fn push(&mut self, connector: &str, condition: Condition) {
        self.where_clause = Some(match self.where_clause.take() {
            None => condition.sql,
            Some(existing) => format!("{existing} {connector} {}", condition.sql),
        });
        self.params.extend(condition.params);
    }
}

impl QueryBuilder for SqlFilter {
    fn and_where(&mut self, condition: Condition) {
        self.push("AND", condition);
    }

    fn or_where(&mut self, condition: Condition) {
        self.push("OR", condition);
    }

    fn add_order_by(&mut self, fragment: String) {
        self.order_by.push(fragment);
    }
}

#[cfg(test)]
#[path = "builder_tests.rs"]
mod tests;
