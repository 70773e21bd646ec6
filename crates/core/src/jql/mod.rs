// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The issue query language.
//!
//! Queries are a sequence of predicates, logical keywords and parenthesized
//! groups, optionally followed by an ordering clause:
//!
//! ```text
//! query      := conditions ["ORDER BY" field [ASC|DESC] {"," field [ASC|DESC]}]
//! conditions := {predicate | "AND" | "OR" | "NOT" | "(" conditions ")"}
//! predicate  := field operator value
//! ```
//!
//! # Operators
//!
//! - `=`, `!=`, `>`, `<`, `>=`, `<=` - compare against a bound value
//! - `IN ("a", "b")` - membership in a parenthesized list
//! - `CONTAINS` - SQL `LIKE`; the value carries its own `%` wildcards
//! - `IS`, `IS NOT` - against `NULL`, `TRUE` or `FALSE`
//!
//! # Logical keywords
//!
//! A keyword applies to every following element at the same level until the
//! next keyword, not just to its neighbours. Each level starts with `AND`.
//! `NOT` joins each following element with `AND NOT`.
//!
//! # Examples
//!
//! ```text
//! status = "open"
//! status = "open" AND priority IN ("high", "medium")
//! (status = "open" OR status = "closed") AND assignee = "bob"
//! resolved IS NULL ORDER BY priority DESC, created_at
//! NOT assignee = "bob"
//! ```

mod ast;
mod builder;
mod compile;
mod parser;
mod token;
mod validate;

pub use ast::{Direction, Element, LogicalOp, OperatorKind, OrderBy, Predicate, Query};
pub use builder::{Condition, ParamValue, QueryBuilder, SqlFilter};
pub use compile::{
    compile, compile_conditions, compile_into, compile_order_by, compile_predicate, ParamIndex,
    ENTITY_ALIAS,
};
pub use parser::{parse, parse_conditions, parse_order_by};
pub use token::{tokenize, OrderKeyword, Punct, Token};
pub use validate::validate;
