// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Tokenizer for query strings.

use regex::Regex;
use std::sync::LazyLock;

use super::ast::{Direction, LogicalOp, OperatorKind};

// Alternation order matters: multi-word keywords must win over the bare
// words they start with, and two-character operators over one-character ones.
static TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| {
    match Regex::new(r#"\bORDER\s+BY\b|\bIS\s+NOT\b|"[^"]+"|\w+|>=|<=|!=|[<>=(),]"#) {
        Ok(re) => re,
        Err(_) => unreachable!("static regex pattern"),
    }
});

/// Punctuation tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Punct {
    Open,
    Close,
    Comma,
}

/// Keywords of the ordering clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderKeyword {
    OrderBy,
    Asc,
    Desc,
}

impl OrderKeyword {
    /// The sort direction, for `ASC` and `DESC`.
    pub fn direction(&self) -> Option<Direction> {
        match self {
            OrderKeyword::OrderBy => None,
            OrderKeyword::Asc => Some(Direction::Asc),
            OrderKeyword::Desc => Some(Direction::Desc),
        }
    }
}

/// A classified lexical unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Bare identifier or literal.
    Word(String),
    /// Double-quoted string, quotes stripped.
    Quoted(String),
    Operator(OperatorKind),
    Logical(LogicalOp),
    Punct(Punct),
    Order(OrderKeyword),
}

impl Token {
    /// The token's spelling, with quotes stripped from quoted strings.
    pub fn text(&self) -> String {
        match self {
            Token::Word(s) | Token::Quoted(s) => s.clone(),
            Token::Operator(op) => op.as_str().to_string(),
            Token::Logical(op) => op.as_str().to_string(),
            Token::Punct(Punct::Open) => "(".to_string(),
            Token::Punct(Punct::Close) => ")".to_string(),
            Token::Punct(Punct::Comma) => ",".to_string(),
            Token::Order(OrderKeyword::OrderBy) => "ORDER BY".to_string(),
            Token::Order(OrderKeyword::Asc) => "ASC".to_string(),
            Token::Order(OrderKeyword::Desc) => "DESC".to_string(),
        }
    }

    /// The token as it would appear in query text, for error messages.
    pub fn describe(&self) -> String {
        match self {
            Token::Quoted(s) => format!("\"{s}\""),
            other => other.text(),
        }
    }
}

/// Split a query string into tokens.
///
/// Input that matches no token class is skipped; the skipped text is
/// reported at debug level.
pub fn tokenize(input: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut last_end = 0;

    for m in TOKEN_RE.find_iter(input) {
        report_skipped(input, last_end, m.start());
        last_end = m.end();
        tokens.push(classify(m.as_str()));
    }
    report_skipped(input, last_end, input.len());

    tokens
}

fn report_skipped(input: &str, start: usize, end: usize) {
    let skipped = input[start..end].trim();
    if !skipped.is_empty() {
        tracing::debug!(offset = start, skipped, "ignoring unrecognized query text");
    }
}

fn classify(raw: &str) -> Token {
    if let Some(inner) = raw.strip_prefix('"').and_then(|s| s.strip_suffix('"')) {
        return Token::Quoted(inner.to_string());
    }

    // Only the multi-word keywords can contain whitespace.
    if raw.contains(char::is_whitespace) {
        return if raw.starts_with("ORDER") {
            Token::Order(OrderKeyword::OrderBy)
        } else {
            Token::Operator(OperatorKind::IsNot)
        };
    }

    match raw {
        "AND" => Token::Logical(LogicalOp::And),
        "OR" => Token::Logical(LogicalOp::Or),
        "NOT" => Token::Logical(LogicalOp::Not),
        "ASC" => Token::Order(OrderKeyword::Asc),
        "DESC" => Token::Order(OrderKeyword::Desc),
        "(" => Token::Punct(Punct::Open),
        ")" => Token::Punct(Punct::Close),
        "," => Token::Punct(Punct::Comma),
        other => match OperatorKind::from_symbol(other) {
            Some(op) => Token::Operator(op),
            None => Token::Word(other.to_string()),
        },
    }
}

#[cfg(test)]
#[path = "token_tests.rs"]
mod tests;
