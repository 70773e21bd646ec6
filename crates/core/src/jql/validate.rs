// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Structural validation of parsed queries.
//!
//! Everything the parser produces is accepted, including empty condition
//! lists, empty groups and trailing logical markers. The checks below only
//! reject trees that were built by hand with inconsistent predicates.

use crate::error::{Error, Result};

use super::ast::{is_identifier, Element, OperatorKind, Predicate, Query};

/// Validate a parsed query before compilation.
pub fn validate(query: &Query) -> Result<()> {
    validate_elements(&query.conditions)?;

    for entry in &query.order_by {
        if !is_identifier(&entry.field) {
            return Err(Error::InvalidQuery(format!(
                "invalid ORDER BY field '{}'",
                entry.field
            )));
        }
    }

    Ok(())
}

fn validate_elements(elements: &[Element]) -> Result<()> {
    for element in elements {
        match element {
            Element::Logical(_) => {}
            Element::Group(children) => validate_elements(children)?,
            Element::Predicate(predicate) => validate_predicate(predicate)?,
        }
    }
    Ok(())
}

fn validate_predicate(predicate: &Predicate) -> Result<()> {
    if !is_identifier(&predicate.field) {
        return Err(Error::InvalidQuery(format!(
            "invalid field name '{}'",
            predicate.field
        )));
    }

    let count = predicate.values.len();
    let valid = match predicate.operator {
        OperatorKind::In => count >= 1,
        _ => count == 1,
    };
    if !valid {
        return Err(Error::InvalidQuery(format!(
            "{} on field '{}' has {count} value(s)",
            predicate.operator, predicate.field
        )));
    }

    Ok(())
}

#[cfg(test)]
#[path = "validate_tests.rs"]
mod tests;
