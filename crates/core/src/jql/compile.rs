// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Compilation of parsed queries into parameterized SQL fragments.
//!
//! Columns are addressed through the [`ENTITY_ALIAS`] table alias. Every
//! predicate except `IS`/`IS NOT` binds its value(s) to a fresh named
//! placeholder; names are numbered per compilation starting at zero.

use crate::error::{Error, Result};

use super::ast::{Element, LogicalOp, OperatorKind, OrderBy, Predicate, Query};
use super::builder::{Condition, ParamValue, QueryBuilder, SqlFilter};

/// Table alias used for issue columns in compiled fragments.
pub const ENTITY_ALIAS: &str = "issue";

/// Source of parameter indices for one compilation.
#[derive(Debug, Default)]
pub struct ParamIndex(usize);

impl ParamIndex {
    /// Returns the next unused index.
    pub fn next_index(&mut self) -> usize {
        let index = self.0;
        self.0 += 1;
        index
    }
}

/// Compile a query into a fresh [`SqlFilter`].
pub fn compile(query: &Query) -> Result<SqlFilter> {
    let mut filter = SqlFilter::default();
    compile_into(query, &mut filter)?;
    Ok(filter)
}

/// Compile a query into an existing builder.
pub fn compile_into<B: QueryBuilder + ?Sized>(query: &Query, builder: &mut B) -> Result<()> {
    let mut params = ParamIndex::default();
    compile_conditions(&query.conditions, builder, &mut params)?;
    for fragment in compile_order_by(&query.order_by) {
        builder.add_order_by(fragment);
    }
    Ok(())
}

/// Compile one nesting level of conditions.
///
/// The ambient operator starts as `AND` and is replaced at each logical
/// marker; every following group or predicate at this level is joined with
/// it. Under `NOT`, each following element is negated and joined with `AND`.
pub fn compile_conditions<B: QueryBuilder + ?Sized>(
    elements: &[Element],
    builder: &mut B,
    params: &mut ParamIndex,
) -> Result<()> {
    let mut ambient = LogicalOp::And;

    for element in elements {
        let condition = match element {
            Element::Logical(op) => {
                ambient = *op;
                continue;
            }
            Element::Group(children) => {
                let mut group = SqlFilter::default();
                compile_conditions(children, &mut group, params)?;
                match group.into_bracketed() {
                    Some(condition) => condition,
                    None => continue,
                }
            }
            Element::Predicate(predicate) => {
                compile_predicate(predicate, params.next_index())?
            }
        };

        match ambient {
            LogicalOp::And => builder.and_where(condition),
            LogicalOp::Or => builder.or_where(condition),
            LogicalOp::Not => builder.and_where(condition.negated()),
        }
    }

    Ok(())
}

/// Translate a single predicate using parameter index `index`.
pub fn compile_predicate(predicate: &Predicate, index: usize) -> Result<Condition> {
    let column = format!("{ENTITY_ALIAS}.{}", predicate.field);

    let sql_op = match predicate.operator {
        OperatorKind::In => {
            let name = format!("values{index}");
            return Ok(Condition::bound(
                format!("{column} IN (:...{name})"),
                name,
                ParamValue::List(predicate.values.clone()),
            ));
        }
        // Inserted as SQL text rather than bound; only keyword literals pass.
        OperatorKind::Is | OperatorKind::IsNot => {
            let literal = keyword_literal(predicate.operator, scalar_value(predicate)?)?;
            return Ok(Condition::literal(format!(
                "{column} {} {literal}",
                predicate.operator
            )));
        }
        OperatorKind::Eq => "=",
        OperatorKind::Ne => "<>",
        OperatorKind::Gt => ">",
        OperatorKind::Lt => "<",
        OperatorKind::Ge => ">=",
        OperatorKind::Le => "<=",
        OperatorKind::Contains => "LIKE",
    };

    let name = format!("value{index}");
    Ok(Condition::bound(
        format!("{column} {sql_op} :{name}"),
        name,
        ParamValue::Scalar(scalar_value(predicate)?.to_string()),
    ))
}

fn scalar_value(predicate: &Predicate) -> Result<&str> {
    predicate
        .values
        .first()
        .map(String::as_str)
        .ok_or_else(|| Error::MissingValue {
            operator: predicate.operator.to_string(),
        })
}

/// Accept `NULL`, `TRUE` or `FALSE` (any case) as an `IS` operand.
fn keyword_literal(operator: OperatorKind, value: &str) -> Result<&'static str> {
    match value.to_ascii_uppercase().as_str() {
        "NULL" => Ok("NULL"),
        "TRUE" => Ok("TRUE"),
        "FALSE" => Ok("FALSE"),
        _ => Err(Error::InvalidLiteral {
            operator: operator.to_string(),
            value: value.to_string(),
        }),
    }
}

/// Compile ordering entries into `issue.field DIRECTION` fragments.
pub fn compile_order_by(order_by: &[OrderBy]) -> Vec<String> {
    order_by
        .iter()
        .map(|entry| format!("{ENTITY_ALIAS}.{} {}", entry.field, entry.direction))
        .collect()
}

#[cfg(test)]
#[path = "compile_tests.rs"]
mod tests;
