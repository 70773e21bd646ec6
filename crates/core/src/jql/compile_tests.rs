// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::jql::ast::Direction;
use crate::jql::parse;
use yare::parameterized;

fn compiled(input: &str) -> SqlFilter {
    compile(&parse(input).unwrap()).unwrap()
}

fn scalar(value: &str) -> ParamValue {
    ParamValue::Scalar(value.to_string())
}

// ─────────────────────────────────────────────────────────────────────────────
// Predicates
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn single_equality() {
    let filter = compiled(r#"status = "open""#);
    assert_eq!(filter.where_clause(), Some("issue.status = :value0"));
    assert_eq!(filter.params(), &[("value0".to_string(), scalar("open"))]);
}

#[parameterized(
    eq = { "id = 3", "issue.id = :value0" },
    ne = { "id != 3", "issue.id <> :value0" },
    gt = { "id > 3", "issue.id > :value0" },
    lt = { "id < 3", "issue.id < :value0" },
    ge = { "id >= 3", "issue.id >= :value0" },
    le = { "id <= 3", "issue.id <= :value0" },
    contains = { r#"title CONTAINS "%crash%""#, "issue.title LIKE :value0" },
)]
fn bound_operators(input: &str, expected: &str) {
    let filter = compiled(input);
    assert_eq!(filter.where_clause(), Some(expected));
    assert_eq!(filter.params().len(), 1);
}

#[test]
fn contains_binds_value_as_written() {
    let filter = compiled(r#"title CONTAINS "%crash%""#);
    assert_eq!(filter.param("value0"), Some(&scalar("%crash%")));
}

#[test]
fn in_binds_whole_list() {
    let filter = compiled(r#"priority IN ("high","medium")"#);
    assert_eq!(filter.where_clause(), Some("issue.priority IN (:...values0)"));
    assert_eq!(
        filter.param("values0"),
        Some(&ParamValue::List(vec![
            "high".to_string(),
            "medium".to_string()
        ]))
    );
}

#[parameterized(
    is_null = { "resolved IS NULL", "issue.resolved IS NULL" },
    is_not_null = { "resolved IS NOT NULL", "issue.resolved IS NOT NULL" },
    lowercase = { "resolved IS null", "issue.resolved IS NULL" },
    quoted_true = { r#"flag IS "true""#, "issue.flag IS TRUE" },
    is_not_false = { "flag IS NOT FALSE", "issue.flag IS NOT FALSE" },
)]
fn is_operators_insert_keyword_literals(input: &str, expected: &str) {
    let filter = compiled(input);
    assert_eq!(filter.where_clause(), Some(expected));
    assert!(filter.params().is_empty());
}

#[parameterized(
    word = { "resolved IS yesterday" },
    injection = { r#"resolved IS "NULL OR 1=1""# },
    is_not = { r#"resolved IS NOT "x""# },
)]
fn is_operators_reject_other_literals(input: &str) {
    let err = compile(&parse(input).unwrap()).unwrap_err();
    assert!(matches!(err, Error::InvalidLiteral { .. }));
    assert!(err.is_client_error());
}

#[test]
fn is_still_consumes_a_parameter_index() {
    let filter = compiled(r#"resolved IS NULL AND status = "open""#);
    assert_eq!(
        filter.where_clause(),
        Some("issue.resolved IS NULL AND issue.status = :value1")
    );
}

#[test]
fn scalar_predicate_without_value_fails() {
    let predicate = Predicate {
        field: "status".to_string(),
        operator: OperatorKind::Eq,
        values: vec![],
    };
    assert!(matches!(
        compile_predicate(&predicate, 0),
        Err(Error::MissingValue { .. })
    ));
}

// ─────────────────────────────────────────────────────────────────────────────
// Ambient operator
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn and_between_predicates() {
    let filter = compiled(r#"status = "open" AND priority = "high""#);
    assert_eq!(
        filter.where_clause(),
        Some("issue.status = :value0 AND issue.priority = :value1")
    );
    assert_eq!(filter.param("value0"), Some(&scalar("open")));
    assert_eq!(filter.param("value1"), Some(&scalar("high")));
}

#[test]
fn adjacent_predicates_default_to_and() {
    let filter = compiled(r#"status = "open" priority = "high""#);
    assert_eq!(
        filter.where_clause(),
        Some("issue.status = :value0 AND issue.priority = :value1")
    );
}

#[test]
fn group_is_compiled_first_and_bracketed() {
    let filter = compiled(r#"(status = "open" OR status = "closed") AND assignee = "bob""#);
    assert_eq!(
        filter.where_clause(),
        Some("(issue.status = :value0 OR issue.status = :value1) AND issue.assignee = :value2")
    );
    assert_eq!(filter.param("value2"), Some(&scalar("bob")));
}

#[test]
fn ambient_operator_persists_across_siblings() {
    let filter = compiled("a = 1 OR b = 2 c = 3");
    assert_eq!(
        filter.where_clause(),
        Some("issue.a = :value0 OR issue.b = :value1 OR issue.c = :value2")
    );
}

#[test]
fn ambient_operator_resets_inside_groups() {
    let filter = compiled("a = 1 OR (b = 2 c = 3) d = 4");
    assert_eq!(
        filter.where_clause(),
        Some("issue.a = :value0 OR (issue.b = :value1 AND issue.c = :value2) OR issue.d = :value3")
    );
}

#[test]
fn nested_groups() {
    let filter = compiled("(a = 1 OR (b = 2 AND c = 3)) AND d = 4");
    assert_eq!(
        filter.where_clause(),
        Some("(issue.a = :value0 OR (issue.b = :value1 AND issue.c = :value2)) AND issue.d = :value3")
    );
}

#[test]
fn leading_not_negates_predicate() {
    let filter = compiled(r#"NOT status = "closed""#);
    assert_eq!(
        filter.where_clause(),
        Some("NOT (issue.status = :value0)")
    );
}

#[test]
fn not_applies_to_every_following_sibling() {
    let filter = compiled("a = 1 NOT b = 2 c = 3");
    assert_eq!(
        filter.where_clause(),
        Some("issue.a = :value0 AND NOT (issue.b = :value1) AND NOT (issue.c = :value2)")
    );
}

#[test]
fn not_before_group() {
    let filter = compiled(r#"status = "open" NOT (priority = "low" OR assignee = "bob")"#);
    assert_eq!(
        filter.where_clause(),
        Some("issue.status = :value0 AND NOT ((issue.priority = :value1 OR issue.assignee = :value2))")
    );
}

#[test]
fn empty_group_contributes_nothing() {
    let filter = compiled(r#"() OR status = "open""#);
    assert_eq!(filter.where_clause(), Some("issue.status = :value0"));
}

#[test]
fn dangling_marker_is_harmless() {
    let filter = compiled(r#"status = "open" AND"#);
    assert_eq!(filter.where_clause(), Some("issue.status = :value0"));
}

#[test]
fn empty_query_has_no_where_clause() {
    let filter = compiled("");
    assert_eq!(filter.where_clause(), None);
    assert!(filter.params().is_empty());
}

#[test]
fn in_list_inside_group_uses_shared_counter() {
    let filter = compiled(r#"id = 1 OR (priority IN ("high", "low") AND status = "open")"#);
    assert_eq!(
        filter.where_clause(),
        Some("issue.id = :value0 OR (issue.priority IN (:...values1) AND issue.status = :value2)")
    );
}

// ─────────────────────────────────────────────────────────────────────────────
// ORDER BY
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn order_by_fragments() {
    let filter = compiled(r#"status = "open" ORDER BY priority DESC, created_at"#);
    assert_eq!(
        filter.order_by(),
        &[
            "issue.priority DESC".to_string(),
            "issue.created_at ASC".to_string()
        ]
    );
}

#[test]
fn compile_order_by_keeps_duplicates_in_order() {
    let entries = vec![
        OrderBy {
            field: "id".to_string(),
            direction: Direction::Desc,
        },
        OrderBy {
            field: "id".to_string(),
            direction: Direction::Asc,
        },
    ];
    assert_eq!(
        compile_order_by(&entries),
        vec!["issue.id DESC".to_string(), "issue.id ASC".to_string()]
    );
}

// ─────────────────────────────────────────────────────────────────────────────
// Parameter scoping
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn recompiling_yields_identical_filters() {
    let query = parse(r#"(status = "open" OR status = "closed") AND priority IN (high, low)"#)
        .unwrap();
    assert_eq!(compile(&query).unwrap(), compile(&query).unwrap());
}

#[test]
fn parameter_names_restart_for_each_compilation() {
    let first = compiled(r#"status = "open" AND priority = "high""#);
    let second = compiled(r#"assignee = "bob""#);
    assert_eq!(first.params()[0].0, "value0");
    assert_eq!(second.params()[0].0, "value0");
}

#[test]
fn parameter_names_are_unique_within_a_query() {
    let filter = compiled("a = 1 b = 2 (c = 3 OR d IN (4, 5)) e CONTAINS 6");
    let mut names: Vec<&str> = filter.params().iter().map(|(n, _)| n.as_str()).collect();
    let total = names.len();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), total);
    assert_eq!(total, 5);
}

#[test]
fn concurrent_compilations_do_not_share_state() {
    let queries = [
        r#"status = "open" AND priority = "high""#,
        r#"assignee = "bob" OR assignee = "alice""#,
        r#"(id > 1 OR id < 10) AND title CONTAINS "%x%""#,
        r#"priority IN ("high", "low")"#,
    ];

    let results: Vec<(SqlFilter, SqlFilter)> = std::thread::scope(|scope| {
        let handles: Vec<_> = queries
            .iter()
            .map(|q| {
                scope.spawn(move || {
                    let query = parse(q).unwrap();
                    let mut last = compile(&query).unwrap();
                    for _ in 0..50 {
                        last = compile(&query).unwrap();
                    }
                    (compiled(q), last)
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for (expected, actual) in &results {
        assert_eq!(expected, actual);
        let first = &actual.params()[0].0;
        assert!(first == "value0" || first == "values0", "got {first}");
    }
}
