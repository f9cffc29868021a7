//! Query builder tests

use crate::query_builder::{GroupBy, QueryBuilder, QueryFilter, SortOrder};
use serde_json::json;

const PREAMBLE: &str = "
    SELECT properties.*
    FROM properties
";

// ========================================
// Clause Assembly
// ========================================

#[test]
fn test_bare_select() {
    let built = QueryBuilder::select(PREAMBLE).build();

    assert_eq!(built.sql, "SELECT properties.*\n    FROM properties");
    assert!(built.params.is_empty());
}

#[test]
fn test_clause_order() {
    let built = QueryBuilder::select(PREAMBLE)
        .filter(QueryFilter::eq("properties.owner_id", json!(1)))
        .group_by(
            GroupBy::single("properties.id")
                .having(QueryFilter::gte("COUNT(*)", json!(2))),
        )
        .order_by("properties.cost_per_night", SortOrder::Asc)
        .limit(5)
        .build();

    let where_at = built.sql.find("WHERE").unwrap();
    let group_at = built.sql.find("GROUP BY").unwrap();
    let having_at = built.sql.find("HAVING").unwrap();
    let order_at = built.sql.find("ORDER BY").unwrap();
    let limit_at = built.sql.find("LIMIT").unwrap();

    assert!(where_at < group_at);
    assert!(group_at < having_at);
    assert!(having_at < order_at);
    assert!(order_at < limit_at);
    assert_eq!(built.params, vec![json!(1), json!(2), json!(5)]);
}

#[test]
fn test_filters_joined_with_and() {
    let built = QueryBuilder::select(PREAMBLE)
        .filter(QueryFilter::gte("properties.cost_per_night", json!(10000)))
        .filter(QueryFilter::lte("properties.cost_per_night", json!(20000)))
        .build();

    assert!(built
        .sql
        .ends_with("WHERE properties.cost_per_night >= $1 AND properties.cost_per_night <= $2"));
}

#[test]
fn test_limit_only() {
    let built = QueryBuilder::select(PREAMBLE).limit(3).build();

    assert!(built.sql.ends_with("\nLIMIT $1"));
    assert_eq!(built.params, vec![json!(3)]);
}

// ========================================
// Injection Safety
// ========================================

#[test]
fn test_values_are_never_inlined() {
    let hostile = "'; DROP TABLE users; --";
    let built = QueryBuilder::select(PREAMBLE)
        .filter(QueryFilter::contains("properties.city", hostile))
        .build();

    assert!(!built.sql.contains("DROP TABLE"));
    assert_eq!(built.params, vec![json!(format!("%{}%", hostile))]);
}

#[test]
fn test_unicode_values() {
    let built = QueryBuilder::select(PREAMBLE)
        .filter(QueryFilter::contains("properties.city", "Montréal"))
        .build();

    assert_eq!(built.params, vec![json!("%Montréal%")]);
}
