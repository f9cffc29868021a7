//! Clause rendering
//!
//! Every function that emits a placeholder takes the statement's single
//! [`SqlParams`] so numbering continues across WHERE, HAVING and LIMIT.

use crate::query_builder::filter::QueryFilter;
use crate::query_builder::grouping::GroupBy;
use crate::query_builder::ordering::SortOrder;
use crate::query_builder::params::SqlParams;

pub struct SqlGenerator;

impl SqlGenerator {
    /// Build WHERE clause from conditions
    pub fn build_where_clause(conditions: &[QueryFilter], params: &mut SqlParams) -> String {
        if conditions.is_empty() {
            return String::new();
        }

        format!("WHERE {}", Self::join_conditions(conditions, params))
    }

    fn join_conditions(conditions: &[QueryFilter], params: &mut SqlParams) -> String {
        conditions
            .iter()
            .map(|condition| Self::build_condition_sql(condition, params))
            .collect::<Vec<_>>()
            .join(" AND ")
    }

    fn build_condition_sql(condition: &QueryFilter, params: &mut SqlParams) -> String {
        let placeholder = params.push(condition.value.clone());
        format!(
            "{} {} {}",
            condition.field,
            condition.operator.to_sql(),
            placeholder
        )
    }

    /// Build GROUP BY clause
    pub fn build_group_by_clause(group_by: Option<&GroupBy>) -> String {
        match group_by {
            Some(group) if !group.fields.is_empty() => {
                format!("GROUP BY {}", group.fields.join(", "))
            }
            _ => String::new(),
        }
    }

    /// Build HAVING clause
    ///
    /// Empty unless the grouping has conditions; never rendered without GROUP BY.
    pub fn build_having_clause(group_by: Option<&GroupBy>, params: &mut SqlParams) -> String {
        match group_by {
            Some(group) if !group.fields.is_empty() && group.has_having() => {
                format!("HAVING {}", Self::join_conditions(&group.having, params))
            }
            _ => String::new(),
        }
    }

    /// Build ORDER BY clause
    pub fn build_order_clause(order_by: &[(String, SortOrder)]) -> String {
        if order_by.is_empty() {
            return String::new();
        }

        let order_items: Vec<String> = order_by
            .iter()
            .map(|(field, order)| format!("{} {}", field, order.to_sql()))
            .collect();

        format!("ORDER BY {}", order_items.join(", "))
    }

    /// Build LIMIT clause with the row count bound as a parameter
    pub fn build_limit_clause(limit: Option<i64>, params: &mut SqlParams) -> String {
        match limit {
            Some(limit) => format!("LIMIT {}", params.push(limit.into())),
            None => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_where_clause_empty() {
        let mut params = SqlParams::new();
        assert_eq!(SqlGenerator::build_where_clause(&[], &mut params), "");
        assert!(params.is_empty());
    }

    #[test]
    fn test_having_continues_numbering_after_where() {
        let mut params = SqlParams::new();
        let group_by = GroupBy::single("properties.id")
            .having(QueryFilter::gte("AVG(property_reviews.rating)", json!(4.5)));

        let where_clause = SqlGenerator::build_where_clause(
            &[
                QueryFilter::eq("properties.owner_id", json!(7)),
                QueryFilter::lte("properties.cost_per_night", json!(20000)),
            ],
            &mut params,
        );
        let having_clause = SqlGenerator::build_having_clause(Some(&group_by), &mut params);
        let limit_clause = SqlGenerator::build_limit_clause(Some(10), &mut params);

        assert_eq!(
            where_clause,
            "WHERE properties.owner_id = $1 AND properties.cost_per_night <= $2"
        );
        assert_eq!(having_clause, "HAVING AVG(property_reviews.rating) >= $3");
        assert_eq!(limit_clause, "LIMIT $4");
        assert_eq!(
            params.into_values(),
            vec![json!(7), json!(20000), json!(4.5), json!(10)]
        );
    }

    #[test]
    fn test_having_requires_group_fields() {
        let mut params = SqlParams::new();
        let group_by = GroupBy::new(Vec::new())
            .having(QueryFilter::gte("AVG(property_reviews.rating)", json!(3)));

        assert_eq!(SqlGenerator::build_group_by_clause(Some(&group_by)), "");
        assert_eq!(SqlGenerator::build_having_clause(Some(&group_by), &mut params), "");
        assert!(params.is_empty());
    }

    #[test]
    fn test_order_clause() {
        let order = vec![
            ("properties.cost_per_night".to_string(), SortOrder::Asc),
            ("properties.id".to_string(), SortOrder::Asc),
        ];
        assert_eq!(
            SqlGenerator::build_order_clause(&order),
            "ORDER BY properties.cost_per_night ASC, properties.id ASC"
        );
        assert_eq!(SqlGenerator::build_order_clause(&[]), "");
    }

    #[test]
    fn test_limit_clause_absent() {
        let mut params = SqlParams::new();
        assert_eq!(SqlGenerator::build_limit_clause(None, &mut params), "");
        assert!(params.is_empty());
    }
}
