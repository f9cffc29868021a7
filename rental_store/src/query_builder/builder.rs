//! Query builder
//!
//! Assembles a full SELECT statement from a fixed preamble and optional clauses.

use crate::query_builder::filter::QueryFilter;
use crate::query_builder::grouping::GroupBy;
use crate::query_builder::ordering::SortOrder;
use crate::query_builder::params::SqlParams;
use crate::query_builder::sql_generation::SqlGenerator;
use serde_json::Value;

/// A rendered statement and the values for its placeholders, in order
#[derive(Debug, Clone, PartialEq)]
pub struct BuiltQuery {
    pub sql: String,
    pub params: Vec<Value>,
}

/// Query builder for SELECT statements over a fixed FROM/JOIN preamble
#[derive(Debug, Clone)]
pub struct QueryBuilder {
    pub(crate) select: String,
    pub(crate) conditions: Vec<QueryFilter>,
    pub(crate) group_by: Option<GroupBy>,
    pub(crate) order_by: Vec<(String, SortOrder)>,
    pub(crate) limit: Option<i64>,
}

impl QueryBuilder {
    /// Start from a `SELECT ... FROM ... [JOIN ...]` preamble
    pub fn select(preamble: impl Into<String>) -> Self {
        Self {
            select: preamble.into(),
            conditions: Vec::new(),
            group_by: None,
            order_by: Vec::new(),
            limit: None,
        }
    }

    /// Add a filter condition
    pub fn filter(mut self, filter: QueryFilter) -> Self {
        self.conditions.push(filter);
        self
    }

    pub fn group_by(mut self, group_by: GroupBy) -> Self {
        self.group_by = Some(group_by);
        self
    }

    /// Add ordering
    pub fn order_by(mut self, field: &str, order: SortOrder) -> Self {
        self.order_by.push((field.to_string(), order));
        self
    }

    /// Add limit
    pub fn limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Render the statement
    ///
    /// Clause order is fixed: WHERE, GROUP BY, HAVING, ORDER BY, LIMIT.
    pub fn build(&self) -> BuiltQuery {
        let mut params = SqlParams::new();

        let where_clause = SqlGenerator::build_where_clause(&self.conditions, &mut params);
        let group_clause = SqlGenerator::build_group_by_clause(self.group_by.as_ref());
        let having_clause =
            SqlGenerator::build_having_clause(self.group_by.as_ref(), &mut params);
        let order_clause = SqlGenerator::build_order_clause(&self.order_by);
        let limit_clause = SqlGenerator::build_limit_clause(self.limit, &mut params);

        let mut sql = String::from(self.select.trim());
        for clause in [
            where_clause,
            group_clause,
            having_clause,
            order_clause,
            limit_clause,
        ] {
            if !clause.is_empty() {
                sql.push('\n');
                sql.push_str(&clause);
            }
        }

        BuiltQuery {
            sql,
            params: params.into_values(),
        }
    }
}
