//! Predicates for WHERE and HAVING clauses

use serde_json::Value;

/// Comparison operators supported by the builder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryOperator {
    Eq,    // =
    Gte,   // >=
    Lte,   // <=
    ILike, // ILIKE (case insensitive)
}

impl QueryOperator {
    pub fn to_sql(&self) -> &'static str {
        match self {
            QueryOperator::Eq => "=",
            QueryOperator::Gte => ">=",
            QueryOperator::Lte => "<=",
            QueryOperator::ILike => "ILIKE",
        }
    }
}

/// Single bound predicate: `<field> <operator> $n`
///
/// `field` is trusted SQL text (a column or an aggregate expression); only
/// `value` ever comes from the caller and it is always bound.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryFilter {
    pub field: String,
    pub operator: QueryOperator,
    pub value: Value,
}

impl QueryFilter {
    pub fn condition(field: &str, operator: QueryOperator, value: Value) -> Self {
        Self {
            field: field.to_string(),
            operator,
            value,
        }
    }

    /// Equal condition
    pub fn eq(field: &str, value: Value) -> Self {
        Self::condition(field, QueryOperator::Eq, value)
    }

    /// Greater than or equal condition
    pub fn gte(field: &str, value: Value) -> Self {
        Self::condition(field, QueryOperator::Gte, value)
    }

    /// Less than or equal condition
    pub fn lte(field: &str, value: Value) -> Self {
        Self::condition(field, QueryOperator::Lte, value)
    }

    /// Case-insensitive substring match; LIKE wildcards in `needle` match literally
    pub fn contains(field: &str, needle: &str) -> Self {
        Self::condition(
            field,
            QueryOperator::ILike,
            Value::String(format!("%{}%", escape_like(needle))),
        )
    }
}

/// Escape `\`, `%` and `_` so they match themselves in a LIKE pattern
pub fn escape_like(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_contains_wraps_pattern() {
        let filter = QueryFilter::contains("properties.city", "van");
        assert_eq!(filter.operator, QueryOperator::ILike);
        assert_eq!(filter.value, json!("%van%"));
    }

    #[test]
    fn test_escape_like() {
        assert_eq!(escape_like("plain"), "plain");
        assert_eq!(escape_like("100%"), "100\\%");
        assert_eq!(escape_like("a_b"), "a\\_b");
        assert_eq!(escape_like("back\\slash"), "back\\\\slash");
    }
}
