use super::filter::QueryFilter;

/// Represents a GROUP BY clause with optional HAVING conditions
#[derive(Debug, Clone, PartialEq)]
pub struct GroupBy {
    /// Fields to group by
    pub fields: Vec<String>,
    /// HAVING conditions for filtering grouped results
    pub having: Vec<QueryFilter>,
}

impl GroupBy {
    /// Create a new GROUP BY clause with the specified fields
    pub(crate) fn new(fields: Vec<String>) -> Self {
        Self {
            fields,
            having: Vec::new(),
        }
    }

    /// Create a GROUP BY clause with a single field
    pub fn single(field: impl Into<String>) -> Self {
        Self::new(vec![field.into()])
    }

    /// Add a single HAVING condition
    pub fn having(mut self, condition: QueryFilter) -> Self {
        self.having.push(condition);
        self
    }

    /// Check if this GROUP BY has HAVING conditions
    pub fn has_having(&self) -> bool {
        !self.having.is_empty()
    }
}
