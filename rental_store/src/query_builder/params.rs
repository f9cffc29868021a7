//! Positional bind parameter accumulator

use serde_json::Value;

/// Ordered bind values for a single statement
///
/// The only way to obtain a placeholder is to push its value, so the Nth
/// pushed value is always referenced as `$N` and the text cannot drift
/// out of step with the parameter list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SqlParams {
    values: Vec<Value>,
}

impl SqlParams {
    pub fn new() -> Self {
        Self { values: Vec::new() }
    }

    /// Append a value and return the placeholder bound to it
    pub fn push(&mut self, value: Value) -> String {
        self.values.push(value);
        format!("${}", self.values.len())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn into_values(self) -> Vec<Value> {
        self.values
    }
}
