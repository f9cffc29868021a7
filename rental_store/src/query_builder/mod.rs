//! Query builder utilities
//!
//! This module provides parameterized SQL query construction utilities.

pub mod builder;
pub mod filter;
pub mod grouping;
pub mod ordering;
pub mod params;
pub mod sql_generation;

#[cfg(test)]
mod tests;

pub use builder::{BuiltQuery, QueryBuilder};
pub use filter::{QueryFilter, QueryOperator};
pub use grouping::GroupBy;
pub use ordering::SortOrder;
pub use params::SqlParams;
