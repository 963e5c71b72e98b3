//! Property search query construction

use crate::query_builder::clause::ClauseSet;
use crate::query_builder::filter::FilterOptions;
use crate::query_builder::params::QueryParams;
use config::DEFAULT_LIMIT;
use serde_json::Value;

const SELECT_CLAUSE: &str =
    "SELECT properties.*, avg(property_reviews.rating)::float8 AS average_rating";
const FROM_CLAUSE: &str = "FROM properties";
const JOIN_CLAUSE: &str = "JOIN property_reviews ON properties.id = property_reviews.property_id";
const GROUP_BY_CLAUSE: &str = "GROUP BY properties.id";
const ORDER_BY_CLAUSE: &str = "ORDER BY cost_per_night";

/// SQL text together with the values for its `$N` placeholders
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterizedQuery {
    pub text: String,
    pub params: Vec<Value>,
}

/// Builder for the property search
///
/// Produces one statement selecting properties joined to their reviews,
/// grouped per property with the mean rating, cheapest first.
#[derive(Debug, Clone)]
pub struct PropertySearchQuery {
    options: FilterOptions,
    limit: i64,
}

impl PropertySearchQuery {
    pub fn new(options: FilterOptions) -> Self {
        Self {
            options,
            limit: DEFAULT_LIMIT,
        }
    }

    /// Maximum number of rows, expected to be positive
    pub fn limit(mut self, limit: i64) -> Self {
        self.limit = limit;
        self
    }

    /// Build the statement and its parameters
    pub fn build(&self) -> ParameterizedQuery {
        let mut params = QueryParams::new();
        let mut clauses = ClauseSet::new();

        for filter in self.options.filters() {
            filter.apply(&mut params, &mut clauses);
        }

        let mut parts: Vec<String> = vec![
            SELECT_CLAUSE.to_string(),
            FROM_CLAUSE.to_string(),
            JOIN_CLAUSE.to_string(),
        ];

        if let Some(where_clause) = clauses.where_clause() {
            parts.push(where_clause);
        }

        parts.push(GROUP_BY_CLAUSE.to_string());

        if let Some(having_clause) = clauses.having_clause() {
            parts.push(having_clause);
        }

        parts.push(ORDER_BY_CLAUSE.to_string());

        // LIMIT is always the last placeholder
        let limit_param = params.push(self.limit);
        parts.push(format!("LIMIT {}", limit_param));

        let text = parts.join("\n");
        crate::debug_log!("[PROPERTY_SEARCH] SQL: {}", text);
        crate::debug_log!("[PROPERTY_SEARCH] params count: {}", params.len());

        ParameterizedQuery {
            text,
            params: params.into_values(),
        }
    }
}

impl From<FilterOptions> for PropertySearchQuery {
    fn from(options: FilterOptions) -> Self {
        Self::new(options)
    }
}
