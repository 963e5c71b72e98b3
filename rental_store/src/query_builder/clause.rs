/// Conditions collected while dispatching filters
///
/// `filters` are per-row conditions rendered into WHERE. `having` conditions
/// reference aggregates and are rendered after GROUP BY.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClauseSet {
    filters: Vec<String>,
    having: Vec<String>,
}

impl ClauseSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_filter(&mut self, clause: String) {
        self.filters.push(clause);
    }

    pub fn push_having(&mut self, clause: String) {
        self.having.push(clause);
    }

    /// Build WHERE clause, `None` when there is nothing to filter on
    pub fn where_clause(&self) -> Option<String> {
        Self::conjoin("WHERE", &self.filters)
    }

    /// Build HAVING clause, `None` when there is nothing to filter on
    pub fn having_clause(&self) -> Option<String> {
        Self::conjoin("HAVING", &self.having)
    }

    fn conjoin(keyword: &str, clauses: &[String]) -> Option<String> {
        if clauses.is_empty() {
            None
        } else {
            Some(format!("{} {}", keyword, clauses.join(" AND ")))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_set_renders_nothing() {
        let clauses = ClauseSet::new();
        assert_eq!(clauses.where_clause(), None);
        assert_eq!(clauses.having_clause(), None);
    }

    #[test]
    fn test_clauses_are_conjoined_in_order() {
        let mut clauses = ClauseSet::new();
        clauses.push_filter("city LIKE $1".to_string());
        clauses.push_having("avg(rating) >= $2".to_string());
        clauses.push_filter("cost_per_night <= $3".to_string());

        assert_eq!(
            clauses.where_clause().as_deref(),
            Some("WHERE city LIKE $1 AND cost_per_night <= $3")
        );
        assert_eq!(
            clauses.having_clause().as_deref(),
            Some("HAVING avg(rating) >= $2")
        );
    }
}
