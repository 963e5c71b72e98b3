use serde_json::Value;

/// Ordered values bound to a statement
///
/// Placeholders are handed out in push order starting at `$1`, so the
/// parameter at index `i` always answers placeholder `$(i + 1)`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryParams {
    values: Vec<Value>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self { values: Vec::new() }
    }

    /// Append a value and return the placeholder that refers to it
    pub fn push(&mut self, value: impl Into<Value>) -> String {
        self.values.push(value.into());
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

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_placeholders_follow_push_order() {
        let mut params = QueryParams::new();

        assert_eq!(params.push("%van%"), "$1");
        assert_eq!(params.push(5000), "$2");
        assert_eq!(params.push(json!(4.5)), "$3");

        assert_eq!(params.len(), 3);
        assert_eq!(
            params.into_values(),
            vec![json!("%van%"), json!(5000), json!(4.5)]
        );
    }

    #[test]
    fn test_new_params_are_empty() {
        let params = QueryParams::new();
        assert!(params.is_empty());
        assert_eq!(params.len(), 0);
        assert!(params.into_values().is_empty());
    }
}
