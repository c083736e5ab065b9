// file: src/models/query.rs
// description: free-text query value object
// reference: internal data structures

use serde::{Deserialize, Serialize};

/// A free-text search query. Built per call and never mutated by the
/// executor; `top_k` of `None` defers to the server-side default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Query {
    pub text: String,
    pub top_k: Option<usize>,
}

impl Query {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            top_k: None,
        }
    }

    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = Some(top_k);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_defaults_to_server_side_top_k() {
        let query = Query::new("climate policy");
        assert_eq!(query.text, "climate policy");
        assert_eq!(query.top_k, None);
    }

    #[test]
    fn test_query_with_top_k() {
        let query = Query::new("climate policy").with_top_k(7);
        assert_eq!(query.top_k, Some(7));
    }
}
