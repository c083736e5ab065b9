// file: src/models/candidate.rs
// description: Ranked search candidates with similarity distances
// reference: Used for vector similarity search results

use crate::utils::Validator;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    /// Document ID as assigned at indexing time
    pub document_id: String,

    /// Document content or snippet
    pub content: String,

    /// Distance to the query embedding (lower is more similar)
    pub distance: f32,
}

impl Candidate {
    pub fn new(document_id: String, content: String, distance: f32) -> Self {
        Self {
            document_id,
            content,
            distance,
        }
    }

    /// Format as a summary string for display
    pub fn format_summary(&self, max_content_len: usize) -> String {
        format!(
            "Distance: {:.4} | {}\n{}\n",
            self.distance,
            self.document_id,
            Validator::truncate_text(&self.content, max_content_len)
        )
    }
}

/// An ordered result set, closest candidate first. The order is exactly the
/// order the search service returned; this type never re-sorts. May be
/// empty when nothing matched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    candidates: Vec<Candidate>,
}

impl SearchResult {
    pub fn new(candidates: Vec<Candidate>) -> Self {
        Self { candidates }
    }

    pub fn empty() -> Self {
        Self { candidates: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn into_candidates(self) -> Vec<Candidate> {
        self.candidates
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Candidate> {
        self.candidates.iter()
    }
}

impl IntoIterator for SearchResult {
    type Item = Candidate;
    type IntoIter = std::vec::IntoIter<Candidate>;

    fn into_iter(self) -> Self::IntoIter {
        self.candidates.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_creation() {
        let candidate = Candidate::new("doc1".to_string(), "doc1 text".to_string(), 0.12);
        assert_eq!(candidate.document_id, "doc1");
        assert_eq!(candidate.distance, 0.12);
    }

    #[test]
    fn test_format_summary_truncates() {
        let candidate = Candidate::new(
            "doc1".to_string(),
            "This is a very long content that will be truncated".to_string(),
            0.87,
        );

        let summary = candidate.format_summary(20);
        assert!(summary.contains("0.8700"));
        assert!(summary.contains("doc1"));
        assert!(summary.contains("..."));
    }

    #[test]
    fn test_empty_result_is_not_an_error() {
        let result = SearchResult::empty();
        assert!(result.is_empty());
        assert_eq!(result.len(), 0);
    }

    #[test]
    fn test_result_preserves_insertion_order() {
        let result = SearchResult::new(vec![
            Candidate::new("b".to_string(), "second by id".to_string(), 0.9),
            Candidate::new("a".to_string(), "first by id".to_string(), 0.1),
        ]);

        let ids: Vec<&str> = result.iter().map(|c| c.document_id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }
}
