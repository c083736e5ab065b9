// file: src/models/document.rs
// description: document model submitted for indexing
// reference: internal data structures

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// A document to submit to the external index. The id is caller-assigned
/// and must be unique per index; the client holds no copy once the index
/// has acknowledged the submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub content: String,
}

impl Document {
    pub fn new(id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
        }
    }

    /// Build a document whose id is derived from its content hash.
    /// Re-submitting identical content yields the same id, so repeat
    /// submissions land on the index's duplicate-id path.
    pub fn with_derived_id(content: impl Into<String>) -> Self {
        let content = content.into();
        let id = Self::compute_hash(&content);
        Self { id, content }
    }

    fn compute_hash(content: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(content.as_bytes());
        let digest = format!("{:x}", hasher.finalize());
        digest[..16].to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_creation() {
        let doc = Document::new("doc123", "Some text to index");
        assert_eq!(doc.id, "doc123");
        assert_eq!(doc.content, "Some text to index");
    }

    #[test]
    fn test_derived_id_is_deterministic() {
        let doc1 = Document::with_derived_id("same text");
        let doc2 = Document::with_derived_id("same text");
        assert_eq!(doc1.id, doc2.id);
        assert_eq!(doc1.id.len(), 16);
    }

    #[test]
    fn test_derived_id_differs_per_content() {
        let doc1 = Document::with_derived_id("one text");
        let doc2 = Document::with_derived_id("another text");
        assert_ne!(doc1.id, doc2.id);
    }
}
