// file: src/utils/validation.rs
// description: pre-flight input validation for queries and documents
// reference: input validation patterns

use crate::error::{Result, RetrievalError};

pub struct Validator;

impl Validator {
    /// Rejects empty or whitespace-only query text before any network call.
    pub fn validate_query_text(text: &str) -> Result<()> {
        if text.trim().is_empty() {
            return Err(RetrievalError::Validation(
                "Query text is empty".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_top_k(top_k: usize) -> Result<()> {
        if top_k == 0 {
            return Err(RetrievalError::Validation(
                "top_k must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_document_id(id: &str) -> Result<()> {
        if id.trim().is_empty() {
            return Err(RetrievalError::Validation(
                "Document id is empty".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_document_content(content: &str) -> Result<()> {
        if content.trim().is_empty() {
            return Err(RetrievalError::Validation(
                "Document content is empty".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_base_url(url: &str) -> Result<()> {
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(RetrievalError::Validation(format!(
                "Invalid URL format: {}",
                url
            )));
        }
        Ok(())
    }

    /// Truncate to at most `max_length` characters, respecting char
    /// boundaries since document content is arbitrary text.
    pub fn truncate_text(text: &str, max_length: usize) -> String {
        match text.char_indices().nth(max_length) {
            Some((byte_index, _)) => format!("{}...", &text[..byte_index]),
            None => text.to_string(),
        }
    }
}
