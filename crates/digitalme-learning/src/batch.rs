//! Refinement batch validation. Oversized batches are rejected, never truncated.

use digitalme_core::config::RefinementConfig;
use digitalme_core::errors::RefinementError;
use digitalme_core::text::{content_hash, count_words};

/// Separator between messages in the joined batch text.
pub const MESSAGE_SEPARATOR: &str = "\n\n";

/// A validated batch, joined into one text.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedBatch {
    pub text: String,
    pub words: u64,
    /// blake3 hex digest of `text`.
    pub hash: String,
}

/// Check `batch` against the configured limits and join it.
pub fn prepare(batch: &[String], config: &RefinementConfig) -> Result<PreparedBatch, RefinementError> {
    if batch.is_empty() {
        return Err(invalid("batch is empty".to_string()));
    }
    if batch.len() > config.max_batch_messages {
        return Err(invalid(format!(
            "batch has {} messages, limit is {}",
            batch.len(),
            config.max_batch_messages
        )));
    }

    let mut total_chars = 0usize;
    for (i, message) in batch.iter().enumerate() {
        let chars = message.chars().count();
        if message.trim().is_empty() {
            return Err(invalid(format!("message {i} is empty")));
        }
        if chars > config.max_message_chars {
            return Err(invalid(format!(
                "message {i} has {chars} characters, limit is {}",
                config.max_message_chars
            )));
        }
        total_chars += chars;
    }
    if total_chars > config.max_batch_chars {
        return Err(invalid(format!(
            "batch has {total_chars} characters, limit is {}",
            config.max_batch_chars
        )));
    }

    let text = batch.join(MESSAGE_SEPARATOR);
    Ok(PreparedBatch {
        words: count_words(&text),
        hash: content_hash(&text),
        text,
    })
}

fn invalid(reason: String) -> RefinementError {
    RefinementError::InvalidBatch { reason }
}
