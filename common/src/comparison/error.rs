use thiserror::Error;

use super::slot::SLOT_COUNT;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComparisonError {
    #[error("slot index {index} is out of range (expected 0..{max})", max = SLOT_COUNT)]
    SlotOutOfRange { index: usize },
}

/// Failure talking to a remote gateway.
///
/// Business failures (`success: false`) are not errors at this level; they
/// travel inside the response envelope.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("unexpected HTTP status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    #[error("could not decode response: {0}")]
    Decode(String),
}
