//! Unified SDK error types.

use crate::shared::Currency;
use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Form error: {0}")]
    Form(#[from] FormError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

/// HTTP-layer errors.
#[derive(Error, Debug)]
pub enum HttpError {
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Server error {status}: {body}")]
    ServerError { status: u16, body: String },

    #[error("Rate limited (retry after {retry_after_ms:?}ms)")]
    RateLimited { retry_after_ms: Option<u64> },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Timeout")]
    Timeout,

    #[error("Max retries exceeded after {attempts} attempts: {last_error}")]
    MaxRetriesExceeded { attempts: u32, last_error: String },
}

/// Swap form errors.
///
/// The `Display` text is the message shown to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// The amount buffer rejected an edit that is not a non-negative decimal.
    #[error("Please enter a valid number.")]
    InvalidAmount { input: String },

    /// Missing or identical currencies.
    #[error("Please select different currencies for send and receive.")]
    SelectionConflict,

    /// The currency is not among the options offered for the slot.
    #[error("{0} is not available for this selection.")]
    UnavailableCurrency(Currency),

    #[error("Please enter an amount to send.")]
    MissingAmount,
}
