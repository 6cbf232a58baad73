//! GearGuard AI Advisory Connector
//!
//! One-shot request/response bridge to the Gemini text-generation API.
//! The portal hands it a free-text prompt and eventually gets a free-text
//! reply back; on any failure the reply is a fixed calibration message
//! rather than an error. No retries, no cancellation; concurrent calls are
//! independent of each other.

use thiserror::Error;

pub mod client;

pub use client::{AdvisoryClient, AdvisoryConfig, FALLBACK_REPLY};

#[derive(Error, Debug)]
pub enum AdvisoryError {
    #[error("advisory request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("advisory response carried no usable candidate text")]
    EmptyResponse,

    #[error("missing API key: set GEMINI_API_KEY")]
    MissingApiKey,
}

pub type Result<T> = std::result::Result<T, AdvisoryError>;
