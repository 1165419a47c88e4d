//! # SNS Shared
//!
//! Wire types of the HTTP API: request and response DTOs plus the response envelopes.
//! Has no dependency on the core so clients can reuse it as-is.

pub mod dto;
pub mod response;

pub use response::{ApiResponse, ErrorResponse};
