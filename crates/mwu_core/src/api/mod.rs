//! Calls to the conversion server.
//!
//! `ApiClient` does the HTTP work and reports `ApiError`s. The coordinator
//! functions `upload` and `generate` turn every result, including transport
//! failures, into an outcome value the session can render.

mod client;
mod error;
mod generate;
mod upload;

pub use client::{ApiClient, NO_SESSION};
pub use error::{ApiError, ApiResult};
pub use generate::{generate, GENERATE_FAILED};
pub use upload::{upload, UPLOAD_FAILED};
