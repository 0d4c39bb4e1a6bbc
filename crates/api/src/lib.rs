//! HTTP boundary with the game server.
//!
//! [`GameApi`] is the catalog of typed request/response operations, one per
//! server capability. [`HttpApi`] is the production implementation over a
//! single configured base URL; [`MockApi`] is an in-memory, call-recording
//! stand-in for tests of everything above the transport.
//!
//! Contract per operation: accept a small set of parameters, issue exactly
//! one HTTP request, return the decoded response. No retries, no batching,
//! no caching; failures propagate to the caller as [`ApiError`].
pub mod client;
pub mod error;
pub mod mock;
pub mod traits;

pub use client::HttpApi;
pub use error::{ApiError, Result};
pub use mock::MockApi;
pub use traits::GameApi;
