//! # tensor-core
//!
//! Core request machinery shared by every Tensor API client crate.
//!
//! Every resource method runs the same fixed pipeline: the request record is
//! validated locally, encoded into query parameters, sent as an HTTP `GET`, and
//! the outcome is classified into a small error taxonomy.
//!
//! ## Modules
//!
//! - [`error`] - Error taxonomy and HTTP status classification
//! - [`query`] - Query parameter set and the serde-driven request encoder
//! - [`validate`] - The [`Validate`] contract and shared rule helpers
//! - [`config`] - Client and transport configuration
//! - [`context`] - Per-call deadlines and cancellation
//! - [`transport`] - The [`Transport`] seam and its `reqwest` implementation
//! - [`pipeline`] - The validate → encode → dispatch composition
//! - [`types`] - Response shapes shared by several API surfaces

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod context;
pub mod error;
pub mod pipeline;
pub mod query;
pub mod transport;
pub mod types;
pub mod validate;

// Re-export commonly used types
pub use config::{TensorClientConfig, TransportConfig};
pub use context::{CancelToken, RequestContext};
pub use error::{
    ApplicationFailure, EncodingError, Error, NetworkCause, NetworkFailure, Result,
    ValidationError,
};
pub use pipeline::{CallState, RequestPipeline};
pub use query::QueryParams;
pub use transport::{ApiResponse, HttpTransport, Transport};
pub use types::{Transaction, TransactionsResponse};
pub use validate::Validate;
