//! Core types for depgraph
//!
//! This module holds the error system shared by every other module:
//! - [`DepgraphError`] - enumerated error types covering all failure modes
//! - [`ValidationError`] / [`RetrievalError`] - the two error tiers
//! - [`ErrorContext`] - user-friendly wrapper with details and suggestions
//! - [`user_friendly_error`] - convert any error to the user-friendly format

pub mod error;

pub use error::{
    DepgraphError, ErrorContext, RetrievalError, ValidationError, error_chain_message,
    user_friendly_error,
};
