//! # jsonpool Core
//!
//! Core types for the jsonpool embedded document store: the unified error
//! type, the JSON document model, and dotted-path addressing.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod document;
pub mod error;
pub mod path;

pub use document::{from_json_bytes, to_json_bytes, Document};
pub use error::{Error, Result};
