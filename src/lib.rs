//! Helpers for translating between client-side configuration objects and
//! the wire-format request shapes of a JSON-over-HTTP API: duration string
//! conversion, conditional field transfer, and field masks for PATCH
//! requests.

pub mod duration;
pub mod error;
pub mod fields;
pub mod mask;
pub mod typed;

pub use error::{Error, Result};
