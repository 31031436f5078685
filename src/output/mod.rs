//! Output formatting.
//!
//! Renders tool results for humans (terminal) or machines (JSON). The
//! calculation layer never formats; everything user-facing happens here.

pub mod json;
pub mod terminal;
