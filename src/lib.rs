//! Subnet arithmetic core of a developer toolbox.
//!
//! Pure, synchronous IPv4/IPv6 subnet calculators, a single-level CIDR
//! splitter, and a 256-cell grid projection for visualization, dispatched
//! through a [`ToolRegistry`]. No I/O and no shared state anywhere in the
//! calculation path; every result is derived fresh from its input text.

pub mod error;
pub mod models;
pub mod output;
pub mod processing;
pub mod registry;

pub use error::ToolError;
pub use processing::{calculate_cidr_split, calculate_subnet, project_grid};
pub use registry::{Tool, ToolRegistry};
