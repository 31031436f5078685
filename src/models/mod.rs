//! Domain models for the subnet toolbox.
//!
//! - [`ParsedAddress`] and [`AddressFamily`] - validated textual input
//! - [`ipv4`] / [`ipv6`] - per-family subnet arithmetic primitives
//! - [`SubnetResult`] and [`SplitResult`] - computed value objects

mod address;
pub mod ipv4;
pub mod ipv6;
mod subnet;

// Re-export public types
pub use address::{split_cidr, AddressFamily, ParsedAddress};
pub use ipv4::Ipv4;
pub use subnet::{SplitResult, SubnetResult};
