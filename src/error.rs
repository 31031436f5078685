//! Error taxonomy for the toolbox core.
//!
//! Every core function is pure and fails by returning one of these variants;
//! nothing is logged, retried, or silently downgraded to a default result.

use thiserror::Error;

/// Failures the subnet tools can report.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ToolError {
    /// The text is not a valid IPv4 or IPv6 address.
    #[error("invalid IP address: {0}")]
    InvalidAddress(String),

    /// The input is not in the required `address/prefix` form.
    #[error("invalid CIDR format (e.g. 192.168.1.0/24): {0}")]
    InvalidFormat(String),

    /// The prefix is already at the maximum for the address family.
    #[error("cannot split /{0}: block is already a single address")]
    CannotSplit(u8),

    /// The operation is recognised but deliberately not implemented.
    #[error("unsupported operation: {0}")]
    Unsupported(String),

    /// No tool is registered under the requested key.
    #[error("unknown tool: {0}")]
    UnknownTool(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ToolError::InvalidAddress("300.1.1.1".to_string()).to_string(),
            "invalid IP address: 300.1.1.1"
        );
        assert_eq!(
            ToolError::CannotSplit(32).to_string(),
            "cannot split /32: block is already a single address"
        );
        assert_eq!(
            ToolError::UnknownTool("whois".to_string()).to_string(),
            "unknown tool: whois"
        );
    }
}
