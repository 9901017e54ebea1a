//! Common Types.
//!
//! Shared building blocks used across the directory:
//! 1. **Addresses:** A strong type for byte addresses and block alignment helpers.
//! 2. **Errors:** Configuration faults surfaced while building a directory.

/// Byte address type and block-alignment helpers.
pub mod addr;
/// Configuration fault definitions.
pub mod error;

pub use addr::Addr;
pub use error::AtdError;
