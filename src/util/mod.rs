//! Shared utilities (hex formatting, audit logging).

#[cfg(feature = "cli")]
pub mod audit;
pub mod hex;
