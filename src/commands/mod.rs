//! Command implementations.
//!
//! CHANGELOG:
//! - 10/18/2026 - Initial module structure

pub mod inventory;
pub mod search;
