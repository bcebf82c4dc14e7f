//! API Module
//!
//! Surface exposed to the host page.
//!
//! Structure:
//! - commands.rs: exported functions and page-level mounting

pub mod commands;

pub use commands::*;
