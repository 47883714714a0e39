//! # Utility Functions
//!
//! ## Modules
//!
//! - **[`validation`]**: Form validation (emails, passwords, trade fields, dates)
//!
//! ## Related Modules
//!
//! - [`shared::utils`]: Display formatting (money, percentages, ids)
//! - [`crate::core`]: Core abstractions and error types

pub mod validation;
