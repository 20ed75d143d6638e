//! Utility functions shared across the application.
//!
//! - [`registrable_domain`] - Registrable name extraction from shop links

pub mod registrable_domain;
