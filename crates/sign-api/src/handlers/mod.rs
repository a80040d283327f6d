//! Route handlers
//!
//! All HTTP request handlers organized by domain.

pub mod audit_logs;
pub mod drafts;
pub mod fields;
pub mod health;
