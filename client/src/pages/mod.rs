//! Route-level page components.

pub mod dashboard;
