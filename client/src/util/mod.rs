//! Utility helpers shared across dashboard modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (clock, storage,
//! downloads) and pure date math from page and component logic to improve
//! reuse and testability.

pub mod calendar;
pub mod clock;
pub mod report;
pub mod theme;
