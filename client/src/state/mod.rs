//! Client-side state containers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `dashboard` aggregates fetched collections and overlays, `modal` and
//! `forms` back the edit dialogs, `notify` the toasts and spinner, and `ui`
//! the navigation and filter chrome.

pub mod dashboard;
pub mod forms;
pub mod modal;
pub mod notify;
pub mod ui;
