//! Toast queue and the global loading indicator.
//!
//! DESIGN
//! ======
//! Toast ids increase monotonically for the life of the page so a dismiss
//! timer started for one toast can never close a newer one. The loading
//! indicator is a nesting counter: overlapping operations each `begin` and
//! `end`, and the spinner shows while any is outstanding.

#[cfg(test)]
#[path = "notify_test.rs"]
mod notify_test;

/// Milliseconds a toast stays up before auto-dismiss.
pub const TOAST_LIFETIME_MS: u32 = 5_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Warning,
    Info,
}

impl ToastKind {
    /// Font Awesome icon name.
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Success => "check-circle",
            Self::Error => "exclamation-circle",
            Self::Warning => "exclamation-triangle",
            Self::Info => "info-circle",
        }
    }

    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Visible toasts, oldest first.
#[derive(Clone, Debug, Default)]
pub struct Notifications {
    pub toasts: Vec<Toast>,
    next_id: u64,
}

impl Notifications {
    /// Queue a toast and return its id.
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.toasts.push(Toast { id, kind, message: message.into() });
        id
    }

    pub fn success(&mut self, message: impl Into<String>) -> u64 {
        self.push(ToastKind::Success, message)
    }

    pub fn error(&mut self, message: impl Into<String>) -> u64 {
        self.push(ToastKind::Error, message)
    }

    pub fn warning(&mut self, message: impl Into<String>) -> u64 {
        self.push(ToastKind::Warning, message)
    }

    /// Remove a toast. Unknown ids are ignored.
    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }

    #[must_use]
    pub fn latest(&self) -> Option<&Toast> {
        self.toasts.last()
    }
}

/// Nesting counter behind the full-page spinner.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoadingIndicator {
    depth: u32,
}

impl LoadingIndicator {
    pub fn begin(&mut self) {
        self.depth += 1;
    }

    /// Unbalanced calls saturate at zero.
    pub fn end(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    #[must_use]
    pub fn is_visible(self) -> bool {
        self.depth > 0
    }
}
