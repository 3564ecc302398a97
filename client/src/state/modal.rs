//! Modal state machine and delete confirmation.
//!
//! DESIGN
//! ======
//! Exactly one form modal can be open at a time: `Closed` or
//! `Open { kind, mode }`. The confirmation dialog is a separate overlay so
//! it can sit on top of the category manager when a category is deleted
//! from inside it. `Edit(id)` is the only place an editing id lives; closing
//! the modal drops it.

#[cfg(test)]
#[path = "modal_test.rs"]
mod modal_test;

/// Which form a modal hosts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ModalKind {
    Item,
    Shipment,
    Space,
    Maintenance,
    Category,
}

/// Create a new record or edit an existing one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormMode {
    #[default]
    Create,
    Edit(i64),
}

impl FormMode {
    #[must_use]
    pub fn editing_id(self) -> Option<i64> {
        match self {
            Self::Create => None,
            Self::Edit(id) => Some(id),
        }
    }
}

/// Header text for a modal.
#[must_use]
pub fn modal_title(kind: ModalKind, mode: FormMode) -> &'static str {
    match (kind, mode) {
        (ModalKind::Item, FormMode::Create) => "Add New Item",
        (ModalKind::Item, FormMode::Edit(_)) => "Edit Item",
        (ModalKind::Shipment, FormMode::Create) => "New Shipment",
        (ModalKind::Shipment, FormMode::Edit(_)) => "Edit Shipment",
        (ModalKind::Space, _) => "Allocate Space",
        (ModalKind::Maintenance, FormMode::Create) => "Schedule Maintenance",
        (ModalKind::Maintenance, FormMode::Edit(_)) => "Edit Maintenance",
        (ModalKind::Category, _) => "Manage Categories",
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModalState {
    #[default]
    Closed,
    Open { kind: ModalKind, mode: FormMode },
}

impl ModalState {
    pub fn open(&mut self, kind: ModalKind, mode: FormMode) {
        *self = Self::Open { kind, mode };
    }

    pub fn close(&mut self) {
        *self = Self::Closed;
    }

    #[must_use]
    pub fn is_open(self) -> bool {
        matches!(self, Self::Open { .. })
    }

    #[must_use]
    pub fn kind(self) -> Option<ModalKind> {
        match self {
            Self::Closed => None,
            Self::Open { kind, .. } => Some(kind),
        }
    }

    #[must_use]
    pub fn mode(self) -> FormMode {
        match self {
            Self::Closed => FormMode::Create,
            Self::Open { mode, .. } => mode,
        }
    }

    #[must_use]
    pub fn editing_id(self) -> Option<i64> {
        self.mode().editing_id()
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Closed => "",
            Self::Open { kind, mode } => modal_title(kind, mode),
        }
    }

    /// Switch the open modal between create and edit without closing it.
    pub fn set_mode(&mut self, mode: FormMode) {
        if let Self::Open { kind, .. } = *self {
            *self = Self::Open { kind, mode };
        }
    }
}

/// Record a confirmed delete will remove.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DeleteTarget {
    Inventory { id: i64, name: String },
    Shipment { id: i64 },
    Category { id: i64 },
    Space { id: i64 },
}

impl DeleteTarget {
    #[must_use]
    pub fn prompt(&self) -> String {
        match self {
            Self::Inventory { name, .. } => format!("Are you sure you want to delete \"{name}\"?"),
            Self::Shipment { id } => format!("Are you sure you want to delete shipment \"{id}\"?"),
            Self::Category { .. } => "Are you sure you want to delete this category?".to_owned(),
            Self::Space { id } => format!("Are you sure you want to free space allocation #{id}?"),
        }
    }

    #[must_use]
    pub fn success_message(&self) -> String {
        match self {
            Self::Inventory { name, .. } => format!("Item \"{name}\" deleted successfully"),
            Self::Shipment { id } => format!("Shipment \"{id}\" deleted successfully"),
            Self::Category { .. } => "Category deleted successfully".to_owned(),
            Self::Space { .. } => "Space freed successfully".to_owned(),
        }
    }

    #[must_use]
    pub fn failure_message(&self) -> &'static str {
        match self {
            Self::Inventory { .. } => "Failed to delete item",
            Self::Shipment { .. } => "Failed to delete shipment",
            Self::Category { .. } => "Failed to delete category",
            Self::Space { .. } => "Failed to free space",
        }
    }
}

pub const CONFIRM_TITLE: &str = "Confirm Action";

/// Pending confirmation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfirmRequest {
    pub message: String,
    pub target: DeleteTarget,
}

impl ConfirmRequest {
    #[must_use]
    pub fn new(target: DeleteTarget) -> Self {
        Self { message: target.prompt(), target }
    }
}
