//! Maintenance task cards.

#[cfg(test)]
#[path = "maintenance_test.rs"]
mod maintenance_test;

use super::{Badge, Entry, PlaceholderText, entries};
use crate::net::types::MaintenanceTask;
use crate::state::dashboard::LoadState;
use crate::util::clock;

pub const TEXT: PlaceholderText = PlaceholderText {
    loading: "Loading maintenance tasks...",
    failed: "Failed to load maintenance data",
    empty: "No maintenance tasks found",
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TaskCard {
    pub key: i64,
    pub heading: String,
    pub description: String,
    pub date: String,
    pub badge: Badge,
}

#[must_use]
pub fn card(task: &MaintenanceTask) -> TaskCard {
    TaskCard {
        key: task.schedule_id,
        heading: format!("Equipment #{} - {}", task.equipment_id, task.task_description),
        description: task.task_description.clone(),
        date: clock::display_date(task.scheduled_date.as_deref()),
        badge: Badge {
            label: task.completion_status.label().to_owned(),
            class: format!("status-badge {}", task.completion_status.css_class()),
        },
    }
}

#[must_use]
pub fn cards(load: &LoadState<MaintenanceTask>) -> Vec<Entry<TaskCard>> {
    entries(load, &TEXT, card)
}
