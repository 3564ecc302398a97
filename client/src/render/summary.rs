//! Dashboard tiles, quick stats and the recent-activity feed.
//!
//! DESIGN
//! ======
//! Every tile reduces one snapshot from `DashboardSummary`. A snapshot that
//! failed to load degrades only its own tiles to a neutral fallback ("0",
//! "0%", "No data"); the rest of the dashboard still renders.

#[cfg(test)]
#[path = "summary_test.rs"]
mod summary_test;

use time::Date;

use super::{Placeholder, RowKind, format_count};
use crate::net::types::{MaintenanceStatus, SpaceAllocation, percent};
use crate::state::dashboard::{DashboardSummary, LoadState};
use crate::util::clock;

/// One number plus its caption.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tile {
    pub label: &'static str,
    pub icon: &'static str,
    pub value: String,
    pub caption: String,
}

const PENDING_VALUE: &str = "--";
const PENDING_CAPTION: &str = "Loading...";

fn tile(label: &'static str, icon: &'static str, value: impl Into<String>, caption: impl Into<String>) -> Tile {
    Tile { label, icon, value: value.into(), caption: caption.into() }
}

/// Overall utilization across all zones, `None` when there are no zones.
#[must_use]
pub fn overall_utilization(spaces: &[SpaceAllocation]) -> Option<u32> {
    if spaces.is_empty() {
        return None;
    }
    let total: u64 = spaces.iter().map(|s| u64::from(s.total_capacity)).sum();
    let used: u64 = spaces.iter().map(|s| u64::from(s.used_capacity)).sum();
    Some(percent(used, total))
}

/// Caption for the dashboard utilization tile.
#[must_use]
pub fn utilization_band(percent: u32) -> &'static str {
    match percent {
        p if p > 80 => "High usage",
        p if p > 50 => "Optimal range",
        _ => "Low usage",
    }
}

/// Short caption used in quick stats.
#[must_use]
pub fn utilization_level(percent: u32) -> &'static str {
    match percent {
        p if p > 80 => "High",
        p if p > 50 => "Optimal",
        _ => "Low",
    }
}

/// Count tile: loading marker, count, or "0" on failure.
fn count_tile<T>(
    label: &'static str,
    icon: &'static str,
    load: &LoadState<T>,
    count: impl Fn(&[T]) -> usize,
    caption: impl Fn(usize) -> String,
) -> Tile {
    match load {
        LoadState::Idle | LoadState::Loading => tile(label, icon, PENDING_VALUE, PENDING_CAPTION),
        LoadState::Failed(_) => tile(label, icon, "0", "No data"),
        LoadState::Loaded(items) => {
            let n = count(items);
            tile(label, icon, format_count(n), caption(n))
        }
    }
}

fn utilization_tile(label: &'static str, load: &LoadState<SpaceAllocation>, band: fn(u32) -> &'static str, empty: &str) -> Tile {
    let icon = "warehouse";
    match load {
        LoadState::Idle | LoadState::Loading => tile(label, icon, PENDING_VALUE, PENDING_CAPTION),
        LoadState::Failed(_) => tile(label, icon, "0%", "No data"),
        LoadState::Loaded(spaces) => match overall_utilization(spaces) {
            Some(p) => tile(label, icon, format!("{p}%"), band(p)),
            None => tile(label, icon, "0%", empty),
        },
    }
}

/// The four headline tiles.
#[must_use]
pub fn summary_tiles(summary: &DashboardSummary) -> [Tile; 4] {
    [
        count_tile("Total Items", "boxes", &summary.inventory, <[_]>::len, |_| "Total items in system".to_owned()),
        count_tile(
            "Active Shipments",
            "shipping-fast",
            &summary.shipments,
            |list| list.iter().filter(|s| s.status.is_active()).count(),
            |_| "Active shipments".to_owned(),
        ),
        utilization_tile("Space Utilization", &summary.spaces, utilization_band, "No space data"),
        count_tile(
            "Maintenance Due",
            "tools",
            &summary.maintenance,
            |list| list.iter().filter(|m| m.completion_status == MaintenanceStatus::Pending).count(),
            |n| format!("{n} pending tasks"),
        ),
    ]
}

/// Secondary tiles; `today` picks the month for expected shipments.
#[must_use]
pub fn quick_stats(summary: &DashboardSummary, today: Date) -> [Tile; 4] {
    [
        count_tile("Total Items", "boxes", &summary.inventory, <[_]>::len, |_| "Total items".to_owned()),
        count_tile(
            "Shipments This Month",
            "shipping-fast",
            &summary.shipments,
            |list| {
                list.iter()
                    .filter_map(|s| s.expected_delivery_date.as_deref().and_then(clock::parse_date))
                    .filter(|d| d.year() == today.year() && d.month() == today.month())
                    .count()
            },
            |_| "This month".to_owned(),
        ),
        utilization_tile("Space Utilization", &summary.spaces, utilization_level, "No data"),
        count_tile(
            "Completed Maintenance",
            "check-circle",
            &summary.maintenance,
            |list| list.iter().filter(|m| m.completion_status == MaintenanceStatus::Completed).count(),
            |_| "Completed".to_owned(),
        ),
    ]
}

/// One line of the recent-activity feed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActivityEntry {
    pub icon: &'static str,
    pub text: String,
    pub time: String,
    at_ms: Option<i64>,
}

const ACTIVITY_LIMIT: usize = 3;

fn is_pending<T>(load: &LoadState<T>) -> bool {
    matches!(load, LoadState::Idle | LoadState::Loading)
}

/// Recent activity: up to two items, two shipments and one maintenance
/// task, newest first, capped at three. Entries without a parsable time
/// sort last.
///
/// # Errors
///
/// Returns the placeholder to show instead when the snapshots are still
/// loading, all failed, or hold nothing.
pub fn activity(summary: &DashboardSummary, now_ms: i64) -> Result<Vec<ActivityEntry>, Placeholder> {
    if is_pending(&summary.inventory) || is_pending(&summary.shipments) || is_pending(&summary.maintenance) {
        return Err(Placeholder { kind: RowKind::Loading, message: "Loading recent activity...".to_owned() });
    }

    let entry = |icon: &'static str, text: String, raw: Option<&str>| {
        let at_ms = raw.and_then(clock::parse_millis);
        ActivityEntry {
            icon,
            text,
            time: at_ms.map_or_else(|| "Unknown time".to_owned(), |ms| clock::format_time_ago(ms, now_ms)),
            at_ms,
        }
    };

    let mut feed: Vec<ActivityEntry> = Vec::new();
    feed.extend(summary.inventory.items().iter().take(2).map(|item| {
        entry("plus", format!("Item: {} (Qty: {})", item.item_name, item.quantity), item.last_updated.as_deref())
    }));
    feed.extend(summary.shipments.items().iter().take(2).map(|s| {
        entry(
            "shipping-fast",
            format!("Shipment: {} - {}", s.shipment_id, s.status.label()),
            s.expected_delivery_date.as_deref(),
        )
    }));
    feed.extend(summary.maintenance.items().iter().take(1).map(|m| {
        entry("tools", format!("Maintenance: {}", m.task_description), m.scheduled_date.as_deref())
    }));

    feed.sort_by(|a, b| b.at_ms.cmp(&a.at_ms));
    feed.truncate(ACTIVITY_LIMIT);

    if feed.is_empty() {
        let all_failed =
            summary.inventory.is_failed() && summary.shipments.is_failed() && summary.maintenance.is_failed();
        return Err(if all_failed {
            Placeholder { kind: RowKind::Error, message: "Failed to load activity".to_owned() }
        } else {
            Placeholder { kind: RowKind::NoData, message: "No recent activity".to_owned() }
        });
    }
    Ok(feed)
}
