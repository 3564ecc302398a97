//! Wire DTOs for the warehouse REST API.
//!
//! DESIGN
//! ======
//! Field names follow the backend's camelCase JSON. Decoding is lenient
//! where the backend is loose (numeric ids, epoch-millis or ISO timestamps,
//! missing lists) and strict where the dashboard depends on an invariant:
//! quantities and capacities never decode below zero.
//!
//! Status strings become closed enums with an `Other` fallback so unknown
//! values still render instead of failing the whole list.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Inventory category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub category_id: i64,
    #[serde(default)]
    pub category_name: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl Category {
    /// Badge class: lowercase name with whitespace runs collapsed to `-`.
    #[must_use]
    pub fn css_class(&self) -> String {
        category_class(Some(&self.category_name))
    }
}

/// Badge class for an optional category name.
#[must_use]
pub fn category_class(name: Option<&str>) -> String {
    match name.map(str::trim).filter(|n| !n.is_empty()) {
        Some(name) => name.split_whitespace().map(str::to_lowercase).collect::<Vec<_>>().join("-"),
        None => "uncategorized".to_owned(),
    }
}

/// Stock-keeping entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub item_id: i64,
    #[serde(default)]
    pub item_name: String,
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default, deserialize_with = "deserialize_non_negative")]
    pub quantity: u32,
    #[serde(default)]
    pub location: String,
    #[serde(default, deserialize_with = "deserialize_timestamp")]
    pub last_updated: Option<String>,
}

impl InventoryItem {
    /// Display name of the category, `"Uncategorized"` when absent.
    #[must_use]
    pub fn category_label(&self) -> &str {
        self.category.as_ref().map_or("Uncategorized", |c| c.category_name.as_str())
    }
}

/// Shipment lifecycle status.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "String")]
pub enum ShipmentStatus {
    Pending,
    InTransit,
    Delivered,
    Cancelled,
    Other(String),
}

impl ShipmentStatus {
    pub const KNOWN: [Self; 4] = [Self::Pending, Self::InTransit, Self::Delivered, Self::Cancelled];

    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Pending => "Pending",
            Self::InTransit => "In Transit",
            Self::Delivered => "Delivered",
            Self::Cancelled => "Cancelled",
            Self::Other(raw) if raw.trim().is_empty() => "Unknown",
            Self::Other(raw) => raw,
        }
    }

    #[must_use]
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InTransit => "in-transit",
            Self::Delivered => "delivered",
            Self::Cancelled => "cancelled",
            Self::Other(_) => GENERIC_STATUS_CLASS,
        }
    }

    /// Counts toward the "active shipments" tile.
    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Pending | Self::InTransit)
    }
}

impl From<Option<String>> for ShipmentStatus {
    fn from(raw: Option<String>) -> Self {
        let raw = raw.unwrap_or_default();
        match normalize_status(&raw).as_str() {
            "pending" => Self::Pending,
            "in transit" | "intransit" | "in_transit" => Self::InTransit,
            "delivered" => Self::Delivered,
            "cancelled" | "canceled" => Self::Cancelled,
            _ => Self::Other(raw),
        }
    }
}

impl From<ShipmentStatus> for String {
    fn from(status: ShipmentStatus) -> Self {
        match status {
            ShipmentStatus::Other(raw) => raw,
            known => known.label().to_owned(),
        }
    }
}

/// Maintenance task status.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "String")]
pub enum MaintenanceStatus {
    Pending,
    InProgress,
    Completed,
    Other(String),
}

impl MaintenanceStatus {
    pub const KNOWN: [Self; 3] = [Self::Pending, Self::InProgress, Self::Completed];

    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Pending => "Pending",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
            Self::Other(raw) if raw.trim().is_empty() => "Unknown",
            Self::Other(raw) => raw,
        }
    }

    #[must_use]
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in-progress",
            Self::Completed => "completed",
            Self::Other(_) => GENERIC_STATUS_CLASS,
        }
    }
}

impl From<Option<String>> for MaintenanceStatus {
    fn from(raw: Option<String>) -> Self {
        let raw = raw.unwrap_or_default();
        match normalize_status(&raw).as_str() {
            "pending" => Self::Pending,
            "in progress" | "inprogress" | "in_progress" => Self::InProgress,
            "completed" | "complete" => Self::Completed,
            _ => Self::Other(raw),
        }
    }
}

impl From<MaintenanceStatus> for String {
    fn from(status: MaintenanceStatus) -> Self {
        match status {
            MaintenanceStatus::Other(raw) => raw,
            known => known.label().to_owned(),
        }
    }
}

/// Badge class for any status value outside the known tables.
pub const GENERIC_STATUS_CLASS: &str = "status-unknown";

fn normalize_status(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase()
}

/// Inbound or outbound shipment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shipment {
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub shipment_id: i64,
    #[serde(default, deserialize_with = "deserialize_opt_i64")]
    pub item_id: Option<i64>,
    #[serde(default)]
    pub origin: String,
    #[serde(default)]
    pub destination: String,
    #[serde(default = "unknown_shipment_status")]
    pub status: ShipmentStatus,
    #[serde(default, deserialize_with = "deserialize_timestamp")]
    pub expected_delivery_date: Option<String>,
}

fn unknown_shipment_status() -> ShipmentStatus {
    ShipmentStatus::Other(String::new())
}

/// Storage zone capacity record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpaceAllocation {
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub space_id: i64,
    #[serde(default)]
    pub zone: String,
    #[serde(default, deserialize_with = "deserialize_non_negative")]
    pub total_capacity: u32,
    #[serde(default, deserialize_with = "deserialize_non_negative")]
    pub used_capacity: u32,
    #[serde(default, deserialize_with = "deserialize_non_negative")]
    pub available_capacity: u32,
}

impl SpaceAllocation {
    /// `max(0, total - used)`, recomputed rather than trusting the wire value.
    #[must_use]
    pub fn available(&self) -> u32 {
        self.total_capacity.saturating_sub(self.used_capacity)
    }

    /// Rounded `used / total` percentage, 0 when the zone has no capacity.
    #[must_use]
    pub fn utilization_percent(&self) -> u32 {
        percent(u64::from(self.used_capacity), u64::from(self.total_capacity))
    }
}

/// `round(part / whole * 100)`, 0 for an empty whole.
#[must_use]
pub fn percent(part: u64, whole: u64) -> u32 {
    if whole == 0 {
        return 0;
    }
    let rounded = (part * 200 + whole) / (whole * 2);
    u32::try_from(rounded).unwrap_or(u32::MAX)
}

/// Scheduled equipment maintenance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceTask {
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub schedule_id: i64,
    #[serde(default, deserialize_with = "deserialize_i64_or_zero")]
    pub equipment_id: i64,
    #[serde(default)]
    pub task_description: String,
    #[serde(default, deserialize_with = "deserialize_timestamp")]
    pub scheduled_date: Option<String>,
    #[serde(default = "unknown_maintenance_status")]
    pub completion_status: MaintenanceStatus,
}

fn unknown_maintenance_status() -> MaintenanceStatus {
    MaintenanceStatus::Other(String::new())
}

/// Stored report produced by `report/generate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRecord {
    #[serde(default, deserialize_with = "deserialize_opt_i64")]
    pub report_id: Option<i64>,
    #[serde(default)]
    pub report_type: String,
    #[serde(default, deserialize_with = "deserialize_timestamp")]
    pub generated_on: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
}

// =============================================================================
// Write payloads
// =============================================================================

/// Body of `inventory/add` and `inventory/update`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_id: Option<i64>,
    pub item_name: String,
    pub category_id: Option<i64>,
    pub quantity: u32,
    pub location: String,
}

/// Body of `shipment/receive` and `shipment/dispatch/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentPayload {
    pub item_id: i64,
    pub origin: String,
    pub destination: String,
    pub status: ShipmentStatus,
    pub expected_delivery_date: String,
}

/// Body of `space/allocate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpacePayload {
    pub zone: String,
    pub total_capacity: u32,
    pub used_capacity: u32,
    pub available_capacity: u32,
}

/// Body of `maintenance/schedule` and `maintenance/update`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenancePayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule_id: Option<i64>,
    pub equipment_id: i64,
    pub task_description: String,
    pub scheduled_date: String,
    pub completion_status: MaintenanceStatus,
}

/// Body of `category/add` and `category/update/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryPayload {
    pub category_name: String,
    pub description: String,
}

/// Body of `report/generate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRequest {
    pub report_type: String,
    pub details: String,
}

// =============================================================================
// Lenient decoders
// =============================================================================

fn number_to_i64<E: serde::de::Error>(number: &serde_json::Number) -> Result<i64, E> {
    if let Some(int) = number.as_i64() {
        return Ok(int);
    }
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    if let Some(float) = number.as_f64()
        && float.is_finite()
        && float.fract() == 0.0
        && float >= i64::MIN as f64
        && float <= i64::MAX as f64
    {
        return Ok(float as i64);
    }
    Err(E::custom("expected integer-compatible number"))
}

fn value_to_opt_i64<E: serde::de::Error>(value: serde_json::Value) -> Result<Option<i64>, E> {
    match value {
        serde_json::Value::Null => Ok(None),
        serde_json::Value::Number(number) => number_to_i64(&number).map(Some),
        serde_json::Value::String(text) if text.trim().is_empty() => Ok(None),
        serde_json::Value::String(text) => text
            .trim()
            .parse::<i64>()
            .map(Some)
            .map_err(|_| E::custom(format!("expected integer, got {text:?}"))),
        _ => Err(E::custom("expected number")),
    }
}

fn deserialize_opt_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    value_to_opt_i64(value)
}

fn deserialize_i64_from_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    deserialize_opt_i64(deserializer)?.ok_or_else(|| D::Error::custom("missing id"))
}

fn deserialize_i64_or_zero<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(deserialize_opt_i64(deserializer)?.unwrap_or(0))
}

/// Negative counts clamp to 0; null decodes as 0.
fn deserialize_non_negative<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = deserialize_opt_i64(deserializer)?.unwrap_or(0).max(0);
    Ok(u32::try_from(value).unwrap_or(u32::MAX))
}

/// Timestamps arrive as epoch millis or ISO strings; both are kept as text
/// and parsed at render time.
fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Null => Ok(None),
        serde_json::Value::Number(number) => number_to_i64(&number).map(|ms| Some(ms.to_string())),
        serde_json::Value::String(text) if text.trim().is_empty() => Ok(None),
        serde_json::Value::String(text) => Ok(Some(text)),
        _ => Err(D::Error::custom("expected timestamp")),
    }
}
