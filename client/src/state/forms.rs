//! Form drafts: the raw text behind each modal's inputs.
//!
//! Inputs are bound to plain strings so half-typed values survive
//! re-renders. `to_payload` is the single place those strings are trimmed,
//! coerced to integers and validated; any failure is an
//! `ApiError::Validation` raised before a request is built.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

use crate::net::error::ApiError;
use crate::net::types::{
    Category, CategoryPayload, InventoryItem, InventoryPayload, MaintenancePayload, MaintenanceStatus,
    MaintenanceTask, Shipment, ShipmentPayload, ShipmentStatus, SpacePayload,
};
use crate::state::modal::ModalKind;
use crate::util::clock;

/// Zones offered by the allocation form.
pub const ZONE_OPTIONS: [&str; 4] = ["A", "B", "C", "D"];

fn invalid(message: &str) -> ApiError {
    ApiError::Validation(message.to_owned())
}

/// Whole, non-negative count. Blank reads as 0.
fn parse_count(raw: &str, message: &str) -> Result<u32, ApiError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(0);
    }
    raw.parse::<u32>().map_err(|_| invalid(message))
}

/// Lenient count used for live previews: anything unparsable is 0.
fn lenient_count(raw: &str) -> u32 {
    raw.trim().parse::<i64>().ok().map_or(0, |v| u32::try_from(v.max(0)).unwrap_or(u32::MAX))
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ItemDraft {
    pub name: String,
    /// Selected category id, empty for none.
    pub category_id: String,
    pub quantity: String,
    pub location: String,
}

impl ItemDraft {
    #[must_use]
    pub fn from_item(item: &InventoryItem) -> Self {
        Self {
            name: item.item_name.clone(),
            category_id: item.category.as_ref().map(|c| c.category_id.to_string()).unwrap_or_default(),
            quantity: item.quantity.to_string(),
            location: item.location.clone(),
        }
    }

    /// # Errors
    ///
    /// `Validation` for a blank name, a non-integer or negative quantity, or
    /// a malformed category id.
    pub fn to_payload(&self, editing: Option<i64>) -> Result<InventoryPayload, ApiError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(invalid("Item name is required"));
        }
        if self.quantity.trim().is_empty() {
            return Err(invalid("Quantity is required"));
        }
        let quantity = parse_count(&self.quantity, "Quantity must be a non-negative whole number")?;
        let category_id = match self.category_id.trim() {
            "" => None,
            raw => Some(raw.parse::<i64>().map_err(|_| invalid("Invalid category"))?),
        };
        Ok(InventoryPayload {
            item_id: editing,
            item_name: name.to_owned(),
            category_id,
            quantity,
            location: self.location.trim().to_owned(),
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShipmentDraft {
    pub item_id: String,
    pub origin: String,
    pub destination: String,
    /// Status label as shown in the select.
    pub status: String,
    /// `YYYY-MM-DD`, blank for "now".
    pub expected_delivery_date: String,
}

impl Default for ShipmentDraft {
    fn default() -> Self {
        Self {
            item_id: String::new(),
            origin: String::new(),
            destination: String::new(),
            status: ShipmentStatus::Pending.label().to_owned(),
            expected_delivery_date: String::new(),
        }
    }
}

impl ShipmentDraft {
    #[must_use]
    pub fn from_shipment(shipment: &Shipment) -> Self {
        Self {
            item_id: shipment.item_id.map(|id| id.to_string()).unwrap_or_default(),
            origin: shipment.origin.clone(),
            destination: shipment.destination.clone(),
            status: shipment.status.label().to_owned(),
            expected_delivery_date: shipment
                .expected_delivery_date
                .as_deref()
                .and_then(clock::parse_date)
                .map(clock::iso_date)
                .unwrap_or_default(),
        }
    }

    /// `now_iso` fills a blank delivery date.
    ///
    /// # Errors
    ///
    /// `Validation` when the item id is blank or not an integer.
    pub fn to_payload(&self, now_iso: &str) -> Result<ShipmentPayload, ApiError> {
        let raw_item = self.item_id.trim();
        if raw_item.is_empty() {
            return Err(invalid("Item ID is required"));
        }
        let item_id = raw_item.parse::<i64>().map_err(|_| invalid("Item ID must be a number"))?;
        let status = match self.status.trim() {
            "" => ShipmentStatus::Pending,
            raw => ShipmentStatus::from(Some(raw.to_owned())),
        };
        let expected_delivery_date = match self.expected_delivery_date.trim() {
            "" => now_iso.to_owned(),
            raw => raw.to_owned(),
        };
        Ok(ShipmentPayload {
            item_id,
            origin: self.origin.trim().to_owned(),
            destination: self.destination.trim().to_owned(),
            status,
            expected_delivery_date,
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SpaceDraft {
    pub zone: String,
    pub total_capacity: String,
    pub used_capacity: String,
}

impl SpaceDraft {
    /// Live `max(0, total - used)`; unparsable inputs count as 0.
    #[must_use]
    pub fn available(&self) -> u32 {
        lenient_count(&self.total_capacity).saturating_sub(lenient_count(&self.used_capacity))
    }

    /// # Errors
    ///
    /// `Validation` when no zone is chosen or a capacity is not a whole number.
    pub fn to_payload(&self) -> Result<SpacePayload, ApiError> {
        let zone = self.zone.trim();
        if zone.is_empty() {
            return Err(invalid("Please select a zone"));
        }
        let total_capacity = parse_count(&self.total_capacity, "Total capacity must be a non-negative whole number")?;
        let used_capacity = parse_count(&self.used_capacity, "Used capacity must be a non-negative whole number")?;
        Ok(SpacePayload {
            zone: zone.to_owned(),
            total_capacity,
            used_capacity,
            available_capacity: total_capacity.saturating_sub(used_capacity),
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MaintenanceDraft {
    pub equipment_id: String,
    pub description: String,
    /// `YYYY-MM-DD`.
    pub scheduled_date: String,
    pub status: String,
}

impl Default for MaintenanceDraft {
    fn default() -> Self {
        Self {
            equipment_id: String::new(),
            description: String::new(),
            scheduled_date: String::new(),
            status: MaintenanceStatus::Pending.label().to_owned(),
        }
    }
}

impl MaintenanceDraft {
    #[must_use]
    pub fn from_task(task: &MaintenanceTask) -> Self {
        Self {
            equipment_id: task.equipment_id.to_string(),
            description: task.task_description.clone(),
            scheduled_date: task
                .scheduled_date
                .as_deref()
                .and_then(clock::parse_date)
                .map(clock::iso_date)
                .unwrap_or_default(),
            status: task.completion_status.label().to_owned(),
        }
    }

    /// # Errors
    ///
    /// `Validation` for a missing or non-numeric equipment id or a missing
    /// or malformed date.
    pub fn to_payload(&self, editing: Option<i64>) -> Result<MaintenancePayload, ApiError> {
        let raw_equipment = self.equipment_id.trim();
        if raw_equipment.is_empty() {
            return Err(invalid("Equipment ID is required"));
        }
        let equipment_id = raw_equipment.parse::<i64>().map_err(|_| invalid("Equipment ID must be a number"))?;
        let date = self.scheduled_date.trim();
        if date.is_empty() {
            return Err(invalid("Scheduled date is required"));
        }
        let scheduled = clock::parse_iso_date(date).ok_or_else(|| invalid("Scheduled date is invalid"))?;
        let completion_status = match self.status.trim() {
            "" => MaintenanceStatus::Pending,
            raw => MaintenanceStatus::from(Some(raw.to_owned())),
        };
        Ok(MaintenancePayload {
            schedule_id: editing,
            equipment_id,
            task_description: self.description.trim().to_owned(),
            scheduled_date: clock::iso_date(scheduled),
            completion_status,
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CategoryDraft {
    pub name: String,
    pub description: String,
}

impl CategoryDraft {
    #[must_use]
    pub fn from_category(category: &Category) -> Self {
        Self {
            name: category.category_name.clone(),
            description: category.description.clone().unwrap_or_default(),
        }
    }

    /// # Errors
    ///
    /// `Validation` for a blank name.
    pub fn to_payload(&self) -> Result<CategoryPayload, ApiError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(invalid("Category name is required"));
        }
        Ok(CategoryPayload { category_name: name.to_owned(), description: self.description.trim().to_owned() })
    }
}

/// One draft per form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormDrafts {
    pub item: ItemDraft,
    pub shipment: ShipmentDraft,
    pub space: SpaceDraft,
    pub maintenance: MaintenanceDraft,
    pub category: CategoryDraft,
}

impl FormDrafts {
    pub fn reset(&mut self, kind: ModalKind) {
        match kind {
            ModalKind::Item => self.item = ItemDraft::default(),
            ModalKind::Shipment => self.shipment = ShipmentDraft::default(),
            ModalKind::Space => self.space = SpaceDraft::default(),
            ModalKind::Maintenance => self.maintenance = MaintenanceDraft::default(),
            ModalKind::Category => self.category = CategoryDraft::default(),
        }
    }
}
