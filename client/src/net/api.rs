//! Typed client for the warehouse REST API.
//!
//! `ApiClient::call` is the single choke point: it resolves the URL, encodes
//! the body for POST/PUT, maps non-2xx statuses to `ApiError::Http` and
//! treats 204 or an empty body as "no content". The typed helpers below it
//! decode those payloads into the entities in `types`.
//!
//! ERROR HANDLING
//! ==============
//! Every helper returns `Result<_, ApiError>`; callers in the controller turn
//! failures into toasts and fallback rows, so nothing here panics.

#![allow(clippy::missing_errors_doc)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::error::ApiError;
use super::transport::{HttpRequest, Method, Transport};
use super::types::{
    Category, CategoryPayload, InventoryItem, InventoryPayload, MaintenancePayload, MaintenanceTask, ReportRecord,
    ReportRequest, Shipment, ShipmentPayload, SpaceAllocation, SpacePayload,
};

/// API base used when the page does not advertise one.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";

/// `<meta name=...>` the SSR shell uses to advertise the API base.
pub const API_BASE_META: &str = "lwms-api-base";

pub const INVENTORY_ADD: &str = "/inventory/add";
pub const INVENTORY_UPDATE: &str = "/inventory/update";
pub const INVENTORY_VIEW: &str = "/inventory/view";
pub const CATEGORY_ALL: &str = "/category/all";
pub const CATEGORY_ADD: &str = "/category/add";
pub const SHIPMENT_RECEIVE: &str = "/shipment/receive";
pub const SHIPMENT_ALL: &str = "/shipment/all";
pub const SPACE_VIEW: &str = "/space/view";
pub const SPACE_ALLOCATE: &str = "/space/allocate";
pub const MAINTENANCE_SCHEDULE: &str = "/maintenance/schedule";
pub const MAINTENANCE_UPDATE: &str = "/maintenance/update";
pub const MAINTENANCE_VIEW: &str = "/maintenance/view";
pub const REPORT_GENERATE: &str = "/report/generate";
pub const REPORT_ALL: &str = "/report/all";

fn inventory_remove_endpoint(id: i64) -> String {
    format!("/inventory/remove/{id}")
}

fn category_update_endpoint(id: i64) -> String {
    format!("/category/update/{id}")
}

fn category_delete_endpoint(id: i64) -> String {
    format!("/category/delete/{id}")
}

fn category_get_endpoint(id: i64) -> String {
    format!("/category/{id}")
}

fn shipment_dispatch_endpoint(id: i64) -> String {
    format!("/shipment/dispatch/{id}")
}

fn shipment_delete_endpoint(id: i64) -> String {
    format!("/shipment/delete/{id}")
}

fn space_free_endpoint(id: i64) -> String {
    format!("/space/free/{id}")
}

fn maintenance_get_endpoint(id: i64) -> String {
    format!("/maintenance/get/{id}")
}

fn report_get_endpoint(id: i64) -> String {
    format!("/report/get/{id}")
}

/// Where the REST API lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    /// Build from a base URL, dropping trailing slashes.
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        let trimmed = base_url.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Self::default();
        }
        Self { base_url: trimmed.to_owned() }
    }

    /// Read the base advertised by the SSR shell, falling back to the default.
    #[must_use]
    pub fn from_document() -> Self {
        #[cfg(feature = "hydrate")]
        {
            let selector = format!("meta[name=\"{API_BASE_META}\"]");
            let advertised = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|doc| doc.query_selector(&selector).ok().flatten())
                .and_then(|el| el.get_attribute("content"));
            match advertised {
                Some(base) => Self::new(&base),
                None => Self::default(),
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self::default()
        }
    }

    #[must_use]
    pub fn url(&self, endpoint: &str) -> String {
        format!("{}{endpoint}", self.base_url)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_API_BASE_URL.to_owned() }
    }
}

/// REST client parameterized over the transport.
#[derive(Debug, Clone)]
pub struct ApiClient<T> {
    config: ApiConfig,
    transport: T,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(config: ApiConfig, transport: T) -> Self {
        Self { config, transport }
    }

    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Issue one request and return the decoded JSON body, if any.
    ///
    /// # Errors
    ///
    /// `Network` when the transport rejects, `Http` for non-2xx statuses and
    /// `Decode` when a non-empty body is not JSON.
    pub async fn call(&self, endpoint: &str, method: Method, body: Option<&Value>) -> Result<Option<Value>, ApiError> {
        let body = match body {
            Some(value) if method.carries_body() => Some(serde_json::to_string(value)?),
            _ => None,
        };
        let request = HttpRequest { url: self.config.url(endpoint), method, body };
        let response = self.transport.send(request).await.inspect_err(|e| {
            log::error!("API call failed: {} {endpoint}: {e}", method.as_str());
        })?;
        if !response.ok() {
            log::error!("API call failed: {} {endpoint}: status {}", method.as_str(), response.status);
            return Err(ApiError::Http { status: response.status });
        }
        if response.status == 204 || response.body.trim().is_empty() {
            return Ok(None);
        }
        serde_json::from_str(&response.body).map(Some).map_err(ApiError::from)
    }

    async fn send_json<B: Serialize>(&self, endpoint: &str, method: Method, body: &B) -> Result<Option<Value>, ApiError> {
        let value = serde_json::to_value(body)?;
        self.call(endpoint, method, Some(&value)).await
    }

    async fn fetch_list<E: DeserializeOwned>(&self, endpoint: &str) -> Result<Vec<E>, ApiError> {
        match self.call(endpoint, Method::Get, None).await? {
            None | Some(Value::Null) => Ok(Vec::new()),
            Some(value) => Ok(serde_json::from_value(value)?),
        }
    }

    async fn fetch_one<E: DeserializeOwned>(&self, endpoint: &str) -> Result<Option<E>, ApiError> {
        match self.call(endpoint, Method::Get, None).await? {
            None | Some(Value::Null) => Ok(None),
            Some(value) => Ok(Some(serde_json::from_value(value)?)),
        }
    }

    // =========================================================================
    // Inventory
    // =========================================================================

    pub async fn view_inventory(&self) -> Result<Vec<InventoryItem>, ApiError> {
        self.fetch_list(INVENTORY_VIEW).await
    }

    pub async fn add_inventory(&self, payload: &InventoryPayload) -> Result<(), ApiError> {
        self.send_json(INVENTORY_ADD, Method::Post, payload).await.map(drop)
    }

    pub async fn update_inventory(&self, payload: &InventoryPayload) -> Result<(), ApiError> {
        self.send_json(INVENTORY_UPDATE, Method::Put, payload).await.map(drop)
    }

    pub async fn remove_inventory(&self, id: i64) -> Result<(), ApiError> {
        self.call(&inventory_remove_endpoint(id), Method::Delete, None).await.map(drop)
    }

    // =========================================================================
    // Categories
    // =========================================================================

    pub async fn all_categories(&self) -> Result<Vec<Category>, ApiError> {
        self.fetch_list(CATEGORY_ALL).await
    }

    pub async fn get_category(&self, id: i64) -> Result<Option<Category>, ApiError> {
        self.fetch_one(&category_get_endpoint(id)).await
    }

    pub async fn add_category(&self, payload: &CategoryPayload) -> Result<(), ApiError> {
        self.send_json(CATEGORY_ADD, Method::Post, payload).await.map(drop)
    }

    pub async fn update_category(&self, id: i64, payload: &CategoryPayload) -> Result<(), ApiError> {
        self.send_json(&category_update_endpoint(id), Method::Put, payload).await.map(drop)
    }

    pub async fn delete_category(&self, id: i64) -> Result<(), ApiError> {
        self.call(&category_delete_endpoint(id), Method::Delete, None).await.map(drop)
    }

    // =========================================================================
    // Shipments
    // =========================================================================

    pub async fn all_shipments(&self) -> Result<Vec<Shipment>, ApiError> {
        self.fetch_list(SHIPMENT_ALL).await
    }

    pub async fn receive_shipment(&self, payload: &ShipmentPayload) -> Result<(), ApiError> {
        self.send_json(SHIPMENT_RECEIVE, Method::Post, payload).await.map(drop)
    }

    pub async fn dispatch_shipment(&self, id: i64, payload: &ShipmentPayload) -> Result<(), ApiError> {
        self.send_json(&shipment_dispatch_endpoint(id), Method::Put, payload).await.map(drop)
    }

    pub async fn delete_shipment(&self, id: i64) -> Result<(), ApiError> {
        self.call(&shipment_delete_endpoint(id), Method::Delete, None).await.map(drop)
    }

    // =========================================================================
    // Space
    // =========================================================================

    pub async fn view_space(&self) -> Result<Vec<SpaceAllocation>, ApiError> {
        self.fetch_list(SPACE_VIEW).await
    }

    pub async fn allocate_space(&self, payload: &SpacePayload) -> Result<(), ApiError> {
        self.send_json(SPACE_ALLOCATE, Method::Post, payload).await.map(drop)
    }

    pub async fn free_space(&self, id: i64) -> Result<(), ApiError> {
        self.call(&space_free_endpoint(id), Method::Delete, None).await.map(drop)
    }

    // =========================================================================
    // Maintenance
    // =========================================================================

    pub async fn view_maintenance(&self) -> Result<Vec<MaintenanceTask>, ApiError> {
        self.fetch_list(MAINTENANCE_VIEW).await
    }

    pub async fn get_maintenance(&self, id: i64) -> Result<Option<MaintenanceTask>, ApiError> {
        self.fetch_one(&maintenance_get_endpoint(id)).await
    }

    pub async fn schedule_maintenance(&self, payload: &MaintenancePayload) -> Result<(), ApiError> {
        self.send_json(MAINTENANCE_SCHEDULE, Method::Post, payload).await.map(drop)
    }

    pub async fn update_maintenance(&self, payload: &MaintenancePayload) -> Result<(), ApiError> {
        self.send_json(MAINTENANCE_UPDATE, Method::Put, payload).await.map(drop)
    }

    // =========================================================================
    // Reports
    // =========================================================================

    /// Returns the stored record, or `None` if the server answered without a body.
    pub async fn generate_report(&self, request: &ReportRequest) -> Result<Option<ReportRecord>, ApiError> {
        match self.send_json(REPORT_GENERATE, Method::Post, request).await? {
            None | Some(Value::Null) => Ok(None),
            Some(value) => Ok(Some(serde_json::from_value(value)?)),
        }
    }

    pub async fn get_report(&self, id: i64) -> Result<Option<ReportRecord>, ApiError> {
        self.fetch_one(&report_get_endpoint(id)).await
    }

    pub async fn all_reports(&self) -> Result<Vec<ReportRecord>, ApiError> {
        self.fetch_list(REPORT_ALL).await
    }
}
