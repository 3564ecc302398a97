//! In-memory warehouse backend for tests.
//!
//! Routes the same paths as the real API over plain JSON vectors, records
//! every request, and can be told to fail or override individual paths.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use serde_json::{Value, json};

use super::error::ApiError;
use super::transport::{HttpRequest, HttpResponse, Method, Transport};

#[derive(Debug, Default)]
pub struct Backend {
    pub inventory: Vec<Value>,
    pub categories: Vec<Value>,
    pub shipments: Vec<Value>,
    pub spaces: Vec<Value>,
    pub maintenance: Vec<Value>,
    pub reports: Vec<Value>,
    pub requests: Vec<HttpRequest>,
    /// Paths (without base) answered with the given status and body.
    pub overrides: HashMap<String, HttpResponse>,
    pub offline: bool,
    next_id: i64,
}

impl Backend {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        100 + self.next_id
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryTransport {
    pub backend: Rc<RefCell<Backend>>,
}

impl MemoryTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(&self, f: impl FnOnce(&mut Backend)) -> &Self {
        f(&mut self.backend.borrow_mut());
        self
    }

    pub fn fail(&self, path: &str, status: u16) {
        self.backend
            .borrow_mut()
            .overrides
            .insert(path.to_owned(), HttpResponse { status, body: String::new() });
    }

    pub fn respond(&self, path: &str, status: u16, body: &str) {
        self.backend
            .borrow_mut()
            .overrides
            .insert(path.to_owned(), HttpResponse { status, body: body.to_owned() });
    }

    pub fn clear_overrides(&self) {
        self.backend.borrow_mut().overrides.clear();
    }

    pub fn request_count(&self) -> usize {
        self.backend.borrow().requests.len()
    }

    pub fn last_request(&self) -> Option<HttpRequest> {
        self.backend.borrow().requests.last().cloned()
    }

    pub fn paths(&self) -> Vec<String> {
        self.backend
            .borrow()
            .requests
            .iter()
            .map(|r| format!("{} {}", r.method.as_str(), path_of(&r.url)))
            .collect()
    }
}

fn path_of(url: &str) -> &str {
    url.find("://")
        .and_then(|scheme| url[scheme + 3..].find('/').map(|p| &url[scheme + 3 + p..]))
        .unwrap_or(url)
}

fn ok(value: &Value) -> HttpResponse {
    HttpResponse { status: 200, body: value.to_string() }
}

fn no_content() -> HttpResponse {
    HttpResponse { status: 204, body: String::new() }
}

fn not_found() -> HttpResponse {
    HttpResponse { status: 404, body: String::new() }
}

fn id_of(value: &Value, key: &str) -> Option<i64> {
    value.get(key).and_then(Value::as_i64)
}

fn remove_by(list: &mut Vec<Value>, key: &str, id: i64) -> HttpResponse {
    let before = list.len();
    list.retain(|v| id_of(v, key) != Some(id));
    if list.len() == before { not_found() } else { no_content() }
}

fn find_by(list: &[Value], key: &str, id: i64) -> HttpResponse {
    list.iter().find(|v| id_of(v, key) == Some(id)).map_or_else(not_found, ok)
}

fn tail_id(path: &str, prefix: &str) -> Option<i64> {
    path.strip_prefix(prefix).and_then(|rest| rest.parse().ok())
}

fn route(backend: &mut Backend, method: Method, path: &str, body: Option<Value>) -> HttpResponse {
    let body = body.unwrap_or(Value::Null);
    match (method, path) {
        (Method::Get, "/inventory/view") => ok(&Value::Array(backend.inventory.clone())),
        (Method::Post, "/inventory/add") => {
            let id = backend.next_id();
            let item = inventory_record(backend, id, &body);
            backend.inventory.push(item.clone());
            ok(&item)
        }
        (Method::Put, "/inventory/update") => {
            let Some(id) = id_of(&body, "itemId") else {
                return HttpResponse { status: 400, body: String::new() };
            };
            let item = inventory_record(backend, id, &body);
            match backend.inventory.iter_mut().find(|v| id_of(v, "itemId") == Some(id)) {
                Some(slot) => {
                    *slot = item.clone();
                    ok(&item)
                }
                None => not_found(),
            }
        }
        (Method::Get, "/category/all") => ok(&Value::Array(backend.categories.clone())),
        (Method::Post, "/category/add") => {
            let id = backend.next_id();
            let mut cat = body;
            cat["categoryId"] = json!(id);
            backend.categories.push(cat.clone());
            ok(&cat)
        }
        (Method::Get, "/shipment/all") => ok(&Value::Array(backend.shipments.clone())),
        (Method::Post, "/shipment/receive") => {
            let id = backend.next_id();
            let mut shipment = body;
            shipment["shipmentId"] = json!(id);
            backend.shipments.push(shipment.clone());
            ok(&shipment)
        }
        (Method::Get, "/space/view") => ok(&Value::Array(backend.spaces.clone())),
        (Method::Post, "/space/allocate") => {
            let id = backend.next_id();
            let mut space = body;
            space["spaceId"] = json!(id);
            backend.spaces.push(space.clone());
            ok(&space)
        }
        (Method::Get, "/maintenance/view") => ok(&Value::Array(backend.maintenance.clone())),
        (Method::Post, "/maintenance/schedule") => {
            let id = backend.next_id();
            let mut task = body;
            task["scheduleId"] = json!(id);
            backend.maintenance.push(task.clone());
            ok(&task)
        }
        (Method::Put, "/maintenance/update") => {
            let id = id_of(&body, "scheduleId");
            match backend.maintenance.iter_mut().find(|v| id.is_some() && id_of(v, "scheduleId") == id) {
                Some(slot) => {
                    *slot = body.clone();
                    ok(&body)
                }
                None => not_found(),
            }
        }
        (Method::Get, "/report/all") => ok(&Value::Array(backend.reports.clone())),
        (Method::Post, "/report/generate") => {
            let id = backend.next_id();
            let mut report = body;
            report["reportId"] = json!(id);
            report["generatedOn"] = json!("2024-03-05T10:00:00Z");
            backend.reports.push(report.clone());
            ok(&report)
        }
        _ => route_by_id(backend, method, path, body),
    }
}

fn route_by_id(backend: &mut Backend, method: Method, path: &str, body: Value) -> HttpResponse {
    if let Some(id) = tail_id(path, "/inventory/remove/").filter(|_| method == Method::Delete) {
        return remove_by(&mut backend.inventory, "itemId", id);
    }
    if let Some(id) = tail_id(path, "/category/update/").filter(|_| method == Method::Put) {
        return match backend.categories.iter_mut().find(|v| id_of(v, "categoryId") == Some(id)) {
            Some(slot) => {
                let mut cat = body;
                cat["categoryId"] = json!(id);
                *slot = cat.clone();
                embed_category(&mut backend.inventory, id, &cat);
                ok(&cat)
            }
            None => not_found(),
        };
    }
    if let Some(id) = tail_id(path, "/category/delete/").filter(|_| method == Method::Delete) {
        let response = remove_by(&mut backend.categories, "categoryId", id);
        embed_category(&mut backend.inventory, id, &Value::Null);
        return response;
    }
    if let Some(id) = tail_id(path, "/category/").filter(|_| method == Method::Get) {
        return find_by(&backend.categories, "categoryId", id);
    }
    if let Some(id) = tail_id(path, "/shipment/dispatch/").filter(|_| method == Method::Put) {
        return match backend.shipments.iter_mut().find(|v| id_of(v, "shipmentId") == Some(id)) {
            Some(slot) => {
                let mut shipment = body;
                shipment["shipmentId"] = json!(id);
                *slot = shipment.clone();
                ok(&shipment)
            }
            None => not_found(),
        };
    }
    if let Some(id) = tail_id(path, "/shipment/delete/").filter(|_| method == Method::Delete) {
        return remove_by(&mut backend.shipments, "shipmentId", id);
    }
    if let Some(id) = tail_id(path, "/space/free/").filter(|_| method == Method::Delete) {
        return remove_by(&mut backend.spaces, "spaceId", id);
    }
    if let Some(id) = tail_id(path, "/maintenance/get/").filter(|_| method == Method::Get) {
        return find_by(&backend.maintenance, "scheduleId", id);
    }
    if let Some(id) = tail_id(path, "/report/get/").filter(|_| method == Method::Get) {
        return find_by(&backend.reports, "reportId", id);
    }
    not_found()
}

/// Items carry their category inline, like the joined rows the API returns.
fn embed_category(inventory: &mut [Value], id: i64, category: &Value) {
    for item in inventory.iter_mut().filter(|v| v.get("category").and_then(|c| id_of(c, "categoryId")) == Some(id)) {
        item["category"] = category.clone();
    }
}

fn inventory_record(backend: &Backend, id: i64, body: &Value) -> Value {
    let category = body
        .get("categoryId")
        .and_then(Value::as_i64)
        .and_then(|cid| backend.categories.iter().find(|c| id_of(c, "categoryId") == Some(cid)).cloned())
        .unwrap_or(Value::Null);
    json!({
        "itemId": id,
        "itemName": body.get("itemName").cloned().unwrap_or(Value::Null),
        "category": category,
        "quantity": body.get("quantity").cloned().unwrap_or(json!(0)),
        "location": body.get("location").cloned().unwrap_or(json!("")),
        "lastUpdated": "2024-03-05T10:00:00Z",
    })
}

impl Transport for MemoryTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let mut backend = self.backend.borrow_mut();
        backend.requests.push(request.clone());
        if backend.offline {
            return Err(ApiError::Network("Failed to fetch".to_owned()));
        }
        let path = path_of(&request.url).to_owned();
        if let Some(response) = backend.overrides.get(&path) {
            return Ok(response.clone());
        }
        let body = request.body.as_deref().map(serde_json::from_str::<Value>).transpose().ok().flatten();
        Ok(route(&mut backend, request.method, &path, body))
    }
}
