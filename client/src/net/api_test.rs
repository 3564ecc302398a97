use super::*;
use crate::net::testing::MemoryTransport;
use crate::net::types::ShipmentStatus;
use futures::executor::block_on;
use serde_json::json;

fn client() -> (ApiClient<MemoryTransport>, MemoryTransport) {
    let transport = MemoryTransport::new();
    (ApiClient::new(ApiConfig::default(), transport.clone()), transport)
}

// =============================================================
// Config
// =============================================================

#[test]
fn config_trims_trailing_slashes() {
    assert_eq!(ApiConfig::new("http://api.local:9000//").base_url, "http://api.local:9000");
}

#[test]
fn blank_config_falls_back_to_default() {
    assert_eq!(ApiConfig::new("  ").base_url, DEFAULT_API_BASE_URL);
}

#[test]
fn from_document_outside_browser_is_default() {
    assert_eq!(ApiConfig::from_document(), ApiConfig::default());
}

#[test]
fn endpoints_format_ids() {
    assert_eq!(inventory_remove_endpoint(3), "/inventory/remove/3");
    assert_eq!(category_get_endpoint(9), "/category/9");
    assert_eq!(shipment_dispatch_endpoint(4), "/shipment/dispatch/4");
    assert_eq!(space_free_endpoint(5), "/space/free/5");
    assert_eq!(maintenance_get_endpoint(6), "/maintenance/get/6");
    assert_eq!(report_get_endpoint(7), "/report/get/7");
}

// =============================================================
// call
// =============================================================

#[test]
fn call_prefixes_base_url() {
    let (api, transport) = client();
    block_on(api.call(INVENTORY_VIEW, Method::Get, None)).unwrap();
    assert_eq!(transport.last_request().unwrap().url, "http://localhost:8080/inventory/view");
}

#[test]
fn get_never_attaches_a_body() {
    let (api, transport) = client();
    block_on(api.call(INVENTORY_VIEW, Method::Get, Some(&json!({"x": 1})))).unwrap();
    assert_eq!(transport.last_request().unwrap().body, None);
}

#[test]
fn post_encodes_json_body() {
    let (api, transport) = client();
    block_on(api.call(CATEGORY_ADD, Method::Post, Some(&json!({"categoryName": "Tools"})))).unwrap();
    let sent = transport.last_request().unwrap();
    assert_eq!(sent.method, Method::Post);
    assert_eq!(sent.body.as_deref(), Some(r#"{"categoryName":"Tools"}"#));
}

#[test]
fn non_2xx_is_http_error() {
    let (api, transport) = client();
    transport.fail(SHIPMENT_ALL, 500);
    assert_eq!(block_on(api.call(SHIPMENT_ALL, Method::Get, None)), Err(ApiError::Http { status: 500 }));
}

#[test]
fn transport_rejection_is_network_error() {
    let (api, transport) = client();
    transport.with(|b| b.offline = true);
    let err = block_on(api.call(SHIPMENT_ALL, Method::Get, None)).unwrap_err();
    assert_eq!(err.error_code(), "E_NETWORK");
}

#[test]
fn no_content_and_empty_body_are_none() {
    let (api, transport) = client();
    transport.respond(SPACE_VIEW, 204, "");
    assert_eq!(block_on(api.call(SPACE_VIEW, Method::Get, None)), Ok(None));
    transport.respond(SPACE_VIEW, 200, "   ");
    assert_eq!(block_on(api.call(SPACE_VIEW, Method::Get, None)), Ok(None));
}

#[test]
fn malformed_json_is_decode_error() {
    let (api, transport) = client();
    transport.respond(SPACE_VIEW, 200, "<html>");
    let err = block_on(api.call(SPACE_VIEW, Method::Get, None)).unwrap_err();
    assert_eq!(err.error_code(), "E_DECODE");
}

// =============================================================
// Typed helpers
// =============================================================

#[test]
fn null_list_is_empty() {
    let (api, transport) = client();
    transport.respond(MAINTENANCE_VIEW, 200, "null");
    assert!(block_on(api.view_maintenance()).unwrap().is_empty());
}

#[test]
fn list_with_wrong_shape_is_decode_error() {
    let (api, transport) = client();
    transport.respond(INVENTORY_VIEW, 200, r#"{"itemId": 1}"#);
    assert_eq!(block_on(api.view_inventory()).unwrap_err().error_code(), "E_DECODE");
}

#[test]
fn added_inventory_comes_back_from_view() {
    let (api, _transport) = client();
    let payload = InventoryPayload {
        item_id: None,
        item_name: "Widget".into(),
        category_id: None,
        quantity: 10,
        location: "A-1".into(),
    };
    block_on(api.add_inventory(&payload)).unwrap();
    let items = block_on(api.view_inventory()).unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].item_name, "Widget");
    assert_eq!(items[0].category_label(), "Uncategorized");
}

#[test]
fn shipment_dispatch_puts_to_id_path() {
    let (api, transport) = client();
    let payload = ShipmentPayload {
        item_id: 1,
        origin: "A".into(),
        destination: "B".into(),
        status: ShipmentStatus::InTransit,
        expected_delivery_date: "2024-03-05".into(),
    };
    block_on(api.receive_shipment(&payload)).unwrap();
    let id = block_on(api.all_shipments()).unwrap()[0].shipment_id;
    block_on(api.dispatch_shipment(id, &payload)).unwrap();
    assert_eq!(transport.paths().last().unwrap(), &format!("PUT /shipment/dispatch/{id}"));
}

#[test]
fn delete_of_missing_record_is_http_404() {
    let (api, _transport) = client();
    assert_eq!(block_on(api.delete_shipment(42)), Err(ApiError::Http { status: 404 }));
}

#[test]
fn generate_report_returns_stored_record() {
    let (api, _transport) = client();
    let request = ReportRequest { report_type: "inventory".into(), details: "inventory report for the last 30 days".into() };
    let record = block_on(api.generate_report(&request)).unwrap().unwrap();
    assert_eq!(record.report_type, "inventory");
    assert!(record.report_id.is_some());
    let fetched = block_on(api.get_report(record.report_id.unwrap())).unwrap();
    assert_eq!(fetched, Some(record));
}

#[test]
fn get_category_reads_single_record() {
    let (api, _transport) = client();
    block_on(api.add_category(&CategoryPayload { category_name: "Tools".into(), description: String::new() })).unwrap();
    let id = block_on(api.all_categories()).unwrap()[0].category_id;
    assert_eq!(block_on(api.get_category(id)).unwrap().unwrap().category_name, "Tools");
}
