// ============================================================================
// TESTS
// ============================================================================

use pretty_assertions::assert_eq;
use serde_json::Value;

use super::*;
use crate::implementation::transport_orders::{PaymentMethod, TransportStatus};

const KEY: &str = "crackers_craze_transport_orders";

#[test]
fn test_memory_store_empty_slot_reads_none() {
    let store = MemoryStore::new();
    assert_eq!(store.read(KEY).expect("read"), None);
}

#[test]
fn test_memory_store_clones_share_slots() {
    let store = MemoryStore::new();
    let other = store.clone();

    store.write(KEY, "[]").expect("write");
    assert_eq!(other.read(KEY).expect("read").as_deref(), Some("[]"));
}

#[test]
fn test_load_empty_slot_without_seed() {
    let store = MemoryStore::new();
    let orders = load_orders(&store, KEY, false).expect("load");
    assert!(orders.is_empty());
}

#[test]
fn test_load_empty_slot_seeds_sample_order() {
    let store = MemoryStore::new();
    let orders = load_orders(&store, KEY, true).expect("load");

    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].order_id, "TRN001");
    assert_eq!(orders[0].status, TransportStatus::InTransit);
    assert_eq!(orders[0].total_packages, 25);
}

#[test]
fn test_unparsable_slot_falls_back_to_empty() {
    let store = MemoryStore::new();
    store.write(KEY, "{not json").expect("write");

    // Seeding only applies to a missing slot, never to a corrupt one.
    let orders = load_orders(&store, KEY, true).expect("load");
    assert!(orders.is_empty());
}

#[test]
fn test_save_then_load_preserves_orders() {
    let store = MemoryStore::new();
    let orders = vec![TransportOrder::sample()];

    save_orders(&store, KEY, &orders).expect("save");
    let loaded = load_orders(&store, KEY, false).expect("load");
    assert_eq!(loaded, orders);
}

#[test]
fn test_slot_uses_camel_case_record_format() {
    let store = MemoryStore::new();
    save_orders(&store, KEY, &[TransportOrder::sample()]).expect("save");

    let raw = store.read(KEY).expect("read").expect("slot written");
    let json: Value = serde_json::from_str(&raw).expect("valid json");
    let order = &json[0];

    assert_eq!(order["orderId"], "TRN001");
    assert_eq!(order["vehicleType"], "Mini Truck");
    assert_eq!(order["totalCartons"], 50);
    assert_eq!(order["status"], "In Transit");
    assert_eq!(order["createdDate"], "2024-01-15");
    assert_eq!(order["totalPackages"], 25);
    assert_eq!(order["deliveries"][0]["packagesAssigned"], 25);
    assert_eq!(order["deliveries"][0]["pickupPoint"], "Koyambedu");
    assert_eq!(order["deliveries"][0]["paymentStatus"], "Paid");
}

#[test]
fn test_load_accepts_records_written_by_the_web_dashboard() {
    let raw = r#"[{
        "id": "1705312800000",
        "orderId": "TRN001",
        "vehicleType": "Lorry",
        "vehicleNumber": "TN09XY0001",
        "driverName": "Suresh",
        "driverContact": "9000000001",
        "totalCartons": 40,
        "deliveries": [{
            "id": "1705312800001",
            "destination": "",
            "routeName": "West",
            "packagesAssigned": 12,
            "customerName": "Kavitha",
            "district": "Coimbatore",
            "pickupPoint": "Gandhipuram",
            "dropPoint": "RS Puram",
            "chargesAmount": 800,
            "paymentMethod": "Bank Transfer",
            "paymentStatus": "Unpaid"
        }],
        "status": "Delivered",
        "createdDate": "2024-02-01",
        "totalPackages": 12
    }]"#;
    let store = MemoryStore::new();
    store.write(KEY, raw).expect("write");

    let orders = load_orders(&store, KEY, false).expect("load");
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].status, TransportStatus::Delivered);
    assert_eq!(orders[0].deliveries[0].payment_method, PaymentMethod::BankTransfer);
    assert_eq!(orders[0].deliveries[0].charges_amount, 800);
}

#[test]
fn test_file_store_round_trip() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = FileStore::new(dir.path().join("slots"));

    assert_eq!(store.read(KEY).expect("read missing"), None);

    store.write(KEY, "[]").expect("write creates directory");
    assert!(store.slot_path(KEY).exists());
    assert_eq!(store.read(KEY).expect("read").as_deref(), Some("[]"));

    store.write(KEY, "[1]").expect("overwrite");
    assert_eq!(store.read(KEY).expect("read").as_deref(), Some("[1]"));
}

#[test]
fn test_file_store_read_error_propagates() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = FileStore::new(dir.path());
    // A directory where the slot file should be cannot be read as a string.
    fs::create_dir_all(store.slot_path(KEY)).expect("mkdir");

    assert!(matches!(store.read(KEY), Err(TransportError::Storage(_))));
}
