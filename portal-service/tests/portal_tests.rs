mod common;

use common::TestApp;
use portal_service::pharmacy::models::NewMedicine;
use portal_service::pharmacy::ports::MedicineRepository;
use reqwest::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_consultations_require_authentication() {
    let app = TestApp::spawn().await;

    let response = app
        .get("/api/consultations")
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = app
        .post("/api/consultations")
        .json(&json!({
            "age": 34,
            "height": 178,
            "weight": 72,
            "blood_type": "A+",
            "symptoms": "persistent cough and mild fever"
        }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["message"], "Not authenticated");
}

#[tokio::test]
async fn test_create_consultation_success() {
    let app = TestApp::spawn().await;
    app.register_user("alice", "alice@example.com", "password123")
        .await;

    let response = app
        .post("/api/consultations")
        .json(&json!({
            "age": 34,
            "height": 178,
            "weight": 72,
            "blood_type": "A+",
            "symptoms": "persistent cough and mild fever"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::CREATED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["id"], 1);
    assert_eq!(body["data"]["user_id"], 1);
    assert_eq!(body["data"]["age"], 34);
    assert_eq!(body["data"]["blood_type"], "A+");
    assert_eq!(body["data"]["symptoms"], "persistent cough and mild fever");
    assert_eq!(body["data"]["status"], "pending");
}

#[tokio::test]
async fn test_create_consultation_without_blood_type() {
    let app = TestApp::spawn().await;
    app.register_user("alice", "alice@example.com", "password123")
        .await;

    let response = app
        .post("/api/consultations")
        .json(&json!({
            "age": 34,
            "height": 178,
            "weight": 72,
            "blood_type": null,
            "symptoms": "persistent cough and mild fever"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::CREATED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert!(body["data"]["blood_type"].is_null());
}

#[tokio::test]
async fn test_create_consultation_rejects_underage() {
    let app = TestApp::spawn().await;
    app.register_user("alice", "alice@example.com", "password123")
        .await;

    let response = app
        .post("/api/consultations")
        .json(&json!({
            "age": 17,
            "height": 178,
            "weight": 72,
            "blood_type": null,
            "symptoms": "persistent cough and mild fever"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert!(body["data"]["message"]
        .as_str()
        .unwrap()
        .contains("Age must be between 18 and 120"));
}

#[tokio::test]
async fn test_create_consultation_rejects_out_of_range_vitals() {
    let app = TestApp::spawn().await;
    app.register_user("alice", "alice@example.com", "password123")
        .await;

    let response = app
        .post("/api/consultations")
        .json(&json!({
            "age": 34,
            "height": 251,
            "weight": 72,
            "blood_type": null,
            "symptoms": "persistent cough and mild fever"
        }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let response = app
        .post("/api/consultations")
        .json(&json!({
            "age": 34,
            "height": 178,
            "weight": 29,
            "blood_type": null,
            "symptoms": "persistent cough and mild fever"
        }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_create_consultation_rejects_short_symptoms() {
    let app = TestApp::spawn().await;
    app.register_user("alice", "alice@example.com", "password123")
        .await;

    let response = app
        .post("/api/consultations")
        .json(&json!({
            "age": 34,
            "height": 178,
            "weight": 72,
            "blood_type": null,
            "symptoms": "cough"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert!(body["data"]["message"]
        .as_str()
        .unwrap()
        .contains("between 10 and 1000 characters"));
}

#[tokio::test]
async fn test_consultations_are_scoped_to_owner() {
    let app = TestApp::spawn().await;
    app.register_user("alice", "alice@example.com", "password123")
        .await;
    app.post("/api/consultations")
        .json(&json!({
            "age": 34,
            "height": 178,
            "weight": 72,
            "blood_type": "A+",
            "symptoms": "persistent cough and mild fever"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    // Second client with its own cookie jar
    let bob = reqwest::Client::builder()
        .cookie_store(true)
        .build()
        .expect("Failed to create reqwest client");
    let response = bob
        .post(format!("{}/api/register", app.address))
        .json(&json!({
            "username": "bob",
            "email": "bob@example.com",
            "password": "password123"
        }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = bob
        .get(format!("{}/api/consultations", app.address))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"].as_array().unwrap().len(), 0);

    let response = app
        .get("/api/consultations")
        .send()
        .await
        .expect("Failed to execute request");
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
    assert_eq!(body["data"][0]["user_id"], 1);
}

#[tokio::test]
async fn test_list_medicines_is_public() {
    let app = TestApp::spawn().await;

    let response = app
        .get("/api/medicines")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    let medicines = body["data"].as_array().expect("data is not an array");
    assert_eq!(medicines.len(), 9);
    assert_eq!(medicines[0]["id"], 1);
    assert_eq!(medicines[0]["name"], "Atripla");
    assert_eq!(medicines[0]["requires_prescription"], true);
    assert_eq!(medicines[5]["name"], "Generic Paracetamol");
    assert_eq!(medicines[5]["price"], "9.99");
    assert_eq!(medicines[8]["name"], "PrEP (Pre-Exposure Prophylaxis)");
}

#[tokio::test]
async fn test_orders_require_authentication() {
    let app = TestApp::spawn().await;

    let response = app
        .get("/api/orders")
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = app
        .post("/api/orders")
        .json(&json!({ "medicine_id": 3, "quantity": 1 }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_create_order_success() {
    let app = TestApp::spawn().await;
    app.register_user("alice", "alice@example.com", "password123")
        .await;

    // Medicine 3 is the condom pack at 12.99, no prescription needed
    let response = app
        .post("/api/orders")
        .json(&json!({ "medicine_id": 3, "quantity": 2 }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::CREATED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["id"], 1);
    assert_eq!(body["data"]["user_id"], 1);
    assert_eq!(body["data"]["medicine_id"], 3);
    assert_eq!(body["data"]["quantity"], 2);
    assert_eq!(body["data"]["total_price"], "25.98");
    assert_eq!(body["data"]["status"], "pending");
}

#[tokio::test]
async fn test_create_order_unknown_medicine() {
    let app = TestApp::spawn().await;
    app.register_user("alice", "alice@example.com", "password123")
        .await;

    let response = app
        .post("/api/orders")
        .json(&json!({ "medicine_id": 99, "quantity": 1 }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["message"], "Medicine not found");
}

#[tokio::test]
async fn test_create_order_out_of_stock() {
    let app = TestApp::spawn().await;
    app.register_user("alice", "alice@example.com", "password123")
        .await;

    let medicine = app
        .medicine_repository
        .create(NewMedicine {
            name: "Discontinued Syrup".to_string(),
            description: "No longer stocked".to_string(),
            dosage: "100ml".to_string(),
            price: "5.99".to_string(),
            requires_prescription: false,
            in_stock: false,
        })
        .await
        .expect("Failed to seed medicine");

    let response = app
        .post("/api/orders")
        .json(&json!({ "medicine_id": medicine.id.0, "quantity": 1 }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["message"], "Medicine is out of stock");
}

#[tokio::test]
async fn test_create_order_prescription_required() {
    let app = TestApp::spawn().await;
    app.register_user("alice", "alice@example.com", "password123")
        .await;

    // Medicine 1 is Atripla, prescription only
    let response = app
        .post("/api/orders")
        .json(&json!({ "medicine_id": 1, "quantity": 1 }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["message"], "Prescription required");
}

#[tokio::test]
async fn test_create_order_rejects_out_of_range_quantity() {
    let app = TestApp::spawn().await;
    app.register_user("alice", "alice@example.com", "password123")
        .await;

    let response = app
        .post("/api/orders")
        .json(&json!({ "medicine_id": 3, "quantity": 0 }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let response = app
        .post("/api/orders")
        .json(&json!({ "medicine_id": 3, "quantity": 11 }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert!(body["data"]["message"]
        .as_str()
        .unwrap()
        .contains("between 1 and 10"));
}

#[tokio::test]
async fn test_orders_are_scoped_to_owner() {
    let app = TestApp::spawn().await;
    app.register_user("alice", "alice@example.com", "password123")
        .await;
    app.post("/api/orders")
        .json(&json!({ "medicine_id": 3, "quantity": 1 }))
        .send()
        .await
        .expect("Failed to execute request");

    let bob = reqwest::Client::builder()
        .cookie_store(true)
        .build()
        .expect("Failed to create reqwest client");
    bob.post(format!("{}/api/register", app.address))
        .json(&json!({
            "username": "bob",
            "email": "bob@example.com",
            "password": "password123"
        }))
        .send()
        .await
        .expect("Failed to execute request");
    bob.post(format!("{}/api/orders", app.address))
        .json(&json!({ "medicine_id": 6, "quantity": 3 }))
        .send()
        .await
        .expect("Failed to execute request");

    let response = app
        .get("/api/orders")
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    let orders = body["data"].as_array().expect("data is not an array");
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0]["user_id"], 1);
    assert_eq!(orders[0]["medicine_id"], 3);
}
