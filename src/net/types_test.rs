use super::*;
use serde_json::json;

// =============================================================
// RecordId / User
// =============================================================

#[test]
fn user_accepts_numeric_id() {
    let user: User = serde_json::from_value(json!({ "id": 1, "email": "a@b.com" })).unwrap();
    assert_eq!(user.id, RecordId::Int(1));
    assert_eq!(user.full_name, None);
    assert_eq!(user.display_name(), "a@b.com");
}

#[test]
fn user_accepts_backend_user_id_alias() {
    let user: User = serde_json::from_value(json!({
        "user_id": "5b0e6f1c-0000-4000-8000-000000000001",
        "email": "student@university.edu",
        "full_name": "Alice Student",
        "role_id": 5,
        "is_active": true,
        "avatar_url": null
    }))
    .unwrap();
    assert_eq!(user.id.to_string(), "5b0e6f1c-0000-4000-8000-000000000001");
    assert_eq!(user.display_name(), "Alice Student");
    assert_eq!(user.role(), Some(Role::Student));
}

#[test]
fn user_round_trips_through_storage_json() {
    let user = User {
        id: RecordId::Int(7),
        email: "lecturer@university.edu".to_owned(),
        full_name: Some("Dr. John Smith".to_owned()),
        role_id: Some(4),
        is_active: Some(true),
        avatar_url: None,
    };
    let raw = serde_json::to_string(&user).unwrap();
    let back: User = serde_json::from_str(&raw).unwrap();
    assert_eq!(back, user);
}

#[test]
fn record_id_from_value_rejects_empty_and_null() {
    assert_eq!(RecordId::from_value(&json!(3)), Some(RecordId::Int(3)));
    assert_eq!(RecordId::from_value(&json!("abc")), Some(RecordId::Text("abc".to_owned())));
    assert_eq!(RecordId::from_value(&json!("")), None);
    assert_eq!(RecordId::from_value(&json!(null)), None);
}

// =============================================================
// Role
// =============================================================

#[test]
fn role_ids_match_seeded_backend_roles() {
    assert_eq!(Role::from_id(1), Role::Admin);
    assert_eq!(Role::from_id(3), Role::HeadDept);
    assert_eq!(Role::from_id(5), Role::Student);
    assert_eq!(Role::from_id(42), Role::Other(42));
    assert_eq!(Role::Other(42).label(), "Role 42");
    assert_eq!(Role::Lecturer.id(), 4);
}

// =============================================================
// ListQuery / ListPage
// =============================================================

#[test]
fn list_query_computes_skip_from_one_based_page() {
    let query = ListQuery::for_page(3, 10, "");
    assert_eq!(query.skip, 20);
    assert_eq!(query.limit, 10);
    assert_eq!(query.to_query_string(), "skip=20&limit=10");
}

#[test]
fn list_query_treats_page_zero_as_first_page() {
    assert_eq!(ListQuery::for_page(0, 10, "").skip, 0);
}

#[test]
fn list_query_encodes_trimmed_search() {
    let query = ListQuery::for_page(1, 5, "  capstone project ");
    assert_eq!(query.to_query_string(), "skip=0&limit=5&search=capstone%20project");
}

#[test]
fn list_page_accepts_bare_array() {
    let page = ListPage::from_value(json!([{ "subject_id": 1 }, { "subject_id": 2 }])).unwrap();
    assert_eq!(page.items.len(), 2);
    assert_eq!(page.total, None);
}

#[test]
fn list_page_accepts_envelope_with_total() {
    let page = ListPage::from_value(json!({ "items": [{ "class_id": 1 }], "total": 41 })).unwrap();
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.total, Some(41));
}

#[test]
fn list_page_rejects_other_shapes() {
    assert_eq!(ListPage::from_value(json!({ "detail": "nope" })), None);
    assert_eq!(ListPage::from_value(json!("text")), None);
}

#[test]
fn token_response_defaults_token_type() {
    let token: TokenResponse = serde_json::from_value(json!({ "access_token": "T1" })).unwrap();
    assert_eq!(token.token_type, "bearer");
}
