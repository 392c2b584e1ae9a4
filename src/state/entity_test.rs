use super::*;
use serde_json::json;

// =============================================================
// EntityKind
// =============================================================

#[test]
fn slugs_are_distinct_collection_names() {
    let slugs: Vec<_> = EntityKind::ALL.iter().map(|k| k.slug()).collect();
    assert_eq!(slugs, vec!["subjects", "classes", "users"]);
}

#[test]
fn record_id_reads_kind_specific_key_then_generic_id() {
    assert_eq!(EntityKind::Subjects.record_id(&json!({ "subject_id": 3 })), Some(RecordId::Int(3)));
    assert_eq!(
        EntityKind::Users.record_id(&json!({ "user_id": "u-9" })),
        Some(RecordId::Text("u-9".to_owned()))
    );
    assert_eq!(EntityKind::Classes.record_id(&json!({ "id": 5 })), Some(RecordId::Int(5)));
    assert_eq!(EntityKind::Classes.record_id(&json!({ "class_code": "X" })), None);
}

#[test]
fn cell_text_formats_scalars() {
    let record = json!({ "a": "x", "b": 3, "c": true, "d": null });
    assert_eq!(cell_text(&record, "a"), "x");
    assert_eq!(cell_text(&record, "b"), "3");
    assert_eq!(cell_text(&record, "c"), "Yes");
    assert_eq!(cell_text(&record, "d"), "");
    assert_eq!(cell_text(&record, "missing"), "");
}

// =============================================================
// FormState
// =============================================================

#[test]
fn create_form_requires_fields() {
    let form = FormState::for_create(EntityKind::Subjects);
    assert_eq!(form.to_payload(), Err("Subject code is required".to_owned()));
}

#[test]
fn create_form_builds_typed_payload() {
    let mut form = FormState::for_create(EntityKind::Classes);
    form.set_value("class_code", " SE1801_SP25_01 ".to_owned());
    form.set_value("subject_id", "1".to_owned());
    form.set_value("semester_id", "2".to_owned());
    assert_eq!(
        form.to_payload().unwrap(),
        json!({ "class_code": "SE1801_SP25_01", "subject_id": 1, "semester_id": 2 })
    );
}

#[test]
fn number_fields_reject_non_integers() {
    let mut form = FormState::for_create(EntityKind::Subjects);
    form.set_value("subject_code", "PRN231".to_owned());
    form.set_value("subject_name", "Cross-Platform".to_owned());
    form.set_value("dept_id", "one".to_owned());
    assert_eq!(form.to_payload(), Err("Department ID must be a whole number".to_owned()));
}

#[test]
fn user_create_includes_password_and_checkbox() {
    let mut form = FormState::for_create(EntityKind::Users);
    assert_eq!(form.value("is_active"), "true");
    form.set_value("email", "s@u.edu".to_owned());
    form.set_value("role_id", "5".to_owned());
    form.set_value("password", "student123".to_owned());
    assert_eq!(
        form.to_payload().unwrap(),
        json!({ "email": "s@u.edu", "role_id": 5, "is_active": true, "password": "student123" })
    );
}

#[test]
fn edit_form_prefills_and_omits_create_only_fields() {
    let record = json!({
        "user_id": "u-1",
        "email": "s@u.edu",
        "full_name": "Alice",
        "role_id": 5,
        "is_active": false
    });
    let form = FormState::for_edit(EntityKind::Users, &record).unwrap();
    assert_eq!(form.mode, FormMode::Edit(RecordId::Text("u-1".to_owned())));
    assert_eq!(form.value("role_id"), "5");
    assert_eq!(form.value("is_active"), "false");
    assert!(form.visible_fields().all(|f| f.key != "password"));
    assert_eq!(
        form.to_payload().unwrap(),
        json!({ "email": "s@u.edu", "full_name": "Alice", "role_id": 5, "is_active": false })
    );
}

#[test]
fn edit_form_needs_record_id() {
    assert!(FormState::for_edit(EntityKind::Subjects, &json!({ "subject_code": "X" })).is_none());
}

#[test]
fn set_value_clears_error() {
    let mut form = FormState::for_create(EntityKind::Subjects);
    form.error = Some("Subject code is required".to_owned());
    form.set_value("subject_code", "SE".to_owned());
    assert_eq!(form.error, None);
}

#[test]
fn edit_without_active_flag_keeps_user_active() {
    let record = json!({ "user_id": "u1", "email": "x@y.z", "role_id": 5 });
    let form = FormState::for_edit(EntityKind::Users, &record).unwrap();
    assert_eq!(form.value("is_active"), "true");
    assert_eq!(
        form.to_payload().unwrap(),
        json!({ "email": "x@y.z", "full_name": null, "role_id": 5, "is_active": true })
    );
}

#[test]
fn edit_sends_cleared_optional_fields_as_null() {
    let record = json!({ "class_id": 7, "class_code": "SE1", "subject_id": 1, "semester_id": 2, "lecturer_id": "L-1" });
    let mut form = FormState::for_edit(EntityKind::Classes, &record).unwrap();
    form.set_value("lecturer_id", "  ".to_owned());
    assert_eq!(
        form.to_payload().unwrap(),
        json!({ "class_code": "SE1", "subject_id": 1, "semester_id": 2, "lecturer_id": null })
    );
}

#[test]
fn create_still_omits_blank_optional_fields() {
    let mut form = FormState::for_create(EntityKind::Subjects);
    form.set_value("subject_code", "SWP391".to_owned());
    form.set_value("subject_name", "Project".to_owned());
    assert_eq!(form.to_payload().unwrap(), json!({ "subject_code": "SWP391", "subject_name": "Project" }));
}
