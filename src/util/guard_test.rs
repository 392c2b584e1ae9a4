use super::*;
use crate::net::types::{RecordId, User};

fn user() -> User {
    User {
        id: RecordId::Text("u1".to_owned()),
        email: "admin@collabsphere.edu".to_owned(),
        full_name: Some("Admin".to_owned()),
        role_id: Some(1),
        is_active: Some(true),
        avatar_url: None,
    }
}

#[test]
fn unknown_until_storage_is_read() {
    let session = Session { token: Some("T1".to_owned()), user: Some(user()), is_ready: false };
    assert_eq!(GuardState::from_session(&session), GuardState::Unknown);
    assert_eq!(GuardState::from_session(&Session::default()), GuardState::Unknown);
}

#[test]
fn ready_with_token_is_authenticated() {
    let session = Session { token: Some("T1".to_owned()), user: None, is_ready: true };
    assert_eq!(GuardState::from_session(&session), GuardState::Authenticated);
}

#[test]
fn ready_without_token_redirects() {
    let session = Session { token: None, user: Some(user()), is_ready: true };
    assert_eq!(GuardState::from_session(&session), GuardState::Unauthenticated);
}

#[test]
fn unauthenticated_redirects_to_login_replacing_history() {
    let (path, options) = unauth_redirect(GuardState::Unauthenticated).expect("redirect");
    assert_eq!(path, LOGIN_PATH);
    assert!(options.replace);
}

#[test]
fn unknown_and_authenticated_never_redirect() {
    assert!(unauth_redirect(GuardState::Unknown).is_none());
    assert!(unauth_redirect(GuardState::Authenticated).is_none());
}

#[test]
fn route_change_detection_ignores_first_render_and_same_path() {
    assert!(!route_changed(None, "/login"));
    assert!(!route_changed(Some("/login"), "/login"));
    assert!(route_changed(Some("/login"), "/register"));
}
