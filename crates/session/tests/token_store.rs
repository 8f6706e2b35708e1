use chrono::{DateTime, TimeZone, Utc};
use jsonwebtoken::{Algorithm, EncodingKey, Header};

use homestay_auth::{Role, WS_ROLE_CLAIM};
use homestay_session::{MemoryStorage, SessionConfig, SessionStorage, SessionStore, TokenSessionStore};

const NOW: i64 = 1_750_000_000;

fn frozen_now() -> DateTime<Utc> {
    Utc.timestamp_opt(NOW, 0).single().unwrap()
}

fn mint(payload: serde_json::Value) -> String {
    jsonwebtoken::encode(
        &Header::new(Algorithm::HS256),
        &payload,
        &EncodingKey::from_secret(b"api-secret"),
    )
    .expect("failed to encode jwt")
}

fn store_with(token: &str) -> TokenSessionStore<MemoryStorage> {
    TokenSessionStore::new(
        MemoryStorage::with_entry("accessToken", token),
        SessionConfig::default(),
    )
    .with_clock(frozen_now)
}

#[test]
fn live_token_authenticates_and_exposes_role() {
    let store = store_with(&mint(serde_json::json!({
        "sub": "7",
        "role": "Landlord",
        "iat": NOW - 60,
        "exp": NOW + 3600,
    })));

    assert!(store.is_authenticated());
    assert_eq!(store.user_role(), Ok(Some(Role::new("Landlord"))));
}

#[test]
fn uri_role_claim_is_understood() {
    let store = store_with(&mint(serde_json::json!({
        WS_ROLE_CLAIM: "Admin",
        "exp": NOW + 3600,
    })));

    assert!(store.is_authenticated());
    assert_eq!(store.user_role(), Ok(Some(Role::new("Admin"))));
}

#[test]
fn expired_token_is_not_authenticated() {
    let store = store_with(&mint(serde_json::json!({
        "role": "Admin",
        "iat": NOW - 7200,
        "exp": NOW - 1,
    })));

    assert!(!store.is_authenticated());
}

#[test]
fn token_without_expiry_is_not_authenticated() {
    let store = store_with(&mint(serde_json::json!({ "role": "Admin" })));

    assert!(!store.is_authenticated());
    assert_eq!(store.user_role(), Ok(Some(Role::new("Admin"))));
}

#[test]
fn token_without_role_is_authenticated_with_absent_role() {
    let store = store_with(&mint(serde_json::json!({ "sub": "7", "exp": NOW + 60 })));

    assert!(store.is_authenticated());
    assert_eq!(store.user_role(), Ok(None));
}

#[test]
fn malformed_role_is_absent() {
    let store = store_with(&mint(serde_json::json!({ "role": 3, "exp": NOW + 60 })));

    assert!(store.is_authenticated());
    assert_eq!(store.user_role(), Ok(None));
}

#[test]
fn sign_in_then_sign_out() {
    let storage = std::rc::Rc::new(MemoryStorage::new());
    let store = TokenSessionStore::new(storage.clone(), SessionConfig::new("homestay.token"))
        .with_clock(frozen_now);
    let token = mint(serde_json::json!({ "role": "Customer", "exp": NOW + 60 }));

    store.sign_in(&token).unwrap();
    assert_eq!(storage.get("homestay.token").unwrap().as_deref(), Some(token.as_str()));
    assert!(store.is_authenticated());
    assert_eq!(store.user_role(), Ok(Some(Role::new("Customer"))));

    store.sign_out().unwrap();
    assert!(!store.is_authenticated());
    assert_eq!(store.user_role(), Ok(None));
}
