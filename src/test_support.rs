//! Helpers shared by the inline test modules.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{body::Body, response::Response};
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use serde_json::Value;

use crate::config::Config;
use crate::services::auth::TokenVerifier;
use crate::state::AppState;

pub fn now() -> i64 {
    chrono::Utc::now().timestamp()
}

pub fn mint(claims: Value, secret: &str) -> String {
    mint_with(Algorithm::HS256, claims, secret)
}

pub fn mint_with(alg: Algorithm, claims: Value, secret: &str) -> String {
    jsonwebtoken::encode(
        &Header::new(alg),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .unwrap()
}

pub fn state_with_secret(secret: Option<&str>) -> AppState {
    AppState::new(Arc::new(TokenVerifier::new(secret, 0)))
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

pub fn config(pairs: &[(&str, &str)]) -> Config {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    Config::from_lookup(|key| map.get(key).cloned()).unwrap()
}
