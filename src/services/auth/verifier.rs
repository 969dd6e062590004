use axum::http::{HeaderMap, header};
use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use serde::Serialize;
use serde_json::Value;
use std::collections::HashSet;
use thiserror::Error;

/// Why a request could not be authenticated.
///
/// The first two variants are "missing credential" cases and keep their own
/// wire message. `Misconfigured` and `Invalid` collapse into the same generic
/// response at the HTTP boundary; the detail only goes to the log.
#[derive(Debug, Error)]
pub enum VerifyError {
    #[error("authorization header is missing")]
    MissingHeader,
    #[error("authorization header carries no token")]
    MissingToken,
    #[error("signing secret is not configured")]
    Misconfigured,
    #[error("jwt verification failed: {0}")]
    Invalid(#[from] jsonwebtoken::errors::Error),
}

/// Decoded payload of a verified token.
///
/// Whatever the issuer encoded is kept as-is; no schema is imposed beyond the
/// registered time claims checked during verification.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Claims(pub Value);

impl Claims {
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// `exp` as whole seconds. Issuers may encode it as a float.
    pub fn exp(&self) -> Option<i64> {
        let exp = self.get("exp")?;
        exp.as_i64().or_else(|| {
            exp.as_f64()
                .filter(|f| f.is_finite() && *f >= i64::MIN as f64 && *f < i64::MAX as f64)
                .map(|f| f.trunc() as i64)
        })
    }

    pub fn sub(&self) -> Option<&str> {
        self.get("sub").and_then(Value::as_str)
    }
}

/// Second whitespace-separated segment of an `Authorization` value.
///
/// The scheme word is not inspected: `Bearer abc` and `Token abc` both yield
/// `abc`, and anything that is not a real JWT fails verification later.
pub fn bearer_token(value: &str) -> Option<&str> {
    value.split_whitespace().nth(1)
}

/// HMAC (HS256/384/512) bearer-token verifier.
///
/// - The secret is injected at construction; `None` means the process was
///   started without one and every verification fails with `Misconfigured`.
/// - Key material is intentionally not printable via Debug.
#[derive(Clone)]
pub struct TokenVerifier {
    decoding_key: Option<DecodingKey>,
    validation: Validation,
}

impl std::fmt::Debug for TokenVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenVerifier")
            .field("secret_configured", &self.is_configured())
            .field("validation", &self.validation)
            .finish()
    }
}

impl TokenVerifier {
    pub fn new(secret: Option<&str>, leeway_seconds: u64) -> Self {
        let decoding_key = secret
            .filter(|s| !s.is_empty())
            .map(|s| DecodingKey::from_secret(s.as_bytes()));

        let mut validation = Validation::new(Algorithm::HS256);
        validation.algorithms = vec![Algorithm::HS256, Algorithm::HS384, Algorithm::HS512];
        // `exp` is checked when present but tokens without it are accepted
        validation.required_spec_claims = HashSet::new();
        validation.validate_exp = true;
        validation.validate_nbf = true;
        validation.validate_aud = false;
        validation.leeway = leeway_seconds;

        Self {
            decoding_key,
            validation,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.decoding_key.is_some()
    }

    /// Full request check: header → token segment → secret → signature/time claims.
    pub fn verify_headers(&self, headers: &HeaderMap) -> Result<Claims, VerifyError> {
        let value = headers
            .get(header::AUTHORIZATION)
            .ok_or(VerifyError::MissingHeader)?;

        // Non-ASCII bytes still count as a token segment; decoding rejects it later
        let raw = String::from_utf8_lossy(value.as_bytes());
        let token = bearer_token(&raw).ok_or(VerifyError::MissingToken)?;

        self.verify(token)
    }

    /// Verify a bare token string against the configured secret.
    pub fn verify(&self, token: &str) -> Result<Claims, VerifyError> {
        let key = self
            .decoding_key
            .as_ref()
            .ok_or(VerifyError::Misconfigured)?;

        let data = jsonwebtoken::decode::<Value>(token, key, &self.validation)?;

        Ok(Claims(data.claims))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{mint, mint_with, now};
    use axum::http::HeaderValue;
    use jsonwebtoken::errors::ErrorKind;
    use serde_json::json;

    fn headers_with(value: &'static [u8]) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_bytes(value).unwrap(),
        );
        headers
    }

    #[test]
    fn bearer_token_takes_second_segment() {
        assert_eq!(bearer_token("Bearer abc"), Some("abc"));
        assert_eq!(bearer_token("Bearer   abc  extra"), Some("abc"));
        assert_eq!(bearer_token("Bearer"), None);
        assert_eq!(bearer_token("Bearer   "), None);
        assert_eq!(bearer_token(""), None);
    }

    #[test]
    fn valid_token_yields_claims() {
        let verifier = TokenVerifier::new(Some("s3cret"), 0);
        let exp = now() + 600;
        let token = mint(json!({"sub": "admin-1", "exp": exp}), "s3cret");

        let claims = verifier.verify(&token).unwrap();

        assert_eq!(claims.sub(), Some("admin-1"));
        assert_eq!(claims.exp(), Some(exp));
    }

    #[test]
    fn arbitrary_claims_are_preserved() {
        let verifier = TokenVerifier::new(Some("s3cret"), 0);
        let payload = json!({"sub": "7", "role": "admin", "profile": {"name": "Ada"}});
        let token = mint(payload.clone(), "s3cret");

        let claims = verifier.verify(&token).unwrap();

        assert_eq!(claims.0, payload);
    }

    #[test]
    fn token_without_exp_is_accepted() {
        let verifier = TokenVerifier::new(Some("s3cret"), 0);
        let token = mint(json!({"sub": "admin-1"}), "s3cret");

        assert!(verifier.verify(&token).is_ok());
    }

    #[test]
    fn wrong_secret_is_invalid() {
        let verifier = TokenVerifier::new(Some("other"), 0);
        let token = mint(json!({"sub": "admin-1"}), "s3cret");

        let err = verifier.verify(&token).unwrap_err();
        match err {
            VerifyError::Invalid(e) => assert_eq!(e.kind(), &ErrorKind::InvalidSignature),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn expired_token_is_invalid() {
        let verifier = TokenVerifier::new(Some("s3cret"), 0);
        let token = mint(json!({"sub": "admin-1", "exp": now() - 120}), "s3cret");

        let err = verifier.verify(&token).unwrap_err();
        match err {
            VerifyError::Invalid(e) => assert_eq!(e.kind(), &ErrorKind::ExpiredSignature),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn leeway_tolerates_small_clock_skew() {
        let verifier = TokenVerifier::new(Some("s3cret"), 300);
        let token = mint(json!({"sub": "admin-1", "exp": now() - 120}), "s3cret");

        assert!(verifier.verify(&token).is_ok());
    }

    #[test]
    fn not_yet_valid_token_is_invalid() {
        let verifier = TokenVerifier::new(Some("s3cret"), 0);
        let token = mint(json!({"sub": "admin-1", "nbf": now() + 3600}), "s3cret");

        assert!(matches!(
            verifier.verify(&token),
            Err(VerifyError::Invalid(_))
        ));
    }

    #[test]
    fn structurally_invalid_string_is_invalid() {
        let verifier = TokenVerifier::new(Some("s3cret"), 0);

        for token in ["header.payload.signature", "not-a-jwt", "a.b"] {
            assert!(
                matches!(verifier.verify(token), Err(VerifyError::Invalid(_))),
                "{token} should be rejected"
            );
        }
    }

    #[test]
    fn non_hmac_algorithm_is_rejected() {
        let verifier = TokenVerifier::new(Some("s3cret"), 0);
        // alg=none header, empty signature
        let token = "eyJhbGciOiJub25lIiwidHlwIjoiSldUIn0.eyJzdWIiOiJhZG1pbi0xIn0.";

        assert!(matches!(
            verifier.verify(token),
            Err(VerifyError::Invalid(_))
        ));
    }

    #[test]
    fn hs512_tokens_are_accepted() {
        let verifier = TokenVerifier::new(Some("s3cret"), 0);
        let token = mint_with(Algorithm::HS512, json!({"sub": "admin-1"}), "s3cret");

        assert!(verifier.verify(&token).is_ok());
    }

    #[test]
    fn missing_secret_is_misconfigured() {
        let token = mint(json!({"sub": "admin-1"}), "s3cret");

        for verifier in [TokenVerifier::new(None, 0), TokenVerifier::new(Some(""), 0)] {
            assert!(!verifier.is_configured());
            assert!(matches!(
                verifier.verify(&token),
                Err(VerifyError::Misconfigured)
            ));
        }
    }

    #[test]
    fn headers_without_authorization_are_missing_header() {
        let verifier = TokenVerifier::new(Some("s3cret"), 0);

        assert!(matches!(
            verifier.verify_headers(&HeaderMap::new()),
            Err(VerifyError::MissingHeader)
        ));
    }

    #[test]
    fn headers_without_token_segment_are_missing_token() {
        let verifier = TokenVerifier::new(Some("s3cret"), 0);

        let values: [&'static [u8]; 4] = [b"Bearer", b"", b"Bearer   ", b"\t"];
        for value in values {
            assert!(matches!(
                verifier.verify_headers(&headers_with(value)),
                Err(VerifyError::MissingToken)
            ));
        }
    }

    #[test]
    fn non_ascii_token_segment_is_invalid_not_missing() {
        let verifier = TokenVerifier::new(Some("s3cret"), 0);

        assert!(matches!(
            verifier.verify_headers(&headers_with(b"Bearer t\xc3\xb6ken")),
            Err(VerifyError::Invalid(_))
        ));
    }

    #[test]
    fn float_exp_is_reported_in_whole_seconds() {
        let verifier = TokenVerifier::new(Some("s3cret"), 0);
        let exp = now() + 600;
        let token = mint(json!({"sub": "admin-1", "exp": (exp as f64 + 0.5)}), "s3cret");

        let claims = verifier.verify(&token).unwrap();

        assert_eq!(claims.exp(), Some(exp));
    }

    #[test]
    fn non_numeric_exp_has_no_expiry() {
        let claims = Claims(json!({"exp": "tomorrow"}));
        assert_eq!(claims.exp(), None);
    }

    #[test]
    fn missing_token_is_reported_before_missing_secret() {
        let verifier = TokenVerifier::new(None, 0);

        assert!(matches!(
            verifier.verify_headers(&headers_with(b"Bearer")),
            Err(VerifyError::MissingToken)
        ));
    }

    #[test]
    fn debug_output_hides_key() {
        let verifier = TokenVerifier::new(Some("s3cret"), 0);
        let printed = format!("{verifier:?}");

        assert!(printed.contains("secret_configured: true"));
        assert!(!printed.contains("s3cret"));
    }
}
