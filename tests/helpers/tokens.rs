//! Identity token forging helpers

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::Utc;
use serde_json::{Value, json};

/// Assemble a compact JWS string from raw claims.
///
/// The signature segment is junk bytes; these tokens are only usable with
/// decoders that skip signature verification.
pub fn forge_token(claims: &Value) -> String {
	let header = json!({"typ": "JWT", "alg": "RS256"});
	format!(
		"{}.{}.c2lnbmF0dXJl",
		encode_segment(&header),
		encode_segment(claims)
	)
}

/// Claims a validator configured for `issuer` and `client_id` accepts
pub fn valid_claims(issuer: &str, client_id: &str) -> Value {
	let now = Utc::now().timestamp();
	json!({
		"iss": issuer,
		"aud": client_id,
		"iat": now,
		"exp": now + 3600,
		"upn": "jane.doe@example.onmicrosoft.com",
		"name": "Jane Doe",
		"given_name": "Jane",
		"family_name": "Doe",
		"oid": "6fa459ea-ee8a-3ca4-894e-db77e160355e"
	})
}

fn encode_segment(value: &Value) -> String {
	URL_SAFE_NO_PAD.encode(serde_json::to_vec(value).expect("claims serialize to JSON"))
}
