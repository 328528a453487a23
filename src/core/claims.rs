//! Decoded identity token claims

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Claims decoded from an identity token payload.
///
/// Azure AD varies the claim set per tenant and directory configuration,
/// so the payload is kept as a JSON object with typed accessors for the
/// claims this crate inspects. Everything else stays reachable through
/// [`get`](Self::get).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DecodedClaims(Map<String, Value>);

impl DecodedClaims {
	/// Wrap an already-parsed claims object
	pub fn new(claims: Map<String, Value>) -> Self {
		Self(claims)
	}

	/// Issuer (`iss`)
	pub fn iss(&self) -> Option<&str> {
		self.get_str("iss")
	}

	/// Issued-at time in Unix seconds (`iat`)
	pub fn iat(&self) -> Option<i64> {
		self.get_i64("iat")
	}

	/// Audience (`aud`)
	pub fn aud(&self) -> Option<&str> {
		self.get_str("aud")
	}

	/// Expiration time in Unix seconds (`exp`)
	pub fn exp(&self) -> Option<i64> {
		self.get_i64("exp")
	}

	/// User Principal Name (`upn`), Azure AD's stable user identifier
	pub fn upn(&self) -> Option<&str> {
		self.get_str("upn")
	}

	/// Look up an arbitrary claim
	pub fn get(&self, name: &str) -> Option<&Value> {
		self.0.get(name)
	}

	/// Consume into the underlying claim map
	pub fn into_map(self) -> Map<String, Value> {
		self.0
	}

	fn get_str(&self, name: &str) -> Option<&str> {
		self.0.get(name).and_then(Value::as_str)
	}

	fn get_i64(&self, name: &str) -> Option<i64> {
		self.0.get(name).and_then(Value::as_i64)
	}
}
