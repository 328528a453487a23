//! Provider response types

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::core::claims::DecodedClaims;

/// Extra fields the host framework stores alongside the identity
pub type ExtraData = Map<String, Value>;

/// Raw JSON object returned by the provider's token endpoint.
///
/// Every field the provider sent is kept. Typed accessors cover the fields
/// this crate reads; `expires_in` stays raw because the v1 endpoints send
/// it as a string. After `user_data` runs, the host merges the decoded
/// ID-token claims back in with [`merge_claims`](Self::merge_claims) so
/// profile mapping sees both.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProviderResponse(Map<String, Value>);

impl ProviderResponse {
	/// Wrap an already-parsed response object
	pub fn new(fields: Map<String, Value>) -> Self {
		Self(fields)
	}

	/// OAuth2 access token
	pub fn access_token(&self) -> Option<&str> {
		self.get_str("access_token")
	}

	/// Raw identity token issued next to the access token
	pub fn id_token(&self) -> Option<&str> {
		self.get_str("id_token")
	}

	/// OAuth2 refresh token
	pub fn refresh_token(&self) -> Option<&str> {
		self.get_str("refresh_token")
	}

	/// Token type, normally `Bearer`
	pub fn token_type(&self) -> Option<&str> {
		self.get_str("token_type")
	}

	/// Display name claim
	pub fn name(&self) -> Option<&str> {
		self.get_str("name")
	}

	/// Given name claim
	pub fn given_name(&self) -> Option<&str> {
		self.get_str("given_name")
	}

	/// Family name claim
	pub fn family_name(&self) -> Option<&str> {
		self.get_str("family_name")
	}

	/// User Principal Name claim
	pub fn upn(&self) -> Option<&str> {
		self.get_str("upn")
	}

	/// Look up an arbitrary response field
	pub fn get(&self, name: &str) -> Option<&Value> {
		self.0.get(name)
	}

	/// Merge decoded ID-token claims into the response.
	///
	/// Claims overwrite response fields of the same name. This is the host
	/// pipeline step that folds `user_data` output back into the response
	/// before profile mapping runs.
	pub fn merge_claims(&mut self, claims: DecodedClaims) {
		for (name, value) in claims.into_map() {
			self.0.insert(name, value);
		}
	}

	fn get_str(&self, name: &str) -> Option<&str> {
		self.0.get(name).and_then(Value::as_str)
	}
}
