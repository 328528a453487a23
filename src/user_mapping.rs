//! Provider response to user identity mapping

use serde::{Deserialize, Serialize};

use crate::core::response::ProviderResponse;

/// Normalized user profile extracted from a provider response
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDetails {
	/// Login name presented to the host framework
	pub username: String,

	/// Email address
	#[serde(skip_serializing_if = "Option::is_none")]
	pub email: Option<String>,

	/// Display name
	pub fullname: String,

	/// Given name
	pub first_name: String,

	/// Family name
	pub last_name: String,
}

/// Extract the normalized profile fields from a provider response.
///
/// Azure AD sends the display name in `name` and the address in `upn`;
/// the display name doubles as the username. Missing fields become empty
/// strings (`None` for the email), so the mapping never fails.
pub fn user_details(response: &ProviderResponse) -> UserDetails {
	let fullname = response.name().unwrap_or_default().to_string();

	let details = UserDetails {
		username: fullname.clone(),
		email: response.upn().map(str::to_string),
		fullname,
		first_name: response.given_name().unwrap_or_default().to_string(),
		last_name: response.family_name().unwrap_or_default().to_string(),
	};
	tracing::debug!("mapped user details for {:?}", details.username);
	details
}

/// Stable user identifier: the `upn` claim, verbatim.
///
/// No fallback claim is consulted; a response without `upn` yields no
/// identifier.
pub fn user_id(response: &ProviderResponse) -> Option<String> {
	let upn = response.upn().map(str::to_string);
	tracing::debug!("resolved user id from upn claim: present={}", upn.is_some());
	upn
}
