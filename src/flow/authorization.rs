//! Authorization request construction

use std::collections::HashMap;

use url::Url;

use crate::core::error::SocialAuthError;

/// Builder for the authorization redirect URL.
///
/// Parameters follow the authorization-code grant: client and redirect
/// identification, `response_type=code`, a CSRF `state`, and the requested
/// scopes joined with spaces.
#[derive(Debug, Clone)]
pub struct AuthorizationRequest {
	endpoint: String,
	client_id: String,
	redirect_uri: String,
	scopes: Vec<String>,
}

impl AuthorizationRequest {
	/// Create a request builder for the given endpoint and client
	pub fn new(
		endpoint: String,
		client_id: String,
		redirect_uri: String,
		scopes: Vec<String>,
	) -> Self {
		Self {
			endpoint,
			client_id,
			redirect_uri,
			scopes,
		}
	}

	/// Render the authorization URL for `state`, merging `extra` parameters.
	///
	/// An extra parameter with the name of a standard one replaces it, so
	/// callers can override any part of the query. Extra parameters are
	/// appended in sorted order.
	///
	/// # Errors
	///
	/// Returns [`SocialAuthError::Configuration`] when the endpoint is not
	/// a valid URL.
	pub fn build_url(
		&self,
		state: &str,
		extra: &HashMap<String, String>,
	) -> Result<Url, SocialAuthError> {
		let mut params: Vec<(String, String)> = vec![
			("client_id".to_string(), self.client_id.clone()),
			("redirect_uri".to_string(), self.redirect_uri.clone()),
			("response_type".to_string(), "code".to_string()),
			("state".to_string(), state.to_string()),
		];
		if !self.scopes.is_empty() {
			params.push(("scope".to_string(), self.scopes.join(" ")));
		}

		let mut extra: Vec<(&String, &String)> = extra.iter().collect();
		extra.sort();
		for (name, value) in extra {
			match params.iter_mut().find(|(existing, _)| existing == name) {
				Some(param) => param.1 = value.clone(),
				None => params.push((name.clone(), value.clone())),
			}
		}

		let mut url = Url::parse(&self.endpoint).map_err(|e| {
			SocialAuthError::Configuration(format!(
				"invalid authorization endpoint {:?}: {}",
				self.endpoint, e
			))
		})?;
		url.query_pairs_mut().extend_pairs(params.iter());

		Ok(url)
	}
}
