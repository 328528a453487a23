//! Azure AD social login backends

use std::collections::HashMap;

use serde_json::Value;
use url::Url;

use crate::core::claims::DecodedClaims;
use crate::core::config::AzureAdConfig;
use crate::core::error::SocialAuthError;
use crate::core::response::{ExtraData, ProviderResponse};
use crate::flow::AuthorizationRequest;
use crate::oidc::{IdTokenDecoder, IdTokenValidator};
use crate::user_mapping::{self, UserDetails};

/// Response fields stored with the identity, as `(source, stored name)` pairs
const EXTRA_DATA: &[(&str, &str)] = &[
	("access_token", "access_token"),
	("id_token", "id_token"),
	("refresh_token", "refresh_token"),
	("expires_in", "expires"),
	("given_name", "first_name"),
	("family_name", "last_name"),
	("token_type", "token_type"),
];

/// Default scopes of the plain OAuth2 variant
const OAUTH2_DEFAULT_SCOPES: &[&str] = &["openid", "profile", "user_impersonation"];

/// Default scopes of the OpenID Connect variant
const OPENID_CONNECT_DEFAULT_SCOPES: &[&str] = &["openid"];

/// Token-processing variant of the Azure AD backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AzureAdVariant {
	/// Decode the ID token and return its claims as-is
	OAuth2,

	/// Additionally validate issuer, freshness, and audience
	OpenIdConnect,
}

/// Interface consumed by the host framework's authentication pipeline.
///
/// The pipeline drives a backend through one authentication attempt:
/// redirect the user to [`authorization_url`](Self::authorization_url),
/// exchange the callback code for a token response out of band, then feed
/// that response to [`user_data`](Self::user_data) and the mapping methods.
///
/// # Example
///
/// ```rust
/// use azuread_auth::{AzureAdBackend, ProviderResponse, SocialBackend};
///
/// fn complete_login(backend: &AzureAdBackend, mut response: ProviderResponse) {
///     let claims = backend.user_data(&response).unwrap();
///     response.merge_claims(claims);
///
///     let uid = backend.get_user_id(&response).unwrap();
///     let details = backend.get_user_details(&response);
///     let extra = backend.extra_data(&details, &uid, &response);
///     // persist uid, details, and extra with the host's account storage
///     let _ = extra;
/// }
/// ```
pub trait SocialBackend: Send + Sync {
	/// Backend name, the host's registry key
	fn name(&self) -> &str;

	/// Scopes requested when the configuration does not override them
	fn default_scopes(&self) -> &[&str];

	/// Scopes to request
	fn scopes(&self) -> Vec<String> {
		self.default_scopes()
			.iter()
			.map(|scope| scope.to_string())
			.collect()
	}

	/// Provider-specific extra query parameters for the authorization request
	fn auth_extra_arguments(&self) -> HashMap<String, String> {
		HashMap::new()
	}

	/// Build the authorization redirect URL.
	///
	/// `overrides` wins over [`auth_extra_arguments`](Self::auth_extra_arguments)
	/// entries of the same name.
	fn authorization_url(
		&self,
		state: &str,
		overrides: &HashMap<String, String>,
	) -> Result<Url, SocialAuthError>;

	/// Decode (and, depending on the backend, validate) the identity token
	/// carried by the provider response.
	///
	/// # Errors
	///
	/// Fails with [`SocialAuthError::MissingParameter`] when the response
	/// has no `id_token`, and with [`SocialAuthError::Token`] when the
	/// token is malformed, expired, or fails a claim check.
	fn user_data(&self, response: &ProviderResponse) -> Result<DecodedClaims, SocialAuthError>;

	/// Normalized profile fields for the response
	fn get_user_details(&self, response: &ProviderResponse) -> UserDetails;

	/// Stable user identifier for the response
	fn get_user_id(&self, response: &ProviderResponse) -> Option<String>;

	/// Fields the host stores alongside the identity
	fn extra_data(
		&self,
		_details: &UserDetails,
		_uid: &str,
		_response: &ProviderResponse,
	) -> ExtraData {
		ExtraData::new()
	}
}

/// Azure AD backend over the shared OAuth2 machinery.
///
/// The two [`AzureAdVariant`]s share endpoints, authorization-request
/// construction, and profile mapping; they differ in how far `user_data`
/// takes the identity token.
#[derive(Debug, Clone)]
pub struct AzureAdBackend {
	config: AzureAdConfig,
	variant: AzureAdVariant,
	decoder: IdTokenDecoder,
	validator: Option<IdTokenValidator>,
}

impl AzureAdBackend {
	/// Create a backend for the given variant.
	///
	/// # Errors
	///
	/// The OpenID Connect variant fails with
	/// [`SocialAuthError::Configuration`] unless `config.id_token_issuer`
	/// is set.
	pub fn new(config: AzureAdConfig, variant: AzureAdVariant) -> Result<Self, SocialAuthError> {
		let validator = match variant {
			AzureAdVariant::OAuth2 => None,
			AzureAdVariant::OpenIdConnect => {
				let issuer = config.id_token_issuer.clone().ok_or_else(|| {
					SocialAuthError::Configuration(
						"the OpenID Connect variant requires id_token_issuer".to_string(),
					)
				})?;
				Some(IdTokenValidator::new(issuer, config.client_id.clone()))
			}
		};
		let decoder = IdTokenDecoder::new(config.signature_policy.clone());

		Ok(Self {
			config,
			variant,
			decoder,
			validator,
		})
	}

	/// Backend for the plain OAuth2 variant
	pub fn oauth2(config: AzureAdConfig) -> Result<Self, SocialAuthError> {
		Self::new(config, AzureAdVariant::OAuth2)
	}

	/// Backend for the OpenID Connect variant
	pub fn openid_connect(config: AzureAdConfig) -> Result<Self, SocialAuthError> {
		Self::new(config, AzureAdVariant::OpenIdConnect)
	}

	/// Configuration this backend was built from
	pub fn config(&self) -> &AzureAdConfig {
		&self.config
	}

	/// Which token-processing variant this backend runs
	pub fn variant(&self) -> AzureAdVariant {
		self.variant
	}

	/// Endpoint the transport collaborator POSTs the code exchange to
	pub fn token_endpoint(&self) -> String {
		self.config.token_endpoint()
	}
}

impl SocialBackend for AzureAdBackend {
	fn name(&self) -> &str {
		match self.variant {
			AzureAdVariant::OAuth2 => "azuread-oauth2",
			AzureAdVariant::OpenIdConnect => "azuread-openidconnect",
		}
	}

	fn default_scopes(&self) -> &[&str] {
		match self.variant {
			AzureAdVariant::OAuth2 => OAUTH2_DEFAULT_SCOPES,
			AzureAdVariant::OpenIdConnect => OPENID_CONNECT_DEFAULT_SCOPES,
		}
	}

	fn scopes(&self) -> Vec<String> {
		match &self.config.scopes {
			Some(scopes) => scopes.clone(),
			None => self
				.default_scopes()
				.iter()
				.map(|scope| scope.to_string())
				.collect(),
		}
	}

	fn auth_extra_arguments(&self) -> HashMap<String, String> {
		let mut extra = HashMap::new();
		if let Some(site) = &self.config.sharepoint_site {
			extra.insert("resource".to_string(), site.clone());
		}
		extra
	}

	fn authorization_url(
		&self,
		state: &str,
		overrides: &HashMap<String, String>,
	) -> Result<Url, SocialAuthError> {
		let mut extra = self.auth_extra_arguments();
		extra.extend(
			overrides
				.iter()
				.map(|(name, value)| (name.clone(), value.clone())),
		);

		AuthorizationRequest::new(
			self.config.authorization_endpoint(),
			self.config.client_id.clone(),
			self.config.redirect_uri.clone(),
			self.scopes(),
		)
		.build_url(state, &extra)
	}

	fn user_data(&self, response: &ProviderResponse) -> Result<DecodedClaims, SocialAuthError> {
		let id_token = response
			.id_token()
			.ok_or_else(|| SocialAuthError::MissingParameter("id_token".to_string()))?;

		tracing::debug!("decoding id_token for backend {}", self.name());
		let claims = self.decoder.decode(id_token)?;

		match &self.validator {
			Some(validator) => Ok(validator.validate(claims)?),
			None => Ok(claims),
		}
	}

	fn get_user_details(&self, response: &ProviderResponse) -> UserDetails {
		user_mapping::user_details(response)
	}

	fn get_user_id(&self, response: &ProviderResponse) -> Option<String> {
		user_mapping::user_id(response)
	}

	fn extra_data(
		&self,
		_details: &UserDetails,
		_uid: &str,
		response: &ProviderResponse,
	) -> ExtraData {
		let mut data = ExtraData::new();
		for (name, alias) in EXTRA_DATA {
			if let Some(value) = response.get(name) {
				data.insert((*alias).to_string(), value.clone());
			}
		}
		if let Some(site) = &self.config.sharepoint_site {
			data.insert("sharepoint_site".to_string(), Value::String(site.clone()));
		}
		data
	}
}
