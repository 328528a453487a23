//! Backend configuration types

use serde::{Deserialize, Serialize};

/// Azure AD backend configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AzureAdConfig {
	/// OAuth2 client ID (the application ID from the Azure portal)
	pub client_id: String,

	/// OAuth2 client secret
	pub client_secret: String,

	/// Redirect URI registered for the application
	pub redirect_uri: String,

	/// Directory tenant; `common` accepts accounts from any tenant
	#[serde(default = "default_tenant")]
	pub tenant: String,

	/// SharePoint site identifier, sent as the `resource` parameter and
	/// stored with the identity
	#[serde(skip_serializing_if = "Option::is_none")]
	pub sharepoint_site: Option<String>,

	/// Scope override; when absent each backend variant supplies its defaults
	#[serde(skip_serializing_if = "Option::is_none")]
	pub scopes: Option<Vec<String>>,

	/// Expected `iss` claim of ID tokens; the OpenID Connect variant
	/// refuses to start without it
	#[serde(skip_serializing_if = "Option::is_none")]
	pub id_token_issuer: Option<String>,

	/// How identity-token signatures are treated during decoding
	#[serde(default)]
	pub signature_policy: SignaturePolicy,
}

/// How the decoder treats the token signature.
///
/// `Insecure` trusts the TLS channel to the token endpoint instead of the
/// token signature. Constructing a decoder under it emits a warning so the
/// choice shows up in the logs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum SignaturePolicy {
	/// Decode the payload without verifying the signature
	#[default]
	Insecure,

	/// Verify an HS256 signature with a shared secret before decoding
	Hs256 {
		/// Shared secret
		secret: String,
	},
}

fn default_tenant() -> String {
	"common".to_string()
}

impl AzureAdConfig {
	/// Configuration on the multi-tenant `common` endpoint
	pub fn new(client_id: String, client_secret: String, redirect_uri: String) -> Self {
		Self::for_tenant(client_id, client_secret, redirect_uri, default_tenant())
	}

	/// Configuration pinned to a specific directory tenant
	pub fn for_tenant(
		client_id: String,
		client_secret: String,
		redirect_uri: String,
		tenant: String,
	) -> Self {
		Self {
			client_id,
			client_secret,
			redirect_uri,
			tenant,
			sharepoint_site: None,
			scopes: None,
			id_token_issuer: None,
			signature_policy: SignaturePolicy::default(),
		}
	}

	/// Authorization endpoint for the configured tenant
	pub fn authorization_endpoint(&self) -> String {
		format!("https://login.windows.net/{}/oauth2/authorize", self.tenant)
	}

	/// Token endpoint for the configured tenant; code exchange is a POST
	pub fn token_endpoint(&self) -> String {
		format!("https://login.windows.net/{}/oauth2/token", self.tenant)
	}

	/// `iss` value minted by a directory tenant's STS
	pub fn sts_issuer(tenant_id: &str) -> String {
		format!("https://sts.windows.net/{}/", tenant_id)
	}
}
