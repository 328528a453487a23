//! Backend configuration tests

use azuread_auth::{AzureAdConfig, SignaturePolicy};

#[test]
fn test_common_tenant_defaults() {
	// Arrange
	let config = AzureAdConfig::new(
		"client-id".into(),
		"client-secret".into(),
		"https://example.com/callback".into(),
	);

	// Assert
	assert_eq!(config.tenant, "common");
	assert_eq!(
		config.authorization_endpoint(),
		"https://login.windows.net/common/oauth2/authorize"
	);
	assert_eq!(
		config.token_endpoint(),
		"https://login.windows.net/common/oauth2/token"
	);
	assert_eq!(config.signature_policy, SignaturePolicy::Insecure);
	assert_eq!(config.scopes, None);
	assert_eq!(config.sharepoint_site, None);
	assert_eq!(config.id_token_issuer, None);
}

#[test]
fn test_dedicated_tenant_endpoints() {
	// Arrange
	let config = AzureAdConfig::for_tenant(
		"client-id".into(),
		"client-secret".into(),
		"https://example.com/callback".into(),
		"contoso.onmicrosoft.com".into(),
	);

	// Assert
	assert_eq!(config.tenant, "contoso.onmicrosoft.com");
	assert_eq!(
		config.authorization_endpoint(),
		"https://login.windows.net/contoso.onmicrosoft.com/oauth2/authorize"
	);
	assert_eq!(
		config.token_endpoint(),
		"https://login.windows.net/contoso.onmicrosoft.com/oauth2/token"
	);
}

#[test]
fn test_sts_issuer_for_tenant_id() {
	assert_eq!(
		AzureAdConfig::sts_issuer("ec02513e-fec1-4bac-af12-d76197b80939"),
		"https://sts.windows.net/ec02513e-fec1-4bac-af12-d76197b80939/"
	);
}

#[test]
fn test_config_deserializes_with_defaults() {
	// Arrange: only the mandatory fields
	let json = r#"{
		"client_id": "client-id",
		"client_secret": "client-secret",
		"redirect_uri": "https://example.com/callback"
	}"#;

	// Act
	let config: AzureAdConfig = serde_json::from_str(json).unwrap();

	// Assert
	assert_eq!(config.tenant, "common");
	assert_eq!(config.signature_policy, SignaturePolicy::Insecure);
}

#[test]
fn test_config_round_trips_signature_policy() {
	// Arrange
	let mut config = AzureAdConfig::new(
		"client-id".into(),
		"client-secret".into(),
		"https://example.com/callback".into(),
	);
	config.signature_policy = SignaturePolicy::Hs256 {
		secret: "shared".into(),
	};

	// Act
	let json = serde_json::to_string(&config).unwrap();
	let deserialized: AzureAdConfig = serde_json::from_str(&json).unwrap();

	// Assert
	assert_eq!(deserialized.signature_policy, config.signature_policy);
	assert!(json.contains("hs256"));
}
