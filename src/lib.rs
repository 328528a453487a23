//! # Azure AD Auth
//!
//! OAuth2 and OpenID Connect social login backends for Azure Active
//! Directory, mapping provider token responses into a normalized user
//! identity the host framework can persist.
//!
//! ## Features
//!
//! - **Two backend variants**: plain OAuth2 (`azuread-oauth2`) and OpenID
//!   Connect (`azuread-openidconnect`), sharing endpoints and mapping logic
//! - **Identity token decoding**: compact JWS parsing with expiry detection
//!   and a configurable, auditable signature policy
//! - **Claim validation**: issuer, issued-at freshness, and audience checks
//!   for the OpenID Connect variant
//! - **Profile mapping**: username, email, and name fields from Azure AD
//!   claims, with the User Principal Name as the stable user identifier
//! - **SharePoint resource support**: the configured site rides along as
//!   the `resource` authorization parameter and in the stored extra data
//!
//! The crate performs no I/O: the code-for-token exchange, session storage,
//! and user persistence belong to the host. See [`SocialBackend`] for the
//! seam the host pipeline drives.
//!
//! ## Quick Start
//!
//! ```rust
//! use azuread_auth::{AzureAdBackend, AzureAdConfig, SocialBackend};
//! use std::collections::HashMap;
//!
//! let mut config = AzureAdConfig::new(
//!     "client-id".to_string(),
//!     "client-secret".to_string(),
//!     "https://example.com/complete/azuread-oauth2/".to_string(),
//! );
//! config.sharepoint_site = Some("example.sharepoint.com".to_string());
//!
//! let backend = AzureAdBackend::oauth2(config).unwrap();
//! let url = backend.authorization_url("state123", &HashMap::new()).unwrap();
//!
//! assert!(url.as_str().starts_with("https://login.windows.net/common/oauth2/authorize"));
//! ```
//!
//! ## Architecture
//!
//! - [`core`]: configuration, errors, and the claim/response containers
//! - [`oidc`]: identity token decoding and claim validation
//! - [`flow`]: authorization request construction
//! - [`backend`]: the [`SocialBackend`] trait and the Azure AD backends
//! - [`user_mapping`]: provider response to user identity mapping

pub mod backend;
pub mod core;
pub mod flow;
pub mod oidc;
pub mod user_mapping;

// Re-export core types
pub use core::{
	AzureAdConfig, DecodedClaims, ExtraData, ProviderResponse, SignaturePolicy, SocialAuthError,
	TokenError,
};

// Re-export flow types
pub use flow::AuthorizationRequest;

// Re-export OIDC types
pub use oidc::{ISSUED_AT_MAX_AGE_SECS, IdTokenDecoder, IdTokenValidator};

// Re-export backends
pub use backend::{AzureAdBackend, AzureAdVariant, SocialBackend};

// Re-export user mapping
pub use user_mapping::UserDetails;
