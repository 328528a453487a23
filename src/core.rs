//! Core types shared across the authentication flow

pub mod claims;
pub mod config;
pub mod error;
pub mod response;

pub use claims::DecodedClaims;
pub use config::{AzureAdConfig, SignaturePolicy};
pub use error::{SocialAuthError, TokenError};
pub use response::{ExtraData, ProviderResponse};
