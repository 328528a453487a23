//! Social authentication error types

use thiserror::Error;

/// Errors raised while decoding or validating an identity token
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
	/// Token structure, encoding, or payload could not be decoded
	#[error("Unable to decode token: {0}")]
	Decode(String),

	/// Token expiration time has passed
	#[error("Token has expired")]
	Expired,

	/// A claim did not satisfy the provider's validation rules
	#[error("{0}")]
	Validation(String),
}

/// Social authentication errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SocialAuthError {
	/// Identity token was rejected
	#[error("Token error: {0}")]
	Token(#[from] TokenError),

	/// Required parameter missing from the provider response
	#[error("Missing parameter: {0}")]
	MissingParameter(String),

	/// Configuration error
	#[error("Configuration error: {0}")]
	Configuration(String),
}

/// Conversion from serde_json::Error
impl From<serde_json::Error> for TokenError {
	fn from(error: serde_json::Error) -> Self {
		TokenError::Decode(error.to_string())
	}
}

/// Conversion from base64::DecodeError
impl From<base64::DecodeError> for TokenError {
	fn from(error: base64::DecodeError) -> Self {
		TokenError::Decode(error.to_string())
	}
}

/// Conversion from jsonwebtoken::errors::Error
impl From<jsonwebtoken::errors::Error> for TokenError {
	fn from(error: jsonwebtoken::errors::Error) -> Self {
		match error.kind() {
			jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::Expired,
			_ => TokenError::Decode(error.to_string()),
		}
	}
}
