//! OAuth2 flow building blocks

pub mod authorization;

pub use authorization::AuthorizationRequest;
