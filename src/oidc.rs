//! OpenID Connect identity token handling

pub mod id_token;

pub use id_token::{ISSUED_AT_MAX_AGE_SECS, IdTokenDecoder, IdTokenValidator};
