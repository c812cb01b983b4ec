//! Caller identity: capabilities, the request-scoped principal, and the
//! bearer-token codec that turns a signed token into a principal.

pub mod errors;
pub mod principal;
pub mod token;

pub use errors::AuthError;
pub use principal::{Capability, Principal};
pub use token::TokenCodec;
