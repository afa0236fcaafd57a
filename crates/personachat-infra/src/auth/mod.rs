//! Authentication infrastructure: JWT issuance and verification.

pub mod jwt;

pub use jwt::JwtCodec;
