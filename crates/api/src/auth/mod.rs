//! Access-token handling.
//!
//! Tokens are normally minted by the external identity provider; this
//! module validates them and can generate equivalent tokens for local
//! tooling and tests.

pub mod jwt;
