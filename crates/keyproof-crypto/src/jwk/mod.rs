//! This module provides types and utilities for handling JSON Web Keys (JWKs).
//!
//! It is the portable key format of this crate: keys leave a [`CryptoKey`](crate::crypto::CryptoKey)
//! handle as a [`Jwk`] on export and come back through import.
//!
//! ## Submodules
//!
//! - [`bytes`]:  Base64url-encoded byte sequences.
//! - [`jwk`]:    The JSON Web Key type itself.
//! - [`key`]:    The key types that can be contained in a JWK.
//! - [`prm`]:    Parameters unrelated to the key implementation (`alg`, `use`, `key_ops`, ...).
//! - [`rsa`]:    RSA key members.
//! - [`secret`]: Private key members, handled securely.

pub mod bytes;
#[allow(clippy::module_inception)]
pub mod jwk;
pub mod key;
pub mod prm;
pub mod rsa;
pub mod secret;

pub use bytes::Bytes;
pub use jwk::Jwk;
pub use key::Key;
pub use prm::{Algorithm, Class, Encryption, Operations, Parameters, Signing};
pub use self::rsa::Rsa;
pub use secret::Secret;
