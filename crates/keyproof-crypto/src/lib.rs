//! RSA key pairs, JSON Web Keys and text payload signing/encryption.
//!
//! The crate is built around a [`KeyManager`] that drives a [`CryptoProvider`]:
//!
//! - key pairs are generated for a [`Purpose`], either signing (RSA-PSS) or
//!   encrypting (RSA-OAEP);
//! - keys cross process boundaries as JSON Web Keys ([`jwk::Jwk`]);
//! - keys are accepted as JWK text, a parsed JWK or a ready [`CryptoKey`]
//!   ([`KeyInput`]), and signatures and ciphertexts come back as an [`Artifact`].
//!
//! Every fallible operation returns a [`Result`] whose error carries an
//! [`ErrorKind`]. Provider calls run through [`capture`], so a failing or
//! panicking provider never unwinds into the caller.

mod artifact;
mod error;
mod failable;
mod manager;

pub mod crypto;
pub mod jwk;

pub use artifact::{Artifact, ArtifactInput};
pub use crypto::{
    Algorithm, CryptoKey, CryptoProvider, KeyPair, KeyType, KeyUsage, Purpose, RsaProvider,
};
pub use error::{Error, ErrorKind, Result};
pub use failable::capture;
pub use manager::{KeyInput, KeyManager};
