//! The seam between key management and the cryptographic engine.

use super::{
    alg::Algorithm,
    key::{CryptoKey, KeyPair},
    usage::KeyUsage,
};
use crate::{error::Result, jwk::Jwk};

/// A cryptographic provider.
///
/// Implementations own key generation, key (de)serialization and the raw
/// primitives. They are trusted to be correct; callers are responsible only for
/// parameters and for containing failures (see [`capture`](crate::capture)).
/// Every method is blocking.
pub trait CryptoProvider: Send + Sync + 'static {
    /// Generates a key pair for `algorithm` with the given usages.
    ///
    /// The private half is extractable only if `extractable` is set; the public half always is.
    fn generate_key_pair(
        &self,
        algorithm: Algorithm,
        extractable: bool,
        usages: &[KeyUsage],
    ) -> Result<KeyPair>;

    /// Serializes a handle into a JSON Web Key.
    ///
    /// Fails if the handle is not extractable.
    fn export_key(&self, key: &CryptoKey) -> Result<Jwk>;

    /// Materializes a handle from a JSON Web Key for `algorithm` and the declared usages.
    fn import_key(
        &self,
        jwk: &Jwk,
        algorithm: Algorithm,
        extractable: bool,
        usages: &[KeyUsage],
    ) -> Result<CryptoKey>;

    /// Signs `data` with a private key.
    fn sign(&self, key: &CryptoKey, salt_length: usize, data: &[u8]) -> Result<Vec<u8>>;

    /// Checks `signature` over `data` with a public key.
    ///
    /// Returns `Ok(false)` if the signature does not match.
    fn verify(
        &self,
        key: &CryptoKey,
        salt_length: usize,
        signature: &[u8],
        data: &[u8],
    ) -> Result<bool>;

    /// Encrypts `data` with a public key.
    fn encrypt(&self, key: &CryptoKey, data: &[u8]) -> Result<Vec<u8>>;

    /// Decrypts `data` with a private key.
    fn decrypt(&self, key: &CryptoKey, data: &[u8]) -> Result<Vec<u8>>;
}
