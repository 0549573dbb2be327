use std::collections::BTreeSet;

use rsa::{RsaPrivateKey, RsaPublicKey};

use super::{alg::Algorithm, usage::KeyUsage};

/// Whether a handle holds the public or the private half of a key pair.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum KeyType {
    Public,
    Private,
}

/// Key material held by a handle.
#[derive(Clone)]
pub(crate) enum KeyMaterial {
    Public(RsaPublicKey),
    Private(RsaPrivateKey),
}

impl std::fmt::Debug for KeyMaterial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KeyMaterial::Public(_) => f.write_str("Public(***)"),
            KeyMaterial::Private(_) => f.write_str("Private(***)"),
        }
    }
}

impl KeyMaterial {
    fn key_type(&self) -> KeyType {
        match self {
            KeyMaterial::Public(_) => KeyType::Public,
            KeyMaterial::Private(_) => KeyType::Private,
        }
    }
}

/// An opaque handle to key material.
///
/// A handle is bound to one algorithm and a fixed set of usages when it is
/// generated or imported. Only the provider can look inside it.
#[derive(Clone)]
pub struct CryptoKey {
    algorithm: Algorithm,
    extractable: bool,
    usages: BTreeSet<KeyUsage>,
    material: KeyMaterial,
}

impl CryptoKey {
    pub(crate) fn new(
        algorithm: Algorithm,
        extractable: bool,
        usages: impl IntoIterator<Item = KeyUsage>,
        material: KeyMaterial,
    ) -> Self {
        Self {
            algorithm,
            extractable,
            usages: usages.into_iter().collect(),
            material,
        }
    }

    /// Returns the algorithm this key is bound to.
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Returns whether this is a public or a private key.
    pub fn key_type(&self) -> KeyType {
        self.material.key_type()
    }

    /// Returns `true` if the key may be exported.
    pub fn is_extractable(&self) -> bool {
        self.extractable
    }

    /// Returns the usages this key was declared with.
    pub fn usages(&self) -> impl Iterator<Item = KeyUsage> + '_ {
        self.usages.iter().copied()
    }

    /// Returns `true` if the key may be used for `usage`.
    pub fn allows(&self, usage: KeyUsage) -> bool {
        self.usages.contains(&usage)
    }

    pub(crate) fn material(&self) -> &KeyMaterial {
        &self.material
    }
}

impl std::fmt::Debug for CryptoKey {
    /// Never shows key material.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CryptoKey")
            .field("algorithm", &self.algorithm)
            .field("type", &self.key_type())
            .field("extractable", &self.extractable)
            .field("usages", &self.usages)
            .finish()
    }
}

/// A freshly generated key pair.
///
/// Lives in memory only. Export the halves if they have to outlive the pair.
#[derive(Clone, Debug)]
pub struct KeyPair {
    /// The half that verifies or encrypts; always extractable.
    pub public_key: CryptoKey,
    /// The half that signs or decrypts.
    pub private_key: CryptoKey,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::test_utils::signing_pair;

    #[test]
    fn test_debug_hides_key_material() {
        let pair = signing_pair();

        assert_eq!(format!("{:?}", pair.private_key.material()), "Private(***)");
        assert_eq!(format!("{:?}", pair.public_key.material()), "Public(***)");
        assert!(!format!("{:?}", pair.private_key).contains("material"));
    }
}
