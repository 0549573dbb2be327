use core::fmt;

use super::usage::KeyUsage;
use crate::jwk::{self, Class, Encryption, Signing};

/// Modulus length, in bits, of every generated key.
pub const MODULUS_LENGTH: usize = 4096;

/// Public exponent of every generated key (`[1, 0, 1]` big-endian).
pub const PUBLIC_EXPONENT: u32 = 65537;

/// Salt length, in bytes, of PSS signatures.
pub const SALT_LENGTH: usize = 32;

/// Algorithm families supported by the provider. Both use SHA-256.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// RSASSA-PSS, for signing and verifying.
    RsaPss,
    /// RSAES-OAEP, for encrypting and decrypting.
    RsaOaep,
}

use Algorithm::*;

impl Algorithm {
    /// Returns the Web Crypto name of the algorithm.
    pub fn name(&self) -> &'static str {
        match self {
            RsaPss => "RSA-PSS",
            RsaOaep => "RSA-OAEP",
        }
    }

    /// Returns the name of the digest used by the algorithm.
    pub fn hash(&self) -> &'static str {
        "SHA-256"
    }

    /// Returns the algorithm that serves the given usage.
    pub fn for_usage(usage: KeyUsage) -> Self {
        match usage {
            KeyUsage::Sign | KeyUsage::Verify => RsaPss,
            KeyUsage::Encrypt | KeyUsage::Decrypt => RsaOaep,
        }
    }

    /// Returns the usage a public key of this algorithm may have.
    pub fn public_usage(&self) -> KeyUsage {
        match self {
            RsaPss => KeyUsage::Verify,
            RsaOaep => KeyUsage::Encrypt,
        }
    }

    /// Returns the usage a private key of this algorithm may have.
    pub fn private_usage(&self) -> KeyUsage {
        match self {
            RsaPss => KeyUsage::Sign,
            RsaOaep => KeyUsage::Decrypt,
        }
    }

    /// Returns `true` if keys of this algorithm may carry `usage`.
    pub fn supports(&self, usage: KeyUsage) -> bool {
        usage == self.public_usage() || usage == self.private_usage()
    }

    /// Returns the JWK `alg` value of this algorithm.
    pub fn jwk_alg(&self) -> jwk::Algorithm {
        match self {
            RsaPss => Signing::Ps256.into(),
            RsaOaep => Encryption::RsaOaep256.into(),
        }
    }

    /// Returns the JWK `use` value of this algorithm.
    pub fn jwk_class(&self) -> Class {
        match self {
            RsaPss => Class::Signing,
            RsaOaep => Class::Encryption,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What a generated key pair is for.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Purpose {
    /// A pair with `sign` and `verify` usages.
    Signing,
    /// A pair with `encrypt` and `decrypt` usages.
    Encrypting,
}

impl Purpose {
    /// Returns the algorithm used for pairs of this purpose.
    pub fn algorithm(&self) -> Algorithm {
        match self {
            Purpose::Signing => RsaPss,
            Purpose::Encrypting => RsaOaep,
        }
    }

    /// Returns the usages declared for pairs of this purpose.
    pub fn usages(&self) -> [KeyUsage; 2] {
        let alg = self.algorithm();
        [alg.private_usage(), alg.public_usage()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_purpose_usages() {
        assert_eq!(Purpose::Signing.usages(), [KeyUsage::Sign, KeyUsage::Verify]);
        assert_eq!(Purpose::Encrypting.usages(), [KeyUsage::Decrypt, KeyUsage::Encrypt]);
    }

    #[test]
    fn test_algorithm_for_usage() {
        assert_eq!(Algorithm::for_usage(KeyUsage::Sign), RsaPss);
        assert_eq!(Algorithm::for_usage(KeyUsage::Verify), RsaPss);
        assert_eq!(Algorithm::for_usage(KeyUsage::Encrypt), RsaOaep);
        assert_eq!(Algorithm::for_usage(KeyUsage::Decrypt), RsaOaep);

        assert!(RsaPss.supports(KeyUsage::Sign));
        assert!(!RsaPss.supports(KeyUsage::Encrypt));
    }

    #[test]
    fn test_jwk_alg_names() {
        assert_eq!(RsaPss.jwk_alg().to_string(), "PS256");
        assert_eq!(RsaOaep.jwk_alg().to_string(), "RSA-OAEP-256");
    }
}
