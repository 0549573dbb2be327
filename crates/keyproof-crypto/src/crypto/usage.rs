use core::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    error::{Error, ErrorKind},
    jwk::Operations,
};

/// The operation a key handle is permitted to perform.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyUsage {
    /// Produce signatures; private keys only.
    Sign,
    /// Check signatures; public keys only.
    Verify,
    /// Encrypt payloads; public keys only.
    Encrypt,
    /// Decrypt ciphertexts; private keys only.
    Decrypt,
}

impl KeyUsage {
    /// Returns the literal used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            KeyUsage::Sign => "sign",
            KeyUsage::Verify => "verify",
            KeyUsage::Encrypt => "encrypt",
            KeyUsage::Decrypt => "decrypt",
        }
    }

    /// Returns `true` for usages that require private key material.
    pub fn needs_private_key(&self) -> bool {
        matches!(self, KeyUsage::Sign | KeyUsage::Decrypt)
    }
}

impl fmt::Display for KeyUsage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for KeyUsage {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sign" => Ok(KeyUsage::Sign),
            "verify" => Ok(KeyUsage::Verify),
            "encrypt" => Ok(KeyUsage::Encrypt),
            "decrypt" => Ok(KeyUsage::Decrypt),
            other => Err(Error::msg(
                ErrorKind::UsageViolation,
                format!("unknown key usage `{other}`"),
            )),
        }
    }
}

impl From<KeyUsage> for Operations {
    fn from(usage: KeyUsage) -> Self {
        match usage {
            KeyUsage::Sign => Operations::Sign,
            KeyUsage::Verify => Operations::Verify,
            KeyUsage::Encrypt => Operations::Encrypt,
            KeyUsage::Decrypt => Operations::Decrypt,
        }
    }
}
