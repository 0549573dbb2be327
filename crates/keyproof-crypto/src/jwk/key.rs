use serde::{Deserialize, Serialize};

use super::rsa::Rsa;

/// A key type that can be contained in a JWK.
///
/// Only the RSA family is supported by this crate.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE", tag = "kty")]
#[non_exhaustive]
pub enum Key {
    /// An RSA key.
    Rsa(Rsa),
}

impl From<Rsa> for Key {
    #[inline(always)]
    fn from(key: Rsa) -> Self {
        Self::Rsa(key)
    }
}
