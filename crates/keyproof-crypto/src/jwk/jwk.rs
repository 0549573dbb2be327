use serde::{Deserialize, Serialize};

use super::{key::Key, prm::Parameters};

/// A JSON Web Key.
///
/// This type is defined in [RFC7517 Section 4].
///
/// [RFC7517 Section 4]: https://datatracker.ietf.org/doc/html/rfc7517#section-4
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Jwk {
    /// The key material.
    #[serde(flatten)]
    pub key: Key,

    /// The key parameters.
    #[serde(flatten)]
    pub prm: Parameters,
}

impl Jwk {
    /// Returns `true` if the key carries private material.
    pub fn is_private(&self) -> bool {
        match &self.key {
            Key::Rsa(rsa) => rsa.is_private(),
        }
    }

    /// Returns the public half of this key with the same parameters.
    pub fn to_public(&self) -> Self {
        let key = match &self.key {
            Key::Rsa(rsa) => Key::Rsa(rsa.to_public()),
        };

        Jwk {
            key,
            prm: self.prm.clone(),
        }
    }
}

impl From<Key> for Jwk {
    fn from(key: Key) -> Self {
        Self {
            key,
            prm: Parameters::default(),
        }
    }
}
