use core::fmt;

use base64ct::{Base64UrlUnpadded, Encoding};
use serde::{de::Error as _, Deserialize, Deserializer, Serialize, Serializer};
use subtle::ConstantTimeEq;
use zeroize::Zeroizing;

use super::bytes::decode;

/// Private key material.
///
/// Like [`Bytes`](super::Bytes) on the wire, but wiped from memory on drop,
/// redacted from `Debug` output and compared in constant time.
#[derive(Clone, Default)]
pub struct Secret(Zeroizing<Vec<u8>>);

impl Secret {
    /// Returns the raw secret bytes.
    pub fn expose(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for Secret {
    fn from(bytes: Vec<u8>) -> Self {
        Self(Zeroizing::new(bytes))
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Secret(***)")
    }
}

impl PartialEq for Secret {
    fn eq(&self, other: &Self) -> bool {
        self.0.as_slice().ct_eq(other.0.as_slice()).into()
    }
}

impl Eq for Secret {}

impl Serialize for Secret {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let encoded = Zeroizing::new(Base64UrlUnpadded::encode_string(&self.0));
        serializer.serialize_str(&encoded)
    }
}

impl<'de> Deserialize<'de> for Secret {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let encoded = Zeroizing::new(String::deserialize(deserializer)?);
        decode(&encoded).map(Self::from).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_is_redacted() {
        let secret = Secret::from(vec![1, 2, 3]);
        assert_eq!(format!("{secret:?}"), "Secret(***)");
    }

    #[test]
    fn test_equality() {
        assert_eq!(Secret::from(vec![1, 2, 3]), Secret::from(vec![1, 2, 3]));
        assert_ne!(Secret::from(vec![1, 2, 3]), Secret::from(vec![1, 2, 4]));
        assert_ne!(Secret::from(vec![1, 2, 3]), Secret::from(vec![1, 2]));
    }
}
