use base64ct::{Base64UrlUnpadded, Encoding};
use serde::{de::Error as _, Deserialize, Deserializer, Serialize, Serializer};

/// A byte sequence serialized as unpadded base64url, the encoding of binary JWK members.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Bytes(Vec<u8>);

impl Bytes {
    /// Returns the raw bytes.
    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    /// Returns `true` if the sequence holds no bytes.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<u8>> for Bytes {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl From<&[u8]> for Bytes {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }
}

impl From<Bytes> for Vec<u8> {
    fn from(bytes: Bytes) -> Self {
        bytes.0
    }
}

impl AsRef<[u8]> for Bytes {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Serialize for Bytes {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&Base64UrlUnpadded::encode_string(&self.0))
    }
}

impl<'de> Deserialize<'de> for Bytes {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        decode(&encoded).map(Self).map_err(D::Error::custom)
    }
}

// Some encoders keep the padding; accept both forms.
pub(super) fn decode(encoded: &str) -> Result<Vec<u8>, base64ct::Error> {
    Base64UrlUnpadded::decode_vec(encoded.trim_end_matches('='))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_as_unpadded_base64url() {
        let bytes = Bytes::from(vec![0xfb, 0xff, 0x01]);
        assert_eq!(serde_json::to_string(&bytes).unwrap(), r#""-_8B""#);
    }

    #[test]
    fn test_accepts_padded_input() {
        let bytes: Bytes = serde_json::from_str(r#""AQAB""#).unwrap();
        assert_eq!(bytes.as_slice(), &[1, 0, 1]);

        let bytes: Bytes = serde_json::from_str(r#""AQ==""#).unwrap();
        assert_eq!(bytes.as_slice(), &[1]);
    }

    #[test]
    fn test_rejects_standard_alphabet() {
        assert!(serde_json::from_str::<Bytes>(r#""+/8B""#).is_err());
    }
}
