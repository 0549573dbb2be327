//! The output of signing or encrypting a payload.

use base64ct::{Base64, Encoding};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Error, ErrorKind, Result};

/// A signature or ciphertext.
///
/// All views are derived from one byte sequence: [`buffer`](Self::buffer) and
/// [`bytes`](Self::bytes) expose it raw, [`base64`](Self::base64) as standard,
/// padded base64 text.
#[derive(Clone, PartialEq, Eq)]
pub struct Artifact {
    bytes: Vec<u8>,
    base64: String,
}

impl Artifact {
    /// Decodes an artifact from standard base64 text.
    pub fn from_base64(encoded: &str) -> Result<Self> {
        Base64::decode_vec(encoded.trim())
            .map(Self::from)
            .map_err(|err| Error::msg(ErrorKind::MalformedInput, format!("invalid base64: {err}")))
    }

    /// Returns the raw byte sequence.
    pub fn buffer(&self) -> &[u8] {
        &self.bytes
    }

    /// Returns the bytes of the artifact.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Returns the artifact as standard base64 text.
    pub fn base64(&self) -> &str {
        &self.base64
    }

    /// Returns the number of bytes in the artifact.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` if the artifact holds no bytes.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Consumes the artifact, returning its bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

impl From<Vec<u8>> for Artifact {
    fn from(bytes: Vec<u8>) -> Self {
        let base64 = Base64::encode_string(&bytes);
        Self { bytes, base64 }
    }
}

impl std::fmt::Debug for Artifact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Artifact").field(&self.base64).finish()
    }
}

impl std::fmt::Display for Artifact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.base64)
    }
}

impl Serialize for Artifact {
    fn serialize<S: Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.base64)
    }
}

impl<'de> Deserialize<'de> for Artifact {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> core::result::Result<Self, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        Artifact::from_base64(&encoded).map_err(serde::de::Error::custom)
    }
}

/// A signature or ciphertext handed back in for verification or decryption.
#[derive(Clone, Debug)]
pub enum ArtifactInput {
    /// An artifact produced by this crate.
    Artifact(Artifact),
    /// Raw bytes.
    Bytes(Vec<u8>),
    /// Standard base64 text.
    Base64(String),
}

impl ArtifactInput {
    /// Returns the raw bytes, decoding base64 text if needed.
    pub fn into_bytes(self) -> Result<Vec<u8>> {
        match self {
            ArtifactInput::Artifact(artifact) => Ok(artifact.into_bytes()),
            ArtifactInput::Bytes(bytes) => Ok(bytes),
            ArtifactInput::Base64(encoded) => Artifact::from_base64(&encoded).map(Artifact::into_bytes),
        }
    }
}

impl From<Artifact> for ArtifactInput {
    fn from(artifact: Artifact) -> Self {
        Self::Artifact(artifact)
    }
}

impl From<&Artifact> for ArtifactInput {
    fn from(artifact: &Artifact) -> Self {
        Self::Artifact(artifact.clone())
    }
}

impl From<Vec<u8>> for ArtifactInput {
    fn from(bytes: Vec<u8>) -> Self {
        Self::Bytes(bytes)
    }
}

impl From<&[u8]> for ArtifactInput {
    fn from(bytes: &[u8]) -> Self {
        Self::Bytes(bytes.to_vec())
    }
}

impl From<String> for ArtifactInput {
    fn from(encoded: String) -> Self {
        Self::Base64(encoded)
    }
}

impl From<&str> for ArtifactInput {
    fn from(encoded: &str) -> Self {
        Self::Base64(encoded.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_views_share_bytes() {
        let artifact = Artifact::from(vec![0xfb, 0xff, 0x00, 0x10]);

        assert_eq!(artifact.buffer(), &[0xfb, 0xff, 0x00, 0x10]);
        assert_eq!(artifact.bytes(), artifact.buffer());
        assert_eq!(artifact.base64(), "+/8AEA==");
        assert_eq!(Base64::decode_vec(artifact.base64()).unwrap(), artifact.bytes());
    }

    #[test]
    fn test_from_base64() {
        let artifact = Artifact::from_base64("+/8AEA==").unwrap();
        assert_eq!(artifact.bytes(), &[0xfb, 0xff, 0x00, 0x10]);

        let err = Artifact::from_base64("-_8AEA").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedInput);
    }

    #[test]
    fn test_input_shapes() {
        let artifact = Artifact::from(b"proof".to_vec());

        for input in [
            ArtifactInput::from(&artifact),
            ArtifactInput::from(b"proof".as_slice()),
            ArtifactInput::from(artifact.base64()),
        ] {
            assert_eq!(input.into_bytes().unwrap(), b"proof");
        }

        let err = ArtifactInput::from("not base64!").into_bytes().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedInput);
    }

    #[test]
    fn test_serializes_as_base64() {
        let artifact = Artifact::from(vec![1, 2, 3]);
        let json = serde_json::to_string(&artifact).unwrap();

        assert_eq!(json, r#""AQID""#);
        assert_eq!(serde_json::from_str::<Artifact>(&json).unwrap(), artifact);
    }
}
