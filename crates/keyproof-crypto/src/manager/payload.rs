use std::sync::Arc;

use super::{KeyInput, KeyManager};
use crate::{
    artifact::{Artifact, ArtifactInput},
    crypto::{CryptoProvider, KeyUsage, SALT_LENGTH},
    error::{Error, ErrorKind, Result},
    failable::capture,
};

impl<P: CryptoProvider> KeyManager<P> {
    /// Signs the UTF-8 bytes of `payload` with RSA-PSS.
    ///
    /// `key` is resolved for [`KeyUsage::Sign`]; see [`resolve`](Self::resolve).
    pub async fn sign(&self, payload: &str, key: impl Into<KeyInput>) -> Result<Artifact> {
        let key = self.resolve(key, KeyUsage::Sign).await?;
        let provider = Arc::clone(&self.provider);
        let data = payload.as_bytes().to_vec();

        capture(move || provider.sign(&key, SALT_LENGTH, &data))
            .await
            .map(Artifact::from)
    }

    /// Checks that `signature` is a valid signature of `payload`.
    ///
    /// A signature that does not match is `Ok(false)`, not an error.
    pub async fn verify(
        &self,
        payload: &str,
        signature: impl Into<ArtifactInput>,
        key: impl Into<KeyInput>,
    ) -> Result<bool> {
        let signature = signature.into().into_bytes()?;
        let key = self.resolve(key, KeyUsage::Verify).await?;
        let provider = Arc::clone(&self.provider);
        let data = payload.as_bytes().to_vec();

        capture(move || provider.verify(&key, SALT_LENGTH, &signature, &data)).await
    }

    /// Encrypts the UTF-8 bytes of `payload` with RSA-OAEP.
    ///
    /// `key` is resolved for [`KeyUsage::Encrypt`]; see [`resolve`](Self::resolve).
    pub async fn encrypt(&self, payload: &str, key: impl Into<KeyInput>) -> Result<Artifact> {
        let key = self.resolve(key, KeyUsage::Encrypt).await?;
        let provider = Arc::clone(&self.provider);
        let data = payload.as_bytes().to_vec();

        capture(move || provider.encrypt(&key, &data))
            .await
            .map(Artifact::from)
    }

    /// Decrypts `ciphertext` back into the text it was made from.
    pub async fn decrypt(
        &self,
        ciphertext: impl Into<ArtifactInput>,
        key: impl Into<KeyInput>,
    ) -> Result<String> {
        let ciphertext = ciphertext.into().into_bytes()?;
        let key = self.resolve(key, KeyUsage::Decrypt).await?;
        let provider = Arc::clone(&self.provider);

        let plaintext = capture(move || provider.decrypt(&key, &ciphertext)).await?;
        String::from_utf8(plaintext).map_err(|err| Error::new(ErrorKind::MalformedInput, err))
    }
}
