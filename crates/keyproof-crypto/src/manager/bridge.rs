use std::sync::Arc;

use super::KeyManager;
use crate::{
    crypto::{Algorithm, CryptoKey, CryptoProvider, KeyUsage},
    error::{Error, ErrorKind, Result},
    failable::capture,
    jwk::Jwk,
};

impl<P: CryptoProvider> KeyManager<P> {
    /// Exports a key handle as a JSON Web Key.
    ///
    /// Fails with [`ErrorKind::ProviderFault`] if the handle is not extractable.
    pub async fn export_portable_key(&self, key: &CryptoKey) -> Result<Jwk> {
        let provider = Arc::clone(&self.provider);
        let key = key.clone();

        capture(move || provider.export_key(&key)).await
    }

    /// Imports a JSON Web Key as a handle restricted to `usage`.
    ///
    /// The algorithm is derived from `usage`. Usage metadata carried by the JWK
    /// is not trusted to grant anything; it can only cause the import to fail
    /// when it contradicts `usage`. Imported handles are not extractable.
    pub async fn import_portable_key(&self, key: Jwk, usage: KeyUsage) -> Result<CryptoKey> {
        let provider = Arc::clone(&self.provider);
        let algorithm = Algorithm::for_usage(usage);

        tracing::trace!(%algorithm, %usage, "importing portable key");
        capture(move || provider.import_key(&key, algorithm, false, &[usage])).await
    }

    /// Parses `text` as a JSON Web Key and imports it for `usage`.
    ///
    /// Text that is not JSON fails with [`ErrorKind::MalformedInput`] before the
    /// provider is called. JSON that does not describe an RSA key fails with
    /// [`ErrorKind::KeyMaterial`].
    pub async fn import_portable_key_from_text(
        &self,
        text: &str,
        usage: KeyUsage,
    ) -> Result<CryptoKey> {
        let value: serde_json::Value = serde_json::from_str(text)?;
        let key: Jwk = serde_json::from_value(value)
            .map_err(|err| Error::new(ErrorKind::KeyMaterial, err))?;

        self.import_portable_key(key, usage).await
    }
}

#[cfg(test)]
mod tests {
    use crate::crypto::test_utils::signing_pair;
    use crate::crypto::KeyUsage;
    use crate::error::ErrorKind;
    use crate::KeyManager;

    #[tokio::test]
    async fn test_export_then_import() {
        let manager = KeyManager::default();
        let pair = signing_pair();

        let jwk = manager.export_portable_key(&pair.private_key).await.unwrap();
        let key = manager.import_portable_key(jwk, KeyUsage::Sign).await.unwrap();

        assert!(key.allows(KeyUsage::Sign));
        assert!(!key.is_extractable());

        // Imported keys cannot be exported again.
        let err = manager.export_portable_key(&key).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ProviderFault);
    }

    #[tokio::test]
    async fn test_import_from_text_errors() {
        let manager = KeyManager::default();

        let err = manager
            .import_portable_key_from_text("not json", KeyUsage::Sign)
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedInput);

        let err = manager
            .import_portable_key_from_text(r#"{"kty":"EC","crv":"P-256"}"#, KeyUsage::Sign)
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::KeyMaterial);

        let err = manager
            .import_portable_key_from_text(r#"{"kty":"RSA","n":"0vx7","e":"AQ"}"#, KeyUsage::Verify)
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::KeyMaterial);
    }

    #[tokio::test]
    async fn test_import_public_key_from_text() {
        let manager = KeyManager::default();
        let jwk = manager.export_portable_key(&signing_pair().public_key).await.unwrap();
        let text = serde_json::to_string(&jwk).unwrap();

        let key = manager
            .import_portable_key_from_text(&text, KeyUsage::Verify)
            .await
            .unwrap();
        assert!(key.allows(KeyUsage::Verify));

        let err = manager
            .import_portable_key_from_text(&text, KeyUsage::Encrypt)
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UsageViolation);
    }
}
