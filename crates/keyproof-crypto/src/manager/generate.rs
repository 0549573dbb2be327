use std::sync::Arc;

use super::KeyManager;
use crate::{
    crypto::{CryptoProvider, KeyPair, Purpose},
    error::Result,
    failable::capture,
};

impl<P: CryptoProvider> KeyManager<P> {
    /// Generates a key pair for `purpose`.
    ///
    /// `exportable` controls whether the private key can later be exported;
    /// the public key always can.
    pub async fn generate_key_pair(&self, purpose: Purpose, exportable: bool) -> Result<KeyPair> {
        let provider = Arc::clone(&self.provider);
        let algorithm = purpose.algorithm();

        tracing::debug!(?purpose, %algorithm, exportable, "generating key pair");
        capture(move || provider.generate_key_pair(algorithm, exportable, &purpose.usages())).await
    }

    /// Generates an RSA-PSS key pair with `sign` and `verify` usages.
    pub async fn generate_signing_key_pair(&self, exportable: bool) -> Result<KeyPair> {
        self.generate_key_pair(Purpose::Signing, exportable).await
    }

    /// Generates an RSA-OAEP key pair with `encrypt` and `decrypt` usages.
    pub async fn generate_encrypting_key_pair(&self, exportable: bool) -> Result<KeyPair> {
        self.generate_key_pair(Purpose::Encrypting, exportable).await
    }
}

#[cfg(test)]
mod tests {
    use crate::crypto::{Algorithm, KeyUsage};
    use crate::error::ErrorKind;
    use crate::KeyManager;

    #[tokio::test]
    async fn test_generate_encrypting_key_pair_not_exportable() {
        let manager = KeyManager::default();
        let pair = manager.generate_encrypting_key_pair(false).await.unwrap();

        assert_eq!(pair.private_key.algorithm(), Algorithm::RsaOaep);
        assert!(pair.private_key.allows(KeyUsage::Decrypt));
        assert!(pair.public_key.allows(KeyUsage::Encrypt));
        assert!(!pair.private_key.is_extractable());
        assert!(pair.public_key.is_extractable());

        let err = manager.export_portable_key(&pair.private_key).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ProviderFault);
        assert!(manager.export_portable_key(&pair.public_key).await.is_ok());
    }
}
