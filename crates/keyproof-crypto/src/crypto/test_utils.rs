//! Shared key pairs for unit tests. 4096-bit generation is slow, so each is made once.

use once_cell::sync::Lazy;

use super::{Algorithm, CryptoProvider, KeyPair, KeyUsage, RsaProvider};

static SIGNING_PAIR: Lazy<KeyPair> = Lazy::new(|| {
    RsaProvider
        .generate_key_pair(Algorithm::RsaPss, true, &[KeyUsage::Sign, KeyUsage::Verify])
        .expect("signing key pair")
});

static ENCRYPTING_PAIR: Lazy<KeyPair> = Lazy::new(|| {
    RsaProvider
        .generate_key_pair(Algorithm::RsaOaep, true, &[KeyUsage::Encrypt, KeyUsage::Decrypt])
        .expect("encrypting key pair")
});

pub(crate) fn signing_pair() -> KeyPair {
    SIGNING_PAIR.clone()
}

pub(crate) fn encrypting_pair() -> KeyPair {
    ENCRYPTING_PAIR.clone()
}
