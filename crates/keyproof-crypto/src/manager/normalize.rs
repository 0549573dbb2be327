use super::KeyManager;
use crate::{
    crypto::{CryptoKey, CryptoProvider, KeyUsage},
    error::Result,
    jwk::Jwk,
};

/// A key in any of the shapes callers hold it in.
#[derive(Clone, Debug)]
pub enum KeyInput {
    /// A JSON Web Key as JSON text.
    Text(String),
    /// A parsed JSON Web Key.
    Structured(Jwk),
    /// A handle that is already resolved.
    Handle(CryptoKey),
}

impl<P: CryptoProvider> KeyManager<P> {
    /// Resolves `input` to a handle for `usage`.
    ///
    /// Text and structured keys are imported. A handle is returned as is: its
    /// usages are not checked here, the provider enforces them when the handle
    /// is used.
    pub async fn resolve(&self, input: impl Into<KeyInput>, usage: KeyUsage) -> Result<CryptoKey> {
        match input.into() {
            KeyInput::Text(text) => self.import_portable_key_from_text(&text, usage).await,
            KeyInput::Structured(jwk) => self.import_portable_key(jwk, usage).await,
            KeyInput::Handle(key) => Ok(key),
        }
    }
}

impl From<String> for KeyInput {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for KeyInput {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<Jwk> for KeyInput {
    fn from(jwk: Jwk) -> Self {
        Self::Structured(jwk)
    }
}

impl From<&Jwk> for KeyInput {
    fn from(jwk: &Jwk) -> Self {
        Self::Structured(jwk.clone())
    }
}

impl From<CryptoKey> for KeyInput {
    fn from(key: CryptoKey) -> Self {
        Self::Handle(key)
    }
}

impl From<&CryptoKey> for KeyInput {
    fn from(key: &CryptoKey) -> Self {
        Self::Handle(key.clone())
    }
}
