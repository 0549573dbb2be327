//! Key management and payload operations.
//!
//! [`KeyManager`] strings the provider calls together. Every provider call runs
//! through [`capture`](crate::capture), and every stage short-circuits on the
//! first failure, returning that failure unchanged.
//!
//! ```no_run
//! # async fn run() -> keyproof_crypto::Result<()> {
//! use keyproof_crypto::KeyManager;
//!
//! let manager = KeyManager::default();
//! let pair = manager.generate_signing_key_pair(true).await?;
//! let private_jwk = manager.export_portable_key(&pair.private_key).await?;
//!
//! // later, from the stored JWK text
//! let text = serde_json::to_string(&private_jwk).unwrap();
//! let signature = manager.sign("challenge", text).await?;
//! assert!(manager.verify("challenge", &signature, &pair.public_key).await?);
//! # Ok(())
//! # }
//! ```

mod bridge;
mod generate;
mod normalize;
mod payload;

use std::sync::Arc;

use crate::crypto::{CryptoProvider, RsaProvider};

pub use normalize::KeyInput;

/// Entry point for generating, (de)serializing and using keys.
///
/// Holds nothing but the provider; it keeps no keys between calls.
#[derive(Debug)]
pub struct KeyManager<P = RsaProvider> {
    provider: Arc<P>,
}

impl<P: CryptoProvider> KeyManager<P> {
    /// Creates a manager on top of `provider`.
    pub fn new(provider: P) -> Self {
        Self {
            provider: Arc::new(provider),
        }
    }

    /// Returns the provider used by this manager.
    pub fn provider(&self) -> &P {
        &self.provider
    }
}

impl Default for KeyManager<RsaProvider> {
    fn default() -> Self {
        Self::new(RsaProvider)
    }
}

impl<P> Clone for KeyManager<P> {
    fn clone(&self) -> Self {
        Self {
            provider: Arc::clone(&self.provider),
        }
    }
}
