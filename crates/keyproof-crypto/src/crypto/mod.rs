//! Key handles and the cryptographic provider behind them.
//!
//! A [`CryptoKey`] is an opaque handle bound to one [`Algorithm`] and a set of
//! [`KeyUsage`]s. Handles are created and consumed by a [`CryptoProvider`];
//! [`RsaProvider`] is the default one, implementing [RSA-PSS] signatures and
//! [RSA-OAEP] encryption over 4096-bit keys with [SHA-256].
//!
//! [RSA-PSS]: https://www.rfc-editor.org/rfc/rfc8017#section-8.1
//! [RSA-OAEP]: https://www.rfc-editor.org/rfc/rfc8017#section-7.1
//! [SHA-256]: https://en.wikipedia.org/wiki/SHA-2

mod alg;
mod format;
mod key;
mod provider;
mod traits;
mod usage;

#[cfg(test)]
pub(crate) mod test_utils;

pub use alg::{Algorithm, Purpose, MODULUS_LENGTH, PUBLIC_EXPONENT, SALT_LENGTH};
pub use key::{CryptoKey, KeyPair, KeyType};
pub use provider::RsaProvider;
pub use traits::CryptoProvider;
pub use usage::KeyUsage;
