use serde::{Deserialize, Serialize};

use super::{Bytes, Secret};

/// An RSA key, as defined in [RFC7518 Section 6.3].
///
/// Public keys carry only `n` and `e`.
/// Private keys additionally carry `d` and, for use with a provider, the CRT members.
///
/// [RFC7518 Section 6.3]: https://www.rfc-editor.org/rfc/rfc7518#section-6.3
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rsa {
    /// The modulus.
    pub n: Bytes,

    /// The public exponent.
    pub e: Bytes,

    /// The private exponent.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub d: Option<Secret>,

    /// The first prime factor.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub p: Option<Secret>,

    /// The second prime factor.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub q: Option<Secret>,

    /// The first factor CRT exponent.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub dp: Option<Secret>,

    /// The second factor CRT exponent.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub dq: Option<Secret>,

    /// The first CRT coefficient.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub qi: Option<Secret>,
}

impl Rsa {
    /// Returns `true` if the key carries a private exponent.
    pub fn is_private(&self) -> bool {
        self.d.is_some()
    }

    /// Returns a copy of the key without private members.
    pub fn to_public(&self) -> Self {
        Self {
            n: self.n.clone(),
            e: self.e.clone(),
            d: None,
            p: None,
            q: None,
            dp: None,
            dq: None,
            qi: None,
        }
    }
}
