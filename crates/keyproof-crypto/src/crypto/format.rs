use rsa::{
    traits::{PrivateKeyParts, PublicKeyParts},
    BigUint, RsaPrivateKey, RsaPublicKey,
};

use super::key::KeyMaterial;
use crate::{
    error::{Error, ErrorKind, Result},
    jwk::{Bytes, Rsa, Secret},
};

impl TryFrom<&KeyMaterial> for Rsa {
    type Error = Error;

    fn try_from(material: &KeyMaterial) -> Result<Self> {
        match material {
            KeyMaterial::Public(pk) => Ok(public_members(pk)),
            KeyMaterial::Private(sk) => {
                let [p, q] = sk.primes() else {
                    return Err(Error::msg(
                        ErrorKind::ProviderFault,
                        "only two-prime keys can be exported",
                    ));
                };
                let (Some(dp), Some(dq), Some(qi)) = (sk.dp(), sk.dq(), sk.qinv()) else {
                    return Err(Error::msg(
                        ErrorKind::ProviderFault,
                        "private key has no CRT values",
                    ));
                };

                Ok(Rsa {
                    d: Some(secret(sk.d())),
                    p: Some(secret(p)),
                    q: Some(secret(q)),
                    dp: Some(secret(dp)),
                    dq: Some(secret(dq)),
                    qi: Some(Secret::from(qi.to_bytes_be().1)),
                    ..public_members(sk)
                })
            }
        }
    }
}

impl TryFrom<&Rsa> for KeyMaterial {
    type Error = Error;

    fn try_from(rsa: &Rsa) -> Result<Self> {
        let n = BigUint::from_bytes_be(rsa.n.as_slice());
        let e = BigUint::from_bytes_be(rsa.e.as_slice());

        let Some(d) = &rsa.d else {
            return RsaPublicKey::new(n, e)
                .map(KeyMaterial::Public)
                .map_err(|err| Error::new(ErrorKind::KeyMaterial, err));
        };

        let (Some(p), Some(q)) = (&rsa.p, &rsa.q) else {
            return Err(Error::msg(
                ErrorKind::KeyMaterial,
                "private key is missing its prime factors",
            ));
        };

        RsaPrivateKey::from_components(
            n,
            e,
            BigUint::from_bytes_be(d.expose()),
            vec![
                BigUint::from_bytes_be(p.expose()),
                BigUint::from_bytes_be(q.expose()),
            ],
        )
        .and_then(|sk| sk.validate().map(|_| sk))
        .map(KeyMaterial::Private)
        .map_err(|err| Error::new(ErrorKind::KeyMaterial, err))
    }
}

fn public_members(key: &impl PublicKeyParts) -> Rsa {
    Rsa {
        n: Bytes::from(key.n().to_bytes_be()),
        e: Bytes::from(key.e().to_bytes_be()),
        d: None,
        p: None,
        q: None,
        dp: None,
        dq: None,
        qi: None,
    }
}

fn secret(value: &BigUint) -> Secret {
    Secret::from(value.to_bytes_be())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jwk::{Jwk, Key};

    // n = 61 * 53, e = 17
    fn tiny_public_key() -> Rsa {
        Rsa {
            n: Bytes::from(vec![0x0c, 0xa1]),
            e: Bytes::from(vec![0x11]),
            d: None,
            p: None,
            q: None,
            dp: None,
            dq: None,
            qi: None,
        }
    }

    #[test]
    fn test_public_key_from_jwk() {
        // RFC 7515, appendix A.2.
        let jwk: Jwk = serde_json::from_str(
            r#"{
                "kty": "RSA",
                "n": "ofgWCuLjybRlzo0tZWJjNiuSfb4p4fAkd_wWJcyQoTbji9k0l8W26mPddxHmfHQp-Vaw-4qPCJrcS2mJPMEzP1Pt0Bm4d4QlL-yRT-SFd2lZS-pCgNMsD1W_YpRPEwOWvG6b32690r2jZ47soMZo9wGzjb_7OMg0LOL-bSf63kpaSHSXndS5z5rexMdbBYUsLA9e-KXBdQOS-UTo7WTBEMa2R2CapHg665xsmtdVMTBQY4uDZlxvb3qCo5ZwKh9kG4LT6_I5IhlJH7aGhyxXFvUK-DWNmoudF8NAco9_h9iaGNj8q2ethFkMLs91kzk2PAcDTW9gb54h4FRWyuXpoQ",
                "e": "AQAB"
            }"#,
        )
        .unwrap();

        let Key::Rsa(rsa) = &jwk.key;
        let material = KeyMaterial::try_from(rsa).unwrap();
        assert!(matches!(material, KeyMaterial::Public(_)));

        let exported = Rsa::try_from(&material).unwrap();
        assert_eq!(&exported, rsa);
    }

    #[test]
    fn test_reject_tiny_exponent() {
        let rsa = Rsa {
            e: Bytes::from(vec![1]),
            ..tiny_public_key()
        };

        let err = KeyMaterial::try_from(&rsa).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::KeyMaterial);
    }

    #[test]
    fn test_reject_private_key_without_primes() {
        let rsa = Rsa {
            d: Some(Secret::from(vec![0x0b, 0x0d])),
            ..tiny_public_key()
        };

        let err = KeyMaterial::try_from(&rsa).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::KeyMaterial);
    }
}
