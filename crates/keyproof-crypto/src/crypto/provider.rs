use rsa::{rand_core::OsRng, BigUint, Oaep, Pss, RsaPrivateKey, RsaPublicKey};
use sha2::{Digest, Sha256};

use super::{
    alg::{Algorithm, MODULUS_LENGTH, PUBLIC_EXPONENT},
    key::{CryptoKey, KeyMaterial, KeyPair, KeyType},
    traits::CryptoProvider,
    usage::KeyUsage,
};
use crate::{
    error::{Error, ErrorKind, Result},
    jwk::{Class, Jwk, Key, Parameters, Rsa},
};

/// The default provider, backed by the RustCrypto `rsa` crate.
///
/// Keys are 4096-bit with public exponent 65537; digests are SHA-256.
/// Usage rules follow the Web Crypto API: private keys sign or decrypt,
/// public keys verify or encrypt, and a key only performs the usages it was
/// declared with.
#[derive(Debug, Default, Clone, Copy)]
pub struct RsaProvider;

impl CryptoProvider for RsaProvider {
    fn generate_key_pair(
        &self,
        algorithm: Algorithm,
        extractable: bool,
        usages: &[KeyUsage],
    ) -> Result<KeyPair> {
        check_usages(algorithm, usages)?;

        if !usages.iter().any(KeyUsage::needs_private_key) {
            return Err(Error::msg(
                ErrorKind::UsageViolation,
                "a key pair needs at least one private key usage",
            ));
        }
        let private_usages = usages.iter().copied().filter(KeyUsage::needs_private_key);
        let public_usages = usages.iter().copied().filter(|u| !u.needs_private_key());

        let exponent = BigUint::from(PUBLIC_EXPONENT);
        let sk = RsaPrivateKey::new_with_exp(&mut OsRng, MODULUS_LENGTH, &exponent)?;
        let pk = sk.to_public_key();

        tracing::trace!(%algorithm, bits = MODULUS_LENGTH, "generated key pair");

        Ok(KeyPair {
            public_key: CryptoKey::new(algorithm, true, public_usages, KeyMaterial::Public(pk)),
            private_key: CryptoKey::new(
                algorithm,
                extractable,
                private_usages,
                KeyMaterial::Private(sk),
            ),
        })
    }

    fn export_key(&self, key: &CryptoKey) -> Result<Jwk> {
        if !key.is_extractable() {
            return Err(Error::msg(
                ErrorKind::ProviderFault,
                "key is not extractable",
            ));
        }

        let rsa = Rsa::try_from(key.material())?;

        Ok(Jwk {
            key: Key::Rsa(rsa),
            prm: Parameters {
                alg: Some(key.algorithm().jwk_alg()),
                ops: Some(key.usages().map(Into::into).collect()),
                ext: Some(true),
                ..Default::default()
            },
        })
    }

    fn import_key(
        &self,
        jwk: &Jwk,
        algorithm: Algorithm,
        extractable: bool,
        usages: &[KeyUsage],
    ) -> Result<CryptoKey> {
        check_usages(algorithm, usages)?;
        check_parameters(&jwk.prm, algorithm, extractable, usages)?;

        let (key_type, name) = match jwk.is_private() {
            true => (KeyType::Private, "private"),
            false => (KeyType::Public, "public"),
        };
        if let Some(usage) = usages
            .iter()
            .find(|u| u.needs_private_key() != (key_type == KeyType::Private))
        {
            return Err(violation(format!("{name} key cannot be used to {usage}")));
        }

        let material = match &jwk.key {
            Key::Rsa(rsa) => KeyMaterial::try_from(rsa)?,
        };

        Ok(CryptoKey::new(algorithm, extractable, usages.iter().copied(), material))
    }

    fn sign(&self, key: &CryptoKey, salt_length: usize, data: &[u8]) -> Result<Vec<u8>> {
        let sk = private_key(key, Algorithm::RsaPss, KeyUsage::Sign)?;

        let digest = Sha256::digest(data);
        let signature = sk.sign_with_rng(
            &mut OsRng,
            Pss::new_with_salt::<Sha256>(salt_length),
            &digest,
        )?;

        Ok(signature)
    }

    fn verify(
        &self,
        key: &CryptoKey,
        salt_length: usize,
        signature: &[u8],
        data: &[u8],
    ) -> Result<bool> {
        let pk = public_key(key, Algorithm::RsaPss, KeyUsage::Verify)?;

        let digest = Sha256::digest(data);
        match pk.verify(Pss::new_with_salt::<Sha256>(salt_length), &digest, signature) {
            Ok(()) => Ok(true),
            Err(rsa::Error::Verification) => Ok(false),
            Err(err) => Err(err.into()),
        }
    }

    fn encrypt(&self, key: &CryptoKey, data: &[u8]) -> Result<Vec<u8>> {
        let pk = public_key(key, Algorithm::RsaOaep, KeyUsage::Encrypt)?;

        Ok(pk.encrypt(&mut OsRng, Oaep::new::<Sha256>(), data)?)
    }

    fn decrypt(&self, key: &CryptoKey, data: &[u8]) -> Result<Vec<u8>> {
        let sk = private_key(key, Algorithm::RsaOaep, KeyUsage::Decrypt)?;

        Ok(sk.decrypt(Oaep::new::<Sha256>(), data)?)
    }
}

// Rejects usages that keys of `algorithm` can never have.
fn check_usages(algorithm: Algorithm, usages: &[KeyUsage]) -> Result<()> {
    if usages.is_empty() {
        return Err(Error::msg(
            ErrorKind::UsageViolation,
            "at least one key usage is required",
        ));
    }

    match usages.iter().find(|u| !algorithm.supports(**u)) {
        Some(usage) => Err(Error::msg(
            ErrorKind::UsageViolation,
            format!("{algorithm} keys cannot be used to {usage}"),
        )),
        None => Ok(()),
    }
}

// The declared usages win, but the JWK must not contradict them.
fn check_parameters(
    prm: &Parameters,
    algorithm: Algorithm,
    extractable: bool,
    usages: &[KeyUsage],
) -> Result<()> {
    if let Some(alg) = prm.alg {
        if alg != algorithm.jwk_alg() {
            return Err(violation(format!("key is meant for {alg}, not {algorithm}")));
        }
    }

    if let Some(cls) = prm.cls {
        if cls != algorithm.jwk_class() {
            let class = match cls {
                Class::Signing => "signing",
                Class::Encryption => "encryption",
            };
            return Err(violation(format!("key is meant for {class}, not {algorithm}")));
        }
    }

    if let Some(ops) = &prm.ops {
        if let Some(usage) = usages.iter().find(|u| !ops.contains(&(**u).into())) {
            return Err(violation(format!("key_ops does not allow {usage}")));
        }
    }

    if extractable && prm.ext == Some(false) {
        return Err(violation("key was exported as non-extractable"));
    }

    Ok(())
}

fn violation(msg: impl Into<String>) -> Error {
    Error::msg(ErrorKind::UsageViolation, msg.into())
}

// Checks that `key` may perform `usage` with `algorithm`.
fn check_key(key: &CryptoKey, algorithm: Algorithm, usage: KeyUsage) -> Result<()> {
    if key.algorithm() != algorithm {
        return Err(violation(format!(
            "{} key cannot be used to {usage}",
            key.algorithm()
        )));
    }

    if !key.allows(usage) {
        return Err(violation(format!("key usages do not include {usage}")));
    }

    Ok(())
}

fn private_key(key: &CryptoKey, algorithm: Algorithm, usage: KeyUsage) -> Result<&RsaPrivateKey> {
    check_key(key, algorithm, usage)?;
    match key.material() {
        KeyMaterial::Private(sk) => Ok(sk),
        KeyMaterial::Public(_) => Err(violation(format!("public key cannot be used to {usage}"))),
    }
}

fn public_key(key: &CryptoKey, algorithm: Algorithm, usage: KeyUsage) -> Result<&RsaPublicKey> {
    check_key(key, algorithm, usage)?;
    match key.material() {
        KeyMaterial::Public(pk) => Ok(pk),
        KeyMaterial::Private(_) => Err(violation(format!("private key cannot be used to {usage}"))),
    }
}
