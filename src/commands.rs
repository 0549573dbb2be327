use std::path::Path;

use eyre::{Result, WrapErr};
use keyproof_crypto::{KeyManager, Purpose};
use serde_json::json;
use tracing::{info, warn};

use crate::cli::Command;

/// What a command prints, and whether it succeeded.
#[derive(Debug, PartialEq)]
pub struct Outcome {
    pub output: String,
    pub success: bool,
}

impl Outcome {
    fn ok(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            success: true,
        }
    }
}

pub async fn run(manager: &KeyManager, command: Command, exportable: bool) -> Result<Outcome> {
    match command {
        Command::Generate { purpose, no_export } => {
            generate(manager, purpose.into(), exportable && !no_export).await
        }
        Command::Sign { key, payload } => {
            let key = read_key(&key).await?;
            let signature = manager.sign(&payload, key).await?;
            Ok(Outcome::ok(signature.base64()))
        }
        Command::Verify {
            key,
            signature,
            payload,
        } => {
            let key = read_key(&key).await?;
            let valid = manager.verify(&payload, signature, key).await?;
            if !valid {
                warn!("signature does not match payload");
            }
            Ok(Outcome {
                output: valid.to_string(),
                success: valid,
            })
        }
        Command::Encrypt { key, payload } => {
            let key = read_key(&key).await?;
            let ciphertext = manager.encrypt(&payload, key).await?;
            Ok(Outcome::ok(ciphertext.base64()))
        }
        Command::Decrypt { key, ciphertext } => {
            let key = read_key(&key).await?;
            Ok(Outcome::ok(manager.decrypt(ciphertext, key).await?))
        }
    }
}

async fn generate(manager: &KeyManager, purpose: Purpose, exportable: bool) -> Result<Outcome> {
    let pair = manager.generate_key_pair(purpose, exportable).await?;
    info!(?purpose, exportable, "generated key pair");

    let public_key = manager.export_portable_key(&pair.public_key).await?;
    let mut keys = json!({ "publicKey": public_key });

    if exportable {
        let private_key = manager.export_portable_key(&pair.private_key).await?;
        keys["privateKey"] = serde_json::to_value(private_key)?;
    } else {
        warn!("private key is not exportable and was discarded");
    }

    Ok(Outcome::ok(serde_json::to_string_pretty(&keys)?))
}

async fn read_key(path: &Path) -> Result<String> {
    tokio::fs::read_to_string(path)
        .await
        .wrap_err_with(|| format!("failed to read key file {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::PurposeArg;
    use serde_json::Value;
    use std::io::Write;
    use tempfile::NamedTempFile;

    // Returns the member `name` of generated key output, as JSON text.
    fn member(outcome: &Outcome, name: &str) -> Option<String> {
        let keys: Value = serde_json::from_str(&outcome.output).ok()?;
        keys.get(name).map(Value::to_string)
    }

    fn key_file(jwk: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(jwk.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn test_generate_sign_verify() {
        let manager = KeyManager::default();
        let generate = Command::Generate {
            purpose: PurposeArg::Signing,
            no_export: false,
        };
        let keys = run(&manager, generate, true).await.unwrap();
        let private_key = key_file(&member(&keys, "privateKey").unwrap());
        let public_key = key_file(&member(&keys, "publicKey").unwrap());

        let sign = Command::Sign {
            key: private_key.path().to_owned(),
            payload: "hello".into(),
        };
        let signature = run(&manager, sign, true).await.unwrap().output;

        let verify = |payload: &str| Command::Verify {
            key: public_key.path().to_owned(),
            signature: signature.clone(),
            payload: payload.into(),
        };
        assert!(run(&manager, verify("hello"), true).await.unwrap().success);

        let outcome = run(&manager, verify("bye"), true).await.unwrap();
        assert_eq!(outcome, Outcome { output: "false".into(), success: false });
    }

    #[tokio::test]
    async fn test_generate_without_export() {
        let manager = KeyManager::default();
        let generate = Command::Generate {
            purpose: PurposeArg::Encrypting,
            no_export: true,
        };
        let keys = run(&manager, generate, true).await.unwrap();

        assert!(member(&keys, "publicKey").is_some());
        assert!(member(&keys, "privateKey").is_none());
    }

    #[tokio::test]
    async fn test_missing_key_file() {
        let manager = KeyManager::default();
        let sign = Command::Sign {
            key: "/nonexistent/key.json".into(),
            payload: "hello".into(),
        };

        let err = run(&manager, sign, true).await.unwrap_err();
        assert!(err.to_string().contains("failed to read key file"));
    }
}
