use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use keyproof_crypto::Purpose;
use tracing::Level;

#[derive(Parser, Debug)]
#[command(name = "keyproof")]
#[command(about = "Generate RSA key pairs and sign or encrypt text with them")]
#[command(version)]
pub struct Cli {
    /// Log level, overrides KEYPROOF_LOG_LEVEL
    #[arg(long, global = true)]
    pub log_level: Option<Level>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a key pair and print both halves as JWKs
    Generate {
        #[arg(value_enum)]
        purpose: PurposeArg,

        /// Keep the private key from being exported
        #[arg(long)]
        no_export: bool,
    },
    /// Sign a payload with a private JWK
    Sign {
        /// File holding the private JWK
        #[arg(long)]
        key: PathBuf,
        payload: String,
    },
    /// Check a base64 signature with a public JWK
    Verify {
        /// File holding the public JWK
        #[arg(long)]
        key: PathBuf,
        /// Base64 signature
        #[arg(long)]
        signature: String,
        payload: String,
    },
    /// Encrypt a payload with a public JWK
    Encrypt {
        /// File holding the public JWK
        #[arg(long)]
        key: PathBuf,
        payload: String,
    },
    /// Decrypt a base64 ciphertext with a private JWK
    Decrypt {
        /// File holding the private JWK
        #[arg(long)]
        key: PathBuf,
        ciphertext: String,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum PurposeArg {
    Signing,
    Encrypting,
}

impl From<PurposeArg> for Purpose {
    fn from(purpose: PurposeArg) -> Self {
        match purpose {
            PurposeArg::Signing => Purpose::Signing,
            PurposeArg::Encrypting => Purpose::Encrypting,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_generate() {
        let cli = Cli::try_parse_from(["keyproof", "generate", "encrypting", "--no-export"]).unwrap();

        match cli.command {
            Command::Generate { purpose, no_export } => {
                assert_eq!(purpose, PurposeArg::Encrypting);
                assert!(no_export);
            }
            other => panic!("unexpected command: {other:?}"),
        }
        assert_eq!(cli.log_level, None);
    }

    #[test]
    fn test_parse_verify() {
        let cli = Cli::try_parse_from([
            "keyproof",
            "--log-level",
            "trace",
            "verify",
            "--key",
            "public.json",
            "--signature",
            "AQID",
            "hello",
        ])
        .unwrap();

        assert_eq!(cli.log_level, Some(Level::TRACE));
        assert!(matches!(cli.command, Command::Verify { ref payload, .. } if payload == "hello"));
    }
}
