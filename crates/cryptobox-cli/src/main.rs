//! Command-line interface for `cryptobox`.
//!
//! Encrypts and decrypts whole files in ECB with a hex-encoded AES key.
//! Plaintext is zero-padded to a block multiple and prefixed with a SHA-512
//! digest so decryption with the wrong key is detected.

#![forbid(unsafe_code)]

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use cryptobox_aes::{decrypt_block, encrypt_block, expand_key, AesKey, BLOCK_SIZE};
use sha2::{Digest, Sha512};

const DIGEST_LEN: usize = 64;

/// File encryption CLI built on the cryptobox AES engine.
#[derive(Parser)]
#[command(name = "cryptobox", version, about = "Encrypt and decrypt files with AES")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt a file.
    Encrypt {
        /// AES key as 32, 48, or 64 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Input plaintext file.
        #[arg(long, value_name = "FILE")]
        input: PathBuf,
        /// Output ciphertext path.
        #[arg(long, value_name = "FILE")]
        output: PathBuf,
    },
    /// Decrypt a file produced by `encrypt`.
    Decrypt {
        /// AES key as 32, 48, or 64 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Input ciphertext file.
        #[arg(long, value_name = "FILE")]
        input: PathBuf,
        /// Output plaintext path.
        #[arg(long, value_name = "FILE")]
        output: PathBuf,
    },
}

fn parse_key(key_hex: &str) -> Result<AesKey> {
    let bytes = hex::decode(key_hex).context("key is not valid hex")?;
    AesKey::new(&bytes).map_err(|err| anyhow::anyhow!(err))
}

/// Pads with zero bytes up to the next block boundary. Already-aligned
/// input is left untouched.
fn zero_pad(mut data: Vec<u8>) -> Vec<u8> {
    let remainder = data.len() % BLOCK_SIZE;
    if remainder != 0 {
        data.resize(data.len() + BLOCK_SIZE - remainder, 0);
    }
    data
}

fn encrypt_file(key_hex: &str, input: &PathBuf, output: &PathBuf) -> Result<()> {
    let key = parse_key(key_hex)?;
    let data = fs::read(input).with_context(|| format!("reading {}", input.display()))?;
    let padded = zero_pad(data);
    let digest = Sha512::digest(&padded);

    let round_keys = expand_key(&key);
    let mut out = Vec::with_capacity(DIGEST_LEN + padded.len());
    out.extend_from_slice(digest.as_slice());
    for chunk in padded.chunks_exact(BLOCK_SIZE) {
        let block: [u8; 16] = chunk.try_into().expect("chunk is one block");
        out.extend_from_slice(&encrypt_block(&block, &round_keys));
    }

    fs::write(output, out).with_context(|| format!("writing {}", output.display()))?;
    Ok(())
}

fn decrypt_file(key_hex: &str, input: &PathBuf, output: &PathBuf) -> Result<()> {
    let key = parse_key(key_hex)?;
    let data = fs::read(input).with_context(|| format!("reading {}", input.display()))?;
    if data.len() < DIGEST_LEN || (data.len() - DIGEST_LEN) % BLOCK_SIZE != 0 {
        bail!("ciphertext is truncated or not a whole number of blocks");
    }
    let (header, body) = data.split_at(DIGEST_LEN);

    let round_keys = expand_key(&key);
    let mut plain = Vec::with_capacity(body.len());
    for chunk in body.chunks_exact(BLOCK_SIZE) {
        let block: [u8; 16] = chunk.try_into().expect("chunk is one block");
        plain.extend_from_slice(&decrypt_block(&block, &round_keys));
    }

    let digest = Sha512::digest(&plain);
    if digest.as_slice() != header {
        bail!("digest mismatch: wrong key or corrupted ciphertext");
    }

    fs::write(output, plain).with_context(|| format!("writing {}", output.display()))?;
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match &cli.command {
        Commands::Encrypt {
            key_hex,
            input,
            output,
        } => encrypt_file(key_hex, input, output),
        Commands::Decrypt {
            key_hex,
            input,
            output,
        } => decrypt_file(key_hex, input, output),
    }
}
