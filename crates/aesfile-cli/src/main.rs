//! Command-line interface for `aesfile`.

#![forbid(unsafe_code)]

use std::fs;
use std::path::PathBuf;

use aesfile_core::{decrypt, encrypt, KeySize};
use anyhow::{bail, Context, Result};
use clap::Parser;
use log::info;

/// AES file encryption tool.
///
/// Encrypts or decrypts a whole file with AES-128 or AES-256, one
/// independent 16-byte block at a time, with PKCS#7-style padding. The key
/// file holds the raw key bytes, exactly 16 or 32 of them.
#[derive(Parser)]
#[command(name = "aesfile", version, author, about = "Encrypt or decrypt files with AES-128/AES-256")]
struct Cli {
    /// Key size in bits (128 or 256).
    #[arg(long = "keysize", value_name = "BITS", value_parser = parse_key_size)]
    key_size: KeySize,

    /// Path to the raw key file.
    #[arg(
        long = "keyfile",
        value_name = "FILE",
        required_unless_present = "key_hex",
        conflicts_with = "key_hex"
    )]
    key_file: Option<PathBuf>,

    /// Key as hex characters, as an alternative to --keyfile.
    #[arg(long = "key-hex", value_name = "HEX")]
    key_hex: Option<String>,

    /// Input file.
    #[arg(long = "inputfile", value_name = "FILE")]
    input_file: PathBuf,

    /// Output file.
    #[arg(long = "outputfile", value_name = "FILE")]
    output_file: PathBuf,

    /// `encrypt` (aliases: e, 0) or `decrypt` (aliases: d, 1).
    #[arg(long, value_name = "MODE", value_parser = parse_mode)]
    mode: Mode,
}

#[derive(Clone, Copy, Debug)]
enum Mode {
    Encrypt,
    Decrypt,
}

fn parse_key_size(arg: &str) -> Result<KeySize, String> {
    arg.parse::<usize>()
        .ok()
        .and_then(KeySize::from_bits)
        .ok_or_else(|| format!("unsupported key size `{arg}`; expected 128 or 256"))
}

fn parse_mode(arg: &str) -> Result<Mode, String> {
    match arg {
        "encrypt" | "e" | "0" => Ok(Mode::Encrypt),
        "decrypt" | "d" | "1" => Ok(Mode::Decrypt),
        other => Err(format!(
            "unknown mode `{other}`; expected encrypt/e/0 or decrypt/d/1"
        )),
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let key = load_key(&cli)?;
    let input = fs::read(&cli.input_file)
        .with_context(|| format!("read {}", cli.input_file.display()))?;
    info!(
        "read {} bytes from {}",
        input.len(),
        cli.input_file.display()
    );

    let output = match cli.mode {
        Mode::Encrypt => encrypt(&key, cli.key_size, &input)?,
        Mode::Decrypt => decrypt(&key, cli.key_size, &input)?,
    };

    fs::write(&cli.output_file, &output)
        .with_context(|| format!("write {}", cli.output_file.display()))?;
    info!(
        "wrote {} bytes to {}",
        output.len(),
        cli.output_file.display()
    );
    Ok(())
}

fn load_key(cli: &Cli) -> Result<Vec<u8>> {
    match (&cli.key_file, &cli.key_hex) {
        (Some(path), None) => {
            fs::read(path).with_context(|| format!("read {}", path.display()))
        }
        (None, Some(hex_str)) => hex::decode(hex_str.trim()).context("decode key hex"),
        _ => bail!("exactly one of --keyfile or --key-hex is required"),
    }
}
