//! CLI utility functions.

use anyhow::{Context, Result};
use base64::Engine;

use crate::cli::OutputFormat;

/// Decode a salt/stored-buffer argument: `hex:`-prefixed hex, otherwise base64.
pub fn parse_bytes_arg(value: &str) -> Result<Vec<u8>> {
    if let Some(hex_part) = value.strip_prefix("hex:") {
        return hex::decode(hex_part).with_context(|| format!("Invalid hex value: {hex_part}"));
    }
    base64::engine::general_purpose::STANDARD
        .decode(value)
        .or_else(|_| base64::engine::general_purpose::STANDARD_NO_PAD.decode(value))
        .with_context(|| format!("Invalid base64 value: {value}"))
}

/// Render bytes in the requested output encoding.
pub fn format_bytes_out(bytes: &[u8], format: OutputFormat) -> String {
    match format {
        OutputFormat::Hex => hex::encode(bytes),
        OutputFormat::Base64 => base64::engine::general_purpose::STANDARD.encode(bytes),
    }
}
