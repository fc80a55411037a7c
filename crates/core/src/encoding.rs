//! Text-to-bytes conversion via named encodings.

use encoding_rs::Encoding;

use crate::error::{Error, Result};

/// Encode `text` with the encoding named by `label` (e.g. `"UTF-8"`, `"windows-1252"`).
///
/// Labels are resolved through the WHATWG encoding registry, so the usual
/// aliases (`"latin1"`, `"us-ascii"`, ...) are accepted. Unknown labels fail
/// before any bytes are produced.
pub fn encode_text(text: &str, label: &str) -> Result<Vec<u8>> {
    let encoding = Encoding::for_label(label.as_bytes())
        .ok_or_else(|| Error::UnsupportedEncoding(label.to_string()))?;
    let (bytes, _, _) = encoding.encode(text);
    Ok(bytes.into_owned())
}
