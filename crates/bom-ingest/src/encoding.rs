//! Input encoding detection and strict decoding.

use encoding_rs::{Encoding, GBK, UTF_16BE, UTF_16LE, UTF_8};

use crate::error::{IngestError, Result};

/// Label for UTF-8 with a leading byte-order mark.
const UTF8_SIG: &str = "utf-8-sig";

/// Encodings tried, in order, when the requested one fails.
pub const FALLBACK_ENCODINGS: [&str; 3] = [UTF8_SIG, "gbk", "utf-8"];

/// Decoded input text together with the encoding that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedText {
    pub text: String,
    pub encoding: String,
}

/// Best-guess encoding name for raw bytes; `"utf-8"` when nothing better fits.
pub fn detect_encoding(bytes: &[u8]) -> &'static str {
    if let Some((encoding, _)) = Encoding::for_bom(bytes) {
        return if encoding == UTF_8 {
            UTF8_SIG
        } else if encoding == UTF_16LE {
            "utf-16le"
        } else if encoding == UTF_16BE {
            "utf-16be"
        } else {
            "utf-8"
        };
    }
    if std::str::from_utf8(bytes).is_ok() {
        return "utf-8";
    }
    if GBK
        .decode_without_bom_handling_and_without_replacement(bytes)
        .is_some()
    {
        return "gbk";
    }
    "utf-8"
}

/// Decode `bytes` strictly with the encoding named by `label`.
///
/// Malformed input is an error; nothing is replaced.
pub fn decode(bytes: &[u8], label: &str) -> Result<String> {
    let normalized = label.trim().to_ascii_lowercase();
    let (encoding, body) = if normalized == UTF8_SIG || normalized == "utf_8_sig" {
        (UTF_8, bytes.strip_prefix(b"\xef\xbb\xbf").unwrap_or(bytes))
    } else {
        let encoding = Encoding::for_label(normalized.as_bytes()).ok_or_else(|| {
            IngestError::UnknownEncoding {
                label: label.to_string(),
            }
        })?;
        (encoding, strip_bom_for(encoding, bytes))
    };
    encoding
        .decode_without_bom_handling_and_without_replacement(body)
        .map(std::borrow::Cow::into_owned)
        .ok_or_else(|| IngestError::Undecodable {
            tried: label.to_string(),
        })
}

/// Decode with `label`, then with each of [`FALLBACK_ENCODINGS`] in order.
pub fn decode_with_fallback(bytes: &[u8], label: &str) -> Result<DecodedText> {
    let mut tried = Vec::new();
    let candidates = std::iter::once(label).chain(FALLBACK_ENCODINGS);
    for candidate in candidates {
        if tried.iter().any(|seen: &String| seen.eq_ignore_ascii_case(candidate)) {
            continue;
        }
        match decode(bytes, candidate) {
            Ok(text) => {
                if !tried.is_empty() {
                    tracing::warn!(
                        requested = label,
                        used = candidate,
                        "input not decodable with requested encoding, used fallback"
                    );
                }
                return Ok(DecodedText {
                    text,
                    encoding: candidate.to_string(),
                });
            }
            Err(error) => {
                tracing::debug!(encoding = candidate, %error, "decode attempt failed");
                tried.push(candidate.to_string());
            }
        }
    }
    Err(IngestError::Undecodable {
        tried: tried.join(", "),
    })
}

fn strip_bom_for<'a>(encoding: &'static Encoding, bytes: &'a [u8]) -> &'a [u8] {
    match Encoding::for_bom(bytes) {
        Some((bom_encoding, len)) if bom_encoding == encoding => &bytes[len..],
        _ => bytes,
    }
}
