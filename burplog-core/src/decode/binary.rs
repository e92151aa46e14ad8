use crate::decode::DecodeError;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// Decodes a base64 payload into text.
///
/// Line breaks (`\r`, `\n`) inside the payload are skipped. Rejects empty
/// input, anything else outside the standard padded alphabet, and payloads
/// whose first byte is not printable. The last check keeps images and
/// compressed bodies from being passed off as text.
pub fn decode_binary_field(input: &str) -> Result<String, DecodeError> {
    if input.is_empty() {
        return Err(DecodeError::EmptyPayload);
    }

    let bytes = if input.contains(['\r', '\n']) {
        let unwrapped: String = input.chars().filter(|c| !matches!(c, '\r' | '\n')).collect();
        STANDARD.decode(unwrapped)?
    } else {
        STANDARD.decode(input)?
    };

    let Some(&first) = bytes.first() else {
        return Err(DecodeError::EmptyPayload);
    };
    if !is_printable(first) {
        return Err(DecodeError::BinaryPayload { byte: first });
    }

    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// A byte is printable when, read as a Latin-1 code point, it is a graphic
/// character or the ASCII space. Controls, NBSP and the soft hyphen are not.
pub fn is_printable(byte: u8) -> bool {
    matches!(byte, 0x20..=0x7e | 0xa1..=0xac | 0xae..=0xff)
}
