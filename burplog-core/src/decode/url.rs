use crate::decode::DecodeError;
use percent_encoding::percent_decode;

/// Reverses query-style percent-encoding: `%XX` becomes the byte `0xXX` and
/// `+` becomes a space.
///
/// Every `%` must start a complete triplet of two hex digits. Decoded bytes
/// that are not valid UTF-8 are replaced with U+FFFD.
pub fn decode_url_field(input: &str) -> Result<String, DecodeError> {
    validate_escapes(input)?;

    let spaced = input.replace('+', " ");
    Ok(percent_decode(spaced.as_bytes())
        .decode_utf8_lossy()
        .into_owned())
}

/// Checks that every `%` in `input` starts a valid `%XX` triplet.
pub(crate) fn validate_escapes(input: &str) -> Result<(), DecodeError> {
    let bytes = input.as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] != b'%' {
            i += 1;
            continue;
        }

        let complete = i + 2 < bytes.len()
            && bytes[i + 1].is_ascii_hexdigit()
            && bytes[i + 2].is_ascii_hexdigit();

        if !complete {
            let end = (i + 3).min(bytes.len());
            return Err(DecodeError::InvalidEscape {
                escape: String::from_utf8_lossy(&bytes[i..end]).into_owned(),
                offset: i,
            });
        }

        i += 3;
    }

    Ok(())
}
