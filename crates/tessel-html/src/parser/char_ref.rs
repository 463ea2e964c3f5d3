//! Character reference decoding.

use tessel_dom::CharRef;

/// Encode one code point as UTF-16.
///
/// `[0, 0xD7FF]` and `[0xE000, 0xFFFF]` give one unit, `[0x10000, 0x10FFFF]`
/// a surrogate pair, and anything else (lone surrogates, out of range)
/// nothing at all.
#[must_use]
pub fn code_point_to_utf16(code_point: u32) -> Vec<u16> {
    match code_point {
        0..=0xD7FF | 0xE000..=0xFFFF => {
            u16::try_from(code_point).map_or_else(|_| Vec::new(), |unit| vec![unit])
        }
        0x1_0000..=0x10_FFFF => {
            let v = code_point - 0x1_0000;
            let high = 0xD800 + (v >> 10);
            let low = 0xDC00 + (v & 0x3FF);
            [high, low]
                .into_iter()
                .filter_map(|unit| u16::try_from(unit).ok())
                .collect()
        }
        _ => Vec::new(),
    }
}

/// Decode one code point into text. Values that are not Unicode scalar
/// values decode to nothing.
#[must_use]
pub fn code_point_to_string(code_point: u32) -> String {
    char::from_u32(code_point).map(String::from).unwrap_or_default()
}

/// Build the node value for a lexed character reference, concatenating the
/// decoded code points in order.
#[must_use]
pub fn decode_char_ref(html: impl Into<String>, code_points: &[u32]) -> CharRef {
    let text = code_points
        .iter()
        .copied()
        .map(code_point_to_string)
        .collect::<String>();
    CharRef::new(html, text)
}
