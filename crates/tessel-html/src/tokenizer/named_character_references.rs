//! Named character reference table.
//!
//! [§ 13.5 Named character references](https://html.spec.whatwg.org/multipage/named-characters.html)
//!
//! The full table has over two thousand entries; this one carries the names
//! that show up in hand-written markup. Names are stored without the leading
//! `&` and without the trailing `;`.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Name -> code points.
const ENTITY_TABLE: &[(&str, &[u32])] = &[
    // Markup-significant
    ("amp", &[0x26]),
    ("lt", &[0x3C]),
    ("gt", &[0x3E]),
    ("quot", &[0x22]),
    ("apos", &[0x27]),
    ("nbsp", &[0xA0]),
    // Punctuation
    ("copy", &[0xA9]),
    ("reg", &[0xAE]),
    ("trade", &[0x2122]),
    ("mdash", &[0x2014]),
    ("ndash", &[0x2013]),
    ("hellip", &[0x2026]),
    ("bull", &[0x2022]),
    ("middot", &[0xB7]),
    ("sect", &[0xA7]),
    ("para", &[0xB6]),
    ("lsquo", &[0x2018]),
    ("rsquo", &[0x2019]),
    ("ldquo", &[0x201C]),
    ("rdquo", &[0x201D]),
    ("laquo", &[0xAB]),
    ("raquo", &[0xBB]),
    ("iexcl", &[0xA1]),
    ("iquest", &[0xBF]),
    ("shy", &[0xAD]),
    ("zwj", &[0x200D]),
    ("zwnj", &[0x200C]),
    // Currency
    ("cent", &[0xA2]),
    ("pound", &[0xA3]),
    ("euro", &[0x20AC]),
    ("yen", &[0xA5]),
    // Math
    ("times", &[0xD7]),
    ("divide", &[0xF7]),
    ("plusmn", &[0xB1]),
    ("minus", &[0x2212]),
    ("ne", &[0x2260]),
    ("le", &[0x2264]),
    ("ge", &[0x2265]),
    ("deg", &[0xB0]),
    ("frac12", &[0xBD]),
    ("frac14", &[0xBC]),
    ("frac34", &[0xBE]),
    ("infin", &[0x221E]),
    ("sum", &[0x2211]),
    // Arrows
    ("larr", &[0x2190]),
    ("rarr", &[0x2192]),
    ("uarr", &[0x2191]),
    ("darr", &[0x2193]),
    ("harr", &[0x2194]),
    // Greek
    ("alpha", &[0x3B1]),
    ("beta", &[0x3B2]),
    ("gamma", &[0x3B3]),
    ("delta", &[0x3B4]),
    ("lambda", &[0x3BB]),
    ("mu", &[0x3BC]),
    ("pi", &[0x3C0]),
    ("sigma", &[0x3C3]),
    ("omega", &[0x3C9]),
    ("Omega", &[0x3A9]),
    // Latin-1 letters
    ("Aacute", &[0xC1]),
    ("aacute", &[0xE1]),
    ("Agrave", &[0xC0]),
    ("agrave", &[0xE0]),
    ("Auml", &[0xC4]),
    ("auml", &[0xE4]),
    ("Eacute", &[0xC9]),
    ("eacute", &[0xE9]),
    ("egrave", &[0xE8]),
    ("iacute", &[0xED]),
    ("Ouml", &[0xD6]),
    ("ouml", &[0xF6]),
    ("oacute", &[0xF3]),
    ("Uuml", &[0xDC]),
    ("uuml", &[0xFC]),
    ("uacute", &[0xFA]),
    ("ntilde", &[0xF1]),
    ("Ntilde", &[0xD1]),
    ("ccedil", &[0xE7]),
    ("Ccedil", &[0xC7]),
    ("szlig", &[0xDF]),
    // Multi-code-point references
    ("fjlig", &[0x66, 0x6A]),
    ("NotEqualTilde", &[0x2242, 0x338]),
    ("nvlt", &[0x3C, 0x20D2]),
    // Outside the Basic Multilingual Plane
    ("Afr", &[0x1D504]),
    ("Bopf", &[0x1D539]),
    ("Ascr", &[0x1D49C]),
];

static NAMED_ENTITIES: LazyLock<HashMap<&'static str, &'static [u32]>> =
    LazyLock::new(|| ENTITY_TABLE.iter().copied().collect());

/// [§ 13.2.5.73 Named character reference state](https://html.spec.whatwg.org/multipage/parsing.html#named-character-reference-state)
///
/// Legacy names that still match without a trailing semicolon.
const LEGACY_NAMES: &[&str] = &[
    "amp", "lt", "gt", "quot", "nbsp", "copy", "reg", "cent", "pound", "yen", "sect", "para",
    "deg", "plusmn", "times", "divide", "middot", "laquo", "raquo", "iexcl", "iquest", "shy",
    "frac12", "frac14", "frac34", "Aacute", "aacute", "Agrave", "agrave", "Auml", "auml",
    "Eacute", "eacute", "egrave", "iacute", "Ouml", "ouml", "oacute", "Uuml", "uuml", "uacute",
    "ntilde", "Ntilde", "ccedil", "Ccedil", "szlig",
];

/// Look up a named character reference written with its semicolon.
///
/// `name` excludes both the `&` and the `;`.
///
/// # Example
/// ```ignore
/// lookup_entity("amp")   // Some(&[0x26])
/// lookup_entity("xyz")   // None
/// ```
#[must_use]
pub fn lookup_entity(name: &str) -> Option<&'static [u32]> {
    NAMED_ENTITIES.get(name).copied()
}

/// Look up a named character reference written without its semicolon.
///
/// Only the legacy names match this way.
#[must_use]
pub fn lookup_legacy_entity(name: &str) -> Option<&'static [u32]> {
    if LEGACY_NAMES.contains(&name) {
        lookup_entity(name)
    } else {
        None
    }
}
