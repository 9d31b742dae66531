//! DN output: canonical RFC 2253 strings and LDIF `dn:` lines.

use std::fmt;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::data::{Dn, Rdn};

/// Characters that must be backslash-escaped inside a value.
const SPECIAL: &str = "\"+,;\\<>=";

// ---------------------------------------------------------------------------
// Value escaping
// ---------------------------------------------------------------------------

fn push_escaped(out: &mut String, c: char) {
    if SPECIAL.contains(c) {
        out.push('\\');
        out.push(c);
    } else if c == ' ' || c.is_ascii_graphic() || u32::from(c) > 0xff {
        out.push(c);
    } else {
        out.push_str(&format!("\\{:02X}", u32::from(c)));
    }
}

/// Render one `ATTR=value` pair.
///
/// Leading and trailing spaces of the value become `\20` so that they
/// survive re-parsing; interior spaces are written as is.
fn ava_to_string(ava: &str) -> String {
    let value_start = ava.find('=').map_or(0, |i| i + 1);
    let (prefix, value) = ava.split_at(value_start);
    let content = value.trim_end_matches(' ');
    let trailing = value.len() - content.len();

    let mut out = String::with_capacity(ava.len() + 3 * trailing);
    out.push_str(prefix);
    let mut char_seen = false;
    for c in content.chars() {
        if c == ' ' && !char_seen {
            out.push_str("\\20");
        } else {
            char_seen = true;
            push_escaped(&mut out, c);
        }
    }
    for _ in 0..trailing {
        out.push_str("\\20");
    }
    out
}

fn rdn_to_string(rdn: &Rdn) -> String {
    rdn.iter()
        .map(|ava| ava_to_string(ava))
        .collect::<Vec<_>>()
        .join("+")
}

/// Render `dn` in canonical escaped form. RDNs are always joined with `,`.
pub fn serialize(dn: &Dn) -> String {
    dn.iter().map(rdn_to_string).collect::<Vec<_>>().join(",")
}

impl fmt::Display for Rdn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&rdn_to_string(self))
    }
}

impl fmt::Display for Dn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&serialize(self))
    }
}

// ---------------------------------------------------------------------------
// LDIF
// ---------------------------------------------------------------------------

/// Check if the value can be printed as an LDIF SAFE-STRING:
/// no leading space/colon/less-than, no null/CR/LF/non-ASCII bytes.
fn safe_string_p(data: &[u8]) -> bool {
    match data.first() {
        None => true,
        Some(b' ' | b':' | b'<') => false,
        Some(_) => !data
            .iter()
            .any(|&c| c == 0 || c == b'\r' || c == b'\n' || c >= 0x80),
    }
}

/// `dn: <canonical>` or, when that is not LDIF-safe, `dn:: <base64>`.
pub fn ldif_dn_line(dn: &Dn) -> String {
    let text = serialize(dn);
    if safe_string_p(text.as_bytes()) {
        format!("dn: {}", text)
    } else {
        format!("dn:: {}", STANDARD.encode(text.as_bytes()))
    }
}
