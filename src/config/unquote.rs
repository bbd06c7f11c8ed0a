//! Quoted-literal decoding for the `-headers` flag.
//!
//! Shells sometimes hand the header string over still wrapped in quotes, for
//! example when it comes from a script that escaped it twice. `unquote`
//! recognizes three literal forms:
//! - `"..."` with backslash escapes
//! - `` `...` `` raw strings
//! - `'c'` holding exactly one character
//!
//! Anything else is not a literal and is left to the caller to keep as-is.

/// Decodes `input` if the whole string is one quoted literal.
///
/// Returns `None` when `input` is not a well-formed literal.
///
/// # Examples
///
/// ```
/// use flagreq::config::unquote;
///
/// assert_eq!(unquote(r#""Auth: bar""#).as_deref(), Some("Auth: bar"));
/// assert_eq!(unquote("Auth: bar"), None);
/// ```
pub fn unquote(input: &str) -> Option<String> {
    let mut chars = input.chars();
    let quote = chars.next()?;
    if chars.next_back()? != quote {
        return None;
    }
    let inner = &input[quote.len_utf8()..input.len() - quote.len_utf8()];

    match quote {
        '`' => {
            if inner.contains('`') {
                return None;
            }
            Some(inner.replace('\r', ""))
        }
        '"' => decode_escaped(inner, '"'),
        '\'' => {
            let decoded = decode_escaped(inner, '\'')?;
            if decoded.chars().count() == 1 {
                Some(decoded)
            } else {
                None
            }
        }
        _ => None,
    }
}

/// Decodes the body of a `"` or `'` literal.
///
/// `\x` and octal escapes produce raw bytes, so the result is assembled as
/// bytes and must be valid UTF-8 at the end.
fn decode_escaped(inner: &str, quote: char) -> Option<String> {
    let mut out: Vec<u8> = Vec::with_capacity(inner.len());
    let mut chars = inner.chars();

    while let Some(c) = chars.next() {
        if c == quote || c == '\n' {
            return None;
        }
        if c != '\\' {
            push_char(&mut out, c);
            continue;
        }

        let escape = chars.next()?;
        match escape {
            'a' => out.push(0x07),
            'b' => out.push(0x08),
            'f' => out.push(0x0c),
            'n' => out.push(b'\n'),
            'r' => out.push(b'\r'),
            't' => out.push(b'\t'),
            'v' => out.push(0x0b),
            '\\' => out.push(b'\\'),
            '\'' | '"' => {
                if escape != quote {
                    return None;
                }
                out.push(escape as u8);
            }
            'x' => {
                let value = take_digits(&mut chars, 2, 16)?;
                out.push(u8::try_from(value).ok()?);
            }
            'u' => {
                let value = take_digits(&mut chars, 4, 16)?;
                push_char(&mut out, char::from_u32(value)?);
            }
            'U' => {
                let value = take_digits(&mut chars, 8, 16)?;
                push_char(&mut out, char::from_u32(value)?);
            }
            '0'..='7' => {
                let rest = take_digits(&mut chars, 2, 8)?;
                let value = escape.to_digit(8)? * 64 + rest;
                out.push(u8::try_from(value).ok()?);
            }
            _ => return None,
        }
    }

    String::from_utf8(out).ok()
}

fn take_digits(chars: &mut std::str::Chars<'_>, count: usize, radix: u32) -> Option<u32> {
    let mut value: u32 = 0;
    for _ in 0..count {
        let digit = chars.next()?.to_digit(radix)?;
        value = value * radix + digit;
    }
    Some(value)
}

fn push_char(out: &mut Vec<u8>, c: char) {
    let mut buf = [0u8; 4];
    out.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
}
