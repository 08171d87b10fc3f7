//! `.properties` reader
//!
//! Follows the `java.util.Properties` text format: ISO-8859-1 input, `#`/`!`
//! comment lines, `=`/`:`/whitespace separators, backslash line
//! continuations and `\uXXXX` escapes.

use std::str::Chars;

use indexmap::IndexMap;

use crate::meta::error::MetaError;

/// Parse properties content into an insertion-ordered map
///
/// Later occurrences of a key overwrite earlier ones but keep the original
/// position.
pub fn parse_properties(bytes: &[u8]) -> Result<IndexMap<String, String>, MetaError> {
    // ISO-8859-1 maps every byte to the code point of the same value
    let text: String = bytes.iter().map(|&b| char::from(b)).collect();
    let text = text.replace("\r\n", "\n");

    let mut properties = IndexMap::new();
    for line in logical_lines(&text) {
        let (key, value) = split_key_value(&line);
        properties.insert(unescape(key)?, unescape(value)?);
    }

    Ok(properties)
}

fn is_blank(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\u{c}')
}

/// Join continued natural lines and drop comments and blank lines
fn logical_lines(text: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut pending: Option<String> = None;

    for raw in text.split(['\n', '\r']) {
        let line = raw.trim_start_matches(is_blank);

        let mut current = match pending.take() {
            Some(mut current) => {
                current.push_str(line);
                current
            }
            None if line.is_empty() || line.starts_with(['#', '!']) => continue,
            None => line.to_string(),
        };

        if ends_with_continuation(&current) {
            current.pop();
            pending = Some(current);
        } else {
            lines.push(current);
        }
    }

    if let Some(current) = pending {
        lines.push(current);
    }

    lines
}

/// An odd number of trailing backslashes continues the line
fn ends_with_continuation(line: &str) -> bool {
    line.chars().rev().take_while(|&c| c == '\\').count() % 2 == 1
}

fn split_key_value(line: &str) -> (&str, &str) {
    let mut key_end = line.len();
    let mut has_separator = false;
    let mut escaped = false;

    for (i, c) in line.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '=' | ':' => {
                key_end = i;
                has_separator = true;
                break;
            }
            c if is_blank(c) => {
                key_end = i;
                break;
            }
            _ => {}
        }
    }

    let key = &line[..key_end];
    let mut rest = &line[key_end..];
    if has_separator {
        rest = &rest[1..];
    } else {
        rest = rest.trim_start_matches(is_blank);
        if let Some(stripped) = rest.strip_prefix(['=', ':']) {
            rest = stripped;
        }
    }

    (key, rest.trim_start_matches(is_blank))
}

fn unescape(raw: &str) -> Result<String, MetaError> {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }

        match chars.next() {
            Some('t') => out.push('\t'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('f') => out.push('\u{c}'),
            Some('u') => {
                let mut code = read_code_unit(&mut chars)?;
                if (0xD800..0xDC00).contains(&code) {
                    // Join a high surrogate with an escaped low surrogate right after it
                    let mut lookahead = chars.clone();
                    if lookahead.next() == Some('\\')
                        && lookahead.next() == Some('u')
                        && let Ok(low) = read_code_unit(&mut lookahead)
                        && (0xDC00..0xE000).contains(&low)
                    {
                        code = 0x10000 + ((code - 0xD800) << 10) + (low - 0xDC00);
                        chars = lookahead;
                    }
                }
                out.push(char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER));
            }
            Some(other) => out.push(other),
            None => {}
        }
    }

    Ok(out)
}

/// Read the four hex digits of a `\uXXXX` escape
fn read_code_unit(chars: &mut Chars<'_>) -> Result<u32, MetaError> {
    let hex: String = chars.by_ref().take(4).collect();
    if hex.chars().count() != 4 || !hex.chars().all(|h| h.is_ascii_hexdigit()) {
        return Err(MetaError::Properties(format!(
            "malformed \\uxxxx encoding: \\u{}",
            hex
        )));
    }
    u32::from_str_radix(&hex, 16).map_err(|e| MetaError::Properties(e.to_string()))
}
