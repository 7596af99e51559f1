//! URI component encoding for map queries

use std::fmt::Write;

/// Percent-encode a string for use as a single URI component
///
/// Leaves `A-Z`, `a-z`, `0-9` and `-_.!~*'()` as they are and encodes every
/// other byte of the UTF-8 form as `%XX`. Spaces become `%20`.
pub fn encode(input: &str) -> String {
    let mut result = String::with_capacity(input.len() * 3);
    for c in input.chars() {
        match c {
            'a'..='z'
            | 'A'..='Z'
            | '0'..='9'
            | '-'
            | '_'
            | '.'
            | '!'
            | '~'
            | '*'
            | '\''
            | '('
            | ')' => result.push(c),
            _ => {
                let mut buf = [0u8; 4];
                for b in c.encode_utf8(&mut buf).as_bytes() {
                    let _ = write!(result, "%{b:02X}");
                }
            },
        }
    }
    result
}
