//! Pair scanner for the micro-language source text.
//!
//! Splits source into `key value` pairs. A pair is terminated by `;`, a
//! newline, or end of input — except when the value begins with `{`
//! (optionally after whitespace), in which case it runs to the matching `}`.
//! Brace matching counts depth, so nested blocks may themselves contain
//! blocks; an unterminated block runs to end of input.
//!
//! The scanner is permissive: characters that cannot start a key are
//! skipped, and a key followed by nothing yields a pair with no value (the
//! compiler decides what that means).

/// A raw pair scanned from source text. The value, when present, is either
/// a trimmed plain run or a `{ ... }` block including both braces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Pair<'a> {
    pub key: &'a str,
    pub value: Option<&'a str>,
}

/// Returns an iterator over the pairs of `source`.
pub(crate) fn pairs(source: &str) -> Pairs<'_> {
    Pairs { source, pos: 0 }
}

/// Iterator state for [`pairs`].
pub(crate) struct Pairs<'a> {
    source: &'a str,
    pos: usize,
}

fn is_key_start(b: u8) -> bool {
    b.is_ascii_alphabetic()
}

fn is_key_char(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'-' || b == b'_'
}

impl<'a> Iterator for Pairs<'a> {
    type Item = Pair<'a>;

    fn next(&mut self) -> Option<Pair<'a>> {
        let bytes = self.source.as_bytes();
        let len = bytes.len();

        while self.pos < len && !is_key_start(bytes[self.pos]) {
            self.pos += 1;
        }
        if self.pos >= len {
            return None;
        }

        let key_start = self.pos;
        while self.pos < len && is_key_char(bytes[self.pos]) {
            self.pos += 1;
        }
        let key = &self.source[key_start..self.pos];

        // Inline whitespace between key and value.
        while self.pos < len && (bytes[self.pos] == b' ' || bytes[self.pos] == b'\t') {
            self.pos += 1;
        }

        // A block value may additionally be preceded by newlines.
        let mut probe = self.pos;
        while probe < len && bytes[probe].is_ascii_whitespace() {
            probe += 1;
        }
        if probe < len && bytes[probe] == b'{' {
            let block_start = probe;
            let mut depth = 0usize;
            while probe < len {
                match bytes[probe] {
                    b'{' => depth += 1,
                    b'}' => {
                        depth -= 1;
                        if depth == 0 {
                            probe += 1;
                            break;
                        }
                    }
                    _ => {}
                }
                probe += 1;
            }
            let value = &self.source[block_start..probe];
            self.pos = probe;
            return Some(Pair {
                key,
                value: Some(value),
            });
        }

        // Plain value: runs to `;`, newline, or end of input.
        let value_start = self.pos;
        while self.pos < len && bytes[self.pos] != b';' && bytes[self.pos] != b'\n' {
            self.pos += 1;
        }
        let value = self.source[value_start..self.pos].trim();
        Some(Pair {
            key,
            value: if value.is_empty() { None } else { Some(value) },
        })
    }
}
