use super::Lexer;
use crate::{
    encoding::append_utf8,
    reader::Byte,
    token::{Encoding, Token, TokenKind},
};

impl<'a> Lexer<'a> {
    /// Scans a character constant after its opening quote. Only the
    /// first character is kept; the rest are consumed up to the closing
    /// quote and dropped.
    pub(super) fn scan_character(&mut self, encoding: Encoding) -> Token {
        let mut terminated = false;
        let mut parsed = false;

        loop {
            let byte = match self.reader.get() {
                Byte::At(byte) => byte,
                Byte::End => break,
            };

            if byte == b'\'' {
                terminated = true;
                break;
            }

            if byte == b'\n' {
                break;
            }

            if parsed {
                continue;
            }

            if byte == b'\\' {
                self.scan_escape_into_literals();
            } else {
                self.scratch.literals.push(byte);
            }

            parsed = true;
        }

        if !terminated {
            self.error("missing terminating ' character");
        }

        if !parsed {
            self.error("empty character constant");
        }

        self.make_token(TokenKind::CharacterConstant(encoding))
    }

    /// Scans a string literal after its opening quote, decoding escapes
    /// into the literal buffer.
    pub(super) fn scan_string(&mut self, encoding: Encoding) -> Token {
        let mut terminated = false;

        loop {
            let byte = match self.reader.get() {
                Byte::At(byte) => byte,
                Byte::End => break,
            };

            if byte == b'"' {
                terminated = true;
                break;
            }

            if byte == b'\n' {
                break;
            }

            if byte == b'\\' {
                self.scan_escape_into_literals();
            } else {
                self.scratch.literals.push(byte);
            }
        }

        if !terminated {
            self.error("unterminated string literal");
        }

        self.make_token(TokenKind::StringLiteral(encoding))
    }

    /// Decodes one escape sequence (backslash already consumed) into the
    /// literal buffer: universal character names become UTF-8, all other
    /// escapes a single byte.
    fn scan_escape_into_literals(&mut self) {
        let universal = self.reader.test(b'u') || self.reader.test(b'U');
        let source = self.reader.source();
        let value = self.scan_escape();

        if universal {
            if !append_utf8(&mut self.scratch.literals, value) {
                self.error_at(source, "invalid universal character");
            }
        } else {
            self.scratch.literals.push(value as u8);
        }
    }

    /// Decodes the escape sequence following a consumed backslash,
    /// returning its value.
    pub(super) fn scan_escape(&mut self) -> u32 {
        let source = self.reader.source();

        let byte = match self.reader.get() {
            Byte::At(byte) => byte,
            Byte::End => return 0,
        };

        match byte {
            b'\'' | b'"' | b'?' | b'\\' => byte as u32,
            b'a' => 0x07,
            b'b' => 0x08,
            b'f' => 0x0C,
            b'n' => 0x0A,
            b'r' => 0x0D,
            b't' => 0x09,
            b'v' => 0x0B,
            // '\e' is a GNU extension
            b'e' | b'E' => 0x1B,
            b'x' => self.scan_hex_escape(),
            b'u' => self.scan_universal_character(4),
            b'U' => self.scan_universal_character(8),
            b'0'..=b'7' => self.scan_octal_escape(byte),
            _ => {
                self.warning_at(
                    source,
                    format!("unknown escape character: '{}'", byte as char),
                );
                byte as u32
            }
        }
    }

    /// `\x` followed by one or more hex digits, consumed greedily.
    fn scan_hex_escape(&mut self) -> u32 {
        let mut value: u32 = 0;

        if !self.reader.peek().is_hex_digit() {
            self.error_at(
                self.reader.source(),
                "\\x used with no following hex digits",
            );
        }

        while let Byte::At(byte) = self.reader.peek() {
            if !byte.is_ascii_hexdigit() {
                break;
            }

            value = value.wrapping_shl(4).wrapping_add(hex_digit_value(byte));
            self.reader.get();
        }

        value
    }

    /// One to three octal digits, the first already consumed.
    fn scan_octal_escape(&mut self, first: u8) -> u32 {
        let mut value = (first - b'0') as u32;

        for _ in 0..2 {
            let byte = match self.reader.peek() {
                Byte::At(byte @ b'0'..=b'7') => byte,
                _ => break,
            };

            value = (value << 3) + (byte - b'0') as u32;
            self.reader.get();
        }

        value
    }

    /// `\u` or `\U` with exactly four or eight hex digits. On a non-hex
    /// byte the byte is pushed back, the error is reported, and the
    /// digits read so far stand as the value.
    fn scan_universal_character(&mut self, digits: usize) -> u32 {
        let mut rune: u32 = 0;

        for _ in 0..digits {
            match self.reader.get() {
                Byte::At(byte) if byte.is_ascii_hexdigit() => {
                    rune = (rune << 4) + hex_digit_value(byte);
                }
                Byte::At(byte) => {
                    self.error_at(self.reader.source(), "invalid universal character");
                    self.reader.unget(byte);
                    return rune;
                }
                Byte::End => {
                    self.error_at(self.reader.source(), "invalid universal character");
                    return rune;
                }
            }
        }

        rune
    }
}

fn hex_digit_value(byte: u8) -> u32 {
    (byte as char).to_digit(16).expect("hex digit")
}
