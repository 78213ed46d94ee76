use super::Lexer;
use crate::{
    punctuator::Punctuator,
    reader::Byte,
    token::{Encoding, Token, TokenKind},
};

use super::identifier::is_identifier_start;

impl<'a> Lexer<'a> {
    /// Produces exactly one raw token, including `Space`, `Comment`, and
    /// `Newline` tokens that `next` folds away.
    pub fn scan(&mut self) -> Token {
        use Punctuator::*;

        self.mark_location();

        if self.skip_whitespace() {
            return self.make_token(TokenKind::Space);
        }

        let byte = match self.reader.get() {
            Byte::At(byte) => byte,
            Byte::End => return self.make_token(TokenKind::End),
        };

        match byte {
            b'\n' => self.make_token(TokenKind::Newline),
            b'[' => self.punctuator(OpenBracket),
            b']' => self.punctuator(CloseBracket),
            b'(' => self.punctuator(OpenParen),
            b')' => self.punctuator(CloseParen),
            b'{' => self.punctuator(OpenCurly),
            b'}' => self.punctuator(CloseCurly),
            b'.' => {
                if self.reader.peek().is_digit() {
                    return self.scan_number(byte);
                }

                if self.reader.eat(b'.') {
                    if self.reader.eat(b'.') {
                        return self.punctuator(Ellipses);
                    }

                    self.reader.unget(b'.');
                }

                self.punctuator(Dot)
            }
            b'&' => {
                if self.reader.eat(b'&') {
                    return self.punctuator(LogicalAnd);
                }
                if self.reader.eat(b'=') {
                    return self.punctuator(BitAndAssign);
                }
                self.punctuator(Ampersand)
            }
            b'*' => {
                if self.reader.eat(b'=') {
                    return self.punctuator(MultiplyAssign);
                }
                self.punctuator(Multiply)
            }
            b'+' => {
                if self.reader.eat(b'+') {
                    return self.punctuator(Increment);
                }
                if self.reader.eat(b'=') {
                    return self.punctuator(AddAssign);
                }
                self.punctuator(Add)
            }
            b'-' => {
                if self.reader.eat(b'>') {
                    return self.punctuator(Arrow);
                }
                if self.reader.eat(b'-') {
                    return self.punctuator(Decrement);
                }
                if self.reader.eat(b'=') {
                    return self.punctuator(SubtractAssign);
                }
                self.punctuator(Subtract)
            }
            b'~' => self.punctuator(BitComplement),
            b'!' => {
                if self.reader.eat(b'=') {
                    return self.punctuator(NotEquals);
                }
                self.punctuator(Not)
            }
            b'/' => {
                if self.reader.test(b'/') || self.reader.test(b'*') {
                    self.skip_comment();
                    return self.make_token(TokenKind::Comment);
                }
                if self.reader.eat(b'=') {
                    return self.punctuator(DivideAssign);
                }
                self.punctuator(Divide)
            }
            b'%' => {
                if self.reader.eat(b'=') {
                    return self.punctuator(ModulusAssign);
                }

                // Digraphs: '%>' is '}', '%:' is '#', '%:%:' is '##'
                if self.reader.eat(b'>') {
                    return self.punctuator(CloseCurly);
                }

                if self.reader.eat(b':') {
                    if self.reader.eat(b'%') {
                        if self.reader.eat(b':') {
                            return self.punctuator(HashConcat);
                        }

                        self.reader.unget(b'%');
                    }

                    return self.punctuator(Hash);
                }

                self.punctuator(Modulus)
            }
            b'<' => {
                if self.reader.eat(b'<') {
                    if self.reader.eat(b'=') {
                        return self.punctuator(LeftShiftAssign);
                    }
                    return self.punctuator(LeftShift);
                }
                if self.reader.eat(b'=') {
                    return self.punctuator(LessThanEq);
                }

                // Digraphs: '<:' is '[', '<%' is '{'
                if self.reader.eat(b':') {
                    return self.punctuator(OpenBracket);
                }
                if self.reader.eat(b'%') {
                    return self.punctuator(OpenCurly);
                }

                self.punctuator(LessThan)
            }
            b'>' => {
                if self.reader.eat(b'>') {
                    if self.reader.eat(b'=') {
                        return self.punctuator(RightShiftAssign);
                    }
                    return self.punctuator(RightShift);
                }
                if self.reader.eat(b'=') {
                    return self.punctuator(GreaterThanEq);
                }
                self.punctuator(GreaterThan)
            }
            b'^' => {
                if self.reader.eat(b'=') {
                    return self.punctuator(BitXorAssign);
                }
                self.punctuator(BitXor)
            }
            b'|' => {
                if self.reader.eat(b'|') {
                    return self.punctuator(LogicalOr);
                }
                if self.reader.eat(b'=') {
                    return self.punctuator(BitOrAssign);
                }
                self.punctuator(BitOr)
            }
            b'?' => self.punctuator(Ternary),
            b':' => {
                // Digraph: ':>' is ']'
                if self.reader.eat(b'>') {
                    return self.punctuator(CloseBracket);
                }
                self.punctuator(Colon)
            }
            b';' => self.punctuator(Semicolon),
            b'=' => {
                if self.reader.eat(b'=') {
                    return self.punctuator(DoubleEquals);
                }
                self.punctuator(Assign)
            }
            b',' => self.punctuator(Comma),
            b'#' => {
                if self.reader.eat(b'#') {
                    return self.punctuator(HashConcat);
                }
                self.punctuator(Hash)
            }
            b'0'..=b'9' => self.scan_number(byte),
            b'u' | b'U' | b'L' => {
                let encoding = self.scan_encoding(byte);

                if self.reader.eat(b'"') {
                    return self.scan_string(encoding);
                }

                if self.reader.eat(b'\'') {
                    return self.scan_character(encoding);
                }

                // Not a prefixed literal after all; restore every
                // consumed prefix byte and scan an identifier.
                if encoding == Encoding::Utf8 {
                    self.reader.unget(b'8');
                }
                self.reader.unget(byte);

                self.scan_identifier()
            }
            b'\'' => self.scan_character(Encoding::Default),
            b'"' => self.scan_string(Encoding::Default),
            b'\\' => {
                if self.reader.test(b'u') || self.reader.test(b'U') {
                    // Universal character name starting an identifier
                    self.reader.unget(b'\\');
                    return self.scan_identifier();
                }

                self.make_token(TokenKind::Backslash)
            }
            _ if is_identifier_start(byte) => {
                self.reader.unget(byte);
                self.scan_identifier()
            }
            _ => {
                if byte.is_ascii_graphic() {
                    self.error(format!("stray '{}' in program", byte as char));
                } else {
                    self.error(format!("stray '\\{:03o}' in program", byte));
                }

                self.make_token(TokenKind::Unknown)
            }
        }
    }

    fn punctuator(&mut self, punctuator: Punctuator) -> Token {
        self.make_token(TokenKind::Punctuator(punctuator))
    }

    /// Consumes a run of whitespace other than newline, accumulating its
    /// length into the scratch token.
    fn skip_whitespace(&mut self) -> bool {
        loop {
            let ch = self.reader.peek();

            if !ch.is_space() || ch.is(b'\n') {
                break;
            }

            self.reader.get();
            self.scratch.leading_space += 1;
        }

        self.scratch.leading_space > 0
    }

    /// Consumes a `//` comment up to (not including) the newline, or a
    /// `/*` comment through the closing `*/`.
    fn skip_comment(&mut self) {
        if self.reader.eat(b'/') {
            while let Byte::At(byte) = self.reader.peek() {
                if byte == b'\n' {
                    return;
                }
                self.reader.get();
            }
        } else if self.reader.eat(b'*') {
            loop {
                match self.reader.get() {
                    Byte::At(b'*') if self.reader.eat(b'/') => return,
                    Byte::At(_) => (),
                    Byte::End => break,
                }
            }

            self.error("unterminated comment");
        }
    }

    fn scan_encoding(&mut self, prefix: u8) -> Encoding {
        match prefix {
            b'u' => {
                if self.reader.eat(b'8') {
                    Encoding::Utf8
                } else {
                    Encoding::Utf16
                }
            }
            b'U' => Encoding::Utf32,
            b'L' => Encoding::Wide,
            _ => unreachable!("not an encoding prefix"),
        }
    }
}
