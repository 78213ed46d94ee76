/// One logical character produced by a stream: a raw byte or end of
/// input. Bytes rather than `char`s, since identifiers admit the raw
/// high-byte range `0x80..=0xFD` and literals may carry arbitrary
/// escape bytes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Byte {
    At(u8),
    End,
}

impl Byte {
    #[inline]
    pub fn or_nul(self) -> u8 {
        match self {
            Byte::At(byte) => byte,
            Byte::End => 0,
        }
    }

    #[inline]
    pub fn is(self, byte: u8) -> bool {
        match self {
            Byte::At(b) => b == byte,
            Byte::End => false,
        }
    }

    #[inline]
    pub fn is_digit(self) -> bool {
        matches!(self, Byte::At(b) if b.is_ascii_digit())
    }

    #[inline]
    pub fn is_hex_digit(self) -> bool {
        matches!(self, Byte::At(b) if b.is_ascii_hexdigit())
    }

    #[inline]
    pub fn is_space(self) -> bool {
        matches!(self, Byte::At(b) if is_space_byte(b))
    }

    #[inline]
    pub fn is_end(self) -> bool {
        matches!(self, Byte::End)
    }
}

/// Whitespace in the C sense: space, tab, newline, carriage return,
/// vertical tab, form feed.
#[inline]
pub fn is_space_byte(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r' | 0x0B | 0x0C)
}
