use crate::{punctuator::Punctuator, source_files::Source};
use derive_more::{Deref, IsVariant};
use std::{borrow::Cow, collections::HashSet, fmt::Display, rc::Rc};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Encoding {
    Default,
    Utf8,  // 'u8'
    Utf16, // 'u'
    Utf32, // 'U'
    Wide,  // 'L'
}

#[derive(Clone, Debug, PartialEq, IsVariant)]
pub enum TokenKind {
    Punctuator(Punctuator),
    Identifier,
    Number,
    CharacterConstant(Encoding),
    StringLiteral(Encoding),
    Space,
    Comment,
    Newline,
    Backslash,
    End,
    Unknown,
}

impl TokenKind {
    pub fn at(self, source: Source) -> Token {
        Token::new(self, source)
    }

    /// Canonical spelling for kinds with a fixed one; literal-bearing
    /// kinds carry their text on the token instead.
    pub fn to_str(&self) -> Option<&'static str> {
        match self {
            TokenKind::Punctuator(punctuator) => Some(punctuator.as_str()),
            TokenKind::Newline => Some("\n"),
            TokenKind::Backslash => Some("\\"),
            _ => None,
        }
    }
}

/// Identity set the preprocessor uses to suppress recursive macro
/// expansion. Carried on tokens, never inspected by the lexer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Hideset {
    names: HashSet<String>,
}

impl Hideset {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        self.names.insert(name.into())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }
}

#[derive(Clone, Debug, Deref)]
pub struct Token {
    #[deref]
    pub kind: TokenKind,

    /// Captured text: raw bytes for numbers and identifiers (universal
    /// character names already UTF-8-encoded), decoded escapes for
    /// character and string constants. Bytes rather than a `String`
    /// because `\xFF` and high-byte identifier characters need not form
    /// valid UTF-8.
    pub literals: Vec<u8>,

    pub source: Source,

    /// Whether this is the first non-whitespace token on its line.
    pub begin_of_line: bool,

    /// Whitespace characters (plus skipped comments) separating this
    /// token from the previous one.
    pub leading_space: usize,

    pub hideset: Option<Rc<Hideset>>,
}

impl Token {
    pub fn new(kind: TokenKind, source: Source) -> Token {
        Token {
            kind,
            literals: Vec::new(),
            source,
            begin_of_line: false,
            leading_space: 0,
            hideset: None,
        }
    }

    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.literals)
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind.to_str() {
            Some(spelling) => f.write_str(spelling),
            None => f.write_str(&self.text()),
        }
    }
}
