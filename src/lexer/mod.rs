mod identifier;
mod literals;
mod number;
mod scan;

use crate::{
    diagnostics::{Caret, Diagnostics, ErrorDiagnostic, WarningDiagnostic},
    reader::{PushError, Reader, StreamSource},
    source_files::Source,
    token::{Token, TokenKind},
};
use chrono::{DateTime, Local};

/// Tokenizes the character stream of a `Reader`. Produced tokens can be
/// pushed back without limit; `stash`/`unstash` nest independent
/// push-back buffers so callers can speculate and roll back.
pub struct Lexer<'a> {
    reader: Reader<'a>,
    diagnostics: &'a Diagnostics<'a>,

    /// Scratch token accumulating literal text until publication.
    scratch: Token,

    /// Stack of untread buffers; never empty. `next` drains the top
    /// buffer before scanning new input.
    snapshots: Vec<Vec<Token>>,

    /// Wall clock captured at construction, for `__DATE__`/`__TIME__`.
    constructed_at: DateTime<Local>,
}

impl<'a> Lexer<'a> {
    pub fn new(reader: Reader<'a>, diagnostics: &'a Diagnostics<'a>) -> Self {
        Self {
            reader,
            diagnostics,
            scratch: Token::new(TokenKind::Unknown, Source::internal()),
            snapshots: vec![Vec::new()],
            constructed_at: Local::now(),
        }
    }

    pub fn reader(&self) -> &Reader<'a> {
        &self.reader
    }

    pub fn reader_mut(&mut self) -> &mut Reader<'a> {
        &mut self.reader
    }

    pub fn into_reader(self) -> Reader<'a> {
        self.reader
    }

    pub fn push_source(&mut self, source: StreamSource) -> Result<(), PushError> {
        self.reader.push(source)
    }

    pub fn pop_source(&mut self) {
        self.reader.pop();
    }

    /// Produces the next semantic token: spaces and comments are folded
    /// into the returned token's `leading_space`, and `begin_of_line`
    /// records whether it is the first non-whitespace token on its line.
    pub fn next(&mut self) -> Token {
        if let Some(token) = self.top_snapshot().pop() {
            return token;
        }

        let begin_of_line = !self.reader.is_empty() && self.reader.column() == 1;

        let mut leading_space = 0;
        let mut token = self.scan();

        loop {
            match token.kind {
                TokenKind::Space => leading_space += token.leading_space,
                TokenKind::Comment => leading_space += 1,
                _ => break,
            }
            token = self.scan();
        }

        token.begin_of_line = begin_of_line;
        token.leading_space = leading_space;
        token
    }

    /// The token the next `next` will return. End of input is not
    /// untread, so repeated peeks at the end stay cheap.
    pub fn peek(&mut self) -> Token {
        let token = self.next();

        if !token.kind.is_end() {
            self.untread(token.clone());
        }

        token
    }

    /// Pushes a produced token back for re-consumption, onto the current
    /// snapshot.
    pub fn untread(&mut self, token: Token) {
        assert!(!token.kind.is_end(), "cannot untread end of input");
        self.top_snapshot().push(token);
    }

    /// Opens an independent untread buffer. Tokens untread after this
    /// are invisible to outer snapshots once `unstash` discards them.
    pub fn stash(&mut self) {
        self.snapshots.push(Vec::new());
    }

    /// Discards the current snapshot along with any tokens still in it.
    pub fn unstash(&mut self) {
        assert!(self.snapshots.len() > 1, "unstash without matching stash");
        self.snapshots.pop();
    }

    fn top_snapshot(&mut self) -> &mut Vec<Token> {
        self.snapshots.last_mut().expect("snapshots never empty")
    }

    /// The `__DATE__` form of the construction time, e.g. `Apr  1 2026`.
    pub fn date(&self) -> String {
        self.constructed_at.format("%b %e %Y").to_string()
    }

    /// The `__TIME__` form of the construction time, e.g. `13:05:59`.
    pub fn time(&self) -> String {
        self.constructed_at.format("%T").to_string()
    }

    /// Stamps the kind onto the scratch token, publishes an owned copy,
    /// and resets the scratch for the next token.
    fn make_token(&mut self, kind: TokenKind) -> Token {
        self.scratch.kind = kind;

        let token = self.scratch.clone();

        self.scratch.kind = TokenKind::Unknown;
        self.scratch.literals.clear();
        self.scratch.source = Source::internal();
        self.scratch.begin_of_line = false;
        self.scratch.leading_space = 0;

        token
    }

    fn mark_location(&mut self) {
        self.scratch.source = if self.reader.is_empty() {
            Source::internal()
        } else {
            self.reader.source()
        };
    }

    fn error(&self, message: impl ToString) {
        self.error_at(self.scratch.source, message);
    }

    fn error_at(&self, source: Source, message: impl ToString) {
        self.diagnostics
            .push(ErrorDiagnostic::with_caret(message, source, caret(source)));
    }

    fn warning_at(&self, source: Source, message: impl ToString) {
        self.diagnostics
            .push(WarningDiagnostic::with_caret(message, source, caret(source)));
    }
}

fn caret(source: Source) -> Caret {
    Caret {
        column: source.location.column,
        length: 1,
    }
}
