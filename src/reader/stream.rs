use super::byte::{is_space_byte, Byte};
use crate::{
    diagnostics::{Caret, Diagnostics, WarningDiagnostic},
    line_column::Location,
    source_files::{FileTimes, Source, SourceFileKey},
};

/*
   One active input unit, implementing C11 5.1.1 translation phases 1-2:

   1. "\r\n" and "\r" are canonicalized to "\n".

   2. Each backslash immediately followed by a new-line is deleted,
      splicing physical source lines to form logical source lines:

          |#inc\
          |lude <stdio.h>

   3. A non-empty buffer whose end does not follow a produced newline
      yields one synthetic "\n" before end of input.
*/
pub struct Stream<'a> {
    key: SourceFileKey,
    content: &'a [u8],
    cursor: usize,
    line: usize,
    column: usize,
    line_start: usize,
    last: Byte,
    stashed: Vec<u8>,
    times: FileTimes,
}

impl<'a> Stream<'a> {
    pub fn new(key: SourceFileKey, content: &'a [u8], times: FileTimes) -> Self {
        Self {
            key,
            content,
            cursor: 0,
            line: 1,
            column: 1,
            line_start: 0,
            last: Byte::At(0),
            stashed: Vec::new(),
            times,
        }
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn column(&self) -> usize {
        self.column
    }

    pub fn line_start(&self) -> usize {
        self.line_start
    }

    pub fn key(&self) -> SourceFileKey {
        self.key
    }

    pub fn times(&self) -> FileTimes {
        self.times
    }

    pub fn source(&self) -> Source {
        Source::new(
            self.key,
            Location::new(self.line, self.column),
            self.line_start,
        )
    }

    fn step_line(&mut self) {
        self.line += 1;
        self.column = 1;
        self.line_start = self.cursor;
    }

    /// Pushes a byte back onto the stream. Repeated ungets stack in LIFO
    /// order with no depth limit. NUL is not a valid pushback.
    pub fn unget(&mut self, byte: u8) {
        assert!(byte != 0, "cannot unget NUL");
        self.stashed.push(byte);
    }

    pub fn next(&mut self, diagnostics: &Diagnostics) -> Byte {
        if let Some(byte) = self.stashed.pop() {
            let ch = Byte::At(byte);
            self.last = ch;
            return ch;
        }

        let ch = loop {
            if self.cursor >= self.content.len() {
                break if self.last.is(b'\n') || self.last.is_end() {
                    Byte::End
                } else {
                    Byte::At(b'\n')
                };
            }

            let byte = self.content[self.cursor];
            self.cursor += 1;

            match byte {
                b'\r' => {
                    if self.content.get(self.cursor) == Some(&b'\n') {
                        self.cursor += 1;
                    }

                    self.step_line();
                    break Byte::At(b'\n');
                }
                b'\n' => {
                    self.step_line();
                    break Byte::At(b'\n');
                }
                b'\\' => match self.find_splice(self.cursor) {
                    Splice::At { after_newline, gap } => {
                        if gap && diagnostics.flags().w_backslash_newline_space {
                            self.warn(diagnostics, "backslash and newline separated by space");
                        }

                        self.cursor = after_newline;
                        self.step_line();
                    }
                    Splice::RunsToEnd => {
                        if diagnostics.flags().warn_no_newline_eof {
                            self.warn(diagnostics, "backslash-newline at end of file");
                        }

                        self.cursor = self.content.len();
                        break Byte::At(b'\n');
                    }
                    Splice::None => {
                        self.column += 1;
                        break Byte::At(b'\\');
                    }
                },
                other => {
                    self.column += 1;
                    break Byte::At(other);
                }
            }
        };

        self.last = ch;
        ch
    }

    /// Lookahead observing the same canonicalization and splicing rules
    /// as `next`, without consuming: `peek() == c` implies the following
    /// `next() == c`.
    pub fn peek(&self) -> Byte {
        if let Some(&byte) = self.stashed.last() {
            return Byte::At(byte);
        }

        let mut cursor = self.cursor;

        loop {
            if cursor >= self.content.len() {
                return if self.last.is(b'\n') || self.last.is_end() {
                    Byte::End
                } else {
                    Byte::At(b'\n')
                };
            }

            let byte = self.content[cursor];
            cursor += 1;

            match byte {
                b'\r' | b'\n' => return Byte::At(b'\n'),
                b'\\' => match self.find_splice(cursor) {
                    Splice::At { after_newline, .. } => cursor = after_newline,
                    Splice::RunsToEnd => return Byte::At(b'\n'),
                    Splice::None => return Byte::At(b'\\'),
                },
                other => return Byte::At(other),
            }
        }
    }

    /// Scans forward from just past a backslash for the newline that
    /// completes a line splice. Only whitespace may intervene.
    fn find_splice(&self, start: usize) -> Splice {
        let mut i = start;

        while i < self.content.len() && is_space_byte(self.content[i]) {
            match self.content[i] {
                b'\r' => {
                    let after = if self.content.get(i + 1) == Some(&b'\n') {
                        i + 2
                    } else {
                        i + 1
                    };
                    return Splice::At {
                        after_newline: after,
                        gap: i > start,
                    };
                }
                b'\n' => {
                    return Splice::At {
                        after_newline: i + 1,
                        gap: i > start,
                    };
                }
                _ => i += 1,
            }
        }

        if i == self.content.len() {
            Splice::RunsToEnd
        } else {
            Splice::None
        }
    }

    fn warn(&self, diagnostics: &Diagnostics, message: &str) {
        diagnostics.push(WarningDiagnostic::with_caret(
            message,
            self.source(),
            Caret {
                column: self.column,
                length: 1,
            },
        ));
    }
}

enum Splice {
    /// A newline completes the splice; `gap` records whether whitespace
    /// separated it from the backslash.
    At { after_newline: usize, gap: bool },
    /// Only whitespace remains between the backslash and end of buffer.
    RunsToEnd,
    /// The next significant byte is not a newline; the backslash stands.
    None,
}
