mod byte;
mod stream;

pub use byte::{is_space_byte, Byte};
use stream::Stream;

use crate::{
    diagnostics::Diagnostics,
    source_files::{FileTimes, Source, SourceFiles},
};
use std::{
    fs,
    io::Read,
    path::{Path, PathBuf},
    time::SystemTime,
};
use thiserror::Error;

/// Input unit to push onto a reader: a file read fully into memory at
/// push time, or an in-memory byte buffer (filename `<string>`).
#[derive(Copy, Clone, Debug)]
pub enum StreamSource<'p> {
    File(&'p Path),
    Text(&'p [u8]),
}

#[derive(Error, Debug)]
pub enum PushError {
    #[error("failed to open '{}': {error}", path.display())]
    Open {
        path: PathBuf,
        error: std::io::Error,
    },
    #[error("failed to stat '{}': {error}", path.display())]
    Metadata {
        path: PathBuf,
        error: std::io::Error,
    },
    #[error("failed to read '{}': {error}", path.display())]
    Read {
        path: PathBuf,
        error: std::io::Error,
    },
}

/// A stack of input streams. Characters come from the topmost stream;
/// position queries require a non-empty stack.
pub struct Reader<'a> {
    source_files: &'a SourceFiles,
    diagnostics: &'a Diagnostics<'a>,
    streams: Vec<Stream<'a>>,
}

impl<'a> Reader<'a> {
    pub fn new(source_files: &'a SourceFiles, diagnostics: &'a Diagnostics<'a>) -> Self {
        Self {
            source_files,
            diagnostics,
            streams: Vec::new(),
        }
    }

    /// Interns the unit's filename and contents, then pushes a stream
    /// over them. On failure the reader is left unchanged.
    pub fn push(&mut self, source: StreamSource) -> Result<(), PushError> {
        let key = match source {
            StreamSource::File(path) => {
                let mut file = fs::File::open(path).map_err(|error| PushError::Open {
                    path: path.into(),
                    error,
                })?;

                let metadata = file.metadata().map_err(|error| PushError::Metadata {
                    path: path.into(),
                    error,
                })?;

                let mut content = Vec::with_capacity(metadata.len() as usize);
                file.read_to_end(&mut content)
                    .map_err(|error| PushError::Read {
                        path: path.into(),
                        error,
                    })?;

                self.source_files
                    .add(path.into(), content, capture_times(&metadata))
            }
            StreamSource::Text(bytes) => {
                self.source_files
                    .add("<string>".into(), bytes.to_vec(), FileTimes::default())
            }
        };

        let file = self.source_files.get(key);
        self.streams
            .push(Stream::new(key, file.content(), file.times()));
        Ok(())
    }

    pub fn pop(&mut self) {
        self.streams.pop().expect("pop on empty reader");
    }

    pub fn depth(&self) -> usize {
        self.streams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.streams.is_empty()
    }

    pub fn get(&mut self) -> Byte {
        match self.streams.last_mut() {
            Some(stream) => stream.next(self.diagnostics),
            None => Byte::End,
        }
    }

    pub fn peek(&self) -> Byte {
        match self.streams.last() {
            Some(stream) => stream.peek(),
            None => Byte::End,
        }
    }

    pub fn unget(&mut self, byte: u8) {
        self.streams
            .last_mut()
            .expect("unget on empty reader")
            .unget(byte);
    }

    /// Consumes the next byte iff it equals `byte`.
    pub fn eat(&mut self, byte: u8) -> bool {
        if self.peek().is(byte) {
            self.get();
            return true;
        }
        false
    }

    /// True iff the next byte equals `byte`; consumes nothing.
    pub fn test(&self, byte: u8) -> bool {
        self.peek().is(byte)
    }

    fn last(&self) -> &Stream<'a> {
        self.streams.last().expect("position query on empty reader")
    }

    pub fn line(&self) -> usize {
        self.last().line()
    }

    pub fn column(&self) -> usize {
        self.last().column()
    }

    pub fn line_start(&self) -> usize {
        self.last().line_start()
    }

    pub fn filename(&self) -> &'a str {
        self.source_files.get(self.last().key()).filename()
    }

    pub fn source(&self) -> Source {
        self.last().source()
    }

    pub fn modify_time(&self) -> Option<SystemTime> {
        self.last().times().modified
    }

    pub fn access_time(&self) -> Option<SystemTime> {
        self.last().times().accessed
    }

    pub fn change_time(&self) -> Option<SystemTime> {
        self.last().times().changed
    }
}

fn capture_times(metadata: &fs::Metadata) -> FileTimes {
    FileTimes {
        modified: metadata.modified().ok(),
        accessed: metadata.accessed().ok(),
        changed: change_time(metadata),
    }
}

// Status-change time is not part of the portable metadata API.
#[cfg(unix)]
fn change_time(metadata: &fs::Metadata) -> Option<SystemTime> {
    use std::os::unix::fs::MetadataExt;
    use std::time::Duration;

    u64::try_from(metadata.ctime()).ok().map(|seconds| {
        SystemTime::UNIX_EPOCH + Duration::new(seconds, metadata.ctime_nsec() as u32)
    })
}

#[cfg(not(unix))]
fn change_time(_metadata: &fs::Metadata) -> Option<SystemTime> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::DiagnosticFlags;

    fn collect_flags() -> DiagnosticFlags {
        DiagnosticFlags {
            print_without_collecting: false,
            ..DiagnosticFlags::default()
        }
    }

    fn read_all(source: &[u8], flags: DiagnosticFlags) -> (Vec<u8>, usize) {
        let source_files = SourceFiles::new();
        let diagnostics = Diagnostics::new(&source_files, flags);
        let mut reader = Reader::new(&source_files, &diagnostics);
        reader.push(StreamSource::Text(source)).unwrap();

        let mut bytes = Vec::new();
        while let Byte::At(byte) = reader.get() {
            bytes.push(byte);
        }

        (bytes, diagnostics.warning_count())
    }

    fn read_bytes(source: &[u8]) -> Vec<u8> {
        read_all(source, collect_flags()).0
    }

    #[test]
    fn line_endings_are_canonicalized() {
        assert_eq!(read_bytes(b"a\nb"), b"a\nb\n");
        assert_eq!(read_bytes(b"a\r\nb"), b"a\nb\n");
        assert_eq!(read_bytes(b"a\rb"), b"a\nb\n");
    }

    #[test]
    fn terminal_newline_is_synthesized_once() {
        assert_eq!(read_bytes(b"abc"), b"abc\n");
        assert_eq!(read_bytes(b"abc\n"), b"abc\n");
    }

    #[test]
    fn empty_input_still_ends_in_newline() {
        assert_eq!(read_bytes(b""), b"\n");
    }

    #[test]
    fn backslash_newline_is_spliced() {
        assert_eq!(read_bytes(b"ab\\\ncd"), b"abcd\n");
        assert_eq!(read_bytes(b"ab\\\r\ncd"), b"abcd\n");
    }

    #[test]
    fn splice_tolerates_intervening_spaces() {
        let (bytes, warnings) = read_all(b"ab\\  \ncd", collect_flags());
        assert_eq!(bytes, b"abcd\n");
        assert_eq!(warnings, 0);
    }

    #[test]
    fn splice_gap_warns_when_enabled() {
        let flags = DiagnosticFlags {
            w_backslash_newline_space: true,
            ..collect_flags()
        };
        let (bytes, warnings) = read_all(b"ab\\ \ncd", flags);
        assert_eq!(bytes, b"abcd\n");
        assert_eq!(warnings, 1);
    }

    #[test]
    fn splice_running_to_end_of_file_yields_newline() {
        let flags = DiagnosticFlags {
            warn_no_newline_eof: true,
            ..collect_flags()
        };
        let (bytes, warnings) = read_all(b"ab\\", flags);
        assert_eq!(bytes, b"ab\n");
        assert_eq!(warnings, 1);
    }

    #[test]
    fn backslash_before_other_text_stands_alone() {
        assert_eq!(read_bytes(b"a\\b"), b"a\\b\n");
    }

    #[test]
    fn peek_agrees_with_get() {
        let source_files = SourceFiles::new();
        let diagnostics = Diagnostics::new(&source_files, collect_flags());
        let mut reader = Reader::new(&source_files, &diagnostics);
        reader.push(StreamSource::Text(b"x\\\ny\r\nz")).unwrap();

        loop {
            let ahead = reader.peek();
            let got = reader.get();
            assert_eq!(ahead, got);
            if got.is_end() {
                break;
            }
        }
    }

    #[test]
    fn unget_stacks_in_lifo_order() {
        let source_files = SourceFiles::new();
        let diagnostics = Diagnostics::new(&source_files, collect_flags());
        let mut reader = Reader::new(&source_files, &diagnostics);
        reader.push(StreamSource::Text(b"c")).unwrap();

        reader.unget(b'a');
        reader.unget(b'b');
        assert_eq!(reader.get(), Byte::At(b'b'));
        assert_eq!(reader.get(), Byte::At(b'a'));
        assert_eq!(reader.get(), Byte::At(b'c'));
    }

    #[test]
    fn position_tracks_lines_and_columns() {
        let source_files = SourceFiles::new();
        let diagnostics = Diagnostics::new(&source_files, collect_flags());
        let mut reader = Reader::new(&source_files, &diagnostics);
        reader.push(StreamSource::Text(b"ab\ncd")).unwrap();

        assert_eq!((reader.line(), reader.column()), (1, 1));
        reader.get();
        reader.get();
        assert_eq!((reader.line(), reader.column()), (1, 3));
        reader.get();
        assert_eq!((reader.line(), reader.column()), (2, 1));
        reader.get();
        assert_eq!((reader.line(), reader.column()), (2, 2));
        assert_eq!(reader.line_start(), 3);
    }

    #[test]
    fn streams_stack_and_pop() {
        let source_files = SourceFiles::new();
        let diagnostics = Diagnostics::new(&source_files, collect_flags());
        let mut reader = Reader::new(&source_files, &diagnostics);
        reader.push(StreamSource::Text(b"outer")).unwrap();
        reader.push(StreamSource::Text(b"in")).unwrap();

        assert_eq!(reader.depth(), 2);
        assert_eq!(reader.get(), Byte::At(b'i'));
        assert_eq!(reader.get(), Byte::At(b'n'));
        assert_eq!(reader.get(), Byte::At(b'\n'));
        assert_eq!(reader.get(), Byte::End);

        reader.pop();
        assert_eq!(reader.depth(), 1);
        assert_eq!(reader.get(), Byte::At(b'o'));
    }

    #[test]
    fn missing_file_fails_without_pushing() {
        let source_files = SourceFiles::new();
        let diagnostics = Diagnostics::new(&source_files, collect_flags());
        let mut reader = Reader::new(&source_files, &diagnostics);

        let result = reader.push(StreamSource::File(Path::new(
            "/nonexistent/cfront-test-input.c",
        )));

        assert!(matches!(result, Err(PushError::Open { .. })));
        assert!(reader.is_empty());
    }
}
