use std::{
    path::{Path, PathBuf},
    time::SystemTime,
};

#[derive(Copy, Clone, Debug, Default)]
pub struct FileTimes {
    pub modified: Option<SystemTime>,
    pub accessed: Option<SystemTime>,
    pub changed: Option<SystemTime>,
}

#[derive(Debug)]
pub struct SourceFile {
    filepath: PathBuf,
    content: Vec<u8>,
    times: FileTimes,
}

impl SourceFile {
    pub fn new(filepath: PathBuf, content: Vec<u8>, times: FileTimes) -> Self {
        Self {
            filepath,
            content,
            times,
        }
    }

    pub fn filename(&self) -> &str {
        self.filepath
            .to_str()
            .unwrap_or("<invalid unicode filename>")
    }

    pub fn filepath(&self) -> &Path {
        &self.filepath
    }

    pub fn content(&self) -> &[u8] {
        &self.content
    }

    pub fn times(&self) -> FileTimes {
        self.times
    }

    /// Slice of the physical source line beginning at `line_start`,
    /// up to but not including its line terminator.
    pub fn line_at(&self, line_start: usize) -> &[u8] {
        let rest = &self.content[line_start.min(self.content.len())..];
        let end = rest
            .iter()
            .position(|&b| b == b'\r' || b == b'\n')
            .unwrap_or(rest.len());
        &rest[..end]
    }
}
