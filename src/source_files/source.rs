use super::{SourceFileKey, SourceFiles};
use crate::line_column::Location;

// WARNING: Don't implement PartialEq, Eq, or Hash for this.
// It's too easy to accidentally define constructs that are only equal
// depending on source, which is usually not what we want.
#[derive(Copy, Clone, Debug)]
pub struct Source {
    pub key: SourceFileKey,

    pub location: Location,

    /// Byte offset of the first byte of the current physical line within
    /// the interned buffer, for caret rendering.
    pub line_start: usize,
}

impl Source {
    pub fn new(key: SourceFileKey, location: Location, line_start: usize) -> Self {
        Self {
            key,
            location,
            line_start,
        }
    }

    pub fn internal() -> Self {
        Self {
            key: SourceFiles::INTERNAL_KEY,
            location: Location { line: 1, column: 1 },
            line_start: 0,
        }
    }

    pub fn is_internal(&self) -> bool {
        self.key == SourceFiles::INTERNAL_KEY
    }
}
