use crate::source_files::{Source, SourceFiles};

use super::Caret;

pub trait Show {
    fn show(&self, w: &mut dyn std::fmt::Write, source_files: &SourceFiles) -> std::fmt::Result;

    fn eprintln(&self, source_files: &SourceFiles) {
        let mut message = String::new();
        self.show(&mut message, source_files).unwrap();
        eprintln!("{}", message);
    }
}

/// Writes the physical source line of `source` followed by a caret line
/// underlining the requested region.
pub(super) fn show_caret(
    w: &mut dyn std::fmt::Write,
    source_files: &SourceFiles,
    source: Source,
    caret: Caret,
) -> std::fmt::Result {
    let line = source_files.get(source.key).line_at(source.line_start);

    write!(
        w,
        "\n{}\n{}{}",
        String::from_utf8_lossy(line),
        " ".repeat(caret.column.saturating_sub(1)),
        "^".repeat(caret.length.max(1)),
    )
}
