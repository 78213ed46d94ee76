mod error;
mod show;
mod warning;

use crate::source_files::SourceFiles;
use append_only_vec::AppendOnlyVec;
use core::fmt::Debug;
use std::cell::Cell;

pub use error::ErrorDiagnostic;
pub use show::Show;
pub use warning::WarningDiagnostic;

pub trait Diagnostic: Show {
    fn severity(&self) -> Severity;
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

/// Region to underline when rendering a diagnostic against its
/// physical source line.
#[derive(Copy, Clone, Debug)]
pub struct Caret {
    pub column: usize,
    pub length: usize,
}

#[derive(Clone, Debug)]
pub struct DiagnosticFlags {
    pub print_without_collecting: bool,
    pub w_backslash_newline_space: bool,
    pub warn_no_newline_eof: bool,
}

impl Default for DiagnosticFlags {
    fn default() -> Self {
        Self {
            print_without_collecting: true,
            w_backslash_newline_space: false,
            warn_no_newline_eof: false,
        }
    }
}

pub struct Diagnostics<'a> {
    source_files: &'a SourceFiles,
    diagnostics: AppendOnlyVec<Box<dyn Diagnostic>>,
    flags: DiagnosticFlags,
    errors: Cell<usize>,
    warnings: Cell<usize>,
}

impl<'a> Debug for Diagnostics<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Diagnostics").finish_non_exhaustive()
    }
}

impl<'a> Diagnostics<'a> {
    pub fn new(source_files: &'a SourceFiles, flags: DiagnosticFlags) -> Self {
        Self {
            source_files,
            diagnostics: AppendOnlyVec::<Box<dyn Diagnostic>>::new(),
            flags,
            errors: Cell::new(0),
            warnings: Cell::new(0),
        }
    }

    pub fn flags(&self) -> &DiagnosticFlags {
        &self.flags
    }

    pub fn source_files(&self) -> &'a SourceFiles {
        self.source_files
    }

    pub fn error_count(&self) -> usize {
        self.errors.get()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings.get()
    }

    pub fn push(&self, diagnostic: impl Diagnostic + 'static) {
        match diagnostic.severity() {
            Severity::Error => self.errors.set(self.errors.get() + 1),
            Severity::Warning => self.warnings.set(self.warnings.get() + 1),
        }

        if self.flags.print_without_collecting {
            self.print(&diagnostic);
        } else {
            self.diagnostics.push(Box::new(diagnostic));
        }
    }

    pub fn print_all(&self) {
        for diagnostic in self.diagnostics.iter() {
            self.print(&**diagnostic);
        }
    }

    pub fn print(&self, diagnostic: &dyn Diagnostic) {
        let mut message = String::new();

        diagnostic
            .show(&mut message, self.source_files)
            .expect("show error message");

        eprintln!("{message}");
    }
}
