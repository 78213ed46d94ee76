use super::{
    show::{show_caret, Show},
    Caret, Diagnostic, Severity,
};
use crate::source_files::{Source, SourceFiles};
use colored::Colorize;

pub struct WarningDiagnostic {
    message: String,
    source: Option<Source>,
    caret: Option<Caret>,
}

impl WarningDiagnostic {
    pub fn new(message: impl ToString, source: Source) -> Self {
        Self {
            message: message.to_string(),
            source: Some(source),
            caret: None,
        }
    }

    pub fn with_caret(message: impl ToString, source: Source, caret: Caret) -> Self {
        Self {
            message: message.to_string(),
            source: Some(source),
            caret: Some(caret),
        }
    }

    pub fn plain(message: impl ToString) -> Self {
        Self {
            message: message.to_string(),
            source: None,
            caret: None,
        }
    }
}

impl Show for WarningDiagnostic {
    fn show(&self, w: &mut dyn std::fmt::Write, source_files: &SourceFiles) -> std::fmt::Result {
        if let Some(source) = self.source {
            write!(
                w,
                "{}:{}:{}: {} {}",
                source_files.get(source.key).filename(),
                source.location.line,
                source.location.column,
                "warning:".yellow().bold(),
                self.message,
            )?;

            if let Some(caret) = self.caret {
                show_caret(w, source_files, source, caret)?;
            }

            Ok(())
        } else {
            write!(w, "{} {}", "warning:".yellow().bold(), self.message)
        }
    }
}

impl Diagnostic for WarningDiagnostic {
    fn severity(&self) -> Severity {
        Severity::Warning
    }
}
