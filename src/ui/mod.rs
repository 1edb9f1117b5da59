//! User interface module - terminal reporting and formatting.
//!
//! - `formatter` - Pure formatting functions
//! - This module - [`Reporter`], which applies the `--quiet` switch

use crate::boundary::StampWarning;
use crate::cli::orchestration::StampResult;

pub mod formatter;

pub use formatter::{
    display_error, display_stamp_warning, display_status, display_success, format_stamp_summary,
};

/// Routes progress output to the terminal.
///
/// Errors and warnings are always shown; status and success lines are
/// suppressed when `quiet` is set.
#[derive(Debug, Clone, Copy, Default)]
pub struct Reporter {
    quiet: bool,
}

impl Reporter {
    pub fn new(quiet: bool) -> Self {
        Reporter { quiet }
    }

    pub fn status(&self, message: &str) {
        if !self.quiet {
            display_status(message);
        }
    }

    pub fn success(&self, message: &str) {
        if !self.quiet {
            display_success(message);
        }
    }

    pub fn warning(&self, warning: &StampWarning) {
        display_stamp_warning(warning);
    }

    pub fn error(&self, message: &str) {
        display_error(message);
    }

    /// Print the end-of-run summary for a stamp result.
    pub fn summary(&self, result: &StampResult, placeholder: &str) {
        self.success(&format_stamp_summary(result, placeholder));
    }
}
