//! Lint status — queries, severity selection, display.
//!
//! Two providers are consulted per redraw: ALE (per-buffer check state
//! and error/warning counts) and YouCompleteMe (global counts). Either
//! may be missing or mid-installation on any given setup, so each
//! provider is queried as one guarded unit: any failure inside a unit
//! means that provider contributes nothing this redraw. Evaluation never
//! fails — with no providers at all it reports "good".
//!
//! Exactly one severity is shown per redraw, chosen with strict
//! precedence: loading > error > warning > good.

use log::debug;

use sl_color::{Color, link_command};

use crate::editor::{CallError, Editor, Value};
use crate::items::{ColorPair, GroupColors, PREFIX};

/// Bare group name of the lint segment on the line.
pub const LINT_NAME: &str = "LintStatus";

const LOAD_GROUP: &str = "LintStatus_LINT_LOAD";
const GOOD_GROUP: &str = "LintStatus_LINT_GOOD";
const WARN_GROUP: &str = "LintStatus_LINT_WARN";
const ERROR_GROUP: &str = "LintStatus_LINT_ERROR";

// ─── LintStatus ──────────────────────────────────────────────────────────────

/// The single severity shown for the current redraw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LintStatus {
    /// A check is still running.
    Loading,
    /// No errors, no warnings.
    Good,
    /// At least one warning, no errors.
    Warning,
    /// At least one error.
    Error,
}

impl LintStatus {
    /// The bare highlight group name for this severity.
    #[must_use]
    pub const fn group(self) -> &'static str {
        match self {
            Self::Loading => LOAD_GROUP,
            Self::Good => GOOD_GROUP,
            Self::Warning => WARN_GROUP,
            Self::Error => ERROR_GROUP,
        }
    }

    /// The one-character display token for this severity.
    #[must_use]
    pub const fn token(self) -> char {
        match self {
            Self::Loading => '.',
            Self::Good => 'o',
            Self::Warning => 'w',
            Self::Error => 'x',
        }
    }
}

// ─── LintCounts ──────────────────────────────────────────────────────────────

/// Accumulated results of one round of provider queries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LintCounts {
    /// A provider reported a check in progress.
    pub loading: bool,
    /// Total errors across providers.
    pub errors: i64,
    /// Total warnings across providers.
    pub warnings: i64,
}

impl LintCounts {
    /// Select the severity to display: loading > error > warning > good.
    #[must_use]
    pub const fn status(self) -> LintStatus {
        if self.loading {
            LintStatus::Loading
        } else if self.errors > 0 {
            LintStatus::Error
        } else if self.warnings > 0 {
            LintStatus::Warning
        } else {
            LintStatus::Good
        }
    }
}

// ─── Provider queries ────────────────────────────────────────────────────────

/// What ALE reported for a buffer.
enum AleReport {
    /// A check is still in flight; counts are not meaningful yet.
    Checking,
    /// Final counts, style problems folded in.
    Counts { errors: i64, warnings: i64 },
}

/// Read an integer field out of a mapping reply.
fn int_field(name: &str, reply: &Value, key: &str) -> Result<i64, CallError> {
    reply
        .get(key)
        .and_then(Value::as_i64)
        .ok_or_else(|| CallError::BadReply {
            name: name.to_string(),
            reply: reply.clone(),
        })
}

/// Query ALE for one buffer. One guarded unit: any failure discards the
/// whole ALE contribution for this redraw.
fn ale_report(editor: &mut dyn Editor, buf: u64) -> Result<AleReport, CallError> {
    const IS_CHECKING: &str = "ale#engine#IsCheckingBuffer";
    const COUNT: &str = "ale#statusline#Count";

    let checking = editor.call_function(IS_CHECKING, vec![Value::from(buf)])?;
    let checking = checking.as_i64().ok_or_else(|| CallError::BadReply {
        name: IS_CHECKING.to_string(),
        reply: checking.clone(),
    })?;
    if checking != 0 {
        return Ok(AleReport::Checking);
    }

    let counts = editor.call_function(COUNT, vec![Value::from(buf)])?;
    Ok(AleReport::Counts {
        errors: int_field(COUNT, &counts, "error")? + int_field(COUNT, &counts, "style_error")?,
        warnings: int_field(COUNT, &counts, "warning")?
            + int_field(COUNT, &counts, "style_warning")?,
    })
}

/// Query YouCompleteMe's global counts. One guarded unit.
fn ycm_counts(editor: &mut dyn Editor) -> Result<(i64, i64), CallError> {
    let errors = int_reply(editor, "youcompleteme#GetErrorCount")?;
    let warnings = int_reply(editor, "youcompleteme#GetWarningCount")?;
    Ok((errors, warnings))
}

fn int_reply(editor: &mut dyn Editor, name: &str) -> Result<i64, CallError> {
    let reply = editor.call_function(name, Vec::new())?;
    reply.as_i64().ok_or_else(|| CallError::BadReply {
        name: name.to_string(),
        reply,
    })
}

/// Run every provider query for a buffer, swallowing per-provider
/// failures into zero contributions.
#[must_use]
pub fn query(editor: &mut dyn Editor, buf: u64) -> LintCounts {
    let mut counts = LintCounts::default();

    match ale_report(editor, buf) {
        Ok(AleReport::Checking) => counts.loading = true,
        Ok(AleReport::Counts { errors, warnings }) => {
            counts.errors += errors;
            counts.warnings += warnings;
        }
        Err(err) => debug!("no lint data from ale: {err}"),
    }

    match ycm_counts(editor) {
        Ok((errors, warnings)) => {
            counts.errors += errors;
            counts.warnings += warnings;
        }
        Err(err) => debug!("no lint data from ycm: {err}"),
    }

    counts
}

// ─── LintItem ────────────────────────────────────────────────────────────────

/// The lint segment: four severity-keyed highlight groups and a
/// per-redraw evaluation that picks one of them.
#[derive(Debug, Clone, Copy, Default)]
pub struct LintItem;

impl LintItem {
    /// Create the lint item.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// The four severity groups with their window-state color pairs.
    #[must_use]
    pub const fn highlight_groups(&self) -> [GroupColors; 4] {
        [
            GroupColors {
                name: LOAD_GROUP,
                active: ColorPair::new(Color::rgb(0xda, 0xda, 0xda), Color::rgb(0x00, 0x00, 0xaf)),
                inactive: ColorPair::on_inactive(Color::rgb(0x00, 0x5f, 0xd7)),
            },
            GroupColors {
                name: GOOD_GROUP,
                active: ColorPair::on_active(Color::rgb(0x8a, 0xe2, 0x34)),
                inactive: ColorPair::on_inactive(Color::rgb(0x5f, 0xaf, 0x00)),
            },
            GroupColors {
                name: WARN_GROUP,
                active: ColorPair::new(Color::rgb(0xda, 0xda, 0xda), Color::rgb(0x5f, 0x00, 0x5f)),
                inactive: ColorPair::on_inactive(Color::rgb(0x87, 0x00, 0x87)),
            },
            GroupColors {
                name: ERROR_GROUP,
                active: ColorPair::new(Color::rgb(0xee, 0xee, 0xee), Color::rgb(0x87, 0x00, 0x00)),
                inactive: ColorPair::on_inactive(Color::rgb(0xd7, 0x00, 0x00)),
            },
        ]
    }

    /// The (group, template) pair for statusline assembly. The template
    /// re-enters the plugin via the `GetLintStatus()` placeholder on
    /// every redraw.
    #[must_use]
    pub const fn display(&self) -> (&'static str, &'static str) {
        (LINT_NAME, "%{GetLintStatus()}")
    }

    /// Evaluate the lint status for the current buffer.
    ///
    /// Re-links the segment's group to the selected severity's group and
    /// returns the display token. The token starts with a no-break space
    /// — the host strips a leading plain space from the reply.
    pub fn evaluate(&self, editor: &mut dyn Editor) -> String {
        let buf = editor.current_buf();
        let status = query(editor, buf).status();
        editor.command(&link_command(
            &format!("{PREFIX}{LINT_NAME}"),
            &format!("{PREFIX}{}", status.group()),
        ));
        format!("\u{a0}{} ", status.token())
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
