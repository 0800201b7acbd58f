use std::borrow::Cow;
use std::fmt;
use thiserror::Error;

/// The single failure kind every parser reports.
///
/// Failures never consume input: `rest` is the input that was handed to the
/// parser which failed. Combinators that catch a sub-parser failure replace
/// it with their own diagnostic and their own input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ParseError<'code> {
    message: Cow<'static, str>,
    rest: &'code str,
}

impl<'code> ParseError<'code> {
    pub fn new(message: impl Into<Cow<'static, str>>, rest: &'code str) -> Self {
        Self {
            message: message.into(),
            rest,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// The unconsumed input at the point of failure
    pub fn rest(&self) -> &'code str {
        self.rest
    }

    /// Byte offset into `source` where parsing stopped.
    ///
    /// `source` must be the buffer the top-level parse was started on; since
    /// `rest` is always a suffix of it, the offset is the length difference.
    pub fn offset_in(&self, source: &str) -> usize {
        source.len().saturating_sub(self.rest.len())
    }

    /// Render this failure against the full source text with line context
    pub fn report<'a>(&'a self, source: &'a str) -> Report<'a> {
        Report {
            message: self.message.as_ref(),
            loc: CodeLoc::new(source, self.offset_in(source)),
        }
    }
}

/// Error raised while building a parser from an invalid pattern
#[derive(Error, Debug)]
pub enum PatternError {
    #[error("invalid regex pattern: {0}")]
    Invalid(#[from] regex::Error),
}

#[derive(Debug, PartialEq, Eq)]
pub struct ReadablePosition {
    pub line: usize,
    pub byte_offset: usize,
}

#[derive(Debug, Copy, Clone)]
struct CodeLoc<'a> {
    code: &'a str,
    /// The position in `code` where parsing stopped
    loc: usize,
}

impl<'a> CodeLoc<'a> {
    fn new(code: &'a str, loc: usize) -> Self {
        Self { code, loc }
    }

    /// Line number (1-based) and byte offset within that line.
    ///
    /// Byte offset rather than column: columns depend on tab width and
    /// character width, byte offsets do not.
    fn readable_position(&self) -> ReadablePosition {
        let mut line = 1;
        let mut line_start = 0;

        for (i, byte) in self.code.bytes().enumerate() {
            if i >= self.loc {
                break;
            }
            if byte == b'\n' {
                line += 1;
                line_start = i + 1;
            }
        }

        ReadablePosition {
            line,
            byte_offset: self.loc - line_start,
        }
    }

    /// Up to 2 lines before and after the failing line, with a pointer under it
    fn context_lines(&self) -> Vec<String> {
        let pos = self.readable_position();
        let first = pos.line.saturating_sub(2);
        let last = pos.line + 2;
        let mut lines = Vec::new();

        for (index, content) in self.code.split('\n').enumerate() {
            let current_line = index + 1;
            if current_line < first {
                continue;
            }
            if current_line > last {
                break;
            }

            let prefix = if current_line == pos.line {
                format!("  > {} | ", current_line)
            } else {
                format!("    {} | ", current_line)
            };
            lines.push(format!("{}{}", prefix, content));

            if current_line == pos.line {
                let pointer_offset = prefix.len() + pos.byte_offset;
                lines.push(format!("{}^--- here", " ".repeat(pointer_offset)));
            }
        }

        lines
    }
}

/// A [`ParseError`] located in its source text, ready for display
#[derive(Debug)]
pub struct Report<'a> {
    message: &'a str,
    loc: CodeLoc<'a>,
}

impl Report<'_> {
    pub fn position(&self) -> ReadablePosition {
        self.loc.readable_position()
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pos = self.loc.readable_position();
        writeln!(
            f,
            "Parse error at line {}, byte offset {}: {}",
            pos.line, pos.byte_offset, self.message
        )?;
        writeln!(f)?;
        for line in self.loc.context_lines() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
