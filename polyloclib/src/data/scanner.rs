//! Line classification for any language in the catalog.
//!
//! A [`LineClassifier`] is fed one line at a time and decides whether the
//! line is blank, comment or code. It carries a stack of open block comments
//! across lines, so nested and overlapping delimiter pairs such as `(* *)`
//! next to `/* */` are tracked independently.
//!
//! A [`Scanner`] wraps the classifier with line reading: it splits any
//! reader into lines, strips `\n`/`\r\n`, decodes invalid UTF-8 lossily and
//! reports every classified line to an optional [`LineObserver`].

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use tracing::{debug, warn};

use crate::error::PolylocError;
use crate::language::LanguageDefinition;
use crate::Result;

use super::stats::Locs;

/// Default limit on the length of a single line, in bytes.
pub const DEFAULT_MAX_LINE_LENGTH: usize = 1024 * 1024;

const BOM: char = '\u{feff}';

/// The kind of a classified line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Blank,
    Comment,
    Code,
}

/// Receives every classified line.
///
/// Methods are invoked synchronously on the scanning thread with the line
/// stripped of its terminator but otherwise untouched.
pub trait LineObserver: Send + Sync {
    fn on_code(&self, _line: &str) {}
    fn on_blank(&self, _line: &str) {}
    fn on_comment(&self, _line: &str) {}
}

/// Stateful per-file line classifier.
#[derive(Debug)]
pub struct LineClassifier<'a> {
    language: &'a LanguageDefinition,
    /// Indices of the delimiter pairs currently open, innermost last.
    open: Vec<usize>,
    first_line: bool,
}

impl<'a> LineClassifier<'a> {
    pub fn new(language: &'a LanguageDefinition) -> Self {
        Self {
            language,
            open: Vec::new(),
            first_line: true,
        }
    }

    /// Whether a block comment is open after the lines seen so far.
    pub fn in_block_comment(&self) -> bool {
        !self.open.is_empty()
    }

    /// Classify the next line of the file (terminator already stripped).
    pub fn classify(&mut self, line: &str) -> LineKind {
        let mut trimmed = line.trim();

        if self.first_line {
            // The shebang test sees the line as read; the BOM goes after it.
            let stripped = trimmed.trim_start_matches(BOM).trim_start();
            if stripped.is_empty() {
                return LineKind::Blank;
            }
            self.first_line = false;
            if trimmed.starts_with("#!") {
                return LineKind::Code;
            }
            trimmed = stripped;
        } else if trimmed.is_empty() {
            return LineKind::Blank;
        }

        if self.open.is_empty() {
            if self.language.is_line_comment(trimmed) {
                return LineKind::Comment;
            }
            if self.language.block_comments().is_empty() || !self.language.mentions_delimiter(trimmed)
            {
                return LineKind::Code;
            }
        }

        self.scan_delimiters(trimmed)
    }

    /// Walk the line once, tracking every delimiter pair separately.
    ///
    /// The line is code only if every pair saw non-blank text outside a
    /// comment. The position advances past a matched marker and then by one
    /// more at the end of each step, so the character right after a marker
    /// is never inspected.
    fn scan_delimiters(&mut self, line: &str) -> LineKind {
        let pairs = self.language.block_comments();
        let bytes = line.as_bytes();
        let len = bytes.len();
        let mut saw_code = vec![false; pairs.len()];
        let mut pos = 0;

        while pos < len {
            let rest = bytes.get(pos..).unwrap_or_default();

            if self.open.is_empty()
                && rest.first() == Some(&b'"')
                && !is_char_literal(bytes, pos)
                && !pairs.iter().any(|p| rest.starts_with(p.begin.as_bytes()))
            {
                if let Some(end) = closing_quote(bytes, pos + 1) {
                    saw_code.fill(true);
                    pos = end;
                    continue;
                }
            }

            for (idx, pair) in pairs.iter().enumerate() {
                let rest = bytes.get(pos..).unwrap_or_default();
                if rest.starts_with(pair.begin.as_bytes())
                    && (pair.begin != pair.end || !self.open.contains(&idx))
                {
                    self.open.push(idx);
                    pos += pair.begin.len();
                    continue;
                }

                if let Some(&top) = self.open.last() {
                    let end = pairs[top].end.as_bytes();
                    if rest.starts_with(end) {
                        self.open.pop();
                        pos += end.len();
                    }
                } else if pos < len && !is_space_at(line, pos) {
                    saw_code[idx] = true;
                }
            }
            pos += 1;
        }

        if saw_code.iter().all(|&seen| seen) {
            LineKind::Code
        } else {
            LineKind::Comment
        }
    }
}

/// Position just past the closing quote of a string starting at `start`,
/// if the string ends on this line.
fn closing_quote(bytes: &[u8], start: usize) -> Option<usize> {
    let mut i = start;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b'"' => return Some(i + 1),
            _ => i += 1,
        }
    }
    None
}

/// `'"'`: a quote character, not the start of a string.
fn is_char_literal(bytes: &[u8], pos: usize) -> bool {
    pos > 0 && bytes[pos - 1] == b'\'' && bytes.get(pos + 1) == Some(&b'\'')
}

/// Positions inside a multi-byte character count as non-space.
fn is_space_at(line: &str, pos: usize) -> bool {
    line.get(pos..)
        .and_then(|rest| rest.chars().next())
        .is_some_and(char::is_whitespace)
}

/// Reads lines from a source and counts them with a [`LineClassifier`].
pub struct Scanner<'a> {
    language: &'a LanguageDefinition,
    max_line_length: usize,
    observer: Option<&'a dyn LineObserver>,
    debug: bool,
}

impl<'a> Scanner<'a> {
    pub fn new(language: &'a LanguageDefinition) -> Self {
        Self {
            language,
            max_line_length: DEFAULT_MAX_LINE_LENGTH,
            observer: None,
            debug: false,
        }
    }

    /// Stop counting a file at the first line longer than this many bytes.
    pub fn max_line_length(mut self, max: usize) -> Self {
        self.max_line_length = max;
        self
    }

    pub fn observer(mut self, observer: Option<&'a dyn LineObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Log every classified line at debug level.
    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Count the lines of a file on disk.
    pub fn scan_path(&self, path: &Path) -> Result<Locs> {
        let file = File::open(path).map_err(|e| PolylocError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(self.scan(path, file))
    }

    /// Count the lines produced by `reader`.
    ///
    /// A read error or an overlong line ends the scan; the lines counted up
    /// to that point are kept. `path` is only used for diagnostics.
    pub fn scan<R: Read>(&self, path: &Path, reader: R) -> Locs {
        let mut reader = BufReader::new(reader);
        let mut classifier = LineClassifier::new(self.language);
        let mut locs = Locs::new();
        let mut buf = Vec::new();
        // Room for the line plus `\r\n`.
        let limit = self.max_line_length as u64 + 2;
        let mut line_no = 0usize;

        loop {
            buf.clear();
            match (&mut reader).take(limit).read_until(b'\n', &mut buf) {
                Ok(0) => break,
                Ok(_) => {}
                Err(err) => {
                    warn!(path = %path.display(), line = line_no + 1, "read failed: {err}");
                    break;
                }
            }

            if buf.last() == Some(&b'\n') {
                buf.pop();
            }
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
            if buf.len() > self.max_line_length {
                warn!(
                    path = %path.display(),
                    line = line_no + 1,
                    max = self.max_line_length,
                    "line too long, skipping the rest of the file"
                );
                break;
            }
            line_no += 1;

            let line = String::from_utf8_lossy(&buf);
            let kind = classifier.classify(&line);
            match kind {
                LineKind::Blank => locs.blanks += 1,
                LineKind::Comment => locs.comments += 1,
                LineKind::Code => locs.codes += 1,
            }

            if self.debug {
                debug!(path = %path.display(), line = line_no, kind = ?kind, "{line}");
            }
            if let Some(observer) = self.observer {
                match kind {
                    LineKind::Blank => observer.on_blank(&line),
                    LineKind::Comment => observer.on_comment(&line),
                    LineKind::Code => observer.on_code(&line),
                }
            }
        }

        locs
    }
}

/// Count the lines of in-memory source text.
///
/// # Example
///
/// ```rust
/// use polyloclib::{scan_str, LanguageCatalog};
///
/// let go = LanguageCatalog::builtin().lookup("Go").unwrap();
/// let locs = scan_str(go, "package main\n\n// entry point\nfunc main() {}\n");
///
/// assert_eq!(locs.codes, 2);
/// assert_eq!(locs.comments, 1);
/// assert_eq!(locs.blanks, 1);
/// ```
pub fn scan_str(language: &LanguageDefinition, source: &str) -> Locs {
    Scanner::new(language).scan(Path::new("<memory>"), source.as_bytes())
}
