//! File classification: path to extension key.
//!
//! The extension key is what the language catalog resolves to a language.
//! Resolution order, first match wins:
//!
//! 1. well-known build-tool filenames (`CMakeLists.txt`, `Makefile`, ...)
//! 2. content sniffing for ambiguous extensions (`.m`, `.v`, `.fs`, `.r`,
//!    `.ts`, `.mo`)
//! 3. the interpreter named by a `#!` first line
//! 4. the filename extension

use std::fs::{self, File};
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use std::sync::{Arc, LazyLock};

use regex::Regex;
use tracing::debug;

use crate::language::extensions::{
    exact_filename, folded_filename, shebang_alias, AMBIGUOUS_EXTENSIONS,
};

use super::sniff::{HeuristicSniffer, LanguageSniffer};

/// Bytes read when looking for a shebang.
const SHEBANG_READ_LIMIT: u64 = 4096;

static SHEBANG_ENV: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#! *(\S+/env) ([a-zA-Z]+)").expect("shebang env pattern is valid")
});
static SHEBANG_INTERPRETER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#! *[.a-zA-Z/]+/([a-zA-Z]+)").expect("shebang interpreter pattern is valid")
});

/// Assigns extension keys to paths.
#[derive(Clone)]
pub struct FileClassifier {
    sniffer: Arc<dyn LanguageSniffer>,
}

impl Default for FileClassifier {
    fn default() -> Self {
        Self::new(Arc::new(HeuristicSniffer))
    }
}

impl std::fmt::Debug for FileClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileClassifier").finish_non_exhaustive()
    }
}

impl FileClassifier {
    pub fn new(sniffer: Arc<dyn LanguageSniffer>) -> Self {
        Self { sniffer }
    }

    /// Return the extension key of `path`, or `None` if it has none or is
    /// explicitly skipped.
    ///
    /// Unreadable files are never an error here; they simply fall through
    /// to the extension rule.
    pub fn classify(&self, path: &Path) -> Option<String> {
        let file_name = path.file_name()?.to_string_lossy();

        if let Some(key) = exact_filename(&file_name) {
            return Some(key.to_string());
        }
        if let Some(key) = folded_filename(&file_name) {
            return key.map(str::to_string);
        }

        let ext = path.extension().map(|e| e.to_string_lossy().into_owned());

        if let Some(ext) = ext.as_deref().filter(|e| AMBIGUOUS_EXTENSIONS.contains(e)) {
            if let Some(key) = self.sniff(path, ext) {
                return Some(key);
            }
        }

        if let Some(key) = read_first_line(path).as_deref().and_then(shebang_key) {
            return Some(key);
        }

        ext.filter(|e| !e.is_empty())
    }

    fn sniff(&self, path: &Path, ext: &str) -> Option<String> {
        let content = match fs::read(path) {
            Ok(content) => content,
            Err(err) => {
                debug!(path = %path.display(), "unable to read for sniffing: {err}");
                return None;
            }
        };

        let key = self.sniffer.detect(path, &content);
        debug!(path = %path.display(), key = ?key, "sniffed");
        match key {
            Some(_) if ext == "mo" => Some("Motoko".to_string()),
            other => other,
        }
    }
}

/// Extract the extension key named by a shebang line.
///
/// `#!/usr/bin/env python3` gives `py`, `#!/bin/bash` gives `bash`.
pub fn shebang_key(line: &str) -> Option<String> {
    let line = line.trim_start();
    if !line.starts_with("#!") {
        return None;
    }

    let interpreter = SHEBANG_ENV
        .captures(line)
        .and_then(|caps| caps.get(2))
        .or_else(|| SHEBANG_INTERPRETER.captures(line).and_then(|caps| caps.get(1)))?
        .as_str();

    Some(
        shebang_alias(interpreter)
            .unwrap_or(interpreter)
            .to_string(),
    )
}

fn read_first_line(path: &Path) -> Option<String> {
    let file = File::open(path).ok()?;
    let mut buf = Vec::new();
    BufReader::new(file)
        .take(SHEBANG_READ_LIMIT)
        .read_until(b'\n', &mut buf)
        .ok()?;
    Some(String::from_utf8_lossy(&buf).into_owned())
}
