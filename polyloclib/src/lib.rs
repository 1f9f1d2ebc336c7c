//! # polyloclib
//!
//! A multi-language lines of code counter library that splits every file
//! into code, comment and blank lines.
//!
//! ## Overview
//!
//! Each file is assigned a language from a built-in catalog of close to two
//! hundred comment syntaxes, then scanned line by line:
//!
//! - **Code**: any line with text outside a comment
//! - **Comments**: lines that are entirely comment, including every line of
//!   a multi-line block comment
//! - **Blank**: whitespace-only lines, inside comments or not
//!
//! ## Features
//!
//! - **Comment syntax model**: line-comment prefixes, regex line comments and
//!   any number of (possibly overlapping) block comment delimiter pairs
//! - **Language detection**: build-tool filenames, shebangs, content sniffing
//!   for ambiguous extensions, file extensions
//! - **Parallel pipeline**: files are classified and scanned on `rayon` workers
//! - **Deduplication**: identical content is counted once
//! - **Filtering**: glob patterns, file/directory regexes, extension and
//!   language include/exclude sets
//! - **Pure Rust data types**: returns structured data, no I/O side effects
//!
//! ## Example
//!
//! ```rust
//! use polyloclib::{analyze, count_file, AnalyzeOptions, FilterConfig};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! let dir = tempdir().unwrap();
//! let file_path = dir.path().join("main.go");
//! fs::write(&file_path, "package main\n\n// Entry point.\nfunc main() {}\n").unwrap();
//! fs::write(dir.path().join("build.sh"), "#!/bin/sh\n# build\nmake\n").unwrap();
//!
//! // Count a single file
//! let record = count_file(&file_path).unwrap();
//! assert_eq!(record.language, "Go");
//! assert_eq!(record.locs.codes, 2);
//!
//! // Count a whole tree
//! let result = analyze(&[dir.path()], AnalyzeOptions::new()).unwrap();
//! assert_eq!(result.total.files, 2);
//!
//! // Count with filtering
//! let filter = FilterConfig::new().exclude("**/*.sh").unwrap();
//! let result = analyze(&[dir.path()], AnalyzeOptions::new().filter(filter)).unwrap();
//! assert_eq!(result.total.files, 1);
//! ```

pub mod data;
pub mod error;
pub mod language;
pub mod source;

pub use data::{
    analyze, count_file, scan_str, AnalysisResult, AnalyzeOptions, Analyzer, FileRecord,
    LanguageBucket, LineClassifier, LineKind, LineObserver, Locs, RunTotal, Scanner,
};
pub use error::PolylocError;
pub use language::{DelimiterPair, LanguageCatalog, LanguageDefinition};
pub use source::{FileClassifier, FilterConfig, HeuristicSniffer, LanguageSniffer, NoSniffer};

/// Result type for polyloclib operations
pub type Result<T> = std::result::Result<T, PolylocError>;
