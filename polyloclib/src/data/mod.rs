//! Data collection: scan files and collect statistics.
//!
//! This module handles the second stage of the pipeline. It provides:
//!
//! - **Scanning**: the per-file line classifier (`LineClassifier`, `Scanner`)
//! - **Statistics**: core data structures (`Locs`, `FileRecord`, ...)
//! - **Deduplication**: content digests shared across worker threads
//! - **Analysis**: the high-level API (`analyze`, `count_file`)
//!
//! ## Example
//!
//! ```rust,ignore
//! use polyloclib::data::{analyze, AnalyzeOptions};
//!
//! let result = analyze(&["."], AnalyzeOptions::new())?;
//! println!("Total code lines: {}", result.total.locs.codes);
//! ```

pub mod analyzer;
pub mod dedup;
pub mod scanner;
pub mod stats;

pub use analyzer::{analyze, count_file, AnalyzeOptions, Analyzer};
pub use dedup::{digest_file, Deduplicator, Digest};
pub use scanner::{
    scan_str, LineClassifier, LineKind, LineObserver, Scanner, DEFAULT_MAX_LINE_LENGTH,
};
pub use stats::{AnalysisResult, FileRecord, LanguageBucket, Locs, RunTotal};
