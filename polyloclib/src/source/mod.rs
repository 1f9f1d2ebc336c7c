//! Source discovery: find files to analyze and decide what they are.
//!
//! This module handles the first stage of the pipeline. It provides:
//!
//! - **Walking**: recursive discovery with VCS directories pruned
//! - **File filtering**: glob patterns and file/directory regexes
//! - **Classification**: path to extension key (filenames, shebangs, extensions)
//! - **Sniffing**: content heuristics for ambiguous extensions
//!
//! ## Example
//!
//! ```rust,ignore
//! use polyloclib::source::{discover_files, FilterConfig};
//!
//! let filter = FilterConfig::new()
//!     .exclude("**/vendor/**")?
//!     .not_match_file(r"_test\.go$")?;
//! let files = discover_files(&["."], &filter)?;
//! ```

pub mod classify;
pub mod filter;
pub mod sniff;
pub mod walker;

pub use classify::{shebang_key, FileClassifier};
pub use filter::FilterConfig;
pub use sniff::{HeuristicSniffer, LanguageSniffer, NoSniffer};
pub use walker::{discover_files, is_vcs_path, VCS_DIRS};
