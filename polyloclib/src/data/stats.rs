//! Core data structures for LOC statistics.
//!
//! Every counted line is exactly one of three kinds:
//!
//! - **codes**: lines holding anything outside a comment
//! - **comments**: lines that are entirely comment
//! - **blanks**: whitespace-only lines, whatever the comment state
//!
//! The same [`Locs`] triple is used per file, per language and for the run
//! total, so aggregation is plain addition.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::iter::Sum;
use std::ops::{Add, AddAssign};
use std::path::PathBuf;

/// Blank, comment and code line counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Locs {
    /// Lines containing code
    pub codes: u64,
    /// Comment-only lines
    pub comments: u64,
    /// Whitespace-only lines
    pub blanks: u64,
}

impl Locs {
    /// Create a new Locs with all zeros.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of lines.
    pub fn total(&self) -> u64 {
        self.codes + self.comments + self.blanks
    }
}

impl Add for Locs {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            codes: self.codes + other.codes,
            comments: self.comments + other.comments,
            blanks: self.blanks + other.blanks,
        }
    }
}

impl AddAssign for Locs {
    fn add_assign(&mut self, other: Self) {
        self.codes += other.codes;
        self.comments += other.comments;
        self.blanks += other.blanks;
    }
}

impl Sum for Locs {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::new(), Add::add)
    }
}

impl<'a> Sum<&'a Locs> for Locs {
    fn sum<I: Iterator<Item = &'a Locs>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Counts for a single scanned file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    /// Path to the file, as discovered.
    pub path: PathBuf,
    /// Resolved language name.
    pub language: String,
    #[serde(flatten)]
    pub locs: Locs,
}

impl FileRecord {
    pub fn new(path: PathBuf, language: impl Into<String>, locs: Locs) -> Self {
        Self {
            path,
            language: language.into(),
            locs,
        }
    }
}

/// Per-run aggregate of one language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageBucket {
    /// Language name.
    pub name: String,
    /// Files assigned to this language, sorted.
    pub files: Vec<PathBuf>,
    #[serde(flatten)]
    pub locs: Locs,
}

impl LanguageBucket {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            files: Vec::new(),
            locs: Locs::new(),
        }
    }

    /// Fold a scanned file into this bucket.
    pub fn add_file(&mut self, path: PathBuf, locs: Locs) {
        self.locs += locs;
        self.files.push(path);
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }
}

/// Grand total over every non-empty language bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunTotal {
    /// Number of files counted.
    pub files: u64,
    #[serde(flatten)]
    pub locs: Locs,
}

impl RunTotal {
    /// Sum the buckets that hold at least one file.
    pub fn from_buckets<'a>(buckets: impl IntoIterator<Item = &'a LanguageBucket>) -> Self {
        buckets
            .into_iter()
            .filter(|bucket| !bucket.files.is_empty())
            .fold(Self::default(), |mut total, bucket| {
                total.files += bucket.files.len() as u64;
                total.locs += bucket.locs;
                total
            })
    }
}

/// Result of one analysis run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Grand total.
    pub total: RunTotal,
    /// Per-file records keyed by path.
    pub files: BTreeMap<PathBuf, FileRecord>,
    /// Per-language buckets keyed by language name.
    pub languages: BTreeMap<String, LanguageBucket>,
    /// Length in characters of the longest counted path.
    pub max_path_length: usize,
}

impl AnalysisResult {
    /// Language buckets that hold at least one file.
    pub fn non_empty_languages(&self) -> impl Iterator<Item = &LanguageBucket> {
        self.languages.values().filter(|b| !b.files.is_empty())
    }
}
