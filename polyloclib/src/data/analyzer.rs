//! High-level LOC counting API.
//!
//! [`Analyzer::analyze`] runs the whole pipeline over a set of roots:
//!
//! 1. walk the roots and apply path filters
//! 2. classify every file and digest its content, in parallel
//! 3. drop filtered extensions/languages and duplicate content
//! 4. group files by language and scan every bucket in parallel
//! 5. sum the buckets into the run total
//!
//! Buckets are materialized on one thread between classification and
//! scanning, so each bucket is only ever touched by the task scanning it.

use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use rayon::prelude::*;
use tracing::{debug, warn};

use crate::error::PolylocError;
use crate::language::{LanguageCatalog, LanguageDefinition};
use crate::source::classify::FileClassifier;
use crate::source::filter::FilterConfig;
use crate::source::sniff::{HeuristicSniffer, LanguageSniffer};
use crate::source::walker::discover_files;
use crate::Result;

use super::dedup::{digest_file, Deduplicator, Digest};
use super::scanner::{LineObserver, Scanner, DEFAULT_MAX_LINE_LENGTH};
use super::stats::{AnalysisResult, FileRecord, LanguageBucket, Locs, RunTotal};

/// Options for an analysis run.
#[derive(Clone)]
pub struct AnalyzeOptions {
    /// Stop counting a file at the first line longer than this (bytes)
    pub max_line_length: usize,
    /// Only count these extension keys (empty = all)
    pub include_exts: HashSet<String>,
    /// Never count these extension keys
    pub exclude_exts: HashSet<String>,
    /// Only count these languages (empty = all)
    pub include_langs: HashSet<String>,
    /// Never count these languages
    pub exclude_langs: HashSet<String>,
    /// Path filter configuration
    pub filter: FilterConfig,
    /// Count identical content only once
    pub skip_duplicates: bool,
    /// Log every classified line
    pub debug: bool,
    /// Receives every classified line
    pub observer: Option<Arc<dyn LineObserver>>,
    /// Content sniffer for ambiguous extensions
    pub sniffer: Arc<dyn LanguageSniffer>,
    /// Size of a dedicated worker pool (`None` = global rayon pool)
    pub threads: Option<usize>,
    /// Subscriber installed on every worker task
    pub dispatch: Option<tracing::Dispatch>,
}

impl Default for AnalyzeOptions {
    fn default() -> Self {
        Self {
            max_line_length: DEFAULT_MAX_LINE_LENGTH,
            include_exts: HashSet::new(),
            exclude_exts: HashSet::new(),
            include_langs: HashSet::new(),
            exclude_langs: HashSet::new(),
            filter: FilterConfig::new(),
            skip_duplicates: true,
            debug: false,
            observer: None,
            sniffer: Arc::new(HeuristicSniffer),
            threads: None,
            dispatch: None,
        }
    }
}

impl fmt::Debug for AnalyzeOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnalyzeOptions")
            .field("max_line_length", &self.max_line_length)
            .field("include_exts", &self.include_exts)
            .field("exclude_exts", &self.exclude_exts)
            .field("include_langs", &self.include_langs)
            .field("exclude_langs", &self.exclude_langs)
            .field("filter", &self.filter)
            .field("skip_duplicates", &self.skip_duplicates)
            .field("debug", &self.debug)
            .field("observer", &self.observer.is_some())
            .field("threads", &self.threads)
            .field("dispatch", &self.dispatch)
            .finish_non_exhaustive()
    }
}

fn to_set<S: Into<String>>(items: impl IntoIterator<Item = S>) -> HashSet<String> {
    items.into_iter().map(Into::into).collect()
}

impl AnalyzeOptions {
    /// Create new default options.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn max_line_length(mut self, max: usize) -> Self {
        self.max_line_length = max;
        self
    }

    /// Only count files with these extension keys.
    pub fn include_exts<S: Into<String>>(mut self, exts: impl IntoIterator<Item = S>) -> Self {
        self.include_exts = to_set(exts);
        self
    }

    /// Skip files with these extension keys.
    pub fn exclude_exts<S: Into<String>>(mut self, exts: impl IntoIterator<Item = S>) -> Self {
        self.exclude_exts = to_set(exts);
        self
    }

    /// Only count these languages.
    pub fn include_langs<S: Into<String>>(mut self, langs: impl IntoIterator<Item = S>) -> Self {
        self.include_langs = to_set(langs);
        self
    }

    /// Skip these languages.
    pub fn exclude_langs<S: Into<String>>(mut self, langs: impl IntoIterator<Item = S>) -> Self {
        self.exclude_langs = to_set(langs);
        self
    }

    /// Set file filter.
    pub fn filter(mut self, filter: FilterConfig) -> Self {
        self.filter = filter;
        self
    }

    pub fn skip_duplicates(mut self, skip: bool) -> Self {
        self.skip_duplicates = skip;
        self
    }

    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn observer(mut self, observer: Arc<dyn LineObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    pub fn sniffer(mut self, sniffer: Arc<dyn LanguageSniffer>) -> Self {
        self.sniffer = sniffer;
        self
    }

    /// Run on a dedicated pool of `threads` workers.
    pub fn threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads);
        self
    }

    /// Route the run's logging to `dispatch` instead of the ambient subscriber.
    pub fn dispatch(mut self, dispatch: Option<tracing::Dispatch>) -> Self {
        self.dispatch = dispatch;
        self
    }
}

/// A classified file waiting to be scanned.
struct Candidate<'c> {
    path: PathBuf,
    language: &'c LanguageDefinition,
    digest: Option<Digest>,
}

/// One language's share of the scanning work.
struct BucketWork<'c> {
    language: &'c LanguageDefinition,
    paths: Vec<PathBuf>,
    bucket: LanguageBucket,
    records: Vec<FileRecord>,
}

/// Runs the discovery, classification and counting pipeline.
pub struct Analyzer<'c> {
    options: AnalyzeOptions,
    classifier: FileClassifier,
    catalog: &'c LanguageCatalog,
}

impl Analyzer<'static> {
    /// Analyzer over the built-in language catalog.
    pub fn new(options: AnalyzeOptions) -> Self {
        Self::with_catalog(options, LanguageCatalog::builtin())
    }
}

impl<'c> Analyzer<'c> {
    pub fn with_catalog(options: AnalyzeOptions, catalog: &'c LanguageCatalog) -> Self {
        let classifier = FileClassifier::new(Arc::clone(&options.sniffer));
        Self {
            options,
            classifier,
            catalog,
        }
    }

    pub fn options(&self) -> &AnalyzeOptions {
        &self.options
    }

    /// Count every file under `roots`.
    pub fn analyze<P: AsRef<Path> + Sync>(&self, roots: &[P]) -> Result<AnalysisResult> {
        self.with_dispatch(|| match self.options.threads {
            Some(threads) => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .build()
                    .map_err(|e| PolylocError::ThreadPool(e.to_string()))?;
                pool.install(|| self.run(roots))
            }
            None => self.run(roots),
        })
    }

    fn with_dispatch<T>(&self, f: impl FnOnce() -> T) -> T {
        match &self.options.dispatch {
            Some(dispatch) => tracing::dispatcher::with_default(dispatch, f),
            None => f(),
        }
    }

    fn run<P: AsRef<Path> + Sync>(&self, roots: &[P]) -> Result<AnalysisResult> {
        let paths = discover_files(roots, &self.options.filter)?;
        debug!(files = paths.len(), "discovered");

        let mut candidates: Vec<Candidate<'c>> = paths
            .into_par_iter()
            .filter_map(|path| self.with_dispatch(|| self.classify(path)))
            .collect();

        if self.options.skip_duplicates {
            let dedup = Deduplicator::new();
            candidates.retain(|c| match c.digest {
                Some(digest) if dedup.seen(digest) => {
                    debug!(path = %c.path.display(), "duplicate content skipped");
                    false
                }
                _ => true,
            });
        }

        let mut work: Vec<BucketWork<'c>> = group_by_language(candidates);

        work.par_iter_mut().for_each(|w| {
            self.with_dispatch(|| {
                let language = w.language;
                let records: Vec<FileRecord> = w
                    .paths
                    .par_iter()
                    .map(|path| {
                        self.with_dispatch(|| {
                            let locs = self.scan_file(language, path);
                            FileRecord::new(path.clone(), language.name(), locs)
                        })
                    })
                    .collect();
                for record in &records {
                    w.bucket.add_file(record.path.clone(), record.locs);
                }
                w.records = records;
            })
        });

        let mut result = AnalysisResult::default();
        for w in work {
            for record in w.records {
                result.files.insert(record.path.clone(), record);
            }
            result.languages.insert(w.bucket.name.clone(), w.bucket);
        }
        result.total = RunTotal::from_buckets(result.languages.values());
        result.max_path_length = result
            .files
            .keys()
            .map(|p| p.to_string_lossy().chars().count())
            .max()
            .unwrap_or(0);

        debug!(
            files = result.total.files,
            languages = result.languages.len(),
            "analysis finished"
        );
        Ok(result)
    }

    fn classify(&self, path: PathBuf) -> Option<Candidate<'c>> {
        let opts = &self.options;

        let Some(key) = self.classifier.classify(&path) else {
            debug!(path = %path.display(), "no extension key");
            return None;
        };
        if (!opts.include_exts.is_empty() && !opts.include_exts.contains(&key))
            || opts.exclude_exts.contains(&key)
        {
            debug!(path = %path.display(), key = %key, "extension filtered out");
            return None;
        }

        let Some(language) = self.catalog.resolve(&key) else {
            debug!(path = %path.display(), key = %key, "unknown language");
            return None;
        };
        let name = language.name();
        if (!opts.include_langs.is_empty() && !opts.include_langs.contains(name))
            || opts.exclude_langs.contains(name)
        {
            debug!(path = %path.display(), language = name, "language filtered out");
            return None;
        }

        let digest = if opts.skip_duplicates {
            digest_file(&path)
        } else {
            None
        };

        Some(Candidate {
            path,
            language,
            digest,
        })
    }

    fn scan_file(&self, language: &LanguageDefinition, path: &Path) -> Locs {
        let scanner = Scanner::new(language)
            .max_line_length(self.options.max_line_length)
            .observer(self.options.observer.as_deref())
            .debug(self.options.debug);

        match scanner.scan_path(path) {
            Ok(locs) => locs,
            Err(err) => {
                warn!("{err}");
                Locs::new()
            }
        }
    }
}

/// Group candidates by language, keeping the sorted path order.
fn group_by_language<'c>(candidates: Vec<Candidate<'c>>) -> Vec<BucketWork<'c>> {
    let mut groups: BTreeMap<&'c str, BucketWork<'c>> = BTreeMap::new();
    for candidate in candidates {
        let language = candidate.language;
        groups
            .entry(language.name())
            .or_insert_with(|| BucketWork {
                language,
                paths: Vec::new(),
                bucket: LanguageBucket::new(language.name()),
                records: Vec::new(),
            })
            .paths
            .push(candidate.path);
    }
    groups.into_values().collect()
}

/// Count every file under `roots` with the built-in catalog.
///
/// # Example
///
/// ```rust
/// use polyloclib::{analyze, AnalyzeOptions};
/// use std::fs;
/// use tempfile::tempdir;
///
/// let dir = tempdir().unwrap();
/// fs::write(dir.path().join("main.go"), "package main\n\n// entry\nfunc main() {}\n").unwrap();
/// fs::write(dir.path().join("tool.py"), "# helper\nprint('hi')\n").unwrap();
///
/// let result = analyze(&[dir.path()], AnalyzeOptions::new()).unwrap();
/// assert_eq!(result.total.files, 2);
/// assert_eq!(result.languages["Go"].locs.codes, 2);
/// assert_eq!(result.languages["Python"].locs.comments, 1);
/// ```
pub fn analyze<P: AsRef<Path> + Sync>(roots: &[P], options: AnalyzeOptions) -> Result<AnalysisResult> {
    Analyzer::new(options).analyze(roots)
}

/// Classify and count a single file with the built-in catalog.
pub fn count_file(path: impl AsRef<Path>) -> Result<FileRecord> {
    let path = path.as_ref();
    let unknown = || PolylocError::UnknownLanguage(path.to_path_buf());

    let key = FileClassifier::default().classify(path).ok_or_else(unknown)?;
    let language = LanguageCatalog::builtin()
        .resolve(&key)
        .ok_or_else(unknown)?;
    let locs = Scanner::new(language).scan_path(path)?;

    Ok(FileRecord::new(path.to_path_buf(), language.name(), locs))
}
