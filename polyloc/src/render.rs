//! Table and JSON rendering for CLI output

use std::cmp::Ordering;

use console::Style;
use polyloclib::{AnalysisResult, FileRecord, LanguageCatalog, Locs, RunTotal};
use serde::Serialize;

const SEPARATOR: char = '-';
/// Width of the name column in per-language mode
const LANGUAGE_WIDTH: usize = 27;
const FILES_WIDTH: usize = 6;
const CELL_WIDTH: usize = 14;

/// Column the rows are ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortBy {
    /// Ascending by name
    Name,
    /// Descending by file count, ties by codes
    Files,
    /// Descending by blank lines, ties by codes
    Blanks,
    /// Descending by comment lines, ties by codes
    Comments,
    /// Descending by code lines
    Codes,
}

impl SortBy {
    pub const NAMES: [&'static str; 5] = ["name", "files", "blanks", "comments", "codes"];

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "name" => Some(Self::Name),
            "files" => Some(Self::Files),
            "blanks" => Some(Self::Blanks),
            "comments" => Some(Self::Comments),
            "codes" => Some(Self::Codes),
            _ => None,
        }
    }

    fn compare(self, a: &SortKey<'_>, b: &SortKey<'_>) -> Ordering {
        let by_codes = b.locs.codes.cmp(&a.locs.codes);
        match self {
            Self::Name => a.name.cmp(b.name),
            Self::Files => b.files.cmp(&a.files).then(by_codes),
            Self::Blanks => b.locs.blanks.cmp(&a.locs.blanks).then(by_codes),
            Self::Comments => b.locs.comments.cmp(&a.locs.comments).then(by_codes),
            Self::Codes => by_codes,
        }
    }
}

struct SortKey<'a> {
    name: &'a str,
    files: u64,
    locs: Locs,
}

/// One row of the per-language report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageRow {
    pub name: String,
    pub files: u64,
    #[serde(flatten)]
    pub locs: Locs,
}

impl LanguageRow {
    fn key(&self) -> SortKey<'_> {
        SortKey {
            name: &self.name,
            files: self.files,
            locs: self.locs,
        }
    }
}

/// Non-empty language rows in the requested order.
pub fn language_rows(result: &AnalysisResult, sort: SortBy) -> Vec<LanguageRow> {
    let mut rows: Vec<LanguageRow> = result
        .non_empty_languages()
        .map(|bucket| LanguageRow {
            name: bucket.name.clone(),
            files: bucket.file_count() as u64,
            locs: bucket.locs,
        })
        .collect();
    rows.sort_by(|a, b| sort.compare(&a.key(), &b.key()));
    rows
}

/// File records in the requested order.
pub fn file_rows(result: &AnalysisResult, sort: SortBy) -> Vec<&FileRecord> {
    let mut rows: Vec<(String, &FileRecord)> = result
        .files
        .values()
        .map(|record| (record.path.to_string_lossy().into_owned(), record))
        .collect();
    rows.sort_by(|(a_name, a), (b_name, b)| {
        let a = SortKey {
            name: a_name,
            files: 1,
            locs: a.locs,
        };
        let b = SortKey {
            name: b_name,
            files: 1,
            locs: b.locs,
        };
        sort.compare(&a, &b)
    });
    rows.into_iter().map(|(_, record)| record).collect()
}

fn separator(width: usize) -> String {
    SEPARATOR.to_string().repeat(width)
}

fn header_line(name_header: &str, name_width: usize) -> String {
    format!(
        "{:<name_width$} {:>FILES_WIDTH$} {:>CELL_WIDTH$} {:>CELL_WIDTH$} {:>CELL_WIDTH$}",
        name_header, "files", "blank", "comment", "code"
    )
}

fn count_line(name: &str, name_width: usize, files: Option<u64>, locs: &Locs) -> String {
    let files = files.map(|f| f.to_string()).unwrap_or_default();
    format!(
        "{:<name_width$} {:>FILES_WIDTH$} {:>CELL_WIDTH$} {:>CELL_WIDTH$} {:>CELL_WIDTH$}",
        name, files, locs.blanks, locs.comments, locs.codes
    )
}

fn table(name_header: &str, name_width: usize, rows: Vec<String>, total: &RunTotal) -> String {
    let header = header_line(name_header, name_width);
    let rule = separator(header.len());
    let bold = Style::new().bold();

    let mut out = String::new();
    out.push_str(&rule);
    out.push('\n');
    out.push_str(&bold.apply_to(&header).to_string());
    out.push('\n');
    out.push_str(&rule);
    out.push('\n');
    for row in rows {
        out.push_str(&row);
        out.push('\n');
    }
    out.push_str(&rule);
    out.push('\n');
    out.push_str(&count_line("Total", name_width, Some(total.files), &total.locs));
    out.push('\n');
    out.push_str(&rule);
    out.push('\n');
    out
}

/// Render the per-language table.
pub fn render_languages_table(rows: &[LanguageRow], total: &RunTotal) -> String {
    let lines = rows
        .iter()
        .map(|row| count_line(&row.name, LANGUAGE_WIDTH, Some(row.files), &row.locs))
        .collect();
    table("Language", LANGUAGE_WIDTH, lines, total)
}

/// Render the per-file table; the name column fits the longest path.
pub fn render_files_table(rows: &[&FileRecord], total: &RunTotal, max_path_length: usize) -> String {
    let width = max_path_length.max("File".len()).max("Total".len());
    let lines = rows
        .iter()
        .map(|record| count_line(&record.path.to_string_lossy(), width, None, &record.locs))
        .collect();
    table("File", width, lines, total)
}

#[derive(Serialize)]
struct LanguagesReport<'a> {
    languages: &'a [LanguageRow],
    total: &'a RunTotal,
}

#[derive(Serialize)]
struct FilesReport<'a> {
    files: &'a [&'a FileRecord],
    total: &'a RunTotal,
}

pub fn render_languages_json(rows: &[LanguageRow], total: &RunTotal) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&LanguagesReport {
        languages: rows,
        total,
    })
}

pub fn render_files_json(rows: &[&FileRecord], total: &RunTotal) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&FilesReport { files: rows, total })
}

/// One line per language: name and the extension keys that map to it.
pub fn render_language_list(catalog: &LanguageCatalog) -> String {
    let width = catalog
        .languages()
        .map(|lang| lang.name().len())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for lang in catalog.languages() {
        let exts = catalog.extensions_for(lang.name());
        let line = format!("{:<width$}  ({})", lang.name(), exts.join(", "));
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use polyloclib::LanguageBucket;
    use std::path::PathBuf;

    fn locs(codes: u64, comments: u64, blanks: u64) -> Locs {
        Locs {
            codes,
            comments,
            blanks,
        }
    }

    fn bucket(name: &str, files: &[&str], counts: Locs) -> LanguageBucket {
        let mut bucket = LanguageBucket::new(name);
        bucket.files = files.iter().map(PathBuf::from).collect();
        bucket.locs = counts;
        bucket
    }

    fn sample() -> AnalysisResult {
        let mut result = AnalysisResult::default();
        for b in [
            bucket("Go", &["a.go", "b.go"], locs(10, 2, 1)),
            bucket("Python", &["c.py"], locs(10, 5, 3)),
            bucket("Rust", &["d.rs"], locs(40, 2, 0)),
            bucket("Empty", &[], locs(0, 0, 0)),
        ] {
            result.languages.insert(b.name.clone(), b);
        }
        for (path, lang, l) in [
            ("a.go", "Go", locs(6, 1, 1)),
            ("b.go", "Go", locs(4, 1, 0)),
            ("c.py", "Python", locs(10, 5, 3)),
            ("d.rs", "Rust", locs(40, 2, 0)),
        ] {
            result
                .files
                .insert(PathBuf::from(path), FileRecord::new(PathBuf::from(path), lang, l));
        }
        result.total = RunTotal::from_buckets(result.languages.values());
        result.max_path_length = 4;
        result
    }

    fn names(rows: &[LanguageRow]) -> Vec<&str> {
        rows.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn test_sort_from_name() {
        for name in SortBy::NAMES {
            assert!(SortBy::from_name(name).is_some());
        }
        assert_eq!(SortBy::from_name("lines"), None);
    }

    #[test]
    fn test_language_sorting() {
        let result = sample();

        assert_eq!(names(&language_rows(&result, SortBy::Name)), ["Go", "Python", "Rust"]);
        assert_eq!(names(&language_rows(&result, SortBy::Codes)), ["Rust", "Go", "Python"]);
        assert_eq!(names(&language_rows(&result, SortBy::Files)), ["Go", "Rust", "Python"]);
        assert_eq!(names(&language_rows(&result, SortBy::Comments)), ["Python", "Rust", "Go"]);
        assert_eq!(names(&language_rows(&result, SortBy::Blanks)), ["Python", "Go", "Rust"]);
    }

    #[test]
    fn test_empty_buckets_are_not_rows() {
        let rows = language_rows(&sample(), SortBy::Name);
        assert!(!rows.iter().any(|r| r.name == "Empty"));
    }

    #[test]
    fn test_file_sorting() {
        let result = sample();
        let rows = file_rows(&result, SortBy::Comments);
        let paths: Vec<_> = rows.iter().map(|r| r.path.to_string_lossy()).collect();

        assert_eq!(paths, ["c.py", "d.rs", "a.go", "b.go"]);
    }

    #[test]
    fn test_languages_table() {
        let result = sample();
        let out = render_languages_table(&language_rows(&result, SortBy::Codes), &result.total);
        let lines: Vec<&str> = out.lines().collect();

        assert!(lines[1].contains("Language"));
        assert!(lines[1].contains("comment"));
        assert!(lines[3].starts_with("Rust"));
        assert!(lines[3].ends_with("40"));
        let total = lines[lines.len() - 2];
        assert!(total.starts_with("Total"));
        assert!(total.ends_with("60"));
        assert_eq!(lines[0], lines[lines.len() - 1]);
    }

    #[test]
    fn test_files_table_fits_paths() {
        let mut result = sample();
        result.max_path_length = 30;
        let rows = file_rows(&result, SortBy::Name);
        let out = render_files_table(&rows, &result.total, result.max_path_length);

        assert!(out.lines().any(|l| l.starts_with("a.go ")));
        assert!(out.lines().all(|l| l.len() >= 30));
    }

    #[test]
    fn test_languages_json() {
        let result = sample();
        let rows = language_rows(&result, SortBy::Name);
        let json = render_languages_json(&rows, &result.total).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed["languages"][0]["name"], "Go");
        assert_eq!(parsed["languages"][0]["files"], 2);
        assert_eq!(parsed["languages"][0]["codes"], 10);
        assert_eq!(parsed["total"]["files"], 4);
        assert_eq!(parsed["total"]["codes"], 60);
    }

    #[test]
    fn test_files_json() {
        let result = sample();
        let rows = file_rows(&result, SortBy::Codes);
        let json = render_files_json(&rows, &result.total).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed["files"][0]["path"], "d.rs");
        assert_eq!(parsed["files"][0]["language"], "Rust");
        assert_eq!(parsed["total"]["blanks"], 4);
    }

    #[test]
    fn test_language_list() {
        let out = render_language_list(LanguageCatalog::builtin());

        assert!(out.lines().any(|l| l.starts_with("Go ") && l.ends_with("(go, go2)")));
        assert_eq!(out.lines().count(), LanguageCatalog::builtin().len());
    }
}
