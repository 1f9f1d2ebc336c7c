//! Path filtering with glob patterns and regular expressions.
//!
//! A path survives the filter when:
//!
//! 1. its file name matches `match_file` (if set) and not `not_match_file`
//! 2. its parent directory matches `match_dir` (if set) and not `not_match_dir`
//! 3. it matches no exclude glob, and at least one include glob if any are set

use std::path::Path;

use glob::Pattern;
use regex::Regex;

use crate::error::PolylocError;
use crate::Result;

/// Configuration for file filtering.
#[derive(Debug, Clone, Default)]
pub struct FilterConfig {
    /// Glob patterns to include (if empty, include everything)
    pub include: Vec<Pattern>,
    /// Glob patterns to exclude
    pub exclude: Vec<Pattern>,
    /// File names must match this regex
    pub match_file: Option<Regex>,
    /// File names must not match this regex
    pub not_match_file: Option<Regex>,
    /// Parent directories must match this regex
    pub match_dir: Option<Regex>,
    /// Parent directories must not match this regex
    pub not_match_dir: Option<Regex>,
}

fn compile_glob(pattern: &str) -> Result<Pattern> {
    Pattern::new(pattern).map_err(|e| PolylocError::InvalidGlob {
        pattern: pattern.to_string(),
        message: e.to_string(),
    })
}

fn compile_regex(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| PolylocError::invalid_regex(pattern, e))
}

impl FilterConfig {
    /// Create a new empty filter config (every path passes).
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an include pattern.
    pub fn include(mut self, pattern: &str) -> Result<Self> {
        self.include.push(compile_glob(pattern)?);
        Ok(self)
    }

    /// Add an exclude pattern.
    pub fn exclude(mut self, pattern: &str) -> Result<Self> {
        self.exclude.push(compile_glob(pattern)?);
        Ok(self)
    }

    /// Add multiple include patterns.
    pub fn include_many(mut self, patterns: &[&str]) -> Result<Self> {
        for pattern in patterns {
            self = self.include(pattern)?;
        }
        Ok(self)
    }

    /// Add multiple exclude patterns.
    pub fn exclude_many(mut self, patterns: &[&str]) -> Result<Self> {
        for pattern in patterns {
            self = self.exclude(pattern)?;
        }
        Ok(self)
    }

    /// Only count files whose name matches `pattern`.
    pub fn match_file(mut self, pattern: &str) -> Result<Self> {
        self.match_file = Some(compile_regex(pattern)?);
        Ok(self)
    }

    /// Skip files whose name matches `pattern`.
    pub fn not_match_file(mut self, pattern: &str) -> Result<Self> {
        self.not_match_file = Some(compile_regex(pattern)?);
        Ok(self)
    }

    /// Only count files whose parent directory matches `pattern`.
    pub fn match_dir(mut self, pattern: &str) -> Result<Self> {
        self.match_dir = Some(compile_regex(pattern)?);
        Ok(self)
    }

    /// Skip files whose parent directory matches `pattern`.
    pub fn not_match_dir(mut self, pattern: &str) -> Result<Self> {
        self.not_match_dir = Some(compile_regex(pattern)?);
        Ok(self)
    }

    /// Check if a file path passes every filter.
    pub fn matches(&self, path: &Path) -> bool {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default();
        if self.match_file.as_ref().is_some_and(|re| !re.is_match(&file_name)) {
            return false;
        }
        if self.not_match_file.as_ref().is_some_and(|re| re.is_match(&file_name)) {
            return false;
        }

        let dir = path
            .parent()
            .map(|p| p.to_string_lossy())
            .unwrap_or_default();
        if self.match_dir.as_ref().is_some_and(|re| !re.is_match(&dir)) {
            return false;
        }
        if self.not_match_dir.as_ref().is_some_and(|re| re.is_match(&dir)) {
            return false;
        }

        let path_str = path.to_string_lossy();

        // Check excludes first
        if self.exclude.iter().any(|p| p.matches(&path_str)) {
            return false;
        }

        // If no include patterns, include all
        self.include.is_empty() || self.include.iter().any(|p| p.matches(&path_str))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_filter_matches_everything() {
        let filter = FilterConfig::new();

        assert!(filter.matches(Path::new("src/main.rs")));
        assert!(filter.matches(Path::new("README.md")));
        assert!(filter.matches(Path::new("Makefile")));
    }

    #[test]
    fn test_filter_with_include_pattern() {
        let filter = FilterConfig::new().include("**/utils/*").unwrap();

        assert!(filter.matches(Path::new("src/utils/mod.rs")));
        assert!(filter.matches(Path::new("src/utils/helper.go")));
        assert!(!filter.matches(Path::new("src/main.rs")));
    }

    #[test]
    fn test_filter_with_exclude_pattern() {
        let filter = FilterConfig::new().exclude("**/vendor/**").unwrap();

        assert!(filter.matches(Path::new("src/main.go")));
        assert!(!filter.matches(Path::new("vendor/lib/x.go")));
        assert!(!filter.matches(Path::new("a/vendor/b/y.go")));
    }

    #[test]
    fn test_filter_with_multiple_patterns() {
        let filter = FilterConfig::new()
            .include_many(&["**/src/**", "**/tests/**"])
            .unwrap()
            .exclude_many(&["**/utils/**"])
            .unwrap();

        assert!(filter.matches(Path::new("project/src/main.rs")));
        assert!(filter.matches(Path::new("project/tests/test.py")));
        assert!(!filter.matches(Path::new("project/src/utils/helper.rs")));
        assert!(!filter.matches(Path::new("project/examples/demo.rs")));
    }

    #[test]
    fn test_file_name_regexes() {
        let filter = FilterConfig::new()
            .match_file(r"\.go$")
            .unwrap()
            .not_match_file(r"_test\.go$")
            .unwrap();

        assert!(filter.matches(Path::new("pkg/server.go")));
        assert!(!filter.matches(Path::new("pkg/server_test.go")));
        assert!(!filter.matches(Path::new("pkg/server.rs")));
    }

    #[test]
    fn test_file_regex_sees_base_name_only() {
        let filter = FilterConfig::new().match_file(r"^main").unwrap();

        assert!(filter.matches(Path::new("cmd/app/main.go")));
        assert!(!filter.matches(Path::new("main/app.go")));
    }

    #[test]
    fn test_dir_regexes() {
        let filter = FilterConfig::new()
            .match_dir("src")
            .unwrap()
            .not_match_dir("generated")
            .unwrap();

        assert!(filter.matches(Path::new("project/src/lib.rs")));
        assert!(!filter.matches(Path::new("project/src/generated/api.rs")));
        assert!(!filter.matches(Path::new("project/docs/intro.md")));
    }

    #[test]
    fn test_invalid_glob_pattern() {
        let result = FilterConfig::new().include("[invalid");

        assert!(result.is_err());
        if let Err(PolylocError::InvalidGlob { pattern, .. }) = result {
            assert_eq!(pattern, "[invalid");
        } else {
            panic!("Expected InvalidGlob error");
        }
    }

    #[test]
    fn test_invalid_regex_pattern() {
        let result = FilterConfig::new().not_match_dir("(unclosed");

        match result {
            Err(PolylocError::InvalidRegex { pattern, .. }) => assert_eq!(pattern, "(unclosed"),
            other => panic!("Expected InvalidRegex error, got {other:?}"),
        }
    }
}
