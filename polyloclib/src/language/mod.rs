//! Language definitions and the built-in language catalog.
//!
//! A [`LanguageDefinition`] describes the comment syntax of one language:
//! literal line-comment prefixes, optional regex line-comment patterns and an
//! ordered list of block comment delimiter pairs. The [`LanguageCatalog`]
//! owns every definition plus the extension-key alias table used to resolve
//! the output of file classification to a language.

mod catalog;
pub(crate) mod extensions;

use std::collections::{BTreeMap, HashMap};
use std::sync::LazyLock;

use regex::Regex;
use tracing::warn;

use crate::error::PolylocError;
use crate::Result;

/// A block comment delimiter pair such as `("/*", "*/")`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelimiterPair {
    pub begin: String,
    pub end: String,
}

impl DelimiterPair {
    pub fn new(begin: &str, end: &str) -> Self {
        Self {
            begin: begin.to_string(),
            end: end.to_string(),
        }
    }

    /// The `("", "")` pair, which stands for "no block comments".
    pub fn is_sentinel(&self) -> bool {
        self.begin.is_empty() && self.end.is_empty()
    }
}

/// Comment syntax of a single language.
#[derive(Debug, Clone)]
pub struct LanguageDefinition {
    name: String,
    line_comments: Vec<String>,
    regex_line_comments: Vec<Regex>,
    block_comments: Vec<DelimiterPair>,
}

impl LanguageDefinition {
    /// Create a definition from line-comment prefixes and delimiter pairs.
    ///
    /// Sentinel pairs `("", "")` are accepted and dropped: a language whose
    /// only pair is the sentinel has no block comments at all.
    pub fn new(name: &str, line_comments: &[&str], block_comments: &[(&str, &str)]) -> Self {
        Self {
            name: name.to_string(),
            line_comments: line_comments.iter().map(|s| s.to_string()).collect(),
            regex_line_comments: Vec::new(),
            block_comments: block_comments
                .iter()
                .map(|(begin, end)| DelimiterPair::new(begin, end))
                .filter(|pair| !pair.is_sentinel())
                .collect(),
        }
    }

    /// Add regex line-comment patterns.
    ///
    /// When at least one pattern is present, the patterns replace the literal
    /// prefixes for the single-line comment test.
    pub fn with_regex_line_comments(mut self, patterns: &[&str]) -> Result<Self> {
        for pattern in patterns {
            let re = Regex::new(pattern).map_err(|e| PolylocError::invalid_regex(pattern, e))?;
            self.regex_line_comments.push(re);
        }
        Ok(self)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn line_comments(&self) -> &[String] {
        &self.line_comments
    }

    pub fn regex_line_comments(&self) -> &[Regex] {
        &self.regex_line_comments
    }

    /// Block comment pairs, sentinel pairs excluded.
    pub fn block_comments(&self) -> &[DelimiterPair] {
        &self.block_comments
    }

    /// Whether a trimmed line is a single-line comment.
    ///
    /// A prefix match is rejected when the line also starts with the opening
    /// delimiter of a block comment (`--[[` in Lua, `###` in CoffeeScript).
    pub(crate) fn is_line_comment(&self, line: &str) -> bool {
        let matched = if self.regex_line_comments.is_empty() {
            self.line_comments
                .iter()
                .any(|prefix| !prefix.is_empty() && line.starts_with(prefix.as_str()))
        } else {
            self.regex_line_comments.iter().any(|re| re.is_match(line))
        };

        matched
            && !self
                .block_comments
                .iter()
                .any(|pair| line.starts_with(pair.begin.as_str()))
    }

    /// Whether the line contains any block delimiter at all.
    pub(crate) fn mentions_delimiter(&self, line: &str) -> bool {
        self.block_comments
            .iter()
            .any(|pair| line.contains(pair.begin.as_str()) || line.contains(pair.end.as_str()))
    }
}

/// Registry of language definitions plus the extension alias table.
#[derive(Debug)]
pub struct LanguageCatalog {
    languages: BTreeMap<String, LanguageDefinition>,
    aliases: HashMap<String, String>,
}

static BUILTIN: LazyLock<LanguageCatalog> = LazyLock::new(|| {
    LanguageCatalog::new(
        catalog::builtin_definitions(),
        extensions::EXTENSION_ALIASES
            .iter()
            .map(|(key, name)| (key.to_string(), name.to_string())),
    )
});

impl LanguageCatalog {
    /// Build a catalog from definitions and `(extension key, language name)` aliases.
    ///
    /// A later definition with an already registered name is ignored.
    pub fn new(
        definitions: impl IntoIterator<Item = LanguageDefinition>,
        aliases: impl IntoIterator<Item = (String, String)>,
    ) -> Self {
        let mut languages = BTreeMap::new();
        for def in definitions {
            if languages.contains_key(def.name()) {
                warn!(language = def.name(), "duplicate language definition ignored");
                continue;
            }
            languages.insert(def.name().to_string(), def);
        }

        Self {
            languages,
            aliases: aliases.into_iter().collect(),
        }
    }

    /// The process-wide built-in catalog.
    pub fn builtin() -> &'static LanguageCatalog {
        &BUILTIN
    }

    /// Look up a definition by language name.
    pub fn lookup(&self, name: &str) -> Option<&LanguageDefinition> {
        self.languages.get(name)
    }

    /// Resolve an extension key: alias table first, then language names.
    pub fn resolve(&self, key: &str) -> Option<&LanguageDefinition> {
        match self.aliases.get(key) {
            Some(name) => self.lookup(name),
            None => self.lookup(key),
        }
    }

    /// All definitions, sorted by name.
    pub fn languages(&self) -> impl Iterator<Item = &LanguageDefinition> {
        self.languages.values()
    }

    /// Extension keys that map to the given language, sorted.
    pub fn extensions_for(&self, name: &str) -> Vec<&str> {
        let mut keys: Vec<&str> = self
            .aliases
            .iter()
            .filter(|(_, lang)| lang.as_str() == name)
            .map(|(key, _)| key.as_str())
            .collect();
        keys.sort_unstable();
        keys
    }

    /// Every `(key, language name)` alias pair.
    pub fn aliases(&self) -> impl Iterator<Item = (&str, &str)> {
        self.aliases.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.languages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }
}
