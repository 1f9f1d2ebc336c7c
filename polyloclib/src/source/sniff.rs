//! Content sniffing for extensions shared by several languages.
//!
//! `.m` may be Objective-C, MATLAB or Mercury, `.v` Verilog or Coq, `.fs`
//! F# or GLSL, `.r` R or Rebol, `.ts` TypeScript or a Qt translation file,
//! and `.mo` Motoko source or a compiled gettext catalog. A
//! [`LanguageSniffer`] looks at the content and answers an extension key.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

/// Decides the extension key of a file from its content.
pub trait LanguageSniffer: Send + Sync {
    /// Return an extension key (`"Matlab"`, `"Verilog"`, ...) or `None` when
    /// the content gives no answer.
    fn detect(&self, path: &Path, content: &[u8]) -> Option<String>;
}

/// A sniffer that never answers.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoSniffer;

impl LanguageSniffer for NoSniffer {
    fn detect(&self, _path: &Path, _content: &[u8]) -> Option<String> {
        None
    }
}

/// Regex heuristics for the ambiguous extensions.
#[derive(Debug, Default, Clone, Copy)]
pub struct HeuristicSniffer;

struct Heuristic {
    extension: &'static str,
    rules: Vec<(Regex, &'static str)>,
    fallback: Option<&'static str>,
}

impl Heuristic {
    fn new(
        extension: &'static str,
        rules: &[(&str, &'static str)],
        fallback: Option<&'static str>,
    ) -> Self {
        Self {
            extension,
            rules: rules
                .iter()
                .map(|(pattern, key)| {
                    let re = Regex::new(pattern).expect("sniffer heuristic pattern is valid");
                    (re, *key)
                })
                .collect(),
            fallback,
        }
    }

    fn detect(&self, content: &str) -> Option<&'static str> {
        self.rules
            .iter()
            .find(|(re, _)| re.is_match(content))
            .map(|(_, key)| *key)
            .or(self.fallback)
    }
}

static HEURISTICS: LazyLock<Vec<Heuristic>> = LazyLock::new(|| {
    vec![
        Heuristic::new(
            "ts",
            &[(r"(?m)^\s*(?:<!DOCTYPE TS>|<TS\b)", "XML")],
            Some("TypeScript"),
        ),
        Heuristic::new(
            "m",
            &[
                (
                    r"(?m)^\s*:-\s*(?:module|interface|implementation|import_module|pred|func)\b",
                    "Mercury",
                ),
                (
                    r"(?m)^\s*(?:@interface|@implementation|@protocol|@end\b|#import\b|#include\b)",
                    "Objective-C",
                ),
                (r"(?m)^\s*(?:function\b|classdef\b|%|end\s*$)", "Matlab"),
            ],
            None,
        ),
        Heuristic::new(
            "v",
            &[
                (
                    r"(?m)^\s*(?:Require|Theorem|Lemma|Proof|Qed|Inductive|Definition|Fixpoint)\b",
                    "Coq",
                ),
                (
                    r"(?m)^\s*(?:module\s+\w+|endmodule\b|always\s*@|assign\s)",
                    "Verilog",
                ),
            ],
            None,
        ),
        Heuristic::new(
            "fs",
            &[
                (
                    r"(?m)^\s*(?:#version\s|precision\s+\w+\s+float|uniform\s|varying\s|void\s+main\s*\()",
                    "GLSL",
                ),
                (r"(?m)^\s*(?:let|open|module|namespace|type|member)\s", "F#"),
            ],
            None,
        ),
        Heuristic::new("r", &[(r"(?i)\brebol\s*\[", "Rebol")], Some("R")),
        Heuristic::new("mo", &[], Some("Motoko")),
    ]
});

impl LanguageSniffer for HeuristicSniffer {
    fn detect(&self, path: &Path, content: &[u8]) -> Option<String> {
        let ext = path.extension()?.to_str()?;
        let heuristic = HEURISTICS.iter().find(|h| h.extension == ext)?;

        // Compiled gettext catalogs share `.mo` with Motoko.
        if content.contains(&0) {
            return None;
        }

        heuristic
            .detect(&String::from_utf8_lossy(content))
            .map(str::to_string)
    }
}
