//! The built-in language table.

use super::LanguageDefinition;

const C_STYLE: &[(&str, &str)] = &[("/*", "*/")];
const ML_STYLE: &[(&str, &str)] = &[("(*", "*)")];
const HASKELL_STYLE: &[(&str, &str)] = &[("{-", "-}")];
const XML_STYLE: &[(&str, &str)] = &[("<!--", "-->")];
const PY_STYLE: &[(&str, &str)] = &[("\"\"\"", "\"\"\"")];
const LISP_STYLE: &[(&str, &str)] = &[("#|", "|#")];
const NONE: &[(&str, &str)] = &[("", "")];

/// Languages that use `//` line comments and `/* */` blocks.
const C_FAMILY: &[&str] = &[
    "ActionScript",
    "ANTLR",
    "Arduino Sketch",
    "Bicep",
    "C",
    "C Header",
    "C#",
    "C++",
    "C++ Header",
    "Chapel",
    "Circom",
    "ColdFusion CFScript",
    "CSS",
    "CUDA",
    "Dart",
    "Device Tree",
    "DTrace",
    "GLSL",
    "Go",
    "Groovy",
    "Haxe",
    "HLSL",
    "JAI",
    "Java",
    "JavaScript",
    "JSP",
    "JSX",
    "Koka",
    "Kotlin",
    "LD Script",
    "LESS",
    "Motoko",
    "Move",
    "Objective-C",
    "Objective-C++",
    "Odin",
    "Ohm",
    "Pony",
    "Protocol Buffers",
    "QML",
    "Sass",
    "Scala",
    "Solidity",
    "Swift",
    "TypeScript",
    "Umka",
    "Vala",
    "Verilog",
    "Yacc",
    "Yul",
    "Zephir",
];

/// Languages with `#` line comments and no block comments.
const HASH_ONLY: &[&str] = &[
    "Alda",
    "Awk",
    "BASH",
    "BitBake",
    "Bourne Shell",
    "C Shell",
    "Cap'n Proto",
    "Crystal",
    "Elixir",
    "Expect",
    "Fish",
    "Gherkin",
    "Janet",
    "Jupyter Notebook",
    "KakouneScript",
    "Makefile",
    "Meson",
    "Nearley",
    "Nu",
    "Plan9 Shell",
    "PRQL",
    "R",
    "RAML",
    "Rego",
    "sed",
    "Starlark",
    "Tcl/Tk",
    "TOML",
    "YAML",
    "Zsh",
];

/// Languages without any comment syntax.
const NO_COMMENTS: &[&str] = &[
    "JSON",
    "Markdown",
    "Plain Text",
    "ReStructuredText",
    "RMarkdown",
    "Unity-Prefab",
];

/// Every language of the built-in catalog.
pub(super) fn builtin_definitions() -> Vec<LanguageDefinition> {
    let mut defs: Vec<LanguageDefinition> = Vec::with_capacity(200);

    defs.extend(
        C_FAMILY
            .iter()
            .map(|name| LanguageDefinition::new(name, &["//"], C_STYLE)),
    );
    defs.extend(
        HASH_ONLY
            .iter()
            .map(|name| LanguageDefinition::new(name, &["#"], NONE)),
    );
    defs.extend(
        NO_COMMENTS
            .iter()
            .map(|name| LanguageDefinition::new(name, &[], NONE)),
    );

    for name in ["OCaml", "Standard ML", "Isabelle", "Coq"] {
        defs.push(LanguageDefinition::new(name, &[], ML_STYLE));
    }
    for name in ["F#", "F*"] {
        defs.push(LanguageDefinition::new(name, &["//"], ML_STYLE));
    }
    for name in ["Python", "Cython", "Vyper", "Mojo"] {
        defs.push(LanguageDefinition::new(name, &["#"], PY_STYLE));
    }
    for name in ["Haskell", "Elm", "Dhall", "Frege", "Idris"] {
        defs.push(LanguageDefinition::new(name, &["--"], HASKELL_STYLE));
    }
    for name in ["LISP", "Racket", "Scheme"] {
        defs.push(LanguageDefinition::new(name, &[";;", ";"], LISP_STYLE));
    }
    for name in ["PHP", "Ring", "HCL", "Io"] {
        defs.push(LanguageDefinition::new(name, &["#", "//"], C_STYLE));
    }
    for name in ["Zig", "Hare", "Cairo", "Carbon", "Ballerina", "Gleam"] {
        defs.push(LanguageDefinition::new(name, &["//"], NONE));
    }
    for name in ["Hy", "Carp", "Red", "Rebol"] {
        defs.push(LanguageDefinition::new(name, &[";"], NONE));
    }
    for name in ["Ada", "Eiffel"] {
        defs.push(LanguageDefinition::new(name, &["--"], NONE));
    }
    for name in ["Erlang", "TeX"] {
        defs.push(LanguageDefinition::new(name, &["%"], NONE));
    }
    for name in ["Mercury", "Logtalk"] {
        defs.push(LanguageDefinition::new(name, &["%"], C_STYLE));
    }
    for name in ["AutoHotkey", "SKILL"] {
        defs.push(LanguageDefinition::new(name, &[";"], C_STYLE));
    }
    for name in ["Nix", "LiveScript"] {
        defs.push(LanguageDefinition::new(name, &["#"], C_STYLE));
    }
    for name in ["CoffeeScript", "Imba"] {
        defs.push(LanguageDefinition::new(name, &["#"], &[("###", "###")]));
    }
    for name in ["Lua", "Terra"] {
        defs.push(LanguageDefinition::new(name, &["--"], &[("--[[", "]]")]));
    }
    for name in [
        "Ant",
        "Maven",
        "MSBuild script",
        "Polly",
        "Ruby HTML",
        "WiX",
        "XML",
        "XML resource",
        "XSD",
        "XSLT",
    ] {
        defs.push(LanguageDefinition::new(name, &["<!--"], XML_STYLE));
    }
    for name in ["Vue", "Svelte"] {
        defs.push(LanguageDefinition::new(
            name,
            &["//"],
            &[("<!--", "-->"), ("/*", "*/")],
        ));
    }

    defs.extend([
        LanguageDefinition::new(
            "Assembly",
            &["//", ";", "#", "@", "|", "!"],
            C_STYLE,
        ),
        LanguageDefinition::new("AsciiDoc", &["//"], &[("////", "////")]),
        LanguageDefinition::new("ATS", &["//"], &[("(*", "*)"), ("/*", "*/")]),
        LanguageDefinition::new("Berry", &["#"], &[("#-", "-#")]),
        LanguageDefinition::new("Clojure", &[";", "#_"], NONE),
        LanguageDefinition::new("CMake", &["#"], &[("#[[", "]]")]),
        LanguageDefinition::new("COBOL", &["*", "/"], NONE),
        LanguageDefinition::new("ColdFusion", &[], &[("<!---", "--->")]),
        LanguageDefinition::new("D", &["//"], &[("/*", "*/"), ("/+", "+/")]),
        LanguageDefinition::new("Factor", &["! "], NONE),
        LanguageDefinition::new("FORTRAN Modern", &["!"], NONE),
        LanguageDefinition::new(
            "Handlebars",
            &[],
            &[("<!--", "-->"), ("{{!", "}}")],
        ),
        LanguageDefinition::new("HTML", &["//", "<!--"], XML_STYLE),
        LanguageDefinition::new("Inno Setup", &[";", "//"], ML_STYLE),
        LanguageDefinition::new("Julia", &["#"], &[("#=", "=#")]),
        LanguageDefinition::new("Lean", &["--"], &[("/-", "-/")]),
        LanguageDefinition::new("lex", &[], C_STYLE),
        LanguageDefinition::new("Lilypond", &["%"], &[("%{", "%}")]),
        LanguageDefinition::new("M4", &["#", "dnl"], NONE),
        LanguageDefinition::new("MATLAB", &["%"], &[("%{", "}%")]),
        LanguageDefinition::new("Mustache", &[], &[("{{!", "}}")]),
        LanguageDefinition::new("Nim", &["#"], &[("#[", "]#")]),
        LanguageDefinition::new("NSIS", &["#", ";"], C_STYLE),
        LanguageDefinition::new("Nunjucks", &[], &[("{#", "#}"), ("<!--", "-->")]),
        LanguageDefinition::new("Pascal", &["//"], &[("{", "}"), ("(*", "*)")]),
        LanguageDefinition::new("Perl", &["#"], &[("=pod", "=cut")]),
        LanguageDefinition::new("PowerShell", &["#"], &[("<#", "#>")]),
        LanguageDefinition::new("Q", &["/"], NONE),
        LanguageDefinition::new("Ruby", &["#"], &[("=begin", "=end")]),
        LanguageDefinition::new("Rust", &["//", "///", "//!"], C_STYLE),
        LanguageDefinition::new("SQL", &["--"], C_STYLE),
        LanguageDefinition::new("Stan", &["//", "#"], C_STYLE),
        LanguageDefinition::new("TLA", &["\\*"], ML_STYLE),
        LanguageDefinition::new("VimL", &["\""], NONE),
        LanguageDefinition::new("Visual Basic", &["'"], NONE),
    ]);

    defs.push(regex_language("Just", &["#"], NONE, &[r"^#[^!].*"]));
    defs.push(regex_language(
        "Batch",
        &["REM", "rem", "::"],
        NONE,
        &[r"(?i)^(rem(\s|$)|::)"],
    ));
    defs.push(regex_language(
        "FORTRAN Legacy",
        &["c", "C", "!", "*"],
        NONE,
        &[r"^!", r"^[cC*](\s|$)"],
    ));

    defs
}

/// Build a definition with regex line comments.
fn regex_language(
    name: &str,
    line_comments: &[&str],
    block_comments: &[(&str, &str)],
    patterns: &[&str],
) -> LanguageDefinition {
    LanguageDefinition::new(name, line_comments, block_comments)
        .with_regex_line_comments(patterns)
        .expect("built-in line comment patterns are valid")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_names_unique() {
        let defs = builtin_definitions();
        let mut seen = HashSet::new();
        for def in &defs {
            assert!(seen.insert(def.name().to_string()), "{} twice", def.name());
        }
    }

    #[test]
    fn test_delimiters_non_empty() {
        for def in builtin_definitions() {
            for pair in def.block_comments() {
                assert!(!pair.begin.is_empty(), "{}", def.name());
                assert!(!pair.end.is_empty(), "{}", def.name());
            }
        }
    }

    #[test]
    fn test_sentinel_languages_have_no_pairs() {
        let defs = builtin_definitions();
        let makefile = defs.iter().find(|d| d.name() == "Makefile").unwrap();
        assert!(makefile.block_comments().is_empty());
        assert_eq!(makefile.line_comments(), &["#".to_string()]);
    }

    #[test]
    fn test_batch_regex_is_case_insensitive() {
        let defs = builtin_definitions();
        let batch = defs.iter().find(|d| d.name() == "Batch").unwrap();
        assert!(batch.is_line_comment("REM hello"));
        assert!(batch.is_line_comment("rem"));
        assert!(batch.is_line_comment(":: label comment"));
        assert!(!batch.is_line_comment("remove.exe"));
    }
}
