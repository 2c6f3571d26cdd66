//! LanguageDetector (C2): pure table lookup by lowercased extension, with a
//! second table for basename specials. No I/O, no heuristics beyond name
//! matching.

use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Go,
    Mangle,
    Python,
    JavaScript,
    TypeScript,
    Rust,
    Java,
    C,
    Cpp,
    CSharp,
    Ruby,
    Php,
    Yaml,
    Json,
    Toml,
    Markdown,
    Unknown,
}

impl Language {
    pub fn tag(self) -> &'static str {
        match self {
            Language::Go => "go",
            Language::Mangle => "mangle",
            Language::Python => "python",
            Language::JavaScript => "javascript",
            Language::TypeScript => "typescript",
            Language::Rust => "rust",
            Language::Java => "java",
            Language::C => "c",
            Language::Cpp => "cpp",
            Language::CSharp => "csharp",
            Language::Ruby => "ruby",
            Language::Php => "php",
            Language::Yaml => "yaml",
            Language::Json => "json",
            Language::Toml => "toml",
            Language::Markdown => "markdown",
            Language::Unknown => "unknown",
        }
    }

    /// Whether the ParserPool (C3) has a grammar for this language.
    pub fn is_parser_supported(self) -> bool {
        matches!(
            self,
            Language::Go
                | Language::Mangle
                | Language::Python
                | Language::JavaScript
                | Language::TypeScript
                | Language::Rust
        )
    }

    fn from_extension(ext: &str) -> Option<Language> {
        Some(match ext {
            "go" => Language::Go,
            "mg" | "mangle" => Language::Mangle,
            "py" | "pyi" => Language::Python,
            "js" | "jsx" | "mjs" | "cjs" => Language::JavaScript,
            "ts" | "tsx" | "mts" | "cts" => Language::TypeScript,
            "rs" => Language::Rust,
            "java" => Language::Java,
            "c" | "h" => Language::C,
            "cc" | "cpp" | "cxx" | "hpp" | "hh" => Language::Cpp,
            "cs" => Language::CSharp,
            "rb" => Language::Ruby,
            "php" => Language::Php,
            "yaml" | "yml" => Language::Yaml,
            "json" => Language::Json,
            "toml" => Language::Toml,
            "md" | "markdown" => Language::Markdown,
            _ => return None,
        })
    }

    fn from_basename(basename: &str) -> Option<Language> {
        Some(match basename {
            "Dockerfile" => Language::Unknown,
            "Makefile" => Language::Unknown,
            "go.mod" | "go.sum" => Language::Go,
            "package.json" | "tsconfig.json" => Language::Json,
            "Cargo.toml" | "Cargo.lock" => Language::Toml,
            _ => return None,
        })
    }

    /// (extension, basename) -> language tag. Basename specials take
    /// priority over the extension table.
    pub fn detect(path: &Path) -> Language {
        let basename = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default();
        if let Some(lang) = Language::from_basename(basename) {
            return lang;
        }
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        ext.and_then(|e| Language::from_extension(&e))
            .unwrap_or(Language::Unknown)
    }
}

/// `isTestFile(path)`: true if any of the listed suffix/prefix/path
/// heuristics match.
pub fn is_test_file(path: &Path) -> bool {
    let path_str = path.to_string_lossy().replace('\\', "/");
    let basename = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default();
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default();

    if basename.ends_with("_test.go") {
        return true;
    }
    if basename.starts_with("test_") || basename.ends_with("_test.py") {
        return true;
    }
    if basename.ends_with(".test.js")
        || basename.ends_with(".test.ts")
        || basename.ends_with(".test.tsx")
        || basename.ends_with(".spec.js")
        || basename.ends_with(".spec.ts")
        || basename.ends_with(".spec.tsx")
    {
        return true;
    }
    if basename.ends_with("Test.java") || basename.ends_with("Tests.java") {
        return true;
    }

    let components_test_dir = path.components().any(|c| {
        matches!(
            c.as_os_str().to_str(),
            Some("tests") | Some("test") | Some("__tests__")
        )
    });
    if components_test_dir && matches!(ext, "py" | "js" | "ts" | "tsx" | "rs") {
        return true;
    }
    if path_str.contains("tests") && ext == "rs" {
        return true;
    }

    false
}
