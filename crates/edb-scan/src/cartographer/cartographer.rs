//! Cartographer (C5): the deep-projection pass. Takes the CodeElements a
//! parser already found and enriches the fact stream with `symbol_graph`,
//! `dependency_link`, and language-specific attribute facts, with an
//! optional pluggable data-flow emitter layered on top.

use std::path::Path;

use edb_core::facts::{CodeElement, ElementType, Fact, FactArg};
use edb_core::CartographerConfig;
use regex::Regex;

use super::cache::DeepScanCache;
use super::dataflow::{DataFlowEmitter, NoOpDataFlowEmitter};
use crate::scanner::language_detect::Language;

pub struct Cartographer {
    config: CartographerConfig,
    cache: DeepScanCache,
    dataflow: Box<dyn DataFlowEmitter>,
    go_import_re: Regex,
    py_import_re: Regex,
    js_import_re: Regex,
    rust_use_re: Regex,
}

impl Cartographer {
    pub fn new(config: CartographerConfig) -> Self {
        let dataflow: Box<dyn DataFlowEmitter> = if config.enable_dataflow {
            Box::new(super::dataflow::GuardReturnDataFlowEmitter)
        } else {
            Box::new(NoOpDataFlowEmitter)
        };
        Self {
            cache: DeepScanCache::new(config.cache_capacity),
            config,
            dataflow,
            go_import_re: Regex::new(r#"(?m)^\s*"([\w./-]+)"\s*$"#).unwrap(),
            py_import_re: Regex::new(r"(?m)^\s*(?:from\s+([\w.]+)\s+import|import\s+([\w.]+))").unwrap(),
            js_import_re: Regex::new(r#"(?m)^\s*import\s+.*?from\s+['"]([^'"]+)['"]"#).unwrap(),
            rust_use_re: Regex::new(r"(?m)^\s*use\s+([\w:]+)").unwrap(),
        }
    }

    /// Runs the deep pass for one file, reusing the cache when the
    /// `(contentHash, analyzerVersion)` fingerprint matches a prior run.
    pub fn map_file(
        &self,
        path: &Path,
        content_hash: [u8; 32],
        language: Language,
        source: &str,
        elements: &[CodeElement],
    ) -> Vec<Fact> {
        if let Some(cached) = self.cache.get(content_hash, self.config.analyzer_version) {
            return cached;
        }

        let mut facts = Vec::new();

        for element in elements {
            facts.push(Fact::new(
                "symbol_graph",
                vec![
                    FactArg::str(element.ref_id.clone()),
                    FactArg::atom(format!("/{:?}", element.elem_type).to_lowercase()),
                    FactArg::atom(format!("/{:?}", element.visibility).to_lowercase()),
                    FactArg::str(element.file_path.to_string_lossy()),
                    FactArg::str(element.signature.clone()),
                ],
            ));

            if let (Some(parent), ElementType::Method) = (&element.parent, element.elem_type) {
                facts.push(Fact::new(
                    "method_of",
                    vec![FactArg::str(element.ref_id.clone()), FactArg::str(parent.clone())],
                ));
            }

            facts.extend(self.dataflow.emit(element));
        }

        // fromSymbolId must be a real symbolId (a code_defines key) so
        // TestDependencyBuilder can resolve it back to this file; fall
        // back to a synthetic file-level ref for files with no elements
        // of their own (e.g. a package's `__init__.py`).
        let from_symbol = elements
            .first()
            .map(|e| e.ref_id.clone())
            .unwrap_or_else(|| format!("file:{}", path.to_string_lossy()));

        for import_path in self.imports_for(language, source) {
            // toSymbolId can't be resolved to a real defining symbol from a
            // single file's deep pass — that needs a whole-project symbol
            // table this component doesn't have. Marked as an unresolved
            // external reference rather than faked as a real symbolId.
            facts.push(Fact::new(
                "dependency_link",
                vec![
                    FactArg::str(from_symbol.clone()),
                    FactArg::str(format!("import:{}", import_path)),
                    FactArg::str(import_path),
                ],
            ));
        }

        if language == Language::Go {
            facts.extend(self.go_attribute_facts(source, elements));
        }

        self.cache.insert(content_hash, self.config.analyzer_version, facts.clone());
        facts
    }

    fn imports_for(&self, language: Language, source: &str) -> Vec<String> {
        let regex = match language {
            Language::Go => &self.go_import_re,
            Language::Python => &self.py_import_re,
            Language::JavaScript | Language::TypeScript => &self.js_import_re,
            Language::Rust => &self.rust_use_re,
            _ => return Vec::new(),
        };
        regex
            .captures_iter(source)
            .filter_map(|cap| {
                cap.iter()
                    .skip(1)
                    .find_map(|m| m.map(|m| m.as_str().to_string()))
            })
            .collect()
    }

    /// `go_goroutine(ref)` / `go_returns_error(ref)` — lightweight textual
    /// heuristics over each function's body, not a real Go AST (see
    /// DESIGN.md).
    fn go_attribute_facts(&self, source: &str, elements: &[CodeElement]) -> Vec<Fact> {
        let mut facts = Vec::new();
        let lines: Vec<&str> = source.lines().collect();
        for element in elements {
            let start = element.start_line.saturating_sub(1) as usize;
            let end = (element.end_line as usize).min(lines.len());
            if start >= end {
                continue;
            }
            let body = lines[start..end].join("\n");
            if body.contains("go ") {
                facts.push(Fact::new(
                    "go_goroutine",
                    vec![FactArg::str(element.ref_id.clone())],
                ));
            }
            if body.contains("error") && element.signature.contains("error") {
                facts.push(Fact::new(
                    "go_returns_error",
                    vec![FactArg::str(element.ref_id.clone())],
                ));
            }
        }
        facts
    }
}
