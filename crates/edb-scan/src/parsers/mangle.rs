//! Parser for the `mangle` logic-rule DSL. No full grammar: a lightweight
//! text splitter extracts `name/arity` predicate signatures — both the
//! head of a rule/fact and every predicate reference in its body — one
//! per occurrence on the line.

use std::path::Path;

use edb_core::errors::ParseError;
use edb_core::facts::{CodeElement, ElementType, Fact, FactArg, Visibility};
use edb_core::FxHashSet;

use super::traits::{LanguageParser, ParseResult};
use crate::scanner::language_detect::Language;

pub struct MangleParser;

impl LanguageParser for MangleParser {
    fn language(&self) -> Language {
        Language::Mangle
    }

    fn parse(&self, source: &[u8], path: &Path) -> Result<ParseResult, ParseError> {
        let text = std::str::from_utf8(source).map_err(|_| ParseError::InvalidUtf8 {
            path: path.to_path_buf(),
        })?;

        let package = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("mangle")
            .to_string();

        let mut elements = Vec::new();
        let mut facts = Vec::new();
        let mut seen: FxHashSet<String> = FxHashSet::default();

        for (line_idx, line) in text.lines().enumerate() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with("//") {
                continue;
            }
            let line_no = line_idx as u32 + 1;

            for (name, arity) in extract_predicate_calls(trimmed) {
                // `pred:{name}/{arity}` — mangle predicates have no
                // surrounding package/file scoping, only a signature.
                let ref_id = format!("pred:{}/{}", name, arity);
                if !seen.insert(ref_id.clone()) {
                    continue;
                }
                let signature = format!("{}/{}", name, arity);

                elements.push(CodeElement {
                    ref_id: ref_id.clone(),
                    elem_type: ElementType::Predicate,
                    file_path: path.to_path_buf(),
                    start_line: line_no,
                    end_line: line_no,
                    signature: signature.clone(),
                    body: None,
                    parent: None,
                    visibility: Visibility::Public,
                    package: package.clone(),
                    name: name.clone(),
                });
                facts.push(Fact::new(
                    "code_defines",
                    vec![
                        FactArg::str(path.to_string_lossy()),
                        FactArg::str(ref_id),
                        FactArg::atom("/predicate"),
                        FactArg::Int(line_no as i64),
                        FactArg::Int(line_no as i64),
                    ],
                ));
            }
        }

        Ok(ParseResult { elements, facts })
    }
}

/// Scans a line for every `name(args)` occurrence — the rule head and
/// every predicate reference in the body alike — and returns each as
/// `(name, arity)`. Assumes flat (non-nested) argument lists, which holds
/// for mangle's rule/fact syntax.
fn extract_predicate_calls(line: &str) -> Vec<(String, usize)> {
    let bytes = line.as_bytes();
    let mut calls = Vec::new();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i].is_ascii_alphabetic() || bytes[i] == b'_' {
            let start = i;
            while i < bytes.len() && (bytes[i].is_ascii_alphanumeric() || bytes[i] == b'_') {
                i += 1;
            }
            if i < bytes.len() && bytes[i] == b'(' {
                let open = i;
                if let Some(rel_close) = line[open..].find(')') {
                    let close = open + rel_close;
                    let name = &line[start..open];
                    let args = &line[open + 1..close];
                    let arity = if args.trim().is_empty() {
                        0
                    } else {
                        args.split(',').count()
                    };
                    calls.push((name.to_string(), arity));
                    i = close + 1;
                    continue;
                }
            }
        } else {
            i += 1;
        }
    }
    calls
}
