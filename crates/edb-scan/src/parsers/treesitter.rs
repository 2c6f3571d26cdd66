//! Grammar-driven parser for the tree-sitter-backed languages. One
//! instance per language; extracts top-level function/method definitions
//! and call sites into CodeElements and `code_calls` facts.

use std::path::Path;

use edb_core::errors::ParseError;
use edb_core::facts::{CodeElement, ElementType, Fact, FactArg, Visibility};
use edb_core::FxHashMap;
use tree_sitter::{Language as TsLanguage, Node, Parser, Tree};

use super::traits::{LanguageParser, ParseResult};
use crate::scanner::language_detect::Language;

pub struct TreeSitterParser {
    language: Language,
    ts_language: TsLanguage,
    function_kinds: &'static [&'static str],
    call_kinds: &'static [&'static str],
}

impl TreeSitterParser {
    pub fn go() -> Self {
        Self {
            language: Language::Go,
            ts_language: tree_sitter_go::LANGUAGE.into(),
            function_kinds: &["function_declaration", "method_declaration"],
            call_kinds: &["call_expression"],
        }
    }

    pub fn python() -> Self {
        Self {
            language: Language::Python,
            ts_language: tree_sitter_python::LANGUAGE.into(),
            function_kinds: &["function_definition"],
            call_kinds: &["call"],
        }
    }

    pub fn rust() -> Self {
        Self {
            language: Language::Rust,
            ts_language: tree_sitter_rust::LANGUAGE.into(),
            function_kinds: &["function_item"],
            call_kinds: &["call_expression"],
        }
    }

    pub fn javascript() -> Self {
        Self {
            language: Language::JavaScript,
            ts_language: tree_sitter_javascript::LANGUAGE.into(),
            function_kinds: &["function_declaration", "method_definition"],
            call_kinds: &["call_expression"],
        }
    }

    pub fn typescript() -> Self {
        Self {
            language: Language::TypeScript,
            ts_language: tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
            function_kinds: &["function_declaration", "method_definition"],
            call_kinds: &["call_expression"],
        }
    }

    fn parse_tree(&self, source: &[u8], path: &Path) -> Result<Tree, ParseError> {
        let mut parser = Parser::new();
        parser
            .set_language(&self.ts_language)
            .map_err(|_| ParseError::LanguageSet {
                path: path.to_path_buf(),
            })?;
        parser.parse(source, None).ok_or_else(|| ParseError::EmptyTree {
            path: path.to_path_buf(),
        })
    }

    fn package_for(&self, path: &Path) -> String {
        path.parent()
            .map(|p| p.to_string_lossy().replace(['/', '\\'], "."))
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| "root".to_string())
    }

    fn node_name<'a>(&self, node: Node<'a>, source: &'a [u8]) -> Option<&'a str> {
        node.child_by_field_name("name")
            .and_then(|n| n.utf8_text(source).ok())
    }
}

impl LanguageParser for TreeSitterParser {
    fn language(&self) -> Language {
        self.language
    }

    fn parse(&self, source: &[u8], path: &Path) -> Result<ParseResult, ParseError> {
        let source_str = std::str::from_utf8(source).map_err(|_| ParseError::InvalidUtf8 {
            path: path.to_path_buf(),
        })?;
        let tree = self.parse_tree(source, path)?;
        let package = self.package_for(path);

        let mut elements = Vec::new();
        let mut facts = Vec::new();
        let mut fn_refs: Vec<(String, Node)> = Vec::new();
        // The current package's symbol table: bare name -> ref. code_calls
        // only resolves within it; a call to a name this file never
        // defines (an external/unresolvable callee) is dropped rather
        // than emitted with a raw text name.
        let mut by_name: FxHashMap<String, String> = FxHashMap::default();

        walk(tree.root_node(), &mut |node| {
            if self.function_kinds.contains(&node.kind()) {
                if let Some(name) = self.node_name(node, source) {
                    let elem_type = if node.kind().contains("method") {
                        ElementType::Method
                    } else {
                        ElementType::Function
                    };
                    let ref_id = CodeElement::build_ref(elem_type, &package, None, name);
                    let start = node.start_position().row as u32 + 1;
                    let end = node.end_position().row as u32 + 1;
                    elements.push(CodeElement {
                        ref_id: ref_id.clone(),
                        elem_type,
                        file_path: path.to_path_buf(),
                        start_line: start,
                        end_line: end,
                        signature: name.to_string(),
                        body: None,
                        parent: None,
                        visibility: Visibility::Public,
                        package: package.clone(),
                        name: name.to_string(),
                    });
                    facts.push(Fact::new(
                        "code_defines",
                        vec![
                            FactArg::str(path.to_string_lossy()),
                            FactArg::str(ref_id.clone()),
                            FactArg::atom(format!("/{:?}", elem_type).to_lowercase()),
                            FactArg::Int(start as i64),
                            FactArg::Int(end as i64),
                        ],
                    ));
                    by_name.insert(name.to_string(), ref_id.clone());
                    fn_refs.push((ref_id, node));
                }
            }
        });

        for (caller_ref, fn_node) in &fn_refs {
            walk(*fn_node, &mut |node| {
                if self.call_kinds.contains(&node.kind()) {
                    if let Some(callee_name) = call_callee_name(node, source_str) {
                        // Qualified calls (`self.helper()`, `pkg.Func()`) are
                        // resolved by their final segment.
                        let bare = callee_name.rsplit(['.', ':']).next().unwrap_or(&callee_name);
                        if let Some(callee_ref) = by_name.get(bare) {
                            facts.push(Fact::new(
                                "code_calls",
                                vec![FactArg::str(caller_ref.clone()), FactArg::str(callee_ref.clone())],
                            ));
                        }
                    }
                }
            });
        }

        Ok(ParseResult { elements, facts })
    }
}

fn walk<'a>(node: Node<'a>, visit: &mut impl FnMut(Node<'a>)) {
    visit(node);
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        walk(child, visit);
    }
}

fn call_callee_name(call_node: Node, source: &str) -> Option<String> {
    let func = call_node.child_by_field_name("function")?;
    func.utf8_text(source.as_bytes()).ok().map(|s| s.to_string())
}
