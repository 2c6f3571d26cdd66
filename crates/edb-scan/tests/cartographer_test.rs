use edb_core::facts::{CodeElement, ElementType, Visibility};
use edb_core::CartographerConfig;
use edb_scan::cartographer::Cartographer;
use edb_scan::parsers::ParserPool;
use edb_scan::scanner::Language;
use std::path::Path;

fn hash_of(bytes: &[u8]) -> [u8; 32] {
    use sha2::{Digest, Sha256};
    Sha256::digest(bytes).into()
}

#[test]
fn deep_pass_emits_symbol_graph_for_every_element() {
    let cartographer = Cartographer::new(CartographerConfig::default());
    let source = "fn helper() {}\n";
    let element = CodeElement {
        ref_id: "fn:pkg.helper".to_string(),
        elem_type: ElementType::Function,
        file_path: Path::new("lib.rs").to_path_buf(),
        start_line: 1,
        end_line: 1,
        signature: "helper".to_string(),
        body: None,
        parent: None,
        visibility: Visibility::Public,
        package: "pkg".to_string(),
        name: "helper".to_string(),
    };

    let facts = cartographer.map_file(
        Path::new("lib.rs"),
        hash_of(source.as_bytes()),
        Language::Rust,
        source,
        &[element],
    );

    assert!(facts.iter().any(|f| f.predicate == "symbol_graph"));
}

#[test]
fn deep_pass_is_cached_by_content_hash_and_analyzer_version() {
    let cartographer = Cartographer::new(CartographerConfig::default());
    let source = "fn a() {}\n";
    let hash = hash_of(source.as_bytes());

    let first = cartographer.map_file(Path::new("a.rs"), hash, Language::Rust, source, &[]);
    // Same fingerprint, different (empty) elements input — cache should win
    // and the dependency_link scan should not rerun.
    let second = cartographer.map_file(Path::new("a.rs"), hash, Language::Rust, "fn b() {}\n", &[]);

    assert_eq!(first.len(), second.len());
}

#[test]
fn mangle_rule_emits_symbol_graph_for_head_and_body_predicates() {
    let pool = ParserPool::new();
    let source = "foo(X,Y) :- bar(X,Y).\n";
    let parsed = pool
        .parse(Language::Mangle, Path::new("rules.mg"), source.as_bytes())
        .unwrap();

    let cartographer = Cartographer::new(CartographerConfig::default());
    let facts = cartographer.map_file(
        Path::new("rules.mg"),
        hash_of(source.as_bytes()),
        Language::Mangle,
        source,
        &parsed.elements,
    );

    let symbol_ids: Vec<&str> = facts
        .iter()
        .filter(|f| f.predicate == "symbol_graph")
        .filter_map(|f| f.args.first().and_then(|a| a.as_str()))
        .collect();
    assert!(symbol_ids.contains(&"pred:foo/2"));
    assert!(symbol_ids.contains(&"pred:bar/2"));
}

#[test]
fn python_imports_become_dependency_links() {
    let cartographer = Cartographer::new(CartographerConfig::default());
    let source = "import os\nfrom pkg.mod import thing\n";
    let facts = cartographer.map_file(
        Path::new("a.py"),
        hash_of(source.as_bytes()),
        Language::Python,
        source,
        &[],
    );

    assert!(facts.iter().any(|f| f.predicate == "dependency_link"));
}
