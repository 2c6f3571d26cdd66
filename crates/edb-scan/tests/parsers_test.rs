use edb_scan::parsers::ParserPool;
use edb_scan::scanner::Language;
use std::path::Path;

#[test]
fn rust_parser_extracts_functions_and_call_edges() {
    let pool = ParserPool::new();
    let source = b"fn add(a: i32, b: i32) -> i32 { a + b }\nfn run() { add(1, 2); }\n";
    let result = pool.parse(Language::Rust, Path::new("lib.rs"), source).unwrap();

    assert_eq!(result.elements.len(), 2);
    assert!(result.facts.iter().any(|f| f.predicate == "code_calls"));
}

#[test]
fn parse_cache_reuses_result_for_identical_bytes() {
    let pool = ParserPool::new();
    let source = b"fn only() {}\n";
    pool.parse(Language::Rust, Path::new("a.rs"), source).unwrap();
    pool.parse(Language::Rust, Path::new("b.rs"), source).unwrap();
    assert_eq!(pool.cache_entry_count(), 1, "identical bytes share a cache entry");
}

#[test]
fn unsupported_language_is_an_error_not_a_panic() {
    let pool = ParserPool::new();
    let result = pool.parse(Language::Json, Path::new("package.json"), b"{}");
    assert!(result.is_err());
}

#[test]
fn mangle_parser_extracts_predicate_signatures() {
    let pool = ParserPool::new();
    let source = b"parent(alice, bob).\nancestor(X, Y) :- parent(X, Y).\n";
    let result = pool
        .parse(Language::Mangle, Path::new("rules.mg"), source)
        .unwrap();

    assert!(result.elements.iter().any(|e| e.signature == "parent/2"));
    assert!(result.elements.iter().any(|e| e.signature == "ancestor/2"));
}

#[test]
fn mangle_parser_extracts_body_clause_predicates_too() {
    let pool = ParserPool::new();
    let source = b"foo(X,Y) :- bar(X,Y).\n";
    let result = pool
        .parse(Language::Mangle, Path::new("rules.mg"), source)
        .unwrap();

    assert!(result
        .elements
        .iter()
        .any(|e| e.ref_id == "pred:foo/2" && e.signature == "foo/2"));
    assert!(result
        .elements
        .iter()
        .any(|e| e.ref_id == "pred:bar/2" && e.signature == "bar/2"));
}
