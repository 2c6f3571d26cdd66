use edb_core::facts::{Fact, FactArg};
use edb_core::traits::KernelQuerier;
use edb_core::{FxHashMap, TestDependencyConfig};
use edb_scan::testdeps::{Priority, TestDependencyBuilder};

/// An in-memory `KernelQuerier` for tests: groups facts by predicate so the
/// builder can `query("predicate")` without a real Kernel.
struct FakeKernel {
    by_predicate: FxHashMap<String, Vec<Fact>>,
}

impl FakeKernel {
    fn new(facts: Vec<Fact>) -> Self {
        let mut by_predicate: FxHashMap<String, Vec<Fact>> = FxHashMap::default();
        for fact in facts {
            by_predicate.entry(fact.predicate.clone()).or_default().push(fact);
        }
        Self { by_predicate }
    }
}

impl KernelQuerier for FakeKernel {
    fn query(&self, predicate: &str) -> Vec<Fact> {
        self.by_predicate.get(predicate).cloned().unwrap_or_default()
    }
}

fn topology(path: &str, is_test: bool) -> Fact {
    Fact::new(
        "file_topology",
        vec![
            FactArg::str(path),
            FactArg::str("deadbeef"),
            FactArg::atom("/rust"),
            FactArg::Int(0),
            FactArg::atom(if is_test { "/true" } else { "/false" }),
        ],
    )
}

fn defines(file: &str, symbol_id: &str) -> Fact {
    Fact::new(
        "code_defines",
        vec![
            FactArg::str(file),
            FactArg::str(symbol_id),
            FactArg::atom("/function"),
            FactArg::Int(1),
            FactArg::Int(5),
        ],
    )
}

fn symbol(symbol_id: &str, visibility: &str, file: &str) -> Fact {
    Fact::new(
        "symbol_graph",
        vec![
            FactArg::str(symbol_id),
            FactArg::atom("/function"),
            FactArg::atom(visibility),
            FactArg::str(file),
            FactArg::str(symbol_id),
        ],
    )
}

#[test]
fn direct_call_from_test_function_becomes_high_priority_on_edit() {
    let facts = vec![
        topology("src/math.rs", false),
        topology("tests/math_test.rs", true),
        defines("src/math.rs", "fn:src.math.add"),
        defines("tests/math_test.rs", "fn:tests.math_test.test_add"),
        Fact::new(
            "code_calls",
            vec![
                FactArg::str("fn:tests.math_test.test_add"),
                FactArg::str("fn:src.math.add"),
            ],
        ),
    ];
    let kernel = FakeKernel::new(facts);
    let builder = TestDependencyBuilder::new(TestDependencyConfig::default());
    builder.build(&kernel);

    let impacted = builder.get_impacted_tests(&["fn:src.math.add".to_string()]);
    assert_eq!(impacted.len(), 1);
    assert_eq!(impacted[0].priority, Priority::High);
    assert_eq!(impacted[0].test_ref, "fn:tests.math_test.test_add");
}

#[test]
fn file_level_import_expands_to_impact_on_edit() {
    // No direct code_calls edge; the only link is a file-level import from
    // the test file to the module that defines the edited symbol.
    let facts = vec![
        topology("src/strings.rs", false),
        topology("tests/strings_test.rs", true),
        defines("src/strings.rs", "fn:src.strings.reverse"),
        defines("tests/strings_test.rs", "fn:tests.strings_test.test_reverse"),
        Fact::new(
            "dependency_link",
            vec![
                FactArg::str("fn:tests.strings_test.test_reverse"),
                FactArg::str("import:strings"),
                FactArg::str("crate::strings"),
            ],
        ),
    ];
    let kernel = FakeKernel::new(facts);
    let builder = TestDependencyBuilder::new(TestDependencyConfig::default());
    builder.build(&kernel);

    let impacted = builder.get_impacted_tests(&["fn:src.strings.reverse".to_string()]);
    assert_eq!(impacted.len(), 1);
    assert_eq!(impacted[0].test_ref, "fn:tests.strings_test.test_reverse");
}

#[test]
fn unrelated_edit_does_not_impact_test() {
    let facts = vec![
        topology("src/math.rs", false),
        topology("tests/math_test.rs", true),
        defines("src/math.rs", "fn:src.math.add"),
        defines("tests/math_test.rs", "fn:tests.math_test.test_add"),
        Fact::new(
            "code_calls",
            vec![
                FactArg::str("fn:tests.math_test.test_add"),
                FactArg::str("fn:src.math.add"),
            ],
        ),
    ];
    let kernel = FakeKernel::new(facts);
    let builder = TestDependencyBuilder::new(TestDependencyConfig::default());
    builder.build(&kernel);

    let impacted = builder.get_impacted_tests(&["fn:src.other.unrelated".to_string()]);
    assert!(impacted.is_empty());
}

#[test]
fn uncalled_public_symbol_is_a_coverage_gap() {
    let facts = vec![
        topology("src/math.rs", false),
        topology("tests/math_test.rs", true),
        defines("src/math.rs", "fn:src.math.add"),
        defines("src/math.rs", "fn:src.math.orphan"),
        defines("tests/math_test.rs", "fn:tests.math_test.test_add"),
        symbol("fn:src.math.add", "/public", "src/math.rs"),
        symbol("fn:src.math.orphan", "/public", "src/math.rs"),
        symbol(
            "fn:tests.math_test.test_add",
            "/public",
            "tests/math_test.rs",
        ),
        Fact::new(
            "code_calls",
            vec![
                FactArg::str("fn:tests.math_test.test_add"),
                FactArg::str("fn:src.math.add"),
            ],
        ),
    ];
    let kernel = FakeKernel::new(facts);
    let builder = TestDependencyBuilder::new(TestDependencyConfig::default());
    builder.build(&kernel);

    let gaps = builder.coverage_gaps();
    assert_eq!(gaps.len(), 1);
    assert_eq!(gaps[0].symbol_ref, "fn:src.math.orphan");
}
