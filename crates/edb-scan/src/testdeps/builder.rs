//! TestDependencyBuilder (C6): consumes facts via a `KernelQuerier`,
//! builds a test -> source dependency graph, and answers impact queries.

use std::path::Path;
use std::sync::RwLock;

use edb_core::traits::KernelQuerier;
use edb_core::{FxHashMap, FxHashSet, TestDependencyConfig};

use crate::scanner::language_detect::is_test_file;

use super::types::{CoverageGap, ImpactedTestInfo, Priority};

#[derive(Default)]
struct Graph {
    test_files: FxHashSet<String>,
    test_funcs: FxHashSet<String>,
    dependencies: FxHashMap<String, FxHashSet<String>>,
    test_file_of: FxHashMap<String, String>,
    /// symbolId -> filePath, for every `/public` entry in `symbol_graph`.
    public_refs: FxHashMap<String, String>,
}

/// Internally synchronized with a single read-write lock: readers
/// (impact queries) and the one writer (build) never interleave partial
/// state.
pub struct TestDependencyBuilder {
    config: TestDependencyConfig,
    graph: RwLock<Graph>,
}

impl TestDependencyBuilder {
    pub fn new(config: TestDependencyConfig) -> Self {
        Self {
            config,
            graph: RwLock::new(Graph::default()),
        }
    }

    /// Runs the three build phases against whatever the querier
    /// currently has.
    pub fn build(&self, kernel: &dyn KernelQuerier) {
        let topology = kernel.query("file_topology");
        let defines = kernel.query("code_defines");
        let calls = kernel.query("code_calls");
        let dependency_links = kernel.query("dependency_link");
        let symbol_graph = kernel.query("symbol_graph");

        let mut graph = Graph::default();

        for fact in &symbol_graph {
            let (Some(symbol_id), Some(visibility), Some(file_path)) = (
                fact.args.first().and_then(|a| a.as_str()),
                fact.args.get(2).and_then(|a| a.as_str()),
                fact.args.get(3).and_then(|a| a.as_str()),
            ) else {
                continue;
            };
            if visibility == "/public" {
                graph
                    .public_refs
                    .insert(symbol_id.to_string(), file_path.to_string());
            }
        }

        // Phase 1: identify test files.
        let mut file_dir: FxHashMap<String, String> = FxHashMap::default();
        for fact in &topology {
            let Some(path) = fact.args.first().and_then(|a| a.as_str()) else {
                continue;
            };
            let path_buf = Path::new(path);
            if is_test_file(path_buf) {
                graph.test_files.insert(path.to_string());
            }
            if let Some(dir) = path_buf.parent() {
                file_dir.insert(path.to_string(), dir.to_string_lossy().to_string());
            }
        }

        // Phase 2: identify test functions, and map every symbolId -> its file.
        let mut symbol_file: FxHashMap<String, String> = FxHashMap::default();
        for fact in &defines {
            let (Some(file), Some(symbol_id)) = (
                fact.args.first().and_then(|a| a.as_str()),
                fact.args.get(1).and_then(|a| a.as_str()),
            ) else {
                continue;
            };
            symbol_file.insert(symbol_id.to_string(), file.to_string());
            if graph.test_files.contains(file) && is_test_function(symbol_id) {
                graph.test_funcs.insert(symbol_id.to_string());
                graph.test_file_of.insert(symbol_id.to_string(), file.to_string());
            }
        }

        // Phase 3a: direct code_calls from test functions.
        for fact in &calls {
            let (Some(caller), Some(callee)) = (
                fact.args.first().and_then(|a| a.as_str()),
                fact.args.get(1).and_then(|a| a.as_str()),
            ) else {
                continue;
            };
            if graph.test_funcs.contains(caller) {
                add_edge(&mut graph, caller, callee);
            }
        }

        // Derive file_imports(testFile, sourceFile). dependency_link's
        // toSymbolId is an unresolved external reference (no whole-project
        // symbol table is available to the Cartographer's per-file pass),
        // so the source file is instead resolved heuristically straight
        // from the importPath column: the last path/dotted segment is
        // matched against known files' stems.
        let known_files: Vec<&str> = file_dir.keys().map(|s| s.as_str()).collect();
        let mut file_imports: FxHashSet<(String, String)> = FxHashSet::default();
        for fact in &dependency_links {
            let (Some(from_id), Some(import_path)) = (
                fact.args.first().and_then(|a| a.as_str()),
                fact.args.get(2).and_then(|a| a.as_str()),
            ) else {
                continue;
            };
            let Some(from_file) = resolve_file_of(&symbol_file, from_id) else {
                continue;
            };
            if !graph.test_files.contains(from_file.as_str()) {
                continue;
            }
            if let Some(source_file) = resolve_import_path(import_path, &known_files) {
                file_imports.insert((from_file, source_file.to_string()));
            }
        }

        // Phase 3b: file-level imports, cross-product of test funcs in
        // testFile × all refs in sourceFile.
        let refs_by_file: FxHashMap<&str, Vec<&str>> = {
            let mut m: FxHashMap<&str, Vec<&str>> = FxHashMap::default();
            for (symbol_id, file) in &symbol_file {
                m.entry(file.as_str()).or_default().push(symbol_id.as_str());
            }
            m
        };

        for (test_file, source_file) in &file_imports {
            let test_funcs_in_file: Vec<&String> = graph
                .test_funcs
                .iter()
                .filter(|f| graph.test_file_of.get(*f).map(|s| s.as_str()) == Some(test_file.as_str()))
                .collect();
            if let Some(source_refs) = refs_by_file.get(source_file.as_str()) {
                for test_func in &test_funcs_in_file {
                    for source_ref in source_refs {
                        add_edge(&mut graph, test_func, source_ref);
                    }
                }
            }
        }

        // Phase 3c: same-package (directory siblings).
        for test_file in graph.test_files.clone() {
            let Some(dir) = file_dir.get(&test_file) else {
                continue;
            };
            let siblings: Vec<&String> = file_dir
                .iter()
                .filter(|(path, d)| *d == dir && !graph.test_files.contains(*path))
                .map(|(path, _)| path)
                .collect();
            let test_funcs_in_file: Vec<String> = graph
                .test_funcs
                .iter()
                .filter(|f| graph.test_file_of.get(*f).map(|s| s.as_str()) == Some(test_file.as_str()))
                .cloned()
                .collect();
            for sibling in siblings {
                if let Some(source_refs) = refs_by_file.get(sibling.as_str()) {
                    for test_func in &test_funcs_in_file {
                        for source_ref in source_refs {
                            add_edge(&mut graph, test_func, source_ref);
                        }
                    }
                }
            }
        }

        *self.graph.write().unwrap() = graph;
    }

    /// `getImpactedTests(editedRefs) -> [ImpactedTestInfo]`.
    pub fn get_impacted_tests(&self, edited_refs: &[String]) -> Vec<ImpactedTestInfo> {
        let graph = self.graph.read().unwrap();
        let edited: FxHashSet<&str> = edited_refs.iter().map(|s| s.as_str()).collect();
        let hop_limit = self.config.effective_impact_hop_limit();

        let mut results = Vec::new();
        for test_func in &graph.test_funcs {
            let Some(direct) = graph.dependencies.get(test_func) else {
                continue;
            };
            let direct_hit: Vec<String> = direct
                .iter()
                .filter(|d| edited.contains(d.as_str()))
                .cloned()
                .collect();

            let (priority, matched) = if !direct_hit.is_empty() {
                (Priority::High, direct_hit)
            } else if hop_limit >= 2 {
                let mut second_hop_hit = Vec::new();
                for dep in direct {
                    if let Some(dep_of_dep) = graph.dependencies.get(dep) {
                        second_hop_hit.extend(
                            dep_of_dep
                                .iter()
                                .filter(|d| edited.contains(d.as_str()))
                                .cloned(),
                        );
                    }
                }
                if second_hop_hit.is_empty() {
                    continue;
                }
                (Priority::Medium, second_hop_hit)
            } else {
                continue;
            };

            let test_file = graph
                .test_file_of
                .get(test_func)
                .cloned()
                .unwrap_or_default();
            results.push(ImpactedTestInfo {
                test_ref: test_func.clone(),
                test_file,
                priority,
                reason: "depends_on_edited_code",
                edited_refs: matched,
            });
        }
        results
    }

    /// Public refs that are never a dependency target and are not
    /// themselves test functions — the graph has no test covering them.
    pub fn coverage_gaps(&self) -> Vec<CoverageGap> {
        let graph = self.graph.read().unwrap();
        let targets: FxHashSet<&str> = graph
            .dependencies
            .values()
            .flat_map(|deps| deps.iter().map(|d| d.as_str()))
            .collect();

        graph
            .public_refs
            .iter()
            .filter(|(symbol_id, _)| {
                !targets.contains(symbol_id.as_str()) && !graph.test_funcs.contains(*symbol_id)
            })
            .map(|(symbol_id, file_path)| CoverageGap {
                symbol_ref: symbol_id.clone(),
                file_path: file_path.clone(),
            })
            .collect()
    }
}

/// Resolves a dependency_link's fromSymbolId back to a file: either a real
/// code_defines key, or the `file:{path}` synthetic ref the Cartographer
/// falls back to for a file with no elements of its own.
fn resolve_file_of(symbol_file: &FxHashMap<String, String>, symbol_id: &str) -> Option<String> {
    if let Some(file) = symbol_file.get(symbol_id) {
        return Some(file.clone());
    }
    symbol_id.strip_prefix("file:").map(|s| s.to_string())
}

/// Matches an importPath's last path/dotted segment against the stem of a
/// known file in this scan. Best-effort: import paths are module/package
/// identifiers, not literal file paths, so this is a heuristic, not a
/// resolver.
fn resolve_import_path<'a>(import_path: &str, known_files: &[&'a str]) -> Option<&'a str> {
    let segment = import_path
        .rsplit(['/', '.', ':'])
        .find(|s| !s.is_empty())?;
    known_files
        .iter()
        .copied()
        .find(|file| Path::new(file).file_stem().and_then(|s| s.to_str()) == Some(segment))
}

fn add_edge(graph: &mut Graph, from: &str, to: &str) {
    if from == to {
        return;
    }
    if graph.test_funcs.contains(to) {
        return;
    }
    graph
        .dependencies
        .entry(from.to_string())
        .or_default()
        .insert(to.to_string());
}

/// Language-specific test-function pattern match against a `ref`'s name
/// segment: Go `:Test[A-Z]`, Python `:test_`, TS
/// `:test|:it(|:describe(`, Rust `::test_`.
fn is_test_function(ref_id: &str) -> bool {
    let name = ref_id.rsplit('.').next().unwrap_or(ref_id);
    if ref_id.contains("::") {
        return name.starts_with("test_");
    }
    (name.starts_with("Test") && name.chars().nth(4).is_some_and(|c| c.is_ascii_uppercase()))
        || name.starts_with("test_")
        || name == "test"
        || name == "it"
        || name == "describe"
}
