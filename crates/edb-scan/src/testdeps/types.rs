#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    High,
    Medium,
}

/// One row of `getImpactedTests`.
#[derive(Debug, Clone)]
pub struct ImpactedTestInfo {
    pub test_ref: String,
    pub test_file: String,
    pub priority: Priority,
    pub reason: &'static str,
    pub edited_refs: Vec<String>,
}

/// A public ref with no test coverage: it is neither a dependency target
/// nor a test function itself. Surfaced by
/// [`super::builder::TestDependencyBuilder::coverage_gaps`].
#[derive(Debug, Clone)]
pub struct CoverageGap {
    pub symbol_ref: String,
    pub file_path: String,
}
