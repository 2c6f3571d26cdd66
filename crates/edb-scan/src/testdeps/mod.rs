//! TestDependencyBuilder (C6): test -> source dependency graph and impact
//! queries.

pub mod builder;
pub mod types;

pub use builder::TestDependencyBuilder;
pub use types::{CoverageGap, ImpactedTestInfo, Priority};
