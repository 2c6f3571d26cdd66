use crate::facts::Fact;

/// The persistent fact store. Out of scope for this crate: only the
/// interface the scanner/Cartographer/controller use to hand off facts is
/// specified here.
pub trait Kernel: Send + Sync {
    /// Returns every fact currently stored under `predicate`.
    fn query(&self, predicate: &str) -> Vec<Fact>;

    /// Applies an incremental delta: `added` facts are inserted, `removed`
    /// facts are retracted.
    fn apply(&self, added: Vec<Fact>, removed: Vec<Fact>);
}

/// The narrower read-only view of a [`Kernel`] that the TestDependencyBuilder
/// (C6) consumes. Kept separate from [`Kernel`] because C6 never applies
/// deltas, only queries.
pub trait KernelQuerier: Send + Sync {
    fn query(&self, predicate: &str) -> Vec<Fact>;
}

impl<T: Kernel> KernelQuerier for T {
    fn query(&self, predicate: &str) -> Vec<Fact> {
        Kernel::query(self, predicate)
    }
}
