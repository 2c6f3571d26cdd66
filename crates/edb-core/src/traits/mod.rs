//! External collaborator interfaces and cross-cutting primitives. The
//! persistent fact store and the logical reasoner are out of scope for this
//! crate; only the contracts the scanner, Cartographer, and test-dependency
//! builder use to talk to them are defined here.

pub mod cancellation;
pub mod graph_query;
pub mod kernel;

pub use cancellation::CancellationToken;
pub use graph_query::GraphQuery;
pub use kernel::{Kernel, KernelQuerier};
