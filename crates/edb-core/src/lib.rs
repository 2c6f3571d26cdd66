//! # edb-core
//!
//! Foundation crate for the incremental workspace indexer: the `Fact`/
//! `CodeElement` data model, the configuration structs, the error
//! taxonomy, the scan-progress event/handler trait, and the `Kernel` /
//! `KernelQuerier` / `GraphQuery` collaborator interfaces. `edb-scan`
//! depends on this crate for all shared types.

#![allow(dead_code)]

pub mod collections;
pub mod config;
pub mod errors;
pub mod events;
pub mod facts;
pub mod traits;

pub use collections::{FxHashMap, FxHashSet};
pub use config::{CartographerConfig, ScanConfig, TestDependencyConfig};
pub use errors::{CacheError, ErrorCode, ParseError, ScanError};
pub use events::{
    NoOpHandler, ScanCompleteEvent, ScanErrorEvent, ScanEventHandler, ScanProgressEvent,
    ScanStartedEvent,
};
pub use facts::{CodeElement, ElementType, Fact, FactArg, Visibility};
pub use traits::{CancellationToken, GraphQuery, Kernel, KernelQuerier};
